// Tuning parameters for the effects, with lenient parsing from `data-*`
// attribute strings.
//
// Every parser here falls back to the default when a value is missing,
// unparsable, non-finite or outside its valid range. Nothing in this module
// returns an error.

use super::constants::*;

/// Parameters of the float field simulation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldParams {
    /// Idle oscillation angular frequency (rad/s) at float speed 1.
    pub float_frequency: f32,
    /// Idle oscillation amplitude (px) at float speed 1.
    pub float_amplitude: f32,
    /// Pointer distance (px) below which repulsion applies.
    pub repulsion_range: f32,
    /// Repulsion magnitude (px) at zero distance.
    pub repulsion_force: f32,
    /// Spring stiffness pulling the offset toward the repulsion target, in
    /// [0, 1). The spring diverges once this passes `(1 + d)² / d` for damping
    /// `d`, which is never below 4, so anything under 1 stays stable.
    pub return_speed: f32,
    /// Fraction of velocity kept each frame, in (0, 1].
    pub damping: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            float_frequency: FLOAT_FREQUENCY,
            float_amplitude: FLOAT_AMPLITUDE,
            repulsion_range: REPULSION_RANGE,
            repulsion_force: REPULSION_FORCE,
            return_speed: RETURN_SPEED,
            damping: DAMPING,
        }
    }
}

impl FieldParams {
    /// Build params from attribute lookups keyed by `data-*` suffix
    /// (e.g. `"repulsion-range"`). Unset or invalid entries keep the default.
    pub fn from_attrs(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let d = Self::default();
        Self {
            float_frequency: parse_f32_or(
                lookup("float-frequency").as_deref(),
                d.float_frequency,
                |v| v > 0.0,
            ),
            float_amplitude: parse_f32_or(
                lookup("float-amplitude").as_deref(),
                d.float_amplitude,
                |v| v >= 0.0,
            ),
            repulsion_range: parse_f32_or(
                lookup("repulsion-range").as_deref(),
                d.repulsion_range,
                |v| v > 0.0,
            ),
            repulsion_force: parse_f32_or(
                lookup("repulsion-force").as_deref(),
                d.repulsion_force,
                |v| v >= 0.0,
            ),
            return_speed: parse_f32_or(
                lookup("return-speed").as_deref(),
                d.return_speed,
                |v| (0.0..1.0).contains(&v),
            ),
            damping: parse_f32_or(lookup("damping").as_deref(), d.damping, |v| {
                v > 0.0 && v <= 1.0
            }),
        }
    }
}

/// Per-element options read from `data-float-speed` and `data-repel`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementOptions {
    pub float_speed: f32,
    pub repel: bool,
}

impl Default for ElementOptions {
    fn default() -> Self {
        Self {
            float_speed: DEFAULT_FLOAT_SPEED,
            repel: false,
        }
    }
}

impl ElementOptions {
    pub fn from_attrs(float_speed: Option<&str>, repel: Option<&str>) -> Self {
        Self {
            float_speed: parse_f32_or(float_speed, DEFAULT_FLOAT_SPEED, |v| v > 0.0),
            repel: repel.map(str::trim) == Some("true"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleParams {
    pub area_per_particle: f32,
    pub speed: f32,
    pub link_distance: f32,
    pub opacity: f32,
}

impl Default for ParticleParams {
    fn default() -> Self {
        Self {
            area_per_particle: PARTICLE_AREA_PER_COUNT,
            speed: PARTICLE_SPEED,
            link_distance: PARTICLE_LINK_DISTANCE,
            opacity: PARTICLE_OPACITY,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RainParams {
    pub font_size: u32,
    pub density: f32,
}

impl Default for RainParams {
    fn default() -> Self {
        Self {
            font_size: RAIN_FONT_SIZE,
            density: RAIN_DENSITY,
        }
    }
}

impl RainParams {
    pub fn from_attrs(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let d = Self::default();
        Self {
            font_size: lookup("matrix-font-size")
                .and_then(|s| s.trim().parse::<u32>().ok())
                .filter(|&v| v > 0)
                .unwrap_or(d.font_size),
            density: parse_f32_or(lookup("matrix-density").as_deref(), d.density, |v| {
                (0.0..=1.0).contains(&v)
            }),
        }
    }
}

/// All effect parameters, read once at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EffectsConfig {
    pub field: FieldParams,
    pub particles: ParticleParams,
    pub rain: RainParams,
}

impl EffectsConfig {
    pub fn from_attrs(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            field: FieldParams::from_attrs(&lookup),
            particles: ParticleParams::default(),
            rain: RainParams::from_attrs(&lookup),
        }
    }
}

/// Parse a float, keeping `default` unless the value is finite and accepted.
#[inline]
pub fn parse_f32_or(raw: Option<&str>, default: f32, accept: impl Fn(f32) -> bool) -> f32 {
    raw.and_then(|s| s.trim().parse::<f32>().ok())
        .filter(|v| v.is_finite() && accept(*v))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_options_fall_back_on_garbage() {
        let o = ElementOptions::from_attrs(Some("fast"), Some("yes"));
        assert_eq!(o.float_speed, DEFAULT_FLOAT_SPEED);
        assert!(!o.repel);
    }

    #[test]
    fn element_options_parse_valid_values() {
        let o = ElementOptions::from_attrs(Some(" 1.5 "), Some("true"));
        assert_eq!(o.float_speed, 1.5);
        assert!(o.repel);
    }
}
