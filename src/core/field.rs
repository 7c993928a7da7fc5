// Anti-gravity float field.
//
// Each tracked element gets a displacement every frame, built from three
// signals: an idle sine/cosine float, a push away from the pointer, and a
// damped spring that pulls the element's offset toward that push. Positions
// are compared in document space, so both the element center and the pointer
// carry the vertical scroll offset.

use super::config::{ElementOptions, FieldParams};
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;
use std::f32::consts::TAU;

/// Layout access for one element taking part in the field.
pub trait FloatNode {
    /// Current on-screen (viewport) center of the element, including any
    /// transform already applied to it.
    fn client_center(&self) -> Vec2;
    /// Write a 2D translation as the element's transform.
    fn apply_translation(&self, displacement: Vec2);
}

/// Simulation state for one tracked element.
#[derive(Clone, Debug)]
pub struct TrackedElement {
    pub anchor: Vec2,
    pub offset: Vec2,
    pub velocity: Vec2,
    pub float_speed: f32,
    pub repel: bool,
    pub phase: f32,
    pub displacement: Vec2,
}

impl TrackedElement {
    pub fn new(anchor: Vec2, options: ElementOptions, phase: f32) -> Self {
        Self {
            anchor,
            offset: Vec2::ZERO,
            velocity: Vec2::ZERO,
            float_speed: options.float_speed,
            repel: options.repel,
            phase,
            displacement: Vec2::ZERO,
        }
    }

    /// Advance one frame given the element's live document-space center and
    /// the pointer in document space (`None` while it is outside the page).
    /// Returns the displacement to apply.
    pub fn advance(
        &mut self,
        t: f32,
        center: Vec2,
        pointer: Option<Vec2>,
        params: &FieldParams,
    ) -> Vec2 {
        let float = float_displacement(t, self.float_speed, self.phase, params);
        let target = pointer.map_or(Vec2::ZERO, |p| repulsion(center, p, self.repel, params));
        self.velocity += (target - self.offset) * params.return_speed;
        self.velocity *= params.damping;
        self.offset += self.velocity;
        self.displacement = self.offset + float;
        self.displacement
    }
}

/// Idle float for an element at time `t` seconds.
#[inline]
pub fn float_displacement(t: f32, speed: f32, phase: f32, params: &FieldParams) -> Vec2 {
    let w = params.float_frequency * speed;
    let a = params.float_amplitude * speed;
    Vec2::new(
        (t * w * 0.5 + phase).cos() * a * 0.5,
        (t * w + phase).sin() * a,
    )
}

/// Period of the vertical float component, in seconds.
#[inline]
pub fn float_period(speed: f32, params: &FieldParams) -> f32 {
    TAU / (params.float_frequency * speed)
}

/// Repulsion target for an element centered at `center` with the pointer at
/// `pointer` (both document space). Zero when repulsion is disabled or the
/// pointer is out of range. A pointer exactly on the center pushes straight up.
#[inline]
pub fn repulsion(center: Vec2, pointer: Vec2, repel: bool, params: &FieldParams) -> Vec2 {
    if !repel {
        return Vec2::ZERO;
    }
    let d = center - pointer;
    let distance = d.length();
    if distance >= params.repulsion_range {
        return Vec2::ZERO;
    }
    let force = (1.0 - distance / params.repulsion_range) * params.repulsion_force;
    let dir = if distance > 0.0 { d / distance } else { Vec2::NEG_Y };
    dir * force
}

/// The set of tracked elements and the parameters that drive them.
pub struct FloatField<N: FloatNode> {
    pub params: FieldParams,
    entries: SmallVec<[(N, TrackedElement); 16]>,
}

impl<N: FloatNode> FloatField<N> {
    pub fn new(params: FieldParams) -> Self {
        Self {
            params,
            entries: SmallVec::new(),
        }
    }

    /// Drop every tracked element and track `nodes` from scratch. Each node's
    /// transform is cleared before its anchor is read from live layout; motion
    /// state is zeroed and phases are redrawn.
    pub fn rebuild<R: Rng>(
        &mut self,
        nodes: impl IntoIterator<Item = (N, ElementOptions)>,
        scroll_y: f32,
        rng: &mut R,
    ) {
        self.entries.clear();
        for (node, options) in nodes {
            node.apply_translation(Vec2::ZERO);
            let anchor = node.client_center() + Vec2::new(0.0, scroll_y);
            let phase = rng.gen_range(0.0..TAU);
            self.entries
                .push((node, TrackedElement::new(anchor, options, phase)));
        }
    }

    /// One animation frame. `t` is elapsed seconds and `pointer` is in
    /// document space, or `None` when the pointer has left the page.
    pub fn step(&mut self, t: f32, pointer: Option<Vec2>, scroll_y: f32) {
        let scroll = Vec2::new(0.0, scroll_y);
        let params = self.params;
        for (node, el) in self.entries.iter_mut() {
            let center = node.client_center() + scroll;
            let displacement = el.advance(t, center, pointer, &params);
            node.apply_translation(displacement);
        }
    }

    /// Largest distance between an element's anchor and where its layout
    /// center sits now with the last written displacement removed.
    pub fn max_anchor_drift(&self, scroll_y: f32) -> f32 {
        let scroll = Vec2::new(0.0, scroll_y);
        self.entries
            .iter()
            .map(|(node, el)| (node.client_center() + scroll - el.displacement).distance(el.anchor))
            .fold(0.0, f32::max)
    }

    pub fn elements(&self) -> impl Iterator<Item = &TrackedElement> {
        self.entries.iter().map(|(_, el)| el)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repulsion_at_range_boundary_is_zero() {
        let p = FieldParams::default();
        let center = Vec2::new(100.0, 100.0);
        let pointer = center - Vec2::new(p.repulsion_range, 0.0);
        assert_eq!(repulsion(center, pointer, true, &p), Vec2::ZERO);
    }

    #[test]
    fn repulsion_points_away_from_pointer() {
        let p = FieldParams::default();
        let r = repulsion(Vec2::new(50.0, 0.0), Vec2::ZERO, true, &p);
        assert!(r.x > 0.0);
        assert!(r.y.abs() < 1e-6);
        let expected = (1.0 - 50.0 / p.repulsion_range) * p.repulsion_force;
        assert!((r.x - expected).abs() < 1e-4);
    }
}
