// Host-side tests for configuration parsing, parallax and pointer state.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod config {
        include!("../src/core/config.rs");
    }
    pub mod scroll {
        include!("../src/core/scroll.rs");
    }
}
mod input {
    include!("../src/input.rs");
}

use crate::core::config::*;
use crate::core::constants::*;
use crate::core::scroll::parallax;
use input::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn defaults_match_tuning_constants() {
    let p = FieldParams::default();
    assert_eq!(p.repulsion_range, 150.0);
    assert_eq!(p.repulsion_force, 80.0);
    assert_eq!(p.return_speed, 0.05);
    assert_eq!(p.damping, 0.9);
    assert_eq!(p.float_amplitude, 10.0);
    assert_eq!(EffectsConfig::from_attrs(|_: &str| None), EffectsConfig::default());
}

#[test]
fn field_params_accept_valid_overrides() {
    let p = FieldParams::from_attrs(lookup_from(&[
        ("repulsion-range", "200"),
        ("repulsion-force", " 40.5 "),
        ("damping", "0.8"),
    ]));
    assert_eq!(p.repulsion_range, 200.0);
    assert_eq!(p.repulsion_force, 40.5);
    assert_eq!(p.damping, 0.8);
    assert_eq!(p.return_speed, RETURN_SPEED);
}

#[test]
fn field_params_reject_invalid_overrides() {
    let p = FieldParams::from_attrs(lookup_from(&[
        ("repulsion-range", "-5"),
        ("damping", "1.5"),
        ("float-frequency", "NaN"),
        ("float-amplitude", "tall"),
        ("return-speed", "inf"),
    ]));
    assert_eq!(p, FieldParams::default());

    for stiff in ["1", "5"] {
        let p = FieldParams::from_attrs(lookup_from(&[("return-speed", stiff)]));
        assert_eq!(p.return_speed, RETURN_SPEED);
    }
    let p = FieldParams::from_attrs(lookup_from(&[("return-speed", "0.5")]));
    assert_eq!(p.return_speed, 0.5);
}

#[test]
fn element_options_fall_back_to_defaults() {
    assert_eq!(ElementOptions::from_attrs(None, None), ElementOptions::default());
    let o = ElementOptions::from_attrs(Some("0"), Some("TRUE"));
    assert_eq!(o.float_speed, DEFAULT_FLOAT_SPEED);
    assert!(!o.repel);
    let o = ElementOptions::from_attrs(Some("-2"), Some("false"));
    assert_eq!(o.float_speed, DEFAULT_FLOAT_SPEED);
    assert!(!o.repel);
    assert_eq!(ElementOptions::from_attrs(Some("0.5"), None).float_speed, 0.5);
}

#[test]
fn rain_params_parse_font_size() {
    let r = RainParams::from_attrs(lookup_from(&[("matrix-font-size", "18")]));
    assert_eq!(r.font_size, 18);
    let r = RainParams::from_attrs(lookup_from(&[
        ("matrix-font-size", "0"),
        ("matrix-density", "2"),
    ]));
    assert_eq!(r, RainParams::default());
}

#[test]
fn parallax_moves_and_fades() {
    assert_eq!(parallax(0.0), (0.0, 1.0));
    let (offset, opacity) = parallax(300.0);
    assert_eq!(offset, 150.0);
    assert!((opacity - 0.5).abs() < 1e-6);
    assert_eq!(parallax(1200.0).1, 0.0);
}

#[test]
fn pointer_document_position_includes_scroll() {
    let mut p = PointerState::default();
    p.move_to(glam::Vec2::new(10.0, 20.0));
    p.scroll_y = 300.0;
    assert!(p.inside);
    assert_eq!(p.document(), glam::Vec2::new(10.0, 320.0));
}

#[test]
fn pointer_starts_outside_document() {
    let p = PointerState::default();
    assert!(!p.inside);
    assert_eq!(p.inside.then(|| p.document()), None);
}

#[test]
fn rect_center_is_midpoint() {
    assert_eq!(rect_center(10.0, 20.0, 100.0, 40.0), glam::Vec2::new(60.0, 40.0));
}
