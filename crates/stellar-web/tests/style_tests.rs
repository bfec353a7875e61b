// Host-side tests for the star element CSS.
// The web crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod style {
    include!("../src/style.rs");
}

use stellar_core::StarParams;
use style::*;

fn star(luminosity: f32, temperature: f32) -> StarParams {
    StarParams {
        luminosity,
        temperature,
    }
}

#[test]
fn reference_star_style() {
    let look = StarParams::default().appearance();
    let css = StarStyle::from_appearance(&look);
    assert_eq!(css.width, "100.0px");
    assert_eq!(css.height, "100.0px");
    assert_eq!(
        css.background,
        "radial-gradient(circle at 35% 35%, #ffdd44, #cc9900)"
    );
    assert_eq!(css.box_shadow, "0 0 50.0px #ffaa00");
}

#[test]
fn clamped_sizes_reach_the_element() {
    let big = star(100.0, 2000.0).appearance();
    let css = StarStyle::from_appearance(&big);
    assert_eq!(css.width, "300.0px");
    assert_eq!(css.box_shadow, "0 0 150.0px #ff2200");

    let small = star(0.01, 12000.0).appearance();
    let css = StarStyle::from_appearance(&small);
    assert_eq!(css.height, "5.0px");
    assert!(css.background.contains("#aaddff, #4488ff"));
}

#[test]
fn properties_cover_every_output() {
    let look = StarParams::default().appearance();
    let css = StarStyle::from_appearance(&look);
    let props = css.properties();
    let names: Vec<_> = props.iter().map(|(n, _)| *n).collect();
    assert_eq!(names, ["width", "height", "background", "box-shadow"]);
    for (_, value) in css.properties() {
        assert!(!value.is_empty());
    }
}
