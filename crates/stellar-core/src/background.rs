//! Fixed background star field.
//!
//! Positions come from a seedless trigonometric hash of the star index, not an
//! RNG, so every redraw paints the same field.

use crate::constants::{BACKGROUND_STAR_MAX_RADIUS, BACKGROUND_STAR_MIN_RADIUS};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackgroundStar {
    pub position: Vec2,
    pub radius: f32,
}

// fract(sin(x) * big) maps an index onto [0, 1)
#[inline]
fn hash01(index: usize, salt: f32) -> f32 {
    let h = ((index as f32 + 1.0) * salt).sin() * 43_758.547;
    h - h.floor()
}

pub fn background_star(index: usize, surface: Vec2) -> BackgroundStar {
    let u = hash01(index, 12.9898);
    let v = hash01(index, 78.233);
    let s = hash01(index, 37.719);
    BackgroundStar {
        position: Vec2::new(u * surface.x, v * surface.y),
        radius: BACKGROUND_STAR_MIN_RADIUS
            + s * (BACKGROUND_STAR_MAX_RADIUS - BACKGROUND_STAR_MIN_RADIUS),
    }
}

pub fn background_field(count: usize, surface: Vec2) -> impl Iterator<Item = BackgroundStar> {
    (0..count).map(move |i| background_star(i, surface))
}
