//! Scene configuration gathered from [`crate::constants`].
//!
//! `ParallaxScene` takes one of these on construction so tests and alternate
//! front-ends can run the same geometry against different layouts.

use crate::constants::*;
use glam::Vec2;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("orbit radius must be positive and finite, got {0}")]
    OrbitRadius(f32),
    #[error("orbit squash must be in (0, 1], got {0}")]
    OrbitSquash(f32),
    #[error("max parallax must be positive, got {0}")]
    MaxParallax(f32),
    #[error("resolution threshold must be in [0, max parallax), got {0}")]
    ResolutionThreshold(f32),
    #[error("far distance must be positive, got {0}")]
    FarDistance(f32),
    #[error("apparent-position extrapolation must be finite, got {0}")]
    Extrapolation(f32),
    #[error("target star offset must be finite, got {0}")]
    TargetStarOffset(f32),
    #[error("sun center fraction must lie in [0, 1], got ({0}, {1})")]
    SunCenter(f32, f32),
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub orbit_radius: f32,
    pub orbit_squash: f32,
    pub sun_center_fraction: Vec2,
    pub target_star_offset_y: f32,
    pub extrapolation: f32,
    pub max_parallax_arcsec: f32,
    pub min_resolvable_arcsec: f32,
    pub far_distance_pc: f32,
    pub background_stars: usize,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            orbit_radius: ORBIT_RADIUS,
            orbit_squash: ORBIT_SQUASH,
            sun_center_fraction: Vec2::from_array(SUN_CENTER_FRACTION),
            target_star_offset_y: TARGET_STAR_OFFSET_Y,
            extrapolation: APPARENT_EXTRAPOLATION,
            max_parallax_arcsec: MAX_PARALLAX_ARCSEC,
            min_resolvable_arcsec: MIN_RESOLVABLE_ARCSEC,
            far_distance_pc: FAR_DISTANCE_PC,
            background_stars: BACKGROUND_STAR_COUNT,
        }
    }
}

impl SceneConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.orbit_radius.is_finite() && self.orbit_radius > 0.0) {
            return Err(ConfigError::OrbitRadius(self.orbit_radius));
        }
        if !(self.orbit_squash > 0.0 && self.orbit_squash <= 1.0) {
            return Err(ConfigError::OrbitSquash(self.orbit_squash));
        }
        if !(self.max_parallax_arcsec.is_finite() && self.max_parallax_arcsec > 0.0) {
            return Err(ConfigError::MaxParallax(self.max_parallax_arcsec));
        }
        if !(self.min_resolvable_arcsec >= 0.0
            && self.min_resolvable_arcsec < self.max_parallax_arcsec)
        {
            return Err(ConfigError::ResolutionThreshold(self.min_resolvable_arcsec));
        }
        if !(self.far_distance_pc.is_finite() && self.far_distance_pc > 0.0) {
            return Err(ConfigError::FarDistance(self.far_distance_pc));
        }
        if !self.extrapolation.is_finite() {
            return Err(ConfigError::Extrapolation(self.extrapolation));
        }
        if !self.target_star_offset_y.is_finite() {
            return Err(ConfigError::TargetStarOffset(self.target_star_offset_y));
        }
        let c = self.sun_center_fraction;
        if !((0.0..=1.0).contains(&c.x) && (0.0..=1.0).contains(&c.y)) {
            return Err(ConfigError::SunCenter(c.x, c.y));
        }
        Ok(())
    }

    /// Sun center in surface pixels.
    #[inline]
    pub fn sun_center(&self, surface: Vec2) -> Vec2 {
        surface * self.sun_center_fraction
    }
}
