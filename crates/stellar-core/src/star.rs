//! Star-size model: luminosity and temperature to radius, size and color.
//!
//! Radius follows the Stefan-Boltzmann relation `L ~ R^2 T^4` solved for `R`
//! and normalized to the Sun, so `L = 1, T = 5800 K` gives exactly one solar
//! radius.

use crate::constants::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarParams {
    /// Luminosity relative to the Sun.
    pub luminosity: f32,
    /// Surface temperature in Kelvin.
    pub temperature: f32,
}

impl Default for StarParams {
    fn default() -> Self {
        Self {
            luminosity: LUMINOSITY_RANGE.2,
            temperature: TEMPERATURE_RANGE_K.2,
        }
    }
}

impl StarParams {
    /// Build params from raw slider readings. NaN falls back to the slider
    /// default and finite values are clamped to the slider range.
    pub fn from_slider_values(luminosity: f64, temperature: f64) -> Self {
        Self {
            luminosity: slider_value(luminosity, LUMINOSITY_RANGE),
            temperature: slider_value(temperature, TEMPERATURE_RANGE_K),
        }
    }

    pub fn appearance(&self) -> StarAppearance {
        let relative_radius = relative_radius(self.luminosity, self.temperature);
        let px_size = display_size(relative_radius);
        let colors = band_for_temperature(self.temperature).colors();
        StarAppearance {
            relative_radius,
            px_size,
            color_stops: [colors.start, colors.end],
            glow_color: colors.glow,
            glow_radius: px_size * STAR_GLOW_FRACTION,
        }
    }

    pub fn luminosity_label(&self) -> String {
        format!("{}x Sun", self.luminosity)
    }

    pub fn temperature_label(&self) -> String {
        format!("{} K", self.temperature)
    }
}

fn slider_value(raw: f64, (min, max, default): (f32, f32, f32)) -> f32 {
    if raw.is_nan() {
        default
    } else {
        (raw as f32).clamp(min, max)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarAppearance {
    /// Unclamped radius in solar radii.
    pub relative_radius: f32,
    /// Clamped on-screen diameter in pixels.
    pub px_size: f32,
    pub color_stops: [&'static str; 2],
    pub glow_color: &'static str,
    pub glow_radius: f32,
}

impl StarAppearance {
    pub fn radius_label(&self) -> String {
        format!("{:.2} x Sun", self.relative_radius)
    }
}

#[inline]
pub fn relative_radius(luminosity: f32, temperature: f32) -> f32 {
    let t_rel = temperature / SUN_TEMPERATURE_K;
    luminosity.sqrt() / (t_rel * t_rel)
}

/// Legibility clamp; the true radius is reported separately.
#[inline]
pub fn display_size(relative_radius: f32) -> f32 {
    (relative_radius * PX_PER_SOLAR_RADIUS).clamp(STAR_PX_MIN, STAR_PX_MAX)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpectralBand {
    Cool,
    Warm,
    White,
    Hot,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorBand {
    pub start: &'static str,
    pub end: &'static str,
    pub glow: &'static str,
}

impl SpectralBand {
    pub fn colors(self) -> ColorBand {
        match self {
            SpectralBand::Cool => ColorBand {
                start: "#ff8844",
                end: "#cc2200",
                glow: "#ff2200",
            },
            SpectralBand::Warm => ColorBand {
                start: "#ffdd44",
                end: "#cc9900",
                glow: "#ffaa00",
            },
            SpectralBand::White => ColorBand {
                start: "#ffffff",
                end: "#cccccc",
                glow: "#ccccff",
            },
            SpectralBand::Hot => ColorBand {
                start: "#aaddff",
                end: "#4488ff",
                glow: "#0088ff",
            },
        }
    }
}

pub fn band_for_temperature(temperature: f32) -> SpectralBand {
    if temperature < WARM_BAND_MIN_K {
        SpectralBand::Cool
    } else if temperature < WHITE_BAND_MIN_K {
        SpectralBand::Warm
    } else if temperature < HOT_BAND_MIN_K {
        SpectralBand::White
    } else {
        SpectralBand::Hot
    }
}
