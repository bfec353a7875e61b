// Shared tuning constants for the parallax scene and the star-size model.

// Orbit layout (canvas pixels)
pub const ORBIT_RADIUS: f32 = 150.0; // horizontal semi-axis of the orbit ellipse
pub const ORBIT_SQUASH: f32 = 0.3; // vertical semi-axis as a fraction of ORBIT_RADIUS
pub const SUN_CENTER_FRACTION: [f32; 2] = [0.5, 0.72]; // sun center relative to surface size
pub const TARGET_STAR_OFFSET_Y: f32 = -110.0; // target star sits above the sun
pub const APPARENT_EXTRAPOLATION: f32 = 2.5; // planet -> star vector scale for the apparent point

// Body sizing and glow (canvas pixels)
pub const SUN_RADIUS: f32 = 22.0;
pub const SUN_GLOW_BLUR: f32 = 30.0;
pub const PLANET_RADIUS: f32 = 8.0;
pub const TARGET_STAR_RADIUS: f32 = 6.0;
pub const TARGET_STAR_GLOW_BLUR: f32 = 15.0;
pub const APPARENT_MARKER_RADIUS: f32 = 5.0;
pub const LINE_OF_SIGHT_DASH: [f32; 2] = [6.0, 4.0]; // dash, gap

// Background field
pub const BACKGROUND_STAR_COUNT: usize = 120;
pub const BACKGROUND_STAR_MIN_RADIUS: f32 = 0.4;
pub const BACKGROUND_STAR_MAX_RADIUS: f32 = 1.6;

// Parallax readout
pub const MAX_PARALLAX_ARCSEC: f32 = 0.76; // reading at full orbital offset
pub const MIN_RESOLVABLE_ARCSEC: f32 = 0.01; // below this the distance is reported as far
pub const FAR_DISTANCE_PC: f32 = 100.0; // sentinel distance for unresolvable angles

// Scene palette (CSS colors)
pub const SPACE_COLOR: &str = "#05070f";
pub const BACKGROUND_STAR_COLOR: &str = "rgba(255, 255, 255, 0.6)";
pub const SUN_COLOR: &str = "#ffdd55";
pub const SUN_GLOW_COLOR: &str = "#ffaa00";
pub const ORBIT_COLOR: &str = "rgba(255, 255, 255, 0.25)";
pub const PLANET_COLOR: &str = "#4fa3ff";
pub const TARGET_STAR_COLOR: &str = "#ffffff";
pub const TARGET_STAR_GLOW_COLOR: &str = "#aaccff";
pub const LINE_OF_SIGHT_COLOR: &str = "#88ccff";
pub const APPARENT_COLOR: &str = "rgba(255, 120, 120, 0.85)";
pub const LABEL_FONT: &str = "12px sans-serif";
pub const APPARENT_LABEL: &str = "Apparent position";
pub const APPARENT_LABEL_OFFSET: [f32; 2] = [8.0, -8.0];

// Star-size model
pub const SUN_TEMPERATURE_K: f32 = 5800.0; // reference star temperature
pub const PX_PER_SOLAR_RADIUS: f32 = 100.0;
pub const STAR_PX_MIN: f32 = 5.0;
pub const STAR_PX_MAX: f32 = 300.0;
pub const STAR_GLOW_FRACTION: f32 = 0.5; // glow radius as a fraction of the display size

// Slider bounds: (min, max, default)
pub const LUMINOSITY_RANGE: (f32, f32, f32) = (0.01, 100.0, 1.0);
pub const TEMPERATURE_RANGE_K: (f32, f32, f32) = (2000.0, 12000.0, SUN_TEMPERATURE_K);
pub const LUMINOSITY_STEP: f32 = 0.01;
pub const TEMPERATURE_STEP_K: f32 = 100.0;

// Spectral band lower bounds (inclusive)
pub const WARM_BAND_MIN_K: f32 = 4000.0;
pub const WHITE_BAND_MIN_K: f32 = 6000.0;
pub const HOT_BAND_MIN_K: f32 = 8000.0;
