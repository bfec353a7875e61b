// Host-side tests for scene configuration validation.

use glam::Vec2;
use stellar_core::*;

fn rejected(cfg: SceneConfig) -> ConfigError {
    match cfg.validate() {
        Err(e) => e,
        Ok(()) => panic!("expected {:?} to be rejected", cfg),
    }
}

#[test]
fn default_config_is_valid() {
    assert_eq!(SceneConfig::default().validate(), Ok(()));
}

#[test]
fn invalid_values_are_rejected() {
    let mut cfg = SceneConfig::default();
    cfg.orbit_radius = 0.0;
    assert_eq!(rejected(cfg), ConfigError::OrbitRadius(0.0));

    let mut cfg = SceneConfig::default();
    cfg.orbit_squash = 1.5;
    assert_eq!(rejected(cfg), ConfigError::OrbitSquash(1.5));

    let mut cfg = SceneConfig::default();
    cfg.max_parallax_arcsec = -1.0;
    assert_eq!(rejected(cfg), ConfigError::MaxParallax(-1.0));

    let mut cfg = SceneConfig::default();
    cfg.min_resolvable_arcsec = 1.0;
    let err = ConfigError::ResolutionThreshold(1.0);
    assert_eq!(rejected(cfg), err);

    let mut cfg = SceneConfig::default();
    cfg.far_distance_pc = 0.0;
    assert_eq!(rejected(cfg), ConfigError::FarDistance(0.0));

    let mut cfg = SceneConfig::default();
    cfg.sun_center_fraction = Vec2::new(1.2, 0.5);
    assert_eq!(rejected(cfg), ConfigError::SunCenter(1.2, 0.5));
}

#[test]
fn non_finite_layout_values_are_rejected() {
    let mut cfg = SceneConfig::default();
    cfg.extrapolation = f32::NAN;
    let err = rejected(cfg);
    assert!(matches!(err, ConfigError::Extrapolation(v) if v.is_nan()));

    let mut cfg = SceneConfig::default();
    cfg.extrapolation = f32::INFINITY;
    let err = ConfigError::Extrapolation(f32::INFINITY);
    assert_eq!(rejected(cfg), err);

    let mut cfg = SceneConfig::default();
    cfg.target_star_offset_y = f32::NAN;
    let err = rejected(cfg);
    assert!(matches!(err, ConfigError::TargetStarOffset(v) if v.is_nan()));

    let mut cfg = SceneConfig::default();
    cfg.target_star_offset_y = f32::NEG_INFINITY;
    let err = ConfigError::TargetStarOffset(f32::NEG_INFINITY);
    assert_eq!(rejected(cfg), err);
}

#[test]
fn scene_construction_validates_config() {
    let surface = Vec2::new(100.0, 100.0);
    let mut cfg = SceneConfig::default();
    cfg.orbit_radius = f32::NAN;
    assert!(ParallaxScene::new(cfg, surface).is_err());

    let mut cfg = SceneConfig::default();
    cfg.extrapolation = f32::NAN;
    assert!(ParallaxScene::new(cfg, surface).is_err());
}

#[test]
fn errors_render_readable_messages() {
    let msg = ConfigError::OrbitSquash(2.0).to_string();
    assert!(msg.contains("orbit squash"));
    assert!(msg.contains('2'));

    let msg = ConfigError::Extrapolation(f32::NAN).to_string();
    assert!(msg.contains("extrapolation"));
}

#[test]
fn sun_center_scales_with_surface() {
    let cfg = SceneConfig::default();
    let c = cfg.sun_center(Vec2::new(1000.0, 400.0));
    assert!((c.x - 500.0).abs() < 1e-4);
    assert!((c.y - 288.0).abs() < 1e-3);
}
