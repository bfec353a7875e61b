//! Parallax scene: orbit state, drag handling and the derived geometry.
//!
//! Everything here is platform-free. The web front-end translates pointer
//! events into [`PointerInput`], feeds them to [`ParallaxScene::handle`] and
//! redraws when asked to.

use crate::config::{ConfigError, SceneConfig};
use crate::scene::{build_draw_list, DrawCommand};
use glam::Vec2;

/// Orbital angle of the observing planet, in radians. Not normalized.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OrbitState {
    pub angle: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

/// Pointer input in surface-local pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerInput {
    Down(Vec2),
    Move(Vec2),
    Up,
}

/// Pointer id used by [`ParallaxScene::handle`] for single-pointer input.
pub const PRIMARY_POINTER: i32 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Redraw {
    Needed,
    Skip,
}

/// Everything drawn for one frame, derived from the angle and surface size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneGeometry {
    pub surface: Vec2,
    pub sun: Vec2,
    pub orbit_radii: Vec2,
    pub planet: Vec2,
    pub target_star: Vec2,
    pub line_of_sight: Vec2,
    pub apparent: Vec2,
}

impl SceneGeometry {
    pub fn compute(angle: f32, surface: Vec2, config: &SceneConfig) -> Self {
        let sun = config.sun_center(surface);
        let orbit_radii = Vec2::new(
            config.orbit_radius,
            config.orbit_radius * config.orbit_squash,
        );
        let planet = planet_position(sun, orbit_radii, angle);
        let target_star = sun + Vec2::new(0.0, config.target_star_offset_y);
        Self {
            surface,
            sun,
            orbit_radii,
            planet,
            target_star,
            line_of_sight: target_star - planet,
            apparent: apparent_position(planet, target_star, config.extrapolation),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxReading {
    pub angle_arcsec: f32,
    pub distance_parsecs: f32,
}

impl ParallaxReading {
    pub fn angle_label(&self) -> String {
        format!("{:.2}\"", self.angle_arcsec)
    }

    pub fn distance_label(&self) -> String {
        format!("{:.2} pc", self.distance_parsecs)
    }
}

/// Direction from the anchor to the pointer. Distance from the anchor is ignored.
#[inline]
pub fn angle_from_pointer(anchor: Vec2, pointer: Vec2) -> f32 {
    let d = pointer - anchor;
    d.y.atan2(d.x)
}

/// Ellipse parametrization; the squashed y axis fakes a tilted orbit.
#[inline]
pub fn planet_position(sun: Vec2, orbit_radii: Vec2, angle: f32) -> Vec2 {
    sun + Vec2::new(angle.cos() * orbit_radii.x, angle.sin() * orbit_radii.y)
}

/// Projection of the line of sight past the target star onto the background.
#[inline]
pub fn apparent_position(planet: Vec2, target_star: Vec2, scale: f32) -> Vec2 {
    planet + (target_star - planet) * scale
}

pub fn reading_for_angle(angle: f32, config: &SceneConfig) -> ParallaxReading {
    let earth_x = angle.cos() * config.orbit_radius;
    let normalized_offset = earth_x / config.orbit_radius;
    let angle_arcsec = (normalized_offset * config.max_parallax_arcsec).abs();
    let distance_parsecs = if angle_arcsec > config.min_resolvable_arcsec {
        1.0 / angle_arcsec
    } else {
        config.far_distance_pc
    };
    ParallaxReading {
        angle_arcsec,
        distance_parsecs,
    }
}

pub struct ParallaxScene {
    config: SceneConfig,
    surface: Vec2,
    orbit: OrbitState,
    phase: DragPhase,
    captured: Option<i32>,
}

impl ParallaxScene {
    pub fn new(config: SceneConfig, surface: Vec2) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            surface,
            orbit: OrbitState::default(),
            phase: DragPhase::Idle,
            captured: None,
        })
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn surface(&self) -> Vec2 {
        self.surface
    }

    pub fn angle(&self) -> f32 {
        self.orbit.angle
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn handle(&mut self, input: PointerInput) -> Redraw {
        self.handle_pointer(PRIMARY_POINTER, input)
    }

    /// Only the pointer that started a drag can steer or end it; input from
    /// any other pointer is ignored until that drag ends.
    pub fn handle_pointer(&mut self, pointer_id: i32, input: PointerInput) -> Redraw {
        if self.phase == DragPhase::Dragging && self.captured != Some(pointer_id) {
            return Redraw::Skip;
        }
        match (self.phase, input) {
            (DragPhase::Idle, PointerInput::Down(p)) => {
                self.aim_at(p);
                self.phase = DragPhase::Dragging;
                self.captured = Some(pointer_id);
                log::debug!(
                    "[drag] pointer {} begin at angle {:.3}",
                    pointer_id,
                    self.orbit.angle
                );
                Redraw::Needed
            }
            (DragPhase::Dragging, PointerInput::Down(p) | PointerInput::Move(p)) => {
                self.aim_at(p);
                Redraw::Needed
            }
            (DragPhase::Dragging, PointerInput::Up) => {
                self.phase = DragPhase::Idle;
                self.captured = None;
                log::debug!("[drag] end at angle {:.3}", self.orbit.angle);
                Redraw::Skip
            }
            (DragPhase::Idle, PointerInput::Move(_) | PointerInput::Up) => Redraw::Skip,
        }
    }

    fn aim_at(&mut self, pointer: Vec2) {
        let sun = self.config.sun_center(self.surface);
        self.orbit.angle = angle_from_pointer(sun, pointer);
    }

    pub fn geometry(&self) -> SceneGeometry {
        SceneGeometry::compute(self.orbit.angle, self.surface, &self.config)
    }

    pub fn reading(&self) -> ParallaxReading {
        reading_for_angle(self.orbit.angle, &self.config)
    }

    pub fn draw_list(&self) -> Vec<DrawCommand> {
        build_draw_list(&self.geometry(), &self.config)
    }
}
