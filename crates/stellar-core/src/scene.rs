//! Display list for one parallax frame.
//!
//! The core decides what to draw and in which order; the canvas adapter in the
//! web crate only executes these commands.

use crate::background::background_field;
use crate::config::SceneConfig;
use crate::constants::*;
use crate::parallax::SceneGeometry;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub color: &'static str,
    pub blur: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear {
        size: Vec2,
        color: &'static str,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        color: &'static str,
        glow: Option<Glow>,
    },
    StrokeEllipse {
        center: Vec2,
        radii: Vec2,
        color: &'static str,
        width: f32,
    },
    StrokeLine {
        from: Vec2,
        to: Vec2,
        color: &'static str,
        width: f32,
        dash: Option<[f32; 2]>,
    },
    Text {
        at: Vec2,
        text: String,
        color: &'static str,
        font: &'static str,
    },
}

pub fn build_draw_list(geo: &SceneGeometry, config: &SceneConfig) -> Vec<DrawCommand> {
    let mut cmds = Vec::with_capacity(config.background_stars + 8);
    cmds.push(DrawCommand::Clear {
        size: geo.surface,
        color: SPACE_COLOR,
    });

    cmds.extend(
        background_field(config.background_stars, geo.surface).map(|s| DrawCommand::FillCircle {
            center: s.position,
            radius: s.radius,
            color: BACKGROUND_STAR_COLOR,
            glow: None,
        }),
    );

    cmds.push(DrawCommand::FillCircle {
        center: geo.sun,
        radius: SUN_RADIUS,
        color: SUN_COLOR,
        glow: Some(Glow {
            color: SUN_GLOW_COLOR,
            blur: SUN_GLOW_BLUR,
        }),
    });
    cmds.push(DrawCommand::StrokeEllipse {
        center: geo.sun,
        radii: geo.orbit_radii,
        color: ORBIT_COLOR,
        width: 1.0,
    });
    cmds.push(DrawCommand::FillCircle {
        center: geo.planet,
        radius: PLANET_RADIUS,
        color: PLANET_COLOR,
        glow: None,
    });
    cmds.push(DrawCommand::FillCircle {
        center: geo.target_star,
        radius: TARGET_STAR_RADIUS,
        color: TARGET_STAR_COLOR,
        glow: Some(Glow {
            color: TARGET_STAR_GLOW_COLOR,
            blur: TARGET_STAR_GLOW_BLUR,
        }),
    });
    cmds.push(DrawCommand::StrokeLine {
        from: geo.planet,
        to: geo.planet + geo.line_of_sight,
        color: LINE_OF_SIGHT_COLOR,
        width: 1.0,
        dash: Some(LINE_OF_SIGHT_DASH),
    });

    cmds.push(DrawCommand::FillCircle {
        center: geo.apparent,
        radius: APPARENT_MARKER_RADIUS,
        color: APPARENT_COLOR,
        glow: None,
    });
    cmds.push(DrawCommand::Text {
        at: geo.apparent + Vec2::from_array(APPARENT_LABEL_OFFSET),
        text: APPARENT_LABEL.to_string(),
        color: APPARENT_COLOR,
        font: LABEL_FONT,
    });
    cmds
}
