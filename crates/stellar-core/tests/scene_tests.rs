// Host-side tests for the background field and the frame display list.

use glam::Vec2;
use stellar_core::*;

const SURFACE: Vec2 = Vec2::new(640.0, 420.0);

fn make_scene() -> ParallaxScene {
    let scene = ParallaxScene::new(SceneConfig::default(), SURFACE);
    scene.expect("valid config")
}

fn field() -> Vec<BackgroundStar> {
    background_field(BACKGROUND_STAR_COUNT, SURFACE).collect()
}

#[test]
fn background_is_stable_and_inside_surface() {
    let a = field();
    let b = field();
    assert_eq!(a, b);
    assert_eq!(a.len(), BACKGROUND_STAR_COUNT);
    for s in &a {
        assert!(s.position.x >= 0.0 && s.position.x <= SURFACE.x);
        assert!(s.position.y >= 0.0 && s.position.y <= SURFACE.y);
        assert!(s.radius >= BACKGROUND_STAR_MIN_RADIUS - 1e-6);
        assert!(s.radius <= BACKGROUND_STAR_MAX_RADIUS + 1e-6);
    }
}

#[test]
fn background_stars_are_spread_out() {
    let stars = field();
    let left = stars.iter().filter(|s| s.position.x < SURFACE.x / 2.0).count();
    let top = stars.iter().filter(|s| s.position.y < SURFACE.y / 2.0).count();
    assert!(left > 20 && left < BACKGROUND_STAR_COUNT - 20);
    assert!(top > 20 && top < BACKGROUND_STAR_COUNT - 20);
    assert_ne!(stars[0].position, stars[1].position);
}

#[test]
fn background_does_not_depend_on_angle() {
    let mut scene = make_scene();
    let before = scene.draw_list();
    let sun = scene.config().sun_center(SURFACE);
    scene.handle(PointerInput::Down(sun + Vec2::new(-40.0, 25.0)));
    let after = scene.draw_list();
    let n = 1 + BACKGROUND_STAR_COUNT;
    assert_eq!(before[..n], after[..n]);
    assert_ne!(before[n..], after[n..]);
}

#[test]
fn draw_list_order_and_contents() {
    let scene = make_scene();
    let geo = scene.geometry();
    let cmds = scene.draw_list();
    assert_eq!(cmds.len(), 1 + BACKGROUND_STAR_COUNT + 7);

    let clear = DrawCommand::Clear {
        size: SURFACE,
        color: SPACE_COLOR,
    };
    assert_eq!(cmds[0], clear);

    let tail = &cmds[1 + BACKGROUND_STAR_COUNT..];
    match &tail[0] {
        DrawCommand::FillCircle { center, glow, .. } => {
            assert_eq!(*center, geo.sun);
            assert!(glow.is_some());
        }
        other => panic!("expected sun, got {:?}", other),
    }
    match &tail[1] {
        DrawCommand::StrokeEllipse { center, radii, .. } => {
            assert_eq!(*center, geo.sun);
            let expected = Vec2::new(ORBIT_RADIUS, ORBIT_RADIUS * ORBIT_SQUASH);
            assert_eq!(*radii, expected);
        }
        other => panic!("expected orbit, got {:?}", other),
    }
    match &tail[2] {
        DrawCommand::FillCircle { center, glow, .. } => {
            assert_eq!(*center, geo.planet);
            assert!(glow.is_none());
        }
        other => panic!("expected planet, got {:?}", other),
    }
    match &tail[3] {
        DrawCommand::FillCircle { center, glow, .. } => {
            assert_eq!(*center, geo.target_star);
            assert!(glow.is_some());
        }
        other => panic!("expected target star, got {:?}", other),
    }
    match &tail[4] {
        DrawCommand::StrokeLine { from, to, dash, .. } => {
            assert_eq!(*from, geo.planet);
            assert_eq!(*to, geo.planet + geo.line_of_sight);
            assert!((*to - geo.target_star).length() < 1e-3);
            assert_eq!(*dash, Some(LINE_OF_SIGHT_DASH));
        }
        other => panic!("expected line of sight, got {:?}", other),
    }
    match &tail[5] {
        DrawCommand::FillCircle { center, .. } => {
            assert_eq!(*center, geo.apparent);
        }
        other => panic!("expected apparent marker, got {:?}", other),
    }
    match &tail[6] {
        DrawCommand::Text { text, .. } => assert_eq!(text, APPARENT_LABEL),
        other => panic!("expected label, got {:?}", other),
    }
}
