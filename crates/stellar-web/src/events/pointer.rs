use crate::canvas;
use crate::dom;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use stellar_core::{ParallaxScene, PointerInput, Redraw, SceneConfig};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Output side of the parallax widget: the canvas and the two readout labels.
struct ParallaxView {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    angle_out: web::Element,
    distance_out: web::Element,
}

impl ParallaxView {
    fn render(&self, scene: &ParallaxScene) {
        canvas::paint(&self.ctx, &scene.draw_list());
        let reading = scene.reading();
        dom::set_text(&self.angle_out, &reading.angle_label());
        dom::set_text(&self.distance_out, &reading.distance_label());
    }
}

#[derive(Clone)]
struct ParallaxWiring {
    view: Rc<ParallaxView>,
    scene: Rc<RefCell<ParallaxScene>>,
}

impl ParallaxWiring {
    fn forward(&self, pointer_id: i32, input: PointerInput) {
        let redraw = self.scene.borrow_mut().handle_pointer(pointer_id, input);
        if redraw == Redraw::Needed {
            self.view.render(&self.scene.borrow());
        }
    }
}

pub fn wire_parallax(document: &web::Document) -> anyhow::Result<()> {
    let canvas: web::HtmlCanvasElement = dom::element_by_id(document, "parallax-canvas")?;
    let surface = dom::size_canvas_to_container(&canvas);
    let ctx = canvas::context_2d(&canvas)?;
    let view = ParallaxView {
        canvas,
        ctx,
        angle_out: dom::element_by_id(document, "parallax-angle")?,
        distance_out: dom::element_by_id(document, "parallax-distance")?,
    };
    let scene = ParallaxScene::new(SceneConfig::default(), surface)?;
    view.render(&scene);
    log::info!("[init] parallax scene {}x{}", surface.x, surface.y);

    let w = ParallaxWiring {
        view: Rc::new(view),
        scene: Rc::new(RefCell::new(scene)),
    };
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_lost_capture(&w);
    Ok(())
}

fn wire_pointerdown(w: &ParallaxWiring) {
    let w = w.clone();
    let canvas = w.view.canvas.clone();
    dom::add_listener(&canvas, "pointerdown", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let pos = input::pointer_canvas_px(ev, &w.view.canvas);
        _ = w.view.canvas.set_pointer_capture(ev.pointer_id());
        w.forward(ev.pointer_id(), PointerInput::Down(pos));
        ev.prevent_default();
    });
}

// Move and up listen on the window so a drag keeps tracking outside the canvas.
fn wire_pointermove(w: &ParallaxWiring) {
    let Some(window) = web::window() else {
        return;
    };
    let w = w.clone();
    dom::add_listener(&window, "pointermove", move |ev| {
        if let Some(ev) = ev.dyn_ref::<web::PointerEvent>() {
            let pos = input::pointer_canvas_px(ev, &w.view.canvas);
            w.forward(ev.pointer_id(), PointerInput::Move(pos));
        }
    });
}

// A cancelled gesture ends the drag the same way a release does.
fn wire_pointerup(w: &ParallaxWiring) {
    let Some(window) = web::window() else {
        return;
    };
    for event in ["pointerup", "pointercancel"] {
        let w = w.clone();
        dom::add_listener(&window, event, move |ev| {
            if let Some(ev) = ev.dyn_ref::<web::PointerEvent>() {
                w.forward(ev.pointer_id(), PointerInput::Up);
            }
        });
    }
}

fn wire_lost_capture(w: &ParallaxWiring) {
    let w = w.clone();
    let canvas = w.view.canvas.clone();
    dom::add_listener(&canvas, "lostpointercapture", move |ev| {
        if let Some(ev) = ev.dyn_ref::<web::PointerEvent>() {
            w.forward(ev.pointer_id(), PointerInput::Up);
        }
    });
}
