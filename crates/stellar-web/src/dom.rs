use anyhow::anyhow;
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{}", id))?
        .dyn_into::<T>()
        .map_err(|e| anyhow!("#{} has an unexpected element type: {:?}", id, e))
}

#[inline]
pub fn set_text(el: &web::Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn add_listener(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(_)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("[dom] could not listen for {}: {:?}", event, e);
    }
    closure.forget();
}

/// Size the canvas backing store to its container once; later window resizes
/// are not tracked.
pub fn size_canvas_to_container(canvas: &web::HtmlCanvasElement) -> Vec2 {
    let (w, h) = canvas
        .parent_element()
        .map(|p| (p.client_width(), p.client_height()))
        .unwrap_or_else(|| (canvas.client_width(), canvas.client_height()));
    let w_px = w.max(1) as u32;
    let h_px = h.max(1) as u32;
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    Vec2::new(w_px as f32, h_px as f32)
}
