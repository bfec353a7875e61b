#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

mod canvas;
mod dom;
mod events;
mod input;
mod style;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("stellar-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    // The two widgets share nothing; one failing to wire leaves the other usable.
    if let Err(e) = events::wire_parallax(&document) {
        log::error!("[init] parallax scene disabled: {:?}", e);
    }
    if let Err(e) = events::wire_star_model(&document) {
        log::error!("[init] star model disabled: {:?}", e);
    }
    Ok(())
}
