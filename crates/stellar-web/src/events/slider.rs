use crate::dom;
use crate::style::StarStyle;
use std::rc::Rc;
use stellar_core::{
    StarParams, LUMINOSITY_RANGE, LUMINOSITY_STEP, TEMPERATURE_RANGE_K, TEMPERATURE_STEP_K,
};
use web_sys as web;

struct StarControls {
    luminosity: web::HtmlInputElement,
    temperature: web::HtmlInputElement,
    luminosity_out: web::Element,
    temperature_out: web::Element,
    radius_out: web::Element,
    star: web::HtmlElement,
}

impl StarControls {
    fn params(&self) -> StarParams {
        StarParams::from_slider_values(
            self.luminosity.value_as_number(),
            self.temperature.value_as_number(),
        )
    }

    /// Recompute everything first, then write all outputs in one go.
    fn apply(&self) {
        let params = self.params();
        let look = params.appearance();
        let css = StarStyle::from_appearance(&look);
        let luminosity_text = params.luminosity_label();
        let temperature_text = params.temperature_label();
        let radius_text = look.radius_label();

        dom::set_text(&self.luminosity_out, &luminosity_text);
        dom::set_text(&self.temperature_out, &temperature_text);
        dom::set_text(&self.radius_out, &radius_text);
        let decl = self.star.style();
        for (name, value) in css.properties() {
            if let Err(e) = decl.set_property(name, value) {
                log::warn!("[star] could not set {}: {:?}", name, e);
            }
        }
        log::debug!(
            "[star] L={} T={} R={:.3} px={:.1}",
            params.luminosity,
            params.temperature,
            look.relative_radius,
            look.px_size
        );
    }
}

// Bounds come from the core constants; the page markup only mirrors them.
fn configure_slider(
    input: &web::HtmlInputElement,
    (min, max, default): (f32, f32, f32),
    step: f32,
) {
    input.set_min(&min.to_string());
    input.set_max(&max.to_string());
    input.set_step(&step.to_string());
    input.set_value(&default.to_string());
}

pub fn wire_star_model(document: &web::Document) -> anyhow::Result<()> {
    let controls = StarControls {
        luminosity: dom::element_by_id(document, "luminosity")?,
        temperature: dom::element_by_id(document, "temperature")?,
        luminosity_out: dom::element_by_id(document, "luminosity-value")?,
        temperature_out: dom::element_by_id(document, "temperature-value")?,
        radius_out: dom::element_by_id(document, "radius-value")?,
        star: dom::element_by_id(document, "star")?,
    };
    configure_slider(&controls.luminosity, LUMINOSITY_RANGE, LUMINOSITY_STEP);
    configure_slider(
        &controls.temperature,
        TEMPERATURE_RANGE_K,
        TEMPERATURE_STEP_K,
    );
    controls.apply();
    log::info!("[init] star model ready");

    let controls = Rc::new(controls);
    for slider in [&controls.luminosity, &controls.temperature] {
        let c = controls.clone();
        dom::add_listener(slider, "input", move |_ev| c.apply());
    }
    Ok(())
}
