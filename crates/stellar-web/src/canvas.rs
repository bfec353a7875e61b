use anyhow::anyhow;
use std::f64::consts::TAU;
use stellar_core::DrawCommand;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub fn context_2d(
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow!("getContext(\"2d\") failed: {:?}", e))?
        .ok_or_else(|| anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow!("unexpected context type: {:?}", e))
}

/// Replays a full frame. A failed call is logged and skipped; the rest of the
/// frame still draws.
pub fn paint(ctx: &web::CanvasRenderingContext2d, cmds: &[DrawCommand]) {
    for cmd in cmds {
        ctx.save();
        draw(ctx, cmd);
        ctx.restore();
    }
}

fn draw(ctx: &web::CanvasRenderingContext2d, cmd: &DrawCommand) {
    match cmd {
        DrawCommand::Clear { size, color } => {
            ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
            ctx.set_fill_style_str(color);
            ctx.fill_rect(0.0, 0.0, size.x as f64, size.y as f64);
        }
        DrawCommand::FillCircle {
            center,
            radius,
            color,
            glow,
        } => {
            if let Some(g) = glow {
                ctx.set_shadow_color(g.color);
                ctx.set_shadow_blur(g.blur as f64);
            }
            ctx.begin_path();
            let arc = ctx.arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU);
            if warn_on_err("arc", arc) {
                ctx.set_fill_style_str(color);
                ctx.fill();
            }
        }
        DrawCommand::StrokeEllipse {
            center,
            radii,
            color,
            width,
        } => {
            ctx.begin_path();
            let ellipse = ctx.ellipse(
                center.x as f64,
                center.y as f64,
                radii.x as f64,
                radii.y as f64,
                0.0,
                0.0,
                TAU,
            );
            if warn_on_err("ellipse", ellipse) {
                ctx.set_stroke_style_str(color);
                ctx.set_line_width(*width as f64);
                ctx.stroke();
            }
        }
        DrawCommand::StrokeLine {
            from,
            to,
            color,
            width,
            dash,
        } => {
            if let Some([on, off]) = dash {
                let pattern = js_sys::Array::of2(
                    &JsValue::from_f64(*on as f64),
                    &JsValue::from_f64(*off as f64),
                );
                warn_on_err("setLineDash", ctx.set_line_dash(&pattern));
            }
            ctx.begin_path();
            ctx.move_to(from.x as f64, from.y as f64);
            ctx.line_to(to.x as f64, to.y as f64);
            ctx.set_stroke_style_str(color);
            ctx.set_line_width(*width as f64);
            ctx.stroke();
        }
        DrawCommand::Text {
            at,
            text,
            color,
            font,
        } => {
            ctx.set_font(font);
            ctx.set_fill_style_str(color);
            warn_on_err("fillText", ctx.fill_text(text, at.x as f64, at.y as f64));
        }
    }
}

fn warn_on_err(what: &str, result: Result<(), JsValue>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            log::warn!("[canvas] {} failed: {:?}", what, e);
            false
        }
    }
}
