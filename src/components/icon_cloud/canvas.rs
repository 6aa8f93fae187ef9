//! 2D canvas backend for the icon cloud renderer.

use std::cell::Cell;
use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::config::icon_cloud::FALLBACK_GLYPH;
use crate::core::icon_cloud::{CloudSurface, Shadow};
use crate::models::IconSource;
use crate::utils::dom;

const ACCENT: &str = "120, 150, 255";
const DISK_FILL: &str = "rgba(28, 34, 68, 0.85)";
const GLYPH_FILL: &str = "#e0e6ff";

/// Load state of an image icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageState {
    Loading,
    Ready,
    Failed,
}

impl ImageState {
    /// A finished image with no intrinsic width failed to load.
    pub fn from_element(complete: bool, natural_width: u32) -> Self {
        match (complete, natural_width) {
            (false, _) => Self::Loading,
            (true, 0) => Self::Failed,
            (true, _) => Self::Ready,
        }
    }
}

/// Drawable content of one icon slot.
pub enum IconAsset {
    Glyph(String),
    Image {
        element: HtmlImageElement,
        url: String,
        /// Failure already logged.
        warned: Cell<bool>,
    },
}

impl IconAsset {
    /// Start loading `source`. Images that cannot even be created fall back
    /// to the fallback glyph.
    pub fn load(source: &IconSource) -> Self {
        match source {
            IconSource::Glyph { glyph, .. } => Self::Glyph(glyph.clone()),
            IconSource::Image { url, .. } => match HtmlImageElement::new() {
                Ok(element) => {
                    element.set_src(url);
                    Self::Image {
                        element,
                        url: url.clone(),
                        warned: Cell::new(false),
                    }
                }
                Err(e) => {
                    log::warn!("cannot create image for {url}: {e:?}");
                    Self::Glyph(FALLBACK_GLYPH.to_string())
                }
            },
        }
    }
}

/// Size `canvas` for the device pixel ratio and return its 2D context,
/// scaled so drawing happens in CSS pixels.
pub fn prepare_canvas(canvas: &HtmlCanvasElement, size: u32) -> Option<CanvasRenderingContext2d> {
    let ratio = dom::window()
        .map(|w| w.device_pixel_ratio())
        .unwrap_or(1.0)
        .max(1.0);
    let device_px = (f64::from(size) * ratio).round() as u32;
    canvas.set_width(device_px);
    canvas.set_height(device_px);

    let ctx = canvas
        .get_context("2d")
        .ok()??
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()?;
    ctx.scale(ratio, ratio).ok()?;
    Some(ctx)
}

/// [`CloudSurface`] drawing to a `CanvasRenderingContext2d`.
pub struct CanvasSurface<'a> {
    ctx: &'a CanvasRenderingContext2d,
    assets: &'a [IconAsset],
}

impl<'a> CanvasSurface<'a> {
    pub fn new(ctx: &'a CanvasRenderingContext2d, assets: &'a [IconAsset]) -> Self {
        Self { ctx, assets }
    }

    fn circle(&self, x: f64, y: f64, radius: f64) {
        self.ctx.begin_path();
        let _ = self.ctx.arc(x, y, radius.max(0.0), 0.0, TAU);
    }

    fn glyph(&self, glyph: &str, x: f64, y: f64, radius: f64, opacity: f64) {
        let ctx = self.ctx;
        ctx.save();
        ctx.set_global_alpha(opacity);
        ctx.set_font(&format!("{:.0}px sans-serif", radius * 1.6));
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        ctx.set_fill_style_str(GLYPH_FILL);
        let _ = ctx.fill_text(glyph, x, y);
        ctx.restore();
    }
}

impl CloudSurface for CanvasSurface<'_> {
    fn clear(&mut self, size: f64) {
        self.ctx.clear_rect(0.0, 0.0, size, size);
    }

    fn ring(&mut self, cx: f64, cy: f64, radius: f64, rotation: f64, alpha: f64) {
        let ctx = self.ctx;
        ctx.save();
        ctx.set_stroke_style_str(&format!("rgba({ACCENT}, {alpha})"));
        ctx.set_line_width(1.0);
        let dash = js_sys::Array::of2(&JsValue::from_f64(4.0), &JsValue::from_f64(10.0));
        let _ = ctx.set_line_dash(&dash);
        ctx.set_line_dash_offset(-rotation * radius);
        self.circle(cx, cy, radius);
        ctx.stroke();
        ctx.restore();
    }

    fn glow(&mut self, x: f64, y: f64, radius: f64, intensity: f64) {
        let Ok(gradient) = self.ctx.create_radial_gradient(x, y, 0.0, x, y, radius) else {
            return;
        };
        let _ = gradient.add_color_stop(0.0, &format!("rgba({ACCENT}, {intensity})"));
        let _ = gradient.add_color_stop(1.0, &format!("rgba({ACCENT}, 0)"));
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.circle(x, y, radius);
        self.ctx.fill();
    }

    fn disk(&mut self, x: f64, y: f64, radius: f64, opacity: f64, shadow: Shadow) {
        let ctx = self.ctx;
        ctx.save();
        ctx.set_global_alpha(opacity);
        ctx.set_shadow_color("rgba(0, 0, 0, 0.35)");
        ctx.set_shadow_blur(shadow.blur);
        ctx.set_shadow_offset_x(shadow.offset_x);
        ctx.set_shadow_offset_y(shadow.offset_y);
        ctx.set_fill_style_str(DISK_FILL);
        self.circle(x, y, radius);
        ctx.fill();
        ctx.restore();
    }

    fn border(&mut self, x: f64, y: f64, radius: f64, opacity: f64, emphasized: bool) {
        let ctx = self.ctx;
        let gradient = ctx.create_linear_gradient(x - radius, y - radius, x + radius, y + radius);
        let _ = gradient.add_color_stop(0.0, &format!("rgba({ACCENT}, 0.9)"));
        let _ = gradient.add_color_stop(1.0, "rgba(200, 120, 255, 0.5)");
        ctx.save();
        ctx.set_global_alpha(opacity);
        ctx.set_stroke_style_canvas_gradient(&gradient);
        ctx.set_line_width(if emphasized { 2.5 } else { 1.5 });
        self.circle(x, y, radius);
        ctx.stroke();
        ctx.restore();
    }

    fn icon(&mut self, slot: usize, x: f64, y: f64, radius: f64, opacity: f64) {
        let Some(asset) = self.assets.get(slot) else {
            return;
        };
        match asset {
            IconAsset::Glyph(glyph) => self.glyph(glyph, x, y, radius, opacity),
            IconAsset::Image {
                element,
                url,
                warned,
            } => match ImageState::from_element(element.complete(), element.natural_width()) {
                ImageState::Loading => {}
                ImageState::Ready => {
                    self.ctx.save();
                    self.ctx.set_global_alpha(opacity);
                    let _ = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                        element,
                        x - radius,
                        y - radius,
                        radius * 2.0,
                        radius * 2.0,
                    );
                    self.ctx.restore();
                }
                ImageState::Failed => {
                    if !warned.replace(true) {
                        log::warn!("icon image failed to load: {url}");
                    }
                    self.glyph(FALLBACK_GLYPH, x, y, radius, opacity);
                }
            },
        }
    }
}
