//! Browser canvas backed by `CanvasRenderingContext2d`

use std::collections::HashMap;

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::{Canvas, Color, TextStyle};

/// 2D context wrapper that draws in CSS pixels on a HiDPI backing store
pub struct Canvas2d {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pixel_ratio: f32,
    /// Loaded images keyed by source URL
    images: HashMap<String, HtmlImageElement>,
}

impl Canvas2d {
    /// Acquire the 2D context of `canvas`
    pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        let pixel_ratio = web_sys::window()
            .map(|w| w.device_pixel_ratio() as f32)
            .unwrap_or(1.0);

        let mut this = Self {
            canvas,
            ctx,
            pixel_ratio,
            images: HashMap::new(),
        };
        this.sync_size();
        Some(this)
    }

    /// Match the backing store to the element's CSS size and reset the transform
    ///
    /// Call once per frame before drawing; resizing the backing store clears it.
    pub fn sync_size(&mut self) {
        if let Some(window) = web_sys::window() {
            self.pixel_ratio = window.device_pixel_ratio() as f32;
        }
        let css = self.size();
        let width = (css.x * self.pixel_ratio) as u32;
        let height = (css.y * self.pixel_ratio) as u32;
        if self.canvas.width() != width || self.canvas.height() != height {
            self.canvas.set_width(width);
            self.canvas.set_height(height);
        }
        let dpr = self.pixel_ratio as f64;
        if let Err(e) = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0) {
            log::warn!("Failed to set canvas transform: {:?}", e);
        }
    }

    fn image(&mut self, src: &str) -> Option<&HtmlImageElement> {
        if !self.images.contains_key(src) {
            let img = HtmlImageElement::new().ok()?;
            img.set_src(src);
            log::debug!("Loading image {}", src);
            self.images.insert(src.to_string(), img);
        }
        self.images.get(src).filter(|img| img.complete())
    }
}

impl Canvas for Canvas2d {
    fn size(&self) -> Vec2 {
        Vec2::new(
            self.canvas.client_width() as f32,
            self.canvas.client_height() as f32,
        )
    }

    fn pixel_ratio(&self) -> f32 {
        self.pixel_ratio
    }

    fn fill_rect(&mut self, min: Vec2, size: Vec2, color: Color) {
        if color.is_transparent() {
            return;
        }
        self.ctx.set_fill_style_str(&color.css());
        self.ctx
            .fill_rect(min.x as f64, min.y as f64, size.x as f64, size.y as f64);
    }

    fn stroke_rect(&mut self, min: Vec2, size: Vec2, color: Color, line_width: f32) {
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.set_line_width(line_width as f64);
        self.ctx
            .stroke_rect(min.x as f64, min.y as f64, size.x as f64, size.y as f64);
    }

    fn draw_image(&mut self, src: &str, min: Vec2, size: Vec2) {
        let Some(img) = self.image(src).cloned() else {
            // Still loading
            return;
        };
        if let Err(e) = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            &img,
            min.x as f64,
            min.y as f64,
            size.x as f64,
            size.y as f64,
        ) {
            log::warn!("Failed to draw image {}: {:?}", src, e);
        }
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, style: &TextStyle, max_width: Option<f32>) {
        self.ctx.set_font(&style.css_font());
        self.ctx.set_fill_style_str(&style.color.css());
        self.ctx.set_text_align(style.align.as_str());
        self.ctx.set_text_baseline(style.baseline.as_str());

        let result = match max_width {
            Some(max) => {
                self.ctx
                    .fill_text_with_max_width(text, pos.x as f64, pos.y as f64, max as f64)
            }
            None => self.ctx.fill_text(text, pos.x as f64, pos.y as f64),
        };
        if let Err(e) = result {
            log::warn!("Failed to draw text: {:?}", e);
        }
    }
}
