use spray_core::{encode_png, RasterSurface, Rgba, SurfaceError};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `RasterSurface` backed by a 2D canvas context scaled by the device pixel
/// ratio, so drawing calls take CSS pixels.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext error: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }
}

impl RasterSurface for CanvasSurface {
    fn resize(&mut self, width: f32, height: f32, device_pixel_ratio: f32) {
        let dpr = device_pixel_ratio.max(f32::EPSILON) as f64;
        // setting the backing size drops the bitmap and resets the transform
        self.canvas
            .set_width(((width.max(0.0) as f64 * dpr) as u32).max(1));
        self.canvas
            .set_height(((height.max(0.0) as f64 * dpr) as u32).max(1));
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    }

    fn draw_disc(&mut self, x: f32, y: f32, radius: f32, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(x as f64, y as f64, radius.max(0.0) as f64, 0.0, TAU);
        self.ctx.fill();
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, thickness: f32, color: Rgba) {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(thickness as f64);
        self.ctx.begin_path();
        self.ctx.move_to(x1 as f64, y1 as f64);
        self.ctx.line_to(x2 as f64, y2 as f64);
        self.ctx.stroke();
    }

    fn draw_rect_1x1(&mut self, x: f32, y: f32, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(x as f64, y as f64, 1.0, 1.0);
    }

    fn clear(&mut self) {
        self.ctx.save();
        _ = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
        self.ctx.restore();
    }

    fn encode_png(&self) -> Result<Vec<u8>, SurfaceError> {
        let (w, h) = (self.canvas.width(), self.canvas.height());
        if w == 0 || h == 0 {
            return Err(SurfaceError::EmptySurface);
        }
        let data = self
            .ctx
            .get_image_data(0.0, 0.0, w as f64, h as f64)
            .map_err(|e| SurfaceError::Backend(format!("{:?}", e)))?;
        encode_png(w, h, &data.data())
    }
}
