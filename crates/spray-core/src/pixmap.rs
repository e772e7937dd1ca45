//! Software RGBA8 surface.
//!
//! Used for headless rendering and tests. Pixels are stored straight
//! (non-premultiplied) and blended source-over, with coverage-based edges for
//! discs and lines.

use crate::surface::{encode_png, RasterSurface, Rgba, SurfaceError};

#[derive(Clone, Debug)]
pub struct Pixmap {
    width: u32,
    height: u32,
    dpr: f32,
    pixels: Vec<[u8; 4]>,
}

impl Pixmap {
    /// Logical size in CSS pixels; the backing store is scaled by `dpr`.
    pub fn new(width: f32, height: f32, dpr: f32) -> Self {
        let mut pixmap = Self {
            width: 0,
            height: 0,
            dpr: 1.0,
            pixels: Vec::new(),
        };
        pixmap.resize(width, height, dpr);
        pixmap
    }

    /// Backing store width in device pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn device_pixel_ratio(&self) -> f32 {
        self.dpr
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y * self.width + x) as usize])
    }

    pub fn as_rgba(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Number of pixels with any paint on them.
    pub fn painted_pixels(&self) -> usize {
        self.pixels.iter().filter(|p| p[3] > 0).count()
    }

    fn blend(&mut self, x: i64, y: i64, color: Rgba, coverage: f32) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let src_a = color.a.clamp(0.0, 1.0) * coverage.clamp(0.0, 1.0);
        if src_a <= 0.0 {
            return;
        }
        let dst = &mut self.pixels[(y as u64 * self.width as u64 + x as u64) as usize];
        let dst_a = dst[3] as f32 / 255.0;
        let out_a = src_a + dst_a * (1.0 - src_a);
        if out_a <= 0.0 {
            return;
        }
        let mix = |s: u8, d: u8| {
            let c = (s as f32 * src_a + d as f32 * dst_a * (1.0 - src_a)) / out_a;
            c.round().clamp(0.0, 255.0) as u8
        };
        *dst = [
            mix(color.r, dst[0]),
            mix(color.g, dst[1]),
            mix(color.b, dst[2]),
            (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
        ];
    }

    /// Blend every pixel whose center lies within `reach` of the shape, with
    /// coverage from `coverage_at(px, py)`.
    fn fill_bounds(
        &mut self,
        min: (f32, f32),
        max: (f32, f32),
        color: Rgba,
        coverage_at: impl Fn(f32, f32) -> f32,
    ) {
        let x0 = min.0.floor().max(0.0) as i64;
        let y0 = min.1.floor().max(0.0) as i64;
        let x1 = (max.0.ceil() as i64).min(self.width as i64 - 1);
        let y1 = (max.1.ceil() as i64).min(self.height as i64 - 1);
        for py in y0..=y1 {
            for px in x0..=x1 {
                let coverage = coverage_at(px as f32 + 0.5, py as f32 + 0.5);
                if coverage > 0.0 {
                    self.blend(px, py, color, coverage);
                }
            }
        }
    }
}

impl RasterSurface for Pixmap {
    fn resize(&mut self, width: f32, height: f32, device_pixel_ratio: f32) {
        let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        self.dpr = dpr;
        self.width = (width.max(0.0) * dpr) as u32;
        self.height = (height.max(0.0) * dpr) as u32;
        self.pixels = vec![[0; 4]; self.width as usize * self.height as usize];
    }

    fn draw_disc(&mut self, x: f32, y: f32, radius: f32, color: Rgba) {
        let (cx, cy, r) = (x * self.dpr, y * self.dpr, radius.max(0.0) * self.dpr);
        if !(cx.is_finite() && cy.is_finite() && r.is_finite()) {
            return;
        }
        let reach = r + 0.5;
        self.fill_bounds((cx - reach, cy - reach), (cx + reach, cy + reach), color, |px, py| {
            let d = ((px - cx).powi(2) + (py - cy).powi(2)).sqrt();
            (reach - d).min(1.0)
        });
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, thickness: f32, color: Rgba) {
        let (ax, ay) = (x1 * self.dpr, y1 * self.dpr);
        let (bx, by) = (x2 * self.dpr, y2 * self.dpr);
        let half = thickness.max(0.0) * self.dpr * 0.5;
        if ![ax, ay, bx, by, half].iter().all(|v| v.is_finite()) {
            return;
        }
        let reach = half + 0.5;
        let (dx, dy) = (bx - ax, by - ay);
        let len_sq = dx * dx + dy * dy;
        self.fill_bounds(
            (ax.min(bx) - reach, ay.min(by) - reach),
            (ax.max(bx) + reach, ay.max(by) + reach),
            color,
            |px, py| {
                let t = if len_sq > 0.0 {
                    (((px - ax) * dx + (py - ay) * dy) / len_sq).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                let d = ((px - (ax + dx * t)).powi(2) + (py - (ay + dy * t)).powi(2)).sqrt();
                (reach - d).min(1.0)
            },
        );
    }

    fn draw_rect_1x1(&mut self, x: f32, y: f32, color: Rgba) {
        let (px, py) = (x * self.dpr, y * self.dpr);
        if !(px.is_finite() && py.is_finite()) {
            return;
        }
        // one logical pixel covers dpr device pixels per side
        let side = self.dpr.ceil().max(1.0) as i64;
        let (x0, y0) = (px.floor() as i64, py.floor() as i64);
        for oy in 0..side {
            for ox in 0..side {
                self.blend(x0 + ox, y0 + oy, color, 1.0);
            }
        }
    }

    fn clear(&mut self) {
        self.pixels.fill([0; 4]);
    }

    fn encode_png(&self) -> Result<Vec<u8>, SurfaceError> {
        encode_png(self.width, self.height, self.as_rgba())
    }
}
