//! Drawing surface abstraction used by the synthesizer.
//!
//! Coordinates are logical (CSS) pixels; implementations apply the device
//! pixel ratio to their backing store.

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("png encode failed: {0}")]
    Encode(#[from] image::ImageError),
    #[error("surface has no pixels")]
    EmptySurface,
    #[error("surface backend error: {0}")]
    Backend(String),
}

/// Straight (non-premultiplied) colour with a fractional alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// CSS colour string, alpha rounded to two decimals.
    pub fn to_css(self) -> String {
        format!("rgba({},{},{},{:.2})", self.r, self.g, self.b, self.a)
    }

    /// Parse `#rrggbb` or `#rgb`.
    pub fn from_hex(hex: &str) -> Option<Rgba> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.is_ascii() {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match digits.len() {
            6 => Some(Rgba::rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                let short = |i: usize| channel(&digits[i..i + 1]).map(|v| v * 17);
                Some(Rgba::rgb(short(0)?, short(1)?, short(2)?))
            }
            _ => None,
        }
    }
}

pub trait RasterSurface {
    /// Reallocate the backing store at `width * dpr` by `height * dpr`.
    /// Existing content is dropped.
    fn resize(&mut self, width: f32, height: f32, device_pixel_ratio: f32);
    fn draw_disc(&mut self, x: f32, y: f32, radius: f32, color: Rgba);
    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, thickness: f32, color: Rgba);
    fn draw_rect_1x1(&mut self, x: f32, y: f32, color: Rgba);
    /// Erase to fully transparent.
    fn clear(&mut self);
    fn encode_png(&self) -> Result<Vec<u8>, SurfaceError>;
}

/// Encode a tightly packed RGBA8 buffer as PNG.
pub fn encode_png(width: u32, height: u32, rgba: &[u8]) -> Result<Vec<u8>, SurfaceError> {
    if width == 0 || height == 0 {
        return Err(SurfaceError::EmptySurface);
    }
    let mut out = Vec::new();
    PngEncoder::new(&mut out).write_image(rgba, width, height, ExtendedColorType::Rgba8)?;
    Ok(out)
}
