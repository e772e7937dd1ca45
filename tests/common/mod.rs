// Recording surface shared by the synthesis and session tests.

use spray_core::{RasterSurface, Rgba, SurfaceError};

#[derive(Clone, Copy, Debug)]
pub struct Disc {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: Rgba,
}

#[derive(Default)]
pub struct CountingSurface {
    pub discs: Vec<Disc>,
    pub lines: Vec<(f32, f32, f32, f32, f32)>,
    pub rects: Vec<(f32, f32, Rgba)>,
    pub clears: usize,
}

impl CountingSurface {
    pub fn draw_calls(&self) -> usize {
        self.discs.len() + self.lines.len() + self.rects.len()
    }
}

impl RasterSurface for CountingSurface {
    fn resize(&mut self, _width: f32, _height: f32, _device_pixel_ratio: f32) {
        self.clear();
    }

    fn draw_disc(&mut self, x: f32, y: f32, radius: f32, color: Rgba) {
        self.discs.push(Disc {
            x,
            y,
            radius,
            color,
        });
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, thickness: f32, _color: Rgba) {
        self.lines.push((x1, y1, x2, y2, thickness));
    }

    fn draw_rect_1x1(&mut self, x: f32, y: f32, color: Rgba) {
        self.rects.push((x, y, color));
    }

    fn clear(&mut self) {
        self.discs.clear();
        self.lines.clear();
        self.rects.clear();
        self.clears += 1;
    }

    fn encode_png(&self) -> Result<Vec<u8>, SurfaceError> {
        Err(SurfaceError::Backend("recording surface".into()))
    }
}
