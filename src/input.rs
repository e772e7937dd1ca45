use glam::Vec2;
use web_sys as web;

/// Pointer position in canvas-local CSS pixels (the drawing coordinate space).
#[inline]
pub fn pointer_surface_pos(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}

/// Only the primary pointer sprays.
#[inline]
pub fn is_spray_pointer(ev: &web::PointerEvent) -> bool {
    ev.is_primary() && ev.button() <= 0
}
