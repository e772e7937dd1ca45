use crate::constants::{FLASH_REMOVE_MS, FLASH_STYLE};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// An event listener that stays registered for as long as the value lives.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new<E>(target: &web::EventTarget, event: &'static str, mut handler: impl FnMut(E) + 'static) -> Self
    where
        E: JsCast,
    {
        let closure = Closure::wrap(
            Box::new(move |ev: web::Event| handler(ev.unchecked_into::<E>())) as Box<dyn FnMut(_)>,
        );
        if let Err(e) =
            target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        {
            log::warn!("addEventListener({}) failed: {:?}", event, e);
        }
        Self {
            target: target.clone(),
            event,
            closure,
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

#[inline]
pub fn click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) -> Option<Listener> {
    let el = document.get_element_by_id(element_id)?;
    Some(Listener::new(&el, "click", move |_: web::MouseEvent| handler()))
}

/// CSS size of the canvas and the current device pixel ratio.
pub fn canvas_css_size(canvas: &web::HtmlCanvasElement) -> (f32, f32, f32) {
    let dpr = web::window().map_or(1.0, |w| w.device_pixel_ratio());
    let rect = canvas.get_bounding_client_rect();
    (rect.width() as f32, rect.height() as f32, dpr as f32)
}

/// Run `f` once on the next animation frame.
pub fn next_frame(f: impl FnOnce() + 'static) {
    if let Some(w) = web::window() {
        let cb = Closure::once_into_js(f);
        if let Err(e) = w.request_animation_frame(cb.unchecked_ref()) {
            log::warn!("requestAnimationFrame failed: {:?}", e);
        }
    }
}

/// Brief translucent overlay acknowledging a clear.
pub fn flash(document: &web::Document) {
    let Some(body) = document.body() else {
        return;
    };
    let Ok(el) = document.create_element("div") else {
        return;
    };
    _ = el.set_attribute("style", FLASH_STYLE);
    if body.append_child(&el).is_err() {
        return;
    }
    let fading = el.clone();
    next_frame(move || {
        if let Some(html) = fading.dyn_ref::<web::HtmlElement>() {
            _ = html.style().set_property("opacity", "0");
        }
    });
    if let Some(w) = web::window() {
        let remove = Closure::once_into_js(move || el.remove());
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
            remove.unchecked_ref(),
            FLASH_REMOVE_MS,
        );
    }
}
