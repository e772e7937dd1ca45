use crate::dom::Listener;
use crate::input;
use crate::App;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub window: web::Window,
    pub canvas: web::HtmlCanvasElement,
    pub app: Rc<RefCell<App>>,
}

/// Down on the canvas starts a stroke; move/up are taken from the window so a
/// stroke survives leaving the canvas.
pub fn wire_pointer_handlers(w: &PointerWiring) -> Vec<Listener> {
    vec![
        wire_pointerdown(w),
        wire_pointermove(w),
        wire_pointerup(w, "pointerup"),
        wire_pointerup(w, "pointercancel"),
    ]
}

fn wire_pointerdown(w: &PointerWiring) -> Listener {
    let w = w.clone();
    let canvas = w.canvas.clone();
    Listener::new(&canvas, "pointerdown", move |ev: web::PointerEvent| {
        if !input::is_spray_pointer(&ev) {
            return;
        }
        let pos = input::pointer_surface_pos(&ev, &w.canvas);
        {
            let mut app = w.app.borrow_mut();
            let App { session, host, .. } = &mut *app;
            session.on_down(pos, host);
        }
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    })
}

fn wire_pointermove(w: &PointerWiring) -> Listener {
    let w = w.clone();
    let window = w.window.clone();
    Listener::new(&window, "pointermove", move |ev: web::PointerEvent| {
        if !input::is_spray_pointer(&ev) {
            return;
        }
        let pos = input::pointer_surface_pos(&ev, &w.canvas);
        w.app.borrow_mut().session.on_move(pos);
    })
}

fn wire_pointerup(w: &PointerWiring, event: &'static str) -> Listener {
    let w = w.clone();
    let window = w.window.clone();
    Listener::new(&window, event, move |ev: web::PointerEvent| {
        if !ev.is_primary() {
            return;
        }
        let mut app = w.app.borrow_mut();
        if !app.session.is_spraying() {
            return;
        }
        let App { session, host, .. } = &mut *app;
        session.on_up(host);
        _ = w.canvas.release_pointer_capture(ev.pointer_id());
    })
}
