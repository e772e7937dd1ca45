use crate::App;
use spray_core::{CapId, FrameHandle, FrameHost};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `FrameHost` over `requestAnimationFrame`, re-arming the shared tick closure.
pub struct RafHost {
    window: web::Window,
    tick: TickSlot,
}

impl RafHost {
    pub fn new(window: web::Window, tick: TickSlot) -> Self {
        Self { window, tick }
    }
}

impl FrameHost for RafHost {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        let slot = self.tick.borrow();
        let tick = slot.as_ref()?;
        match self
            .window
            .request_animation_frame(tick.as_ref().unchecked_ref())
        {
            Ok(id) => Some(FrameHandle(id as u32 as u64)),
            Err(e) => {
                log::error!("requestAnimationFrame error: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        _ = self.window.cancel_animation_frame(handle.0 as u32 as i32);
    }
}

/// Install the per-frame closure: one synthesis pass per refresh while the
/// session keeps rescheduling itself.
pub fn install_tick(tick: &TickSlot, app: Weak<RefCell<App>>, caps: Rc<Cell<CapId>>) {
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let Some(app) = app.upgrade() else {
            return;
        };
        let mut app = app.borrow_mut();
        let App {
            session,
            surface,
            host,
        } = &mut *app;
        session.frame(surface, &*caps, host);
    }) as Box<dyn FnMut()>));
}
