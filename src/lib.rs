#![cfg(target_arch = "wasm32")]
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use spray_core::{cap_from_query, CapId, Rgba, SpraySession};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod actions;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod menu;
mod surface;

use actions::UiContext;
use constants::{CANVAS_ID, CLEAR_BUTTON_ID, DOWNLOAD_BUTTON_ID, MENU_HANDLE_ID, PAINT_COLOR_HEX};
use dom::Listener;
use frame::{RafHost, TickSlot};
use surface::CanvasSurface;

/// Everything the frame callback and pointer handlers mutate.
pub(crate) struct App {
    pub session: SpraySession<StdRng>,
    pub surface: CanvasSurface,
    pub host: RafHost,
}

/// Owns every subscription made by [`attach`] plus the frame loop.
pub struct SprayHandle {
    ui: UiContext,
    tick: TickSlot,
    listeners: Vec<Listener>,
    detached: bool,
}

impl SprayHandle {
    /// Remove all listeners and cancel any pending frame. Idempotent.
    pub fn detach(&mut self) {
        if self.detached {
            return;
        }
        self.detached = true;
        self.listeners.clear();
        {
            let mut app = self.ui.app.borrow_mut();
            let App { session, host, .. } = &mut *app;
            session.on_up(host);
        }
        self.tick.borrow_mut().take();
        log::info!("[spray] detached");
    }
}

impl Drop for SprayHandle {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Wire a canvas for spraying. The active cap is read from `caps` on every
/// frame.
pub fn attach(
    window: &web::Window,
    document: &web::Document,
    canvas: web::HtmlCanvasElement,
    caps: Rc<Cell<CapId>>,
) -> anyhow::Result<SprayHandle> {
    let surface = CanvasSurface::new(canvas.clone())?;
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let color = Rgba::from_hex(PAINT_COLOR_HEX).unwrap_or(Rgba::WHITE);
    let app = Rc::new(RefCell::new(App {
        session: SpraySession::with_color(StdRng::from_entropy(), color),
        surface,
        host: RafHost::new(window.clone(), tick.clone()),
    }));
    frame::install_tick(&tick, Rc::downgrade(&app), caps.clone());
    actions::resize_canvas(&app);

    let ui = UiContext {
        app: app.clone(),
        caps,
        document: document.clone(),
    };

    let mut listeners = events::wire_pointer_handlers(&events::PointerWiring {
        window: window.clone(),
        canvas,
        app: app.clone(),
    });
    let app_resize = app.clone();
    listeners.push(Listener::new(window, "resize", move |_: web::Event| {
        actions::resize_canvas(&app_resize);
    }));
    listeners.push(events::wire_global_keydown(window, ui.clone()));
    listeners.extend(wire_menu(&ui));
    menu::highlight_cap(document, ui.caps.get());

    Ok(SprayHandle {
        ui,
        tick,
        listeners,
        detached: false,
    })
}

fn wire_menu(ui: &UiContext) -> Vec<Listener> {
    let doc = &ui.document;
    let mut listeners = Vec::new();
    for (id, button_id) in menu::populate_caps(doc) {
        let ui = ui.clone();
        listeners.extend(dom::click_listener(doc, &button_id, move || {
            actions::select_cap(&ui, id)
        }));
    }
    let ui_menu = ui.clone();
    listeners.extend(dom::click_listener(doc, MENU_HANDLE_ID, move || {
        actions::toggle_menu(&ui_menu)
    }));
    let ui_download = ui.clone();
    listeners.extend(dom::click_listener(doc, DOWNLOAD_BUTTON_ID, move || {
        actions::download(&ui_download)
    }));
    let ui_clear = ui.clone();
    listeners.extend(dom::click_listener(doc, CLEAR_BUTTON_ID, move || {
        actions::clear(&ui_clear)
    }));
    listeners
}

thread_local! {
    static HANDLE: RefCell<Option<SprayHandle>> = const { RefCell::new(None) };
}

fn with_ui(f: impl FnOnce(&UiContext)) {
    HANDLE.with(|h| {
        if let Some(handle) = h.borrow().as_ref() {
            f(&handle.ui);
        }
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("graffiti-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let started = Instant::now();
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let initial = window
        .location()
        .search()
        .ok()
        .and_then(|s| cap_from_query(&s))
        .unwrap_or_default();
    let caps = Rc::new(Cell::new(initial));

    let handle = attach(&window, &document, canvas, caps)?;
    HANDLE.with(|h| {
        if let Some(mut old) = h.borrow_mut().replace(handle) {
            old.detach();
        }
    });
    log::info!(
        "[spray] ready with {} cap in {} ms",
        initial.as_str(),
        started.elapsed().as_millis()
    );
    Ok(())
}

/// Remove all canvas listeners and stop the frame loop.
#[wasm_bindgen]
pub fn detach() {
    let handle = HANDLE.with(|h| h.borrow_mut().take());
    if let Some(mut handle) = handle {
        handle.detach();
    }
}

/// Select a cap by id (`skinny`, `medium`, `fat`). Returns false for unknown ids.
#[wasm_bindgen]
pub fn select_cap(id: &str) -> bool {
    let Some(cap) = CapId::parse(id) else {
        return false;
    };
    with_ui(|ui| actions::select_cap(ui, cap));
    true
}

#[wasm_bindgen]
pub fn download() {
    with_ui(actions::download);
}

#[wasm_bindgen]
pub fn clear() {
    with_ui(actions::clear);
}

#[wasm_bindgen]
pub fn resize() {
    with_ui(|ui| actions::resize_canvas(&ui.app));
}

/// Available caps as `id:label` pairs for custom menus.
#[wasm_bindgen]
pub fn cap_labels() -> Vec<JsValue> {
    spray_core::all_caps()
        .iter()
        .map(|c| JsValue::from_str(&format!("{}:{}", c.id.as_str(), c.label)))
        .collect()
}

