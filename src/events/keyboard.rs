use crate::actions::{self, UiContext};
use crate::dom::Listener;
use spray_core::{action_for_key, KeyAction};
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, ctx: &UiContext) {
    if ev.ctrl_key() || ev.meta_key() || ev.alt_key() || ev.repeat() {
        return;
    }
    let Some(action) = action_for_key(&ev.key()) else {
        return;
    };
    log::info!("[keys] {:?}", action);
    match action {
        KeyAction::SelectCap(id) => actions::select_cap(ctx, id),
        KeyAction::Download => actions::download(ctx),
        KeyAction::Clear => actions::clear(ctx),
        KeyAction::ToggleMenu => actions::toggle_menu(ctx),
    }
    ev.prevent_default();
}

pub fn wire_global_keydown(window: &web::Window, ctx: UiContext) -> Listener {
    Listener::new(window, "keydown", move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &ctx);
    })
}
