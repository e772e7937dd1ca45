use crate::constants::{ACTIVE_CLASS, CAP_LIST_ID, MENU_HANDLE_ID, MENU_PANEL_ID, OPEN_CLASS};
use spray_core::{all_caps, CapId};
use web_sys as web;

#[inline]
fn cap_button_id(id: CapId) -> String {
    format!("cap-{}", id.as_str())
}

/// Fill the cap list from the preset table. Returns the created button ids.
pub fn populate_caps(document: &web::Document) -> Vec<(CapId, String)> {
    let Some(list) = document.get_element_by_id(CAP_LIST_ID) else {
        log::warn!("[menu] missing #{}", CAP_LIST_ID);
        return Vec::new();
    };
    list.set_inner_html("");
    let mut ids = Vec::new();
    for cap in all_caps() {
        let Ok(button) = document.create_element("button") else {
            continue;
        };
        let button_id = cap_button_id(cap.id);
        button.set_id(&button_id);
        button.set_text_content(Some(cap.label));
        if list.append_child(&button).is_ok() {
            ids.push((cap.id, button_id));
        }
    }
    ids
}

pub fn highlight_cap(document: &web::Document, active: CapId) {
    for id in CapId::ALL {
        if let Some(el) = document.get_element_by_id(&cap_button_id(id)) {
            _ = el.class_list().toggle_with_force(ACTIVE_CLASS, id == active);
        }
    }
}

#[inline]
pub fn is_open(document: &web::Document) -> bool {
    document
        .get_element_by_id(MENU_PANEL_ID)
        .map(|el| el.class_list().contains(OPEN_CLASS))
        .unwrap_or(false)
}

pub fn set_open(document: &web::Document, open: bool) {
    for id in [MENU_PANEL_ID, MENU_HANDLE_ID] {
        if let Some(el) = document.get_element_by_id(id) {
            _ = el.class_list().toggle_with_force(OPEN_CLASS, open);
        }
    }
}

#[inline]
pub fn toggle(document: &web::Document) {
    set_open(document, !is_open(document));
}
