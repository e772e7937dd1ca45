//! UI actions shared by the menu buttons, keyboard shortcuts and JS exports.

use crate::dom;
use crate::menu;
use crate::App;
use spray_core::{export_png, CapId, ExportedImage, RasterSurface};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct UiContext {
    pub app: Rc<RefCell<App>>,
    pub caps: Rc<Cell<CapId>>,
    pub document: web::Document,
}

pub fn select_cap(ctx: &UiContext, id: CapId) {
    ctx.caps.set(id);
    menu::highlight_cap(&ctx.document, id);
    log::info!("[menu] cap {}", id.as_str());
}

pub fn clear(ctx: &UiContext) {
    {
        let mut app = ctx.app.borrow_mut();
        let App { session, surface, .. } = &mut *app;
        session.clear(surface);
    }
    dom::flash(&ctx.document);
}

pub fn toggle_menu(ctx: &UiContext) {
    menu::toggle(&ctx.document);
}

/// Wait one frame so any pending spray pass lands, then encode and save.
pub fn download(ctx: &UiContext) {
    let ctx = ctx.clone();
    dom::next_frame(move || {
        let iso: String = js_sys::Date::new_0().to_iso_string().into();
        let exported = export_png(&ctx.app.borrow().surface, &iso);
        match exported {
            Ok(image) => {
                if let Err(e) = save_file(&ctx.document, &image) {
                    log::error!("[export] save failed: {:?}", e);
                }
            }
            Err(e) => log::error!("[export] encode failed: {}", e),
        }
    });
}

fn save_file(document: &web::Document, image: &ExportedImage) -> anyhow::Result<()> {
    let js_err = |e: wasm_bindgen::JsValue| anyhow::anyhow!("{:?}", e);
    let bytes = js_sys::Uint8Array::from(image.png.as_slice());
    let parts = js_sys::Array::of1(&bytes);
    let opts = web::BlobPropertyBag::new();
    opts.set_type("image/png");
    let blob = web::Blob::new_with_u8_array_sequence_and_options(&parts, &opts).map_err(js_err)?;
    let url = web::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let link = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into::<web::HtmlAnchorElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    link.set_download(&image.file_name);
    link.set_href(&url);
    link.click();
    _ = web::Url::revoke_object_url(&url);
    Ok(())
}

/// Reallocate the backing store at the canvas's current CSS size. Content is
/// dropped.
pub fn resize_canvas(app: &Rc<RefCell<App>>) {
    let mut app = app.borrow_mut();
    let (w, h, dpr) = dom::canvas_css_size(app.surface.canvas());
    app.surface.resize(w, h, dpr);
}
