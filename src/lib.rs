#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use web_sys as web;

mod dom;
mod menu;
mod nav;
mod scroll;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("navbar-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    dom::on_dom_ready(&document, init).map_err(|e| JsValue::from_str(&format!("{:#}", e)))
}

// Each behavior binds on its own; one failing does not stop the others.
fn init(document: &web::Document) -> anyhow::Result<()> {
    let url = web::window()
        .ok_or_else(|| anyhow::anyhow!("no window"))?
        .location()
        .href()
        .map_err(|e| anyhow::anyhow!("location.href: {:?}", e))?;

    let results = [
        nav::wire_nav_highlights(document, &url),
        menu::wire_mobile_menu(document),
        scroll::wire_contact_scroll(document),
    ];
    let mut first_err = None;
    for result in results {
        if let Err(e) = result {
            log::error!("init error: {:#}", e);
            first_err.get_or_insert(e);
        }
    }
    first_err.map_or(Ok(()), Err)
}
