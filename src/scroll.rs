use crate::dom::{self, SmoothScroll};
use anyhow::Context;
use navbar_core::{resolve_contact, ContactScroll};
use web_sys as web;

/// Contact button scrolls smoothly to the contact form instead of following its link.
pub fn wire_contact_scroll(document: &web::Document) -> anyhow::Result<()> {
    let Some((button, target)) =
        resolve_contact(|sel| dom::query(document, sel), |sel| dom::query(document, sel))
            .context("contact scroll")?
    else {
        log::debug!("[scroll] no contact button on this page");
        return Ok(());
    };

    let scroll = ContactScroll::new(SmoothScroll::new(target));
    dom::add_click_listener(&button, move |ev| scroll.on_click(&ev));
    log::info!("[scroll] contact button bound");
    Ok(())
}
