use crate::dom::{self, InlineDisplay};
use anyhow::Context;
use navbar_core::{initialize_highlighting, resolve_sections, ResolvedNav, HIGHLIGHT_SELECTOR};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Resolve section buttons and highlights, show the highlight for `url`, and
/// bind a click handler per button.
pub fn wire_nav_highlights(document: &web::Document, url: &str) -> anyhow::Result<()> {
    let ResolvedNav {
        buttons,
        mut registry,
    } = resolve_sections(
        |sel| dom::query(document, sel),
        |sel| dom::query_html(document, sel).map(InlineDisplay::block),
    )
    .context("nav highlights")?;

    // Catch-all so no stray `.highlight` stays visible next to the active one.
    for el in dom::query_all_html(document, HIGHLIGHT_SELECTOR) {
        registry.register_unbound(InlineDisplay::block(el));
    }

    let sections: Vec<_> = buttons.iter().map(|(s, _)| *s).collect();
    let state = initialize_highlighting(&sections, registry, url).context("nav highlights")?;
    let state = Rc::new(RefCell::new(state));

    for (section, button) in buttons {
        let state = state.clone();
        dom::add_click_listener(&button, move |_| {
            match state.borrow_mut().activate(section) {
                Ok(()) => log::debug!("[nav] activated {}", section),
                Err(e) => log::error!("[nav] {}", e),
            }
        });
    }
    log::info!("[nav] bound {} section buttons", sections.len());
    Ok(())
}
