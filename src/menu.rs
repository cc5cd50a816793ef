use crate::dom::{self, BodyBackdrop, InlineDisplay};
use anyhow::Context;
use navbar_core::{resolve_menu, MenuElements, MobileMenu};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn wire_mobile_menu(document: &web::Document) -> anyhow::Result<()> {
    let Some(found) = resolve_menu(|sel| dom::query_html(document, sel)).context("mobile menu")?
    else {
        log::debug!("[menu] no mobile menu button on this page");
        return Ok(());
    };
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("mobile menu: missing <body>"))?;

    let button = found.menu_button.clone();
    let elements = MenuElements {
        menu_button: InlineDisplay::styled(found.menu_button),
        logo: InlineDisplay::styled(found.logo),
        header: InlineDisplay::styled(found.header),
        content: InlineDisplay::styled(found.content),
        footer: InlineDisplay::styled(found.footer),
        mobile_menu: InlineDisplay::block(found.mobile_menu),
    };
    let menu = Rc::new(RefCell::new(MobileMenu::new(elements, BodyBackdrop(body))));

    dom::add_click_listener(&button, move |_| {
        if menu.borrow_mut().open() {
            log::debug!("[menu] opened");
        }
    });
    log::info!("[menu] mobile menu bound");
    Ok(())
}
