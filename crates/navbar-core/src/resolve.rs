//! Resolve the elements each behavior needs, once, before any handler is bound.
//!
//! Lookups are passed in as closures taking a selector so the rules can run
//! against the real document or a test fixture.

use crate::constants::*;
use crate::error::NavError;
use crate::highlight::HighlightRegistry;
use crate::menu::MenuElements;
use crate::section::NavSection;

/// Nav buttons present on the page and the highlights they drive.
#[derive(Debug)]
pub struct ResolvedNav<B, E> {
    pub buttons: Vec<(NavSection, B)>,
    pub registry: HighlightRegistry<E>,
}

impl<B, E> ResolvedNav<B, E> {
    pub fn button_sections(&self) -> Vec<NavSection> {
        self.buttons.iter().map(|(s, _)| *s).collect()
    }
}

/// Sections without a button are skipped (their highlight, if any, is still
/// registered); a button without its highlight is an error.
pub fn resolve_sections<B, E>(
    mut find_button: impl FnMut(&str) -> Option<B>,
    mut find_highlight: impl FnMut(&str) -> Option<E>,
) -> Result<ResolvedNav<B, E>, NavError> {
    let mut buttons = Vec::new();
    let mut registry = HighlightRegistry::new();
    for section in NavSection::PRIORITY {
        let highlight_selector = section.highlight_selector();
        let button = find_button(&section.button_selector());
        let highlight = find_highlight(&highlight_selector);
        match (button, highlight) {
            (Some(button), Some(highlight)) => {
                buttons.push((section, button));
                registry.register(section, highlight);
            }
            (Some(_), None) => return Err(NavError::missing(highlight_selector)),
            (None, Some(highlight)) => registry.register(section, highlight),
            (None, None) => {}
        }
    }
    Ok(ResolvedNav { buttons, registry })
}

fn require<E>(find: &mut impl FnMut(&str) -> Option<E>, selector: &str) -> Result<E, NavError> {
    find(selector).ok_or_else(|| NavError::missing(selector))
}

/// `Ok(None)` when the page has no menu button at all.
pub fn resolve_menu<E>(
    mut find: impl FnMut(&str) -> Option<E>,
) -> Result<Option<MenuElements<E>>, NavError> {
    let Some(menu_button) = find(MENU_BUTTON_SELECTOR) else {
        return Ok(None);
    };
    Ok(Some(MenuElements {
        menu_button,
        logo: require(&mut find, LOGO_SELECTOR)?,
        header: require(&mut find, HEADER_SELECTOR)?,
        content: require(&mut find, CONTENT_SELECTOR)?,
        footer: require(&mut find, FOOTER_SELECTOR)?,
        mobile_menu: require(&mut find, MOBILE_MENU_SELECTOR)?,
    }))
}

/// Contact button and its scroll target. `Ok(None)` when there is no button.
pub fn resolve_contact<B, T>(
    find_button: impl FnOnce(&str) -> Option<B>,
    mut find_target: impl FnMut(&str) -> Option<T>,
) -> Result<Option<(B, T)>, NavError> {
    let Some(button) = find_button(CONTACT_BUTTON_SELECTOR) else {
        return Ok(None);
    };
    let target = require(&mut find_target, CONTACT_TARGET_SELECTOR)?;
    Ok(Some((button, target)))
}
