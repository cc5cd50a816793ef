//! Highlight registry and the active-section state machine.
//!
//! Nothing here touches the DOM directly. Elements are anything implementing
//! [`Toggle`]; the web frontend wraps `HtmlElement`s, tests use plain flags.

use crate::error::NavError;
use crate::section::{section_for_url, NavSection};

/// Something that can be shown or hidden.
pub trait Toggle {
    fn show(&self);
    fn hide(&self);
}

/// Highlight indicators known to the page, keyed by section.
#[derive(Debug)]
pub struct HighlightRegistry<E> {
    bound: Vec<(NavSection, E)>,
    unbound: Vec<E>,
}

impl<E> Default for HighlightRegistry<E> {
    fn default() -> Self {
        Self {
            bound: Vec::new(),
            unbound: Vec::new(),
        }
    }
}

impl<E> HighlightRegistry<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the highlight for `section`, replacing any previous one.
    pub fn register(&mut self, section: NavSection, element: E) {
        match self.bound.iter_mut().find(|(s, _)| *s == section) {
            Some(slot) => slot.1 = element,
            None => self.bound.push((section, element)),
        }
    }

    /// Track a highlight that belongs to no section; it is only ever hidden.
    pub fn register_unbound(&mut self, element: E) {
        self.unbound.push(element);
    }

    pub fn get(&self, section: NavSection) -> Option<&E> {
        self.bound
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, e)| e)
    }

    #[inline]
    pub fn contains(&self, section: NavSection) -> bool {
        self.get(section).is_some()
    }

    pub fn sections(&self) -> Vec<NavSection> {
        self.bound.iter().map(|(s, _)| *s).collect()
    }

    fn all(&self) -> impl Iterator<Item = &E> {
        self.bound.iter().map(|(_, e)| e).chain(self.unbound.iter())
    }
}

/// Which section is highlighted for the lifetime of the page.
#[derive(Debug)]
pub struct NavigationState<E> {
    registry: HighlightRegistry<E>,
    active: Option<NavSection>,
}

impl<E: Toggle> NavigationState<E> {
    /// Wrap a registry without touching element visibility.
    pub fn new(registry: HighlightRegistry<E>) -> Self {
        Self {
            registry,
            active: None,
        }
    }

    #[inline]
    pub fn current_section(&self) -> Option<NavSection> {
        self.active
    }

    pub fn deactivate_all(&mut self) {
        for el in self.registry.all() {
            el.hide();
        }
        self.active = None;
    }

    /// Hide every highlight, then show the one for `section`.
    ///
    /// Fails without changing anything if `section` has no highlight.
    pub fn activate(&mut self, section: NavSection) -> Result<(), NavError> {
        if !self.registry.contains(section) {
            return Err(NavError::UnregisteredSection(section));
        }
        self.deactivate_all();
        if let Some(el) = self.registry.get(section) {
            el.show();
        }
        self.active = Some(section);
        Ok(())
    }

    /// Derive the active section from the page URL. Everything is hidden when
    /// no section matches or the winning section has no highlight.
    pub fn activate_from_url(&mut self, url: &str) -> Option<NavSection> {
        self.deactivate_all();
        let section = section_for_url(url)?;
        self.activate(section).ok()?;
        Some(section)
    }
}

/// Build the navigation state for a page.
///
/// `sections` lists every section that has a nav button; each must have a
/// highlight in `registry`. The initial active section comes from `current_url`.
pub fn initialize_highlighting<E: Toggle>(
    sections: &[NavSection],
    registry: HighlightRegistry<E>,
    current_url: &str,
) -> Result<NavigationState<E>, NavError> {
    if let Some(missing) = sections.iter().find(|s| !registry.contains(**s)) {
        return Err(NavError::missing(missing.highlight_selector()));
    }
    let mut state = NavigationState::new(registry);
    match state.activate_from_url(current_url) {
        Some(section) => log::info!("[nav] active section from url: {}", section),
        None => match section_for_url(current_url) {
            Some(section) => log::warn!(
                "[nav] url matches `{}` but the page has no highlight for it",
                section
            ),
            None => log::info!("[nav] no section matches {}", current_url),
        },
    }
    Ok(state)
}
