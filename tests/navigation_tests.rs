// Host-side tests for section matching and the active-section state.
// The web crate is wasm-only, so these drive `navbar_core` with fake elements.

use navbar_core::*;
use std::cell::Cell;
use std::rc::Rc;

/// Visibility flag shared between the registry and the test.
#[derive(Clone, Debug, Default)]
struct Flag(Rc<Cell<Option<bool>>>);

impl Flag {
    fn visible(&self) -> bool {
        self.0.get() == Some(true)
    }
}

impl Toggle for Flag {
    fn show(&self) {
        self.0.set(Some(true));
    }
    fn hide(&self) {
        self.0.set(Some(false));
    }
}

const ALL: [NavSection; 7] = NavSection::PRIORITY;

fn full_registry() -> (HighlightRegistry<Flag>, Vec<(NavSection, Flag)>) {
    let mut registry = HighlightRegistry::new();
    let mut flags = Vec::new();
    for s in ALL {
        let f = Flag::default();
        registry.register(s, f.clone());
        flags.push((s, f));
    }
    (registry, flags)
}

fn visible_sections(flags: &[(NavSection, Flag)]) -> Vec<NavSection> {
    flags
        .iter()
        .filter(|(_, f)| f.visible())
        .map(|(s, _)| *s)
        .collect()
}

#[test]
fn single_identifier_in_url_activates_that_section() {
    for s in ALL {
        let (registry, flags) = full_registry();
        let url = format!("https://example.com/{}/", s);
        let state = initialize_highlighting(&ALL, registry, &url).unwrap();
        assert_eq!(state.current_section(), Some(s));
        assert_eq!(visible_sections(&flags), vec![s]);
    }
}

#[test]
fn careers_wins_over_blog() {
    let (registry, flags) = full_registry();
    let url = "https://example.com/blog/careers-at-acme";
    let state = initialize_highlighting(&ALL, registry, url).unwrap();
    assert_eq!(state.current_section(), Some(NavSection::Careers));
    assert_eq!(visible_sections(&flags), vec![NavSection::Careers]);
}

#[test]
fn about_wins_over_blog_regardless_of_position() {
    assert_eq!(
        section_for_url("https://example.com/blog/about"),
        Some(NavSection::About)
    );
}

#[test]
fn url_without_identifier_hides_everything() {
    let (registry, flags) = full_registry();
    let state = initialize_highlighting(&ALL, registry, "https://example.com/").unwrap();
    assert_eq!(state.current_section(), None);
    assert!(visible_sections(&flags).is_empty());
    // Every highlight was explicitly hidden, not just left alone
    assert!(flags.iter().all(|(_, f)| f.0.get() == Some(false)));
}

#[test]
fn winning_section_without_highlight_shows_nothing() {
    // Careers outranks blog; with no careers highlight the page shows nothing
    // rather than falling through to blog.
    let mut registry = HighlightRegistry::new();
    let blog = Flag::default();
    registry.register(NavSection::Blog, blog.clone());
    let state =
        initialize_highlighting(&[NavSection::Blog], registry, "https://x.io/careers/blog").unwrap();
    assert_eq!(state.current_section(), None);
    assert!(!blog.visible());
}

#[test]
fn click_overrides_url_state() {
    let (registry, flags) = full_registry();
    let mut state = initialize_highlighting(&ALL, registry, "https://example.com/about-us").unwrap();
    assert_eq!(visible_sections(&flags), vec![NavSection::About]);

    state.activate(NavSection::Projects).unwrap();
    assert_eq!(state.current_section(), Some(NavSection::Projects));
    assert_eq!(visible_sections(&flags), vec![NavSection::Projects]);
}

#[test]
fn clicking_active_section_again_changes_nothing() {
    let (registry, flags) = full_registry();
    let mut state = initialize_highlighting(&ALL, registry, "https://example.com/blog").unwrap();
    state.activate(NavSection::Blog).unwrap();
    state.activate(NavSection::Blog).unwrap();
    assert_eq!(visible_sections(&flags), vec![NavSection::Blog]);
}

#[test]
fn every_click_leaves_exactly_one_highlight() {
    let (registry, flags) = full_registry();
    let mut state = initialize_highlighting(&ALL, registry, "https://example.com/").unwrap();
    for s in [
        NavSection::Contact,
        NavSection::Solutions,
        NavSection::Services,
        NavSection::Solutions,
        NavSection::Careers,
    ] {
        state.activate(s).unwrap();
        assert_eq!(visible_sections(&flags), vec![s]);
    }
}

#[test]
fn button_without_highlight_fails_at_initialization() {
    let mut registry = HighlightRegistry::new();
    registry.register(NavSection::Blog, Flag::default());
    let err = initialize_highlighting(
        &[NavSection::Blog, NavSection::Services],
        registry,
        "https://example.com/",
    )
    .unwrap_err();
    assert_eq!(err, NavError::missing(".services_highlight"));
}

#[test]
fn activating_unregistered_section_keeps_current_state() {
    let mut registry = HighlightRegistry::new();
    let blog = Flag::default();
    registry.register(NavSection::Blog, blog.clone());
    let mut state = NavigationState::new(registry);
    state.activate(NavSection::Blog).unwrap();

    let err = state.activate(NavSection::About).unwrap_err();
    assert_eq!(err, NavError::UnregisteredSection(NavSection::About));
    assert_eq!(state.current_section(), Some(NavSection::Blog));
    assert!(blog.visible());
}

#[test]
fn unbound_highlights_are_hidden_on_activation() {
    let mut registry = HighlightRegistry::new();
    let stray = Flag::default();
    stray.show();
    registry.register(NavSection::Services, Flag::default());
    registry.register_unbound(stray.clone());

    let mut state = NavigationState::new(registry);
    state.activate(NavSection::Services).unwrap();
    assert!(!stray.visible());
}

#[test]
fn registering_twice_replaces_the_element() {
    let mut registry = HighlightRegistry::new();
    let old = Flag::default();
    let new = Flag::default();
    registry.register(NavSection::About, old.clone());
    registry.register(NavSection::About, new.clone());
    assert_eq!(registry.sections(), vec![NavSection::About]);

    let mut state = NavigationState::new(registry);
    state.activate(NavSection::About).unwrap();
    assert!(new.visible());
    assert!(!old.visible());
}
