//! Navigation sections and URL-based section matching.

use std::fmt;

/// One entry of the site navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NavSection {
    Solutions,
    Services,
    Projects,
    About,
    Blog,
    Careers,
    Contact,
}

impl NavSection {
    /// Order in which section identifiers are tested against the page URL.
    /// A URL may contain several identifiers; the earliest entry here wins.
    pub const PRIORITY: [NavSection; 7] = [
        NavSection::Careers,
        NavSection::Solutions,
        NavSection::Services,
        NavSection::Projects,
        NavSection::About,
        NavSection::Blog,
        NavSection::Contact,
    ];

    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            NavSection::Solutions => "solutions",
            NavSection::Services => "services",
            NavSection::Projects => "projects",
            NavSection::About => "about",
            NavSection::Blog => "blog",
            NavSection::Careers => "careers",
            NavSection::Contact => "contact",
        }
    }

    /// Class selector of the section's nav button, e.g. `.blog_button`.
    pub fn button_selector(self) -> String {
        format!(".{}_button", self.as_str())
    }

    /// Class selector of the section's highlight indicator, e.g. `.blog_highlight`.
    pub fn highlight_selector(self) -> String {
        format!(".{}_highlight", self.as_str())
    }

    #[inline]
    pub fn matches_url(self, url: &str) -> bool {
        url.contains(self.as_str())
    }
}

impl fmt::Display for NavSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First section in priority order whose identifier is a (case-sensitive)
/// substring of `url`.
pub fn section_for_url(url: &str) -> Option<NavSection> {
    NavSection::PRIORITY.into_iter().find(|s| s.matches_url(url))
}
