use crate::section::NavSection;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    /// A required element is not present in the document.
    #[error("missing required element `{selector}`")]
    MissingElement { selector: String },
    /// Activation was requested for a section with no highlight element.
    #[error("section `{0}` has no registered highlight")]
    UnregisteredSection(NavSection),
}

impl NavError {
    pub fn missing(selector: impl Into<String>) -> Self {
        NavError::MissingElement {
            selector: selector.into(),
        }
    }
}
