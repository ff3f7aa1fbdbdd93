//! Error type for the page navigator.
//!
//! Every variant is non-fatal: callers log it and the affected feature
//! simply does not appear.

#[derive(Debug, Clone, PartialEq)]
pub enum PageError {
    /// The page has no recognizable primary item.
    PrimaryItemNotFound,
    /// A height measurement came back non-finite (layout not settled).
    GeometryUnavailable { what: &'static str, value: f64 },
    /// `window`, `document` or a required element is missing.
    DomUnavailable(String),
    /// Options could not be deserialized.
    InvalidOptions(String),
    /// `attach()` was called a second time on the same page.
    AlreadyAttached,
}

impl std::fmt::Display for PageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageError::PrimaryItemNotFound => write!(f, "Primary item not found on page"),
            PageError::GeometryUnavailable { what, value } => {
                write!(f, "Geometry unavailable: {} measured as {}", what, value)
            }
            PageError::DomUnavailable(msg) => write!(f, "DOM unavailable: {}", msg),
            PageError::InvalidOptions(msg) => write!(f, "Invalid options: {}", msg),
            PageError::AlreadyAttached => write!(f, "Scroll listener already attached"),
        }
    }
}

impl std::error::Error for PageError {}
