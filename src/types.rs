//! Core data structures shared by the anchor, widget and binding layers.

use serde::{Deserialize, Serialize};

use crate::error::PageError;

// =============================================================================
// Primary Item
// =============================================================================

/// Read-only handle to the page's primary item (the submission being viewed).
///
/// Built once by a [`PrimaryItemSource`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimaryItemRef {
    id: String,
    thumbnail_url: Option<String>,
    title: String,
    title_url: String,
    opens_in_new_tab: bool,
    domain_url: String,
    domain_text: String,
    post_time: String,
    author: String,
    author_url: String,
}

impl PrimaryItemRef {
    pub fn new(id: impl Into<String>, title: impl Into<String>, title_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            thumbnail_url: None,
            title: title.into(),
            title_url: title_url.into(),
            opens_in_new_tab: false,
            domain_url: String::new(),
            domain_text: String::new(),
            post_time: String::new(),
            author: String::new(),
            author_url: String::new(),
        }
    }

    pub fn with_thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(url.into());
        self
    }

    pub fn with_new_tab(mut self, opens_in_new_tab: bool) -> Self {
        self.opens_in_new_tab = opens_in_new_tab;
        self
    }

    pub fn with_domain(mut self, url: impl Into<String>, text: impl Into<String>) -> Self {
        self.domain_url = url.into();
        self.domain_text = text.into();
        self
    }

    pub fn with_post_time(mut self, time: impl Into<String>) -> Self {
        self.post_time = time.into();
        self
    }

    pub fn with_author(mut self, name: impl Into<String>, url: impl Into<String>) -> Self {
        self.author = name.into();
        self.author_url = url.into();
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn thumbnail_url(&self) -> Option<&str> {
        self.thumbnail_url.as_deref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn title_url(&self) -> &str {
        &self.title_url
    }

    pub fn opens_in_new_tab(&self) -> bool {
        self.opens_in_new_tab
    }

    pub fn domain_url(&self) -> &str {
        &self.domain_url
    }

    pub fn domain_text(&self) -> &str {
        &self.domain_text
    }

    pub fn post_time(&self) -> &str {
        &self.post_time
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn author_url(&self) -> &str {
        &self.author_url
    }
}

/// Page-inspection collaborator that resolves the primary item.
pub trait PrimaryItemSource {
    /// `Err(PageError::PrimaryItemNotFound)` when the page has none.
    fn primary_item(&self) -> Result<PrimaryItemRef, PageError>;
}

// =============================================================================
// Page Type
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PageType {
    /// A single submission with its comment tree
    Comments,
    Listing,
    Profile,
    Other,
}

impl PageType {
    /// Classify a location pathname.
    pub fn from_path(path: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            ["comments", _, ..] | ["r", _, "comments", _, ..] => PageType::Comments,
            ["user", ..] | ["u", ..] => PageType::Profile,
            [] | ["r", _] | ["r", _, "hot" | "new" | "rising" | "top" | "controversial"] => {
                PageType::Listing
            }
            ["hot" | "new" | "rising" | "top" | "controversial"] => PageType::Listing,
            _ => PageType::Other,
        }
    }
}

// =============================================================================
// Widget State + Scroll Direction
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WidgetState {
    /// No DOM node yet
    #[default]
    Unbuilt,
    Hidden,
    Visible,
}

impl WidgetState {
    pub fn is_built(self) -> bool {
        self != WidgetState::Unbuilt
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    /// Down, horizontal-only, zero or unreadable delta
    Other,
}

impl ScrollDirection {
    /// Negative vertical delta is upward; anything else (0, NaN) is not.
    pub fn from_delta_y(delta_y: f64) -> Self {
        if delta_y < 0.0 {
            ScrollDirection::Up
        } else {
            ScrollDirection::Other
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_classifier() {
        assert_eq!(ScrollDirection::from_delta_y(-3.0), ScrollDirection::Up);
        assert_eq!(ScrollDirection::from_delta_y(-0.01), ScrollDirection::Up);
        assert_eq!(ScrollDirection::from_delta_y(0.0), ScrollDirection::Other);
        assert_eq!(ScrollDirection::from_delta_y(120.0), ScrollDirection::Other);
        assert_eq!(ScrollDirection::from_delta_y(f64::NAN), ScrollDirection::Other);
    }

    #[test]
    fn test_page_type_from_path() {
        assert_eq!(
            PageType::from_path("/r/rust/comments/abc123/some_title/"),
            PageType::Comments
        );
        assert_eq!(PageType::from_path("/comments/abc123"), PageType::Comments);
        assert_eq!(PageType::from_path("/r/rust/"), PageType::Listing);
        assert_eq!(PageType::from_path("/r/rust/new"), PageType::Listing);
        assert_eq!(PageType::from_path("/"), PageType::Listing);
        assert_eq!(PageType::from_path("/user/someone"), PageType::Profile);
        assert_eq!(PageType::from_path("/prefs/"), PageType::Other);
    }

    #[test]
    fn test_primary_item_builder() {
        let item = PrimaryItemRef::new("t3_abc", "A title", "https://example.com/a")
            .with_thumbnail("https://thumbs.example.com/a.jpg")
            .with_domain("/domain/example.com", "example.com")
            .with_post_time("3 hours ago")
            .with_author("someone", "/user/someone")
            .with_new_tab(true);

        assert_eq!(item.id(), "t3_abc");
        assert_eq!(item.thumbnail_url(), Some("https://thumbs.example.com/a.jpg"));
        assert_eq!(item.domain_text(), "example.com");
        assert_eq!(item.author_url(), "/user/someone");
        assert!(item.opens_in_new_tab());
    }

    #[test]
    fn test_widget_state_default_unbuilt() {
        assert_eq!(WidgetState::default(), WidgetState::Unbuilt);
        assert!(!WidgetState::Unbuilt.is_built());
        assert!(WidgetState::Hidden.is_built());
    }
}
