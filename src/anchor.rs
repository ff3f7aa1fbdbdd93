//! TopAnchor: the back-to-top icon
//!
//! One floating icon per page. Clicking it prevents the default jump to
//! `#header` and scrolls the viewport to the origin instead.

use html_escape::encode_double_quoted_attribute as attr;
use serde::Serialize;

/// `data-id` of the anchor, also the floating host's dedup key
pub const ANCHOR_ID: &str = "top";

// =============================================================================
// Floating Elements
// =============================================================================

/// An icon placed in the shared floating overlay region
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FloatingElement {
    /// Stable `data-id` used for deduplication
    pub id: String,
    pub class_name: String,
    pub href: String,
    pub title: String,
    pub glyph: char,
}

impl FloatingElement {
    pub fn to_markup(&self) -> String {
        format!(
            r#"<a class="{}" data-id="{}" href="{}" title="{}">{}</a>"#,
            attr(&self.class_name),
            attr(&self.id),
            attr(&self.href),
            attr(&self.title),
            self.glyph
        )
    }
}

/// Floating-element host collaborator
pub trait FloatingHost {
    /// Insert `element` unless one with the same id exists.
    /// Returns true if it was inserted.
    fn add_element(&mut self, element: FloatingElement) -> bool;
}

/// In-memory floating host, deduplicated by element id
#[derive(Debug, Default)]
pub struct FloatingRegistry {
    elements: Vec<FloatingElement>,
}

impl FloatingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.elements.iter().any(|e| e.id == id)
    }

    pub fn elements(&self) -> &[FloatingElement] {
        &self.elements
    }
}

impl FloatingHost for FloatingRegistry {
    fn add_element(&mut self, element: FloatingElement) -> bool {
        if self.contains(&element.id) {
            return false;
        }
        self.elements.push(element);
        true
    }
}

// =============================================================================
// Activation
// =============================================================================

/// The user event that activated the anchor
pub trait ActivationEvent {
    fn prevent_default(&self);
}

pub trait ViewportScroller {
    /// Instant scroll of the page viewport.
    fn scroll_to(&self, x: f64, y: f64);
}

/// Back-to-top icon: registration plus its click behavior
pub struct TopAnchor;

impl TopAnchor {
    pub fn element() -> FloatingElement {
        FloatingElement {
            id: ANCHOR_ID.to_string(),
            class_name: "pageNavigator res-icon".to_string(),
            href: "#header".to_string(),
            title: "back to top".to_string(),
            glyph: '\u{F148}',
        }
    }

    /// Register the icon with the floating host.
    pub fn activate<H: FloatingHost>(host: &mut H) -> bool {
        let inserted = host.add_element(Self::element());
        if !inserted {
            console_debug!("[PageNav] Back-to-top icon already present");
        }
        inserted
    }

    /// Click handler: no navigation, straight to the origin.
    pub fn on_activate<E: ActivationEvent, S: ViewportScroller>(event: &E, scroller: &S) {
        event.prevent_default();
        scroller.scroll_to(0.0, 0.0);
    }
}
