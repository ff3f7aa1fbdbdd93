//! WidgetDom: what the summary widget needs from the page.
//!
//! Heights are read as raw box metrics. Convenience height helpers are
//! avoided because one engine misreports `scrollHeight` when the container
//! carries padding; the widget markup keeps padding off the container and
//! every measurement names the exact box it reads.

/// Addressable parts of the rendered widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetPart {
    /// The widget container itself
    Root,
    /// `.res-show-link-content`
    Content,
    /// `.res-show-link-tagline`
    Tagline,
}

/// Which box a measurement reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoxMetric {
    /// Border-box height (`offsetHeight`)
    Outer,
    /// Border-box height plus vertical margins
    OuterWithMargin,
    /// Full scrollable content height (`scrollHeight`)
    Scroll,
}

pub trait WidgetDom {
    /// Insert rendered widget markup at the end of the page body.
    fn insert_widget(&mut self, markup: &str) -> Result<(), crate::error::PageError>;

    /// Measure a part of the inserted widget. NaN when it is missing.
    fn measure(&self, part: WidgetPart, metric: BoxMetric) -> f64;

    /// Height of any pinned header the widget must sit below.
    fn header_offset(&self) -> f64;

    fn set_top(&mut self, px: f64);

    fn set_height(&mut self, px: f64);

    /// Toggle the `hide` class on the widget container.
    fn set_hidden_marker(&mut self, hidden: bool);
}
