//! GeometryCache: memoized pixel offsets for the summary widget
//!
//! `visible_top` and `hidden_top` depend on layout that does not change
//! after the widget is inserted, so each is measured once and reused for
//! every show/hide cycle.

use crate::dom::{BoxMetric, WidgetDom, WidgetPart};
use crate::error::PageError;

/// Reject non-finite measurements.
pub fn finite_px(what: &'static str, value: f64) -> Result<f64, PageError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PageError::GeometryUnavailable { what, value })
    }
}

#[derive(Debug, Default, Clone)]
pub struct GeometryCache {
    visible_top: Option<f64>,
    hidden_top: Option<f64>,
    crop_height: Option<f64>,
}

impl GeometryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resting offset: directly below any pinned header.
    ///
    /// A non-finite reading falls back to 0 and is not cached.
    pub fn visible_top<D: WidgetDom>(&mut self, dom: &D) -> f64 {
        if let Some(top) = self.visible_top {
            return top;
        }
        match finite_px("visible_top", dom.header_offset()) {
            Ok(top) => *self.visible_top.insert(top),
            Err(e) => {
                console_warn!("[PageNav] {}", e);
                0.0
            }
        }
    }

    /// Off-screen offset: minus the widget's full outer height.
    ///
    /// A zero or non-finite height means the widget has not laid out yet;
    /// that reading is returned but left uncached so the next hide re-measures.
    pub fn hidden_top<D: WidgetDom>(&mut self, dom: &D) -> f64 {
        if let Some(top) = self.hidden_top {
            return top;
        }
        match finite_px("hidden_top", dom.measure(WidgetPart::Root, BoxMetric::Outer)) {
            Ok(height) if height > 0.0 => *self.hidden_top.insert(-height),
            Ok(_) => 0.0,
            Err(e) => {
                console_warn!("[PageNav] {}", e);
                0.0
            }
        }
    }

    /// Collapsed height: full content minus the tagline, so only the title
    /// row shows. Measured once, right after insertion.
    pub fn measure_crop<D: WidgetDom>(&mut self, dom: &D) -> f64 {
        let content = dom.measure(WidgetPart::Content, BoxMetric::OuterWithMargin);
        let tagline = dom.measure(WidgetPart::Tagline, BoxMetric::Outer);
        let crop = match finite_px("crop_height", content - tagline) {
            Ok(crop) => crop.max(0.0),
            Err(e) => {
                console_warn!("[PageNav] {}", e);
                0.0
            }
        };
        self.crop_height = Some(crop);
        crop
    }

    pub fn crop_height(&self) -> Option<f64> {
        self.crop_height
    }

    pub fn is_visible_top_cached(&self) -> bool {
        self.visible_top.is_some()
    }

    pub fn is_hidden_top_cached(&self) -> bool {
        self.hidden_top.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::fake_dom::FakeDom;

    #[test]
    fn test_visible_top_measured_once() {
        let dom = FakeDom::new().with_header_offset(48.0);
        let mut cache = GeometryCache::new();

        assert_eq!(cache.visible_top(&dom), 48.0);
        assert_eq!(cache.visible_top(&dom), 48.0);
        assert_eq!(dom.header_offset_calls(), 1);
    }

    #[test]
    fn test_hidden_top_is_negative_outer_height() {
        let dom = FakeDom::new().with_metric(WidgetPart::Root, BoxMetric::Outer, 72.0);
        let mut cache = GeometryCache::new();

        assert_eq!(cache.hidden_top(&dom), -72.0);
        assert_eq!(cache.hidden_top(&dom), -72.0);
        assert_eq!(dom.measure_calls(WidgetPart::Root, BoxMetric::Outer), 1);
    }

    #[test]
    fn test_unsettled_height_not_cached() {
        let mut dom = FakeDom::new().with_metric(WidgetPart::Root, BoxMetric::Outer, 0.0);
        let mut cache = GeometryCache::new();

        assert_eq!(cache.hidden_top(&dom), 0.0);
        assert!(!cache.is_hidden_top_cached());

        dom.set_metric(WidgetPart::Root, BoxMetric::Outer, 60.0);
        assert_eq!(cache.hidden_top(&dom), -60.0);
        assert!(cache.is_hidden_top_cached());
    }

    #[test]
    fn test_non_finite_header_falls_back_to_zero() {
        let dom = FakeDom::new().with_header_offset(f64::NAN);
        let mut cache = GeometryCache::new();

        assert_eq!(cache.visible_top(&dom), 0.0);
        assert!(!cache.is_visible_top_cached());
    }

    #[test]
    fn test_crop_is_content_minus_tagline() {
        let dom = FakeDom::new()
            .with_metric(WidgetPart::Content, BoxMetric::OuterWithMargin, 90.0)
            .with_metric(WidgetPart::Tagline, BoxMetric::Outer, 20.0);
        let mut cache = GeometryCache::new();

        assert_eq!(cache.measure_crop(&dom), 70.0);
        assert_eq!(cache.crop_height(), Some(70.0));
    }

    #[test]
    fn test_crop_clamps_negative_and_missing_parts() {
        let dom = FakeDom::new()
            .with_metric(WidgetPart::Content, BoxMetric::OuterWithMargin, 10.0)
            .with_metric(WidgetPart::Tagline, BoxMetric::Outer, 20.0);
        assert_eq!(GeometryCache::new().measure_crop(&dom), 0.0);

        // Tagline missing: NaN
        let dom = FakeDom::new().with_metric(WidgetPart::Content, BoxMetric::OuterWithMargin, 10.0);
        assert_eq!(GeometryCache::new().measure_crop(&dom), 0.0);
    }

    #[test]
    fn test_finite_px() {
        assert_eq!(finite_px("x", 4.0), Ok(4.0));
        assert!(finite_px("x", f64::INFINITY).is_err());
    }
}
