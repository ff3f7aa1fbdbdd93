//! Recording WidgetDom for host-side tests.
//!
//! Every measurement is counted so memoization can be asserted.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::dom::{BoxMetric, WidgetDom, WidgetPart};
use crate::error::PageError;
use crate::types::{PrimaryItemRef, PrimaryItemSource};

#[derive(Debug, Default)]
pub struct FakeDom {
    metrics: HashMap<(WidgetPart, BoxMetric), f64>,
    header_offset: f64,
    measure_calls: RefCell<HashMap<(WidgetPart, BoxMetric), usize>>,
    header_offset_calls: Cell<usize>,
    fail_insert: bool,
    pub inserted: Vec<String>,
    pub top: Option<f64>,
    pub height: Option<f64>,
    pub hidden: Option<bool>,
}

impl FakeDom {
    pub fn new() -> Self {
        Self::default()
    }

    /// A widget that lays out like the real one: 40px header, 80px tall,
    /// 140px with overflow, 66px crop.
    pub fn laid_out() -> Self {
        Self::new()
            .with_header_offset(40.0)
            .with_metric(WidgetPart::Root, BoxMetric::Outer, 80.0)
            .with_metric(WidgetPart::Root, BoxMetric::Scroll, 140.0)
            .with_metric(WidgetPart::Content, BoxMetric::OuterWithMargin, 90.0)
            .with_metric(WidgetPart::Tagline, BoxMetric::Outer, 24.0)
    }

    pub fn with_header_offset(mut self, px: f64) -> Self {
        self.header_offset = px;
        self
    }

    pub fn with_metric(mut self, part: WidgetPart, metric: BoxMetric, px: f64) -> Self {
        self.set_metric(part, metric, px);
        self
    }

    pub fn failing_insert(mut self) -> Self {
        self.fail_insert = true;
        self
    }

    pub fn set_metric(&mut self, part: WidgetPart, metric: BoxMetric, px: f64) {
        self.metrics.insert((part, metric), px);
    }

    pub fn measure_calls(&self, part: WidgetPart, metric: BoxMetric) -> usize {
        self.measure_calls
            .borrow()
            .get(&(part, metric))
            .copied()
            .unwrap_or(0)
    }

    pub fn header_offset_calls(&self) -> usize {
        self.header_offset_calls.get()
    }
}

impl WidgetDom for FakeDom {
    fn insert_widget(&mut self, markup: &str) -> Result<(), PageError> {
        if self.fail_insert {
            return Err(PageError::DomUnavailable("no body".into()));
        }
        self.inserted.push(markup.to_string());
        Ok(())
    }

    fn measure(&self, part: WidgetPart, metric: BoxMetric) -> f64 {
        *self
            .measure_calls
            .borrow_mut()
            .entry((part, metric))
            .or_insert(0) += 1;
        self.metrics.get(&(part, metric)).copied().unwrap_or(f64::NAN)
    }

    fn header_offset(&self) -> f64 {
        self.header_offset_calls.set(self.header_offset_calls.get() + 1);
        self.header_offset
    }

    fn set_top(&mut self, px: f64) {
        self.top = Some(px);
    }

    fn set_height(&mut self, px: f64) {
        self.height = Some(px);
    }

    fn set_hidden_marker(&mut self, hidden: bool) {
        self.hidden = Some(hidden);
    }
}

/// Primary item source backed by a fixed answer
pub struct FixedItem(pub Option<PrimaryItemRef>);

impl FixedItem {
    pub fn submission() -> Self {
        FixedItem(Some(
            PrimaryItemRef::new("thing_t3_abc", "A submission", "https://example.com/a")
                .with_domain("/domain/example.com", "example.com")
                .with_post_time("1 hour ago")
                .with_author("ferris", "/user/ferris"),
        ))
    }

    pub fn missing() -> Self {
        FixedItem(None)
    }
}

impl PrimaryItemSource for FixedItem {
    fn primary_item(&self) -> Result<PrimaryItemRef, PageError> {
        self.0.clone().ok_or(PageError::PrimaryItemNotFound)
    }
}
