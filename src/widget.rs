//! ScrollSummaryWidget: the scroll-up summary overlay controller
//!
//! Owns the widget state, the visibility signal, the geometry cache and
//! the frame throttle. Event handlers in the binding layer hold a
//! reference to this controller and forward:
//! - wheel deltas (`on_wheel`, then `on_frame` on the next animation frame)
//! - intersection ratios (`on_visibility_change`)
//! - pointer enter/leave (`on_pointer_enter` / `on_pointer_leave`)

use crate::config::PageNavigatorOptions;
use crate::decision::{decide, Decision};
use crate::dom::{BoxMetric, WidgetDom, WidgetPart};
use crate::error::PageError;
use crate::geometry::GeometryCache;
use crate::template::{SettingsLinks, SummaryRecord, WidgetTemplate};
use crate::throttle::FrameThrottle;
use crate::types::{PrimaryItemRef, ScrollDirection, WidgetState};

/// `IntersectionObserver` root margin. The sensor region extends 100px
/// above the viewport top, so the item counts as "below" only once it is
/// 100px past the top edge.
pub const SENSOR_ROOT_MARGIN: &str = "100px 0px 0px 0px";

/// Observable effect of one handled event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Widget was built by this event and is now visible
    Built,
    Shown,
    Hidden,
    Unchanged,
}

/// Owned controller for the summary widget: state, sensor flag, geometry and throttle
pub struct ScrollSummaryWidget<D: WidgetDom, T: WidgetTemplate> {
    dom: D,
    template: T,
    record: SummaryRecord,
    state: WidgetState,
    /// Unknown until the sensor reports; reads as "in view" until then
    below_primary_item: bool,
    geometry: GeometryCache,
    throttle: FrameThrottle<ScrollDirection>,
    attached: bool,
    builds: u32,
    evaluations: u64,
}

impl<D: WidgetDom, T: WidgetTemplate> ScrollSummaryWidget<D, T> {
    pub fn new<L: SettingsLinks>(
        dom: D,
        template: T,
        item: &PrimaryItemRef,
        options: &PageNavigatorOptions,
        links: &L,
    ) -> Self {
        Self {
            dom,
            template,
            record: SummaryRecord::from_item(item, options, links),
            state: WidgetState::Unbuilt,
            below_primary_item: false,
            geometry: GeometryCache::new(),
            throttle: FrameThrottle::new(),
            attached: false,
            builds: 0,
            evaluations: 0,
        }
    }

    /// Start accepting wheel input. At most once per page load.
    pub fn attach(&mut self) -> Result<(), PageError> {
        if self.attached {
            return Err(PageError::AlreadyAttached);
        }
        self.attached = true;
        console_debug!("[PageNav] Summary widget attached for {}", self.record.link_id);
        Ok(())
    }

    /// Raw wheel event. Returns true when the caller must request a frame.
    pub fn on_wheel(&mut self, delta_y: f64) -> bool {
        if !self.attached {
            return false;
        }
        self.throttle.push(ScrollDirection::from_delta_y(delta_y))
    }

    /// Animation frame tick: process the latest pending wheel event.
    pub fn on_frame(&mut self) -> Transition {
        match self.throttle.tick() {
            Some(direction) => self.apply(direction),
            None => Transition::Unchanged,
        }
    }

    /// Run the decision table for one classified scroll event.
    pub fn apply(&mut self, direction: ScrollDirection) -> Transition {
        self.evaluations += 1;
        match decide(direction, self.below_primary_item, self.state.is_built()) {
            Decision::BuildAndShow => match self.initialize() {
                Ok(()) => {
                    self.show();
                    Transition::Built
                }
                Err(e) => {
                    console_warn!("[PageNav] Summary widget not built: {}", e);
                    Transition::Unchanged
                }
            },
            Decision::Show => {
                self.show();
                Transition::Shown
            }
            Decision::Hide => {
                self.hide();
                Transition::Hidden
            }
            Decision::Stay => Transition::Unchanged,
        }
    }

    /// Sensor callback. A visible item dismisses the widget immediately.
    pub fn on_visibility_change(&mut self, intersection_ratio: f64) -> Transition {
        self.below_primary_item = intersection_ratio == 0.0;
        if !self.below_primary_item && self.state == WidgetState::Visible {
            self.hide();
            return Transition::Hidden;
        }
        Transition::Unchanged
    }

    /// Hover: expand to the full scrollable height.
    pub fn on_pointer_enter(&mut self) {
        if !self.state.is_built() {
            return;
        }
        let full = self.dom.measure(WidgetPart::Root, BoxMetric::Scroll);
        if full.is_finite() {
            self.dom.set_height(full);
        }
    }

    /// Hover end: collapse back to the crop height.
    pub fn on_pointer_leave(&mut self) {
        if let Some(crop) = self.geometry.crop_height() {
            self.dom.set_height(crop);
        }
    }

    /// Build the widget once. Later calls are no-ops.
    pub fn initialize(&mut self) -> Result<(), PageError> {
        if self.state.is_built() {
            return Ok(());
        }

        let markup = self.template.render(&self.record);
        self.dom.insert_widget(&markup)?;
        self.state = WidgetState::Hidden;
        self.builds += 1;

        let crop = self.geometry.measure_crop(&self.dom);
        self.dom.set_height(crop);

        console_log!("[PageNav] Summary widget built (crop {}px)", crop);
        Ok(())
    }

    fn show(&mut self) {
        let top = self.geometry.visible_top(&self.dom);
        self.dom.set_top(top);
        self.dom.set_hidden_marker(false);
        self.state = WidgetState::Visible;
    }

    fn hide(&mut self) {
        let top = self.geometry.hidden_top(&self.dom);
        self.dom.set_top(top);
        self.dom.set_hidden_marker(true);
        self.state = WidgetState::Hidden;
    }

    pub fn state(&self) -> WidgetState {
        self.state
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn is_below_primary_item(&self) -> bool {
        self.below_primary_item
    }

    /// Number of times the widget was inserted (0 or 1)
    pub fn build_count(&self) -> u32 {
        self.builds
    }

    /// Number of decision-table evaluations
    pub fn evaluation_count(&self) -> u64 {
        self.evaluations
    }

    pub fn record(&self) -> &SummaryRecord {
        &self.record
    }

    pub fn geometry(&self) -> &GeometryCache {
        &self.geometry
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }
}
