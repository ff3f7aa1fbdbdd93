//! PageNavigator: option wiring on page-ready
//!
//! `toTop` installs the back-to-top icon on every page. `showLink` attaches
//! the summary widget on comments pages that have a primary item. A page
//! without one is not a fault; the feature just stays off.

use serde::Serialize;

use crate::anchor::{FloatingHost, TopAnchor};
use crate::config::PageNavigatorOptions;
use crate::dom::WidgetDom;
use crate::error::PageError;
use crate::template::{SettingsLinks, WidgetTemplate};
use crate::types::{PageType, PrimaryItemSource};
use crate::widget::ScrollSummaryWidget;

/// What `after_load` ended up doing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigatorReport {
    pub anchor_registered: bool,
    pub widget_attached: bool,
    /// Why the widget stayed off, when it was enabled but not attached
    pub declined: Option<String>,
}

/// Result of `after_load`: the report plus the attached controller, if any
pub struct AfterLoad<D: WidgetDom, T: WidgetTemplate> {
    pub report: NavigatorReport,
    pub widget: Option<ScrollSummaryWidget<D, T>>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PageNavigator {
    options: PageNavigatorOptions,
}

impl PageNavigator {
    pub fn new(options: PageNavigatorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PageNavigatorOptions {
        &self.options
    }

    /// Register the back-to-top icon if `toTop` is on.
    pub fn install_anchor<H: FloatingHost>(&self, host: &mut H) -> bool {
        self.options.to_top && TopAnchor::activate(host)
    }

    /// Whether the summary widget applies to this page at all.
    pub fn wants_summary(&self, page_type: PageType) -> bool {
        self.options.show_link && page_type == PageType::Comments
    }

    /// Build and attach the summary controller.
    ///
    /// `Ok(None)` when the feature is off or the page type does not match.
    pub fn attach_summary<S, D, T, L>(
        &self,
        page_type: PageType,
        items: &S,
        dom: D,
        template: T,
        links: &L,
    ) -> Result<Option<ScrollSummaryWidget<D, T>>, PageError>
    where
        S: PrimaryItemSource,
        D: WidgetDom,
        T: WidgetTemplate,
        L: SettingsLinks,
    {
        if !self.wants_summary(page_type) {
            return Ok(None);
        }
        let item = items.primary_item()?;
        let mut widget = ScrollSummaryWidget::new(dom, template, &item, &self.options, links);
        widget.attach()?;
        Ok(Some(widget))
    }

    /// Page-ready hook: run every enabled feature.
    pub fn after_load<H, S, D, T, L>(
        &self,
        page_type: PageType,
        host: &mut H,
        items: &S,
        dom: D,
        template: T,
        links: &L,
    ) -> AfterLoad<D, T>
    where
        H: FloatingHost,
        S: PrimaryItemSource,
        D: WidgetDom,
        T: WidgetTemplate,
        L: SettingsLinks,
    {
        let mut report = NavigatorReport {
            anchor_registered: self.install_anchor(host),
            ..NavigatorReport::default()
        };

        let widget = match self.attach_summary(page_type, items, dom, template, links) {
            Ok(widget) => widget,
            Err(e) => {
                console_debug!("[PageNav] Summary widget declined: {}", e);
                report.declined = Some(e.to_string());
                None
            }
        };
        report.widget_attached = widget.is_some();

        AfterLoad { report, widget }
    }
}
