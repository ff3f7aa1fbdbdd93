//! web-sys implementations of the DOM-facing traits.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, Window};

use crate::anchor::{ActivationEvent, FloatingElement, FloatingHost, ViewportScroller};
use crate::dom::{BoxMetric, WidgetDom, WidgetPart};
use crate::error::PageError;

const CONTENT_SELECTOR: &str = ".res-show-link-content";
const TAGLINE_SELECTOR: &str = ".res-show-link-tagline";
const HIDDEN_CLASS: &str = "hide";
const FLOATER_CLASS: &str = "res-floater-visibleAfterScroll";

pub(crate) fn js_err(context: &str, value: wasm_bindgen::JsValue) -> PageError {
    PageError::DomUnavailable(format!("{}: {:?}", context, value))
}

fn query_html(root: &Element, selector: &str) -> Option<HtmlElement> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

fn parse_px(value: &str) -> f64 {
    value.trim().trim_end_matches("px").parse().unwrap_or(0.0)
}

// =============================================================================
// WebDom
// =============================================================================

/// The summary widget's slice of the live page
pub struct WebDom {
    window: Window,
    document: Document,
    widget: Option<HtmlElement>,
}

impl WebDom {
    pub fn new(window: Window, document: Document) -> Self {
        Self {
            window,
            document,
            widget: None,
        }
    }

    pub fn widget_element(&self) -> Option<&HtmlElement> {
        self.widget.as_ref()
    }

    fn part(&self, part: WidgetPart) -> Option<HtmlElement> {
        let root = self.widget.as_ref()?;
        match part {
            WidgetPart::Root => Some(root.clone()),
            WidgetPart::Content => query_html(root, CONTENT_SELECTOR),
            WidgetPart::Tagline => query_html(root, TAGLINE_SELECTOR),
        }
    }

    /// Sum of computed top and bottom margins.
    fn vertical_margins(&self, el: &HtmlElement) -> f64 {
        match self.window.get_computed_style(el) {
            Ok(Some(style)) => {
                let top = style.get_property_value("margin-top").unwrap_or_default();
                let bottom = style.get_property_value("margin-bottom").unwrap_or_default();
                parse_px(&top) + parse_px(&bottom)
            }
            _ => 0.0,
        }
    }

    fn set_style(&self, property: &str, px: f64) {
        if let Some(widget) = &self.widget {
            if let Err(e) = widget.style().set_property(property, &format!("{}px", px)) {
                console_warn!("[PageNav] Could not set {}: {:?}", property, e);
            }
        }
    }
}

impl WidgetDom for WebDom {
    fn insert_widget(&mut self, markup: &str) -> Result<(), PageError> {
        let body = self
            .document
            .body()
            .ok_or_else(|| PageError::DomUnavailable("document has no body".into()))?;
        let scratch = self
            .document
            .create_element("div")
            .map_err(|e| js_err("create_element", e))?;
        scratch.set_inner_html(markup);

        let widget = scratch
            .first_element_child()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .ok_or_else(|| PageError::DomUnavailable("template produced no element".into()))?;
        body.append_child(&widget).map_err(|e| js_err("append_child", e))?;

        self.widget = Some(widget);
        Ok(())
    }

    fn measure(&self, part: WidgetPart, metric: BoxMetric) -> f64 {
        let Some(el) = self.part(part) else {
            return f64::NAN;
        };
        match metric {
            BoxMetric::Outer => el.offset_height() as f64,
            BoxMetric::OuterWithMargin => el.offset_height() as f64 + self.vertical_margins(&el),
            BoxMetric::Scroll => el.scroll_height() as f64,
        }
    }

    fn header_offset(&self) -> f64 {
        let Some(body) = self.document.body() else {
            return 0.0;
        };
        let classes = body.class_list();
        let pinned = if classes.contains("pinHeader-header") {
            "#header"
        } else if classes.contains("pinHeader-sub") || classes.contains("pinHeader-subanddd") {
            "#sr-header-area"
        } else if classes.contains("pinHeader-userbar") {
            "#header-bottom-right"
        } else {
            return 0.0;
        };

        self.document
            .query_selector(pinned)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .map(|el| el.offset_height() as f64)
            .unwrap_or(0.0)
    }

    fn set_top(&mut self, px: f64) {
        self.set_style("top", px);
    }

    fn set_height(&mut self, px: f64) {
        self.set_style("height", px);
    }

    fn set_hidden_marker(&mut self, hidden: bool) {
        let Some(widget) = &self.widget else {
            return;
        };
        let classes = widget.class_list();
        let result = if hidden {
            classes.add_1(HIDDEN_CLASS)
        } else {
            classes.remove_1(HIDDEN_CLASS)
        };
        if let Err(e) = result {
            console_warn!("[PageNav] Could not toggle hide class: {:?}", e);
        }
    }
}

// =============================================================================
// DomFloater
// =============================================================================

/// Floating host backed by the page's shared floater list
pub struct DomFloater {
    document: Document,
}

impl DomFloater {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Find a registered element by its `data-id`.
    pub fn find(&self, id: &str) -> Option<Element> {
        self.document
            .query_selector(&format!(r#".{} [data-id="{}"]"#, FLOATER_CLASS, id))
            .ok()
            .flatten()
    }

    fn list(&self) -> Result<Element, PageError> {
        if let Some(list) = self
            .document
            .query_selector(&format!(".{} > ul", FLOATER_CLASS))
            .map_err(|e| js_err("query_selector", e))?
        {
            return Ok(list);
        }

        let body = self
            .document
            .body()
            .ok_or_else(|| PageError::DomUnavailable("document has no body".into()))?;
        let container = self
            .document
            .create_element("div")
            .map_err(|e| js_err("create_element", e))?;
        container.set_class_name(FLOATER_CLASS);
        let list = self
            .document
            .create_element("ul")
            .map_err(|e| js_err("create_element", e))?;
        container.append_child(&list).map_err(|e| js_err("append_child", e))?;
        body.append_child(&container).map_err(|e| js_err("append_child", e))?;
        Ok(list)
    }

    fn insert(&self, element: &FloatingElement) -> Result<bool, PageError> {
        if self.find(&element.id).is_some() {
            return Ok(false);
        }
        let item = self
            .document
            .create_element("li")
            .map_err(|e| js_err("create_element", e))?;
        item.set_inner_html(&element.to_markup());
        self.list()?
            .append_child(&item)
            .map_err(|e| js_err("append_child", e))?;
        Ok(true)
    }
}

impl FloatingHost for DomFloater {
    fn add_element(&mut self, element: FloatingElement) -> bool {
        self.insert(&element).unwrap_or_else(|e| {
            console_warn!("[PageNav] Floating element {} not added: {}", element.id, e);
            false
        })
    }
}

// =============================================================================
// Anchor Adapters
// =============================================================================

impl ActivationEvent for Event {
    fn prevent_default(&self) {
        Event::prevent_default(self);
    }
}

impl ViewportScroller for Window {
    fn scroll_to(&self, x: f64, y: f64) {
        self.scroll_to_with_x_and_y(x, y);
    }
}
