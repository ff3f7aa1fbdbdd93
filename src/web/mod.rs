//! Browser binding: web-sys collaborators and the `install` entry point.

pub mod dom;
pub mod runtime;
pub mod thing;

pub use dom::{DomFloater, WebDom};
pub use runtime::{latest_ratio, SummaryRuntime, WebSummaryWidget};
pub use thing::{ThingReader, PRIMARY_ITEM_SELECTOR};

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use web_sys::{Element, Window};

use crate::anchor::{TopAnchor, ANCHOR_ID};
use crate::config::{option_specs, PageNavigatorOptions};
use crate::error::PageError;
use crate::navigator::{NavigatorReport, PageNavigator};
use crate::template::{SettingsHash, SummaryTemplate};
use crate::types::PageType;

/// Options plus binding-only switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstallConfig {
    #[serde(flatten)]
    pub options: PageNavigatorOptions,
    /// Register the wheel listener as passive. Turn off for engines that
    /// reject the options object.
    pub passive_wheel: bool,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            options: PageNavigatorOptions::default(),
            passive_wheel: true,
        }
    }
}

/// Everything that must outlive `install`
struct Installed {
    _anchor_click: Option<EventListener>,
    summary: Option<Rc<SummaryRuntime>>,
}

thread_local! {
    static INSTALLED: RefCell<Option<Installed>> = const { RefCell::new(None) };
}

fn to_js(e: PageError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Install the page navigator on the current page. Once per page load.
///
/// `config` may be `undefined`; missing keys take defaults.
#[wasm_bindgen]
pub fn install(config: JsValue) -> Result<JsValue, JsValue> {
    let config: InstallConfig = if config.is_undefined() || config.is_null() {
        InstallConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)
            .map_err(|e| to_js(PageError::InvalidOptions(e.to_string())))?
    };
    let report = install_with(config).map_err(to_js)?;
    serde_wasm_bindgen::to_value(&report).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Option metadata for the settings UI
#[wasm_bindgen(js_name = optionSpecs)]
pub fn option_specs_js() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&option_specs()).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Current summary widget state (`"unbuilt"`, `"hidden"`, `"visible"`),
/// or `undefined` when the widget was never attached.
#[wasm_bindgen(js_name = summaryState)]
pub fn summary_state() -> Result<JsValue, JsValue> {
    let state = INSTALLED.with(|installed| {
        installed
            .borrow()
            .as_ref()
            .and_then(|i| i.summary.as_ref().map(|s| s.widget_state()))
    });
    match state {
        Some(state) => serde_wasm_bindgen::to_value(&state).map_err(|e| JsValue::from_str(&e.to_string())),
        None => Ok(JsValue::UNDEFINED),
    }
}

pub fn install_with(config: InstallConfig) -> Result<NavigatorReport, PageError> {
    if INSTALLED.with(|installed| installed.borrow().is_some()) {
        return Err(PageError::AlreadyAttached);
    }

    let window = web_sys::window().ok_or_else(|| PageError::DomUnavailable("no window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| PageError::DomUnavailable("no document".into()))?;
    let page_type = PageType::from_path(&window.location().pathname().unwrap_or_default());

    let navigator = PageNavigator::new(config.options);
    let mut floater = DomFloater::new(document.clone());
    let reader = ThingReader::locate(&document);

    let loaded = navigator.after_load(
        page_type,
        &mut floater,
        &reader,
        WebDom::new(window.clone(), document),
        SummaryTemplate,
        &SettingsHash,
    );
    let mut report = loaded.report;

    let anchor_click = if report.anchor_registered {
        floater.find(ANCHOR_ID).map(|el| bind_anchor(&el, window.clone()))
    } else {
        None
    };

    let summary = match (loaded.widget, reader.element()) {
        (Some(widget), Some(primary)) => {
            match SummaryRuntime::start(widget, &window, primary, config.passive_wheel) {
                Ok(runtime) => Some(runtime),
                Err(e) => {
                    console_warn!("[PageNav] Summary widget not started: {}", e);
                    report.widget_attached = false;
                    report.declined = Some(e.to_string());
                    None
                }
            }
        }
        _ => None,
    };

    console_log!(
        "[PageNav] Installed on {:?} page (anchor: {}, summary: {})",
        page_type,
        report.anchor_registered,
        report.widget_attached
    );

    INSTALLED.with(|installed| {
        *installed.borrow_mut() = Some(Installed {
            _anchor_click: anchor_click,
            summary,
        });
    });
    Ok(report)
}

fn bind_anchor(anchor: &Element, window: Window) -> EventListener {
    EventListener::new_with_options(
        anchor,
        "click",
        EventListenerOptions::enable_prevent_default(),
        move |event| TopAnchor::on_activate(event, &window),
    )
}
