//! PageNav: Scroll-to-Top Anchor + Scroll-Up Summary Overlay
//!
//! A Rust/WASM implementation of the page navigator module for
//! content-viewing (comments) pages.
//!
//! # Architecture
//!
//! ## Core (host-testable, no DOM)
//! - `config.rs` - PageNavigatorOptions + option metadata
//! - `types.rs` - PrimaryItemRef, PageType, WidgetState, ScrollDirection
//! - `error.rs` - PageError
//! - `throttle.rs` - FrameThrottle: one event per animation frame
//! - `decision.rs` - Reveal/hide decision table
//! - `geometry.rs` - GeometryCache: memoized offsets + crop height
//! - `dom.rs` - WidgetDom: the box-metric + style contract
//! - `template.rs` - SummaryRecord, SummaryTemplate, SettingsHash
//! - `widget.rs` - ScrollSummaryWidget controller
//! - `anchor.rs` - TopAnchor + FloatingRegistry
//! - `navigator.rs` - PageNavigator: option wiring on page-ready
//!
//! ## Browser binding
//! - `web/` - web-sys implementations + `install()` entry point
//!
//! # Usage (WASM)
//! ```javascript,ignore
//! import init, { install } from 'pagenav-core';
//!
//! await init();
//!
//! // Missing keys fall back to defaults (all enabled)
//! const report = install({ toTop: true, showLink: true, showLinkNewTab: false });
//! console.log(report.anchorRegistered, report.widgetAttached);
//! ```

#[macro_use]
mod logging;

pub mod anchor;
pub mod config;
pub mod decision;
pub mod dom;
pub mod error;
pub mod geometry;
pub mod navigator;
pub mod template;
pub mod throttle;
pub mod types;
pub mod web;
pub mod widget;

#[cfg(test)]
mod tests;

pub use anchor::*;
pub use config::*;
pub use decision::*;
pub use dom::*;
pub use error::*;
pub use geometry::*;
pub use navigator::*;
pub use template::*;
pub use throttle::*;
pub use types::*;
pub use widget::*;

use wasm_bindgen::prelude::*;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator for smaller WASM bundle size.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get version information
#[wasm_bindgen]
pub fn version() -> String {
    format!("pagenav-core v{}", env!("CARGO_PKG_VERSION"))
}
