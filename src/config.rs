//! Configuration types and defaults for the page navigator
//!
//! Options arrive from the extension's options system as a JSON document
//! or a plain JS object with camelCase keys. Missing keys take defaults.

use serde::{Deserialize, Serialize};

use crate::error::PageError;

// =============================================================================
// Module Metadata
// =============================================================================

/// Module identifier, also used for settings deep links
pub const MODULE_ID: &str = "pageNavigator";
/// i18n key for the module name
pub const MODULE_NAME_KEY: &str = "pageNavName";
/// i18n key for the settings category
pub const MODULE_CATEGORY_KEY: &str = "browsingCategory";
/// i18n key for the module description
pub const MODULE_DESCRIPTION_KEY: &str = "pageNavDesc";

pub const OPT_TO_TOP: &str = "toTop";
pub const OPT_SHOW_LINK: &str = "showLink";
pub const OPT_SHOW_LINK_NEW_TAB: &str = "showLinkNewTab";

// =============================================================================
// Options
// =============================================================================

/// Page navigator options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageNavigatorOptions {
    /// Add a back-to-top icon to every page. Default: true
    pub to_top: bool,
    /// Show the submission summary when scrolling up on comments pages. Default: true
    pub show_link: bool,
    /// Open the summary's title link in a new tab. Default: true
    pub show_link_new_tab: bool,
}

impl Default for PageNavigatorOptions {
    fn default() -> Self {
        Self {
            to_top: true,
            show_link: true,
            show_link_new_tab: true,
        }
    }
}

impl PageNavigatorOptions {
    /// Everything off
    pub fn disabled() -> Self {
        Self {
            to_top: false,
            show_link: false,
            show_link_new_tab: false,
        }
    }

    /// Only the back-to-top icon
    pub fn anchor_only() -> Self {
        Self {
            show_link: false,
            ..Self::default()
        }
    }

    /// Parse options from a JSON document
    pub fn from_json(json: &str) -> Result<Self, PageError> {
        serde_json::from_str(json).map_err(|e| PageError::InvalidOptions(e.to_string()))
    }

    /// Effective new-tab flag. `showLinkNewTab` depends on `showLink`.
    pub fn link_new_tab(&self) -> bool {
        self.show_link && self.show_link_new_tab
    }
}

// =============================================================================
// Option Metadata
// =============================================================================

/// Settings-UI description of a single boolean option
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionSpec {
    pub key: &'static str,
    pub description: &'static str,
    pub default: bool,
    pub depends_on: Option<&'static str>,
}

/// Metadata for every option this module recognizes
pub fn option_specs() -> Vec<OptionSpec> {
    let defaults = PageNavigatorOptions::default();
    vec![
        OptionSpec {
            key: OPT_TO_TOP,
            description: "Add an icon to every page that takes you to the top when clicked.",
            default: defaults.to_top,
            depends_on: None,
        },
        OptionSpec {
            key: OPT_SHOW_LINK,
            description: "Show information about the submission when scrolling up on comments pages.",
            default: defaults.show_link,
            depends_on: None,
        },
        OptionSpec {
            key: OPT_SHOW_LINK_NEW_TAB,
            description: "Open link in new tab.",
            default: defaults.show_link_new_tab,
            depends_on: Some(OPT_SHOW_LINK),
        },
    ]
}
