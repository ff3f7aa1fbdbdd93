//! Summary widget markup and settings deep links.

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};
use serde::Serialize;

use crate::config::{PageNavigatorOptions, MODULE_ID, OPT_SHOW_LINK};
use crate::types::PrimaryItemRef;

// =============================================================================
// Settings Links
// =============================================================================

/// Settings-navigation collaborator
pub trait SettingsLinks {
    /// URL hash that opens the settings UI scrolled to `option_key`.
    fn url_hash(&self, module_id: &str, option_key: &str) -> String;
}

/// `#res:settings/<module>/<option>`
#[derive(Debug, Clone, Copy, Default)]
pub struct SettingsHash;

impl SettingsLinks for SettingsHash {
    fn url_hash(&self, module_id: &str, option_key: &str) -> String {
        format!("#res:settings/{}/{}", module_id, option_key)
    }
}

// =============================================================================
// Summary Record
// =============================================================================

/// Everything the template needs to render the widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRecord {
    pub link_id: String,
    pub thumbnail_src: Option<String>,
    pub link_href: String,
    pub link_new_tab: bool,
    pub title: String,
    pub domain_href: String,
    pub domain: String,
    pub time: String,
    pub author_href: String,
    pub author: String,
    pub settings_hash: String,
}

impl SummaryRecord {
    pub fn from_item<L: SettingsLinks>(
        item: &PrimaryItemRef,
        options: &PageNavigatorOptions,
        links: &L,
    ) -> Self {
        Self {
            link_id: item.id().to_string(),
            thumbnail_src: item.thumbnail_url().map(str::to_string),
            link_href: item.title_url().to_string(),
            link_new_tab: options.link_new_tab(),
            title: item.title().to_string(),
            domain_href: item.domain_url().to_string(),
            domain: item.domain_text().to_string(),
            time: item.post_time().to_string(),
            author_href: item.author_url().to_string(),
            author: item.author().to_string(),
            settings_hash: links.url_hash(MODULE_ID, OPT_SHOW_LINK),
        }
    }
}

// =============================================================================
// Templates
// =============================================================================

/// Templating collaborator
pub trait WidgetTemplate {
    fn render(&self, record: &SummaryRecord) -> String;
}

/// Built-in markup for the summary widget.
///
/// The container has no padding; see [`crate::dom`] for why.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryTemplate;

impl WidgetTemplate for SummaryTemplate {
    fn render(&self, r: &SummaryRecord) -> String {
        let target = if r.link_new_tab { r#" target="_blank" rel="noopener""# } else { "" };
        let thumbnail = match &r.thumbnail_src {
            Some(src) => format!(
                r#"<img class="res-show-link-thumbnail" src="{}" alt="">"#,
                attr(src)
            ),
            None => String::new(),
        };

        format!(
            concat!(
                r#"<div class="res-show-link" data-link-id="{id}">"#,
                r#"<div class="res-show-link-content">"#,
                "{thumbnail}",
                r#"<a class="res-show-link-title" href="{href}"{target}>{title}</a>"#,
                r#" <span class="domain">(<a href="{domain_href}">{domain}</a>)</span>"#,
                r#"<p class="res-show-link-tagline">submitted <time>{time}</time>"#,
                r#" by <a class="author" href="{author_href}">{author}</a></p>"#,
                "</div>",
                r#"<a class="res-show-link-settings gearIcon" href="{settings}" title="settings"></a>"#,
                "</div>"
            ),
            id = attr(&r.link_id),
            thumbnail = thumbnail,
            href = attr(&r.link_href),
            target = target,
            title = text(&r.title),
            domain_href = attr(&r.domain_href),
            domain = text(&r.domain),
            time = text(&r.time),
            author_href = attr(&r.author_href),
            author = text(&r.author),
            settings = attr(&r.settings_hash),
        )
    }
}
