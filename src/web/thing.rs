//! ThingReader: primary item extraction from listing markup.

use web_sys::{Document, Element};

use crate::error::PageError;
use crate::types::{PrimaryItemRef, PrimaryItemSource};

/// Where the submission sits on a comments page
pub const PRIMARY_ITEM_SELECTOR: &str = "body > .content > .sitetable > .thing";

pub struct ThingReader {
    thing: Option<Element>,
}

impl ThingReader {
    pub fn new(thing: Element) -> Self {
        Self { thing: Some(thing) }
    }

    pub fn locate(document: &Document) -> Self {
        Self {
            thing: document.query_selector(PRIMARY_ITEM_SELECTOR).ok().flatten(),
        }
    }

    /// The element the visibility sensor watches
    pub fn element(&self) -> Option<&Element> {
        self.thing.as_ref()
    }
}

fn find(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

fn text(el: &Element) -> String {
    el.text_content().unwrap_or_default().trim().to_string()
}

fn attr(el: &Element, name: &str) -> String {
    el.get_attribute(name).unwrap_or_default()
}

impl PrimaryItemSource for ThingReader {
    fn primary_item(&self) -> Result<PrimaryItemRef, PageError> {
        let thing = self.thing.as_ref().ok_or(PageError::PrimaryItemNotFound)?;
        let title = find(thing, "a.title").ok_or(PageError::PrimaryItemNotFound)?;

        let mut item = PrimaryItemRef::new(thing.id(), text(&title), attr(&title, "href"))
            .with_new_tab(attr(&title, "target") == "_blank");

        if let Some(src) = find(thing, "a.thumbnail img").and_then(|img| img.get_attribute("src")) {
            item = item.with_thumbnail(src);
        }
        if let Some(domain) = find(thing, ".domain a") {
            item = item.with_domain(attr(&domain, "href"), text(&domain));
        }
        if let Some(time) = find(thing, ".tagline time") {
            item = item.with_post_time(text(&time));
        }
        if let Some(author) = find(thing, ".tagline .author") {
            item = item.with_author(text(&author), attr(&author, "href"));
        }

        Ok(item)
    }
}
