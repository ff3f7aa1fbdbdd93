//! Tests for PageNavigator option wiring

use crate::anchor::{FloatingRegistry, ANCHOR_ID};
use crate::config::PageNavigatorOptions;
use crate::navigator::PageNavigator;
use crate::template::{SettingsHash, SummaryTemplate};
use crate::tests::fake_dom::{FakeDom, FixedItem};
use crate::types::{PageType, WidgetState};

#[test]
fn test_defaults_on_comments_page() {
    let nav = PageNavigator::new(PageNavigatorOptions::default());
    let mut host = FloatingRegistry::new();

    let loaded = nav.after_load(
        PageType::Comments,
        &mut host,
        &FixedItem::submission(),
        FakeDom::laid_out(),
        SummaryTemplate,
        &SettingsHash,
    );

    assert!(loaded.report.anchor_registered);
    assert!(loaded.report.widget_attached);
    assert_eq!(loaded.report.declined, None);

    // Item still in view: nothing built yet
    let widget = loaded.widget.unwrap();
    assert!(widget.is_attached());
    assert_eq!(widget.state(), WidgetState::Unbuilt);
    assert!(widget.dom().inserted.is_empty());
}

#[test]
fn test_to_top_registers_exactly_one_anchor() {
    let nav = PageNavigator::new(PageNavigatorOptions::anchor_only());
    let mut host = FloatingRegistry::new();

    assert!(nav.install_anchor(&mut host));
    assert!(!nav.install_anchor(&mut host));

    assert_eq!(host.elements().len(), 1);
    assert_eq!(host.elements()[0].id, ANCHOR_ID);
}

#[test]
fn test_to_top_off_registers_nothing() {
    let nav = PageNavigator::new(PageNavigatorOptions {
        to_top: false,
        ..PageNavigatorOptions::default()
    });
    let mut host = FloatingRegistry::new();

    assert!(!nav.install_anchor(&mut host));
    assert!(host.elements().is_empty());
}

#[test]
fn test_show_link_off_never_builds() {
    let nav = PageNavigator::new(PageNavigatorOptions::anchor_only());
    let mut host = FloatingRegistry::new();

    let loaded = nav.after_load(
        PageType::Comments,
        &mut host,
        &FixedItem::submission(),
        FakeDom::laid_out(),
        SummaryTemplate,
        &SettingsHash,
    );

    assert!(!loaded.report.widget_attached);
    assert!(loaded.widget.is_none());
    assert_eq!(loaded.report.declined, None);
}

#[test]
fn test_listing_page_skips_widget() {
    let nav = PageNavigator::new(PageNavigatorOptions::default());
    assert!(!nav.wants_summary(PageType::Listing));

    let widget = nav
        .attach_summary(
            PageType::Listing,
            &FixedItem::submission(),
            FakeDom::laid_out(),
            SummaryTemplate,
            &SettingsHash,
        )
        .unwrap();
    assert!(widget.is_none());
}

#[test]
fn test_missing_item_declines_silently() {
    let nav = PageNavigator::new(PageNavigatorOptions::default());
    let mut host = FloatingRegistry::new();

    let loaded = nav.after_load(
        PageType::Comments,
        &mut host,
        &FixedItem::missing(),
        FakeDom::laid_out(),
        SummaryTemplate,
        &SettingsHash,
    );

    assert!(loaded.report.anchor_registered);
    assert!(!loaded.report.widget_attached);
    assert_eq!(
        loaded.report.declined.as_deref(),
        Some("Primary item not found on page")
    );
}

#[test]
fn test_new_tab_option_reaches_markup() {
    let nav = PageNavigator::new(PageNavigatorOptions {
        show_link_new_tab: false,
        ..PageNavigatorOptions::default()
    });

    let mut widget = nav
        .attach_summary(
            PageType::Comments,
            &FixedItem::submission(),
            FakeDom::laid_out(),
            SummaryTemplate,
            &SettingsHash,
        )
        .unwrap()
        .unwrap();
    widget.on_visibility_change(0.0);
    widget.on_wheel(-1.0);
    widget.on_frame();

    assert!(!widget.record().link_new_tab);
    assert!(!widget.dom().inserted[0].contains("_blank"));
}
