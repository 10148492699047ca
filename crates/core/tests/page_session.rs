//! Integration test: drive a whole page session — layout the builtin
//! site, scroll the viewport top to bottom, feed observer batches to the
//! controller, and check the scroll-spy tracks sections in order.

use lenslight_core::layout::DocumentLayout;
use lenslight_core::model::{SectionRegistry, Site};
use lenslight_core::nav::{DocumentScroll, NavController, ObserverConfig, ViewportObserver};
use lenslight_protocol::{NAV_HEIGHT, NavEffect, ScrollCommand, Viewport};

#[test]
fn scrolling_through_the_page_tracks_sections_in_order() {
    let site = Site::builtin();
    let registry = SectionRegistry::builtin();
    let viewport_size = (1024.0, 800.0);
    let layout = DocumentLayout::compute(&site, &Viewport::new(0.0, viewport_size.0, viewport_size.1));
    let extents = layout.nav_extents(&registry);

    let mut controller = NavController::new(registry.clone(), DocumentScroll::new());
    let mut observer = ViewportObserver::new(ObserverConfig::default());

    assert_eq!(*controller.active(), "home");

    let max_scroll = layout.max_scroll(viewport_size.1);
    let mut seen: Vec<String> = vec!["home".into()];
    let mut scroll = 0.0;
    while scroll <= max_scroll {
        let viewport = Viewport::new(scroll, viewport_size.0, viewport_size.1);
        if let Some(batch) = observer.observe(&extents, &viewport) {
            controller.handle_observations(&batch);
        }
        let active = controller.active().to_string();
        if seen.last() != Some(&active) {
            seen.push(active);
        }
        scroll += 40.0;
    }

    // Every nav section became active at some point, in registry order.
    let order: Vec<&str> = registry.iter().map(|s| s.id.as_str()).collect();
    let mut cursor = 0;
    for section in &seen {
        let Some(pos) = order.iter().position(|id| id == section) else {
            panic!("active section {section} is not in the registry");
        };
        assert!(
            pos >= cursor,
            "active sections regressed: {seen:?}"
        );
        cursor = pos;
    }
    assert_eq!(seen.last().map(String::as_str), Some("contact"));
    assert!(seen.len() >= order.len(), "not every section became active: {seen:?}");
}

#[test]
fn navigation_effects_resolve_against_the_layout() {
    let site = Site::builtin();
    let registry = SectionRegistry::builtin();
    let viewport = Viewport::new(0.0, 1024.0, 800.0);
    let layout = DocumentLayout::compute(&site, &viewport);
    let mut controller = NavController::new(registry, DocumentScroll::new());

    let effects = controller.navigate_to("services");
    assert_eq!(effects.len(), 2);

    // The host executes IntoView by aligning the section below the bar.
    let NavEffect::Scroll(ScrollCommand::IntoView { section, smooth }) = &effects[0] else {
        panic!("first effect should be a scroll-into-view: {effects:?}");
    };
    assert!(*smooth);
    let extent = layout.extent_of(section);
    assert!(extent.is_some());
    let target = extent.map(|e| (e.top - NAV_HEIGHT).max(0.0)).unwrap_or(0.0);
    assert!(target > 0.0);
    assert!(target < layout.document_height());
}

#[test]
fn active_section_survives_a_batchless_stretch() {
    let registry = SectionRegistry::builtin();
    let mut controller = NavController::new(registry, DocumentScroll::new());
    controller.handle_observations(&[lenslight_protocol::VisibilityObservation::new(
        "about", 0.8,
    )]);
    assert_eq!(*controller.active(), "about");

    // Scrolling past everything (all ratios zero) leaves it in place.
    controller.handle_observations(&[
        lenslight_protocol::VisibilityObservation::new("home", 0.0),
        lenslight_protocol::VisibilityObservation::new("portfolio", 0.0),
    ]);
    assert_eq!(*controller.active(), "about");
}
