//! The navigation controller: owns which section is active, turns nav
//! clicks into scroll effects, and runs the mobile menu state machine.

use lenslight_protocol::{
    DESKTOP_BREAKPOINT, DeferredTask, NavEffect, ScrollCommand, SharedStr,
};

use crate::model::SectionRegistry;
use crate::nav::resolver::resolve_active;
use crate::nav::scroll_lock::{DocumentScroll, ScrollLockGuard};

/// Delay before the corrective absolute scroll, to let layout settle on
/// constrained devices.
pub const CORRECTIVE_SCROLL_DELAY_MS: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Collapsed,
    Expanded,
}

/// Page-session navigation state, owned by the top-level host component
/// and passed down by reference. Constructed at mount, dropped at
/// unmount; dropping releases the scroll lock if the menu was open.
#[derive(Debug)]
pub struct NavController {
    registry: SectionRegistry,
    active: SharedStr,
    document: DocumentScroll,
    /// Held exactly while the menu is expanded.
    menu_lock: Option<ScrollLockGuard>,
}

impl NavController {
    pub fn new(registry: SectionRegistry, document: DocumentScroll) -> Self {
        let active = registry
            .default_section()
            .map(|s| s.id.clone())
            .unwrap_or_else(|| SharedStr::from("home"));
        Self {
            registry,
            active,
            document,
            menu_lock: None,
        }
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    /// The section currently deemed most prominent in the viewport.
    pub fn active(&self) -> &SharedStr {
        &self.active
    }

    pub fn menu(&self) -> MenuState {
        if self.menu_lock.is_some() {
            MenuState::Expanded
        } else {
            MenuState::Collapsed
        }
    }

    pub fn is_menu_expanded(&self) -> bool {
        self.menu_lock.is_some()
    }

    /// Apply one observation batch from the viewport observer.
    ///
    /// Observation and click callbacks may arrive in either order; the
    /// last writer wins, which is exactly the browser behavior this
    /// mirrors.
    pub fn handle_observations(&mut self, batch: &[lenslight_protocol::VisibilityObservation]) {
        self.active = resolve_active(&self.active, batch);
    }

    /// Translate a nav click into scroll effects.
    ///
    /// Unknown or unmounted identifiers are silently ignored (stale
    /// links must not crash the page): no effects, no state change —
    /// except that the mobile menu always collapses, regardless of
    /// target validity.
    ///
    /// For a known target the host receives, in order, an animated
    /// scroll-into-view and a deferred corrective scroll ~100ms later.
    /// The deferral is fire-and-forget; re-navigating before it fires
    /// simply stacks a second corrective scroll.
    pub fn navigate_to(&mut self, id: &str) -> Vec<NavEffect> {
        let effects = if self.registry.contains(id) {
            let section = SharedStr::from(id);
            vec![
                NavEffect::Scroll(ScrollCommand::IntoView {
                    section: section.clone(),
                    smooth: true,
                }),
                NavEffect::Defer {
                    delay_ms: CORRECTIVE_SCROLL_DELAY_MS,
                    task: DeferredTask::CorrectiveScroll { section },
                },
            ]
        } else {
            Vec::new()
        };
        self.collapse_menu();
        effects
    }

    /// Menu button press: simple flip.
    pub fn toggle_menu(&mut self) {
        if self.menu_lock.is_some() {
            self.collapse_menu();
        } else {
            self.menu_lock = Some(self.document.lock());
        }
    }

    /// Click on the backdrop overlay shown while expanded.
    pub fn backdrop_pressed(&mut self) {
        self.collapse_menu();
    }

    /// Viewport width change. Crossing into desktop width force-closes
    /// the menu; resizing while collapsed is a no-op.
    pub fn handle_resize(&mut self, width: f64) {
        if width >= DESKTOP_BREAKPOINT {
            self.collapse_menu();
        }
    }

    fn collapse_menu(&mut self) {
        // Dropping the guard restores the document's scroll capability.
        self.menu_lock = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lenslight_protocol::VisibilityObservation;

    fn controller() -> NavController {
        NavController::new(SectionRegistry::builtin(), DocumentScroll::new())
    }

    #[test]
    fn starts_at_first_registered_section_collapsed() {
        let c = controller();
        assert_eq!(*c.active(), "home");
        assert_eq!(c.menu(), MenuState::Collapsed);
    }

    #[test]
    fn observations_move_the_active_section() {
        let mut c = controller();
        c.handle_observations(&[
            VisibilityObservation::new("home", 0.1),
            VisibilityObservation::new("portfolio", 0.7),
        ]);
        assert_eq!(*c.active(), "portfolio");
    }

    #[test]
    fn navigation_emits_scroll_then_deferred_correction() {
        let mut c = controller();
        let effects = c.navigate_to("contact");
        assert_eq!(effects.len(), 2);
        assert!(matches!(
            &effects[0],
            NavEffect::Scroll(ScrollCommand::IntoView { section, smooth: true })
                if *section == "contact"
        ));
        assert!(matches!(
            &effects[1],
            NavEffect::Defer {
                delay_ms: CORRECTIVE_SCROLL_DELAY_MS,
                task: DeferredTask::CorrectiveScroll { section },
            } if *section == "contact"
        ));
    }

    #[test]
    fn navigation_does_not_touch_active_directly() {
        // The active section follows the observer as the scroll plays
        // out, not the click itself.
        let mut c = controller();
        c.navigate_to("services");
        assert_eq!(*c.active(), "home");
    }

    #[test]
    fn unknown_target_is_a_silent_no_op() {
        let mut c = controller();
        let effects = c.navigate_to("blog");
        assert!(effects.is_empty());
        assert_eq!(*c.active(), "home");
    }

    #[test]
    fn any_navigation_collapses_the_menu() {
        let mut c = controller();
        c.toggle_menu();
        assert!(c.is_menu_expanded());
        c.navigate_to("about");
        assert_eq!(c.menu(), MenuState::Collapsed);

        // Even with an invalid target.
        c.toggle_menu();
        c.navigate_to("nowhere");
        assert_eq!(c.menu(), MenuState::Collapsed);
    }

    #[test]
    fn toggle_flips_and_locks_scroll() {
        let doc = DocumentScroll::new();
        let mut c = NavController::new(SectionRegistry::builtin(), doc.clone());
        c.toggle_menu();
        assert!(c.is_menu_expanded());
        assert!(doc.is_locked());
        c.toggle_menu();
        assert!(!c.is_menu_expanded());
        assert!(!doc.is_locked());
    }

    #[test]
    fn desktop_resize_collapses_expanded_menu() {
        let mut c = controller();
        c.toggle_menu();
        c.handle_resize(1024.0);
        assert_eq!(c.menu(), MenuState::Collapsed);
    }

    #[test]
    fn narrow_resize_leaves_menu_alone() {
        let mut c = controller();
        c.toggle_menu();
        c.handle_resize(480.0);
        assert_eq!(c.menu(), MenuState::Expanded);
    }

    #[test]
    fn resize_while_collapsed_is_a_no_op() {
        let mut c = controller();
        c.handle_resize(1024.0);
        assert_eq!(c.menu(), MenuState::Collapsed);
        c.handle_resize(480.0);
        assert_eq!(c.menu(), MenuState::Collapsed);
    }

    #[test]
    fn backdrop_press_collapses() {
        let mut c = controller();
        c.toggle_menu();
        c.backdrop_pressed();
        assert_eq!(c.menu(), MenuState::Collapsed);
    }

    #[test]
    fn teardown_while_expanded_restores_scroll() {
        let doc = DocumentScroll::new();
        let mut c = NavController::new(SectionRegistry::builtin(), doc.clone());
        c.toggle_menu();
        assert!(doc.is_locked());
        drop(c);
        assert!(!doc.is_locked());
    }

    #[test]
    fn click_and_observation_interleavings_keep_state_sane() {
        let mut c = controller();
        c.navigate_to("contact");
        c.handle_observations(&[VisibilityObservation::new("portfolio", 0.6)]);
        assert_eq!(*c.active(), "portfolio");
        c.handle_observations(&[VisibilityObservation::new("contact", 0.9)]);
        assert_eq!(*c.active(), "contact");
        // A late empty batch never clears it.
        c.handle_observations(&[]);
        assert_eq!(*c.active(), "contact");
    }
}
