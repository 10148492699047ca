//! Vertical document layout: where each section sits and how tall it is,
//! in logical pixels. Positions are derived from content counts and the
//! viewport, never stored in the model.

use lenslight_protocol::{DESKTOP_BREAKPOINT, SharedStr, Viewport};

use crate::model::Site;

/// Vertical padding above and below a section's content.
const SECTION_PADDING: f64 = 96.0;
/// Heading plus intro copy at the top of a section.
const HEADING_BLOCK: f64 = 128.0;
/// Gap between grid cards.
const GRID_GAP: f64 = 32.0;

const PROJECT_CARD_HEIGHT: f64 = 400.0;
const SERVICE_CARD_HEIGHT: f64 = 440.0;
const TESTIMONIAL_CARD_HEIGHT: f64 = 300.0;
const ABOUT_CONTENT_HEIGHT: f64 = 420.0;
const CONTACT_CONTENT_HEIGHT: f64 = 560.0;
const MIN_HERO_HEIGHT: f64 = 480.0;

/// One section's vertical slot in the document.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionExtent {
    pub id: SharedStr,
    pub top: f64,
    pub height: f64,
}

impl SectionExtent {
    pub fn new(id: impl Into<SharedStr>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// The stacked extents of every document section, recomputed whenever
/// the viewport size changes.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentLayout {
    extents: Vec<SectionExtent>,
}

impl DocumentLayout {
    pub fn compute(site: &Site, viewport: &Viewport) -> Self {
        let cols = grid_columns(viewport.width);
        let mut extents = Vec::with_capacity(6);
        let mut top = 0.0;
        let mut push = |id: &str, height: f64| {
            extents.push(SectionExtent::new(id, top, height));
            top += height;
        };

        push("home", viewport.height.max(MIN_HERO_HEIGHT));
        push(
            "portfolio",
            grid_section_height(site.projects.len(), cols, PROJECT_CARD_HEIGHT),
        );
        push(
            "about",
            2.0 * SECTION_PADDING + HEADING_BLOCK + ABOUT_CONTENT_HEIGHT,
        );
        push(
            "services",
            grid_section_height(site.services.len(), cols, SERVICE_CARD_HEIGHT),
        );
        push(
            "testimonials",
            grid_section_height(site.testimonials.len(), cols, TESTIMONIAL_CARD_HEIGHT),
        );
        push(
            "contact",
            (2.0 * SECTION_PADDING + HEADING_BLOCK + CONTACT_CONTENT_HEIGHT)
                .max(viewport.height),
        );

        Self { extents }
    }

    /// All document sections, top to bottom (including non-nav ones).
    pub fn extents(&self) -> &[SectionExtent] {
        &self.extents
    }

    /// Only the extents the viewport observer watches: those registered
    /// as nav targets, in registry order.
    pub fn nav_extents(&self, registry: &crate::model::SectionRegistry) -> Vec<SectionExtent> {
        registry
            .iter()
            .filter_map(|s| self.extent_of(&s.id).cloned())
            .collect()
    }

    pub fn extent_of(&self, id: &str) -> Option<&SectionExtent> {
        self.extents.iter().find(|e| e.id == id)
    }

    pub fn document_height(&self) -> f64 {
        self.extents.last().map(SectionExtent::bottom).unwrap_or(0.0)
    }

    /// Largest valid scroll offset for a given window height.
    pub fn max_scroll(&self, viewport_height: f64) -> f64 {
        (self.document_height() - viewport_height).max(0.0)
    }
}

fn grid_columns(width: f64) -> usize {
    if width >= DESKTOP_BREAKPOINT { 3 } else { 1 }
}

fn grid_section_height(items: usize, cols: usize, card_height: f64) -> f64 {
    let rows = items.div_ceil(cols.max(1)).max(1);
    let rows_f = rows as f64;
    2.0 * SECTION_PADDING + HEADING_BLOCK + rows_f * card_height + (rows_f - 1.0) * GRID_GAP
}
