//! View transforms: pure functions from (content, layout, viewport,
//! interaction state) to stateless render command lists. Renderers
//! decide what a command looks like; views decide only what is there.

pub mod about;
pub mod contact;
pub mod hero;
pub mod navbar;
pub mod portfolio;
pub mod services;
pub mod testimonials;

use lenslight_protocol::{Rect, RenderCommand, Viewport};

use crate::form::ContactForm;
use crate::layout::{DocumentLayout, SectionExtent};
use crate::model::Site;
use crate::nav::NavController;

/// Horizontal content width cap, centered in wider viewports.
pub(crate) const CONTENT_MAX_WIDTH: f64 = 1120.0;
pub(crate) const CONTENT_GUTTER: f64 = 24.0;

/// The centered content column for a section, in screen space.
pub(crate) fn content_column(extent: &SectionExtent, viewport: &Viewport) -> Rect {
    let width = (viewport.width - 2.0 * CONTENT_GUTTER).min(CONTENT_MAX_WIDTH);
    Rect::new(
        (viewport.width - width) / 2.0,
        extent.top - viewport.scroll_y,
        width,
        extent.height,
    )
}

/// Card rectangles for a grid of `count` items laid out in `cols`
/// columns inside the content column, starting at `y`.
pub(crate) fn grid_cells(column: &Rect, y: f64, count: usize, cols: usize, card_height: f64) -> Vec<Rect> {
    let cols = cols.max(1);
    let gap = 32.0;
    let card_width = (column.w - gap * (cols as f64 - 1.0)) / cols as f64;
    (0..count)
        .map(|i| {
            let row = i / cols;
            let col = i % cols;
            Rect::new(
                column.x + col as f64 * (card_width + gap),
                y + row as f64 * (card_height + gap),
                card_width,
                card_height,
            )
        })
        .collect()
}

/// Columns for card grids at this viewport width.
pub(crate) fn grid_columns(viewport: &Viewport) -> usize {
    if viewport.width >= lenslight_protocol::DESKTOP_BREAKPOINT {
        3
    } else {
        1
    }
}

/// Whether a section is entirely outside the visible window.
fn culled(extent: &SectionExtent, viewport: &Viewport) -> bool {
    extent.bottom() <= viewport.scroll_y || extent.top >= viewport.scroll_y + viewport.height
}

/// Render the whole page for one frame: every visible section in
/// document order, then the fixed nav bar (and menu overlay) on top.
pub fn render_page(
    site: &Site,
    layout: &DocumentLayout,
    viewport: &Viewport,
    controller: &NavController,
    form: &ContactForm,
) -> Vec<RenderCommand> {
    let mut commands = Vec::new();

    for extent in layout.extents() {
        if culled(extent, viewport) {
            continue;
        }
        let section = match extent.id.as_str() {
            "home" => hero::render_hero(&site.hero, extent, viewport),
            "portfolio" => portfolio::render_portfolio(&site.projects, extent, viewport),
            "about" => about::render_about(&site.about, extent, viewport),
            "services" => services::render_services(&site.services, extent, viewport),
            "testimonials" => {
                testimonials::render_testimonials(&site.testimonials, extent, viewport)
            }
            "contact" => contact::render_contact(&site.contact, form, extent, viewport),
            _ => Vec::new(),
        };
        if section.is_empty() {
            continue;
        }
        commands.push(RenderCommand::BeginGroup {
            id: extent.id.clone(),
            label: None,
        });
        commands.extend(section);
        commands.push(RenderCommand::EndGroup);
    }

    commands.extend(navbar::render_navbar(site, controller, viewport));
    commands
}
