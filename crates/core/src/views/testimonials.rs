use lenslight_protocol::{Point, RenderCommand, TextAlign, ThemeToken, Viewport};

use crate::layout::SectionExtent;
use crate::model::Testimonial;
use crate::views::{content_column, grid_cells, grid_columns};

pub fn render_testimonials(
    testimonials: &[Testimonial],
    extent: &SectionExtent,
    viewport: &Viewport,
) -> Vec<RenderCommand> {
    let column = content_column(extent, viewport);
    let mut commands = vec![RenderCommand::DrawText {
        position: Point::new(viewport.width / 2.0, column.y + 120.0),
        text: "What Our Clients Say".into(),
        color: ThemeToken::TextPrimary,
        size: 32.0,
        align: TextAlign::Center,
    }];

    let cells = grid_cells(
        &column,
        column.y + 224.0,
        testimonials.len(),
        grid_columns(viewport),
        300.0,
    );
    for (testimonial, cell) in testimonials.iter().zip(&cells) {
        commands.push(RenderCommand::DrawRect {
            rect: *cell,
            color: ThemeToken::CardBackground,
            border_color: Some(ThemeToken::CardBorder),
            label: Some(testimonial.name.as_str().into()),
            hit_id: None,
        });
        let stars: String = "★".repeat(usize::from(testimonial.rating.min(5)));
        commands.push(RenderCommand::DrawText {
            position: Point::new(cell.x + cell.w / 2.0, cell.y + 40.0),
            text: stars.into(),
            color: ThemeToken::RatingStar,
            size: 16.0,
            align: TextAlign::Center,
        });
        commands.push(RenderCommand::DrawText {
            position: Point::new(cell.x + cell.w / 2.0, cell.y + cell.h / 2.0),
            text: format!("\u{201c}{}\u{201d}", testimonial.quote).into(),
            color: ThemeToken::TextSecondary,
            size: 14.0,
            align: TextAlign::Center,
        });
        commands.push(RenderCommand::DrawText {
            position: Point::new(cell.x + cell.w / 2.0, cell.bottom() - 36.0),
            text: testimonial.role.as_str().into(),
            color: ThemeToken::Accent,
            size: 12.0,
            align: TextAlign::Center,
        });
    }
    commands
}
