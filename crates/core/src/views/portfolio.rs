use lenslight_protocol::{Point, RenderCommand, TextAlign, ThemeToken, Viewport};

use crate::layout::SectionExtent;
use crate::model::Project;
use crate::views::{content_column, grid_cells, grid_columns};

pub fn render_portfolio(
    projects: &[Project],
    extent: &SectionExtent,
    viewport: &Viewport,
) -> Vec<RenderCommand> {
    let column = content_column(extent, viewport);
    let mut commands = vec![RenderCommand::DrawText {
        position: Point::new(viewport.width / 2.0, column.y + 120.0),
        text: "Portfolio".into(),
        color: ThemeToken::TextPrimary,
        size: 32.0,
        align: TextAlign::Center,
    }];

    let cells = grid_cells(
        &column,
        column.y + 224.0,
        projects.len(),
        grid_columns(viewport),
        400.0,
    );
    for (project, cell) in projects.iter().zip(&cells) {
        commands.push(RenderCommand::DrawRect {
            rect: *cell,
            color: ThemeToken::CardBackground,
            border_color: Some(ThemeToken::CardBorder),
            label: Some(project.title.as_str().into()),
            hit_id: None,
        });
        commands.push(RenderCommand::DrawText {
            position: Point::new(cell.x + cell.w / 2.0, cell.y + cell.h - 72.0),
            text: project.description.as_str().into(),
            color: ThemeToken::TextSecondary,
            size: 14.0,
            align: TextAlign::Center,
        });
        commands.push(RenderCommand::DrawText {
            position: Point::new(cell.x + cell.w / 2.0, cell.y + cell.h - 40.0),
            text: project.category.as_str().into(),
            color: ThemeToken::Accent,
            size: 12.0,
            align: TextAlign::Center,
        });
    }
    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Site;

    #[test]
    fn one_card_per_project() {
        let site = Site::builtin();
        let extent = SectionExtent::new("portfolio", 800.0, 1000.0);
        let viewport = Viewport::new(600.0, 1024.0, 800.0);
        let commands = render_portfolio(&site.projects, &extent, &viewport);
        let cards = commands
            .iter()
            .filter(|c| matches!(c, RenderCommand::DrawRect { .. }))
            .count();
        assert_eq!(cards, site.projects.len());
    }
}
