use lenslight_protocol::{Point, Rect, RenderCommand, TextAlign, ThemeToken, Viewport};

use crate::layout::SectionExtent;
use crate::model::About;
use crate::views::content_column;

pub fn render_about(
    about: &About,
    extent: &SectionExtent,
    viewport: &Viewport,
) -> Vec<RenderCommand> {
    let column = content_column(extent, viewport);
    let mut commands = vec![
        RenderCommand::DrawText {
            position: Point::new(viewport.width / 2.0, column.y + 120.0),
            text: about.heading.as_str().into(),
            color: ThemeToken::TextPrimary,
            size: 32.0,
            align: TextAlign::Center,
        },
        RenderCommand::DrawText {
            position: Point::new(column.x, column.y + 240.0),
            text: about.bio.as_str().into(),
            color: ThemeToken::TextSecondary,
            size: 16.0,
            align: TextAlign::Left,
        },
    ];

    let stat_width = (column.w - 48.0) / about.stats.len().max(1) as f64;
    for (i, stat) in about.stats.iter().enumerate() {
        let x = column.x + i as f64 * (stat_width + 24.0);
        let rect = Rect::new(x, column.y + 340.0, stat_width, 96.0);
        commands.push(RenderCommand::DrawRect {
            rect,
            color: ThemeToken::CardBackground,
            border_color: Some(ThemeToken::CardBorder),
            label: None,
            hit_id: None,
        });
        commands.push(RenderCommand::DrawText {
            position: Point::new(x + stat_width / 2.0, rect.y + 36.0),
            text: stat.number.as_str().into(),
            color: ThemeToken::Accent,
            size: 24.0,
            align: TextAlign::Center,
        });
        commands.push(RenderCommand::DrawText {
            position: Point::new(x + stat_width / 2.0, rect.y + 68.0),
            text: stat.label.as_str().into(),
            color: ThemeToken::TextMuted,
            size: 13.0,
            align: TextAlign::Center,
        });
    }
    commands
}
