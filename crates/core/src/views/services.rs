use lenslight_protocol::{Point, Rect, RenderCommand, SharedStr, TextAlign, ThemeToken, Viewport};

use crate::layout::SectionExtent;
use crate::model::Service;
use crate::views::{content_column, grid_cells, grid_columns};

/// Hit identifier of the "Book a Session" button under the cards.
pub fn book_hit_id() -> SharedStr {
    SharedStr::from("cta:contact")
}

pub fn render_services(
    services: &[Service],
    extent: &SectionExtent,
    viewport: &Viewport,
) -> Vec<RenderCommand> {
    let column = content_column(extent, viewport);
    let mut commands = vec![
        RenderCommand::DrawText {
            position: Point::new(viewport.width / 2.0, column.y + 120.0),
            text: "Services & Expertise".into(),
            color: ThemeToken::TextPrimary,
            size: 32.0,
            align: TextAlign::Center,
        },
        RenderCommand::DrawText {
            position: Point::new(viewport.width / 2.0, column.y + 164.0),
            text: "Crafting visual stories through the lens of creativity and passion".into(),
            color: ThemeToken::TextMuted,
            size: 15.0,
            align: TextAlign::Center,
        },
    ];

    let cells = grid_cells(
        &column,
        column.y + 224.0,
        services.len(),
        grid_columns(viewport),
        440.0,
    );
    for (service, cell) in services.iter().zip(&cells) {
        commands.push(RenderCommand::DrawRect {
            rect: *cell,
            color: ThemeToken::CardBackground,
            border_color: Some(ThemeToken::CardBorder),
            label: Some(service.title.as_str().into()),
            hit_id: None,
        });
        if service.popular {
            commands.push(RenderCommand::DrawRect {
                rect: Rect::new(cell.right() - 132.0, cell.y, 132.0, 28.0),
                color: ThemeToken::BadgePopular,
                border_color: None,
                label: Some("Popular Choice".into()),
                hit_id: None,
            });
        }
        commands.push(RenderCommand::DrawText {
            position: Point::new(cell.x + 20.0, cell.y + 220.0),
            text: service.description.as_str().into(),
            color: ThemeToken::TextSecondary,
            size: 14.0,
            align: TextAlign::Left,
        });
        for (i, feature) in service.features.iter().enumerate() {
            commands.push(RenderCommand::DrawText {
                position: Point::new(cell.x + 20.0, cell.y + 260.0 + i as f64 * 26.0),
                text: format!("✓ {feature}").into(),
                color: ThemeToken::TextSecondary,
                size: 13.0,
                align: TextAlign::Left,
            });
        }
        commands.push(RenderCommand::DrawText {
            position: Point::new(cell.x + cell.w / 2.0, cell.bottom() - 28.0),
            text: service.price.as_str().into(),
            color: ThemeToken::Accent,
            size: 16.0,
            align: TextAlign::Center,
        });
    }

    let cards_bottom = cells.last().map(Rect::bottom).unwrap_or(column.y);
    commands.push(RenderCommand::DrawRect {
        rect: Rect::new(viewport.width / 2.0 - 110.0, cards_bottom + 48.0, 220.0, 44.0),
        color: ThemeToken::ButtonPrimary,
        border_color: None,
        label: Some("Book a Session".into()),
        hit_id: Some(book_hit_id()),
    });
    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Site;

    fn render() -> Vec<RenderCommand> {
        let site = Site::builtin();
        let extent = SectionExtent::new("services", 3000.0, 900.0);
        let viewport = Viewport::new(2900.0, 1024.0, 800.0);
        render_services(&site.services, &extent, &viewport)
    }

    #[test]
    fn popular_service_gets_a_badge() {
        let badges = render()
            .iter()
            .filter(|c| {
                matches!(
                    c,
                    RenderCommand::DrawRect {
                        color: ThemeToken::BadgePopular,
                        ..
                    }
                )
            })
            .count();
        assert_eq!(badges, 1);
    }

    #[test]
    fn book_button_targets_contact() {
        let has_book = render().iter().any(|c| {
            matches!(
                c,
                RenderCommand::DrawRect {
                    hit_id: Some(id), ..
                } if *id == "cta:contact"
            )
        });
        assert!(has_book);
    }
}
