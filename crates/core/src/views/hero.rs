use lenslight_protocol::{Point, Rect, RenderCommand, SharedStr, TextAlign, ThemeToken, Viewport};

use crate::layout::SectionExtent;
use crate::model::Hero;

/// Hit identifier of the hero's call-to-action button.
pub fn cta_hit_id(target: &str) -> SharedStr {
    SharedStr::from(format!("cta:{target}"))
}

pub fn render_hero(hero: &Hero, extent: &SectionExtent, viewport: &Viewport) -> Vec<RenderCommand> {
    let top = extent.top - viewport.scroll_y;
    let center_x = viewport.width / 2.0;
    let center_y = top + extent.height / 2.0;

    vec![
        RenderCommand::DrawRect {
            rect: Rect::new(0.0, top, viewport.width, extent.height),
            color: ThemeToken::HeroOverlay,
            border_color: None,
            label: Some(hero.image.as_str().into()),
            hit_id: None,
        },
        RenderCommand::DrawText {
            position: Point::new(center_x, center_y - 60.0),
            text: hero.heading.as_str().into(),
            color: ThemeToken::HeroText,
            size: 48.0,
            align: TextAlign::Center,
        },
        RenderCommand::DrawText {
            position: Point::new(center_x, center_y + 8.0),
            text: hero.subheading.as_str().into(),
            color: ThemeToken::HeroText,
            size: 20.0,
            align: TextAlign::Center,
        },
        RenderCommand::DrawRect {
            rect: Rect::new(center_x - 110.0, center_y + 52.0, 220.0, 44.0),
            color: ThemeToken::ButtonPrimary,
            border_color: None,
            label: Some(hero.cta_label.as_str().into()),
            hit_id: Some(cta_hit_id(&hero.cta_target)),
        },
    ]
}
