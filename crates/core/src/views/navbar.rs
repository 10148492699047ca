//! The fixed navigation bar, the collapsible mobile menu, and the
//! backdrop overlay shown behind it.

use lenslight_protocol::{
    DESKTOP_BREAKPOINT, NAV_HEIGHT, Point, Rect, RenderCommand, SharedStr, TextAlign, ThemeToken,
    Viewport,
};

use crate::model::Site;
use crate::nav::NavController;

const MENU_ITEM_HEIGHT: f64 = 48.0;
const NAV_ENTRY_WIDTH: f64 = 110.0;

/// Hit identifier for a nav entry targeting `section`.
pub fn nav_hit_id(section: &str) -> SharedStr {
    SharedStr::from(format!("nav:{section}"))
}

/// Hit identifier of the menu toggle button.
pub fn menu_toggle_hit_id() -> SharedStr {
    SharedStr::from("nav:menu-toggle")
}

/// Hit identifier of the backdrop overlay.
pub fn backdrop_hit_id() -> SharedStr {
    SharedStr::from("nav:backdrop")
}

pub fn render_navbar(
    site: &Site,
    controller: &NavController,
    viewport: &Viewport,
) -> Vec<RenderCommand> {
    let desktop = viewport.width >= DESKTOP_BREAKPOINT;
    let mut commands = Vec::new();

    // Backdrop sits under the bar and menu but over the page.
    if controller.is_menu_expanded() {
        commands.push(RenderCommand::DrawRect {
            rect: Rect::new(0.0, NAV_HEIGHT, viewport.width, viewport.height - NAV_HEIGHT),
            color: ThemeToken::MenuBackdrop,
            border_color: None,
            label: None,
            hit_id: Some(backdrop_hit_id()),
        });
    }

    commands.push(RenderCommand::BeginGroup {
        id: "navbar".into(),
        label: None,
    });
    commands.push(RenderCommand::DrawRect {
        rect: Rect::new(0.0, 0.0, viewport.width, NAV_HEIGHT),
        color: ThemeToken::NavBackground,
        border_color: Some(ThemeToken::Border),
        label: None,
        hit_id: None,
    });
    commands.push(RenderCommand::DrawLine {
        from: Point::new(0.0, NAV_HEIGHT),
        to: Point::new(viewport.width, NAV_HEIGHT),
        color: ThemeToken::Border,
        width: 1.0,
    });
    // Brand doubles as a "home" link.
    commands.push(RenderCommand::DrawRect {
        rect: Rect::new(16.0, 0.0, 220.0, NAV_HEIGHT),
        color: ThemeToken::NavBackground,
        border_color: None,
        label: Some(site.title.as_str().into()),
        hit_id: Some(nav_hit_id("home")),
    });

    if desktop {
        // Inline entries, right-aligned.
        let count = controller.registry().len() as f64;
        let mut x = viewport.width - count * NAV_ENTRY_WIDTH - 16.0;
        for section in controller.registry().iter() {
            let active = *controller.active() == section.id;
            commands.push(RenderCommand::DrawRect {
                rect: Rect::new(x, 0.0, NAV_ENTRY_WIDTH, NAV_HEIGHT),
                color: if active {
                    ThemeToken::NavActive
                } else {
                    ThemeToken::NavBackground
                },
                border_color: None,
                label: Some(section.label.clone()),
                hit_id: Some(nav_hit_id(&section.id)),
            });
            x += NAV_ENTRY_WIDTH;
        }
    } else {
        commands.push(RenderCommand::DrawRect {
            rect: Rect::new(viewport.width - 56.0, 8.0, 48.0, NAV_HEIGHT - 16.0),
            color: ThemeToken::Surface,
            border_color: Some(ThemeToken::Border),
            label: Some(if controller.is_menu_expanded() {
                "✕".into()
            } else {
                "☰".into()
            }),
            hit_id: Some(menu_toggle_hit_id()),
        });

        if controller.is_menu_expanded() {
            let mut y = NAV_HEIGHT;
            for section in controller.registry().iter() {
                let active = *controller.active() == section.id;
                commands.push(RenderCommand::DrawRect {
                    rect: Rect::new(0.0, y, viewport.width, MENU_ITEM_HEIGHT),
                    color: if active {
                        ThemeToken::AccentSoft
                    } else {
                        ThemeToken::MenuBackground
                    },
                    border_color: None,
                    label: None,
                    hit_id: Some(nav_hit_id(&section.id)),
                });
                commands.push(RenderCommand::DrawText {
                    position: Point::new(24.0, y + MENU_ITEM_HEIGHT / 2.0),
                    text: section.label.clone(),
                    color: if active {
                        ThemeToken::NavActive
                    } else {
                        ThemeToken::NavText
                    },
                    size: 14.0,
                    align: TextAlign::Left,
                });
                y += MENU_ITEM_HEIGHT;
            }
        }
    }

    commands.push(RenderCommand::EndGroup);
    commands
}
