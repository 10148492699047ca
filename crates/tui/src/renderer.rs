//! Maps render commands onto the terminal cell grid. Logical pixels
//! become cells at a fixed scale; hit regions are collected in pixel
//! space so mouse clicks can be resolved against them.

use lenslight_protocol::{Rect, RenderCommand, SharedStr, TextAlign, ThemeToken};
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect as CellRect;
use ratatui::style::Color;

/// Logical pixels per terminal column.
pub const PX_PER_COL: f64 = 8.0;
/// Logical pixels per terminal row.
pub const PX_PER_ROW: f64 = 16.0;

/// A clickable region from the last drawn frame, in logical pixels.
pub struct HitRegion {
    pub rect: Rect,
    pub id: SharedStr,
}

fn theme_to_color(token: ThemeToken) -> Color {
    match token {
        ThemeToken::Background => Color::Rgb(17, 17, 27),
        ThemeToken::Surface | ThemeToken::MenuBackground | ThemeToken::NavBackground => {
            Color::Rgb(24, 24, 37)
        }
        ThemeToken::Border | ThemeToken::CardBorder | ThemeToken::FieldBorder => {
            Color::Rgb(49, 50, 68)
        }
        ThemeToken::TextPrimary | ThemeToken::NavText | ThemeToken::HeroText => {
            Color::Rgb(205, 214, 244)
        }
        ThemeToken::TextSecondary => Color::Rgb(186, 194, 222),
        ThemeToken::TextMuted => Color::Rgb(166, 173, 200),
        ThemeToken::TextInverse => Color::Rgb(17, 17, 27),
        ThemeToken::Accent | ThemeToken::NavActive | ThemeToken::RatingStar => {
            Color::Rgb(249, 180, 76)
        }
        ThemeToken::AccentHover => Color::Rgb(230, 154, 46),
        ThemeToken::AccentSoft => Color::Rgb(58, 47, 30),
        ThemeToken::MenuBackdrop => Color::Rgb(12, 12, 18),
        ThemeToken::HeroOverlay => Color::Rgb(30, 30, 46),
        ThemeToken::CardBackground | ThemeToken::FieldBackground => Color::Rgb(30, 30, 46),
        ThemeToken::BadgePopular | ThemeToken::ButtonPrimary => Color::Rgb(249, 180, 76),
        ThemeToken::ButtonDisabled => Color::Rgb(88, 91, 112),
        ThemeToken::StatusSuccess => Color::Rgb(166, 227, 161),
        ThemeToken::StatusError => Color::Rgb(243, 139, 168),
    }
}

/// Foreground for a label printed over a filled rect.
fn label_fg(bg: ThemeToken) -> Color {
    match bg {
        ThemeToken::ButtonPrimary
        | ThemeToken::BadgePopular
        | ThemeToken::Accent
        | ThemeToken::AccentHover => Color::Rgb(17, 17, 27),
        _ => Color::Rgb(205, 214, 244),
    }
}

/// Draw one frame's command list and return its clickable regions.
pub fn draw_commands(frame: &mut Frame<'_>, commands: &[RenderCommand]) -> Vec<HitRegion> {
    let area = frame.area();
    let buf = frame.buffer_mut();
    let mut hits = Vec::new();

    for cmd in commands {
        match cmd {
            RenderCommand::DrawRect {
                rect,
                color,
                label,
                hit_id,
                ..
            } => {
                fill_rect(buf, area, rect, theme_to_color(*color));
                if let Some(label) = label
                    && let Some((x0, y0, _, y1)) = cell_bounds(area, rect)
                {
                    let row = y0 + (y1 - y0) / 2;
                    put_string(
                        buf,
                        area,
                        x0.saturating_add(1),
                        row,
                        label,
                        label_fg(*color),
                    );
                }
                if let Some(id) = hit_id {
                    hits.push(HitRegion {
                        rect: *rect,
                        id: id.clone(),
                    });
                }
            }
            RenderCommand::DrawText {
                position,
                text,
                color,
                align,
                ..
            } => {
                let len = text.chars().count() as f64;
                let col = match align {
                    TextAlign::Left => position.x / PX_PER_COL,
                    TextAlign::Center => position.x / PX_PER_COL - len / 2.0,
                    TextAlign::Right => position.x / PX_PER_COL - len,
                };
                let row = position.y / PX_PER_ROW;
                if col >= 0.0 && row >= 0.0 {
                    put_string(
                        buf,
                        area,
                        col as u16,
                        row as u16,
                        text,
                        theme_to_color(*color),
                    );
                }
            }
            RenderCommand::DrawLine { from, to, color, .. } => {
                let row = from.y / PX_PER_ROW;
                if row >= 0.0 && from.y == to.y {
                    let cols = (((to.x - from.x) / PX_PER_COL) as usize).max(1);
                    put_string(
                        buf,
                        area,
                        (from.x / PX_PER_COL).max(0.0) as u16,
                        row as u16,
                        &"─".repeat(cols),
                        theme_to_color(*color),
                    );
                }
            }
            RenderCommand::BeginGroup { .. } | RenderCommand::EndGroup => {}
        }
    }

    hits
}

/// Pixel rect to half-open cell bounds, clamped to the frame. `None`
/// when nothing of it lands on screen.
fn cell_bounds(area: CellRect, rect: &Rect) -> Option<(u16, u16, u16, u16)> {
    if rect.right() <= 0.0 || rect.bottom() <= 0.0 {
        return None;
    }
    let x0 = (rect.x.max(0.0) / PX_PER_COL) as u16;
    let y0 = (rect.y.max(0.0) / PX_PER_ROW) as u16;
    let x1 = (((rect.right() / PX_PER_COL).ceil()) as u16).min(area.width);
    let y1 = (((rect.bottom() / PX_PER_ROW).ceil()) as u16).min(area.height);
    if x0 >= x1 || y0 >= y1 {
        return None;
    }
    Some((x0, y0, x1, y1))
}

fn fill_rect(buf: &mut Buffer, area: CellRect, rect: &Rect, color: Color) {
    let Some((x0, y0, x1, y1)) = cell_bounds(area, rect) else {
        return;
    };
    for y in y0..y1 {
        for x in x0..x1 {
            buf[(area.x + x, area.y + y)].set_char(' ').set_bg(color);
        }
    }
}

/// Write a string left-to-right from a cell, keeping each cell's
/// background so text layers over fills.
fn put_string(buf: &mut Buffer, area: CellRect, col: u16, row: u16, text: &str, fg: Color) {
    if row >= area.height {
        return;
    }
    for (i, ch) in text.chars().enumerate() {
        let x = col.saturating_add(i as u16);
        if x >= area.width {
            break;
        }
        buf[(area.x + x, area.y + row)].set_char(ch).set_fg(fg);
    }
}
