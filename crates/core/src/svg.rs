//! SVG renderer: converts `RenderCommand` lists into standalone SVG
//! strings, used for static page snapshots.

use lenslight_protocol::{RenderCommand, TextAlign, ThemeToken};

/// Render a command list as an SVG document string.
///
/// `width` and `height` define the SVG viewBox; `dark` selects the
/// palette.
pub fn render_svg(commands: &[RenderCommand], width: f64, height: f64, dark: bool) -> String {
    let mut svg = String::with_capacity(commands.len() * 160);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" width="{width}" height="{height}" style="font-family:system-ui,-apple-system,sans-serif">"#,
    ));
    svg.push_str(&format!(
        r#"<rect width="{width}" height="{height}" fill="{}"/>"#,
        resolve_color(ThemeToken::Background, dark),
    ));

    for cmd in commands {
        match cmd {
            RenderCommand::DrawRect {
                rect,
                color,
                border_color,
                label,
                ..
            } => {
                let fill = resolve_color(*color, dark);
                let stroke = border_color
                    .map(|b| format!(r#" stroke="{}""#, resolve_color(b, dark)))
                    .unwrap_or_default();
                svg.push_str(&format!(
                    r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{fill}"{stroke} rx="2">"#,
                    rect.x, rect.y, rect.w, rect.h,
                ));
                if let Some(label) = label {
                    svg.push_str(&format!("<title>{}</title>", escape_xml(label)));
                }
                svg.push_str("</rect>");

                if let Some(label) = label
                    && rect.w > 40.0
                {
                    let text_color = resolve_color(ThemeToken::TextPrimary, dark);
                    let max_chars = (rect.w / 8.0) as usize;
                    let text = if label.chars().count() > max_chars && max_chars > 2 {
                        let truncated: String = label.chars().take(max_chars - 1).collect();
                        format!("{truncated}…")
                    } else {
                        label.to_string()
                    };
                    svg.push_str(&format!(
                        r#"<text x="{}" y="{}" fill="{text_color}" font-size="12" style="pointer-events:none">{}</text>"#,
                        rect.x + 6.0,
                        rect.y + rect.h * 0.6,
                        escape_xml(&text),
                    ));
                }
            }
            RenderCommand::DrawText {
                position,
                text,
                color,
                size,
                align,
            } => {
                let anchor = match align {
                    TextAlign::Left => "start",
                    TextAlign::Center => "middle",
                    TextAlign::Right => "end",
                };
                svg.push_str(&format!(
                    r#"<text x="{}" y="{}" fill="{}" font-size="{size}" text-anchor="{anchor}">{}</text>"#,
                    position.x,
                    position.y,
                    resolve_color(*color, dark),
                    escape_xml(text),
                ));
            }
            RenderCommand::DrawLine {
                from,
                to,
                color,
                width: line_width,
            } => {
                svg.push_str(&format!(
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{line_width}"/>"#,
                    from.x,
                    from.y,
                    to.x,
                    to.y,
                    resolve_color(*color, dark),
                ));
            }
            RenderCommand::BeginGroup { id, .. } => {
                svg.push_str(&format!(r#"<g id="{}">"#, escape_xml(id)));
            }
            RenderCommand::EndGroup => svg.push_str("</g>"),
        }
    }

    svg.push_str("</svg>");
    svg
}

fn resolve_color(token: ThemeToken, dark: bool) -> &'static str {
    use ThemeToken::*;
    if dark {
        match token {
            Background => "#11111b",
            Surface | MenuBackground => "#181825",
            Border | CardBorder | FieldBorder => "#313244",
            TextPrimary | NavText | HeroText => "#cdd6f4",
            TextSecondary => "#bac2de",
            TextMuted => "#a6adc8",
            TextInverse => "#11111b",
            Accent | NavActive | RatingStar => "#f9b44c",
            AccentHover => "#e69a2e",
            AccentSoft => "#3a2f1e",
            NavBackground => "#181825",
            MenuBackdrop => "#00000066",
            HeroOverlay => "#1e1e2e",
            CardBackground | FieldBackground => "#1e1e2e",
            BadgePopular => "#f9b44c",
            ButtonPrimary => "#f9b44c",
            ButtonDisabled => "#585b70",
            StatusSuccess => "#a6e3a1",
            StatusError => "#f38ba8",
        }
    } else {
        match token {
            Background => "#ffffff",
            Surface | MenuBackground => "#f9fafb",
            Border | CardBorder | FieldBorder => "#e5e7eb",
            TextPrimary | NavText => "#111827",
            HeroText => "#ffffff",
            TextSecondary => "#4b5563",
            TextMuted => "#6b7280",
            TextInverse => "#ffffff",
            Accent | NavActive | RatingStar => "#d97706",
            AccentHover => "#b45309",
            AccentSoft => "#fffbeb",
            NavBackground => "#ffffff",
            MenuBackdrop => "#00000033",
            HeroOverlay => "#374151",
            CardBackground | FieldBackground => "#ffffff",
            BadgePopular => "#f59e0b",
            ButtonPrimary => "#f59e0b",
            ButtonDisabled => "#d1d5db",
            StatusSuccess => "#15803d",
            StatusError => "#b91c1c",
        }
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
