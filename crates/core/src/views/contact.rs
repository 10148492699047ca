//! The contact section: the form (fields, status line, submit control)
//! on the left and the studio's contact cards on the right.

use lenslight_protocol::{Point, Rect, RenderCommand, SharedStr, TextAlign, ThemeToken, Viewport};

use crate::form::ContactForm;
use crate::form::SubmitStatus;
use crate::layout::SectionExtent;
use crate::model::ContactInfo;
use crate::views::content_column;

const FIELD_HEIGHT: f64 = 44.0;
const FIELD_GAP: f64 = 20.0;

/// Hit identifier of the submit button.
pub fn submit_hit_id() -> SharedStr {
    SharedStr::from("form:submit")
}

pub fn render_contact(
    info: &ContactInfo,
    form: &ContactForm,
    extent: &SectionExtent,
    viewport: &Viewport,
) -> Vec<RenderCommand> {
    let column = content_column(extent, viewport);
    let half = (column.w - 48.0) / 2.0;
    let form_x = column.x;
    let info_x = column.x + half + 48.0;
    let body_y = column.y + 224.0;

    let mut commands = vec![
        RenderCommand::DrawText {
            position: Point::new(viewport.width / 2.0, column.y + 120.0),
            text: "Let's Create Something Beautiful".into(),
            color: ThemeToken::TextPrimary,
            size: 32.0,
            align: TextAlign::Center,
        },
        RenderCommand::DrawText {
            position: Point::new(viewport.width / 2.0, column.y + 164.0),
            text: "Ready to capture your special moments? Get in touch and let's discuss \
                   your photography needs."
                .into(),
            color: ThemeToken::TextMuted,
            size: 15.0,
            align: TextAlign::Center,
        },
    ];

    // Form fields, top to bottom.
    let fields: [(&str, &str); 5] = [
        ("First Name", form.fields.first_name.as_str()),
        ("Last Name", form.fields.last_name.as_str()),
        ("Email Address", form.fields.email.as_str()),
        ("Service Interest", form.fields.service.as_str()),
        ("Your Message", form.fields.message.as_str()),
    ];
    let mut y = body_y;
    for (label, value) in fields {
        commands.push(RenderCommand::DrawText {
            position: Point::new(form_x, y),
            text: label.into(),
            color: ThemeToken::TextSecondary,
            size: 13.0,
            align: TextAlign::Left,
        });
        commands.push(RenderCommand::DrawRect {
            rect: Rect::new(form_x, y + 8.0, half, FIELD_HEIGHT),
            color: ThemeToken::FieldBackground,
            border_color: Some(ThemeToken::FieldBorder),
            label: if value.is_empty() {
                None
            } else {
                Some(value.into())
            },
            hit_id: None,
        });
        y += FIELD_HEIGHT + FIELD_GAP + 8.0;
    }

    if let Some(message) = form.status_message() {
        let color = match form.status() {
            SubmitStatus::Sent => ThemeToken::StatusSuccess,
            _ => ThemeToken::StatusError,
        };
        commands.push(RenderCommand::DrawText {
            position: Point::new(form_x, y),
            text: message.into(),
            color,
            size: 14.0,
            align: TextAlign::Left,
        });
        y += 32.0;
    }

    commands.push(RenderCommand::DrawRect {
        rect: Rect::new(form_x, y, half, FIELD_HEIGHT),
        color: if form.is_submitting() {
            ThemeToken::ButtonDisabled
        } else {
            ThemeToken::ButtonPrimary
        },
        border_color: None,
        label: Some(if form.is_submitting() {
            "Sending...".into()
        } else {
            "Send Message".into()
        }),
        hit_id: Some(submit_hit_id()),
    });

    // Contact info cards.
    let cards = [
        ("Phone", info.phone.as_str()),
        ("Email", info.email.as_str()),
        ("Studio Location", info.location.as_str()),
    ];
    for (i, (title, value)) in cards.iter().enumerate() {
        let rect = Rect::new(info_x, body_y + i as f64 * 120.0, half, 96.0);
        commands.push(RenderCommand::DrawRect {
            rect,
            color: ThemeToken::CardBackground,
            border_color: Some(ThemeToken::CardBorder),
            label: None,
            hit_id: None,
        });
        commands.push(RenderCommand::DrawText {
            position: Point::new(rect.x + 20.0, rect.y + 32.0),
            text: (*title).into(),
            color: ThemeToken::TextPrimary,
            size: 16.0,
            align: TextAlign::Left,
        });
        commands.push(RenderCommand::DrawText {
            position: Point::new(rect.x + 20.0, rect.y + 64.0),
            text: (*value).into(),
            color: ThemeToken::TextSecondary,
            size: 14.0,
            align: TextAlign::Left,
        });
    }
    if !info.socials.is_empty() {
        commands.push(RenderCommand::DrawText {
            position: Point::new(info_x, body_y + cards.len() as f64 * 120.0 + 24.0),
            text: format!("Follow Us: {}", info.socials.join(" · ")).into(),
            color: ThemeToken::TextMuted,
            size: 13.0,
            align: TextAlign::Left,
        });
    }

    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{FAILED_MESSAGE, SinkError};
    use crate::model::Site;

    fn render(form: &ContactForm) -> Vec<RenderCommand> {
        let site = Site::builtin();
        let extent = SectionExtent::new("contact", 5000.0, 900.0);
        let viewport = Viewport::new(4900.0, 1024.0, 800.0);
        render_contact(&site.contact, form, &extent, &viewport)
    }

    fn submit_label(commands: &[RenderCommand]) -> Option<String> {
        commands.iter().find_map(|c| match c {
            RenderCommand::DrawRect {
                label: Some(label),
                hit_id: Some(id),
                ..
            } if *id == "form:submit" => Some(label.to_string()),
            _ => None,
        })
    }

    #[test]
    fn idle_form_shows_send_and_no_status() {
        let form = ContactForm::new();
        let commands = render(&form);
        assert_eq!(submit_label(&commands).as_deref(), Some("Send Message"));
        let has_status = commands.iter().any(|c| {
            matches!(
                c,
                RenderCommand::DrawText {
                    color: ThemeToken::StatusSuccess | ThemeToken::StatusError,
                    ..
                }
            )
        });
        assert!(!has_status);
    }

    #[test]
    fn sending_form_disables_the_button() {
        let mut form = ContactForm::new();
        form.fields.first_name = "A".into();
        form.fields.last_name = "B".into();
        form.fields.email = "a@b.c".into();
        form.fields.service = "wedding".into();
        form.fields.message = "hi".into();
        let _ = form.begin_submit();
        let commands = render(&form);
        assert_eq!(submit_label(&commands).as_deref(), Some("Sending..."));
    }

    #[test]
    fn failure_renders_the_error_line() {
        let mut form = ContactForm::new();
        form.fields.first_name = "A".into();
        form.fields.last_name = "B".into();
        form.fields.email = "a@b.c".into();
        form.fields.service = "portrait".into();
        form.fields.message = "hi".into();
        let _ = form.begin_submit();
        form.complete_submit(Err(SinkError::Unreachable));
        let commands = render(&form);
        let has_error = commands.iter().any(|c| {
            matches!(
                c,
                RenderCommand::DrawText {
                    text,
                    color: ThemeToken::StatusError,
                    ..
                } if *text == FAILED_MESSAGE
            )
        });
        assert!(has_error);
    }
}
