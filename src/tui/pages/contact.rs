use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use super::{GOLD, PageContext, bold, heading, muted, page_header, prose};
use crate::core::action::Action;
use crate::core::content::{
    CONTACT_SUCCESS_BODY, CONTACT_SUCCESS_TITLE, FAQ, OFFICE_HOURS, SOCIAL_LINKS,
};
use crate::core::widgets::{ContactField, ContactForm, FormEdit};
use crate::tui::components::Section;

const CURSOR: &str = "▏";

pub(super) fn sections(ctx: &PageContext) -> Vec<Section> {
    let Some(form) = ctx.app.contact_form() else {
        return Vec::new();
    };
    let mut sections = vec![page_header(
        ctx,
        ctx.t("header.nav.contact"),
        ctx.t("pages.contact.title"),
        Some(ctx.t("pages.contact.subtitle")),
    )];

    sections.push(heading("", "Send Us a Message"));
    if form.is_submitted() {
        sections.push(
            Section::card(vec![
                Line::from(Span::styled(
                    format!("✓ {CONTACT_SUCCESS_TITLE}"),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(CONTACT_SUCCESS_BODY, Style::default().fg(Color::Green))),
            ])
            .with_border_color(Color::Green),
        );
    } else {
        sections.extend(ContactField::ALL.into_iter().map(|field| form_field(ctx, form, field)));
        sections.push(
            Section::plain(vec![Line::from(Span::styled(
                format!(" {} ➤ ", ctx.t("pages.contact.form.submit")),
                Style::default()
                    .fg(Color::Black)
                    .bg(GOLD)
                    .add_modifier(Modifier::BOLD),
            ))])
            .with_link(Action::SubmitContact),
        );
    }

    sections.push(info(ctx));
    sections.push(heading("Our Locations", "Visit Our Campuses"));
    for campus in ["main", "east"] {
        let mut lines = vec![
            prose(ctx.t(&format!("footer.campuses.{campus}.address"))),
            prose(ctx.t(&format!("footer.campuses.{campus}.phone"))),
        ];
        if campus == "main" {
            lines.push(prose(ctx.t("footer.campuses.main.email")));
        }
        sections.push(Section::boxed(
            ctx.t(&format!("footer.campuses.{campus}.name")),
            lines,
        ));
    }

    sections.push(heading("FAQ", "Frequently Asked Questions"));
    sections.extend(
        FAQ.iter()
            .map(|faq| Section::card(vec![bold(faq.question), prose(faq.answer)])),
    );
    sections
}

fn form_field(ctx: &PageContext, form: &ContactForm, field: ContactField) -> Section {
    let focused = ctx.form_active && form.focus() == Some(field);
    let value = form.value(field);
    let mut title = ctx.t(field.label_key());
    if field.is_required() {
        title.push_str(" *");
    }

    let mut lines: Vec<Line<'static>> = if value.is_empty() {
        vec![muted(field.placeholder())]
    } else if field == ContactField::Subject {
        vec![Line::from(vec![
            Span::styled("‹ ", Style::default().fg(Color::DarkGray)),
            Span::raw(value.to_string()),
            Span::styled(" ›", Style::default().fg(Color::DarkGray)),
        ])]
    } else {
        value.split('\n').map(|row| prose(row.to_string())).collect()
    };
    if focused && field != ContactField::Subject {
        if value.is_empty() {
            lines = vec![Line::from(Span::styled(CURSOR, Style::default().fg(GOLD)))];
        } else if let Some(last) = lines.last_mut() {
            last.push_span(Span::styled(CURSOR, Style::default().fg(GOLD)));
        }
    }

    let section = Section::boxed(title, lines)
        .with_link(Action::ContactEdit(FormEdit::Focus(field)));
    if focused {
        section.with_border_color(GOLD)
    } else {
        section
    }
}

fn info(ctx: &PageContext) -> Section {
    let row = |label_key: &str, value: String| {
        Line::from(vec![
            Span::styled(
                format!("{}: ", ctx.t(label_key)),
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            ),
            Span::raw(value),
        ])
    };
    Section::boxed(
        ctx.t("pages.contact.info.title"),
        vec![
            row("pages.contact.info.address", ctx.t("footer.campuses.main.address")),
            row("pages.contact.info.phone", ctx.t("footer.campuses.main.phone")),
            row("pages.contact.info.email", ctx.t("footer.campuses.main.email")),
            row("pages.contact.info.hours", OFFICE_HOURS.to_string()),
            Line::default(),
            muted(format!("Follow Us: {}", SOCIAL_LINKS.join(" · "))),
        ],
    )
    .with_border_color(super::BRAND)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::update;
    use crate::core::page::Page;
    use crate::test_support::test_app;
    use std::time::Instant;

    fn contact_app() -> crate::core::state::App {
        let mut app = test_app();
        update(&mut app, Action::Navigate(Page::Contact));
        app
    }

    #[test]
    fn test_empty_form_shows_placeholders() {
        let app = contact_app();
        let ctx = PageContext::new(&app, Instant::now(), false);
        let sections = sections(&ctx);
        let name = sections
            .iter()
            .find(|s| s.link == Some(Action::ContactEdit(FormEdit::Focus(ContactField::Name))))
            .expect("name field");
        assert_eq!(name.title.as_deref(), Some("Full Name *"));
        assert_eq!(name.text(), "Your full name");
        assert!(sections.iter().any(|s| s.link == Some(Action::SubmitContact)));
    }

    #[test]
    fn test_phone_is_not_marked_required() {
        let app = contact_app();
        let ctx = PageContext::new(&app, Instant::now(), false);
        let form = app.contact_form().unwrap();
        let phone = form_field(&ctx, form, ContactField::Phone);
        assert_eq!(phone.title.as_deref(), Some("Phone Number"));
    }

    #[test]
    fn test_focused_field_shows_cursor_in_form_mode() {
        let mut app = contact_app();
        update(&mut app, Action::ContactEdit(FormEdit::Focus(ContactField::Message)));
        for c in "Hi\nthere".chars() {
            update(&mut app, Action::ContactEdit(FormEdit::Insert(c)));
        }
        let form = app.contact_form().unwrap();

        let browsing = PageContext::new(&app, Instant::now(), false);
        assert_eq!(form_field(&browsing, form, ContactField::Message).text(), "Hi\nthere");

        let editing = PageContext::new(&app, Instant::now(), true);
        let field = form_field(&editing, form, ContactField::Message);
        assert_eq!(field.text(), format!("Hi\nthere{CURSOR}"));
        assert_eq!(field.border_color, GOLD);
    }

    #[test]
    fn test_submitted_form_shows_confirmation() {
        let mut app = contact_app();
        for (field, text) in [
            (ContactField::Name, "Aziz"),
            (ContactField::Email, "aziz@example.com"),
            (ContactField::Message, "Hello"),
        ] {
            update(&mut app, Action::ContactEdit(FormEdit::Focus(field)));
            for c in text.chars() {
                update(&mut app, Action::ContactEdit(FormEdit::Insert(c)));
            }
        }
        update(&mut app, Action::ContactEdit(FormEdit::Focus(ContactField::Subject)));
        update(&mut app, Action::ContactEdit(FormEdit::NextOption));
        update(&mut app, Action::SubmitContact);

        let ctx = PageContext::new(&app, Instant::now(), false);
        let sections = sections(&ctx);
        let text: String = sections.iter().map(Section::text).collect();
        assert!(text.contains(CONTACT_SUCCESS_TITLE));
        assert!(!sections.iter().any(|s| s.link == Some(Action::SubmitContact)));
    }
}
