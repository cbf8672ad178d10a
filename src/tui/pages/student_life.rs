use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use super::{GOLD, PageContext, bold, bullet, card, heading, muted, page_header, prose};
use crate::core::content::{CAMPUS_EVENTS, CLUBS, FACILITIES, HOUSING_FEATURES, SUPPORT_SERVICES};
use crate::tui::components::Section;

pub(super) fn sections(ctx: &PageContext) -> Vec<Section> {
    let mut sections = vec![page_header(
        ctx,
        ctx.t("header.nav.studentLife"),
        ctx.t("pages.studentLife.title"),
        Some(ctx.t("pages.studentLife.subtitle")),
    )];

    sections.push(heading("Experience JIU", &ctx.t("pages.studentLife.campus.title")));
    sections.push(Section::plain(vec![prose(ctx.t("pages.studentLife.campus.content"))]));

    sections.push(heading("Campus Amenities", "World-Class Facilities"));
    sections.extend(FACILITIES.iter().map(card));

    sections.push(heading("Accommodation", &ctx.t("pages.studentLife.housing.title")));
    let mut housing = vec![prose(ctx.t("pages.studentLife.housing.content")), Line::default()];
    housing.extend(HOUSING_FEATURES.iter().map(|feature| bullet(*feature)));
    sections.push(Section::plain(housing));

    sections.push(heading("", "Student Organizations"));
    let mut clubs = vec![prose(ctx.t("pages.studentLife.activities.content")), Line::default()];
    clubs.extend(CLUBS.iter().map(|club| {
        Line::from(vec![
            Span::styled("◆ ", Style::default().fg(GOLD)),
            Span::raw(club.name),
            Span::styled(format!("  {}", club.category), Style::default().fg(Color::DarkGray)),
        ])
    }));
    sections.push(Section::card(clubs).with_border_color(super::BRAND));

    sections.push(heading("Campus Events", "Upcoming Events"));
    sections.extend(CAMPUS_EVENTS.iter().map(|event| {
        Section::card(vec![
            bold(event.title),
            Line::from(Span::styled(event.when, Style::default().fg(GOLD))),
            muted(event.description),
        ])
    }));

    sections.push(heading("We're Here to Help", &ctx.t("pages.studentLife.support.title")));
    sections.extend(SUPPORT_SERVICES.iter().map(card));
    sections
}
