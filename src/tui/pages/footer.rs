use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use super::{GOLD, PageContext, muted, prose};
use crate::core::action::Action;
use crate::core::content::{FOOTER_LINKS, FOOTER_TAGLINE, SOCIAL_LINKS};
use crate::core::page::Page;
use crate::tui::components::Section;

/// Footer appended to every page: tagline, quick links, both campuses and
/// the legal line.
pub(super) fn sections(ctx: &PageContext) -> Vec<Section> {
    let mut sections = vec![
        Section::spacer(),
        Section::card(vec![
            Line::from(Span::styled(
                ctx.t("header.topBar.university"),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            muted(FOOTER_TAGLINE),
            Line::default(),
            Line::from(Span::styled(SOCIAL_LINKS.join("  "), Style::default().fg(GOLD))),
        ]),
        Section::plain(vec![Line::from(Span::styled(
            "Quick Links",
            Style::default().add_modifier(Modifier::BOLD),
        ))]),
    ];

    sections.extend(FOOTER_LINKS.iter().map(|(page, label)| {
        Section::plain(vec![Line::from(vec![
            Span::styled("  › ", Style::default().fg(Color::DarkGray)),
            Span::styled(*label, Style::default().fg(Color::Gray)),
        ])])
        .with_link(Action::Navigate(*page))
    }));

    for campus in ["main", "east"] {
        let mut lines = vec![
            prose(ctx.t(&format!("footer.campuses.{campus}.address"))),
            prose(ctx.t(&format!("footer.campuses.{campus}.phone"))),
        ];
        if campus == "main" {
            lines.push(prose(ctx.t("footer.campuses.main.email")));
        }
        sections.push(
            Section::boxed(ctx.t(&format!("footer.campuses.{campus}.name")), lines)
                .with_border_color(Color::DarkGray),
        );
    }

    sections.push(Section::plain(vec![muted(ctx.t("footer.copyright"))]));
    sections.push(
        Section::plain(vec![Line::from(vec![
            Span::styled(ctx.t("footer.links.contact"), Style::default().fg(GOLD)),
            Span::styled(
                format!(
                    "  ·  {}  ·  {}  ·  {}",
                    ctx.t("footer.links.sitemap"),
                    ctx.t("footer.links.privacy"),
                    ctx.t("footer.links.terms"),
                ),
                Style::default().fg(Color::DarkGray),
            ),
        ])])
        .with_link(Action::Navigate(Page::Contact)),
    );
    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;
    use std::time::Instant;

    #[test]
    fn test_footer_links_navigate() {
        let app = test_app();
        let ctx = PageContext::new(&app, Instant::now(), false);
        let links: Vec<Action> = sections(&ctx).into_iter().filter_map(|s| s.link).collect();
        assert_eq!(
            links,
            vec![
                Action::Navigate(Page::About),
                Action::Navigate(Page::Academics),
                Action::Navigate(Page::Admissions),
                Action::Navigate(Page::News),
                Action::Navigate(Page::Contact),
                Action::Navigate(Page::Contact),
            ]
        );
    }

    #[test]
    fn test_footer_lists_both_campuses() {
        let app = test_app();
        let ctx = PageContext::new(&app, Instant::now(), false);
        let titles: Vec<String> = sections(&ctx).into_iter().filter_map(|s| s.title).collect();
        assert_eq!(titles, vec!["Main Campus".to_string(), "East Campus".to_string()]);
    }
}
