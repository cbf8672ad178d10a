use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use super::{GOLD, PageContext, bold, bullet, button, heading, muted, page_header, prose};
use crate::core::action::Action;
use crate::core::content::{DEADLINES, REQUIREMENTS, SCHOLARSHIPS};
use crate::core::page::Page;
use crate::tui::components::Section;

const CTA_BODY: &str = "Take the first step towards a world-class education. Our admissions \
team is here to guide you through the application process.";

pub(super) fn sections(ctx: &PageContext) -> Vec<Section> {
    let mut sections = vec![page_header(
        ctx,
        ctx.t("header.nav.admissions"),
        ctx.t("pages.admissions.title"),
        Some(ctx.t("pages.admissions.subtitle")),
    )];

    sections.push(heading(
        "Application Process",
        &ctx.t("pages.admissions.howToApply.title"),
    ));
    let steps = ctx
        .app
        .localizer
        .t("pages.admissions.howToApply.steps")
        .into_list();
    sections.push(Section::card(
        steps
            .into_iter()
            .enumerate()
            .map(|(i, step)| {
                Line::from(vec![
                    Span::styled(
                        format!(" {} ", i + 1),
                        Style::default()
                            .fg(Color::White)
                            .bg(super::BRAND)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!("  {step}")),
                ])
            })
            .collect(),
    ));

    sections.push(heading(
        "What You Need",
        &ctx.t("pages.admissions.requirements.title"),
    ));
    sections.extend(REQUIREMENTS.iter().map(|requirements| {
        Section::boxed(
            requirements.level,
            requirements
                .items
                .iter()
                .map(|item| bullet(ctx.label(*item)))
                .collect(),
        )
    }));

    sections.push(heading(
        "Mark Your Calendar",
        &ctx.t("pages.admissions.deadlines.title"),
    ));
    sections.extend(DEADLINES.iter().map(|deadline| {
        Section::card(vec![
            bold(deadline.semester),
            Line::from(Span::styled(deadline.date.long(), Style::default().fg(GOLD))),
        ])
        .with_border_color(super::BRAND)
    }));

    sections.push(heading(
        "Financial Support",
        &ctx.t("header.dropdowns.admissions.scholarships"),
    ));
    sections.extend(SCHOLARSHIPS.iter().map(|scholarship| {
        Section::card(vec![
            bold(scholarship.name),
            Line::from(Span::styled(scholarship.coverage, Style::default().fg(GOLD))),
            muted(scholarship.criteria),
        ])
    }));

    sections.push(
        Section::boxed(
            "Ready to Start Your Journey?",
            vec![prose(CTA_BODY), Line::default(), button("Contact Admissions")],
        )
        .with_border_color(super::BRAND)
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
    fn test_steps_are_numbered() {
        let app = test_app();
        let ctx = PageContext::new(&app, Instant::now(), false);
        let sections = sections(&ctx);
        let steps = &sections[2];
        assert_eq!(steps.lines.len(), 5);
        assert!(steps.text().starts_with(" 1   Complete the online application form"));
    }

    #[test]
    fn test_requirements_mix_keys_and_literals() {
        let app = test_app();
        let ctx = PageContext::new(&app, Instant::now(), false);
        let sections = sections(&ctx);
        let undergraduate = sections
            .iter()
            .find(|s| s.title.as_deref() == Some("Undergraduate"))
            .expect("undergraduate requirements");
        let text = undergraduate.text();
        assert!(text.contains("High school diploma or equivalent"));
        assert!(text.contains("Minimum GPA 3.0 or equivalent"));
    }

    #[test]
    fn test_deadlines_use_long_dates() {
        let app = test_app();
        let ctx = PageContext::new(&app, Instant::now(), false);
        let text: String = sections(&ctx).iter().map(Section::text).collect();
        assert!(text.contains("July 15, 2024"));
        assert!(text.contains("December 15, 2024"));
    }
}
