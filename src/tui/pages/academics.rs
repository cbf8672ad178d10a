use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use super::{GOLD, PageContext, bullet, button, figure, heading, page_header, prose};
use crate::core::content::{GRADUATE_PROGRAMS, Program, RESEARCH_AREAS, UNDERGRADUATE_PROGRAMS};
use crate::tui::components::Section;

const RESEARCH_BODY: &str = "At Jojet International University, research is at the heart of our \
academic mission. Our faculty and students are engaged in cutting-edge research across multiple \
disciplines, contributing to global knowledge and addressing real-world challenges.";

const CALENDAR_BODY: &str = "Stay informed about important academic dates, registration periods, \
examination schedules, and holidays throughout the academic year.";

pub(super) fn sections(ctx: &PageContext) -> Vec<Section> {
    let mut sections = vec![page_header(
        ctx,
        ctx.t("header.nav.academics"),
        ctx.t("pages.academics.title"),
        Some(ctx.t("pages.academics.subtitle")),
    )];

    sections.push(heading("Bachelor Degrees", &ctx.t("pages.academics.undergraduate.title")));
    sections.push(Section::plain(vec![prose(
        ctx.t("pages.academics.undergraduate.description"),
    )]));
    sections.extend(UNDERGRADUATE_PROGRAMS.iter().map(program));

    sections.push(heading("Advanced Degrees", &ctx.t("pages.academics.graduate.title")));
    sections.push(Section::plain(vec![prose(ctx.t("pages.academics.graduate.description"))]));
    sections.extend(GRADUATE_PROGRAMS.iter().map(program));

    sections.push(heading("Academic Departments", &ctx.t("pages.academics.faculties.title")));
    sections.push(Section::card(
        faculties(ctx).into_iter().map(bullet).collect(),
    ));

    let mut research = vec![
        Line::from(Span::styled("RESEARCH EXCELLENCE", Style::default().fg(GOLD))),
        Line::from(Span::styled(
            "Advancing Knowledge",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        prose(RESEARCH_BODY),
        Line::default(),
    ];
    research.extend(RESEARCH_AREAS.iter().map(|area| bullet(*area)));
    research.push(Line::default());
    research.push(figure("150+", "Research Projects"));
    sections.push(Section::card(research).with_border_color(super::BRAND));

    sections.push(Section::boxed(
        "Academic Calendar",
        vec![prose(CALENDAR_BODY), Line::default(), button("View Academic Calendar")],
    ));
    sections
}

/// Faculty names from the translation table, one per line.
fn faculties(ctx: &PageContext) -> Vec<String> {
    ctx.app
        .localizer
        .t("pages.academics.faculties.list")
        .into_list()
}

fn program(program: &Program) -> Section {
    Section::boxed(
        program.name,
        vec![
            Line::from(Span::styled(program.duration, Style::default().fg(GOLD))),
            prose(program.description),
        ],
    )
}
