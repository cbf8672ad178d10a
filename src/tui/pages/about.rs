use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use super::{GOLD, PageContext, bold, card, figure, heading, muted, page_header, prose};
use crate::core::content::{CORE_VALUES, LEADERSHIP, TIMELINE};
use crate::tui::components::Section;

const OVERVIEW_MORE: &str = "Our commitment to excellence is reflected in our world-class faculty, \
state-of-the-art facilities, and diverse student body representing over 50 countries. We offer a \
wide range of undergraduate, graduate, and doctoral programs designed to prepare students for \
success in a rapidly changing global landscape.";

pub(super) fn sections(ctx: &PageContext) -> Vec<Section> {
    let mut sections = vec![page_header(
        ctx,
        ctx.t("pages.about.title"),
        ctx.t("pages.about.title"),
        None,
    )];

    sections.push(heading(
        &ctx.t("pages.about.overview.title"),
        "Welcome to Jojet International University",
    ));
    sections.push(Section::plain(vec![
        prose(ctx.t("pages.about.overview.content")),
        Line::default(),
        prose(OVERVIEW_MORE),
        Line::default(),
        figure("29+", "Years of Excellence"),
    ]));

    sections.push(heading(&ctx.t("pages.about.vision.title"), "Our Guiding Principles"));
    for (title, content) in [
        ("pages.about.vision.visionTitle", "pages.about.vision.visionContent"),
        ("pages.about.vision.missionTitle", "pages.about.vision.missionContent"),
    ] {
        sections.push(
            Section::boxed(ctx.t(title), vec![prose(ctx.t(content))]).with_border_color(GOLD),
        );
    }

    sections.push(heading("", "Our Core Values"));
    sections.extend(CORE_VALUES.iter().map(card));

    sections.push(heading(&ctx.t("pages.about.history.title"), "Our Journey"));
    let timeline = TIMELINE
        .iter()
        .flat_map(|milestone| {
            [
                Line::from(vec![
                    Span::styled(
                        format!("{}  ", milestone.year),
                        Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(milestone.title, Style::default().add_modifier(Modifier::BOLD)),
                ]),
                Line::from(Span::styled(
                    format!("      {}", milestone.description),
                    Style::default().fg(Color::Gray),
                )),
            ]
        })
        .collect();
    sections.push(Section::card(timeline));

    sections.push(heading("", "University Leadership"));
    sections.extend(
        LEADERSHIP
            .iter()
            .map(|leader| Section::card(vec![bold(leader.name), muted(leader.position)])),
    );

    sections.push(heading("", "Campuses"));
    for campus in ["main", "east"] {
        sections.push(Section::boxed(
            ctx.t(&format!("footer.campuses.{campus}.name")),
            vec![
                prose(ctx.t(&format!("footer.campuses.{campus}.address"))),
                prose(format!("Tel: {}", ctx.t(&format!("footer.campuses.{campus}.phone")))),
            ],
        ));
    }
    sections
}
