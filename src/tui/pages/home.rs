use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use super::{BRAND, GOLD, PageContext, button, heading, muted, next_audience, prose};
use crate::core::action::Action;
use crate::core::content::{AUDIENCES, CAMPUS_SLIDES, HOME_NEWS, QUICK_LINKS, STATS};
use crate::core::page::Page;
use crate::core::state::HomeState;
use crate::tui::components::{Anchor, Section};

/// Hero headline measure, in columns.
const HERO_MEASURE: usize = 60;

pub(super) fn sections(ctx: &PageContext) -> Vec<Section> {
    let Some(home) = ctx.app.home() else {
        return Vec::new();
    };
    let mut sections = hero(ctx);
    sections.push(stats(ctx, home));
    sections.extend(news(ctx));
    sections.extend(quick_links(ctx, home));
    sections.extend(campus(ctx, home));
    sections
}

fn hero(ctx: &PageContext) -> Vec<Section> {
    let title_style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let mut lines = vec![Line::default()];
    lines.extend(
        textwrap::wrap(&ctx.t("hero.title"), HERO_MEASURE)
            .into_iter()
            .map(|row| Line::from(Span::styled(row.into_owned(), title_style))),
    );
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        ctx.t("hero.subtitle"),
        Style::default().fg(Color::Gray),
    )));
    lines.push(Line::default());

    vec![
        Section::plain(lines),
        Section::plain(vec![button(&ctx.t("hero.applyBtn"))])
            .with_link(Action::Navigate(Page::Admissions)),
        Section::plain(vec![Line::from(Span::styled(
            format!(" {} ", ctx.t("hero.learnMoreBtn")),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))])
        .with_link(Action::Navigate(Page::About)),
    ]
}

fn stats(ctx: &PageContext, home: &HomeState) -> Section {
    let lines = STATS
        .iter()
        .zip(&home.stats)
        .map(|(stat, counter)| {
            Line::from(vec![
                Span::styled(
                    format!("{:>6}{}", counter.value_at(ctx.now), stat.suffix),
                    Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::raw(ctx.t(stat.label_key)),
            ])
        })
        .collect();
    Section::card(lines)
        .with_border_color(BRAND)
        .with_anchor(Anchor::Stats)
}

fn news(ctx: &PageContext) -> Vec<Section> {
    let mut sections = vec![heading(&ctx.t("news.subtitle"), &ctx.t("news.title"))];
    for teaser in &HOME_NEWS {
        let mut lines = vec![
            muted(teaser.date.long()),
            Line::from(Span::styled(
                teaser.title,
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ];
        if teaser.featured {
            lines.push(Line::from(Span::styled(
                format!("{} →", ctx.t("news.readMore")),
                Style::default().fg(GOLD),
            )));
        }
        let section = Section::card(lines).with_link(Action::Navigate(Page::News));
        sections.push(if teaser.featured {
            section.with_border_color(GOLD)
        } else {
            section
        });
    }
    sections.push(
        Section::plain(vec![button(&ctx.t("news.viewAll"))]).with_link(Action::Navigate(Page::News)),
    );
    sections
}

fn quick_links(ctx: &PageContext, home: &HomeState) -> Vec<Section> {
    let active = home.audience.active();
    let mut tabs = Vec::new();
    for (id, key) in AUDIENCES {
        let style = if id == active {
            Style::default()
                .fg(Color::Black)
                .bg(GOLD)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        tabs.push(Span::styled(format!(" {} ", ctx.t(key)), style));
        tabs.push(Span::raw(" "));
    }

    let mut sections = vec![
        Section::boxed(
            ctx.t("quickLinks.title"),
            vec![prose(ctx.t("quickLinks.question")), Line::default(), Line::from(tabs)],
        )
        .with_border_color(BRAND)
        .with_link(Action::SelectAudience(next_audience(active).to_string())),
    ];
    sections.extend(home.audience.apply(&QUICK_LINKS).into_iter().map(|link| {
        Section::plain(vec![Line::from(vec![
            Span::styled("  → ", Style::default().fg(GOLD)),
            Span::raw(ctx.label(link.label)),
        ])])
        .with_link(Action::Navigate(link.target))
    }));
    sections
}

fn campus(ctx: &PageContext, home: &HomeState) -> Vec<Section> {
    let index = home.slides.index();
    let Some(slide) = CAMPUS_SLIDES.get(index) else {
        return Vec::new();
    };
    let dots: Vec<Span> = (0..home.slides.count())
        .map(|i| {
            if i == index {
                Span::styled("● ", Style::default().fg(GOLD))
            } else {
                Span::styled("○ ", Style::default().fg(Color::DarkGray))
            }
        })
        .collect();

    vec![
        heading(&ctx.t("campus.subtitle"), &ctx.t("campus.title")),
        Section::boxed(
            format!("{}/{}", index + 1, home.slides.count()),
            vec![
                muted(slide.image),
                Line::from(Span::styled(
                    slide.title,
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                prose(slide.description),
                Line::default(),
                Line::from(dots),
            ],
        )
        .with_link(Action::SlideNext),
        Section::plain(vec![Line::from(vec![
            Span::styled(format!("⌖ {}", ctx.t("campus.map")), Style::default().fg(GOLD)),
            Span::raw("   "),
            Span::styled(format!("▶ {}", ctx.t("campus.tour")), Style::default().fg(GOLD)),
        ])]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::update;
    use crate::test_support::test_app;
    use std::time::{Duration, Instant};

    #[test]
    fn test_stats_count_up_from_zero() {
        let mut app = test_app();
        let ctx_now = Instant::now();
        let before = stats(&PageContext::new(&app, ctx_now, false), app.home().unwrap());
        assert!(before.text().contains("     0+"));
        assert_eq!(before.anchor, Some(Anchor::Stats));

        update(&mut app, Action::StatsVisible(ctx_now));
        let done = ctx_now + Duration::from_secs(3);
        let after = stats(&PageContext::new(&app, done, false), app.home().unwrap());
        assert!(after.text().contains("  5000+"));
        assert!(after.text().contains("    15+"));
    }

    #[test]
    fn test_quick_links_follow_audience() {
        let mut app = test_app();
        update(&mut app, Action::SelectAudience("alumni".into()));
        let ctx = PageContext::new(&app, Instant::now(), false);
        let sections = quick_links(&ctx, app.home().unwrap());
        // Tab row + four links
        assert_eq!(sections.len(), 5);
        assert_eq!(
            sections[0].link,
            Some(Action::SelectAudience("prospective".into()))
        );
        assert!(sections[3].text().contains("Alumni News"));
        assert_eq!(sections[4].link, Some(Action::Navigate(Page::Contact)));
    }

    #[test]
    fn test_hero_buttons_navigate() {
        let app = test_app();
        let sections = hero(&PageContext::new(&app, Instant::now(), false));
        assert_eq!(sections[1].link, Some(Action::Navigate(Page::Admissions)));
        assert_eq!(sections[2].link, Some(Action::Navigate(Page::About)));
        assert!(sections[0].lines.iter().all(|l| l.width() <= HERO_MEASURE));
    }

    #[test]
    fn test_campus_slide_follows_index() {
        let mut app = test_app();
        update(&mut app, Action::SlideSelect(2));
        let sections = campus(&PageContext::new(&app, Instant::now(), false), app.home().unwrap());
        assert_eq!(sections[1].title.as_deref(), Some("3/4"));
        assert!(sections[1].text().contains("Research Laboratories"));
        assert_eq!(sections[1].link, Some(Action::SlideNext));
    }
}
