use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use super::{
    BRAND, GOLD, PageContext, bold, heading, muted, next_news_category, page_header, prose,
};
use crate::core::action::Action;
use crate::core::content::{
    NEWS_ARTICLES, NEWS_CATEGORIES, NEWSLETTER_BODY, NEWSLETTER_TITLE, UPCOMING_EVENTS,
};
use crate::core::widgets::CategoryFilter;
use crate::tui::components::Section;

pub(super) fn sections(ctx: &PageContext) -> Vec<Section> {
    let Some(filter) = ctx.app.news_filter() else {
        return Vec::new();
    };
    let mut sections = vec![page_header(
        ctx,
        ctx.t("header.nav.news"),
        ctx.t("pages.news.title"),
        Some(ctx.t("pages.news.subtitle")),
    )];
    sections.push(category_tabs(filter));
    sections.extend(articles(filter));
    sections.extend(events(ctx));
    sections.push(newsletter());
    sections
}

fn category_tabs(filter: &CategoryFilter) -> Section {
    let mut spans = Vec::new();
    for (id, label) in NEWS_CATEGORIES {
        let style = if id == filter.active() {
            Style::default()
                .fg(Color::Black)
                .bg(GOLD)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {label} "), style));
        spans.push(Span::raw(" "));
    }
    Section::plain(vec![Line::default(), Line::from(spans), Line::default()])
        .with_link(Action::SelectNewsCategory(next_news_category(filter.active()).to_string()))
}

fn category_label(id: &str) -> &'static str {
    NEWS_CATEGORIES
        .iter()
        .find(|(category, _)| *category == id)
        .map_or("", |(_, label)| *label)
}

fn articles(filter: &CategoryFilter) -> Vec<Section> {
    let hits = filter.apply(&NEWS_ARTICLES);
    if hits.is_empty() {
        return vec![Section::plain(vec![muted("No articles in this category.")])];
    }
    hits.into_iter()
        .map(|article| {
            Section::boxed(
                category_label(article.category).to_uppercase(),
                vec![
                    muted(format!("{} · {}", article.date.long(), article.author)),
                    bold(article.title),
                    prose(article.excerpt),
                ],
            )
        })
        .collect()
}

fn events(ctx: &PageContext) -> Vec<Section> {
    let mut sections = vec![heading("Mark Your Calendar", &ctx.t("pages.news.upcomingEvents"))];
    sections.extend(UPCOMING_EVENTS.iter().map(|event| {
        let (month, day) = event.date.badge();
        let badge = Style::default()
            .fg(Color::White)
            .bg(BRAND)
            .add_modifier(Modifier::BOLD);
        Section::card(vec![
            Line::from(vec![
                Span::styled(format!(" {month:<3} "), badge),
                Span::raw("  "),
                Span::styled(event.title, Style::default().add_modifier(Modifier::BOLD)),
            ]),
            Line::from(vec![
                Span::styled(format!(" {day:>3} "), badge),
                Span::raw("  "),
                Span::styled(
                    format!("{} · {}", event.time, event.location),
                    Style::default().fg(Color::Gray),
                ),
            ]),
        ])
    }));
    sections
}

fn newsletter() -> Section {
    Section::boxed(
        NEWSLETTER_TITLE,
        vec![
            prose(NEWSLETTER_BODY),
            Line::default(),
            Line::from(vec![
                Span::styled(" your@email.com          ", Style::default().fg(Color::DarkGray).bg(Color::Black)),
                Span::raw(" "),
                Span::styled(
                    " Subscribe ",
                    Style::default().fg(Color::Black).bg(GOLD).add_modifier(Modifier::BOLD),
                ),
            ]),
        ],
    )
    .with_border_color(BRAND)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::update;
    use crate::core::page::Page;
    use crate::test_support::test_app;

    #[test]
    fn test_all_shows_every_article() {
        let filter = CategoryFilter::new("all");
        assert_eq!(articles(&filter).len(), 6);
    }

    #[test]
    fn test_research_shows_one_article() {
        let filter = CategoryFilter::new("research");
        let sections = articles(&filter);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title.as_deref(), Some("RESEARCH"));
        assert!(sections[0].text().contains("Renewable Energy"));
    }

    #[test]
    fn test_unknown_category_shows_placeholder() {
        let filter = CategoryFilter::new("sports");
        let sections = articles(&filter);
        assert_eq!(sections.len(), 1);
        assert!(sections[0].text().contains("No articles"));
    }

    #[test]
    fn test_tabs_cycle_categories() {
        let tabs = category_tabs(&CategoryFilter::new("events"));
        assert_eq!(tabs.link, Some(Action::SelectNewsCategory("research".into())));
    }

    #[test]
    fn test_event_badges() {
        let app = test_app();
        let ctx = PageContext::new(&app, std::time::Instant::now(), false);
        let sections = events(&ctx);
        assert_eq!(sections.len(), 1 + UPCOMING_EVENTS.len());
        let (month, _) = UPCOMING_EVENTS[0].date.badge();
        assert!(sections[1].text().contains(&month));
    }

    #[test]
    fn test_page_uses_mounted_filter() {
        let mut app = test_app();
        update(&mut app, Action::Navigate(Page::News));
        update(&mut app, Action::SelectNewsCategory("research".into()));
        let ctx = PageContext::new(&app, std::time::Instant::now(), false);
        let text: String = sections(&ctx).iter().map(Section::text).collect();
        assert!(text.contains("Renewable Energy"));
        assert!(!text.contains("Housing Complex"));
    }
}
