//! # Page Renderers
//!
//! One renderer per page group. Each turns the current `App` into the list
//! of `Section`s the `PageView` scrolls through; the footer is appended to
//! every page.
//!
//! Renderers are plain functions of `PageContext`, rebuilt every frame. They
//! never mutate state: anything clickable carries its `Action` on the
//! section and the event loop dispatches it.

mod about;
mod academics;
mod admissions;
mod contact;
mod footer;
mod home;
mod news;
mod student_life;

use std::time::Instant;

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::content::{AUDIENCES, Card, Label, NEWS_CATEGORIES};
use crate::core::page::PageGroup;
use crate::core::state::App;
use crate::tui::components::Section;

/// Accent used for eyebrows, active tabs and buttons.
pub const GOLD: Color = Color::Yellow;
pub const BRAND: Color = Color::Blue;

pub struct PageContext<'a> {
    pub app: &'a App,
    pub now: Instant,
    /// The contact form owns the keyboard.
    pub form_active: bool,
}

impl<'a> PageContext<'a> {
    pub fn new(app: &'a App, now: Instant, form_active: bool) -> Self {
        Self {
            app,
            now,
            form_active,
        }
    }

    pub fn t(&self, key: &str) -> String {
        self.app.t(key)
    }

    pub fn label(&self, label: Label) -> String {
        match label {
            Label::Key(key) => self.t(key),
            Label::Literal(text) => text.to_string(),
        }
    }
}

/// Sections for the mounted view, footer included.
pub fn build_sections(ctx: &PageContext) -> Vec<Section> {
    let mut sections = match ctx.app.view.group() {
        PageGroup::Home => home::sections(ctx),
        PageGroup::About => about::sections(ctx),
        PageGroup::Academics => academics::sections(ctx),
        PageGroup::Admissions => admissions::sections(ctx),
        PageGroup::StudentLife => student_life::sections(ctx),
        PageGroup::News => news::sections(ctx),
        PageGroup::Contact => contact::sections(ctx),
    };
    sections.extend(footer::sections(ctx));
    sections
}

/// Tab id after `active`, wrapping. Unknown ids restart at the first tab.
fn next_tab(tabs: &[(&'static str, &'static str)], active: &str) -> &'static str {
    let next = tabs
        .iter()
        .position(|(id, _)| *id == active)
        .map_or(0, |i| (i + 1) % tabs.len());
    tabs.get(next).map_or("", |(id, _)| *id)
}

/// Quick-links audience after `active`.
pub fn next_audience(active: &str) -> &'static str {
    next_tab(&AUDIENCES, active)
}

/// News category after `active`.
pub fn next_news_category(active: &str) -> &'static str {
    next_tab(&NEWS_CATEGORIES, active)
}

// ============================================================================
// Shared building blocks
// ============================================================================

/// Breadcrumb, title and optional subtitle at the top of every inner page.
fn page_header(ctx: &PageContext, crumb: String, title: String, subtitle: Option<String>) -> Section {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(ctx.t("header.nav.home"), Style::default().fg(Color::Gray)),
            Span::styled(" / ", Style::default().fg(Color::DarkGray)),
            Span::styled(crumb, Style::default().fg(Color::White)),
        ]),
        Line::default(),
        Line::from(Span::styled(
            title,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
    ];
    if let Some(subtitle) = subtitle {
        lines.push(Line::from(Span::styled(subtitle, Style::default().fg(Color::Gray))));
    }
    Section::card(lines).with_border_color(BRAND)
}

/// Small uppercase label above a section title.
fn heading(eyebrow: &str, title: &str) -> Section {
    let mut lines = vec![Line::default()];
    if !eyebrow.is_empty() {
        lines.push(Line::from(Span::styled(
            eyebrow.to_uppercase(),
            Style::default().fg(GOLD),
        )));
    }
    lines.push(Line::from(Span::styled(
        title.to_string(),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )));
    Section::plain(lines)
}

fn prose(text: impl Into<String>) -> Line<'static> {
    Line::from(Span::raw(text.into()))
}

fn muted(text: impl Into<String>) -> Line<'static> {
    Line::from(Span::styled(text.into(), Style::default().fg(Color::DarkGray)))
}

fn bold(text: impl Into<String>) -> Line<'static> {
    Line::from(Span::styled(
        text.into(),
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

fn bullet(text: impl Into<String>) -> Line<'static> {
    Line::from(vec![
        Span::styled("• ", Style::default().fg(GOLD)),
        Span::raw(text.into()),
    ])
}

/// A highlighted figure with its caption, e.g. "29+ Years of Excellence".
fn figure(value: &str, caption: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            value.to_string(),
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("  {caption}")),
    ])
}

fn button(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!(" {text} → "),
        Style::default()
            .fg(Color::Black)
            .bg(GOLD)
            .add_modifier(Modifier::BOLD),
    ))
}

fn card(item: &Card) -> Section {
    Section::card(vec![bold(item.title), prose(item.description)])
}
