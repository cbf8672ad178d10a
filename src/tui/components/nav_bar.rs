//! # NavBar Component
//!
//! The header row: logo, the seven top-level entries (with a `▾` chevron on
//! the three that own a dropdown) and the Apply button. When the entries do
//! not fit the terminal width the bar collapses to the logo and a `☰`
//! toggle; the mobile menu then carries the navigation.
//!
//! Entry rects are recorded during `render` so the event loop can hit-test
//! hover and clicks against the exact cells that were drawn.
//!
//! Once the page body is scrolled the bottom rule thickens, standing in for
//! the drop shadow a sticky header casts.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::page::PageGroup;
use crate::tui::component::Component;

const CHEVRON: &str = " ▾";
const TOGGLE: &str = " ☰ ";
const ENTRY_GAP: u16 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavBarEntry {
    pub group: PageGroup,
    pub label: String,
    pub has_dropdown: bool,
    pub active: bool,
}

impl NavBarEntry {
    fn text(&self) -> String {
        if self.has_dropdown {
            format!("{}{}", self.label, CHEVRON)
        } else {
            self.label.clone()
        }
    }
}

pub struct NavBar {
    pub logo: String,
    pub entries: Vec<NavBarEntry>,
    /// Entry under the keyboard cursor.
    pub cursor: Option<usize>,
    /// Group whose dropdown is showing.
    pub open: Option<PageGroup>,
    pub apply: String,
    pub menu_open: bool,
    /// The body is scrolled away from the top.
    pub shadow: bool,
    // Recorded during render
    pub entry_rects: Vec<(PageGroup, Rect)>,
    pub apply_rect: Option<Rect>,
    pub toggle_rect: Option<Rect>,
}

impl NavBar {
    pub fn new(logo: String, entries: Vec<NavBarEntry>, apply: String) -> Self {
        Self {
            logo,
            entries,
            cursor: None,
            open: None,
            apply,
            menu_open: false,
            shadow: false,
            entry_rects: Vec::new(),
            apply_rect: None,
            toggle_rect: None,
        }
    }

    fn logo_width(&self) -> u16 {
        u16::try_from(self.logo.width() + 3).unwrap_or(u16::MAX)
    }

    fn apply_text(&self) -> String {
        format!(" {} ", self.apply)
    }

    /// Columns needed to lay out the full bar.
    pub fn full_width(&self) -> u16 {
        let entries: usize = self
            .entries
            .iter()
            .map(|e| e.text().width() + usize::from(ENTRY_GAP))
            .sum();
        let total = usize::from(self.logo_width()) + entries + self.apply_text().width() + 1;
        u16::try_from(total).unwrap_or(u16::MAX)
    }

    pub fn is_compact(&self, width: u16) -> bool {
        self.full_width() > width
    }

    fn entry_style(&self, index: usize, entry: &NavBarEntry) -> Style {
        let mut style = if entry.active {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::White)
        };
        if self.open == Some(entry.group) {
            style = style.bg(Color::DarkGray);
        }
        if self.cursor == Some(index) {
            style = style.add_modifier(Modifier::REVERSED);
        }
        style
    }
}

impl Component for NavBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.entry_rects.clear();
        self.apply_rect = None;
        self.toggle_rect = None;

        let block = if self.shadow {
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick)
                .border_style(Style::default().fg(Color::Gray))
        } else {
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray))
        };
        let row = block.inner(area);
        frame.render_widget(block, area);
        if row.height == 0 {
            return;
        }
        let row = Rect { height: 1, ..row };

        let logo = Line::from(vec![
            Span::styled(
                format!(" {} ", self.logo),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
        ]);
        frame.render_widget(Paragraph::new(logo), row);

        if self.is_compact(row.width) {
            let width = u16::try_from(TOGGLE.width()).unwrap_or(u16::MAX);
            let rect = Rect::new(row.right().saturating_sub(width), row.y, width, 1);
            let style = if self.menu_open {
                Style::default().fg(Color::Black).bg(Color::Yellow)
            } else {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            };
            frame.render_widget(Span::styled(TOGGLE, style), rect);
            self.toggle_rect = Some(rect);
            return;
        }

        let mut x = row.x + self.logo_width();
        for (index, entry) in self.entries.iter().enumerate() {
            let text = entry.text();
            let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
            let rect = Rect::new(x, row.y, width, 1);
            frame.render_widget(Span::styled(text, self.entry_style(index, entry)), rect);
            self.entry_rects.push((entry.group, rect));
            x = x.saturating_add(width + ENTRY_GAP);
        }

        let apply = self.apply_text();
        let width = u16::try_from(apply.width()).unwrap_or(u16::MAX);
        let rect = Rect::new(row.right().saturating_sub(width), row.y, width, 1);
        frame.render_widget(
            Span::styled(
                apply,
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            rect,
        );
        self.apply_rect = Some(rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn nav_bar() -> NavBar {
        let entries = PageGroup::ALL
            .into_iter()
            .map(|group| NavBarEntry {
                group,
                label: group.tag().to_string(),
                has_dropdown: group.nav_entry().has_dropdown(),
                active: group == PageGroup::About,
            })
            .collect();
        NavBar::new("JIU".into(), entries, "Apply Now".into())
    }

    fn draw(bar: &mut NavBar, width: u16) -> String {
        let backend = TestBackend::new(width, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| bar.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_wide_bar_lays_out_every_entry() {
        let mut bar = nav_bar();
        let text = draw(&mut bar, 120);
        assert_eq!(bar.entry_rects.len(), 7);
        assert!(bar.apply_rect.is_some());
        assert!(bar.toggle_rect.is_none());
        assert!(text.contains("about ▾"));
        assert!(text.contains("contact"));
        assert!(!text.contains("contact ▾"));
    }

    #[test]
    fn test_entry_rects_do_not_overlap() {
        let mut bar = nav_bar();
        draw(&mut bar, 120);
        for pair in bar.entry_rects.windows(2) {
            assert!(pair[0].1.right() < pair[1].1.x);
        }
        assert_eq!(bar.entry_rects[0].0, PageGroup::Home);
    }

    #[test]
    fn test_shadow_thickens_bottom_rule() {
        let mut bar = nav_bar();
        assert!(draw(&mut bar, 120).contains('─'));

        bar.shadow = true;
        let text = draw(&mut bar, 120);
        assert!(text.contains('━'));
        assert!(!text.contains('─'));
    }

    #[test]
    fn test_narrow_bar_collapses_to_toggle() {
        let mut bar = nav_bar();
        assert!(bar.is_compact(40));
        let text = draw(&mut bar, 40);
        assert!(bar.entry_rects.is_empty());
        assert!(bar.toggle_rect.is_some());
        assert!(text.contains("☰"));
    }
}
