//! # StatusBar Component
//!
//! Bottom line: where you are, the last status message, and the keys that
//! work right now.
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `" about/vision | Language: Русский"`
//! 2. **Default**: `" about/vision"`
//!
//! Hints are right-aligned and dropped first when the line is too narrow, so
//! the location is always visible.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub struct StatusBar {
    /// `group/page`, or just `page` when they share a tag.
    pub location: String,
    pub status_message: String,
    pub hints: String,
}

impl StatusBar {
    pub fn new(location: String, status_message: String, hints: String) -> Self {
        Self {
            location,
            status_message,
            hints,
        }
    }

    fn left_text(&self) -> String {
        if self.status_message.is_empty() {
            format!(" {}", self.location)
        } else {
            format!(" {} | {}", self.location, self.status_message)
        }
    }
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let left = self.left_text();
        let room = usize::from(area.width).saturating_sub(left.width() + 1);
        let mut spans = vec![Span::raw(left)];
        if self.hints.width() <= room {
            let pad = room - self.hints.width();
            spans.push(Span::raw(" ".repeat(pad)));
            spans.push(Span::styled(
                self.hints.clone(),
                Style::default().fg(Color::DarkGray),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(bar: &mut StatusBar, width: u16) -> String {
        let backend = TestBackend::new(width, 1);
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
    fn test_status_message_and_hints() {
        let mut bar = StatusBar::new(
            "about/vision".into(),
            "Language: English".into(),
            "q Quit".into(),
        );
        let text = draw(&mut bar, 80);
        assert!(text.contains("about/vision | Language: English"));
        assert!(text.trim_end().ends_with("q Quit"));
    }

    #[test]
    fn test_no_separator_without_status() {
        let mut bar = StatusBar::new("home".into(), String::new(), String::new());
        let text = draw(&mut bar, 40);
        assert!(text.contains("home"));
        assert!(!text.contains('|'));
    }

    #[test]
    fn test_hints_dropped_when_narrow() {
        let mut bar = StatusBar::new(
            "contact".into(),
            "Message sent".into(),
            "Tab Next field  Enter Send  Esc Leave form".into(),
        );
        let text = draw(&mut bar, 30);
        assert!(text.contains("Message sent"));
        assert!(!text.contains("Esc"));
    }
}
