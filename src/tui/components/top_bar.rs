//! # TopBar Component
//!
//! The thin strip above the header: college and university names on the
//! left; Programs, International, the language switcher and Apply on the
//! right.
//!
//! Stateless. Props in, one line out. The screen rect of every clickable
//! label is recorded in `hits` during `render` so the event loop can map a
//! click back to the action it stands for.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::core::action::Action;
use crate::core::i18n::Language;
use crate::core::page::Page;
use crate::tui::component::Component;

const BAR_STYLE: Style = Style::new().fg(Color::White).bg(Color::Blue);

pub struct TopBar {
    pub college: String,
    pub university: String,
    pub programs: String,
    pub international: String,
    pub apply: String,
    pub language: Language,
    /// Clickable labels from the last render.
    pub hits: Vec<(Rect, Action)>,
}

impl TopBar {
    pub fn new(
        college: String,
        university: String,
        programs: String,
        international: String,
        apply: String,
        language: Language,
    ) -> Self {
        Self {
            college,
            university,
            programs,
            international,
            apply,
            language,
            hits: Vec::new(),
        }
    }

    /// Right-hand labels in display order, with their actions.
    fn right_items(&self) -> Vec<(String, Style, Option<Action>)> {
        let mut items = vec![
            (self.programs.clone(), BAR_STYLE, Some(Action::Navigate(Page::Academics))),
            (self.international.clone(), BAR_STYLE, Some(Action::Navigate(Page::Admissions))),
            ("│".to_string(), BAR_STYLE.fg(Color::Gray), None),
        ];
        for language in Language::ALL {
            let style = if language == self.language {
                BAR_STYLE.fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                BAR_STYLE.fg(Color::Gray)
            };
            let label = if language == self.language {
                format!("[{}]", language.label())
            } else {
                language.label().to_string()
            };
            items.push((label, style, Some(Action::SetLanguage(language))));
        }
        items.push((
            format!(" {} ", self.apply),
            Style::new()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            Some(Action::Navigate(Page::Admissions)),
        ));
        items
    }
}

impl Component for TopBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.hits.clear();
        frame.render_widget(Paragraph::new("").style(BAR_STYLE), area);

        let items = self.right_items();
        let gap = 1usize;
        let right_width: usize = items.iter().map(|(text, _, _)| text.width() + gap).sum();
        let right_width = u16::try_from(right_width).unwrap_or(u16::MAX).min(area.width);
        let right_x = area.right().saturating_sub(right_width);

        let left = Rect::new(area.x, area.y, right_x.saturating_sub(area.x), 1);
        let left_line = Line::from(vec![
            Span::styled(format!(" {}", self.college), BAR_STYLE.add_modifier(Modifier::BOLD)),
            Span::styled(" · ", BAR_STYLE.fg(Color::Gray)),
            Span::styled(self.university.clone(), BAR_STYLE),
        ]);
        frame.render_widget(Paragraph::new(left_line).style(BAR_STYLE), left);

        let mut x = right_x;
        for (text, style, action) in items {
            let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
            if x.saturating_add(width) > area.right() {
                break;
            }
            let rect = Rect::new(x, area.y, width, 1);
            frame.render_widget(Span::styled(text, style), rect);
            if let Some(action) = action {
                self.hits.push((rect, action));
            }
            x = x.saturating_add(width + 1);
        }
    }
}
