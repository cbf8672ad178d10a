//! # Section
//!
//! The building block of every page body: a run of styled lines, optionally
//! framed with a titled border, optionally carrying the `Action` it triggers
//! when clicked or activated with Enter.
//!
//! Heights come from `Paragraph::line_count`, so the scroll layout and the
//! actual render always agree on wrapping.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Padding, Paragraph, Widget, Wrap};

use crate::core::action::Action;

/// Horizontal space taken by borders (1 + 1) and padding (1 + 1).
const BOXED_HORIZONTAL_OVERHEAD: u16 = 4;

/// Named positions in a page that the adapter watches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Stats,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: Option<String>,
    pub lines: Vec<Line<'static>>,
    pub link: Option<Action>,
    pub boxed: bool,
    pub anchor: Option<Anchor>,
    pub border_color: Color,
}

impl Section {
    pub fn boxed(title: impl Into<String>, lines: Vec<Line<'static>>) -> Self {
        Self {
            title: Some(title.into()),
            lines,
            link: None,
            boxed: true,
            anchor: None,
            border_color: Color::DarkGray,
        }
    }

    /// Framed, no title.
    pub fn card(lines: Vec<Line<'static>>) -> Self {
        Self {
            title: None,
            ..Self::boxed("", lines)
        }
    }

    pub fn plain(lines: Vec<Line<'static>>) -> Self {
        Self {
            title: None,
            lines,
            link: None,
            boxed: false,
            anchor: None,
            border_color: Color::DarkGray,
        }
    }

    pub fn spacer() -> Self {
        Self::plain(vec![Line::default()])
    }

    pub fn with_link(mut self, action: Action) -> Self {
        self.link = Some(action);
        self
    }

    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = Some(anchor);
        self
    }

    pub fn with_border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }

    fn paragraph(&self, highlighted: bool) -> Paragraph<'_> {
        let mut paragraph = Paragraph::new(self.lines.clone()).wrap(Wrap { trim: false });
        if self.boxed {
            let border_style = if highlighted {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.border_color)
            };
            let mut block = Block::bordered()
                .border_style(border_style)
                .padding(Padding::horizontal(1));
            if let Some(title) = &self.title
                && !title.is_empty()
            {
                block = block.title(format!(" {title} ")).title_style(border_style);
            }
            paragraph = paragraph.block(block);
        }
        if highlighted {
            paragraph = paragraph.style(Style::default().bg(Color::DarkGray));
        }
        paragraph
    }

    /// Rows needed at `width`, never less than one.
    pub fn height(&self, width: u16) -> u16 {
        let inner = if self.boxed {
            width.saturating_sub(BOXED_HORIZONTAL_OVERHEAD)
        } else {
            width
        };
        if inner == 0 {
            return 1;
        }
        let count = self.paragraph(false).line_count(inner);
        u16::try_from(count).unwrap_or(u16::MAX).max(1)
    }

    /// Plain text of all lines, for tests and logging.
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Render wrapper used inside the page `ScrollView`.
pub struct SectionWidget<'a> {
    pub section: &'a Section,
    pub highlighted: bool,
}

impl Widget for SectionWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.section.paragraph(self.highlighted).render(area, buf);
    }
}
