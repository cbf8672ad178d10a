//! # Menu Overlays
//!
//! The nav dropdown and the mobile menu are the same thing drawn in two
//! places: a `List` of entries, each carrying the `Action` it triggers.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `MenuState` lives in `TuiState` (selection survives redraws)
//! - `Dropdown` / `MobileMenu` are created each frame with borrowed state
//!
//! Both record the screen rect of every row while rendering so mouse clicks
//! can be resolved against what was actually drawn.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding};
use unicode_width::UnicodeWidthStr;

use crate::core::action::Action;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub label: String,
    pub action: Action,
    /// Sub-entry of the previous top-level row.
    pub nested: bool,
    /// Matches the current page.
    pub active: bool,
}

impl MenuItem {
    pub fn new(label: impl Into<String>, action: Action) -> Self {
        Self {
            label: label.into(),
            action,
            nested: false,
            active: false,
        }
    }

    pub fn nested(mut self) -> Self {
        self.nested = true;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    fn text(&self) -> String {
        if self.nested {
            format!("  › {}", self.label)
        } else {
            self.label.clone()
        }
    }
}

/// Events emitted by a menu overlay.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuEvent {
    Activate(usize),
    Dismiss,
}

/// Persistent selection state for a menu overlay.
#[derive(Debug, Default)]
pub struct MenuState {
    pub list_state: ListState,
    /// Number of rows in the last rendered menu.
    pub len: usize,
    /// Screen rect of each row from the last render.
    pub item_rects: Vec<Rect>,
    /// Whole overlay from the last render.
    pub region: Option<Rect>,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Forget the selection and the recorded geometry.
    pub fn reset(&mut self) {
        self.list_state.select(None);
        self.item_rects.clear();
        self.region = None;
    }

    pub fn select_first(&mut self, len: usize) {
        self.len = len;
        self.list_state.select((len > 0).then_some(0));
    }

    /// Row under screen position (`col`, `row`).
    pub fn item_at(&self, col: u16, row: u16) -> Option<usize> {
        let position = ratatui::layout::Position { x: col, y: row };
        self.item_rects.iter().position(|rect| rect.contains(position))
    }

    pub fn contains(&self, col: u16, row: u16) -> bool {
        self.region
            .is_some_and(|r| r.contains(ratatui::layout::Position { x: col, y: row }))
    }
}

impl EventHandler for MenuState {
    type Event = MenuEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<MenuEvent> {
        match event {
            TuiEvent::Escape => Some(MenuEvent::Dismiss),
            TuiEvent::CursorUp | TuiEvent::BackTab => {
                if self.len > 0 {
                    let current = self.selected().unwrap_or(0);
                    self.list_state.select(Some(current.saturating_sub(1)));
                }
                None
            }
            TuiEvent::CursorDown | TuiEvent::Tab => {
                if self.len > 0 {
                    let next = self.selected().map_or(0, |i| (i + 1).min(self.len - 1));
                    self.list_state.select(Some(next));
                }
                None
            }
            TuiEvent::Submit => self.selected().map(MenuEvent::Activate),
            _ => None,
        }
    }
}

fn render_list(frame: &mut Frame, state: &mut MenuState, items: &[MenuItem], overlay: Rect, block: Block) {
    frame.render_widget(Clear, overlay);

    let inner = block.inner(overlay);
    let selected = state.selected();
    let rows: Vec<ListItem> = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let mut style = if item.active {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::Gray)
            };
            if selected == Some(i) {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            ListItem::new(Line::from(Span::styled(item.text(), style)))
        })
        .collect();

    state.len = items.len();
    state.region = Some(overlay);
    state.item_rects = (0..items.len())
        .map(|i| u16::try_from(i).unwrap_or(u16::MAX))
        .take_while(|&i| i < inner.height)
        .map(|i| Rect::new(inner.x, inner.y + i, inner.width, 1))
        .collect();

    frame.render_stateful_widget(List::new(rows).block(block), overlay, &mut state.list_state);
}

/// Dropdown under a nav bar entry.
pub struct Dropdown<'a> {
    pub state: &'a mut MenuState,
    pub items: &'a [MenuItem],
    /// Rect of the parent nav entry.
    pub anchor: Rect,
}

impl Component for Dropdown<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let widest = self
            .items
            .iter()
            .map(|item| item.text().width())
            .max()
            .unwrap_or(0);
        let width = u16::try_from(widest + 4)
            .unwrap_or(u16::MAX)
            .min(area.width);
        let height = u16::try_from(self.items.len() + 2)
            .unwrap_or(u16::MAX)
            .min(area.height.saturating_sub(self.anchor.bottom().saturating_sub(area.y)));
        // Keep the box on screen when the anchor sits near the right edge
        let x = self.anchor.x.min(area.right().saturating_sub(width));
        let overlay = Rect::new(x, self.anchor.bottom(), width, height);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .padding(Padding::horizontal(1));
        render_list(frame, self.state, self.items, overlay, block);
    }
}

/// Full-height menu on the right edge, the only nav surface on narrow terminals.
pub struct MobileMenu<'a> {
    pub state: &'a mut MenuState,
    pub items: &'a [MenuItem],
    pub title: String,
}

impl Component for MobileMenu<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = area.width.min(36);
        let overlay = Rect::new(area.right().saturating_sub(width), area.y, width, area.height);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} ", self.title))
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" ↑↓ Move  Enter Open  Esc Close ").centered())
            .padding(Padding::horizontal(1));
        render_list(frame, self.state, self.items, overlay, block);
    }
}
