//! # Input Routing
//!
//! Turns one `TuiEvent` into the `Action`s the reducer should see.
//!
//! Presentation-only effects (scrolling, the nav cursor, link focus, hover,
//! the Browse/Form mode switch) are applied to `TuiState` directly; anything
//! that changes `App` comes back as an action for the event loop to feed to
//! `update()`.
//!
//! Routing order, first match wins:
//!
//! 1. Ctrl+C, resize, mouse and wheel events (any mode)
//! 2. The mobile menu, while open
//! 3. The dropdown, while open
//! 4. The contact form, in `Form` mode
//! 5. Page browsing

use ratatui::layout::Position;

use crate::core::action::Action;
use crate::core::i18n::Language;
use crate::core::page::{NAV_ENTRIES, Page, PageGroup};
use crate::core::state::App;
use crate::core::widgets::{ContactField, FormEdit};
use crate::tui::component::EventHandler;
use crate::tui::components::MenuEvent;
use crate::tui::event::TuiEvent;
use crate::tui::pages::{next_audience, next_news_category};
use crate::tui::ui::{dropdown_items, mobile_menu_items};
use crate::tui::{InputMode, TuiState};

pub fn handle_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Vec<Action> {
    match event {
        TuiEvent::ForceQuit => return vec![Action::Quit],
        TuiEvent::Resize => return Vec::new(),
        TuiEvent::MouseMove(col, row) => return mouse_move(app, tui, *col, *row),
        TuiEvent::MouseClick(col, row) => return mouse_click(app, tui, *col, *row),
        TuiEvent::ScrollUp | TuiEvent::ScrollDown => {
            tui.page_view.handle_event(event);
            return Vec::new();
        }
        _ => {}
    }

    if app.header.mobile_menu_open {
        return mobile_menu_key(app, tui, event);
    }
    if let Some(group) = app.header.active_dropdown
        && !tui.hits.compact
    {
        return dropdown_key(app, tui, group, event);
    }

    // The form can vanish under us (navigation, submit)
    if tui.input_mode == InputMode::Form
        && app.contact_form().is_none_or(|form| form.is_submitted())
    {
        tui.input_mode = InputMode::Browse;
    }
    match tui.input_mode {
        InputMode::Form => form_key(tui, event),
        InputMode::Browse => browse_key(app, tui, event),
    }
}

// ============================================================================
// Overlays
// ============================================================================

fn mobile_menu_key(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Vec<Action> {
    if matches!(event, TuiEvent::InputChar('m')) {
        return vec![Action::ToggleMobileMenu];
    }
    match tui.mobile_menu.handle_event(event) {
        Some(MenuEvent::Activate(index)) => mobile_menu_items(app)
            .get(index)
            .map(|item| vec![item.action.clone(), Action::CloseMobileMenu])
            .unwrap_or_default(),
        Some(MenuEvent::Dismiss) => vec![Action::CloseMobileMenu],
        None => Vec::new(),
    }
}

fn dropdown_key(app: &App, tui: &mut TuiState, group: PageGroup, event: &TuiEvent) -> Vec<Action> {
    match event {
        TuiEvent::CursorLeft => {
            move_nav_cursor(app, tui, false);
            return vec![Action::CloseDropdown];
        }
        TuiEvent::CursorRight => {
            move_nav_cursor(app, tui, true);
            return vec![Action::CloseDropdown];
        }
        _ => {}
    }
    match tui.dropdown.handle_event(event) {
        Some(MenuEvent::Activate(index)) => dropdown_items(app, group)
            .get(index)
            .map(|item| vec![item.action.clone()])
            .unwrap_or_default(),
        Some(MenuEvent::Dismiss) => vec![Action::CloseDropdown],
        None => Vec::new(),
    }
}

// ============================================================================
// Keyboard
// ============================================================================

fn form_key(tui: &mut TuiState, event: &TuiEvent) -> Vec<Action> {
    let edit = |edit: FormEdit| vec![Action::ContactEdit(edit)];
    match event {
        TuiEvent::Escape => {
            tui.input_mode = InputMode::Browse;
            Vec::new()
        }
        TuiEvent::Submit => vec![Action::SubmitContact],
        TuiEvent::Tab => edit(FormEdit::NextField),
        TuiEvent::BackTab => edit(FormEdit::PrevField),
        TuiEvent::CursorLeft => edit(FormEdit::PrevOption),
        TuiEvent::CursorRight => edit(FormEdit::NextOption),
        TuiEvent::Newline => edit(FormEdit::Insert('\n')),
        TuiEvent::InputChar(c) => edit(FormEdit::Insert(*c)),
        TuiEvent::Backspace => edit(FormEdit::Backspace),
        TuiEvent::Paste(text) => text
            .chars()
            .map(|c| Action::ContactEdit(FormEdit::Insert(c)))
            .collect(),
        _ => {
            tui.page_view.handle_event(event);
            Vec::new()
        }
    }
}

fn browse_key(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Vec<Action> {
    match event {
        TuiEvent::Escape => {
            if tui.nav_cursor.take().is_none() {
                tui.page_view.focused = None;
            }
            Vec::new()
        }
        TuiEvent::CursorLeft | TuiEvent::CursorRight => {
            if !tui.hits.compact {
                move_nav_cursor(app, tui, matches!(event, TuiEvent::CursorRight));
            }
            Vec::new()
        }
        TuiEvent::CursorDown => {
            if let Some(group) = cursor_group(tui)
                && group.nav_entry().has_dropdown()
            {
                tui.dropdown.reset();
                return vec![Action::OpenDropdown(group)];
            }
            tui.page_view.handle_event(event);
            Vec::new()
        }
        TuiEvent::Submit => {
            if let Some(group) = cursor_group(tui) {
                tui.nav_cursor = None;
                return vec![Action::Navigate(group.landing_page())];
            }
            match tui.page_view.focused_link() {
                Some(action) => activate_link(tui, action),
                None => Vec::new(),
            }
        }
        TuiEvent::Tab => {
            tui.nav_cursor = None;
            tui.page_view.focus_next_link();
            Vec::new()
        }
        TuiEvent::BackTab => {
            tui.nav_cursor = None;
            tui.page_view.focus_prev_link();
            Vec::new()
        }
        TuiEvent::InputChar(c) => shortcut(app, tui, *c),
        _ => {
            tui.page_view.handle_event(event);
            Vec::new()
        }
    }
}

fn shortcut(app: &App, tui: &mut TuiState, c: char) -> Vec<Action> {
    match c {
        'q' => vec![Action::Quit],
        'e' => vec![Action::SetLanguage(Language::En)],
        'u' => vec![Action::SetLanguage(Language::Uz)],
        'r' => vec![Action::SetLanguage(Language::Ru)],
        'm' => vec![Action::ToggleMobileMenu],
        '[' => vec![Action::SlidePrev],
        ']' => vec![Action::SlideNext],
        '1'..='9' => c
            .to_digit(10)
            .map(|d| vec![Action::SlideSelect(d as usize - 1)])
            .unwrap_or_default(),
        'a' => app
            .home()
            .map(|home| {
                vec![Action::SelectAudience(
                    next_audience(home.audience.active()).to_string(),
                )]
            })
            .unwrap_or_default(),
        'c' => app
            .news_filter()
            .map(|filter| {
                vec![Action::SelectNewsCategory(
                    next_news_category(filter.active()).to_string(),
                )]
            })
            .unwrap_or_default(),
        'i' => match app.contact_form() {
            Some(form) if !form.is_submitted() => {
                let field = form.focus().unwrap_or(ContactField::Name);
                activate_link(tui, Action::ContactEdit(FormEdit::Focus(field)))
            }
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

fn cursor_group(tui: &TuiState) -> Option<PageGroup> {
    tui.nav_cursor
        .and_then(|i| NAV_ENTRIES.get(i))
        .map(|entry| entry.group)
}

/// Step the nav cursor, wrapping. The first step lands on the active entry.
fn move_nav_cursor(app: &App, tui: &mut TuiState, forward: bool) {
    let len = NAV_ENTRIES.len();
    tui.nav_cursor = Some(match tui.nav_cursor {
        Some(i) if forward => (i + 1) % len,
        Some(i) => (i + len - 1) % len,
        None => NAV_ENTRIES
            .iter()
            .position(|entry| entry.is_active(app.current_page()))
            .unwrap_or(0),
    });
    tui.page_view.focused = None;
}

/// Follow a page link. Focusing a form field hands the keyboard to the form.
fn activate_link(tui: &mut TuiState, action: Action) -> Vec<Action> {
    if matches!(action, Action::ContactEdit(FormEdit::Focus(_))) {
        tui.input_mode = InputMode::Form;
    }
    vec![action]
}

// ============================================================================
// Mouse
// ============================================================================

fn mouse_move(app: &App, tui: &mut TuiState, col: u16, row: u16) -> Vec<Action> {
    if app.header.mobile_menu_open {
        if let Some(index) = tui.mobile_menu.item_at(col, row) {
            tui.mobile_menu.list_state.select(Some(index));
        }
        return Vec::new();
    }

    let mut actions = Vec::new();
    let entry = tui
        .hits
        .nav_entry_at(col, row)
        .filter(|group| group.nav_entry().has_dropdown());
    match (app.header.active_dropdown, entry) {
        (Some(open), Some(group)) if open != group => {
            tui.dropdown.reset();
            actions.push(Action::OpenDropdown(group));
        }
        (Some(_), Some(_)) => {}
        (Some(_), None) => {
            if let Some(index) = tui.dropdown.item_at(col, row) {
                tui.dropdown.list_state.select(Some(index));
            } else if !tui.dropdown.contains(col, row) {
                actions.push(Action::CloseDropdown);
            }
        }
        (None, Some(group)) => actions.push(Action::OpenDropdown(group)),
        (None, None) => {}
    }

    tui.page_view.hovered = if tui.dropdown.contains(col, row) {
        None
    } else {
        tui.page_view.section_at_row(row, tui.hits.body)
    };
    actions
}

fn mouse_click(app: &App, tui: &mut TuiState, col: u16, row: u16) -> Vec<Action> {
    if app.header.mobile_menu_open {
        if let Some(index) = tui.mobile_menu.item_at(col, row) {
            return mobile_menu_items(app)
                .get(index)
                .map(|item| vec![item.action.clone(), Action::CloseMobileMenu])
                .unwrap_or_default();
        }
        if !tui.mobile_menu.contains(col, row) {
            return vec![Action::CloseMobileMenu];
        }
        return Vec::new();
    }

    if let Some(group) = app.header.active_dropdown
        && let Some(index) = tui.dropdown.item_at(col, row)
    {
        return dropdown_items(app, group)
            .get(index)
            .map(|item| vec![item.action.clone()])
            .unwrap_or_default();
    }

    let position = Position { x: col, y: row };
    if let Some((_, action)) = tui.hits.top_bar.iter().find(|(rect, _)| rect.contains(position)) {
        return vec![action.clone()];
    }
    if let Some(group) = tui.hits.nav_entry_at(col, row) {
        tui.nav_cursor = None;
        return vec![Action::Navigate(group.landing_page())];
    }
    if tui.hits.apply.is_some_and(|rect| rect.contains(position)) {
        return vec![Action::Navigate(Page::Admissions)];
    }
    if tui.hits.menu_toggle.is_some_and(|rect| rect.contains(position)) {
        return vec![Action::ToggleMobileMenu];
    }

    if let Some(index) = tui.page_view.section_at_row(row, tui.hits.body)
        && let Some(Some(action)) = tui.page_view.layout.links.get(index).cloned()
    {
        tui.page_view.focused = Some(index);
        return activate_link(tui, action);
    }
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::update;
    use crate::test_support::test_app;
    use crate::tui::ui::draw_ui;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;
    use std::time::Instant;

    /// Route an event and feed the resulting actions to the reducer.
    fn press(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Vec<Action> {
        let actions = handle_event(app, tui, &event);
        for action in actions.clone() {
            update(app, action);
        }
        actions
    }

    fn draw(app: &App, tui: &mut TuiState) {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal
            .draw(|f| draw_ui(f, app, tui, Instant::now()))
            .unwrap();
    }

    #[test]
    fn test_quit_keys() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        assert_eq!(press(&mut app, &mut tui, TuiEvent::ForceQuit), vec![Action::Quit]);
        assert_eq!(press(&mut app, &mut tui, TuiEvent::InputChar('q')), vec![Action::Quit]);
    }

    #[test]
    fn test_language_shortcuts() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        press(&mut app, &mut tui, TuiEvent::InputChar('u'));
        assert_eq!(app.localizer.language(), Language::Uz);
        press(&mut app, &mut tui, TuiEvent::InputChar('r'));
        assert_eq!(app.localizer.language(), Language::Ru);
        press(&mut app, &mut tui, TuiEvent::InputChar('e'));
        assert_eq!(app.localizer.language(), Language::En);
    }

    #[test]
    fn test_nav_cursor_opens_dropdown_and_navigates() {
        let mut app = test_app();
        let mut tui = TuiState::new();

        press(&mut app, &mut tui, TuiEvent::CursorRight);
        assert_eq!(tui.nav_cursor, Some(0), "first step lands on the active entry");
        press(&mut app, &mut tui, TuiEvent::CursorRight);
        assert_eq!(cursor_group(&tui), Some(PageGroup::About));

        let opened = press(&mut app, &mut tui, TuiEvent::CursorDown);
        assert_eq!(opened, vec![Action::OpenDropdown(PageGroup::About)]);
        assert_eq!(app.header.active_dropdown, Some(PageGroup::About));

        tui.dropdown.select_first(3);
        press(&mut app, &mut tui, TuiEvent::CursorDown);
        let actions = press(&mut app, &mut tui, TuiEvent::Submit);
        assert_eq!(actions, vec![Action::Navigate(Page::Vision)]);
        assert_eq!(app.current_page(), Page::Vision);
        assert_eq!(app.header.active_dropdown, None);
    }

    #[test]
    fn test_enter_on_plain_entry_navigates() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        tui.nav_cursor = Some(5);
        assert_eq!(
            press(&mut app, &mut tui, TuiEvent::Submit),
            vec![Action::Navigate(Page::News)]
        );
        assert_eq!(tui.nav_cursor, None);
    }

    #[test]
    fn test_escape_closes_dropdown() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        update(&mut app, Action::OpenDropdown(PageGroup::Admissions));
        assert_eq!(
            press(&mut app, &mut tui, TuiEvent::Escape),
            vec![Action::CloseDropdown]
        );
        assert_eq!(app.header.active_dropdown, None);
    }

    #[test]
    fn test_mobile_menu_activation_closes_menu() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        press(&mut app, &mut tui, TuiEvent::InputChar('m'));
        assert!(app.header.mobile_menu_open);

        tui.mobile_menu.select_first(mobile_menu_items(&app).len());
        press(&mut app, &mut tui, TuiEvent::CursorDown);
        let actions = press(&mut app, &mut tui, TuiEvent::Submit);
        assert_eq!(actions, vec![Action::Navigate(Page::About), Action::CloseMobileMenu]);
        assert!(!app.header.mobile_menu_open);
        assert_eq!(app.current_page(), Page::About);
    }

    #[test]
    fn test_click_outside_mobile_menu_closes_it() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        update(&mut app, Action::ToggleMobileMenu);
        tui.mobile_menu.region = Some(Rect::new(60, 1, 36, 20));
        assert_eq!(
            press(&mut app, &mut tui, TuiEvent::MouseClick(5, 10)),
            vec![Action::CloseMobileMenu]
        );
        assert!(!app.header.mobile_menu_open);
    }

    #[test]
    fn test_hover_opens_and_leaving_closes_dropdown() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        tui.hits.nav_entries = vec![
            (PageGroup::Home, Rect::new(6, 1, 4, 1)),
            (PageGroup::About, Rect::new(12, 1, 7, 1)),
            (PageGroup::Academics, Rect::new(21, 1, 11, 1)),
        ];
        tui.hits.body = Rect::new(0, 3, 120, 30);

        // Plain entries have no dropdown
        assert!(press(&mut app, &mut tui, TuiEvent::MouseMove(7, 1)).is_empty());

        press(&mut app, &mut tui, TuiEvent::MouseMove(13, 1));
        assert_eq!(app.header.active_dropdown, Some(PageGroup::About));

        press(&mut app, &mut tui, TuiEvent::MouseMove(22, 1));
        assert_eq!(app.header.active_dropdown, Some(PageGroup::Academics));

        press(&mut app, &mut tui, TuiEvent::MouseMove(80, 20));
        assert_eq!(app.header.active_dropdown, None);
    }

    #[test]
    fn test_click_nav_entry_navigates_to_landing_page() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        draw(&app, &mut tui);
        let (_, rect) = tui.hits.nav_entries[3];
        press(&mut app, &mut tui, TuiEvent::MouseClick(rect.x, rect.y));
        assert_eq!(app.current_page(), Page::Admissions);
    }

    #[test]
    fn test_click_top_bar_language() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        draw(&app, &mut tui);
        let (rect, _) = tui
            .hits
            .top_bar
            .iter()
            .find(|(_, action)| *action == Action::SetLanguage(Language::Ru))
            .cloned()
            .expect("language hit");
        press(&mut app, &mut tui, TuiEvent::MouseClick(rect.x, rect.y));
        assert_eq!(app.localizer.language(), Language::Ru);
    }

    #[test]
    fn test_click_body_link_follows_it() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        draw(&app, &mut tui);
        let body = tui.hits.body;
        let row = (body.y..body.bottom())
            .find(|&row| {
                tui.page_view.link_at_row(row, body) == Some(Action::Navigate(Page::Admissions))
            })
            .expect("apply button on screen");
        press(&mut app, &mut tui, TuiEvent::MouseClick(2, row));
        assert_eq!(app.current_page(), Page::Admissions);
    }

    #[test]
    fn test_tab_then_enter_follows_first_link() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        draw(&app, &mut tui);
        press(&mut app, &mut tui, TuiEvent::Tab);
        let first = tui.page_view.focused_link().expect("a focused link");
        let actions = press(&mut app, &mut tui, TuiEvent::Submit);
        assert_eq!(actions, vec![first]);
    }

    #[test]
    fn test_form_mode_edits_and_escapes() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        update(&mut app, Action::Navigate(Page::Contact));

        press(&mut app, &mut tui, TuiEvent::InputChar('i'));
        assert_eq!(tui.input_mode, InputMode::Form);
        assert_eq!(app.contact_form().unwrap().focus(), Some(ContactField::Name));

        press(&mut app, &mut tui, TuiEvent::InputChar('q'));
        press(&mut app, &mut tui, TuiEvent::Paste("a\r\nb".into()));
        assert_eq!(app.contact_form().unwrap().name, "qab");

        press(&mut app, &mut tui, TuiEvent::Tab);
        assert_eq!(app.contact_form().unwrap().focus(), Some(ContactField::Email));

        press(&mut app, &mut tui, TuiEvent::Escape);
        assert_eq!(tui.input_mode, InputMode::Browse);
        // Back in Browse, 'q' quits again
        assert_eq!(press(&mut app, &mut tui, TuiEvent::InputChar('q')), vec![Action::Quit]);
    }

    #[test]
    fn test_form_mode_drops_when_form_is_gone() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        tui.input_mode = InputMode::Form;
        assert_eq!(press(&mut app, &mut tui, TuiEvent::InputChar('q')), vec![Action::Quit]);
        assert_eq!(tui.input_mode, InputMode::Browse);
    }

    #[test]
    fn test_page_shortcuts() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        press(&mut app, &mut tui, TuiEvent::InputChar(']'));
        assert_eq!(app.home().unwrap().slides.index(), 1);
        press(&mut app, &mut tui, TuiEvent::InputChar('4'));
        assert_eq!(app.home().unwrap().slides.index(), 3);
        press(&mut app, &mut tui, TuiEvent::InputChar('a'));
        assert_eq!(app.home().unwrap().audience.active(), "current");

        update(&mut app, Action::Navigate(Page::News));
        press(&mut app, &mut tui, TuiEvent::InputChar('c'));
        assert_eq!(app.news_filter().unwrap().active(), "academic");
    }
}
