use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::action::Action;
use crate::core::i18n::Language;
use crate::core::page::{NAV_ENTRIES, Page, PageGroup};
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{
    Dropdown, MenuItem, MobileMenu, NavBar, NavBarEntry, PageView, StatusBar, TopBar,
};
use crate::tui::pages::{PageContext, build_sections};
use crate::tui::{InputMode, TuiState};

const LOGO: &str = "JIU";
/// Body rows scrolled before the header casts its shadow.
const HEADER_SHADOW_ROWS: u16 = 2;

/// Screen regions recorded during the last draw, used for mouse hit-testing.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    pub top_bar: Vec<(Rect, Action)>,
    pub nav_entries: Vec<(PageGroup, Rect)>,
    pub apply: Option<Rect>,
    pub menu_toggle: Option<Rect>,
    pub body: Rect,
    /// The nav bar collapsed to the `☰` toggle.
    pub compact: bool,
}

impl HitMap {
    pub fn nav_entry_at(&self, col: u16, row: u16) -> Option<PageGroup> {
        let position = ratatui::layout::Position { x: col, y: row };
        self.nav_entries
            .iter()
            .find(|(_, rect)| rect.contains(position))
            .map(|(group, _)| *group)
    }

    pub fn nav_rect(&self, group: PageGroup) -> Option<Rect> {
        self.nav_entries
            .iter()
            .find(|(g, _)| *g == group)
            .map(|(_, rect)| *rect)
    }
}

/// Sub-page entries of `group`'s dropdown, the current page marked active.
pub fn dropdown_items(app: &App, group: PageGroup) -> Vec<MenuItem> {
    let current = app.current_page();
    group
        .nav_entry()
        .dropdown
        .iter()
        .map(|sub| {
            MenuItem::new(app.t(sub.label_key), Action::Navigate(sub.page))
                .active(sub.page == current)
        })
        .collect()
}

/// Everything the header offers, flattened for the narrow-screen menu:
/// entries with their sub-pages nested, then the languages and Apply.
pub fn mobile_menu_items(app: &App) -> Vec<MenuItem> {
    let current = app.current_page();
    let mut items = Vec::new();
    for entry in &NAV_ENTRIES {
        items.push(
            MenuItem::new(app.t(entry.label_key), Action::Navigate(entry.page()))
                .active(entry.is_active(current)),
        );
        for sub in entry.dropdown {
            items.push(
                MenuItem::new(app.t(sub.label_key), Action::Navigate(sub.page))
                    .nested()
                    .active(sub.page == current),
            );
        }
    }
    let language = app.localizer.language();
    for option in Language::ALL {
        items.push(
            MenuItem::new(option.native_name(), Action::SetLanguage(option))
                .active(option == language),
        );
    }
    items.push(MenuItem::new(
        app.t("header.topBar.apply"),
        Action::Navigate(Page::Admissions),
    ));
    items
}

fn location(page: Page) -> String {
    let group = page.group();
    if group.tag() == page.tag() {
        page.tag().to_string()
    } else {
        format!("{}/{}", group.tag(), page.tag())
    }
}

fn hints(app: &App, mode: InputMode) -> String {
    if mode == InputMode::Form {
        return String::from("Tab Field  ←→ Subject  Enter Send  Esc Done ");
    }
    let page_keys = match app.view.group() {
        PageGroup::Home => "[ ] Slides  a Audience  ",
        PageGroup::News => "c Category  ",
        PageGroup::Contact => "i Write  ",
        _ => "",
    };
    format!("{page_keys}Tab Links  e/u/r Lang  q Quit ")
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, now: Instant) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(2), Min(0), Length(1)]);
    let [top_area, nav_area, body_area, status_area] = layout.areas(frame.area());

    let mut top_bar = TopBar::new(
        app.t("header.topBar.college"),
        app.t("header.topBar.university"),
        app.t("header.topBar.programs"),
        app.t("header.topBar.international"),
        app.t("header.topBar.apply"),
        app.localizer.language(),
    );
    top_bar.render(frame, top_area);

    let current = app.current_page();
    let entries = NAV_ENTRIES
        .iter()
        .map(|entry| NavBarEntry {
            group: entry.group,
            label: app.t(entry.label_key),
            has_dropdown: entry.has_dropdown(),
            active: entry.is_active(current),
        })
        .collect();
    let mut nav_bar = NavBar::new(LOGO.to_string(), entries, app.t("header.topBar.apply"));
    nav_bar.cursor = tui.nav_cursor;
    nav_bar.open = app.header.active_dropdown;
    nav_bar.menu_open = app.header.mobile_menu_open;
    nav_bar.shadow = tui.page_view.offset() > HEADER_SHADOW_ROWS;
    nav_bar.render(frame, nav_area);

    let ctx = PageContext::new(app, now, tui.input_mode == InputMode::Form);
    let sections = build_sections(&ctx);
    PageView::new(&mut tui.page_view, &sections).render(frame, body_area);

    StatusBar::new(
        location(current),
        app.status_message.clone(),
        hints(app, tui.input_mode),
    )
    .render(frame, status_area);

    tui.hits = HitMap {
        top_bar: top_bar.hits,
        nav_entries: nav_bar.entry_rects,
        apply: nav_bar.apply_rect,
        menu_toggle: nav_bar.toggle_rect,
        body: body_area,
        compact: nav_bar.toggle_rect.is_some(),
    };

    // Overlays last so they sit on top of the page
    match app.header.active_dropdown {
        Some(group) if !tui.hits.compact => {
            if let Some(anchor) = tui.hits.nav_rect(group) {
                let items = dropdown_items(app, group);
                if tui.dropdown.selected().is_none() {
                    tui.dropdown.select_first(items.len());
                }
                Dropdown {
                    state: &mut tui.dropdown,
                    items: &items,
                    anchor,
                }
                .render(frame, frame.area());
            }
        }
        _ => tui.dropdown.reset(),
    }

    if app.header.mobile_menu_open {
        let items = mobile_menu_items(app);
        if tui.mobile_menu.selected().is_none() {
            tui.mobile_menu.select_first(items.len());
        }
        let area = frame.area();
        let below_top = Rect {
            y: nav_area.y,
            height: area.height.saturating_sub(top_area.height),
            ..area
        };
        MobileMenu {
            state: &mut tui.mobile_menu,
            items: &items,
            title: app.t("header.topBar.university"),
        }
        .render(frame, below_top);
    } else {
        tui.mobile_menu.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::update;
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App, tui: &mut TuiState, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| draw_ui(f, app, tui, Instant::now()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_wide_screen_shows_full_nav() {
        let app = test_app();
        let mut tui = TuiState::new();
        let screen = draw(&app, &mut tui, 120, 30);
        assert!(screen.contains("Jojet International University"));
        assert!(screen.contains("Student Life"));
        assert!(!tui.hits.compact);
        assert_eq!(tui.hits.nav_entries.len(), 7);
        assert!(tui.hits.apply.is_some());
        assert!(tui.hits.body.height > 0);
    }

    #[test]
    fn test_narrow_screen_collapses_nav() {
        let app = test_app();
        let mut tui = TuiState::new();
        draw(&app, &mut tui, 50, 20);
        assert!(tui.hits.compact);
        assert!(tui.hits.nav_entries.is_empty());
        assert!(tui.hits.menu_toggle.is_some());
    }

    #[test]
    fn test_status_bar_shows_location() {
        let mut app = test_app();
        update(&mut app, Action::Navigate(Page::HowToApply));
        let mut tui = TuiState::new();
        let screen = draw(&app, &mut tui, 120, 30);
        assert!(screen.contains("admissions/how-to-apply"));
    }

    #[test]
    fn test_open_dropdown_renders_sub_pages() {
        let mut app = test_app();
        update(&mut app, Action::OpenDropdown(PageGroup::About));
        let mut tui = TuiState::new();
        let screen = draw(&app, &mut tui, 120, 30);
        assert!(screen.contains("Vision & Mission"));
        assert_eq!(tui.dropdown.selected(), Some(0));
        assert_eq!(tui.dropdown.item_rects.len(), 3);
    }

    #[test]
    fn test_closed_dropdown_resets_selection() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        update(&mut app, Action::OpenDropdown(PageGroup::Academics));
        draw(&app, &mut tui, 120, 30);
        update(&mut app, Action::CloseDropdown);
        draw(&app, &mut tui, 120, 30);
        assert_eq!(tui.dropdown.selected(), None);
        assert!(tui.dropdown.item_rects.is_empty());
    }

    #[test]
    fn test_mobile_menu_lists_everything() {
        let app = test_app();
        let items = mobile_menu_items(&app);
        // 7 entries, 9 sub-pages, 3 languages, Apply
        assert_eq!(items.len(), 20);
        assert!(items.iter().filter(|i| i.nested).count() == 9);
        assert!(
            items
                .iter()
                .any(|i| i.action == Action::SetLanguage(Language::Uz))
        );
        assert_eq!(
            items.last().map(|i| i.action.clone()),
            Some(Action::Navigate(Page::Admissions))
        );
    }

    #[test]
    fn test_dropdown_marks_current_page() {
        let mut app = test_app();
        update(&mut app, Action::Navigate(Page::Graduate));
        let items = dropdown_items(&app, PageGroup::Academics);
        let active: Vec<_> = items.iter().filter(|i| i.active).map(|i| i.label.as_str()).collect();
        assert_eq!(active, vec!["Graduate Programs"]);
    }

    #[test]
    fn test_header_shadow_follows_scroll() {
        let app = test_app();
        let mut tui = TuiState::new();
        let row = |screen: &str| screen.lines().nth(2).unwrap_or_default().to_string();

        let screen = draw(&app, &mut tui, 120, 30);
        assert!(!row(&screen).contains('━'));

        tui.page_view
            .scroll_state
            .set_offset(ratatui::layout::Position { x: 0, y: 10 });
        let screen = draw(&app, &mut tui, 120, 30);
        assert!(row(&screen).contains('━'));
    }

    #[test]
    fn test_location_format() {
        assert_eq!(location(Page::Home), "home");
        assert_eq!(location(Page::Vision), "about/vision");
    }
}
