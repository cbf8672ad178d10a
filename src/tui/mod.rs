//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the portal,
//! translates keyboard and mouse events into core::Action values, and owns
//! the timers the mounted view asks for.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (smooth scroll to top, statistics counting up): draws every
//!   frame interval (33ms by default).
//! - **Idle**: sleeps up to 500ms, only redraws on events, timer actions or
//!   terminal resize.
//!
//! ## Timers
//!
//! The slideshow interval and the contact form reset run as tokio tasks that
//! send actions back through an `mpsc` channel. Their guards live in
//! `ViewTimers` and are replaced whenever a new view mounts, so nothing
//! scheduled by one page fires into the next.

mod component;
mod components;
mod event;
mod input;
mod pages;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::mpsc::{self, Sender};
use std::time::{Duration, Instant};

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use crossterm::terminal::SetTitle;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::core::timer::{TimerGuard, spawn_after, spawn_interval};
use crate::core::widgets::CountUp;
use crate::tui::components::{MenuState, PageViewState, SMOOTH_SCROLL};
use crate::tui::event::{poll_event_immediate, poll_event_timeout};
use crate::tui::ui::HitMap;

const IDLE_POLL: Duration = Duration::from_millis(500);

/// Modal input mode: determines how keyboard events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Scroll, follow links, use the header. Letter keys are shortcuts.
    #[default]
    Browse,
    /// The contact form owns the keyboard. Esc returns to Browse.
    Form,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub page_view: PageViewState,
    pub dropdown: MenuState,
    pub mobile_menu: MenuState,
    pub input_mode: InputMode,
    /// Nav bar entry under the keyboard cursor
    pub nav_cursor: Option<usize>,
    /// Regions from the last draw
    pub hits: HitMap,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            page_view: PageViewState::new(),
            dropdown: MenuState::new(),
            mobile_menu: MenuState::new(),
            input_mode: InputMode::Browse,
            nav_cursor: None,
            hits: HitMap::default(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Kitty keyboard protocol is ignored by terminals that lack it
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste
        );
    }
}

/// Timers belonging to the mounted view.
#[derive(Default)]
struct ViewTimers {
    slides: Option<TimerGuard>,
    form_reset: Option<TimerGuard>,
}

impl ViewTimers {
    /// Drop the previous view's timers and start the ones the new view needs.
    fn mount(&mut self, app: &App, tx: &Sender<Action>) {
        self.form_reset = None;
        let epoch = app.view_epoch;
        self.slides = app.home().map(|_| {
            spawn_interval("slides", app.timing.slide_interval, tx.clone(), move || {
                Action::SlideTick { epoch }
            })
        });
    }

    fn schedule_form_reset(&mut self, app: &App, tx: &Sender<Action>) {
        self.form_reset = Some(spawn_after(
            "form-reset",
            app.timing.form_reset,
            tx.clone(),
            Action::ResetContactForm {
                epoch: app.view_epoch,
            },
        ));
    }
}

fn set_title(app: &App) {
    let title = format!(
        "{} [lang={}]",
        app.t("header.topBar.university"),
        app.localizer.document_lang()
    );
    if let Err(e) = execute!(stdout(), SetTitle(title)) {
        warn!("Failed to set terminal title: {}", e);
    }
}

/// The statistics band is on screen and the counters have not started yet.
fn stats_pending(app: &App, tui: &TuiState) -> bool {
    tui.page_view.stats_in_view()
        && app
            .home()
            .is_some_and(|home| !home.stats.iter().all(CountUp::is_triggered))
}

/// Feed one action to the reducer and perform the effect it asks for.
/// Returns true when the app should quit.
fn dispatch(
    app: &mut App,
    tui: &mut TuiState,
    timers: &mut ViewTimers,
    tx: &Sender<Action>,
    action: Action,
) -> bool {
    match update(app, action) {
        Effect::None => {}
        Effect::Quit => return true,
        Effect::Navigated { remounted } => {
            tui.page_view.begin_scroll_to_top(Instant::now(), SMOOTH_SCROLL);
            tui.nav_cursor = None;
            if remounted {
                tui.input_mode = InputMode::Browse;
                timers.mount(app, tx);
            }
        }
        Effect::LanguageChanged(_) => set_title(app),
        Effect::ScheduleFormReset => {
            tui.input_mode = InputMode::Browse;
            timers.schedule_form_reset(app, tx);
        }
    }
    false
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config).map_err(std::io::Error::other)?;
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();
    set_title(&app);

    // Channel for actions from timers
    let (tx, rx) = mpsc::channel();
    let mut timers = ViewTimers::default();
    timers.mount(&app, &tx);

    let mut needs_redraw = true; // Force first frame

    'outer: loop {
        let now = Instant::now();
        let scrolling = tui.page_view.advance_animation(now);
        let counting = app.home().is_some_and(|home| home.counters_running(now));
        let animating = scrolling || counting;

        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, now))?;
            needs_redraw = false;

            // Visibility is known only after layout
            if stats_pending(&app, &tui) {
                dispatch(&mut app, &mut tui, &mut timers, &tx, Action::StatsVisible(now));
                needs_redraw = true;
            }
        }

        let timeout = if animating || needs_redraw {
            app.timing.frame
        } else {
            IDLE_POLL
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            for action in input::handle_event(&app, &mut tui, &event) {
                if dispatch(&mut app, &mut tui, &mut timers, &tx, action) {
                    break 'outer;
                }
            }
        }

        // Timer actions
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if dispatch(&mut app, &mut tui, &mut timers, &tx, action) {
                break 'outer;
            }
        }
    }

    info!("Closing portal on {}", app.current_page());
    drop(timers);
    ratatui::restore();
    Ok(())
}
