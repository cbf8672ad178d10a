//! # Application State
//!
//! Core business state for the portal. This module contains domain logic
//! only, no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── router: Router                 // current page
//! ├── localizer: Localizer           // active language + translation trees
//! ├── header: HeaderState            // mobile menu, open dropdown
//! ├── view: ViewState                // state of the mounted page group
//! ├── view_epoch: u64                // bumped on every remount
//! ├── status_message: String         // status line text
//! └── timing: Timing                 // timer periods
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::time::Instant;

use crate::core::config::{ResolvedConfig, Timing};
use crate::core::content::{CAMPUS_SLIDES, DEFAULT_AUDIENCE, STATS};
use crate::core::i18n::{Localizer, TranslationError, Translations};
use crate::core::page::{Page, PageGroup};
use crate::core::router::Router;
use crate::core::widgets::{ALL_CATEGORIES, CategoryFilter, ContactForm, CountUp, SlideShow};

/// Header overlays. Independent of the router.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderState {
    pub mobile_menu_open: bool,
    pub active_dropdown: Option<PageGroup>,
}

#[derive(Debug, Clone)]
pub struct HomeState {
    pub slides: SlideShow,
    pub stats: Vec<CountUp>,
    pub audience: CategoryFilter,
}

impl HomeState {
    pub fn new(timing: &Timing) -> Self {
        Self {
            slides: SlideShow::new(CAMPUS_SLIDES.len()),
            stats: STATS
                .iter()
                .map(|s| CountUp::new(s.value, timing.count_up))
                .collect(),
            audience: CategoryFilter::new(DEFAULT_AUDIENCE),
        }
    }

    pub fn counters_running(&self, now: Instant) -> bool {
        self.stats.iter().any(|c| c.is_running(now))
    }
}

/// State owned by the mounted view. Replaced wholesale when the page group
/// changes, kept when moving between pages of the same group.
#[derive(Debug, Clone)]
pub enum ViewState {
    Home(HomeState),
    News(CategoryFilter),
    Contact(ContactForm),
    Static(PageGroup),
}

impl ViewState {
    pub fn mount(group: PageGroup, timing: &Timing) -> Self {
        match group {
            PageGroup::Home => ViewState::Home(HomeState::new(timing)),
            PageGroup::News => ViewState::News(CategoryFilter::new(ALL_CATEGORIES)),
            PageGroup::Contact => ViewState::Contact(ContactForm::new()),
            other => ViewState::Static(other),
        }
    }

    pub fn group(&self) -> PageGroup {
        match self {
            ViewState::Home(_) => PageGroup::Home,
            ViewState::News(_) => PageGroup::News,
            ViewState::Contact(_) => PageGroup::Contact,
            ViewState::Static(group) => *group,
        }
    }
}

pub struct App {
    pub router: Router,
    pub localizer: Localizer,
    pub header: HeaderState,
    pub view: ViewState,
    /// Incremented each time a new view is mounted. Timer actions carry the
    /// epoch they were scheduled under.
    pub view_epoch: u64,
    pub status_message: String,
    pub timing: Timing,
}

impl App {
    pub fn new(localizer: Localizer, timing: Timing) -> Self {
        let router = Router::new();
        let view = ViewState::mount(router.view(), &timing);
        Self {
            router,
            localizer,
            header: HeaderState::default(),
            view,
            view_epoch: 0,
            status_message: String::new(),
            timing,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Result<Self, TranslationError> {
        let translations = Translations::load()?;
        Ok(Self::new(
            Localizer::new(translations, config.language),
            config.timing,
        ))
    }

    pub fn current_page(&self) -> Page {
        self.router.current()
    }

    /// Shorthand for a prose lookup in the active language.
    pub fn t(&self, key: &str) -> String {
        self.localizer.text(key)
    }

    pub fn home(&self) -> Option<&HomeState> {
        match &self.view {
            ViewState::Home(home) => Some(home),
            _ => None,
        }
    }

    pub fn contact_form(&self) -> Option<&ContactForm> {
        match &self.view {
            ViewState::Contact(form) => Some(form),
            _ => None,
        }
    }

    pub fn news_filter(&self) -> Option<&CategoryFilter> {
        match &self.view {
            ViewState::News(filter) => Some(filter),
            _ => None,
        }
    }
}
