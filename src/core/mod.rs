//! # Core Application Logic
//!
//! This module contains the portal's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Router (page)        │
//!                    │  • Localizer (i18n)     │
//!                    │  • State + update()     │
//!                    │                         │
//!                    │  No terminal. No UI.    │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`page`]: `Page` and `PageGroup` identifiers, the nav model
//! - [`router`]: the current page and group-change detection
//! - [`i18n`]: languages and the dot-key translation resolver
//! - [`widgets`]: slideshow, count-up, category filter, contact form
//! - [`state`]: the `App` struct, all application state in one place
//! - [`action`]: the `Action` enum and the `update()` reducer
//! - [`timer`]: abort-on-drop tokio timers feeding actions back
//! - [`content`]: static page data
//! - [`config`]: settings file, env and CLI resolution

pub mod action;
pub mod config;
pub mod content;
pub mod i18n;
pub mod page;
pub mod router;
pub mod state;
pub mod timer;
pub mod widgets;

pub use action::{Action, Effect, update};
pub use state::App;
