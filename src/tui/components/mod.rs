//! # TUI Components
//!
//! The building blocks of the portal screen.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Receive all data as struct fields and draw it:
//! - `TopBar`: college name, Programs / International, language switcher, Apply
//! - `NavBar`: logo and the seven top-level entries, collapsing to `☰`
//! - `StatusBar`: current location, status message and key hints
//! - `SectionWidget`: one block of page content
//!
//! ### Stateful Components (Event-Driven)
//!
//! Borrow a persistent state struct owned by `TuiState`:
//! - `PageView` / `PageViewState`: the scrollable page body
//! - `Dropdown`, `MobileMenu` / `MenuState`: the header overlays
//!
//! ## Props-Based Data Flow
//!
//! Components never reach into `App`. The caller resolves translations and
//! flags first and passes them in, so every component can be rendered
//! against a `TestBackend` with hand-built props.
//!
//! ```rust,ignore
//! let mut bar = StatusBar::new(location, app.status_message.clone(), hints);
//! bar.render(frame, area);
//! ```
//!
//! ## Hit Regions
//!
//! Clickable components record the screen rects they drew into during
//! `render`. The input layer hit-tests mouse events against those rects
//! instead of recomputing the layout.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs          (this file)
//! ├── top_bar.rs      (Top strip with the language switcher)
//! ├── nav_bar.rs      (Header navigation)
//! ├── menu.rs         (Dropdown and mobile menu overlays)
//! ├── section.rs      (Page content blocks)
//! ├── page_view.rs    (Scrollable page body)
//! └── status_bar.rs   (Bottom status line)
//! ```

mod menu;
mod nav_bar;
mod page_view;
mod section;
mod status_bar;
mod top_bar;

pub use menu::{Dropdown, MenuEvent, MenuItem, MenuState, MobileMenu};
pub use nav_bar::{NavBar, NavBarEntry};
pub use page_view::{PageView, PageViewState, SMOOTH_SCROLL};
pub use section::{Anchor, Section};
pub use status_bar::StatusBar;
pub use top_bar::TopBar;
