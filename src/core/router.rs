//! # View Router
//!
//! Holds the one current `Page`. Changing it is unconditional: every value of
//! the closed `Page` set is accepted, and there is no rejection path.
//!
//! The router reports whether the change crossed a group boundary. The
//! mounted view is only replaced when it does; `vision → history` keeps the
//! About view (and its state) mounted.

use crate::core::page::{Page, PageGroup, resolve_view};

/// Outcome of a page change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    pub from: Page,
    pub to: Page,
    /// True when the page group changed and the view must be remounted.
    pub remounted: bool,
}

#[derive(Debug, Default)]
pub struct Router {
    current: Page,
}

impl Router {
    pub fn new() -> Self {
        Self { current: Page::Home }
    }

    pub fn current(&self) -> Page {
        self.current
    }

    pub fn view(&self) -> PageGroup {
        resolve_view(self.current)
    }

    pub fn change_page(&mut self, target: Page) -> Navigation {
        let from = self.current;
        self.current = target;
        Navigation {
            from,
            to: target,
            remounted: from.group() != target.group(),
        }
    }
}
