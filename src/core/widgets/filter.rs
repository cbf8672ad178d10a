//! Tab filtering over categorized items.
//!
//! Both the news grid and the home audience tabs use `CategoryFilter`; the
//! `"all"` tab keeps every item in its original order.

/// Sentinel category id that matches every item.
pub const ALL_CATEGORIES: &str = "all";

/// Anything that can be sorted into a tab.
pub trait Categorized {
    fn category(&self) -> &str;
}

/// The active tab of a category filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    active: String,
}

impl CategoryFilter {
    pub fn new(initial: &str) -> Self {
        Self {
            active: initial.to_string(),
        }
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn select(&mut self, id: &str) {
        self.active = id.to_string();
    }

    pub fn matches<T: Categorized + ?Sized>(&self, item: &T) -> bool {
        self.active == ALL_CATEGORIES || item.category() == self.active
    }

    /// Items in the active category, in their original order.
    pub fn apply<'a, T: Categorized>(&self, items: &'a [T]) -> Vec<&'a T> {
        items.iter().filter(|item| self.matches(*item)).collect()
    }
}
