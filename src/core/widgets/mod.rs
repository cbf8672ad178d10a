//! # Page Widgets
//!
//! Small self-contained state machines used by individual pages. None of
//! them know about timers or the terminal: the adapter feeds them ticks and
//! instants, the reducer feeds them user input.

pub mod contact;
pub mod counter;
pub mod filter;
pub mod slider;

pub use contact::{ContactField, ContactForm, FormEdit, FormStatus};
pub use counter::CountUp;
pub use filter::{CategoryFilter, Categorized, ALL_CATEGORIES};
pub use slider::SlideShow;
