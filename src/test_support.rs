//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::config::Timing;
use crate::core::i18n::{Language, Localizer, Translations};
use crate::core::state::App;

/// Creates a test App in English with default timing.
pub fn test_app() -> App {
    test_app_in(Language::En)
}

pub fn test_app_in(language: Language) -> App {
    let translations = Translations::load().expect("embedded translation tables parse");
    App::new(Localizer::new(translations, language), Timing::default())
}
