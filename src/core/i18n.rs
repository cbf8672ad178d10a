//! # Localization
//!
//! One translation tree per language, embedded at build time and parsed once
//! at startup. Lookups walk a dot-separated key path through the active tree:
//!
//! ```text
//! "footer.campuses.main.address"
//!    │       │       │     └── leaf: "12 University Avenue, ..."
//!    │       │       └── object
//!    │       └── object
//!    └── object
//! ```
//!
//! ## Fallback by echo
//!
//! A path that cannot be walked to the end resolves to the key itself,
//! unchanged. There is no error kind, no logging and no cross-language
//! fallback: the literal dotted key showing up on screen is the signal that a
//! translation is missing. A lookup never fails the render that asked for it.
//!
//! ## Typed leaves
//!
//! Leaves are strings, lists of strings (admission steps, faculty list) or
//! small string maps (a campus entry). `Translation` keeps the shape explicit
//! and call sites narrow it with `as_text` / `as_list` / `as_map`.

use std::collections::BTreeMap;
use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Uz,
    Ru,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Uz, Language::Ru];

    /// ISO 639-1 code, also used as the document language attribute.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Uz => "uz",
            Language::Ru => "ru",
        }
    }

    /// Label of the switcher control.
    pub fn label(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Uz => "UZ",
            Language::Ru => "RU",
        }
    }

    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Uz => "O'zbekcha",
            Language::Ru => "Русский",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        let lowered = code.trim().to_ascii_lowercase();
        Language::ALL.into_iter().find(|l| l.code() == lowered)
    }

    fn index(self) -> usize {
        self as usize
    }

    fn raw(self) -> &'static str {
        match self {
            Language::En => include_str!("../../locales/en.json"),
            Language::Uz => include_str!("../../locales/uz.json"),
            Language::Ru => include_str!("../../locales/ru.json"),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// Translation value
// ============================================================================

/// A resolved translation leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    Text(String),
    List(Vec<String>),
    Map(BTreeMap<String, String>),
}

impl Translation {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Translation::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Translation::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            Translation::Map(map) => Some(map),
            _ => None,
        }
    }

    /// List items, or the single text as a one-item list.
    pub fn into_list(self) -> Vec<String> {
        match self {
            Translation::List(items) => items,
            other => vec![other.to_string()],
        }
    }

    fn from_leaf(value: &Value) -> Translation {
        match value {
            Value::Array(items) => Translation::List(items.iter().map(scalar_text).collect()),
            Value::Object(map) => Translation::Map(
                map.iter()
                    .map(|(k, v)| (k.clone(), scalar_text(v)))
                    .collect(),
            ),
            other => Translation::Text(scalar_text(other)),
        }
    }
}

impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Translation::Text(s) => f.write_str(s),
            Translation::List(items) => f.write_str(&items.join(", ")),
            Translation::Map(map) => {
                let pairs: Vec<String> = map.iter().map(|(k, v)| format!("{k}: {v}")).collect();
                f.write_str(&pairs.join(", "))
            }
        }
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub struct TranslationError {
    pub language: Language,
    pub source: serde_json::Error,
}

impl fmt::Display for TranslationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {} translation table: {}", self.language, self.source)
    }
}

impl std::error::Error for TranslationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

// ============================================================================
// Translation trees
// ============================================================================

/// The three immutable translation trees.
#[derive(Debug, Clone)]
pub struct Translations {
    trees: [Value; 3],
}

impl Translations {
    /// Parse the embedded tables. Trees are not checked against each other.
    pub fn load() -> Result<Self, TranslationError> {
        let parse = |language: Language| {
            serde_json::from_str::<Value>(language.raw())
                .map_err(|source| TranslationError { language, source })
        };
        Ok(Self {
            trees: [parse(Language::En)?, parse(Language::Uz)?, parse(Language::Ru)?],
        })
    }

    /// Build from already-parsed trees, in `Language::ALL` order.
    pub fn from_trees(en: Value, uz: Value, ru: Value) -> Self {
        Self { trees: [en, uz, ru] }
    }

    pub fn tree(&self, language: Language) -> &Value {
        &self.trees[language.index()]
    }

    /// Walk `key` through the tree for `language`.
    ///
    /// Descends only through objects. Any miss, including a `null` leaf,
    /// returns `Translation::Text(key)` verbatim.
    pub fn resolve(&self, language: Language, key: &str) -> Translation {
        let mut node = self.tree(language);
        for segment in key.split('.') {
            match node {
                Value::Object(map) => match map.get(segment) {
                    Some(child) => node = child,
                    None => return Translation::Text(key.to_string()),
                },
                _ => return Translation::Text(key.to_string()),
            }
        }
        if node.is_null() {
            return Translation::Text(key.to_string());
        }
        Translation::from_leaf(node)
    }
}

// ============================================================================
// Localizer
// ============================================================================

/// Active language plus the trees. Owned by the application controller.
#[derive(Debug, Clone)]
pub struct Localizer {
    language: Language,
    translations: Translations,
}

impl Localizer {
    pub fn new(translations: Translations, language: Language) -> Self {
        Self {
            language,
            translations,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Value of the document-level language attribute.
    pub fn document_lang(&self) -> &'static str {
        self.language.code()
    }

    pub fn t(&self, key: &str) -> Translation {
        self.translations.resolve(self.language, key)
    }

    /// Lookup coerced to prose.
    pub fn text(&self, key: &str) -> String {
        self.t(key).to_string()
    }

    pub fn translations(&self) -> &Translations {
        &self.translations
    }
}
