//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.jiu/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::i18n::Language;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct JiuConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub timing: TimingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_language: Option<Language>,
    pub log_file: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TimingConfig {
    pub slide_interval_ms: Option<u64>,
    pub count_up_ms: Option<u64>,
    pub form_reset_ms: Option<u64>,
    pub frame_ms: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "jiu.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;
pub const DEFAULT_SLIDE_INTERVAL_MS: u64 = 5000;
pub const DEFAULT_COUNT_UP_MS: u64 = 2000;
pub const DEFAULT_FORM_RESET_MS: u64 = 3000;
pub const DEFAULT_FRAME_MS: u64 = 33;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

/// Animation and timer periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub slide_interval: Duration,
    pub count_up: Duration,
    pub form_reset: Duration,
    pub frame: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            slide_interval: Duration::from_millis(DEFAULT_SLIDE_INTERVAL_MS),
            count_up: Duration::from_millis(DEFAULT_COUNT_UP_MS),
            form_reset: Duration::from_millis(DEFAULT_FORM_RESET_MS),
            frame: Duration::from_millis(DEFAULT_FRAME_MS),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub language: Language,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
    pub timing: Timing,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.jiu/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".jiu").join("config.toml"))
}

/// Load config from `~/.jiu/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `JiuConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<JiuConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(JiuConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<JiuConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(JiuConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: JiuConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG: &str = r#"# JIU Portal Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_language = "en"          # "en", "uz" or "ru" (env: JIU_LANGUAGE)
# log_file = "jiu.log"             # env: JIU_LOG_FILE
# log_level = "debug"              # "off", "error", "warn", "info", "debug", "trace" (env: JIU_LOG_LEVEL)

# [timing]
# slide_interval_ms = 5000         # Campus slideshow auto-advance
# count_up_ms = 2000               # Statistics count-up duration
# form_reset_ms = 3000             # Contact form confirmation time
# frame_ms = 33                    # Redraw interval while animating
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Environment overrides, read once so resolution stays testable.
#[derive(Debug, Default, Clone)]
pub struct EnvOverrides {
    pub language: Option<String>,
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self {
            language: std::env::var("JIU_LANGUAGE").ok(),
            log_level: std::env::var("JIU_LOG_LEVEL").ok(),
            log_file: std::env::var("JIU_LOG_FILE").ok(),
        }
    }
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(
    config: &JiuConfig,
    env: &EnvOverrides,
    cli_language: Option<Language>,
    cli_log_level: Option<&str>,
) -> ResolvedConfig {
    // Language: CLI → env → config → default
    let language = cli_language
        .or_else(|| env.language.as_deref().and_then(Language::from_code))
        .or(config.general.default_language)
        .unwrap_or_default();

    // Log level: CLI → env → config → default, unparseable values skipped
    let log_level = [
        cli_log_level,
        env.log_level.as_deref(),
        config.general.log_level.as_deref(),
    ]
    .into_iter()
    .flatten()
    .find_map(|s| s.trim().parse::<LevelFilter>().ok())
    .unwrap_or(DEFAULT_LOG_LEVEL);

    // Log file: env → config → default
    let log_file = env
        .log_file
        .clone()
        .or_else(|| config.general.log_file.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    let timing = &config.timing;
    let ms = |value: Option<u64>, default: u64| Duration::from_millis(value.unwrap_or(default));

    ResolvedConfig {
        language,
        log_file: PathBuf::from(log_file),
        log_level,
        timing: Timing {
            // Zero periods are rejected by the tokio interval
            slide_interval: ms(
                timing.slide_interval_ms.filter(|v| *v > 0),
                DEFAULT_SLIDE_INTERVAL_MS,
            ),
            count_up: ms(timing.count_up_ms, DEFAULT_COUNT_UP_MS),
            form_reset: ms(timing.form_reset_ms, DEFAULT_FORM_RESET_MS),
            // A zero frame interval would spin the event loop
            frame: ms(timing.frame_ms.filter(|v| *v > 0), DEFAULT_FRAME_MS),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    #[test]
    fn test_default_config_is_empty() {
        let config = JiuConfig::default();
        assert!(config.general.default_language.is_none());
        assert!(config.timing.slide_interval_ms.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve(&JiuConfig::default(), &EnvOverrides::default(), None, None);
        assert_eq!(resolved.language, Language::En);
        assert_eq!(resolved.log_level, LevelFilter::Debug);
        assert_eq!(resolved.log_file, PathBuf::from("jiu.log"));
        assert_eq!(resolved.timing, Timing::default());
        assert_eq!(resolved.timing.slide_interval, Duration::from_millis(5000));
        assert_eq!(resolved.timing.count_up, Duration::from_millis(2000));
        assert_eq!(resolved.timing.form_reset, Duration::from_millis(3000));
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = JiuConfig {
            general: GeneralConfig {
                default_language: Some(Language::Ru),
                log_file: Some("/tmp/portal.log".to_string()),
                log_level: Some("warn".to_string()),
            },
            timing: TimingConfig {
                slide_interval_ms: Some(1000),
                frame_ms: Some(16),
                ..Default::default()
            },
        };
        let resolved = resolve(&config, &EnvOverrides::default(), None, None);
        assert_eq!(resolved.language, Language::Ru);
        assert_eq!(resolved.log_level, LevelFilter::Warn);
        assert_eq!(resolved.log_file, PathBuf::from("/tmp/portal.log"));
        assert_eq!(resolved.timing.slide_interval, Duration::from_millis(1000));
        assert_eq!(resolved.timing.frame, Duration::from_millis(16));
        assert_eq!(resolved.timing.count_up, Duration::from_millis(2000));
    }

    #[test]
    fn test_env_beats_file_and_cli_beats_env() {
        let config = JiuConfig {
            general: GeneralConfig {
                default_language: Some(Language::Ru),
                log_level: Some("warn".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let env = EnvOverrides {
            language: Some("uz".to_string()),
            log_level: Some("info".to_string()),
            log_file: None,
        };
        let resolved = resolve(&config, &env, None, None);
        assert_eq!(resolved.language, Language::Uz);
        assert_eq!(resolved.log_level, LevelFilter::Info);

        let resolved = resolve(&config, &env, Some(Language::En), Some("error"));
        assert_eq!(resolved.language, Language::En);
        assert_eq!(resolved.log_level, LevelFilter::Error);
    }

    #[test]
    fn test_invalid_overrides_fall_through() {
        let config = JiuConfig {
            general: GeneralConfig {
                default_language: Some(Language::Uz),
                log_level: Some("info".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let env = EnvOverrides {
            language: Some("klingon".to_string()),
            log_level: Some("loud".to_string()),
            log_file: None,
        };
        let resolved = resolve(&config, &env, None, None);
        assert_eq!(resolved.language, Language::Uz);
        assert_eq!(resolved.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_zero_frame_interval_uses_default() {
        let config = JiuConfig {
            timing: TimingConfig {
                frame_ms: Some(0),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve(&config, &EnvOverrides::default(), None, None);
        assert_eq!(resolved.timing.frame, Duration::from_millis(DEFAULT_FRAME_MS));
    }

    #[test]
    fn test_zero_slide_interval_uses_default() {
        let config: JiuConfig =
            assert_ok!(toml::from_str("[timing]\nslide_interval_ms = 0\n"));
        let resolved = resolve(&config, &EnvOverrides::default(), None, None);
        assert_eq!(
            resolved.timing.slide_interval,
            Duration::from_millis(DEFAULT_SLIDE_INTERVAL_MS)
        );
    }

    #[test]
    fn test_toml_parses() {
        let toml_str = r#"
[general]
default_language = "uz"
log_level = "trace"

[timing]
slide_interval_ms = 2500
"#;
        let config: JiuConfig = assert_ok!(toml::from_str(toml_str));
        assert_eq!(config.general.default_language, Some(Language::Uz));
        assert_eq!(config.general.log_level.as_deref(), Some("trace"));
        assert_eq!(config.timing.slide_interval_ms, Some(2500));
        assert!(config.timing.count_up_ms.is_none());
    }

    #[test]
    fn test_unknown_language_is_a_parse_error() {
        let toml_str = r#"
[general]
default_language = "de"
"#;
        assert_err!(toml::from_str::<JiuConfig>(toml_str));
    }

    #[test]
    fn test_generated_default_parses_to_empty_config() {
        let config: JiuConfig = assert_ok!(toml::from_str(DEFAULT_CONFIG));
        assert!(config.general.default_language.is_none());
        assert!(config.general.log_file.is_none());
    }

    #[test]
    fn test_missing_file_is_generated() {
        let dir = std::env::temp_dir().join(format!("jiu-config-test-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_dir_all(&dir);

        let config = assert_ok!(load_config_from(&path));
        assert!(config.general.default_language.is_none());
        assert!(path.exists());

        fs::write(&path, "[general]\ndefault_language = \"ru\"\n").unwrap();
        let config = assert_ok!(load_config_from(&path));
        assert_eq!(config.general.default_language, Some(Language::Ru));

        fs::write(&path, "[general\n").unwrap();
        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));

        let _ = fs::remove_dir_all(&dir);
    }
}
