use clap::Parser;
use jiu_portal::core::config::{self, EnvOverrides, JiuConfig};
use jiu_portal::core::i18n::Language;
use jiu_portal::tui;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "jiu", about = "Jojet International University portal")]
struct Args {
    /// Interface language (overrides JIU_LANGUAGE and the config file)
    #[arg(short, long, value_enum)]
    language: Option<Language>,

    /// Log level: off, error, warn, info, debug or trace
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // The logger is not up yet, so a bad config file goes to stderr
    let file_config = config::load_config().unwrap_or_else(|e| {
        eprintln!("Ignoring ~/.jiu/config.toml: {e}");
        JiuConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        &EnvOverrides::from_env(),
        args.language,
        args.log_level.as_deref(),
    );

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    log::info!(
        "JIU portal starting (language: {}, log level: {})",
        resolved.language.code(),
        resolved.log_level
    );

    tui::run(resolved)
}
