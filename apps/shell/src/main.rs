mod demos;

use anyhow::Context;
use foundry::domain::config::{FoundryConfig, LoggingConfig};
use foundry::journal::Journal;
use foundry::kernel::config::load_config;
use foundry_logger::{LevelFilter, Logger};
use tracing::{error, info, warn};

fn main() -> anyhow::Result<()> {
    let loaded = load_config::<FoundryConfig>(None::<&str>);
    let (config, load_error) = match loaded {
        Ok(config) => (config, None),
        Err(err) => (FoundryConfig::default(), Some(err)),
    };

    let _logger = init_logger(&config.logging)?;
    if let Some(err) = load_error {
        warn!(error = %err, "Configuration unavailable, using defaults");
    }

    let journal = match Journal::init_global(config.journal.path.clone()) {
        Ok(journal) => journal,
        Err(err) => {
            error!(error = %err, "Global journal was already set");
            Journal::global()
        },
    };
    info!(path = %journal.path().display(), "Journal ready");

    demos::factory_method();
    demos::simple_factory();
    demos::abstract_factory(&config.widgets);
    demos::builder(&config.assembly);
    demos::singleton();

    match journal.read_all() {
        Ok(contents) => {
            for line in contents.lines() {
                info!(entry = line, "Journal");
            }
        },
        Err(err) => warn!(error = %err, "Journal could not be read back"),
    }

    Ok(())
}

fn init_logger(settings: &LoggingConfig) -> anyhow::Result<Logger> {
    let level = settings
        .level
        .parse::<LevelFilter>()
        .with_context(|| format!("Invalid log level '{}'", settings.level))?;

    let builder = Logger::builder().name(env!("CARGO_PKG_NAME")).console(true).level(level);
    let logger = match &settings.directory {
        Some(directory) if settings.json => builder.path(directory).json().init()?,
        Some(directory) => builder.path(directory).init()?,
        None => builder.init()?,
    };

    Ok(logger)
}
