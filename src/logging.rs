//! log4rs setup for the binary.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

const CONSOLE_PATTERN: &str = "{d(%H:%M:%S)} {h({l:5})} {t} - {m}{n}";

/// Console config writing to stderr, used when no config file is available.
pub fn console_config(level: LevelFilter) -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(CONSOLE_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))
        .map_err(|e| format!("Error building log config: {e}"))?;
    Ok(config)
}

/// Initialise logging.
///
/// Uses the log4rs file at `config_file` when it exists, otherwise a stderr
/// console logger at `warn`. `debug` forces the console logger at `debug`.
pub fn init(config_file: &str, debug: bool) -> Result<(), Box<dyn Error>> {
    if !debug && Path::new(config_file).exists() {
        log4rs::init_file(config_file, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {config_file}: {e}"))?;
        log::debug!("logging configured from {config_file}");
        return Ok(());
    }
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    log4rs::init_config(console_config(level)?)
        .map_err(|e| format!("Error initializing log4rs: {e}"))?;
    log::debug!("logging to stderr at {level}");
    Ok(())
}
