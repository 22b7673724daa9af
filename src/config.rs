//! Application settings.
//!
//! Constants plus the few values that can be overridden from the environment
//! (or a `.env` file loaded by `main`).

use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// Shown in place of an address that does not apply.
pub const NOT_APPLICABLE: &str = "N/A";

/// Default log4rs configuration file.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// Environment variable selecting the output format.
pub const ENV_FORMAT: &str = "SUBNET_CALC_FORMAT";

/// Environment variable pointing at the log4rs configuration file.
pub const ENV_LOG_CONFIG: &str = "SUBNET_CALC_LOG_CONFIG";

/// How a result is printed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Svg,
}

impl FromStr for OutputFormat {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<OutputFormat, Box<dyn Error>> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "svg" => Ok(OutputFormat::Svg),
            other => Err(format!("Unknown output format: {other}").into()),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
            OutputFormat::Svg => "svg",
        };
        f.write_str(name)
    }
}

/// Settings resolved from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub format: OutputFormat,
    pub log_config: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            format: OutputFormat::default(),
            log_config: DEFAULT_LOG_CONFIG.to_string(),
        }
    }
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Settings, Box<dyn Error>> {
        Settings::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, missing keys keep their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Settings, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();
        if let Some(format) = lookup(ENV_FORMAT) {
            settings.format = format
                .parse()
                .map_err(|e| format!("{ENV_FORMAT}: {e}"))?;
        }
        if let Some(path) = lookup(ENV_LOG_CONFIG).filter(|p| !p.is_empty()) {
            settings.log_config = path;
        }
        Ok(settings)
    }
}
