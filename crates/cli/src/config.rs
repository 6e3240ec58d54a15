//! Environment-driven configuration for the console session.

use stockroom_observability::LogFormat;
use stockroom_products::DEFAULT_CURRENCY_SYMBOL;

/// Currency symbol shown in product lines.
pub const CURRENCY_SYMBOL_VAR: &str = "STOCKROOM_CURRENCY_SYMBOL";
/// `text` or `json`.
pub const LOG_FORMAT_VAR: &str = "STOCKROOM_LOG_FORMAT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub currency_symbol: String,
    pub log_format: LogFormat,
    /// Problems found while reading the environment. Logging is not set up yet
    /// at that point, so the binary reports these after `init`.
    pub warnings: Vec<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            log_format: LogFormat::default(),
            warnings: Vec::new(),
        }
    }
}

impl CliConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`; unset or invalid values fall back to
    /// defaults and leave a warning behind.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(symbol) = lookup(CURRENCY_SYMBOL_VAR) {
            let symbol = symbol.trim();
            if symbol.is_empty() {
                config.warnings.push(format!(
                    "{CURRENCY_SYMBOL_VAR} is empty; using `{DEFAULT_CURRENCY_SYMBOL}`"
                ));
            } else {
                config.currency_symbol = symbol.to_string();
            }
        }

        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            match raw.parse::<LogFormat>() {
                Ok(format) => config.log_format = format,
                Err(e) => config
                    .warnings
                    .push(format!("{LOG_FORMAT_VAR}: {e}; using text")),
            }
        }

        config
    }
}
