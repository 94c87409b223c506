use crate::rack::{RackError, RackLayout, DEFAULT_COLUMNS, DEFAULT_UNITS_PER_BOX};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got {value:?}")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("Rack layout is invalid: {0}")]
    Layout(#[from] RackError),
}

/// Runtime configuration loaded from environment variables.
///
/// All fields have defaults suitable for the shop floor setup.
#[derive(Debug, Clone, PartialEq)]
pub struct StockroomConfig {
    /// Inventory service root.
    pub backend_url: String,
    /// Lighting controller root. `None` when set to an empty string: locator
    /// states are then built but not sent anywhere.
    pub locator_url: Option<String>,
    pub layout: RackLayout,
    /// Per-request timeout for the inventory service; the transport default when unset.
    pub request_timeout: Option<Duration>,
}

impl StockroomConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                          | Default                  |
    /// |----------------------------------|--------------------------|
    /// | `STOCKROOM_BACKEND_URL`          | `http://localhost:8000`  |
    /// | `STOCKROOM_LOCATOR_URL`          | `http://10.0.0.114`      |
    /// | `STOCKROOM_RACK_ROWS`            | `ABCDE`                  |
    /// | `STOCKROOM_RACK_COLUMNS`         | `5`                      |
    /// | `STOCKROOM_UNITS_PER_BOX`        | `14`                     |
    /// | `STOCKROOM_REQUEST_TIMEOUT_SECS` | unset                    |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let backend_url = lookup("STOCKROOM_BACKEND_URL").unwrap_or_else(|| "http://localhost:8000".into());

        let locator_url = match lookup("STOCKROOM_LOCATOR_URL") {
            Some(url) if url.trim().is_empty() => None,
            Some(url) => Some(url),
            None => Some("http://10.0.0.114".into()),
        };

        let rows = lookup("STOCKROOM_RACK_ROWS").unwrap_or_else(|| "ABCDE".into());
        let columns = parse(&lookup, "STOCKROOM_RACK_COLUMNS", "a positive integer")?.unwrap_or(DEFAULT_COLUMNS);
        let units_per_box =
            parse(&lookup, "STOCKROOM_UNITS_PER_BOX", "a positive integer")?.unwrap_or(DEFAULT_UNITS_PER_BOX);
        let layout = RackLayout::new(rows.trim().chars(), columns, units_per_box)?;

        let request_timeout = parse::<u64>(&lookup, "STOCKROOM_REQUEST_TIMEOUT_SECS", "a number of seconds")?
            .map(Duration::from_secs);

        Ok(Self {
            backend_url,
            locator_url,
            layout,
            request_timeout,
        })
    }
}

fn parse<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    expected: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(var) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { var, expected, value }),
    }
}
