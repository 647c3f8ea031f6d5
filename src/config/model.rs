use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::projection::{Granularity, RowLabel, DEFAULT_HORIZON_MONTHS, MAX_HORIZON_MONTHS};

pub const ENV_DEFAULT_MONTHS: &str = "INVEST_CORE_DEFAULT_MONTHS";
pub const ENV_DEFAULT_GRANULARITY: &str = "INVEST_CORE_DEFAULT_GRANULARITY";

/// Projection defaults shared by every entry point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "Settings::default_horizon_months")]
    pub default_horizon_months: u32,
    #[serde(default)]
    pub default_granularity: Granularity,
    /// Rows plotted when the caller does not pick any.
    #[serde(default = "Settings::default_chart_rows")]
    pub chart_rows: Vec<RowLabel>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_horizon_months: Self::default_horizon_months(),
            default_granularity: Granularity::default(),
            chart_rows: Self::default_chart_rows(),
        }
    }
}

impl Settings {
    pub fn default_horizon_months() -> u32 {
        DEFAULT_HORIZON_MONTHS
    }

    pub fn default_chart_rows() -> Vec<RowLabel> {
        vec![RowLabel::Total]
    }

    /// Overlays any `INVEST_CORE_*` environment variables.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from an arbitrary key lookup. Blank values are ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = non_blank(lookup(ENV_DEFAULT_MONTHS)) {
            let months = raw.trim().parse::<u32>().map_err(|err| ConfigError::Invalid {
                key: ENV_DEFAULT_MONTHS,
                reason: format!("`{raw}` is not a month count ({err})"),
            })?;
            self.default_horizon_months = check_horizon(ENV_DEFAULT_MONTHS, months)?;
        }
        if let Some(raw) = non_blank(lookup(ENV_DEFAULT_GRANULARITY)) {
            self.default_granularity =
                raw.parse::<Granularity>().map_err(|err| ConfigError::Invalid {
                    key: ENV_DEFAULT_GRANULARITY,
                    reason: err.to_string(),
                })?;
        }
        Ok(self)
    }

    /// Rejects stored values the projection engine cannot honour.
    pub fn validate(self) -> Result<Self, ConfigError> {
        check_horizon("default_horizon_months", self.default_horizon_months)?;
        Ok(self)
    }
}

fn check_horizon(key: &'static str, months: u32) -> Result<u32, ConfigError> {
    if months > MAX_HORIZON_MONTHS {
        return Err(ConfigError::Invalid {
            key,
            reason: format!("{months} months exceeds the {MAX_HORIZON_MONTHS}-month limit"),
        });
    }
    Ok(months)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|raw| !raw.trim().is_empty())
}
