use crate::{consts, errors::ClassifierError};
use anyhow::Result;

const PRICE_PER_KWH_VAR: &str = "PRICE_PER_KWH";
const HISTORY_DAYS_VAR: &str = "USAGE_HISTORY_DAYS";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Tariff applied to every kWh
    pub price_per_kwh: f64,
    /// Days of history covered by a usage summary
    pub history_days: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            price_per_kwh: consts::DEFAULT_PRICE_PER_KWH,
            history_days: consts::DEFAULT_HISTORY_DAYS,
        }
    }
}

impl Config {
    /// Reads the tariff settings from the environment, unset variables keep their defaults
    pub fn new() -> Result<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(PRICE_PER_KWH_VAR) {
            config.price_per_kwh = match value.trim().parse::<f64>() {
                Ok(price) if price.is_finite() && price >= 0.0 => price,
                _ => return Err(invalid(PRICE_PER_KWH_VAR, value).into()),
            };
        }

        if let Some(value) = lookup(HISTORY_DAYS_VAR) {
            config.history_days = match value.trim().parse::<u32>() {
                Ok(days) if days > 0 => days,
                _ => return Err(invalid(HISTORY_DAYS_VAR, value).into()),
            };
        }

        Ok(config)
    }
}

fn invalid(name: &'static str, value: String) -> ClassifierError {
    ClassifierError::InvalidSetting { name, value }
}
