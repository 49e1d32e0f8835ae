//! Report parameters loaded from environment variables.

use std::str::FromStr;

use query::PriceBands;
use rust_decimal::Decimal;

use crate::{ReportError, Result};

const LOW_NUMBER_BOUND: &str = "REPORT_LOW_NUMBER_BOUND";
const TURNOVER_THRESHOLD: &str = "REPORT_TURNOVER_THRESHOLD";
const LARGE_ORDER_THRESHOLD: &str = "REPORT_LARGE_ORDER_THRESHOLD";
const CHEAP_BELOW: &str = "REPORT_CHEAP_BELOW";
const EXPENSIVE_FROM: &str = "REPORT_EXPENSIVE_FROM";

/// Thresholds used by the report pipelines, with sensible defaults.
///
/// Reads from environment variables:
/// - `REPORT_LOW_NUMBER_BOUND` — exclusive upper bound for low numbers (default: `5`)
/// - `REPORT_TURNOVER_THRESHOLD` — minimum customer turnover (default: `5000`)
/// - `REPORT_LARGE_ORDER_THRESHOLD` — minimum single order total (default: `10000`)
/// - `REPORT_CHEAP_BELOW` — prices below are cheap (default: `10`)
/// - `REPORT_EXPENSIVE_FROM` — prices from here on are expensive (default: `20`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub low_number_bound: i32,
    pub turnover_threshold: Decimal,
    pub large_order_threshold: Decimal,
    pub cheap_below: Decimal,
    pub expensive_from: Decimal,
}

impl ReportConfig {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through `lookup`, falling back to defaults for
    /// every variable it does not know.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            low_number_bound: parse_or(&lookup, LOW_NUMBER_BOUND, defaults.low_number_bound)?,
            turnover_threshold: parse_or(&lookup, TURNOVER_THRESHOLD, defaults.turnover_threshold)?,
            large_order_threshold: parse_or(
                &lookup,
                LARGE_ORDER_THRESHOLD,
                defaults.large_order_threshold,
            )?,
            cheap_below: parse_or(&lookup, CHEAP_BELOW, defaults.cheap_below)?,
            expensive_from: parse_or(&lookup, EXPENSIVE_FROM, defaults.expensive_from)?,
        };

        // reject misordered bands at load time rather than on first use
        config.price_bands()?;
        Ok(config)
    }

    /// Returns the price bands described by this configuration.
    pub fn price_bands(&self) -> Result<PriceBands> {
        Ok(PriceBands::new(self.cheap_below, self.expensive_from)?)
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            low_number_bound: 5,
            turnover_threshold: Decimal::from(5000),
            large_order_threshold: Decimal::from(10000),
            cheap_below: Decimal::from(10),
            expensive_from: Decimal::from(20),
        }
    }
}

fn parse_or<F, T>(lookup: &F, variable: &'static str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(variable) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ReportError::Config { variable, value }),
    }
}
