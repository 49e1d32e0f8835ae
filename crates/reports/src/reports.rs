//! Entry point binding a data provider to the report pipelines.

use common::DataProvider;

use crate::ReportConfig;

/// Runs report pipelines against a read-only data provider.
///
/// Each report method is a pure function of the provider's records and the
/// configuration; nothing is cached between calls and the provider is never
/// mutated, so a failing report leaves every other report unaffected.
#[derive(Debug)]
pub struct Reports<'a, P: ?Sized> {
    provider: &'a P,
    config: ReportConfig,
}

impl<'a, P> Reports<'a, P>
where
    P: DataProvider + ?Sized,
{
    /// Creates a report runner over `provider`.
    pub fn new(provider: &'a P, config: ReportConfig) -> Self {
        Self { provider, config }
    }

    /// Creates a report runner with the default configuration.
    pub fn with_defaults(provider: &'a P) -> Self {
        Self::new(provider, ReportConfig::default())
    }

    /// Returns the provider reports read from.
    pub fn provider(&self) -> &'a P {
        self.provider
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }
}

impl<P: ?Sized> Clone for Reports<'_, P> {
    fn clone(&self) -> Self {
        Self {
            provider: self.provider,
            config: self.config.clone(),
        }
    }
}

/// Records a finished report execution.
pub(crate) fn record_report(report: &'static str, rows: usize) {
    metrics::counter!("reports_executed", "report" => report).increment(1);
    tracing::debug!(report, rows, "report complete");
}
