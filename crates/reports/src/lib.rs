//! Report pipelines over a [`DataProvider`](common::DataProvider).
//!
//! Every report is an independent, side-effect free pipeline built from the
//! operators in the `query` crate:
//! - [`Reports`] binds a provider and a [`ReportConfig`]
//! - [`pipelines`] holds one module per report family and its result records
//! - [`ReportError`] wraps operator failures and bad configuration

pub mod config;
pub mod error;
pub mod pipelines;
pub mod reports;

#[cfg(test)]
mod fixtures;

pub use config::ReportConfig;
pub use error::{ReportError, Result};
pub use pipelines::{
    CategoryStock, CityProfitability, ContactGap, CustomerActivity, CustomerFirstOrder,
    CustomerSupplierPair, CustomerSuppliers, CustomerTurnover, MonthCount, PriceBandGroup,
    ProductPrice, StockGroup, YearCount, YearMonthCount,
};
pub use reports::Reports;
