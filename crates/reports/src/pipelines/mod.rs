//! Report pipelines, grouped by the records they start from.

pub mod activity;
pub mod customers;
pub mod products;
pub mod restriction;
pub mod suppliers;

pub use activity::{CityProfitability, CustomerActivity, MonthCount, YearCount, YearMonthCount};
pub use customers::{ContactGap, CustomerFirstOrder, CustomerTurnover};
pub use products::{CategoryStock, PriceBandGroup, ProductPrice, StockGroup};
pub use suppliers::{CustomerSupplierPair, CustomerSuppliers};
