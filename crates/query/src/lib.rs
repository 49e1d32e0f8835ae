//! In-memory query operators over typed record sequences.
//!
//! This crate provides the operator families the report pipelines compose:
//! - [`filter`] and [`project`] for lazy selection and reshaping
//! - [`equi_join`] and [`group_join`] for key-based joins
//! - [`group_by`] and [`Grouping`] for first-occurrence ordered grouping
//! - [`count`], [`sum`], [`min`], [`max`] and [`average`] for reductions
//! - [`OrderBy`] for stable multi-key sorting
//!
//! Operators are plain functions over iterators, so pipelines are built by
//! ordinary function application and never mutate their inputs.

pub mod aggregate;
pub mod error;
pub mod group;
pub mod join;
pub mod order;
pub mod predicate;
pub mod select;

pub use aggregate::{average, count, max, min, sum};
pub use error::{QueryError, Result};
pub use group::{Grouping, PriceBand, PriceBands, group_by};
pub use join::{equi_join, group_join};
pub use order::{Direction, OrderBy, order_by};
pub use select::{filter, project};
