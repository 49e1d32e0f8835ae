//! Shared record model for the query exercises.
//!
//! This crate provides:
//! - The immutable records: [`Customer`], [`Order`], [`Product`], [`Supplier`]
//! - [`CustomerId`], the string key customers are identified by
//! - [`DataProvider`], the read-only source every report pipeline consumes
//! - [`InMemoryDataSource`], a provider backed by owned vectors or JSON

pub mod model;
pub mod provider;
pub mod types;

pub use model::{Customer, Order, Product, Supplier};
pub use provider::{DataProvider, InMemoryDataSource, InMemoryDataSourceBuilder};
pub use types::CustomerId;
