//! Read-only data provider consumed by the report pipelines.

use serde::{Deserialize, Serialize};

use crate::{Customer, Product, Supplier};

/// Source of the three ordered record sequences.
///
/// The order in which records are exposed is their natural order; grouping
/// operators rely on it for first-occurrence ordering of keys.
pub trait DataProvider {
    /// Returns all customers in natural order.
    fn customers(&self) -> &[Customer];

    /// Returns all products in natural order.
    fn products(&self) -> &[Product];

    /// Returns all suppliers in natural order.
    fn suppliers(&self) -> &[Supplier];
}

/// Provider backed by owned vectors.
///
/// Records are created once and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InMemoryDataSource {
    #[serde(default)]
    customers: Vec<Customer>,
    #[serde(default)]
    products: Vec<Product>,
    #[serde(default)]
    suppliers: Vec<Supplier>,
}

impl InMemoryDataSource {
    /// Creates an empty data source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new builder.
    pub fn builder() -> InMemoryDataSourceBuilder {
        InMemoryDataSourceBuilder::default()
    }

    /// Loads a data source from a JSON document of the form
    /// `{ "customers": [...], "products": [...], "suppliers": [...] }`.
    ///
    /// Missing lists are treated as empty.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl DataProvider for InMemoryDataSource {
    fn customers(&self) -> &[Customer] {
        &self.customers
    }

    fn products(&self) -> &[Product] {
        &self.products
    }

    fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }
}

/// Builder for constructing an [`InMemoryDataSource`].
#[derive(Debug, Default)]
pub struct InMemoryDataSourceBuilder {
    customers: Vec<Customer>,
    products: Vec<Product>,
    suppliers: Vec<Supplier>,
}

impl InMemoryDataSourceBuilder {
    /// Appends a customer.
    pub fn customer(mut self, customer: Customer) -> Self {
        self.customers.push(customer);
        self
    }

    /// Appends a product.
    pub fn product(mut self, product: Product) -> Self {
        self.products.push(product);
        self
    }

    /// Appends a supplier.
    pub fn supplier(mut self, supplier: Supplier) -> Self {
        self.suppliers.push(supplier);
        self
    }

    /// Appends several customers at once.
    pub fn customers(mut self, customers: impl IntoIterator<Item = Customer>) -> Self {
        self.customers.extend(customers);
        self
    }

    /// Appends several products at once.
    pub fn products(mut self, products: impl IntoIterator<Item = Product>) -> Self {
        self.products.extend(products);
        self
    }

    /// Appends several suppliers at once.
    pub fn suppliers(mut self, suppliers: impl IntoIterator<Item = Supplier>) -> Self {
        self.suppliers.extend(suppliers);
        self
    }

    /// Builds the data source.
    pub fn build(self) -> InMemoryDataSource {
        InMemoryDataSource {
            customers: self.customers,
            products: self.products,
            suppliers: self.suppliers,
        }
    }
}
