//! Immutable records exposed by a [`DataProvider`](crate::DataProvider).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::CustomerId;

/// A single order placed by a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: u32,
    pub order_date: NaiveDate,
    /// Order value; never negative.
    pub total: Decimal,
}

impl Order {
    /// Creates a new order.
    pub fn new(order_id: u32, order_date: NaiveDate, total: Decimal) -> Self {
        Self {
            order_id,
            order_date,
            total,
        }
    }
}

/// A customer together with the orders it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: CustomerId,
    pub company_name: String,
    pub city: String,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    pub country: String,
    #[serde(default)]
    pub phone: String,
    /// Never null; a customer without orders has an empty list.
    #[serde(default)]
    pub orders: Vec<Order>,
}

impl Customer {
    /// Creates a customer with no optional contact data and no orders.
    pub fn new(
        customer_id: impl Into<CustomerId>,
        company_name: impl Into<String>,
        country: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            customer_id: customer_id.into(),
            company_name: company_name.into(),
            city: city.into(),
            region: None,
            postal_code: None,
            country: country.into(),
            phone: String::new(),
            orders: Vec::new(),
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = Some(postal_code.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn with_order(mut self, order: Order) -> Self {
        self.orders.push(order);
        self
    }

    /// Returns true if the customer placed at least one order.
    pub fn has_orders(&self) -> bool {
        !self.orders.is_empty()
    }
}

/// A product from the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: u32,
    pub product_name: String,
    pub category: String,
    /// Price per unit; never negative.
    pub unit_price: Decimal,
    pub units_in_stock: u32,
}

impl Product {
    /// Creates a new product.
    pub fn new(
        product_id: u32,
        product_name: impl Into<String>,
        category: impl Into<String>,
        unit_price: Decimal,
        units_in_stock: u32,
    ) -> Self {
        Self {
            product_id,
            product_name: product_name.into(),
            category: category.into(),
            unit_price,
            units_in_stock,
        }
    }

    /// Returns true if at least one unit is on stock.
    pub fn in_stock(&self) -> bool {
        self.units_in_stock > 0
    }
}

/// A supplier located in some city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub supplier_name: String,
    pub city: String,
    pub country: String,
}

impl Supplier {
    /// Creates a new supplier.
    pub fn new(
        supplier_name: impl Into<String>,
        country: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            supplier_name: supplier_name.into(),
            city: city.into(),
            country: country.into(),
        }
    }
}
