//! Customer-centric reports: turnover, first orders, contact data gaps.

use std::cmp::Ordering;

use chrono::{Datelike, NaiveDate};
use common::{Customer, CustomerId, DataProvider};
use query::predicate::{has_non_digit, is_blank, starts_with};
use query::{Direction, OrderBy, filter, min, order_by, project, sum};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::reports::record_report;
use crate::{Reports, Result};

/// A customer's name and the sum of all its orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerTurnover {
    pub customer_name: String,
    pub sum: Decimal,
}

/// When a customer placed its first order, and how much it ordered overall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerFirstOrder {
    pub customer_name: String,
    pub first_order: NaiveDate,
    pub order_sum: Decimal,
}

/// Contact fields of a customer whose postal code, region or phone is lacking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactGap {
    pub customer_id: CustomerId,
    pub customer_name: String,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub phone: String,
}

fn turnover(customer: &Customer) -> Result<CustomerTurnover> {
    Ok(CustomerTurnover {
        customer_name: customer.company_name.clone(),
        sum: sum(&customer.orders, |o| o.total)?,
    })
}

fn first_order(customer: &Customer) -> Result<CustomerFirstOrder> {
    Ok(CustomerFirstOrder {
        customer_name: customer.company_name.clone(),
        first_order: min(&customer.orders, |o| o.order_date)?,
        order_sum: sum(&customer.orders, |o| o.total)?,
    })
}

fn by_customer_name(a: &CustomerFirstOrder, b: &CustomerFirstOrder) -> Ordering {
    a.customer_name.cmp(&b.customer_name)
}

/// Year and month ascending, then order sum descending, then name.
fn by_first_order() -> OrderBy<CustomerFirstOrder> {
    OrderBy::asc(|c: &CustomerFirstOrder| c.first_order.year())
        .then_asc(|c: &CustomerFirstOrder| c.first_order.month())
        .then_desc(|c: &CustomerFirstOrder| c.order_sum)
        .then_by_cmp(by_customer_name, Direction::Ascending)
}

/// A phone without a leading `(` carries no operator code.
fn lacks_contact_data(customer: &Customer) -> bool {
    has_non_digit(customer.postal_code.as_deref())
        || is_blank(customer.region.as_deref())
        || !starts_with(Some(customer.phone.as_str()), '(')
}

impl<P> Reports<'_, P>
where
    P: DataProvider + ?Sized,
{
    /// Customers whose orders sum to more than the turnover threshold.
    #[tracing::instrument(skip(self))]
    pub fn customers_with_turnover_above(&self) -> Result<Vec<CustomerTurnover>> {
        let threshold = self.config().turnover_threshold;

        let customers = project(self.provider().customers(), turnover)
            .collect::<Result<Vec<_>>>()?;
        let customers: Vec<_> = filter(customers, |c| c.sum > threshold).collect();

        record_report("customers_with_turnover_above", customers.len());
        Ok(customers)
    }

    /// Names of customers with at least one order above the large-order threshold.
    #[tracing::instrument(skip(self))]
    pub fn customers_with_order_above(&self) -> Vec<String> {
        let threshold = self.config().large_order_threshold;

        let names: Vec<_> = project(
            filter(self.provider().customers(), |c| {
                c.orders.iter().any(|o| o.total > threshold)
            }),
            |c| c.company_name.clone(),
        )
        .collect();

        record_report("customers_with_order_above", names.len());
        names
    }

    /// Customers that ordered at all, with their first order date, in provider order.
    #[tracing::instrument(skip(self))]
    pub fn customers_first_order(&self) -> Result<Vec<CustomerFirstOrder>> {
        let customers = project(
            filter(self.provider().customers(), |c| c.has_orders()),
            first_order,
        )
        .collect::<Result<Vec<_>>>()?;

        record_report("customers_first_order", customers.len());
        Ok(customers)
    }

    /// Same as [`customers_first_order`](Self::customers_first_order), ordered
    /// by first-order year and month, then descending order sum, then name.
    #[tracing::instrument(skip(self))]
    pub fn customers_by_first_order(&self) -> Result<Vec<CustomerFirstOrder>> {
        let customers = project(
            filter(self.provider().customers(), |c| c.has_orders()),
            first_order,
        )
        .collect::<Result<Vec<_>>>()?;
        let customers = order_by(customers, &by_first_order());

        record_report("customers_by_first_order", customers.len());
        Ok(customers)
    }

    /// Customers with a non-numeric or missing postal code, a blank region, or
    /// a phone number without an operator code.
    #[tracing::instrument(skip(self))]
    pub fn customers_with_incomplete_contacts(&self) -> Vec<ContactGap> {
        let customers: Vec<_> = project(
            filter(self.provider().customers(), |c| lacks_contact_data(c)),
            |c| ContactGap {
                customer_id: c.customer_id.clone(),
                customer_name: c.company_name.clone(),
                region: c.region.clone(),
                postal_code: c.postal_code.clone(),
                phone: c.phone.clone(),
            },
        )
        .collect();

        record_report("customers_with_incomplete_contacts", customers.len());
        customers
    }
}
