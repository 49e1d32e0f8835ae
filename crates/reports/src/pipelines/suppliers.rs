//! Customers matched with suppliers located in the same country and city.
//!
//! The same report is produced two ways, by filtering the suppliers per
//! customer and by a group-join on the `(country, city)` key; both must agree.

use common::{Customer, CustomerId, DataProvider, Supplier};
use query::{equi_join, filter, group_join, project};
use serde::Serialize;

use crate::Reports;
use crate::reports::record_report;

/// A customer together with every supplier in its country and city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerSuppliers {
    pub customer_id: CustomerId,
    pub customer_name: String,
    pub country: String,
    pub city: String,
    pub suppliers: Vec<String>,
}

/// One customer/supplier pair sharing a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerSupplierPair {
    pub customer_id: CustomerId,
    pub customer_name: String,
    pub supplier_name: String,
    pub country: String,
    pub city: String,
}

fn customer_location(customer: &&Customer) -> (String, String) {
    (customer.country.clone(), customer.city.clone())
}

fn supplier_location(supplier: &&Supplier) -> (String, String) {
    (supplier.country.clone(), supplier.city.clone())
}

fn customer_suppliers<'s>(
    customer: &Customer,
    suppliers: impl IntoIterator<Item = &'s Supplier>,
) -> CustomerSuppliers {
    CustomerSuppliers {
        customer_id: customer.customer_id.clone(),
        customer_name: customer.company_name.clone(),
        country: customer.country.clone(),
        city: customer.city.clone(),
        suppliers: suppliers
            .into_iter()
            .map(|s| s.supplier_name.clone())
            .collect(),
    }
}

impl<P> Reports<'_, P>
where
    P: DataProvider + ?Sized,
{
    /// Customers having at least one supplier in their location, found by
    /// filtering the supplier list once per customer.
    #[tracing::instrument(skip(self))]
    pub fn customer_suppliers_by_filter(&self) -> Vec<CustomerSuppliers> {
        let suppliers = self.provider().suppliers();

        let rows: Vec<_> = filter(
            project(self.provider().customers(), |c| {
                customer_suppliers(
                    c,
                    filter(suppliers, |s| s.country == c.country && s.city == c.city),
                )
            }),
            |row| !row.suppliers.is_empty(),
        )
        .collect();

        record_report("customer_suppliers_by_filter", rows.len());
        rows
    }

    /// Same report as [`customer_suppliers_by_filter`](Self::customer_suppliers_by_filter),
    /// computed with a group-join on `(country, city)`.
    #[tracing::instrument(skip(self))]
    pub fn customer_suppliers_by_group_join(&self) -> Vec<CustomerSuppliers> {
        let joined = group_join(
            self.provider().customers(),
            self.provider().suppliers(),
            customer_location,
            supplier_location,
            |c, matches| customer_suppliers(c, matches),
        );
        let rows: Vec<_> = filter(joined, |row| !row.suppliers.is_empty()).collect();

        record_report("customer_suppliers_by_group_join", rows.len());
        rows
    }

    /// Every customer/supplier pair sharing `(country, city)`, in customer
    /// order, then supplier order.
    #[tracing::instrument(skip(self))]
    pub fn customer_supplier_pairs(&self) -> Vec<CustomerSupplierPair> {
        let pairs = equi_join(
            self.provider().customers(),
            self.provider().suppliers(),
            customer_location,
            supplier_location,
            |c, s| CustomerSupplierPair {
                customer_id: c.customer_id.clone(),
                customer_name: c.company_name.clone(),
                supplier_name: s.supplier_name.clone(),
                country: c.country.clone(),
                city: c.city.clone(),
            },
        );

        record_report("customer_supplier_pairs", pairs.len());
        pairs
    }
}

#[cfg(test)]
mod tests {
    use common::{Customer, InMemoryDataSource, Supplier};

    use super::*;
    use crate::fixtures::dataset;

    #[test]
    fn test_suppliers_by_filter() {
        let source = dataset();
        let reports = Reports::with_defaults(&source);

        let rows = reports.customer_suppliers_by_filter();
        let summary: Vec<_> = rows
            .iter()
            .map(|r| (r.customer_id.as_str(), r.suppliers.clone()))
            .collect();

        assert_eq!(
            summary,
            vec![
                ("ALFKI", vec!["Heli Süßwaren GmbH & Co. KG".to_string()]),
                ("AROUT", vec!["Exotic Liquids".to_string()]),
                ("PARIS", vec!["Aux joyeux ecclésiastiques".to_string()]),
                ("NORTS", vec!["Exotic Liquids".to_string()]),
            ]
        );
    }

    #[test]
    fn test_group_join_matches_filter() {
        let source = dataset();
        let reports = Reports::with_defaults(&source);

        assert_eq!(
            reports.customer_suppliers_by_group_join(),
            reports.customer_suppliers_by_filter()
        );
    }

    #[test]
    fn test_same_country_other_city_does_not_match() {
        let source = InMemoryDataSource::builder()
            .customer(Customer::new("BSBEV", "B's Beverages", "UK", "London"))
            .supplier(Supplier::new("Specialty Biscuits", "UK", "Manchester"))
            .supplier(Supplier::new("Pavlova, Ltd.", "Australia", "London"))
            .build();
        let reports = Reports::with_defaults(&source);

        assert!(reports.customer_suppliers_by_filter().is_empty());
        assert!(reports.customer_suppliers_by_group_join().is_empty());
        assert!(reports.customer_supplier_pairs().is_empty());
    }

    #[test]
    fn test_pairs_list_every_supplier() {
        let source = InMemoryDataSource::builder()
            .customer(Customer::new("AROUT", "Around the Horn", "UK", "London"))
            .customer(Customer::new("BSBEV", "B's Beverages", "UK", "London"))
            .supplier(Supplier::new("Exotic Liquids", "UK", "London"))
            .supplier(Supplier::new("Tokyo Traders", "Japan", "Tokyo"))
            .supplier(Supplier::new("Thames Tea", "UK", "London"))
            .build();
        let reports = Reports::with_defaults(&source);

        let pairs: Vec<_> = reports
            .customer_supplier_pairs()
            .into_iter()
            .map(|p| (p.customer_id.to_string(), p.supplier_name))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("AROUT".to_string(), "Exotic Liquids".to_string()),
                ("AROUT".to_string(), "Thames Tea".to_string()),
                ("BSBEV".to_string(), "Exotic Liquids".to_string()),
                ("BSBEV".to_string(), "Thames Tea".to_string()),
            ]
        );
    }
}
