//! Per-city averages and per-customer order activity over time.

use std::cmp::Ordering;

use chrono::Datelike;
use common::{Customer, DataProvider, Order};
use query::{Direction, Grouping, OrderBy, average, count, group_by, order_by, sum};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::reports::record_report;
use crate::{Reports, Result};

/// Averages over the customers of one city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityProfitability {
    pub city: String,
    /// Mean number of orders per customer.
    pub average_order_count: Decimal,
    /// Mean order sum per customer.
    pub average_order_sum: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthCount {
    pub month: u32,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearCount {
    pub year: i32,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearMonthCount {
    pub year: i32,
    pub month: u32,
    pub count: usize,
}

/// Order counts of one customer by month, by year, and by year and month.
///
/// The three breakdowns are computed independently over the same orders;
/// each lists its keys in order of first appearance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerActivity {
    pub customer_name: String,
    pub by_month: Vec<MonthCount>,
    pub by_year: Vec<YearCount>,
    pub by_year_month: Vec<YearMonthCount>,
}

fn profitability(customers: Grouping<String, &Customer>) -> Result<CityProfitability> {
    let order_sums = customers
        .iter()
        .map(|c| sum(&c.orders, |o| o.total))
        .collect::<query::Result<Vec<_>>>()?;

    Ok(CityProfitability {
        average_order_count: average(&customers, |c| c.orders.len())?,
        average_order_sum: average(order_sums, |s| s)?,
        city: customers.key,
    })
}

fn by_city(a: &CityProfitability, b: &CityProfitability) -> Ordering {
    a.city.cmp(&b.city)
}

fn by_name(a: &CustomerActivity, b: &CustomerActivity) -> Ordering {
    a.customer_name.cmp(&b.customer_name)
}

fn activity(customer: &Customer) -> CustomerActivity {
    let orders: &[Order] = &customer.orders;

    CustomerActivity {
        customer_name: customer.company_name.clone(),
        by_month: group_by(orders, |o| o.order_date.month())
            .into_iter()
            .map(|g| MonthCount {
                month: g.key,
                count: count(&g),
            })
            .collect(),
        by_year: group_by(orders, |o| o.order_date.year())
            .into_iter()
            .map(|g| YearCount {
                year: g.key,
                count: count(&g),
            })
            .collect(),
        by_year_month: group_by(orders, |o| (o.order_date.year(), o.order_date.month()))
            .into_iter()
            .map(|g| YearMonthCount {
                year: g.key.0,
                month: g.key.1,
                count: count(&g),
            })
            .collect(),
    }
}

impl<P> Reports<'_, P>
where
    P: DataProvider + ?Sized,
{
    /// Average order count and average order sum per customer, for every
    /// city, ordered by city name.
    #[tracing::instrument(skip(self))]
    pub fn city_profitability(&self) -> Result<Vec<CityProfitability>> {
        let city_order = OrderBy::new().then_by_cmp(by_city, Direction::Ascending);

        let cities = group_by(self.provider().customers(), |c| c.city.clone())
            .into_iter()
            .map(profitability)
            .collect::<Result<Vec<_>>>()?;
        let cities = order_by(cities, &city_order);

        record_report("city_profitability", cities.len());
        Ok(cities)
    }

    /// Order activity of every customer, ordered by company name.
    #[tracing::instrument(skip(self))]
    pub fn customer_activity(&self) -> Vec<CustomerActivity> {
        let name_order = OrderBy::new().then_by_cmp(by_name, Direction::Ascending);
        let activities = self.provider().customers().iter().map(activity);
        let customers = order_by(activities, &name_order);

        record_report("customer_activity", customers.len());
        customers
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use common::{Customer, InMemoryDataSource, Order};

    use super::*;
    use crate::fixtures::dataset;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_city_profitability_on_fixture() {
        let source = dataset();
        let reports = Reports::with_defaults(&source);

        let cities = reports.city_profitability().unwrap();
        let names: Vec<_> = cities.iter().map(|c| c.city.as_str()).collect();
        assert_eq!(names, vec!["Berlin", "Eugene", "London", "Paris"]);

        let london = &cities[2];
        assert_eq!(london.average_order_count, Decimal::new(15, 1));
        assert_eq!(london.average_order_sum, Decimal::from(6290));

        let paris = &cities[3];
        assert_eq!(paris.average_order_count, Decimal::ZERO);
        assert_eq!(paris.average_order_sum, Decimal::ZERO);
    }

    #[test]
    fn test_city_profitability_without_customers() {
        let source = InMemoryDataSource::new();
        let reports = Reports::with_defaults(&source);

        assert!(reports.city_profitability().unwrap().is_empty());
    }

    #[test]
    fn test_activity_sorted_by_name() {
        let source = dataset();
        let reports = Reports::with_defaults(&source);

        let names: Vec<_> = reports
            .customer_activity()
            .into_iter()
            .map(|a| a.customer_name)
            .collect();
        assert_eq!(
            names,
            vec![
                "Alfreds Futterkiste",
                "Around the Horn",
                "Great Lakes Food Market",
                "North/South",
                "Paris spécialités"
            ]
        );
    }

    #[test]
    fn test_month_year_breakdowns_are_independent() {
        let source = InMemoryDataSource::builder()
            .customer(
                Customer::new("GREAL", "Great Lakes Food Market", "USA", "Eugene")
                    .with_order(Order::new(1, date(1996, 11, 15), Decimal::from(1000)))
                    .with_order(Order::new(2, date(1997, 11, 20), Decimal::from(300)))
                    .with_order(Order::new(3, date(1997, 2, 3), Decimal::from(40)))
                    .with_order(Order::new(4, date(1997, 11, 28), Decimal::from(70))),
            )
            .build();
        let reports = Reports::with_defaults(&source);

        let activity = reports.customer_activity().remove(0);
        assert_eq!(
            activity.by_month,
            vec![
                MonthCount {
                    month: 11,
                    count: 3
                },
                MonthCount { month: 2, count: 1 }
            ]
        );
        assert_eq!(
            activity.by_year,
            vec![
                YearCount {
                    year: 1996,
                    count: 1
                },
                YearCount {
                    year: 1997,
                    count: 3
                }
            ]
        );
        assert_eq!(
            activity.by_year_month,
            vec![
                YearMonthCount {
                    year: 1996,
                    month: 11,
                    count: 1
                },
                YearMonthCount {
                    year: 1997,
                    month: 11,
                    count: 2
                },
                YearMonthCount {
                    year: 1997,
                    month: 2,
                    count: 1
                }
            ]
        );
    }

    #[test]
    fn test_customer_without_orders_has_empty_activity() {
        let source = dataset();
        let reports = Reports::with_defaults(&source);

        let paris = reports
            .customer_activity()
            .into_iter()
            .find(|a| a.customer_name == "Paris spécialités")
            .unwrap();
        assert!(paris.by_month.is_empty());
        assert!(paris.by_year.is_empty());
        assert!(paris.by_year_month.is_empty());
    }
}
