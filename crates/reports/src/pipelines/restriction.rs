//! Plain restriction reports.

use common::{DataProvider, Product};
use query::filter;

use crate::Reports;
use crate::reports::record_report;

impl<'a, P> Reports<'a, P>
where
    P: DataProvider + ?Sized,
{
    /// Numbers strictly below the configured bound, in input order.
    #[tracing::instrument(skip(self, numbers))]
    pub fn low_numbers(&self, numbers: &[i32]) -> Vec<i32> {
        let bound = self.config().low_number_bound;
        let low: Vec<i32> = filter(numbers.iter().copied(), |n| *n < bound).collect();

        record_report("low_numbers", low.len());
        low
    }

    /// Products with at least one unit on stock.
    #[tracing::instrument(skip(self))]
    pub fn products_in_stock(&self) -> Vec<&'a Product> {
        let products: Vec<&'a Product> =
            filter(self.provider().products(), |p| p.in_stock()).collect();

        record_report("products_in_stock", products.len());
        products
    }
}
