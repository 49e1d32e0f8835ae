//! Product catalogue reports built on nested grouping.

use common::{DataProvider, Product};
use query::{Grouping, OrderBy, PriceBand, group_by};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::reports::record_report;
use crate::{Reports, Result};

/// Name and unit price of a product inside a grouped report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductPrice {
    pub product_name: String,
    pub unit_price: Decimal,
}

impl From<&Product> for ProductPrice {
    fn from(product: &Product) -> Self {
        Self {
            product_name: product.product_name.clone(),
            unit_price: product.unit_price,
        }
    }
}

/// Products of one category sharing the same stock quantity, cheapest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockGroup {
    pub units_in_stock: u32,
    pub products: Vec<ProductPrice>,
}

/// One category with its products grouped by stock quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryStock {
    pub category: String,
    pub count: usize,
    pub stock_groups: Vec<StockGroup>,
}

/// Products falling into one price band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceBandGroup {
    pub band: PriceBand,
    pub count: usize,
    pub products: Vec<ProductPrice>,
}

fn stock_group(group: Grouping<u32, &Product>) -> StockGroup {
    StockGroup {
        units_in_stock: group.key,
        products: group.iter().map(|p| ProductPrice::from(*p)).collect(),
    }
}

impl<P> Reports<'_, P>
where
    P: DataProvider + ?Sized,
{
    /// Products grouped by category, then by units in stock, each innermost
    /// list ordered by ascending unit price.
    #[tracing::instrument(skip(self))]
    pub fn products_by_category_and_stock(&self) -> Vec<CategoryStock> {
        let by_price = OrderBy::<&Product>::asc(|p| p.unit_price);

        let categories: Vec<_> = group_by(self.provider().products(), |p| p.category.clone())
            .into_iter()
            .map(|category| {
                let count = category.len();
                let nested = category.regroup(|p| p.units_in_stock);
                CategoryStock {
                    category: nested.key,
                    count,
                    stock_groups: nested
                        .members
                        .into_iter()
                        .map(|stock| stock_group(stock.order_members(&by_price)))
                        .collect(),
                }
            })
            .collect();

        record_report("products_by_category_and_stock", categories.len());
        categories
    }

    /// Products split into cheap, middle and expensive bands, in order of the
    /// first product seen in each band.
    #[tracing::instrument(skip(self))]
    pub fn products_by_price_band(&self) -> Result<Vec<PriceBandGroup>> {
        let bands = self.config().price_bands()?;

        let groups: Vec<_> = group_by(self.provider().products(), |p| bands.classify(p.unit_price))
            .into_iter()
            .map(|group| PriceBandGroup {
                band: group.key,
                count: group.len(),
                products: group.iter().map(|p| ProductPrice::from(*p)).collect(),
            })
            .collect();

        record_report("products_by_price_band", groups.len());
        Ok(groups)
    }
}
