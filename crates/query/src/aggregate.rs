//! Scalar reductions over a sequence or a group's members.
//!
//! `sum` of nothing is zero. `min`, `max` and `average` need at least one
//! element and return [`QueryError::EmptySequence`] otherwise; `average` does
//! not fall back to zero. `sum` and `average` return [`QueryError::Overflow`]
//! instead of panicking when the running total leaves the [`Decimal`] range.

use rust_decimal::Decimal;

use crate::{QueryError, Result};

fn accumulate(total: Decimal, value: Decimal, operator: &'static str) -> Result<Decimal> {
    total
        .checked_add(value)
        .ok_or(QueryError::Overflow { operator })
}

/// Number of elements in the sequence.
pub fn count<I>(sequence: I) -> usize
where
    I: IntoIterator,
{
    sequence.into_iter().count()
}

/// Sum of the selected values; zero for an empty sequence.
pub fn sum<I, F, V>(sequence: I, mut selector: F) -> Result<Decimal>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> V,
    V: Into<Decimal>,
{
    let mut total = Decimal::ZERO;
    for item in sequence {
        total = accumulate(total, selector(item).into(), "sum")?;
    }
    Ok(total)
}

/// Smallest selected value.
pub fn min<I, F, V>(sequence: I, selector: F) -> Result<V>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> V,
    V: Ord,
{
    sequence
        .into_iter()
        .map(selector)
        .min()
        .ok_or(QueryError::EmptySequence { operator: "min" })
}

/// Largest selected value.
pub fn max<I, F, V>(sequence: I, selector: F) -> Result<V>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> V,
    V: Ord,
{
    sequence
        .into_iter()
        .map(selector)
        .max()
        .ok_or(QueryError::EmptySequence { operator: "max" })
}

/// Arithmetic mean of the selected values: `sum / count`.
pub fn average<I, F, V>(sequence: I, mut selector: F) -> Result<Decimal>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> V,
    V: Into<Decimal>,
{
    let mut total = Decimal::ZERO;
    let mut n = 0usize;
    for item in sequence {
        total = accumulate(total, selector(item).into(), "average")?;
        n += 1;
    }

    if n == 0 {
        return Err(QueryError::EmptySequence {
            operator: "average",
        });
    }
    Ok(total / Decimal::from(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sale {
        month: u32,
        total: Decimal,
    }

    fn sales() -> Vec<Sale> {
        vec![
            Sale {
                month: 3,
                total: Decimal::from(100),
            },
            Sale {
                month: 1,
                total: Decimal::from(200),
            },
            Sale {
                month: 3,
                total: Decimal::from(50),
            },
        ]
    }

    #[test]
    fn sum_and_earliest_month() {
        let sales = sales();
        assert_eq!(sum(&sales, |s| s.total), Ok(Decimal::from(350)));
        assert_eq!(min(&sales, |s| s.month), Ok(1));
        assert_eq!(max(&sales, |s| s.month), Ok(3));
        assert_eq!(count(&sales), 3);
    }

    #[test]
    fn sum_of_nothing_is_zero() {
        let empty: Vec<Sale> = Vec::new();
        assert_eq!(sum(&empty, |s| s.total), Ok(Decimal::ZERO));
        assert_eq!(count(&empty), 0);
    }

    #[test]
    fn empty_reductions_fail() {
        let empty: Vec<Sale> = Vec::new();

        assert_eq!(
            min(&empty, |s| s.month),
            Err(QueryError::EmptySequence { operator: "min" })
        );
        assert_eq!(
            max(&empty, |s| s.month),
            Err(QueryError::EmptySequence { operator: "max" })
        );
        assert_eq!(
            average(&empty, |s| s.total),
            Err(QueryError::EmptySequence {
                operator: "average",
            })
        );
    }

    #[test]
    fn overflowing_totals_fail_instead_of_panicking() {
        let values = [Decimal::MAX, Decimal::ONE];

        assert_eq!(
            sum(values, |d| d),
            Err(QueryError::Overflow { operator: "sum" })
        );
        assert_eq!(
            average(values, |d| d),
            Err(QueryError::Overflow {
                operator: "average",
            })
        );
    }

    #[test]
    fn average_matches_sum_over_count() {
        let inputs: [&[i64]; 4] = [&[1], &[1, 2], &[100, 200, 50], &[7, 7, 7, 8]];

        for values in inputs {
            let expected = sum(values, |v| *v).unwrap() / Decimal::from(count(values));
            assert_eq!(average(values, |v| *v), Ok(expected));
        }
    }

    #[test]
    fn average_accepts_integer_selectors() {
        let order_counts = [2usize, 3, 0, 1];
        assert_eq!(average(order_counts, |n| n), Ok(Decimal::new(15, 1)));
    }
}
