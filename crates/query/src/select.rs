//! Selection and projection over a sequence.
//!
//! Both operators are lazy: nothing is evaluated until the returned iterator
//! is consumed, so several filters can be chained before materializing. The
//! returned adapters are `Clone` whenever the source and closure are, and a
//! cloned pipeline enumerates to exactly the same elements.

use std::iter::{Filter, Map};

/// Retains the elements for which `predicate` returns true, in input order.
pub fn filter<I, P>(sequence: I, predicate: P) -> Filter<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    sequence.into_iter().filter(predicate)
}

/// Maps every element to a new shape. One output per input, in input order.
pub fn project<I, F, R>(sequence: I, transform: F) -> Map<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> R,
{
    sequence.into_iter().map(transform)
}
