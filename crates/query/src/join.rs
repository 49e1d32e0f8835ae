//! Key-based joins between two sequences.
//!
//! Keys are compared structurally (`Eq + Hash`), so a tuple key such as
//! `(country, city)` matches only when every component matches. The inner
//! sequence is indexed once; matches come back in inner order.

use std::hash::Hash;

use indexmap::IndexMap;

/// Indexes `inner` by key, keeping inner order within each key.
fn index_by_key<II, I, K, FI>(inner: II, mut inner_key: FI) -> IndexMap<K, Vec<I>>
where
    II: IntoIterator<Item = I>,
    K: Eq + Hash,
    FI: FnMut(&I) -> K,
{
    let mut index: IndexMap<K, Vec<I>> = IndexMap::new();
    for item in inner {
        index.entry(inner_key(&item)).or_default().push(item);
    }
    index
}

/// Inner equi-join: one result per matching (outer, inner) pair.
///
/// Results follow outer order, then inner order for the same outer element.
/// Outer elements without a match produce nothing.
pub fn equi_join<OI, II, O, I, K, FO, FI, FR, R>(
    outer: OI,
    inner: II,
    mut outer_key: FO,
    inner_key: FI,
    mut result_selector: FR,
) -> Vec<R>
where
    OI: IntoIterator<Item = O>,
    II: IntoIterator<Item = I>,
    O: Clone,
    I: Clone,
    K: Eq + Hash,
    FO: FnMut(&O) -> K,
    FI: FnMut(&I) -> K,
    FR: FnMut(O, I) -> R,
{
    let index = index_by_key(inner, inner_key);
    let mut results = Vec::new();

    for item in outer {
        if let Some(matches) = index.get(&outer_key(&item)) {
            for matched in matches {
                results.push(result_selector(item.clone(), matched.clone()));
            }
        }
    }

    tracing::trace!(pairs = results.len(), "equi-join complete");
    results
}

/// Group-join: exactly one result per outer element, carrying every matching
/// inner element (possibly none).
pub fn group_join<OI, II, O, I, K, FO, FI, FR, R>(
    outer: OI,
    inner: II,
    mut outer_key: FO,
    inner_key: FI,
    mut result_selector: FR,
) -> Vec<R>
where
    OI: IntoIterator<Item = O>,
    II: IntoIterator<Item = I>,
    I: Clone,
    K: Eq + Hash,
    FO: FnMut(&O) -> K,
    FI: FnMut(&I) -> K,
    FR: FnMut(O, Vec<I>) -> R,
{
    let index = index_by_key(inner, inner_key);

    let results: Vec<R> = outer
        .into_iter()
        .map(|item| {
            let matches = index.get(&outer_key(&item)).cloned().unwrap_or_default();
            result_selector(item, matches)
        })
        .collect();

    tracing::trace!(outer = results.len(), "group-join complete");
    results
}
