//! Grouping by scalar, composite, or derived keys.
//!
//! Groups come back in the order their key was first encountered; members
//! keep input order. Nesting is just another [`group_by`] over a group's
//! members, see [`Grouping::regroup`].

use std::hash::Hash;

use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::order::OrderBy;
use crate::{QueryError, Result};

/// A key together with every element that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grouping<K, T> {
    pub key: K,
    pub members: Vec<T>,
}

impl<K, T> Grouping<K, T> {
    /// Returns the number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if the group has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterates over the members in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.members.iter()
    }

    /// Transforms every member, keeping the key.
    pub fn map_members<U, F>(self, transform: F) -> Grouping<K, U>
    where
        F: FnMut(T) -> U,
    {
        Grouping {
            key: self.key,
            members: self.members.into_iter().map(transform).collect(),
        }
    }

    /// Groups the members again by a second key, producing one nesting level.
    pub fn regroup<K2, F>(self, key_selector: F) -> Grouping<K, Grouping<K2, T>>
    where
        K2: Eq + Hash,
        F: FnMut(&T) -> K2,
    {
        Grouping {
            key: self.key,
            members: group_by(self.members, key_selector),
        }
    }

    /// Sorts the members with a stable multi-key ordering.
    pub fn order_members(mut self, ordering: &OrderBy<T>) -> Self {
        ordering.sort(&mut self.members);
        self
    }
}

impl<'a, K, T> IntoIterator for &'a Grouping<K, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

/// Partitions `sequence` by `key_selector`.
///
/// Every element lands in exactly one group. Group order is first-occurrence
/// order of the keys.
pub fn group_by<I, K, F>(sequence: I, mut key_selector: F) -> Vec<Grouping<K, I::Item>>
where
    I: IntoIterator,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
{
    let mut groups: IndexMap<K, Vec<I::Item>> = IndexMap::new();
    for item in sequence {
        groups.entry(key_selector(&item)).or_default().push(item);
    }

    tracing::trace!(groups = groups.len(), "group-by complete");
    groups
        .into_iter()
        .map(|(key, members)| Grouping { key, members })
        .collect()
}

/// Price category derived from [`PriceBands`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum PriceBand {
    Cheap,
    Middle,
    Expensive,
}

impl PriceBand {
    /// Returns the band's display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceBand::Cheap => "Cheap",
            PriceBand::Middle => "Middle",
            PriceBand::Expensive => "Expensive",
        }
    }
}

impl std::fmt::Display for PriceBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-supplied thresholds for a three-way price classification.
///
/// `price < cheap_below` is cheap, `price < expensive_from` is middle,
/// anything else is expensive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceBands {
    cheap_below: Decimal,
    expensive_from: Decimal,
}

impl PriceBands {
    /// Creates price bands, rejecting a cheap bound above the expensive one.
    pub fn new(cheap_below: Decimal, expensive_from: Decimal) -> Result<Self> {
        if cheap_below > expensive_from {
            return Err(QueryError::InvalidBands {
                cheap_below,
                expensive_from,
            });
        }
        Ok(Self {
            cheap_below,
            expensive_from,
        })
    }

    /// Classifies a price into its band.
    pub fn classify(&self, price: Decimal) -> PriceBand {
        if price < self.cheap_below {
            PriceBand::Cheap
        } else if price < self.expensive_from {
            PriceBand::Middle
        } else {
            PriceBand::Expensive
        }
    }
}
