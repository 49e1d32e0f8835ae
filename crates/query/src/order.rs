//! Stable multi-key ordering.

use std::cmp::Ordering;

use serde::Serialize;

/// Sort direction of a single key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }
}

struct SortKey<T> {
    direction: Direction,
    compare: Box<dyn Fn(&T, &T) -> Ordering>,
}

/// An ordered list of sort keys.
///
/// The first key is primary; each later key only breaks ties left by the
/// keys before it. Sorting is stable, so elements equal on every key keep
/// their input order.
///
/// ```
/// use query::OrderBy;
///
/// let ordering = OrderBy::asc(|p: &(u32, char)| p.0).then_desc(|p: &(u32, char)| p.1);
/// let mut rows = vec![(2, 'a'), (1, 'a'), (2, 'b')];
/// ordering.sort(&mut rows);
/// assert_eq!(rows, vec![(1, 'a'), (2, 'b'), (2, 'a')]);
/// ```
pub struct OrderBy<T> {
    keys: Vec<SortKey<T>>,
}

impl<T> OrderBy<T> {
    /// Creates an ordering with no keys; sorting with it is a no-op.
    pub fn new() -> Self {
        Self { keys: Vec::new() }
    }

    /// Creates an ordering with one ascending key.
    pub fn asc<K, F>(selector: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + 'static,
    {
        Self::new().then_by(selector, Direction::Ascending)
    }

    /// Creates an ordering with one descending key.
    pub fn desc<K, F>(selector: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + 'static,
    {
        Self::new().then_by(selector, Direction::Descending)
    }

    /// Appends an ascending tie-breaker.
    pub fn then_asc<K, F>(self, selector: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + 'static,
    {
        self.then_by(selector, Direction::Ascending)
    }

    /// Appends a descending tie-breaker.
    pub fn then_desc<K, F>(self, selector: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + 'static,
    {
        self.then_by(selector, Direction::Descending)
    }

    /// Appends a tie-breaker with an explicit direction.
    pub fn then_by<K, F>(self, selector: F, direction: Direction) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + 'static,
    {
        self.then_by_cmp(
            move |a: &T, b: &T| selector(a).cmp(&selector(b)),
            direction,
        )
    }

    /// Appends a tie-breaker that compares two elements directly.
    ///
    /// Use this for keys that borrow from the element, such as names, where a
    /// selector would have to clone the key on every comparison.
    pub fn then_by_cmp<F>(mut self, compare: F, direction: Direction) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        self.keys.push(SortKey {
            direction,
            compare: Box::new(compare),
        });
        self
    }

    /// Returns the number of keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if no key was added.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the key directions, primary first.
    pub fn directions(&self) -> Vec<Direction> {
        self.keys.iter().map(|k| k.direction).collect()
    }

    /// Compares two elements key by key.
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        self.keys
            .iter()
            .map(|key| key.direction.apply((key.compare)(a, b)))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }

    /// Sorts in place. Stable.
    pub fn sort(&self, items: &mut [T]) {
        items.sort_by(|a, b| self.compare(a, b));
    }
}

impl<T> Default for OrderBy<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for OrderBy<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderBy")
            .field("directions", &self.directions())
            .finish()
    }
}

/// Materializes `sequence` sorted by `ordering`.
pub fn order_by<I>(sequence: I, ordering: &OrderBy<I::Item>) -> Vec<I::Item>
where
    I: IntoIterator,
{
    let mut items: Vec<_> = sequence.into_iter().collect();
    ordering.sort(&mut items);
    items
}
