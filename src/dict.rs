use crate::interval::Interval;
use itertools::Itertools;
use std::cmp::Ordering;
use std::ops::BitOr;

/// A mapping from intervals to values.
///
/// Keys are non-empty intervals, kept pairwise disjoint and sorted by
/// their lower bound.  Assigning a value to an interval overwrites
/// whatever was mapped there before, shrinking or splitting the keys it
/// overlaps.  Assigning a value already present in the map extends that
/// value's key instead of adding an entry, so looking a value up returns
/// one consolidated interval:
///
/// ```
///    use interval_unions::{Interval, IntervalDict};
///
///    let mut dict = IntervalDict::new();
///    dict.insert(Interval::closed(0, 3), "low");
///    dict.insert(Interval::closed(2, 5), "high");
///    assert_eq!(dict.get(&1), Some(&"low"));
///    assert_eq!(dict.get(&2), Some(&"high"));
///    assert_eq!(dict.find(&"low"), Interval::closedopen(0, 2));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct IntervalDict<T, V> {
    entries: Vec<(Interval<T>, V)>,
}

// Entries are ordered by the first component of their key.  Keys are
// disjoint but a union key may still interleave with later ones, so scans
// can only prune on lower bounds.
fn cmp_keys<T: Ord>(a: &Interval<T>, b: &Interval<T>) -> Ordering {
    match (a.get(0), b.get(0)) {
        (Some(x), Some(y)) => x.cmp_lower(y),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

impl<T, V> IntervalDict<T, V> {
    pub fn new() -> Self {
        IntervalDict {
            entries: Vec::new(),
        }
    }

    /// The number of entries (not of mapped values, a value mapped on
    /// two disjoint ranges through a single insert counts once).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Interval<T>, &V)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    /// The keys, sorted by lower bound.
    pub fn keys(&self) -> impl Iterator<Item = &Interval<T>> {
        self.entries.iter().map(|(key, _)| key)
    }

    /// The values, in the order of their keys.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, value)| value)
    }

    /// Remove and return the entry with the highest lower bound.
    pub fn pop_last(&mut self) -> Option<(Interval<T>, V)> {
        self.entries.pop()
    }
}

impl<T: Ord, V> IntervalDict<T, V> {
    /// The value mapped at `value`, if any.
    pub fn get(&self, value: &T) -> Option<&V> {
        // Entries whose keys start after the value cannot contain it
        let candidates = self
            .entries
            .partition_point(|(key, _)| !key.strictly_right_of(value));
        self.entries
            .iter()
            .take(candidates)
            .find_map(|(key, stored)| key.contains(value).then_some(stored))
    }

    pub fn contains(&self, value: &T) -> bool {
        self.get(value).is_some()
    }
}

impl<T: Ord + Clone, V> IntervalDict<T, V> {
    /// The union of all keys.
    pub fn domain(&self) -> Interval<T> {
        self.entries.iter().map(|(key, _)| key.clone()).collect()
    }

    /// Whether every value of `window` is mapped to something.
    pub fn contains_interval(&self, window: &Interval<T>) -> bool {
        self.domain().contains_interval(window)
    }

    /// The interval over which `value` is mapped.  Empty when the value
    /// is not in the map.
    pub fn find(&self, value: &V) -> Interval<T>
    where
        V: PartialEq,
    {
        self.entries
            .iter()
            .filter(|(_, stored)| stored == value)
            .map(|(key, _)| key.clone())
            .collect()
    }

    /// The part of the map covered by `window`: keys are intersected
    /// with it, values are kept as they are.
    pub fn restrict(&self, window: &Interval<T>) -> Self
    where
        V: Clone,
    {
        let mut entries = Vec::new();
        for (key, value) in &self.entries {
            // Later keys start even further right
            if window.strictly_left_of_interval(key) {
                break;
            }
            let piece = key.intersection(window);
            if !piece.is_empty() {
                entries.push((piece, value.clone()));
            }
        }
        entries.sort_unstable_by(|a, b| cmp_keys(&a.0, &b.0));
        IntervalDict { entries }
    }

    /// Like [`IntervalDict::restrict`], with the part of `window` not
    /// covered by the map mapped to `fill`.
    pub fn restrict_filled(&self, window: &Interval<T>, fill: &V) -> Self
    where
        V: Clone + PartialEq,
    {
        let mut restricted = self.restrict(window);
        let gap = window.difference(&restricted.domain());
        restricted.insert(gap, fill.clone());
        restricted
    }

    /// Map `key` to `value`.
    ///
    /// Keys overlapping `key` are shrunk to what remains outside of it.
    /// If `value` is already present in the map, its key is extended
    /// instead of a new entry being added, even when the two ranges do
    /// not touch.  Inserting on an empty interval does nothing.
    pub fn insert(&mut self, key: Interval<T>, value: V)
    where
        V: PartialEq,
    {
        if key.is_empty() {
            return;
        }
        let mut extended = key.clone();
        let mut entries = Vec::with_capacity(self.entries.len() + 1);
        for (stored_key, stored) in self.entries.drain(..) {
            if stored == value {
                extended = extended.union(&stored_key);
            } else if stored_key.overlaps(&key) {
                let remaining = stored_key.difference(&key);
                if !remaining.is_empty() {
                    entries.push((remaining, stored));
                }
            } else {
                entries.push((stored_key, stored));
            }
        }
        entries.push((extended, value));
        entries.sort_unstable_by(|a, b| cmp_keys(&a.0, &b.0));
        self.entries = entries;
    }

    /// Map `value` over the part of `key` nothing is mapped on yet.
    /// Existing entries keep their values, whatever they overlap.
    pub fn insert_missing(&mut self, key: Interval<T>, value: V)
    where
        V: PartialEq,
    {
        let gap = key.difference(&self.domain());
        self.insert(gap, value);
    }

    /// Unmap everything on `window`.  Keys overlapping it are shrunk,
    /// keys inside it disappear.
    pub fn remove(&mut self, window: &Interval<T>) {
        if window.is_empty() {
            return;
        }
        let mut entries = Vec::with_capacity(self.entries.len());
        for (stored_key, stored) in self.entries.drain(..) {
            if stored_key.overlaps(window) {
                let remaining = stored_key.difference(window);
                if !remaining.is_empty() {
                    entries.push((remaining, stored));
                }
            } else {
                entries.push((stored_key, stored));
            }
        }
        entries.sort_unstable_by(|a, b| cmp_keys(&a.0, &b.0));
        self.entries = entries;
    }

    /// Unmap a single value and return what it was mapped to, if it was
    /// mapped at all.
    pub fn remove_at(&mut self, value: &T) -> Option<V>
    where
        V: Clone,
    {
        let index = self
            .entries
            .iter()
            .position(|(key, _)| key.contains(value))?;
        let (key, stored) = self.entries.remove(index);
        let remaining = key.difference(&Interval::singleton(value.clone()));
        if remaining.is_empty() {
            Some(stored)
        } else {
            let result = stored.clone();
            self.entries.push((remaining, stored));
            self.entries.sort_unstable_by(|a, b| cmp_keys(&a.0, &b.0));
            Some(result)
        }
    }

    /// Remove `window` from the map and return the part that was
    /// removed, as [`IntervalDict::restrict`] would have returned it.
    pub fn pop(&mut self, window: &Interval<T>) -> Self
    where
        V: Clone,
    {
        let popped = self.restrict(window);
        self.remove(window);
        popped
    }

    /// Merge two maps value by value.
    ///
    /// Ranges covered by only one of the maps keep their value.  Where
    /// both maps cover a range, `how` is called with the shared interval
    /// and the two values, and its result is mapped there.
    pub fn combine<F>(&self, other: &Self, how: F) -> Self
    where
        F: FnMut(&Interval<T>, &V, &V) -> V,
        V: Clone + PartialEq,
    {
        self.combined_with(other, None, how)
    }

    /// Like [`IntervalDict::combine`], with one-sided ranges going
    /// through `how` as well, paired with `fill`.
    pub fn combine_filled<F>(&self, other: &Self, fill: &V, how: F) -> Self
    where
        F: FnMut(&Interval<T>, &V, &V) -> V,
        V: Clone + PartialEq,
    {
        self.combined_with(other, Some(fill), how)
    }

    fn combined_with<F>(&self, other: &Self, fill: Option<&V>, mut how: F) -> Self
    where
        F: FnMut(&Interval<T>, &V, &V) -> V,
        V: Clone + PartialEq,
    {
        let dom1 = self.domain();
        let dom2 = other.domain();
        let mut combined = IntervalDict::new();
        for (key, value) in &self.entries {
            let piece = key.difference(&dom2);
            if !piece.is_empty() {
                let value = match fill {
                    Some(fill) => how(&piece, value, fill),
                    None => value.clone(),
                };
                combined.insert(piece, value);
            }
        }
        for (key, value) in &other.entries {
            let piece = key.difference(&dom1);
            if !piece.is_empty() {
                let value = match fill {
                    Some(fill) => how(&piece, fill, value),
                    None => value.clone(),
                };
                combined.insert(piece, value);
            }
        }
        let shared = dom1.intersection(&dom2);
        let left = self.restrict(&shared);
        let right = other.restrict(&shared);
        for ((k1, v1), (k2, v2)) in left.entries.iter().cartesian_product(&right.entries) {
            let key = k1.intersection(k2);
            if !key.is_empty() {
                let value = how(&key, v1, v2);
                combined.insert(key, value);
            }
        }
        combined
    }
}

impl<T, V> Default for IntervalDict<T, V> {
    fn default() -> Self {
        IntervalDict::new()
    }
}

impl<T: Ord + Clone, V: PartialEq> Extend<(Interval<T>, V)> for IntervalDict<T, V> {
    fn extend<I: IntoIterator<Item = (Interval<T>, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<T: Ord + Clone, V: PartialEq> FromIterator<(Interval<T>, V)> for IntervalDict<T, V> {
    fn from_iter<I: IntoIterator<Item = (Interval<T>, V)>>(iter: I) -> Self {
        let mut dict = IntervalDict::new();
        dict.extend(iter);
        dict
    }
}

impl<T, V> IntoIterator for IntervalDict<T, V> {
    type Item = (Interval<T>, V);
    type IntoIter = ::std::vec::IntoIter<(Interval<T>, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, T, V> IntoIterator for &'a IntervalDict<T, V> {
    type Item = &'a (Interval<T>, V);
    type IntoIter = ::std::slice::Iter<'a, (Interval<T>, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

///  &IntervalDict | &IntervalDict
///
/// Merge the two maps; the right one wins where both are defined.
impl<T: Ord + Clone, V: Clone + PartialEq> BitOr<&IntervalDict<T, V>> for &IntervalDict<T, V> {
    type Output = IntervalDict<T, V>;

    fn bitor(self, rhs: &IntervalDict<T, V>) -> Self::Output {
        let mut merged = self.clone();
        merged.extend(rhs.entries.iter().cloned());
        merged
    }
}

///  IntervalDict | IntervalDict
impl<T: Ord + Clone, V: Clone + PartialEq> BitOr<IntervalDict<T, V>> for IntervalDict<T, V> {
    type Output = IntervalDict<T, V>;

    fn bitor(mut self, rhs: IntervalDict<T, V>) -> Self::Output {
        self.extend(rhs.entries);
        self
    }
}

/// Serialized as a sequence of `(key, value)` pairs.
#[cfg(feature = "serde")]
impl<T, V> serde::Serialize for IntervalDict<T, V>
where
    T: serde::Serialize,
    V: serde::Serialize,
{
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entries.iter().map(|(key, value)| (key, value)))
    }
}

#[cfg(feature = "serde")]
impl<'de, T, V> serde::Deserialize<'de> for IntervalDict<T, V>
where
    T: serde::Deserialize<'de> + Ord + Clone,
    V: serde::Deserialize<'de> + PartialEq,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<(Interval<T>, V)>::deserialize(deserializer)?;
        Ok(entries.into_iter().collect())
    }
}

impl<T, V> ::core::fmt::Debug for IntervalDict<T, V>
where
    T: ::core::fmt::Debug + PartialEq,
    V: ::core::fmt::Debug,
{
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        write!(f, "{{")?;
        for (index, (key, value)) in self.entries.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}: {:?}", key, value)?;
        }
        write!(f, "}}")
    }
}
