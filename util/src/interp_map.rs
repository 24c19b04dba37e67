//! # Interpolating map
//!
//! A map keyed by time (or any other continuous `f64` quantity) which can be queried at any key,
//! blending the two entries either side of the query.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use ordered_float::OrderedFloat;
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// TRAITS
// ---------------------------------------------------------------------------

/// A value which can be blended with another of the same type.
pub trait Interpolate {
    /// Return the value a fraction `f` of the way from `self` to `other`.
    ///
    /// `f` is in the range [0, 1], with 0 giving `self` and 1 giving `other`.
    fn interpolate(&self, other: &Self, f: f64) -> Self;
}

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Ordered map from `f64` keys to interpolable values.
///
/// Insertion order does not matter, entries are always held sorted by key. At most one value is
/// held per exact key, inserting at an existing key replaces the old value.
#[derive(Debug, Clone)]
pub struct InterpMap<V> {
    map: BTreeMap<OrderedFloat<f64>, V>,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl<V> Default for InterpMap<V> {
    fn default() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }
}

impl<V> InterpMap<V>
where
    V: Interpolate + Clone,
{
    /// Create a new empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value at the given key, returning the value it replaced if there was one.
    pub fn insert(&mut self, key: f64, value: V) -> Option<V> {
        self.map.insert(OrderedFloat(key), value)
    }

    /// Get the value at the given key.
    ///
    /// Between two entries the value is interpolated by the fraction of the key range covered.
    /// Outside the range of the map the nearest entry is returned, values are never extrapolated.
    /// Returns `None` if the map is empty.
    pub fn get(&self, key: f64) -> Option<V> {
        let query = OrderedFloat(key);

        let below = self.map.range(..=query).next_back();
        let above = self.map.range(query..).next();

        match (below, above) {
            (Some((k0, v0)), Some((k1, v1))) => {
                if k0 == k1 {
                    return Some(v0.clone());
                }

                let f = (key - k0.into_inner()) / (k1.into_inner() - k0.into_inner());
                Some(v0.interpolate(v1, f))
            }
            (Some((_, v)), None) | (None, Some((_, v))) => Some(v.clone()),
            (None, None) => None,
        }
    }

    /// Get the entry with the largest key.
    pub fn latest(&self) -> Option<(f64, &V)> {
        self.map
            .iter()
            .next_back()
            .map(|(k, v)| (k.into_inner(), v))
    }

    /// Get the entry with the smallest key.
    pub fn earliest(&self) -> Option<(f64, &V)> {
        self.map.iter().next().map(|(k, v)| (k.into_inner(), v))
    }

    /// Iterate over all entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, &V)> {
        self.map.iter().map(|(k, v)| (k.into_inner(), v))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.map.clear()
    }
}

impl Interpolate for f64 {
    fn interpolate(&self, other: &Self, f: f64) -> Self {
        crate::maths::lerp(*self, *other, f)
    }
}
