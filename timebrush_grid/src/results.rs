// Copyright 2026 the Timebrush Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic query results and change detection.

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashSet;

/// The set of timeline keys matched by one query.
///
/// Keys are stored without duplicates, in the index's stable key order
/// (first-encounter order of the build input), so two queries of the same
/// index can be compared directly with `==`. For comparing results that may
/// come from different indexes over the same keys, use
/// [`MatchSet::same_keys`], which ignores order.
///
/// The derived `PartialEq` is order-sensitive by design: it is the cheap
/// comparison for the common case (same index, consecutive drag frames),
/// where the interaction layer suppresses a redraw when nothing changed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchSet<K> {
    items: Vec<K>,
}

impl<K> MatchSet<K> {
    /// An empty result.
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub(crate) fn from_keys(items: Vec<K>) -> Self {
        Self { items }
    }

    /// Number of matched keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no timeline matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The matched keys, in the index's stable key order.
    #[must_use]
    pub fn keys(&self) -> &[K] {
        &self.items
    }

    /// Iterates the matched keys in stable order.
    pub fn iter(&self) -> core::slice::Iter<'_, K> {
        self.items.iter()
    }

    /// Consumes the set, yielding the keys in stable order.
    #[must_use]
    pub fn into_vec(self) -> Vec<K> {
        self.items
    }
}

impl<K: PartialEq> MatchSet<K> {
    /// Whether `key` matched.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.items.contains(key)
    }
}

impl<K: Eq + Hash> MatchSet<K> {
    /// Order-insensitive set equality: both results contain exactly the same
    /// keys.
    ///
    /// Size check first, then hashed membership, so two large unchanged
    /// results compare in linear time.
    #[must_use]
    pub fn same_keys(&self, other: &Self) -> bool {
        if self.items.len() != other.items.len() {
            return false;
        }
        let theirs: HashSet<&K> = other.items.iter().collect();
        self.items.iter().all(|key| theirs.contains(key))
    }
}

impl<K> IntoIterator for MatchSet<K> {
    type Item = K;
    type IntoIter = alloc::vec::IntoIter<K>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, K> IntoIterator for &'a MatchSet<K> {
    type Item = &'a K;
    type IntoIter = core::slice::Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
