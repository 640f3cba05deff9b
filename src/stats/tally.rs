//! Fixed-shape counter trees.
//!
//! A [`Dim`] is one dimension of a counter tree with a key range known at
//! compile time. Nesting dims gives the full shape of a category, e.g.
//! `Dim<Dim<u64, 4, 1>, 2, 1>` for reception type (1-2) by outcome (1-4).
//! Players are the only open dimension and live in a [`ByPlayer`] map that
//! creates a zeroed tree on first write.

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::lineup::PlayerId;

/// A node of a counter tree: mergeable by addition.
pub trait Tally: Clone + Default {
    fn merge(&mut self, other: &Self);

    /// Sum of all leaves below this node.
    fn total(&self) -> u64;
}

impl Tally for u64 {
    fn merge(&mut self, other: &Self) {
        *self += other;
    }

    fn total(&self) -> u64 {
        *self
    }
}

/// One dimension with `N` keys starting at `BASE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dim<T, const N: usize, const BASE: usize>([T; N]);

impl<T: Default, const N: usize, const BASE: usize> Default for Dim<T, N, BASE> {
    fn default() -> Self {
        Self(std::array::from_fn(|_| T::default()))
    }
}

impl<T, const N: usize, const BASE: usize> Dim<T, N, BASE> {
    /// Child for `key`. Keys come from typed codes, so they are always in
    /// `BASE..BASE + N`.
    pub fn get(&self, key: usize) -> &T {
        &self.0[key - BASE]
    }

    pub fn get_mut(&mut self, key: usize) -> &mut T {
        &mut self.0[key - BASE]
    }

    /// Children with their keys.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> {
        self.0.iter().enumerate().map(|(i, t)| (i + BASE, t))
    }
}

impl<T: Tally, const N: usize, const BASE: usize> Tally for Dim<T, N, BASE> {
    fn merge(&mut self, other: &Self) {
        for (mine, theirs) in self.0.iter_mut().zip(other.0.iter()) {
            mine.merge(theirs);
        }
    }

    fn total(&self) -> u64 {
        self.0.iter().map(Tally::total).sum()
    }
}

impl<T: Serialize, const N: usize, const BASE: usize> Serialize for Dim<T, N, BASE> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(N))?;
        for (key, child) in self.iter() {
            map.serialize_entry(&key, child)?;
        }
        map.end()
    }
}

/// Counter trees per player, created on first write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByPlayer<T>(BTreeMap<PlayerId, T>);

impl<T> Default for ByPlayer<T> {
    fn default() -> Self {
        Self(BTreeMap::new())
    }
}

impl<T: Tally> ByPlayer<T> {
    /// Tree of `player`, zeroed on first access.
    pub fn entry(&mut self, player: PlayerId) -> &mut T {
        self.0.entry(player).or_default()
    }

    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.0.get(&player)
    }

    pub fn players(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.0.iter().map(|(p, t)| (*p, t))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn merge(&mut self, other: &Self) {
        for (player, tree) in &other.0 {
            self.entry(*player).merge(tree);
        }
    }

    pub fn total(&self) -> u64 {
        self.0.values().map(Tally::total).sum()
    }
}

impl<T: Serialize> Serialize for ByPlayer<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}
