//! Route map: named locations joined by weighted bidirectional routes.
//!
//! # Data layout
//!
//! Adjacency is a name-keyed map of maps: `location → (neighbour → distance)`.
//! Ordered maps keep iteration — and therefore routing tie-breaks — fully
//! deterministic, which matters for reproducible tests.  Maps are
//! hand-entered and small, so `BTreeMap` lookup cost is irrelevant here.
//!
//! # Invariants
//!
//! Every name appearing as a neighbour key also exists as a top-level key,
//! and every route is stored under both endpoints with the same distance.
//! Only the public mutators touch the adjacency structure, so callers cannot
//! violate either invariant.

use std::collections::BTreeMap;

use courier_core::Distance;

use crate::error::{GraphError, GraphResult};

/// Mutable store of locations and symmetric weighted routes.
///
/// A `RouteMap` is a plain owned value: construct one per system (or per
/// test) and pass it by reference.  There is no global map.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteMap {
    adjacency: BTreeMap<String, BTreeMap<String, Distance>>,
}

impl RouteMap {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Register a location.
    ///
    /// Returns `true` if the location was inserted, `false` if it already
    /// existed — the call is then a no-op, not an error, and any routes the
    /// existing location has are untouched.
    pub fn add_location(&mut self, name: &str) -> bool {
        if self.adjacency.contains_key(name) {
            return false;
        }
        self.adjacency.insert(name.to_owned(), BTreeMap::new());
        true
    }

    /// Connect two existing locations with a bidirectional route.
    ///
    /// Fails with [`GraphError::UnknownLocation`] if either endpoint has not
    /// been added yet; the map is left untouched in that case.  Adding a
    /// route that already exists overwrites its distance in both directions
    /// (last-write-wins, no duplicate edges).
    pub fn add_route(&mut self, a: &str, b: &str, distance: Distance) -> GraphResult<()> {
        // Verify both endpoints before the first write so the two inserts
        // cannot half-apply.
        for name in [a, b] {
            if !self.adjacency.contains_key(name) {
                return Err(GraphError::UnknownLocation(name.to_owned()));
            }
        }
        if let Some(neighbors) = self.adjacency.get_mut(a) {
            neighbors.insert(b.to_owned(), distance);
        }
        if let Some(neighbors) = self.adjacency.get_mut(b) {
            neighbors.insert(a.to_owned(), distance);
        }
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn has_location(&self, name: &str) -> bool {
        self.adjacency.contains_key(name)
    }

    /// Neighbours of `name` with their route distances, in name order.
    ///
    /// An unknown location yields an empty iterator rather than an error.
    pub fn neighbors<'a>(&'a self, name: &str) -> impl Iterator<Item = (&'a str, Distance)> + use<'a> {
        self.adjacency
            .get(name)
            .into_iter()
            .flatten()
            .map(|(n, &d)| (n.as_str(), d))
    }

    /// Distance of the direct route between `a` and `b`, if one is registered.
    pub fn route_between(&self, a: &str, b: &str) -> Option<Distance> {
        self.adjacency.get(a)?.get(b).copied()
    }

    /// All known location names, in sorted order.
    pub fn locations(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    pub fn location_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    // ── Path distance aggregation ─────────────────────────────────────────

    /// Sum of route distances along `path`, taken pairwise.
    ///
    /// Returns `None` as soon as a consecutive pair is not a registered
    /// route — a partial sum is never produced.  Paths of fewer than two
    /// nodes cost `Some(0)` (the trivial/self path).
    pub fn path_distance<S: AsRef<str>>(&self, path: &[S]) -> Option<Distance> {
        let mut total: Distance = 0;
        for pair in path.windows(2) {
            let d = self.route_between(pair[0].as_ref(), pair[1].as_ref())?;
            total = total.saturating_add(d);
        }
        Some(total)
    }
}
