// src/network/mod.rs
//! Co-membership social network built from imported leagues.
//!
//! Two members are connected when at least one league lists them both.
//! The builder is a snapshot: construct once per league collection, then
//! query build/path/reach as often as needed.

pub mod builder;
pub mod centrality;
pub mod graph;
pub mod paths;

pub use builder::NetworkGraphBuilder;
pub use graph::{group_for, Link, NetworkGraph, Node, SharedLeague};
pub use paths::{ConnectionPath, PathHop};

impl NetworkGraphBuilder {
    /// Shortest connection between two members. See [`paths::shortest_path`].
    #[must_use]
    pub fn find_shortest_path(&self, start: &str, end: &str) -> Option<ConnectionPath> {
        paths::shortest_path(self, start, end)
    }

    /// Distance map of members within `max_degrees` hops.
    /// See [`paths::within_degrees`].
    #[must_use]
    pub fn find_within_degrees(
        &self,
        start: &str,
        max_degrees: usize,
    ) -> std::collections::HashMap<String, usize> {
        paths::within_degrees(self, start, max_degrees)
    }
}
