// src/network/graph.rs
//! The node/link graph handed to the site renderer.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::types::Platform;

/// Renderer color groups. Matches the classification the connection
/// explorer expects: single-platform members keep their platform's group,
/// members seen on both get their own.
pub const GROUP_SLEEPER_ONLY: u8 = 0;
pub const GROUP_ESPN_ONLY: u8 = 1;
pub const GROUP_CROSS_PLATFORM: u8 = 2;

/// Classifies a member by the set of platforms it has been observed on.
#[must_use]
pub fn group_for(platforms: &BTreeSet<Platform>) -> u8 {
    if platforms.len() > 1 {
        GROUP_CROSS_PLATFORM
    } else if platforms.contains(&Platform::Espn) {
        GROUP_ESPN_ONLY
    } else {
        GROUP_SLEEPER_ONLY
    }
}

/// A graph vertex: one discovered member.
#[derive(Debug, Clone, Serialize)]
pub struct Node {
    pub id: String,
    pub name: String,
    pub group: u8,
    /// Ids of every league this member belongs to, in input order.
    pub leagues: Vec<String>,
    pub platforms: Vec<Platform>,
    /// Normalized degree centrality, in [0, 1].
    pub centrality: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// League detail attached to links and hops for tooltip display.
#[derive(Debug, Clone, Serialize)]
pub struct SharedLeague {
    pub id: String,
    pub name: String,
    pub platform: Platform,
}

/// An undirected edge between two members. One record per unordered pair;
/// sharing several leagues raises the weight, not the link count.
#[derive(Debug, Clone, Serialize)]
pub struct Link {
    pub source: String,
    pub target: String,
    pub weight: usize,
    pub shared_leagues: Vec<SharedLeague>,
}

impl Link {
    /// Returns true if this link connects the given pair, in either order.
    #[must_use]
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }
}

/// The built graph: a snapshot over one league collection.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NetworkGraph {
    pub nodes: Vec<Node>,
    pub links: Vec<Link>,
}

impl NetworkGraph {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    #[must_use]
    pub fn link_between(&self, a: &str, b: &str) -> Option<&Link> {
        self.links.iter().find(|l| l.connects(a, b))
    }
}
