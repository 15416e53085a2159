// src/network/builder.rs
//! Graph construction: member discovery and adjacency building.

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::network::centrality;
use crate::network::graph::{group_for, Link, NetworkGraph, Node, SharedLeague};
use crate::types::{League, MemberRef, Platform};

/// Identity metadata accumulated for one discovered member.
#[derive(Debug, Clone)]
pub(crate) struct MemberRecord {
    pub(crate) name: String,
    pub(crate) avatar: Option<String>,
    pub(crate) platforms: BTreeSet<Platform>,
    /// League ids this member belongs to, in input order.
    pub(crate) leagues: Vec<String>,
}

/// Immutable snapshot over a league collection. Construction runs the two
/// preprocessing passes (discovery, adjacency); every query afterwards is
/// read-only, so a shared builder is safe to query from multiple threads.
#[derive(Debug, Clone)]
pub struct NetworkGraphBuilder {
    pub(crate) leagues: Vec<League>,
    pub(crate) members: HashMap<String, MemberRecord>,
    /// Member ids in discovery order. Drives node emission so repeated
    /// builds over the same input stay structurally identical.
    pub(crate) order: Vec<String>,
    pub(crate) adjacency: HashMap<String, HashSet<String>>,
}

impl NetworkGraphBuilder {
    #[must_use]
    pub fn new(leagues: Vec<League>) -> Self {
        let (members, order) = discover_members(&leagues);
        let adjacency = build_adjacency(&leagues);
        Self {
            leagues,
            members,
            order,
            adjacency,
        }
    }

    #[must_use]
    pub fn member_count(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn contains_member(&self, member_id: &str) -> bool {
        self.members.contains_key(member_id)
    }

    /// Display name for a discovered member, falling back to the raw id.
    #[must_use]
    pub fn member_name<'a>(&'a self, member_id: &'a str) -> &'a str {
        self.members
            .get(member_id)
            .map_or(member_id, |record| record.name.as_str())
    }

    /// Number of distinct co-members across all leagues.
    #[must_use]
    pub fn degree(&self, member_id: &str) -> usize {
        self.adjacency.get(member_id).map_or(0, HashSet::len)
    }

    /// Adjacent member ids in sorted order. Sorting pins down traversal
    /// order, so path tie-breaks are reproducible for a fixed input.
    #[must_use]
    pub fn neighbors_sorted(&self, member_id: &str) -> Vec<String> {
        let mut neighbors: Vec<String> = self
            .adjacency
            .get(member_id)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default();
        neighbors.sort();
        neighbors
    }

    /// Leagues containing both members. Recomputed from the league list on
    /// every call; the input is small and the multiplicity is not cached.
    #[must_use]
    pub fn shared_leagues(&self, a: &str, b: &str) -> Vec<SharedLeague> {
        self.leagues
            .iter()
            .filter(|league| league.shares_pair(a, b))
            .map(|league| SharedLeague {
                id: league.id.clone(),
                name: league.name.clone(),
                platform: league.platform,
            })
            .collect()
    }

    /// Ids of leagues containing both members.
    #[must_use]
    pub fn shared_league_ids(&self, a: &str, b: &str) -> Vec<String> {
        self.leagues
            .iter()
            .filter(|league| league.shares_pair(a, b))
            .map(|league| league.id.clone())
            .collect()
    }

    /// Emits the full node/link graph for rendering.
    #[must_use]
    pub fn build_graph(&self) -> NetworkGraph {
        NetworkGraph {
            nodes: self.build_nodes(),
            links: self.build_links(),
        }
    }

    fn build_nodes(&self) -> Vec<Node> {
        let total = self.order.len();
        self.order
            .iter()
            .filter_map(|id| {
                let record = self.members.get(id)?;
                Some(Node {
                    id: id.clone(),
                    name: record.name.clone(),
                    group: group_for(&record.platforms),
                    leagues: record.leagues.clone(),
                    platforms: record.platforms.iter().copied().collect(),
                    centrality: centrality::degree_centrality(self.degree(id), total),
                    avatar: record.avatar.clone(),
                })
            })
            .collect()
    }

    fn build_links(&self) -> Vec<Link> {
        let mut seen: HashSet<(String, String)> = HashSet::new();
        let mut links = Vec::new();

        for id in &self.order {
            for other in self.neighbors_sorted(id) {
                if !seen.insert(pair_key(id, &other)) {
                    continue;
                }
                let shared = self.shared_leagues(id, &other);
                links.push(Link {
                    source: id.clone(),
                    target: other,
                    weight: shared.len(),
                    shared_leagues: shared,
                });
            }
        }
        links
    }
}

/// Canonical dedup key for an unordered member pair.
fn pair_key(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

/// First pass: walk leagues in input order and record each member id once.
/// The first league referencing an id establishes its canonical name and
/// avatar; later references only extend the platform/league sets.
fn discover_members(leagues: &[League]) -> (HashMap<String, MemberRecord>, Vec<String>) {
    let mut members: HashMap<String, MemberRecord> = HashMap::new();
    let mut order: Vec<String> = Vec::new();

    for league in leagues {
        for member in &league.members {
            let record = members.entry(member.id.clone()).or_insert_with(|| {
                order.push(member.id.clone());
                new_record(member)
            });
            record.platforms.insert(league.platform);
            if !record.leagues.contains(&league.id) {
                record.leagues.push(league.id.clone());
            }
        }
    }
    (members, order)
}

fn new_record(member: &MemberRef) -> MemberRecord {
    MemberRecord {
        name: member.name.clone(),
        avatar: member.avatar.clone(),
        platforms: BTreeSet::new(),
        leagues: Vec::new(),
    }
}

/// Second pass: every unordered pair of distinct members within a league
/// gets a bidirectional edge. The sets store presence only; weight is
/// recovered later by rescanning the league list.
fn build_adjacency(leagues: &[League]) -> HashMap<String, HashSet<String>> {
    let mut adjacency: HashMap<String, HashSet<String>> = HashMap::new();

    for league in leagues {
        add_league_edges(&mut adjacency, &league.members);
    }
    adjacency
}

fn add_league_edges(adjacency: &mut HashMap<String, HashSet<String>>, members: &[MemberRef]) {
    for (i, a) in members.iter().enumerate() {
        for b in members.iter().skip(i + 1) {
            // A roster can list the same id twice; never self-link.
            if a.id == b.id {
                continue;
            }
            adjacency
                .entry(a.id.clone())
                .or_default()
                .insert(b.id.clone());
            adjacency
                .entry(b.id.clone())
                .or_default()
                .insert(a.id.clone());
        }
    }
}
