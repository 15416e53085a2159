// src/network/paths.rs
//! Degrees-of-separation queries via breadth-first search.
//!
//! Unknown member ids are an absence, not an error: path queries return
//! `None` and reach queries return an empty map.

use std::collections::{HashMap, HashSet, VecDeque};

use serde::Serialize;

use super::builder::NetworkGraphBuilder;

/// One edge along a found path, with the leagues that justify it.
#[derive(Debug, Clone, Serialize)]
pub struct PathHop {
    pub from: String,
    pub to: String,
    pub shared_league_ids: Vec<String>,
}

/// A shortest connection between two members.
#[derive(Debug, Clone, Serialize)]
pub struct ConnectionPath {
    /// Member ids from start to end, inclusive.
    pub members: Vec<String>,
    /// Degrees of separation: path length minus one.
    pub degrees: usize,
    pub hops: Vec<PathHop>,
}

/// Finds a minimum-hop path between two members, or `None` when either id
/// was never discovered or the members live in disconnected components.
#[must_use]
pub fn shortest_path(
    builder: &NetworkGraphBuilder,
    start: &str,
    end: &str,
) -> Option<ConnectionPath> {
    if !builder.contains_member(start) || !builder.contains_member(end) {
        return None;
    }
    if start == end {
        return Some(ConnectionPath {
            members: vec![start.to_string()],
            degrees: 0,
            hops: Vec::new(),
        });
    }

    let predecessors = bfs_to_target(builder, start, end)?;
    Some(reconstruct(builder, start, end, &predecessors))
}

/// BFS with a FIFO frontier. Ids are marked visited on enqueue so a node
/// is never queued twice; the first time `end` is discovered, the
/// predecessor chain already describes a minimum-hop path.
fn bfs_to_target(
    builder: &NetworkGraphBuilder,
    start: &str,
    end: &str,
) -> Option<HashMap<String, String>> {
    let mut visited: HashSet<String> = HashSet::new();
    let mut predecessors: HashMap<String, String> = HashMap::new();
    let mut frontier: VecDeque<String> = VecDeque::new();

    visited.insert(start.to_string());
    frontier.push_back(start.to_string());

    while let Some(current) = frontier.pop_front() {
        for neighbor in builder.neighbors_sorted(&current) {
            if !visited.insert(neighbor.clone()) {
                continue;
            }
            predecessors.insert(neighbor.clone(), current.clone());
            if neighbor == end {
                return Some(predecessors);
            }
            frontier.push_back(neighbor);
        }
    }
    None
}

fn reconstruct(
    builder: &NetworkGraphBuilder,
    start: &str,
    end: &str,
    predecessors: &HashMap<String, String>,
) -> ConnectionPath {
    let mut members = vec![end.to_string()];
    let mut current = end.to_string();

    while current != start {
        let Some(prev) = predecessors.get(&current) else {
            break;
        };
        members.push(prev.clone());
        current = prev.clone();
    }
    members.reverse();

    let hops = build_hops(builder, &members);
    ConnectionPath {
        degrees: members.len().saturating_sub(1),
        members,
        hops,
    }
}

fn build_hops(builder: &NetworkGraphBuilder, members: &[String]) -> Vec<PathHop> {
    members
        .windows(2)
        .filter_map(|window| match window {
            [from, to] => Some(PathHop {
                from: from.clone(),
                to: to.clone(),
                shared_league_ids: builder.shared_league_ids(from, to),
            }),
            _ => None,
        })
        .collect()
}

/// Maps every member reachable within `max_degrees` hops to its distance.
/// The start maps to 0; nodes at the cap are not expanded further. An
/// undiscovered start yields an empty map.
#[must_use]
pub fn within_degrees(
    builder: &NetworkGraphBuilder,
    start: &str,
    max_degrees: usize,
) -> HashMap<String, usize> {
    let mut distances: HashMap<String, usize> = HashMap::new();
    if !builder.contains_member(start) {
        return distances;
    }

    let mut frontier: VecDeque<String> = VecDeque::new();
    distances.insert(start.to_string(), 0);
    frontier.push_back(start.to_string());

    while let Some(current) = frontier.pop_front() {
        let Some(&depth) = distances.get(&current) else {
            continue;
        };
        if depth == max_degrees {
            continue;
        }
        for neighbor in builder.neighbors_sorted(&current) {
            if distances.contains_key(&neighbor) {
                continue;
            }
            distances.insert(neighbor.clone(), depth + 1);
            frontier.push_back(neighbor);
        }
    }
    distances
}
