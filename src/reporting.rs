// src/reporting.rs
//! Console output formatting for network queries.
//!
//! Every renderer builds a `String` rather than printing, so the CLI tests
//! can strip ANSI codes and assert on content.

use std::collections::HashMap;
use std::fmt::Write;

use colored::Colorize;

use crate::network::graph::{GROUP_CROSS_PLATFORM, GROUP_ESPN_ONLY, GROUP_SLEEPER_ONLY};
use crate::network::{ConnectionPath, NetworkGraph, NetworkGraphBuilder};

/// How many members the summary's leaderboard shows.
const TOP_CENTRAL: usize = 5;

/// Network-wide summary: sizes, platform breakdown, most-connected members.
#[must_use]
pub fn render_summary(graph: &NetworkGraph) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", "Network summary".bold());
    let _ = writeln!(
        out,
        "  {} members, {} connections",
        graph.nodes.len(),
        graph.links.len()
    );

    if graph.is_empty() {
        return out;
    }

    let sleeper = count_group(graph, GROUP_SLEEPER_ONLY);
    let espn = count_group(graph, GROUP_ESPN_ONLY);
    let cross = count_group(graph, GROUP_CROSS_PLATFORM);
    let _ = writeln!(
        out,
        "  {sleeper} Sleeper-only, {espn} ESPN-only, {cross} cross-platform"
    );

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", "Most connected".bold());
    for node in top_central(graph) {
        let _ = writeln!(
            out,
            "  {:>6.3}  {} ({})",
            node.centrality,
            node.name.cyan(),
            node.id.dimmed()
        );
    }
    out
}

fn count_group(graph: &NetworkGraph, group: u8) -> usize {
    graph.nodes.iter().filter(|n| n.group == group).count()
}

fn top_central(graph: &NetworkGraph) -> Vec<&crate::network::Node> {
    let mut nodes: Vec<_> = graph.nodes.iter().collect();
    nodes.sort_by(|a, b| {
        b.centrality
            .partial_cmp(&a.centrality)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    nodes.truncate(TOP_CENTRAL);
    nodes
}

/// Renders a found path as a hop-by-hop chain, or a no-connection notice.
#[must_use]
pub fn render_path(
    builder: &NetworkGraphBuilder,
    from: &str,
    to: &str,
    path: Option<&ConnectionPath>,
) -> String {
    let mut out = String::new();

    let Some(path) = path else {
        let _ = writeln!(
            out,
            "{}",
            format!(
                "No connection between {} and {}",
                builder.member_name(from),
                builder.member_name(to)
            )
            .yellow()
        );
        return out;
    };

    let _ = writeln!(
        out,
        "{} {}",
        "Connection found:".bold(),
        degrees_label(path.degrees)
    );
    let _ = writeln!(out, "  {}", builder.member_name(from).cyan());
    for hop in &path.hops {
        let leagues = hop
            .shared_league_ids
            .iter()
            .map(|id| league_name(builder, id))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(
            out,
            "  {} {} {}",
            "└─".blue(),
            builder.member_name(&hop.to).cyan(),
            format!("(via {leagues})").dimmed()
        );
    }
    out
}

fn degrees_label(degrees: usize) -> String {
    if degrees == 1 {
        "1 degree of separation".to_string()
    } else {
        format!("{degrees} degrees of separation")
    }
}

fn league_name<'a>(builder: &'a NetworkGraphBuilder, league_id: &'a str) -> &'a str {
    builder
        .leagues
        .iter()
        .find(|l| l.id == league_id)
        .map_or(league_id, |l| l.name.as_str())
}

/// Renders a reach query as distance rings.
#[must_use]
pub fn render_reach(
    builder: &NetworkGraphBuilder,
    from: &str,
    max_degrees: usize,
    distances: &HashMap<String, usize>,
) -> String {
    let mut out = String::new();

    if distances.is_empty() {
        let _ = writeln!(out, "{}", format!("Unknown member: {from}").yellow());
        return out;
    }

    let _ = writeln!(
        out,
        "{} within {} of {}",
        "Reach".bold(),
        degrees_label(max_degrees),
        builder.member_name(from).cyan()
    );

    for ring in 1..=max_degrees {
        let mut ids: Vec<&String> = distances
            .iter()
            .filter(|(_, &d)| d == ring)
            .map(|(id, _)| id)
            .collect();
        if ids.is_empty() {
            continue;
        }
        ids.sort();

        let _ = writeln!(out, "  {} {} away:", ring, hop_label(ring));
        for id in ids {
            let _ = writeln!(
                out,
                "    {} {}",
                builder.member_name(id).cyan(),
                format!("({id})").dimmed()
            );
        }
    }
    out
}

fn hop_label(ring: usize) -> &'static str {
    if ring == 1 {
        "hop"
    } else {
        "hops"
    }
}
