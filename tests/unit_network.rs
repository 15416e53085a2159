// tests/unit_network.rs
//! Graph construction properties: symmetry, weights, dedup, grouping.

use leaguelink_core::network::graph::{
    GROUP_CROSS_PLATFORM, GROUP_ESPN_ONLY, GROUP_SLEEPER_ONLY,
};
use leaguelink_core::network::NetworkGraphBuilder;
use leaguelink_core::types::{League, LeagueSettings, MemberRef, Platform};

fn member(id: &str, name: &str) -> MemberRef {
    MemberRef {
        id: id.into(),
        name: name.into(),
        avatar: None,
    }
}

fn league(id: &str, platform: Platform, roster: &[(&str, &str)]) -> League {
    League {
        id: id.into(),
        name: format!("League {id}"),
        platform,
        season: "2023".into(),
        sport: "nfl".into(),
        members: roster.iter().map(|(id, name)| member(id, name)).collect(),
        settings: LeagueSettings::default(),
    }
}

/// League1 = {a, b, c} on Sleeper, League2 = {b, c, d} on ESPN.
fn fixture() -> Vec<League> {
    vec![
        league(
            "l1",
            Platform::Sleeper,
            &[("a", "Alice"), ("b", "Bob"), ("c", "Cara")],
        ),
        league(
            "l2",
            Platform::Espn,
            &[("b", "Bobby"), ("c", "Cara"), ("d", "Dan")],
        ),
    ]
}

#[test]
fn test_links_symmetric_and_deduplicated() {
    let graph = NetworkGraphBuilder::new(fixture()).build_graph();

    assert_eq!(graph.links.len(), 5, "a-b, a-c, b-c, b-d, c-d");
    assert!(graph.link_between("a", "b").is_some());
    assert!(graph.link_between("b", "a").is_some(), "order-independent");
    assert!(
        graph.link_between("a", "d").is_none(),
        "a and d share no league"
    );
}

#[test]
fn test_weight_counts_shared_leagues() {
    let graph = NetworkGraphBuilder::new(fixture()).build_graph();

    let bc = graph.link_between("b", "c").expect("b-c link");
    assert_eq!(bc.weight, 2);
    assert_eq!(bc.shared_leagues.len(), 2);

    let ab = graph.link_between("a", "b").expect("a-b link");
    assert_eq!(ab.weight, 1);
    assert_eq!(ab.shared_leagues[0].name, "League l1");
}

#[test]
fn test_no_self_links() {
    let mut leagues = fixture();
    // A roster listing the same member twice must not self-link.
    leagues.push(league(
        "l3",
        Platform::Sleeper,
        &[("a", "Alice"), ("a", "Alice"), ("b", "Bob")],
    ));
    let graph = NetworkGraphBuilder::new(leagues).build_graph();

    assert!(graph.links.iter().all(|l| l.source != l.target));
    assert!(graph.link_between("a", "a").is_none());
}

#[test]
fn test_group_classification() {
    let graph = NetworkGraphBuilder::new(fixture()).build_graph();

    assert_eq!(graph.node("a").expect("node a").group, GROUP_SLEEPER_ONLY);
    assert_eq!(graph.node("d").expect("node d").group, GROUP_ESPN_ONLY);
    assert_eq!(graph.node("b").expect("node b").group, GROUP_CROSS_PLATFORM);
    assert_eq!(graph.node("c").expect("node c").group, GROUP_CROSS_PLATFORM);
}

#[test]
fn test_first_league_wins_identity() {
    let mut leagues = fixture();
    leagues[0].members[1].avatar = Some("bob.png".into());
    leagues[1].members[0].avatar = Some("bobby.png".into());
    let graph = NetworkGraphBuilder::new(leagues).build_graph();

    let b = graph.node("b").expect("node b");
    assert_eq!(b.name, "Bob", "first occurrence establishes the name");
    assert_eq!(b.avatar.as_deref(), Some("bob.png"));
}

#[test]
fn test_node_membership_lists() {
    let graph = NetworkGraphBuilder::new(fixture()).build_graph();

    assert_eq!(graph.node("a").expect("node a").leagues, vec!["l1"]);
    assert_eq!(graph.node("b").expect("node b").leagues, vec!["l1", "l2"]);
    assert_eq!(
        graph.node("b").expect("node b").platforms,
        vec![Platform::Sleeper, Platform::Espn]
    );
}

#[test]
fn test_centrality_scores() {
    let graph = NetworkGraphBuilder::new(fixture()).build_graph();

    // 4 members total: b touches everyone, a only b and c.
    let b = graph.node("b").expect("node b");
    assert!((b.centrality - 1.0).abs() < 1e-9);

    let a = graph.node("a").expect("node a");
    assert!((a.centrality - 2.0 / 3.0).abs() < 1e-9);

    assert!(graph
        .nodes
        .iter()
        .all(|n| (0.0..=1.0).contains(&n.centrality)));
}

#[test]
fn test_empty_input_builds_empty_graph() {
    let graph = NetworkGraphBuilder::new(Vec::new()).build_graph();
    assert!(graph.is_empty());
    assert!(graph.links.is_empty());
}

#[test]
fn test_single_member_league() {
    let leagues = vec![league("solo", Platform::Sleeper, &[("a", "Alice")])];
    let graph = NetworkGraphBuilder::new(leagues).build_graph();

    assert_eq!(graph.nodes.len(), 1);
    assert!(graph.links.is_empty());
    assert_eq!(graph.node("a").expect("node a").centrality, 0.0);
}

#[test]
fn test_zero_member_league_is_a_noop() {
    let leagues = vec![league("empty", Platform::Espn, &[])];
    let graph = NetworkGraphBuilder::new(leagues).build_graph();
    assert!(graph.is_empty());
}

#[test]
fn test_rebuilds_are_structurally_identical() {
    let builder = NetworkGraphBuilder::new(fixture());
    let first = builder.build_graph();
    let second = builder.build_graph();

    let ids = |g: &leaguelink_core::network::NetworkGraph| {
        g.nodes.iter().map(|n| n.id.clone()).collect::<Vec<_>>()
    };
    let pairs = |g: &leaguelink_core::network::NetworkGraph| {
        g.links
            .iter()
            .map(|l| (l.source.clone(), l.target.clone()))
            .collect::<Vec<_>>()
    };
    assert_eq!(ids(&first), ids(&second));
    assert_eq!(pairs(&first), pairs(&second));
}
