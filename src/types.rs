// src/types.rs
use serde::{Deserialize, Serialize};

/// Platform a league was imported from. Member ids are scoped to their
/// platform (`sleeper_12345`), so the tag doubles as an identity namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Sleeper,
    Espn,
}

impl Platform {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sleeper => "Sleeper",
            Self::Espn => "ESPN",
        }
    }
}

/// A member as referenced by a league roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberRef {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Scoring/format settings carried along for display. Never interpreted here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeagueSettings {
    #[serde(default)]
    pub scoring_type: Option<String>,
    #[serde(default)]
    pub team_count: Option<u32>,
    #[serde(default)]
    pub playoff_team_count: Option<u32>,
}

/// An imported league. Immutable input: the network core only ever reads
/// these, and rebuilding from a changed collection means a new builder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct League {
    pub id: String,
    pub name: String,
    pub platform: Platform,
    pub season: String,
    pub sport: String,
    pub members: Vec<MemberRef>,
    #[serde(default)]
    pub settings: LeagueSettings,
}

impl League {
    /// Returns true if the roster references the given member id.
    #[must_use]
    pub fn contains_member(&self, member_id: &str) -> bool {
        self.members.iter().any(|m| m.id == member_id)
    }

    /// Returns true if both members appear on this league's roster.
    #[must_use]
    pub fn shares_pair(&self, a: &str, b: &str) -> bool {
        self.contains_member(a) && self.contains_member(b)
    }
}
