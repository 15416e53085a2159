// src/import.rs
//! Import boundary for league collections.
//!
//! The sync service talks to the fantasy platforms over HTTP and drops a
//! JSON array of leagues for us; everything here is structural validation
//! of that hand-off. Leagues with zero or one member are legal (they
//! contribute discovery but no edges), so only malformed ids are rejected.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::error::{LinkError, Result};
use crate::types::League;

/// Reads and validates a league collection from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not a JSON array of
/// leagues, or fails [`validate`].
pub fn load_leagues(path: &Path) -> Result<Vec<League>> {
    let content = fs::read_to_string(path).map_err(|source| LinkError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    let leagues: Vec<League> = serde_json::from_str(&content).map_err(|source| LinkError::Json {
        source,
        path: path.to_path_buf(),
    })?;
    validate(&leagues)?;
    Ok(leagues)
}

/// Structural checks on an imported collection: league ids must be
/// non-empty and unique, member ids non-empty. Duplicate member entries
/// within one roster are tolerated and collapse during adjacency building.
///
/// # Errors
///
/// Returns [`LinkError::InvalidLeague`] naming the offending league.
pub fn validate(leagues: &[League]) -> Result<()> {
    let mut seen_ids: HashSet<&str> = HashSet::new();

    for league in leagues {
        if league.id.trim().is_empty() {
            return Err(LinkError::InvalidLeague {
                league_id: league.name.clone(),
                reason: "empty league id".to_string(),
            });
        }
        if !seen_ids.insert(league.id.as_str()) {
            return Err(LinkError::InvalidLeague {
                league_id: league.id.clone(),
                reason: "duplicate league id".to_string(),
            });
        }
        for member in &league.members {
            if member.id.trim().is_empty() {
                return Err(LinkError::InvalidLeague {
                    league_id: league.id.clone(),
                    reason: format!("member '{}' has an empty id", member.name),
                });
            }
        }
    }
    Ok(())
}

/// Narrows a collection by the platform/season/sport filters, if set.
#[must_use]
pub fn apply_filters(leagues: Vec<League>, config: &Config) -> Vec<League> {
    leagues
        .into_iter()
        .filter(|league| config.platform.map_or(true, |p| league.platform == p))
        .filter(|league| {
            config
                .season
                .as_ref()
                .map_or(true, |season| &league.season == season)
        })
        .filter(|league| {
            config
                .sport
                .as_ref()
                .map_or(true, |sport| &league.sport == sport)
        })
        .collect()
}
