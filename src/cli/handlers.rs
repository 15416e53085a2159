// src/cli/handlers.rs
//! Command handlers. Each returns the rendered output so the binary owns
//! all printing and the tests can assert on content directly.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{LinkError, Result};
use crate::import;
use crate::network::NetworkGraphBuilder;
use crate::reporting;

pub fn run_stats(input: Option<PathBuf>, config: &Config) -> Result<String> {
    let builder = load_builder(input, config)?;
    Ok(reporting::render_summary(&builder.build_graph()))
}

pub fn run_path(input: Option<PathBuf>, from: &str, to: &str, config: &Config) -> Result<String> {
    let builder = load_builder(input, config)?;
    let path = builder.find_shortest_path(from, to);
    Ok(reporting::render_path(&builder, from, to, path.as_ref()))
}

pub fn run_reach(
    input: Option<PathBuf>,
    from: &str,
    degrees: Option<usize>,
    config: &Config,
) -> Result<String> {
    let builder = load_builder(input, config)?;
    let max_degrees = degrees.unwrap_or(config.max_degrees);
    let distances = builder.find_within_degrees(from, max_degrees);
    Ok(reporting::render_reach(&builder, from, max_degrees, &distances))
}

pub fn run_export(input: Option<PathBuf>, output: &Path, config: &Config) -> Result<String> {
    let builder = load_builder(input, config)?;
    let graph = builder.build_graph();

    let json = serde_json::to_string_pretty(&graph).map_err(|source| LinkError::Json {
        source,
        path: output.to_path_buf(),
    })?;
    fs::write(output, json).map_err(|source| LinkError::Io {
        source,
        path: output.to_path_buf(),
    })?;

    Ok(format!(
        "Wrote {} nodes and {} links to {}",
        graph.nodes.len(),
        graph.links.len(),
        output.display()
    ))
}

fn resolve_input(flag: Option<PathBuf>, config: &Config) -> Result<PathBuf> {
    flag.or_else(|| config.input.clone()).ok_or_else(|| {
        LinkError::Config(
            "no input file given (pass --input or set `input` in leaguelink.toml)".to_string(),
        )
    })
}

fn load_builder(input: Option<PathBuf>, config: &Config) -> Result<NetworkGraphBuilder> {
    let input = resolve_input(input, config)?;
    let leagues = import::load_leagues(&input)?;
    let leagues = import::apply_filters(leagues, config);

    if config.verbose {
        eprintln!("loaded {} leagues from {}", leagues.len(), input.display());
    }
    Ok(NetworkGraphBuilder::new(leagues))
}
