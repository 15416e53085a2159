// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "leaguelink", version, about = "Fantasy league network explorer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
    /// Print import details to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
    /// Config file (defaults to ./leaguelink.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the network and print a summary
    Stats {
        /// JSON file with the imported league collection
        #[arg(long, short, value_name = "FILE")]
        input: Option<PathBuf>,
    },
    /// Find the shortest connection between two members
    Path {
        #[arg(long, short, value_name = "FILE")]
        input: Option<PathBuf>,
        /// Member id to start from (e.g. sleeper_12345)
        #[arg(long, value_name = "ID")]
        from: String,
        /// Member id to reach
        #[arg(long, value_name = "ID")]
        to: String,
    },
    /// List members within N degrees of a member
    Reach {
        #[arg(long, short, value_name = "FILE")]
        input: Option<PathBuf>,
        #[arg(long, value_name = "ID")]
        from: String,
        /// Maximum degrees of separation (defaults to config)
        #[arg(long, value_name = "N")]
        degrees: Option<usize>,
    },
    /// Export the built graph as JSON for the site renderer
    Export {
        #[arg(long, short, value_name = "FILE")]
        input: Option<PathBuf>,
        /// Destination for the graph JSON
        #[arg(long, short, value_name = "FILE")]
        output: PathBuf,
    },
}
