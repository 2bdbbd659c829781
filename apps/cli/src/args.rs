//! # CLI Argument Definitions
//!
//! Command-line interface of the `limebird` binary, built with `clap` derive.

use clap::{Parser, Subcommand};
use limebird::domain::environment::ExecutionMode;
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "limebird")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Inspect and query the limebird.org site registry")]
pub struct Cli {
    /// Site configuration file (defaults to ./site.{toml,json,yaml} when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Execution mode; overrides LIMEBIRD_ENV
    #[arg(long, global = true)]
    pub mode: Option<ExecutionMode>,

    /// Log at debug level on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the mode and the whole configuration as JSON
    Show,
    /// Load and validate the configuration
    Validate,
    /// Print the site URL for the active mode
    SiteUrl,
    /// Build an address on the site's email domain
    Email {
        /// Local part, e.g. 'dan'
        local: String,
    },
    /// Tell whether a URL belongs to one of the site's domains
    CheckDomain { url: String },
    /// List subdomain labels and URLs
    Subdomains,
    /// Print the tracker URL of a project (default project when omitted)
    ProjectUrl { key: Option<String> },
    /// Print the tracker URL of an issue, e.g. 'SCRUM-42'
    IssueUrl { key: String },
    /// Tell whether an issue key is well formed
    IssueKey { key: String },
    /// Show a tracker project by key
    Project { key: String },
    /// List the marketing navigation
    Nav,
}
