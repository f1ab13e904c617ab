// src/cli.rs

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Scaffolds a new plugin project from a GitHub template repository.
///
/// If the repository has a `template/` directory at its root, only that
/// directory is copied; otherwise the whole repository is mirrored into the
/// output directory.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download a repository's template into a new project directory.
    Create(CreateArgs),
    /// List the semantic-version tags of a repository.
    Tags(RemoteArgs),
}

/// Options shared by every command that talks to the remote repository.
#[derive(Args, Debug)]
pub struct RemoteArgs {
    /// Repository URL, optionally with a ref: https://github.com/<owner>/<repo>[/tree/<ref>]
    pub repository: String,

    /// Base URL of the GitHub REST API (defaults to api.github.com, or <host>/api/v3 for Enterprise hosts).
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Timeout in seconds for each HTTP request.
    #[arg(long, value_name = "SECONDS", default_value_t = crate::config::DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    #[command(flatten)]
    pub remote: RemoteArgs,

    /// Directory to write the project into. Created if missing.
    #[arg(default_value = ".")]
    pub output_dir: PathBuf,

    /// Download entries one at a time instead of in parallel.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub sequential: bool,
}
