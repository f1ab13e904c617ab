//! Defines the `ScaffoldConfig` struct used to drive a scaffold run.
//!
//! This module consolidates the settings gathered from the CLI (or set
//! programmatically through [`ConfigBuilder`]) into a validated, typed form.

use crate::github::{GitHubApi, RepoReference};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

pub use builder::ConfigBuilder;
mod builder;

/// Default timeout for every HTTP request.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// The validated settings for one scaffold run.
#[derive(Clone)]
pub struct ScaffoldConfig {
    /// The repository the scaffold is read from.
    pub reference: RepoReference,
    /// The local directory the scaffold is written into.
    pub output_dir: PathBuf,
    /// Overrides the API root derived from the reference's host.
    pub api_base: Option<String>,
    /// Token for authenticated requests. `GITHUB_TOKEN` is used when unset.
    pub token: Option<String>,
    /// The `User-Agent` sent with every request (required by the GitHub API).
    pub user_agent: String,
    /// Per-request timeout.
    pub timeout: Option<Duration>,
    /// Whether sibling entries of a listing are downloaded in parallel.
    pub parallel: bool,
}

impl ScaffoldConfig {
    /// The API root requests are issued against.
    pub fn api(&self) -> GitHubApi {
        match &self.api_base {
            Some(base) => GitHubApi::new(base.as_str()),
            None => GitHubApi::for_reference(&self.reference),
        }
    }
}

// Custom Debug implementation so the token never reaches the logs.
impl fmt::Debug for ScaffoldConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScaffoldConfig")
            .field("reference", &self.reference)
            .field("output_dir", &self.output_dir)
            .field("api_base", &self.api_base)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .field("parallel", &self.parallel)
            .finish()
    }
}
