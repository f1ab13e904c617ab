//! `plugin-scaffold` is a library and command-line tool that creates a new
//! plugin project by mirroring a template directory from a GitHub repository.
//!
//! A scaffold run has four steps:
//! 1.  **Resolve**: parse the repository URL into an owner/repo/ref triple.
//! 2.  **Probe**: check whether the repository root has a `template/` directory.
//! 3.  **Anchor**: derive the remote path prefix that maps onto the output directory.
//! 4.  **Download**: walk the remote listing recursively and write every file.
//!
//! All network access goes through the [`transport::HttpClient`] trait, so the
//! steps can be driven against canned responses as easily as against GitHub.
//!
//! # Example: Library Usage
//!
//! ```no_run
//! use plugin_scaffold::{create, ConfigBuilder};
//!
//! let config = ConfigBuilder::new()
//!     .repository("https://github.com/twilio/flex-plugin-builder/tree/main")
//!     .output_dir("plugin-sample")
//!     .build()
//!     .unwrap();
//!
//! let summary = create(&config, None).unwrap();
//! println!("Wrote {} files", summary.files);
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod github;
pub mod prelude;
pub mod progress;
pub mod scaffold;
pub mod transport;

// Re-export key public types for easier use as a library
pub use config::{ConfigBuilder, ScaffoldConfig};
pub use errors::{Error, Result};
pub use github::DownloadSummary;

use crate::progress::ProgressReporter;
use crate::scaffold::{download_repo, DownloadOptions};
use crate::transport::ReqwestClient;
use std::sync::Arc;

/// Builds the HTTP client described by `config`.
pub fn http_client(config: &ScaffoldConfig) -> Result<ReqwestClient> {
    ReqwestClient::new(&config.user_agent, config.token.as_deref(), config.timeout)
}

/// Scaffolds the configured repository into the configured output directory.
///
/// This is the primary entry point mirroring the `create` command.
///
/// # Errors
/// Returns the first error encountered. Files written before it remain on disk.
pub fn create(
    config: &ScaffoldConfig,
    progress: Option<Arc<dyn ProgressReporter>>,
) -> Result<DownloadSummary> {
    let client = http_client(config)?;
    let options = DownloadOptions {
        parallel: config.parallel,
        progress,
    };
    download_repo(
        &client,
        &config.api(),
        &config.reference,
        &config.output_dir,
        options,
    )
}

/// Lists the semantic-version tags of the configured repository, in API order.
pub fn tags(config: &ScaffoldConfig) -> Result<Vec<String>> {
    let client = http_client(config)?;
    github::list_tags(&client, &config.api(), &config.reference)
}
