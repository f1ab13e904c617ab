//! The `plugin_scaffold` prelude for convenient library usage.
//!
//! This module re-exports the most commonly used types, traits, and functions.
//!
//! # Example
//!
//! ```
//! use plugin_scaffold::prelude::*;
//! # fn main() -> Result<()> {
//!
//! let reference = parse_reference("https://github.com/twilio/flex-plugin-builder/tree/v4.0.0")?;
//! let anchor = PathAnchor::new(&reference, true);
//! assert_eq!(anchor.as_str(), "/twilio/flex-plugin-builder/v4.0.0/template/");
//!
//! # Ok(())
//! # }
//! ```

pub use crate::config::{ConfigBuilder, ScaffoldConfig};
pub use crate::errors::{Error, Result};
pub use crate::github::{
    download_file, has_template_directory, list_tags, parse_reference, ContentEntry,
    DownloadSummary, GitHubApi, PathAnchor, RepoReference, TreeDownloader,
};
pub use crate::progress::{NoOpProgress, ProgressReporter};
pub use crate::scaffold::{download_repo, plan_download, DownloadOptions, DownloadPlan};
pub use crate::transport::{HttpClient, HttpResponse, ReqwestClient};
pub use crate::{create, tags};
