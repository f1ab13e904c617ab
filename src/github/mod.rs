// src/github/mod.rs
//! Reads repositories through the GitHub REST API.
//!
//! This module provides functionality to:
//! - Parse repository references into owner/repo/ref triples.
//! - List the semantic-version tags of a repository.
//! - Detect whether a repository keeps its scaffold under `template/`.
//! - Rewrite remote file paths into paths under a local output directory.
//! - Recursively download a directory tree through the Contents API.

// Declare the sub-modules.
mod anchor;
mod api;
mod download;
pub mod listing;
mod probe;
mod reference;
mod tags;
mod writer;

// Re-export the public-facing API.
pub use anchor::PathAnchor;
pub use api::{GitHubApi, DEFAULT_API_BASE};
pub use download::{DownloadSummary, TreeDownloader};
pub use listing::{ContentEntry, ListingItem};
pub use probe::{has_template_directory, TEMPLATE_DIR};
pub use reference::{parse_reference, RepoReference, DEFAULT_REF};
pub use tags::list_tags;
pub use writer::download_file;
