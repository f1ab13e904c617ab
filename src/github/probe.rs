//! Detects whether a repository ships its scaffold under a `template/` directory.

use super::api::GitHubApi;
use super::listing::ListingItem;
use super::reference::RepoReference;
use crate::errors::Result;
use crate::transport::{get_json, HttpClient};

/// The directory that, when present at the repository root, is scaffolded instead of the root.
pub const TEMPLATE_DIR: &str = "template";

/// Lists the root of the reference's ref and reports whether it has a `template/` directory.
///
/// A root-level *file* named `template` does not count.
pub fn has_template_directory(
    client: &dyn HttpClient,
    api: &GitHubApi,
    reference: &RepoReference,
) -> Result<bool> {
    let url = api.contents_url(reference, None);
    log::debug!("Probing repository root for a '{}' directory: {}", TEMPLATE_DIR, url);
    let items: Vec<ListingItem> = get_json(client, &url)?;
    Ok(items.iter().any(|item| item.is_dir_named(TEMPLATE_DIR)))
}
