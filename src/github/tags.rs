//! Lists the semantic-version tags of a repository.

use super::api::GitHubApi;
use super::reference::RepoReference;
use crate::errors::Result;
use crate::transport::{get_json, HttpClient};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

const TAG_PREFIX: &str = "refs/tags/";

/// Strict `MAJOR.MINOR.PATCH[-PRERELEASE]`, with an optional leading `v`.
static SEMVER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^v?((?:0|[1-9]\d*)\.(?:0|[1-9]\d*)\.(?:0|[1-9]\d*)(?:-[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*)?)$")
        .unwrap()
});

/// One element of the `git/refs/tags` response.
#[derive(Deserialize, Debug)]
struct GitRef {
    #[serde(rename = "ref")]
    name: String,
}

/// Fetches the repository's tags and keeps the ones that are semantic versions.
///
/// The leading `v` of a tag is dropped (`v3.1.1` becomes `3.1.1`). Tags that
/// are not semantic versions are skipped silently, and the response order is
/// preserved; callers sort if they need to.
pub fn list_tags(
    client: &dyn HttpClient,
    api: &GitHubApi,
    reference: &RepoReference,
) -> Result<Vec<String>> {
    let url = api.tags_url(reference);
    log::debug!("Fetching tags from: {}", url);
    let refs: Vec<GitRef> = get_json(client, &url)?;
    let tags: Vec<String> = refs.iter().filter_map(|r| semver_tag(&r.name)).collect();
    log::debug!("Found {} semver tags out of {} refs", tags.len(), refs.len());
    Ok(tags)
}

/// Extracts the version from a `refs/tags/<name>` ref, if `<name>` is a semantic version.
fn semver_tag(git_ref: &str) -> Option<String> {
    let name = git_ref.strip_prefix(TAG_PREFIX)?;
    SEMVER_RE
        .captures(name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
