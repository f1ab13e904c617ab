//! Builds GitHub REST API URLs for a repository reference.

use super::reference::RepoReference;
use url::form_urlencoded;

/// The API root for repositories hosted on github.com.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// The REST API root that listing and tag requests are issued against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubApi {
    base: String,
}

impl GitHubApi {
    /// Creates an API root from an explicit base URL (e.g., a test server or proxy).
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// Picks the API root for the host a reference points at.
    ///
    /// github.com uses `https://api.github.com`; any other host is treated as
    /// a GitHub Enterprise install serving the API under `/api/v3`.
    pub fn for_reference(reference: &RepoReference) -> Self {
        if reference.is_default_host {
            Self::new(DEFAULT_API_BASE)
        } else {
            Self::new(format!("https://{}/api/v3", reference.host))
        }
    }

    /// The API root without a trailing slash.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// URL listing the contents of `subpath` (or the repository root) at the reference's ref.
    pub fn contents_url(&self, reference: &RepoReference, subpath: Option<&str>) -> String {
        let suffix = match subpath.map(|p| p.trim_matches('/')) {
            Some(p) if !p.is_empty() => format!("/{}", p),
            _ => String::new(),
        };
        // Refs may legally contain `+` or `&`, so the value is form-encoded.
        let query: String = form_urlencoded::Serializer::new(String::new())
            .append_pair("ref", &reference.git_ref)
            .finish();
        format!(
            "{}/repos/{}/{}/contents{}?{}",
            self.base, reference.owner, reference.repo, suffix, query
        )
    }

    /// URL listing every tag ref of the repository.
    pub fn tags_url(&self, reference: &RepoReference) -> String {
        format!(
            "{}/repos/{}/{}/git/refs/tags",
            self.base, reference.owner, reference.repo
        )
    }
}
