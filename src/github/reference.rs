//! Handles parsing of repository references such as
//! `https://github.com/owner/repo/tree/some-ref`.

use crate::errors::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// The ref used when a reference does not name one explicitly.
pub const DEFAULT_REF: &str = "master";

/// The components of a parsed repository reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoReference {
    /// The host the repository lives on (e.g., `github.com`).
    pub host: String,
    /// The owning user or organization.
    pub owner: String,
    /// The repository name, without any `.git` suffix.
    pub repo: String,
    /// The branch, tag or commit to read from. Defaults to [`DEFAULT_REF`].
    pub git_ref: String,
    /// Whether `host` is the public github.com host rather than an Enterprise install.
    pub is_default_host: bool,
}

/// Regex for `[scheme://]host/owner/repo[.git][/tree/ref][/][?query][#fragment]`.
static REFERENCE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:[A-Za-z][A-Za-z0-9+.\-]*://)?([^/?#\s]+)/([^/?#\s]+)/([^/?#\s]+?)(?:\.git)?(?:/tree/([^?#\s]+?))?/*(?:[?#].*)?$",
    )
    .unwrap()
});

/// Parses a repository reference into its constituent parts.
///
/// Trailing slashes, querystrings and fragments are ignored. A ref may contain
/// slashes (`.../tree/feature/new-ui`).
///
/// # Errors
/// Returns `Error::MalformedReference` if the input does not have the shape
/// `<host>/<owner>/<repo>[/tree/<ref>]`.
///
/// # Examples
/// ```
/// use plugin_scaffold::github::parse_reference;
///
/// let parsed = parse_reference("https://github.com/twilio/flex-plugin-builder").unwrap();
/// assert_eq!(parsed.owner, "twilio");
/// assert_eq!(parsed.repo, "flex-plugin-builder");
/// assert_eq!(parsed.git_ref, "master");
/// assert!(parsed.is_default_host);
///
/// assert!(parse_reference("/broken").is_err());
/// ```
pub fn parse_reference(input: &str) -> Result<RepoReference> {
    let malformed = || Error::MalformedReference {
        input: input.to_string(),
    };

    let caps = REFERENCE_RE.captures(input.trim()).ok_or_else(malformed)?;
    let host = caps.get(1).ok_or_else(malformed)?.as_str();
    let owner = caps.get(2).ok_or_else(malformed)?.as_str();
    let repo = caps.get(3).ok_or_else(malformed)?.as_str();
    let git_ref = caps
        .get(4)
        .map_or(DEFAULT_REF, |m| m.as_str().trim_end_matches('/'));

    let normalized_host = host.to_ascii_lowercase();
    let is_default_host = normalized_host == "github.com" || normalized_host == "www.github.com";

    Ok(RepoReference {
        host: host.to_string(),
        owner: owner.to_string(),
        repo: repo.to_string(),
        git_ref: git_ref.to_string(),
        is_default_host,
    })
}
