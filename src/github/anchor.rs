//! Maps remote file paths to paths relative to the output directory.
//!
//! Raw file URLs have the layout `/<owner>/<repo>/<ref>/<path>`. The anchor is
//! the prefix of that layout which corresponds to the output root; whatever
//! follows its last occurrence is the local relative path.

use super::probe::TEMPLATE_DIR;
use super::reference::RepoReference;
use crate::errors::{Error, Result};
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// The remote path prefix stripped from every downloaded file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathAnchor(String);

impl PathAnchor {
    /// Builds `/<owner>/<repo>/<ref>/template/` when `templated`, else `/<owner>/<repo>/<ref>/`.
    ///
    /// # Examples
    /// ```
    /// use plugin_scaffold::github::{parse_reference, PathAnchor};
    ///
    /// let reference = parse_reference("https://github.com/twilio/flex-plugin-builder").unwrap();
    /// assert_eq!(
    ///     PathAnchor::new(&reference, true).as_str(),
    ///     "/twilio/flex-plugin-builder/master/template/"
    /// );
    /// ```
    pub fn new(reference: &RepoReference, templated: bool) -> Self {
        let mut anchor = format!(
            "/{}/{}/{}/",
            reference.owner, reference.repo, reference.git_ref
        );
        if templated {
            anchor.push_str(TEMPLATE_DIR);
            anchor.push('/');
        }
        Self(anchor)
    }

    /// Wraps an arbitrary anchor string.
    pub fn from_raw(anchor: impl Into<String>) -> Self {
        Self(anchor.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the part of `remote_path` after the last occurrence of the anchor.
    ///
    /// # Errors
    /// `Error::AnchorNotFound` if the anchor does not occur in `remote_path`.
    pub fn relative_to<'a>(&self, remote_path: &'a str) -> Result<&'a str> {
        remote_path
            .rfind(&self.0)
            .map(|idx| &remote_path[idx + self.0.len()..])
            .ok_or_else(|| Error::AnchorNotFound {
                path: remote_path.to_string(),
                anchor: self.0.clone(),
            })
    }

    /// Like [`relative_to`](Self::relative_to), but returns a path that is
    /// guaranteed to stay inside whatever directory it is joined onto.
    ///
    /// # Errors
    /// `Error::UnsafePath` if the relative part is empty, absolute, or climbs
    /// out with `..`.
    pub fn local_path(&self, remote_path: &str) -> Result<PathBuf> {
        let relative = self.relative_to(remote_path)?;
        let unsafe_path = || Error::UnsafePath {
            path: relative.to_string(),
        };

        let mut local = PathBuf::new();
        for component in Path::new(relative).components() {
            match component {
                Component::Normal(part) => local.push(part),
                Component::CurDir => {}
                _ => return Err(unsafe_path()),
            }
        }
        if local.as_os_str().is_empty() {
            return Err(unsafe_path());
        }
        Ok(local)
    }
}

impl fmt::Display for PathAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
