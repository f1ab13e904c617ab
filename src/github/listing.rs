//! Models the entries returned by the GitHub Contents API.
//!
//! The API answers every directory listing with a flat JSON array whose
//! objects carry different fields depending on their `type`. [`ListingItem`]
//! is the loose wire shape; [`ContentEntry`] is the checked form the walker
//! operates on.

use crate::errors::{Error, Result};
use serde::Deserialize;
use url::Url;

/// One raw object of a directory listing, exactly as the API sent it.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ListingItem {
    pub name: Option<String>,
    pub path: Option<String>,
    #[serde(rename = "type")]
    pub item_type: Option<String>,
    pub download_url: Option<String>,
    pub url: Option<String>,
}

impl ListingItem {
    /// Returns `true` if this item is a directory with the given name.
    pub fn is_dir_named(&self, name: &str) -> bool {
        self.name.as_deref() == Some(name) && self.item_type.as_deref() == Some("dir")
    }
}

/// A listing entry the walker knows how to handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentEntry {
    /// A regular file with a raw download location.
    File {
        name: String,
        path: String,
        download_url: Url,
    },
    /// A subdirectory with its own listing URL.
    Dir {
        name: String,
        path: String,
        url: String,
    },
}

impl ContentEntry {
    /// Returns the repository-relative path reported by the API.
    pub fn path(&self) -> &str {
        match self {
            ContentEntry::File { path, .. } | ContentEntry::Dir { path, .. } => path,
        }
    }
}

impl TryFrom<ListingItem> for ContentEntry {
    type Error = Error;

    fn try_from(item: ListingItem) -> Result<Self> {
        let name = item.name.unwrap_or_default();
        let path = item.path.unwrap_or_default();
        match item.item_type.as_deref() {
            Some("file") => {
                let raw = item.download_url.ok_or_else(|| Error::MalformedEntry {
                    reason: format!("file '{}' has no download_url", path),
                })?;
                let download_url =
                    Url::parse(&raw).map_err(|_| Error::InvalidDownloadUrl { url: raw.clone() })?;
                Ok(ContentEntry::File {
                    name,
                    path,
                    download_url,
                })
            }
            Some("dir") => {
                let url = item.url.ok_or_else(|| Error::MalformedEntry {
                    reason: format!("directory '{}' has no listing url", path),
                })?;
                Ok(ContentEntry::Dir { name, path, url })
            }
            other => Err(Error::UnexpectedContentType {
                content_type: other.unwrap_or("<missing>").to_string(),
            }),
        }
    }
}
