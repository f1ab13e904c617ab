//! Recursively mirrors a remote directory listing onto the local filesystem.
//!
//! The Contents API only ever returns one directory level per request, so the
//! walk issues one listing call per directory and recurses into each `dir`
//! entry with that entry's own listing URL.

use super::anchor::PathAnchor;
use super::listing::{ContentEntry, ListingItem};
use super::writer::download_file;
use crate::errors::{Error, Result};
use crate::progress::{NoOpProgress, ProgressReporter};
use crate::transport::{get_json, HttpClient};
use percent_encoding::percent_decode_str;
use rayon::prelude::*;
use std::iter::Sum;
use std::ops::Add;
use std::path::Path;
use std::sync::Arc;
use url::Url;

/// Counts of what a download walked through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DownloadSummary {
    /// Files written to disk.
    pub files: usize,
    /// Subdirectories descended into.
    pub directories: usize,
}

impl Add for DownloadSummary {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            files: self.files + other.files,
            directories: self.directories + other.directories,
        }
    }
}

impl Sum for DownloadSummary {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// Walks a remote directory listing and writes every file under an output directory.
pub struct TreeDownloader<'a> {
    client: &'a dyn HttpClient,
    parallel: bool,
    progress: Arc<dyn ProgressReporter>,
}

impl<'a> TreeDownloader<'a> {
    /// Creates a downloader that processes sibling entries in parallel.
    pub fn new(client: &'a dyn HttpClient) -> Self {
        Self {
            client,
            parallel: true,
            progress: Arc::new(NoOpProgress),
        }
    }

    /// Enables or disables parallel processing of sibling entries.
    ///
    /// When disabled, entries are handled one at a time in listing order.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Reports each written file to `progress`. `None` keeps the silent default.
    pub fn progress(mut self, progress: Option<Arc<dyn ProgressReporter>>) -> Self {
        self.progress = progress.unwrap_or_else(|| Arc::new(NoOpProgress));
        self
    }

    /// Downloads everything below `listing_url` into `output_dir`.
    ///
    /// Each file's local path is the part of its remote path following
    /// `anchor`, joined onto `output_dir`. The same anchor is used at every
    /// depth because it is derived from the fixed remote root.
    ///
    /// # Errors
    /// The first failure aborts the walk and is returned unchanged. Files
    /// written before the failure are left in place.
    /// - `Error::UnexpectedContentType` for entries that are neither files nor directories.
    /// - `Error::InvalidDownloadUrl` for file entries whose download URL is malformed.
    /// - `Error::MalformedEntry` for files without a download URL or directories without a listing URL.
    /// - Transport, decoding and I/O errors from the listing, fetch and write steps.
    pub fn download(
        &self,
        listing_url: &str,
        output_dir: &Path,
        anchor: &PathAnchor,
    ) -> Result<DownloadSummary> {
        log::debug!("Fetching directory listing: {}", listing_url);
        let items: Vec<ListingItem> = get_json(self.client, listing_url)?;

        if items.is_empty() {
            log::debug!("Listing is empty: {}", listing_url);
            return Ok(DownloadSummary::default());
        }

        if self.parallel {
            items
                .into_par_iter()
                .map(|item| self.download_entry(item, output_dir, anchor))
                .collect::<Result<Vec<_>>>()
                .map(|summaries| summaries.into_iter().sum())
        } else {
            items
                .into_iter()
                .map(|item| self.download_entry(item, output_dir, anchor))
                .sum::<Result<DownloadSummary>>()
        }
    }

    fn download_entry(
        &self,
        item: ListingItem,
        output_dir: &Path,
        anchor: &PathAnchor,
    ) -> Result<DownloadSummary> {
        let entry = ContentEntry::try_from(item)?;
        match &entry {
            ContentEntry::File { download_url, .. } => {
                let remote_path = decoded_path(&download_url)?;
                let local_path = output_dir.join(anchor.local_path(&remote_path)?);
                download_file(self.client, download_url.as_str(), &local_path)?;

                self.progress.inc(1);
                self.progress.set_message(local_path.display().to_string());
                Ok(DownloadSummary {
                    files: 1,
                    directories: 0,
                })
            }
            ContentEntry::Dir { url, .. } => {
                log::debug!("Descending into '{}'", entry.path());
                let nested = self.download(url, output_dir, anchor)?;
                Ok(nested
                    + DownloadSummary {
                        files: 0,
                        directories: 1,
                    })
            }
        }
    }
}

/// The percent-decoded path component of a download URL.
fn decoded_path(url: &Url) -> Result<String> {
    percent_decode_str(url.path())
        .decode_utf8()
        .map(|path| path.into_owned())
        .map_err(|_| Error::InvalidDownloadUrl {
            url: url.to_string(),
        })
}
