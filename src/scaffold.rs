//! Wires the template check, path anchor and tree downloader into one scaffold run.

use crate::errors::Result;
use crate::github::{
    has_template_directory, DownloadSummary, GitHubApi, PathAnchor, RepoReference,
    TreeDownloader, TEMPLATE_DIR,
};
use crate::progress::ProgressReporter;
use crate::transport::HttpClient;
use std::path::Path;
use std::sync::Arc;

/// How the remote tree should be walked.
#[derive(Clone, Default)]
pub struct DownloadOptions {
    /// Download sibling entries in parallel.
    pub parallel: bool,
    /// Receives a tick for every file written.
    pub progress: Option<Arc<dyn ProgressReporter>>,
}

/// Which remote subtree a scaffold run mirrors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadPlan {
    /// Listing URL of the subtree root.
    pub listing_url: String,
    /// Anchor that maps remote paths under that root to local ones.
    pub anchor: PathAnchor,
    /// Whether the subtree is the repository's `template/` directory.
    pub templated: bool,
}

/// Decides which subtree to mirror: `template/` when the repository has one, else the root.
pub fn plan_download(
    client: &dyn HttpClient,
    api: &GitHubApi,
    reference: &RepoReference,
) -> Result<DownloadPlan> {
    let templated = has_template_directory(client, api, reference)?;
    let listing_url = api.contents_url(reference, templated.then_some(TEMPLATE_DIR));
    Ok(DownloadPlan {
        listing_url,
        anchor: PathAnchor::new(reference, templated),
        templated,
    })
}

/// Mirrors the repository's scaffold into `output_dir`.
///
/// The progress reporter in `options`, if any, is finished when the run ends:
/// with a file count on success, cleared on failure.
pub fn download_repo(
    client: &dyn HttpClient,
    api: &GitHubApi,
    reference: &RepoReference,
    output_dir: &Path,
    options: DownloadOptions,
) -> Result<DownloadSummary> {
    let progress = options.progress.clone();
    let result = mirror(client, api, reference, output_dir, options);
    if let Some(progress) = progress {
        match &result {
            Ok(summary) => progress.finish_with_message(format!("{} files written", summary.files)),
            Err(_) => progress.finish_and_clear(),
        }
    }
    result
}

fn mirror(
    client: &dyn HttpClient,
    api: &GitHubApi,
    reference: &RepoReference,
    output_dir: &Path,
    options: DownloadOptions,
) -> Result<DownloadSummary> {
    let plan = plan_download(client, api, reference)?;
    log::info!(
        "Downloading {} of {}/{}@{} into '{}'",
        if plan.templated { "template directory" } else { "repository" },
        reference.owner,
        reference.repo,
        reference.git_ref,
        output_dir.display()
    );
    log::debug!("Listing {} with anchor '{}'", plan.listing_url, plan.anchor);

    TreeDownloader::new(client)
        .parallel(options.parallel)
        .progress(options.progress)
        .download(&plan.listing_url, output_dir, &plan.anchor)
}
