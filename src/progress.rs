// src/progress.rs

//! Defines a trait for reporting progress while files are downloaded.
#[cfg(feature = "progress")]
use indicatif::{ProgressBar, ProgressStyle};

/// A trait for reporting progress, abstracting over specific implementations like `indicatif`.
///
/// The total number of files is unknown until the remote tree has been fully
/// walked, so reporters only count upwards.
///
/// # Examples
///
/// ```
/// use plugin_scaffold::progress::ProgressReporter;
/// use std::sync::atomic::{AtomicU64, Ordering};
///
/// struct Counter(AtomicU64);
/// impl ProgressReporter for Counter {
///     fn inc(&self, delta: u64) {
///         self.0.fetch_add(delta, Ordering::Relaxed);
///     }
///     fn set_message(&self, _msg: String) {}
///     fn finish_with_message(&self, _msg: String) {}
///     fn finish_and_clear(&self) {}
/// }
///
/// let counter = Counter(AtomicU64::new(0));
/// counter.inc(2);
/// assert_eq!(counter.0.load(Ordering::Relaxed), 2);
/// ```
pub trait ProgressReporter: Send + Sync {
    /// Advances the number of completed items.
    fn inc(&self, delta: u64);
    /// Sets a descriptive message for the current item (e.g., the file just written).
    fn set_message(&self, msg: String);
    /// Finishes the progress reporting with a final message.
    fn finish_with_message(&self, msg: String);
    /// Stops reporting and removes any output, used when a run fails.
    fn finish_and_clear(&self);
}

/// A `ProgressReporter` that does nothing.
pub struct NoOpProgress;

impl ProgressReporter for NoOpProgress {
    fn inc(&self, _delta: u64) {}
    fn set_message(&self, _msg: String) {}
    fn finish_with_message(&self, _msg: String) {}
    fn finish_and_clear(&self) {}
}

/// An implementation of `ProgressReporter` using an `indicatif` spinner.
#[cfg(feature = "progress")]
#[derive(Clone)]
pub struct IndicatifProgress {
    bar: ProgressBar,
}

#[cfg(feature = "progress")]
impl IndicatifProgress {
    /// Creates a new spinner with a file counter.
    pub fn new() -> Self {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) =
            ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {pos} files {wide_msg}")
        {
            pb.set_style(style);
        }
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        Self { bar: pb }
    }
}

#[cfg(feature = "progress")]
impl Default for IndicatifProgress {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "progress")]
impl ProgressReporter for IndicatifProgress {
    fn inc(&self, delta: u64) {
        self.bar.inc(delta);
    }

    fn set_message(&self, msg: String) {
        self.bar.set_message(msg);
    }

    fn finish_with_message(&self, msg: String) {
        self.bar.finish_with_message(msg);
    }

    fn finish_and_clear(&self) {
        self.bar.finish_and_clear();
    }
}
