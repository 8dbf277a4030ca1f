use playgen_common::{Entry, Error, LinkTemplate, Result};
use playgen_media::{PlaylistDocument, PlaylistFormat};
use serde::Serialize;
use std::ops::RangeInclusive;
use std::sync::Arc;

use super::{OutputTarget, PipelineConfig};
use crate::verify::{verify_all_with, Checker, HttpChecker, Verdict, Verification};

/// Outside verbose mode, progress is reported once per this many entries
const PROGRESS_INTERVAL: u64 = 10;

/// Progress notification emitted while a run is in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    /// `done` of `total` URLs have been generated.
    Generated { done: u64, total: u64 },
    /// A URL finished verification. Emitted from worker threads in completion
    /// order.
    Checked {
        index: u64,
        url: String,
        reachable: bool,
        done: usize,
        total: usize,
    },
}

/// Progress callback type
pub type ProgressCallback = Box<dyn Fn(&ProgressEvent) + Send + Sync>;

/// Counts reported after a successful run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub output: String,
    pub format: PlaylistFormat,
    /// Size of the requested range.
    pub total: u64,
    /// Entries actually written to the playlist.
    pub written: usize,
    /// Entries dropped because their URL could not be built.
    pub skipped: usize,
    pub verified: bool,
    pub valid: usize,
    pub invalid: usize,
}

/// Generate, optionally verify, and write one playlist.
pub struct Pipeline {
    config: PipelineConfig,
    checker: Option<Arc<dyn Checker>>,
    progress_callback: Option<ProgressCallback>,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            checker: None,
            progress_callback: None,
        }
    }

    /// Use `checker` instead of probing over HTTP.
    pub fn with_checker(mut self, checker: Arc<dyn Checker>) -> Self {
        self.checker = Some(checker);
        self
    }

    pub fn with_progress_callback(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    fn report_progress(&self, event: ProgressEvent) {
        if let Some(ref cb) = self.progress_callback {
            cb(&event);
        }
    }

    fn should_report(&self, done: u64, total: u64) -> bool {
        self.config.verbose || done % PROGRESS_INTERVAL == 0 || done == total
    }

    /// Run the whole pipeline against `output`.
    ///
    /// The configuration is validated before the destination is touched, and
    /// the destination is opened before any URL is generated or checked.
    pub fn run(&self, output: &OutputTarget) -> Result<RunSummary> {
        let (template, range) = self.config.validate()?;

        let mut sink = output
            .open()
            .map_err(|e| Error::sink_write(output.to_string(), e))?;

        let total = self.config.range_len();
        tracing::info!("Generating playlist with {} entries...", total);

        let (entries, skipped) = self.generate(&template, range, total)?;

        let (entries, verification) = if self.config.verify {
            let verification = self.verify(&entries);
            (verification.retain_reachable(entries), Some(verification))
        } else {
            (entries, None)
        };

        let document = PlaylistDocument::new(self.config.format, &entries, &self.config.wrap);
        let written = document
            .write_to(&mut sink)
            .map_err(|e| Error::sink_write(output.to_string(), e))?;
        drop(sink);

        tracing::info!("Playlist file '{}' created successfully", output);

        Ok(RunSummary {
            output: output.to_string(),
            format: self.config.format,
            total,
            written,
            skipped,
            verified: verification.is_some(),
            valid: verification.as_ref().map_or(0, Verification::valid),
            invalid: verification.as_ref().map_or(0, Verification::invalid),
        })
    }

    fn generate(
        &self,
        template: &LinkTemplate,
        range: RangeInclusive<u64>,
        total: u64,
    ) -> Result<(Vec<Entry>, usize)> {
        let mut entries = Vec::new();
        let mut skipped = 0;

        for (done, index) in (1u64..).zip(range) {
            match template.entry(index, self.config.padding) {
                Ok(entry) => entries.push(entry),
                Err(e) if e.is_per_entry() => {
                    tracing::warn!("Skipping entry {}: {}", index, e);
                    skipped += 1;
                }
                Err(e) => return Err(e),
            }

            if self.should_report(done, total) {
                self.report_progress(ProgressEvent::Generated { done, total });
            }
        }

        Ok((entries, skipped))
    }

    /// The HTTP checker, when used, lives only for this call.
    fn verify(&self, entries: &[Entry]) -> Verification {
        let http;
        let checker: &dyn Checker = match self.checker {
            Some(ref checker) => checker.as_ref(),
            None => {
                http = HttpChecker::new();
                &http
            }
        };

        let total = entries.len();
        let observer = |verdict: &Verdict, done: usize| {
            if self.should_report(done as u64, total as u64) {
                self.report_progress(ProgressEvent::Checked {
                    index: verdict.index,
                    url: verdict.url.clone(),
                    reachable: verdict.reachable,
                    done,
                    total,
                });
            }
        };

        verify_all_with(entries, checker, self.config.workers, Some(&observer))
    }
}
