pub mod executor;
pub mod output;

pub use executor::{Pipeline, ProgressCallback, ProgressEvent, RunSummary};
pub use output::OutputTarget;

use playgen_common::{Error, LinkTemplate, Result, UrlWrap};
use playgen_media::PlaylistFormat;
use std::ops::RangeInclusive;

/// Default number of verification workers
pub const DEFAULT_WORKERS: usize = 4;

/// Everything a single generation run needs. Built once, never mutated by the
/// run itself.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// URL template containing one `*`.
    pub link_template: String,
    pub start: i64,
    pub end: i64,
    /// Zero-padding width for the index, 0 for none.
    pub padding: usize,
    pub format: PlaylistFormat,
    pub verify: bool,
    pub verbose: bool,
    /// Verification worker count, always at least 1.
    pub workers: usize,
    /// Text wrapped around each URL at write time.
    pub wrap: UrlWrap,
}

impl PipelineConfig {
    pub fn new(link_template: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            link_template: link_template.into(),
            start,
            end,
            padding: 0,
            format: PlaylistFormat::Plain,
            verify: false,
            verbose: false,
            workers: DEFAULT_WORKERS,
            wrap: UrlWrap::default(),
        }
    }

    pub fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_format(mut self, format: PlaylistFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Set the worker count, flooring it at 1.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    pub fn with_wrap(mut self, wrap: UrlWrap) -> Self {
        self.wrap = wrap;
        self
    }

    /// Number of indices in the range, or 0 when the range is invalid.
    pub fn range_len(&self) -> u64 {
        if self.start > self.end {
            return 0;
        }
        self.end.abs_diff(self.start) + 1
    }

    /// Check the range and split the template.
    ///
    /// Nothing may be generated or written unless this succeeds.
    pub fn validate(&self) -> Result<(LinkTemplate, RangeInclusive<u64>)> {
        if self.start <= 0 || self.end <= 0 {
            return Err(Error::configuration(format!(
                "Start and end must be positive (got {}..{})",
                self.start, self.end
            )));
        }

        if self.start > self.end {
            return Err(Error::configuration(format!(
                "Start value cannot be greater than end value ({} > {})",
                self.start, self.end
            )));
        }

        let template = LinkTemplate::parse(&self.link_template)?;

        Ok((template, self.start as u64..=self.end as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_validate_ok() {
        let config = PipelineConfig::new("http://x.test/ep_*.mp3", 1, 3);
        let (template, range) = config.validate().unwrap();
        assert_eq!(template.prefix(), "http://x.test/ep_");
        assert_eq!(range, 1..=3);
    }

    #[test]
    fn test_validate_single_index() {
        let config = PipelineConfig::new("*", 5, 5);
        let (_, range) = config.validate().unwrap();
        assert_eq!(range.count(), 1);
    }

    #[test]
    fn test_validate_reversed_range() {
        let config = PipelineConfig::new("http://x.test/ep_*.mp3", 5, 2);
        assert_matches!(config.validate(), Err(Error::Configuration(msg)) if msg.contains("greater"));
    }

    #[test]
    fn test_validate_non_positive() {
        assert_matches!(
            PipelineConfig::new("*", 0, 3).validate(),
            Err(Error::Configuration(_))
        );
        assert_matches!(
            PipelineConfig::new("*", -4, -1).validate(),
            Err(Error::Configuration(_))
        );
    }

    #[test]
    fn test_validate_missing_wildcard() {
        let config = PipelineConfig::new("http://x.test/ep.mp3", 1, 3);
        assert_matches!(config.validate(), Err(Error::Configuration(_)));
    }

    #[test]
    fn test_workers_floor() {
        let config = PipelineConfig::new("*", 1, 1).with_workers(0);
        assert_eq!(config.workers, 1);
        let config = PipelineConfig::new("*", 1, 1).with_workers(64);
        assert_eq!(config.workers, 64);
    }

    #[test]
    fn test_range_len() {
        assert_eq!(PipelineConfig::new("*", 1, 3).range_len(), 3);
        assert_eq!(PipelineConfig::new("*", 7, 7).range_len(), 1);
        assert_eq!(PipelineConfig::new("*", 5, 2).range_len(), 0);
    }
}
