use serde::{Deserialize, Serialize};

use crate::pipeline::DEFAULT_WORKERS;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub playlist: PlaylistConfig,

    #[serde(default)]
    pub verify: VerifyConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlaylistConfig {
    /// Output format name (plain, m3u, m3u8, pls, xspf). Unknown names fall
    /// back to plain.
    #[serde(default = "default_format")]
    pub format: String,

    /// Zero-pad width for the index (0 = no padding)
    #[serde(default)]
    pub padding: usize,

    /// Text prepended to every written URL
    #[serde(default)]
    pub prefix: Option<String>,

    /// Text appended to every written URL
    #[serde(default)]
    pub suffix: Option<String>,
}

fn default_format() -> String {
    "plain".to_string()
}

impl Default for PlaylistConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            padding: 0,
            prefix: None,
            suffix: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerifyConfig {
    /// Verify URLs even when `--verify` is not given
    #[serde(default)]
    pub enabled: bool,

    /// Number of concurrent verification workers
    #[serde(default = "default_threads")]
    pub threads: usize,
}

fn default_threads() -> usize {
    DEFAULT_WORKERS
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            threads: default_threads(),
        }
    }
}
