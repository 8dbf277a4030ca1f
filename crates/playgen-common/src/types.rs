//! Core type definitions shared by the generator, checker and serializers.

use serde::{Deserialize, Serialize};

/// One generated playlist entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Position in the requested numeric range.
    pub index: u64,
    /// The bare URL produced from the link template.
    pub url: String,
    /// Display title; serializers fall back to the URL when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Entry {
    /// Create an entry titled `Track {index}`.
    pub fn new(index: u64, url: impl Into<String>) -> Self {
        Self {
            index,
            url: url.into(),
            title: Some(format!("Track {}", index)),
        }
    }

    /// Create an entry without a title.
    pub fn untitled(index: u64, url: impl Into<String>) -> Self {
        Self {
            index,
            url: url.into(),
            title: None,
        }
    }

    /// The title to write, defaulting to the bare URL.
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.url)
    }
}

/// Text wrapped around every URL at write time.
///
/// Distinct from the link template's own prefix/suffix: the template builds
/// the URL that gets verified, the wrap only decorates what gets written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlWrap {
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub suffix: Option<String>,
}

impl UrlWrap {
    pub fn new(prefix: Option<String>, suffix: Option<String>) -> Self {
        Self { prefix, suffix }
    }

    /// `prefix + url + suffix`, with unset parts treated as empty.
    pub fn apply(&self, url: &str) -> String {
        let prefix = self.prefix.as_deref().unwrap_or("");
        let suffix = self.suffix.as_deref().unwrap_or("");
        let mut out = String::with_capacity(prefix.len() + url.len() + suffix.len());
        out.push_str(prefix);
        out.push_str(url);
        out.push_str(suffix);
        out
    }

    pub fn is_empty(&self) -> bool {
        self.prefix.as_deref().map_or(true, str::is_empty)
            && self.suffix.as_deref().map_or(true, str::is_empty)
    }
}
