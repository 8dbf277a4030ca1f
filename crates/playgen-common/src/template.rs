//! Link templates and URL generation.
//!
//! A link template is a URL with a single `*` marking where the numeric index
//! goes, e.g. `http://cdn.example.com/episode_*.mp3`. The template is split
//! once at the first marker; generation then only concatenates the prefix, the
//! rendered index and the suffix.

use std::fmt::{self, Write};
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::types::Entry;

/// The substitution marker inside a link template.
pub const WILDCARD: char = '*';

/// A link template split around its wildcard marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTemplate {
    prefix: String,
    suffix: String,
}

impl LinkTemplate {
    /// Split a template at its first wildcard.
    ///
    /// Any further `*` characters are kept literally in the suffix.
    pub fn parse(template: &str) -> Result<Self> {
        let (prefix, suffix) = template
            .split_once(WILDCARD)
            .ok_or_else(|| Error::configuration("No wildcard (*) found in template"))?;

        Ok(Self {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
        })
    }

    /// Text before the wildcard.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Text after the wildcard.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Render the URL for one index.
    pub fn render(&self, index: u64, padding: usize) -> Result<String> {
        generate_url(&self.prefix, &self.suffix, index, padding)
    }

    /// Build the playlist entry for one index, titled `Track {index}`.
    pub fn entry(&self, index: u64, padding: usize) -> Result<Entry> {
        let url = self.render(index, padding)?;
        Ok(Entry::new(index, url))
    }
}

impl FromStr for LinkTemplate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for LinkTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.prefix, WILDCARD, self.suffix)
    }
}

/// Build `prefix + index + suffix`.
///
/// With `padding > 0` the index is left-padded with zeros to at least that
/// many digits; wider indices keep their natural width. With `padding == 0`
/// the index is written as a plain decimal.
pub fn generate_url(prefix: &str, suffix: &str, index: u64, padding: usize) -> Result<String> {
    let digits = digit_count(index);
    let width = padding.max(digits);

    let capacity = prefix
        .len()
        .checked_add(width)
        .and_then(|n| n.checked_add(suffix.len()))
        .ok_or(Error::Allocation { index })?;

    let mut url = String::new();
    url.try_reserve_exact(capacity)
        .map_err(|_| Error::Allocation { index })?;

    url.push_str(prefix);
    // Runtime format widths are capped at u16, so zeros are pushed by hand.
    url.extend(std::iter::repeat('0').take(width - digits));
    write!(url, "{}", index).map_err(|_| Error::Allocation { index })?;
    url.push_str(suffix);

    Ok(url)
}

/// Number of decimal digits needed to print `n`.
pub fn digit_count(n: u64) -> usize {
    n.checked_ilog10().map_or(1, |d| d as usize + 1)
}
