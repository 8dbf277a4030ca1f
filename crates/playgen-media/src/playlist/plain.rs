//! Plain text: one URL per line, nothing else.

use std::io::{self, Write};

use super::PlaylistWriter;

/// Writes bare URL lists.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainWriter;

impl PlaylistWriter for PlainWriter {
    fn entry(&self, out: &mut dyn Write, _position: usize, url: &str, _title: &str) -> io::Result<()> {
        writeln!(out, "{}", url)
    }
}
