//! PLS version 2.

use std::io::{self, Write};

use super::PlaylistWriter;

/// Writes `[playlist]` files.
///
/// `NumberOfEntries` comes from the header's `total`, so callers must pass the
/// count of entries they are about to write.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlsWriter;

impl PlaylistWriter for PlsWriter {
    fn header(&self, out: &mut dyn Write, total: usize) -> io::Result<()> {
        writeln!(out, "[playlist]")?;
        writeln!(out, "NumberOfEntries={}", total)?;
        writeln!(out, "Version=2")?;
        writeln!(out)
    }

    fn entry(&self, out: &mut dyn Write, position: usize, url: &str, title: &str) -> io::Result<()> {
        writeln!(out, "File{}={}", position, url)?;
        writeln!(out, "Title{}={}", position, title)?;
        writeln!(out, "Length{}=-1", position)?;
        writeln!(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pls_sections() {
        let mut out = Vec::new();
        PlsWriter.header(&mut out, 1).unwrap();
        PlsWriter
            .entry(&mut out, 1, "http://x.test/a.mp3", "Track 5")
            .unwrap();
        PlsWriter.footer(&mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[playlist]\nNumberOfEntries=1\nVersion=2\n\n\
             File1=http://x.test/a.mp3\nTitle1=Track 5\nLength1=-1\n\n"
        );
    }
}
