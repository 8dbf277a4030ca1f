//! Extended M3U (`.m3u` and `.m3u8`).
//!
//! Durations are unknown when generating from a template, so every entry is
//! written with `-1`.

use std::io::{self, Write};

use super::PlaylistWriter;

/// Writes `#EXTM3U` playlists.
#[derive(Debug, Clone, Copy, Default)]
pub struct M3uWriter;

impl PlaylistWriter for M3uWriter {
    fn header(&self, out: &mut dyn Write, _total: usize) -> io::Result<()> {
        writeln!(out, "#EXTM3U")
    }

    fn entry(&self, out: &mut dyn Write, _position: usize, url: &str, title: &str) -> io::Result<()> {
        writeln!(out, "#EXTINF:-1,{}", title)?;
        writeln!(out, "{}", url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_m3u_entry() {
        let mut out = Vec::new();
        M3uWriter.header(&mut out, 1).unwrap();
        M3uWriter
            .entry(&mut out, 1, "http://x.test/a.mp3", "Track 1")
            .unwrap();
        M3uWriter.footer(&mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "#EXTM3U\n#EXTINF:-1,Track 1\nhttp://x.test/a.mp3\n"
        );
    }

    #[test]
    fn test_m3u_writes_title_verbatim() {
        let mut out = Vec::new();
        M3uWriter
            .entry(&mut out, 1, "http://x.test/a.mp3", "A, B & <C>")
            .unwrap();
        assert!(String::from_utf8(out)
            .unwrap()
            .starts_with("#EXTINF:-1,A, B & <C>\n"));
    }
}
