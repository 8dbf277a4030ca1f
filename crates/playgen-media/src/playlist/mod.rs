//! Playlist structures and format dispatch.
//!
//! Every format is a [`PlaylistWriter`] with the same three sections: a
//! header written once with the final entry count, one block per entry, and
//! a footer. [`PlaylistFormat`] picks the writer; [`PlaylistDocument`] drives
//! it over an ordered entry list.
//!
//! Nothing is escaped. URLs and titles are written exactly as given.

mod m3u;
mod plain;
mod pls;
mod xspf;

pub use m3u::M3uWriter;
pub use plain::PlainWriter;
pub use pls::PlsWriter;
pub use xspf::XspfWriter;

use playgen_common::{Entry, UrlWrap};
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

/// Output format of a generated playlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serialize", serde(rename_all = "lowercase"))]
pub enum PlaylistFormat {
    /// One URL per line.
    #[default]
    Plain,
    /// Extended M3U.
    M3u,
    /// Extended M3U, UTF-8.
    M3u8,
    /// Winamp PLS (version 2).
    Pls,
    /// XML Shareable Playlist Format.
    Xspf,
}

impl PlaylistFormat {
    /// All supported formats.
    pub const ALL: [PlaylistFormat; 5] = [
        Self::Plain,
        Self::M3u,
        Self::M3u8,
        Self::Pls,
        Self::Xspf,
    ];

    /// Parse a format name case-insensitively, falling back to `Plain` for
    /// anything unrecognized.
    pub fn from_str_lossy(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }

    /// Lowercase format name as accepted on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::M3u => "m3u",
            Self::M3u8 => "m3u8",
            Self::Pls => "pls",
            Self::Xspf => "xspf",
        }
    }

    /// Conventional file extension.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Plain => "txt",
            Self::M3u => "m3u",
            Self::M3u8 => "m3u8",
            Self::Pls => "pls",
            Self::Xspf => "xspf",
        }
    }

    /// The writer implementing this format.
    pub fn writer(&self) -> &'static dyn PlaylistWriter {
        match self {
            Self::Plain => &PlainWriter,
            Self::M3u | Self::M3u8 => &M3uWriter,
            Self::Pls => &PlsWriter,
            Self::Xspf => &XspfWriter,
        }
    }
}

impl fmt::Display for PlaylistFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PlaylistFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "plain" => Ok(Self::Plain),
            "m3u" => Ok(Self::M3u),
            "m3u8" => Ok(Self::M3u8),
            "pls" => Ok(Self::Pls),
            "xspf" => Ok(Self::Xspf),
            other => Err(format!("Unknown playlist format: {}", other)),
        }
    }
}

/// Header / entry / footer capability shared by every format.
pub trait PlaylistWriter: Send + Sync {
    /// Written once before the first entry. `total` is the number of entries
    /// that will follow.
    fn header(&self, out: &mut dyn Write, total: usize) -> io::Result<()> {
        let _ = (out, total);
        Ok(())
    }

    /// Write one entry. `position` is 1-based within the written sequence and
    /// `url` is the already wrapped URL.
    fn entry(&self, out: &mut dyn Write, position: usize, url: &str, title: &str)
        -> io::Result<()>;

    /// Written once after the last entry.
    fn footer(&self, out: &mut dyn Write) -> io::Result<()> {
        let _ = out;
        Ok(())
    }
}

/// An ordered entry list ready to be written in one format.
#[derive(Debug, Clone)]
pub struct PlaylistDocument<'a> {
    /// Target format.
    pub format: PlaylistFormat,
    /// Entries in output order.
    pub entries: &'a [Entry],
    /// Text wrapped around every URL.
    pub wrap: &'a UrlWrap,
}

impl<'a> PlaylistDocument<'a> {
    pub fn new(format: PlaylistFormat, entries: &'a [Entry], wrap: &'a UrlWrap) -> Self {
        Self {
            format,
            entries,
            wrap,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write the whole document and return the number of entries written.
    pub fn write_to<W: Write>(&self, sink: &mut W) -> io::Result<usize> {
        let writer = self.format.writer();
        let total = self.entries.len();

        writer.header(sink, total)?;
        for (i, entry) in self.entries.iter().enumerate() {
            let url = self.wrap.apply(&entry.url);
            writer.entry(sink, i + 1, &url, entry.title())?;
        }
        writer.footer(sink)?;
        sink.flush()?;

        tracing::debug!("Wrote {} {} entries", total, self.format);
        Ok(total)
    }

    /// Render to a string.
    pub fn render(&self) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.write_to(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

/// Write `entries` to `sink` in `format`, wrapping each URL with `wrap`.
pub fn write_playlist<W: Write>(
    sink: &mut W,
    format: PlaylistFormat,
    entries: &[Entry],
    wrap: &UrlWrap,
) -> io::Result<usize> {
    PlaylistDocument::new(format, entries, wrap).write_to(sink)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entries() -> Vec<Entry> {
        (1..=3)
            .map(|i| Entry::new(i, format!("http://x.test/ep_{:02}.mp3", i)))
            .collect()
    }

    #[test]
    fn test_format_parse_case_insensitive() {
        assert_eq!("M3U".parse::<PlaylistFormat>().unwrap(), PlaylistFormat::M3u);
        assert_eq!("m3u8".parse::<PlaylistFormat>().unwrap(), PlaylistFormat::M3u8);
        assert_eq!("Pls".parse::<PlaylistFormat>().unwrap(), PlaylistFormat::Pls);
        assert_eq!("XSPF".parse::<PlaylistFormat>().unwrap(), PlaylistFormat::Xspf);
        assert!("wpl".parse::<PlaylistFormat>().is_err());
    }

    #[test]
    fn test_format_lossy_falls_back_to_plain() {
        assert_eq!(PlaylistFormat::from_str_lossy("wpl"), PlaylistFormat::Plain);
        assert_eq!(PlaylistFormat::from_str_lossy(""), PlaylistFormat::Plain);
        assert_eq!(PlaylistFormat::from_str_lossy("XsPf"), PlaylistFormat::Xspf);
    }

    #[test]
    fn test_format_names_round_trip() {
        for format in PlaylistFormat::ALL {
            assert_eq!(format.name().parse::<PlaylistFormat>().unwrap(), format);
        }
        assert_eq!(PlaylistFormat::Plain.extension(), "txt");
        assert_eq!(PlaylistFormat::M3u8.to_string(), "m3u8");
    }

    #[test]
    fn test_m3u_scenario() {
        let entries = sample_entries();
        let wrap = UrlWrap::default();
        let out = PlaylistDocument::new(PlaylistFormat::M3u, &entries, &wrap).render();

        assert_eq!(
            out,
            "#EXTM3U\n\
             #EXTINF:-1,Track 1\nhttp://x.test/ep_01.mp3\n\
             #EXTINF:-1,Track 2\nhttp://x.test/ep_02.mp3\n\
             #EXTINF:-1,Track 3\nhttp://x.test/ep_03.mp3\n"
        );
    }

    #[test]
    fn test_m3u8_matches_m3u() {
        let entries = sample_entries();
        let wrap = UrlWrap::default();
        let m3u = PlaylistDocument::new(PlaylistFormat::M3u, &entries, &wrap).render();
        let m3u8 = PlaylistDocument::new(PlaylistFormat::M3u8, &entries, &wrap).render();
        assert_eq!(m3u, m3u8);
    }

    #[test]
    fn test_plain_reads_back_wrapped_urls() {
        let entries = sample_entries();
        let wrap = UrlWrap::new(Some("<".into()), Some(">".into()));
        let out = PlaylistDocument::new(PlaylistFormat::Plain, &entries, &wrap).render();

        let lines: Vec<&str> = out.lines().collect();
        let expected: Vec<String> = entries.iter().map(|e| wrap.apply(&e.url)).collect();
        assert_eq!(lines, expected);
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn test_pls_entry_count_matches_body() {
        let entries = sample_entries();
        let wrap = UrlWrap::default();
        let out = PlaylistDocument::new(PlaylistFormat::Pls, &entries, &wrap).render();

        let declared: usize = out
            .lines()
            .find_map(|l| l.strip_prefix("NumberOfEntries="))
            .unwrap()
            .parse()
            .unwrap();
        let files = out.lines().filter(|l| l.starts_with("File")).count();
        assert_eq!(declared, files);
        assert_eq!(declared, 3);
    }

    #[test]
    fn test_pls_positions_follow_written_order() {
        let entries = vec![
            Entry::new(4, "http://x.test/4"),
            Entry::new(9, "http://x.test/9"),
        ];
        let wrap = UrlWrap::default();
        let out = PlaylistDocument::new(PlaylistFormat::Pls, &entries, &wrap).render();

        assert!(out.contains("File1=http://x.test/4\nTitle1=Track 4\nLength1=-1\n"));
        assert!(out.contains("File2=http://x.test/9\nTitle2=Track 9\nLength2=-1\n"));
    }

    #[test]
    fn test_xspf_structure() {
        let entries = sample_entries();
        let wrap = UrlWrap::default();
        let out = PlaylistDocument::new(PlaylistFormat::Xspf, &entries, &wrap).render();

        assert!(out.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
        assert_eq!(out.matches("<playlist ").count(), 1);
        assert_eq!(out.matches("</playlist>").count(), 1);
        assert_eq!(out.matches("<trackList>").count(), 1);
        assert_eq!(out.matches("</trackList>").count(), 1);
        assert_eq!(out.matches("<track>").count(), 3);
        assert_eq!(out.matches("</track>").count(), 3);

        let open = out.find("<trackList>").unwrap();
        let close = out.find("</trackList>").unwrap();
        let first_track = out.find("<track>").unwrap();
        let last_track = out.rfind("</track>").unwrap();
        assert!(open < first_track && last_track < close);
        assert!(out.contains("<location>http://x.test/ep_02.mp3</location>"));
        assert!(out.contains("<title>Track 2</title>"));
    }

    #[test]
    fn test_empty_document() {
        let wrap = UrlWrap::default();
        let doc = PlaylistDocument::new(PlaylistFormat::Plain, &[], &wrap);
        assert!(doc.is_empty());
        assert_eq!(doc.render(), "");

        let out = PlaylistDocument::new(PlaylistFormat::Pls, &[], &wrap).render();
        assert_eq!(out, "[playlist]\nNumberOfEntries=0\nVersion=2\n\n");

        let out = PlaylistDocument::new(PlaylistFormat::Xspf, &[], &wrap).render();
        assert!(out.ends_with("  <trackList>\n  </trackList>\n</playlist>\n"));
    }

    #[test]
    fn test_write_playlist_reports_count() {
        let entries = sample_entries();
        let mut sink = Vec::new();
        let written = write_playlist(
            &mut sink,
            PlaylistFormat::M3u8,
            &entries,
            &UrlWrap::default(),
        )
        .unwrap();
        assert_eq!(written, 3);
        assert!(!sink.is_empty());
    }

    #[test]
    fn test_sink_failure_propagates() {
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let entries = sample_entries();
        let err = write_playlist(
            &mut Broken,
            PlaylistFormat::Plain,
            &entries,
            &UrlWrap::default(),
        )
        .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
