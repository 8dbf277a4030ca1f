//! XSPF (XML Shareable Playlist Format), version 1.
//!
//! Locations and titles are not XML-escaped; a URL containing `&` or `<`
//! produces a document strict parsers will reject.

use std::io::{self, Write};

use super::PlaylistWriter;

const XSPF_NAMESPACE: &str = "http://xspf.org/ns/0/";

/// Writes `<playlist>` documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct XspfWriter;

impl PlaylistWriter for XspfWriter {
    fn header(&self, out: &mut dyn Write, _total: usize) -> io::Result<()> {
        writeln!(out, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
        writeln!(out, "<playlist version=\"1\" xmlns=\"{}\">", XSPF_NAMESPACE)?;
        writeln!(out, "  <trackList>")
    }

    fn entry(&self, out: &mut dyn Write, _position: usize, url: &str, title: &str) -> io::Result<()> {
        writeln!(out, "    <track>")?;
        writeln!(out, "      <location>{}</location>", url)?;
        writeln!(out, "      <title>{}</title>", title)?;
        writeln!(out, "    </track>")
    }

    fn footer(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "  </trackList>")?;
        writeln!(out, "</playlist>")
    }
}
