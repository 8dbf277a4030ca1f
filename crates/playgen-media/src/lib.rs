//! Playgen-Media: playlist serialization.
//!
//! This crate turns an ordered list of [`playgen_common::Entry`] values into a
//! playlist file. Supported formats:
//!
//! - `plain` - one URL per line
//! - `m3u` / `m3u8` - extended M3U with `#EXTINF:-1,<title>` lines
//! - `pls` - PLS version 2 with `File<i>`, `Title<i>`, `Length<i>` keys
//! - `xspf` - XSPF version 1 XML
//!
//! # Example
//!
//! ```
//! use playgen_common::{Entry, UrlWrap};
//! use playgen_media::{PlaylistDocument, PlaylistFormat};
//!
//! let entries = vec![Entry::new(1, "http://example.com/ep_01.mp3")];
//! let wrap = UrlWrap::default();
//! let m3u = PlaylistDocument::new(PlaylistFormat::M3u, &entries, &wrap).render();
//! assert_eq!(m3u, "#EXTM3U\n#EXTINF:-1,Track 1\nhttp://example.com/ep_01.mp3\n");
//! ```

pub mod playlist;

pub use playlist::{write_playlist, PlaylistDocument, PlaylistFormat, PlaylistWriter};
