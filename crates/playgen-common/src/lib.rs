//! Playgen-Common: Shared types, link templates, and error handling.
//!
//! This crate provides common functionality used across playgen:
//!
//! - **Link Templates**: Splitting `http://host/ep_*.mp3` around its wildcard
//!   and rendering zero-padded indices into URLs
//! - **Core Types**: Playlist entries and the prefix/suffix wrap applied at
//!   write time
//! - **Error Handling**: Common error types and result aliases
//!
//! # Examples
//!
//! ```
//! use playgen_common::{LinkTemplate, Error, Result};
//!
//! let template = LinkTemplate::parse("http://example.com/ep_*.mp3")?;
//! let entry = template.entry(4, 3)?;
//! assert_eq!(entry.url, "http://example.com/ep_004.mp3");
//! assert_eq!(entry.title(), "Track 4");
//!
//! assert!(matches!(
//!     LinkTemplate::parse("http://example.com/ep.mp3"),
//!     Err(Error::Configuration(_))
//! ));
//! # Ok::<(), Error>(())
//! ```

pub mod error;
pub mod template;
pub mod types;

pub use error::{Error, Result};
pub use template::{generate_url, LinkTemplate, WILDCARD};
pub use types::*;
