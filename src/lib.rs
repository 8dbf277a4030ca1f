//! Playgen - playlist generation from numbered URL templates
//!
//! This library crate exposes the generation pipeline for integration testing.
//!
//! - `config` - optional TOML defaults file
//! - `verify` - HEAD-request reachability checks on a bounded worker pool
//! - `pipeline` - generate, verify, filter and write one playlist

pub mod config;
pub mod pipeline;
pub mod verify;

pub use playgen_common::{Entry, Error, LinkTemplate, Result, UrlWrap};
pub use playgen_media::PlaylistFormat;
