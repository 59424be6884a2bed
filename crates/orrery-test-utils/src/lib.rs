//! Test utilities and fixtures for Orrery development.
//!
//! Provides ready-made bodies and scenes ([`fixtures`]) and helpers for
//! putting scene text on disk ([`scene_file`]).

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::io::Write;

use tempfile::NamedTempFile;

pub use fixtures::{
    earth, mars, solar_system, sun, EARTH_ID, MARS_ID, SOLAR_SYSTEM_TEXT, SUN_ID,
};

/// Write `contents` to a fresh temporary file.
///
/// The file is deleted when the returned handle is dropped.
pub fn scene_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp scene file");
    file.write_all(contents.as_bytes())
        .expect("write temp scene file");
    file.flush().expect("flush temp scene file");
    file
}
