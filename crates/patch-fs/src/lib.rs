//! Filesystem layer for textpatch
//!
//! Provides normalized paths, checksummed reads, atomic writes and
//! format-agnostic rule file loading.

pub mod checksum;
pub mod config;
pub mod error;
pub mod io;
pub mod path;

pub use checksum::Checksum;
pub use config::ConfigStore;
pub use error::{Error, Result};
pub use io::TextFile;
pub use path::NormalizedPath;
