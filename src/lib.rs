//! bldr-saucer - embedded C++ sources for the bldr-saucer webview host
//!
//! The C++ sources and `CMakeLists.txt` are captured at build time into [`SOURCES`], a
//! read-only bundle any downstream build step can read, write to disk and compile:
//!
//! ```
//! use std::io::Read;
//!
//! let mut cmake = String::new();
//! bldr_saucer::SOURCES
//!     .open("CMakeLists.txt")?
//!     .read_to_string(&mut cmake)
//!     .map_err(bldr_saucer::SaucerError::from)?;
//! assert!(cmake.contains("bldr-saucer"));
//!
//! for meta in bldr_saucer::SOURCES.list("src") {
//!     println!("{} ({} bytes)", meta.path, meta.size);
//! }
//! # Ok::<(), bldr_saucer::SaucerError>(())
//! ```
//!
//! Around the bundle sit a vendoring manifest ([`vendor`]), a materializer
//! ([`extract`]), and the binary locator and source installer ([`binary`], [`builder`]).

pub mod binary;
pub mod builder;
pub mod bundle;
pub mod config;
pub mod error;
pub mod extract;
pub mod hash;
pub mod path_utils;
pub mod sources;
pub mod ui;
pub mod vendor;

pub use bundle::{Bundle, Entry, EntryKind, File, List, Metadata};
pub use error::{Result, SaucerError};
pub use sources::SOURCES;
