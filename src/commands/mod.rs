//! Command implementations for the bldr-saucer-src CLI

pub mod bin_path;
pub mod cat;
pub mod completions;
pub mod extract;
pub mod helpers;
pub mod install;
pub mod list;
pub mod stat;
pub mod vendor;
pub mod verify;
pub mod version;
