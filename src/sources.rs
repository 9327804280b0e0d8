//! The embedded bldr-saucer C++ sources
//!
//! `CMakeLists.txt` sits at the bundle root and the `.cpp`/`.h` files under `src/`,
//! the same layout CMake expects when the bundle is written back to disk.

use crate::bundle::{Bundle, Entry};

include!(concat!(env!("OUT_DIR"), "/embedded_sources.rs"));

/// Directory the bundle was captured from, relative to the crate root
pub const SOURCE_ROOT: &str = "saucer";

/// Path of the build-configuration file inside the bundle
pub const BUILD_CONFIG: &str = "CMakeLists.txt";

/// Directory holding the C++ sources inside the bundle
pub const SOURCE_DIR: &str = "src";

/// C++ sources and CMake configuration needed to build bldr-saucer from source
pub static SOURCES: Bundle<'static> = Bundle::new(ENTRIES);
