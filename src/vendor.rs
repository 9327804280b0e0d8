//! Vendoring manifest
//!
//! Lists the external repositories whose source trees have to be vendored next to the
//! embedded sources before the C++ build can run offline. The manifest is plain data,
//! consumed by whatever tool does the vendoring.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use wax::{CandidatePath, Glob, Pattern};

use crate::error::{self, Result};

/// Location of the manifest relative to the crate root
pub const MANIFEST_PATH: &str = "saucer/vendor.yaml";

const EMBEDDED_MANIFEST: &str = include_str!("../saucer/vendor.yaml");

/// The vendoring manifest (`vendor.yaml`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VendorManifest {
    pub packages: Vec<VendoredPackage>,
}

/// One repository to vendor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VendoredPackage {
    /// Module path, e.g. `github.com/aperturerobotics/saucer`
    pub module: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,

    /// Globs selecting the vendored C++ sources; empty for tooling-only packages
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,
}

impl VendorManifest {
    /// Parse the manifest shipped with this crate
    pub fn embedded() -> Result<Self> {
        Self::parse(EMBEDDED_MANIFEST, MANIFEST_PATH)
    }

    /// Parse and validate a manifest from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Self::parse(yaml, "<inline>")
    }

    fn parse(yaml: &str, origin: &str) -> Result<Self> {
        let manifest: Self = serde_yaml::from_str(yaml)
            .map_err(|e| error::manifest_parse_failed(origin, e.to_string()))?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Check the manifest is non-empty, has unique modules and valid globs
    pub fn validate(&self) -> Result<()> {
        if self.packages.is_empty() {
            return Err(error::manifest_invalid("no packages listed"));
        }

        let mut seen = HashSet::new();
        for package in &self.packages {
            let module = package.module.trim();
            if module.is_empty() {
                return Err(error::manifest_invalid("package with empty module"));
            }
            if !seen.insert(module) {
                return Err(error::manifest_invalid(format!(
                    "duplicate module '{module}'"
                )));
            }
            for pattern in &package.sources {
                Glob::new(pattern).map_err(|e| {
                    error::manifest_invalid(format!(
                        "module '{module}' has invalid source glob '{pattern}': {e}"
                    ))
                })?;
            }
        }

        Ok(())
    }

    /// Module paths in declaration order
    pub fn modules(&self) -> Vec<&str> {
        self.packages.iter().map(|p| p.module.as_str()).collect()
    }

    /// Packages that contribute C++ sources to the build
    pub fn cpp_packages(&self) -> impl Iterator<Item = &VendoredPackage> {
        self.packages.iter().filter(|p| p.vendors_sources())
    }

    pub fn get(&self, module: &str) -> Option<&VendoredPackage> {
        self.packages.iter().find(|p| p.module == module)
    }
}

impl VendoredPackage {
    pub fn vendors_sources(&self) -> bool {
        !self.sources.is_empty()
    }

    /// Whether a path inside this package's tree is selected by its source globs
    pub fn includes(&self, path: &str) -> bool {
        let candidate = CandidatePath::from(path);
        self.sources.iter().any(|pattern| {
            Glob::new(pattern)
                .map(|glob| glob.matched(&candidate).is_some())
                .unwrap_or(false)
        })
    }
}
