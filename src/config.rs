use crate::constants::{
    IGNORE_DIRS, INCLUDE_FILES, OUTPUT_FILE, PACKER_SCRIPT, TARGET_EXTENSIONS,
};
use anyhow::Result;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// The fixed allow/deny sets used to decide what gets packed.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    pub extensions: Vec<&'static str>,
    pub include_files: HashSet<&'static str>,
    pub ignore_dirs: HashSet<&'static str>,
    /// Names that are never packed, even when they would otherwise match.
    pub excluded_names: HashSet<&'static str>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig {
            extensions: TARGET_EXTENSIONS.to_vec(),
            include_files: INCLUDE_FILES.iter().copied().collect(),
            ignore_dirs: IGNORE_DIRS.iter().copied().collect(),
            excluded_names: [PACKER_SCRIPT, OUTPUT_FILE].into_iter().collect(),
        }
    }
}

/// Where to pack from and where the artifact goes.
#[derive(Debug, Clone)]
pub struct PackConfig {
    pub root: PathBuf,
    pub output_name: &'static str,
    pub filters: FilterConfig,
}

impl PackConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        PackConfig {
            root: root.into(),
            output_name: OUTPUT_FILE,
            filters: FilterConfig::default(),
        }
    }

    /// Packs the process working directory.
    pub fn from_current_dir() -> Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    pub fn output_path(&self) -> PathBuf {
        self.root.join(self.output_name)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
