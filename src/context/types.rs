use std::fmt;
use std::io;
use std::path::PathBuf;

/// A file under the root that passed the inclusion filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub path: PathBuf,
    /// Path as shown in the artifact, e.g. `./src/main.cpp`.
    pub display_path: String,
}

/// A file that passed the filters and was read as text.
#[derive(Debug, Clone)]
pub struct PackedFile {
    /// Path as shown in the artifact, e.g. `./src/main.cpp`.
    pub display_path: String,
    pub contents: String,
}

/// Why a candidate file produced no record.
#[derive(Debug)]
pub enum SkipReason {
    Io(io::Error),
    InvalidUtf8 { offset: usize },
}

impl fmt::Display for SkipReason {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            SkipReason::Io(e) => write!(f, "{e}"),
            SkipReason::InvalidUtf8 { offset } => {
                write!(f, "'utf-8' codec can't decode byte at position {offset}")
            }
        }
    }
}

impl std::error::Error for SkipReason {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SkipReason::Io(e) => Some(e),
            SkipReason::InvalidUtf8 { .. } => None,
        }
    }
}

impl From<io::Error> for SkipReason {
    fn from(e: io::Error) -> Self {
        SkipReason::Io(e)
    }
}

/// Outcome of one packing run.
#[derive(Debug, Default)]
pub struct PackSummary {
    /// Absolute path of the artifact.
    pub output: PathBuf,
    pub packed: Vec<String>,
    pub skipped: Vec<(String, String)>,
}
