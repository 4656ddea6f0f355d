use std::borrow::Cow;
use std::fs;

use crate::context::types::{Candidate, PackedFile, SkipReason};

/// Reads a candidate fully as UTF-8 text.
///
/// Line endings are normalized to `\n` the way text-mode reads do; a byte
/// order mark is kept as content.
pub fn read_candidate(candidate: &Candidate) -> Result<PackedFile, SkipReason> {
    let bytes = fs::read(&candidate.path)?;
    let text = String::from_utf8(bytes).map_err(|e| SkipReason::InvalidUtf8 {
        offset: e.utf8_error().valid_up_to(),
    })?;
    let contents = match normalize_newlines(&text) {
        Cow::Borrowed(_) => text,
        Cow::Owned(s) => s,
    };
    Ok(PackedFile {
        display_path: candidate.display_path.clone(),
        contents,
    })
}

pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}
