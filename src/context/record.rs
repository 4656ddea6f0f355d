use crate::constants::INTRO_PROMPT;
use crate::context::types::PackedFile;

/// The artifact preamble: the prompt line and a blank line.
pub fn intro() -> String {
    format!("{INTRO_PROMPT}\n\n")
}

pub fn header_line(display_path: &str) -> String {
    format!("='='=' File: {display_path} '='='='")
}

/// Formats one record: header, fenced contents, blank separator.
pub fn format_record(file: &PackedFile) -> String {
    let mut s = String::with_capacity(file.contents.len() + file.display_path.len() + 32);
    s.push_str(&header_line(&file.display_path));
    s.push('\n');
    s.push_str("```\n");
    s.push_str(&file.contents);
    s.push_str("\n```\n\n");
    s
}
