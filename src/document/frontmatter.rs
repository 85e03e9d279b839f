//! Front matter extraction.

use std::fmt;

/// Line that opens and closes the metadata block.
pub const DELIMITER: &str = "---";

/// Why a document's front matter could not be located.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrontMatterError {
    /// The first line is not the delimiter.
    MissingOpening,
    /// No later line is the delimiter.
    MissingClosing,
}

impl fmt::Display for FrontMatterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrontMatterError::MissingOpening => write!(
                f,
                "expected YAML front matter starting with {} on first line",
                DELIMITER
            ),
            FrontMatterError::MissingClosing => {
                write!(f, "expected YAML front matter closing delimiter {}", DELIMITER)
            }
        }
    }
}

impl std::error::Error for FrontMatterError {}

/// Normalize CRLF line endings to LF.
pub fn normalize_line_endings(content: &str) -> String {
    content.replace("\r\n", "\n")
}

/// Split content into the YAML front matter block and the body.
///
/// The first line must be exactly `---` and a later line must be exactly
/// `---`. The block is everything strictly between the two; the body is
/// everything after the closing line. Line endings are normalized first, so
/// both returned strings use LF.
pub fn split_front_matter(content: &str) -> Result<(String, String), FrontMatterError> {
    let normalized = normalize_line_endings(content);
    let lines: Vec<&str> = normalized.split('\n').collect();

    if lines.first() != Some(&DELIMITER) {
        return Err(FrontMatterError::MissingOpening);
    }

    let end = lines
        .iter()
        .skip(1)
        .position(|line| *line == DELIMITER)
        .map(|offset| offset + 1)
        .ok_or(FrontMatterError::MissingClosing)?;

    let block = lines[1..end].join("\n");
    let body = lines[end + 1..].join("\n");
    Ok((block, body))
}
