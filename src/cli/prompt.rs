//! Interactive prompt for the image path.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::error::ArtError;

pub const PROMPT: &str = "Enter image path: ";

/// Ask for an image path and read it from `input`.
///
/// Blank lines are skipped. Surrounding quotes, as added by terminals when a
/// file is dragged in, are removed.
pub fn read_image_path(input: &mut impl BufRead, output: &mut impl Write) -> Result<PathBuf, ArtError> {
    output.write_all(PROMPT.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(ArtError::MissingPath);
        }
        let trimmed = unquote(line.trim());
        if !trimmed.is_empty() {
            return Ok(PathBuf::from(trimmed));
        }
    }
}

fn unquote(s: &str) -> &str {
    for quote in ['"', '\''] {
        if s.len() >= 2 && s.starts_with(quote) && s.ends_with(quote) {
            return &s[1..s.len() - 1];
        }
    }
    s
}
