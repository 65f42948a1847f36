//! Line-based terminal input.
//!
//! Generic over [`BufRead`]/[`Write`] so the interactive loops can be driven
//! by scripted input in tests.

use std::io::{BufRead, Write};

use crate::error::{GitrError, Result};

/// Reads one line without its line terminator.
///
/// # Errors
/// - [`GitrError::InputClosed`] - end of input
pub fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(GitrError::InputClosed);
    }
    let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed_len);
    Ok(line)
}

/// Writes `prompt` (no newline), flushes, and reads the reply.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<String> {
    write!(out, "{}", prompt)?;
    out.flush()?;
    read_line(input)
}

/// [`prompt_line`] with surrounding whitespace removed.
pub fn prompt_trimmed<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<String> {
    Ok(prompt_line(input, out, prompt)?.trim().to_string())
}
