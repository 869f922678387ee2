//! Reading page HTML from files and stdin.
//!
//! The engine never goes to the network: the page it works on is the one
//! the host already has, saved to disk or piped in.

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::{NotecardError, Result};

/// Reads HTML content from a local file.
///
/// Callers should validate and sanitize the path when accepting user input.
pub fn fetch_file(path: &str) -> Result<String> {
    let path_buf = PathBuf::from(path);

    if !path_buf.exists() {
        return Err(NotecardError::FileNotFound(path_buf));
    }

    let html = fs::read_to_string(&path_buf)?;
    debug!(path, bytes = html.len(), "read page from file");
    Ok(html)
}

/// Reads HTML content from standard input until EOF.
pub fn fetch_stdin() -> Result<String> {
    use std::io::{self, Read};

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    debug!(bytes = buffer.len(), "read page from stdin");

    Ok(buffer)
}
