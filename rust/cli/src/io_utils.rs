//! File I/O utilities for reading JSONL, text files, and ensuring directories.
//!
//! Helper functions shared across CLI commands:
//! - Reading from stdin (interactive input)
//! - Reading text files with automatic .zst decompression
//! - Ensuring parent directories exist before file writes
//!
//! ## Compressed File Support
//!
//! The `read_text_auto` function automatically detects and decompresses .zst
//! (Zstandard) compressed files based on the file extension.

use std::io::BufRead;

/// Reads a line of input from a buffered reader, blocking until available.
///
/// Used for interactive commands that need user input. Trims whitespace
/// from the input and returns `None` on EOF or read errors.
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => {
            let trimmed = line.trim();
            Some(trimmed.to_string())
        }
        Err(_) => None, // Read error
    }
}

/// Read a text file with automatic .zst decompression detection.
///
/// If the path ends with ".zst" the contents are decompressed with
/// Zstandard first. A UTF-8 BOM is stripped if present.
///
/// # Errors
///
/// Returns a message string on I/O, decompression, or UTF-8 errors.
pub fn read_text_auto(path: &str) -> Result<String, String> {
    let bytes = if path.ends_with(".zst") {
        let f = std::fs::File::open(path).map_err(|e| format!("open {}: {}", path, e))?;
        zstd::stream::decode_all(f).map_err(|e| format!("decompress {}: {}", path, e))?
    } else {
        std::fs::read(path).map_err(|e| format!("read {}: {}", path, e))?
    };
    let mut text = String::from_utf8(bytes).map_err(|e| format!("utf-8 in {}: {}", path, e))?;
    if let Some(stripped) = text.strip_prefix('\u{feff}') {
        text = stripped.to_string();
    }
    Ok(text)
}

/// Create the parent directory of `path` if it does not exist yet.
pub fn ensure_parent_dir(path: &str) -> std::io::Result<()> {
    if let Some(parent) = std::path::Path::new(path).parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}
