/// File handling utilities
///
/// This module provides directory enumeration with wildcard filename
/// matching and whole-file text reads.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use log::debug;
use regex::Regex;
use walkdir::WalkDir;

/// Translate an OS-style wildcard pattern into an anchored regex
///
/// `*` matches any run of characters and `?` matches a single character;
/// everything else is taken literally.
fn glob_to_regex(glob: &str) -> Result<Regex> {
    let mut pattern = String::with_capacity(glob.len() + 8);
    pattern.push('^');
    for c in glob.chars() {
        match c {
            '*' => pattern.push_str(".*"),
            '?' => pattern.push('.'),
            _ => pattern.push_str(&regex::escape(&c.to_string())),
        }
    }
    pattern.push('$');

    Regex::new(&pattern).with_context(|| format!("Failed to compile file pattern: {}", glob))
}

/// Enumerate regular files directly under `directory` whose file name
/// matches `glob`
///
/// Enumeration is not recursive and keeps the order the file-system API
/// returns, which is not necessarily sorted.
///
/// # Arguments
///
/// * `directory` - Base directory to search in
/// * `glob` - Wildcard pattern applied to file names
///
/// # Returns
///
/// The matching file paths, or an error if the directory cannot be read
pub fn find_matching_files(directory: &Path, glob: &str) -> Result<Vec<PathBuf>> {
    if !directory.is_dir() {
        bail!("Directory not found: {}", directory.display());
    }

    let matcher = glob_to_regex(glob)?;
    let mut files = Vec::new();

    for entry in WalkDir::new(directory).max_depth(1).follow_links(false) {
        let entry =
            entry.with_context(|| format!("Failed to read directory: {}", directory.display()))?;

        if !entry.file_type().is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        if matcher.is_match(&file_name) {
            files.push(entry.path().to_path_buf());
        }
    }

    debug!(
        "{} file(s) match {} under {}",
        files.len(),
        glob,
        directory.display()
    );

    Ok(files)
}

/// Read the whole content of a file as UTF-8 text
///
/// The handle is opened, fully read, and released before returning.
pub fn read_file_content(file_path: &Path) -> Result<String> {
    fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read file: {}", file_path.display()))
}
