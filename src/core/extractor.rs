/// Extraction pipeline for the `file` subcommand
///
/// Runs the matcher and renderer over every file matching a glob and streams
/// one rendered line per match to the output writer as it is produced.

use std::collections::HashSet;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};

use crate::core::matcher::MatchPattern;
use crate::core::renderer::render;
use crate::utils::file_utils::{find_matching_files, read_file_content};

/// Options for the `file` subcommand
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Directory in which to search for files
    pub directory: String,
    /// Wildcard pattern selecting the files to process
    pub files: String,
    /// Regular expression used to extract values
    pub pattern: String,
    /// Template text with `{key}` replacement sections
    pub template: String,
    /// Suppress duplicate rendered lines across the whole run
    pub unique: bool,
}

/// Run the extraction pipeline, streaming rendered lines to `out`
///
/// The pattern is compiled before any file I/O happens. Any error (invalid
/// pattern, missing directory, unreadable file) aborts the run; lines
/// already streamed are not rolled back.
pub fn run<W: Write>(options: &ExtractOptions, out: &mut W) -> Result<()> {
    let pattern = MatchPattern::compile(&options.pattern)?;

    let files = find_matching_files(Path::new(&options.directory), &options.files)?;
    info!(
        "{} file(s) match {} under {}",
        files.len(),
        options.files,
        options.directory
    );

    // Dedup is whole-run, not per file
    let mut seen = HashSet::new();

    for file in &files {
        info!("Processing file: {}", file.display());
        let content = read_file_content(file)?;

        let mut match_count = 0usize;
        for values in pattern.group_values(&content) {
            match_count += 1;
            let rendered = render(&options.template, &values);

            if options.unique && !seen.insert(rendered.clone()) {
                continue;
            }

            writeln!(out, "{}", rendered).context("Failed to write rendered value")?;
        }
        debug!("{} match(es) in {}", match_count, file.display());
    }

    Ok(())
}
