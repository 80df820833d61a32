/// Pattern Extract - regex extraction and comparison for text files
///
/// This library applies named-group regular expressions to file groups,
/// renders each match through a brace-delimited template, and can diff the
/// extracted value sets between two file groups.

// Re-export core modules
pub mod core;
pub mod utils;

// Re-export the main types for convenience
pub use crate::core::comparator::{CompareOptions, Comparison, FrequencyMap};
pub use crate::core::extractor::ExtractOptions;
pub use crate::core::matcher::{MatchPattern, PatternError};
pub use crate::core::renderer::render;
pub use crate::utils::report::{write_report, ReportTotals};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run the extraction pipeline and collect the rendered lines
///
/// This is a convenience function for simple use cases; the streaming
/// entry point is `core::extractor::run`.
///
/// # Arguments
///
/// * `directory` - Directory in which to search for files
/// * `files` - Wildcard pattern selecting the files to process
/// * `pattern` - Regular expression with named capture groups
/// * `template` - Template text with `{key}` replacement sections
/// * `unique` - Suppress duplicate rendered lines across the whole run
///
/// # Returns
///
/// The rendered lines, in the order they would have been streamed
pub fn extract(
    directory: &str,
    files: &str,
    pattern: &str,
    template: &str,
    unique: bool,
) -> anyhow::Result<Vec<String>> {
    let options = ExtractOptions {
        directory: directory.to_string(),
        files: files.to_string(),
        pattern: pattern.to_string(),
        template: template.to_string(),
        unique,
    };

    let mut buffer = Vec::new();
    core::extractor::run(&options, &mut buffer)?;

    let output = String::from_utf8(buffer)?;
    Ok(output.lines().map(str::to_string).collect())
}

/// Build the frequency mappings for two file groups without printing
///
/// Pair with `utils::report::write_report` to produce the full report.
pub fn compare(
    directory: &str,
    files: &str,
    compareto: &str,
    pattern: &str,
    template: &str,
) -> anyhow::Result<Comparison> {
    let options = CompareOptions {
        directory: directory.to_string(),
        files: files.to_string(),
        compareto: compareto.to_string(),
        pattern: pattern.to_string(),
        template: template.to_string(),
    };

    core::comparator::run(&options)
}
