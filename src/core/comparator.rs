/// Comparison pipeline for the `compare` subcommand
///
/// Runs the matcher and renderer over two file groups independently and
/// builds a frequency mapping of rendered values for each side.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use log::info;

use crate::core::matcher::MatchPattern;
use crate::core::renderer::render;
use crate::utils::file_utils::{find_matching_files, read_file_content};

/// Options for the `compare` subcommand
#[derive(Debug, Clone)]
pub struct CompareOptions {
    /// Directory in which to search for both file groups
    pub directory: String,
    /// Wildcard pattern selecting the source files
    pub files: String,
    /// Wildcard pattern selecting the comparison files
    pub compareto: String,
    /// Regular expression used to extract values
    pub pattern: String,
    /// Template text with `{key}` replacement sections
    pub template: String,
}

/// Rendered value to occurrence count, preserving first-seen order
///
/// Iteration follows insertion order so that report output is deterministic
/// for a fixed file enumeration order.
#[derive(Debug, Default)]
pub struct FrequencyMap {
    counts: HashMap<String, usize>,
    order: Vec<String>,
}

impl FrequencyMap {
    /// Count one occurrence of a rendered value
    pub(crate) fn record(&mut self, value: String) {
        match self.counts.get_mut(&value) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(value.clone(), 1);
                self.order.push(value);
            }
        }
    }

    /// Occurrence count for a value, if it was seen at all
    pub fn count(&self, value: &str) -> Option<usize> {
        self.counts.get(value).copied()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.counts.contains_key(value)
    }

    /// Number of distinct values
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate values with their counts, in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.order
            .iter()
            .map(move |value| (value.as_str(), self.counts[value]))
    }
}

/// Outcome of comparing two file groups
#[derive(Debug)]
pub struct Comparison {
    /// Frequencies extracted from the source glob
    pub source: FrequencyMap,
    /// Frequencies extracted from the comparison glob
    pub comparison: FrequencyMap,
}

/// Build both frequency mappings with a single compiled pattern
///
/// The pattern is compiled before any file I/O happens; every error is
/// fatal for the whole run.
pub fn run(options: &CompareOptions) -> Result<Comparison> {
    let pattern = MatchPattern::compile(&options.pattern)?;
    let directory = Path::new(&options.directory);

    let source = build_frequency_map(directory, &options.files, &pattern, &options.template)?;
    let comparison =
        build_frequency_map(directory, &options.compareto, &pattern, &options.template)?;

    Ok(Comparison { source, comparison })
}

/// Extract rendered values from every file matching `glob` and count each
/// occurrence
pub fn build_frequency_map(
    directory: &Path,
    glob: &str,
    pattern: &MatchPattern,
    template: &str,
) -> Result<FrequencyMap> {
    let mut frequencies = FrequencyMap::default();

    for file in find_matching_files(directory, glob)? {
        info!("Processing file: {}", file.display());
        let content = read_file_content(&file)?;

        for values in pattern.group_values(&content) {
            frequencies.record(render(template, &values));
        }
    }

    Ok(frequencies)
}
