/// Pattern compilation and match iteration
///
/// This module wraps a compiled regular expression together with the capture
/// keys it exposes, and produces one key-to-text mapping per match.

use std::collections::HashMap;

use regex::Regex;
use thiserror::Error;

/// Error when a regular expression fails to compile
#[derive(Debug, Error)]
#[error("Invalid pattern: {0}")]
pub struct PatternError(#[from] regex::Error);

/// A compiled pattern and the ordered list of capture keys it exposes
///
/// Key `0` addresses the whole matched text. Unnamed capture groups are
/// addressable by their decimal index, named groups by their name.
#[derive(Debug)]
pub struct MatchPattern {
    regex: Regex,
    group_keys: Vec<String>,
}

impl MatchPattern {
    /// Compile a pattern and extract its capture keys once
    ///
    /// # Arguments
    ///
    /// * `pattern` - The regular expression source text
    ///
    /// # Returns
    ///
    /// The compiled pattern, or a `PatternError` if compilation fails
    pub fn compile(pattern: &str) -> Result<MatchPattern, PatternError> {
        let regex = Regex::new(pattern)?;

        let group_keys = regex
            .capture_names()
            .enumerate()
            .map(|(index, name)| match name {
                Some(name) => name.to_string(),
                None => index.to_string(),
            })
            .collect();

        Ok(MatchPattern { regex, group_keys })
    }

    /// The capture keys exposed by this pattern, in group order
    pub fn group_keys(&self) -> &[String] {
        &self.group_keys
    }

    /// Iterate matches left to right, non-overlapping, yielding one
    /// key-to-text mapping per match
    ///
    /// Every key is present in every mapping; a group that did not
    /// participate in a match maps to the empty string.
    pub fn group_values<'t>(
        &'t self,
        text: &'t str,
    ) -> impl Iterator<Item = HashMap<String, String>> + 't {
        self.regex.captures_iter(text).map(move |caps| {
            let mut values = HashMap::with_capacity(self.group_keys.len());
            for (index, key) in self.group_keys.iter().enumerate() {
                let captured = caps.get(index).map(|m| m.as_str()).unwrap_or("");
                values.insert(key.clone(), captured.to_string());
            }
            values
        })
    }
}
