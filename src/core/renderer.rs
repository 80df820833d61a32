/// Template rendering
///
/// This module substitutes capture values into a brace-delimited template.
/// Substitution is a single pass over the template, so the order in which
/// capture keys were enumerated cannot affect the result.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    /// Token scanner for `{name}` placeholders
    static ref PLACEHOLDER: Regex = Regex::new(r"\{(\w+)\}").unwrap();
}

/// Replace every `{key}` placeholder with its capture value
///
/// Placeholders whose key is unknown are left as literal text. There is no
/// escaping mechanism for literal `{key}` text.
///
/// # Arguments
///
/// * `template` - The template text containing `{key}` placeholders
/// * `values` - Mapping from capture key to matched text
///
/// # Returns
///
/// The rendered value for one match
pub fn render(template: &str, values: &HashMap<String, String>) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| match values.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}
