/// Core module for pattern extraction
///
/// This module contains the shared extraction primitives (pattern matching
/// and template rendering) and the two command pipelines built on them.

pub mod comparator;
pub mod extractor;
pub mod matcher;
pub mod renderer;
