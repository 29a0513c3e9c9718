//! Topic handling module
//!
//! This module provides the pieces of topic handling that sit around the
//! tree: classifying raw segments, and parsing/normalising raw topics
//! before they are registered or published.

// Submodules
pub mod error;
pub mod topic_parse;
pub mod topic_segment;

#[cfg(test)]
mod topic_parse_tests;

// Re-export commonly used types for convenience
pub use error::{ParseResult, TopicParseError};
pub use topic_parse::{contains_wildcards, parse};
pub use topic_segment::TopicSegment;
