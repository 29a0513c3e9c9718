//! Normalisation and validation of raw topic strings
//!
//! Brokers run topics through [`parse`] before handing them to a
//! [`TopicTree`](crate::tree::TopicTree); the tree trusts its input.

use arcstr::ArcStr;

use super::error::{ParseResult, TopicParseError};
use super::topic_segment::TopicSegment;
use crate::tree::TreeConfig;

/// Parses and normalises a topic.
///
/// Runs of separators collapse into one and trailing separators are
/// stripped, so `"topic//cool///"` becomes `"topic/cool"` and `"//topic"`
/// becomes `"/topic"`. With `allow_wildcards` set, `+` and `#` segments are
/// accepted as long as `#` is the final segment.
pub fn parse(topic: &str, allow_wildcards: bool) -> ParseResult<ArcStr> {
	if topic.is_empty() {
		return Err(TopicParseError::ZeroLength);
	}

	let config = TreeConfig::default();
	let normalized = normalize(topic, config.separator);
	if normalized.is_empty() {
		return Err(TopicParseError::ZeroLength);
	}

	let mut segments = config.split(&normalized).peekable();
	while let Some(segment) = segments.next() {
		let kind = config.classify(segment);

		if !kind.is_wildcard() && contains_wildcards(segment) {
			return Err(TopicParseError::invalid_wildcard(segment));
		}

		if kind.is_wildcard() && !allow_wildcards {
			return Err(TopicParseError::wildcards_not_allowed(
				normalized.as_str(),
			));
		}

		if kind == TopicSegment::MultiLevel && segments.peek().is_some() {
			return Err(TopicParseError::hash_position(normalized.as_str()));
		}
	}
	drop(segments);

	Ok(ArcStr::from(normalized))
}

/// Returns true if the topic contains a wildcard character anywhere.
pub fn contains_wildcards(topic: &str) -> bool {
	topic.contains(['+', '#'])
}

fn normalize(topic: &str, separator: char) -> String {
	let mut normalized = String::with_capacity(topic.len());
	let mut previous_was_separator = false;

	for c in topic.chars() {
		let is_separator = c == separator;
		if !(is_separator && previous_was_separator) {
			normalized.push(c);
		}
		previous_was_separator = is_separator;
	}

	let trimmed_len = normalized.trim_end_matches(separator).len();
	normalized.truncate(trimmed_len);
	normalized
}
