//! Configuration for topic tree construction

use arcstr::ArcStr;

use crate::topic::TopicSegment;

/// Separator and wildcard tokens used by a [`TopicTree`](super::TopicTree)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeConfig {
	/// Character splitting a topic into segments
	pub separator: char,
	/// Segment matching exactly one level
	pub single_level_wildcard: ArcStr,
	/// Segment matching zero or more trailing levels
	pub multi_level_wildcard: ArcStr,
}

impl Default for TreeConfig {
	fn default() -> Self {
		Self {
			separator: '/',
			single_level_wildcard: arcstr::literal!("+"),
			multi_level_wildcard: arcstr::literal!("#"),
		}
	}
}

impl TreeConfig {
	/// Create config with custom tokens
	pub fn new(
		separator: char,
		single_level_wildcard: impl Into<ArcStr>,
		multi_level_wildcard: impl Into<ArcStr>,
	) -> Self {
		Self {
			separator,
			single_level_wildcard: single_level_wildcard.into(),
			multi_level_wildcard: multi_level_wildcard.into(),
		}
	}

	/// Classifies a raw segment against this config's wildcard tokens.
	pub fn classify<'a>(&self, segment: &'a str) -> TopicSegment<'a> {
		if segment == self.single_level_wildcard.as_str() {
			TopicSegment::SingleLevel
		} else if segment == self.multi_level_wildcard.as_str() {
			TopicSegment::MultiLevel
		} else {
			TopicSegment::Literal(segment)
		}
	}

	/// Splits a topic into its raw segments.
	pub fn split<'a>(&self, topic: &'a str) -> impl Iterator<Item = &'a str> {
		topic.split(self.separator)
	}
}
