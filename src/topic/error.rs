//! Error types for the topic module
//!
//! The topic tree itself never fails; these errors belong to the parsing
//! step that callers run before a topic reaches the tree.

use thiserror::Error;

/// Errors produced while parsing and normalising a raw topic string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TopicParseError {
	/// Topic is empty, or consists only of separators
	#[error("Topic cannot be empty")]
	ZeroLength,

	/// Wildcard characters mixed with other text inside one segment
	#[error("Invalid wildcard usage in segment '{segment}'")]
	InvalidWildcard {
		/// The offending segment
		segment: String,
	},

	/// Wildcard segment in a topic that must be concrete
	#[error("Wildcards are not allowed in topic '{topic}'")]
	WildcardsNotAllowed {
		/// The offending topic
		topic: String,
	},

	/// Multi-level wildcard (#) used before the last segment
	#[error(
		"Invalid topic pattern '{pattern}': # wildcard can only be the last \
		 segment"
	)]
	HashPosition {
		/// The invalid pattern
		pattern: String,
	},
}

impl TopicParseError {
	/// Creates a new InvalidWildcard error
	pub fn invalid_wildcard(segment: impl Into<String>) -> Self {
		Self::InvalidWildcard {
			segment: segment.into(),
		}
	}

	/// Creates a new WildcardsNotAllowed error
	pub fn wildcards_not_allowed(topic: impl Into<String>) -> Self {
		Self::WildcardsNotAllowed {
			topic: topic.into(),
		}
	}

	/// Creates a new HashPosition error
	pub fn hash_position(pattern: impl Into<String>) -> Self {
		Self::HashPosition {
			pattern: pattern.into(),
		}
	}
}

/// Convenient Result type for parse operations
pub type ParseResult<T> = Result<T, TopicParseError>;
