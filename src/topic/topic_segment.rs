//! Classification of raw topic segments

/// One separator-delimited component of a topic, classified against the
/// wildcard tokens of a [`TreeConfig`](crate::tree::TreeConfig).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TopicSegment<'a> {
	/// Literal text, possibly empty
	Literal(&'a str),
	/// Single-level wildcard (`+`), matches exactly one segment
	SingleLevel,
	/// Multi-level wildcard (`#`), matches zero or more trailing segments
	MultiLevel,
}

impl<'a> TopicSegment<'a> {
	/// Returns true if this segment is a wildcard (`+` or `#`).
	pub fn is_wildcard(&self) -> bool {
		matches!(self, TopicSegment::SingleLevel | TopicSegment::MultiLevel)
	}

	/// Returns the literal text, if this is a literal segment.
	pub fn as_literal(&self) -> Option<&'a str> {
		match *self {
			| TopicSegment::Literal(s) => Some(s),
			| _ => None,
		}
	}
}
