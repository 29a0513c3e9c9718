//! Tests for topic parsing and normalisation

use super::{TopicParseError, contains_wildcards, parse};

#[test]
fn test_normalizes_separators() {
	let cases = [
		("topic/hello", "topic/hello"),
		("topic//hello", "topic/hello"),
		("topic///hello", "topic/hello"),
		("/topic", "/topic"),
		("//topic", "/topic"),
		("///topic", "/topic"),
		("topic/", "topic"),
		("topic//", "topic"),
		("topic///", "topic"),
		("topic///cool//hello", "topic/cool/hello"),
		("topic//cool///hello", "topic/cool/hello"),
	];

	for (input, expected) in cases {
		let parsed = parse(input, true)
			.unwrap_or_else(|e| panic!("'{input}' failed to parse: {e}"));
		assert_eq!(parsed.as_str(), expected, "input '{input}'");
	}
}

#[test]
fn test_zero_length() {
	for input in ["", "/", "//"] {
		assert_eq!(
			parse(input, true),
			Err(TopicParseError::ZeroLength),
			"input '{input}'"
		);
	}
}

#[test]
fn test_disallow_wildcards() {
	let cases = [
		("topic", true),
		("topic/hello", true),
		("topic/cool/hello", true),
		("+", false),
		("#", false),
		("topic/+", false),
		("topic/#", false),
	];

	for (input, valid) in cases {
		assert_eq!(parse(input, false).is_ok(), valid, "input '{input}'");
	}
}

#[test]
fn test_allow_wildcards() {
	let cases = [
		("topic", true),
		("topic/hello", true),
		("topic/cool/hello", true),
		("+", true),
		("#", true),
		("topic/+", true),
		("topic/#", true),
		("topic/+/hello", true),
		("topic/cool/+", true),
		("topic/cool/#", true),
		("+/cool/#", true),
		("+/+/#", true),
		("", false),
		("++", false),
		("##", false),
		("#/+", false),
		("#/#", false),
	];

	for (input, valid) in cases {
		assert_eq!(parse(input, true).is_ok(), valid, "input '{input}'");
	}
}

#[test]
fn test_error_variants() {
	assert_eq!(
		parse("sensors/temp+", true),
		Err(TopicParseError::invalid_wildcard("temp+"))
	);
	assert_eq!(
		parse("sensors//+", false),
		Err(TopicParseError::wildcards_not_allowed("sensors/+"))
	);
	assert_eq!(
		parse("#/sensors/", true),
		Err(TopicParseError::hash_position("#/sensors"))
	);
}

#[test]
fn test_contains_wildcards() {
	assert!(contains_wildcards("topic/+"));
	assert!(contains_wildcards("topic/#"));
	assert!(!contains_wildcards("topic/hello"));
}

#[test]
fn test_wildcard_text_inside_segment() {
	for input in ["a/+b", "a/b#", "+#", "a/#+/c"] {
		assert!(
			matches!(
				parse(input, true),
				Err(TopicParseError::InvalidWildcard { .. })
			),
			"input '{input}'"
		);
	}
	assert_eq!(parse("+/#", true).unwrap().as_str(), "+/#");
}
