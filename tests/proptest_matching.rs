//! Property-based tests comparing the tree with brute-force matchers.
//!
//! Run with: `cargo test --test proptest_matching`

use std::collections::HashSet;

use mqtt_topic_tree::TopicTree;
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// Stored pattern: literals and `+`, with an optional trailing `#`
fn pattern_strategy() -> impl Strategy<Value = Vec<&'static str>> {
	(
		prop::collection::vec(prop::sample::select(vec!["a", "b", "+"]), 0..4),
		any::<bool>(),
	)
		.prop_map(|(mut segments, hash)| {
			if hash {
				segments.push("#");
			}
			if segments.is_empty() {
				segments.push("a");
			}
			segments
		})
}

/// Concrete topic, empty segments included
fn topic_strategy() -> impl Strategy<Value = Vec<&'static str>> {
	prop::collection::vec(prop::sample::select(vec!["a", "b", "c", ""]), 1..5)
}

fn entries_strategy() -> impl Strategy<Value = Vec<(Vec<&'static str>, u8)>> {
	prop::collection::vec((pattern_strategy(), 0u8..6), 0..12)
}

// =============================================================================
// Reference matchers
// =============================================================================

/// MQTT subscription matching of a concrete topic
fn mqtt_matches(pattern: &[&str], topic: &[&str]) -> bool {
	match (pattern, topic) {
		| (["#"], _) => true,
		| ([], []) => true,
		| (["+", pattern_rest @ ..], [_, topic_rest @ ..]) => {
			mqtt_matches(pattern_rest, topic_rest)
		}
		| ([p, pattern_rest @ ..], [t, topic_rest @ ..]) => {
			p == t && mqtt_matches(pattern_rest, topic_rest)
		}
		| _ => false,
	}
}

/// Symmetric overlap where either side may carry wildcards
fn overlaps(a: &[&str], b: &[&str]) -> bool {
	match (a, b) {
		| (["#", ..], _) | (_, ["#", ..]) => true,
		| ([], []) => true,
		| ([x, a_rest @ ..], [y, b_rest @ ..]) => {
			(*x == "+" || *y == "+" || x == y) && overlaps(a_rest, b_rest)
		}
		| _ => false,
	}
}

fn build_tree(entries: &[(Vec<&str>, u8)]) -> TopicTree<u8> {
	let mut tree = TopicTree::new();
	for (pattern, value) in entries {
		tree.add(&pattern.join("/"), *value);
	}
	tree
}

fn expected_values<F>(entries: &[(Vec<&str>, u8)], is_match: F) -> HashSet<u8>
where
	F: Fn(&[&str]) -> bool,
{
	entries
		.iter()
		.filter(|(pattern, _)| is_match(pattern.as_slice()))
		.map(|(_, value)| *value)
		.collect()
}

proptest! {
	#[test]
	fn match_agrees_with_reference(
		entries in entries_strategy(),
		topic in topic_strategy()
	) {
		let tree = build_tree(&entries);

		let actual = tree.match_topic(&topic.join("/"));
		let actual_set: HashSet<u8> = actual.iter().map(|v| **v).collect();

		prop_assert_eq!(actual.len(), actual_set.len(), "duplicates in result");
		prop_assert_eq!(
			actual_set,
			expected_values(&entries, |pattern| mqtt_matches(pattern, &topic))
		);
	}

	#[test]
	fn search_agrees_with_reference(
		entries in entries_strategy(),
		query in pattern_strategy()
	) {
		let tree = build_tree(&entries);

		let actual = tree.search(&query.join("/"));
		let actual_set: HashSet<u8> = actual.iter().map(|v| **v).collect();

		prop_assert_eq!(actual.len(), actual_set.len(), "duplicates in result");
		prop_assert_eq!(
			actual_set,
			expected_values(&entries, |pattern| overlaps(pattern, &query))
		);
	}

	#[test]
	fn concrete_search_equals_match(
		entries in entries_strategy(),
		topic in topic_strategy()
	) {
		let tree = build_tree(&entries);
		let topic = topic.join("/");

		let mut matched: Vec<u8> =
			tree.match_topic(&topic).into_iter().copied().collect();
		let mut searched: Vec<u8> =
			tree.search(&topic).into_iter().copied().collect();
		matched.sort_unstable();
		searched.sort_unstable();

		prop_assert_eq!(matched, searched);
		prop_assert_eq!(
			tree.match_first(&topic).is_some(),
			tree.search_first(&topic).is_some()
		);
	}

	#[test]
	fn count_and_all_invariants(entries in entries_strategy()) {
		let tree = build_tree(&entries);

		let distinct_pairs: HashSet<(String, u8)> = entries
			.iter()
			.map(|(pattern, value)| (pattern.join("/"), *value))
			.collect();
		let distinct_values: HashSet<u8> =
			entries.iter().map(|(_, value)| *value).collect();

		prop_assert_eq!(tree.count(), distinct_pairs.len());
		prop_assert_eq!(tree.all().len(), distinct_values.len());

		let everything: HashSet<u8> =
			tree.search("#").into_iter().copied().collect();
		prop_assert_eq!(everything, distinct_values);
	}

	#[test]
	fn removing_everything_prunes_to_empty(entries in entries_strategy()) {
		let mut tree = build_tree(&entries);

		for (pattern, value) in entries.iter().rev() {
			tree.remove(&pattern.join("/"), value);
		}

		prop_assert!(tree.is_empty());
		prop_assert_eq!(tree.count(), 0);
	}

	#[test]
	fn clearing_every_value_prunes_to_empty(entries in entries_strategy()) {
		let mut tree = build_tree(&entries);

		for value in 0u8..6 {
			tree.clear(&value);
			prop_assert!(tree.all().into_iter().all(|v| *v != value));
		}

		prop_assert!(tree.is_empty());
	}
}
