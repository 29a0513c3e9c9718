use std::convert::Infallible;
use std::fmt;
use std::ops::ControlFlow;

use arcstr::ArcStr;
use smallvec::SmallVec;
use tracing::{debug, trace};

use super::topic_node::{QueryKind, TopicNode};
use super::tree_config::TreeConfig;

/// Segments of a single topic, kept inline for typical depths
type Segments<'a> = SmallVec<[&'a str; 8]>;

/// Trie of values keyed by hierarchical topics with MQTT-style wildcards.
///
/// Values are deduplicated per node by equality. The tree is not
/// synchronized; wrap it in a [`SharedTopicTree`](super::SharedTopicTree)
/// or another lock to share it between threads.
///
/// ```rust
/// use mqtt_topic_tree::TopicTree;
///
/// let mut tree = TopicTree::new();
/// tree.add("sensors/+/temperature", "dashboard");
/// tree.add("sensors/#", "archiver");
///
/// let matched = tree.match_topic("sensors/kitchen/temperature");
/// assert_eq!(matched.len(), 2);
///
/// // A wildcard query finds stored concrete and wildcard paths alike
/// assert_eq!(tree.search("sensors/kitchen/+").len(), 2);
/// ```
pub struct TopicTree<V> {
	root: TopicNode<V>,
	config: TreeConfig,
}

impl<V: PartialEq> Default for TopicTree<V> {
	fn default() -> Self {
		Self::new()
	}
}

impl<V: PartialEq> TopicTree<V> {
	/// Creates an empty tree using `/`, `+` and `#`.
	pub fn new() -> Self {
		Self::with_config(TreeConfig::default())
	}

	/// Creates an empty tree with custom separator and wildcard tokens.
	pub fn with_config(config: TreeConfig) -> Self {
		Self {
			root: TopicNode::new(),
			config,
		}
	}

	/// Returns the separator and wildcard tokens in use.
	pub fn config(&self) -> &TreeConfig {
		&self.config
	}

	/// Returns the root node, which stands for the zero-segment path.
	pub fn root(&self) -> &TopicNode<V> {
		&self.root
	}

	/// Returns true if nothing is stored in the tree.
	pub fn is_empty(&self) -> bool {
		self.root.is_empty()
	}

	/// Stores `value` at `topic` unless an equal value is already there.
	pub fn add(&mut self, topic: &str, value: V) {
		let values = self.get_or_create(topic).values_mut();
		let added = !values.contains(&value);
		if added {
			values.push(value);
		}
		trace!(topic, added, "Added value to topic tree");
	}

	/// Replaces every value stored at `topic` with `value`.
	pub fn set(&mut self, topic: &str, value: V) {
		let values = self.get_or_create(topic).values_mut();
		values.clear();
		values.push(value);
		trace!(topic, "Set value in topic tree");
	}

	/// Removes `value` from `topic`. Unknown topics and values are ignored.
	pub fn remove(&mut self, topic: &str, value: &V) {
		let segments = self.segments(topic);
		let root_empty = self
			.root
			.update_node(&segments, |values| values.retain(|v| v != value));
		trace!(topic, root_empty, "Removed value from topic tree");
	}

	/// Removes every value stored at `topic`.
	pub fn empty(&mut self, topic: &str) {
		let segments = self.segments(topic);
		let root_empty = self.root.update_node(&segments, Vec::clear);
		trace!(topic, root_empty, "Emptied topic in topic tree");
	}

	/// Removes `value` wherever it is stored in the tree.
	pub fn clear(&mut self, value: &V) {
		let mut removed = 0;
		self.root.clear_value(value, &mut removed);
		debug!(removed, "Cleared value from topic tree");
	}

	/// Drops all nodes and values.
	pub fn reset(&mut self) {
		// Replacing the root drops every stored value
		self.root = TopicNode::new();
		debug!("Topic tree reset");
	}

	/// Returns the values stored at exactly `topic`, without wildcard
	/// matching.
	pub fn get(&self, topic: &str) -> &[V] {
		let segments = self.segments(topic);
		self.root
			.find(&segments)
			.map(TopicNode::values)
			.unwrap_or_default()
	}

	/// Returns every stored value whose pattern the concrete `topic`
	/// satisfies, without duplicates.
	pub fn match_topic(&self, topic: &str) -> Vec<&V> {
		self.collect(QueryKind::Match, topic)
	}

	/// Returns the first value whose pattern `topic` satisfies.
	pub fn match_first(&self, topic: &str) -> Option<&V> {
		self.first(QueryKind::Match, topic)
	}

	/// Returns every stored value whose path overlaps `query`, where both
	/// the query and the stored paths may contain wildcards.
	pub fn search(&self, query: &str) -> Vec<&V> {
		self.collect(QueryKind::Search, query)
	}

	/// Returns the first value whose path overlaps `query`.
	pub fn search_first(&self, query: &str) -> Option<&V> {
		self.first(QueryKind::Search, query)
	}

	/// Number of stored values; a value stored at several topics counts
	/// once per topic.
	pub fn count(&self) -> usize {
		self.root.count()
	}

	/// Every stored value, without duplicates.
	pub fn all(&self) -> Vec<&V> {
		let mut result = Vec::new();
		completed(self.root.visit_subtree(&mut |values| {
			extend_unique(&mut result, values);
			ControlFlow::Continue(())
		}));
		result
	}

	fn segments<'a>(&self, topic: &'a str) -> Segments<'a> {
		self.config.split(topic).collect()
	}

	fn get_or_create(&mut self, topic: &str) -> &mut TopicNode<V> {
		debug_assert!(
			self.is_valid_pattern(topic),
			"'{}' may only appear as the last segment of '{topic}'",
			self.config.multi_level_wildcard
		);
		let topic = ArcStr::from(topic);
		let segments = self
			.config
			.split(&topic)
			.map(|segment| topic.substr_from(segment));
		self.root.get_or_create(segments)
	}

	fn is_valid_pattern(&self, topic: &str) -> bool {
		let segments = self.segments(topic);
		segments
			.iter()
			.position(|s| *s == self.config.multi_level_wildcard.as_str())
			.is_none_or(|position| position == segments.len() - 1)
	}

	fn collect(&self, kind: QueryKind, topic: &str) -> Vec<&V> {
		let segments = self.segments(topic);
		let mut result = Vec::new();
		completed(self.root.walk(kind, &segments, &self.config, &mut |values| {
			extend_unique(&mut result, values);
			ControlFlow::Continue(())
		}));
		result
	}

	fn first(&self, kind: QueryKind, topic: &str) -> Option<&V> {
		let segments = self.segments(topic);
		let walked =
			self.root.walk(kind, &segments, &self.config, &mut |values| {
				match values.first() {
					| Some(value) => ControlFlow::Break(value),
					| None => ControlFlow::Continue(()),
				}
			});
		match walked {
			| ControlFlow::Break(value) => Some(value),
			| ControlFlow::Continue(()) => None,
		}
	}
}

/// Finishes a traversal whose visitor never breaks.
fn completed(flow: ControlFlow<Infallible>) {
	match flow {
		| ControlFlow::Continue(()) => {}
		| ControlFlow::Break(never) => match never {},
	}
}

/// Appends the values not yet present in `result`.
fn extend_unique<'a, V: PartialEq>(result: &mut Vec<&'a V>, values: &'a [V]) {
	for value in values {
		if !result.contains(&value) {
			result.push(value);
		}
	}
}

impl<V> fmt::Display for TopicTree<V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "TopicTree:")?;
		self.root.fmt_children(f, 0)
	}
}

impl<V: fmt::Debug> fmt::Debug for TopicTree<V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TopicTree")
			.field("config", &self.config)
			.field("root", &self.root)
			.finish()
	}
}
