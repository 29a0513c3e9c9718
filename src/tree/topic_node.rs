use std::collections::HashMap;
use std::fmt;
use std::ops::ControlFlow;

use arcstr::Substr;
use smallvec::SmallVec;

use super::tree_config::TreeConfig;
use crate::topic::TopicSegment;

/// Node in the topic tree that represents one path prefix.
///
/// Children are keyed by their raw segment text, so a stored `+` or `#`
/// lives in the same map as literal segments.
#[derive(Debug)]
pub struct TopicNode<V> {
	/// Child nodes keyed by segment (literal, `+` or `#`)
	children: HashMap<Substr, TopicNode<V>>,

	/// Values anchored exactly at this node's path, free of duplicates
	values: Vec<V>,
}

/// Which matching relation a traversal follows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum QueryKind {
	/// Concrete query against stored patterns
	Match,
	/// Query and stored paths may both carry wildcards
	Search,
}

/// One way a query segment continues from a node
#[derive(Debug)]
pub(crate) enum Branch<'a, V> {
	/// Continue with the remaining segments at this child
	Descend(&'a TopicNode<V>),
	/// Values that match whatever the remaining segments are
	Absorb(&'a [V]),
	/// Every value at or below this node matches
	Subtree(&'a TopicNode<V>),
}

pub(crate) type Branches<'a, V> = SmallVec<[Branch<'a, V>; 4]>;

impl<V> Default for TopicNode<V> {
	fn default() -> Self {
		Self::new()
	}
}

impl<V> TopicNode<V> {
	/// Creates a new empty node
	pub fn new() -> Self {
		Self {
			children: HashMap::new(),
			values: Vec::new(),
		}
	}

	/// Returns true if the node holds no values and has no children.
	pub fn is_empty(&self) -> bool {
		self.values.is_empty() && self.children.is_empty()
	}

	/// Values anchored at this node
	pub fn values(&self) -> &[V] {
		&self.values
	}

	/// Returns the child stored under `segment`, if any.
	pub fn child(&self, segment: &str) -> Option<&TopicNode<V>> {
		self.children.get(segment)
	}

	/// Iterates over `(segment, child)` pairs in unspecified order.
	pub fn children(&self) -> impl Iterator<Item = (&str, &TopicNode<V>)> {
		self.children
			.iter()
			.map(|(segment, child)| (segment.as_str(), child))
	}

	pub(crate) fn values_mut(&mut self) -> &mut Vec<V> {
		&mut self.values
	}

	/// Walks down `segments`, creating missing children on the way.
	pub(crate) fn get_or_create(
		&mut self,
		segments: impl IntoIterator<Item = Substr>,
	) -> &mut TopicNode<V> {
		let mut current_node = self;
		for segment in segments {
			current_node = current_node.children.entry(segment).or_default();
		}
		current_node
	}

	/// Walks down `segments` without creating anything.
	pub(crate) fn find(&self, segments: &[&str]) -> Option<&TopicNode<V>> {
		segments
			.iter()
			.try_fold(self, |node, segment| node.children.get(*segment))
	}

	/// Applies `f` to the values at the end of `topic_path`, then prunes
	/// every node left without values and children on the way back up.
	///
	/// Returns true if this node is now empty. A missing segment leaves the
	/// tree untouched and returns false.
	pub(crate) fn update_node<F>(&mut self, topic_path: &[&str], f: F) -> bool
	where
		F: FnOnce(&mut Vec<V>),
	{
		match topic_path {
			| [] => f(&mut self.values),
			| [segment, rest_segments @ ..] => {
				let Some(child_node) = self.children.get_mut(*segment) else {
					return false;
				};
				if !child_node.update_node(rest_segments, f) {
					return false;
				}
				self.children.remove(*segment);
			}
		}
		self.is_empty()
	}

	/// Drops `value` from this subtree, pruning branches that become empty.
	/// Returns true if this node is now empty.
	pub(crate) fn clear_value(&mut self, value: &V, removed: &mut usize) -> bool
	where
		V: PartialEq,
	{
		let before = self.values.len();
		self.values.retain(|v| v != value);
		*removed += before - self.values.len();

		self.children
			.retain(|_, child| !child.clear_value(value, removed));
		self.is_empty()
	}

	/// Number of values in this subtree, duplicates across nodes included.
	pub(crate) fn count(&self) -> usize {
		self.values.len()
			+ self.children.values().map(TopicNode::count).sum::<usize>()
	}

	/// Continuations for one concrete query segment: the literal child, the
	/// `+` child, and the values of the `#` child.
	pub(crate) fn match_branches<'a>(
		&'a self,
		segment: &str,
		config: &TreeConfig,
	) -> Branches<'a, V> {
		let mut branches = Branches::new();

		// A wildcard in a concrete query only meets the wildcard children
		if let Some(child) = config
			.classify(segment)
			.as_literal()
			.and_then(|literal| self.children.get(literal))
		{
			branches.push(Branch::Descend(child));
		}
		if let Some(plus) = self.single_level_child(config) {
			branches.push(Branch::Descend(plus));
		}
		if let Some(hash) = self.multi_level_child(config) {
			branches.push(Branch::Absorb(&hash.values));
		}
		branches
	}

	/// Continuations for one query segment when the query may itself carry
	/// wildcards.
	pub(crate) fn search_branches<'a>(
		&'a self,
		segment: &str,
		config: &TreeConfig,
	) -> Branches<'a, V> {
		match config.classify(segment) {
			| TopicSegment::Literal(_) => self.match_branches(segment, config),
			| TopicSegment::SingleLevel => {
				let mut branches: Branches<'a, V> =
					self.children.values().map(Branch::Descend).collect();
				if let Some(hash) = self.multi_level_child(config) {
					branches.push(Branch::Absorb(&hash.values));
				}
				branches
			}
			| TopicSegment::MultiLevel => {
				let mut branches = Branches::new();
				branches.push(Branch::Subtree(self));
				branches
			}
		}
	}

	/// Recursively feeds every matching value collection to `visit`,
	/// stopping as soon as it breaks.
	pub(crate) fn walk<'a, B, F>(
		&'a self,
		kind: QueryKind,
		topic: &[&str],
		config: &TreeConfig,
		visit: &mut F,
	) -> ControlFlow<B>
	where
		F: FnMut(&'a [V]) -> ControlFlow<B>,
	{
		match topic {
			| [] => {
				// The path matches itself, and a trailing # matches its parent
				visit(&self.values)?;
				if let Some(hash) = self.multi_level_child(config) {
					visit(&hash.values)?;
				}
			}
			| [segment, remaining_segments @ ..] => {
				let branches = match kind {
					| QueryKind::Match => self.match_branches(segment, config),
					| QueryKind::Search => {
						self.search_branches(segment, config)
					}
				};
				for branch in branches {
					match branch {
						| Branch::Descend(child) => child.walk(
							kind,
							remaining_segments,
							config,
							visit,
						)?,
						| Branch::Absorb(values) => visit(values)?,
						| Branch::Subtree(node) => node.visit_subtree(visit)?,
					}
				}
			}
		}
		ControlFlow::Continue(())
	}

	/// Feeds the values of this node and all descendants to `visit`.
	pub(crate) fn visit_subtree<'a, B, F>(
		&'a self,
		visit: &mut F,
	) -> ControlFlow<B>
	where
		F: FnMut(&'a [V]) -> ControlFlow<B>,
	{
		visit(&self.values)?;
		for child in self.children.values() {
			child.visit_subtree(visit)?;
		}
		ControlFlow::Continue(())
	}

	fn single_level_child(&self, config: &TreeConfig) -> Option<&TopicNode<V>> {
		self.children.get(config.single_level_wildcard.as_str())
	}

	fn multi_level_child(&self, config: &TreeConfig) -> Option<&TopicNode<V>> {
		self.children.get(config.multi_level_wildcard.as_str())
	}

	/// Renders children depth-first, sorted by segment.
	pub(crate) fn fmt_children(
		&self,
		f: &mut fmt::Formatter<'_>,
		depth: usize,
	) -> fmt::Result {
		let mut children: Vec<_> = self.children.iter().collect();
		children.sort_unstable_by(|(a, _), (b, _)| a.as_str().cmp(b.as_str()));

		for (segment, child) in children {
			write!(
				f,
				"\n| {:indent$}'{segment}' => {}",
				"",
				child.values.len(),
				indent = depth * 2
			)?;
			child.fmt_children(f, depth + 1)?;
		}
		Ok(())
	}
}
