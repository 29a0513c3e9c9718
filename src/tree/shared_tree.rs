//! Reader/writer-locked wrapper around [`TopicTree`]

use std::fmt;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::topic_tree::TopicTree;
use super::tree_config::TreeConfig;

/// A [`TopicTree`] behind a [`RwLock`], for sharing between threads.
///
/// Queries take the read lock and return owned clones so no guard outlives
/// the call; mutations take the write lock. Use [`read`](Self::read) or
/// [`write`](Self::write) to batch several operations under one guard.
///
/// A poisoned lock is recovered rather than propagated.
pub struct SharedTopicTree<V> {
	inner: RwLock<TopicTree<V>>,
}

impl<V: PartialEq> Default for SharedTopicTree<V> {
	fn default() -> Self {
		Self::new()
	}
}

impl<V: PartialEq> From<TopicTree<V>> for SharedTopicTree<V> {
	fn from(tree: TopicTree<V>) -> Self {
		Self {
			inner: RwLock::new(tree),
		}
	}
}

impl<V: PartialEq> SharedTopicTree<V> {
	/// Creates an empty shared tree using `/`, `+` and `#`.
	pub fn new() -> Self {
		TopicTree::new().into()
	}

	/// Creates an empty shared tree with custom tokens.
	pub fn with_config(config: TreeConfig) -> Self {
		TopicTree::with_config(config).into()
	}

	/// Acquires the read lock.
	pub fn read(&self) -> RwLockReadGuard<'_, TopicTree<V>> {
		self.inner.read().unwrap_or_else(PoisonError::into_inner)
	}

	/// Acquires the write lock.
	pub fn write(&self) -> RwLockWriteGuard<'_, TopicTree<V>> {
		self.inner.write().unwrap_or_else(PoisonError::into_inner)
	}

	/// Consumes the wrapper and returns the tree.
	pub fn into_inner(self) -> TopicTree<V> {
		self.inner
			.into_inner()
			.unwrap_or_else(PoisonError::into_inner)
	}

	/// See [`TopicTree::add`].
	pub fn add(&self, topic: &str, value: V) {
		self.write().add(topic, value)
	}

	/// See [`TopicTree::set`].
	pub fn set(&self, topic: &str, value: V) {
		self.write().set(topic, value)
	}

	/// See [`TopicTree::remove`].
	pub fn remove(&self, topic: &str, value: &V) {
		self.write().remove(topic, value)
	}

	/// See [`TopicTree::empty`].
	pub fn empty(&self, topic: &str) {
		self.write().empty(topic)
	}

	/// See [`TopicTree::clear`].
	pub fn clear(&self, value: &V) {
		self.write().clear(value)
	}

	/// See [`TopicTree::reset`].
	pub fn reset(&self) {
		self.write().reset()
	}

	/// See [`TopicTree::count`].
	pub fn count(&self) -> usize {
		self.read().count()
	}

	/// See [`TopicTree::is_empty`].
	pub fn is_empty(&self) -> bool {
		self.read().is_empty()
	}
}

impl<V: PartialEq + Clone> SharedTopicTree<V> {
	/// See [`TopicTree::get`].
	pub fn get(&self, topic: &str) -> Vec<V> {
		self.read().get(topic).to_vec()
	}

	/// See [`TopicTree::match_topic`].
	pub fn match_topic(&self, topic: &str) -> Vec<V> {
		self.read().match_topic(topic).into_iter().cloned().collect()
	}

	/// See [`TopicTree::match_first`].
	pub fn match_first(&self, topic: &str) -> Option<V> {
		self.read().match_first(topic).cloned()
	}

	/// See [`TopicTree::search`].
	pub fn search(&self, query: &str) -> Vec<V> {
		self.read().search(query).into_iter().cloned().collect()
	}

	/// See [`TopicTree::search_first`].
	pub fn search_first(&self, query: &str) -> Option<V> {
		self.read().search_first(query).cloned()
	}

	/// See [`TopicTree::all`].
	pub fn all(&self) -> Vec<V> {
		self.read().all().into_iter().cloned().collect()
	}
}

impl<V> fmt::Display for SharedTopicTree<V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let tree = self.inner.read().unwrap_or_else(PoisonError::into_inner);
		fmt::Display::fmt(&*tree, f)
	}
}

impl<V: fmt::Debug> fmt::Debug for SharedTopicTree<V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SharedTopicTree")
			.field("inner", &self.inner)
			.finish()
	}
}
