//! # MQTT Topic Tree
//!
//! A trie that stores values (subscriber handles, callbacks, route targets)
//! keyed by hierarchical topics with MQTT-style wildcards, and answers two
//! kinds of query:
//!
//! - **Match**: which stored patterns does this concrete topic satisfy?
//! - **Search**: which stored entries overlap this (possibly wildcarded)
//!   query?
//!
//! ## Features
//!
//! - **Wildcards**: `+` matches one level, `#` matches zero or more trailing
//!   levels
//! - **Deduplication**: values are unique per topic and in every result set
//! - **Pruning**: removals drop nodes that no longer hold anything
//! - **Locking by composition**: [`TopicTree`] is unsynchronized;
//!   [`SharedTopicTree`] adds a reader/writer lock on top
//! - **Topic parsing**: [`topic::parse`] normalises and validates raw topics
//!   before they reach the tree
//!
//! ## Quick Start
//!
//! ```rust
//! use mqtt_topic_tree::{TopicTree, topic};
//!
//! let mut tree = TopicTree::new();
//!
//! let pattern = topic::parse("home//+/temperature", true)?;
//! tree.add(&pattern, 1);
//! tree.add("home/#", 2);
//!
//! let mut matched = tree.match_topic("home/kitchen/temperature");
//! matched.sort();
//! assert_eq!(matched, vec![&1, &2]);
//!
//! assert_eq!(tree.search_first("home/+/humidity"), Some(&2));
//!
//! tree.clear(&2);
//! assert_eq!(tree.count(), 1);
//! # Ok::<(), mqtt_topic_tree::TopicParseError>(())
//! ```

#![warn(missing_docs)]

// Core modules
pub mod topic;
pub mod tree;

// === Core Public API ===
pub use tree::{SharedTopicTree, TopicNode, TopicTree, TreeConfig};

// Topic parsing (run before registering patterns)
pub use topic::{TopicParseError, TopicSegment};

/// Prelude module for convenient imports
///
/// ```rust
/// use mqtt_topic_tree::prelude::*;
/// ```
pub mod prelude {
	pub use crate::topic::{contains_wildcards, parse};
	pub use crate::{
		SharedTopicTree, TopicParseError, TopicSegment, TopicTree, TreeConfig,
	};
}

/// Error types used throughout the library
///
/// ```rust
/// use mqtt_topic_tree::errors::*;
/// ```
pub mod errors {
	pub use crate::topic::{ParseResult, TopicParseError};
}
