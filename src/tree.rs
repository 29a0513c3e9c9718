//! Topic tree module
//!
//! A trie keyed by topic segments. Each node owns its children and the
//! values anchored at its exact path; nodes are created lazily by
//! [`TopicTree::add`]/[`TopicTree::set`] and pruned as soon as they hold
//! nothing.

// Submodules
pub mod shared_tree;
/// Trie vertex and the branch enumeration used by matching
pub mod topic_node;
/// The tree and its public operations
pub mod topic_tree;
pub mod tree_config;


pub use shared_tree::SharedTopicTree;
pub use topic_node::TopicNode;
pub use topic_tree::TopicTree;
pub use tree_config::TreeConfig;
