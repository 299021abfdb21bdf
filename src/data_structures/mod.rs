//! Data structures for lexitrie.

pub mod prefix_trie;

pub use prefix_trie::{Node, Trie, TrieError, TrieResult};
