//! Lexitrie Library
//!
//! A prefix tree for storing words over single-character symbols, with
//! membership lookup and removal that prunes branches no longer leading to a
//! stored word.
//!
//! ```
//! use lexitrie::Trie;
//!
//! let mut trie: Trie = ["build", "building"].into_iter().collect();
//! assert!(trie.contains("build"));
//! assert!(!trie.contains("buil"));
//!
//! assert_eq!(trie.remove("build").unwrap(), Some("build".to_string()));
//! assert!(trie.contains("building"));
//! ```
//!
//! The crate also carries the pieces used by the `lexitrie` binary:
//! layered configuration, word-list loading and a crate-wide error type.

pub mod config;
pub mod data_structures;
pub mod error;
pub mod words;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use data_structures::{Node, Trie, TrieError, TrieResult};

/// Version information for lexitrie.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
