//! Prefix Trie Implementation
//!
//! This module provides a character trie for storing words, testing
//! membership and removing words again. Removal prunes every node that no
//! longer leads to a stored word, so the tree never carries dead branches.

mod error;
mod node;

use tracing::{debug, trace};

pub use error::TrieError;
pub use node::Node;

/// Result type for prefix trie operations
pub type TrieResult<T> = Result<T, TrieError>;

/// A prefix tree over single `char` symbols.
///
/// The root node stands for the empty prefix and is never removed. The
/// empty word can never be stored: inserting it is a no-op and removing it
/// is an error.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Trie {
    /// The root node of the trie
    root: Node,
}

impl Trie {
    /// Creates a new empty `Trie`.
    pub fn new() -> Self {
        Self { root: Node::new() }
    }

    /// Returns the root node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Returns `true` if the root has no children.
    pub fn is_empty(&self) -> bool {
        self.root.count_children() == 0
    }

    /// Returns the number of nodes below the root.
    ///
    /// This walks the whole tree, so it's an O(n) operation.
    pub fn node_count(&self) -> usize {
        self.root.descendant_count()
    }

    /// Inserts a word into the trie.
    ///
    /// Existing prefixes are reused and only the missing suffix is allocated.
    /// Inserting the empty word changes nothing.
    pub fn insert(&mut self, word: &str) {
        let mut chars = word.chars().peekable();
        let mut node = &mut self.root;
        while let Some(c) = chars.next() {
            node = node.child_entry(c, chars.peek().is_none());
        }
        trace!(word, "inserted word");
    }

    /// Returns `true` if `word` was inserted and not removed since.
    ///
    /// A word that is only a prefix of stored words is not contained, and
    /// neither is the empty word.
    pub fn contains(&self, word: &str) -> bool {
        let mut node = &self.root;
        for c in word.chars() {
            match node.child(c) {
                Some(child) => node = child,
                None => {
                    trace!(word, "lookup left the trie");
                    return false;
                }
            }
        }
        node.is_end()
    }

    /// Removes a word from the trie.
    ///
    /// The terminal node is unmarked. If it has no children the now useless
    /// nodes are pruned bottom-up, stopping at the first ancestor that still
    /// ends a word or leads to another one.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(word))` - The word's path existed and its terminal is now unmarked.
    /// * `Ok(None)` - The path for `word` does not exist; nothing changed.
    /// * `Err(TrieError)` - If `word` is empty.
    pub fn remove(&mut self, word: &str) -> TrieResult<Option<String>> {
        if word.is_empty() {
            return Err(TrieError::empty_word());
        }

        let path: Vec<char> = word.chars().collect();
        let mut pruned = 0;
        match Self::remove_path(&mut self.root, &path, &mut pruned) {
            Some(_) => {
                debug!(word, pruned, "removed word");
                Ok(Some(word.to_string()))
            }
            None => {
                debug!(word, "word not found for removal");
                Ok(None)
            }
        }
    }

    /// Walks `path` below `node`, unmarks its end and prunes on the way back.
    ///
    /// Returns `None` if the path does not exist. Otherwise returns whether
    /// `node` may try to detach its child, i.e. whether the cascade is still
    /// going.
    fn remove_path(node: &mut Node, path: &[char], pruned: &mut usize) -> Option<bool> {
        let Some((&c, rest)) = path.split_first() else {
            node.unmark();
            return Some(node.count_children() == 0);
        };

        let child = node.child_mut(c)?;
        let cascading = Self::remove_path(child, rest, pruned)?;
        if cascading && node.detach(c).is_some() {
            *pruned += 1;
            return Some(true);
        }
        Some(false)
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, words: I) {
        for word in words {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(words: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(words);
        trie
    }
}
