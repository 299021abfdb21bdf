//! Node implementation for the prefix trie.
//!
//! Each node owns its children outright, keyed by a single `char`. There are
//! no parent links; callers that need to walk back up keep the path themselves.

use hashbrown::HashMap;

use super::error::TrieError;
use super::TrieResult;

/// Returns the only character of `symbol`, or `None` if it has zero or more
/// than one character.
fn single_char(symbol: &str) -> Option<char> {
    let mut chars = symbol.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// A vertex of the prefix trie.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Node {
    /// Child nodes keyed by the symbol on the connecting edge
    children: HashMap<char, Node>,

    /// Whether a stored word ends at this node
    is_end: bool,
}

impl Node {
    /// Creates a new node with no children that does not end a word.
    pub fn new() -> Self {
        Self {
            children: HashMap::new(),
            is_end: false,
        }
    }

    /// Returns `true` if a stored word terminates at this node.
    pub fn is_end(&self) -> bool {
        self.is_end
    }

    pub(crate) fn unmark(&mut self) {
        self.is_end = false;
    }

    /// Returns `true` if the node has no children and ends no word.
    pub fn is_dead_weight(&self) -> bool {
        !self.is_end && self.children.is_empty()
    }

    /// Returns the number of direct children.
    pub fn count_children(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if a child is keyed by `symbol`.
    ///
    /// A symbol that is not exactly one character can never be a key, so it
    /// simply reports `false`.
    pub fn has_child(&self, symbol: &str) -> bool {
        single_char(symbol).map_or(false, |c| self.children.contains_key(&c))
    }

    /// Adds a child keyed by `symbol`, or reuses the existing one.
    ///
    /// When `mark_end` is `true` the child is promoted to a word terminator.
    /// A `false` flag never demotes a child that already ends a word.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::InvalidArgument`] if `symbol` is not exactly one
    /// character long.
    pub fn add_child(&mut self, symbol: &str, mark_end: bool) -> TrieResult<&mut Node> {
        let c = single_char(symbol).ok_or_else(|| TrieError::invalid_symbol(symbol))?;
        Ok(self.child_entry(c, mark_end))
    }

    pub(crate) fn child_entry(&mut self, c: char, mark_end: bool) -> &mut Node {
        let child = self.children.entry(c).or_default();
        if mark_end {
            child.is_end = true;
        }
        child
    }

    /// Returns the child keyed by `symbol`, if any.
    pub fn get_child(&self, symbol: &str) -> Option<&Node> {
        single_char(symbol).and_then(|c| self.child(c))
    }

    /// Mutable counterpart of [`Node::get_child`].
    pub fn get_child_mut(&mut self, symbol: &str) -> Option<&mut Node> {
        single_char(symbol).and_then(move |c| self.child_mut(c))
    }

    pub(crate) fn child(&self, c: char) -> Option<&Node> {
        self.children.get(&c)
    }

    pub(crate) fn child_mut(&mut self, c: char) -> Option<&mut Node> {
        self.children.get_mut(&c)
    }

    /// Iterates over the direct children and their edge symbols, in no
    /// particular order.
    pub fn children(&self) -> impl Iterator<Item = (char, &Node)> {
        self.children.iter().map(|(c, node)| (*c, node))
    }

    /// Detaches the child keyed by `symbol` if it is dead weight.
    ///
    /// Nothing is removed when the child is missing, still ends a word, or
    /// still has children of its own; all three cases return `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::InvalidArgument`] if `symbol` is empty.
    pub fn remove_child(&mut self, symbol: &str) -> TrieResult<Option<Node>> {
        if symbol.is_empty() {
            return Err(TrieError::empty_symbol());
        }
        Ok(single_char(symbol).and_then(|c| self.detach(c)))
    }

    pub(crate) fn detach(&mut self, c: char) -> Option<Node> {
        match self.children.get(&c) {
            Some(child) if child.is_dead_weight() => self.children.remove(&c),
            _ => None,
        }
    }

    /// Counts every node below this one.
    pub(crate) fn descendant_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += node.children.len();
            stack.extend(node.children.values());
        }
        count
    }
}
