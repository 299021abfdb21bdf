//! Error types for the prefix trie.
//!
//! Only misuse of the API contract is an error. Missing words, duplicate
//! insertions and removals that leave nodes in place are ordinary results.

/// Errors that can occur in prefix trie operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrieError {
    /// A symbol or word argument violated the operation's input contract.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl TrieError {
    pub(crate) fn invalid_symbol(symbol: &str) -> Self {
        Self::InvalidArgument(format!("invalid child symbol: '{symbol}'"))
    }

    pub(crate) fn empty_symbol() -> Self {
        Self::InvalidArgument("child symbol must not be empty".to_string())
    }

    pub(crate) fn empty_word() -> Self {
        Self::InvalidArgument("cannot remove the empty word".to_string())
    }
}
