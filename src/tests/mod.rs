//! Test modules for lexitrie.
//!
//! This module contains the crate-internal test suites:
//! - Property-based tests for the trie using proptest
//! - Configuration loading tests against temporary files
//! - Error conversion and reporting tests
//! - Shared strategies and fixtures


pub use test_utils::{word_set_strategy, word_strategy, TestFixture};
