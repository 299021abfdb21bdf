//! Integration tests for the prefix trie public API.

use lexitrie::config::WordsConfig;
use lexitrie::words::load_words;
use lexitrie::{Node, Trie, TrieError};
use std::io::Cursor;
use test_case::test_case;

fn build(words: &[&str]) -> Trie {
    words.iter().collect()
}

#[test_case("" ; "empty symbol")]
#[test_case("hi" ; "two characters")]
#[test_case("日本" ; "two multibyte characters")]
fn test_add_child_rejects(symbol: &str) {
    let mut node = Node::new();
    let result = node.add_child(symbol, true);
    assert!(matches!(result, Err(TrieError::InvalidArgument(_))));
    assert_eq!(node.count_children(), 0);
}

#[test_case(&[false, true], true ; "promoted")]
#[test_case(&[true, false], true ; "never demoted")]
#[test_case(&[false, false], false ; "left unmarked")]
#[test_case(&[false, true, false], true ; "stays promoted")]
fn test_add_child_end_marker(marks: &[bool], expected: bool) {
    let mut node = Node::new();
    for &mark in marks {
        node.add_child("a", mark).unwrap();
    }
    assert_eq!(node.get_child("a").map(Node::is_end), Some(expected));
    assert_eq!(node.count_children(), 1);
}

#[test]
fn test_empty_lifecycle() {
    let mut trie = Trie::new();
    assert!(trie.is_empty());

    trie.insert("moose");
    assert!(!trie.is_empty());

    assert_eq!(trie.remove("moose").unwrap().as_deref(), Some("moose"));
    assert!(trie.is_empty());
    assert_eq!(trie.node_count(), 0);
}

#[test]
fn test_shared_prefix_removal() {
    let mut trie = build(&["build", "building", "builder", "moose"]);

    trie.remove("build").unwrap();
    trie.remove("moose").unwrap();

    assert!(!trie.contains("build"));
    assert!(trie.contains("building"));
    assert!(trie.contains("builder"));
    assert!(!trie.contains("moose"));
    assert!(!trie.is_empty());
}

#[test_case("wor", false ; "prefix only")]
#[test_case("word", true ; "first word")]
#[test_case("work", true ; "second word")]
#[test_case("words", false ; "extension")]
#[test_case("", false ; "empty word")]
fn test_contains_after_word_and_work(query: &str, expected: bool) {
    let trie = build(&["word", "work"]);
    assert_eq!(trie.contains(query), expected);
}

#[test_case("amazon" ; "shares first letter")]
#[test_case("buildings" ; "extends stored word")]
#[test_case("x" ; "unknown first letter")]
fn test_remove_missing_word(word: &str) {
    let mut trie = build(&["aragon", "build", "building", "home"]);
    let before = trie.clone();

    assert_eq!(trie.remove(word).unwrap(), None);
    assert_eq!(trie, before);
}

#[test]
fn test_remove_empty_word_is_an_error() {
    let mut trie = build(&["a"]);
    assert!(matches!(trie.remove(""), Err(TrieError::InvalidArgument(_))));
    assert!(trie.contains("a"));
}

#[test]
fn test_remove_child_through_public_api() {
    let mut trie = build(&["ab"]);
    assert!(trie.root().get_child("a").is_some());

    let mut root = trie.root().clone();
    assert!(root.remove_child("a").unwrap().is_none());
    assert!(matches!(root.remove_child(""), Err(TrieError::InvalidArgument(_))));

    trie.remove("ab").unwrap();
    assert!(trie.root().get_child("a").is_none());
}

#[test]
fn test_extend_and_load_agree() {
    let mut extended = Trie::new();
    extended.extend(["alpha", "beta", "alphabet"]);

    let loaded = load_words(
        Cursor::new("alpha\nbeta\n# greek\nalphabet\n"),
        &WordsConfig::default(),
    )
    .unwrap();

    assert_eq!(extended, loaded);
}
