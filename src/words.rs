//! Word-list loading.
//!
//! A word list is plain text with one word per line. Blank lines are always
//! skipped; comment lines are skipped when [`WordsConfig::skip_comments`] is on.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::info;

use crate::config::WordsConfig;
use crate::data_structures::Trie;
use crate::error::LexiResult;

/// Reads every word from `reader` into a new trie.
pub fn load_words<R: BufRead>(reader: R, config: &WordsConfig) -> LexiResult<Trie> {
    let mut trie = Trie::new();
    let mut loaded = 0usize;

    for line in reader.lines() {
        let line = line?;
        let word = if config.trim { line.trim() } else { line.as_str() };

        if word.is_empty() {
            continue;
        }
        if config.skip_comments && word.starts_with(config.comment_prefix.as_str()) {
            continue;
        }

        trie.insert(word);
        loaded += 1;
    }

    info!(loaded, nodes = trie.node_count(), "word list loaded");
    Ok(trie)
}

/// Opens `path` and loads its words with [`load_words`].
pub fn load_words_from_path<P: AsRef<Path>>(path: P, config: &WordsConfig) -> LexiResult<Trie> {
    let file = File::open(path.as_ref())?;
    load_words(BufReader::new(file), config)
}
