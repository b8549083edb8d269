//! Dictionary index structures and their builder.
//!
//! This module provides the core indexing infrastructure:
//!
//! - [`trie`] - Prefix tree over `a..z` words (exact, prefix, segmentation
//!   and wildcard queries)
//! - [`bktree`] - BK-tree keyed by edit distance (bounded fuzzy lookup)
//! - [`distance`] - Damerau–Levenshtein kernel with the `*` wildcard
//! - [`builder`] - Wordlist ingestion and on-disk persistence
//!
//! ## On-disk formats
//!
//! Both files are headerless, little-endian and self-delimiting via counts,
//! written depth-first:
//!
//! ```text
//! trie_node := flag:u8  children:u32  { letter:u8  trie_node }*
//!              (children in ascending letter order)
//!
//! bk_node   := word_len:u32  word:byte[word_len]
//!              num_children:u32  { distance:u16  bk_node }*
//!              (an empty tree is word_len = 0, num_children = 0)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use lexprep::index::{load_trie, TreeBuilder};
//! use std::path::Path;
//!
//! let mut builder = TreeBuilder::new();
//! builder.read_wordlist(Path::new("wordlist.txt"))?;
//! builder.build_trie(Path::new("trie.dat"))?;
//!
//! let trie = load_trie(Path::new("trie.dat"))?;
//! assert!(trie.starts_with("th"));
//! ```

pub mod bktree;
pub mod builder;
pub mod distance;
pub mod trie;

// Re-exports for public API
pub use bktree::BkTree;
pub use builder::{load_bktree, load_trie, TreeBuilder};
pub use distance::edit_distance;
pub use trie::Trie;
