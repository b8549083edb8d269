//! # lexprep - dictionary index preparation
//!
//! lexprep turns a plain wordlist into the two on-disk index structures a
//! text-recovery tool consumes to repair damaged text: restoring missing
//! spaces and guessing letters hidden behind wildcards.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`index`] - The prefix trie, the BK-tree, the Damerau–Levenshtein
//!   kernel and the wordlist builder pipeline
//! - [`context`] - Word co-occurrence counters used by downstream ranking
//! - [`utils`] - Binary encoding primitives and wordlist normalisation
//!
//! The `prepare_data` binary is thin CLI glue over [`index::TreeBuilder`].
//!
//! ## Quick Start
//!
//! ```ignore
//! use lexprep::index::{load_bktree, load_trie, TreeBuilder};
//! use std::path::Path;
//!
//! // Ingest a wordlist and persist both indexes
//! let mut builder = TreeBuilder::new();
//! builder.read_wordlist(Path::new("words.txt"))?;
//! builder.build_trie(Path::new("trie.dat"))?;
//! builder.build_bktree(Path::new("bktree.dat"), None)?;
//!
//! // Reload and query
//! let trie = load_trie(Path::new("trie.dat"))?;
//! assert!(trie.match_pattern("c*t"));
//!
//! let tree = load_bktree(Path::new("bktree.dat"))?;
//! let close = tree.find("helo", 1);
//! ```
//!
//! ## Index design
//!
//! The trie answers exact, prefix, segmentation-boundary and one-letter
//! wildcard queries over words drawn from `a..z`. The BK-tree answers
//! bounded edit-distance queries; because stored words never contain the
//! wildcard, the distance is a true metric inside the tree and search
//! prunes by the triangle inequality.

pub mod context;
pub mod index;
pub mod utils;
