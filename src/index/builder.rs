use crate::index::bktree::BkTree;
use crate::index::trie::Trie;
use crate::utils::normalize::{is_valid_word, scrub_line};
use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Reads a wordlist and builds the on-disk index structures.
///
/// Each input line is scrubbed (CR/LF stripped, ASCII uppercase downcased)
/// and accepted only when the remainder is a non-empty run of `a..z`; all
/// other lines are dropped silently. The accepted words feed the trie in
/// file order and the BK-tree in shuffled order.
#[derive(Default)]
pub struct TreeBuilder {
    words: Vec<String>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Words accepted so far, in file order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Read a wordlist file, appending every accepted word.
    ///
    /// The file is consumed as raw bytes one LF-terminated line at a time,
    /// so non-UTF-8 lines are scrubbed and rejected rather than aborting
    /// the read.
    pub fn read_wordlist(&mut self, path: &Path) -> Result<()> {
        let file = File::open(path)
            .with_context(|| format!("could not open wordlist {}", path.display()))?;
        let mut reader = BufReader::new(file);

        let mut line = Vec::new();
        loop {
            line.clear();
            let n = reader
                .read_until(b'\n', &mut line)
                .with_context(|| format!("could not read wordlist {}", path.display()))?;
            if n == 0 {
                break;
            }

            let word = scrub_line(&line);
            if is_valid_word(&word) {
                self.words
                    .push(String::from_utf8(word).expect("filter admits only ASCII"));
            }
        }

        Ok(())
    }

    /// Build a trie over the accepted words and serialize it to `path`.
    ///
    /// The output is deterministic: insertion order does not affect the
    /// trie, and children serialize in fixed alphabetical order.
    pub fn build_trie(&self, path: &Path) -> Result<()> {
        let mut trie = Trie::new();
        for word in &self.words {
            trie.insert(word);
        }

        let file =
            File::create(path).with_context(|| format!("could not create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        trie.serialize(&mut writer)
            .and_then(|()| writer.flush())
            .with_context(|| format!("could not write trie to {}", path.display()))?;

        Ok(())
    }

    /// Shuffle the accepted words, build a BK-tree and serialize it to
    /// `path`.
    ///
    /// The shuffle counteracts sorted wordlists, which would otherwise
    /// insert in near-sorted distance order and produce a badly unbalanced
    /// tree. A fixed `seed` makes the build reproducible; the default
    /// seeds from OS entropy.
    pub fn build_bktree(&mut self, path: &Path, seed: Option<u64>) -> Result<()> {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.words.shuffle(&mut rng);

        let mut tree = BkTree::new();
        for word in &self.words {
            tree.insert(word);
        }

        let file =
            File::create(path).with_context(|| format!("could not create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        tree.serialize(&mut writer)
            .and_then(|()| writer.flush())
            .with_context(|| format!("could not write BK-tree to {}", path.display()))?;

        Ok(())
    }
}

/// Load a serialized trie from `path`.
pub fn load_trie(path: &Path) -> Result<Trie> {
    let file =
        File::open(path).with_context(|| format!("could not open trie file {}", path.display()))?;
    let mut reader = BufReader::new(file);
    Trie::deserialize(&mut reader)
        .with_context(|| format!("could not read trie from {}", path.display()))
}

/// Load a serialized BK-tree from `path`.
pub fn load_bktree(path: &Path) -> Result<BkTree> {
    let file = File::open(path)
        .with_context(|| format!("could not open BK-tree file {}", path.display()))?;
    let mut reader = BufReader::new(file);
    BkTree::deserialize(&mut reader)
        .with_context(|| format!("could not read BK-tree from {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::TempDir;

    fn write_wordlist(dir: &TempDir, name: &str, contents: &[u8]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(contents).unwrap();
        path
    }

    #[test]
    fn test_read_wordlist_filters_lines() {
        let dir = TempDir::new().unwrap();
        let path = write_wordlist(
            &dir,
            "words.txt",
            b"apple\nBanana\r\ncherry pie\nd0g\n\n\xC3\xA9clair\nFIG\n",
        );

        let mut builder = TreeBuilder::new();
        builder.read_wordlist(&path).unwrap();

        assert_eq!(builder.words(), ["apple", "banana", "fig"]);
    }

    #[test]
    fn test_read_wordlist_keeps_duplicates_and_file_order() {
        let dir = TempDir::new().unwrap();
        let path = write_wordlist(&dir, "words.txt", b"pear\napple\npear\n");

        let mut builder = TreeBuilder::new();
        builder.read_wordlist(&path).unwrap();

        assert_eq!(builder.words(), ["pear", "apple", "pear"]);
    }

    #[test]
    fn test_read_wordlist_last_line_without_newline() {
        let dir = TempDir::new().unwrap();
        let path = write_wordlist(&dir, "words.txt", b"alpha\nbeta");

        let mut builder = TreeBuilder::new();
        builder.read_wordlist(&path).unwrap();

        assert_eq!(builder.words(), ["alpha", "beta"]);
    }

    #[test]
    fn test_read_wordlist_missing_file() {
        let dir = TempDir::new().unwrap();
        let mut builder = TreeBuilder::new();
        let err = builder
            .read_wordlist(&dir.path().join("absent.txt"))
            .unwrap_err();
        assert!(err.to_string().contains("absent.txt"));
    }

    #[test]
    fn test_build_trie_roundtrip() {
        let dir = TempDir::new().unwrap();
        let wordlist = write_wordlist(&dir, "words.txt", b"the\nthem\nthere\n");
        let out = dir.path().join("trie.dat");

        let mut builder = TreeBuilder::new();
        builder.read_wordlist(&wordlist).unwrap();
        builder.build_trie(&out).unwrap();

        let trie = load_trie(&out).unwrap();
        assert!(trie.search("the"));
        assert!(trie.search("them"));
        assert!(trie.search("there"));
        assert!(!trie.search("ther"));
        assert_eq!(trie.valid_endings("themanran", 0), vec![3, 4]);
    }

    #[test]
    fn test_build_bktree_roundtrip() {
        let dir = TempDir::new().unwrap();
        let wordlist = write_wordlist(&dir, "words.txt", b"apple\napply\nape\nample\n");
        let out = dir.path().join("bktree.dat");

        let mut builder = TreeBuilder::new();
        builder.read_wordlist(&wordlist).unwrap();
        builder.build_bktree(&out, Some(42)).unwrap();

        let tree = load_bktree(&out).unwrap();
        for word in ["apple", "apply", "ape", "ample"] {
            let hits = tree.find(word, 2);
            assert!(hits.contains(&word.to_string()), "{word} missing");
        }
    }

    #[test]
    fn test_seeded_bktree_builds_are_identical() {
        let dir = TempDir::new().unwrap();
        let wordlist = write_wordlist(&dir, "words.txt", b"book\nboo\nboon\ncook\ncart\n");
        let out_a = dir.path().join("a.dat");
        let out_b = dir.path().join("b.dat");

        let mut builder_a = TreeBuilder::new();
        builder_a.read_wordlist(&wordlist).unwrap();
        builder_a.build_bktree(&out_a, Some(7)).unwrap();

        let mut builder_b = TreeBuilder::new();
        builder_b.read_wordlist(&wordlist).unwrap();
        builder_b.build_bktree(&out_b, Some(7)).unwrap();

        assert_eq!(std::fs::read(&out_a).unwrap(), std::fs::read(&out_b).unwrap());
    }

    #[test]
    fn test_empty_wordlist_builds_empty_structures() {
        let dir = TempDir::new().unwrap();
        let wordlist = write_wordlist(&dir, "words.txt", b"");
        let trie_out = dir.path().join("trie.dat");
        let bk_out = dir.path().join("bktree.dat");

        let mut builder = TreeBuilder::new();
        builder.read_wordlist(&wordlist).unwrap();
        assert!(builder.words().is_empty());

        builder.build_trie(&trie_out).unwrap();
        builder.build_bktree(&bk_out, Some(1)).unwrap();

        let trie = load_trie(&trie_out).unwrap();
        assert!(!trie.search("a"));

        let tree = load_bktree(&bk_out).unwrap();
        assert!(tree.is_empty());
    }
}
