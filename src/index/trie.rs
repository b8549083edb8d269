use crate::index::distance::WILDCARD;
use crate::utils::encoding::{read_u8, read_u32_le, write_u8, write_u32_le};
use std::io::{self, Read, Write};

/// One child slot per letter `a..z`.
const CHILD_SLOTS: usize = 26;

/// A trie node. Slot `k` of `children` holds the subtree reached through
/// the letter `'a' + k`; the root holds no letter of its own.
#[derive(Default, Debug)]
struct TrieNode {
    is_end_of_word: bool,
    children: [Option<Box<TrieNode>>; CHILD_SLOTS],
}

impl TrieNode {
    /// Child slot for a letter. None for bytes outside `a..z`.
    #[inline]
    fn slot(c: u8) -> Option<usize> {
        c.is_ascii_lowercase().then(|| (c - b'a') as usize)
    }

    fn child(&self, c: u8) -> Option<&TrieNode> {
        Self::slot(c).and_then(|slot| self.children[slot].as_deref())
    }

    fn child_count(&self) -> usize {
        self.children.iter().filter(|child| child.is_some()).count()
    }
}

/// Ordered prefix tree over lowercase English words.
///
/// Supports exact lookup, prefix queries, segmentation-boundary enumeration
/// for text with the spaces removed, and `*`-wildcard pattern matching where
/// a wildcard binds exactly one letter.
#[derive(Default, Debug)]
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word. Re-inserting an existing word is a no-op.
    ///
    /// The word must already be normalised to `a..z`; the wordlist filter
    /// guarantees this for builder input. A word containing anything else
    /// is dropped without marking a terminal.
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;

        for c in word.bytes() {
            let Some(slot) = TrieNode::slot(c) else {
                debug_assert!(false, "insert called with non-a..z byte {c:#04x}");
                return;
            };
            node = node.children[slot].get_or_insert_with(Box::default).as_mut();
        }

        node.is_end_of_word = true;
    }

    /// Exact-match lookup.
    pub fn search(&self, word: &str) -> bool {
        self.walk(word).is_some_and(|node| node.is_end_of_word)
    }

    /// True iff some stored word begins with `prefix`.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.walk(prefix).is_some()
    }

    fn walk(&self, path: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for c in path.bytes() {
            node = node.child(c)?;
        }
        Some(node)
    }

    /// Offsets `e` such that `text[start..e]` is a stored word, in ascending
    /// order.
    ///
    /// With "the" and "them" stored, walking "themanran" from 0 yields
    /// `[3, 4]`: the text can begin with either word. The walk stops at the
    /// first byte with no matching child.
    pub fn valid_endings(&self, text: &str, start: usize) -> Vec<usize> {
        let mut endings = Vec::new();
        let mut node = &self.root;

        for (i, c) in text.bytes().enumerate().skip(start) {
            match node.child(c) {
                Some(next) => node = next,
                None => break,
            }

            if node.is_end_of_word {
                endings.push(i + 1);
            }
        }

        endings
    }

    /// True iff some stored word matches `pattern`, where `*` stands for
    /// exactly one letter. A pattern of length n can only match words of
    /// length n; literal characters outside `a..z` never match.
    pub fn match_pattern(&self, pattern: &str) -> bool {
        Self::match_from(&self.root, pattern.as_bytes())
    }

    fn match_from(node: &TrieNode, pattern: &[u8]) -> bool {
        let Some((&c, rest)) = pattern.split_first() else {
            return node.is_end_of_word;
        };

        if c == WILDCARD {
            node.children
                .iter()
                .flatten()
                .any(|child| Self::match_from(child, rest))
        } else {
            match node.child(c) {
                Some(child) => Self::match_from(child, rest),
                None => false,
            }
        }
    }

    /// All stored words matching `pattern`, in alphabetical order.
    pub fn collect_matches(&self, pattern: &str) -> Vec<String> {
        let mut results = Vec::new();
        let mut current = Vec::with_capacity(pattern.len());
        Self::collect_from(&self.root, pattern.as_bytes(), &mut current, &mut results);
        results
    }

    fn collect_from(
        node: &TrieNode,
        pattern: &[u8],
        current: &mut Vec<u8>,
        results: &mut Vec<String>,
    ) {
        let Some((&c, rest)) = pattern.split_first() else {
            if node.is_end_of_word {
                results.push(String::from_utf8_lossy(current).into_owned());
            }
            return;
        };

        if c == WILDCARD {
            for (slot, child) in node.children.iter().enumerate() {
                if let Some(child) = child {
                    current.push(b'a' + slot as u8);
                    Self::collect_from(child, rest, current, results);
                    current.pop();
                }
            }
        } else if let Some(child) = node.child(c) {
            current.push(c);
            Self::collect_from(child, rest, current, results);
            current.pop();
        }
    }

    /// Write every stored word in alphabetical order, one per line.
    pub fn write_words<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let mut prefix = Vec::new();
        Self::write_words_from(&self.root, writer, &mut prefix)
    }

    fn write_words_from<W: Write>(
        node: &TrieNode,
        writer: &mut W,
        prefix: &mut Vec<u8>,
    ) -> io::Result<()> {
        if node.is_end_of_word {
            writer.write_all(prefix)?;
            writer.write_all(b"\n")?;
        }

        for (slot, child) in node.children.iter().enumerate() {
            if let Some(child) = child {
                prefix.push(b'a' + slot as u8);
                Self::write_words_from(child, writer, prefix)?;
                prefix.pop();
            }
        }

        Ok(())
    }

    /// Serialize depth-first as `flag:u8 children:u32 {letter:u8 node}*`,
    /// children in ascending letter order. Integers are little-endian.
    pub fn serialize<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        Self::serialize_node(&self.root, writer)
    }

    fn serialize_node<W: Write>(node: &TrieNode, writer: &mut W) -> io::Result<()> {
        write_u8(writer, node.is_end_of_word as u8)?;
        write_u32_le(writer, node.child_count() as u32)?;

        for (slot, child) in node.children.iter().enumerate() {
            if let Some(child) = child {
                write_u8(writer, b'a' + slot as u8)?;
                Self::serialize_node(child, writer)?;
            }
        }

        Ok(())
    }

    /// Rebuild a trie from its serialized form. Edge bytes outside `a..z`
    /// surface as `InvalidData`.
    pub fn deserialize<R: Read>(reader: &mut R) -> io::Result<Trie> {
        let root = Self::deserialize_node(reader)?;
        Ok(Trie { root })
    }

    fn deserialize_node<R: Read>(reader: &mut R) -> io::Result<TrieNode> {
        let mut node = TrieNode {
            is_end_of_word: read_u8(reader)? != 0,
            ..TrieNode::default()
        };

        let child_count = read_u32_le(reader)?;
        for _ in 0..child_count {
            let letter = read_u8(reader)?;
            let Some(slot) = TrieNode::slot(letter) else {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("invalid trie edge byte {letter:#04x}"),
                ));
            };
            node.children[slot] = Some(Box::new(Self::deserialize_node(reader)?));
        }

        Ok(node)
    }
}
