use crate::index::distance::edit_distance;
use crate::utils::encoding::{read_u16_le, read_u32_le, write_u16_le, write_u32_le};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::io::{self, Read, Write};

/// A BK-tree node: one stored word plus children keyed by the edit distance
/// between that word and the child's word. The map is ordered so the
/// serialized child order is ascending distance.
struct BkTreeNode {
    word: String,
    children: BTreeMap<u16, BkTreeNode>,
}

impl BkTreeNode {
    fn new(word: &str) -> Self {
        Self {
            word: word.to_string(),
            children: BTreeMap::new(),
        }
    }

    fn find(&self, query: &str, tolerance: usize, results: &mut Vec<String>) {
        let distance = edit_distance(query, &self.word);
        if distance <= tolerance {
            results.push(self.word.clone());
        }

        // Only children keyed within [d - tolerance, d + tolerance] can
        // hold candidates; the edge key equals the parent/child distance
        // and the metric obeys the triangle inequality.
        let low = distance.saturating_sub(tolerance).min(u16::MAX as usize) as u16;
        let high = (distance + tolerance).min(u16::MAX as usize) as u16;

        for child in self.children.range(low..=high).map(|(_, child)| child) {
            child.find(query, tolerance, results);
        }
    }

    fn serialize<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        write_u32_le(writer, self.word.len() as u32)?;
        writer.write_all(self.word.as_bytes())?;

        write_u32_le(writer, self.children.len() as u32)?;
        for (&distance, child) in &self.children {
            write_u16_le(writer, distance)?;
            child.serialize(writer)?;
        }

        Ok(())
    }

    fn deserialize<R: Read>(reader: &mut R) -> io::Result<BkTreeNode> {
        let word_len = read_u32_le(reader)? as usize;
        let mut word = vec![0u8; word_len];
        reader.read_exact(&mut word)?;
        let word = String::from_utf8(word).map_err(|_| {
            io::Error::new(io::ErrorKind::InvalidData, "BK-tree word is not valid UTF-8")
        })?;

        let num_children = read_u32_le(reader)?;
        let mut children = BTreeMap::new();
        for _ in 0..num_children {
            let distance = read_u16_le(reader)?;
            children.insert(distance, Self::deserialize(reader)?);
        }

        Ok(BkTreeNode { word, children })
    }
}

/// Metric tree over words, keyed at each edge by the Damerau–Levenshtein
/// distance between parent and child word. Supports bounded-radius lookup
/// of all stored words near a query.
#[derive(Default)]
pub struct BkTree {
    root: Option<BkTreeNode>,
}

impl BkTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Insert a word. The first word becomes the root. A word already in
    /// the tree (distance 0 anywhere along the walk) is left untouched.
    pub fn insert(&mut self, word: &str) {
        let mut node = match self.root.as_mut() {
            Some(root) => root,
            None => {
                self.root = Some(BkTreeNode::new(word));
                return;
            }
        };

        loop {
            let distance = edit_distance(word, &node.word);
            if distance == 0 {
                // Duplicate; descending into the 0-keyed child would never
                // terminate.
                return;
            }

            match node.children.entry(distance.min(u16::MAX as usize) as u16) {
                Entry::Vacant(slot) => {
                    slot.insert(BkTreeNode::new(word));
                    return;
                }
                Entry::Occupied(slot) => node = slot.into_mut(),
            }
        }
    }

    /// All stored words within `tolerance` edits of `query`, in traversal
    /// order. The result order is an artefact of the tree shape; callers
    /// must treat it as an unordered candidate set.
    pub fn find(&self, query: &str, tolerance: usize) -> Vec<String> {
        let mut results = Vec::new();
        if let Some(root) = &self.root {
            root.find(query, tolerance, &mut results);
        }
        results
    }

    /// Serialize depth-first as `word_len:u32 word num_children:u32
    /// {distance:u16 node}*`. An empty tree writes a zero-length word with
    /// zero children. Integers are little-endian.
    pub fn serialize<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        match &self.root {
            Some(root) => root.serialize(writer),
            None => {
                write_u32_le(writer, 0)?;
                write_u32_le(writer, 0)
            }
        }
    }

    /// Rebuild a tree from its serialized form.
    pub fn deserialize<R: Read>(reader: &mut R) -> io::Result<BkTree> {
        let root = BkTreeNode::deserialize(reader)?;

        if root.word.is_empty() && root.children.is_empty() {
            return Ok(BkTree { root: None });
        }

        Ok(BkTree { root: Some(root) })
    }
}
