//! Word co-occurrence counters.
//!
//! Pure data holders consumed by the downstream recovery stages: for each
//! word, how often every neighbour appeared immediately before or after it
//! in the training text. Lookups for unseen words return [`MISSING`] rather
//! than an `Option`; downstream code keys on that exact value.

use ahash::AHashMap;

/// Count reported for a word that was never recorded.
pub const MISSING: u64 = u64::MAX;

/// Neighbour counts for a single word: how often each other word occurred
/// directly before it and directly after it.
///
/// `add_*` is insert-only (an existing entry keeps its count) and
/// `increase_*` only touches existing entries; the split lets callers
/// initialise and accumulate in separate passes without clobbering.
#[derive(Default)]
pub struct WordProb {
    before: AHashMap<String, u64>,
    after: AHashMap<String, u64>,
}

impl WordProb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_before_word(&self, word: &str) -> bool {
        self.before.contains_key(word)
    }

    pub fn has_after_word(&self, word: &str) -> bool {
        self.after.contains_key(word)
    }

    /// Record `word` with an initial count; ignored if already present.
    pub fn add_before_word(&mut self, word: &str, count: u64) {
        if !self.has_before_word(word) {
            self.before.insert(word.to_string(), count);
        }
    }

    /// Record `word` with an initial count; ignored if already present.
    pub fn add_after_word(&mut self, word: &str, count: u64) {
        if !self.has_after_word(word) {
            self.after.insert(word.to_string(), count);
        }
    }

    /// Count for `word` occurring before, or [`MISSING`].
    pub fn before_word_count(&self, word: &str) -> u64 {
        self.before.get(word).copied().unwrap_or(MISSING)
    }

    /// Count for `word` occurring after, or [`MISSING`].
    pub fn after_word_count(&self, word: &str) -> u64 {
        self.after.get(word).copied().unwrap_or(MISSING)
    }

    /// Bump an existing count; ignored if `word` was never added.
    pub fn increase_before_word_count(&mut self, word: &str, count: u64) {
        if let Some(existing) = self.before.get_mut(word) {
            *existing += count;
        }
    }

    /// Bump an existing count; ignored if `word` was never added.
    pub fn increase_after_word_count(&mut self, word: &str, count: u64) {
        if let Some(existing) = self.after.get_mut(word) {
            *existing += count;
        }
    }
}

/// Nested co-occurrence map: outer word to its [`WordProb`] neighbour
/// counts. Writes auto-create the outer entry; reads of an absent outer
/// word report [`MISSING`].
#[derive(Default)]
pub struct WordContextAnalyzer {
    context_map: AHashMap<String, WordProb>,
}

impl WordContextAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_word(&self, word: &str) -> bool {
        self.context_map.contains_key(word)
    }

    pub fn has_before_word(&self, word: &str, before_word: &str) -> bool {
        self.context_map
            .get(word)
            .is_some_and(|prob| prob.has_before_word(before_word))
    }

    pub fn has_after_word(&self, word: &str, after_word: &str) -> bool {
        self.context_map
            .get(word)
            .is_some_and(|prob| prob.has_after_word(after_word))
    }

    /// Ensure an entry for `word` exists.
    pub fn add_word(&mut self, word: &str) {
        if !self.has_word(word) {
            self.context_map.insert(word.to_string(), WordProb::new());
        }
    }

    /// Record `before_word` for `word`, creating the outer entry on first
    /// use; ignored if the pair is already recorded.
    pub fn add_before_word(&mut self, word: &str, before_word: &str, count: u64) {
        self.add_word(word);
        if let Some(prob) = self.context_map.get_mut(word) {
            prob.add_before_word(before_word, count);
        }
    }

    /// Record `after_word` for `word`, creating the outer entry on first
    /// use; ignored if the pair is already recorded.
    pub fn add_after_word(&mut self, word: &str, after_word: &str, count: u64) {
        self.add_word(word);
        if let Some(prob) = self.context_map.get_mut(word) {
            prob.add_after_word(after_word, count);
        }
    }

    pub fn before_word_count(&self, word: &str, before_word: &str) -> u64 {
        match self.context_map.get(word) {
            Some(prob) => prob.before_word_count(before_word),
            None => MISSING,
        }
    }

    pub fn after_word_count(&self, word: &str, after_word: &str) -> u64 {
        match self.context_map.get(word) {
            Some(prob) => prob.after_word_count(after_word),
            None => MISSING,
        }
    }

    /// Bump an existing pair count; ignored if the pair was never added.
    pub fn increase_before_word_count(&mut self, word: &str, before_word: &str, count: u64) {
        if let Some(prob) = self.context_map.get_mut(word) {
            prob.increase_before_word_count(before_word, count);
        }
    }

    /// Bump an existing pair count; ignored if the pair was never added.
    pub fn increase_after_word_count(&mut self, word: &str, after_word: &str, count: u64) {
        if let Some(prob) = self.context_map.get_mut(word) {
            prob.increase_after_word_count(after_word, count);
        }
    }
}
