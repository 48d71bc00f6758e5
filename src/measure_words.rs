use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use fxhash::FxHashMap;

use crate::constants::continues_syllable;
use crate::error::{FragmenterError, Result};

/// Units and classifiers that commonly follow a number.
const BUILTIN_WORDS: &[&str] = &[
    // money
    "ကျပ်", "ပဲ", "ပြား", "ဒေါ်လာ", "သိန်း", "သောင်း",
    // classifiers
    "ယောက်", "ဦး", "ခု", "ကောင်", "လုံး", "စင်း", "ချပ်", "အုပ်", "ပုလင်း", "ခွက်", "ကြိမ်", "ခါ",
    // time
    "နာရီ", "မိနစ်", "စက္ကန့်", "ရက်", "ပတ်", "လ", "နှစ်",
    // length, weight, share
    "ပေ", "လက်မ", "မိုင်", "ကီလို", "ဂရမ်", "ပိဿာ", "ကျပ်သား", "တန်", "ရာခိုင်နှုန်း",
];

#[derive(Default)]
struct TrieNode {
    children: FxHashMap<char, Box<TrieNode>>,
    is_word: bool,
}

impl TrieNode {
    #[inline]
    fn get_child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c).map(|b| b.as_ref())
    }

    fn get_or_create_child(&mut self, c: char) -> &mut TrieNode {
        self.children.entry(c).or_insert_with(|| Box::new(TrieNode::default()))
    }
}

/// Code-point trie of measure words.
#[derive(Default)]
pub struct MeasureWords {
    trie: TrieNode,
    len: usize,
}

impl MeasureWords {
    pub fn builtin() -> Self {
        let mut words = MeasureWords::default();
        for word in BUILTIN_WORDS {
            words.insert(word);
        }
        words
    }

    /// Built-in words plus every non-empty line of `path`.
    pub fn with_file(path: &Path) -> Result<Self> {
        let mut words = MeasureWords::builtin();
        words.load_words(path)?;
        Ok(words)
    }

    /// Adds one word per line, skipping blank lines. Returns how many were
    /// new.
    pub fn load_words(&mut self, path: &Path) -> Result<usize> {
        let file = File::open(path).map_err(FragmenterError::io(path))?;
        let reader = BufReader::new(file);

        let mut added = 0;
        for line in reader.lines() {
            let line = line.map_err(FragmenterError::io(path))?;
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            if self.insert(word) {
                added += 1;
            }
        }
        Ok(added)
    }

    /// Returns false when the word was already present.
    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        let mut node = &mut self.trie;
        for c in word.chars() {
            node = node.get_or_create_child(c);
        }
        if node.is_word {
            return false;
        }

        node.is_word = true;
        self.len += 1;
        true
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn contains(&self, word: &str) -> bool {
        let mut node = &self.trie;
        for c in word.chars() {
            match node.get_child(c) {
                Some(child) => node = child,
                None => return false,
            }
        }
        node.is_word
    }

    /// Length of the longest word at `start` that ends on a syllable
    /// boundary, so ပဲ never matches the front of ပဲ့.
    pub fn longest_match(&self, cps: &[char], start: usize) -> Option<usize> {
        let mut node = &self.trie;
        let mut best = None;
        for (i, &c) in cps.iter().enumerate().skip(start) {
            match node.get_child(c) {
                Some(child) => node = child,
                None => break,
            }
            if node.is_word && !continues_syllable(cps, i + 1) {
                best = Some(i + 1 - start);
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cps(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn prefers_the_longest_word() {
        let words = MeasureWords::builtin();
        let input = cps("ကျပ်သား ဝယ်");
        assert_eq!(words.longest_match(&input, 0), Some(7));
    }

    #[test]
    fn rejects_a_word_cut_mid_syllable() {
        let words = MeasureWords::builtin();
        assert_eq!(words.longest_match(&cps("လုံး"), 0), Some(4));
        // လ is a word, but here it starts the syllable လို
        assert_eq!(words.longest_match(&cps("လို"), 0), None);
    }

    #[test]
    fn insert_reports_duplicates() {
        let mut words = MeasureWords::default();
        assert!(words.insert("ပုဒ်"));
        assert!(!words.insert("ပုဒ်"));
        assert!(!words.insert(""));
        assert_eq!(words.len(), 1);
        assert!(words.contains("ပုဒ်"));
        assert!(!words.contains("ပု"));
        assert!(!words.contains(""));
    }
}
