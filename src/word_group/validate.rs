//! Integrity checks for word-group dictionaries.
//!
//! Lookups tolerate malformed entries, so these checks are meant for whoever
//! produces the dictionary files.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

use crate::word_group::dictionary::WordGroupDictionary;

/// A problem found in a dictionary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DictionaryIssue {
    /// The character has no words.
    EmptyEntry { character: String },
    /// The key is longer than one grapheme.
    MultiGrapheme { character: String, graphemes: usize },
    /// A word does not contain its key and would be shown unmasked.
    MissingCharacter {
        character: String,
        index: usize,
        word: String,
    },
    /// A word repeats an earlier word of the same entry.
    DuplicateWord {
        character: String,
        index: usize,
        word: String,
    },
}

impl DictionaryIssue {
    /// The character whose entry has the problem.
    pub fn character(&self) -> &str {
        match self {
            DictionaryIssue::EmptyEntry { character }
            | DictionaryIssue::MultiGrapheme { character, .. }
            | DictionaryIssue::MissingCharacter { character, .. }
            | DictionaryIssue::DuplicateWord { character, .. } => character,
        }
    }
}

impl fmt::Display for DictionaryIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DictionaryIssue::EmptyEntry { character } => {
                write!(f, "{character}: no words")
            }
            DictionaryIssue::MultiGrapheme {
                character,
                graphemes,
            } => write!(f, "{character}: key spans {graphemes} graphemes"),
            DictionaryIssue::MissingCharacter {
                character,
                index,
                word,
            } => write!(f, "{character}: word #{index} \"{word}\" does not contain the character"),
            DictionaryIssue::DuplicateWord {
                character,
                index,
                word,
            } => write!(f, "{character}: word #{index} \"{word}\" is a duplicate"),
        }
    }
}

impl WordGroupDictionary {
    /// Check every entry and report problems, ordered by character.
    pub fn validate(&self) -> Vec<DictionaryIssue> {
        let mut issues = Vec::new();

        for (character, words) in self.iter() {
            let graphemes = character.graphemes(true).count();
            if graphemes != 1 {
                issues.push(DictionaryIssue::MultiGrapheme {
                    character: character.to_string(),
                    graphemes,
                });
            }

            if words.is_empty() {
                issues.push(DictionaryIssue::EmptyEntry {
                    character: character.to_string(),
                });
                continue;
            }

            let mut seen = HashSet::with_capacity(words.len());
            for (index, word) in words.iter().enumerate() {
                if !word.contains(character) {
                    issues.push(DictionaryIssue::MissingCharacter {
                        character: character.to_string(),
                        index,
                        word: word.clone(),
                    });
                }
                if !seen.insert(word.as_str()) {
                    issues.push(DictionaryIssue::DuplicateWord {
                        character: character.to_string(),
                        index,
                        word: word.clone(),
                    });
                }
            }
        }

        issues
    }
}
