//! Word-bank files and the hints attached to their entries.
//!
//! A word bank is the per-lesson list of characters a learner practises:
//!
//! ```json
//! { "wordBank": [ { "word": "恒", "pinyin": "héng", "groups": ["恒星"] } ] }
//! ```
//!
//! Fields this module does not know about are kept as-is when a word bank is
//! rewritten.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;
use crate::word_group::{WordGroupDictionary, WordGroupLookup};

/// A word-bank document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WordBank {
    #[serde(rename = "wordBank", default)]
    pub entries: Vec<WordBankEntry>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One practice item of a word bank.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WordBankEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub word: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinyin: Option<String>,
    /// `None` when the source file had no `groups` field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WordBankEntry {
    /// Create an entry with just a word and its pinyin.
    pub fn new<S: Into<String>>(word: S, pinyin: Option<String>) -> Self {
        WordBankEntry {
            word: word.into(),
            pinyin,
            ..Default::default()
        }
    }

    /// The trimmed lookup key, or `None` for a blank word.
    pub fn key(&self) -> Option<&str> {
        let key = self.word.trim();
        (!key.is_empty()).then_some(key)
    }

    /// The attached word groups; empty when none are attached.
    pub fn groups(&self) -> &[String] {
        self.groups.as_deref().unwrap_or(&[])
    }
}

/// Reads `null` as the type's default, the way the word-bank producers
/// treat a missing word.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl WordBank {
    /// Parse a word bank from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a word bank from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Write the word bank as pretty-printed JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Outcome of [`attach_groups`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachReport {
    /// Entries whose `groups` changed.
    pub updated: usize,
    /// Entries for which the dictionary has no words.
    pub missing: usize,
    /// Entries that had no `groups` field and received an empty one.
    pub normalized: usize,
}

impl AttachReport {
    /// Whether the word bank differs from what was loaded.
    pub fn changed(&self) -> bool {
        self.updated > 0 || self.normalized > 0
    }
}

/// Copy each entry's word groups from the dictionary into the word bank.
///
/// Entries without dictionary words get their stale groups cleared, and an
/// empty `groups` field when they had none. Entries with a blank word are
/// left alone.
pub fn attach_groups(bank: &mut WordBank, dictionary: &WordGroupDictionary) -> AttachReport {
    let mut report = AttachReport::default();

    for entry in &mut bank.entries {
        let Some(key) = entry.key() else {
            continue;
        };
        let groups = dictionary.groups(key);

        if groups.is_empty() {
            report.missing += 1;
            match entry.groups.as_ref().map(Vec::is_empty) {
                Some(false) => {
                    entry.groups = Some(Vec::new());
                    report.updated += 1;
                }
                Some(true) => {}
                None => {
                    entry.groups = Some(Vec::new());
                    report.normalized += 1;
                }
            }
        } else if entry.groups.as_deref() != Some(groups) {
            entry.groups = Some(groups.to_vec());
            report.updated += 1;
        }
    }

    report
}

/// The rendered hint for one word-bank entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryHint {
    pub word: String,
    pub hint: String,
}

/// Render the hint of every non-blank entry, in word-bank order.
///
/// A missing pinyin is treated as an empty pronunciation.
pub fn render_hints(bank: &WordBank, lookup: &WordGroupLookup) -> Vec<EntryHint> {
    bank.entries
        .iter()
        .filter_map(|entry| {
            let key = entry.key()?;
            let pinyin = entry.pinyin.as_deref().unwrap_or("");
            Some(EntryHint {
                word: key.to_string(),
                hint: lookup.display_text(key, pinyin),
            })
        })
        .collect()
}
