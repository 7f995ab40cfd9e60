//! Character to word-group dictionary and its loaders.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use ahash::AHashMap;
use anyhow::Context;
use log::{info, warn};

use crate::error::{HanziHintError, Result};

/// An immutable mapping from a character to the ordered words that contain it.
///
/// A dictionary is assembled through [`WordGroupDictionaryBuilder`] or one of
/// the loaders and is never modified afterwards. Word order inside an entry is
/// kept exactly as supplied, duplicates included.
#[derive(Debug, Clone, Default)]
pub struct WordGroupDictionary {
    groups: AHashMap<String, Vec<String>>,
}

impl WordGroupDictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start building a dictionary.
    pub fn builder() -> WordGroupDictionaryBuilder {
        WordGroupDictionaryBuilder::new()
    }

    /// Parse a dictionary from a JSON object of the form
    /// `{"恒": ["恒星", "永恒"], ...}`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: HashMap<String, Vec<String>> = serde_json::from_str(json)?;
        let mut builder = WordGroupDictionaryBuilder::with_capacity(raw.len());
        for (character, words) in raw {
            builder.insert(character, words)?;
        }
        Ok(builder.build())
    }

    /// Load a dictionary from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Get the entry registered for a character, if any.
    pub fn get(&self, character: &str) -> Option<&[String]> {
        self.groups.get(character).map(Vec::as_slice)
    }

    /// Get the words registered for a character, or an empty slice.
    pub fn groups(&self, character: &str) -> &[String] {
        self.get(character).unwrap_or(&[])
    }

    /// Check if a character has an entry.
    pub fn contains(&self, character: &str) -> bool {
        self.groups.contains_key(character)
    }

    /// Number of characters with an entry.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the dictionary has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of words across all entries.
    pub fn word_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// All characters with an entry, sorted.
    pub fn characters(&self) -> Vec<&str> {
        let mut characters: Vec<&str> = self.groups.keys().map(String::as_str).collect();
        characters.sort_unstable();
        characters
    }

    /// Iterate over entries sorted by character.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        let mut entries: Vec<(&str, &[String])> = self
            .groups
            .iter()
            .map(|(character, words)| (character.as_str(), words.as_slice()))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries.into_iter()
    }
}

/// Mutable staging area for a [`WordGroupDictionary`].
#[derive(Debug, Default)]
pub struct WordGroupDictionaryBuilder {
    groups: AHashMap<String, Vec<String>>,
}

impl WordGroupDictionaryBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with room for `capacity` characters.
    pub fn with_capacity(capacity: usize) -> Self {
        WordGroupDictionaryBuilder {
            groups: AHashMap::with_capacity(capacity),
        }
    }

    /// Register the words for a character, replacing any earlier entry.
    pub fn insert<S: Into<String>>(&mut self, character: S, words: Vec<String>) -> Result<()> {
        let character = character.into();
        if character.is_empty() {
            return Err(HanziHintError::invalid_entry(
                "character key must not be empty",
            ));
        }
        self.groups.insert(character, words);
        Ok(())
    }

    /// Merge every entry of `other`, overriding entries for the same character.
    pub fn merge(&mut self, other: WordGroupDictionary) {
        self.groups.extend(other.groups);
    }

    /// Number of characters staged so far.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether nothing has been staged yet.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Freeze the staged entries into a dictionary.
    pub fn build(self) -> WordGroupDictionary {
        WordGroupDictionary {
            groups: self.groups,
        }
    }
}

/// Loads and merges dictionaries from several JSON files.
///
/// Sources are applied in order; a later source replaces the whole entry of a
/// character that an earlier source also defined. By default a source that
/// cannot be read or parsed is logged and skipped.
#[derive(Debug, Clone)]
pub struct DictionaryLoader {
    sources: Vec<PathBuf>,
    skip_unreadable: bool,
}

impl Default for DictionaryLoader {
    fn default() -> Self {
        DictionaryLoader {
            sources: Vec::new(),
            skip_unreadable: true,
        }
    }
}

impl DictionaryLoader {
    /// Create a loader with no sources.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one source file.
    pub fn source<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.sources.push(path.into());
        self
    }

    /// Append several source files.
    pub fn sources<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.sources.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Whether unreadable sources are skipped (true) or abort loading (false).
    pub fn skip_unreadable(mut self, skip: bool) -> Self {
        self.skip_unreadable = skip;
        self
    }

    /// Configured sources, in application order.
    pub fn paths(&self) -> &[PathBuf] {
        &self.sources
    }

    /// Load every source and merge them into one dictionary.
    pub fn load(&self) -> Result<WordGroupDictionary> {
        let mut builder = WordGroupDictionaryBuilder::new();

        for path in &self.sources {
            let loaded = WordGroupDictionary::load_from_file(path)
                .with_context(|| format!("failed to load word groups from {}", path.display()));
            match loaded {
                Ok(dictionary) => {
                    info!(
                        "Loaded word groups from {} ({} characters)",
                        path.display(),
                        dictionary.len()
                    );
                    builder.merge(dictionary);
                }
                Err(e) if self.skip_unreadable => {
                    warn!("Skipping source: {e:#}");
                }
                Err(e) => return Err(e.into()),
            }
        }

        info!("Word groups loaded: {} characters", builder.len());
        Ok(builder.build())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn write_json(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_from_json_str() {
        let dict = WordGroupDictionary::from_json_str(
            r#"{"恒": ["恒星", "永恒", "恒定"], "厘": ["厘米", "厘清", "厘定"]}"#,
        )
        .unwrap();

        assert_eq!(dict.len(), 2);
        assert_eq!(dict.word_count(), 6);
        assert_eq!(dict.groups("恒"), ["恒星", "永恒", "恒定"]);
        assert!(dict.contains("厘"));
        assert!(!dict.contains("坡"));
        assert!(dict.groups("坡").is_empty());
        assert_eq!(dict.get("坡"), None);
    }

    #[test]
    fn test_duplicates_and_order_are_kept() {
        let dict =
            WordGroupDictionary::from_json_str(r#"{"大": ["大小", "大人", "大小"]}"#).unwrap();
        assert_eq!(dict.groups("大"), ["大小", "大人", "大小"]);
    }

    #[test]
    fn test_rejects_empty_key() {
        let result = WordGroupDictionary::from_json_str(r#"{"": ["一"]}"#);
        assert!(matches!(result, Err(HanziHintError::InvalidEntry(_))));
    }

    #[test]
    fn test_rejects_wrong_shape() {
        let result = WordGroupDictionary::from_json_str(r#"{"恒": "恒星"}"#);
        assert!(matches!(result, Err(HanziHintError::Json(_))));

        let result = WordGroupDictionary::from_json_str(r#"["恒星"]"#);
        assert!(matches!(result, Err(HanziHintError::Json(_))));
    }

    #[test]
    fn test_characters_and_iter_are_sorted() {
        let mut builder = WordGroupDictionary::builder();
        builder.insert("c", vec!["cc".to_string()]).unwrap();
        builder.insert("a", vec!["aa".to_string()]).unwrap();
        builder.insert("b", vec![]).unwrap();
        let dict = builder.build();

        assert_eq!(dict.characters(), vec!["a", "b", "c"]);
        let keys: Vec<&str> = dict.iter().map(|(c, _)| c).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_builder_merge_overrides() {
        let first = WordGroupDictionary::from_json_str(r#"{"恒": ["恒星"], "厘": ["厘米"]}"#)
            .unwrap();
        let second = WordGroupDictionary::from_json_str(r#"{"恒": ["永恒"]}"#).unwrap();

        let mut builder = WordGroupDictionaryBuilder::new();
        builder.merge(first);
        builder.merge(second);
        let dict = builder.build();

        assert_eq!(dict.groups("恒"), ["永恒"]);
        assert_eq!(dict.groups("厘"), ["厘米"]);
    }

    #[test]
    fn test_load_from_file() {
        let file = write_json(r#"{"恒": ["恒星", "永恒"]}"#);
        let dict = WordGroupDictionary::load_from_file(file.path()).unwrap();
        assert_eq!(dict.groups("恒"), ["恒星", "永恒"]);
    }

    #[test]
    fn test_load_missing_file() {
        let result = WordGroupDictionary::load_from_file("/nonexistent/word-groups.json");
        assert!(matches!(result, Err(HanziHintError::Io(_))));
    }

    #[test]
    fn test_loader_merges_in_order() {
        let base = write_json(r#"{"恒": ["恒星"], "厘": ["厘米"]}"#);
        let extra = write_json(r#"{"恒": ["永恒", "恒定"], "坡": ["山坡"]}"#);

        let dict = DictionaryLoader::new()
            .source(base.path())
            .source(extra.path())
            .load()
            .unwrap();

        assert_eq!(dict.len(), 3);
        assert_eq!(dict.groups("恒"), ["永恒", "恒定"]);
        assert_eq!(dict.groups("厘"), ["厘米"]);
        assert_eq!(dict.groups("坡"), ["山坡"]);
    }

    #[test]
    fn test_loader_skips_unreadable_sources() {
        let good = write_json(r#"{"恒": ["恒星"]}"#);
        let broken = write_json("not json");

        let dict = DictionaryLoader::new()
            .sources([
                good.path().to_path_buf(),
                broken.path().to_path_buf(),
                PathBuf::from("/nonexistent/word-groups.json"),
            ])
            .load()
            .unwrap();

        assert_eq!(dict.len(), 1);
        assert_eq!(dict.groups("恒"), ["恒星"]);
    }

    #[test]
    fn test_loader_strict_mode_fails() {
        let good = write_json(r#"{"恒": ["恒星"]}"#);

        let result = DictionaryLoader::new()
            .source(good.path())
            .source("/nonexistent/word-groups.json")
            .skip_unreadable(false)
            .load();

        let err = result.unwrap_err();
        assert!(matches!(err, HanziHintError::Anyhow(_)));
        let message = err.to_string();
        assert!(message.contains("failed to load word groups from /nonexistent/word-groups.json"));
        assert!(message.contains("I/O error"));
    }

    #[test]
    fn test_loader_strict_mode_keeps_parse_cause() {
        let broken = write_json(r#"{"恒": "恒星"}"#);

        let err = DictionaryLoader::new()
            .source(broken.path())
            .skip_unreadable(false)
            .load()
            .unwrap_err();

        let HanziHintError::Anyhow(inner) = err else {
            panic!("Expected Anyhow error variant");
        };
        let cause = inner.downcast_ref::<HanziHintError>().unwrap();
        assert!(matches!(cause, HanziHintError::Json(_)));
    }

    #[test]
    fn test_loader_without_sources() {
        let loader = DictionaryLoader::new();
        assert!(loader.paths().is_empty());
        assert!(loader.load().unwrap().is_empty());
    }
}
