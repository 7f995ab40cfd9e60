//! Query operations over a loaded word-group dictionary.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::word_group::dictionary::WordGroupDictionary;
use crate::word_group::mask::{BLANK_MARKER, mask_character};

/// Full-width comma placed between masked words.
pub const GROUP_SEPARATOR: &str = "，";

/// Number of words shown in a hint.
pub const MAX_DISPLAY_GROUPS: usize = 3;

/// Rendering settings for hints.
///
/// The defaults produce `"héng (___星，永___，___定)"` style output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Maximum number of words taken from the front of an entry.
    pub max_groups: usize,
    /// Replacement for the target character.
    pub blank_marker: String,
    /// Separator between masked words.
    pub separator: String,
}

impl Default for LookupConfig {
    fn default() -> Self {
        LookupConfig {
            max_groups: MAX_DISPLAY_GROUPS,
            blank_marker: BLANK_MARKER.to_string(),
            separator: GROUP_SEPARATOR.to_string(),
        }
    }
}

impl LookupConfig {
    /// Load settings from a JSON file. Missing fields keep their defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Read-only lookup of word groups and hint text.
///
/// Holds a shared snapshot of a [`WordGroupDictionary`]; clones share the same
/// dictionary and can be handed to any number of threads.
#[derive(Debug, Clone)]
pub struct WordGroupLookup {
    dictionary: Arc<WordGroupDictionary>,
    config: LookupConfig,
}

impl WordGroupLookup {
    /// Create a lookup with the default rendering settings.
    pub fn new<D: Into<Arc<WordGroupDictionary>>>(dictionary: D) -> Self {
        Self::with_config(dictionary, LookupConfig::default())
    }

    /// Create a lookup with custom rendering settings.
    pub fn with_config<D: Into<Arc<WordGroupDictionary>>>(
        dictionary: D,
        config: LookupConfig,
    ) -> Self {
        WordGroupLookup {
            dictionary: dictionary.into(),
            config,
        }
    }

    /// The dictionary this lookup reads from.
    pub fn dictionary(&self) -> &WordGroupDictionary {
        &self.dictionary
    }

    /// The rendering settings.
    pub fn config(&self) -> &LookupConfig {
        &self.config
    }

    /// Words registered for `character`, in their original order.
    ///
    /// An unknown character yields an empty slice.
    pub fn groups(&self, character: &str) -> &[String] {
        self.dictionary.groups(character)
    }

    /// Render the hint for `character`.
    ///
    /// Without registered words the pronunciation is returned verbatim.
    /// Otherwise the first few words are masked and appended in parentheses:
    /// `"héng (___星，永___，___定)"`.
    pub fn display_text(&self, character: &str, pronunciation: &str) -> String {
        let groups = self.groups(character);
        let take = groups.len().min(self.config.max_groups);
        if take == 0 {
            return pronunciation.to_string();
        }

        let masked: Vec<String> = groups[..take]
            .iter()
            .map(|word| mask_character(word, character, &self.config.blank_marker))
            .collect();

        format!("{pronunciation} ({})", masked.join(&self.config.separator))
    }
}
