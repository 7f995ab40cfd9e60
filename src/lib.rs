//! # hanzi-hint
//!
//! Word-group hints for Chinese character practice.
//!
//! Given a character and its pronunciation, produce a short hint listing
//! common words that contain the character, with the character blanked out:
//!
//! ```
//! use hanzi_hint::word_group::{WordGroupDictionary, WordGroupLookup};
//!
//! let dictionary = WordGroupDictionary::from_json_str(
//!     r#"{"恒": ["恒星", "永恒", "恒定"]}"#,
//! ).unwrap();
//! let lookup = WordGroupLookup::new(dictionary);
//!
//! assert_eq!(lookup.display_text("恒", "héng"), "héng (___星，永___，___定)");
//! assert_eq!(lookup.display_text("坡", "pō"), "pō");
//! ```

pub mod cli;
pub mod error;
pub mod word_group;
pub mod wordbank;

pub mod prelude {
    pub use crate::error::{HanziHintError, Result};
    pub use crate::word_group::{
        DictionaryLoader, LookupConfig, WordGroupDictionary, WordGroupDictionaryBuilder,
        WordGroupLookup,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
