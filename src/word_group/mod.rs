//! Word-group lookup for character hints.
//!
//! A [`WordGroupDictionary`] maps a single character to the ordered list of
//! common words that contain it. [`WordGroupLookup`] answers queries over a
//! loaded dictionary and renders the masked hint shown next to a character.

pub mod dictionary;
pub mod lookup;
pub mod mask;
pub mod validate;

// Re-export commonly used types
pub use dictionary::*;
pub use lookup::*;
pub use mask::*;
pub use validate::*;
