//! triespell
//!
//! A vocabulary stored in a trie, with exact lookup, word removal that
//! reclaims unused branches, and spelling suggestions within a small edit
//! distance.

mod dictionary;
pub mod distance;
pub mod fuzzy;
mod lookup;
mod suggest;
pub mod trie;
mod wordlist;

pub use dictionary::{Dictionary, InitializeError};
pub use lookup::Misspelling;
pub use suggest::{SuggestError, MAX_DISTANCE};
pub use trie::{EmptyWordError, Trie};
