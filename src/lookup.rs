//! Logic of the [`Dictionary`] to validate words and text

use crate::{
	dictionary::symbols,
	fuzzy::SuggestError,
	trie::EmptyWordError,
	Dictionary,
};
use regex::Regex;
use std::{ops::Range, sync::OnceLock};

/// Runs of letters, apostrophes allowed between them (`can't`, `o’clock`)
const WORD_PATTERN: &str = r"\p{Alphabetic}+(?:['’]\p{Alphabetic}+)*";

/// Compiled once, on first use
fn word_regex() -> &'static Regex {
	static WORD: OnceLock<Regex> = OnceLock::new();
	WORD.get_or_init(|| Regex::new(WORD_PATTERN).expect("word pattern is a valid regex"))
}

/// A word of a text that is not in the dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Misspelling {
	/// Lower-cased word as looked up
	pub word: String,
	/// Byte range of the word in the checked text
	pub span: Range<usize>,
	/// Stored words close to `word`
	pub suggestions: Vec<String>,
}

/// Methods for querying the dictionary
impl Dictionary {
	/// Whether `word` is stored as a full word, a stored prefix is not enough
	///
	/// # Errors
	///
	/// Will error if `word` is empty.
	pub fn lookup(&self, word: &str) -> Result<bool, EmptyWordError> {
		self.words.search(&symbols(word))
	}

	/// Finds every unknown word of `text`, along with suggestions within `max_distance`
	///
	/// Words are lower-cased before being looked up.
	///
	/// # Errors
	///
	/// Will error if `max_distance` is too large, see [`Dictionary::suggest`].
	pub fn check_text(
		&self,
		text: &str,
		max_distance: usize,
	) -> Result<Vec<Misspelling>, SuggestError> {
		let mut misspellings = vec![];

		for found in word_regex().find_iter(text) {
			let word = found.as_str().to_lowercase();
			if self.lookup(&word)? {
				continue;
			}

			let suggestions = self.suggest(&word, max_distance)?;
			log::debug!("`{word}` is unknown, {} suggestion(s)", suggestions.len());
			misspellings.push(Misspelling {
				word,
				span: found.range(),
				suggestions,
			});
		}

		Ok(misspellings)
	}
}
