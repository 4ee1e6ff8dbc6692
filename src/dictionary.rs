//! High level interface over a trie of words
//!
//! Entrypoint methods are
//! - [`Dictionary::lookup`]: looks though the dictionary to check if a word is stored
//! - [`Dictionary::suggest`]: finds words close to a misspelled one
//! - [`Dictionary::insert`] and [`Dictionary::remove`]: edit the vocabulary
//!
//! Words are taken as is, callers are expected to case fold them beforehand.
//! Only the word list loaders lower-case what they read.

use crate::{
	trie::{EmptyWordError, Trie},
	wordlist::WordList,
};
use std::{fs, io, path::Path};

/// Vocabulary backed by a [`Trie`] of `char`s
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
	/// Stored words, spelled as `char`s
	pub(crate) words: Trie<char>,
}

/// Ways initializing a [`Dictionary`] could go wrong
#[derive(Debug, thiserror::Error)]
pub enum InitializeError {
	/// Could not parse the word list
	#[error("Could not parse file: {0}")]
	Parser(String),

	/// Could not correctly open given file
	#[error(transparent)]
	Io(#[from] io::Error),

	/// Word list contained a word that cannot be stored
	#[error(transparent)]
	Word(#[from] EmptyWordError),
}

/// Splits `word` into the symbols stored in the trie
pub(crate) fn symbols(word: &str) -> Vec<char> {
	word.chars().collect()
}

/// Constructors
impl Dictionary {
	/// Empty dictionary
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a dictionary from the content of a word list
	///
	/// # Errors
	///
	/// Will error if the word list cannot be parsed.
	pub fn from_slice(content: &str) -> Result<Self, InitializeError> {
		let mut dict = Self::new();
		dict.extend_from_slice(content)?;
		Ok(dict)
	}

	/// Reads a word list from `path`
	///
	/// # Errors
	///
	/// Will error if the file cannot be read or parsed.
	pub fn from_file(path: &Path) -> Result<Self, InitializeError> {
		let mut dict = Self::new();
		dict.extend_from_file(path)?;
		Ok(dict)
	}

	/// Adds every word of the list at `path`, returns how many were not yet stored
	///
	/// An unreadable, empty or malformed source is reported and counts as zero
	/// words loaded. Nothing is inserted from a source that fails to parse.
	pub fn load_file(&mut self, path: &Path) -> usize {
		match self.extend_from_file(path) {
			Ok(0) => {
				log::warn!("no new word loaded from `{}`", path.display());
				0
			}
			Ok(loaded) => {
				log::info!("loaded {loaded} word(s) from `{}`", path.display());
				loaded
			}
			Err(err) => {
				log::warn!("could not load `{}`: {err}", path.display());
				0
			}
		}
	}

	fn extend_from_file(&mut self, path: &Path) -> Result<usize, InitializeError> {
		let buffer = fs::read_to_string(path)?;
		self.extend_from_slice(&buffer)
	}

	/// Parses the whole list before inserting anything
	fn extend_from_slice(&mut self, content: &str) -> Result<usize, InitializeError> {
		let list = WordList::parse(content)?;

		let mut loaded = 0;
		for word in list.words {
			if self.words.insert(&symbols(&word.to_lowercase()))? {
				loaded += 1;
			}
		}
		Ok(loaded)
	}
}

/// Editing the vocabulary
impl Dictionary {
	/// Stores `word`, returns `false` if it was already known
	///
	/// # Errors
	///
	/// Will error if `word` is empty.
	pub fn insert(&mut self, word: &str) -> Result<bool, EmptyWordError> {
		let inserted = self.words.insert(&symbols(word))?;
		log::debug!("insert `{word}`: {}", if inserted { "new" } else { "known" });
		Ok(inserted)
	}

	/// Forgets `word`, returns `false` if it was not stored
	///
	/// # Errors
	///
	/// Will error if `word` is empty.
	pub fn remove(&mut self, word: &str) -> Result<bool, EmptyWordError> {
		self.words.remove(&symbols(word))
	}

	/// Number of stored words
	#[must_use]
	pub const fn len(&self) -> usize {
		self.words.len()
	}

	/// Whether no word is stored
	#[must_use]
	pub const fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	/// Every stored word in alphabetical order
	#[must_use]
	pub fn words(&self) -> Vec<String> {
		self.words.words().into_iter().map(String::from_iter).collect()
	}

	/// Whether some stored word starts with `prefix`
	#[must_use]
	pub fn contains_prefix(&self, prefix: &str) -> bool {
		self.words.contains_prefix(&symbols(prefix))
	}
}

impl<'a> Extend<&'a str> for Dictionary {
	/// Empty words are skipped
	fn extend<T: IntoIterator<Item = &'a str>>(&mut self, iter: T) {
		for word in iter {
			if self.insert(word).is_err() {
				log::debug!("skipped an empty word");
			}
		}
	}
}

impl<'a> FromIterator<&'a str> for Dictionary {
	fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
		let mut dict = Self::new();
		dict.extend(iter);
		dict
	}
}
