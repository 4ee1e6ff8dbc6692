//! Logic of the [`Dictionary`] to suggest words

use crate::{dictionary::symbols, fuzzy::FuzzyMatcher, Dictionary};

pub use crate::fuzzy::{SuggestError, MAX_DISTANCE};

/// Methods for suggesting words based on the dictionary
impl Dictionary {
	/// Stored words within `max_distance` edits of `word`, `word` itself excluded
	///
	/// Suggestions come in alphabetical order, not ranked by distance. Use
	/// [`Dictionary::lookup`] to know whether `word` itself is stored.
	///
	/// # Errors
	///
	/// Will error if `word` is empty or `max_distance` is over [`MAX_DISTANCE`].
	pub fn suggest(&self, word: &str, max_distance: usize) -> Result<Vec<String>, SuggestError> {
		let suggestions = FuzzyMatcher::new(self.words.root()).suggest(&symbols(word), max_distance)?;
		Ok(suggestions.into_iter().map(String::from_iter).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn suggests_after_edits() -> Result<(), Box<dyn std::error::Error>> {
		let mut dict: Dictionary = ["hello", "help", "hell"].into_iter().collect();
		assert_eq!(dict.suggest("helo", 1)?, ["hell", "hello", "help"]);

		dict.remove("hell")?;
		dict.insert("halo")?;
		assert_eq!(dict.suggest("helo", 1)?, ["halo", "hello", "help"]);
		Ok(())
	}

	#[test]
	fn rejects_large_distances() {
		let dict: Dictionary = ["hello"].into_iter().collect();

		assert_eq!(
			dict.suggest("hello", MAX_DISTANCE + 2),
			Err(SuggestError::DistanceTooLarge(MAX_DISTANCE + 2))
		);
	}
}
