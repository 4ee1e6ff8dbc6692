//! Bounded fuzzy search over a trie
//!
//! The trie is walked depth first while one Levenshtein row is kept per
//! depth. Each descent derives the child's row from its parent's, so the
//! prefix shared by many words is only ever compared to the query once.

use crate::{distance, trie::Traverse};

/// Largest edit distance accepted by [`FuzzyMatcher::suggest`]
pub const MAX_DISTANCE: usize = 3;

/// Ways a fuzzy query could be refused
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SuggestError {
	/// Query had no symbol
	#[error(transparent)]
	EmptyWord(#[from] crate::trie::EmptyWordError),

	/// Requested distance is over [`MAX_DISTANCE`]
	#[error("edit distance {0} is over the maximum of {max}", max = MAX_DISTANCE)]
	DistanceTooLarge(usize),
}

/// Enumerates stored words close to a query
pub struct FuzzyMatcher<'t, N> {
	/// Node under which words are searched, itself never suggested
	root: &'t N,
}

impl<'t, N: Traverse> FuzzyMatcher<'t, N> {
	/// Matcher over the words below `root`
	pub const fn new(root: &'t N) -> Self {
		Self { root }
	}

	/// Every stored word within `max_distance` edits of `word`, `word` itself excluded
	///
	/// Words come out in traversal order, not sorted by distance.
	///
	/// # Errors
	///
	/// Fails when `word` is empty or `max_distance` is over [`MAX_DISTANCE`].
	pub fn suggest(
		&self,
		word: &[N::Symbol],
		max_distance: usize,
	) -> Result<Vec<Vec<N::Symbol>>, SuggestError> {
		if word.is_empty() {
			return Err(crate::trie::EmptyWordError.into());
		}
		if max_distance > MAX_DISTANCE {
			return Err(SuggestError::DistanceTooLarge(max_distance));
		}

		let mut search = Search {
			query: word,
			max_distance,
			prefix: Vec::new(),
			suggestions: Vec::new(),
		};
		let row = distance::first_row(word.len());
		for (symbol, child) in self.root.children() {
			search.visit(child, symbol, &row);
		}

		log::trace!("{} suggestion(s) found", search.suggestions.len());
		Ok(search.suggestions)
	}
}

/// State of one traversal
struct Search<'q, S> {
	/// Word suggestions are compared to
	query: &'q [S],
	/// Largest accepted edit distance
	max_distance: usize,
	/// Word spelled by the path from the root to the visited node
	prefix: Vec<S>,
	/// Words found so far, in traversal order
	suggestions: Vec<Vec<S>>,
}

impl<S: Copy + PartialEq> Search<'_, S> {
	/// Visits `node`, reached from its parent through `symbol`
	fn visit<N: Traverse<Symbol = S>>(&mut self, node: &N, symbol: S, parent_row: &[usize]) {
		let row = distance::next_row(parent_row, symbol, self.query);
		self.prefix.push(symbol);

		let distance = row[self.query.len()];
		if node.is_terminal() && distance <= self.max_distance && self.prefix != self.query {
			self.suggestions.push(self.prefix.clone());
		}

		// Every extension of the prefix goes through one of these cells
		if row.iter().min().is_some_and(|min| *min <= self.max_distance) {
			for (symbol, child) in node.children() {
				self.visit(child, symbol, &row);
			}
		} else {
			log::trace!("pruned at depth {}", self.prefix.len());
		}

		self.prefix.pop();
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::trie::Trie;

	fn chars(word: &str) -> Vec<char> {
		word.chars().collect()
	}

	fn trie_of(words: &[&str]) -> Trie<char> {
		let mut trie = Trie::default();
		for word in words {
			trie.insert(&chars(word)).unwrap();
		}
		trie
	}

	fn suggest(trie: &Trie<char>, word: &str, max_distance: usize) -> Vec<String> {
		FuzzyMatcher::new(trie.root())
			.suggest(&chars(word), max_distance)
			.unwrap()
			.into_iter()
			.map(String::from_iter)
			.collect()
	}

	#[test]
	fn finds_single_substitution() {
		let trie = trie_of(&["hello", "help", "hell", "header", "helicopter", "helo"]);

		assert_eq!(suggest(&trie, "hallo", 1), ["hello"]);
	}

	#[test]
	fn results_follow_symbol_order() {
		let trie = trie_of(&["helo", "hell", "hello", "help"]);

		assert_eq!(suggest(&trie, "hel", 1), ["hell", "helo", "help"]);
	}

	#[test]
	fn query_itself_is_excluded() {
		let trie = trie_of(&["hello", "hell"]);

		assert_eq!(suggest(&trie, "hello", 1), ["hell"]);
		assert!(suggest(&trie, "hello", 0).is_empty());
	}

	#[test]
	fn zero_distance_finds_nothing() {
		let trie = trie_of(&["cat", "cart"]);

		assert!(suggest(&trie, "cat", 0).is_empty());
		assert!(suggest(&trie, "dog", 0).is_empty());
	}

	#[test]
	fn empty_store_suggests_nothing() {
		let trie = Trie::default();

		assert!(suggest(&trie, "anything", MAX_DISTANCE).is_empty());
	}

	#[test]
	fn reaches_words_much_shorter_than_query() {
		let trie = trie_of(&["a", "ab", "abcdef"]);

		assert_eq!(suggest(&trie, "abc", 2), ["a", "ab"]);
	}

	#[test]
	fn rejects_bad_queries() {
		let trie = trie_of(&["word"]);
		let matcher = FuzzyMatcher::new(trie.root());

		assert_eq!(
			matcher.suggest(&[], 1),
			Err(SuggestError::EmptyWord(crate::trie::EmptyWordError))
		);
		assert_eq!(
			matcher.suggest(&chars("word"), MAX_DISTANCE + 1),
			Err(SuggestError::DistanceTooLarge(MAX_DISTANCE + 1))
		);
	}
}
