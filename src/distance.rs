//! Levenshtein distance, computed one table row at a time
//!
//! A row holds the distances between a fixed prefix of the candidate and
//! every prefix of the query, so `row[0]` is the candidate prefix length and
//! the last cell is the distance to the whole query.

/// Distances from the empty candidate to every prefix of a query of `query_len` symbols
pub(crate) fn first_row(query_len: usize) -> Vec<usize> {
	(0..=query_len).collect()
}

/// Extends the candidate prefix behind `previous` by `symbol`
///
/// Substitutions, insertions and deletions all cost one.
pub(crate) fn next_row<S: PartialEq>(previous: &[usize], symbol: S, query: &[S]) -> Vec<usize> {
	let mut row = Vec::with_capacity(previous.len());
	row.push(previous[0] + 1);

	for (column, query_symbol) in query.iter().enumerate() {
		let substitution = previous[column] + usize::from(*query_symbol != symbol);
		let insertion = row[column] + 1;
		let deletion = previous[column + 1] + 1;
		row.push(substitution.min(insertion).min(deletion));
	}

	row
}

/// Minimum number of single symbol edits turning `a` into `b`
pub fn levenshtein<S: PartialEq + Copy>(a: &[S], b: &[S]) -> usize {
	let last = a
		.iter()
		.fold(first_row(b.len()), |row, symbol| next_row(&row, *symbol, b));
	last[b.len()]
}
