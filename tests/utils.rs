use triespell::Dictionary;

#[derive(Debug, thiserror::Error)]
#[error("{0} word failed to be correctly spellchecked")]
struct SpellCheckErrors(usize);

/// Expected suggestions for a word at a given distance, in any order
pub(crate) struct Suggestions<'a> {
	pub(crate) word: &'a str,
	pub(crate) distance: usize,
	pub(crate) expected: &'a [&'a str],
}

pub(crate) fn test_word_list(
	words: &str,
	good: &[&str],
	wrong: &[&str],
	suggestions: &[Suggestions<'_>],
) -> Result<Dictionary, Box<dyn std::error::Error>> {
	let _ = pretty_env_logger::try_init();

	let dict = Dictionary::from_slice(words)?;

	let mut errors = 0;

	errors += good
		.iter()
		.filter(|w| {
			if dict.lookup(w).unwrap_or_default() {
				log::info!("{w} is indeed fine");
				false
			} else {
				log::error!("{w} is supposed to be fine but is wrong");
				true
			}
		})
		.count();

	errors += wrong
		.iter()
		.filter(|w| {
			if dict.lookup(w).unwrap_or_default() {
				log::error!("{w} is supposed to be wrong but is fine");
				true
			} else {
				log::info!("{w} is indeed wrong");
				false
			}
		})
		.count();

	for s in suggestions {
		let mut found = dict.suggest(s.word, s.distance)?;
		found.sort_unstable();
		let mut expected = s.expected.to_vec();
		expected.sort_unstable();

		if found == expected {
			log::info!("{} gets the expected suggestions", s.word);
		} else {
			log::error!("{} suggests {found:?} instead of {expected:?}", s.word);
			errors += 1;
		}
	}

	if errors == 0 {
		Ok(dict)
	} else {
		Err(Box::new(SpellCheckErrors(errors)))
	}
}
