//! Parser for plain word lists
//!
//! One word per line. Blank lines and lines starting with `#` are skipped.
//! Hunspell `.dic` files are accepted too: the leading word count is read as
//! a hint, and flags (`word/FLAGS`) or morphological fields after the word
//! are dropped.

use crate::dictionary::InitializeError;
use nom::{
	branch::alt,
	bytes::complete::{is_not, tag},
	character::complete::{line_ending, not_line_ending, space0, space1, u64 as u64_p},
	combinator::{eof, value},
	multi::many0,
	IResult, Parser,
};
use nom_supreme::ParserExt;

/// Words read from a list, borrowed from its content
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct WordList<'a> {
	/// Word count announced on the first line, if any
	pub(crate) declared: Option<u64>,
	/// Words in file order, duplicates included
	pub(crate) words: Vec<&'a str>,
}

impl<'a> WordList<'a> {
	/// Parses a whole list, failing on any line it cannot read
	pub(crate) fn parse(i: &'a str) -> Result<Self, InitializeError> {
		let parser_err = |e: nom::Err<nom::error::Error<_>>| InitializeError::Parser(e.to_string());

		let (i, declared) = u64_p
			.terminated(space0.precedes(line_ending))
			.opt()
			.parse(i)
			.map_err(parser_err)?;
		let (_, lines) = many0(parse_line)
			.all_consuming()
			.parse(i)
			.map_err(parser_err)?;

		let words: Vec<&str> = lines.into_iter().flatten().collect();

		if let Some(declared) = declared {
			if u64::try_from(words.len()).ok() != Some(declared) {
				log::warn!(
					"word list announced {declared} words but contains {}",
					words.len()
				);
			}
		}

		Ok(Self { declared, words })
	}
}

/// Line ending, or the end of a list lacking a final newline
fn end_of_line(i: &str) -> IResult<&str, &str> {
	alt((line_ending, eof))(i)
}

/// Yields the word found on this line, if any
fn parse_line(i: &str) -> IResult<&str, Option<&str>> {
	alt((
		value(None, tag("#").precedes(not_line_ending).terminated(end_of_line)),
		value(None, space0.precedes(line_ending)),
		// Trailing blanks without a final newline
		value(None, space1.terminated(eof)),
		parse_word.map(Some),
	))(i)
}

/// Word with its optional flags and trailing fields, up to the end of the line
fn parse_word(i: &str) -> IResult<&str, &str> {
	space0
		.precedes(is_not(" \t/\r\n"))
		.terminated(tag("/").precedes(is_not(" \t\r\n").opt()).opt())
		.terminated(space1.precedes(not_line_ending).opt())
		.terminated(end_of_line)
		.parse(i)
}
