//! Triespell CLI
//!
//! Reads a word list, then checks words given on the command line or typed
//! interactively.

use clap::Parser;
use std::{
	io::{stdin, stdout, Write},
	path::PathBuf,
};
use triespell::{Dictionary, MAX_DISTANCE};

/// Command line arguments
#[derive(clap::Parser)]
struct Args {
	/// Word list to load, one word per line
	#[arg(long, env = "TRIESPELL_DICT")]
	dict: PathBuf,

	/// Text to check
	word: Option<String>,

	/// Read lines from stdin, `+word` adds and `-word` removes a word
	#[arg(long, short)]
	interactive: bool,

	/// Maximum edit distance of suggestions
	#[arg(long, short, default_value_t = 1, value_parser = parse_distance)]
	distance: usize,
}

/// Accepts edit distances up to [`MAX_DISTANCE`]
fn parse_distance(arg: &str) -> Result<usize, String> {
	let distance: usize = arg.parse().map_err(|err| format!("{err}"))?;
	if distance > MAX_DISTANCE {
		return Err(format!("edit distance must be at most {MAX_DISTANCE}"));
	}
	Ok(distance)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	pretty_env_logger::init();

	let args = Args::parse();
	let distance = args.distance;

	let mut dict = Dictionary::new();
	if dict.load_file(&args.dict) == 0 {
		log::warn!("dictionary is empty, every word will be reported");
	}

	if let Some(text) = args.word {
		check_and_print(&dict, &text, distance);
		return Ok(());
	}

	if args.interactive {
		loop {
			print!("check word(s) ❯ ");
			stdout().flush()?;

			let mut input = String::new();
			if let 0 = stdin().read_line(&mut input)? {
				return Ok(());
			};
			let input = input.trim();

			if let Some(word) = input.strip_prefix('+') {
				match dict.insert(&word.to_lowercase()) {
					Ok(true) => log::info!("Word `{word}` was added to the dictionary"),
					Ok(false) => log::warn!("Word `{word}` was already in the dictionary"),
					Err(err) => log::error!("Could not add `{word}`: {err}"),
				}
			} else if let Some(word) = input.strip_prefix('-') {
				match dict.remove(&word.to_lowercase()) {
					Ok(true) => log::info!("Word `{word}` was removed from the dictionary"),
					Ok(false) => log::warn!("Word `{word}` wasn't in the dictionary"),
					Err(err) => log::error!("Could not remove `{word}`: {err}"),
				}
			} else {
				check_and_print(&dict, input, distance);
			}
		}
	} else {
		Err("no action provided".into())
	}
}

/// Logs every unknown word of `text` with its suggestions
fn check_and_print(dict: &Dictionary, text: &str, distance: usize) {
	match dict.check_text(text, distance) {
		Ok(misspellings) if misspellings.is_empty() => {
			log::info!("Every word of `{text}` was found in the dictionary");
		}
		Ok(misspellings) => {
			for m in misspellings {
				if m.suggestions.is_empty() {
					log::warn!("Word `{}` wasn't found in the dictionary", m.word);
				} else {
					log::warn!(
						"Word `{}` wasn't found in the dictionary, did you mean {}?",
						m.word,
						m.suggestions.join(", ")
					);
				}
			}
		}
		Err(err) => log::error!("Could not check `{text}`: {err}"),
	}
}
