use std::{fs, path::Path};
use triespell::{Dictionary, InitializeError};

/// A few words in Hunspell's `.dic` layout
const EN_SAMPLE: &str = "\
8
created/U
create/XKVNGADS
hello
Hunspell
NASA
text
text
won't
";

#[test]
fn loads_and_counts_words() -> Result<(), Box<dyn std::error::Error>> {
	let dir = tempfile::tempdir()?;
	let path = dir.path().join("en.dic");
	fs::write(&path, EN_SAMPLE)?;

	let mut dict = Dictionary::new();

	// `text` appears twice
	assert_eq!(dict.load_file(&path), 7);
	assert_eq!(dict.len(), 7);
	assert_eq!(dict.lookup("hunspell"), Ok(true));
	assert_eq!(dict.lookup("won't"), Ok(true));

	// Nothing new the second time
	assert_eq!(dict.load_file(&path), 0);
	assert_eq!(dict.len(), 7);
	Ok(())
}

#[test]
fn missing_file_loads_nothing() {
	let mut dict = Dictionary::new();

	assert_eq!(dict.load_file(Path::new("/definitely/not/a/word/list")), 0);
	assert!(dict.is_empty());
}

#[test]
fn empty_file_loads_nothing() -> Result<(), Box<dyn std::error::Error>> {
	let file = tempfile::NamedTempFile::new()?;

	let mut dict = Dictionary::from_slice("kept\n")?;

	assert_eq!(dict.load_file(file.path()), 0);
	assert_eq!(dict.words(), ["kept"]);
	Ok(())
}

#[test]
fn from_file_reports_io_errors() {
	let result = Dictionary::from_file(Path::new("/definitely/not/a/word/list"));

	assert!(matches!(result, Err(InitializeError::Io(_))));
}
