use std::path::Path;

use crate::core::{
    errors::WordmineError,
    models::VocabEntry,
};

/// Fixed name of the exported vocabulary table, written to and read from the
/// working directory.
pub const VOCAB_FILE: &str = "english_words_seen.csv";

const WORD_COLUMN: &str = "English_Word";
const EXAMPLES_COLUMN: &str = "Examples";

/// Writes the vocabulary table, overwriting any existing file. The csv
/// writer quotes fields containing commas, quotes, or the embedded newlines
/// that bullet-formatted examples carry.
pub fn save_vocab(entries: &[VocabEntry], path: &Path) -> Result<(), WordmineError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([WORD_COLUMN, EXAMPLES_COLUMN])?;

    for entry in entries {
        writer.write_record([entry.word.as_str(), entry.examples.as_str()])?;
    }

    writer.flush()?;
    Ok(())
}

/// Reads the vocabulary table back. Words and examples are trimmed and rows
/// without a usable word are dropped, so the result may be shorter than the
/// file.
pub fn load_vocab(path: &Path) -> Result<Vec<VocabEntry>, WordmineError> {
    if !path.exists() {
        return Err(WordmineError::DataFormat(format!(
            "vocabulary file not found: {}",
            path.display()
        )));
    }

    let mut reader = csv::Reader::from_path(path)?;
    let mut entries = Vec::new();

    for record in reader.records() {
        let record = record?;
        let word = record.get(0).unwrap_or("").trim();
        if word.is_empty() {
            continue;
        }

        entries.push(VocabEntry {
            word: word.to_string(),
            examples: record.get(1).unwrap_or("").trim().to_string(),
        });
    }

    Ok(entries)
}
