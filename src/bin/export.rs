use std::path::Path;

use wordmine::{
    anki,
    persistence,
    WordmineError,
};

/// One-shot export: pull every reviewed word out of Anki and write the
/// vocabulary table. Any failure propagates out of main, so nothing is
/// written unless the whole extraction succeeded.
fn main() -> Result<(), WordmineError> {
    let entries = anki::export_reviewed_vocab()?;

    persistence::save_vocab(&entries, Path::new(persistence::VOCAB_FILE))?;
    println!("Exported {} words to {}", entries.len(), persistence::VOCAB_FILE);

    Ok(())
}
