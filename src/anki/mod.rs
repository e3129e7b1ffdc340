use std::collections::HashSet;

use crate::core::{
    errors::WordmineError,
    markup::html_to_bullets,
    models::VocabEntry,
};

pub mod api;

use api::{
    Card,
    Note,
};

/// Cards with at least one review repetition.
pub const SEARCH_QUERY: &str = "prop:reps>0";

pub const WORD_FIELD: &str = "English_Word";
pub const EXAMPLES_FIELD: &str = "Examples_EN_HTML";

/// Note ids of every reviewed card, first-seen order, duplicates removed.
pub fn reviewed_note_ids(cards: &[Card]) -> Vec<u64> {
    let mut seen = HashSet::new();
    cards
        .iter()
        .filter(|card| card.reps > 0)
        .map(|card| card.note)
        .filter(|note_id| seen.insert(*note_id))
        .collect()
}

/// Builds vocabulary entries from note records. Notes with an empty word are
/// skipped, and a word already emitted by an earlier note wins over later
/// duplicates.
pub fn extract_entries(notes: &[Note]) -> Vec<VocabEntry> {
    let mut seen_words = HashSet::new();
    let mut entries = Vec::new();

    for note in notes {
        let word = note.field_value(WORD_FIELD).trim();
        if word.is_empty() || !seen_words.insert(word.to_string()) {
            continue;
        }

        entries.push(VocabEntry {
            word: word.to_string(),
            examples: html_to_bullets(note.field_value(EXAMPLES_FIELD)),
        });
    }

    entries
}

/// Runs the whole extraction against AnkiConnect: find reviewed cards, fetch
/// their info, resolve owning notes, fetch note info, assemble entries. Any
/// API failure aborts the run before anything is written.
pub fn export_reviewed_vocab() -> Result<Vec<VocabEntry>, WordmineError> {
    let card_ids = api::find_cards(SEARCH_QUERY)?;
    let cards = api::cards_info(&card_ids)?;

    let note_ids = reviewed_note_ids(&cards);
    let notes = api::notes_info(&note_ids)?;

    Ok(extract_entries(&notes))
}
