use std::collections::{
    HashMap,
    HashSet,
};

use rand::{
    seq::IndexedRandom,
    Rng,
};

use crate::core::{
    errors::WordmineError,
    models::VocabEntry,
};

/// How many words are in play at once.
pub const SAMPLE_SIZE: usize = 5;

/// Per-session quiz state: the current 5-word selection and which of those
/// words have their examples revealed. Owned by the app and mutated by
/// widget events, so transitions are unit-testable without a UI.
pub struct QuizSession {
    entries: Vec<VocabEntry>,
    selected: Vec<String>,
    revealed: HashMap<String, bool>,
}

impl QuizSession {
    /// Dedups the loaded entries by word (first occurrence wins) and draws
    /// the initial selection. Fewer than [`SAMPLE_SIZE`] distinct words is a
    /// fatal startup condition.
    pub fn new<R: Rng>(entries: Vec<VocabEntry>, rng: &mut R) -> Result<Self, WordmineError> {
        let mut seen = HashSet::new();
        let entries: Vec<VocabEntry> =
            entries.into_iter().filter(|entry| seen.insert(entry.word.clone())).collect();

        if entries.len() < SAMPLE_SIZE {
            return Err(WordmineError::DataFormat(format!(
                "need at least {} distinct words to start a quiz, found {}",
                SAMPLE_SIZE,
                entries.len()
            )));
        }

        let mut session =
            Self { entries, selected: Vec::new(), revealed: HashMap::new() };
        session.reshuffle(rng);
        Ok(session)
    }

    /// Replaces the selection with a fresh uniform sample of 5 distinct
    /// words and clears every reveal flag. The new sample may repeat the
    /// previous one.
    pub fn reshuffle<R: Rng>(&mut self, rng: &mut R) {
        self.selected = self
            .entries
            .choose_multiple(rng, SAMPLE_SIZE)
            .map(|entry| entry.word.clone())
            .collect();
        self.revealed.clear();
    }

    /// Flips the reveal flag for one word. The selection is untouched and
    /// other words' flags are unaffected.
    pub fn toggle(&mut self, word: &str) {
        let flag = self.revealed.entry(word.to_string()).or_insert(false);
        *flag = !*flag;
    }

    pub fn is_revealed(&self, word: &str) -> bool {
        self.revealed.get(word).copied().unwrap_or(false)
    }

    pub fn selected_words(&self) -> &[String] {
        &self.selected
    }

    pub fn examples_for(&self, word: &str) -> Option<&str> {
        self.entries.iter().find(|entry| entry.word == word).map(|entry| entry.examples.as_str())
    }

    pub fn total_words(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use rand::{
        rngs::StdRng,
        SeedableRng,
    };

    use super::*;

    fn entries(words: &[&str]) -> Vec<VocabEntry> {
        words
            .iter()
            .map(|word| VocabEntry {
                word: word.to_string(),
                examples: format!("- example for {}", word),
            })
            .collect()
    }

    fn session(words: &[&str]) -> QuizSession {
        let mut rng = StdRng::seed_from_u64(42);
        QuizSession::new(entries(words), &mut rng).unwrap()
    }

    const WORDS: [&str; 8] =
        ["apple", "banana", "cherry", "date", "elder", "fig", "grape", "haw"];

    #[test]
    fn too_few_distinct_words_fails() {
        let mut rng = StdRng::seed_from_u64(42);
        let result = QuizSession::new(entries(&["a", "b", "c", "d"]), &mut rng);
        assert!(matches!(result, Err(WordmineError::DataFormat(_))));

        // Duplicates don't count towards the minimum.
        let mut rng = StdRng::seed_from_u64(42);
        let result = QuizSession::new(entries(&["a", "b", "c", "d", "d", "d"]), &mut rng);
        assert!(matches!(result, Err(WordmineError::DataFormat(_))));
    }

    #[test]
    fn exactly_five_distinct_words_is_enough() {
        let quiz = session(&["a", "b", "c", "d", "e"]);
        assert_eq!(quiz.selected_words().len(), SAMPLE_SIZE);
    }

    #[test]
    fn reshuffle_draws_five_distinct_known_words_and_clears_reveals() {
        let mut quiz = session(&WORDS);
        let mut rng = StdRng::seed_from_u64(7);

        quiz.toggle("apple");
        quiz.reshuffle(&mut rng);

        assert_eq!(quiz.selected_words().len(), SAMPLE_SIZE);

        let distinct: HashSet<&String> = quiz.selected_words().iter().collect();
        assert_eq!(distinct.len(), SAMPLE_SIZE);

        for word in quiz.selected_words() {
            assert!(WORDS.contains(&word.as_str()));
        }

        for word in &WORDS {
            assert!(!quiz.is_revealed(word));
        }
    }

    #[test]
    fn toggles_are_independent_per_word() {
        let mut quiz = session(&WORDS);

        quiz.toggle("apple");
        assert!(quiz.is_revealed("apple"));

        quiz.toggle("banana");
        assert!(quiz.is_revealed("apple")); // unaffected by the second toggle
        assert!(quiz.is_revealed("banana"));

        quiz.toggle("apple");
        assert!(!quiz.is_revealed("apple"));
        assert!(quiz.is_revealed("banana"));
    }

    #[test]
    fn toggle_does_not_change_the_selection() {
        let mut quiz = session(&WORDS);
        let before = quiz.selected_words().to_vec();

        quiz.toggle(&before[0]);
        quiz.toggle(&before[1]);

        assert_eq!(quiz.selected_words(), before.as_slice());
    }

    #[test]
    fn first_occurrence_wins_on_duplicate_words() {
        let mut all = entries(&WORDS);
        all.push(VocabEntry {
            word: "apple".to_string(),
            examples: "- a later apple".to_string(),
        });

        let mut rng = StdRng::seed_from_u64(42);
        let quiz = QuizSession::new(all, &mut rng).unwrap();

        assert_eq!(quiz.total_words(), WORDS.len());
        assert_eq!(quiz.examples_for("apple"), Some("- example for apple"));
    }
}
