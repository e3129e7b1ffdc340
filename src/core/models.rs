use serde::{
    Deserialize,
    Serialize,
};

/// One exported word together with its bullet-formatted example sentences.
/// Words are unique within an export; the first note to use a word wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabEntry {
    pub word: String,
    pub examples: String,
}
