use std::collections::HashMap;

use reqwest::blocking::Client;
use serde::{
    Deserialize,
    Serialize,
};

use crate::core::errors::WordmineError;

const ANKI_CONNECT_URL: &str = "http://127.0.0.1:8765";
const API_VERSION: u64 = 6;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Field {
    pub value: String,
    order: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub note_id: u64,
    pub fields: HashMap<String, Field>,
}

impl Note {
    /// Field lookup against the known schema. Absent fields are an explicit
    /// empty string, not a fallback chain.
    pub fn field_value(&self, name: &str) -> &str {
        self.fields.get(name).map(|field| field.value.as_str()).unwrap_or("")
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub card_id: u64,
    pub note: u64,
    pub reps: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub result: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn into_result(self) -> Result<Option<T>, WordmineError> {
        match self.error {
            Some(message) => Err(WordmineError::AnkiConnect(message)),
            None => Ok(self.result),
        }
    }
}

fn make_request<T: for<'de> Deserialize<'de> + Default>(
    action: &str,
    params: Option<serde_json::Value>,
) -> Result<T, WordmineError> {
    let mut body = serde_json::Map::new();
    body.insert("action".to_string(), serde_json::Value::String(action.to_string()));
    body.insert("version".to_string(), serde_json::Value::Number(API_VERSION.into()));

    if let Some(params) = params {
        body.insert("params".to_string(), params);
    }

    let response: ApiResponse<T> = Client::new()
        .post(ANKI_CONNECT_URL)
        .json(&body)
        .send()?
        .error_for_status()?
        .json()?;

    Ok(response.into_result()?.unwrap_or_default())
}

pub fn find_cards(query: &str) -> Result<Vec<u64>, WordmineError> {
    let params = serde_json::json!({ "query": query });
    make_request("findCards", Some(params))
}

pub fn cards_info(card_ids: &[u64]) -> Result<Vec<Card>, WordmineError> {
    if card_ids.is_empty() {
        return Ok(Vec::new());
    }
    let params = serde_json::json!({ "cards": card_ids });
    make_request("cardsInfo", Some(params))
}

pub fn notes_info(note_ids: &[u64]) -> Result<Vec<Note>, WordmineError> {
    if note_ids.is_empty() {
        return Ok(Vec::new());
    }
    let params = serde_json::json!({ "notes": note_ids });
    make_request("notesInfo", Some(params))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_field_becomes_anki_connect_error() {
        let response: ApiResponse<Vec<u64>> =
            serde_json::from_value(serde_json::json!({
                "result": null,
                "error": "collection is not available"
            }))
            .unwrap();

        match response.into_result() {
            Err(WordmineError::AnkiConnect(message)) => {
                assert_eq!(message, "collection is not available");
            }
            other => panic!("expected AnkiConnect error, got {:?}", other),
        }
    }

    #[test]
    fn null_error_passes_result_through() {
        let response: ApiResponse<Vec<u64>> =
            serde_json::from_value(serde_json::json!({
                "result": [1, 2, 3],
                "error": null
            }))
            .unwrap();

        assert_eq!(response.into_result().unwrap(), Some(vec![1, 2, 3]));
    }

    #[test]
    fn card_deserializes_from_cards_info_payload() {
        // cardsInfo returns the owning note id under "note"; extra fields
        // in the payload are ignored.
        let card: Card = serde_json::from_value(serde_json::json!({
            "cardId": 1498938915662u64,
            "note": 1502298033753u64,
            "reps": 4,
            "deckName": "Default",
            "queue": 2
        }))
        .unwrap();

        assert_eq!(card.card_id, 1498938915662);
        assert_eq!(card.note, 1502298033753);
        assert_eq!(card.reps, 4);
    }

    #[test]
    fn absent_note_field_is_empty() {
        let note: Note = serde_json::from_value(serde_json::json!({
            "noteId": 1502298033753u64,
            "fields": {
                "English_Word": { "value": "apple", "order": 0 }
            }
        }))
        .unwrap();

        assert_eq!(note.field_value("English_Word"), "apple");
        assert_eq!(note.field_value("Examples_EN_HTML"), "");
    }
}
