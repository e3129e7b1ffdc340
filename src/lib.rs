pub mod anki;
pub mod core;
pub mod gui;
pub mod persistence;
pub mod quiz;

pub use crate::core::{
    errors::WordmineError,
    models::VocabEntry,
};
