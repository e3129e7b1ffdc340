pub mod errors;
pub mod markup;
pub mod models;
