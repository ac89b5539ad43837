//! The value tree produced by the parser.

mod types;

pub use types::{JsonArray, JsonNumber, JsonObject, JsonValue};
