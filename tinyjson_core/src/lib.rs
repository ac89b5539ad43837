//! A small recursive-descent JSON parser.
//!
//! The input is decoded into a [`Cursor`], and the rules in [`grammar`] match null, booleans,
//! strings, numbers, arrays and objects by trying each alternative and backtracking on a
//! mismatch. The result is a [`JsonValue`] tree owned by the caller.
//!
//! ```
//! use tinyjson_core::{JsonNumber, JsonValue, parse_json_str};
//!
//! let value = parse_json_str(r#"{"name": "tinyjson", "tags": ["json", "parser"], "version": 1}"#).unwrap();
//! let object = value.as_object().unwrap();
//! assert_eq!(object.get_string("name").unwrap().as_deref(), Some("tinyjson"));
//! assert_eq!(object.get("version"), Some(&JsonValue::Number(JsonNumber::Integer(1))));
//! ```

pub mod cursor;
pub mod error;
pub mod grammar;
pub mod json;
pub mod options;

pub use cursor::Cursor;
pub use error::ParseError;
pub use grammar::{Parser, parse_json_str, parse_json_str_with};
pub use json::{JsonArray, JsonNumber, JsonObject, JsonValue};
pub use options::{DEFAULT_MAX_DEPTH, ParseOptions};
