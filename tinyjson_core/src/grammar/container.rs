//! Arrays and objects.
//!
//! Both rules consume their closing delimiter and share one trailing-comma policy,
//! [`ParseOptions::allow_trailing_commas`](crate::ParseOptions::allow_trailing_commas).
//! A malformed element makes the whole container not match; a nesting violation is
//! passed up unchanged.

use super::{Parser, string, value};
use crate::{JsonArray, JsonObject, JsonValue, ParseError};
use log::trace;

/// Match an array, e.g. `[1, "two", [3]]`.
pub fn match_array(parser: &mut Parser) -> Result<Option<JsonArray>, ParseError> {
	let start = parser.cursor.position();
	if !parser.cursor.consume_if('[') {
		return Ok(None);
	}
	trace!("matching array at position {start}");

	parser.nested(start, |parser| {
		let mut items = Vec::new();
		parser.cursor.skip_whitespace();

		loop {
			match parser.cursor.peek() {
				None => return Ok(None),
				Some(']') => {
					parser.cursor.advance();
					return Ok(Some(JsonArray(items)));
				}
				Some(_) => {}
			}

			let Some(item) = element(parser)? else {
				return Ok(None);
			};
			items.push(item);

			if !separator(parser, ']') {
				return Ok(None);
			}
		}
	})
}

/// Match an object, e.g. `{"a": 1, "b": [true]}`. Keys must be quoted strings.
pub fn match_object(parser: &mut Parser) -> Result<Option<JsonObject>, ParseError> {
	let start = parser.cursor.position();
	if !parser.cursor.consume_if('{') {
		return Ok(None);
	}
	trace!("matching object at position {start}");

	parser.nested(start, |parser| {
		let mut object = JsonObject::new();
		parser.cursor.skip_whitespace();

		loop {
			match parser.cursor.peek() {
				None => return Ok(None),
				Some('}') => {
					parser.cursor.advance();
					return Ok(Some(object));
				}
				Some(_) => {}
			}

			let Some(key) = string::match_string(&mut parser.cursor) else {
				return Ok(None);
			};
			parser.cursor.skip_whitespace();
			if !parser.cursor.consume_if(':') {
				return Ok(None);
			}

			let Some(value) = element(parser)? else {
				return Ok(None);
			};
			object.insert(key, value);

			if !separator(parser, '}') {
				return Ok(None);
			}
		}
	})
}

/// Parse one nested value. A malformed value is a non-match of the enclosing container.
fn element(parser: &mut Parser) -> Result<Option<JsonValue>, ParseError> {
	match value::parse_value(parser) {
		Ok(value) => Ok(Some(value)),
		Err(error) if error.is_malformed() => Ok(None),
		Err(error) => Err(error),
	}
}

/// After an element, expect `,` or the closing delimiter, which is left for the loop to consume.
///
/// Returns `false` if neither follows, or if a comma is directly followed by the closing
/// delimiter and trailing commas are not allowed.
fn separator(parser: &mut Parser, close: char) -> bool {
	match parser.cursor.peek() {
		Some(',') => {
			parser.cursor.advance();
			parser.cursor.skip_whitespace();
			parser.options().allow_trailing_commas || parser.cursor.peek() != Some(close)
		}
		Some(c) => c == close,
		None => false,
	}
}
