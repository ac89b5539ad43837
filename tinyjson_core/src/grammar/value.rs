//! The value dispatcher.

use super::{Parser, container, literal, number, string};
use crate::{JsonValue, ParseError};
use log::{debug, trace};

/// Parse one value, trying null, boolean, string, number, array and object in that order.
///
/// Whitespace before and after the value is consumed. If no rule matches, the cursor is
/// restored to where it was on entry and [`ParseError::Malformed`] is returned. Depth errors
/// from nested containers are passed through after the same restore.
pub fn parse_value(parser: &mut Parser) -> Result<JsonValue, ParseError> {
	let start = parser.cursor.position();
	parser.cursor.skip_whitespace();

	match match_value(parser) {
		Ok(Some(value)) => {
			parser.cursor.skip_whitespace();
			Ok(value)
		}
		Ok(None) => {
			parser.cursor.mark_failure();
			let furthest = parser.cursor.furthest_failure().unwrap_or(start);
			debug!("no JSON value matches at position {}", parser.cursor.position());
			parser.cursor.restore(start);
			Err(ParseError::Malformed {
				position: start,
				furthest,
				snippet: parser.cursor.snippet(furthest),
			})
		}
		Err(error) => {
			parser.cursor.restore(start);
			Err(error)
		}
	}
}

fn match_value(parser: &mut Parser) -> Result<Option<JsonValue>, ParseError> {
	let cursor = &mut parser.cursor;
	trace!("matching value at position {}", cursor.position());

	if literal::match_null(cursor) {
		return Ok(Some(JsonValue::Null));
	}
	if let Some(value) = literal::match_boolean(cursor) {
		return Ok(Some(JsonValue::Boolean(value)));
	}
	if let Some(text) = string::match_string(cursor) {
		return Ok(Some(JsonValue::String(text)));
	}
	if let Some(number) = number::match_number(cursor) {
		return Ok(Some(JsonValue::Number(number)));
	}
	if let Some(array) = container::match_array(parser)? {
		return Ok(Some(JsonValue::Array(array)));
	}
	Ok(container::match_object(parser)?.map(JsonValue::Object))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{JsonArray, ParseOptions};
	use rstest::rstest;

	fn parse(input: &str) -> (Result<JsonValue, ParseError>, usize) {
		let mut parser = Parser::new(input, ParseOptions::default());
		let result = parse_value(&mut parser);
		(result, parser.position())
	}

	#[rstest]
	#[case("null", JsonValue::Null, 4)]
	#[case(" true ", JsonValue::Boolean(true), 6)]
	#[case("false,", JsonValue::Boolean(false), 5)]
	#[case("\"s\"\n", JsonValue::from("s"), 4)]
	#[case("-0 ]", JsonValue::from(0), 3)]
	#[case("[ ]", JsonValue::Array(JsonArray::default()), 3)]
	#[case("{ }x", JsonValue::new_object(), 3)]
	fn dispatches_by_first_match(#[case] input: &str, #[case] expected: JsonValue, #[case] position: usize) {
		let (result, end) = parse(input);
		assert_eq!(result.unwrap(), expected);
		assert_eq!(end, position);
	}

	#[rstest]
	#[case("nul")]
	#[case("True")]
	#[case("'single'")]
	#[case("+1")]
	#[case(".5")]
	#[case("]")]
	#[case("}")]
	#[case("  @")]
	fn hard_failure_consumes_nothing(#[case] input: &str) {
		let (result, end) = parse(input);
		let error = result.unwrap_err();
		assert!(error.is_malformed(), "{input}: {error}");
		assert_eq!(error.position(), 0);
		assert_eq!(end, 0);
	}

	#[test]
	fn test_null_is_not_no_match() {
		let (result, _) = parse("[null]");
		assert_eq!(result.unwrap(), JsonValue::Array(JsonArray(vec![JsonValue::Null])));
	}
}
