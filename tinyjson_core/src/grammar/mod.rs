//! Recursive-descent JSON grammar over a [`Cursor`].
//!
//! Each rule tries to match at the current position. On success it returns `Some(..)` and
//! leaves the cursor after the consumed text; otherwise it restores the cursor to where it
//! started and returns `None`, so the next rule can try from the same position.
//!
//! - [`literal`]: `null`, `true`, `false`
//! - [`number`]: the JSON number grammar, producing integers or floats
//! - [`string`]: quoted strings with escape decoding
//! - [`container`]: arrays and objects, recursing into the dispatcher
//! - [`value`]: the dispatcher, the only place a hard failure is raised

pub mod container;
pub mod literal;
pub mod number;
pub mod string;
pub mod value;

use crate::{Cursor, JsonValue, ParseError, ParseOptions};
use log::debug;

/// Owns the cursor, the options and the current nesting depth of one parse.
///
/// # Example
/// ```
/// use tinyjson_core::{JsonValue, ParseOptions, Parser};
/// let mut parser = Parser::new("  123  ", ParseOptions::default());
/// assert_eq!(parser.parse_value().unwrap(), JsonValue::from(123));
/// assert_eq!(parser.position(), 7);
/// ```
pub struct Parser {
	pub(crate) cursor: Cursor,
	options: ParseOptions,
	depth: usize,
}

impl Parser {
	pub fn new(input: &str, options: ParseOptions) -> Self {
		Parser {
			cursor: Cursor::new(input),
			options,
			depth: 0,
		}
	}

	/// Current cursor position, counted in characters.
	pub fn position(&self) -> usize {
		self.cursor.position()
	}

	pub fn cursor(&self) -> &Cursor {
		&self.cursor
	}

	pub fn options(&self) -> &ParseOptions {
		&self.options
	}

	/// Parse one value at the current position.
	///
	/// Surrounding whitespace is consumed; anything else after the value is left for the caller.
	/// On error the cursor is back where it was before the call.
	pub fn parse_value(&mut self) -> Result<JsonValue, ParseError> {
		value::parse_value(self)
	}

	/// Parse one value and, if [`ParseOptions::strict_end`] is set, require the input to end there.
	pub fn parse_document(&mut self) -> Result<JsonValue, ParseError> {
		let start = self.cursor.position();
		let value = self.parse_value()?;
		if self.options.strict_end && self.cursor.has_remaining() {
			let position = self.cursor.position();
			debug!("trailing content after JSON value at position {position}");
			self.cursor.restore(start);
			return Err(ParseError::TrailingContent {
				position,
				snippet: self.cursor.snippet(position),
			});
		}
		Ok(value)
	}

	/// Run `body` one nesting level deeper. `start` is the position of the opening delimiter.
	///
	/// The cursor is restored to `start` unless `body` matched.
	pub(crate) fn nested<T>(
		&mut self,
		start: usize,
		body: impl FnOnce(&mut Parser) -> Result<Option<T>, ParseError>,
	) -> Result<Option<T>, ParseError> {
		if self.depth >= self.options.max_depth {
			debug!("nesting limit of {} exceeded at position {start}", self.options.max_depth);
			self.cursor.restore(start);
			return Err(ParseError::TooDeep {
				limit: self.options.max_depth,
				position: start,
			});
		}

		self.depth += 1;
		let result = body(self);
		self.depth -= 1;

		if !matches!(result, Ok(Some(_))) {
			self.cursor.restore(start);
		}
		result
	}
}

/// Parse `json` with default options.
///
/// Trailing non-whitespace input is ignored; use [`parse_json_str_with`] and
/// [`ParseOptions::strict_end`] to reject it.
///
/// # Example
/// ```
/// use tinyjson_core::{JsonValue, parse_json_str};
/// let value = parse_json_str(r#"{"a":[true,null]}"#).unwrap();
/// assert_eq!(value.as_object().unwrap().get_array("a").unwrap().unwrap().len(), 2);
/// ```
pub fn parse_json_str(json: &str) -> Result<JsonValue, ParseError> {
	parse_json_str_with(json, &ParseOptions::default())
}

/// Parse `json` with the given options.
pub fn parse_json_str_with(json: &str, options: &ParseOptions) -> Result<JsonValue, ParseError> {
	Parser::new(json, options.clone()).parse_document()
}
