//! The JSON number grammar.
//!
//! ```text
//! number   = [ "-" ] integer [ fraction ] [ exponent ]
//! integer  = "0" | digit1-9 { digit }
//! fraction = "." digit { digit }
//! exponent = ( "e" | "E" ) [ "+" | "-" ] digit { digit }
//! ```
//!
//! Literals without a fraction are scaled by their exponent with checked integer arithmetic and
//! become [`JsonNumber::Integer`]. A negative exponent or a fraction yields
//! [`JsonNumber::Float`], parsed from the literal text so the result is correctly rounded.
//! Values that overflow `i64` or `f64` do not match.

use crate::{Cursor, JsonNumber};

#[derive(Debug, PartialEq)]
struct NumberLiteral {
	text: String,
	negative: bool,
	integer: String,
	fraction: Option<String>,
	exponent: Option<Exponent>,
}

#[derive(Debug, PartialEq)]
struct Exponent {
	negative: bool,
	digits: String,
}

/// Match a number at the current position, restoring the cursor if there is none or if its
/// value is out of range.
///
/// # Example
/// ```
/// # use tinyjson_core::{Cursor, JsonNumber, grammar::number::match_number};
/// let mut cursor = Cursor::new("-12.5e2,");
/// assert_eq!(match_number(&mut cursor), Some(JsonNumber::Float(-1250.0)));
/// assert_eq!(cursor.peek(), Some(','));
/// ```
pub fn match_number(cursor: &mut Cursor) -> Option<JsonNumber> {
	let start = cursor.position();
	let number = scan_number(cursor).and_then(|literal| literal.evaluate());
	if number.is_none() {
		cursor.restore(start);
	}
	number
}

fn is_digit(c: char) -> bool {
	c.is_ascii_digit()
}

fn scan_number(cursor: &mut Cursor) -> Option<NumberLiteral> {
	let start = cursor.position();
	let negative = cursor.consume_if('-');

	let integer = match cursor.peek()? {
		'0' => {
			cursor.advance();
			String::from("0")
		}
		'1'..='9' => cursor.scan_while(is_digit),
		_ => return None,
	};

	let fraction = if cursor.consume_if('.') {
		let digits = cursor.scan_while(is_digit);
		if digits.is_empty() {
			return None;
		}
		Some(digits)
	} else {
		None
	};

	let exponent = if matches!(cursor.peek(), Some('e' | 'E')) {
		cursor.advance();
		let negative = cursor.consume_if('-');
		if !negative {
			cursor.consume_if('+');
		}
		let digits = cursor.scan_while(is_digit);
		if digits.is_empty() {
			return None;
		}
		Some(Exponent { negative, digits })
	} else {
		None
	};

	Some(NumberLiteral {
		text: cursor.text_since(start),
		negative,
		integer,
		fraction,
		exponent,
	})
}

impl NumberLiteral {
	fn evaluate(&self) -> Option<JsonNumber> {
		match (&self.fraction, &self.exponent) {
			(None, None) => self.integer_value("0"),
			(None, Some(exponent)) if !exponent.negative => self.integer_value(&exponent.digits),
			_ => self.float_value(),
		}
	}

	fn integer_value(&self, exponent: &str) -> Option<JsonNumber> {
		let mantissa: i64 = if self.negative {
			format!("-{}", self.integer).parse().ok()?
		} else {
			self.integer.parse().ok()?
		};
		if mantissa == 0 {
			return Some(JsonNumber::Integer(0));
		}
		let scale = 10i64.checked_pow(exponent.parse().ok()?)?;
		mantissa.checked_mul(scale).map(JsonNumber::Integer)
	}

	fn float_value(&self) -> Option<JsonNumber> {
		let value: f64 = self.text.parse().ok()?;
		value.is_finite().then_some(JsonNumber::Float(value))
	}
}
