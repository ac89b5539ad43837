//! Quoted JSON strings.
//!
//! Supports the escapes `\" \\ \/ \b \f \n \r \t` and `\uXXXX`. Any other escaped character is
//! taken literally. A `\u` escape reads the whole run of hex digits that follows as one UTF-16 code
//! unit, so a run that does not fit into 16 bits does not match. Surrogate pairs are not combined
//! and a lone surrogate decodes to U+FFFD.

use crate::Cursor;

/// Match a quoted string and return its decoded contents.
///
/// The cursor ends up after the closing quote. Without a closing quote, or if a raw control
/// character appears inside the quotes, nothing matches and the cursor is restored.
///
/// # Example
/// ```
/// # use tinyjson_core::{Cursor, grammar::string::match_string};
/// let mut cursor = Cursor::new("\"he\\nllo\" ");
/// assert_eq!(match_string(&mut cursor).unwrap(), "he\nllo");
/// assert_eq!(cursor.position(), 9);
/// ```
pub fn match_string(cursor: &mut Cursor) -> Option<String> {
	let start = cursor.position();
	let text = scan_string(cursor);
	if text.is_none() {
		cursor.restore(start);
	}
	text
}

fn scan_string(cursor: &mut Cursor) -> Option<String> {
	if !cursor.consume_if('"') {
		return None;
	}

	let mut text = String::with_capacity(32);
	loop {
		match cursor.consume_one()? {
			'"' => return Some(text),
			'\\' => text.push(decode_escape(cursor)?),
			c if is_raw_control(c) => return None,
			c => text.push(c),
		}
	}
}

/// Characters that must be escaped inside a string: C0, DEL and C1 controls.
fn is_raw_control(c: char) -> bool {
	c.is_control()
}

fn decode_escape(cursor: &mut Cursor) -> Option<char> {
	Some(match cursor.consume_one()? {
		'b' => '\x08',
		'f' => '\x0C',
		'n' => '\n',
		'r' => '\r',
		't' => '\t',
		'u' => decode_code_unit(cursor)?,
		// covers \" \\ \/ and passes anything else through unchanged
		c => c,
	})
}

fn decode_code_unit(cursor: &mut Cursor) -> Option<char> {
	let hex = cursor.scan_while(|c| c.is_ascii_hexdigit());
	if hex.is_empty() {
		return None;
	}
	let unit = u16::from_str_radix(&hex, 16).ok()?;
	char::decode_utf16([unit])
		.next()
		.map(|decoded| decoded.unwrap_or(char::REPLACEMENT_CHARACTER))
}
