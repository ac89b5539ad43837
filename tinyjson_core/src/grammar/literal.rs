//! Keyword literals: `null`, `true` and `false`.

use crate::Cursor;

/// Match the whole of `keyword` at the current position, restoring the cursor otherwise.
fn match_keyword(cursor: &mut Cursor, keyword: &str) -> bool {
	let start = cursor.position();
	// the matched text is always a prefix of the keyword
	if cursor.scan_literal(keyword).len() == keyword.len() {
		true
	} else {
		cursor.restore(start);
		false
	}
}

/// Match `null`.
///
/// # Example
/// ```
/// # use tinyjson_core::{Cursor, grammar::literal::match_null};
/// let mut cursor = Cursor::new("null");
/// assert!(match_null(&mut cursor));
/// ```
pub fn match_null(cursor: &mut Cursor) -> bool {
	match_keyword(cursor, "null")
}

/// Match `true` or `false`.
pub fn match_boolean(cursor: &mut Cursor) -> Option<bool> {
	if match_keyword(cursor, "true") {
		Some(true)
	} else if match_keyword(cursor, "false") {
		Some(false)
	} else {
		None
	}
}
