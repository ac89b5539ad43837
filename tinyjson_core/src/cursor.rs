//! A character-level cursor over a fully materialized input.
//!
//! The `Cursor` struct owns the decoded input and a read position. It supports peeking at the
//! next character without consuming it, consuming characters one by one, and scanning runs of
//! characters. Every grammar rule saves [`Cursor::position`] before it starts and calls
//! [`Cursor::restore`] when it does not match, so backtracking never copies input.

const SNIPPET_SIZE: usize = 16;

/// Returns `true` for the four whitespace characters JSON treats as insignificant.
#[inline]
pub fn is_json_whitespace(c: char) -> bool {
	matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// A cursor over the characters of one parse input.
///
/// # Fields
///
/// * `chars` - The decoded input, one entry per Unicode scalar value.
/// * `position` - The index of the next character to be consumed. Always `<= chars.len()`.
/// * `furthest_failure` - The deepest position at which a value could not be matched.
#[derive(Clone, Debug)]
pub struct Cursor {
	chars: Vec<char>,
	position: usize,
	furthest_failure: Option<usize>,
}

impl Cursor {
	/// Creates a new `Cursor` positioned at the start of `input`.
	pub fn new(input: &str) -> Self {
		Cursor {
			chars: input.chars().collect(),
			position: 0,
			furthest_failure: None,
		}
	}

	/// Number of characters in the input.
	#[inline]
	pub fn len(&self) -> usize {
		self.chars.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.chars.is_empty()
	}

	/// Returns the current position in the input.
	#[inline]
	pub fn position(&self) -> usize {
		self.position
	}

	/// Moves the cursor back to a position previously obtained from [`Cursor::position`].
	#[inline]
	pub fn restore(&mut self, position: usize) {
		debug_assert!(position <= self.chars.len(), "restore past the end of input");
		self.position = position.min(self.chars.len());
	}

	/// Reports whether there is input left to consume.
	#[inline]
	pub fn has_remaining(&self) -> bool {
		self.position < self.chars.len()
	}

	/// Returns `true` once every character has been consumed.
	#[inline]
	pub fn is_at_end(&self) -> bool {
		!self.has_remaining()
	}

	/// Peeks at the next character without consuming it.
	///
	/// Returns `None` at the end of the input.
	#[inline]
	pub fn peek(&self) -> Option<char> {
		self.chars.get(self.position).copied()
	}

	/// Advances past the next character. Does nothing at the end of the input.
	#[inline]
	pub fn advance(&mut self) {
		if self.has_remaining() {
			self.position += 1;
		}
	}

	/// Consumes and returns the next character, or `None` at the end of the input.
	#[inline]
	pub fn consume_one(&mut self) -> Option<char> {
		let current = self.peek();
		self.advance();
		current
	}

	/// Consumes the next character only if it equals `expected`.
	#[inline]
	pub fn consume_if(&mut self, expected: char) -> bool {
		if self.peek() == Some(expected) {
			self.position += 1;
			true
		} else {
			false
		}
	}

	/// Consumes and returns the maximal run of characters satisfying `predicate`.
	pub fn scan_while(&mut self, predicate: impl Fn(char) -> bool) -> String {
		let start = self.position;
		while let Some(c) = self.peek() {
			if !predicate(c) {
				break;
			}
			self.position += 1;
		}
		self.chars[start..self.position].iter().collect()
	}

	/// Consumes characters for as long as they match `pattern` position by position.
	///
	/// Returns the prefix of `pattern` that was actually matched. Callers compare its length with
	/// the pattern to find out whether the whole literal was present.
	pub fn scan_literal(&mut self, pattern: &str) -> String {
		let mut matched = String::with_capacity(pattern.len());
		for expected in pattern.chars() {
			if !self.consume_if(expected) {
				break;
			}
			matched.push(expected);
		}
		matched
	}

	/// Skips over JSON whitespace, stopping at the first other character or the end.
	pub fn skip_whitespace(&mut self) {
		while let Some(c) = self.peek() {
			if !is_json_whitespace(c) {
				break;
			}
			self.position += 1;
		}
	}

	/// Returns the characters between `start` and the current position.
	pub fn text_since(&self, start: usize) -> String {
		self.chars[start.min(self.position)..self.position].iter().collect()
	}

	/// Records that no value could be matched at the current position.
	pub fn mark_failure(&mut self) {
		if self.furthest_failure.is_none_or(|furthest| self.position > furthest) {
			self.furthest_failure = Some(self.position);
		}
	}

	/// The deepest position at which a value failed to match, if any did.
	pub fn furthest_failure(&self) -> Option<usize> {
		self.furthest_failure
	}

	/// A short excerpt of the input starting at `position`, for error messages.
	///
	/// `<EOF>` is appended when the excerpt reaches the end of the input.
	pub fn snippet(&self, position: usize) -> String {
		let start = position.min(self.chars.len());
		let end = (start + SNIPPET_SIZE).min(self.chars.len());
		let mut snippet: String = self.chars[start..end].iter().collect();
		if end == self.chars.len() {
			snippet.push_str("<EOF>");
		}
		snippet
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_peek_and_consume() {
		let mut cursor = Cursor::new("123");

		assert_eq!(cursor.peek(), Some('1'));
		assert_eq!(cursor.consume_one(), Some('1'));
		assert_eq!(cursor.peek(), Some('2'));
		assert_eq!(cursor.consume_one(), Some('2'));
		assert_eq!(cursor.consume_one(), Some('3'));
		assert_eq!(cursor.peek(), None);
		assert_eq!(cursor.consume_one(), None);
		assert_eq!(cursor.position(), 3);
	}

	#[test]
	fn test_never_moves_past_end() {
		let mut cursor = Cursor::new("a");
		cursor.advance();
		cursor.advance();
		assert_eq!(cursor.position(), 1);
		assert!(cursor.is_at_end());
		assert!(!cursor.has_remaining());
	}

	#[test]
	fn test_empty_input() {
		let cursor = Cursor::new("");
		assert!(cursor.is_empty());
		assert!(cursor.is_at_end());
		assert_eq!(cursor.peek(), None);
	}

	#[test]
	fn test_positions_count_characters() {
		let mut cursor = Cursor::new("é😊x");
		assert_eq!(cursor.len(), 3);
		cursor.advance();
		cursor.advance();
		assert_eq!(cursor.peek(), Some('x'));
	}

	#[test]
	fn test_scan_while() {
		let mut cursor = Cursor::new("1234abc");
		assert_eq!(cursor.scan_while(|c| c.is_ascii_digit()), "1234");
		assert_eq!(cursor.position(), 4);
		assert_eq!(cursor.scan_while(|c| c.is_ascii_digit()), "");
		assert_eq!(cursor.scan_while(|c| c.is_ascii_alphabetic()), "abc");
		assert!(cursor.is_at_end());
	}

	#[test]
	fn test_scan_literal_returns_matched_prefix() {
		let mut cursor = Cursor::new("nul!");
		assert_eq!(cursor.scan_literal("null"), "nul");
		assert_eq!(cursor.position(), 3);

		let mut cursor = Cursor::new("tr");
		assert_eq!(cursor.scan_literal("true"), "tr");
		assert!(cursor.is_at_end());

		let mut cursor = Cursor::new("falsey");
		assert_eq!(cursor.scan_literal("false"), "false");
		assert_eq!(cursor.peek(), Some('y'));
	}

	#[test]
	fn test_skip_whitespace() {
		let mut cursor = Cursor::new(" \t\r\n AB");
		cursor.skip_whitespace();
		assert_eq!(cursor.consume_one(), Some('A'));

		// form feed is not JSON whitespace
		let mut cursor = Cursor::new("\u{0C}A");
		cursor.skip_whitespace();
		assert_eq!(cursor.position(), 0);
	}

	#[test]
	fn test_restore() {
		let mut cursor = Cursor::new("hello");
		let saved = cursor.position();
		cursor.scan_while(|_| true);
		assert!(cursor.is_at_end());
		cursor.restore(saved);
		assert_eq!(cursor.peek(), Some('h'));
	}

	#[test]
	fn test_consume_if() {
		let mut cursor = Cursor::new("[]");
		assert!(!cursor.consume_if(']'));
		assert!(cursor.consume_if('['));
		assert!(cursor.consume_if(']'));
		assert!(!cursor.consume_if(']'));
	}

	#[test]
	fn test_text_since() {
		let mut cursor = Cursor::new("-12.5,");
		cursor.scan_while(|c| c != ',');
		assert_eq!(cursor.text_since(0), "-12.5");
		assert_eq!(cursor.text_since(1), "12.5");
	}

	#[test]
	fn test_furthest_failure_only_moves_forward() {
		let mut cursor = Cursor::new("abcdef");
		assert_eq!(cursor.furthest_failure(), None);
		cursor.restore(4);
		cursor.mark_failure();
		cursor.restore(2);
		cursor.mark_failure();
		assert_eq!(cursor.furthest_failure(), Some(4));
	}

	#[test]
	fn test_snippet() {
		let cursor = Cursor::new("{\"key\": \"value\"}");
		assert_eq!(cursor.snippet(8), "\"value\"}<EOF>");

		let cursor = Cursor::new(&"a".repeat(40));
		assert_eq!(cursor.snippet(0), "a".repeat(16));
	}
}
