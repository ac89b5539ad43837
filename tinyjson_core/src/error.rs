//! Errors reported by the top-level parse entry points.
//!
//! A grammar rule that does not match is not an error: it restores the cursor and lets the next
//! rule try. A `ParseError` is only produced once no rule matches at a position, when the
//! nesting limit is exceeded, or when strict parsing finds input after the value.

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
	/// No value form matches. `position` is where the cursor was restored to, `furthest` the
	/// deepest position at which a nested value failed to match.
	#[error("malformed JSON at position {position}, no value matches at position {furthest}: {snippet}")]
	Malformed {
		position: usize,
		furthest: usize,
		snippet: String,
	},

	/// Arrays and objects are nested deeper than the configured limit.
	#[error("nesting deeper than {limit} levels at position {position}")]
	TooDeep { limit: usize, position: usize },

	/// A complete value was parsed, but non-whitespace input follows it.
	#[error("unexpected trailing content at position {position}: {snippet}")]
	TrailingContent { position: usize, snippet: String },
}

impl ParseError {
	/// The position in the input the error refers to.
	pub fn position(&self) -> usize {
		match self {
			ParseError::Malformed { position, .. }
			| ParseError::TooDeep { position, .. }
			| ParseError::TrailingContent { position, .. } => *position,
		}
	}

	pub fn is_malformed(&self) -> bool {
		matches!(self, ParseError::Malformed { .. })
	}
}
