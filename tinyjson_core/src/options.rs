//! Settings that change how strictly the parser treats its input.

/// Maximum number of nested arrays and objects accepted by default.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Options for a single parse.
///
/// The defaults follow RFC 8259 for trailing commas and accept anything after the top-level
/// value, leaving the decision to the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
	/// Arrays and objects may be nested at most this deep. `0` only admits scalar values.
	pub max_depth: usize,
	/// Accept `[1,2,]` and `{"a":1,}`. Applies to arrays and objects alike.
	pub allow_trailing_commas: bool,
	/// Reject non-whitespace input after the top-level value.
	pub strict_end: bool,
}

impl Default for ParseOptions {
	fn default() -> Self {
		ParseOptions {
			max_depth: DEFAULT_MAX_DEPTH,
			allow_trailing_commas: false,
			strict_end: false,
		}
	}
}

impl ParseOptions {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_max_depth(mut self, max_depth: usize) -> Self {
		self.max_depth = max_depth;
		self
	}

	pub fn with_trailing_commas(mut self, allow: bool) -> Self {
		self.allow_trailing_commas = allow;
		self
	}

	pub fn with_strict_end(mut self, strict: bool) -> Self {
		self.strict_end = strict;
		self
	}
}
