//! JSON array type and helpers for converting its elements to Rust types.
use crate::json::*;
use anyhow::Result;
use std::fmt::Debug;

#[derive(Clone, Default, PartialEq)]
/// A JSON array, backed by a `Vec<JsonValue>`.
pub struct JsonArray(pub Vec<JsonValue>);

impl JsonArray {
	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Get the element at `index`, if present.
	pub fn get(&self, index: usize) -> Option<&JsonValue> {
		self.0.get(index)
	}

	pub fn iter(&self) -> std::slice::Iter<'_, JsonValue> {
		self.0.iter()
	}

	/// Convert all elements to Rust `String`s, returning an error if any element is not a string.
	pub fn as_string_vec(&self) -> Result<Vec<String>> {
		self.0.iter().map(JsonValue::as_string).collect::<Result<Vec<_>>>()
	}
}

impl Debug for JsonArray {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(self.0.iter()).finish()
	}
}

impl<'a> IntoIterator for &'a JsonArray {
	type Item = &'a JsonValue;
	type IntoIter = std::slice::Iter<'a, JsonValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

impl<T> From<Vec<T>> for JsonArray
where
	JsonValue: From<T>,
{
	fn from(input: Vec<T>) -> Self {
		JsonArray(input.into_iter().map(JsonValue::from).collect())
	}
}
