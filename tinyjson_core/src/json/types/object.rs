//! JSON object type and helpers for reading typed values out of it.
use crate::json::*;
use anyhow::Result;
use indexmap::IndexMap;
use std::fmt::Debug;

/// A JSON object backed by an `IndexMap<String, JsonValue>`.
///
/// Keys keep the order in which they were first inserted. Inserting an existing key replaces
/// its value in place.
#[derive(Clone, Default, PartialEq)]
pub struct JsonObject(pub IndexMap<String, JsonValue>);

impl JsonObject {
	/// Create a new, empty `JsonObject`.
	#[must_use]
	pub fn new() -> Self {
		Self(IndexMap::new())
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Insert a value, returning the value previously stored under `key`.
	pub fn insert(&mut self, key: String, value: JsonValue) -> Option<JsonValue> {
		self.0.insert(key, value)
	}

	/// Get a reference to the raw `JsonValue` for the specified key, if present.
	#[must_use]
	pub fn get(&self, key: &str) -> Option<&JsonValue> {
		self.0.get(key)
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	/// Retrieve a string value for the specified key, returning `None` if missing.
	pub fn get_string(&self, key: &str) -> Result<Option<String>> {
		self.get(key).map(JsonValue::as_string).transpose()
	}

	/// Retrieve a `JsonArray` reference for the specified key, if present and an array.
	pub fn get_array(&self, key: &str) -> Result<Option<&JsonArray>> {
		self.get(key).map(JsonValue::as_array).transpose()
	}

	/// Keys in insertion order.
	pub fn keys(&self) -> impl Iterator<Item = &String> {
		self.0.keys()
	}

	/// Return an iterator over key-value pairs in this `JsonObject` in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&String, &JsonValue)> {
		self.0.iter()
	}
}

impl Debug for JsonObject {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(self.0.iter()).finish()
	}
}

/// Convert a `Vec<(&str, T)>` into a `JsonValue::Object` by converting into a `JsonObject`.
impl<T> From<Vec<(&str, T)>> for JsonValue
where
	JsonValue: From<T>,
{
	fn from(input: Vec<(&str, T)>) -> Self {
		JsonValue::Object(JsonObject::from(input))
	}
}

/// Convert a `Vec<(&str, T)>` into a `JsonObject`. Later duplicates overwrite earlier ones.
impl<T> From<Vec<(&str, T)>> for JsonObject
where
	JsonValue: From<T>,
{
	fn from(input: Vec<(&str, T)>) -> Self {
		JsonObject(
			input
				.into_iter()
				.map(|(key, value)| (key.to_string(), JsonValue::from(value)))
				.collect(),
		)
	}
}
