//! JSON value enum representing any parsed JSON data and utilities for converting it.

use crate::json::*;
use crate::{ParseOptions, parse_json_str_with};
use anyhow::{Context, Result, bail};

/// Represents any JSON data: arrays, objects, numbers, strings, booleans, and null.
#[derive(Clone, Debug, PartialEq)]
pub enum JsonValue {
	Array(JsonArray),
	Boolean(bool),
	Null,
	Number(JsonNumber),
	Object(JsonObject),
	String(String),
}

impl JsonValue {
	/// Parse a complete JSON document into a `JsonValue`.
	///
	/// Uses the default options, except that input after the value is rejected.
	///
	/// # Errors
	/// Returns an error if the JSON is invalid. The root cause is a [`ParseError`](crate::ParseError).
	pub fn parse_str(json: &str) -> Result<JsonValue> {
		let options = ParseOptions::default().with_strict_end(true);
		parse_json_str_with(json, &options).with_context(|| format!("while parsing JSON '{json}'"))
	}

	/// Return the JSON type as a lowercase string (`"array"`, `"object"`, etc.).
	#[must_use]
	pub fn type_as_str(&self) -> &str {
		use JsonValue::*;
		match self {
			Array(_) => "array",
			Boolean(_) => "boolean",
			Null => "null",
			Number(_) => "number",
			Object(_) => "object",
			String(_) => "string",
		}
	}

	/// Create a new empty JSON array value.
	#[must_use]
	pub fn new_array() -> JsonValue {
		JsonValue::Array(JsonArray::default())
	}

	/// Create a new empty JSON object value.
	#[must_use]
	pub fn new_object() -> JsonValue {
		JsonValue::Object(JsonObject::default())
	}

	pub fn is_null(&self) -> bool {
		matches!(self, JsonValue::Null)
	}

	/// Borrow the `JsonArray` if this value is an array.
	///
	/// # Errors
	/// Returns an error if not an array.
	pub fn as_array(&self) -> Result<&JsonArray> {
		if let JsonValue::Array(array) = self {
			Ok(array)
		} else {
			bail!("expected an array, found a {}", self.type_as_str())
		}
	}

	/// Borrow the `JsonObject` if this value is an object.
	///
	/// # Errors
	/// Returns an error if not an object.
	pub fn as_object(&self) -> Result<&JsonObject> {
		if let JsonValue::Object(object) = self {
			Ok(object)
		} else {
			bail!("expected an object, found a {}", self.type_as_str())
		}
	}

	/// Return the string value as `String`, cloning it.
	pub fn as_string(&self) -> Result<String> {
		self.as_str().map(str::to_owned)
	}

	/// Return a string slice if this value is a JSON string.
	pub fn as_str(&self) -> Result<&str> {
		match self {
			JsonValue::String(text) => Ok(text),
			_ => bail!("expected a string, found a {}", self.type_as_str()),
		}
	}

	/// Return the number, keeping the integer/float distinction.
	pub fn as_number(&self) -> Result<JsonNumber> {
		match self {
			JsonValue::Number(number) => Ok(*number),
			_ => bail!("expected a number, found a {}", self.type_as_str()),
		}
	}

	/// Return the number as `i64`. Fails for floats, even integral ones.
	pub fn as_i64(&self) -> Result<i64> {
		match self.as_number()? {
			JsonNumber::Integer(value) => Ok(value),
			JsonNumber::Float(value) => bail!("expected an integer, found the float {value}"),
		}
	}
}

impl From<&str> for JsonValue {
	fn from(input: &str) -> Self {
		JsonValue::String(input.to_string())
	}
}

impl From<String> for JsonValue {
	fn from(input: String) -> Self {
		JsonValue::String(input)
	}
}

impl From<bool> for JsonValue {
	fn from(input: bool) -> Self {
		JsonValue::Boolean(input)
	}
}

impl From<&JsonValue> for JsonValue {
	fn from(input: &JsonValue) -> Self {
		input.clone()
	}
}

impl From<JsonArray> for JsonValue {
	fn from(input: JsonArray) -> Self {
		JsonValue::Array(input)
	}
}

impl From<JsonObject> for JsonValue {
	fn from(input: JsonObject) -> Self {
		JsonValue::Object(input)
	}
}
