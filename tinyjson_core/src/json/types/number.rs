//! JSON numbers, kept as exact integers when the literal has no fraction.
//!
//! This module provides `JsonNumber` and the `From` implementations that create
//! `JsonValue::Number` from Rust numeric types.

use super::JsonValue;
use std::fmt::Debug;

/// A parsed JSON number.
///
/// Literals without a fraction and without a negative exponent become `Integer`, everything
/// else becomes `Float`.
#[derive(Clone, Copy, PartialEq)]
pub enum JsonNumber {
	Integer(i64),
	Float(f64),
}

impl JsonNumber {
	pub fn is_integer(&self) -> bool {
		matches!(self, JsonNumber::Integer(_))
	}

	/// The value as `f64`. Integers beyond 2^53 lose precision.
	pub fn as_f64(&self) -> f64 {
		match self {
			JsonNumber::Integer(value) => *value as f64,
			JsonNumber::Float(value) => *value,
		}
	}

	/// The value as `i64`, if it is an integer.
	pub fn as_i64(&self) -> Option<i64> {
		match self {
			JsonNumber::Integer(value) => Some(*value),
			JsonNumber::Float(_) => None,
		}
	}
}

impl Debug for JsonNumber {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			JsonNumber::Integer(value) => write!(f, "Integer({value})"),
			JsonNumber::Float(value) => write!(f, "Float({value:?})"),
		}
	}
}

/// Implement `From<Number>` for `JsonNumber` and `JsonValue` for integer types that fit into `i64`.
macro_rules! impl_from_integer {
	($($t:ty),+ $(,)?) => {
		$(
			impl From<$t> for JsonNumber {
				fn from(input: $t) -> Self {
					JsonNumber::Integer(i64::from(input))
				}
			}

			impl From<$t> for JsonValue {
				fn from(input: $t) -> Self {
					JsonValue::Number(JsonNumber::from(input))
				}
			}
		)+
	};
}

/// Implement `From<Number>` for `JsonNumber` and `JsonValue` for floating point types.
macro_rules! impl_from_float {
	($($t:ty),+ $(,)?) => {
		$(
			impl From<$t> for JsonNumber {
				fn from(input: $t) -> Self {
					JsonNumber::Float(f64::from(input))
				}
			}

			impl From<$t> for JsonValue {
				fn from(input: $t) -> Self {
					JsonValue::Number(JsonNumber::from(input))
				}
			}
		)+
	};
}

impl_from_integer!(u8, u16, u32, i8, i16, i32, i64);
impl_from_float!(f32, f64);

impl From<JsonNumber> for JsonValue {
	fn from(input: JsonNumber) -> Self {
		JsonValue::Number(input)
	}
}
