mod array;
mod number;
mod object;
mod value;

pub use array::JsonArray;
pub use number::JsonNumber;
pub use object::JsonObject;
pub use value::JsonValue;
