use super::JsonValue;
use anyhow::Result;

/// A JSON array.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JsonArray(pub Vec<JsonValue>);

impl JsonArray {
	#[must_use]
	pub fn new() -> Self {
		Self(Vec::new())
	}

	pub fn push(&mut self, value: impl Into<JsonValue>) {
		self.0.push(value.into());
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &JsonValue> {
		self.0.iter()
	}

	/// Converts every element to a number.
	///
	/// # Errors
	/// Returns a format fault if any element is not a number.
	pub fn as_number_vec(&self) -> Result<Vec<f64>> {
		self.0.iter().map(JsonValue::as_number).collect()
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

impl<T> From<Vec<T>> for JsonValue
where
	JsonValue: From<T>,
{
	fn from(input: Vec<T>) -> Self {
		JsonValue::Array(JsonArray::from(input))
	}
}

impl IntoIterator for JsonArray {
	type Item = JsonValue;
	type IntoIter = std::vec::IntoIter<JsonValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_from_vec() {
		let array = JsonArray::from(vec![1.0, 2.5]);
		assert_eq!(array.len(), 2);
		assert_eq!(array.as_number_vec().unwrap(), vec![1.0, 2.5]);
	}

	#[test]
	fn test_push_and_mixed_types() {
		let mut array = JsonArray::new();
		assert!(array.is_empty());
		array.push("a");
		array.push(true);
		assert_eq!(array.0, vec![JsonValue::from("a"), JsonValue::Boolean(true)]);
		assert!(array.as_number_vec().is_err());
	}
}
