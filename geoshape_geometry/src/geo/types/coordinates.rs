use geoshape_core::json::JsonValue;
use std::fmt::{Debug, Write};

/// A position with x and y, plus an optional z ordinate.
///
/// Values are stored as read; there is no check for finiteness, so "no data" sentinels from
/// shapefiles pass through unchanged.
#[derive(Clone, Copy, PartialEq)]
pub struct Coordinates {
	x: f64,
	y: f64,
	z: Option<f64>,
}

impl Coordinates {
	#[must_use]
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y, z: None }
	}

	#[must_use]
	pub fn new_3d(x: f64, y: f64, z: f64) -> Self {
		Self { x, y, z: Some(z) }
	}

	#[must_use]
	pub fn x(&self) -> f64 {
		self.x
	}

	#[must_use]
	pub fn y(&self) -> f64 {
		self.y
	}

	#[must_use]
	pub fn z(&self) -> Option<f64> {
		self.z
	}

	#[must_use]
	pub fn to_json(&self, precision: Option<u8>) -> JsonValue {
		let round = |value: f64| match precision {
			Some(prec) => {
				let factor = 10f64.powi(i32::from(prec));
				(value * factor).round() / factor
			}
			None => value,
		};
		let mut values = vec![round(self.x), round(self.y)];
		if let Some(z) = self.z {
			values.push(round(z));
		}
		JsonValue::from(values)
	}

	/// Appends `x y` or `x y z`.
	pub fn write_wkt(&self, output: &mut String) {
		let _ = write!(output, "{} {}", self.x, self.y);
		if let Some(z) = self.z {
			let _ = write!(output, " {z}");
		}
	}
}

impl<'a, T> From<&'a [T; 2]> for Coordinates
where
	T: Copy + Into<f64>,
{
	fn from(value: &'a [T; 2]) -> Self {
		Coordinates::new(value[0].into(), value[1].into())
	}
}

impl From<[f64; 2]> for Coordinates {
	fn from(value: [f64; 2]) -> Self {
		Coordinates::new(value[0], value[1])
	}
}

impl From<[f64; 3]> for Coordinates {
	fn from(value: [f64; 3]) -> Self {
		Coordinates::new_3d(value[0], value[1], value[2])
	}
}

impl From<(f64, f64)> for Coordinates {
	fn from(value: (f64, f64)) -> Self {
		Coordinates::new(value.0, value.1)
	}
}

impl From<&Coordinates> for Coordinates {
	fn from(value: &Coordinates) -> Self {
		*value
	}
}

impl Debug for Coordinates {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self.z {
			Some(z) => [self.x, self.y, z].fmt(f),
			None => [self.x, self.y].fmt(f),
		}
	}
}
