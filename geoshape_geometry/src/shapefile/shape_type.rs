use geoshape_core::GeoError;

/// The base kind of a shape record.
///
/// Z and M variants share the layout of their 2D kind up to the x/y data, so they decode as
/// the base kind and their extra ordinates are dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeType {
	Point,
	PolyLine,
	Polygon,
	MultiPoint,
}

impl ShapeType {
	/// Maps a shape-type code to its base kind.
	///
	/// # Errors
	/// Returns a [`GeoError::Type`] for every other code, including the null shape `0`.
	pub fn from_code(code: i32) -> Result<Self, GeoError> {
		Ok(match code {
			1 | 11 | 21 => ShapeType::Point,
			3 | 13 | 23 => ShapeType::PolyLine,
			5 | 15 | 25 => ShapeType::Polygon,
			8 | 18 | 28 => ShapeType::MultiPoint,
			_ => return Err(GeoError::unsupported(format!("shapefile shape type {code}"))),
		})
	}

	/// Returns `true` for the plain 2D codes, whose records carry nothing after x/y data.
	#[must_use]
	pub fn is_plain_code(code: i32) -> bool {
		code < 10
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use geoshape_core::GeoErrorKind;
	use rstest::rstest;

	#[rstest]
	#[case(1, ShapeType::Point)]
	#[case(11, ShapeType::Point)]
	#[case(21, ShapeType::Point)]
	#[case(3, ShapeType::PolyLine)]
	#[case(13, ShapeType::PolyLine)]
	#[case(23, ShapeType::PolyLine)]
	#[case(5, ShapeType::Polygon)]
	#[case(15, ShapeType::Polygon)]
	#[case(25, ShapeType::Polygon)]
	#[case(8, ShapeType::MultiPoint)]
	#[case(18, ShapeType::MultiPoint)]
	#[case(28, ShapeType::MultiPoint)]
	fn known_codes(#[case] code: i32, #[case] shape_type: ShapeType) {
		assert_eq!(ShapeType::from_code(code).unwrap(), shape_type);
	}

	#[rstest]
	#[case(0)]
	#[case(2)]
	#[case(31)]
	#[case(-1)]
	#[case(i32::MAX)]
	fn unknown_codes_are_type_faults(#[case] code: i32) {
		let err = ShapeType::from_code(code).unwrap_err();
		assert_eq!(err.kind(), GeoErrorKind::Type);
		assert!(err.to_string().contains(&code.to_string()));
	}

	#[test]
	fn plain_codes() {
		assert!(ShapeType::is_plain_code(1));
		assert!(ShapeType::is_plain_code(8));
		assert!(!ShapeType::is_plain_code(11));
		assert!(!ShapeType::is_plain_code(25));
	}
}
