//! Decoding of single fixed-width binary fields.
//!
//! [`parse_value`] is the one place where a byte order is applied to raw bytes. Everything
//! that decodes numbers from binary files, including [`ValueReaderSlice`](super::ValueReaderSlice),
//! goes through it, so byte-order handling cannot drift between readers.
//!
//! ```rust
//! use byteorder::{BigEndian, LittleEndian};
//! use geoshape_core::io::parse_value;
//!
//! let bytes = [0x00, 0x00, 0x27, 0x0A];
//! assert_eq!(parse_value::<BigEndian, i32>(&bytes).unwrap(), 9994);
//! assert_eq!(parse_value::<LittleEndian, i32>(&bytes).unwrap(), 170_328_064);
//! assert!(parse_value::<LittleEndian, i32>(&bytes[..3]).is_err());
//! ```

use crate::GeoError;
use anyhow::Result;
use byteorder::ByteOrder;

/// A numeric kind with a fixed encoded width.
pub trait FixedWidth: Sized + Copy {
	/// Number of bytes of the encoded value.
	const WIDTH: usize;
	/// Name used in error messages.
	const NAME: &'static str;

	/// Decodes the value from exactly [`Self::WIDTH`] bytes.
	fn decode<E: ByteOrder>(bytes: &[u8]) -> Self;
}

impl FixedWidth for u8 {
	const WIDTH: usize = 1;
	const NAME: &'static str = "u8";

	#[inline]
	fn decode<E: ByteOrder>(bytes: &[u8]) -> Self {
		bytes[0]
	}
}

impl FixedWidth for i8 {
	const WIDTH: usize = 1;
	const NAME: &'static str = "i8";

	#[inline]
	fn decode<E: ByteOrder>(bytes: &[u8]) -> Self {
		bytes[0] as i8
	}
}

macro_rules! impl_fixed_width {
	($($t:ty, $width:expr, $read:ident);* $(;)?) => {$(
		impl FixedWidth for $t {
			const WIDTH: usize = $width;
			const NAME: &'static str = stringify!($t);

			#[inline]
			fn decode<E: ByteOrder>(bytes: &[u8]) -> Self {
				E::$read(bytes)
			}
		}
	)*};
}

impl_fixed_width!(
	u16, 2, read_u16;
	i16, 2, read_i16;
	u32, 4, read_u32;
	i32, 4, read_i32;
	u64, 8, read_u64;
	i64, 8, read_i64;
	f32, 4, read_f32;
	f64, 8, read_f64;
);

/// Decodes a value of kind `T` from a byte window using byte order `E`.
///
/// # Errors
/// Returns a [`GeoError::Format`] if `bytes` is not exactly `T::WIDTH` bytes long.
pub fn parse_value<E: ByteOrder, T: FixedWidth>(bytes: &[u8]) -> Result<T> {
	if bytes.len() != T::WIDTH {
		return Err(GeoError::format(format!(
			"expected {} bytes for a {}, got {}",
			T::WIDTH,
			T::NAME,
			bytes.len()
		))
		.into());
	}
	Ok(T::decode::<E>(bytes))
}

/// Decodes a value of kind `T` starting at `offset` inside `bytes`.
///
/// # Errors
/// Returns a [`GeoError::Format`] if the field reaches past the end of `bytes`.
pub fn parse_value_at<E: ByteOrder, T: FixedWidth>(bytes: &[u8], offset: usize) -> Result<T> {
	let window = offset
		.checked_add(T::WIDTH)
		.and_then(|end| bytes.get(offset..end))
		.ok_or_else(|| {
			GeoError::format(format!(
				"a {} at offset {offset} exceeds the {} available bytes",
				T::NAME,
				bytes.len()
			))
		})?;
	parse_value::<E, T>(window)
}
