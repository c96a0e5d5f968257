//! Error taxonomy shared by every decoder and codec in the workspace.
//!
//! Functions keep returning `anyhow::Result` and add location details with
//! [`anyhow::Context`]. The root cause of every failure raised by this workspace is a
//! [`GeoError`], so callers can tell the three kinds of fault apart:
//!
//! ```rust
//! use geoshape_core::{GeoError, GeoErrorKind};
//!
//! let err = anyhow::Error::from(GeoError::format("record is truncated")).context("while reading record 3");
//! assert_eq!(GeoError::kind_of(&err), Some(GeoErrorKind::Format));
//! ```

use std::io;
use thiserror::Error;

/// A fatal fault raised while decoding or encoding geographic data.
#[derive(Debug, Error)]
pub enum GeoError {
	/// A file could not be opened or read.
	#[error("i/o error: {0}")]
	Io(#[from] io::Error),

	/// The data is structurally inconsistent: wrong byte counts, truncated content,
	/// mismatching row counts or malformed text.
	#[error("format error: {0}")]
	Format(String),

	/// A shape-type code or geometry tag that is not supported.
	#[error("unsupported geographical type: {0}")]
	Type(String),
}

/// The discriminant of a [`GeoError`], convenient for matching in tests and callers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeoErrorKind {
	Io,
	Format,
	Type,
}

impl GeoError {
	pub fn format(msg: impl Into<String>) -> Self {
		GeoError::Format(msg.into())
	}

	pub fn unsupported(type_name: impl Into<String>) -> Self {
		GeoError::Type(type_name.into())
	}

	/// Converts an I/O error raised while filling a fixed-size buffer.
	///
	/// Running out of data is a structural fault of the input, anything else is an I/O fault.
	pub fn from_read(err: io::Error, what: &str) -> Self {
		if err.kind() == io::ErrorKind::UnexpectedEof {
			GeoError::Format(format!("unexpected end of data while reading {what}"))
		} else {
			GeoError::Io(err)
		}
	}

	#[must_use]
	pub fn kind(&self) -> GeoErrorKind {
		match self {
			GeoError::Io(_) => GeoErrorKind::Io,
			GeoError::Format(_) => GeoErrorKind::Format,
			GeoError::Type(_) => GeoErrorKind::Type,
		}
	}

	/// Finds the [`GeoError`] inside an `anyhow::Error`, looking through added context.
	pub fn find(err: &anyhow::Error) -> Option<&GeoError> {
		err.chain().find_map(|cause| cause.downcast_ref::<GeoError>())
	}

	pub fn kind_of(err: &anyhow::Error) -> Option<GeoErrorKind> {
		Self::find(err).map(GeoError::kind)
	}
}
