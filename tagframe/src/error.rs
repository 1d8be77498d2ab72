//! Contains the errors that can arise within tagframe
//!
//! The primary error is [`TagError`]. The type of error is determined by [`ErrorKind`],
//! which can be extended at any time.

pub use crate::util::text::TextDecodeError;

use std::fmt::{Debug, Display, Formatter};

/// Alias for `Result<T, TagError>`
pub type Result<T> = std::result::Result<T, TagError>;

/// The types of errors that can occur
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
	/// An argument was rejected before any tag data was touched
	///
	/// Example: attempting to write the track number into a buffer too small to hold an ID3v1 tag.
	InvalidInput(&'static str),
	/// Expected the data to be a different size than provided
	///
	/// This occurs when the size of a frame, item, or header/footer is written as one value, but
	/// that size reaches past the end of the provided buffer.
	SizeMismatch,
	/// Errors that arise while decoding text
	TextDecode(TextDecodeError),
	/// Errors that arise while reading ID3v2 tags
	Id3v2(Id3v2Error),
}

/// The types of errors that can occur while interacting with ID3v2 tags
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Id3v2ErrorKind {
	// Header
	/// Arises when a major version other than 3 is found
	UnsupportedVersion(u8, u8),
	/// Arises when the tag uses a feature this crate will not decode (unsynchronisation)
	NotSupported(&'static str),
	/// Arises when an extended header has a size that doesn't fit within the tag
	BadExtendedHeaderSize,

	// Frame
	/// Arises when a frame doesn't have enough data
	BadFrameLength,
}

impl Display for Id3v2ErrorKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::UnsupportedVersion(major, minor) => write!(
				f,
				"Found an unsupported version (v2.{major}.{minor}), expected v2.3"
			),
			Self::NotSupported(feature) => write!(f, "Not supported: {feature}"),
			Self::BadExtendedHeaderSize => {
				write!(f, "Found an extended header with an invalid size")
			},
			Self::BadFrameLength => write!(
				f,
				"Frame isn't long enough to extract the necessary information"
			),
		}
	}
}

/// An error that arises while interacting with an ID3v2 tag
pub struct Id3v2Error {
	kind: Id3v2ErrorKind,
}

impl Id3v2Error {
	/// Create a new `Id3v2Error` from an [`Id3v2ErrorKind`]
	#[must_use]
	pub const fn new(kind: Id3v2ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`Id3v2ErrorKind`]
	pub fn kind(&self) -> &Id3v2ErrorKind {
		&self.kind
	}
}

impl Debug for Id3v2Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "ID3v2: {:?}", self.kind)
	}
}

impl Display for Id3v2Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "ID3v2: {}", self.kind)
	}
}

/// Errors that could occur within tagframe
pub struct TagError {
	pub(crate) kind: ErrorKind,
}

impl TagError {
	/// Create a `TagError` from an [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use tagframe::error::{ErrorKind, TagError};
	///
	/// let size_mismatch = TagError::new(ErrorKind::SizeMismatch);
	/// ```
	#[must_use]
	pub const fn new(kind: ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use tagframe::error::{ErrorKind, TagError};
	///
	/// let size_mismatch = TagError::new(ErrorKind::SizeMismatch);
	/// if let ErrorKind::SizeMismatch = size_mismatch.kind() {
	/// 	println!("The tag lied about its size");
	/// }
	/// ```
	pub fn kind(&self) -> &ErrorKind {
		&self.kind
	}
}

impl std::error::Error for TagError {}

impl Debug for TagError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.kind)
	}
}

impl From<Id3v2Error> for TagError {
	fn from(input: Id3v2Error) -> Self {
		Self {
			kind: ErrorKind::Id3v2(input),
		}
	}
}

impl From<TextDecodeError> for TagError {
	fn from(input: TextDecodeError) -> Self {
		Self {
			kind: ErrorKind::TextDecode(input),
		}
	}
}

impl Display for TagError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.kind {
			ErrorKind::InvalidInput(message) => write!(f, "Invalid input: {message}"),
			ErrorKind::SizeMismatch => write!(
				f,
				"Encountered an invalid item/frame size, either too big or too small to be valid"
			),
			ErrorKind::TextDecode(ref err) => write!(f, "Text decoding: {err}"),
			ErrorKind::Id3v2(ref id3v2_err) => write!(f, "{id3v2_err}"),
		}
	}
}
