//! Text decoding for the encodings found in tags
//!
//! Every decoder consumes the *entire* slice it is given, or fails. Callers that want a
//! sub-range should slice before decoding (`&bytes[start..end]`).

use std::fmt::{Display, Formatter};

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: [u8; 2] = [0xFF, 0xFE];
const UTF16_BE_BOM: [u8; 2] = [0xFE, 0xFF];

/// Errors that can occur while decoding text
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TextDecodeError {
	encoding: TextEncoding,
	valid_up_to: usize,
	reason: &'static str,
}

impl TextDecodeError {
	const fn new(encoding: TextEncoding, valid_up_to: usize, reason: &'static str) -> Self {
		Self {
			encoding,
			valid_up_to,
			reason,
		}
	}

	/// The text encoding that was being decoded
	pub fn encoding(&self) -> TextEncoding {
		self.encoding
	}

	/// The byte index in the provided slice up to which the input was valid
	pub fn valid_up_to(&self) -> usize {
		self.valid_up_to
	}
}

impl Display for TextDecodeError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"{} ({} sequence invalid from index {})",
			self.reason,
			self.encoding.name(),
			self.valid_up_to
		)
	}
}

impl std::error::Error for TextDecodeError {}

/// The text encodings used by ID3v2 frames
#[derive(Debug, Clone, Eq, PartialEq, Copy, Hash)]
#[repr(u8)]
pub enum TextEncoding {
	/// ISO-8859-1
	Latin1 = 0,
	/// UTF-16 little endian
	///
	/// ID3v2 calls this "UTF-16 with a byte order mark", but the mark is only ever skipped, not
	/// used to pick the endianness.
	UTF16LE = 1,
	/// UTF-16 big endian
	UTF16BE = 2,
	/// UTF-8
	UTF8 = 3,
}

impl TextEncoding {
	/// Get a `TextEncoding` from a u8, must be 0-3 inclusive
	pub fn from_u8(byte: u8) -> Option<Self> {
		match byte {
			0 => Some(Self::Latin1),
			1 => Some(Self::UTF16LE),
			2 => Some(Self::UTF16BE),
			3 => Some(Self::UTF8),
			_ => None,
		}
	}

	/// Get a `TextEncoding` from a u8, treating any unknown value as [`TextEncoding::UTF8`]
	///
	/// # Examples
	///
	/// ```rust
	/// use tagframe::text::TextEncoding;
	///
	/// assert_eq!(TextEncoding::from_u8_lossy(2), TextEncoding::UTF16BE);
	/// assert_eq!(TextEncoding::from_u8_lossy(42), TextEncoding::UTF8);
	/// ```
	pub fn from_u8_lossy(byte: u8) -> Self {
		Self::from_u8(byte).unwrap_or(Self::UTF8)
	}

	/// A human readable name for the encoding
	pub fn name(self) -> &'static str {
		match self {
			Self::Latin1 => "ISO-8859-1",
			Self::UTF16LE => "UTF-16",
			Self::UTF16BE => "UTF-16BE",
			Self::UTF8 => "UTF-8",
		}
	}

	/// Decode `bytes` with this encoding
	///
	/// # Errors
	///
	/// See [`utf8_decode`], [`utf16_decode_le`] and [`utf16_decode_be`]. Latin-1 never fails.
	pub fn decode(self, bytes: &[u8]) -> Result<String, TextDecodeError> {
		match self {
			Self::Latin1 => Ok(latin1_decode(bytes)),
			Self::UTF16LE => utf16_decode_le(bytes),
			Self::UTF16BE => utf16_decode_be(bytes),
			Self::UTF8 => utf8_decode(bytes),
		}
	}

	fn terminator_len(self) -> usize {
		match self {
			Self::Latin1 | Self::UTF8 => 1,
			Self::UTF16LE | Self::UTF16BE => 2,
		}
	}
}

/// Decode ISO-8859-1 text, each octet becomes the code point of the same value
pub fn latin1_decode(bytes: &[u8]) -> String {
	bytes.iter().map(|b| char::from(*b)).collect()
}

/// Decode UTF-8 text
///
/// A leading byte order mark is skipped, and any decoded U+0000 is dropped from the output.
///
/// # Errors
///
/// * A lead byte matches none of the 1 to 4 byte patterns
/// * A sequence is cut short by the end of the slice
/// * A sequence decodes to something that isn't a Unicode scalar value
///
/// # Examples
///
/// ```rust
/// use tagframe::text::utf8_decode;
///
/// # fn main() -> Result<(), tagframe::text::TextDecodeError> {
/// assert_eq!(utf8_decode(b"\xEF\xBB\xBFFoo\0\0")?, "Foo");
/// # Ok(()) }
/// ```
pub fn utf8_decode(bytes: &[u8]) -> Result<String, TextDecodeError> {
	let mut text = String::with_capacity(bytes.len());

	let mut pos = if bytes.starts_with(&UTF8_BOM) { 3 } else { 0 };
	while pos < bytes.len() {
		let lead = bytes[pos];

		let (len, initial) = match lead {
			0b0000_0000..=0b0111_1111 => (1, u32::from(lead)),
			0b1100_0000..=0b1101_1111 => (2, u32::from(lead & 0b0001_1111)),
			0b1110_0000..=0b1110_1111 => (3, u32::from(lead & 0b0000_1111)),
			0b1111_0000..=0b1111_0111 => (4, u32::from(lead & 0b0000_0111)),
			_ => {
				return Err(TextDecodeError::new(
					TextEncoding::UTF8,
					pos,
					"invalid UTF-8 lead byte",
				));
			},
		};

		let Some(continuation) = bytes.get(pos + 1..pos + len) else {
			return Err(TextDecodeError::new(
				TextEncoding::UTF8,
				pos,
				"truncated UTF-8 sequence",
			));
		};

		let code_point = continuation
			.iter()
			.fold(initial, |acc, b| (acc << 6) | u32::from(b & 0b0011_1111));

		// Embedded nulls (usually padding) are elided
		if code_point != 0 {
			let Some(c) = char::from_u32(code_point) else {
				return Err(TextDecodeError::new(
					TextEncoding::UTF8,
					pos,
					"UTF-8 sequence is not a valid code point",
				));
			};

			text.push(c);
		}

		pos += len;
	}

	Ok(text)
}

/// Decode little endian UTF-16 text, skipping a leading `FF FE`
///
/// # Errors
///
/// * The slice (after the BOM) has an odd length
/// * A surrogate is unpaired
pub fn utf16_decode_le(bytes: &[u8]) -> Result<String, TextDecodeError> {
	utf16_decode_bytes(bytes, UTF16_LE_BOM, TextEncoding::UTF16LE, u16::from_le_bytes)
}

/// Decode big endian UTF-16 text, skipping a leading `FE FF`
///
/// # Errors
///
/// * The slice (after the BOM) has an odd length
/// * A surrogate is unpaired
///
/// # Examples
///
/// ```rust
/// use tagframe::text::utf16_decode_be;
///
/// # fn main() -> Result<(), tagframe::text::TextDecodeError> {
/// let bytes = [0x00, 0x41, 0x78, 0x34, 0x66, 0x53];
/// assert_eq!(utf16_decode_be(&bytes)?, "A破晓");
/// # Ok(()) }
/// ```
pub fn utf16_decode_be(bytes: &[u8]) -> Result<String, TextDecodeError> {
	utf16_decode_bytes(bytes, UTF16_BE_BOM, TextEncoding::UTF16BE, u16::from_be_bytes)
}

fn utf16_decode_bytes(
	bytes: &[u8],
	bom: [u8; 2],
	encoding: TextEncoding,
	read_unit: fn([u8; 2]) -> u16,
) -> Result<String, TextDecodeError> {
	let start = if bytes.starts_with(&bom) { 2 } else { 0 };
	let body = &bytes[start..];

	if body.len() % 2 != 0 {
		return Err(TextDecodeError::new(
			encoding,
			bytes.len() - 1,
			"UTF-16 string has an odd length",
		));
	}

	let mut text = String::with_capacity(body.len() / 2);

	let mut units = body
		.chunks_exact(2)
		.map(|unit| read_unit([unit[0], unit[1]]))
		.enumerate()
		.peekable();

	while let Some((index, unit)) = units.next() {
		let offset = start + index * 2;

		let code_point = match unit {
			0xD800..=0xDBFF => match units.peek() {
				Some(&(_, low @ 0xDC00..=0xDFFF)) => {
					units.next();
					0x10000 + ((u32::from(unit) - 0xD800) << 10) + (u32::from(low) - 0xDC00)
				},
				_ => {
					return Err(TextDecodeError::new(
						encoding,
						offset,
						"unpaired UTF-16 high surrogate",
					));
				},
			},
			0xDC00..=0xDFFF => {
				return Err(TextDecodeError::new(
					encoding,
					offset,
					"unpaired UTF-16 low surrogate",
				));
			},
			_ => u32::from(unit),
		};

		match char::from_u32(code_point) {
			Some(c) => text.push(c),
			None => {
				return Err(TextDecodeError::new(
					encoding,
					offset,
					"UTF-16 sequence is not a valid code point",
				));
			},
		}
	}

	Ok(text)
}

/// Split a terminated string off the front of `bytes`
///
/// Returns the text bytes (without the terminator) and the number of bytes consumed
/// (including the terminator). Latin-1 and UTF-8 strings end at a single `00`, UTF-16 strings
/// end at an aligned `00 00`. If no terminator is found, the entire slice is text.
pub(crate) fn read_to_terminator(bytes: &[u8], encoding: TextEncoding) -> (&[u8], usize) {
	let terminator_len = encoding.terminator_len();

	let terminator_pos = bytes
		.chunks_exact(terminator_len)
		.position(|unit| unit.iter().all(|b| *b == 0))
		.map(|index| index * terminator_len);

	match terminator_pos {
		Some(pos) => (&bytes[..pos], pos + terminator_len),
		None => (bytes, bytes.len()),
	}
}
