use crate::picture::{UNKNOWN, lookup};
use crate::util::text::{TextEncoding, latin1_decode};

/// Names of the content types of a [`SynchronizedTextFrame`], indexed by the content type byte
pub const SYNC_TEXT_CONTENT_TYPES: [&str; 9] = [
	"other",
	"lyrics",
	"text transcription",
	"movement/part name",
	"events",
	"chord",
	"trivia/'pop up' information",
	"URLs to webpages",
	"URLs to images",
];

/// Get the name of a SYLT timestamp format
///
/// # Examples
///
/// ```rust
/// use tagframe::id3::v2::timestamp_format_name;
///
/// assert_eq!(
/// 	timestamp_format_name(2),
/// 	"Absolute time, 32 bit sized, using milliseconds as unit"
/// );
/// assert_eq!(timestamp_format_name(0), "unknown");
/// ```
pub fn timestamp_format_name(format: u8) -> &'static str {
	match format {
		1 => "Absolute time, 32 bit sized, using MPEG frames as unit",
		2 => "Absolute time, 32 bit sized, using milliseconds as unit",
		_ => UNKNOWN,
	}
}

/// Represents an ID3v2 synchronized text frame ("SYLT")
///
/// Only the frame's metadata is read, the synchronized text itself is never decoded and
/// `content` is always empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SynchronizedTextFrame {
	/// The name of the text encoding
	pub encoding: &'static str,
	/// ISO-639-2 language code (3 bytes)
	pub language: String,
	/// The format of the timestamps, see [`timestamp_format_name`]
	pub timestamp_format: &'static str,
	/// The type of content stored, see [`SYNC_TEXT_CONTENT_TYPES`]
	pub content_type: &'static str,
	/// Always empty
	pub content: String,
}

impl SynchronizedTextFrame {
	/// Read a [`SynchronizedTextFrame`] from a slice
	///
	/// NOTE: This expects the frame header to have already been skipped
	///
	/// Returns `None` if the content is shorter than the 6 bytes of metadata.
	pub fn parse(content: &[u8]) -> Option<Self> {
		if content.len() < 6 {
			return None;
		}

		Some(Self {
			encoding: TextEncoding::from_u8_lossy(content[0]).name(),
			language: latin1_decode(&content[1..4]),
			timestamp_format: timestamp_format_name(content[4]),
			content_type: lookup(&SYNC_TEXT_CONTENT_TYPES, content[5]),
			content: String::new(),
		})
	}
}
