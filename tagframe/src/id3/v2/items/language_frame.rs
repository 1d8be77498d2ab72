use crate::error::Result;
use crate::util::text::{TextEncoding, latin1_decode, read_to_terminator};

// Generic struct for a text frame that has a language
//
// This exists to deduplicate some code between `CommentFrame` and `UnsynchronizedTextFrame`
struct LanguageFrame {
	language: String,
	description: String,
	content: String,
}

impl LanguageFrame {
	// Encoding (1), language (3), terminated description, content
	fn parse(content: &[u8]) -> Result<Option<Self>> {
		if content.len() < 4 {
			return Ok(None);
		}

		let encoding = TextEncoding::from_u8_lossy(content[0]);
		let language = latin1_decode(&content[1..4]);

		let (description, consumed) = read_to_terminator(&content[4..], encoding);
		let description = encoding.decode(description)?;
		let text = encoding.decode(&content[4 + consumed..])?;

		Ok(Some(Self {
			language,
			description,
			content: text,
		}))
	}
}

/// An `ID3v2` comment frame ("COMM")
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommentFrame {
	/// ISO-639-2 language code (3 bytes)
	pub language: String,
	/// Content description
	pub description: String,
	/// The actual frame content
	pub content: String,
}

impl From<LanguageFrame> for CommentFrame {
	fn from(value: LanguageFrame) -> Self {
		Self {
			language: value.language,
			description: value.description,
			content: value.content,
		}
	}
}

impl CommentFrame {
	/// Read a [`CommentFrame`] from a slice
	///
	/// NOTE: This expects the frame header to have already been skipped
	///
	/// Returns `Ok(None)` if the content is too short to hold the encoding and language.
	///
	/// # Errors
	///
	/// * Unable to decode the text
	pub fn parse(content: &[u8]) -> Result<Option<Self>> {
		Ok(LanguageFrame::parse(content)?.map(Into::into))
	}
}

/// An `ID3v2` unsynchronized lyrics/text frame ("USLT")
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnsynchronizedTextFrame {
	/// ISO-639-2 language code (3 bytes)
	pub language: String,
	/// Content description
	pub description: String,
	/// The lyrics
	pub content: String,
}

impl From<LanguageFrame> for UnsynchronizedTextFrame {
	fn from(value: LanguageFrame) -> Self {
		Self {
			language: value.language,
			description: value.description,
			content: value.content,
		}
	}
}

impl UnsynchronizedTextFrame {
	/// Read an [`UnsynchronizedTextFrame`] from a slice
	///
	/// NOTE: This expects the frame header to have already been skipped
	///
	/// Returns `Ok(None)` if the content is too short to hold the encoding and language.
	///
	/// # Errors
	///
	/// * Unable to decode the text
	pub fn parse(content: &[u8]) -> Result<Option<Self>> {
		Ok(LanguageFrame::parse(content)?.map(Into::into))
	}
}
