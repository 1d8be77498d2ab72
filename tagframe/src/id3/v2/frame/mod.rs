pub(super) mod content;
pub(super) mod header;
pub(super) mod read;

use super::items::{
	AttachedPictureFrame, CommentFrame, SynchronizedTextFrame, UnsynchronizedTextFrame,
};
use header::FrameHeader;

/// An `ID3v2` frame
///
/// Frames are never constructed by hand, they are produced by
/// [`Id3v2Tag::parse`](crate::id3::v2::Id3v2Tag::parse).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
	/// The frame header
	pub header: FrameHeader,
	/// The decoded frame content
	pub value: FrameValue,
}

impl Frame {
	/// Get the ID of the frame
	///
	/// # Examples
	///
	/// ```rust
	/// use tagframe::config::ParseOptions;
	/// use tagframe::id3::v2::Id3v2Tag;
	///
	/// # fn main() -> tagframe::error::Result<()> {
	/// let mut buffer = vec![b'I', b'D', b'3', 3, 0, 0, 0, 0, 0, 14];
	/// buffer.extend_from_slice(b"TIT2\0\0\0\x04\0\0\0Foo");
	///
	/// let tag = Id3v2Tag::parse(&buffer, ParseOptions::new())?.expect("should have a tag");
	/// assert_eq!(tag.frames[0].id(), "TIT2");
	/// # Ok(()) }
	/// ```
	pub fn id(&self) -> &str {
		self.header.id.as_str()
	}

	/// Get the text content of the frame, if it is a text frame
	pub fn text(&self) -> Option<&str> {
		match &self.value {
			FrameValue::Text(text) => Some(text),
			_ => None,
		}
	}
}

/// The content of an `ID3v2` frame
///
/// Which variant a frame decodes to is decided by its ID alone.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FrameValue {
	/// Represents a "T..." (excluding TXXX) frame
	Text(String),
	/// Represents a "TXXX" frame
	///
	/// The content of these frames is not decoded, they always display as `"TXXX"`.
	UserText,
	/// Represents an "APIC" frame
	Picture(AttachedPictureFrame),
	/// Represents a "COMM" frame
	Comment(CommentFrame),
	/// Represents a "USLT" frame
	UnsynchronizedText(UnsynchronizedTextFrame),
	/// Represents a "SYLT" frame
	SynchronizedText(SynchronizedTextFrame),
	/// Binary data
	///
	/// Any frame that isn't covered by the other variants, along with frames that were too short
	/// to decode when using [`ParsingMode::BestAttempt`](crate::config::ParsingMode::BestAttempt).
	Binary(Vec<u8>),
}

impl FrameValue {
	/// Whether this is an unsynchronized or synchronized lyrics frame
	pub fn is_lyrics(&self) -> bool {
		matches!(
			self,
			FrameValue::UnsynchronizedText(_) | FrameValue::SynchronizedText(_)
		)
	}
}

impl std::fmt::Display for FrameValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Text(text) => f.write_str(text),
			Self::UserText => f.write_str("TXXX"),
			Self::Picture(picture) => write!(
				f,
				"{} ({}, {} bytes)",
				picture.mime_type,
				picture.picture_type,
				picture.data.len()
			),
			Self::Comment(CommentFrame { content, .. })
			| Self::UnsynchronizedText(UnsynchronizedTextFrame { content, .. }) => f.write_str(content),
			Self::SynchronizedText(sync_text) => {
				write!(f, "{} ({})", sync_text.content_type, sync_text.language)
			},
			Self::Binary(data) => write!(f, "{} bytes", data.len()),
		}
	}
}

/// Various flags to describe the content of an item
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FrameFlags {
	/// Preserve frame on tag edit
	pub tag_alter_preservation: bool,
	/// Preserve frame on file edit
	pub file_alter_preservation: bool,
	/// Item cannot be written to
	pub read_only: bool,
	/// The frame is zlib compressed
	///
	/// The content of compressed frames is never read.
	pub compression: bool,
	/// The frame is encrypted
	///
	/// The content of encrypted frames is never read.
	pub encryption: bool,
	/// The frame belongs to a group of frames
	pub grouping_identity: bool,
}

impl FrameFlags {
	/// Parse the flags from an ID3v2.3 frame
	///
	/// # Examples
	///
	/// ```rust
	/// use tagframe::id3::v2::FrameFlags;
	///
	/// let flags = FrameFlags::parse_id3v23(0x2080);
	/// assert!(flags.read_only);
	/// assert!(flags.compression);
	/// assert!(!flags.encryption);
	/// ```
	pub fn parse_id3v23(flags: u16) -> Self {
		FrameFlags {
			tag_alter_preservation: flags & 0x8000 == 0x8000,
			file_alter_preservation: flags & 0x4000 == 0x4000,
			read_only: flags & 0x2000 == 0x2000,
			compression: flags & 0x0080 == 0x0080,
			encryption: flags & 0x0040 == 0x0040,
			grouping_identity: flags & 0x0020 == 0x0020,
		}
	}
}
