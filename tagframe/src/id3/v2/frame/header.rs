use super::FrameFlags;
use crate::util::text::latin1_decode;

use std::fmt::{Display, Formatter};

use byteorder::{BigEndian, ByteOrder};

/// The size of an ID3v2.3 frame header
pub(in crate::id3::v2) const FRAME_HEADER_SIZE: usize = 10;

/// An `ID3v2` frame ID
///
/// IDs are 4 characters, usually `'A'..='Z'` and `'0'..='9'`. They are stored as found.
#[derive(PartialEq, Clone, Debug, Eq, Hash)]
pub struct FrameId(String);

impl FrameId {
	/// Get the ID as a `&str`
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl Display for FrameId {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.0)
	}
}

impl PartialEq<str> for FrameId {
	fn eq(&self, other: &str) -> bool {
		self.0 == other
	}
}

impl PartialEq<&str> for FrameId {
	fn eq(&self, other: &&str) -> bool {
		self.0 == *other
	}
}

/// An `ID3v2` frame header
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FrameHeader {
	/// The frame ID
	pub id: FrameId,
	/// The size of the frame content, excluding the header
	pub size: u32,
	/// The frame flags
	pub flags: FrameFlags,
}

impl FrameHeader {
	// The ID is 4 bytes, followed by a big endian size (not synchsafe in ID3v2.3) and 2 bytes of flags
	pub(in crate::id3::v2) fn parse(header: &[u8; FRAME_HEADER_SIZE]) -> Self {
		Self {
			id: FrameId(latin1_decode(&header[..4])),
			size: BigEndian::read_u32(&header[4..8]),
			flags: FrameFlags::parse_id3v23(BigEndian::read_u16(&header[8..])),
		}
	}
}
