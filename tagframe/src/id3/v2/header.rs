use crate::error::Result;
use crate::id3::v2::util::synchsafe::SynchsafeInteger;
use crate::macros::{err, id3v2_err};

use std::fmt::{Display, Formatter};

use byteorder::{BigEndian, ByteOrder};

/// The size of the ID3v2 header
pub(crate) const ID3V2_HEADER_SIZE: usize = 10;

/// The ID3v2 version, as stored in the header
///
/// Only major version 3 can be parsed.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub struct Id3v2Version {
	/// The major version, 3 for ID3v2.3
	pub major: u8,
	/// The revision number
	pub minor: u8,
}

impl Display for Id3v2Version {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "2.{}.{}", self.major, self.minor)
	}
}

/// Flags that apply to the entire tag
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Id3v2TagFlags {
	/// Whether or not all frames are unsynchronised
	///
	/// Tags with this flag set are rejected.
	pub unsynchronisation: bool,
	/// Whether the header is followed by an extended header
	pub extended_header: bool,
	/// Indicates if the tag is in an experimental stage
	pub experimental: bool,
}

/// An ID3v2 tag header
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Id3v2Header {
	/// The tag version
	pub version: Id3v2Version,
	/// The tag flags
	pub flags: Id3v2TagFlags,
	/// The size of the tag contents, as stored in the header
	///
	/// This is supposed to exclude the 10 byte header, though some encoders include it.
	pub size: u32,
	/// The size of the extended header, 0 if there is none
	pub extended_size: u32,
}

impl Id3v2Header {
	/// Parse the header at the start of `bytes`
	///
	/// The caller has already checked for the `ID3` signature.
	pub(crate) fn parse(bytes: &[u8]) -> Result<Self> {
		log::debug!("Parsing ID3v2 header");

		let Some(header) = bytes.first_chunk::<ID3V2_HEADER_SIZE>() else {
			err!(SizeMismatch);
		};

		let version = Id3v2Version {
			major: header[3],
			minor: header[4],
		};

		let flags = header[5];
		let flags = Id3v2TagFlags {
			unsynchronisation: flags & 0x80 == 0x80,
			extended_header: flags & 0x40 == 0x40,
			experimental: flags & 0x20 == 0x20,
		};

		// Unsynchronisation is rejected before the version is even looked at
		if flags.unsynchronisation {
			id3v2_err!(@BAIL NotSupported("unsynchronisation"));
		}

		if version.major != 3 {
			id3v2_err!(@BAIL UnsupportedVersion(version.major, version.minor));
		}

		let size = BigEndian::read_u32(&header[6..]).unsynch();
		let mut extended_size = 0;

		if flags.extended_header {
			let Some(raw_size) = bytes.get(ID3V2_HEADER_SIZE..ID3V2_HEADER_SIZE + 4) else {
				id3v2_err!(@BAIL BadExtendedHeaderSize);
			};

			extended_size = BigEndian::read_u32(raw_size).unsynch();

			// The size field itself isn't included
			if bytes.len() < ID3V2_HEADER_SIZE + 4 + extended_size as usize {
				id3v2_err!(@BAIL BadExtendedHeaderSize);
			}
		}

		Ok(Self {
			version,
			flags,
			size,
			extended_size,
		})
	}

	/// The offset of the first frame, from the start of the tag
	pub(crate) fn frames_start(&self) -> usize {
		if self.flags.extended_header {
			ID3V2_HEADER_SIZE + 4 + self.extended_size as usize
		} else {
			ID3V2_HEADER_SIZE
		}
	}
}
