use super::constants::{APE_HEADER_SIZE, APE_PREAMBLE};

use std::fmt::{Display, Formatter};

use byteorder::{ByteOrder, LittleEndian};

/// The version of an APE tag
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApeVersion {
	/// APEv1, stored as `1000`
	V1,
	/// APEv2, stored as `2000`
	V2,
	/// Any other value
	Unknown(u32),
}

impl ApeVersion {
	/// Get an `ApeVersion` from its stored value
	pub fn from_u32(version: u32) -> Self {
		match version {
			1000 => Self::V1,
			2000 => Self::V2,
			_ => Self::Unknown(version),
		}
	}
}

impl Display for ApeVersion {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::V1 => f.write_str("1.000"),
			Self::V2 => f.write_str("2.000"),
			Self::Unknown(version) => write!(f, "unknown version {version}"),
		}
	}
}

/// Flags shared by the APE header and footer
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ApeTagFlags {
	/// The tag has a header (bit 31)
	pub has_header: bool,
	/// The tag has a footer (bit 30 is *clear*)
	pub has_footer: bool,
	/// This record is the header, rather than the footer (bit 29)
	pub is_header: bool,
}

impl ApeTagFlags {
	/// Parse the flags from their stored value
	///
	/// # Examples
	///
	/// ```rust
	/// use tagframe::ape::ApeTagFlags;
	///
	/// // A footer of a tag with a header
	/// let flags = ApeTagFlags::parse(0x8000_0000);
	/// assert!(flags.has_header);
	/// assert!(flags.has_footer);
	/// assert!(!flags.is_header);
	/// ```
	pub fn parse(flags: u32) -> Self {
		Self {
			has_header: flags & (1 << 31) != 0,
			has_footer: flags & (1 << 30) == 0,
			is_header: flags & (1 << 29) != 0,
		}
	}
}

/// An APE tag header or footer
///
/// Both records share the same 32 byte layout, all integers being little endian:
///
/// | Offset | Size | Content         |
/// |--------|------|-----------------|
/// | 0      | 8    | `APETAGEX`      |
/// | 8      | 4    | Version         |
/// | 12     | 4    | Tag size        |
/// | 16     | 4    | Item count      |
/// | 20     | 4    | Flags           |
/// | 24     | 8    | Reserved        |
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ApeHeader {
	/// The tag version
	pub version: ApeVersion,
	/// The size of the items and footer, excluding the header
	pub size: u32,
	/// The number of items in the tag
	pub item_count: u32,
	/// The tag flags
	pub flags: ApeTagFlags,
}

impl ApeHeader {
	pub(crate) fn parse(record: &[u8; APE_HEADER_SIZE]) -> Self {
		if !record.starts_with(APE_PREAMBLE) {
			log::warn!("APE: Record is missing the \"APETAGEX\" preamble");
		}

		Self {
			version: ApeVersion::from_u32(LittleEndian::read_u32(&record[8..12])),
			size: LittleEndian::read_u32(&record[12..16]),
			item_count: LittleEndian::read_u32(&record[16..20]),
			flags: ApeTagFlags::parse(LittleEndian::read_u32(&record[20..24])),
		}
	}

	/// The size of the item region
	///
	/// This is the tag size minus the footer, if there is one.
	pub fn content_size(&self) -> u32 {
		if self.flags.has_footer {
			self.size.saturating_sub(APE_HEADER_SIZE as u32)
		} else {
			self.size
		}
	}
}
