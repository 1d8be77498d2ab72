//! Format-agnostic buffer parsing tools
//!
//! When the caller doesn't know which tags a buffer holds, [`read_from_bytes`] runs every parser
//! over it and keeps whatever was found.

use crate::ape::{ApeTag, SearchDirection};
use crate::config::ParseOptions;
use crate::error::Result;
use crate::id3::v1::Id3v1Tag;
use crate::id3::v2::Id3v2Tag;

/// The tag's format
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum TagType {
	/// This covers both APEv1 and APEv2 as it doesn't matter much
	Ape,
	/// Represents an ID3v1 tag
	Id3v1,
	/// Represents an ID3v2.3 tag
	Id3v2,
}

/// All of the tags found in a buffer
#[derive(Default, Debug, PartialEq, Eq, Clone)]
pub struct TaggedBuffer {
	/// The ID3v1 tag at the end of the buffer
	pub id3v1: Option<Id3v1Tag>,
	/// The ID3v2 tag at the start of the buffer
	pub id3v2: Option<Id3v2Tag>,
	/// The APE tag, found by searching backward
	pub ape: Option<ApeTag>,
}

impl TaggedBuffer {
	/// Checks if a specific [`TagType`] was found
	///
	/// # Examples
	///
	/// ```rust
	/// use tagframe::config::ParseOptions;
	/// use tagframe::probe::{TagType, read_from_bytes};
	///
	/// # fn main() -> tagframe::error::Result<()> {
	/// let buffer = tagframe::id3::v1::write_title(vec![0; 256], "Foo");
	///
	/// let tagged_buffer = read_from_bytes(&buffer, ParseOptions::new())?;
	/// assert!(tagged_buffer.contains_tag_type(TagType::Id3v1));
	/// assert!(!tagged_buffer.contains_tag_type(TagType::Ape));
	/// # Ok(()) }
	/// ```
	pub fn contains_tag_type(&self, tag_type: TagType) -> bool {
		match tag_type {
			TagType::Ape => self.ape.is_some(),
			TagType::Id3v1 => self.id3v1.is_some(),
			TagType::Id3v2 => self.id3v2.is_some(),
		}
	}

	/// Returns the [`TagType`]s that were found, in the order ID3v2, APE, ID3v1
	pub fn tag_types(&self) -> Vec<TagType> {
		[TagType::Id3v2, TagType::Ape, TagType::Id3v1]
			.into_iter()
			.filter(|tag_type| self.contains_tag_type(*tag_type))
			.collect()
	}

	/// Whether no tags were found
	pub fn is_empty(&self) -> bool {
		self.tag_types().is_empty()
	}
}

/// Read every supported tag from a buffer
///
/// APE tags are searched for backward, see [`SearchDirection::Backward`].
///
/// # Errors
///
/// See:
///
/// * [`Id3v1Tag::parse`]
/// * [`Id3v2Tag::parse`]
/// * [`ApeTag::parse`]
pub fn read_from_bytes(buffer: &[u8], parse_options: ParseOptions) -> Result<TaggedBuffer> {
	let id3v2 = Id3v2Tag::parse(buffer, parse_options)?;
	let ape = ApeTag::parse(buffer, SearchDirection::Backward, parse_options)?;
	let id3v1 = Id3v1Tag::parse(buffer)?;

	let tagged_buffer = TaggedBuffer { id3v1, id3v2, ape };
	log::debug!("Found tags: {:?}", tagged_buffer.tag_types());

	Ok(tagged_buffer)
}
