use crate::config::ParseOptions;
use crate::error::Result;
use crate::picture::picture_type_name;
use crate::util::text::{TextEncoding, latin1_decode, read_to_terminator};

/// An `ID3v2` attached picture frame ("APIC")
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttachedPictureFrame {
	/// The MIME type of the picture, such as `image/jpeg`
	pub mime_type: String,
	/// The picture type, see [`PICTURE_TYPES`](crate::picture::PICTURE_TYPES)
	pub picture_type: &'static str,
	/// A description of the picture
	pub description: String,
	/// The picture data
	///
	/// This is empty if [`ParseOptions::read_cover_art`] was disabled.
	pub data: Vec<u8>,
}

impl AttachedPictureFrame {
	/// Get an [`AttachedPictureFrame`] from ID3v2 APIC bytes
	///
	/// NOTE: This expects *only* the frame content
	///
	/// Returns `Ok(None)` if the content ends before the picture type.
	///
	/// # Errors
	///
	/// * Unable to decode the description
	pub fn parse(content: &[u8], parse_options: ParseOptions) -> Result<Option<Self>> {
		let Some((&encoding_byte, rest)) = content.split_first() else {
			return Ok(None);
		};
		let encoding = TextEncoding::from_u8_lossy(encoding_byte);

		// The MIME type is always Latin-1
		let (mime_type, consumed) = read_to_terminator(rest, TextEncoding::Latin1);
		let mime_type = latin1_decode(mime_type);

		let Some((&picture_type, rest)) = rest[consumed..].split_first() else {
			return Ok(None);
		};

		let (description, consumed) = read_to_terminator(rest, encoding);
		let description = encoding.decode(description)?;

		let data = if parse_options.read_cover_art {
			rest[consumed..].to_vec()
		} else {
			Vec::new()
		};

		Ok(Some(Self {
			mime_type,
			picture_type: picture_type_name(picture_type),
			description,
			data,
		}))
	}
}
