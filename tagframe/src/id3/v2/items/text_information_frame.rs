use crate::error::Result;
use crate::util::text::TextEncoding;

/// Decode the content of a "T..." (excluding TXXX) frame
///
/// The first byte selects the encoding, everything after it is the text. An empty frame is an
/// empty string.
pub(in crate::id3::v2) fn parse_text_information(content: &[u8]) -> Result<String> {
	let Some((&encoding_byte, text)) = content.split_first() else {
		return Ok(String::new());
	};

	let encoding = TextEncoding::from_u8_lossy(encoding_byte);
	Ok(encoding.decode(text)?)
}
