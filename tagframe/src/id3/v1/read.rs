use super::constants::{
	ALBUM_OFFSET, ARTIST_OFFSET, COMMENT_OFFSET, GENRE_OFFSET, ID3V1_TAG_MARKER, ID3V1_TAG_SIZE,
	LONG_COMMENT_SIZE, SHORT_COMMENT_SIZE, TEXT_FIELD_SIZE, TITLE_OFFSET, TRACK_MARKER_OFFSET,
	TRACK_OFFSET, YEAR_OFFSET, YEAR_SIZE,
};
use super::tag::{Id3v1Tag, genre_name};
use crate::error::Result;
use crate::util::text::utf8_decode;

/// Get the last 128 bytes of the buffer, if there are enough of them
pub(super) fn tag_window(buffer: &[u8]) -> Option<&[u8]> {
	let start = buffer.len().checked_sub(ID3V1_TAG_SIZE)?;
	Some(&buffer[start..])
}

/// Check if the buffer ends with an ID3v1 tag
///
/// The last 128 bytes must start with `TAG`, and at least one of the bytes after it must be non-zero.
///
/// # Examples
///
/// ```rust
/// use tagframe::id3::v1::detect;
///
/// let mut buffer = vec![0; 128];
/// buffer[..3].copy_from_slice(b"TAG");
///
/// // The signature alone isn't enough
/// assert!(!detect(&buffer));
///
/// buffer[3] = b'A';
/// assert!(detect(&buffer));
/// ```
pub fn detect(buffer: &[u8]) -> bool {
	let Some(tag) = tag_window(buffer) else {
		return false;
	};

	tag.starts_with(&ID3V1_TAG_MARKER) && tag[ID3V1_TAG_MARKER.len()..].iter().any(|b| *b != 0)
}

impl Id3v1Tag {
	/// Parse the ID3v1 tag at the end of a buffer
	///
	/// Returns `Ok(None)` if [`detect`] fails.
	///
	/// # Errors
	///
	/// * Any of the text fields are not valid UTF-8
	///
	/// # Examples
	///
	/// ```rust
	/// use tagframe::id3::v1::Id3v1Tag;
	///
	/// # fn main() -> tagframe::error::Result<()> {
	/// let mut buffer = vec![0; 128];
	/// buffer[..6].copy_from_slice(b"TAGFoo");
	/// buffer[126] = 5;
	/// buffer[127] = 2;
	///
	/// let tag = Id3v1Tag::parse(&buffer)?.expect("should have a tag");
	/// assert_eq!(tag.title, "Foo");
	/// assert_eq!(tag.track, 5);
	/// assert_eq!(tag.genre, "Country");
	/// # Ok(()) }
	/// ```
	pub fn parse(buffer: &[u8]) -> Result<Option<Self>> {
		if !detect(buffer) {
			return Ok(None);
		}

		let Some(tag) = tag_window(buffer) else {
			return Ok(None);
		};

		log::debug!("Found an ID3v1 tag, parsing");

		let field = |offset: usize, size: usize| utf8_decode(&tag[offset..offset + size]);

		// A zero byte at 125 marks the end of a 28 byte comment, with the track number following it.
		// Anything else means the comment uses all 30 bytes and there is no track number.
		let (comment_size, track) = if tag[TRACK_MARKER_OFFSET] == 0 {
			(SHORT_COMMENT_SIZE, tag[TRACK_OFFSET])
		} else {
			(LONG_COMMENT_SIZE, 0)
		};

		let genre = genre_name(tag[GENRE_OFFSET]);
		if genre == crate::picture::UNKNOWN {
			log::debug!("ID3v1 genre byte {} is unknown", tag[GENRE_OFFSET]);
		}

		Ok(Some(Self {
			title: field(TITLE_OFFSET, TEXT_FIELD_SIZE)?,
			artist: field(ARTIST_OFFSET, TEXT_FIELD_SIZE)?,
			album: field(ALBUM_OFFSET, TEXT_FIELD_SIZE)?,
			year: field(YEAR_OFFSET, YEAR_SIZE)?,
			comment: field(COMMENT_OFFSET, comment_size)?,
			track,
			genre,
		}))
	}
}
