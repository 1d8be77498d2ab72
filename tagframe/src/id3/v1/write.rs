use super::constants::{
	ALBUM_OFFSET, ARTIST_OFFSET, COMMENT_OFFSET, ID3V1_TAG_MARKER, ID3V1_TAG_SIZE,
	LONG_COMMENT_SIZE, SHORT_COMMENT_SIZE, TEXT_FIELD_SIZE, TITLE_OFFSET, UNKNOWN_GENRE,
	YEAR_OFFSET, YEAR_SIZE,
};
use super::read::detect;
use super::tag::genre_code;
use crate::error::Result;
use crate::macros::err;

/// A genre to write with [`write_whole`]
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum GenreValue {
	/// A genre name, resolved through [`GENRES`](super::GENRES)
	///
	/// Names that aren't in the table are written as `255`.
	Name(String),
	/// A raw genre byte
	Code(u8),
}

impl GenreValue {
	fn code(&self) -> u8 {
		match self {
			Self::Name(name) => genre_code(name).unwrap_or(UNKNOWN_GENRE),
			Self::Code(code) => *code,
		}
	}
}

/// The fields to write with [`write_whole`]
///
/// Any field left as `None` is untouched.
#[derive(Default, Debug, PartialEq, Eq, Clone)]
pub struct Id3v1Fields {
	/// Track title, truncated to 30 bytes
	pub title: Option<String>,
	/// Track artist, truncated to 30 bytes
	pub artist: Option<String>,
	/// Album title, truncated to 30 bytes
	pub album: Option<String>,
	/// Release year, truncated to 4 bytes
	pub year: Option<String>,
	/// A comment, see [`write_comment`]
	pub comment: Option<String>,
	/// The track number
	pub track: Option<u8>,
	/// The genre
	pub genre: Option<GenreValue>,
}

// `TAG`, an empty body, and an unset genre
fn new_tag() -> [u8; ID3V1_TAG_SIZE] {
	let mut tag = [0; ID3V1_TAG_SIZE];
	tag[..ID3V1_TAG_MARKER.len()].copy_from_slice(&ID3V1_TAG_MARKER);
	tag[ID3V1_TAG_SIZE - 1] = UNKNOWN_GENRE;
	tag
}

// Truncates to `size` bytes without splitting a character, then pads with zeros
fn resize_string(value: &str, size: usize) -> Vec<u8> {
	let mut end = value.len().min(size);
	while !value.is_char_boundary(end) {
		end -= 1;
	}

	let mut field = vec![0; size];
	field[..end].copy_from_slice(&value.as_bytes()[..end]);
	field
}

fn ensure_tag(mut buffer: Vec<u8>) -> Vec<u8> {
	if !detect(&buffer) {
		log::debug!("No ID3v1 tag found, appending a new one");
		buffer.extend_from_slice(&new_tag());
	}

	buffer
}

// Assumes the buffer already ends with a tag
fn write_into_tag(buffer: &mut [u8], value: &str, offset: usize, size: usize) {
	let start = buffer.len() - ID3V1_TAG_SIZE + offset;
	buffer[start..start + size].copy_from_slice(&resize_string(value, size));
}

fn write_field(buffer: Vec<u8>, value: &str, offset: usize, size: usize) -> Vec<u8> {
	let mut buffer = ensure_tag(buffer);
	write_into_tag(&mut buffer, value, offset, size);
	buffer
}

fn comment_size(value: &str) -> usize {
	if value.len() > SHORT_COMMENT_SIZE {
		LONG_COMMENT_SIZE
	} else {
		SHORT_COMMENT_SIZE
	}
}

macro_rules! impl_field_writers {
	($($name:ident => ($offset:ident, $size:ident, $max:literal)),+ $(,)?) => {
		paste::paste! {
			$(
				#[doc = "Write the " $name " of an ID3v1 tag, truncated to " $max " bytes"]
				#[doc = ""]
				#[doc = "If the buffer doesn't end with a tag, a new one is appended. "]
				#[doc = "The returned buffer must be used in place of the input."]
				pub fn [<write_ $name>](buffer: Vec<u8>, value: &str) -> Vec<u8> {
					write_field(buffer, value, $offset, $size)
				}
			)+
		}
	}
}

impl_field_writers!(
	title => (TITLE_OFFSET, TEXT_FIELD_SIZE, 30),
	artist => (ARTIST_OFFSET, TEXT_FIELD_SIZE, 30),
	album => (ALBUM_OFFSET, TEXT_FIELD_SIZE, 30),
	year => (YEAR_OFFSET, YEAR_SIZE, 4),
);

/// Write the comment of an ID3v1 tag
///
/// Comments of up to 28 bytes leave room for a track number. Anything longer uses the full 30
/// bytes, which overwrites the track number.
///
/// # Examples
///
/// ```rust
/// use tagframe::id3::v1::{Id3v1Tag, write_comment, write_track};
///
/// # fn main() -> tagframe::error::Result<()> {
/// let buffer = write_comment(Vec::new(), "Short");
/// let buffer = write_track(buffer, 3)?;
///
/// let tag = Id3v1Tag::parse(&buffer)?.expect("should have a tag");
/// assert_eq!(tag.comment, "Short");
/// assert_eq!(tag.track, 3);
/// # Ok(()) }
/// ```
pub fn write_comment(buffer: Vec<u8>, value: &str) -> Vec<u8> {
	write_field(buffer, value, COMMENT_OFFSET, comment_size(value))
}

/// Write the track number of an ID3v1 tag
///
/// This writes a zero at `len - 3` and the track number at `len - 2`, turning the tag into an
/// ID3v1.1 tag. The buffer is *not* checked for a tag signature.
///
/// # Errors
///
/// * The buffer is shorter than an ID3v1 tag
pub fn write_track(mut buffer: Vec<u8>, track: u8) -> Result<Vec<u8>> {
	let len = buffer.len();
	if len < ID3V1_TAG_SIZE {
		err!(InvalidInput("buffer is too small to hold an ID3v1 tag"));
	}

	buffer[len - 3] = 0;
	buffer[len - 2] = track;
	Ok(buffer)
}

/// Write the genre byte of an ID3v1 tag
///
/// The buffer is *not* checked for a tag signature.
///
/// # Errors
///
/// * The buffer is shorter than an ID3v1 tag
pub fn write_genre(mut buffer: Vec<u8>, genre: u8) -> Result<Vec<u8>> {
	let len = buffer.len();
	if len < ID3V1_TAG_SIZE {
		err!(InvalidInput("buffer is too small to hold an ID3v1 tag"));
	}

	buffer[len - 1] = genre;
	Ok(buffer)
}

/// Write multiple fields of an ID3v1 tag at once
///
/// If the buffer doesn't end with a tag, a new one is appended. Fields are written in the order
/// title, artist, album, year, genre, comment, track.
///
/// # Examples
///
/// ```rust
/// use tagframe::id3::v1::{GenreValue, Id3v1Fields, Id3v1Tag, write_whole};
///
/// # fn main() -> tagframe::error::Result<()> {
/// let fields = Id3v1Fields {
/// 	title: Some(String::from("Foo")),
/// 	genre: Some(GenreValue::Name(String::from("Jazz"))),
/// 	..Id3v1Fields::default()
/// };
///
/// let buffer = write_whole(vec![0; 1024], fields);
/// assert_eq!(buffer.len(), 1024 + 128);
///
/// let tag = Id3v1Tag::parse(&buffer)?.expect("should have a tag");
/// assert_eq!(tag.title, "Foo");
/// assert_eq!(tag.genre, "Jazz");
/// # Ok(()) }
/// ```
pub fn write_whole(buffer: Vec<u8>, fields: Id3v1Fields) -> Vec<u8> {
	let mut buffer = ensure_tag(buffer);

	// All fields go into this one tag, it may stop being detectable once the genre is zeroed
	if let Some(title) = fields.title {
		write_into_tag(&mut buffer, &title, TITLE_OFFSET, TEXT_FIELD_SIZE);
	}
	if let Some(artist) = fields.artist {
		write_into_tag(&mut buffer, &artist, ARTIST_OFFSET, TEXT_FIELD_SIZE);
	}
	if let Some(album) = fields.album {
		write_into_tag(&mut buffer, &album, ALBUM_OFFSET, TEXT_FIELD_SIZE);
	}
	if let Some(year) = fields.year {
		write_into_tag(&mut buffer, &year, YEAR_OFFSET, YEAR_SIZE);
	}

	let len = buffer.len();
	if let Some(genre) = fields.genre {
		buffer[len - 1] = genre.code();
	}
	if let Some(comment) = fields.comment {
		write_into_tag(&mut buffer, &comment, COMMENT_OFFSET, comment_size(&comment));
	}
	if let Some(track) = fields.track {
		buffer[len - 3] = 0;
		buffer[len - 2] = track;
	}

	buffer
}
