use super::constants::GENRES;
use crate::picture::lookup;

/// A parsed ID3v1 tag
///
/// Text fields are stored as found, with any null padding removed. Fields that were empty in the
/// tag are empty strings.
///
/// Produced by [`Id3v1Tag::parse`](crate::id3::v1::Id3v1Tag::parse).
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Id3v1Tag {
	/// Track title, 30 bytes max
	pub title: String,
	/// Track artist, 30 bytes max
	pub artist: String,
	/// Album title, 30 bytes max
	pub album: String,
	/// Release year, 4 bytes max
	pub year: String,
	/// A short comment
	///
	/// This is 28 bytes for a tag with a track number, 30 bytes otherwise.
	pub comment: String,
	/// The track number, 0 if the tag doesn't have one
	pub track: u8,
	/// The genre name, see [`GENRES`]
	///
	/// This is `"unknown"` if the genre byte doesn't map to a known genre.
	pub genre: &'static str,
}

impl Id3v1Tag {
	/// Get the code of a genre name, see [`genre_code`]
	pub fn genre_code(name: &str) -> Option<u8> {
		genre_code(name)
	}

	/// Get the name of a genre code, see [`genre_name`]
	pub fn genre_name(code: u8) -> &'static str {
		genre_name(code)
	}
}

/// Get the name of an ID3v1 genre
///
/// # Examples
///
/// ```rust
/// use tagframe::id3::v1::genre_name;
///
/// assert_eq!(genre_name(13), "Pop");
/// assert_eq!(genre_name(255), "unknown");
/// ```
pub fn genre_name(code: u8) -> &'static str {
	lookup(&GENRES, code)
}

/// Get the code of an ID3v1 genre name, if it is in [`GENRES`]
///
/// The comparison is exact.
///
/// # Examples
///
/// ```rust
/// use tagframe::id3::v1::genre_code;
///
/// assert_eq!(genre_code("Pop"), Some(13));
/// assert_eq!(genre_code("Polka Metal"), None);
/// ```
pub fn genre_code(name: &str) -> Option<u8> {
	GENRES
		.iter()
		.position(|genre| *genre == name)
		.and_then(|index| u8::try_from(index).ok())
}
