//! ID3v1 items
//!
//! # ID3v1 notes
//!
//! See also: [`Id3v1Tag`]
//!
//! ## Layout
//!
//! An ID3v1 tag is always the last 128 bytes of a buffer, starting with `TAG`. A signature followed
//! by nothing but zeros is *not* considered a tag.
//!
//! ## Comments and track numbers
//!
//! The comment field is 30 bytes wide, unless byte 125 of the tag is zero, in which case the
//! comment is only 28 bytes and byte 126 holds the track number (ID3v1.1). A tag can never hold
//! both a 30 byte comment and a track number.
//!
//! ## Genres
//!
//! ID3v1 stores the genre in a single byte. All known genres have been stored in the [`GENRES`]
//! constant, any other value is reported as `"unknown"`.
//!
//! ## Writing
//!
//! The writers take the buffer by value and return it. If the buffer already ends with a tag, it
//! is modified in place. Otherwise a new tag is appended, which may reallocate. Always keep using
//! the *returned* buffer.
pub(crate) mod constants;
pub(crate) mod read;
pub(crate) mod tag;
pub(crate) mod write;

pub use constants::GENRES;
pub use read::detect;
pub use tag::{Id3v1Tag, genre_code, genre_name};
pub use write::{
	GenreValue, Id3v1Fields, write_album, write_artist, write_comment, write_genre, write_title,
	write_track, write_whole, write_year,
};
