//! Read and write ID3v1, ID3v2.3, and APE tags in byte buffers.
//!
//! tagframe works entirely on in-memory buffers. Reading a file, and writing the modified buffer
//! back, is left to the caller.
//!
//! # Supported Formats
//!
//! | Format  | Location             | Read | Write |
//! |---------|----------------------|------|-------|
//! | ID3v1   | Last 128 bytes       | ✓    | ✓     |
//! | ID3v2.3 | Start of the buffer  | ✓    |       |
//! | APEv1/2 | Searched for         | ✓    |       |
//!
//! # Examples
//!
//! ## Reading every tag in a buffer
//!
//! ```rust,no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use tagframe::config::ParseOptions;
//! use tagframe::probe::read_from_bytes;
//!
//! let buffer = std::fs::read("test.mp3")?;
//! let tagged_buffer = read_from_bytes(&buffer, ParseOptions::new())?;
//!
//! if let Some(id3v2) = &tagged_buffer.id3v2 {
//! 	println!("Title: {:?}", id3v2.title());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Using a concrete tag type
//!
//! ```rust
//! # fn main() -> tagframe::error::Result<()> {
//! use tagframe::id3::v1::{Id3v1Tag, write_title, write_track};
//!
//! // Pretend this is some audio data
//! let buffer = vec![0; 512];
//!
//! // No tag yet, so one is appended
//! let buffer = write_title(buffer, "Foo");
//! let buffer = write_track(buffer, 5)?;
//! assert_eq!(buffer.len(), 512 + 128);
//!
//! let tag = Id3v1Tag::parse(&buffer)?.expect("should have a tag");
//! assert_eq!(tag.title, "Foo");
//! assert_eq!(tag.track, 5);
//! # Ok(())
//! # }
//! ```
//!
//! # Important format-specific notes
//!
//! All formats have their own quirks that may produce unexpected results.
//! Be sure to read the module documentation of each format to see important notes and warnings.

pub mod config;
pub mod error;
pub(crate) mod macros;
pub mod picture;
pub mod probe;
mod util;

pub mod ape;
pub mod id3;

pub use crate::probe::read_from_bytes;
pub use util::text;
pub use util::text::TextEncoding;

pub mod prelude {
	//! A prelude for commonly used items in the library.
	//!
	//! This module is intended to be glob imported.
	//!
	//! ```rust
	//! use tagframe::prelude::*;
	//! ```

	pub use crate::ape::{ApeTag, SearchDirection};
	pub use crate::config::{ParseOptions, ParsingMode};
	pub use crate::error::{Result, TagError};
	pub use crate::id3::v1::Id3v1Tag;
	pub use crate::id3::v2::Id3v2Tag;
	pub use crate::probe::{TagType, TaggedBuffer, read_from_bytes};
}
