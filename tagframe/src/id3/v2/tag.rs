use super::frame::Frame;
use super::header::Id3v2Header;
use super::read::parse_id3v2;
use crate::config::ParseOptions;
use crate::error::Result;

const ARTIST_ID: &str = "TPE1";
const ALBUM_ID: &str = "TALB";
const TITLE_ID: &str = "TIT2";
const YEAR_ID: &str = "TYER";
const TRACK_ID: &str = "TRCK";
const GENRE_ID: &str = "TCON";

const LYRICS_IDS: [&str; 2] = ["USLT", "SYLT"];
const COMMENT_ID: &str = "COMM";
const ATTACHED_PICTURE_ID: &str = "APIC";

macro_rules! impl_accessor {
	($($name:ident),+ $(,)?) => {
		paste::paste! {
			$(
				#[doc = "Get the text of the first " $name " frame"]
				pub fn $name(&self) -> Option<&str> {
					self.get([<$name:upper _ID>]).and_then(Frame::text)
				}
			)+
		}
	}
}

/// An `ID3v2.3` tag
///
/// ## Supported frames
///
/// * "T..." text frames, excluding "TXXX" which is only reported as `"TXXX"`
/// * "APIC" attached pictures
/// * "COMM" comments
/// * "USLT" unsynchronized lyrics
/// * "SYLT" synchronized lyrics, *metadata only*
///
/// Any other frame is stored as [`FrameValue::Binary`]. Compressed and encrypted frames are
/// skipped entirely.
///
/// ## Duplicate frames
///
/// Frames are kept in the order they appear, duplicates included. Lookups such as
/// [`Id3v2Tag::get`] return the first match.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Id3v2Tag {
	/// The tag header
	pub header: Id3v2Header,
	/// The frames, in the order they were read
	pub frames: Vec<Frame>,
}

impl Id3v2Tag {
	/// Parse the ID3v2 tag at the start of a buffer
	///
	/// Returns `Ok(None)` if the buffer doesn't start with `ID3`.
	///
	/// # Errors
	///
	/// * The tag has the unsynchronisation flag set
	/// * The tag's major version is not 3
	/// * The extended header doesn't fit in the buffer
	/// * A frame's text can't be decoded
	/// * [`ParsingMode::Strict`](crate::config::ParsingMode::Strict): a frame is truncated or too
	///   short to decode
	///
	/// # Examples
	///
	/// ```rust
	/// use tagframe::config::ParseOptions;
	/// use tagframe::id3::v2::Id3v2Tag;
	///
	/// # fn main() -> tagframe::error::Result<()> {
	/// let mut buffer = vec![b'I', b'D', b'3', 3, 0, 0, 0, 0, 0, 14];
	/// buffer.extend_from_slice(b"TPE1\0\0\0\x04\0\0\0Foo");
	///
	/// let tag = Id3v2Tag::parse(&buffer, ParseOptions::new())?.expect("should have a tag");
	/// assert_eq!(tag.header.version.to_string(), "2.3.0");
	/// assert_eq!(tag.artist(), Some("Foo"));
	/// # Ok(()) }
	/// ```
	pub fn parse(buffer: &[u8], parse_options: ParseOptions) -> Result<Option<Self>> {
		parse_id3v2(buffer, parse_options)
	}

	/// Get the first frame with the given ID
	pub fn get(&self, id: &str) -> Option<&Frame> {
		self.frames.iter().find(|frame| frame.id() == id)
	}

	/// Get all frames with the given ID
	pub fn get_all<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Frame> + 'a {
		self.frames.iter().filter(move |frame| frame.id() == id)
	}

	impl_accessor!(artist, album, title, year, track, genre);

	/// Get a summary of the well known frames, see [`to_summary`]
	pub fn summary(&self) -> Id3v2Summary<'_> {
		to_summary(&self.frames)
	}
}

/// A summary of the well known frames in a tag
///
/// Created with [`to_summary`] or [`Id3v2Tag::summary`].
#[derive(Default, PartialEq, Eq, Debug, Clone)]
pub struct Id3v2Summary<'a> {
	/// The first "TPE1" frame
	pub artist: Option<&'a Frame>,
	/// The first "TALB" frame
	pub album: Option<&'a Frame>,
	/// The first "TIT2" frame
	pub title: Option<&'a Frame>,
	/// The first "TYER" frame
	pub year: Option<&'a Frame>,
	/// The first "TRCK" frame
	pub track: Option<&'a Frame>,
	/// The first "TCON" frame
	pub genre: Option<&'a Frame>,
	/// All "USLT" and "SYLT" frames
	pub lyrics: Vec<&'a Frame>,
	/// All "COMM" frames
	pub comments: Vec<&'a Frame>,
	/// All "APIC" frames
	pub images: Vec<&'a Frame>,
}

/// Summarize a list of frames
///
/// The singular fields hold the first frame with a matching ID, while lyrics, comments, and
/// images collect every matching frame in order.
pub fn to_summary(frames: &[Frame]) -> Id3v2Summary<'_> {
	let first = |id: &str| frames.iter().find(|frame| frame.id() == id);
	let all = |ids: &[&str]| {
		frames
			.iter()
			.filter(|frame| ids.contains(&frame.id()))
			.collect::<Vec<_>>()
	};

	Id3v2Summary {
		artist: first(ARTIST_ID),
		album: first(ALBUM_ID),
		title: first(TITLE_ID),
		year: first(YEAR_ID),
		track: first(TRACK_ID),
		genre: first(GENRE_ID),
		lyrics: all(&LYRICS_IDS),
		comments: all(&[COMMENT_ID]),
		images: all(&[ATTACHED_PICTURE_ID]),
	}
}
