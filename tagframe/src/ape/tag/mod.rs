pub(crate) mod item;
pub(crate) mod read;

use crate::ape::header::ApeHeader;
use crate::config::ParseOptions;
use crate::error::Result;
use item::ApeItem;
use read::{SearchDirection, read_ape_tag};

macro_rules! impl_accessor {
	($($name:ident => $($key:literal)|+;)+) => {
		paste::paste! {
			$(
				#[doc = "Get the text of the " $name " item"]
				pub fn $name(&self) -> Option<&str> {
					$(
						if let Some(text) = self.get($key).and_then(ApeItem::text) {
							return Some(text);
						}
					)+

					None
				}
			)+
		}
	}
}

/// An `APE` tag
///
/// ## Item storage
///
/// `APE` isn't a very strict format. An [`ApeItem`] is only restricted by its key, and its value
/// can be text, binary, or a locator. Items are kept in the order they appear.
///
/// ## Keys
///
/// Keys are case-insensitive, see [`ApeTag::get`].
#[derive(Default, Debug, PartialEq, Eq, Clone)]
pub struct ApeTag {
	/// The tag header, if there is one
	pub header: Option<ApeHeader>,
	/// The tag footer, if there is one
	pub footer: Option<ApeHeader>,
	/// The items, in the order they were read
	pub items: Vec<ApeItem>,
}

impl ApeTag {
	/// Parse an APE tag from a buffer
	///
	/// The boundary (the first `APETAGEX` found in `direction`) can be either the header or the
	/// footer. The other record is read if the flags say it exists.
	///
	/// Returns `Ok(None)` if no boundary is found.
	///
	/// # Errors
	///
	/// * An item key, or the value of a text/locator item, is not valid UTF-8
	/// * [`ParsingMode::Strict`](crate::config::ParsingMode::Strict): the header, footer, or an
	///   item runs past the end of the buffer
	///
	/// # Examples
	///
	/// ```rust
	/// use tagframe::ape::{ApeTag, SearchDirection};
	/// use tagframe::config::ParseOptions;
	///
	/// # fn main() -> tagframe::error::Result<()> {
	/// let mut item = Vec::new();
	/// item.extend_from_slice(&3_u32.to_le_bytes()); // Value size
	/// item.extend_from_slice(&0_u32.to_le_bytes()); // Flags, a text item
	/// item.extend_from_slice(b"Title\0Foo");
	///
	/// let mut footer = Vec::new();
	/// footer.extend_from_slice(b"APETAGEX");
	/// footer.extend_from_slice(&2000_u32.to_le_bytes());
	/// footer.extend_from_slice(&(item.len() as u32 + 32).to_le_bytes());
	/// footer.extend_from_slice(&1_u32.to_le_bytes()); // Item count
	/// footer.extend_from_slice(&[0; 12]); // Flags and reserved
	///
	/// let mut buffer = vec![0; 64];
	/// buffer.extend(item);
	/// buffer.extend(footer);
	///
	/// let tag = ApeTag::parse(&buffer, SearchDirection::Backward, ParseOptions::new())?
	/// 	.expect("should have a tag");
	/// assert!(tag.header.is_none());
	/// assert_eq!(tag.title(), Some("Foo"));
	/// # Ok(()) }
	/// ```
	pub fn parse(
		buffer: &[u8],
		direction: SearchDirection,
		parse_options: ParseOptions,
	) -> Result<Option<Self>> {
		read_ape_tag(buffer, direction, parse_options)
	}

	/// Get an [`ApeItem`] by key
	///
	/// NOTE: While `APE` items are supposed to have case-insensitive keys,
	/// this is not always the case.
	/// This comparison is case-insensitive, so the first item with a matching key is returned.
	pub fn get(&self, key: &str) -> Option<&ApeItem> {
		self.items
			.iter()
			.find(|i| i.key.eq_ignore_ascii_case(key))
	}

	/// Returns all of the tag's items
	pub fn items(&self) -> impl ExactSizeIterator<Item = &ApeItem> + Clone {
		self.items.iter()
	}

	/// Returns the number of items in the tag
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Whether the tag has no items
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	impl_accessor!(
		artist  => "Artist";
		title   => "Title";
		album   => "Album";
		genre   => "GENRE";
		comment => "Comment";
		year    => "Year" | "Date";
		track   => "Track";
	);
}
