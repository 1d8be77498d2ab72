/// The type of an [`ApeItem`]'s value, stored in bits 1 and 2 of the item flags
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApeItemType {
	/// UTF-8 text
	Text,
	/// Binary data
	Binary,
	/// A UTF-8 locator of external information, such as a URL
	Locator,
	/// Reserved, stored as binary
	Reserved,
}

impl ApeItemType {
	/// Get the item type from the item flags
	///
	/// # Examples
	///
	/// ```rust
	/// use tagframe::ape::ApeItemType;
	///
	/// // Read only (bit 0) binary (bits 1..2 = 1) item
	/// assert_eq!(ApeItemType::from_flags(0b011), ApeItemType::Binary);
	/// assert_eq!(ApeItemType::from_flags(0b100), ApeItemType::Locator);
	/// ```
	pub fn from_flags(flags: u32) -> Self {
		match (flags >> 1) & 3 {
			0 => Self::Text,
			1 => Self::Binary,
			2 => Self::Locator,
			_ => Self::Reserved,
		}
	}
}

/// The value of an [`ApeItem`]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApeItemValue {
	/// A [`ApeItemType::Text`] value
	Text(String),
	/// A [`ApeItemType::Locator`] value
	Locator(String),
	/// A [`ApeItemType::Binary`] or [`ApeItemType::Reserved`] value
	Binary(Vec<u8>),
}

/// Represents an `APE` tag item
///
/// Keys are compared case-insensitively by [`ApeTag::get`](crate::ape::ApeTag::get), but are
/// stored as found.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApeItem {
	/// The size of the value, in bytes
	pub size: u32,
	/// Whether or not to mark the item as read only
	pub read_only: bool,
	/// The type of the value
	pub item_type: ApeItemType,
	/// The item key
	pub key: String,
	/// The item value
	pub value: ApeItemValue,
}

impl ApeItem {
	/// Get the item's text, if it is a text item
	pub fn text(&self) -> Option<&str> {
		match &self.value {
			ApeItemValue::Text(text) => Some(text),
			_ => None,
		}
	}
}
