use super::ApeTag;
use super::item::{ApeItem, ApeItemType, ApeItemValue};
use crate::ape::constants::{APE_HEADER_SIZE, APE_PREAMBLE, MAX_KEY_LEN};
use crate::ape::header::ApeHeader;
use crate::config::ParseOptions;
use crate::error::Result;
use crate::id3::v1::constants::{ID3V1_TAG_MARKER, ID3V1_TAG_SIZE};
use crate::macros::{err, parse_mode_choice};
use crate::util::text::{TextEncoding, read_to_terminator, utf8_decode};

use std::ops::Range;

use byteorder::{ByteOrder, LittleEndian};

/// Where to start looking for an APE tag
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SearchDirection {
	/// Search from the start of the buffer for the first `APETAGEX`
	///
	/// This will usually find a header.
	Forward,
	/// Search from the end of the buffer (skipping an ID3v1 tag) for the last `APETAGEX`
	///
	/// This will usually find a footer.
	#[default]
	Backward,
}

/// Find the first `APETAGEX`, searching forward
///
/// Only offsets that leave room for a full 32 byte record are considered.
///
/// # Examples
///
/// ```rust
/// use tagframe::ape::find_boundary_forward;
///
/// let mut buffer = vec![0; 64];
/// buffer[4..12].copy_from_slice(b"APETAGEX");
/// assert_eq!(find_boundary_forward(&buffer), Some(4));
///
/// assert_eq!(find_boundary_forward(b"APETAGEX"), None);
/// ```
pub fn find_boundary_forward(buffer: &[u8]) -> Option<usize> {
	let searchable = buffer.len().checked_sub(APE_HEADER_SIZE)?;

	buffer
		.windows(APE_PREAMBLE.len())
		.take(searchable)
		.position(|window| window == APE_PREAMBLE)
}

/// Find the last `APETAGEX`, searching backward
///
/// The search starts 8 bytes before the end of the buffer, or 8 bytes before an ID3v1 tag if
/// there is one. Offsets of 32 and below are never searched.
///
/// # Examples
///
/// ```rust
/// use tagframe::ape::find_boundary_backward;
///
/// let mut buffer = vec![0; 100];
/// buffer[60..68].copy_from_slice(b"APETAGEX");
/// assert_eq!(find_boundary_backward(&buffer), Some(60));
///
/// // Too close to the start
/// let mut buffer = vec![0; 100];
/// buffer[20..28].copy_from_slice(b"APETAGEX");
/// assert_eq!(find_boundary_backward(&buffer), None);
/// ```
pub fn find_boundary_backward(buffer: &[u8]) -> Option<usize> {
	let len = buffer.len();

	let has_id3v1 =
		len > ID3V1_TAG_SIZE && buffer[len - ID3V1_TAG_SIZE..].starts_with(&ID3V1_TAG_MARKER);
	let start = if has_id3v1 {
		log::debug!("APE: Skipping ID3v1 tag while searching backward");
		len.checked_sub(ID3V1_TAG_SIZE + APE_PREAMBLE.len())?
	} else {
		len.checked_sub(APE_PREAMBLE.len())?
	};

	(APE_HEADER_SIZE + 1..=start)
		.rev()
		.find(|offset| buffer[*offset..].starts_with(APE_PREAMBLE))
}

pub(crate) fn read_ape_tag(
	buffer: &[u8],
	direction: SearchDirection,
	parse_options: ParseOptions,
) -> Result<Option<ApeTag>> {
	let boundary = match direction {
		SearchDirection::Forward => find_boundary_forward(buffer),
		SearchDirection::Backward => find_boundary_backward(buffer),
	};

	let Some(boundary) = boundary else {
		return Ok(None);
	};

	log::debug!("Found an APE tag boundary at offset {}", boundary);

	let Some(record) = read_record(buffer, boundary, parse_options)? else {
		return Ok(None);
	};

	log::debug!(
		"APE: version: {}, size: {}, items: {}",
		record.version,
		record.size,
		record.item_count
	);

	let content_size = record.content_size() as usize;
	let mut tag = ApeTag::default();

	let item_region;
	if record.flags.is_header {
		let items_start = boundary + APE_HEADER_SIZE;
		let items_end = items_start + content_size;

		tag.header = Some(record);
		if record.flags.has_footer {
			tag.footer = read_record(buffer, items_end, parse_options)?;
		}

		item_region = items_start..items_end;
	} else {
		let items_start = match boundary.checked_sub(content_size) {
			Some(start) => start,
			None => parse_mode_choice!(
				parse_options.parsing_mode,
				STRICT: err!(SizeMismatch),
				DEFAULT: {
					log::warn!("APE: Tag size reaches past the start of the buffer");
					0
				}
			),
		};

		tag.footer = Some(record);
		if record.flags.has_header {
			tag.header = match items_start.checked_sub(APE_HEADER_SIZE) {
				Some(header_start) => read_record(buffer, header_start, parse_options)?,
				None => parse_mode_choice!(
					parse_options.parsing_mode,
					STRICT: err!(SizeMismatch),
					DEFAULT: {
						log::warn!("APE: Header reaches past the start of the buffer");
						None
					}
				),
			};
		}

		item_region = items_start..boundary;
	}

	let item_region = clamp_region(buffer, item_region, parse_options)?;
	tag.items = read_items(&buffer[item_region], record.item_count, parse_options)?;

	Ok(Some(tag))
}

fn read_record(
	buffer: &[u8],
	offset: usize,
	parse_options: ParseOptions,
) -> Result<Option<ApeHeader>> {
	match buffer
		.get(offset..)
		.and_then(|rest| rest.first_chunk::<APE_HEADER_SIZE>())
	{
		Some(record) => Ok(Some(ApeHeader::parse(record))),
		None => parse_mode_choice!(
			parse_options.parsing_mode,
			STRICT: err!(SizeMismatch),
			DEFAULT: {
				log::warn!("APE: Header/footer at offset {} runs past the end of the buffer", offset);
				Ok(None)
			}
		),
	}
}

fn clamp_region(
	buffer: &[u8],
	region: Range<usize>,
	parse_options: ParseOptions,
) -> Result<Range<usize>> {
	if region.end <= buffer.len() {
		return Ok(region);
	}

	parse_mode_choice!(
		parse_options.parsing_mode,
		STRICT: err!(SizeMismatch),
		DEFAULT: {
			log::warn!("APE: Items run past the end of the buffer");
			Ok(region.start.min(buffer.len())..buffer.len())
		}
	)
}

fn read_items(region: &[u8], item_count: u32, parse_options: ParseOptions) -> Result<Vec<ApeItem>> {
	let mut items = Vec::new();
	let mut pos = 0;

	while items.len() < item_count as usize && pos < region.len() {
		let Some(item_header) = region.get(pos..pos + 8) else {
			parse_mode_choice!(
				parse_options.parsing_mode,
				STRICT: err!(SizeMismatch),
				DEFAULT: {
					log::warn!("APE: Item header runs past the end of the tag, stopping");
					break;
				}
			)
		};

		let size = LittleEndian::read_u32(&item_header[..4]);
		let flags = LittleEndian::read_u32(&item_header[4..]);

		let (key, consumed) = read_to_terminator(&region[pos + 8..], TextEncoding::UTF8);
		if key.len() > MAX_KEY_LEN {
			log::warn!("APE: Encountered an item key longer than {} bytes", MAX_KEY_LEN);
		}
		let key = utf8_decode(key)?;

		let value_start = pos + 8 + consumed;
		let Some(value) = region.get(value_start..value_start + size as usize) else {
			parse_mode_choice!(
				parse_options.parsing_mode,
				STRICT: err!(SizeMismatch),
				DEFAULT: {
					log::warn!("APE: Item \"{}\" runs past the end of the tag, stopping", key);
					break;
				}
			)
		};

		log::trace!("APE: Found item \"{}\", size: {}", key, size);

		let item_type = ApeItemType::from_flags(flags);
		let value = match item_type {
			ApeItemType::Text => ApeItemValue::Text(utf8_decode(value)?),
			ApeItemType::Locator => ApeItemValue::Locator(utf8_decode(value)?),
			ApeItemType::Binary | ApeItemType::Reserved => ApeItemValue::Binary(value.to_vec()),
		};

		items.push(ApeItem {
			size,
			read_only: flags & 1 == 1,
			item_type,
			key,
			value,
		});

		pos = value_start + size as usize;
	}

	Ok(items)
}
