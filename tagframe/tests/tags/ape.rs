use crate::util::{
	APE_FLAG_HAS_HEADER, APE_FLAG_IS_HEADER, APE_FLAG_NO_FOOTER, ape_item, ape_record, ape_tag,
	ape_tag_footer_only, id3v1_tag,
};

use tagframe::ape::{
	ApeItem, ApeItemType, ApeItemValue, ApeTag, ApeVersion, SearchDirection,
	find_boundary_backward, find_boundary_forward,
};
use tagframe::config::{ParseOptions, ParsingMode};
use tagframe::error::ErrorKind;

fn items() -> Vec<Vec<u8>> {
	vec![
		ape_item("Title", 0, b"Foo title"),
		ape_item("ARTIST", 0, b"Bar artist"),
		ape_item("Cover Art (Front)", 1 << 1, b"front.png\0\x89PNG"),
		ape_item("Homepage", (2 << 1) | 1, b"https://example.com"),
	]
}

fn assert_items(tag: &ApeTag) {
	assert_eq!(tag.len(), 4);
	assert_eq!(tag.title(), Some("Foo title"));
	assert_eq!(tag.artist(), Some("Bar artist"));
	assert!(tag.album().is_none());

	let cover = tag.get("cover art (front)").unwrap();
	assert_eq!(cover.item_type, ApeItemType::Binary);
	assert_eq!(
		cover.value,
		ApeItemValue::Binary(b"front.png\0\x89PNG".to_vec())
	);
	assert_eq!(cover.size, 14);
	assert!(cover.text().is_none());

	let homepage = tag.get("Homepage").unwrap();
	assert_eq!(
		homepage,
		&ApeItem {
			size: 19,
			read_only: true,
			item_type: ApeItemType::Locator,
			key: String::from("Homepage"),
			value: ApeItemValue::Locator(String::from("https://example.com")),
		}
	);
}

#[test_log::test]
fn header_and_footer() {
	let mut buffer = vec![0; 64];
	buffer.extend(ape_tag(&items()));
	buffer.extend(vec![0xAA; 16]);

	let backward = ApeTag::parse(&buffer, SearchDirection::Backward, ParseOptions::new())
		.unwrap()
		.unwrap();
	let forward = ApeTag::parse(&buffer, SearchDirection::Forward, ParseOptions::new())
		.unwrap()
		.unwrap();

	assert_items(&backward);
	assert_eq!(backward, forward);

	let header = backward.header.unwrap();
	let footer = backward.footer.unwrap();
	assert_eq!(header.version, ApeVersion::V2);
	assert!(header.flags.is_header);
	assert!(!footer.flags.is_header);
	assert!(header.flags.has_header && header.flags.has_footer);
	assert_eq!(header.size, footer.size);
	assert_eq!(header.item_count, 4);
	assert_eq!(footer.content_size() + 32, footer.size);
}

#[test_log::test]
fn skips_id3v1() {
	let mut buffer = vec![0; 64];
	let ape_start = buffer.len();
	buffer.extend(ape_tag(&items()));
	let footer_start = buffer.len() - 32;
	buffer.extend(id3v1_tag("Title", "", 0, 0));

	assert_eq!(find_boundary_backward(&buffer), Some(footer_start));
	assert_eq!(find_boundary_forward(&buffer), Some(ape_start));

	let tag = ApeTag::parse(&buffer, SearchDirection::default(), ParseOptions::new())
		.unwrap()
		.unwrap();
	assert_items(&tag);
}

#[test_log::test]
fn footer_only() {
	let mut buffer = vec![0; 40];
	buffer.extend(ape_tag_footer_only(&items()));

	let tag = ApeTag::parse(&buffer, SearchDirection::Backward, ParseOptions::new())
		.unwrap()
		.unwrap();

	assert_items(&tag);
	assert!(tag.header.is_none());

	let footer = tag.footer.unwrap();
	assert_eq!(footer.version, ApeVersion::V1);
	assert!(!footer.flags.has_header);
}

#[test_log::test]
fn header_only() {
	let body = items().concat();

	let mut buffer = vec![0; 40];
	buffer.extend(ape_record(
		2000,
		body.len() as u32,
		4,
		APE_FLAG_HAS_HEADER | APE_FLAG_IS_HEADER | APE_FLAG_NO_FOOTER,
	));
	buffer.extend(body);

	let tag = ApeTag::parse(&buffer, SearchDirection::Forward, ParseOptions::new())
		.unwrap()
		.unwrap();

	assert_items(&tag);
	assert!(tag.footer.is_none());
	assert_eq!(tag.header.unwrap().content_size(), tag.header.unwrap().size);
}

#[test_log::test]
fn item_count_limits_items() {
	let items = items();
	let mut tag = ape_tag_footer_only(&items);
	// Claim only 2 of the 4 items
	let count_offset = tag.len() - 16;
	tag[count_offset..count_offset + 4].copy_from_slice(&2_u32.to_le_bytes());

	let mut buffer = vec![0; 40];
	buffer.extend(tag);

	let tag = ApeTag::parse(&buffer, SearchDirection::Backward, ParseOptions::new())
		.unwrap()
		.unwrap();
	assert_eq!(tag.len(), 2);
	assert_eq!(
		tag.items().map(|item| item.key.as_str()).collect::<Vec<_>>(),
		["Title", "ARTIST"]
	);
}

#[test_log::test]
fn no_tag() {
	let buffer = vec![0; 256];
	assert!(
		ApeTag::parse(&buffer, SearchDirection::Backward, ParseOptions::new())
			.unwrap()
			.is_none()
	);
	assert!(
		ApeTag::parse(&buffer, SearchDirection::Forward, ParseOptions::new())
			.unwrap()
			.is_none()
	);
	assert!(
		ApeTag::parse(&[], SearchDirection::Backward, ParseOptions::new())
			.unwrap()
			.is_none()
	);
}

#[test_log::test]
fn truncated_item() {
	let mut bad_item = Vec::new();
	bad_item.extend_from_slice(&100_u32.to_le_bytes());
	bad_item.extend_from_slice(&0_u32.to_le_bytes());
	bad_item.extend_from_slice(b"Artist\0Bar");

	let mut buffer = vec![0; 40];
	buffer.extend(ape_tag_footer_only(&[
		ape_item("Title", 0, b"Foo"),
		bad_item,
	]));

	let tag = ApeTag::parse(&buffer, SearchDirection::Backward, ParseOptions::new())
		.unwrap()
		.unwrap();
	assert_eq!(tag.len(), 1);
	assert_eq!(tag.title(), Some("Foo"));

	let strict = ParseOptions::new().parsing_mode(ParsingMode::Strict);
	let err = ApeTag::parse(&buffer, SearchDirection::Backward, strict).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::SizeMismatch));
}

#[test_log::test]
fn size_past_start_of_buffer() {
	let mut buffer = vec![0; 40];
	buffer.extend(ape_record(2000, 1000, 0, 0));

	let tag = ApeTag::parse(&buffer, SearchDirection::Backward, ParseOptions::new())
		.unwrap()
		.unwrap();
	assert!(tag.footer.is_some());
	assert!(tag.is_empty());

	let strict = ParseOptions::new().parsing_mode(ParsingMode::Strict);
	let err = ApeTag::parse(&buffer, SearchDirection::Backward, strict).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::SizeMismatch));
}

#[test_log::test]
fn missing_footer() {
	// The header promises a footer that was cut off
	let body = ape_item("Title", 0, b"Foo");

	let mut buffer = vec![0; 40];
	buffer.extend(ape_record(
		2000,
		body.len() as u32 + 32,
		1,
		APE_FLAG_HAS_HEADER | APE_FLAG_IS_HEADER,
	));
	buffer.extend(body);
	buffer.extend(vec![0; 8]);

	let tag = ApeTag::parse(&buffer, SearchDirection::Forward, ParseOptions::new())
		.unwrap()
		.unwrap();
	assert!(tag.header.is_some());
	assert!(tag.footer.is_none());
	assert_eq!(tag.title(), Some("Foo"));

	let strict = ParseOptions::new().parsing_mode(ParsingMode::Strict);
	let err = ApeTag::parse(&buffer, SearchDirection::Forward, strict).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::SizeMismatch));
}

#[test_log::test]
fn invalid_text() {
	let mut buffer = vec![0; 40];
	buffer.extend(ape_tag_footer_only(&[ape_item("Title", 0, b"\xFF\xFE")]));

	let err = ApeTag::parse(&buffer, SearchDirection::Backward, ParseOptions::new()).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::TextDecode(_)));
}
