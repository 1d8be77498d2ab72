use crate::util::{ape_item, ape_tag, id3v1_tag, id3v2_frame, id3v2_tag};

use tagframe::config::{ParseOptions, ParsingMode};
use tagframe::error::ErrorKind;
use tagframe::probe::{TagType, read_from_bytes};

// ID3v2, audio, APEv2, ID3v1, the order an MP3 file would hold them in
fn all_tags() -> Vec<u8> {
	let mut buffer = id3v2_tag(&id3v2_frame(b"TIT2", b"\x00Id3v2 title"), 16);
	buffer.extend_from_slice(&[0xFF; 256]);
	buffer.extend(ape_tag(&[ape_item("Title", 0, b"Ape title")]));
	buffer.extend(id3v1_tag("Id3v1 title", "", 1, 0));
	buffer
}

#[test_log::test]
fn all_tag_types() {
	let tagged_buffer = read_from_bytes(&all_tags(), ParseOptions::new()).unwrap();

	assert_eq!(
		tagged_buffer.tag_types(),
		[TagType::Id3v2, TagType::Ape, TagType::Id3v1]
	);
	assert!(!tagged_buffer.is_empty());

	assert_eq!(
		tagged_buffer.id3v2.unwrap().title(),
		Some("Id3v2 title")
	);
	assert_eq!(tagged_buffer.ape.unwrap().title(), Some("Ape title"));

	let id3v1 = tagged_buffer.id3v1.unwrap();
	assert_eq!(id3v1.title, "Id3v1 title");
	assert_eq!(id3v1.track, 1);
	assert_eq!(id3v1.genre, "Blues");
}

#[test_log::test]
fn untagged() {
	let tagged_buffer = read_from_bytes(&[0xFF; 1024], ParseOptions::new()).unwrap();

	assert!(tagged_buffer.is_empty());
	for tag_type in [TagType::Ape, TagType::Id3v1, TagType::Id3v2] {
		assert!(!tagged_buffer.contains_tag_type(tag_type));
	}
}

#[test_log::test]
fn ape_only() {
	let mut buffer = vec![0xFF; 64];
	buffer.extend(ape_tag(&[ape_item("Artist", 0, b"Foo")]));

	let tagged_buffer = read_from_bytes(&buffer, ParseOptions::new()).unwrap();
	assert_eq!(tagged_buffer.tag_types(), [TagType::Ape]);
	assert_eq!(tagged_buffer.ape.unwrap().artist(), Some("Foo"));
}

#[test_log::test]
fn errors_are_propagated() {
	let mut buffer = all_tags();
	// ID3v2.4
	buffer[3] = 4;

	let err = read_from_bytes(&buffer, ParseOptions::new()).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::Id3v2(_)));

	let strict = ParseOptions::new().parsing_mode(ParsingMode::Strict);
	assert!(read_from_bytes(&all_tags(), strict).is_ok());
}
