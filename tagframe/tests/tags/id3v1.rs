use crate::util::id3v1_tag;

use tagframe::error::ErrorKind;
use tagframe::id3::v1::{
	GENRES, GenreValue, Id3v1Fields, Id3v1Tag, detect, genre_code, genre_name, write_album,
	write_artist, write_comment, write_genre, write_title, write_track, write_whole, write_year,
};

// A tag as it would sit at the end of an MP3 file
fn tagged_buffer() -> Vec<u8> {
	let mut buffer = vec![0xFF; 512];
	buffer.extend(id3v1_tag("Original", "Original comment", 4, 17));
	buffer
}

fn original_tag() -> Id3v1Tag {
	Id3v1Tag::parse(&tagged_buffer()).unwrap().unwrap()
}

#[test_log::test]
fn test_genres() {
	assert_eq!("Darkwave", GENRES[50]);
	assert_eq!(
		100,
		GENRES.iter().position(|genre| *genre == "Humour").unwrap()
	);
	assert_eq!(Some(79), genre_code("Hard Rock"));
	assert_eq!("unknown", genre_name(200));
	assert_eq!(None, genre_code("Hard rock"));
}

#[test_log::test]
fn parse() {
	let tag = original_tag();
	assert_eq!(tag.title, "Original");
	assert_eq!(tag.artist, "");
	assert_eq!(tag.comment, "Original comment");
	assert_eq!(tag.track, 4);
	assert_eq!(tag.genre, "Rock");
}

#[test_log::test]
fn no_tag() {
	assert!(Id3v1Tag::parse(&[0; 200]).unwrap().is_none());
	assert!(Id3v1Tag::parse(&[]).unwrap().is_none());
	assert!(Id3v1Tag::parse(b"TAG").unwrap().is_none());
}

#[test_log::test]
fn empty_tag() {
	let mut buffer = vec![0; 128];
	buffer[..3].copy_from_slice(b"TAG");

	assert!(!detect(&buffer));
	assert!(Id3v1Tag::parse(&buffer).unwrap().is_none());
}

#[test_log::test]
fn invalid_text() {
	let mut buffer = id3v1_tag("Foo", "", 0, 0);
	buffer[3] = 0xFF;

	let err = Id3v1Tag::parse(&buffer).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::TextDecode(_)));
}

#[test_log::test]
fn write_into_untagged_buffer() {
	let buffer = write_title(vec![0; 200], "testTitle");
	assert_eq!(buffer.len(), 200 + 128);

	let tag = Id3v1Tag::parse(&buffer).unwrap().unwrap();
	assert_eq!(
		tag,
		Id3v1Tag {
			title: String::from("testTitle"),
			artist: String::new(),
			album: String::new(),
			year: String::new(),
			comment: String::new(),
			track: 0,
			genre: "unknown",
		}
	);
}

#[test_log::test]
fn write_text_fields() {
	let original = original_tag();

	let tag = Id3v1Tag::parse(&write_title(tagged_buffer(), "testTitle"))
		.unwrap()
		.unwrap();
	assert_eq!(
		tag,
		Id3v1Tag {
			title: String::from("testTitle"),
			..original.clone()
		}
	);

	let tag = Id3v1Tag::parse(&write_artist(tagged_buffer(), "testArtist"))
		.unwrap()
		.unwrap();
	assert_eq!(
		tag,
		Id3v1Tag {
			artist: String::from("testArtist"),
			..original.clone()
		}
	);

	let tag = Id3v1Tag::parse(&write_album(tagged_buffer(), "testAlbum"))
		.unwrap()
		.unwrap();
	assert_eq!(
		tag,
		Id3v1Tag {
			album: String::from("testAlbum"),
			..original.clone()
		}
	);

	let tag = Id3v1Tag::parse(&write_year(tagged_buffer(), "2019"))
		.unwrap()
		.unwrap();
	assert_eq!(
		tag,
		Id3v1Tag {
			year: String::from("2019"),
			..original
		}
	);
}

#[test_log::test]
fn long_values_are_truncated() {
	let buffer = write_artist(tagged_buffer(), &"a".repeat(40));
	assert_eq!(buffer.len(), 512 + 128);

	let tag = Id3v1Tag::parse(&buffer).unwrap().unwrap();
	assert_eq!(tag.artist, "a".repeat(30));
	// The neighbouring field is untouched
	assert_eq!(tag.album, "");
}

#[test_log::test]
fn short_comment_keeps_track() {
	let buffer = write_comment(tagged_buffer(), "testComment30");

	let tag = Id3v1Tag::parse(&buffer).unwrap().unwrap();
	assert_eq!(
		tag,
		Id3v1Tag {
			comment: String::from("testComment30"),
			..original_tag()
		}
	);
}

#[test_log::test]
fn long_comment_replaces_track() {
	let comment = "ALBUM1234567890123456789012345";
	assert_eq!(comment.len(), 30);

	let buffer = write_comment(tagged_buffer(), comment);
	assert_ne!(buffer[buffer.len() - 3], 0);

	let tag = Id3v1Tag::parse(&buffer).unwrap().unwrap();
	assert_eq!(
		tag,
		Id3v1Tag {
			comment: String::from(comment),
			track: 0,
			..original_tag()
		}
	);

	// Same thing without an existing tag
	let buffer = write_comment(vec![0; 200], comment);
	assert_eq!(buffer.len(), 200 + 128);
	assert_ne!(buffer[buffer.len() - 3], 0);

	let tag = Id3v1Tag::parse(&buffer).unwrap().unwrap();
	assert_eq!(tag.comment, comment);
	assert_eq!(tag.track, 0);
	assert_eq!(tag.title, "");
}

#[test_log::test]
fn track() {
	let buffer = write_track(tagged_buffer(), 3).unwrap();
	assert_eq!(buffer[buffer.len() - 3], 0);

	let tag = Id3v1Tag::parse(&buffer).unwrap().unwrap();
	assert_eq!(
		tag,
		Id3v1Tag {
			track: 3,
			..original_tag()
		}
	);
}

#[test_log::test]
fn genre() {
	let tag = Id3v1Tag::parse(&write_genre(tagged_buffer(), 3).unwrap())
		.unwrap()
		.unwrap();
	assert_eq!(
		tag,
		Id3v1Tag {
			genre: "Dance",
			..original_tag()
		}
	);

	let tag = Id3v1Tag::parse(&write_genre(tagged_buffer(), 254).unwrap())
		.unwrap()
		.unwrap();
	assert_eq!(tag.genre, "unknown");
}

#[test_log::test]
fn byte_writers_reject_small_buffers() {
	let err = write_track(vec![0; 100], 3).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::InvalidInput(_)));

	let err = write_genre(vec![0; 127], 3).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::InvalidInput(_)));
}

fn whole_template() -> Id3v1Fields {
	Id3v1Fields {
		title: Some(String::from("Title")),
		artist: Some(String::from("Artist")),
		album: Some(String::from("Album")),
		year: Some(String::from("2020")),
		comment: Some(String::from("Comment")),
		track: Some(12),
		genre: Some(GenreValue::Name(String::from("Pop"))),
	}
}

fn whole_template_tag() -> Id3v1Tag {
	Id3v1Tag {
		title: String::from("Title"),
		artist: String::from("Artist"),
		album: String::from("Album"),
		year: String::from("2020"),
		comment: String::from("Comment"),
		track: 12,
		genre: "Pop",
	}
}

#[test_log::test]
fn whole() {
	let buffer = write_whole(tagged_buffer(), whole_template());
	assert_eq!(buffer.len(), 512 + 128);
	assert_eq!(Id3v1Tag::parse(&buffer).unwrap().unwrap(), whole_template_tag());
}

#[test_log::test]
fn whole_into_untagged_buffer() {
	let buffer = write_whole(vec![0; 200], whole_template());
	assert_eq!(buffer.len(), 200 + 128);
	assert_eq!(Id3v1Tag::parse(&buffer).unwrap().unwrap(), whole_template_tag());

	// "Pop" is genre 13
	let fields = Id3v1Fields {
		genre: Some(GenreValue::Code(13)),
		..whole_template()
	};
	let buffer = write_whole(vec![0; 200], fields);
	assert_eq!(Id3v1Tag::parse(&buffer).unwrap().unwrap(), whole_template_tag());
}

#[test_log::test]
fn whole_leaves_unset_fields() {
	let fields = Id3v1Fields {
		artist: Some(String::from("Someone")),
		..Id3v1Fields::default()
	};

	let tag = Id3v1Tag::parse(&write_whole(tagged_buffer(), fields))
		.unwrap()
		.unwrap();
	assert_eq!(
		tag,
		Id3v1Tag {
			artist: String::from("Someone"),
			..original_tag()
		}
	);
}

#[test_log::test]
fn multibyte_text() {
	// 15 two byte characters fill the field exactly, the 16th can't fit
	let buffer = write_title(Vec::new(), &"é".repeat(16));
	let tag = Id3v1Tag::parse(&buffer).unwrap().unwrap();
	assert_eq!(tag.title, "é".repeat(15));

	// Cutting at 30 bytes would split the last "€", the final 2 bytes are left as zeros
	let title = format!("a{}", "€".repeat(10));
	let buffer = write_title(Vec::new(), &title);
	assert_eq!(&buffer[3 + 28..3 + 30], &[0, 0]);
	let tag = Id3v1Tag::parse(&buffer).unwrap().unwrap();
	assert_eq!(tag.title, format!("a{}", "€".repeat(9)));
}
