use tagframe::id3::v2::util::synchsafe::SynchsafeInteger;

pub const APE_FLAG_HAS_HEADER: u32 = 1 << 31;
pub const APE_FLAG_NO_FOOTER: u32 = 1 << 30;
pub const APE_FLAG_IS_HEADER: u32 = 1 << 29;

/// An ID3v2.3 frame with the given flags
pub fn id3v2_frame_with_flags(id: &[u8; 4], flags: u16, content: &[u8]) -> Vec<u8> {
	let mut frame = id.to_vec();
	frame.extend_from_slice(&(content.len() as u32).to_be_bytes());
	frame.extend_from_slice(&flags.to_be_bytes());
	frame.extend_from_slice(content);
	frame
}

pub fn id3v2_frame(id: &[u8; 4], content: &[u8]) -> Vec<u8> {
	id3v2_frame_with_flags(id, 0, content)
}

/// An ID3v2 header, the size is written as given
pub fn id3v2_header(major: u8, flags: u8, size: u32) -> Vec<u8> {
	let mut header = vec![b'I', b'D', b'3', major, 0, flags];
	header.extend_from_slice(&size.synch().unwrap().to_be_bytes());
	header
}

/// An ID3v2.3 tag holding `body`, followed by `padding` zeros
pub fn id3v2_tag(body: &[u8], padding: usize) -> Vec<u8> {
	let mut tag = id3v2_header(3, 0, (body.len() + padding) as u32);
	tag.extend_from_slice(body);
	tag.resize(tag.len() + padding, 0);
	tag
}

pub fn ape_item(key: &str, flags: u32, value: &[u8]) -> Vec<u8> {
	let mut item = Vec::new();
	item.extend_from_slice(&(value.len() as u32).to_le_bytes());
	item.extend_from_slice(&flags.to_le_bytes());
	item.extend_from_slice(key.as_bytes());
	item.push(0);
	item.extend_from_slice(value);
	item
}

pub fn ape_record(version: u32, size: u32, item_count: u32, flags: u32) -> Vec<u8> {
	let mut record = b"APETAGEX".to_vec();
	record.extend_from_slice(&version.to_le_bytes());
	record.extend_from_slice(&size.to_le_bytes());
	record.extend_from_slice(&item_count.to_le_bytes());
	record.extend_from_slice(&flags.to_le_bytes());
	record.extend_from_slice(&[0; 8]);
	record
}

/// An APEv2 tag with both a header and a footer
pub fn ape_tag(items: &[Vec<u8>]) -> Vec<u8> {
	let body = items.concat();
	let size = body.len() as u32 + 32;
	let count = items.len() as u32;

	let mut tag = ape_record(2000, size, count, APE_FLAG_HAS_HEADER | APE_FLAG_IS_HEADER);
	tag.extend_from_slice(&body);
	tag.extend(ape_record(2000, size, count, APE_FLAG_HAS_HEADER));
	tag
}

/// An APEv1 tag, which only has a footer
pub fn ape_tag_footer_only(items: &[Vec<u8>]) -> Vec<u8> {
	let mut tag = items.concat();
	let size = tag.len() as u32 + 32;
	tag.extend(ape_record(1000, size, items.len() as u32, 0));
	tag
}

/// A 128 byte ID3v1.1 tag
pub fn id3v1_tag(title: &str, comment: &str, track: u8, genre: u8) -> Vec<u8> {
	let mut tag = vec![0; 128];
	tag[..3].copy_from_slice(b"TAG");
	tag[3..3 + title.len()].copy_from_slice(title.as_bytes());
	tag[97..97 + comment.len()].copy_from_slice(comment.as_bytes());
	tag[126] = track;
	tag[127] = genre;
	tag
}
