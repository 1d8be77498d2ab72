use super::frame::Frame;
use super::frame::read::ParsedFrame;
use super::header::{ID3V2_HEADER_SIZE, Id3v2Header};
use super::tag::Id3v2Tag;
use crate::config::ParseOptions;
use crate::error::Result;

/// The signature at the start of every ID3v2 tag
pub(crate) const ID3V2_SIGNATURE: &[u8; 3] = b"ID3";

pub(crate) fn parse_id3v2(bytes: &[u8], parse_options: ParseOptions) -> Result<Option<Id3v2Tag>> {
	if !bytes.starts_with(ID3V2_SIGNATURE) {
		return Ok(None);
	}

	let header = Id3v2Header::parse(bytes)?;
	log::debug!(
		"Parsing ID3v2 tag, size: {}, version: {}",
		header.size,
		header.version
	);

	// The extended header was already bounds checked, and is counted in the tag size
	let frames_start = header.frames_start();
	let frames_size = header
		.size
		.saturating_sub((frames_start - ID3V2_HEADER_SIZE) as u32);

	let frames = read_all_frames(&bytes[frames_start..], frames_size, parse_options)?;
	Ok(Some(Id3v2Tag { header, frames }))
}

fn read_all_frames(bytes: &[u8], size: u32, parse_options: ParseOptions) -> Result<Vec<Frame>> {
	let size = size as usize;
	// Some encoders include the 10 byte header in the tag size
	let end_including_header = size.checked_sub(10);

	let mut frames = Vec::new();
	let mut pos = 0;
	while pos < size {
		match ParsedFrame::read(&bytes[pos..], parse_options)? {
			ParsedFrame::Next(frame, len) => {
				frames.push(frame);
				pos += len;
			},
			ParsedFrame::Skip(len) => pos += len,
			ParsedFrame::Eof => break,
		}

		if end_including_header == Some(pos) {
			break;
		}

		pos = skip_padding(bytes, pos);
	}

	log::debug!("Read {} ID3v2 frames", frames.len());
	Ok(frames)
}

fn skip_padding(bytes: &[u8], pos: usize) -> usize {
	let padding = bytes
		.get(pos..)
		.map_or(0, |rest| rest.iter().take_while(|b| **b == 0).count());
	pos + padding
}
