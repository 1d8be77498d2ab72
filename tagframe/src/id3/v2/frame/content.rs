use super::FrameValue;
use crate::config::ParseOptions;
use crate::error::Result;
use crate::id3::v2::items::text_information_frame::parse_text_information;
use crate::id3::v2::{
	AttachedPictureFrame, CommentFrame, SynchronizedTextFrame, UnsynchronizedTextFrame,
};
use crate::macros::{id3v2_err, parse_mode_choice};

#[rustfmt::skip]
pub(super) fn parse_content(
	content: &[u8],
	id: &str,
	parse_options: ParseOptions,
) -> Result<FrameValue> {
	log::trace!("Parsing frame content for ID: {}", id);

	let value = match id {
		"TXXX" => Some(FrameValue::UserText),
		i if i.starts_with('T') => Some(FrameValue::Text(parse_text_information(content)?)),
		"APIC" => AttachedPictureFrame::parse(content, parse_options)?.map(FrameValue::Picture),
		"COMM" => CommentFrame::parse(content)?.map(FrameValue::Comment),
		"USLT" => UnsynchronizedTextFrame::parse(content)?.map(FrameValue::UnsynchronizedText),
		"SYLT" => SynchronizedTextFrame::parse(content).map(FrameValue::SynchronizedText),
		_ => {
			log::debug!("Unsupported frame ID \"{}\", storing as binary", id);
			Some(FrameValue::Binary(content.to_vec()))
		},
	};

	match value {
		Some(value) => Ok(value),
		None => parse_mode_choice!(
			parse_options.parsing_mode,
			STRICT: id3v2_err!(@BAIL BadFrameLength),
			DEFAULT: {
				log::warn!("Frame \"{}\" is too short to decode, storing as binary", id);
				Ok(FrameValue::Binary(content.to_vec()))
			}
		),
	}
}
