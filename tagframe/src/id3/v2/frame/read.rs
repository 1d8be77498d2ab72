use super::content::parse_content;
use super::header::{FRAME_HEADER_SIZE, FrameHeader};
use super::{Frame, FrameValue};
use crate::config::ParseOptions;
use crate::error::Result;
use crate::macros::{err, parse_mode_choice};

pub(crate) enum ParsedFrame {
	/// A frame and the number of bytes it took up, header included
	Next(Frame, usize),
	/// A frame that couldn't be read, but can be stepped over
	Skip(usize),
	/// No more frames
	Eof,
}

impl ParsedFrame {
	pub(crate) fn read(bytes: &[u8], parse_options: ParseOptions) -> Result<Self> {
		// Assume we just started reading padding
		let Some(&first) = bytes.first() else {
			return Ok(Self::Eof);
		};
		if first == 0 {
			return Ok(Self::Eof);
		}

		let Some(header) = bytes.first_chunk::<FRAME_HEADER_SIZE>() else {
			parse_mode_choice!(
				parse_options.parsing_mode,
				STRICT: err!(SizeMismatch),
				DEFAULT: {
					log::warn!("Frame header runs past the end of the buffer, stopping");
					return Ok(Self::Eof);
				}
			)
		};

		let header = FrameHeader::parse(header);
		log::trace!("Found frame \"{}\", size: {}", header.id, header.size);

		let frame_len = FRAME_HEADER_SIZE + header.size as usize;
		let Some(content) = bytes.get(FRAME_HEADER_SIZE..frame_len) else {
			parse_mode_choice!(
				parse_options.parsing_mode,
				STRICT: err!(SizeMismatch),
				DEFAULT: {
					log::warn!(
						"Frame \"{}\" runs past the end of the buffer, stopping",
						header.id
					);
					return Ok(Self::Eof);
				}
			)
		};

		if header.flags.compression || header.flags.encryption {
			log::warn!(
				"Skipping frame \"{}\", compressed and encrypted frames are not supported",
				header.id
			);
			return Ok(Self::Skip(frame_len));
		}

		let value: FrameValue = parse_content(content, header.id.as_str(), parse_options)?;
		Ok(Self::Next(Frame { header, value }, frame_len))
	}
}
