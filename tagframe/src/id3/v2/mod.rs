//! ID3v2 items and utilities
//!
//! Only ID3v2.3 tags can be read, see [`Id3v2Tag`] for the frames that are decoded.
//!
//! ## Important notes
//!
//! * Tags with the unsynchronisation flag are rejected
//! * Compressed and encrypted frames are skipped, their content is never read
//! * "SYLT" frames only carry their metadata, the synchronized text is left empty

mod frame;
pub(crate) mod header;
mod items;
pub(crate) mod read;
pub(crate) mod tag;
pub mod util;

// Exports

pub use header::{Id3v2Header, Id3v2TagFlags, Id3v2Version};

pub use tag::{Id3v2Summary, Id3v2Tag, to_summary};

pub use items::*;

pub use frame::header::{FrameHeader, FrameId};
pub use frame::{Frame, FrameFlags, FrameValue};
