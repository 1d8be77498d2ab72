mod attached_picture_frame;
mod language_frame;
mod sync_text;
pub(in crate::id3::v2) mod text_information_frame;

pub use attached_picture_frame::AttachedPictureFrame;
pub use language_frame::{CommentFrame, UnsynchronizedTextFrame};
pub use sync_text::{SYNC_TEXT_CONTENT_TYPES, SynchronizedTextFrame, timestamp_format_name};
