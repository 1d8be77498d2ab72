//! ID3 specific items
//!
//! ID3v1 lives at the end of a buffer and can be both read and written. ID3v2 lives at the start
//! of a buffer and can only be read. Check the other modules for important notes and/or warnings.

pub mod v1;
pub mod v2;
