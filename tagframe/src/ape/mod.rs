//! APE specific items
//!
//! ## Tag notes
//!
//! An `APEv2` tag can have a header, a footer, or both. `APEv1` tags only have a footer. Since the
//! footer is the usual way of finding a tag, [`SearchDirection::Backward`] is the default.
//!
//! The backward search skips over a trailing ID3v1 tag, so `APE` and ID3v1 tags can be read from
//! the same buffer.
pub(crate) mod constants;
pub(crate) mod header;
pub(crate) mod tag;

// Exports

pub use header::{ApeHeader, ApeTagFlags, ApeVersion};
pub use tag::ApeTag;
pub use tag::item::{ApeItem, ApeItemType, ApeItemValue};
pub use tag::read::{SearchDirection, find_boundary_backward, find_boundary_forward};
