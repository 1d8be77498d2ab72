//! Utilities for working with synchsafe integers
//!
//! ID3v2 stores some sizes with only 7 bits per byte, keeping the MSB of every byte clear so that
//! the size can never be mistaken for an MPEG frame sync.

/// An integer that can be converted to and from synchsafe variants
pub trait SynchsafeInteger: Sized {
	/// Create a synchsafe integer
	///
	/// Returns `None` if the number doesn't fit in the available bits (28 for a `u32`).
	///
	/// # Examples
	///
	/// ```rust
	/// use tagframe::id3::v2::util::synchsafe::SynchsafeInteger;
	///
	/// let unsynch_number = 0xFFF_FFFF_u32;
	/// let synch_number = unsynch_number.synch().expect("should fit in 28 bits");
	///
	/// // Each byte should have 7 set bits and an MSB of 0
	/// assert_eq!(synch_number, 0b01111111_01111111_01111111_01111111_u32);
	///
	/// assert_eq!(0x1000_0000_u32.synch(), None);
	/// ```
	fn synch(self) -> Option<Self>;

	/// Unsynchronise a synchsafe integer
	///
	/// # Examples
	///
	/// ```rust
	/// use tagframe::id3::v2::util::synchsafe::SynchsafeInteger;
	///
	/// // The header of a tag with 257 bytes of content
	/// let size = u32::from_be_bytes([0x00, 0x00, 0x02, 0x01]);
	/// assert_eq!(size.unsynch(), 257);
	/// ```
	fn unsynch(self) -> Self;
}

impl SynchsafeInteger for u32 {
	fn synch(self) -> Option<Self> {
		// 7 bits are available per byte
		const MAXIMUM_INTEGER: u32 = u32::MAX >> 4;

		if self > MAXIMUM_INTEGER {
			return None;
		}

		let n = self;
		Some(
			(n & 0x7F)
				| ((n & (0x7F << 7)) << 1)
				| ((n & (0x7F << 14)) << 2)
				| ((n & (0x7F << 21)) << 3),
		)
	}

	fn unsynch(self) -> Self {
		let u = self;
		((u & 0x7F00_0000) >> 3) | ((u & 0x7F_0000) >> 2) | ((u & 0x7F00) >> 1) | (u & 0x7F)
	}
}
