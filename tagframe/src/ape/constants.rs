// https://wiki.hydrogenaud.io/index.php?title=APE_Tags_Header
pub(crate) const APE_PREAMBLE: &[u8; 8] = b"APETAGEX";

/// The size of both the header and footer
pub(crate) const APE_HEADER_SIZE: usize = 32;

/// The longest key allowed, in bytes
pub(super) const MAX_KEY_LEN: usize = 255;
