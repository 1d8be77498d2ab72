//! Picture type names for ID3v2 `APIC` frames

/// Names of the ID3v2 picture types, indexed by the picture type byte of an `APIC` frame
pub const PICTURE_TYPES: [&str; 21] = [
	"Other",
	"32x32 pixels 'file icon' (PNG only)",
	"Other file icon",
	"Cover (front)",
	"Cover (back)",
	"Leaflet page",
	"Media (e.g. label side of CD)",
	"Lead artist/lead performer/soloist",
	"Artist/performer",
	"Conductor",
	"Band/Orchestra",
	"Composer",
	"Lyricist/text writer",
	"Recording Location",
	"During recording",
	"During performance",
	"Movie/video screen capture",
	"A bright coloured fish",
	"Illustration",
	"Band/artist logotype",
	"Publisher/Studio logotype",
];

/// Placeholder used for any code that falls outside of a lookup table
pub const UNKNOWN: &str = "unknown";

/// Get the name of an `APIC` picture type
///
/// # Examples
///
/// ```rust
/// use tagframe::picture::picture_type_name;
///
/// assert_eq!(picture_type_name(3), "Cover (front)");
/// assert_eq!(picture_type_name(200), "unknown");
/// ```
pub fn picture_type_name(code: u8) -> &'static str {
	lookup(&PICTURE_TYPES, code)
}

pub(crate) fn lookup(table: &[&'static str], code: u8) -> &'static str {
	table.get(usize::from(code)).copied().unwrap_or(UNKNOWN)
}
