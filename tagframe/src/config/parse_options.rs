/// The parsing strictness mode
///
/// This only affects how *truncated* input is handled. Text that fails to decode is always an error.
///
/// # Examples
///
/// ```rust
/// use tagframe::config::{ParseOptions, ParsingMode};
///
/// // We only want to read complete tags
/// let parsing_options = ParseOptions::new().parsing_mode(ParsingMode::Strict);
/// ```
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Default)]
#[non_exhaustive]
pub enum ParsingMode {
	/// Will eagerly error on truncated input
	///
	/// ## Examples of behavior
	///
	/// * An ID3v2 frame declares more bytes than the buffer holds - The parser will error and the entire tag is discarded
	/// * An APE item's value runs past the footer - The parser will error and the entire tag is discarded
	Strict,
	/// Default mode, keeps whatever was decoded before the input ran out
	///
	/// ## Examples of behavior
	///
	/// * An ID3v2 frame declares more bytes than the buffer holds - Frame iteration stops, all prior frames are kept
	/// * An APE item's value runs past the footer - Item iteration stops, all prior items are kept
	#[default]
	BestAttempt,
}

/// Options to control how tagframe parses a buffer
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct ParseOptions {
	pub(crate) parsing_mode: ParsingMode,
	pub(crate) read_cover_art: bool,
}

impl Default for ParseOptions {
	/// The default implementation for `ParseOptions`
	///
	/// The defaults are as follows:
	///
	/// ```rust,ignore
	/// ParseOptions {
	/// 	parsing_mode: ParsingMode::BestAttempt,
	/// 	read_cover_art: true,
	/// }
	/// ```
	fn default() -> Self {
		Self::new()
	}
}

impl ParseOptions {
	/// Default parsing mode
	pub const DEFAULT_PARSING_MODE: ParsingMode = ParsingMode::BestAttempt;

	/// Creates a new `ParseOptions`, alias for `Default` implementation
	///
	/// See also: [`ParseOptions::default`]
	///
	/// # Examples
	///
	/// ```rust
	/// use tagframe::config::ParseOptions;
	///
	/// let parsing_options = ParseOptions::new();
	/// ```
	#[must_use]
	pub const fn new() -> Self {
		Self {
			parsing_mode: Self::DEFAULT_PARSING_MODE,
			read_cover_art: true,
		}
	}

	/// The parsing mode to use, see [`ParsingMode`] for details
	///
	/// # Examples
	///
	/// ```rust
	/// use tagframe::config::{ParseOptions, ParsingMode};
	///
	/// // By default, `parsing_mode` is ParsingMode::BestAttempt. Here, we need absolute correctness.
	/// let parsing_options = ParseOptions::new().parsing_mode(ParsingMode::Strict);
	/// ```
	pub fn parsing_mode(&mut self, parsing_mode: ParsingMode) -> Self {
		self.parsing_mode = parsing_mode;
		*self
	}

	/// Whether or not to keep the picture data of `APIC` frames
	///
	/// The frame itself (MIME type, picture type, description) is always decoded.
	///
	/// # Examples
	///
	/// ```rust
	/// use tagframe::config::ParseOptions;
	///
	/// // Copying cover art is expensive, and I do not need it!
	/// let parsing_options = ParseOptions::new().read_cover_art(false);
	/// ```
	pub fn read_cover_art(&mut self, read_cover_art: bool) -> Self {
		self.read_cover_art = read_cover_art;
		*self
	}
}
