// Shorthand for return Err(TagError::new(ErrorKind::Foo))
//
// Usage:
// - err!(Variant)          -> return Err(TagError::new(ErrorKind::Variant))
// - err!(Variant(Message)) -> return Err(TagError::new(ErrorKind::Variant(Message)))
macro_rules! err {
	($variant:ident) => {
		return Err(crate::error::TagError::new(
			crate::error::ErrorKind::$variant,
		))
	};
	($variant:ident($reason:literal)) => {
		return Err(crate::error::TagError::new(
			crate::error::ErrorKind::$variant($reason),
		))
	};
}

// Shorthand for Id3v2Error::new(Id3v2ErrorKind::Foo).into()
//
// Usage:
//
// - id3v2_err!(Variant)
// - id3v2_err!(Variant(args...))
//
// or bail:
//
// - id3v2_err!(@BAIL Variant)
// - id3v2_err!(@BAIL Variant(args...))
macro_rules! id3v2_err {
	(@BAIL $($tt:tt)+) => {
		return Err(id3v2_err!($($tt)+))
	};
	($variant:ident $(($($arg:expr),+))?) => {
		Into::<crate::error::TagError>::into(crate::error::Id3v2Error::new(
			crate::error::Id3v2ErrorKind::$variant $(($($arg),+))?,
		))
	};
}

// A macro for handling the different `ParsingMode`s
//
// NOTE: `STRICT` is optional, if it is missing, it will fall through to `DEFAULT`.
//
// Usage:
//
// - parse_mode_choice!(
// 		ident_of_parsing_mode,
// 		STRICT: some_expr,
// 		DEFAULT: some_expr,
// 	 )
macro_rules! parse_mode_choice {
	(
		$parse_mode:expr,
		$(STRICT: $strict_handler:expr,)?
		DEFAULT: $default:expr $(,)?
	) => {
		match $parse_mode {
			$(crate::config::ParsingMode::Strict => { $strict_handler },)?
			#[allow(unreachable_patterns)]
			_ => { $default }
		}
	};
}

pub(crate) use {err, id3v2_err, parse_mode_choice};
