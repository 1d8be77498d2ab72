//! Various configuration options to control tagframe

mod parse_options;

pub use parse_options::{ParseOptions, ParsingMode};
