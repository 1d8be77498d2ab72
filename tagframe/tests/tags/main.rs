#![allow(missing_docs)]

pub(crate) mod util;

mod ape;
mod id3v1;
mod probe;
