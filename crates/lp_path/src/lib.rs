#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod dotted;
mod navigate;
mod segments;

#[cfg(feature = "json")]
mod json;

// -----------------------------------------------------------------------------
// Top-level exports

pub use dotted::DottedPath;
pub use navigate::{Navigate, get_at_path, has_at_path};
pub use segments::{Segments, parse_index};
