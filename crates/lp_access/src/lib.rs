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

mod accessor;
mod macros;
mod member;
mod reader;

#[cfg(feature = "json")]
mod typed;

// -----------------------------------------------------------------------------
// Top-level exports

pub use accessor::{Accessor, create_accessor, create_accessor_with};
pub use member::{Member, ReservedName};
pub use reader::{DefaultReader, Reader};

#[cfg(feature = "json")]
pub use typed::ReadError;

pub use lp_path::{DottedPath, Navigate};
