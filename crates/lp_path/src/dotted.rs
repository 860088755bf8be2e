//! Provide the owned path carried by accessor nodes.

use alloc::boxed::Box;
use alloc::format;
use alloc::string::{String, ToString};
use core::borrow::Borrow;
use core::fmt;
use core::ops::Deref;

use crate::Segments;

// -----------------------------------------------------------------------------
// DottedPath

/// An owned, immutable dotted path such as `nested.list.0`.
///
/// Keys are appended verbatim. A key that itself contains `.` is not escaped,
/// so `join("a.b")` and `join("a").join("b")` denote the same location.
///
/// # Examples
///
/// ```
/// use lp_path::DottedPath;
///
/// let path = DottedPath::from_key("list").join(0);
/// assert_eq!(path, "list.0");
/// assert_eq!(path.segments().collect::<Vec<_>>(), ["list", "0"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DottedPath(Box<str>);

impl DottedPath {
    /// The separator placed between keys.
    pub const SEPARATOR: char = '.';

    /// Creates a single-key path from anything printable.
    #[inline]
    pub fn from_key(key: impl fmt::Display) -> Self {
        Self(key.to_string().into_boxed_str())
    }

    /// Returns a new path with `key` appended.
    #[inline]
    pub fn join(&self, key: impl fmt::Display) -> Self {
        Self(format!("{}{}{key}", self.0, Self::SEPARATOR).into_boxed_str())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the keys of this path, see [`Segments`].
    #[inline]
    pub fn segments(&self) -> Segments<'_> {
        Segments::new(&self.0)
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.0.into_string()
    }
}

impl fmt::Display for DottedPath {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Deref for DottedPath {
    type Target = str;

    #[inline]
    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DottedPath {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for DottedPath {
    #[inline]
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DottedPath {
    #[inline]
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}

impl From<String> for DottedPath {
    #[inline]
    fn from(value: String) -> Self {
        Self(value.into_boxed_str())
    }
}

impl From<DottedPath> for String {
    #[inline]
    fn from(value: DottedPath) -> Self {
        value.into_string()
    }
}

impl PartialEq<str> for DottedPath {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for DottedPath {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl PartialEq<DottedPath> for str {
    #[inline]
    fn eq(&self, other: &DottedPath) -> bool {
        self == &*other.0
    }
}

impl PartialEq<DottedPath> for &str {
    #[inline]
    fn eq(&self, other: &DottedPath) -> bool {
        *self == &*other.0
    }
}

// -----------------------------------------------------------------------------
// Tests
