//! Provide typed reads over [`serde_json::Value`] sources.

use core::fmt;

use lp_path::DottedPath;
use serde_core::Deserialize;
use serde_json::Value;

use crate::Accessor;

// -----------------------------------------------------------------------------
// Error

/// An error returned from a failed typed read.
#[derive(Debug)]
pub enum ReadError {
    /// Nothing is stored at the path.
    Missing { path: Option<DottedPath> },
    /// A value was found but could not be converted to the requested type.
    Decode {
        path: Option<DottedPath>,
        error: serde_json::Error,
    },
}

impl ReadError {
    /// Returns the path of the failed read, `None` for the root.
    #[inline]
    pub fn path(&self) -> Option<&DottedPath> {
        match self {
            Self::Missing { path } | Self::Decode { path, .. } => path.as_ref(),
        }
    }
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self.path().map_or("<root>", DottedPath::as_str);
        match self {
            Self::Missing { .. } => write!(f, "No value stored at `{path}`"),
            Self::Decode { error, .. } => write!(f, "Can't decode the value at `{path}`: {error}"),
        }
    }
}

impl core::error::Error for ReadError {
    #[cfg(feature = "std")]
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Missing { .. } => None,
            Self::Decode { error, .. } => Some(error),
        }
    }
}

// -----------------------------------------------------------------------------
// Typed reads

impl<'a> Accessor<'a, Value> {
    /// Reads this node and deserializes it into `T`.
    ///
    /// `T` may borrow from the source, e.g. `&str`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lp_access::{ReadError, create_accessor};
    /// use serde_json::json;
    ///
    /// let data = json!({ "size": [640, 480], "name": "frame" });
    /// let root = create_accessor(&data);
    ///
    /// let size: (u32, u32) = root.navigate("size").get_as().unwrap();
    /// assert_eq!(size, (640, 480));
    ///
    /// let name: &str = root.get_at_as("name").unwrap();
    /// assert_eq!(name, "frame");
    ///
    /// assert!(matches!(root.get_at_as::<u8>("depth"), Err(ReadError::Missing { .. })));
    /// assert!(matches!(root.get_at_as::<u8>("name"), Err(ReadError::Decode { .. })));
    /// ```
    pub fn get_as<T: Deserialize<'a>>(&self) -> Result<T, ReadError> {
        let Some(value) = self.get() else {
            return Err(ReadError::Missing {
                path: self.path().cloned(),
            });
        };

        T::deserialize(value).map_err(|error| {
            log::trace!("typed read of `{}` failed: {error}", self.key().unwrap_or("<root>"));
            ReadError::Decode {
                path: self.path().cloned(),
                error,
            }
        })
    }

    /// Reads the child under `key` and deserializes it into `T`.
    #[inline]
    pub fn get_at_as<T: Deserialize<'a>>(&self, key: impl fmt::Display) -> Result<T, ReadError> {
        self.navigate(key).get_as()
    }
}

// -----------------------------------------------------------------------------
// Tests
