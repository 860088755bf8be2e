//! Provide the read strategy shared by every node of an accessor tree.

use lp_path::{Navigate, get_at_path};

// -----------------------------------------------------------------------------
// Reader

/// Turns a `(source, path, args)` triple into a read result.
///
/// `path` is `None` at the root. `A` carries the reader-specific arguments,
/// such as formatting options; nodes pass it through without looking at it.
///
/// Every `Fn(&S, Option<&str>, A) -> O` is a reader.
///
/// # Examples
///
/// ```
/// use lp_access::create_accessor_with;
/// use serde_json::{Value, json};
///
/// fn shout(source: &Value, path: Option<&str>, suffix: &str) -> Option<String> {
///     let value = source.pointer(&format!("/{}", path?.replace('.', "/")))?;
///     Some(format!("{}{suffix}", value.as_str()?.to_uppercase()))
/// }
///
/// let data = json!({ "greeting": { "text": "hi" } });
/// let root = create_accessor_with(&data, shout);
///
/// assert_eq!(root.navigate("greeting").get_at_with("text", "!"), Some("HI!".into()));
/// ```
pub trait Reader<S: ?Sized, A = ()> {
    /// The result of a read; may borrow from the source.
    type Output<'s>
    where
        S: 's;

    fn read<'s>(&self, source: &'s S, path: Option<&str>, args: A) -> Self::Output<'s>;
}

impl<S: ?Sized, A, O, F> Reader<S, A> for F
where
    F: Fn(&S, Option<&str>, A) -> O,
{
    type Output<'s>
        = O
    where
        S: 's;

    #[inline]
    fn read<'s>(&self, source: &'s S, path: Option<&str>, args: A) -> Self::Output<'s> {
        self(source, path, args)
    }
}

// -----------------------------------------------------------------------------
// DefaultReader

/// The reader used when none is supplied.
///
/// Returns the whole source at the root, and the value found at the node's
/// path elsewhere (`None` when the path does not resolve).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DefaultReader;

impl<S: Navigate + ?Sized> Reader<S> for DefaultReader {
    type Output<'s>
        = Option<&'s S>
    where
        S: 's;

    #[inline]
    fn read<'s>(&self, source: &'s S, path: Option<&str>, _args: ()) -> Self::Output<'s> {
        match path {
            None => Some(source),
            Some(path) => get_at_path(source, path),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
