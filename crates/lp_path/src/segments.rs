//! Provide the key parser for dotted paths.

use core::iter::FusedIterator;

// -----------------------------------------------------------------------------
// Segments

/// An iterator over the keys of a dotted path.
///
/// Parsing is lazy and never fails; every input yields at least one key.
///
/// # Syntax
///
/// - `.` separates keys: `a.b` yields `a`, `b`.
/// - `[...]` holds a single key: `a[0].b` yields `a`, `0`, `b`.
/// - Quoted bracket content is taken literally: `a["x.y"]` yields `a`, `x.y`.
///
/// Empty keys are kept, so `a..b` yields `a`, an empty key, `b`, and the empty path
/// yields one empty key. An unterminated bracket is read as a literal key.
///
/// # Examples
///
/// ```
/// use lp_path::Segments;
///
/// let keys: Vec<_> = Segments::new("nested.list[1]").collect();
/// assert_eq!(keys, ["nested", "list", "1"]);
///
/// let keys: Vec<_> = Segments::new(r#"map["a.b"].c"#).collect();
/// assert_eq!(keys, ["map", "a.b", "c"]);
/// ```
#[derive(Debug, Clone)]
pub struct Segments<'p> {
    rest: Option<&'p str>,
}

impl<'p> Segments<'p> {
    /// Creates a parser over `path`.
    #[inline]
    pub const fn new(path: &'p str) -> Self {
        Self { rest: Some(path) }
    }
}

impl<'p> Iterator for Segments<'p> {
    type Item = &'p str;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest.take()?;

        if let Some(inner) = rest.strip_prefix('[') {
            let Some(end) = inner.find(']') else {
                return Some(rest);
            };

            let after = &inner[end + 1..];
            self.rest = match after.strip_prefix('.') {
                Some(next) => Some(next),
                None if after.is_empty() => None,
                None => Some(after),
            };
            return Some(unquote(&inner[..end]));
        }

        match rest.find(['.', '[']) {
            None => Some(rest),
            Some(at) => {
                let (key, tail) = rest.split_at(at);
                self.rest = Some(tail.strip_prefix('.').unwrap_or(tail));
                Some(key)
            }
        }
    }
}

impl FusedIterator for Segments<'_> {}

fn unquote(key: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = key.strip_prefix(quote).and_then(|it| it.strip_suffix(quote)) {
            return inner;
        }
    }
    key
}

// -----------------------------------------------------------------------------
// List index

/// Interprets a key as a list index.
///
/// Only canonical decimal forms are indices: `0` and `12` are,
/// `01`, `+1`, `-1` and `1.0` are not.
///
/// # Examples
///
/// ```
/// use lp_path::parse_index;
///
/// assert_eq!(parse_index("12"), Some(12));
/// assert_eq!(parse_index("01"), None);
/// assert_eq!(parse_index("name"), None);
/// ```
pub fn parse_index(key: &str) -> Option<usize> {
    match key.as_bytes() {
        [] => None,
        [b'0'] => Some(0),
        [b'0', ..] => None,
        bytes if bytes.iter().all(u8::is_ascii_digit) => key.parse().ok(),
        _ => None,
    }
}

// -----------------------------------------------------------------------------
// Tests
