//! Provide path lookups over nested values.

use crate::Segments;

// -----------------------------------------------------------------------------
// Navigate

/// A nested value whose children are values of the same type.
///
/// Implementors only describe a single step, [`child`](Navigate::child).
/// Whole-path lookups fold that step over the keys of a dotted path, see
/// [`get_at_path`] and [`has_at_path`].
///
/// # Examples
///
/// ```
/// use lp_path::Navigate;
///
/// enum Tree {
///     Leaf(i32),
///     Node(Vec<(&'static str, Tree)>),
/// }
///
/// impl Navigate for Tree {
///     fn child(&self, key: &str) -> Option<&Self> {
///         match self {
///             Tree::Leaf(_) => None,
///             Tree::Node(children) => children
///                 .iter()
///                 .find(|(name, _)| *name == key)
///                 .map(|(_, child)| child),
///         }
///     }
/// }
///
/// let tree = Tree::Node(vec![("a", Tree::Node(vec![("b", Tree::Leaf(1))]))]);
///
/// assert!(tree.has_path("a.b"));
/// assert!(!tree.has_path("a.c"));
/// assert!(matches!(tree.get_path("a.b"), Some(Tree::Leaf(1))));
/// ```
pub trait Navigate {
    /// Returns the direct child stored under `key`, if any.
    fn child(&self, key: &str) -> Option<&Self>;

    /// Returns the value at `path`, see [`get_at_path`].
    #[inline]
    fn get_path(&self, path: &str) -> Option<&Self> {
        get_at_path(self, path)
    }

    /// Checks whether `path` resolves, see [`has_at_path`].
    #[inline]
    fn has_path(&self, path: &str) -> bool {
        has_at_path(self, path)
    }
}

// -----------------------------------------------------------------------------
// Path lookups

/// Returns the value found by following every key of `path` from `source`.
///
/// A missing intermediate key ends the lookup with `None`; it is never an error.
pub fn get_at_path<'s, S: Navigate + ?Sized>(source: &'s S, path: &str) -> Option<&'s S> {
    let mut it = source;
    for key in Segments::new(path) {
        it = it.child(key)?;
    }
    Some(it)
}

/// Checks whether every key of `path` resolves from `source`.
///
/// A present value counts as existing whatever it holds, `null` included.
#[inline]
pub fn has_at_path<S: Navigate + ?Sized>(source: &S, path: &str) -> bool {
    get_at_path(source, path).is_some()
}
