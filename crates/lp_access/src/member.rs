//! Provide name-based member lookup on accessor nodes.
//!
//! [`Accessor::member`] resolves a name the way dynamic property access does:
//! six reserved names are intercepted first, anything else navigates.

use core::fmt;

use crate::Accessor;

// -----------------------------------------------------------------------------
// ReservedName

/// A name intercepted by [`Accessor::member`] before navigation.
///
/// A reserved name shadows a data key with the same spelling. Explicit
/// navigation is not affected: `navigate("get")` still reaches a `get` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReservedName {
    /// `key`, see [`Accessor::key`].
    Key,
    /// `keyAt`, see [`Accessor::key_at`].
    KeyAt,
    /// `get`, see [`Accessor::get_with`].
    Get,
    /// `getAt`, see [`Accessor::get_at_with`].
    GetAt,
    /// `has`, see [`Accessor::has`].
    Has,
    /// `hasAt`, see [`Accessor::has_at`].
    HasAt,
}

impl ReservedName {
    /// All reserved names, in lookup order.
    pub const ALL: [Self; 6] = [
        Self::Key,
        Self::KeyAt,
        Self::Get,
        Self::GetAt,
        Self::Has,
        Self::HasAt,
    ];

    /// Returns the spelling matched by [`parse`](Self::parse).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Key => "key",
            Self::KeyAt => "keyAt",
            Self::Get => "get",
            Self::GetAt => "getAt",
            Self::Has => "has",
            Self::HasAt => "hasAt",
        }
    }

    /// Matches `name` exactly, case included.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|it| it.as_str() == name)
    }
}

impl fmt::Display for ReservedName {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// -----------------------------------------------------------------------------
// Member

/// The result of resolving a name on an [`Accessor`].
///
/// # Examples
///
/// ```
/// use lp_access::{Member, ReservedName, create_accessor};
/// use serde_json::json;
///
/// let data = json!({ "get": 1, "got": 2 });
/// let root = create_accessor(&data);
///
/// // `get` is reserved, the data key is shadowed.
/// let Member::Reserved(ReservedName::Get, node) = root.member("get") else {
///     unreachable!()
/// };
/// assert_eq!(node.get(), Some(&data));
///
/// // Anything else navigates.
/// let Member::Node(got) = root.member("got") else {
///     unreachable!()
/// };
/// assert_eq!(got.get(), Some(&json!(2)));
///
/// // Explicit navigation is never shadowed.
/// assert_eq!(root.navigate("get").get(), Some(&json!(1)));
/// ```
pub enum Member<'a, S: ?Sized, R, A> {
    /// A reserved operation, bound to the node it was looked up on.
    Reserved(ReservedName, Accessor<'a, S, R, A>),
    /// The node one level deeper.
    Node(Accessor<'a, S, R, A>),
}

impl<'a, S: ?Sized, R, A> Member<'a, S, R, A> {
    /// Returns the reserved name, if this member is one.
    #[inline]
    pub fn reserved(&self) -> Option<ReservedName> {
        match self {
            Self::Reserved(name, _) => Some(*name),
            Self::Node(_) => None,
        }
    }

    /// Returns the navigated node, if this member is not reserved.
    #[inline]
    pub fn into_node(self) -> Option<Accessor<'a, S, R, A>> {
        match self {
            Self::Reserved(..) => None,
            Self::Node(node) => Some(node),
        }
    }
}

impl<S: ?Sized, R, A> fmt::Debug for Member<'_, S, R, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reserved(name, node) => f.debug_tuple("Reserved").field(name).field(node).finish(),
            Self::Node(node) => f.debug_tuple("Node").field(node).finish(),
        }
    }
}

impl<'a, S: ?Sized, R, A> Accessor<'a, S, R, A> {
    /// Resolves `name`: a [`ReservedName`] is bound to this node,
    /// any other name navigates one level deeper.
    pub fn member(&self, name: &str) -> Member<'a, S, R, A> {
        match ReservedName::parse(name) {
            Some(reserved) => Member::Reserved(reserved, self.clone()),
            None => Member::Node(self.navigate(name)),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
