/// Navigates an [`Accessor`](crate::Accessor) with property-like syntax.
///
/// `access!(node; a.b[0].c)` expands to
/// `node.navigate("a").navigate("b").navigate(0).navigate("c")`.
///
/// Identifiers become string keys and bracket contents are passed to
/// [`navigate`](crate::Accessor::navigate) as is. Keys that are not valid
/// identifiers, keywords included, go in brackets: `access!(node; ["type"])`.
/// Only navigation happens here, so reserved names are plain keys.
///
/// # Examples
///
/// ```
/// use lp_access::{access, create_accessor};
/// use serde_json::json;
///
/// let data = json!({ "a": { "b": [10, 20], "type": "pair" } });
/// let root = create_accessor(&data);
///
/// assert_eq!(access!(root; a.b[1]).key(), Some("a.b.1"));
/// assert_eq!(access!(root; a.b[1]).get(), Some(&json!(20)));
/// assert_eq!(access!(root; a["type"]).get(), Some(&json!("pair")));
/// assert_eq!(access!(root).key(), None);
/// ```
#[macro_export]
macro_rules! access {
    ($node:expr $(;)?) => {
        $node
    };
    ($node:expr; $key:ident $($rest:tt)*) => {
        $crate::access!($node.navigate(::core::stringify!($key)); $($rest)*)
    };
    ($node:expr; . $key:ident $($rest:tt)*) => {
        $crate::access!($node.navigate(::core::stringify!($key)); $($rest)*)
    };
    ($node:expr; [$key:expr] $($rest:tt)*) => {
        $crate::access!($node.navigate($key); $($rest)*)
    };
}
