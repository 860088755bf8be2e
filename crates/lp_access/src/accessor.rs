//! Provide the lazy accessor node.

use alloc::sync::Arc;
use core::fmt;
use core::marker::PhantomData;

use lp_path::{DottedPath, Navigate, has_at_path};

use crate::{DefaultReader, Reader};

// -----------------------------------------------------------------------------
// Accessor

/// A lazily bound view into a nested source.
///
/// A node stores a borrow of the source, a shared handle to the reader and its
/// own dotted path (`None` at the root). It never copies data, and its path
/// never changes after construction: navigating returns a new node.
///
/// - `S`: the source type.
/// - `R`: the reader, shared unchanged by every descendant.
/// - `A`: the arguments forwarded to the reader by [`get_with`].
///
/// # Examples
///
/// ```
/// use lp_access::create_accessor;
/// use serde_json::json;
///
/// let data = json!({ "a": { "b": [10, 20] } });
/// let root = create_accessor(&data);
///
/// let first = root.navigate("a").navigate("b").navigate(0);
/// assert_eq!(first.key(), Some("a.b.0"));
/// assert_eq!(first.get(), Some(&json!(10)));
///
/// let b = root.navigate("a").navigate("b");
/// assert!(b.has_at(1));
/// assert!(!b.has_at(2));
/// assert_eq!(b.get_at(2), None);
/// ```
///
/// [`get_with`]: Accessor::get_with
pub struct Accessor<'a, S: ?Sized, R = DefaultReader, A = ()> {
    source: &'a S,
    reader: Arc<R>,
    path: Option<DottedPath>,
    _args: PhantomData<fn(A)>,
}

/// Creates the root node over `source`, reading with [`DefaultReader`].
#[inline]
pub fn create_accessor<S: Navigate + ?Sized>(source: &S) -> Accessor<'_, S> {
    Accessor::new(source, DefaultReader)
}

/// Creates the root node over `source`, reading through `reader`.
#[inline]
pub fn create_accessor_with<S: ?Sized, R, A>(source: &S, reader: R) -> Accessor<'_, S, R, A>
where
    R: Reader<S, A>,
{
    Accessor::new(source, reader)
}

impl<'a, S: ?Sized, R, A> Accessor<'a, S, R, A> {
    /// Creates a root node. See [`create_accessor_with`].
    #[inline]
    pub fn new(source: &'a S, reader: R) -> Self
    where
        R: Reader<S, A>,
    {
        Self::from_shared(source, Arc::new(reader))
    }

    /// Creates a root node around an already shared reader.
    #[inline]
    pub fn from_shared(source: &'a S, reader: Arc<R>) -> Self {
        Self {
            source,
            reader,
            path: None,
            _args: PhantomData,
        }
    }

    #[inline]
    fn descend(&self, path: DottedPath) -> Self {
        Self {
            source: self.source,
            reader: Arc::clone(&self.reader),
            path: Some(path),
            _args: PhantomData,
        }
    }

    // An empty path joins like the root.
    fn child_path(&self, key: impl fmt::Display) -> DottedPath {
        match &self.path {
            Some(path) if !path.is_empty() => path.join(key),
            _ => DottedPath::from_key(key),
        }
    }

    /// Returns the node one level deeper, under `key`.
    ///
    /// Nothing is read. `key` may be a name, an index, or a dotted path of its
    /// own: `navigate("a.b")` and `navigate("a").navigate("b")` are the same
    /// location.
    #[inline]
    pub fn navigate(&self, key: impl fmt::Display) -> Self {
        self.descend(self.child_path(key))
    }

    /// Returns this node's path, `None` at the root.
    #[inline]
    pub fn key(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Returns the path of the child under `key`, without reading.
    ///
    /// ```
    /// # use lp_access::create_accessor;
    /// # use serde_json::json;
    /// let data = json!({});
    /// let root = create_accessor(&data);
    ///
    /// assert_eq!(root.key_at("list"), "list");
    /// assert_eq!(root.navigate("list").key_at(0), "list.0");
    /// ```
    #[inline]
    pub fn key_at(&self, key: impl fmt::Display) -> DottedPath {
        self.child_path(key)
    }

    #[inline]
    pub fn path(&self) -> Option<&DottedPath> {
        self.path.as_ref()
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.path.is_none()
    }

    #[inline]
    pub fn source(&self) -> &'a S {
        self.source
    }

    #[inline]
    pub fn reader(&self) -> &R {
        &self.reader
    }
}

impl<'a, S: ?Sized, R: Reader<S, A>, A> Accessor<'a, S, R, A> {
    /// Reads this node through the reader, passing `args` along untouched.
    ///
    /// The reader's result is returned verbatim.
    pub fn get_with(&self, args: A) -> R::Output<'a> {
        log::trace!("read `{}`", self.key().unwrap_or("<root>"));
        self.reader.read(self.source, self.key(), args)
    }

    /// Reads this node with default reader arguments.
    #[inline]
    pub fn get(&self) -> R::Output<'a>
    where
        A: Default,
    {
        self.get_with(A::default())
    }

    /// Reads the child under `key`, same as `navigate(key).get_with(args)`.
    #[inline]
    pub fn get_at_with(&self, key: impl fmt::Display, args: A) -> R::Output<'a> {
        self.navigate(key).get_with(args)
    }

    /// Reads the child under `key` with default reader arguments.
    #[inline]
    pub fn get_at(&self, key: impl fmt::Display) -> R::Output<'a>
    where
        A: Default,
    {
        self.navigate(key).get()
    }
}

impl<S: Navigate + ?Sized, R, A> Accessor<'_, S, R, A> {
    /// Checks whether this node's path resolves in the source.
    ///
    /// The root stands for the source itself and always exists.
    /// The reader is not involved.
    pub fn has(&self) -> bool {
        match &self.path {
            None => true,
            Some(path) => has_at_path(self.source, path),
        }
    }

    /// Checks the child under `key`, same as `navigate(key).has()`.
    #[inline]
    pub fn has_at(&self, key: impl fmt::Display) -> bool {
        self.navigate(key).has()
    }
}

impl<S: ?Sized, R, A> Clone for Accessor<'_, S, R, A> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            source: self.source,
            reader: Arc::clone(&self.reader),
            path: self.path.clone(),
            _args: PhantomData,
        }
    }
}

impl<S: ?Sized, R, A> fmt::Debug for Accessor<'_, S, R, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessor")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(all(test, feature = "json"))]
mod tests {
    use alloc::format;
    use alloc::string::String;
    use alloc::vec::Vec;

    use serde_json::{Value, json};

    use super::{Accessor, create_accessor, create_accessor_with};

    fn data() -> Value {
        json!({
            "property": "property value",
            "list": ["list value1", "list value2"],
            "nested": {
                "property": "nested.property value",
                "list": ["nested.list value1", "nested.list value2"],
            },
        })
    }

    fn surround(source: &Value, path: Option<&str>, surround: &str) -> Option<Value> {
        let value = source.pointer(&format!("/{}", path?.replace('.', "/")))?;
        match value {
            Value::String(text) => Some(Value::String(format!("{surround}{text}{surround}"))),
            _ => Some(value.clone()),
        }
    }

    #[test]
    fn key_through_navigation() {
        let data = data();
        let root = create_accessor(&data);

        assert_eq!(root.key(), None);
        assert_eq!(root.navigate("property").key(), Some("property"));
        assert_eq!(root.navigate("some_property").key(), Some("some_property"));
        assert_eq!(root.navigate("nested").navigate("property").key(), Some("nested.property"));
        assert_eq!(root.navigate("nested.property").key(), Some("nested.property"));

        let list = root.navigate("list");
        assert_eq!(list.navigate(0).key(), Some("list.0"));
        assert_eq!(list.navigate(1).key(), Some("list.1"));
        assert_eq!(list.navigate(2).key(), Some("list.2"));
    }

    #[test]
    fn key_at_matches_navigation() {
        let data = data();
        let root = create_accessor(&data);
        let nested = root.navigate("nested");

        assert_eq!(root.key_at("property"), "property");
        assert_eq!(root.key_at("nested.property"), "nested.property");
        assert_eq!(nested.key_at("property"), "nested.property");
        assert_eq!(nested.key_at("some_property"), "nested.some_property");
        assert_eq!(root.navigate("list").key_at(2), "list.2");

        for key in ["a", "b.c", "0", ""] {
            assert_eq!(Some(root.key_at(key).as_str()), root.navigate(key).key());
            assert_eq!(Some(nested.key_at(key).as_str()), nested.navigate(key).key());
        }
    }

    #[test]
    fn empty_path_joins_like_root() {
        let data = data();
        let empty = create_accessor(&data).navigate("");

        assert_eq!(empty.key(), Some(""));
        assert_eq!(empty.navigate("list").key(), Some("list"));
        assert_eq!(empty.get_at("list"), Some(&data["list"]));
    }

    #[test]
    fn get_with_default_reader() {
        let data = data();
        let root = create_accessor(&data);

        assert_eq!(root.get(), Some(&data));
        assert_eq!(root.navigate("property").get(), Some(&json!("property value")));
        assert_eq!(root.navigate("some_property").get(), None);
        assert_eq!(root.navigate("list").get(), Some(&data["list"]));
        assert_eq!(root.navigate("list").navigate(0).get(), Some(&json!("list value1")));
        assert_eq!(root.navigate("list").navigate(2).get(), None);
        assert_eq!(root.navigate("nested").get(), Some(&data["nested"]));
        assert_eq!(
            root.navigate("nested.property").get(),
            Some(&json!("nested.property value"))
        );
        assert_eq!(root.navigate("nested.some_property").get(), None);
    }

    #[test]
    fn get_at_with_default_reader() {
        let data = data();
        let root = create_accessor(&data);
        let list = root.navigate("list");
        let nested = root.navigate("nested");

        assert_eq!(root.get_at("property"), Some(&json!("property value")));
        assert_eq!(root.get_at("some_property"), None);
        assert_eq!(root.get_at("list"), Some(&data["list"]));
        assert_eq!(list.get_at(0), Some(&json!("list value1")));
        assert_eq!(list.get_at(1), Some(&json!("list value2")));
        assert_eq!(list.get_at(2), None);
        assert_eq!(root.get_at("nested.property"), Some(&json!("nested.property value")));
        assert_eq!(nested.get_at("property"), Some(&json!("nested.property value")));
        assert_eq!(nested.get_at("some_property"), None);
    }

    #[test]
    fn get_with_custom_reader() {
        let data = data();
        let root = create_accessor_with(&data, surround);
        let property = root.navigate("property");

        assert_eq!(property.get(), Some(json!("property value")));
        assert_eq!(property.get_with("_"), Some(json!("_property value_")));
        assert_eq!(root.navigate("some_property").get_with("_"), None);
        assert_eq!(root.navigate("list").get_with("_"), Some(data["list"].clone()));
        assert_eq!(root.navigate("list").navigate(1).get_with("_"), Some(json!("_list value2_")));
        assert_eq!(root.navigate("list").navigate(2).get_with("_"), None);
        assert_eq!(root.navigate("nested").get_with("_"), Some(data["nested"].clone()));
        assert_eq!(
            root.navigate("nested").navigate("property").get_with("_"),
            Some(json!("_nested.property value_"))
        );
        assert_eq!(root.get_with("_"), None);
    }

    #[test]
    fn get_at_with_custom_reader() {
        let data = data();
        let root = create_accessor_with(&data, surround);
        let list = root.navigate("list");
        let nested = root.navigate("nested");

        assert_eq!(root.get_at_with("property", "_"), Some(json!("_property value_")));
        assert_eq!(root.get_at_with("some_property", "_"), None);
        assert_eq!(root.get_at_with("list", "_"), Some(data["list"].clone()));
        assert_eq!(list.get_at_with(0, "_"), Some(json!("_list value1_")));
        assert_eq!(list.get_at_with(2, "_"), None);
        assert_eq!(
            root.get_at_with("nested.property", "_"),
            Some(json!("_nested.property value_"))
        );
        assert_eq!(nested.get_at_with("property", "_"), Some(json!("_nested.property value_")));
        assert_eq!(nested.get_at_with("some_property", "_"), None);
        assert_eq!(list.get_at(0), Some(json!("list value1")));
    }

    #[test]
    fn reader_output_is_verbatim() {
        let data = json!({ "x": "v" });
        let seen = |_: &Value, path: Option<&str>, args: (u8, char)| (path.map(String::from), args);
        let root = create_accessor_with(&data, seen);

        assert_eq!(root.get_with((1, 'a')), (None, (1, 'a')));
        assert_eq!(
            root.navigate("x").navigate(3).get_with((2, 'b')),
            (Some(String::from("x.3")), (2, 'b'))
        );
    }

    #[test]
    fn has_and_has_at() {
        let data = data();
        let root = create_accessor(&data);

        assert!(root.has());
        assert!(root.navigate("property").has());
        assert!(root.navigate("nested").navigate("property").has());
        assert!(root.navigate("list.0").has());
        assert!(root.navigate("list.1").has());
        assert!(!root.navigate("list.2").has());
        assert!(!root.navigate("nested.some_property").has());

        assert!(root.has_at("property"));
        assert!(!root.has_at("some_property"));
        assert!(root.has_at("list.1"));
        assert!(!root.has_at("list.2"));
        assert!(root.navigate("list").has_at("0"));
        assert!(!root.navigate("list").has_at(2));
        assert!(root.navigate("nested").has_at("property"));
        assert!(!root.navigate("nested").has_at("some_property"));
    }

    #[test]
    fn has_ignores_reader() {
        let data = data();
        let root = create_accessor_with(&data, |_: &Value, _: Option<&str>, _: ()| false);

        assert!(root.has_at("property"));
        assert!(!root.get_at("property"));
    }

    #[test]
    fn same_path_same_behavior() {
        let data = json!({ "a": { "b": [10, 20] } });
        let root = create_accessor(&data);

        let chained = root.navigate("a").navigate("b");
        let direct = root.navigate("a.b");

        assert_eq!(chained.key(), direct.key());
        assert_eq!(chained.get(), direct.get());
        assert_eq!(chained.has(), direct.has());
        assert_eq!(chained.get_at(0), Some(&json!(10)));
        assert_eq!(direct.get_at(2), None);
    }

    #[test]
    fn navigation_leaves_parent_untouched() {
        let data = data();
        let root = create_accessor(&data);
        let nested = root.navigate("nested");

        let children: Vec<_> = ["property", "list"].iter().map(|key| nested.navigate(key)).collect();

        assert_eq!(nested.key(), Some("nested"));
        assert_eq!(children[0].key(), Some("nested.property"));
        assert_eq!(children[1].key(), Some("nested.list"));
        assert!(root.is_root());
        assert!(!nested.is_root());
    }

    #[test]
    fn clone_shares_reader() {
        let data = data();
        let root = create_accessor_with(&data, surround);
        let copy = root.navigate("property").clone();

        assert!(core::ptr::eq(root.reader(), copy.reader()));
        assert!(core::ptr::eq(root.source(), copy.source()));
        assert_eq!(copy.get_with("*"), Some(json!("*property value*")));
    }

    #[test]
    fn debug_shows_path() {
        let data = data();
        let node = create_accessor(&data).navigate("list").navigate(1);
        assert_eq!(format!("{node:?}"), r#"Accessor { path: Some(DottedPath("list.1")), .. }"#);
    }

    #[test]
    fn is_sync_send() {
        fn is_send<T: Send>() {}
        fn is_sync<T: Sync>() {}

        is_send::<Accessor<'static, Value>>();
        is_sync::<Accessor<'static, Value>>();
    }
}
