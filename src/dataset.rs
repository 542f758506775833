//! The DataSet tree.
//!
//! A [`DataSet`] is a named node owning an ordered list of child nodes, an
//! optional user payload, and a [`KeyValueMap`] of typed attributes. Trees are
//! built top-down by collectors and handed to the renderer once complete.
//!
//! ## Ownership
//!
//! A node exclusively owns its children, its values and its payload. Dropping a
//! node frees the whole subtree; detaching a subtree with
//! [`DataSet::remove_child`] or [`DataSet::remove_node`] moves ownership to the
//! caller. There is no sharing and no way to form a cycle.
//!
//! ## Building a tree
//!
//! ```rust
//! use dataset_show::DataSet;
//!
//! let mut root = DataSet::new("DimmList");
//! for id in 0..2u16 {
//!     let dimm = root.create_child("Dimm");
//!     dimm.set_u16("DimmID", id).set_u64("Capacity", 16 << 30);
//!     dimm.create_child("Sensor").set_i32("Temp", 40 + i32::from(id));
//! }
//!
//! assert_eq!(root.child_count(), 2);
//! let sensor = root.find("/Dimm[1]/Sensor").unwrap();
//! assert_eq!(sensor.get_i32("Temp", 0).unwrap().into_value(), 41);
//! ```
//!
//! ## Traversal
//!
//! [`DataSet::recurse`] walks the tree depth-first, calling
//! [`Visitor::visit`] before a node's children and
//! [`Visitor::children_done`] after them. The value returned from `visit` is
//! handed to the children of that node, which lets a visitor thread a depth, a
//! path prefix or a running total down the tree.

use crate::{path, Error, FromValue, KeyValInfo, KeyValueMap, Lookup, Result, Value};
use std::any::Any;
use std::fmt;
use std::marker::PhantomData;

/// A node of a DataSet tree.
pub struct DataSet {
    name: String,
    user_data: Option<Box<dyn Any>>,
    children: Vec<DataSet>,
    values: KeyValueMap,
}

impl DataSet {
    /// Creates a standalone root node.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        DataSet {
            name: name.into(),
            user_data: None,
            children: Vec::new(),
            values: KeyValueMap::new(),
        }
    }

    /// Creates a standalone root node carrying a payload.
    #[must_use]
    pub fn with_user_data<T: Any>(name: impl Into<String>, user_data: T) -> Self {
        let mut node = DataSet::new(name);
        node.user_data = Some(Box::new(user_data));
        node
    }

    /// Appends a new empty child and returns it.
    pub fn create_child(&mut self, name: impl Into<String>) -> &mut DataSet {
        self.push_child(DataSet::new(name))
    }

    /// Appends a new child owning `user_data` and returns it.
    pub fn create_child_with<T: Any>(
        &mut self,
        name: impl Into<String>,
        user_data: T,
    ) -> &mut DataSet {
        self.push_child(DataSet::with_user_data(name, user_data))
    }

    /// Appends an already built subtree as the last child and returns it.
    pub fn push_child(&mut self, child: DataSet) -> &mut DataSet {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Returns the node's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the node's name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the payload if one is attached and it has type `T`.
    #[must_use]
    pub fn user_data<T: Any>(&self) -> Option<&T> {
        self.user_data.as_ref()?.downcast_ref()
    }

    /// Mutable access to the payload if one is attached and it has type `T`.
    pub fn user_data_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.user_data.as_mut()?.downcast_mut()
    }

    /// Returns `true` if a payload is attached.
    #[must_use]
    pub fn has_user_data(&self) -> bool {
        self.user_data.is_some()
    }

    /// Attaches a payload, handing back the one it replaces.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dataset_show::DataSet;
    ///
    /// let mut node = DataSet::new("Dimm");
    /// assert!(node.set_user_data(7u32).is_none());
    ///
    /// let previous = node.set_user_data("handle").unwrap();
    /// assert_eq!(previous.downcast_ref::<u32>(), Some(&7));
    /// assert_eq!(node.user_data::<&str>(), Some(&"handle"));
    /// ```
    pub fn set_user_data<T: Any>(&mut self, user_data: T) -> Option<Box<dyn Any>> {
        self.user_data.replace(Box::new(user_data))
    }

    /// Detaches the payload, leaving the node without one.
    pub fn take_user_data(&mut self) -> Option<Box<dyn Any>> {
        self.user_data.take()
    }

    /// Returns `true` if the node has no children.
    #[inline]
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    #[must_use]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    #[must_use]
    pub fn child(&self, index: usize) -> Option<&DataSet> {
        self.children.get(index)
    }

    pub fn child_mut(&mut self, index: usize) -> Option<&mut DataSet> {
        self.children.get_mut(index)
    }

    /// Returns an iterator over the children in insertion order.
    pub fn children(&self) -> std::slice::Iter<'_, DataSet> {
        self.children.iter()
    }

    /// Returns the child following `previous`.
    ///
    /// `None` yields the first child. Children are identified by address, so
    /// `previous` must be a reference obtained from this node; the last child
    /// or a node that is not a child yields `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dataset_show::DataSet;
    ///
    /// let mut root = DataSet::new("root");
    /// root.create_child("a");
    /// root.create_child("b");
    ///
    /// let mut names = Vec::new();
    /// let mut cursor = root.next_child(None);
    /// while let Some(child) = cursor {
    ///     names.push(child.name().to_string());
    ///     cursor = root.next_child(Some(child));
    /// }
    /// assert_eq!(names, ["a", "b"]);
    /// ```
    #[must_use]
    pub fn next_child(&self, previous: Option<&DataSet>) -> Option<&DataSet> {
        let index = match previous {
            None => 0,
            Some(prev) => {
                self.children
                    .iter()
                    .position(|child| std::ptr::eq(child, prev))?
                    + 1
            }
        };
        self.children.get(index)
    }

    /// Detaches the child at `index` and returns it.
    pub fn remove_child(&mut self, index: usize) -> Option<DataSet> {
        if index < self.children.len() {
            Some(self.children.remove(index))
        } else {
            None
        }
    }

    /// Detaches the node at `path` and returns it with its subtree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dataset_show::DataSet;
    ///
    /// let mut root = DataSet::new("root");
    /// root.create_child("dimm").create_child("sensor");
    /// root.create_child("dimm");
    ///
    /// let removed = root.remove_node("dimm[0]").unwrap();
    /// assert_eq!(removed.node_count(), 2);
    /// assert_eq!(root.node_count(), 2);
    /// assert!(root.find("dimm[0]/sensor").is_none());
    /// ```
    pub fn remove_node(&mut self, path: &str) -> Option<DataSet> {
        let segments = path::parse(path, &[])?;
        let (last, parents) = segments.split_last()?;

        let mut parent: &mut DataSet = self;
        for segment in parents {
            parent = parent.nth_named_mut(segment.name, segment.index)?;
        }
        let position = parent
            .children
            .iter()
            .enumerate()
            .filter(|(_, child)| child.name == last.name)
            .nth(last.index)
            .map(|(i, _)| i)?;
        parent.remove_child(position)
    }

    /// Resolves a path such as `/Dimm[0]/Sensor[1]` against this node's children.
    ///
    /// Segments without an index select index 0. Returns `None` for an empty
    /// or malformed path, or when any segment has no match.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dataset_show::DataSet;
    ///
    /// let mut root = DataSet::new("root");
    /// let dimm = root.create_child("dimm");
    /// dimm.create_child("sensor").set_u8("id", 0);
    /// dimm.create_child("sensor").set_u8("id", 1);
    ///
    /// let second = root.find("dimm[0]/sensor[1]").unwrap();
    /// assert_eq!(second.get_u8("id", 0).unwrap().into_value(), 1);
    /// assert!(root.find("dimm[1]").is_none());
    /// ```
    #[must_use]
    pub fn find(&self, path: &str) -> Option<&DataSet> {
        self.find_indexed(path, &[])
    }

    /// Resolves a path whose `[{}]` indices are taken from `indices`, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dataset_show::DataSet;
    ///
    /// let mut root = DataSet::new("root");
    /// root.create_child("dimm");
    /// root.create_child("dimm").create_child("sensor");
    ///
    /// assert!(root.find_indexed("dimm[{}]/sensor[{}]", &[1, 0]).is_some());
    /// assert!(root.find_indexed("dimm[{}]/sensor[{}]", &[0, 0]).is_none());
    /// ```
    #[must_use]
    pub fn find_indexed(&self, path: &str, indices: &[usize]) -> Option<&DataSet> {
        let Some(segments) = path::parse(path, indices) else {
            tracing::trace!(path, "malformed DataSet path");
            return None;
        };

        let mut node = self;
        for segment in segments {
            node = match node.nth_named(segment.name, segment.index) {
                Some(child) => child,
                None => {
                    tracing::trace!(path, segment = segment.name, "unresolved path segment");
                    return None;
                }
            };
        }
        Some(node)
    }

    /// Mutable counterpart of [`DataSet::find`].
    pub fn find_mut(&mut self, path: &str) -> Option<&mut DataSet> {
        self.find_indexed_mut(path, &[])
    }

    /// Mutable counterpart of [`DataSet::find_indexed`].
    pub fn find_indexed_mut(&mut self, path: &str, indices: &[usize]) -> Option<&mut DataSet> {
        let segments = path::parse(path, indices)?;
        let mut node: &mut DataSet = self;
        for segment in segments {
            node = node.nth_named_mut(segment.name, segment.index)?;
        }
        Some(node)
    }

    fn nth_named(&self, name: &str, index: usize) -> Option<&DataSet> {
        self.children
            .iter()
            .filter(|child| child.name == name)
            .nth(index)
    }

    fn nth_named_mut(&mut self, name: &str, index: usize) -> Option<&mut DataSet> {
        self.children
            .iter_mut()
            .filter(|child| child.name == name)
            .nth(index)
    }

    /// Stores `value` under `key`, returning the value it replaces.
    pub fn set_value(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(key.into(), value.into())
    }

    /// Stores a string under `key`.
    pub fn set_wstr(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.set_value(key, Value::WStr(value.into()));
        self
    }

    /// Looks up `key` as type `T`, falling back to `default` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the key holds a value of another type.
    pub fn get_value<T: FromValue>(&self, key: &str, default: T) -> Result<Lookup<T>> {
        match self.values.get(key) {
            None => Ok(Lookup::NotFound(default)),
            Some(value) => T::from_value(value)
                .map(Lookup::Found)
                .ok_or_else(|| Error::type_mismatch(key, T::KEY_TYPE, value.key_type())),
        }
    }

    /// Looks up `key` as type `T` with no default.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] when absent and [`Error::TypeMismatch`]
    /// when the stored type differs.
    pub fn get<T: FromValue>(&self, key: &str) -> Result<T> {
        let value = self.values.get(key).ok_or_else(|| Error::key_not_found(key))?;
        T::from_value(value).ok_or_else(|| Error::type_mismatch(key, T::KEY_TYPE, value.key_type()))
    }

    /// Looks up a string value, falling back to `default` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the key holds a non-string value.
    pub fn get_wstr(&self, key: &str, default: &str) -> Result<Lookup<String>> {
        self.get_value(key, default.to_string())
    }

    /// Returns the raw stored value.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Clears a key, returning its value.
    pub fn remove_value(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Returns the descriptor of the key following `previous` (see
    /// [`KeyValueMap::next_key`]).
    #[must_use]
    pub fn next_key(&self, previous: Option<&str>) -> Option<KeyValInfo<'_>> {
        self.values.next_key(previous)
    }

    /// Returns the number of distinct keys on this node.
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.values.len()
    }

    /// The node's attributes in insertion order.
    #[must_use]
    pub fn values(&self) -> &KeyValueMap {
        &self.values
    }

    /// Number of nodes in this subtree, this node included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(DataSet::node_count).sum::<usize>()
    }

    /// Number of levels in this subtree; a leaf has height 1.
    #[must_use]
    pub fn height(&self) -> usize {
        1 + self.children.iter().map(DataSet::height).max().unwrap_or(0)
    }

    /// Returns `true` if this node or any descendant holds a key/value.
    #[must_use]
    pub fn has_content(&self) -> bool {
        !self.values.is_empty() || self.children.iter().any(DataSet::has_content)
    }

    /// Returns `true` for a node that only groups a single child and carries
    /// no attributes of its own.
    #[inline]
    #[must_use]
    pub fn is_pass_through(&self) -> bool {
        self.children.len() == 1 && self.values.is_empty()
    }

    /// Collapses pass-through nodes below this one, lifting each chain's final
    /// node into the chain's place. This node itself is kept.
    ///
    /// Returns the number of nodes removed. Squashing a squashed tree removes
    /// nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dataset_show::DataSet;
    ///
    /// let mut root = DataSet::new("root");
    /// root.create_child("group")
    ///     .create_child("subgroup")
    ///     .create_child("dimm")
    ///     .set_u8("id", 3);
    ///
    /// assert_eq!(root.squash(), 2);
    /// assert_eq!(root.child(0).unwrap().name(), "dimm");
    /// assert_eq!(root.squash(), 0);
    /// ```
    pub fn squash(&mut self) -> usize {
        let mut removed = 0;
        for child in &mut self.children {
            while child.is_pass_through() {
                match child.children.pop() {
                    Some(only) => {
                        tracing::trace!(node = %child.name, lifted = %only.name, "squashing pass-through node");
                        *child = only;
                        removed += 1;
                    }
                    None => break,
                }
            }
            removed += child.squash();
        }
        if removed > 0 {
            tracing::debug!(node = %self.name, removed, "squashed DataSet subtree");
        }
        removed
    }

    /// Iterates over the children this node would have after [`DataSet::squash`],
    /// without modifying the tree.
    pub fn squashed_children(&self) -> impl Iterator<Item = &DataSet> {
        self.children.iter().map(|child| {
            let mut node = child;
            while node.is_pass_through() {
                match node.children.first() {
                    Some(only) => node = only,
                    None => break,
                }
            }
            node
        })
    }

    /// Walks the subtree depth-first.
    ///
    /// `visit` runs before a node's children and receives the accumulator its
    /// parent's visit returned (`initial` for this node); the value it returns
    /// is passed to each child. `children_done` runs once the children are
    /// finished.
    ///
    /// With `sparse` set, subtrees holding no key/value anywhere are skipped
    /// and leaves get no `children_done` call. Without it every node is
    /// visited and every node, leaves included, gets `children_done`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dataset_show::{DataSet, FnVisitor};
    ///
    /// let mut root = DataSet::new("root");
    /// root.create_child("a").create_child("b").set_bool("ok", true);
    /// root.create_child("empty");
    ///
    /// let mut paths = Vec::new();
    /// let mut visitor = FnVisitor::new(
    ///     |name: &str, _node: &DataSet, prefix: &String| {
    ///         let path = format!("{}/{}", prefix, name);
    ///         paths.push(path.clone());
    ///         path
    ///     },
    ///     |_: &str, _: &DataSet, _: &String| {},
    /// );
    /// root.recurse(&mut visitor, String::new(), true);
    /// drop(visitor);
    ///
    /// assert_eq!(paths, ["/root", "/root/a", "/root/a/b"]);
    /// ```
    pub fn recurse<V: Visitor>(&self, visitor: &mut V, initial: V::Acc, sparse: bool) {
        self.recurse_node(visitor, &initial, sparse);
    }

    fn recurse_node<V: Visitor>(&self, visitor: &mut V, parent: &V::Acc, sparse: bool) {
        if sparse && !self.has_content() {
            return;
        }
        let acc = visitor.visit(&self.name, self, parent);
        for child in &self.children {
            child.recurse_node(visitor, &acc, sparse);
        }
        if !(sparse && self.is_leaf()) {
            visitor.children_done(&self.name, self, &acc);
        }
    }
}

/// Structural equality: names, values and children. Payloads are not compared.
impl PartialEq for DataSet {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.values == other.values && self.children == other.children
    }
}

impl fmt::Debug for DataSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataSet")
            .field("name", &self.name)
            .field("values", &self.values)
            .field("user_data", &self.user_data.is_some())
            .field("children", &self.children)
            .finish()
    }
}

macro_rules! typed_accessors {
    ($($set:ident, $get:ident => $ty:ty;)*) => {
        impl DataSet {
            $(
                #[doc = concat!("Stores a `", stringify!($ty), "` under `key`.")]
                pub fn $set(&mut self, key: impl Into<String>, value: $ty) -> &mut Self {
                    self.set_value(key, value);
                    self
                }

                #[doc = concat!("Looks up a `", stringify!($ty), "`, falling back to `default` when absent.")]
                ///
                /// # Errors
                ///
                /// Returns [`Error::TypeMismatch`] if the key holds another type.
                pub fn $get(&self, key: &str, default: $ty) -> Result<Lookup<$ty>> {
                    self.get_value(key, default)
                }
            )*
        }
    };
}

typed_accessors! {
    set_u64, get_u64 => u64;
    set_i64, get_i64 => i64;
    set_u32, get_u32 => u32;
    set_i32, get_i32 => i32;
    set_u16, get_u16 => u16;
    set_i16, get_i16 => i16;
    set_u8, get_u8 => u8;
    set_i8, get_i8 => i8;
    set_bool, get_bool => bool;
}

/// Callbacks driven by [`DataSet::recurse`].
pub trait Visitor {
    /// State handed from a node to its children.
    type Acc;

    /// Called before the node's children, with the parent's accumulator.
    fn visit(&mut self, name: &str, node: &DataSet, parent: &Self::Acc) -> Self::Acc;

    /// Called after all of the node's children, with the node's own accumulator.
    fn children_done(&mut self, name: &str, node: &DataSet, acc: &Self::Acc) {
        let _ = (name, node, acc);
    }
}

/// Adapts a pair of closures into a [`Visitor`].
pub struct FnVisitor<A, V, D> {
    visit: V,
    done: D,
    _acc: PhantomData<fn() -> A>,
}

impl<A, V, D> FnVisitor<A, V, D>
where
    V: FnMut(&str, &DataSet, &A) -> A,
    D: FnMut(&str, &DataSet, &A),
{
    pub fn new(visit: V, done: D) -> Self {
        FnVisitor {
            visit,
            done,
            _acc: PhantomData,
        }
    }
}

impl<A, V, D> Visitor for FnVisitor<A, V, D>
where
    V: FnMut(&str, &DataSet, &A) -> A,
    D: FnMut(&str, &DataSet, &A),
{
    type Acc = A;

    fn visit(&mut self, name: &str, node: &DataSet, parent: &A) -> A {
        (self.visit)(name, node, parent)
    }

    fn children_done(&mut self, name: &str, node: &DataSet, acc: &A) {
        (self.done)(name, node, acc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::KeyType;

    fn dimm_tree() -> DataSet {
        let mut root = DataSet::new("root");
        let dimm = root.create_child("dimm");
        dimm.set_wstr("DimmID", "0x0001");
        dimm.create_child("sensor").set_i32("Temp", 30);
        dimm.create_child("sensor").set_i32("Temp", 31);
        root.create_child("dimm").set_wstr("DimmID", "0x0101");
        root
    }

    #[test]
    fn test_overwrite_changes_type() {
        let mut node = DataSet::new("n");
        node.set_u32("k", 5);
        node.set_wstr("k", "five");

        assert_eq!(node.key_count(), 1);
        assert_eq!(node.get_wstr("k", "").unwrap(), Lookup::Found("five".to_string()));
        assert_eq!(
            node.get_u32("k", 0),
            Err(Error::type_mismatch("k", KeyType::U32, KeyType::WStr))
        );
    }

    #[test]
    fn test_strict_get() {
        let mut node = DataSet::new("n");
        node.set_bool("present", true);
        assert_eq!(node.get::<bool>("present"), Ok(true));
        assert_eq!(node.get::<bool>("absent"), Err(Error::key_not_found("absent")));
    }

    #[test]
    fn test_find_resolves_positionally() {
        let root = dimm_tree();
        let sensor = root.find("/dimm[0]/sensor[1]").unwrap();
        assert_eq!(sensor.get_i32("Temp", 0).unwrap(), Lookup::Found(31));
        assert_eq!(
            root.find("dimm[1]").unwrap().value("DimmID"),
            Some(&Value::from("0x0101"))
        );
        assert!(root.find("dimm[0]/sensor[2]").is_none());
        assert!(root.find("").is_none());
    }

    #[test]
    fn test_find_mut_edits_in_place() {
        let mut root = dimm_tree();
        root.find_indexed_mut("dimm[{}]/sensor[{}]", &[0, 0])
            .unwrap()
            .set_i32("Temp", 99);
        assert_eq!(root.find("dimm/sensor").unwrap().get::<i32>("Temp"), Ok(99));
    }

    #[test]
    fn test_next_child_foreign_node() {
        let root = dimm_tree();
        let stranger = DataSet::new("dimm");
        assert!(root.next_child(Some(&stranger)).is_none());
        let last = root.child(1).unwrap();
        assert!(root.next_child(Some(last)).is_none());
    }

    #[test]
    fn test_full_traversal_reports_leaves() {
        let root = dimm_tree();
        let mut visits = 0;
        let mut done = Vec::new();
        let mut visitor = FnVisitor::new(
            |_: &str, _: &DataSet, _: &()| visits += 1,
            |name: &str, _: &DataSet, _: &()| done.push(name.to_string()),
        );
        root.recurse(&mut visitor, (), false);
        drop(visitor);

        assert_eq!(visits, 5);
        assert_eq!(done, ["sensor", "sensor", "dimm", "dimm", "root"]);
    }

    #[test]
    fn test_sparse_traversal_skips_empty_branches() {
        let mut root = dimm_tree();
        root.create_child("empty").create_child("also_empty");

        let mut visited = Vec::new();
        let mut done = Vec::new();
        let mut visitor = FnVisitor::new(
            |name: &str, _: &DataSet, _: &()| visited.push(name.to_string()),
            |name: &str, _: &DataSet, _: &()| done.push(name.to_string()),
        );
        root.recurse(&mut visitor, (), true);
        drop(visitor);

        assert_eq!(visited, ["root", "dimm", "sensor", "sensor", "dimm"]);
        assert_eq!(done, ["dimm", "root"]);
    }

    #[test]
    fn test_squash_keeps_attributed_nodes() {
        let mut root = DataSet::new("root");
        root.create_child("wrapper")
            .set_bool("flag", true)
            .create_child("inner")
            .create_child("leaf");

        assert_eq!(root.squash(), 1);
        let wrapper = root.child(0).unwrap();
        assert_eq!(wrapper.name(), "wrapper");
        assert_eq!(wrapper.child(0).unwrap().name(), "leaf");
    }

    #[test]
    fn test_squashed_children_matches_squash() {
        let mut root = DataSet::new("root");
        root.create_child("a").create_child("b").create_child("c");
        root.create_child("d");

        let view: Vec<_> = root.squashed_children().map(|c| c.name().to_string()).collect();
        root.squash();
        let after: Vec<_> = root.children().map(|c| c.name().to_string()).collect();
        assert_eq!(view, after);
        assert_eq!(after, ["c", "d"]);
    }

    #[test]
    fn test_remove_child_drops_payloads() {
        use std::rc::Rc;

        let tracker = Rc::new(());
        let mut root = DataSet::new("root");
        root.create_child_with("a", Rc::clone(&tracker))
            .create_child_with("b", Rc::clone(&tracker));
        assert_eq!(Rc::strong_count(&tracker), 3);

        let detached = root.remove_child(0).unwrap();
        assert_eq!(Rc::strong_count(&tracker), 3);
        drop(detached);
        assert_eq!(Rc::strong_count(&tracker), 1);
        assert!(root.is_leaf());
    }

    #[test]
    fn test_height_and_counts() {
        let root = dimm_tree();
        assert_eq!(root.node_count(), 5);
        assert_eq!(root.height(), 3);
        assert!(root.has_content());
        assert!(!DataSet::new("x").has_content());
    }
}
