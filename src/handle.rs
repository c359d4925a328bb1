//! `Handle` is the crate's addressing scheme: a small `Copy` value that
//! names one node in one tree, and the type every navigation and mutation
//! operation is built around.
use crate::error::{Result, SexpError};
use crate::iter::{Children, Tail};
use crate::node::NodeKind;
use crate::tree::Tree;

/// A reference to a node in a specific [`Tree`]. Stamped with the owning
/// tree's id, so a `Handle` from one tree used against another is caught
/// as [`SexpError::CrossTree`] rather than silently aliasing unrelated
/// nodes -- this is what lets cross-tree detection stay O(1) without
/// dereferencing into the arena.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Hash)]
pub struct Handle {
    tree_id: u64,
    index: u32,
}

impl Handle {
    pub(crate) fn new(tree_id: u64, index: u32) -> Self {
        Handle { tree_id, index }
    }

    pub(crate) fn tree_id(self) -> u64 { self.tree_id }

    pub(crate) fn index(self) -> u32 { self.index }

    /// True if this node is an atom (as opposed to a list of children).
    pub fn is_atom(self, tree: &Tree) -> bool {
        matches!(tree.get(self).kind, NodeKind::Atom(_))
    }

    /// Number of direct children. Zero for an atom.
    pub fn len(self, tree: &Tree) -> usize {
        match &tree.get(self).kind {
            NodeKind::List { len, .. } => *len as usize,
            NodeKind::Atom(_) => 0,
        }
    }

    pub fn is_empty(self, tree: &Tree) -> bool {
        self.len(tree) == 0
    }

    /// This node's parent, or `None` for the root.
    pub fn parent(self, tree: &Tree) -> Option<Handle> {
        tree.get(self).parent
    }

    /// The atom's byte value.
    ///
    /// # Errors
    /// Returns [`SexpError::TypeMismatch`] if this node is a list.
    pub fn value<'a>(self, tree: &'a Tree) -> Result<&'a [u8]> {
        match tree.get(self).kind {
            NodeKind::Atom(atom) => Ok(tree.lookup_atom(atom)),
            NodeKind::List { .. } => {
                Err(SexpError::TypeMismatch("value is only defined on an atom"))
            }
        }
    }

    /// Overwrites the atom's byte value in place.
    ///
    /// # Errors
    /// Returns [`SexpError::TypeMismatch`] if this node is a list.
    pub fn set_value(self, tree: &mut Tree, value: impl AsRef<[u8]>) -> Result<()> {
        if !self.is_atom(tree) {
            return Err(SexpError::TypeMismatch("value is only defined on an atom"));
        }
        let interned = tree.intern(value.as_ref());
        if let NodeKind::Atom(slot) = &mut tree.get_mut(self).kind {
            *slot = interned;
        }
        Ok(())
    }

    /// The first child.
    ///
    /// # Errors
    /// Returns [`SexpError::OutOfRange`] if this node has no children.
    pub fn head(self, tree: &Tree) -> Result<Handle> {
        match &tree.get(self).kind {
            NodeKind::List { first: Some(h), .. } => Ok(*h),
            _ => Err(SexpError::OutOfRange),
        }
    }

    /// All children after the first, lazily.
    pub fn tail(self, tree: &Tree) -> Tail<'_> {
        let first = match &tree.get(self).kind {
            NodeKind::List { first, .. } => *first,
            NodeKind::Atom(_) => None,
        };
        let start = first.and_then(|h| tree.get(h).next);
        Tail::new(tree, start)
    }

    /// All direct children, in order.
    pub fn children(self, tree: &Tree) -> Children<'_> {
        let first = match &tree.get(self).kind {
            NodeKind::List { first, .. } => *first,
            NodeKind::Atom(_) => None,
        };
        Children::new(tree, first)
    }

    /// The child at `index`, with Python-style negative indexing from the
    /// end of the list.
    ///
    /// # Errors
    /// Returns [`SexpError::OutOfRange`] if `index` (after normalization)
    /// falls outside `0..len`.
    pub fn child(self, tree: &Tree, index: i64) -> Result<Handle> {
        let len = self.len(tree) as i64;
        let normalized = if index < 0 { index + len } else { index };
        if normalized < 0 || normalized >= len {
            return Err(SexpError::OutOfRange);
        }
        self.children(tree)
            .nth(normalized as usize)
            .ok_or(SexpError::OutOfRange)
    }

    /// The first child list whose own head is an atom equal to `key`
    /// (i.e. a keyed lookup over record-like `(key value...)` children).
    ///
    /// # Errors
    /// Returns [`SexpError::NotFound`] if no child matches.
    pub fn child_by_key(self, tree: &Tree, key: impl AsRef<[u8]>) -> Result<Handle> {
        let key = key.as_ref();
        for child in self.children(tree) {
            if child.is_atom(tree) {
                continue;
            }
            if let Ok(first) = child.head(tree) {
                if first.is_atom(tree) && first.value(tree) == Ok(key) {
                    return Ok(child);
                }
            }
        }
        Err(SexpError::NotFound)
    }

    /// Appends `child` as the last child of this node. If `child` is
    /// already attached somewhere (in this tree or any other), it is
    /// detached first.
    ///
    /// # Errors
    /// - [`SexpError::CrossTree`] if `child` belongs to a different tree.
    /// - [`SexpError::TypeMismatch`] if this node is an atom.
    pub fn append(self, tree: &mut Tree, child: Handle) -> Result<()> {
        tree.check_handle(self)?;
        tree.check_handle(child)?;
        self.require_list(tree)?;
        if child.parent(tree).is_some() {
            tree.arena_unlink(child);
        }
        tree.link_tail(self, child);
        log::trace!("append {:?} under {:?}", child, self);
        Ok(())
    }

    /// Prepends `child` as the first child of this node.
    ///
    /// # Errors
    /// Same as [`Handle::append`].
    pub fn prepend(self, tree: &mut Tree, child: Handle) -> Result<()> {
        tree.check_handle(self)?;
        tree.check_handle(child)?;
        self.require_list(tree)?;
        if child.parent(tree).is_some() {
            tree.arena_unlink(child);
        }
        tree.arena_link_after(self, None, child);
        log::trace!("prepend {:?} under {:?}", child, self);
        Ok(())
    }

    /// Inserts `child` immediately after `anchor` in this node's child
    /// list, or at the head if `anchor` is `None`.
    ///
    /// # Errors
    /// - [`SexpError::CrossTree`] if `child` or `anchor` belongs to a
    ///   different tree.
    /// - [`SexpError::TypeMismatch`] if this node is an atom.
    /// - [`SexpError::NotFound`] if `anchor` is not a child of this node.
    pub fn insert_after(self, tree: &mut Tree, anchor: Option<Handle>, child: Handle) -> Result<()> {
        tree.check_handle(self)?;
        tree.check_handle(child)?;
        self.require_list(tree)?;
        if let Some(a) = anchor {
            tree.check_handle(a)?;
            if a.parent(tree) != Some(self) {
                return Err(SexpError::NotFound);
            }
        }
        if child.parent(tree).is_some() {
            tree.arena_unlink(child);
        }
        tree.arena_link_after(self, anchor, child);
        log::trace!("insert_after {:?} anchor={:?} under {:?}", child, anchor, self);
        Ok(())
    }

    /// Detaches this node from its parent, discarding it from the tree's
    /// structure (its slot in the arena is not reclaimed).
    ///
    /// # Errors
    /// Returns [`SexpError::OutOfRange`] if this node has no parent (the
    /// root cannot be removed).
    pub fn remove(self, tree: &mut Tree) -> Result<()> {
        tree.check_handle(self)?;
        if self.parent(tree).is_none() {
            return Err(SexpError::OutOfRange);
        }
        tree.arena_unlink(self);
        log::trace!("remove {:?}", self);
        Ok(())
    }

    /// Detaches this node from its parent and returns it as the sole
    /// top-level form of a brand new [`Tree`].
    ///
    /// # Errors
    /// Returns [`SexpError::OutOfRange`] if this node has no parent.
    pub fn extract(self, tree: &mut Tree) -> Result<Tree> {
        tree.check_handle(self)?;
        if self.parent(tree).is_none() {
            return Err(SexpError::OutOfRange);
        }
        let copy = tree.deep_copy(self);
        tree.arena_unlink(self);
        log::debug!("extracted subtree at {:?} into a new tree", self);
        Ok(copy)
    }

    /// Deep-copies this node (and everything under it) into a brand new
    /// [`Tree`], leaving the original untouched.
    pub fn clone_subtree(self, tree: &Tree) -> Result<Tree> {
        tree.check_handle(self)?;
        Ok(tree.deep_copy(self))
    }

    fn require_list(self, tree: &Tree) -> Result<()> {
        if self.is_atom(tree) {
            Err(SexpError::TypeMismatch("operation requires a list node"))
        } else {
            Ok(())
        }
    }
}
