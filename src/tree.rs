use std::fmt;
use std::ops::Index;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::arena::Arena;
use crate::config::ParserConfig;
use crate::error::{Result, SexpError};
use crate::handle::Handle;
use crate::intern::{AtomHandle, Interner};
use crate::iter::Children;
use crate::node::{Node, NodeKind};
use crate::serializer;

static NEXT_TREE_ID: AtomicU64 = AtomicU64::new(0);

/// One arena, one intern table, and a root list node whose children are
/// the top-level forms of a parsed input. A `Tree` behaves like its own
/// root for navigation -- `tree.len()`, `tree.head()`, iterating over
/// `&tree` -- the same convenience the original C-extension binding's
/// `SExp` object gave its callers.
pub struct Tree {
    id: u64,
    arena: Arena,
    interner: Interner,
    root: Handle,
}

impl Tree {
    pub(crate) fn empty(config: &ParserConfig) -> Self {
        let id = NEXT_TREE_ID.fetch_add(1, Ordering::Relaxed);
        let mut arena = Arena::with_capacity(config.node_capacity_hint);
        let interner = Interner::with_capacity(config.atom_capacity_hint);
        let root = arena.allocate(id, NodeKind::List { first: None, last: None, len: 0 });
        Tree { id, arena, interner, root }
    }

    /// Creates a new, empty tree: a single root list with no children.
    pub fn new() -> Self {
        Tree::empty(&ParserConfig::default())
    }

    /// The handle of the implicit root list. Every top-level form parsed
    /// from the input is a child of this node.
    pub fn root(&self) -> Handle {
        self.root
    }

    /// The total number of nodes (atoms and lists) currently in the
    /// arena, including the root.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Allocates a new, unattached atom node holding `value`.
    pub fn new_atom(&mut self, value: impl AsRef<[u8]>) -> Handle {
        let atom = self.interner.intern(value.as_ref());
        let handle = self.arena.allocate(self.id, NodeKind::Atom(atom));
        log::trace!("new_atom -> {:?}", handle);
        handle
    }

    /// Allocates a new, unattached, empty list node.
    pub fn new_list(&mut self) -> Handle {
        let handle = self.arena.allocate(self.id, NodeKind::List { first: None, last: None, len: 0 });
        log::trace!("new_list -> {:?}", handle);
        handle
    }

    /// Number of top-level forms.
    pub fn len(&self) -> usize {
        self.root.len(self)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The first top-level form.
    ///
    /// # Errors
    /// Returns [`SexpError::OutOfRange`] if the tree has no forms.
    pub fn head(&self) -> Result<Handle> {
        self.root.head(self)
    }

    /// All top-level forms after the first.
    pub fn tail(&self) -> crate::iter::Tail<'_> {
        self.root.tail(self)
    }

    /// All top-level forms, in order.
    pub fn children(&self) -> Children<'_> {
        self.root.children(self)
    }

    /// The top-level form at `index` (supports negative indexing).
    pub fn child(&self, index: i64) -> Result<Handle> {
        self.root.child(self, index)
    }

    /// The first top-level form keyed by `key` (see
    /// [`Handle::child_by_key`]).
    pub fn child_by_key(&self, key: impl AsRef<[u8]>) -> Result<Handle> {
        self.root.child_by_key(self, key)
    }

    pub(crate) fn check_handle(&self, handle: Handle) -> Result<()> {
        if handle.tree_id() != self.id {
            Err(SexpError::CrossTree)
        } else {
            Ok(())
        }
    }

    pub(crate) fn get(&self, handle: Handle) -> &Node {
        self.arena.get(handle)
    }

    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut Node {
        self.arena.get_mut(handle)
    }

    pub(crate) fn intern(&mut self, bytes: &[u8]) -> AtomHandle {
        self.interner.intern(bytes)
    }

    pub(crate) fn lookup_atom(&self, handle: AtomHandle) -> &[u8] {
        self.interner.lookup(handle)
    }

    pub(crate) fn allocate_list(&mut self) -> Handle {
        self.arena.allocate(self.id, NodeKind::List { first: None, last: None, len: 0 })
    }

    pub(crate) fn allocate_atom(&mut self, bytes: &[u8]) -> Handle {
        let atom = self.interner.intern(bytes);
        self.arena.allocate(self.id, NodeKind::Atom(atom))
    }

    /// Appends `child` as the last child of `parent`, in O(1), by reading
    /// the parent's own `last` pointer rather than walking the sibling
    /// chain. Used internally by the parser, which builds trees
    /// depth-first and already knows every invariant holds by
    /// construction.
    pub(crate) fn link_child(&mut self, parent: Handle, child: Handle) {
        let anchor = match &self.arena.get(parent).kind {
            NodeKind::List { last, .. } => *last,
            NodeKind::Atom(_) => unreachable!("parser never appends under an atom"),
        };
        self.arena.link_after(parent, anchor, child);
    }

    pub(crate) fn link_tail(&mut self, parent: Handle, child: Handle) {
        self.link_child(parent, child);
    }

    pub(crate) fn arena_link_after(&mut self, parent: Handle, anchor: Option<Handle>, child: Handle) {
        self.arena.link_after(parent, anchor, child);
    }

    pub(crate) fn arena_unlink(&mut self, node: Handle) {
        self.arena.unlink(node);
    }

    /// Deep-copies the subtree rooted at `node` into a fresh `Tree`,
    /// wrapped in that tree's root list (so the new tree's invariant --
    /// root is always a list -- holds even when `node` itself is an
    /// atom).
    pub(crate) fn deep_copy(&self, node: Handle) -> Tree {
        let mut new_tree = Tree::empty(&ParserConfig::default());
        let new_root = new_tree.root();
        let copied = new_tree.copy_subtree_from(self, node);
        new_tree.link_tail(new_root, copied);
        new_tree
    }

    /// Copies `src_root` (and everything under it) from `src` into
    /// `self`, using an explicit stack rather than recursion so copying
    /// does not consume call-stack proportional to tree depth.
    fn copy_subtree_from(&mut self, src: &Tree, src_root: Handle) -> Handle {
        let new_root = self.copy_node_shallow(src, src_root);
        let mut stack = vec![(src_root, new_root)];
        while let Some((src_parent, new_parent)) = stack.pop() {
            let mut cursor = match &src.get(src_parent).kind {
                NodeKind::List { first, .. } => *first,
                NodeKind::Atom(_) => None,
            };
            while let Some(child) = cursor {
                let new_child = self.copy_node_shallow(src, child);
                self.link_tail(new_parent, new_child);
                if !child.is_atom(src) {
                    stack.push((child, new_child));
                }
                cursor = src.get(child).next;
            }
        }
        new_root
    }

    fn copy_node_shallow(&mut self, src: &Tree, node: Handle) -> Handle {
        match &src.get(node).kind {
            NodeKind::Atom(atom) => {
                let bytes = src.interner.lookup(*atom);
                self.allocate_atom(bytes)
            }
            NodeKind::List { .. } => self.allocate_list(),
        }
    }
}

impl Default for Tree {
    fn default() -> Self {
        Tree::new()
    }
}

impl Index<Handle> for Tree {
    type Output = Node;
    fn index(&self, handle: Handle) -> &Node {
        self.get(handle)
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = Handle;
    type IntoIter = Children<'a>;
    fn into_iter(self) -> Children<'a> {
        self.children()
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&serializer::serialize(self)))
    }
}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("text", &String::from_utf8_lossy(&serializer::serialize(self)))
            .field("node_count", &self.node_count())
            .finish()
    }
}

#[cfg(test)]
mod test {
    use crate::parse;

    #[test]
    fn root_delegates_like_a_list() {
        let tree = parse("a b c").unwrap();
        assert_eq!(tree.len(), 3);
        assert!(!tree.is_empty());
        assert_eq!(tree.head().unwrap().value(&tree).unwrap(), b"a");
        let tail: Vec<_> = tree.tail().map(|h| h.value(&tree).unwrap().to_vec()).collect();
        assert_eq!(tail, vec![b"b".to_vec(), b"c".to_vec()]);
    }

    #[test]
    fn empty_tree_has_no_head() {
        let tree = super::Tree::new();
        assert_eq!(tree.len(), 0);
        assert!(tree.head().is_err());
    }
}
