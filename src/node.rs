use crate::handle::Handle;
use crate::intern::AtomHandle;

/// What kind of value a node holds.
#[derive(Clone, Debug)]
pub(crate) enum NodeKind {
    Atom(AtomHandle),
    List { first: Option<Handle>, last: Option<Handle>, len: u32 },
}

/// A node in the arena. Reachable through [`Tree::index`](crate::Tree),
/// but its fields stay crate-private: the `Handle`-based API is the
/// supported way to read and mutate a tree.
#[derive(Clone, Debug)]
pub struct Node {
    pub(crate) kind: NodeKind,
    pub(crate) parent: Option<Handle>,
    pub(crate) prev: Option<Handle>,
    pub(crate) next: Option<Handle>,
}

impl Node {
    pub(crate) fn atom(atom: AtomHandle) -> Self {
        Node { kind: NodeKind::Atom(atom), parent: None, prev: None, next: None }
    }

    pub(crate) fn list() -> Self {
        Node {
            kind: NodeKind::List { first: None, last: None, len: 0 },
            parent: None,
            prev: None,
            next: None,
        }
    }

    /// True if this node holds an atom rather than a child list.
    pub fn is_atom(&self) -> bool {
        matches!(self.kind, NodeKind::Atom(_))
    }
}
