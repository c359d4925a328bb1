//! The node store: a non-reclaiming bump allocator plus the sibling/child
//! link-splicing primitives the rest of the crate builds on. Unlike the
//! free-list-reusing allocator this module is descended from, nodes here
//! are never freed individually -- removing a node from a tree just
//! unlinks it from its neighbors and leaves its slot (and the handles of
//! anything still pointing at it) alone until the whole tree is dropped.
use crate::alloc::Allocator;
use crate::handle::Handle;
use crate::node::{Node, NodeKind};

#[derive(Clone, Debug, Default)]
pub(crate) struct Arena {
    allocator: Allocator<Node>,
}

impl Arena {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Arena { allocator: Allocator::with_capacity(capacity) }
    }

    pub(crate) fn len(&self) -> usize { self.allocator.len() }

    pub(crate) fn allocate(&mut self, tree_id: u64, kind: NodeKind) -> Handle {
        let node = match kind {
            NodeKind::Atom(atom) => Node::atom(atom),
            NodeKind::List { .. } => Node::list(),
        };
        let index = self.allocator.push(node);
        Handle::new(tree_id, index)
    }

    pub(crate) fn get(&self, handle: Handle) -> &Node {
        self.allocator.get(handle.index()).expect("stale handle")
    }

    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut Node {
        self.allocator.get_mut(handle.index()).expect("stale handle")
    }

    /// Splices `child` into `parent`'s child list immediately after
    /// `anchor`, or at the head if `anchor` is `None`. `child` must
    /// already be detached (no parent, no siblings).
    pub(crate) fn link_after(&mut self, parent: Handle, anchor: Option<Handle>, child: Handle) {
        let (prev, next) = match anchor {
            Some(a) => (Some(a), self.get(a).next),
            None => {
                let first = match &self.get(parent).kind {
                    NodeKind::List { first, .. } => *first,
                    NodeKind::Atom(_) => unreachable!("caller checked parent is a List"),
                };
                (None, first)
            }
        };

        {
            let c = self.get_mut(child);
            c.parent = Some(parent);
            c.prev = prev;
            c.next = next;
        }
        match prev {
            Some(p) => self.get_mut(p).next = Some(child),
            None => {
                if let NodeKind::List { first, .. } = &mut self.get_mut(parent).kind {
                    *first = Some(child);
                }
            }
        }
        match next {
            Some(n) => self.get_mut(n).prev = Some(child),
            None => {
                if let NodeKind::List { last, .. } = &mut self.get_mut(parent).kind {
                    *last = Some(child);
                }
            }
        }
        if let NodeKind::List { len, .. } = &mut self.get_mut(parent).kind {
            *len += 1;
        }
    }

    /// Unlinks `node` from its parent's child list, patching sibling
    /// pointers and the parent's `first`/`last`/`len` fields. `node` must
    /// currently have a parent.
    pub(crate) fn unlink(&mut self, node: Handle) {
        let (parent, prev, next) = {
            let n = self.get(node);
            (n.parent, n.prev, n.next)
        };
        let parent = parent.expect("unlink called on a node with no parent");

        match prev {
            Some(p) => self.get_mut(p).next = next,
            None => {
                if let NodeKind::List { first, .. } = &mut self.get_mut(parent).kind {
                    *first = next;
                }
            }
        }
        match next {
            Some(n) => self.get_mut(n).prev = prev,
            None => {
                if let NodeKind::List { last, .. } = &mut self.get_mut(parent).kind {
                    *last = prev;
                }
            }
        }
        if let NodeKind::List { len, .. } = &mut self.get_mut(parent).kind {
            *len -= 1;
        }

        let n = self.get_mut(node);
        n.parent = None;
        n.prev = None;
        n.next = None;
    }
}
