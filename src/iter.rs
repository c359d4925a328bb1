//! Iterators over a tree's structure.
use crate::handle::Handle;
use crate::tree::Tree;

/// Iterator over the direct children of a list node, in insertion order.
///
/// Created by [`Handle::children`](crate::Handle::children) and
/// [`Tree::children`].
pub struct Children<'a> {
    tree: &'a Tree,
    next: Option<Handle>,
}

impl<'a> Children<'a> {
    pub(crate) fn new(tree: &'a Tree, first: Option<Handle>) -> Self {
        Children { tree, next: first }
    }
}

impl<'a> Iterator for Children<'a> {
    type Item = Handle;
    fn next(&mut self) -> Option<Handle> {
        let current = self.next?;
        self.next = self.tree.get(current).next;
        Some(current)
    }
}

/// Iterator over every child after the first.
///
/// Created by [`Handle::tail`](crate::Handle::tail) and [`Tree::tail`].
pub struct Tail<'a> {
    tree: &'a Tree,
    next: Option<Handle>,
}

impl<'a> Tail<'a> {
    pub(crate) fn new(tree: &'a Tree, start: Option<Handle>) -> Self {
        Tail { tree, next: start }
    }
}

impl<'a> Iterator for Tail<'a> {
    type Item = Handle;
    fn next(&mut self) -> Option<Handle> {
        let current = self.next?;
        self.next = self.tree.get(current).next;
        Some(current)
    }
}

#[cfg(test)]
mod test {
    use crate::parse;

    #[test]
    fn children_visits_in_order() {
        let tree = parse("(a b c)").unwrap();
        let list = tree.head().unwrap();
        let values: Vec<_> = list.children(&tree).map(|h| h.value(&tree).unwrap().to_vec()).collect();
        assert_eq!(values, vec![b"a".to_vec(), b"b".to_vec(), b"c".to_vec()]);
    }

    #[test]
    fn tail_skips_head() {
        let tree = parse("(a b c)").unwrap();
        let list = tree.head().unwrap();
        let values: Vec<_> = list.tail(&tree).map(|h| h.value(&tree).unwrap().to_vec()).collect();
        assert_eq!(values, vec![b"b".to_vec(), b"c".to_vec()]);
    }

    #[test]
    fn tail_of_single_child_is_empty() {
        let tree = parse("(solo)").unwrap();
        let list = tree.head().unwrap();
        assert_eq!(list.tail(&tree).count(), 0);
    }
}
