//! Canonical text serialization: atoms render as-is, lists as
//! space-separated children wrapped in parentheses, except the tree's
//! own root, whose children are written bare (no surrounding parens).
use crate::handle::Handle;
use crate::node::NodeKind;
use crate::tree::Tree;

/// Serializes the whole tree (its root's children, space-separated) to
/// canonical S-expression text.
pub fn serialize(tree: &Tree) -> Vec<u8> {
    let mut buf = Vec::with_capacity(tree.node_count() * 4);
    write_children(tree, tree.root(), &mut buf);
    buf
}

/// Serializes a single node (and everything under it) to canonical text.
pub fn serialize_node(tree: &Tree, node: Handle) -> Vec<u8> {
    let mut buf = Vec::new();
    write_node(tree, node, &mut buf);
    buf
}

fn write_children(tree: &Tree, list: Handle, buf: &mut Vec<u8>) {
    let mut first = true;
    for child in list.children(tree) {
        if !first {
            buf.push(b' ');
        }
        first = false;
        write_node(tree, child, buf);
    }
}

fn write_node(tree: &Tree, node: Handle, buf: &mut Vec<u8>) {
    match &tree.get(node).kind {
        NodeKind::Atom(atom) => buf.extend_from_slice(tree.lookup_atom(*atom)),
        NodeKind::List { .. } => {
            buf.push(b'(');
            write_children(tree, node, buf);
            buf.push(b')');
        }
    }
}

#[cfg(test)]
mod test {
    use crate::parse;

    #[test]
    fn round_trips_flat_list() {
        let tree = parse("(a b c)").unwrap();
        assert_eq!(crate::serialize(&tree), b"(a b c)");
    }

    #[test]
    fn round_trips_nested_list() {
        let text = "(a (b c) d)";
        let tree = parse(text).unwrap();
        assert_eq!(crate::serialize(&tree), text.as_bytes());
    }

    #[test]
    fn serialize_node_omits_enclosing_root_parens() {
        let tree = parse("(a (b c) d)").unwrap();
        let list = tree.head().unwrap();
        let nested = list.child(&tree, 1).unwrap();
        assert_eq!(crate::serialize_node(&tree, nested), b"(b c)");
    }

    #[test]
    fn single_top_level_atom_has_no_parens() {
        let tree = parse("a").unwrap();
        assert_eq!(crate::serialize(&tree), b"a");
    }
}
