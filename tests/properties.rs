use proptest::prelude::*;
use sexpren::{parse, serialize};

/// Generates canonical S-expression text: atoms are short alphabetic
/// runs, lists nest up to a shallow bounded depth so generation
/// terminates.
fn sexp_text() -> impl Strategy<Value = String> {
    let leaf = "[a-z]{1,6}";
    leaf.prop_recursive(4, 64, 8, |inner| {
        prop::collection::vec(inner, 1..6).prop_map(|parts| format!("({})", parts.join(" ")))
    })
}

fn forms(count: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(sexp_text(), 1..=count).prop_map(|forms| forms.join(" "))
}

proptest! {
    #[test]
    fn parse_then_serialize_is_the_identity_on_canonical_text(text in forms(5)) {
        let tree = parse(&text).unwrap();
        prop_assert_eq!(serialize(&tree), text.as_bytes());
    }

    #[test]
    fn clone_subtree_serializes_identically_to_the_source_node(text in sexp_text()) {
        let tree = parse(&text).unwrap();
        let node = tree.child(0).unwrap();
        let cloned = node.clone_subtree(&tree).unwrap();
        prop_assert_eq!(serialize(&cloned), sexpren::serialize_node(&tree, node));
    }

    #[test]
    fn extract_removes_exactly_the_extracted_nodes_worth_of_count(text in forms(3)) {
        let mut tree = parse(&text).unwrap();
        let before = tree.node_count();
        let node = tree.child(0).unwrap();
        let node_size = node.clone_subtree(&tree).unwrap().node_count() - 1;
        let extracted = node.extract(&mut tree).unwrap();
        prop_assert_eq!(extracted.node_count(), node_size + 1);
        prop_assert_eq!(tree.node_count(), before);
    }

    #[test]
    fn append_increases_child_count_by_exactly_one(text in forms(2)) {
        let mut tree = parse(&text).unwrap();
        let target = tree.child(0).unwrap();
        if target.is_atom(&tree) {
            return Ok(());
        }
        let before = target.len(&tree);
        let new_atom = tree.new_atom("z");
        target.append(&mut tree, new_atom).unwrap();
        prop_assert_eq!(target.len(&tree), before + 1);
    }

    #[test]
    fn repeated_atoms_intern_to_the_same_value(word in "[a-z]{1,8}") {
        let text = format!("({w} {w} {w})", w = word);
        let tree = parse(&text).unwrap();
        let list = tree.head().unwrap();
        let values: Vec<_> = list.children(&tree).map(|h| h.value(&tree).unwrap()).collect();
        prop_assert!(values.iter().all(|v| *v == word.as_bytes()));
    }
}
