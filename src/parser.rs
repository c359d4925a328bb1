//! A non-recursive, explicit-stack parser. Nesting depth is bounded by
//! [`ParserConfig::max_depth`] rather than the call stack, so a
//! maliciously (or accidentally) deep input fails with
//! [`SyntaxError::TooDeep`] instead of overflowing the stack.
use crate::config::ParserConfig;
use crate::error::{Result, SyntaxError};
use crate::handle::Handle;
use crate::tokenizer::{TokenKind, Tokenizer};
use crate::tree::Tree;

pub(crate) fn parse_into(input: &[u8], config: &ParserConfig) -> Result<Tree> {
    let mut tree = Tree::empty(config);
    let root = tree.root();
    let mut stack: Vec<Handle> = vec![root];
    let mut tokenizer = Tokenizer::new(input);

    loop {
        let token = tokenizer.next_token();
        match token.kind {
            TokenKind::LParen => {
                if stack.len() >= config.max_depth {
                    return Err(SyntaxError::TooDeep.into());
                }
                let parent = *stack.last().expect("stack always has the root");
                let list = tree.allocate_list();
                tree.link_child(parent, list);
                stack.push(list);
            }
            TokenKind::RParen => {
                if stack.len() <= 1 {
                    return Err(SyntaxError::UnexpectedClose { offset: token.start }.into());
                }
                stack.pop();
            }
            TokenKind::Atom => {
                let parent = *stack.last().expect("stack always has the root");
                let bytes = &input[token.start..token.end];
                let atom = tree.allocate_atom(bytes);
                tree.link_child(parent, atom);
            }
            TokenKind::End => {
                if stack.len() > 1 {
                    return Err(SyntaxError::UnclosedList.into());
                }
                break;
            }
        }
    }

    log::debug!("parsed {} byte(s) into {} node(s)", input.len(), tree.node_count());
    Ok(tree)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::parse;

    #[test]
    fn parses_flat_list() {
        let tree = parse("(a b c)").unwrap();
        assert_eq!(tree.len(), 1);
        let list = tree.head().unwrap();
        assert_eq!(list.len(&tree), 3);
    }

    #[test]
    fn parses_nested_list() {
        let tree = parse("(a (b c) d)").unwrap();
        let list = tree.head().unwrap();
        assert_eq!(list.len(&tree), 3);
        let nested = list.child(&tree, 1).unwrap();
        assert!(!nested.is_atom(&tree));
        assert_eq!(nested.len(&tree), 2);
    }

    #[test]
    fn empty_input_parses_to_empty_tree() {
        let tree = parse("").unwrap();
        assert_eq!(tree.len(), 0);
    }

    #[test]
    fn stray_close_paren_is_a_syntax_error() {
        let err = parse(")").unwrap_err();
        assert!(matches!(err, crate::SexpError::Syntax(SyntaxError::UnexpectedClose { offset: 0 })));
    }

    #[test]
    fn unclosed_list_is_a_syntax_error() {
        let err = parse("(a (b c)").unwrap_err();
        assert!(matches!(err, crate::SexpError::Syntax(SyntaxError::UnclosedList)));
    }

    #[test]
    fn exceeding_max_depth_is_a_syntax_error() {
        let config = ParserConfig { max_depth: 2, ..ParserConfig::default() };
        let err = crate::parse_with("((a))", &config).unwrap_err();
        assert!(matches!(err, crate::SexpError::Syntax(SyntaxError::TooDeep)));
    }
}
