//! A single-pass, allocation-free byte tokenizer. Operates on raw bytes
//! (not `char`s) so offsets reported in errors line up with the input as
//! the caller sees it, and so the tokenizer never has to validate UTF-8
//! it doesn't otherwise care about.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenKind {
    LParen,
    RParen,
    Atom,
    End,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct LexToken {
    pub(crate) kind: TokenKind,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

pub(crate) struct Tokenizer<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    pub(crate) fn new(input: &'a [u8]) -> Self {
        Tokenizer { input, pos: 0 }
    }

    fn is_whitespace(b: u8) -> bool {
        matches!(b, b' ' | b'\t' | b'\r' | b'\n')
    }

    fn is_delimiter(b: u8) -> bool {
        b == b'(' || b == b')' || Self::is_whitespace(b)
    }

    pub(crate) fn next_token(&mut self) -> LexToken {
        while let Some(&b) = self.input.get(self.pos) {
            if Self::is_whitespace(b) {
                self.pos += 1;
            } else {
                break;
            }
        }

        let start = self.pos;
        match self.input.get(self.pos) {
            None => LexToken { kind: TokenKind::End, start, end: start },
            Some(b'(') => {
                self.pos += 1;
                LexToken { kind: TokenKind::LParen, start, end: self.pos }
            }
            Some(b')') => {
                self.pos += 1;
                LexToken { kind: TokenKind::RParen, start, end: self.pos }
            }
            Some(_) => {
                while let Some(&b) = self.input.get(self.pos) {
                    if Self::is_delimiter(b) {
                        break;
                    }
                    self.pos += 1;
                }
                LexToken { kind: TokenKind::Atom, start, end: self.pos }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn collect(input: &str) -> Vec<(TokenKind, &str)> {
        let mut tokenizer = Tokenizer::new(input.as_bytes());
        let mut out = Vec::new();
        loop {
            let token = tokenizer.next_token();
            let text = &input[token.start..token.end];
            let kind = token.kind;
            out.push((kind, text));
            if kind == TokenKind::End {
                break;
            }
        }
        out
    }

    #[test]
    fn splits_parens_and_atoms() {
        let tokens = collect("(a (b c))");
        assert_eq!(
            tokens,
            vec![
                (TokenKind::LParen, "("),
                (TokenKind::Atom, "a"),
                (TokenKind::LParen, "("),
                (TokenKind::Atom, "b"),
                (TokenKind::Atom, "c"),
                (TokenKind::RParen, ")"),
                (TokenKind::RParen, ")"),
                (TokenKind::End, ""),
            ]
        );
    }

    #[test]
    fn skips_surrounding_whitespace() {
        let tokens = collect("  a   b  ");
        assert_eq!(
            tokens,
            vec![(TokenKind::Atom, "a"), (TokenKind::Atom, "b"), (TokenKind::End, "")]
        );
    }

    #[test]
    fn empty_input_is_just_end() {
        assert_eq!(collect(""), vec![(TokenKind::End, "")]);
    }
}
