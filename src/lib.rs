//! An arena-allocated S-expression tree: parsing, navigation, in-place
//! mutation, and canonical-text serialization.
//!
//! Every node allocated while parsing one input lives in that `Tree`'s
//! arena and is addressed by a compact [`Handle`], not a chased pointer.
//! Atom byte strings are interned once per `Tree`, so repeated tokens
//! (common in record-like data) cost one reference per occurrence rather
//! than a fresh allocation.
//!
//! ```
//! use sexpren::parse;
//!
//! let tree = parse("(player (pos 1 2) (vel 3 4))").unwrap();
//! let player = tree.head().unwrap();
//! let pos = player.child_by_key(&tree, "pos").unwrap();
//! assert_eq!(sexpren::serialize_node(&tree, pos), b"(pos 1 2)");
//! ```

mod alloc;
mod arena;
mod config;
mod error;
mod handle;
mod intern;
mod iter;
mod node;
mod parser;
mod serializer;
mod tokenizer;
mod tree;

pub use config::ParserConfig;
pub use error::{Result, SexpError, SyntaxError};
pub use handle::Handle;
pub use iter::{Children, Tail};
pub use node::Node;
pub use serializer::{serialize, serialize_node};
pub use tree::Tree;

/// Parses canonical S-expression text into a [`Tree`], using the default
/// [`ParserConfig`].
pub fn parse(input: impl AsRef<[u8]>) -> Result<Tree> {
    parse_with(input, &ParserConfig::default())
}

/// Parses canonical S-expression text into a [`Tree`] with explicit parser
/// tunables (nesting ceiling, capacity hints).
pub fn parse_with(input: impl AsRef<[u8]>, config: &ParserConfig) -> Result<Tree> {
    parser::parse_into(input.as_ref(), config)
}
