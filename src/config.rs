//! Parser tunables.

/// Knobs controlling the parser's resource usage. The defaults are
/// generous enough for hand-written input; tune `max_depth` down when
/// parsing untrusted input with tight stack/memory budgets, and the
/// capacity hints up when the input size is known ahead of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum list nesting depth. Exceeding it yields
    /// [`SyntaxError::TooDeep`](crate::SyntaxError::TooDeep).
    pub max_depth: usize,
    /// Hint for the number of nodes the arena should preallocate.
    pub node_capacity_hint: usize,
    /// Hint for the number of distinct atoms the intern table should
    /// preallocate.
    pub atom_capacity_hint: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            max_depth: 512,
            node_capacity_hint: 0,
            atom_capacity_hint: 0,
        }
    }
}
