//! Atom interning: dedupes the byte strings backing `Atom` nodes so that
//! repeated tokens share one allocation.
use std::collections::HashMap;
use std::rc::Rc;

/// A dense handle into a [`Tree`](crate::Tree)'s intern table. Opaque outside
/// the crate; atom bytes are reached through [`Interner::lookup`].
#[derive(Clone, Copy, Eq, PartialEq, Debug, Hash)]
pub(crate) struct AtomHandle(u32);

#[derive(Clone, Debug, Default)]
pub(crate) struct Interner {
    index: HashMap<Rc<[u8]>, AtomHandle>,
    values: Vec<Rc<[u8]>>,
}

impl Interner {
    pub(crate) fn new() -> Self { Self::default() }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Interner {
            index: HashMap::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    /// Interns `bytes`, returning the existing handle if this value has
    /// been seen before in this tree.
    pub(crate) fn intern(&mut self, bytes: &[u8]) -> AtomHandle {
        if let Some(&handle) = self.index.get(bytes) {
            return handle;
        }
        let owned: Rc<[u8]> = Rc::from(bytes);
        let handle = AtomHandle(self.values.len() as u32);
        self.values.push(Rc::clone(&owned));
        self.index.insert(owned, handle);
        handle
    }

    pub(crate) fn lookup(&self, handle: AtomHandle) -> &[u8] {
        &self.values[handle.0 as usize]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn repeated_atoms_share_a_handle() {
        let mut interner = Interner::new();
        let a = interner.intern(b"foo");
        let b = interner.intern(b"bar");
        let c = interner.intern(b"foo");
        assert_eq!(a, c);
        assert_ne!(a, b);
        assert_eq!(interner.lookup(a), b"foo");
        assert_eq!(interner.lookup(b), b"bar");
    }
}
