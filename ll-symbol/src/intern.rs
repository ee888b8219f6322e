//! Utility for string interning.

use std::cell::Cell;

use elsa::FrozenIndexSet;

/// Collects strings, handing out a stable index for each distinct one.
pub struct StringInterner {
    set: FrozenIndexSet<String>,
    len: Cell<usize>,
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl StringInterner {
    /// Creates a new `StringInterner`.
    pub fn new() -> Self {
        StringInterner {
            set: FrozenIndexSet::new(),
            len: Cell::new(0),
        }
    }

    /// Retrieves an interned value, or inserts a new entry
    /// if it does not exist.
    pub fn get_or_intern<T>(&self, value: T) -> usize
    where
        T: AsRef<str>,
    {
        // TODO use Entry in case the standard Entry API gets improved
        // (here to avoid premature allocation or double lookup)
        let (index, _) = self.set.insert_full(value.as_ref().to_string());
        if index >= self.len.get() {
            self.len.set(index + 1);
        }
        index
    }

    /// Looks up an already interned value.
    pub fn get<T>(&self, value: T) -> Option<usize>
    where
        T: AsRef<str>,
    {
        self.set.get_full(value.as_ref()).map(|(i, _r)| i)
    }

    /// Returns the string interned at the given index.
    pub fn resolve(&self, index: usize) -> Option<&str> {
        self.set.get_index(index)
    }

    /// Returns the number of interned strings.
    pub fn len(&self) -> usize {
        self.len.get()
    }

    /// Reports whether no strings were interned yet.
    pub fn is_empty(&self) -> bool {
        self.len.get() == 0
    }
}
