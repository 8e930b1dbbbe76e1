use super::CHILDREN;
use crate::{Error, Result};

const FIRST: char = 'a';
const LAST: char = 'z';
const _: () = assert!(
    (LAST as usize - FIRST as usize + 1) == CHILDREN,
    "Every letter of the alphabet must have exactly one child slot"
);

/// Anything that can be looked up in, or inserted into, a [`Trie`](super::Trie).
///
/// `None` stands in for a missing key.
pub trait Key {
    fn as_key(&self) -> Option<&str>;
}

impl Key for str {
    fn as_key(&self) -> Option<&str> {
        Some(self)
    }
}

impl Key for String {
    fn as_key(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<K: Key + ?Sized> Key for &K {
    fn as_key(&self) -> Option<&str> {
        (**self).as_key()
    }
}

impl<K: Key> Key for Option<K> {
    fn as_key(&self) -> Option<&str> {
        self.as_ref().and_then(Key::as_key)
    }
}

/// Child slot of `symbol`.
pub(super) fn slot(symbol: char) -> Result<usize> {
    if symbol.is_ascii_lowercase() {
        Ok(symbol as usize - FIRST as usize)
    } else {
        Err(Error::InvalidSymbol(symbol))
    }
}

/// Inverse of [`slot`].
pub(super) fn symbol(slot: usize) -> char {
    debug_assert!(slot < CHILDREN, "Slot {slot} is outside the alphabet");
    (FIRST as u8 + slot as u8) as char
}
