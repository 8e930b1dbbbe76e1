use std::fmt;

use itertools::Itertools;

use crate::{Error, Result};

/// Ordered, growable, indexable sequence.
///
/// Values keep the order they were appended in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Seq<T> {
    items: Vec<T>,
}

impl<T> Default for Seq<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Seq<T> {
    pub fn new() -> Self {
        Seq::default()
    }

    /// Adds a value to the end of the sequence.
    pub fn append(&mut self, value: T) {
        self.items.push(value);
    }

    /// Returns the value at `index`, failing when it lies outside `[0, len)`.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.items.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.items.len(),
        })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.items.len();
        self.items
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: fmt::Display> fmt::Display for Seq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.items.iter().join(", "))
    }
}

impl<T> FromIterator<T> for Seq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Seq<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Seq<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Seq<T> {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.items)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn append_keeps_order() {
        let mut seq = Seq::new();
        assert!(seq.is_empty());
        for value in ["b", "a", "c"] {
            seq.append(value);
        }
        assert_eq!(seq.len(), 3);
        assert!(!seq.is_empty());
        assert_eq!(seq.as_slice(), &["b", "a", "c"]);
    }

    #[test]
    fn grows() {
        let mut seq = Seq::new();
        for value in 0..100 {
            seq.append(value);
        }
        assert_eq!(seq.len(), 100);
        assert_eq!(seq.get(99), Ok(&99));
    }

    #[test]
    fn get_out_of_range() {
        let seq: Seq<u8> = [1, 2].into_iter().collect();
        assert_eq!(seq.get(1), Ok(&2));
        assert_eq!(seq.get(2), Err(Error::IndexOutOfRange { index: 2, len: 2 }));
        assert_eq!(
            Seq::<u8>::new().get(0),
            Err(Error::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn display() {
        let seq: Seq<&str> = ["app", "apple"].into_iter().collect();
        assert_eq!(seq.to_string(), "[app, apple]");
        assert_eq!(Seq::<&str>::new().to_string(), "[]");
    }
}
