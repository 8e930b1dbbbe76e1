use std::fmt;

use thiserror::Error;

/// Why a key was refused by [`Trie::insert`](crate::Trie::insert).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blank {
    /// No key was given at all.
    Missing,
    /// The key has no symbols.
    Empty,
}

impl fmt::Display for Blank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Blank::Missing => f.write_str("missing"),
            Blank::Empty => f.write_str("empty"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unable to insert a key which is {0}")]
    InvalidKey(Blank),
    #[error("The symbol: '{0}' is not a lowercase letter a-z")]
    InvalidSymbol(char),
    #[error("The index: '{index}' is out of range for a sequence of size: '{len}'")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("There is no vertex with index: '{index}' in a graph of {count} vertices")]
    NoVertex { index: usize, count: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
