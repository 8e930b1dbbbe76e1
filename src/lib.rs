//! Stores lowercase words and finds them again by prefix.

mod error;
pub mod graph;
pub mod seq;
pub mod trie;

pub use error::{Blank, Error, Result};
pub use graph::Graph;
pub use seq::Seq;
pub use trie::{Key, Stats, Trie};
