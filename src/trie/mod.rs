pub mod iter;
mod keys;
mod node;
mod stats;

pub use iter::Completions;
pub use keys::Key;
pub use stats::Stats;

use crate::{Blank, Error, Result, Seq};
use node::Node;

const CHILDREN: usize = 26;

/// Prefix tree over lowercase ASCII words.
///
/// Keys are non-empty strings of `a..=z`. Nodes are only ever added, never removed.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Trie {
    root: Node,
    len: usize,
}

impl Trie {
    pub fn new() -> Self {
        Trie::default()
    }

    /// Builds a trie from `keys`, stopping at the first key that cannot be inserted.
    pub fn from_keys<K: Key>(keys: impl IntoIterator<Item = K>) -> Result<Self> {
        let mut trie = Trie::new();
        for key in keys {
            trie.insert(&key)?;
        }
        Ok(trie)
    }

    /// Stores `key`, returning whether it was new.
    ///
    /// Nodes created before an invalid symbol stay in the tree.
    pub fn insert<K: Key + ?Sized>(&mut self, key: &K) -> Result<bool> {
        let key = match key.as_key() {
            None => return Err(Error::InvalidKey(Blank::Missing)),
            Some("") => return Err(Error::InvalidKey(Blank::Empty)),
            Some(key) => key,
        };

        let mut current_node = &mut self.root;
        for symbol in key.chars() {
            current_node = current_node.child_or_create(symbol)?;
        }
        let new = !std::mem::replace(&mut current_node.terminal, true);
        if new {
            self.len += 1;
        }
        Ok(new)
    }

    /// Whether `key` was inserted. A missing or empty key is never contained.
    pub fn contains<K: Key + ?Sized>(&self, key: &K) -> Result<bool> {
        Ok(self.find(key)?.is_some_and(|node| node.terminal))
    }

    /// Whether any stored key begins with `prefix`.
    pub fn starts_with<K: Key + ?Sized>(&self, prefix: &K) -> Result<bool> {
        Ok(self.find(prefix)?.is_some())
    }

    /// Every stored key beginning with `prefix`, in lexicographic order.
    pub fn collect_by_prefix<K: Key + ?Sized>(&self, prefix: &K) -> Result<Seq<String>> {
        Ok(self.completions(prefix)?.collect())
    }

    /// Lazy form of [`Trie::collect_by_prefix`].
    pub fn completions<K: Key + ?Sized>(&self, prefix: &K) -> Result<Completions<'_>> {
        Ok(match (prefix.as_key(), self.find(prefix)?) {
            (Some(prefix), Some(node)) => Completions::new(node, prefix),
            _ => Completions::empty(),
        })
    }

    /// Every stored key, in lexicographic order.
    pub fn keys(&self) -> Completions<'_> {
        Completions::new(&self.root, "")
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn stats(&self) -> Stats {
        Stats::from(self)
    }

    /// Walks to the node spelling `key`.
    ///
    /// Stops at the first absent child, so symbols past that point are never checked.
    fn find<K: Key + ?Sized>(&self, key: &K) -> Result<Option<&Node>> {
        let key = match key.as_key() {
            None | Some("") => return Ok(None),
            Some(key) => key,
        };

        let mut current_node = &self.root;
        for symbol in key.chars() {
            match current_node.child(symbol)? {
                Some(next) => current_node = next,
                None => return Ok(None),
            }
        }
        Ok(Some(current_node))
    }
}
