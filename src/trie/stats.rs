use super::Trie;
#[cfg(feature = "serde")]
use serde::Serialize;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Stats {
    /// Number of distinct stored keys
    pub keys: usize,
    /// Number of allocated nodes, root included
    pub nodes: usize,
    /// Total number of symbols over all stored keys
    pub symbols: usize,
    /// Length of the longest stored key
    pub depth: usize,
}

impl Stats {
    fn new(trie: &Trie) -> Self {
        let mut stats = Self::default();

        let mut stack = vec![(&trie.root, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            stats.nodes += 1;
            if node.terminal {
                stats.keys += 1;
                stats.symbols += depth;
                stats.depth = stats.depth.max(depth);
            }
            stack.extend(node.children().map(|child| (child, depth + 1)));
        }

        stats
    }
}

impl<'a> From<&'a Trie> for Stats {
    fn from(trie: &'a Trie) -> Self {
        Self::new(trie)
    }
}
