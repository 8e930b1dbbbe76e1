use std::fmt;

use super::{CHILDREN, keys};
use crate::Result;

/// A single position in key space.
///
/// Dropping and comparing walk the subtree with a work stack, never the call stack.
#[derive(Default)]
pub(super) struct Node {
    pub(super) terminal: bool,
    children: [Option<Box<Node>>; CHILDREN],
}

impl Node {
    pub(super) fn child(&self, symbol: char) -> Result<Option<&Node>> {
        Ok(self.children[keys::slot(symbol)?].as_deref())
    }

    /// The only place nodes are allocated.
    pub(super) fn child_or_create(&mut self, symbol: char) -> Result<&mut Node> {
        let slot = &mut self.children[keys::slot(symbol)?];
        Ok(&mut **slot.get_or_insert_with(Box::default))
    }

    /// First present child at or after `from`, in ascending symbol order.
    pub(super) fn next_child(&self, from: usize) -> Option<(usize, &Node)> {
        self.children
            .iter()
            .enumerate()
            .skip(from)
            .find_map(|(slot, child)| child.as_deref().map(|child| (slot, child)))
    }

    pub(super) fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().flatten().map(|child| &**child)
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node>> =
            self.children.iter_mut().filter_map(Option::take).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.iter_mut().filter_map(Option::take));
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((left, right)) = stack.pop() {
            if left.terminal != right.terminal {
                return false;
            }
            for pair in left.children.iter().zip(&right.children) {
                match pair {
                    (Some(left), Some(right)) => stack.push((&**left, &**right)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }
        true
    }
}

impl Eq for Node {}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters: String = self
            .children
            .iter()
            .enumerate()
            .filter(|(_, child)| child.is_some())
            .map(|(slot, _)| keys::symbol(slot))
            .collect();
        f.debug_struct("Node")
            .field("terminal", &self.terminal)
            .field("children", &letters)
            .finish()
    }
}
