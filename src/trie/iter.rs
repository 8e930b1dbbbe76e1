use smallvec::SmallVec;

use super::{keys, node::Node};

#[derive(Debug, Clone, Copy)]
struct Frame<'a> {
    node: &'a Node,
    /// Next child slot to descend into.
    cursor: usize,
}

/// Stored keys under a node, in lexicographic order.
///
/// The walk is pre-order with an explicit stack, so key length never touches the call stack.
/// Every frame above the base owns exactly one symbol at the end of `buffer`.
#[derive(Debug, Clone)]
#[must_use]
pub struct Completions<'a> {
    stack: SmallVec<[Frame<'a>; 16]>,
    buffer: String,
    pending: bool,
}

impl<'a> Completions<'a> {
    pub(super) fn new(node: &'a Node, prefix: &str) -> Self {
        let mut stack = SmallVec::new();
        stack.push(Frame { node, cursor: 0 });
        Self {
            stack,
            buffer: prefix.to_owned(),
            pending: node.terminal,
        }
    }

    pub(super) fn empty() -> Self {
        Self {
            stack: SmallVec::new(),
            buffer: String::new(),
            pending: false,
        }
    }
}

impl<'a> Iterator for Completions<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if std::mem::take(&mut self.pending) {
            return Some(self.buffer.clone());
        }
        loop {
            let frame = self.stack.last_mut()?;
            let node = frame.node;
            match node.next_child(frame.cursor) {
                Some((slot, child)) => {
                    frame.cursor = slot + 1;
                    self.buffer.push(keys::symbol(slot));
                    self.stack.push(Frame {
                        node: child,
                        cursor: 0,
                    });
                    if child.terminal {
                        return Some(self.buffer.clone());
                    }
                }
                None => {
                    self.stack.pop();
                    if !self.stack.is_empty() {
                        self.buffer.pop();
                    }
                }
            }
        }
    }
}

impl<'a> std::iter::FusedIterator for Completions<'a> {}
