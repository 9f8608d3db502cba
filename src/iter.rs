use crate::kdtree::Node;
use crate::types::{Axis, Content};

/// Depth-first iterator over the `(label, point)` pairs stored in a tree.
/// Yield order is an implementation detail; callers get "arbitrary order".
#[derive(Debug)]
pub(crate) struct TreeIter<'a, A, T> {
    stack: Vec<&'a Node<A, T>>,
}

impl<'a, A, T> TreeIter<'a, A, T> {
    pub(crate) fn new(root: Option<&'a Node<A, T>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, A: Axis, T: Content> Iterator for TreeIter<'a, A, T> {
    type Item = (T, &'a [A]);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Some(left) = node.left.as_deref() {
            self.stack.push(left);
        }
        if let Some(right) = node.right.as_deref() {
            self.stack.push(right);
        }
        Some((node.item, &node.point[..]))
    }
}
