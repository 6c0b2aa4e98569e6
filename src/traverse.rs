//! Lazy traversals over a [`Tree`][crate::tree::Tree] or any of its subtrees.
//!
//! Every traversal keeps its own queue or stack instead of recursing so a degenerate tree can be
//! walked no matter how tall it is. To visit keys rather than collect them, fold over the
//! iterator:
//!
//! ```
//! use bst::tree::Tree;
//!
//! let tree = Tree::new(vec![2, 1, 3]);
//!
//! let mut visited = String::new();
//! tree.post_order().for_each(|key| visited.push_str(&key.to_string()));
//! assert_eq!(visited, "132");
//! ```

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::tree::{Link, Node};

/// Breadth first traversal. Created by [`Tree::level_order`][crate::tree::Tree::level_order].
pub struct LevelOrder<'a, K> {
    queue: VecDeque<&'a Node<K>>,
}

impl<'a, K> LevelOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, K> Iterator for LevelOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(&node.key)
    }
}

impl<K> FusedIterator for LevelOrder<'_, K> {}

/// Root, then left subtree, then right subtree. Created by
/// [`Tree::pre_order`][crate::tree::Tree::pre_order].
pub struct PreOrder<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> PreOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, K> Iterator for PreOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on first so the left subtree is popped, and finished, before it.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(&node.key)
    }
}

impl<K> FusedIterator for PreOrder<'_, K> {}

/// Left subtree, then root, then right subtree, i.e. ascending order. Created by
/// [`Tree::in_order`][crate::tree::Tree::in_order].
pub struct InOrder<'a, K> {
    /// Nodes whose left subtrees have been pushed but which haven't been yielded yet.
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> InOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, K> Iterator for InOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(&node.key)
    }
}

impl<K> FusedIterator for InOrder<'_, K> {}

/// Post-order traversal yielding the nodes themselves. Used wherever both children must be
/// handled before their parent, e.g. computing heights bottom-up.
pub(crate) struct PostOrderNodes<'a, K> {
    /// `true` once the node's children have been pushed above it.
    stack: Vec<(&'a Node<K>, bool)>,
}

impl<'a, K> PostOrderNodes<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            stack: root.map(|n| (n, false)).into_iter().collect(),
        }
    }
}

impl<'a, K> Iterator for PostOrderNodes<'a, K> {
    type Item = &'a Node<K>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.stack.pop()? {
                (node, true) => return Some(node),
                (node, false) => {
                    self.stack.push((node, true));
                    self.stack.extend(node.right().map(|n| (n, false)));
                    self.stack.extend(node.left().map(|n| (n, false)));
                }
            }
        }
    }
}

/// Left subtree, then right subtree, then root. Created by
/// [`Tree::post_order`][crate::tree::Tree::post_order].
pub struct PostOrder<'a, K> {
    nodes: PostOrderNodes<'a, K>,
}

impl<'a, K> PostOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            nodes: PostOrderNodes::new(root),
        }
    }
}

impl<'a, K> Iterator for PostOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next().map(|node| &node.key)
    }
}

impl<K> FusedIterator for PostOrder<'_, K> {}

/// Owning in-order traversal. Created by [`Tree::into_iter`][crate::tree::Tree]. Nodes are
/// dismantled as their keys are yielded so the tree is torn down without recursing.
pub struct IntoIter<K> {
    stack: Vec<Box<Node<K>>>,
    remaining: usize,
}

impl<K> IntoIter<K> {
    pub(crate) fn new(root: Link<K>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: Link<K>) {
        while let Some(mut node) = link {
            link = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<K> Drop for IntoIter<K> {
    fn drop(&mut self) {
        // Anything left on the stack has had its left child detached but may still own a deep
        // right subtree.
        while let Some(mut node) = self.stack.pop() {
            self.stack.extend(node.left.take());
            self.stack.extend(node.right.take());
        }
    }
}

impl<K> Iterator for IntoIter<K> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.stack.pop()?;
        self.push_left_spine(node.right.take());
        self.remaining -= 1;
        Some(node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for IntoIter<K> {}

impl<K> FusedIterator for IntoIter<K> {}
