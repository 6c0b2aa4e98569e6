//! A BST that is only balanced when asked to be. Construction always produces a minimal-height
//! tree but `insert` and `delete` never rotate or rebuild anything, so a tree can degrade into a
//! list. Calling [`Tree::rebalance`] rebuilds it into the same shape construction would produce.
//!
//! # Examples
//!
//! ```
//! use bst::tree::Tree;
//!
//! let mut tree = Tree::new(vec![1, 7, 4, 23, 8, 9, 4, 3, 5, 7, 9, 67, 6345, 324]);
//!
//! // Duplicates are dropped and the keys come back sorted.
//! assert_eq!(
//!     tree.in_order().copied().collect::<Vec<_>>(),
//!     [1, 3, 4, 5, 7, 8, 9, 23, 67, 324, 6345]
//! );
//! assert_eq!(tree.height(), 4);
//! assert!(tree.is_balanced());
//!
//! // Skewed inserts unbalance the tree...
//! for key in 6346..6350 {
//!     tree.insert(key);
//! }
//! assert!(!tree.is_balanced());
//!
//! // ...until we explicitly rebalance it.
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter;

use crate::traverse::{InOrder, IntoIter, LevelOrder, PostOrder, PostOrderNodes, PreOrder};

/// An owned, possibly empty, subtree.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// A Binary Search Tree of unique keys. This can be used for inserting, finding, and deleting
/// keys as well as traversing them in several orders.
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

/// A `Node` holds a key and owns its two (possibly empty) subtrees.
pub struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self {
            root: None,
            len: 0,
        }
    }
}

impl<K> Drop for Tree<K> {
    // Dropping the root directly would recurse once per level which overflows the stack on
    // degenerate trees. Detach every node's children before it goes so each drop is shallow.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<K> Clone for Tree<K>
where
    K: Clone + Ord,
{
    /// Re-inserting keys in pre-order visits every parent before its children so the clone has
    /// exactly the same shape as `self`.
    fn clone(&self) -> Self {
        let mut tree = Self::default();
        for key in self.pre_order() {
            tree.insert(key.clone());
        }
        tree
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.in_order()).finish()
    }
}

impl<K> iter::FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(keys: I) -> Self {
        Self::new(keys)
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, keys: I) {
        for key in keys {
            self.insert(key);
        }
    }
}

impl<K> IntoIterator for Tree<K> {
    type Item = K;
    type IntoIter = IntoIter<K>;

    /// Consumes the tree, yielding its keys in ascending order.
    fn into_iter(mut self) -> Self::IntoIter {
        let len = std::mem::take(&mut self.len);
        IntoIter::new(self.root.take(), len)
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = InOrder<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}

impl<K> Tree<K> {
    /// Builds a balanced tree from `keys`. Duplicate keys are dropped and the rest are sorted
    /// before being split into a tree of minimal height.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::tree::Tree;
    ///
    /// let tree = Tree::new(vec![3, 1, 2, 3, 1]);
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.root().map(|n| *n.key()), Some(2));
    /// ```
    pub fn new<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Ord,
    {
        let mut keys: Vec<K> = keys.into_iter().collect();
        keys.sort_unstable();
        keys.dedup();

        let tree = Self::from_sorted(keys.into_iter());
        if log::log_enabled!(log::Level::Debug) {
            log::debug!("built tree of {} keys, height {}", tree.len, tree.height());
        }
        tree
    }

    /// Builds a balanced tree from an iterator that yields strictly ascending keys and knows
    /// exactly how many it has left.
    fn from_sorted<I>(mut keys: I) -> Self
    where
        I: ExactSizeIterator<Item = K>,
    {
        let len = keys.len();
        Self {
            root: build_tree(&mut keys, len),
            len,
        }
    }

    /// The root of the tree or `None` if the tree is empty.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// The number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `key` into the tree, returning whether it was inserted. Inserting a key that is
    /// already present does nothing. The tree is never rebalanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::tree::Tree;
    ///
    /// let mut tree = Tree::default();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let slot = locate(&mut self.root, &key);
        if slot.is_some() {
            log::trace!("ignoring duplicate key");
            return false;
        }

        *slot = Some(Box::new(Node::new(key)));
        self.len += 1;
        true
    }

    /// Deletes `key` from the tree, returning whether it was present. A node with two children
    /// takes over the key of its in-order successor and the successor's node is removed instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::tree::Tree;
    ///
    /// let mut tree = Tree::new(vec![1, 2, 3]);
    ///
    /// assert!(tree.delete(&2));
    /// assert!(!tree.delete(&2));
    /// assert_eq!(tree.in_order().collect::<Vec<_>>(), [&1, &3]);
    /// ```
    pub fn delete(&mut self, key: &K) -> bool
    where
        K: Ord,
    {
        let slot = locate(&mut self.root, key);
        let mut node = match slot.take() {
            Some(node) => node,
            None => {
                log::trace!("key to delete not found");
                return false;
            }
        };

        *slot = match (node.left.take(), node.right.take()) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(left), Some(right)) => {
                node.left = Some(left);
                node.right = Some(right);

                // The successor is the leftmost node of the right subtree so it has no left child
                // and its right child can take its place.
                let successor = min_link(&mut node.right);
                if let Some(successor_node) = successor.take() {
                    let Node { key, right, .. } = *successor_node;
                    *successor = right;
                    node.key = key;
                }

                if cfg!(debug_assertions) {
                    if let Some(left) = node.left() {
                        assert!(left.find_max_node().key < node.key);
                    }
                    if let Some(right) = node.right() {
                        assert!(node.key < right.find_min_node().key);
                    }
                }
                Some(node)
            }
        };
        self.len -= 1;
        true
    }

    /// Finds the node holding `key`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::tree::Tree;
    ///
    /// let tree = Tree::new(vec![1, 2, 3]);
    ///
    /// assert_eq!(tree.find(&3).map(|n| n.key()), Some(&3));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, key: &K) -> Option<&Node<K>>
    where
        K: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    /// Whether `key` is in the tree.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.find(key).is_some()
    }

    /// The smallest key in the tree.
    pub fn min(&self) -> Option<&K> {
        self.root().map(|root| &root.find_min_node().key)
    }

    /// The largest key in the tree.
    pub fn max(&self) -> Option<&K> {
        self.root().map(|root| &root.find_max_node().key)
    }

    /// Iterates over the keys breadth first: every key at depth `d` comes before any key at depth
    /// `d + 1` and keys at the same depth come left to right.
    pub fn level_order(&self) -> LevelOrder<'_, K> {
        LevelOrder::new(self.root())
    }

    /// Iterates over the keys visiting each node before its left and then its right subtree.
    pub fn pre_order(&self) -> PreOrder<'_, K> {
        PreOrder::new(self.root())
    }

    /// Iterates over the keys in ascending order.
    pub fn in_order(&self) -> InOrder<'_, K> {
        InOrder::new(self.root())
    }

    /// Iterates over the keys visiting each node after its left and then its right subtree.
    pub fn post_order(&self) -> PostOrder<'_, K> {
        PostOrder::new(self.root())
    }

    /// Alias for [`Tree::in_order`].
    pub fn iter(&self) -> InOrder<'_, K> {
        self.in_order()
    }

    /// The number of nodes on the longest path from the root down to a leaf. The empty tree has
    /// height 0.
    pub fn height(&self) -> usize {
        self.root().map_or(0, Node::height)
    }

    /// The largest number of nodes at any single depth. The empty tree has width 0.
    pub fn width(&self) -> usize {
        self.root().map_or(0, Node::width)
    }

    /// Whether, for every node, the heights of its two subtrees differ by at most one. The empty
    /// tree is balanced.
    pub fn is_balanced(&self) -> bool {
        self.root().map_or(true, Node::is_balanced)
    }

    /// Rebuilds the whole tree into minimal height. The keys and their order are unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::tree::Tree;
    ///
    /// let mut tree = Tree::default();
    /// tree.extend(1..=7);
    /// assert_eq!(tree.height(), 7);
    ///
    /// tree.rebalance();
    /// assert_eq!(tree.height(), 3);
    /// assert_eq!(tree.root().map(|n| *n.key()), Some(4));
    /// ```
    pub fn rebalance(&mut self) {
        let keys = std::mem::take(self).into_iter();
        *self = Self::from_sorted(keys);
        if log::log_enabled!(log::Level::Debug) {
            log::debug!("rebalanced tree of {} keys, height {}", self.len, self.height());
        }
    }
}

impl<K> Node<K> {
    fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The root of the left subtree, holding only smaller keys.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, holding only larger keys.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The node with the smallest key in this subtree, found by descending left.
    pub fn find_min_node(&self) -> &Self {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        node
    }

    /// The node with the largest key in this subtree, found by descending right.
    pub fn find_max_node(&self) -> &Self {
        let mut node = self;
        while let Some(right) = node.right() {
            node = right;
        }
        node
    }

    /// Breadth first traversal of this subtree.
    pub fn level_order(&self) -> LevelOrder<'_, K> {
        LevelOrder::new(Some(self))
    }

    /// Pre-order traversal of this subtree.
    pub fn pre_order(&self) -> PreOrder<'_, K> {
        PreOrder::new(Some(self))
    }

    /// In-order traversal of this subtree.
    pub fn in_order(&self) -> InOrder<'_, K> {
        InOrder::new(Some(self))
    }

    /// Post-order traversal of this subtree.
    pub fn post_order(&self) -> PostOrder<'_, K> {
        PostOrder::new(Some(self))
    }

    /// The height of this subtree. A leaf has height 1.
    pub fn height(&self) -> usize {
        self.levels().count()
    }

    /// The largest number of nodes at any depth of this subtree.
    pub fn width(&self) -> usize {
        self.levels().map(|level| level.len()).max().unwrap_or(0)
    }

    /// Whether every node in this subtree has children whose heights differ by at most one.
    ///
    /// Heights are computed bottom-up in a single post-order pass: by the time a node is visited
    /// the heights of its present children are on top of `heights`, right above left.
    pub fn is_balanced(&self) -> bool {
        let mut heights: Vec<usize> = Vec::new();
        for node in PostOrderNodes::new(Some(self)) {
            let right = node.right.as_ref().and_then(|_| heights.pop()).unwrap_or(0);
            let left = node.left.as_ref().and_then(|_| heights.pop()).unwrap_or(0);
            if left.abs_diff(right) > 1 {
                return false;
            }
            heights.push(left.max(right) + 1);
        }
        true
    }

    /// Iterates over the depths of this subtree, yielding the nodes at each depth from left to
    /// right.
    fn levels(&self) -> impl Iterator<Item = Vec<&Self>> {
        iter::successors(Some(vec![self]), |level| {
            let next: Vec<&Self> = level
                .iter()
                .flat_map(|node| node.left().into_iter().chain(node.right()))
                .collect();
            if next.is_empty() {
                None
            } else {
                Some(next)
            }
        })
    }
}

/// Splits the next `len` keys into a tree. The key at `floor((len - 1) / 2)` becomes the root so
/// when the range has an even size the extra key goes to the right subtree.
///
/// Keys are pulled in ascending order: the whole left subtree is built before its root key is
/// taken, then the right subtree.
fn build_tree<K, I>(keys: &mut I, len: usize) -> Link<K>
where
    I: Iterator<Item = K>,
{
    if len == 0 {
        return None;
    }

    let mid = (len - 1) / 2;
    let left = build_tree(keys, mid);
    let key = keys.next()?;
    let right = build_tree(keys, len - mid - 1);

    Some(Box::new(Node { key, left, right }))
}

/// Descends from `link` to the slot holding `key`, or to the empty slot where `key` would be
/// linked if it isn't in the tree.
fn locate<'a, K>(mut link: &'a mut Link<K>, key: &K) -> &'a mut Link<K>
where
    K: Ord,
{
    loop {
        let ordering = link.as_ref().map(|node| key.cmp(&node.key));
        // Moving `link` into the match, rather than reborrowing it, lets either arm hand out the
        // full `'a` borrow.
        link = match (ordering, link) {
            (Some(Ordering::Less), Some(node)) => &mut node.left,
            (Some(Ordering::Greater), Some(node)) => &mut node.right,
            (_, link) => return link,
        };
    }
}

/// Descends left from `link` to the slot holding the smallest key of the subtree.
fn min_link<K>(mut link: &mut Link<K>) -> &mut Link<K> {
    loop {
        let has_left = link.as_ref().map_or(false, |node| node.left.is_some());
        link = match (has_left, link) {
            (true, Some(node)) => &mut node.left,
            (_, link) => return link,
        };
    }
}
