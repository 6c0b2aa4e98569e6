//! This crate exposes a Binary Search Tree (BST) that is balanced on
//! construction and on request, but never behind the caller's back.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! will sometimes have child `Node`s. The most important invariants of a
//! BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for keys in the tree takes `O(height)` (where `height` is the
//! number of `Node`s on the longest path from the root `Node` to a leaf
//! `Node`). Building a tree from a sorted sequence by repeatedly picking the
//! middle key as the root limits the height to `floor(lg N) + 1`.
//!
//! ## Explicit balancing
//!
//! [`tree::Tree`] does not rotate on `insert` or `delete`, so each mutation
//! costs `O(height)` and the height can drift far from `lg N`. Use
//! [`tree::Tree::is_balanced`] to detect that and [`tree::Tree::rebalance`]
//! to rebuild the tree from its in-order keys.
//!
//! ## Traversals
//!
//! [`traverse`] provides level, pre, in and post order iterators. None of
//! them recurse so they work on arbitrarily tall trees. The `Display`
//! implementation draws the tree with box-drawing characters.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod pretty;
pub mod traverse;
pub mod tree;
