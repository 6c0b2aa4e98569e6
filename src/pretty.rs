//! Renders a tree sideways with box-drawing characters, root on the left and larger keys above
//! smaller ones:
//!
//! ```text
//! │   ┌── 3
//! └── 2
//!     └── 1
//! ```

use std::fmt;

use crate::tree::{Node, Tree};

impl<K> fmt::Display for Tree<K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => fmt::Display::fmt(root, f),
            None => Ok(()),
        }
    }
}

impl<K> fmt::Display for Node<K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = vec![Frame::Expand {
            node: self,
            prefix: String::new(),
            is_left: true,
        }];

        // Popping right child, then the node's own line, then left child gives the
        // right-root-left order of the drawing.
        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Expand {
                    node,
                    prefix,
                    is_left,
                } => {
                    if let Some(left) = node.left() {
                        let indent = if is_left { "    " } else { "│   " };
                        stack.push(Frame::Expand {
                            node: left,
                            prefix: format!("{}{}", prefix, indent),
                            is_left: true,
                        });
                    }
                    let connector = if is_left { "└── " } else { "┌── " };
                    let line = format!("{}{}", prefix, connector);
                    if let Some(right) = node.right() {
                        let indent = if is_left { "│   " } else { "    " };
                        stack.push(Frame::Line { node, line });
                        stack.push(Frame::Expand {
                            node: right,
                            prefix: format!("{}{}", prefix, indent),
                            is_left: false,
                        });
                    } else {
                        writeln!(f, "{}{}", line, node.key)?;
                    }
                }
                Frame::Line { node, line } => writeln!(f, "{}{}", line, node.key)?,
            }
        }
        Ok(())
    }
}

enum Frame<'a, K> {
    /// A subtree that still has to be drawn.
    Expand {
        node: &'a Node<K>,
        prefix: String,
        is_left: bool,
    },
    /// A node whose right subtree has been drawn so its own line is next.
    Line { node: &'a Node<K>, line: String },
}
