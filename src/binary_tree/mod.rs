//! Trees which allow at most two children for their nodes, linked in both directions.
//!
//! The [Wikipedia article] on binary trees covers their use cases and specifics in more detail.
//!
//! Every node stores the keys of its left child, its right child and its parent. Either child may be absent independently of the other, so a node can have a right child without a left one. Child slots are write-once: nodes are only ever added, and an occupied slot cannot be replaced.
//!
//! Keeping the parent link is what allows the traversal methods of [`NodeRef`] to find the next node of an in-order, pre-order or post-order walk from the current node alone, without recursion or a stack.
//!
//! # Example
//! ```rust
//! use cinder::binary_tree::{BinaryTree, NodeRef};
//!
//! // Create the tree. The only thing we need for that is the data payload for the root node. The
//! // turbofish there is needed to state that we are using the default storage method instead of
//! // asking the compiler to infer it, which would be impossible.
//! let mut tree = BinaryTree::<_>::new(50);
//! let root = tree.root_key().clone();
//!
//! // Children are added through the key of their parent, and their own key is returned:
//! let two = tree.create_left_child(&root, 2).unwrap();
//! tree.create_left_child(&two, 1).unwrap();
//! let four = tree.create_right_child(&two, 4).unwrap();
//! tree.create_left_child(&four, 3).unwrap();
//! tree.create_right_child(&four, 5).unwrap();
//! let hundred = tree.create_right_child(&root, 100).unwrap();
//! let ninety = tree.create_left_child(&hundred, 90).unwrap();
//! tree.create_right_child(&hundred, 101).unwrap();
//! tree.create_left_child(&ninety, 89).unwrap();
//! tree.create_right_child(&ninety, 91).unwrap();
//!
//! // Node references navigate the finished tree:
//! let ninety: NodeRef<'_, _, _> = tree.node(&ninety).unwrap();
//! assert_eq!(ninety.parent().map(|n| *n.value()), Some(100));
//! assert_eq!(ninety.in_order_next().map(|n| *n.value()), Some(91));
//!
//! // A whole traversal is just repeated successor calls:
//! let mut current = tree.root().post_order_start();
//! let mut visited = Vec::new();
//! while let Some(node) = current {
//!     visited.push(*node.value());
//!     current = node.post_order_next();
//! }
//! assert_eq!(visited, [1, 3, 5, 4, 2, 89, 91, 90, 101, 100, 50]);
//! ```
//!
//! [Wikipedia article]: https://en.wikipedia.org/wiki/Binary_tree " "

mod base;
mod impl_traversable;
mod iter;
mod node;
mod node_ref;

#[cfg(test)]
mod tests;

pub use base::BinaryTree;
pub use iter::Nodes;
pub use node::Node;
pub use node_ref::NodeRef;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;
use arrayvec::ArrayVec;

/// A binary tree which uses a `Vec` as backing storage.
///
/// The default `BinaryTree` type already uses this when the `alloc` feature is enabled, so this is only provided for explicitness.
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub type VecBinaryTree<T> = BinaryTree<T, usize, Vec<Node<T, usize>>>;
/// A binary tree which stores its nodes inline using an `ArrayVec`, without requiring a memory allocator.
///
/// `A` is the backing array type, for example `[Node<T, usize>; 16]`; its length is the maximum number of nodes.
pub type ArrayBinaryTree<T, A> = BinaryTree<T, usize, ArrayVec<A>>;

/// Checks that the links of the tree are consistent in both directions. Used by tests.
#[cfg(test)]
pub(crate) fn assert_links<T, K, S>(tree: &BinaryTree<T, K, S>)
where
    T: core::fmt::Debug,
    S: crate::storage::Storage<Element = Node<T, K>, Key = K> + core::fmt::Debug,
    K: Clone + core::fmt::Debug + Eq,
{
    let mut count = 0;
    for node in tree.pre_order() {
        count += 1;
        for child in node.children() {
            assert_eq!(child.parent().as_ref(), Some(&node), "child does not link back to its parent");
        }
        match node.side() {
            Some(side) => {
                let parent = node.parent().expect("non-root node without parent");
                assert_eq!(parent.child(side).as_ref(), Some(&node));
            }
            None => assert!(node.is_root()),
        }
    }
    assert_eq!(count, tree.len(), "some nodes are not reachable from the root");
}

/// Builds the tree used throughout the tests:
///
/// ```text
///           50
///        /      \
///       2        100
///      / \      /   \
///     1   4    90   101
///        / \   / \
///       3   5 89  91
/// ```
#[cfg(test)]
pub(crate) fn example_tree() -> BinaryTree<u32> {
    let mut tree = BinaryTree::new(50);
    let root = *tree.root_key();
    let two = tree.create_left_child(&root, 2).expect("fresh slot");
    tree.create_left_child(&two, 1).expect("fresh slot");
    let four = tree.create_right_child(&two, 4).expect("fresh slot");
    tree.create_left_child(&four, 3).expect("fresh slot");
    tree.create_right_child(&four, 5).expect("fresh slot");
    let hundred = tree.create_right_child(&root, 100).expect("fresh slot");
    let ninety = tree.create_left_child(&hundred, 90).expect("fresh slot");
    tree.create_right_child(&hundred, 101).expect("fresh slot");
    tree.create_left_child(&ninety, 89).expect("fresh slot");
    tree.create_right_child(&ninety, 91).expect("fresh slot");
    tree
}

/// Finds the node holding `value`. Test trees never repeat values.
#[cfg(test)]
pub(crate) fn find<T, K, S>(tree: &BinaryTree<T, K, S>, value: T) -> NodeRef<'_, T, K, S>
where
    T: PartialEq + core::fmt::Debug,
    S: crate::storage::Storage<Element = Node<T, K>, Key = K>,
    K: Clone + core::fmt::Debug + Eq,
{
    tree.pre_order()
        .find(|node| *node.value() == value)
        .unwrap_or_else(|| panic!("no node holds {:?}", value))
}
