use core::{
    fmt::{self, Debug, Formatter},
    iter::FusedIterator,
};
use crate::{
    storage::{Storage, DefaultStorage},
    traversal::{Order, Walk},
};
use super::{BinaryTree, Node, NodeRef};

/// An iterator over the nodes of a binary tree in one of the depth-first orders.
///
/// Created by [`BinaryTree::walk`] and its shorthands. Like the underlying [`Walk`], it only remembers the next node to visit.
///
/// [`BinaryTree::walk`]: struct.BinaryTree.html#method.walk " "
/// [`Walk`]: ../traversal/struct.Walk.html " "
pub struct Nodes<'a, T, K, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    tree: &'a BinaryTree<T, K, S>,
    walk: Walk<'a, BinaryTree<T, K, S>>,
}
impl<'a, T, K, S> Nodes<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline(always)]
    pub(super) fn from_walk(tree: &'a BinaryTree<T, K, S>, walk: Walk<'a, BinaryTree<T, K, S>>) -> Self {
        Self { tree, walk }
    }
    /// Continues a traversal of the node's tree in the specified order, starting with `node` itself.
    ///
    /// # Example
    /// ```rust
    /// # use cinder::{BinaryTree, Order, binary_tree::Nodes};
    /// let mut tree = BinaryTree::<_>::new(1);
    /// let root = tree.root_key().clone();
    /// let two = tree.create_left_child(&root, 2).unwrap();
    /// tree.create_right_child(&root, 3).unwrap();
    ///
    /// let two = tree.node(&two).unwrap();
    /// let rest: Vec<_> = Nodes::resume(two, Order::PreOrder).map(|n| *n.value()).collect();
    /// assert_eq!(rest, [2, 3]);
    /// ```
    #[inline]
    pub fn resume(node: NodeRef<'a, T, K, S>, order: Order) -> Self {
        let tree = node.tree();
        Self::from_walk(tree, Walk::resume(tree, order, node.into_raw_key()))
    }
    /// Returns the order in which the nodes are visited.
    #[inline(always)]
    pub const fn order(&self) -> Order {
        self.walk.order()
    }
    /// Returns the node which will be produced next, without advancing the iterator.
    #[inline]
    pub fn peek(&self) -> Option<NodeRef<'a, T, K, S>> {
        self.walk.peek().map(|key| self.bind(key.clone()))
    }

    #[inline(always)]
    fn bind(&self, key: K) -> NodeRef<'a, T, K, S> {
        unsafe {
            // SAFETY: the walk only produces keys read from the links of this tree
            NodeRef::new_raw_unchecked(self.tree, key)
        }
    }
}
impl<'a, T, K, S> Iterator for Nodes<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    type Item = NodeRef<'a, T, K, S>;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let key = self.walk.next()?;
        Some(self.bind(key))
    }
}
impl<T, K, S> FusedIterator for Nodes<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{}
impl<T, K, S> Clone for Nodes<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline]
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            walk: self.walk.clone(),
        }
    }
}
impl<T, K, S> Debug for Nodes<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Nodes")
            .field("order", &self.walk.order())
            .field("next", &self.walk.peek())
            .finish()
    }
}
