use crate::{
    storage::Storage,
    traversal::Traversable,
};
use core::fmt::Debug;
use super::{BinaryTree, Node};

impl<T, K, S> Traversable for BinaryTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    type Cursor = K;

    #[inline(always)]
    fn cursor_to_root(&self) -> Self::Cursor {
        self.root.clone()
    }
    #[track_caller]
    fn parent_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor> {
        self.node_at(cursor).parent.clone()
    }
    #[track_caller]
    fn left_child_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor> {
        self.node_at(cursor).left_child.clone()
    }
    #[track_caller]
    fn right_child_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor> {
        self.node_at(cursor).right_child.clone()
    }
}

impl<T, K, S> BinaryTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline]
    #[track_caller]
    fn node_at(&self, cursor: &K) -> &Node<T, K> {
        match self.storage.get(cursor) {
            Some(node) => node,
            None => panic!("invalid cursor: {:?}", cursor),
        }
    }
}
