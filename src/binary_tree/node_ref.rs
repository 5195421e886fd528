use core::{
    fmt::Debug, // trait bounds
    ptr,        // eq
};
use crate::{
    storage::{Storage, DefaultStorage},
    traversal::algorithms,
    util::unreachable_debugchecked,
    ChildSide,
};
use arrayvec::ArrayVec;
use super::{BinaryTree, Node};

/// A reference to a node in a binary tree.
///
/// Since this type does not point to the node directly, but rather the tree the node is in and the key of the node in the storage, it can be used to traverse the tree. The borrow of the tree ties the reference to exactly one tree, so it cannot be used with nodes of any other.
///
/// Equality compares identity: two references are equal if they point to the same node of the same tree.
#[derive(Debug)]
pub struct NodeRef<'a, T, K, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    tree: &'a BinaryTree<T, K, S>,
    key: K,
}
impl<'a, T, K, S> NodeRef<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Creates a new `NodeRef` pointing to the specified key in the storage, or `None` if it's out of bounds.
    #[inline]
    pub fn new_raw(tree: &'a BinaryTree<T, K, S>, key: K) -> Option<Self> {
        if tree.storage.contains_key(&key) {
            Some(unsafe {
                // SAFETY: we just did a key check
                Self::new_raw_unchecked(tree, key)
            })
        } else {
            None
        }
    }
    /// Creates a new `NodeRef` pointing to the specified key in the storage without doing bounds checking.
    ///
    /// # Safety
    /// Causes *immediate* undefined behavior if the specified key is not present in the storage.
    #[inline(always)]
    pub unsafe fn new_raw_unchecked(tree: &'a BinaryTree<T, K, S>, key: K) -> Self {
        Self { tree, key }
    }
    /// Returns a reference the raw storage key for the node.
    #[inline(always)]
    pub const fn raw_key(&self) -> &K {
        &self.key
    }
    /// Consumes the reference and returns the underlying raw storage key for the node.
    #[inline(always)]
    #[allow(clippy::missing_const_for_fn)] // const fn cannot evaluate drop
    pub fn into_raw_key(self) -> K {
        self.key
    }
    /// Returns the tree the node belongs to.
    #[inline(always)]
    pub const fn tree(&self) -> &'a BinaryTree<T, K, S> {
        self.tree
    }
    /// Returns a reference to the data stored in the node.
    #[inline(always)]
    pub fn value(&self) -> &'a T {
        &self.node().value
    }
    /// Returns a reference to the parent node of the pointee, or `None` if it's the root node.
    #[inline]
    pub fn parent(&self) -> Option<Self> {
        self.node().parent.as_ref().map(|x| unsafe {
            // SAFETY: nodes can never have out-of-bounds parents
            Self::new_raw_unchecked(self.tree, x.clone())
        })
    }
    /// Returns `true` if the node is the root node, `false` otherwise.
    #[inline(always)]
    #[allow(clippy::missing_const_for_fn)]
    pub fn is_root(&self) -> bool {
        self.node().parent.is_none()
    }
    /// Returns `true` if the node is a *leaf*, i.e. does not have child nodes; `false` otherwise.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        let node = self.node();
        node.left_child.is_none() && node.right_child.is_none()
    }
    /// Returns which child slot of its parent the node occupies, or `None` if it's the root node.
    pub fn side(&self) -> Option<ChildSide> {
        let parent = self.parent()?;
        Some(parent.node().side_of(&self.key).unwrap_or_else(|| unsafe {
            unreachable_debugchecked("parent does not link back to its child")
        }))
    }
    /// Returns a reference to the child in the specified slot, or `None` if the slot is empty.
    pub fn child(&self, side: ChildSide) -> Option<Self> {
        self.node().child_key(side).map(|x| unsafe {
            // SAFETY: child keys are guaranteed to be valid; a key check to make sure that
            // properly holds is below.
            debug_assert!(
                self.tree.storage.contains_key(x),
                "\
debug key check failed: tried to reference key {:?} which is not present in the storage",
                x,
            );
            Self::new_raw_unchecked(self.tree, x.clone())
        })
    }
    /// Returns a reference to the left child, or `None` if there is none.
    #[inline(always)]
    pub fn left_child(&self) -> Option<Self> {
        self.child(ChildSide::Left)
    }
    /// Returns a reference to the right child, or `None` if there is none.
    #[inline(always)]
    pub fn right_child(&self) -> Option<Self> {
        self.child(ChildSide::Right)
    }
    /// Returns references to the existing children, left one first.
    pub fn children(&self) -> ArrayVec<[Self; 2]> {
        self.left_child().into_iter().chain(self.right_child()).collect()
    }

    /// Returns the first node of an in-order traversal, which is the left-most descendant of this node. Call it on the root of the tree.
    ///
    /// Always `Some`; the `Option` lets a traversal loop treat the first step like every other one.
    ///
    /// Successors are computed for the whole tree, so starting from any other node and stepping with [`in_order_next`] does not stop at the edge of that node's subtree: it carries on into the rest of the tree.
    ///
    /// [`in_order_next`]: #method.in_order_next " "
    #[inline]
    pub fn in_order_start(&self) -> Option<Self> {
        algorithms::in_order_start(self.tree, self.key.clone()).map(|x| self.rebind(x))
    }
    /// Returns the next node in in-order sequence, or `None` if this node is the last one.
    ///
    /// # Example
    /// ```rust
    /// # use cinder::BinaryTree;
    /// let mut tree = BinaryTree::<_>::new(2);
    /// let root = tree.root_key().clone();
    /// let one = tree.create_left_child(&root, 1).unwrap();
    ///
    /// let one = tree.node(&one).unwrap();
    /// assert_eq!(one.in_order_next(), Some(tree.root()));
    /// assert_eq!(tree.root().in_order_next(), None);
    /// ```
    #[inline]
    pub fn in_order_next(&self) -> Option<Self> {
        algorithms::in_order_next(self.tree, &self.key).map(|x| self.rebind(x))
    }
    /// Returns the first node of a pre-order traversal, which is the node itself. Call it on the root of the tree; as with [`in_order_start`], successors do not stay within the subtree of any other node.
    ///
    /// [`in_order_start`]: #method.in_order_start " "
    #[inline]
    pub fn pre_order_start(&self) -> Option<Self> {
        algorithms::pre_order_start(self.tree, self.key.clone()).map(|x| self.rebind(x))
    }
    /// Returns the next node in pre-order sequence, or `None` if this node is the last one.
    #[inline]
    pub fn pre_order_next(&self) -> Option<Self> {
        algorithms::pre_order_next(self.tree, &self.key).map(|x| self.rebind(x))
    }
    /// Returns the first node of a post-order traversal, which is the leaf reached by descending from this node, preferring left children over right ones. Call it on the root of the tree; as with [`in_order_start`], successors do not stay within the subtree of any other node.
    ///
    /// [`in_order_start`]: #method.in_order_start " "
    #[inline]
    pub fn post_order_start(&self) -> Option<Self> {
        algorithms::post_order_start(self.tree, self.key.clone()).map(|x| self.rebind(x))
    }
    /// Returns the next node in post-order sequence, or `None` if this node is the last one (the root).
    #[inline]
    pub fn post_order_next(&self) -> Option<Self> {
        algorithms::post_order_next(self.tree, &self.key).map(|x| self.rebind(x))
    }

    #[inline(always)]
    fn rebind(&self, key: K) -> Self {
        unsafe {
            // SAFETY: traversal only ever hands out keys read from the links of this tree
            Self::new_raw_unchecked(self.tree, key)
        }
    }
    #[inline(always)]
    fn node(&self) -> &'a Node<T, K> {
        unsafe {
            // SAFETY: all existing NodeRefs are guaranteed to not be dangling
            self.tree.storage.get_unchecked(&self.key)
        }
    }
}
impl<T, K, S> Copy for NodeRef<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Copy + Debug + Eq,
{}
impl<T, K, S> Clone for NodeRef<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline(always)]
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            key: self.key.clone(),
        }
    }
}
impl<T, K, S> PartialEq for NodeRef<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.tree, other.tree) && self.key == other.key
    }
}
impl<T, K, S> Eq for NodeRef<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{}
