use core::fmt::Debug;
use tracing::{debug, trace};
use crate::{
    storage::{Storage, DefaultStorage},
    traversal::{Order, Walk},
    ChildSide,
    DuplicateChildError,
};
use super::{Node, NodeRef, Nodes};

/// A binary tree.
///
/// See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BinaryTree<T, K = usize, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    pub(super) storage: S,
    pub(super) root: K,
}
#[allow(clippy::len_without_is_empty)] // trees always have a root
impl<T, K, S> BinaryTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Creates a binary tree with the specified value for the root node.
    ///
    /// This is the only way to create a root, which is why a tree can never have more than one.
    ///
    /// # Example
    /// ```rust
    /// # use cinder::BinaryTree;
    /// // The only way to create a tree...
    /// let tree = BinaryTree::<_>::new(87);
    /// // ...is to simply create the root node and storage. The turbofish there is needed to
    /// // state that we are using the default storage method instead of asking the compiler to
    /// // infer it, which would be impossible.
    ///
    /// // No other nodes have been created yet:
    /// assert!(tree.root().is_leaf());
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn new(root: T) -> Self {
        let mut storage = S::new();
        let root = storage.add(unsafe {
            // SAFETY: there isn't a root there yet
            Node::root(root)
        });
        Self { storage, root }
    }
    /// Creates a binary tree with the specified capacity for the storage.
    ///
    /// # Panics
    /// The storage may panic if it has fixed capacity and the specified value does not match it.
    ///
    /// # Example
    /// ```rust
    /// # use cinder::BinaryTree;
    /// // Let's create a tree, but with some preallocated space for more nodes:
    /// let mut tree = BinaryTree::<_>::with_capacity(3, "Variable Names");
    ///
    /// // Capacity does not affect the actual nodes:
    /// assert!(tree.root().is_leaf());
    ///
    /// // Not until we create them ourselves:
    /// let root = tree.root_key().clone();
    /// tree.create_left_child(&root, "Foo").unwrap();
    /// tree.create_right_child(&root, "Bar").unwrap();
    /// assert_eq!(tree.len(), 3);
    /// ```
    pub fn with_capacity(capacity: usize, root: T) -> Self {
        let mut storage = S::with_capacity(capacity);
        let root = storage.add(unsafe {
            // SAFETY: as above
            Node::root(root)
        });
        Self { storage, root }
    }

    /// Returns a reference to the root node of the tree.
    #[allow(clippy::missing_const_for_fn)] // there cannot be constant trees just yet
    pub fn root(&self) -> NodeRef<'_, T, K, S> {
        unsafe {
            // SAFETY: binary trees cannot be created without a root
            NodeRef::new_raw_unchecked(self, self.root.clone())
        }
    }
    /// Returns the raw storage key of the root node.
    #[inline(always)]
    pub const fn root_key(&self) -> &K {
        &self.root
    }
    /// Returns a reference to the node at the specified key, or `None` if there is no such node in this tree.
    #[inline]
    pub fn node(&self, key: &K) -> Option<NodeRef<'_, T, K, S>> {
        NodeRef::new_raw(self, key.clone())
    }
    /// Returns the number of nodes in the tree, which is never zero.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.storage.len()
    }
    /// Returns the number of nodes the tree can hold without reallocating its storage.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }
    /// Shrinks the capacity of the storage as much as possible. Node keys are not affected.
    #[inline(always)]
    pub fn shrink_to_fit(&mut self) {
        self.storage.shrink_to_fit()
    }

    /// Creates a new leaf node as the left child of the node at `parent`, returning the key of the new node.
    ///
    /// # Errors
    /// Will fail if the parent already has a left child. In such a case, the tree is left untouched and the provided value is returned back to the caller.
    ///
    /// # Panics
    /// Panics if `parent` is not a key of a node in this tree.
    ///
    /// # Example
    /// ```rust
    /// # use cinder::{BinaryTree, ChildSide};
    /// let mut tree = BinaryTree::<_>::new("Root");
    /// let root = tree.root_key().clone();
    ///
    /// let left = tree.create_left_child(&root, "Left").unwrap();
    /// assert_eq!(*tree.node(&left).unwrap().value(), "Left");
    ///
    /// // Child slots can only be filled once:
    /// let error = tree.create_left_child(&root, "Another").unwrap_err();
    /// assert_eq!(error.side, ChildSide::Left);
    /// assert_eq!(error.into_value(), "Another");
    /// ```
    #[track_caller]
    #[inline]
    pub fn create_left_child(&mut self, parent: &K, value: T) -> Result<K, DuplicateChildError<T>> {
        self.create_child(parent, ChildSide::Left, value)
    }
    /// Creates a new leaf node as the right child of the node at `parent`, returning the key of the new node.
    ///
    /// A node may have a right child without having a left one.
    ///
    /// # Errors
    /// Will fail if the parent already has a right child. In such a case, the tree is left untouched and the provided value is returned back to the caller.
    ///
    /// # Panics
    /// Panics if `parent` is not a key of a node in this tree.
    #[track_caller]
    #[inline]
    pub fn create_right_child(&mut self, parent: &K, value: T) -> Result<K, DuplicateChildError<T>> {
        self.create_child(parent, ChildSide::Right, value)
    }
    /// Creates a new leaf node in the specified child slot of the node at `parent`, returning the key of the new node.
    ///
    /// # Errors
    /// Will fail if the slot is already occupied. In such a case, the tree is left untouched and the provided value is returned back to the caller.
    ///
    /// # Panics
    /// Panics if `parent` is not a key of a node in this tree.
    #[track_caller]
    pub fn create_child(
        &mut self,
        parent: &K,
        side: ChildSide,
        value: T,
    ) -> Result<K, DuplicateChildError<T>> {
        let parent_node = match self.storage.get(parent) {
            Some(node) => node,
            None => panic!("invalid parent key: {:?}", parent),
        };
        if let Some(existing) = parent_node.child_key(side) {
            debug!(?parent, ?existing, %side, "rejected child creation: slot already occupied");
            return Err(DuplicateChildError { side, value });
        }
        let key = self.storage.add(unsafe {
            // SAFETY: the parent's slot is linked to the new key right below
            Node::child(value, parent.clone())
        });
        let slot = unsafe {
            // SAFETY: the key was checked above, and adding elements never invalidates keys
            self.storage.get_unchecked_mut(parent)
        }
        .child_slot_mut(side);
        debug_assert!(slot.is_none(), "child slot was filled while allocating the child");
        *slot = Some(key.clone());
        trace!(?parent, child = ?key, %side, "created child node");
        Ok(key)
    }

    /// Returns an iterator over the nodes of the tree in the specified order, starting at the root.
    ///
    /// # Example
    /// ```rust
    /// # use cinder::{BinaryTree, Order};
    /// let mut tree = BinaryTree::<_>::new('b');
    /// let root = tree.root_key().clone();
    /// tree.create_left_child(&root, 'a').unwrap();
    /// tree.create_right_child(&root, 'c').unwrap();
    ///
    /// let walk = |order| tree.walk(order).map(|node| *node.value()).collect::<String>();
    /// assert_eq!(walk(Order::InOrder), "abc");
    /// assert_eq!(walk(Order::PreOrder), "bac");
    /// assert_eq!(walk(Order::PostOrder), "acb");
    /// ```
    #[inline]
    pub fn walk(&self, order: Order) -> Nodes<'_, T, K, S> {
        Nodes::from_walk(self, Walk::new(self, order))
    }
    /// Returns an iterator over the nodes of the tree in in-order sequence: left subtree, node, right subtree.
    #[inline(always)]
    pub fn in_order(&self) -> Nodes<'_, T, K, S> {
        self.walk(Order::InOrder)
    }
    /// Returns an iterator over the nodes of the tree in pre-order sequence: node, left subtree, right subtree.
    #[inline(always)]
    pub fn pre_order(&self) -> Nodes<'_, T, K, S> {
        self.walk(Order::PreOrder)
    }
    /// Returns an iterator over the nodes of the tree in post-order sequence: left subtree, right subtree, node.
    #[inline(always)]
    pub fn post_order(&self) -> Nodes<'_, T, K, S> {
        self.walk(Order::PostOrder)
    }
}
impl<T, K, S> Default for BinaryTree<T, K, S>
where
    T: Default,
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    fn default() -> Self {
        Self::new(T::default())
    }
}
