//! Everything related to traversing trees in general.
//!
//! The module is home to the following items:
//! - [`Traversable`] — a *trait for binary tree-like structures* which expose parent and child links through cursors
//! - Stackless start and successor functions for in-order, pre-order and post-order traversal (see the [`algorithms`] module)
//! - [`Order`], which selects one of those traversals at runtime
//! - [`Walk`], an iterator adapter which repeatedly applies a successor function
//!
//! None of the traversals use recursion or an auxiliary stack: each step only inspects the current node, its children and its ancestors. The state of a traversal is therefore nothing more than its current cursor, which can be saved and resumed at will.
//!
//! [`algorithms`]: algorithms/index.html " "
//! [`Traversable`]: trait.Traversable.html " "
//! [`Order`]: enum.Order.html " "
//! [`Walk`]: struct.Walk.html " "

pub mod algorithms;


use core::{
    iter::FusedIterator,
    fmt::{self, Formatter, Debug, Display},
};

/// Binary tree-like data structures which can be traversed using parent and child links.
pub trait Traversable {
    /// The type for the cursor which will be used for keeping track of the traversed nodes.
    ///
    /// Must be very cheaply clonable, but not required to be `Copy`. Cursors are compared for equality to find out whether a node is the left or the right child of its parent, so two cursors must be equal if and only if they point to the same node.
    type Cursor: Clone + Debug + Eq;

    /// Returns the cursor pointing to the root node.
    fn cursor_to_root(&self) -> Self::Cursor;
    /// Returns a cursor to the parent of the node at the specified cursor, or `None` if that node is the root node.
    fn parent_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor>;
    /// Returns a cursor to the left child of the node at the specified cursor, or `None` if it has none.
    fn left_child_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor>;
    /// Returns a cursor to the right child of the node at the specified cursor, or `None` if it has none.
    fn right_child_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor>;
}

/// One of the depth-first orders in which the nodes of a binary tree can be visited.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Left subtree, then the node itself, then the right subtree.
    InOrder,
    /// The node itself, then the left subtree, then the right subtree.
    PreOrder,
    /// Left subtree, then the right subtree, then the node itself.
    PostOrder,
}
impl Order {
    /// All orders, in the sequence they are declared in.
    pub const ALL: [Self; 3] = [Self::InOrder, Self::PreOrder, Self::PostOrder];

    /// Returns the first node to visit in this order. `root` should be the root of the traversable, since [`next`] walks the whole traversable and does not stop at the edge of any subtree.
    ///
    /// [`next`]: #method.next " "
    #[inline]
    pub fn start<T>(self, traversable: &T, root: T::Cursor) -> Option<T::Cursor>
    where T: Traversable + ?Sized,
    {
        match self {
            Self::InOrder => algorithms::in_order_start(traversable, root),
            Self::PreOrder => algorithms::pre_order_start(traversable, root),
            Self::PostOrder => algorithms::post_order_start(traversable, root),
        }
    }
    /// Returns the node to visit after `cursor` in this order, or `None` if the traversal is exhausted.
    #[inline]
    pub fn next<T>(self, traversable: &T, cursor: &T::Cursor) -> Option<T::Cursor>
    where T: Traversable + ?Sized,
    {
        match self {
            Self::InOrder => algorithms::in_order_next(traversable, cursor),
            Self::PreOrder => algorithms::pre_order_next(traversable, cursor),
            Self::PostOrder => algorithms::post_order_next(traversable, cursor),
        }
    }
}
impl Display for Order {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::InOrder => "in-order",
            Self::PreOrder => "pre-order",
            Self::PostOrder => "post-order",
        })
    }
}

/// An iterator which walks a [`Traversable`] in one of the depth-first [`Order`]s, producing cursors.
///
/// The only state kept besides the traversable and the order is the next cursor to produce, so the memory used by a walk does not depend on the size or shape of the tree.
///
/// [`Traversable`]: trait.Traversable.html " "
/// [`Order`]: enum.Order.html " "
pub struct Walk<'t, T>
where T: Traversable + ?Sized,
{
    traversable: &'t T,
    order: Order,
    cursor: Option<T::Cursor>,
}
impl<'t, T> Walk<'t, T>
where T: Traversable + ?Sized,
{
    /// Creates a walk over the whole traversable, starting from its root.
    #[inline]
    pub fn new(traversable: &'t T, order: Order) -> Self {
        let cursor = order.start(traversable, traversable.cursor_to_root());
        Self {
            traversable,
            order,
            cursor,
        }
    }
    /// Creates a walk which continues a traversal in the specified order, producing `cursor` first.
    ///
    /// Any cursor obtained from an earlier walk in the same order can be used to pick the traversal back up where it was left.
    #[inline(always)]
    pub fn resume(traversable: &'t T, order: Order, cursor: T::Cursor) -> Self {
        Self {
            traversable,
            order,
            cursor: Some(cursor),
        }
    }
    /// Returns the order in which the walk visits nodes.
    #[inline(always)]
    pub const fn order(&self) -> Order {
        self.order
    }
    /// Returns the cursor which will be produced next, without advancing the walk.
    #[inline(always)]
    pub fn peek(&self) -> Option<&T::Cursor> {
        self.cursor.as_ref()
    }
}
impl<T> Iterator for Walk<'_, T>
where T: Traversable + ?Sized,
{
    type Item = T::Cursor;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.cursor.take()?;
        self.cursor = self.order.next(self.traversable, &current);
        Some(current)
    }
}
impl<T> FusedIterator for Walk<'_, T>
where T: Traversable + ?Sized,
{}
impl<T> Clone for Walk<'_, T>
where T: Traversable + ?Sized,
{
    #[inline]
    fn clone(&self) -> Self {
        Self {
            traversable: self.traversable,
            order: self.order,
            cursor: self.cursor.clone(),
        }
    }
}
impl<T> Debug for Walk<'_, T>
where T: Traversable + Debug + ?Sized,
{
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Walk")
            .field("traversable", &self.traversable)
            .field("order", &self.order)
            .field("cursor", &self.cursor)
            .finish()
    }
}

//─────────────────────────────────────┐
// Implementations for pointer types   │
//─────────────────────────────────────┘
impl<T: Traversable + ?Sized> Traversable for &T {
    type Cursor = T::Cursor;

    #[inline(always)]
    fn cursor_to_root(&self) -> Self::Cursor {
        (**self).cursor_to_root()
    }
    #[inline(always)]
    fn parent_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor> {
        (**self).parent_of(cursor)
    }
    #[inline(always)]
    fn left_child_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor> {
        (**self).left_child_of(cursor)
    }
    #[inline(always)]
    fn right_child_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor> {
        (**self).right_child_of(cursor)
    }
}
