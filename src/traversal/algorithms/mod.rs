//! Stackless start and successor functions for the depth-first orders.
//!
//! This includes:
//! - In-order traversal: [`in_order_start`], [`in_order_next`]
//! - Pre-order traversal: [`pre_order_start`], [`pre_order_next`]
//! - Post-order traversal: [`post_order_start`], [`post_order_next`]
//!
//! Every function is pure: it only reads links of the traversable, keeps a constant amount of state and returns the same result when called twice with the same arguments. Start functions take the cursor of the root of the traversable; successor functions return `None` once the whole traversable is exhausted. Successors have no notion of a subtree boundary, so a walk begun from a start function applied to any other node continues past that node's subtree.
//!
//! Successor functions must only be called with cursors of the traversable they are given. Ascending loops climb one level per iteration, so they always end at the root at the latest.
//!
//! [`in_order_start`]: fn.in_order_start.html " "
//! [`in_order_next`]: fn.in_order_next.html " "
//! [`pre_order_start`]: fn.pre_order_start.html " "
//! [`pre_order_next`]: fn.pre_order_next.html " "
//! [`post_order_start`]: fn.post_order_start.html " "
//! [`post_order_next`]: fn.post_order_next.html " "

mod in_order;
mod pre_order;
mod post_order;
pub use in_order::*;
pub use pre_order::*;
pub use post_order::*;

use super::Traversable;

/// Descends via left children for as long as there are any.
fn leftmost<T>(traversable: &T, mut cursor: T::Cursor) -> T::Cursor
where T: Traversable + ?Sized,
{
    while let Some(left_child) = traversable.left_child_of(&cursor) {
        cursor = left_child;
    }
    cursor
}

/// Descends preferring left children over right ones until a leaf is reached.
fn first_leaf<T>(traversable: &T, mut cursor: T::Cursor) -> T::Cursor
where T: Traversable + ?Sized,
{
    loop {
        cursor = match traversable.left_child_of(&cursor) {
            Some(left_child) => left_child,
            None => match traversable.right_child_of(&cursor) {
                Some(right_child) => right_child,
                None => return cursor,
            },
        };
    }
}

#[inline]
fn is_left_child_of<T>(traversable: &T, cursor: &T::Cursor, parent: &T::Cursor) -> bool
where T: Traversable + ?Sized,
{
    traversable.left_child_of(parent).as_ref() == Some(cursor)
}

#[inline]
fn is_right_child_of<T>(traversable: &T, cursor: &T::Cursor, parent: &T::Cursor) -> bool
where T: Traversable + ?Sized,
{
    traversable.right_child_of(parent).as_ref() == Some(cursor)
}
