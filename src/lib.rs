//! Arena-allocated binary trees with parent links and stackless traversal.
//!
//! # Overview
//! Cinder implements a binary tree using the technique of ["arena-allocated trees"][arena tree blog post]: nodes live in a backing storage, typically a [`Vec`] or an [`ArrayVec`], and link to each other through storage keys instead of pointers. Every node knows its parent as well as its children, which makes it possible to walk the tree in in-order, pre-order and post-order sequence **without recursion and without a stack**: the next node of each order is computed from the current node alone, by looking at whether it is the left or the right child of its parent.
//!
//! Because no traversal state exists besides "the current node", a traversal can be paused by keeping a [`NodeRef`] around and resumed at any time with no recomputation, and any number of independent traversals can run over a shared tree from several threads.
//!
//! Trees are build-once, read-many: nodes are only ever added, each child slot can be filled exactly once, and nothing is ever removed or relinked.
//!
//! # Example
//! ```rust
//! use cinder::BinaryTree;
//!
//! let mut tree = BinaryTree::<_>::new(50);
//! let root = tree.root_key().clone();
//! let two = tree.create_left_child(&root, 2).unwrap();
//! tree.create_left_child(&two, 1).unwrap();
//! tree.create_right_child(&root, 100).unwrap();
//!
//! let values: Vec<i32> = tree.in_order().map(|node| *node.value()).collect();
//! assert_eq!(values, [1, 2, 50, 100]);
//!
//! // Successors can also be computed one step at a time from any node:
//! let two = tree.node(&two).unwrap();
//! assert_eq!(two.in_order_next().map(|node| *node.value()), Some(50));
//! ```
//!
//! # Storage
//! The trait used for defining the "arena" type is [`Storage`]. It is implemented for [`Vec`] (with the `alloc` feature) and for [`ArrayVec`], which allows using trees without a global memory allocator.
//!
//! # Feature flags
//! - `std` (**enabled by default**) — enables the full standard library, disabling `no_std` for the crate. Currently, this only switches error types to the standard [`Error`] trait and lets `tracing` use the standard library.
//! - `alloc` (**enabled by default**) — adds the [`Storage`] implementation for [`Vec`] and makes it the default storage. *This does not require standard library support.*
//! - `unwind_safety` (**enabled by default**) — aborts the process instead of unwinding when a corrupted tree is detected in debug builds.
//! - `doc_cfg` — annotates feature-gated items on docs.rs.
//!
//! # Public dependencies
//! - `arrayvec` (**required**) — `^0.5`
//!
//! [`Error`]: https://doc.rust-lang.org/std/error/trait.Error.html " "
//! [`Vec`]: https://doc.rust-lang.org/std/vec/struct.Vec.html " "
//! [`ArrayVec`]: https://docs.rs/arrayvec/*/arrayvec/struct.ArrayVec.html " "
//! [`Storage`]: storage/trait.Storage.html " "
//! [`NodeRef`]: binary_tree/struct.NodeRef.html " "
//! [arena tree blog post]: https://dev.to/deciduously/no-more-tears-no-more-knots-arena-allocated-trees-in-rust-44k6 " "

#![warn(
    rust_2018_idioms,
    clippy::cargo,
    clippy::nursery,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    variant_size_differences,
    clippy::cast_lossless,
    clippy::checked_conversions,
    clippy::copy_iterator,
    clippy::expl_impl_clone_on_copy,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
    clippy::filter_map_next,
    clippy::map_flatten,
    clippy::map_unwrap_or,
    clippy::fn_params_excessive_bools,
    clippy::implicit_hasher,
    clippy::implicit_saturating_sub,
    clippy::inefficient_to_string,
    clippy::invalid_upcast_comparisons,
    clippy::items_after_statements,
    clippy::large_stack_arrays,
    clippy::let_unit_value,
    clippy::macro_use_imports,
    clippy::match_same_arms,
    clippy::match_wild_err_arm,
    clippy::match_wildcard_for_single_variants,
    clippy::mut_mut,
    clippy::needless_continue,
    clippy::needless_pass_by_value,
    clippy::option_if_let_else,
    clippy::option_option,
    clippy::range_plus_one,
    clippy::range_minus_one,
    clippy::redundant_closure_for_method_calls,
    clippy::same_functions_in_if_condition,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::string_add_assign,
    clippy::too_many_lines,
    clippy::type_repetition_in_bounds,
    clippy::trivially_copy_pass_by_ref,
    clippy::unicode_not_nfc,
    clippy::unnested_or_patterns,
    clippy::unused_self,
    clippy::used_underscore_binding,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::decimal_literal_representation,
    clippy::get_unwrap,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unneeded_field_pattern,
    clippy::unwrap_used, // Only .expect() allowed
    clippy::use_debug,
)]
#![deny(
    anonymous_parameters,
    bare_trait_objects,
    clippy::exit,
)]
#![allow(clippy::use_self)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod storage;
#[doc(no_inline)]
pub use storage::{Storage, DefaultStorage};

pub mod binary_tree;
pub use binary_tree::{BinaryTree, NodeRef};

pub mod traversal;
pub use traversal::{Order, Traversable, Walk};

/// A prelude for using Cinder, containing the most used types in a renamed form for safe glob-importing.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::storage::{
        Storage as TreeStorage,
        DefaultStorage as DefaultTreeStorage,
    };
    #[doc(no_inline)]
    pub use crate::binary_tree::{
        BinaryTree,
        NodeRef as BinaryTreeNodeRef,
    };
    #[doc(no_inline)]
    pub use crate::traversal::{
        Order as TraversalOrder,
        Traversable,
    };
    #[doc(no_inline)]
    pub use crate::{ChildSide, DuplicateChildError};
}

pub(crate) mod util;

use core::fmt::{self, Formatter, Display};

/// One of the two child slots of a binary tree node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ChildSide {
    /// The left child slot.
    Left,
    /// The right child slot.
    Right,
}
impl ChildSide {
    /// Returns the other side.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}
impl Display for ChildSide {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Left => "left",
            Self::Right => "right",
        })
    }
}

/// The error type returned by methods on trees which create child nodes, which occurs when the requested child slot of the parent is already occupied.
///
/// Child slots are write-once: an existing child can never be replaced. The tree is left exactly as it was before the call.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("the {side} child slot is already occupied")]
pub struct DuplicateChildError<T> {
    /// The slot which was requested.
    pub side: ChildSide,
    /// The payload which was passed to the function and was deemed useless because the call failed, provided here so that it doesn't get dropped if it could instead be reused.
    pub value: T,
}
impl<T> DuplicateChildError<T> {
    /// Extracts the payload which was passed to the failed call.
    #[allow(clippy::missing_const_for_fn)] // Clippy has no idea what a destructor is
    pub fn into_value(self) -> T {
        self.value
    }
}
