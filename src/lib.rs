//! This crate provides a doubly-linked list with owned nodes, allocated
//! through a pluggable allocator.
//!
//! The [`List`] allows inserting and removing elements at any cursor
//! position in constant time. In compromise, accessing or mutating
//! elements at any position takes *O*(*n*) time.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use chain_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3, 4]);
//!
//! let mut cursor = list.cursor_front_mut();
//!
//! cursor.insert(0); // insert 0 at the beginning of the list
//! assert_eq!(cursor.current(), Some(&0));
//! assert_eq!(cursor.view(), &List::from_iter([0, 1, 2, 3, 4]));
//!
//! assert!(cursor.seek_to(3).is_ok()); // move the cursor to position 3
//! assert_eq!(cursor.remove(), Some(3)); // and remove the element there
//! assert_eq!(cursor.view(), &List::from_iter([0, 1, 2, 4]));
//!
//! cursor.push_front(5); // pushing front to the list is also allowed
//! assert_eq!(cursor.view(), &List::from_iter([5, 0, 1, 2, 4]));
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!  head ──→ ╔═══════════╗           ╔═══════════╗                        ╔═══════════╗
//!           ║   next    ║ ────────→ ║   next    ║ ────────→ ┄┄ ────────→ ║   next    ║ ──→ ∅
//!           ╟───────────╢           ╟───────────╢     Node 1, 2, ...     ╟───────────╢
//!  ∅ ←───── ║   prev    ║ ←──────── ║   prev    ║ ←──────── ┄┄ ←──────── ║   prev    ║
//!           ╟───────────╢           ╟───────────╢                        ╟───────────╢
//!           ║ payload T ║           ║ payload T ║                        ║ payload T ║
//!           ╚═══════════╝           ╚═══════════╝                        ╚═══════════╝
//!              Node 0                  Node 1                              Node n-1
//!                                                                             ↑
//!  tail ──────────────────────────────────────────────────────────────────────┘
//! ```
//! The `List` contains:
//! - a pointer `head` to the first node and a pointer `tail` to the last
//!   one, both unset in an empty list;
//! - a length field `len` indicating the number of elements;
//! - the allocator `alloc` the nodes are allocated through.
//!
//! Each node of the list `List<T>` is allocated on the heap, and contains:
//! - the `next` pointer that points to the next element (unset in the
//!   last node);
//! - the `prev` pointer that points to the previous element (unset in the
//!   first node);
//! - the actual payload `T` that depends on the element type of the list.
//!
//! In convention, in a list with length *n*, the nodes are indexed by 0,
//! 1, ..., *n* - 1. A cursor may additionally stand at the end position,
//! indexed by *n*, one past the last node.
//!
//! # Allocation
//!
//! Nodes live in an [`Allocator`], chosen when the list is created:
//!
//! ```
//! use chain_list::{Global, List};
//!
//! let mut list = List::new_in(Global);
//! list.push_back(1);
//! assert_eq!(list.front(), Ok(&1));
//! ```
//!
//! The plain operations abort the process when the allocator fails, like
//! the standard collections do; `try_push_front`, `try_push_back` and
//! `try_insert` report [`Error::Alloc`] instead.
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IterMut`] iterators.
//! These are double-ended, fused iterators and iterate the list like an
//! array. [`IterMut`] provides mutability of the elements (but not of the
//! linked structure of the list).
//!
//! ## Examples
//!
//! ```
//! use chain_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), Some(&3));
//! assert_eq!(iter.next(), None);
//! assert_eq!(iter.next(), None); // Fused
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(list), vec![2, 4, 6]);
//! ```
//!
//! # Cursor Views
//!
//! Beside iteration, the cursors [`Cursor`] and [`CursorMut`] provide
//! more flexible ways of viewing a list.
//!
//! As the names suggest, they are like cursors and can move forward or
//! backward over the list. In a list with length *n*, there are *n* + 1
//! valid locations for the cursor, indexed by 0, 1, ..., *n*, where *n*
//! is the end position, one past the last element.
//!
//! Movements past either boundary are refused with
//! [`Error::OutOfBounds`] and leave the cursor where it stands, so a
//! cursor position is always valid.
//!
//! ## Examples
//!
//! ```
//! use chain_list::List;
//! use std::iter::FromIterator;
//!
//! let list = List::from_iter([1, 2, 3]);
//! let mut cursor = list.cursor_front();
//! assert_eq!(cursor.current(), Some(&1));
//!
//! assert!(cursor.seek_forward(2).is_ok());
//! assert_eq!(cursor.current(), Some(&3));
//!
//! assert!(cursor.move_next().is_ok()); // now at the end position
//! assert!(cursor.move_next().is_err()); // refused, the cursor stays put
//! assert_eq!(cursor.index(), 3);
//!
//! assert!(cursor.move_prev().is_ok()); // back over the last element
//! assert_eq!(cursor.current(), Some(&3));
//! ```
//!
//! # Cursor Mutations
//!
//! [`CursorMut`] provides many useful ways to mutate the list at any
//! position.
//! - [`insert`]: insert a new item at the cursor;
//! - [`remove`]: remove the item at the cursor;
//! - [`backspace`]: remove the item before the cursor;
//! - [`split`]: split the list into a new one, from the cursor position
//!   to the end;
//! - [`splice`]: splice another list in before the cursor position;
//!
//! ## Examples
//!
//! ```
//! use chain_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3, 4]);
//!
//! let mut cursor = list.cursor_front_mut();
//!
//! cursor.insert(5); // becomes [5, 1, 2, 3, 4], points to 5
//! assert_eq!(cursor.current(), Some(&5));
//!
//! assert!(cursor.seek_forward(3).is_ok());
//! assert_eq!(cursor.remove(), Some(3)); // becomes [5, 1, 2, 4], points to 4
//! assert_eq!(cursor.current(), Some(&4));
//!
//! assert_eq!(cursor.backspace(), Some(2)); // becomes [5, 1, 4], points to 4
//! assert_eq!(cursor.current(), Some(&4));
//!
//! assert_eq!(Vec::from_iter(list), vec![5, 1, 4]);
//! ```
//!
//! See more functions in [`CursorMut`].
//!
//! # Draining
//!
//! [`drain`] empties the list, yielding the elements; [`drain_filter`]
//! yields exactly the elements a predicate matches, removing them from
//! the list:
//!
//! ```
//! use chain_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter(0..8);
//! let evens: Vec<_> = list.drain_filter(|n| *n % 2 == 0).collect();
//! assert_eq!(evens, vec![0, 2, 4, 6]);
//! assert_eq!(list.into_vec(), vec![1, 3, 5, 7]);
//! ```
//!
//! [`List`]: crate::List
//! [`Iter`]: crate::Iter
//! [`IterMut`]: crate::IterMut
//! [`Allocator`]: crate::Allocator
//! [`Error::Alloc`]: crate::Error::Alloc
//! [`Error::OutOfBounds`]: crate::Error::OutOfBounds
//! [`Cursor`]: crate::list::cursor::Cursor
//! [`CursorMut`]: crate::list::cursor::CursorMut
//! [`insert`]: crate::list::cursor::CursorMut::insert
//! [`remove`]: crate::list::cursor::CursorMut::remove
//! [`backspace`]: crate::list::cursor::CursorMut::backspace
//! [`split`]: crate::list::cursor::CursorMut::split
//! [`splice`]: crate::list::cursor::CursorMut::splice
//! [`drain`]: crate::List::drain
//! [`drain_filter`]: crate::List::drain_filter

#[doc(inline)]
pub use error::Error;
#[doc(inline)]
pub use list::alloc::{AllocError, Allocator, Global};
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::{Drain, DrainFilter, List};

pub mod list;

mod checked;
mod error;
