//! Pluggable allocation for list nodes.

use std::alloc::{self, Layout};
use std::ptr::NonNull;

/// A source of memory for the nodes of a [`List`].
///
/// The default source is [`Global`], which forwards to the Rust global
/// heap. Custom implementations can pool, count or deliberately fail
/// allocations; a list stores its allocator by value and routes every
/// node it creates and destroys through it.
///
/// Allocators are also implemented for shared references, so a list can
/// borrow an allocator that outlives it:
///
/// ```
/// use chain_list::{Global, List};
///
/// let alloc = Global;
/// let mut list = List::new_in(&alloc);
/// list.push_back(1);
/// assert_eq!(list.front(), Ok(&1));
/// ```
///
/// # Safety
///
/// An implementation must return a pointer to a readable and writable
/// block of at least `layout.size()` bytes, aligned to `layout.align()`,
/// that stays valid until it is passed to [`deallocate`]. Clones of an
/// allocator must be interchangeable: memory obtained from one clone may
/// be released through another.
///
/// [`List`]: crate::List
/// [`deallocate`]: Allocator::deallocate
pub unsafe trait Allocator {
    /// Requests a block of memory fitting `layout`.
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError>;

    /// Releases a block previously obtained from [`allocate`].
    ///
    /// # Safety
    ///
    /// `ptr` must have been returned by [`allocate`] on this allocator or
    /// one of its clones, with the same `layout`, and must not be used
    /// afterwards.
    ///
    /// [`allocate`]: Allocator::allocate
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);
}

/// A request for memory that could not be served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("memory allocation failed")]
pub struct AllocError;

/// The default allocator, backed by the global Rust heap.
///
/// Zero-sized requests are not supported; list nodes always have a
/// non-zero size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Global;

unsafe impl Allocator for Global {
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        debug_assert!(layout.size() > 0);
        // SAFETY: `layout` has a non-zero size.
        let ptr = unsafe { alloc::alloc(layout) };
        NonNull::new(ptr).ok_or(AllocError)
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        alloc::dealloc(ptr.as_ptr(), layout);
    }
}

unsafe impl<A: Allocator + ?Sized> Allocator for &A {
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        (**self).allocate(layout)
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        (**self).deallocate(ptr, layout)
    }
}
