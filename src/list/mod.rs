use crate::error::Error;
use crate::list::alloc::{AllocError, Allocator, Global};
use crate::list::cursor::{Cursor, CursorMut};
use crate::list::iterator::{IntoIter, Iter, IterMut};
use std::alloc::{handle_alloc_error, Layout};
use std::fmt;
use std::iter;
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

pub mod alloc;
pub mod cursor;
pub mod iterator;

mod algorithms;

pub use algorithms::{Drain, DrainFilter};

/// A doubly-linked list with owned nodes and a pluggable node allocator.
///
/// The list keeps a pointer to each end, so pushing and popping at either
/// end, as well as inserting and removing through a
/// [`CursorMut`](crate::list::cursor::CursorMut), all compute in *O*(1)
/// time. Reaching a position in the middle takes *O*(*n*) time.
///
/// # Examples
///
/// ```
/// use chain_list::List;
///
/// let mut list = List::new();
/// list.push_back(1);
/// list.push_back(2);
/// list.push_front(0);
///
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.front(), Ok(&0));
/// assert_eq!(list.back(), Ok(&2));
/// ```
pub struct List<T, A: Allocator = Global> {
    pub(crate) head: Link<T>,
    pub(crate) tail: Link<T>,
    pub(crate) len: usize,
    pub(crate) alloc: A,
    pub(crate) _marker: PhantomData<Box<Node<T>>>,
}

/// A pointer into the chain of nodes, or `None` at either boundary.
///
/// The links obey these rules, relied upon by every unsafe block below:
/// - `head` and `tail` are either both set or both unset;
/// - the first node has no `prev` and the last node has no `next`;
/// - starting from `head`, following `next` visits exactly `len` nodes
///   and ends at `tail`, with every `prev` mirroring a `next`.
pub(crate) type Link<T> = Option<NonNull<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) next: Link<T>,
    pub(crate) prev: Link<T>,
    pub(crate) element: T,
}

/// A chain of nodes cut out of a list, with the two boundary links unset.
pub(crate) struct DetachedNodes<T> {
    pub(crate) front: NonNull<Node<T>>,
    pub(crate) back: NonNull<Node<T>>,
    pub(crate) len: usize,
}

impl<T> List<T> {
    /// Creates an empty list.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    ///
    /// let list: List<u32> = List::new();
    /// assert!(list.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::new_in(Global)
    }

    /// Creates a list holding `n` clones of `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    ///
    /// let list = List::from_elem(7, 3);
    /// assert_eq!(list.into_vec(), vec![7, 7, 7]);
    /// ```
    pub fn from_elem(elem: T, n: usize) -> Self
    where
        T: Clone,
    {
        let mut list = Self::new();
        list.extend(iter::repeat(elem).take(n));
        list
    }

    /// Creates a list holding `n` default values.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    ///
    /// let list: List<i32> = List::from_defaults(4);
    /// assert_eq!(list.into_vec(), vec![0, 0, 0, 0]);
    /// ```
    pub fn from_defaults(n: usize) -> Self
    where
        T: Default,
    {
        let mut list = Self::new();
        list.extend(iter::repeat_with(T::default).take(n));
        list
    }

    /// Moves all elements of `other` to the back of this list, leaving
    /// `other` empty.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2]);
    /// let mut other = List::from_iter([3, 4]);
    ///
    /// list.append(&mut other);
    ///
    /// assert!(other.is_empty());
    /// assert_eq!(list.into_vec(), vec![1, 2, 3, 4]);
    /// ```
    pub fn append(&mut self, other: &mut Self) {
        if let Some(detached) = other.detach_all_nodes() {
            // SAFETY: the chain came out of `other` well formed, and `None`
            // is the end position of this list.
            unsafe { self.attach_nodes(None, detached) };
        }
    }

    /// Moves all elements of `other` to the front of this list, leaving
    /// `other` empty.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([3, 4]);
    /// let mut other = List::from_iter([1, 2]);
    ///
    /// list.prepend(&mut other);
    ///
    /// assert!(other.is_empty());
    /// assert_eq!(list.into_vec(), vec![1, 2, 3, 4]);
    /// ```
    pub fn prepend(&mut self, other: &mut Self) {
        if let Some(detached) = other.detach_all_nodes() {
            let head = self.head;
            // SAFETY: the chain came out of `other` well formed, and `head`
            // is the front position of this list.
            unsafe { self.attach_nodes(head, detached) };
        }
    }

    /// Moves all elements of `other` into this list before position `at`.
    ///
    /// This operation takes *O*(min(`at`, `len` - `at`)) time to reach the
    /// position and *O*(1) time to link the nodes in.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 4]);
    /// let other = List::from_iter([2, 3]);
    ///
    /// list.splice_at(1, other);
    ///
    /// assert_eq!(list.into_vec(), vec![1, 2, 3, 4]);
    /// ```
    pub fn splice_at(&mut self, at: usize, other: Self) {
        assert!(
            at <= self.len,
            "Cannot splice at a position beyond the end of the list"
        );
        self.cursor_mut(at).splice(other);
    }
}

impl<T, A: Allocator> List<T, A> {
    /// Creates an empty list that allocates its nodes through `alloc`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::{Global, List};
    ///
    /// let mut list = List::new_in(Global);
    /// list.push_back(1);
    /// assert_eq!(list.front(), Ok(&1));
    /// ```
    pub fn new_in(alloc: A) -> Self {
        List {
            head: None,
            tail: None,
            len: 0,
            alloc,
            _marker: PhantomData,
        }
    }

    /// Returns a reference to the allocator of the list.
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Returns the number of elements in the list.
    ///
    /// This operation should compute in *O*(1) time; the length is kept
    /// up to date as the list changes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list contains no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first element, or [`Error::Empty`] if
    /// there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::{Error, List};
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), Err(Error::Empty));
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Ok(&1));
    /// ```
    pub fn front(&self) -> Result<&T, Error> {
        // SAFETY: `head` is either unset or points at a node owned by the list.
        unsafe { self.head.map(|node| &(*node.as_ptr()).element) }.ok_or(Error::Empty)
    }

    /// Returns a mutable reference to the first element, or
    /// [`Error::Empty`] if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2]);
    /// if let Ok(front) = list.front_mut() {
    ///     *front = 9;
    /// }
    /// assert_eq!(list.front(), Ok(&9));
    /// ```
    pub fn front_mut(&mut self) -> Result<&mut T, Error> {
        // SAFETY: `head` is either unset or points at a node owned by the list.
        unsafe { self.head.map(|node| &mut (*node.as_ptr()).element) }.ok_or(Error::Empty)
    }

    /// Returns a reference to the last element, or [`Error::Empty`] if
    /// there is none.
    pub fn back(&self) -> Result<&T, Error> {
        // SAFETY: `tail` is either unset or points at a node owned by the list.
        unsafe { self.tail.map(|node| &(*node.as_ptr()).element) }.ok_or(Error::Empty)
    }

    /// Returns a mutable reference to the last element, or
    /// [`Error::Empty`] if there is none.
    pub fn back_mut(&mut self) -> Result<&mut T, Error> {
        // SAFETY: `tail` is either unset or points at a node owned by the list.
        unsafe { self.tail.map(|node| &mut (*node.as_ptr()).element) }.ok_or(Error::Empty)
    }

    /// Prepends an element to the front of the list.
    ///
    /// This operation should compute in *O*(1) time. If the allocator
    /// cannot provide a node, the process is aborted through
    /// [`std::alloc::handle_alloc_error`]; see [`List::try_push_front`]
    /// for the reporting variant.
    pub fn push_front(&mut self, elem: T) {
        self.cursor_front_mut().insert(elem);
    }

    /// Prepends an element to the front of the list, reporting
    /// [`Error::Alloc`] if the allocator cannot provide a node.
    ///
    /// The element is dropped when allocation fails, and the list is left
    /// unchanged.
    pub fn try_push_front(&mut self, elem: T) -> Result<(), Error> {
        self.cursor_front_mut().try_insert(elem)
    }

    /// Appends an element to the back of the list.
    ///
    /// This operation should compute in *O*(1) time. If the allocator
    /// cannot provide a node, the process is aborted through
    /// [`std::alloc::handle_alloc_error`]; see [`List::try_push_back`]
    /// for the reporting variant.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.back(), Ok(&3));
    /// ```
    pub fn push_back(&mut self, elem: T) {
        self.cursor_end_mut().insert(elem);
    }

    /// Appends an element to the back of the list, reporting
    /// [`Error::Alloc`] if the allocator cannot provide a node.
    ///
    /// The element is dropped when allocation fails, and the list is left
    /// unchanged.
    pub fn try_push_back(&mut self, elem: T) -> Result<(), Error> {
        self.cursor_end_mut().try_insert(elem)
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    ///
    /// This operation should compute in *O*(1) time.
    pub fn pop_front(&mut self) -> Option<T> {
        self.cursor_front_mut().remove()
    }

    /// Removes the last element and returns it, or `None` if the list is
    /// empty.
    ///
    /// This operation should compute in *O*(1) time.
    pub fn pop_back(&mut self) -> Option<T> {
        self.cursor_end_mut().backspace()
    }

    /// Removes all elements, dropping each one in front-to-back order.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// list.clear();
    /// assert!(list.is_empty());
    /// ```
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Returns an iterator over the elements, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Returns an iterator yielding mutable references to the elements,
    /// front to back.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// list.iter_mut().for_each(|elem| *elem *= 2);
    /// assert_eq!(list.into_vec(), vec![2, 4, 6]);
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Returns a read-only cursor over the first element, or at the end
    /// position if the list is empty.
    pub fn cursor_front(&self) -> Cursor<'_, T, A> {
        Cursor {
            index: 0,
            current: self.head,
            list: self,
        }
    }

    /// Returns a read-only cursor over the last element, or at the end
    /// position if the list is empty.
    pub fn cursor_back(&self) -> Cursor<'_, T, A> {
        Cursor {
            index: self.len.saturating_sub(1),
            current: self.tail,
            list: self,
        }
    }

    /// Returns a read-only cursor at the end position, one past the last
    /// element.
    pub fn cursor_end(&self) -> Cursor<'_, T, A> {
        Cursor {
            index: self.len,
            current: None,
            list: self,
        }
    }

    /// Returns a read-only cursor at position `at`, walking from the
    /// nearer end.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`.
    pub fn cursor(&self, at: usize) -> Cursor<'_, T, A> {
        assert!(
            at <= self.len,
            "Cannot create a cursor beyond the end of the list"
        );
        let mut cursor = if at <= self.len / 2 {
            self.cursor_front()
        } else {
            self.cursor_end()
        };
        cursor
            .seek_to(at)
            .expect("a bounds-checked position is always reachable");
        cursor
    }

    /// Returns an editing cursor over the first element, or at the end
    /// position if the list is empty.
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T, A> {
        CursorMut {
            index: 0,
            current: self.head,
            list: self,
        }
    }

    /// Returns an editing cursor over the last element, or at the end
    /// position if the list is empty.
    pub fn cursor_back_mut(&mut self) -> CursorMut<'_, T, A> {
        CursorMut {
            index: self.len.saturating_sub(1),
            current: self.tail,
            list: self,
        }
    }

    /// Returns an editing cursor at the end position, one past the last
    /// element.
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, T, A> {
        CursorMut {
            index: self.len,
            current: None,
            list: self,
        }
    }

    /// Returns an editing cursor at position `at`, walking from the
    /// nearer end.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`.
    pub fn cursor_mut(&mut self, at: usize) -> CursorMut<'_, T, A> {
        assert!(
            at <= self.len,
            "Cannot create a cursor beyond the end of the list"
        );
        let mut cursor = if at <= self.len / 2 {
            self.cursor_front_mut()
        } else {
            self.cursor_end_mut()
        };
        cursor
            .seek_to(at)
            .expect("a bounds-checked position is always reachable");
        cursor
    }

    /// Inserts `elem` at position `at`, before every element that used to
    /// live there.
    ///
    /// This operation takes *O*(min(`at`, `len` - `at`)) time to reach the
    /// position and *O*(1) time to link the node.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 3]);
    /// list.insert(1, 2);
    /// assert_eq!(list.into_vec(), vec![1, 2, 3]);
    /// ```
    pub fn insert(&mut self, at: usize, elem: T) {
        assert!(
            at <= self.len,
            "Cannot insert at a position beyond the end of the list"
        );
        self.cursor_mut(at).insert(elem);
    }

    /// Removes the element at position `at` and returns it.
    ///
    /// This operation takes *O*(min(`at`, `len` - `at`)) time to reach the
    /// position and *O*(1) time to unlink the node.
    ///
    /// # Panics
    ///
    /// Panics if `at >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.remove(1), 2);
    /// assert_eq!(list.into_vec(), vec![1, 3]);
    /// ```
    pub fn remove(&mut self, at: usize) -> T {
        assert!(
            at < self.len,
            "Cannot remove at a position beyond the last element"
        );
        self.cursor_mut(at)
            .remove()
            .expect("a bounds-checked position holds an element")
    }

    /// Splits the list in two at position `at`, returning a new list with
    /// the elements from `at` to the back. The new list allocates through
    /// a clone of this list's allocator.
    ///
    /// This operation takes *O*(min(`at`, `len` - `at`)) time to reach the
    /// position and *O*(1) time to relink the nodes.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3, 4]);
    /// let tail = list.split_off(2);
    ///
    /// assert_eq!(list.into_vec(), vec![1, 2]);
    /// assert_eq!(tail.into_vec(), vec![3, 4]);
    /// ```
    pub fn split_off(&mut self, at: usize) -> Self
    where
        A: Clone,
    {
        assert!(
            at <= self.len,
            "Cannot split off at a position beyond the end of the list"
        );
        self.cursor_mut(at).split()
    }

    /// Exchanges the contents of two lists, allocators included.
    ///
    /// This operation should compute in *O*(1) time; no element is moved,
    /// cloned or dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut a = List::from_iter([1, 2, 3]);
    /// let mut b = List::from_iter([9]);
    ///
    /// a.swap(&mut b);
    ///
    /// assert_eq!(a.len(), 1);
    /// assert_eq!(b.len(), 3);
    /// assert_eq!(a.into_vec(), vec![9]);
    /// assert_eq!(b.into_vec(), vec![1, 2, 3]);
    /// ```
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Clones the elements into a `Vec`, front to back.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Consumes the list into a `Vec` holding the same elements.
    pub fn into_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }
}

impl<T, A: Allocator> List<T, A> {
    /// Allocates a node holding `element`, aborting the process if the
    /// allocator fails.
    pub(crate) fn new_node(&self, element: T) -> NonNull<Node<T>> {
        match Node::new_in(element, &self.alloc) {
            Ok(node) => node,
            Err(AllocError) => handle_alloc_error(Layout::new::<Node<T>>()),
        }
    }

    /// Links a detached `node` in immediately before `next`, where `None`
    /// is the end position.
    ///
    /// ```text
    /// A - B          A - node - B
    ///     |    =>
    ///    next
    /// ```
    ///
    /// # Safety
    ///
    /// `node` must be detached and owned by this list's allocator, and
    /// `next` must be `None` or a node of this list.
    pub(crate) unsafe fn attach_node(&mut self, next: Link<T>, node: NonNull<Node<T>>) {
        let prev = match next {
            Some(next) => (*next.as_ptr()).prev,
            None => self.tail,
        };
        (*node.as_ptr()).next = next;
        (*node.as_ptr()).prev = prev;
        match prev {
            Some(prev) => (*prev.as_ptr()).next = Some(node),
            None => self.head = Some(node),
        }
        match next {
            Some(next) => (*next.as_ptr()).prev = Some(node),
            None => self.tail = Some(node),
        }
        self.len += 1;
    }

    /// Unlinks `node` from the list without freeing it.
    ///
    /// # Safety
    ///
    /// `node` must be a node of this list. The caller becomes responsible
    /// for freeing it.
    pub(crate) unsafe fn detach_node(&mut self, node: NonNull<Node<T>>) {
        let next = (*node.as_ptr()).next;
        let prev = (*node.as_ptr()).prev;
        match prev {
            Some(prev) => (*prev.as_ptr()).next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => (*next.as_ptr()).prev = prev,
            None => self.tail = prev,
        }
        self.len -= 1;
    }

    /// Links a detached chain in immediately before `next`, where `None`
    /// is the end position.
    ///
    /// # Safety
    ///
    /// The chain must be well formed and owned by this list's allocator
    /// (or an interchangeable clone of it), and `next` must be `None` or
    /// a node of this list.
    pub(crate) unsafe fn attach_nodes(&mut self, next: Link<T>, detached: DetachedNodes<T>) {
        let prev = match next {
            Some(next) => (*next.as_ptr()).prev,
            None => self.tail,
        };
        (*detached.front.as_ptr()).prev = prev;
        (*detached.back.as_ptr()).next = next;
        match prev {
            Some(prev) => (*prev.as_ptr()).next = Some(detached.front),
            None => self.head = Some(detached.front),
        }
        match next {
            Some(next) => (*next.as_ptr()).prev = Some(detached.back),
            None => self.tail = Some(detached.back),
        }
        self.len += detached.len;
    }

    /// Cuts the chain `front..=back` out of the list.
    ///
    /// ```text
    /// A - front - .. - back - B   =>   A - B
    /// ```
    ///
    /// # Safety
    ///
    /// `front` and `back` must be nodes of this list, `back` must be
    /// reachable from `front`, and `len` must be the exact number of
    /// nodes between them, both included.
    pub(crate) unsafe fn detach_nodes(
        &mut self,
        front: NonNull<Node<T>>,
        back: NonNull<Node<T>>,
        len: usize,
    ) -> DetachedNodes<T> {
        let prev = (*front.as_ptr()).prev;
        let next = (*back.as_ptr()).next;
        match prev {
            Some(prev) => (*prev.as_ptr()).next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => (*next.as_ptr()).prev = prev,
            None => self.tail = prev,
        }
        (*front.as_ptr()).prev = None;
        (*back.as_ptr()).next = None;
        self.len -= len;
        DetachedNodes::new(front, back, len)
    }

    /// Detaches every node at once, leaving the list empty.
    pub(crate) fn detach_all_nodes(&mut self) -> Option<DetachedNodes<T>> {
        let front = self.head?;
        let back = self.tail.expect("a non-empty list must have a back node");
        let len = self.len;
        self.head = None;
        self.tail = None;
        self.len = 0;
        // SAFETY: the whole chain is well formed, and its boundary links
        // are unset by the link rules.
        Some(unsafe { DetachedNodes::new(front, back, len) })
    }

    /// Builds a list directly around a detached chain.
    pub(crate) fn from_detached_in(detached: DetachedNodes<T>, alloc: A) -> Self {
        List {
            head: Some(detached.front),
            tail: Some(detached.back),
            len: detached.len,
            alloc,
            _marker: PhantomData,
        }
    }

    /// Consumes the list into its detached chain, or `None` if it is
    /// empty.
    pub(crate) fn into_detached(mut self) -> Option<DetachedNodes<T>> {
        self.detach_all_nodes()
    }
}

#[cfg(any(test, feature = "inspect"))]
impl<T, A: Allocator> List<T, A> {
    /// Walks the whole list in both directions and asserts every link
    /// rule, panicking on the first violation.
    ///
    /// Available in tests and behind the `inspect` feature.
    pub fn check_links(&self) {
        unsafe {
            let mut seen = 0;
            let mut prev: Link<T> = None;
            let mut current = self.head;
            while let Some(node) = current {
                assert!(
                    seen < self.len,
                    "the forward walk found more nodes than `len`"
                );
                assert_eq!(
                    (*node.as_ptr()).prev,
                    prev,
                    "a `prev` link does not mirror its `next` link"
                );
                seen += 1;
                prev = current;
                current = (*node.as_ptr()).next;
            }
            assert_eq!(seen, self.len, "the forward walk found too few nodes");
            assert_eq!(self.tail, prev, "`tail` does not point at the last node");

            let mut seen = 0;
            let mut next: Link<T> = None;
            let mut current = self.tail;
            while let Some(node) = current {
                assert!(
                    seen < self.len,
                    "the backward walk found more nodes than `len`"
                );
                assert_eq!(
                    (*node.as_ptr()).next,
                    next,
                    "a `next` link does not mirror its `prev` link"
                );
                seen += 1;
                next = current;
                current = (*node.as_ptr()).prev;
            }
            assert_eq!(seen, self.len, "the backward walk found too few nodes");
            assert_eq!(self.head, next, "`head` does not point at the first node");
        }
    }
}

impl<T> Node<T> {
    fn new_in<A: Allocator>(element: T, alloc: &A) -> Result<NonNull<Node<T>>, AllocError> {
        let node = alloc.allocate(Layout::new::<Node<T>>())?.cast::<Node<T>>();
        // SAFETY: the fresh block fits a `Node<T>` and is writable.
        unsafe {
            node.as_ptr().write(Node {
                next: None,
                prev: None,
                element,
            });
        }
        Ok(node)
    }

    /// Reads the node back out of the allocator.
    ///
    /// # Safety
    ///
    /// `node` must have been created by [`Node::new_in`] through `alloc`
    /// or an interchangeable clone of it, and must not be reachable from
    /// any list.
    unsafe fn take_in<A: Allocator>(node: NonNull<Node<T>>, alloc: &A) -> Node<T> {
        let taken = node.as_ptr().read();
        alloc.deallocate(node.cast(), Layout::new::<Node<T>>());
        taken
    }

    fn into_element(self) -> T {
        self.element
    }
}

impl<T> DetachedNodes<T> {
    /// # Safety
    ///
    /// `front` and `back` must be the two ends of a well formed chain of
    /// exactly `len` nodes, with `front.prev` and `back.next` both unset.
    unsafe fn new(front: NonNull<Node<T>>, back: NonNull<Node<T>>, len: usize) -> Self {
        debug_assert!(len > 0, "a detached chain holds at least one node");
        debug_assert!((*front.as_ptr()).prev.is_none());
        debug_assert!((*back.as_ptr()).next.is_none());
        DetachedNodes { front, back, len }
    }
}

impl<T, A: Allocator> Drop for List<T, A> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, A: Allocator + Default> Default for List<T, A> {
    fn default() -> Self {
        Self::new_in(A::default())
    }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for List<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

unsafe impl<T: Send, A: Allocator + Send> Send for List<T, A> {}
unsafe impl<T: Sync, A: Allocator + Sync> Sync for List<T, A> {}

#[allow(dead_code)]
fn assert_covariance() {
    fn list<'new>(l: List<&'static str>) -> List<&'new str> {
        l
    }
    fn iter<'a, 'new>(i: Iter<'a, &'static str>) -> Iter<'a, &'new str> {
        i
    }
    fn into_iter<'new>(i: IntoIter<&'static str>) -> IntoIter<&'new str> {
        i
    }
    fn cursor<'a, 'new>(c: Cursor<'a, &'static str>) -> Cursor<'a, &'new str> {
        c
    }
}
