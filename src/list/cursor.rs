use crate::error::Error;
use crate::list::alloc::{Allocator, Global};
use crate::list::{Link, List, Node};
use std::cmp::Ordering;
use std::fmt;
use std::ptr;

/// A read-only cursor over a [`List`].
///
/// A `Cursor` is like an iterator, except that it can freely seek
/// back-and-forth. It is either over a node of the list or over the end
/// position, one past the last node: a list of length *n* has *n* + 1
/// cursor positions, indexed by 0, 1, ..., *n*.
///
/// # Examples
///
/// Here is a walk over a list. (`|` marks the cursor position; the end
/// position sits after the last element.)
///
/// ```
/// use chain_list::List;
/// use std::iter::FromIterator;
///
/// // Create a list: [ A B C D ]
/// let list = List::from_iter(['A', 'B', 'C', 'D']);
///
/// // A cursor at the front: [|A B C D ] (index = 0)
/// let mut cursor = list.cursor_front();
/// assert_eq!(cursor.current(), Some(&'A'));
///
/// // Move it forward: [ A|B C D ] (index = 1)
/// assert!(cursor.move_next().is_ok());
/// assert_eq!(cursor.current(), Some(&'B'));
///
/// // Jump to the end position: [ A B C D |] (index = 4)
/// cursor.move_to_end();
/// assert_eq!(cursor.current(), None);
/// assert!(cursor.at_end());
///
/// // Moving past the end is refused and the cursor stays put.
/// assert!(cursor.move_next().is_err());
/// assert_eq!(cursor.index(), 4);
///
/// // Moving backward from the end reaches the last element.
/// assert!(cursor.move_prev().is_ok());
/// assert_eq!(cursor.current(), Some(&'D'));
/// ```
///
/// The cursor borrows its list, so the list cannot change behind it:
///
/// ```compile_fail
/// use chain_list::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 3]);
/// let cursor = list.cursor_front();
/// list.push_back(4); // error: `list` is already borrowed
/// assert_eq!(cursor.current(), Some(&1));
/// ```
pub struct Cursor<'a, T: 'a, A: Allocator = Global> {
    pub(crate) index: usize,
    pub(crate) current: Link<T>,
    pub(crate) list: &'a List<T, A>,
}

/// A cursor over a [`List`] with editing operations.
///
/// A `CursorMut` is like an iterator, except that it can freely seek
/// back-and-forth, and can safely mutate the list during iteration. The
/// lifetime of every reference it yields is tied to a borrow of the
/// cursor itself, so no element reference can survive the next edit:
///
/// ```compile_fail
/// use chain_list::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 3]);
/// let mut cursor = list.cursor_front_mut();
/// let first = cursor.current().unwrap();
/// cursor.remove(); // error: `cursor` is already borrowed
/// assert_eq!(*first, 1);
/// ```
///
/// # Examples
///
/// ```
/// use chain_list::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 3, 4]);
///
/// let mut cursor = list.cursor_front_mut();
/// cursor.insert(5); // becomes [5, 1, 2, 3, 4], cursor over 5
/// assert_eq!(cursor.current(), Some(&5));
///
/// assert!(cursor.seek_forward(3).is_ok());
/// assert_eq!(cursor.remove(), Some(3)); // becomes [5, 1, 2, 4], cursor over 4
/// assert_eq!(cursor.current(), Some(&4));
///
/// assert_eq!(cursor.backspace(), Some(2)); // becomes [5, 1, 4], cursor over 4
/// assert_eq!(cursor.current(), Some(&4));
///
/// assert_eq!(list.into_vec(), vec![5, 1, 4]);
/// ```
pub struct CursorMut<'a, T: 'a, A: Allocator = Global> {
    pub(crate) index: usize,
    pub(crate) current: Link<T>,
    pub(crate) list: &'a mut List<T, A>,
}

macro_rules! impl_cursor {
    ($CURSOR:ident) => {
        impl<'a, T: 'a, A: Allocator> $CURSOR<'a, T, A> {
            fn prev_link(&self) -> Link<T> {
                match self.current {
                    // SAFETY: `current` points into the borrowed list.
                    Some(node) => unsafe { (*node.as_ptr()).prev },
                    None => self.list.tail,
                }
            }

            /// Returns the position of the cursor inside the list; the end
            /// position equals the length of the list.
            pub fn index(&self) -> usize {
                self.index
            }

            /// Returns `true` if the cursor is over the end position
            /// rather than over a node.
            pub fn at_end(&self) -> bool {
                self.current.is_none()
            }

            /// Returns `true` if the underlying list holds no elements.
            pub fn is_empty(&self) -> bool {
                self.list.is_empty()
            }

            /// Moves the cursor to the next position.
            ///
            /// Returns [`Error::OutOfBounds`] and stays put if the cursor
            /// is already over the end position.
            ///
            /// This operation should compute in *O*(1) time.
            pub fn move_next(&mut self) -> Result<(), Error> {
                let node = self.current.ok_or(Error::OutOfBounds)?;
                // SAFETY: `node` points into the borrowed list.
                self.current = unsafe { (*node.as_ptr()).next };
                self.index += 1;
                Ok(())
            }

            /// Moves the cursor to the previous position; from the end
            /// position it moves over the last element.
            ///
            /// Returns [`Error::OutOfBounds`] and stays put if the cursor
            /// is over the first element.
            ///
            /// This operation should compute in *O*(1) time.
            pub fn move_prev(&mut self) -> Result<(), Error> {
                if self.index == 0 {
                    return Err(Error::OutOfBounds);
                }
                self.current = self.prev_link();
                self.index -= 1;
                Ok(())
            }

            /// Moves the cursor over the first element, or to the end
            /// position if the list is empty.
            pub fn move_to_front(&mut self) {
                self.index = 0;
                self.current = self.list.head;
            }

            /// Moves the cursor to the end position.
            pub fn move_to_end(&mut self) {
                self.index = self.list.len;
                self.current = None;
            }

            /// Moves the cursor `steps` positions forward.
            ///
            /// On failure the cursor is left at the end position.
            ///
            /// This operation should compute in *O*(`steps`) time.
            pub fn seek_forward(&mut self, steps: usize) -> Result<(), Error> {
                (0..steps).try_for_each(|_| self.move_next())
            }

            /// Moves the cursor `steps` positions backward.
            ///
            /// On failure the cursor is left over the first element.
            ///
            /// This operation should compute in *O*(`steps`) time.
            pub fn seek_backward(&mut self, steps: usize) -> Result<(), Error> {
                (0..steps).try_for_each(|_| self.move_prev())
            }

            /// Moves the cursor to position `index`, walking forward or
            /// backward from where it stands.
            ///
            /// Returns [`Error::OutOfBounds`] and stays put if `index` is
            /// beyond the end position.
            pub fn seek_to(&mut self, index: usize) -> Result<(), Error> {
                if index > self.list.len {
                    return Err(Error::OutOfBounds);
                }
                if index >= self.index {
                    self.seek_forward(index - self.index)
                } else {
                    self.seek_backward(self.index - index)
                }
            }
        }
    };
}

impl_cursor!(CursorMut);
impl_cursor!(Cursor);

impl<'a, T: 'a, A: Allocator> Cursor<'a, T, A> {
    fn same_list_with(&self, other: &Self) -> bool {
        ptr::eq(self.list, other.list)
    }

    /// Returns a reference to the element under the cursor, or `None` at
    /// the end position.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_front();
    /// assert_eq!(cursor.current(), Some(&1));
    ///
    /// cursor.move_to_end();
    /// assert_eq!(cursor.current(), None);
    /// ```
    pub fn current(&self) -> Option<&'a T> {
        // SAFETY: `current` points into the list borrowed for 'a.
        unsafe { self.current.map(|node| &(*node.as_ptr()).element) }
    }

    /// Returns a reference to the element under the cursor, or
    /// [`Error::OutOfBounds`] if the cursor is over the end position.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::{Error, List};
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2]);
    /// assert_eq!(list.cursor_front().try_current(), Ok(&1));
    /// assert_eq!(list.cursor_end().try_current(), Err(Error::OutOfBounds));
    /// ```
    pub fn try_current(&self) -> Result<&'a T, Error> {
        self.current().ok_or(Error::OutOfBounds)
    }

    /// Returns a reference to the element before the cursor, or `None`
    /// over the first element.
    pub fn previous(&self) -> Option<&'a T> {
        if self.index == 0 {
            return None;
        }
        // SAFETY: `prev_link` stays inside the list borrowed for 'a.
        unsafe { self.prev_link().map(|node| &(*node.as_ptr()).element) }
    }

    /// Returns the list the cursor reads from.
    pub fn view(&self) -> &'a List<T, A> {
        self.list
    }
}

impl<T, A: Allocator> Clone for Cursor<'_, T, A> {
    fn clone(&self) -> Self {
        Cursor { ..*self }
    }
}

/// Cursors compare equal when they read the same list at the same
/// position.
///
/// # Examples
///
/// ```
/// use chain_list::List;
/// use std::iter::FromIterator;
///
/// let list = List::from_iter([1, 2, 3]);
/// let cursor1 = list.cursor_front();
/// let mut cursor2 = cursor1.clone();
/// // The same list at the same position.
/// assert_eq!(cursor1, cursor2);
///
/// cursor2.move_next().unwrap();
/// // The same list at different positions.
/// assert_ne!(cursor1, cursor2);
///
/// let another_list = List::from_iter([1, 2, 3]);
/// // Different lists never compare equal.
/// assert_ne!(cursor1, another_list.cursor_front());
/// ```
impl<T, A: Allocator> PartialEq for Cursor<'_, T, A> {
    fn eq(&self, other: &Self) -> bool {
        self.same_list_with(other) && self.index == other.index
    }
}

impl<T, A: Allocator> Eq for Cursor<'_, T, A> {}

/// Cursors of the same list compare by position; cursors of different
/// lists do not compare at all, so this is `PartialOrd` but not `Ord`.
///
/// # Examples
///
/// ```
/// use chain_list::List;
/// use std::iter::FromIterator;
///
/// let list = List::from_iter([1, 2, 3]);
/// let front = list.cursor_front();
/// let mut walker = front.clone();
/// walker.move_next().unwrap();
/// assert!(front < walker);
///
/// let another_list = List::from_iter([1, 2, 3]);
/// assert_eq!(front.partial_cmp(&another_list.cursor_front()), None);
/// ```
impl<T, A: Allocator> PartialOrd for Cursor<'_, T, A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if !self.same_list_with(other) {
            return None;
        }
        Some(self.index.cmp(&other.index))
    }
}

impl<'a, T: 'a, A: Allocator> CursorMut<'a, T, A> {
    /// Returns a reference to the element under the cursor, or `None` at
    /// the end position.
    pub fn current(&self) -> Option<&T> {
        // SAFETY: `current` points into the borrowed list.
        unsafe { self.current.map(|node| &(*node.as_ptr()).element) }
    }

    /// Returns a reference to the element under the cursor, or
    /// [`Error::OutOfBounds`] if the cursor is over the end position.
    pub fn try_current(&self) -> Result<&T, Error> {
        self.current().ok_or(Error::OutOfBounds)
    }

    /// Returns a mutable reference to the element under the cursor, or
    /// `None` at the end position.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2]);
    /// let mut cursor = list.cursor_front_mut();
    /// if let Some(elem) = cursor.current_mut() {
    ///     *elem = 10;
    /// }
    /// assert_eq!(list.into_vec(), vec![10, 2]);
    /// ```
    pub fn current_mut(&mut self) -> Option<&mut T> {
        // SAFETY: `current` points into the exclusively borrowed list.
        unsafe { self.current.map(|node| &mut (*node.as_ptr()).element) }
    }

    /// Returns a mutable reference to the element under the cursor, or
    /// [`Error::OutOfBounds`] if the cursor is over the end position.
    pub fn try_current_mut(&mut self) -> Result<&mut T, Error> {
        self.current_mut().ok_or(Error::OutOfBounds)
    }

    /// Returns a reference to the element before the cursor, or `None`
    /// over the first element.
    pub fn previous(&self) -> Option<&T> {
        if self.index == 0 {
            return None;
        }
        // SAFETY: `prev_link` stays inside the borrowed list.
        unsafe { self.prev_link().map(|node| &(*node.as_ptr()).element) }
    }

    /// Returns a mutable reference to the element before the cursor, or
    /// `None` over the first element.
    pub fn previous_mut(&mut self) -> Option<&mut T> {
        if self.index == 0 {
            return None;
        }
        // SAFETY: `prev_link` stays inside the exclusively borrowed list.
        unsafe { self.prev_link().map(|node| &mut (*node.as_ptr()).element) }
    }

    /// Reads the list under edit.
    pub fn view(&self) -> &List<T, A> {
        &*self.list
    }

    /// Reborrows this editing cursor as a read-only one at the same
    /// position.
    pub fn as_cursor(&self) -> Cursor<'_, T, A> {
        Cursor {
            index: self.index,
            current: self.current,
            list: &*self.list,
        }
    }

    /// Consumes this editing cursor into a read-only one at the same
    /// position.
    pub fn into_cursor(self) -> Cursor<'a, T, A> {
        self.into()
    }

    /// Inserts `elem` before the cursor position and leaves the cursor
    /// over the new node, keeping its index.
    ///
    /// ```text
    /// [ A|B C ]  --insert(X)-->  [ A|X B C ]
    /// ```
    ///
    /// This operation should compute in *O*(1) time. If the allocator
    /// cannot provide a node, the process is aborted through
    /// [`std::alloc::handle_alloc_error`]; see [`CursorMut::try_insert`]
    /// for the reporting variant.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 4]);
    ///
    /// let mut cursor = list.cursor_mut(2);
    /// cursor.insert(3);
    /// assert_eq!(cursor.index(), 2);
    /// assert_eq!(cursor.current(), Some(&3));
    ///
    /// assert_eq!(list.into_vec(), vec![1, 2, 3, 4]);
    /// ```
    pub fn insert(&mut self, elem: T) {
        let node = self.list.new_node(elem);
        let next = self.current;
        // SAFETY: the node is freshly allocated and `next` is a position
        // of this list.
        unsafe { self.list.attach_node(next, node) };
        self.current = Some(node);
    }

    /// Inserts `elem` before the cursor position, reporting
    /// [`Error::Alloc`] if the allocator cannot provide a node.
    ///
    /// On success the cursor ends over the new node, keeping its index;
    /// on failure `elem` is dropped and the list is left unchanged.
    pub fn try_insert(&mut self, elem: T) -> Result<(), Error> {
        let node = Node::new_in(elem, &self.list.alloc)?;
        let next = self.current;
        // SAFETY: the node is freshly allocated and `next` is a position
        // of this list.
        unsafe { self.list.attach_node(next, node) };
        self.current = Some(node);
        Ok(())
    }

    /// Removes the element under the cursor and returns it; the cursor
    /// moves onto the next position, keeping its index. Returns `None` at
    /// the end position, where there is nothing to remove.
    ///
    /// ```text
    /// [ A|B C ]  --remove()-->  [ A|C ]    (returns B)
    /// ```
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    ///
    /// let mut cursor = list.cursor_mut(1);
    /// assert_eq!(cursor.remove(), Some(2));
    /// assert_eq!(cursor.current(), Some(&3));
    /// assert_eq!(cursor.index(), 1);
    ///
    /// assert_eq!(list.into_vec(), vec![1, 3]);
    /// ```
    pub fn remove(&mut self) -> Option<T> {
        let node = self.current?;
        // SAFETY: `node` is a node of this list; the cursor steps onto
        // its successor before the node is detached and freed.
        unsafe {
            self.current = (*node.as_ptr()).next;
            self.list.detach_node(node);
            let node = Node::take_in(node, &self.list.alloc);
            Some(node.into_element())
        }
    }

    /// Removes the element before the cursor and returns it, or `None`
    /// over the first element.
    ///
    /// ```text
    /// [ A B|C ]  --backspace()-->  [ A|C ]    (returns B)
    /// ```
    ///
    /// This operation should compute in *O*(1) time.
    pub fn backspace(&mut self) -> Option<T> {
        self.move_prev().ok()?;
        self.remove()
    }

    /// Splits the list at the cursor, returning a new list holding the
    /// elements from the cursor to the back. The cursor ends at the end
    /// position of the shortened list, and the new list allocates through
    /// a clone of the old one's allocator.
    ///
    /// ```text
    /// [ A B|C D ]  --split()-->  [ A B |]    (returns [ C D ])
    /// ```
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3, 4]);
    ///
    /// let mut cursor = list.cursor_mut(2);
    /// let tail = cursor.split();
    /// assert!(cursor.at_end());
    ///
    /// assert_eq!(list.into_vec(), vec![1, 2]);
    /// assert_eq!(tail.into_vec(), vec![3, 4]);
    /// ```
    pub fn split(&mut self) -> List<T, A>
    where
        A: Clone,
    {
        let alloc = self.list.alloc.clone();
        match self.current.take() {
            Some(front) => {
                let len = self.list.len - self.index;
                let back = self
                    .list
                    .tail
                    .expect("a list with a cursor on a node cannot be empty");
                // SAFETY: `front..=back` is the chain from the cursor to
                // the last node, holding exactly `len` nodes.
                let detached = unsafe { self.list.detach_nodes(front, back, len) };
                List::from_detached_in(detached, alloc)
            }
            None => List::new_in(alloc),
        }
    }

    /// Prepends an element to the front of the list, leaving the cursor
    /// over the same element; its index grows by one.
    ///
    /// This operation should compute in *O*(1) time.
    pub fn push_front(&mut self, elem: T) {
        let node = self.list.new_node(elem);
        let head = self.list.head;
        // SAFETY: the node is freshly allocated and `head` is the front
        // position of this list.
        unsafe { self.list.attach_node(head, node) };
        self.index += 1;
    }

    /// Appends an element to the back of the list, leaving the cursor
    /// over the same element.
    ///
    /// This operation should compute in *O*(1) time.
    pub fn push_back(&mut self, elem: T) {
        let node = self.list.new_node(elem);
        // SAFETY: the node is freshly allocated and `None` is the end
        // position of this list.
        unsafe { self.list.attach_node(None, node) };
        if self.at_end() {
            self.index += 1;
        }
    }

    /// Removes and returns the first element of the list, or `None` if
    /// it is empty. A cursor over the popped node steps onto the next
    /// position.
    ///
    /// This operation should compute in *O*(1) time.
    pub fn pop_front(&mut self) -> Option<T> {
        let node = self.list.head?;
        if self.index == 0 {
            // The cursor sits on the node being popped, step off it first.
            // SAFETY: `node` is the first node of a non-empty list.
            self.current = unsafe { (*node.as_ptr()).next };
        } else {
            self.index -= 1;
        }
        // SAFETY: `node` is the first node of this list and the cursor no
        // longer stands on it.
        unsafe {
            self.list.detach_node(node);
            let node = Node::take_in(node, &self.list.alloc);
            Some(node.into_element())
        }
    }

    /// Removes and returns the last element of the list, or `None` if it
    /// is empty. A cursor over the popped node steps to the end position.
    ///
    /// This operation should compute in *O*(1) time.
    pub fn pop_back(&mut self) -> Option<T> {
        let node = self.list.tail?;
        if self.current == Some(node) {
            // The cursor sits on the node being popped, step off to the end.
            self.current = None;
        } else if self.at_end() {
            self.index -= 1;
        }
        // SAFETY: `node` is the last node of this list and the cursor no
        // longer stands on it.
        unsafe {
            self.list.detach_node(node);
            let node = Node::take_in(node, &self.list.alloc);
            Some(node.into_element())
        }
    }
}

impl<'a, T: 'a> CursorMut<'a, T> {
    /// Moves the elements of `other` in before the cursor. The cursor
    /// stays over its element, with its index grown by `other.len()`.
    ///
    /// ```text
    /// [ A|B ]  --splice([ X Y ])-->  [ A X Y|B ]
    /// ```
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 4]);
    ///
    /// let mut cursor = list.cursor_mut(1);
    /// cursor.splice(List::from_iter([2, 3]));
    /// assert_eq!(cursor.current(), Some(&4));
    /// assert_eq!(cursor.index(), 3);
    ///
    /// assert_eq!(list.into_vec(), vec![1, 2, 3, 4]);
    /// ```
    pub fn splice(&mut self, other: List<T>) {
        if let Some(detached) = other.into_detached() {
            self.index += detached.len;
            let next = self.current;
            // SAFETY: the chain is well formed and `next` is a position
            // of this list.
            unsafe { self.list.attach_nodes(next, detached) };
        }
    }
}

impl<'a, T: 'a, A: Allocator> From<CursorMut<'a, T, A>> for Cursor<'a, T, A> {
    fn from(cursor: CursorMut<'a, T, A>) -> Self {
        Cursor {
            index: cursor.index,
            current: cursor.current,
            list: cursor.list,
        }
    }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for Cursor<'_, T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor")
            .field(&self.list)
            .field(&self.index)
            .finish()
    }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for CursorMut<'_, T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CursorMut")
            .field(&self.list)
            .field(&self.index)
            .finish()
    }
}

unsafe impl<T: Sync, A: Allocator + Sync> Send for Cursor<'_, T, A> {}
unsafe impl<T: Sync, A: Allocator + Sync> Sync for Cursor<'_, T, A> {}
unsafe impl<T: Send, A: Allocator + Send> Send for CursorMut<'_, T, A> {}
unsafe impl<T: Sync, A: Allocator + Sync> Sync for CursorMut<'_, T, A> {}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::list::tests::assert_list;
    use crate::list::List;
    use std::iter::FromIterator;

    #[test]
    fn movement_stops_at_both_boundaries() {
        let list = List::from_iter([1, 2, 3]);
        let mut cursor = list.cursor_front();
        assert!(!cursor.is_empty());
        assert_eq!(cursor.current(), Some(&1));
        assert_eq!(cursor.try_current(), Ok(&1));
        assert_eq!(cursor.move_prev(), Err(Error::OutOfBounds));
        assert_eq!(cursor.index(), 0);

        assert!(cursor.move_next().is_ok());
        assert!(cursor.move_next().is_ok());
        assert!(cursor.move_next().is_ok());
        assert!(cursor.at_end());
        assert_eq!(cursor.index(), 3);
        assert_eq!(cursor.try_current(), Err(Error::OutOfBounds));
        assert_eq!(cursor.move_next(), Err(Error::OutOfBounds));
        assert_eq!(cursor.index(), 3);

        assert!(cursor.move_prev().is_ok());
        assert_eq!(cursor.current(), Some(&3));
        assert_eq!(cursor.index(), 2);
    }

    #[test]
    fn empty_list_cursor_is_at_end() {
        let list: List<i32> = List::new();
        let mut cursor = list.cursor_front();
        assert!(cursor.at_end());
        assert!(cursor.is_empty());
        assert_eq!(cursor.index(), 0);
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.move_next(), Err(Error::OutOfBounds));
        assert_eq!(cursor.move_prev(), Err(Error::OutOfBounds));
        assert_eq!(list.cursor_front(), list.cursor_end());
    }

    #[test]
    fn cursor_equality_and_ordering() {
        let list = List::from_iter([1, 2, 3]);
        let front = list.cursor_front();
        let mut walker = front.clone();
        assert_eq!(front, walker);

        walker.move_next().unwrap();
        assert_ne!(front, walker);
        assert!(front < walker);

        let other = List::from_iter([1, 2, 3]);
        assert_ne!(other.cursor_front(), front);
        assert_eq!(other.cursor_front().partial_cmp(&front), None);
    }

    #[test]
    fn seek_jumps_both_directions() {
        let list = List::from_iter(0..10);
        let mut cursor = list.cursor_front();

        cursor.seek_to(7).unwrap();
        assert_eq!(cursor.current(), Some(&7));
        cursor.seek_to(2).unwrap();
        assert_eq!(cursor.current(), Some(&2));

        cursor.seek_forward(3).unwrap();
        assert_eq!(cursor.current(), Some(&5));
        cursor.seek_backward(5).unwrap();
        assert_eq!(cursor.current(), Some(&0));

        assert_eq!(cursor.seek_to(11), Err(Error::OutOfBounds));
        assert_eq!(cursor.index(), 0);

        cursor.seek_to(10).unwrap();
        assert!(cursor.at_end());
        assert_eq!(cursor.seek_forward(1), Err(Error::OutOfBounds));
    }

    #[test]
    fn cursor_at_position_picks_the_nearer_end() {
        let list = List::from_iter(0..10);
        assert_eq!(list.cursor(0).current(), Some(&0));
        assert_eq!(list.cursor(4).index(), 4);
        assert_eq!(list.cursor(9).current(), Some(&9));
        assert_eq!(list.cursor(10).current(), None);
    }

    #[test]
    #[should_panic(expected = "Cannot create a cursor")]
    fn cursor_beyond_the_end_panics() {
        let list = List::from_iter([1, 2]);
        let _ = list.cursor(3);
    }

    #[test]
    fn move_to_front_and_end_jump_directly() {
        let list = List::from_iter([1, 2, 3]);
        let mut cursor = list.cursor(2);
        cursor.move_to_front();
        assert_eq!((cursor.index(), cursor.current()), (0, Some(&1)));
        cursor.move_to_end();
        assert_eq!((cursor.index(), cursor.current()), (3, None));
    }

    #[test]
    fn previous_reads_behind_the_cursor() {
        let list = List::from_iter([1]);
        assert_eq!(list.cursor_front().previous(), None);
        assert_eq!(list.cursor_end().previous(), Some(&1));
        assert_eq!(list.cursor_back().current(), Some(&1));
    }

    #[test]
    fn insert_leaves_the_cursor_on_the_new_node() {
        let mut list = List::from_iter([1, 2, 4]);
        let mut cursor = list.cursor_mut(2);
        assert_eq!(cursor.current(), Some(&4));

        cursor.insert(3);
        assert_eq!(cursor.current(), Some(&3));
        assert_eq!(cursor.index(), 2);
        drop(cursor);

        assert_list(&list, &[1, 2, 3, 4]);
    }

    #[test]
    fn insert_at_the_end_appends() {
        let mut list = List::from_iter([1]);
        let mut cursor = list.cursor_end_mut();
        cursor.insert(2);
        assert_eq!(cursor.current(), Some(&2));
        assert_eq!(cursor.index(), 1);

        cursor.move_next().unwrap();
        assert!(cursor.at_end());
        drop(cursor);

        assert_list(&list, &[1, 2]);
    }

    #[test]
    fn insert_into_an_empty_list_through_its_end_cursor() {
        let mut list = List::new();
        let mut cursor = list.cursor_end_mut();
        assert!(cursor.is_empty());

        cursor.insert(5);
        assert_eq!(cursor.current(), Some(&5));
        assert_eq!(cursor.index(), 0);
        assert!(!cursor.is_empty());
        drop(cursor);

        assert_list(&list, &[5]);
    }

    #[test]
    fn remove_steps_onto_the_next_element() {
        let mut list = List::from_iter([1, 2, 3, 4]);
        let mut cursor = list.cursor_front_mut();

        assert_eq!(cursor.remove(), Some(1));
        assert_eq!(cursor.current(), Some(&2));
        assert_eq!(cursor.index(), 0);

        cursor.move_next().unwrap();
        assert_eq!(cursor.remove(), Some(3));
        assert_eq!(cursor.current(), Some(&4));

        assert_eq!(cursor.remove(), Some(4));
        assert!(cursor.at_end());
        assert_eq!(cursor.remove(), None);
        drop(cursor);

        assert_list(&list, &[2]);
    }

    #[test]
    fn backspace_removes_before_the_cursor() {
        let mut list = List::from_iter([1, 2, 3]);

        let mut cursor = list.cursor_end_mut();
        assert_eq!(cursor.backspace(), Some(3));
        assert!(cursor.at_end());
        assert_eq!(cursor.index(), 2);
        drop(cursor);

        let mut cursor = list.cursor_mut(1);
        assert_eq!(cursor.backspace(), Some(1));
        assert_eq!(cursor.current(), Some(&2));
        assert_eq!(cursor.index(), 0);
        assert_eq!(cursor.backspace(), None);
        drop(cursor);

        assert_list(&list, &[2]);
    }

    #[test]
    fn insert_then_remove_is_a_round_trip() {
        let mut list = List::from_iter(0..5);
        let mut cursor = list.cursor_mut(2);
        cursor.insert(9);
        assert_eq!(cursor.remove(), Some(9));
        assert_eq!(cursor.current(), Some(&2));
        drop(cursor);
        assert_list(&list, &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn cursor_push_and_pop_track_the_position() {
        let mut list = List::from_iter([2, 3]);
        let mut cursor = list.cursor_front_mut();
        cursor.move_next().unwrap();

        cursor.push_front(1);
        assert_eq!(cursor.index(), 2);
        assert_eq!(cursor.current(), Some(&3));

        cursor.push_back(4);
        assert_eq!(cursor.index(), 2);

        assert_eq!(cursor.pop_front(), Some(1));
        assert_eq!(cursor.index(), 1);
        assert_eq!(cursor.pop_back(), Some(4));
        assert_eq!(cursor.index(), 1);
        assert_eq!(cursor.current(), Some(&3));
        drop(cursor);

        assert_list(&list, &[2, 3]);
    }

    #[test]
    fn cursor_pops_step_off_the_vanishing_node() {
        let mut list = List::from_iter([1, 2]);
        let mut cursor = list.cursor_front_mut();
        assert_eq!(cursor.pop_front(), Some(1));
        assert_eq!(cursor.current(), Some(&2));
        assert_eq!(cursor.index(), 0);
        drop(cursor);

        let mut cursor = list.cursor_back_mut();
        assert_eq!(cursor.current(), Some(&2));
        assert_eq!(cursor.pop_back(), Some(2));
        assert!(cursor.at_end());
        assert_eq!(cursor.index(), 0);
        drop(cursor);
        assert_list(&list, &[]);
    }

    #[test]
    fn popping_from_the_end_position_keeps_it_valid() {
        let mut list = List::from_iter([1, 2]);
        let mut cursor = list.cursor_end_mut();

        assert_eq!(cursor.pop_back(), Some(2));
        assert!(cursor.at_end());
        assert_eq!(cursor.index(), 1);

        assert_eq!(cursor.pop_front(), Some(1));
        assert!(cursor.at_end());
        assert_eq!(cursor.index(), 0);

        assert_eq!(cursor.pop_back(), None);
        drop(cursor);
        assert_list(&list, &[]);
    }

    #[test]
    fn push_back_under_a_mid_list_cursor() {
        let mut list = List::from_iter([1, 2]);
        let mut cursor = list.cursor_front_mut();
        cursor.push_back(3);
        assert_eq!(cursor.index(), 0);
        assert_eq!(cursor.current(), Some(&1));
        drop(cursor);
        assert_list(&list, &[1, 2, 3]);
    }

    #[test]
    fn split_then_splice_round_trips() {
        let mut list = List::from_iter(0..6);
        let mut cursor = list.cursor_mut(4);
        let tail = cursor.split();
        assert!(cursor.at_end());
        assert_eq!(cursor.index(), 4);
        drop(cursor);
        assert_list(&list, &[0, 1, 2, 3]);
        assert_list(&tail, &[4, 5]);

        let mut cursor = list.cursor_mut(2);
        cursor.splice(tail);
        assert_eq!(cursor.current(), Some(&2));
        assert_eq!(cursor.index(), 4);
        drop(cursor);
        assert_list(&list, &[0, 1, 4, 5, 2, 3]);
    }

    #[test]
    fn split_at_the_end_returns_an_empty_list() {
        let mut list = List::from_iter([1]);
        let mut cursor = list.cursor_end_mut();
        let tail = cursor.split();
        assert!(cursor.at_end());
        drop(cursor);
        assert_list(&tail, &[]);
        assert_list(&list, &[1]);
    }

    #[test]
    fn splice_into_an_empty_list() {
        let mut list: List<i32> = List::new();
        let mut cursor = list.cursor_front_mut();
        cursor.splice(List::from_iter([1, 2]));
        assert_eq!(cursor.index(), 2);
        assert!(cursor.at_end());
        drop(cursor);
        assert_list(&list, &[1, 2]);
    }

    #[test]
    fn elements_stay_in_place_while_neighbors_leave() {
        let mut list = List::from_iter([1, 2, 3]);
        let addr = list.cursor(2).current().unwrap() as *const i32;

        assert_eq!(list.pop_front(), Some(1));
        let addr_after = list.cursor(1).current().unwrap() as *const i32;
        assert_eq!(addr, addr_after);
    }

    #[test]
    fn view_and_as_cursor_read_through() {
        let mut list = List::from_iter([1, 2, 3]);
        let mut cursor = list.cursor_front_mut();
        cursor.move_next().unwrap();

        assert_eq!(cursor.view().len(), 3);
        let read = cursor.as_cursor();
        assert_eq!(read.index(), 1);
        assert_eq!(read.current(), Some(&2));

        assert_eq!(cursor.into_cursor().index(), 1);
    }

    #[test]
    fn current_mut_edits_in_place() {
        let mut list = List::from_iter([1, 2]);
        let mut cursor = list.cursor_front_mut();
        if let Some(elem) = cursor.current_mut() {
            *elem = 10;
        }
        assert_eq!(cursor.previous_mut(), None);
        cursor.move_next().unwrap();
        assert_eq!(cursor.previous(), Some(&10));
        *cursor.previous_mut().unwrap() += 1;
        *cursor.try_current_mut().unwrap() = 20;

        cursor.move_next().unwrap();
        assert_eq!(cursor.try_current_mut(), Err(Error::OutOfBounds));
        drop(cursor);
        assert_list(&list, &[11, 20]);
    }
}
