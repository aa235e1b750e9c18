use crate::list::alloc::{Allocator, Global};
use crate::list::{Link, List, Node};
use std::fmt;
use std::iter::{FromIterator, FusedIterator};
use std::marker::PhantomData;

/// An iterator over the elements of a [`List`].
///
/// It walks the chain between a pair of unvisited end nodes, counting the
/// elements left so the two directions know when they meet.
///
/// Though the `Iter` holds no reference to the list, it *borrows* the
/// list immutably, so a phantom marker is added to keep the list from
/// being written while the iterator is alive:
///
/// ```compile_fail
/// use chain_list::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 3]);
/// let mut iter = list.iter();
///
/// // Won't compile, because the list is already borrowed immutably.
/// list.push_back(4);
/// println!("{:?}", iter.next());
/// ```
pub struct Iter<'a, T: 'a> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    _marker: PhantomData<&'a Node<T>>,
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new<A: Allocator>(list: &'a List<T, A>) -> Self {
        Iter {
            head: list.head,
            tail: list.tail,
            len: list.len,
            _marker: PhantomData,
        }
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }
        self.head.map(|node| {
            // SAFETY: `len > 0`, so the node is a live node of the
            // borrowed list.
            unsafe {
                let node = &*node.as_ptr();
                self.len -= 1;
                self.head = node.next;
                &node.element
            }
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn last(mut self) -> Option<&'a T> {
        self.next_back()
    }
}

impl<'a, T: 'a> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }
        self.tail.map(|node| {
            // SAFETY: `len > 0`, so the node is a live node of the
            // borrowed list.
            unsafe {
                let node = &*node.as_ptr();
                self.len -= 1;
                self.tail = node.prev;
                &node.element
            }
        })
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { ..*self }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

// SAFETY: an `Iter` only ever hands out `&T`.
unsafe impl<T: Sync> Send for Iter<'_, T> {}
unsafe impl<T: Sync> Sync for Iter<'_, T> {}

/// A mutable iterator over the elements of a [`List`].
///
/// The structure of the list cannot change while it is alive, only the
/// elements it yields; see [`List::cursor_front_mut`] for structural
/// edits during iteration.
pub struct IterMut<'a, T: 'a> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    _marker: PhantomData<&'a mut Node<T>>,
}

impl<'a, T: 'a> IterMut<'a, T> {
    pub(crate) fn new<A: Allocator>(list: &'a mut List<T, A>) -> Self {
        IterMut {
            head: list.head,
            tail: list.tail,
            len: list.len,
            _marker: PhantomData,
        }
    }
}

impl<'a, T: 'a> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        if self.len == 0 {
            return None;
        }
        self.head.map(|node| {
            // SAFETY: `len > 0`, so the node is a live node of the
            // exclusively borrowed list, and it is never yielded twice.
            unsafe {
                let node = &mut *node.as_ptr();
                self.len -= 1;
                self.head = node.next;
                &mut node.element
            }
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn last(mut self) -> Option<&'a mut T> {
        self.next_back()
    }
}

impl<'a, T: 'a> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<&'a mut T> {
        if self.len == 0 {
            return None;
        }
        self.tail.map(|node| {
            // SAFETY: `len > 0`, so the node is a live node of the
            // exclusively borrowed list, and it is never yielded twice.
            unsafe {
                let node = &mut *node.as_ptr();
                self.len -= 1;
                self.tail = node.prev;
                &mut node.element
            }
        })
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let remaining = Iter {
            head: self.head,
            tail: self.tail,
            len: self.len,
            _marker: PhantomData,
        };
        f.debug_list().entries(remaining).finish()
    }
}

// SAFETY: an `IterMut` hands out `&mut T` to distinct elements.
unsafe impl<T: Send> Send for IterMut<'_, T> {}
unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

/// An owning iterator over the elements of a [`List`].
///
/// It pops the remaining elements off the list one by one; dropping the
/// iterator drops whatever was not consumed.
pub struct IntoIter<T, A: Allocator = Global> {
    list: List<T, A>,
}

impl<T, A: Allocator> Iterator for IntoIter<T, A> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T, A: Allocator> DoubleEndedIterator for IntoIter<T, A> {
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_back()
    }
}

impl<T, A: Allocator> ExactSizeIterator for IntoIter<T, A> {}

impl<T, A: Allocator> FusedIterator for IntoIter<T, A> {}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for IntoIter<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.list).finish()
    }
}

impl<T, A: Allocator> IntoIterator for List<T, A> {
    type Item = T;
    type IntoIter = IntoIter<T, A>;

    fn into_iter(self) -> IntoIter<T, A> {
        IntoIter { list: self }
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a List<T, A> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a mut List<T, A> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

impl<T, const N: usize> From<[T; N]> for List<T> {
    fn from(array: [T; N]) -> Self {
        Self::from_iter(array)
    }
}

impl<T, A: Allocator> Extend<T> for List<T, A> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|elem| self.push_back(elem));
    }
}

impl<'a, T: 'a + Copy, A: Allocator> Extend<&'a T> for List<T, A> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

#[cfg(test)]
mod tests {
    use crate::list::tests::{assert_list, DropChecker};
    use crate::list::List;
    use std::iter::FromIterator;

    #[test]
    fn forward_iteration_visits_in_order() {
        let list = List::from_iter(0..5);
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![0, 1, 2, 3, 4]);
        assert_eq!(list.iter().count(), 5);
        assert_eq!(list.iter().last(), Some(&4));
    }

    #[test]
    fn reverse_iteration_visits_back_to_front() {
        let list = List::from_iter(0..5);
        let reversed = Vec::from_iter(list.iter().rev().copied());
        assert_eq!(reversed, vec![4, 3, 2, 1, 0]);
    }

    #[test]
    fn iteration_over_the_empty_list() {
        let list: List<i32> = List::new();
        assert_eq!(list.iter().next(), None);
        assert_eq!(list.iter().next_back(), None);
        assert_eq!(list.iter().size_hint(), (0, Some(0)));
    }

    #[test]
    fn both_directions_meet_in_the_middle() {
        let list = List::from_iter([1, 2, 3, 4, 5]);
        let mut iter = list.iter();
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&5));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.size_hint(), (1, Some(1)));
        assert_eq!(iter.next(), Some(&3));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn exhausted_iterators_stay_exhausted() {
        let list = List::from_iter([1]);
        let mut iter = list.iter();
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn cloned_iterators_advance_independently() {
        let list = List::from_iter([1, 2, 3]);
        let mut first = list.iter();
        first.next();
        let mut second = first.clone();
        assert_eq!(first.next(), Some(&2));
        assert_eq!(second.next(), Some(&2));
    }

    #[test]
    fn iter_mut_rewrites_elements() {
        let mut list = List::from_iter([1, 2, 3]);
        for elem in list.iter_mut() {
            *elem *= 10;
        }
        assert_list(&list, &[10, 20, 30]);

        if let Some(last) = list.iter_mut().next_back() {
            *last = 0;
        }
        assert_list(&list, &[10, 20, 0]);
    }

    #[test]
    fn into_iter_consumes_from_both_ends() {
        let list = List::from_iter([1, 2, 3, 4]);
        let mut iter = list.into_iter();
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next_back(), Some(4));
        assert_eq!(iter.len(), 2);
        assert_eq!(Vec::from_iter(iter), vec![2, 3]);
    }

    #[test]
    fn dropping_a_partial_into_iter_drops_the_rest() {
        let checker = DropChecker::default();
        let mut list = List::new();
        (0..5).for_each(|i| list.push_back(checker.item(i)));

        let mut iter = list.into_iter();
        drop(iter.next());
        drop(iter.next());
        drop(iter);
        assert_eq!(checker.dropped.borrow().len(), 5);
    }

    #[test]
    fn collects_from_an_iterator_and_an_array() {
        let list = List::from_iter((0..4).map(|i| i * i));
        assert_list(&list, &[0, 1, 4, 9]);

        let list = List::from([7, 8]);
        assert_list(&list, &[7, 8]);
    }

    #[test]
    fn extend_accepts_values_and_copied_references() {
        let mut list = List::from_iter([1]);
        list.extend([2, 3]);
        list.extend(&[4, 5]);
        assert_list(&list, &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn iterators_debug_like_sequences() {
        let list = List::from_iter([1, 2]);
        assert_eq!(format!("{:?}", list.iter()), "[1, 2]");
    }
}
