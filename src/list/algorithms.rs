use crate::list::alloc::Allocator;
use crate::list::List;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

mod drain;

pub use drain::{Drain, DrainFilter};

impl<T: PartialEq, A: Allocator> PartialEq for List<T, A> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other)
    }
}

impl<T: Eq, A: Allocator> Eq for List<T, A> {}

impl<T: PartialOrd, A: Allocator> PartialOrd for List<T, A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord, A: Allocator> Ord for List<T, A> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone, A: Allocator + Clone> Clone for List<T, A> {
    fn clone(&self) -> Self {
        let mut list = List::new_in(self.alloc.clone());
        list.extend(self.iter().cloned());
        list
    }

    /// Reuses the existing nodes: clones into them element by element,
    /// then trims or grows the tail to match `other`.
    fn clone_from(&mut self, other: &Self) {
        let mut iter_other = other.iter();
        if self.len() > other.len() {
            self.split_off(other.len());
        }
        for (elem, elem_other) in self.iter_mut().zip(&mut iter_other) {
            elem.clone_from(elem_other);
        }
        self.extend(iter_other.cloned());
    }
}

impl<T: Hash, A: Allocator> Hash for List<T, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for elt in self {
            elt.hash(state);
        }
    }
}

impl<T, A: Allocator> List<T, A> {
    /// Returns `true` if the `List` contains an element equal to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Removes all elements, yielding them front to back. Dropping the
    /// iterator clears whatever it has not yielded yet.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let drained: Vec<_> = list.drain().collect();
    /// assert_eq!(drained, vec![1, 2, 3]);
    /// assert!(list.is_empty());
    /// ```
    pub fn drain(&mut self) -> Drain<'_, T, A> {
        Drain::new(self)
    }

    /// Removes exactly the elements for which `filter` answers `true`,
    /// yielding them front to back; the rest stay in the list. Dropping
    /// the iterator removes the matching remainder.
    ///
    /// The filter sees each element mutably, so it may edit elements it
    /// decides to keep.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(0..8);
    /// let evens: Vec<_> = list.drain_filter(|n| *n % 2 == 0).collect();
    /// assert_eq!(evens, vec![0, 2, 4, 6]);
    /// assert_eq!(list.into_vec(), vec![1, 3, 5, 7]);
    /// ```
    pub fn drain_filter<F>(&mut self, filter: F) -> DrainFilter<'_, T, F, A>
    where
        F: FnMut(&mut T) -> bool,
    {
        DrainFilter::new(self, filter)
    }
}

#[cfg(test)]
mod tests {
    use crate::list::tests::{assert_list, DropChecker};
    use crate::list::List;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    use std::iter::FromIterator;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn lists_compare_by_their_elements() {
        let a = List::from_iter([1, 2, 3]);
        let b = List::from_iter([1, 2, 3]);
        let c = List::from_iter([1, 2, 4]);
        let d = List::from_iter([1, 2]);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
        assert!(a < c);
        assert!(d < a);
        assert_eq!(a.cmp(&b), std::cmp::Ordering::Equal);
    }

    #[test]
    fn equal_lists_hash_alike() {
        let a = List::from_iter([1, 2, 3]);
        let b = List::from_iter([1, 2, 3]);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(hash_of(&a), hash_of(&List::from_iter([1, 2])));
    }

    #[test]
    fn clones_are_independent() {
        let mut original = List::from_iter([1, 2, 3]);
        let copy = original.clone();
        original.push_back(4);
        assert_list(&copy, &[1, 2, 3]);
        assert_list(&original, &[1, 2, 3, 4]);
    }

    #[test]
    fn clone_from_reshapes_the_receiver() {
        let short = List::from_iter([1, 2]);
        let long = List::from_iter([3, 4, 5, 6]);

        let mut list = List::from_iter([9, 9, 9]);
        list.clone_from(&short);
        assert_list(&list, &[1, 2]);

        list.clone_from(&long);
        assert_list(&list, &[3, 4, 5, 6]);
    }

    #[test]
    fn contains_scans_the_elements() {
        let list = List::from_iter([0, 1, 2]);
        assert!(list.contains(&0));
        assert!(!list.contains(&10));
    }

    #[test]
    fn drain_yields_everything_and_clears() {
        let mut list = List::from_iter(0..5);
        assert_eq!(Vec::from_iter(list.drain()), vec![0, 1, 2, 3, 4]);
        assert_list(&list, &[]);
    }

    #[test]
    fn dropped_drain_still_clears() {
        let checker = DropChecker::default();
        let mut list = List::new();
        (0..4).for_each(|i| list.push_back(checker.item(i)));

        let mut drain = list.drain();
        drop(drain.next());
        drop(drain);

        assert!(list.is_empty());
        assert_eq!(checker.dropped.borrow().len(), 4);
    }

    #[test]
    fn drain_filter_takes_the_matching_elements() {
        let mut list = List::from_iter(0..8);
        let evens = Vec::from_iter(list.drain_filter(|n| *n % 2 == 0));
        assert_eq!(evens, vec![0, 2, 4, 6]);
        assert_list(&list, &[1, 3, 5, 7]);
    }

    #[test]
    fn dropped_drain_filter_removes_the_rest_of_the_matches() {
        let mut list = List::from_iter(0..8);
        let mut matching = list.drain_filter(|n| *n % 2 == 0);
        assert_eq!(matching.next(), Some(0));
        drop(matching);
        assert_list(&list, &[1, 3, 5, 7]);
    }

    #[test]
    fn drain_filter_can_edit_while_testing() {
        let mut list = List::from_iter([1, 2, 3]);
        let removed = Vec::from_iter(list.drain_filter(|n| {
            *n *= 10;
            *n == 20
        }));
        assert_eq!(removed, vec![20]);
        assert_list(&list, &[10, 30]);
    }
}
