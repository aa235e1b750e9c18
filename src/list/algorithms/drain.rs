use crate::list::alloc::{Allocator, Global};
use crate::list::cursor::CursorMut;
use crate::List;
use std::fmt;
use std::iter::FusedIterator;

/// An iterator produced by [`List::drain`].
pub struct Drain<'a, T: 'a, A: Allocator = Global> {
    list: &'a mut List<T, A>,
}

impl<'a, T: 'a, A: Allocator> Drain<'a, T, A> {
    pub(crate) fn new(list: &'a mut List<T, A>) -> Self {
        Self { list }
    }
}

impl<T, A: Allocator> Iterator for Drain<'_, T, A> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T, A: Allocator> DoubleEndedIterator for Drain<'_, T, A> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl<T, A: Allocator> ExactSizeIterator for Drain<'_, T, A> {}

impl<T, A: Allocator> FusedIterator for Drain<'_, T, A> {}

impl<T, A: Allocator> Drop for Drain<'_, T, A> {
    fn drop(&mut self) {
        self.list.clear();
    }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for Drain<'_, T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Drain").field(self.list).finish()
    }
}

/// An iterator produced by [`List::drain_filter`].
pub struct DrainFilter<'a, T: 'a, F: 'a, A: Allocator = Global>
where
    F: FnMut(&mut T) -> bool,
{
    cursor: CursorMut<'a, T, A>,
    filter: F,
}

impl<'a, T, F, A: Allocator> DrainFilter<'a, T, F, A>
where
    F: FnMut(&mut T) -> bool,
{
    pub(crate) fn new(list: &'a mut List<T, A>, filter: F) -> Self {
        let cursor = list.cursor_front_mut();
        Self { cursor, filter }
    }
}

impl<T, F, A: Allocator> Iterator for DrainFilter<'_, T, F, A>
where
    F: FnMut(&mut T) -> bool,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if (self.filter)(self.cursor.current_mut()?) {
                return self.cursor.remove();
            }
            self.cursor.move_next().ok()?;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cursor.view().len() - self.cursor.index();
        (0, Some(remaining))
    }
}

impl<T, F, A: Allocator> Drop for DrainFilter<'_, T, F, A>
where
    F: FnMut(&mut T) -> bool,
{
    fn drop(&mut self) {
        self.for_each(drop);
    }
}

impl<T: fmt::Debug, F, A: Allocator> fmt::Debug for DrainFilter<'_, T, F, A>
where
    F: FnMut(&mut T) -> bool,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DrainFilter")
            .field(self.cursor.list)
            .finish()
    }
}
