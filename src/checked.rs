//! A compile-time-checked rendition of the doubly-linked list, used to
//! cross-check the pointer-based [`List`](crate::List).
//!
//! Every node is owned by exactly two half references, one per neighbor,
//! and element borrows go through a [`GhostToken`] brand, so the borrow
//! checker itself enforces the aliasing discipline that the pointer list
//! maintains by hand.

use ghost_cell::{GhostCell, GhostToken};
use static_rc::StaticRc;
use std::ops::Deref;

type Half<T> = StaticRc<T, 1, 2>;
type Full<T> = StaticRc<T, 2, 2>;

type NodePtr<'id, T> = Half<GhostCell<'id, Node<'id, T>>>;

struct Node<'id, T> {
    links: [Option<NodePtr<'id, T>>; 2],
    elem: T,
}

impl<'id, T> Node<'id, T> {
    fn new(elem: T) -> Self {
        let links = [None, None];
        Self { elem, links }
    }
}

pub struct List<'id, T> {
    links: [Option<NodePtr<'id, T>>; 2],
    len: usize,
}

impl<'id, T> Default for List<'id, T> {
    fn default() -> Self {
        let links = [None, None];
        Self { links, len: 0 }
    }
}

impl<'id, T> List<'id, T> {
    // HEAD and TAIL double as the node link indices (next and prev), so
    // one body serves both sides: `links[side]` of a node points away
    // from that side of the list.
    const HEAD: usize = 0;
    const TAIL: usize = 1;

    fn push_at(&mut self, side: usize, elem: T, token: &mut GhostToken<'id>) {
        let oppo = 1 - side;
        let (left, right) = Full::split(Full::new(GhostCell::new(Node::new(elem))));
        match self.links[side].take() {
            Some(this_side) => {
                this_side.deref().borrow_mut(token).links[oppo] = Some(left);
                right.deref().borrow_mut(token).links[side] = Some(this_side);
            }
            None => self.links[oppo] = Some(left),
        }
        self.links[side] = Some(right);
        self.len += 1;
    }

    fn pop_at(&mut self, side: usize, token: &mut GhostToken<'id>) -> Option<T> {
        debug_assert!(side < 2);
        let oppo = 1 - side;
        let right = self.links[side].take()?;
        let left = match right.deref().borrow_mut(token).links[side].take() {
            Some(this_side) => {
                let left = this_side.deref().borrow_mut(token).links[oppo]
                    .take()
                    .unwrap();
                self.links[side] = Some(this_side);
                left
            }
            None => self.links[oppo].take().unwrap(),
        };
        self.len -= 1;
        Some(Full::into_box(Full::join(left, right)).into_inner().elem)
    }

    fn peek_at<'a>(&'a self, side: usize, token: &'a GhostToken<'id>) -> Option<&'a T> {
        self.links[side]
            .as_ref()
            .map(|node| &node.deref().borrow(token).elem)
    }
}

impl<'id, T> List<'id, T> {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn front<'a>(&'a self, token: &'a GhostToken<'id>) -> Option<&'a T> {
        self.peek_at(Self::HEAD, token)
    }

    pub fn back<'a>(&'a self, token: &'a GhostToken<'id>) -> Option<&'a T> {
        self.peek_at(Self::TAIL, token)
    }

    pub fn push_front(&mut self, elem: T, token: &mut GhostToken<'id>) {
        self.push_at(Self::HEAD, elem, token);
    }

    pub fn push_back(&mut self, elem: T, token: &mut GhostToken<'id>) {
        self.push_at(Self::TAIL, elem, token);
    }

    pub fn pop_front(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        self.pop_at(Self::HEAD, token)
    }

    pub fn pop_back(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        self.pop_at(Self::TAIL, token)
    }

    /// Pops every element. The nodes are owned by paired half
    /// references that must be rejoined one by one; dropping a
    /// non-empty list without a token would leak them.
    pub fn clear(&mut self, token: &mut GhostToken<'id>) {
        while self.pop_front(token).is_some() {}
    }
}

#[cfg(test)]
mod tests {
    use crate::checked::List;
    use ghost_cell::GhostToken;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn list_push_pop() {
        GhostToken::new(|mut token| {
            let mut list = List::new();
            assert!(list.is_empty());
            list.push_back(1, &mut token);
            list.push_front(2, &mut token);
            assert_eq!(list.len(), 2);
            assert_eq!(list.front(&token), Some(&2));
            assert_eq!(list.back(&token), Some(&1));
            assert_eq!(list.pop_back(&mut token), Some(1));
            assert_eq!(list.pop_front(&mut token), Some(2));
            assert!(list.is_empty());
        })
    }

    #[test]
    fn matches_the_pointer_list_on_random_deque_operations() {
        GhostToken::new(|mut token| {
            let mut rng = StdRng::seed_from_u64(0x5eed);
            let mut checked = List::new();
            let mut list = crate::List::new();

            for step in 0..4096_u32 {
                match rng.gen_range(0..4) {
                    0 => {
                        checked.push_front(step, &mut token);
                        list.push_front(step);
                    }
                    1 => {
                        checked.push_back(step, &mut token);
                        list.push_back(step);
                    }
                    2 => {
                        assert_eq!(checked.pop_front(&mut token), list.pop_front());
                    }
                    _ => {
                        assert_eq!(checked.pop_back(&mut token), list.pop_back());
                    }
                }
                list.check_links();
                assert_eq!(checked.len(), list.len());
                assert_eq!(checked.front(&token), list.front().ok());
                assert_eq!(checked.back(&token), list.back().ok());
            }

            checked.clear(&mut token);
            list.clear();
            assert!(checked.is_empty());
            assert!(list.is_empty());
        })
    }
}
