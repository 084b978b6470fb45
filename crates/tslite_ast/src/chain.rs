//! Singly linked, order-preserving sequences.
//!
//! Every list in the tree (statements, array elements, object entries,
//! arguments, bindings, switch cases, union members) is a `Chain<T>`. Each
//! link owns its item and the link after it. Grammar reductions are right
//! recursive, so the natural way to build a chain is to `cons` the leftmost
//! item onto the already built tail; traversal then yields items in source
//! order.
//!
//! Dropping a chain walks it iteratively, so program length never turns into
//! stack depth.

use std::fmt;

/// One link of a [`Chain`].
pub struct Link<T> {
    item: T,
    next: Option<Box<Link<T>>>,
}

impl<T> Link<T> {
    pub fn item(&self) -> &T {
        &self.item
    }

    /// The following link, or `None` at the terminal.
    pub fn next(&self) -> Option<&Link<T>> {
        self.next.as_deref()
    }
}

/// An owned singly linked sequence.
pub struct Chain<T> {
    head: Option<Box<Link<T>>>,
    len: usize,
}

impl<T> Chain<T> {
    pub const fn empty() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn single(item: T) -> Self {
        Self::empty().cons(item)
    }

    /// Prepend `item`, making it the new head.
    pub fn cons(mut self, item: T) -> Self {
        self.push_front(item);
        self
    }

    pub fn push_front(&mut self, item: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Link { item, next }));
        self.len += 1;
    }

    /// Detach and return the head item.
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|link| {
            let Link { item, next } = *link;
            self.head = next;
            self.len -= 1;
            item
        })
    }

    /// Build a chain whose traversal order matches `items`.
    pub fn from_items(items: impl IntoIterator<Item = T>) -> Self {
        let items: Vec<T> = items.into_iter().collect();
        let mut chain = Self::empty();
        for item in items.into_iter().rev() {
            chain.push_front(item);
        }
        chain
    }

    pub fn head(&self) -> Option<&Link<T>> {
        self.head.as_deref()
    }

    pub fn first(&self) -> Option<&T> {
        self.head().map(Link::item)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter { link: self.head() }
    }

    /// Unlink every item, head first.
    pub fn into_items(mut self) -> Vec<T> {
        let mut items = Vec::with_capacity(self.len);
        while let Some(item) = self.pop_front() {
            items.push(item);
        }
        items
    }
}

impl<T> Drop for Chain<T> {
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut current) = link {
            link = current.next.take();
        }
    }
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Clone> Clone for Chain<T> {
    fn clone(&self) -> Self {
        Self::from_items(self.iter().cloned())
    }
}

impl<T: PartialEq> PartialEq for Chain<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: fmt::Debug> fmt::Debug for Chain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for Chain<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_items(iter)
    }
}

/// Borrowing iterator, head to tail.
pub struct Iter<'a, T> {
    link: Option<&'a Link<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.link.map(|link| {
            self.link = link.next();
            &link.item
        })
    }
}

impl<'a, T> IntoIterator for &'a Chain<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Owning iterator, head to tail.
pub struct IntoIter<T>(Chain<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> IntoIterator for Chain<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cons_preserves_source_order() {
        let chain = Chain::empty().cons(3).cons(2).cons(1);
        assert_eq!(chain.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(chain.len(), 3);
        assert_eq!(chain.first(), Some(&1));
    }

    #[test]
    fn test_from_items_matches_next_walk() {
        let chain = Chain::from_items(vec!["s1", "s2", "s3"]);
        let mut seen = Vec::new();
        let mut link = chain.head();
        while let Some(l) = link {
            seen.push(*l.item());
            link = l.next();
        }
        assert_eq!(seen, vec!["s1", "s2", "s3"]);
    }

    #[test]
    fn test_into_items_and_pop() {
        let mut chain: Chain<i32> = (1..=4).collect();
        assert_eq!(chain.pop_front(), Some(1));
        assert_eq!(chain.len(), 3);
        assert_eq!(chain.into_items(), vec![2, 3, 4]);
    }

    #[test]
    fn test_empty() {
        let chain: Chain<u8> = Chain::default();
        assert!(chain.is_empty());
        assert!(chain.head().is_none());
        assert_eq!(chain.into_items(), Vec::<u8>::new());
    }

    #[test]
    fn test_long_chain_drops_without_overflow() {
        let chain: Chain<String> = (0..200_000).map(|i| i.to_string()).collect();
        assert_eq!(chain.len(), 200_000);
        drop(chain);
    }

    #[test]
    fn test_equality_and_debug() {
        let a = Chain::from_items(vec![1, 2]);
        let b = Chain::single(2).cons(1);
        assert_eq!(a, b);
        assert_eq!(format!("{:?}", a), "[1, 2]");
        assert_ne!(a, Chain::single(1));
    }
}
