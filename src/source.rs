//! Element sources for range construction.
//!
//! [`Vec::from_source`](crate::Vec::from_source) branches on what a source
//! can tell about its length before it is consumed:
//!
//! * a [`Counted`] source knows its exact length up front, so the vector
//!   allocates exactly once and fills the block;
//! * a [`SinglePass`] source does not, so the vector starts empty and
//!   appends element by element, growing as it goes.
//!
//! A [`Cursor`] is also a counted source, yielding references to the
//! elements from its position to the end.

use crate::position::Cursor;

use core::iter::FusedIterator;

/// How much a [`Source`] knows about its remaining length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extent {
    /// Exactly this many items remain.
    Exact(usize),
    /// The remaining length is only known after consuming the source.
    Unknown,
}

/// An iterator that can report its [`Extent`] before it is consumed.
pub trait Source: Iterator {
    /// Reports how many items remain, if known.
    fn extent(&self) -> Extent;
}

/// A source with a known length, wrapping an [`ExactSizeIterator`].
///
/// # Examples
/// ```
/// use growvec::source::Counted;
///
/// let vec = growvec::Vec::<u32>::from_source(Counted::new(0..5));
/// assert_eq!(vec.len(), 5);
/// assert_eq!(vec.capacity(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct Counted<I>(I);

impl<I: ExactSizeIterator> Counted<I> {
    /// Wraps an exact-size iterator.
    #[inline]
    pub fn new<S: IntoIterator<IntoIter = I>>(src: S) -> Self {
        Counted(src.into_iter())
    }
}

impl<I: ExactSizeIterator> Iterator for Counted<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<I: ExactSizeIterator> ExactSizeIterator for Counted<I> {}

impl<I: ExactSizeIterator + FusedIterator> FusedIterator for Counted<I> {}

impl<I: ExactSizeIterator> Source for Counted<I> {
    #[inline]
    fn extent(&self) -> Extent {
        Extent::Exact(self.0.len())
    }
}

/// A source that can only be traversed once, with no length known up front.
///
/// # Examples
/// ```
/// use growvec::source::SinglePass;
///
/// let vec = growvec::Vec::<u32>::from_source(SinglePass::new((0..100).filter(|n| n % 10 == 0)));
/// assert_eq!(vec.len(), 10);
/// assert!(vec.capacity() >= 10);
/// ```
#[derive(Debug, Clone)]
pub struct SinglePass<I>(I);

impl<I: Iterator> SinglePass<I> {
    /// Wraps any iterator.
    #[inline]
    pub fn new<S: IntoIterator<IntoIter = I>>(src: S) -> Self {
        SinglePass(src.into_iter())
    }
}

impl<I: Iterator> Iterator for SinglePass<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<I: FusedIterator> FusedIterator for SinglePass<I> {}

impl<I: Iterator> Source for SinglePass<I> {
    #[inline]
    fn extent(&self) -> Extent {
        Extent::Unknown
    }
}

impl<T> Source for Cursor<'_, T> {
    #[inline]
    fn extent(&self) -> Extent {
        Extent::Exact(self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counted_reports_remaining_length() {
        let mut src = Counted::new([1, 2, 3, 4]);
        assert_eq!(src.extent(), Extent::Exact(4));
        src.next();
        assert_eq!(src.extent(), Extent::Exact(3));
    }

    #[test]
    fn single_pass_never_reports_a_length() {
        let src = SinglePass::new(0..10);
        assert_eq!(src.extent(), Extent::Unknown);
        assert_eq!(src.sum::<i32>(), 45);
    }

    #[test]
    fn cursors_know_their_remaining_length() {
        let words = crate::Vec::<&str>::from_slice(&["a", "b", "c"]);
        let cursor = words.cursor(words.position_at(1));
        assert_eq!(cursor.extent(), Extent::Exact(2));

        let refs = crate::Vec::<&&str>::from_source(cursor);
        assert_eq!(refs.capacity(), 2);
        assert_eq!(*refs[1], "c");
    }
}
