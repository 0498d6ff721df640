//! Positions into a [`Vec`](crate::Vec) and random-access cursors over it.
//!
//! A [`Position`] is a plain index with iterator-style arithmetic. It holds
//! no borrow, so it can be passed back to mutating operations such as
//! [`erase`](crate::Vec::erase). Any operation that shifts elements makes
//! previously obtained positions refer to different elements.
//!
//! A [`Cursor`] borrows the vector's elements and supports constant-time
//! random access, including measuring the [`distance`](Cursor::distance)
//! between two cursors.

use core::iter::FusedIterator;
use core::ops::{Add, AddAssign, Sub, SubAssign};

/// An index-like position in a vector, from `begin()` up to and including
/// `end()`.
///
/// # Examples
/// ```
/// use growvec::Position;
///
/// let first = Position::new(2);
/// let last = first + 3;
/// assert_eq!(last.index(), 5);
/// assert_eq!(last - first, 3);
/// assert_eq!(Position::distance(last, first), -3);
/// assert_eq!((first - 5).index(), 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(usize);

impl Position {
    /// Creates a position referring to `index`.
    #[inline]
    pub const fn new(index: usize) -> Self {
        Position(index)
    }

    /// Returns the index this position refers to.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }

    /// Returns the signed number of steps from `first` to `last`.
    ///
    /// Distances too large for `isize` saturate.
    #[inline]
    pub fn distance(first: Position, last: Position) -> isize {
        if last.0 >= first.0 {
            isize::try_from(last.0 - first.0).unwrap_or(isize::MAX)
        } else {
            isize::try_from(first.0 - last.0).map_or(isize::MIN, |d| -d)
        }
    }
}

impl From<usize> for Position {
    #[inline]
    fn from(index: usize) -> Self {
        Position(index)
    }
}

impl Add<isize> for Position {
    type Output = Position;

    /// Moves the position forwards, saturating at zero and `usize::MAX`.
    #[inline]
    fn add(self, rhs: isize) -> Position {
        Position(self.0.saturating_add_signed(rhs))
    }
}

impl Sub<isize> for Position {
    type Output = Position;

    /// Moves the position backwards, saturating at zero.
    #[inline]
    fn sub(self, rhs: isize) -> Position {
        match rhs.checked_neg() {
            Some(neg) => self + neg,
            None => Position(self.0.saturating_add(rhs.unsigned_abs())),
        }
    }
}

impl AddAssign<isize> for Position {
    #[inline]
    fn add_assign(&mut self, rhs: isize) {
        *self = *self + rhs;
    }
}

impl SubAssign<isize> for Position {
    #[inline]
    fn sub_assign(&mut self, rhs: isize) {
        *self = *self - rhs;
    }
}

impl Sub<Position> for Position {
    type Output = isize;

    #[inline]
    fn sub(self, rhs: Position) -> isize {
        Position::distance(rhs, self)
    }
}

/// A read-only random-access cursor over the elements of a vector.
///
/// As an [`Iterator`], a cursor yields the element it points at and then
/// advances, until it reaches the end of the vector.
///
/// # Examples
/// ```
/// let vec = growvec::Vec::<i32>::from_slice(&[10, 20, 30, 40]);
/// let mut cursor = vec.cursor(vec.begin());
/// assert_eq!(cursor.get(), Some(&10));
///
/// cursor.advance(2);
/// assert_eq!(cursor.get(), Some(&30));
/// assert_eq!(cursor.distance(&vec.cursor_end()), Some(2));
///
/// let rest: std::vec::Vec<_> = cursor.copied().collect();
/// assert_eq!(rest, [30, 40]);
/// ```
#[derive(Debug)]
pub struct Cursor<'a, T> {
    elems: &'a [T],
    at: usize,
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<'a, T> Cursor<'a, T> {
    #[inline]
    pub(crate) fn new(elems: &'a [T], at: usize) -> Self {
        Cursor {
            elems,
            at: at.min(elems.len()),
        }
    }

    /// Returns the position this cursor points at.
    #[inline]
    pub fn position(&self) -> Position {
        Position(self.at)
    }

    /// Returns `true` if the cursor is past the last element.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.at == self.elems.len()
    }

    /// Returns the element under the cursor, or [`None`] at the end.
    #[inline]
    pub fn get(&self) -> Option<&'a T> {
        self.elems.get(self.at)
    }

    /// Returns the element `offset` steps away from the cursor, if any.
    #[inline]
    pub fn peek(&self, offset: isize) -> Option<&'a T> {
        let index = self.at.checked_add_signed(offset)?;
        self.elems.get(index)
    }

    /// Moves the cursor by `offset` steps, stopping at either end.
    #[inline]
    pub fn advance(&mut self, offset: isize) {
        self.at = self.at.saturating_add_signed(offset).min(self.elems.len());
    }

    /// Returns the signed number of steps from `self` to `other`.
    ///
    /// Returns [`None`] if the cursors do not belong to the same vector.
    pub fn distance(&self, other: &Cursor<'_, T>) -> Option<isize> {
        if !self.same_origin(other) {
            return None;
        }

        Some(Position::distance(self.position(), other.position()))
    }

    /// Returns the elements from this cursor up to (excluding) `last`.
    ///
    /// Returns [`None`] if the cursors belong to different vectors or `last`
    /// precedes `self`.
    pub fn slice_to(&self, last: &Cursor<'_, T>) -> Option<&'a [T]> {
        if !self.same_origin(last) || last.at < self.at {
            return None;
        }

        Some(&self.elems[self.at..last.at])
    }

    #[inline]
    fn same_origin(&self, other: &Cursor<'_, T>) -> bool {
        core::ptr::eq(self.elems.as_ptr(), other.elems.as_ptr())
            && self.elems.len() == other.elems.len()
    }
}

impl<'a, T> Iterator for Cursor<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        let item = self.elems.get(self.at)?;
        self.at += 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.elems.len() - self.at;
        (remaining, Some(remaining))
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<&'a T> {
        self.at = self.at.saturating_add(n).min(self.elems.len());
        self.next()
    }
}

impl<T> ExactSizeIterator for Cursor<'_, T> {}

impl<T> FusedIterator for Cursor<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_arithmetic_saturates() {
        let p = Position::new(3);
        assert_eq!(p + 2, Position::new(5));
        assert_eq!(p + -5, Position::new(0));
        assert_eq!(p - isize::MIN, Position::new(3 + isize::MIN.unsigned_abs()));
        assert_eq!(Position::new(usize::MAX) + 1, Position::new(usize::MAX));

        let mut q = p;
        q += 4;
        q -= 1;
        assert_eq!(q.index(), 6);
        assert_eq!(q - p, 3);
        assert_eq!(p - q, -3);
    }

    #[test]
    fn distance_saturates_at_isize_bounds() {
        let lo = Position::new(0);
        let hi = Position::new(usize::MAX);
        assert_eq!(Position::distance(lo, hi), isize::MAX);
        assert_eq!(Position::distance(hi, lo), isize::MIN);
    }

    #[test]
    fn cursor_random_access() {
        let data = [1, 2, 3, 4, 5];
        let mut c = Cursor::new(&data, 1);
        assert_eq!(c.get(), Some(&2));
        assert_eq!(c.peek(2), Some(&4));
        assert_eq!(c.peek(-1), Some(&1));
        assert_eq!(c.peek(-2), None);
        assert_eq!(c.len(), 4);

        c.advance(10);
        assert!(c.is_end());
        assert_eq!(c.get(), None);
        c.advance(-5);
        assert_eq!(c.position(), Position::new(0));
    }

    #[test]
    fn cursors_over_different_slices_are_unrelated() {
        let a = [1, 2, 3];
        let b = [1, 2, 3];
        let ca = Cursor::new(&a, 0);
        let cb = Cursor::new(&b, 3);
        assert_eq!(ca.distance(&cb), None);
        assert_eq!(ca.slice_to(&cb), None);

        let end = Cursor::new(&a, 3);
        assert_eq!(ca.distance(&end), Some(3));
        assert_eq!(end.distance(&ca), Some(-3));
        assert_eq!(ca.slice_to(&end), Some(&a[..]));
        assert_eq!(end.slice_to(&ca), None);
    }

    #[test]
    fn cursor_nth_stops_at_end() {
        let data = [1, 2, 3];
        let mut c = Cursor::new(&data, 0);
        assert_eq!(c.nth(1), Some(&2));
        assert_eq!(c.nth(5), None);
        assert!(c.is_end());
    }
}
