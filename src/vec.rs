//! A contiguous growable array type with a configurable growth policy.
//!
//! [`Vec`] owns a heap buffer that is allocated lazily and grown as needed.
//! Unlike `alloc::vec::Vec`, it never panics or aborts when memory runs out:
//! every operation that may need to allocate reports failure and leaves the
//! vector exactly as it was.
//!
//! The vector is generic over a construction [`Policy`], chosen at compile
//! time. [`Cloned`] (the default) constructs elements with [`Clone`] and
//! runs their destructors; [`Bitwise`](crate::Bitwise) treats them as plain
//! bytes and can grow the buffer in place. [`PodVec`] is shorthand for the
//! latter.
//!
//! Growth follows a [`Growth`] policy: capacities double from
//! [`Growth::INITIAL`] up to [`Growth::THRESHOLD`] and then increase by a
//! fixed [`Growth::INCREMENT`].

use crate::growth::{self, DefaultGrowth, Growth};
use crate::policy::{Bitwise, Cloned, Policy};
use crate::position::{Cursor, Position};
use crate::source::{Counted, Extent, SinglePass, Source};
use crate::storage::{AllocFailure, RawBuf};
use crate::ReserveError;

use core::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd};
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ops::{Index, IndexMut};
use core::slice::SliceIndex;
use core::{fmt, mem, ptr, slice};

/// A contiguous growable array type.
///
/// Generic over the construction policy `P` and the growth policy `G`.
///
/// See the [module-level documentation](crate::vec) for more.
pub struct Vec<T, P: Policy<T> = Cloned, G: Growth = DefaultGrowth> {
    buf: RawBuf<T>,
    len: usize,
    policy: PhantomData<fn() -> (P, G)>,
}

/// A vector of trivially copyable elements.
pub type PodVec<T, G = DefaultGrowth> = Vec<T, Bitwise, G>;

impl<T, P: Policy<T>, G: Growth> Vec<T, P, G> {
    /// The largest number of elements this vector type can hold.
    pub const MAX_CAPACITY: usize = growth::max_capacity::<T, G>();

    /// Constructs a new, empty vector without allocating.
    ///
    /// # Examples
    /// ```
    /// let vec = growvec::Vec::<u32>::new();
    /// assert!(vec.is_empty());
    /// assert_eq!(vec.capacity(), 0);
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Vec {
            buf: RawBuf::new(),
            len: 0,
            policy: PhantomData,
        }
    }

    /// Constructs an empty vector with room for exactly `capacity` elements.
    ///
    /// If the allocation fails or `capacity` exceeds
    /// [`MAX_CAPACITY`](Vec::MAX_CAPACITY), the vector is returned without
    /// any capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut vec = Self::new();
        let _ = vec.reserve(capacity);
        vec
    }

    /// Constructs a vector holding `count` copies of `value`.
    ///
    /// The buffer is allocated once, with a capacity of exactly `count`.
    /// If that allocation fails, the result is an empty vector with no
    /// capacity; check [`len`](Vec::len) or [`capacity`](Vec::capacity) to
    /// detect this.
    ///
    /// # Examples
    /// ```
    /// let vec = growvec::Vec::<i32>::from_elem(5, 7);
    /// assert_eq!(vec.len(), 5);
    /// assert_eq!(vec.capacity(), 5);
    /// assert!(vec.iter().all(|&x| x == 7));
    /// ```
    pub fn from_elem(count: usize, value: T) -> Self {
        let mut vec = Self::new();
        if vec.reserve(count).is_err() {
            return vec;
        }

        unsafe { P::fill(vec.buf.ptr(), &mut vec.len, count, &value) };
        vec
    }

    /// Constructs a vector holding copies of all elements of `src`, with a
    /// capacity of exactly `src.len()`.
    ///
    /// On allocation failure the result is an empty vector with no capacity.
    ///
    /// # Examples
    /// ```
    /// let vec = growvec::Vec::<&str>::from_slice(&["a", "b"]);
    /// assert_eq!(vec, ["a", "b"]);
    /// assert_eq!(vec.capacity(), 2);
    /// ```
    pub fn from_slice(src: &[T]) -> Self {
        let mut vec = Self::new();
        if vec.reserve(src.len()).is_err() {
            return vec;
        }

        unsafe { P::copy_from(vec.buf.ptr(), &mut vec.len, src) };
        vec
    }

    /// Constructs a vector from the elements between two cursors of the same
    /// vector, `first` included and `last` excluded.
    ///
    /// If the cursors belong to different vectors, or `last` precedes
    /// `first`, the result is empty.
    ///
    /// # Examples
    /// ```
    /// let src = growvec::Vec::<u8>::from_slice(b"hello");
    /// let part = growvec::Vec::<u8>::from_cursors(src.cursor(src.position_at(1)), src.cursor(src.position_at(4)));
    /// assert_eq!(part, *b"ell");
    ///
    /// let none = growvec::Vec::<u8>::from_cursors(src.cursor(src.position_at(4)), src.cursor(src.position_at(1)));
    /// assert!(none.is_empty());
    /// ```
    pub fn from_cursors(first: Cursor<'_, T>, last: Cursor<'_, T>) -> Self {
        match first.slice_to(&last) {
            Some(range) => Self::from_slice(range),
            None => Self::new(),
        }
    }

    /// Constructs a vector from an iterator whose length is known up front.
    ///
    /// Equivalent to [`from_source`](Vec::from_source) with a [`Counted`]
    /// source: the buffer is allocated once, with exactly the reported
    /// length as capacity.
    ///
    /// # Examples
    /// ```
    /// let vec = growvec::Vec::<u32>::from_exact((1..5).map(|n| n * n));
    /// assert_eq!(vec, [1, 4, 9, 16]);
    /// assert_eq!(vec.capacity(), 4);
    /// ```
    pub fn from_exact<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        Self::from_source(Counted::new(iter))
    }

    /// Constructs a vector from a [`Source`], choosing the allocation
    /// strategy by the source's [`Extent`].
    ///
    /// With an exact extent, the buffer is allocated once; if that fails, the
    /// result is empty. With an unknown extent, elements are appended one at
    /// a time, so the final capacity may exceed the final length; elements
    /// that no longer fit are discarded.
    pub fn from_source<S: Source<Item = T>>(mut src: S) -> Self {
        let mut vec = Self::new();

        if let Extent::Exact(count) = src.extent() {
            if vec.reserve(count).is_err() {
                return vec;
            }

            while vec.len < vec.capacity() {
                match src.next() {
                    Some(item) => unsafe { vec.push_unchecked(item) },
                    None => return vec,
                }
            }
        }

        // single-pass sources, and surplus items from a miscounted one
        for item in src {
            if vec.push(item).is_err() {
                break;
            }
        }

        vec
    }

    /// Returns the number of elements the vector can hold without growing.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns the largest number of elements the vector can ever hold.
    ///
    /// Equal to [`MAX_CAPACITY`](Vec::MAX_CAPACITY).
    #[inline]
    pub fn max_capacity(&self) -> usize {
        Self::MAX_CAPACITY
    }

    /// Returns the number of elements in the vector, also referred to as its *length*.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the vector contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if appending an element requires the buffer to grow.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Returns a raw pointer to the vector's buffer.
    ///
    /// The pointer is dangling while the vector has no capacity.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.ptr()
    }

    /// Returns an unsafe mutable pointer to the vector's buffer.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.ptr()
    }

    /// Extracts a slice containing the entire vector.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.buf.ptr(), self.len) }
    }

    /// Extracts a mutable slice of the entire vector.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.buf.ptr(), self.len) }
    }

    /// Sets the capacity to exactly `capacity` slots.
    ///
    /// A request of `0` shrinks the buffer to fit the current length, or
    /// releases it entirely if the vector is empty; this always succeeds.
    ///
    /// Any other request fails if it is smaller than the current length, if
    /// it exceeds [`MAX_CAPACITY`](Vec::MAX_CAPACITY), or if the allocator
    /// cannot satisfy it. The vector is left unchanged on failure.
    ///
    /// # Examples
    /// ```
    /// use growvec::ReserveError;
    ///
    /// let mut vec = growvec::Vec::<i32>::from_slice(&[1, 2, 3]);
    /// assert!(vec.reserve(10).is_ok());
    /// assert_eq!(vec.capacity(), 10);
    ///
    /// assert_eq!(vec.reserve(2), Err(ReserveError::BelowLength { requested: 2, len: 3 }));
    ///
    /// assert!(vec.reserve(0).is_ok());
    /// assert_eq!(vec.capacity(), 3);
    /// ```
    pub fn reserve(&mut self, capacity: usize) -> Result<(), ReserveError> {
        if capacity == 0 {
            self.shrink_to_fit();
            return Ok(());
        }

        if capacity < self.len {
            return Err(ReserveError::BelowLength {
                requested: capacity,
                len: self.len,
            });
        }

        if capacity > Self::MAX_CAPACITY {
            return Err(ReserveError::ExceedsMax {
                requested: capacity,
                max: Self::MAX_CAPACITY,
            });
        }

        self.relocate(capacity)
    }

    /// Shrinks the capacity to the current length, releasing the buffer
    /// entirely if the vector is empty.
    ///
    /// If the allocator cannot provide the smaller block, the current one is
    /// kept.
    pub fn shrink_to_fit(&mut self) {
        if self.len == 0 {
            self.buf.release();
        } else if self.len < self.capacity() {
            let _ = self.relocate(self.len);
        }
    }

    /// Grows the buffer to the next capacity prescribed by the growth
    /// policy and returns it.
    ///
    /// Returns [`None`] if the vector is already at
    /// [`MAX_CAPACITY`](Vec::MAX_CAPACITY) or the allocation fails; the
    /// vector is unchanged in that case.
    ///
    /// # Examples
    /// ```
    /// let mut vec = growvec::Vec::<u8>::new();
    /// assert_eq!(vec.grow(), Some(2));
    /// assert_eq!(vec.grow(), Some(4));
    /// assert_eq!(vec.len(), 0);
    /// ```
    pub fn grow(&mut self) -> Option<usize> {
        let current = self.capacity();
        let Some(next) = growth::next_capacity::<G>(current, Self::MAX_CAPACITY) else {
            log::debug!("no capacity available beyond {} elements", current);
            return None;
        };

        self.relocate(next).ok()?;
        Some(next)
    }

    fn relocate(&mut self, capacity: usize) -> Result<(), ReserveError> {
        let old = self.capacity();
        if capacity == old {
            return Ok(());
        }

        unsafe { self.buf.relocate::<P>(self.len, capacity) }.map_err(
            |AllocFailure { bytes }| {
                log::debug!(
                    "failed to reallocate from {} to {} elements ({} bytes)",
                    old,
                    capacity,
                    bytes
                );
                ReserveError::AllocFailed { bytes }
            },
        )?;

        log::trace!("reallocated from {} to {} elements", old, capacity);
        Ok(())
    }

    /// Writes `value` to the first unused slot.
    ///
    /// # Safety
    /// The vector must not be full.
    #[inline]
    unsafe fn push_unchecked(&mut self, value: T) {
        debug_assert!(self.len < self.capacity());
        self.buf.ptr().add(self.len).write(value);
        self.len += 1;
    }

    /// Appends an element to the back of the vector, growing the buffer if
    /// needed.
    ///
    /// Returns `Err(value)` without modifying the vector if it already holds
    /// [`MAX_CAPACITY`](Vec::MAX_CAPACITY) elements or the buffer cannot grow.
    ///
    /// # Examples
    /// ```
    /// let mut vec = growvec::Vec::<u32>::new();
    /// let mut capacities = std::vec::Vec::new();
    /// for i in 0..10 {
    ///     capacities.push(vec.capacity());
    ///     assert!(vec.push(i).is_ok());
    /// }
    /// capacities.dedup();
    /// assert_eq!(capacities, [0, 2, 4, 8, 16]);
    /// assert_eq!(vec.capacity(), 16);
    /// assert_eq!(vec.len(), 10);
    /// ```
    pub fn push(&mut self, value: T) -> Result<(), T> {
        if self.is_full() && self.grow().is_none() {
            return Err(value);
        }

        unsafe { self.push_unchecked(value) };
        Ok(())
    }

    /// Removes the last element from the vector and returns it, or [`None`]
    /// if it is empty. The capacity is never reduced.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        self.len -= 1;
        unsafe { Some(self.buf.ptr().add(self.len).read()) }
    }

    /// Shortens the vector, keeping the first `len` elements and destroying
    /// the rest. The capacity is unchanged.
    ///
    /// If `len` is greater than or equal to the vector's current length,
    /// this has no effect.
    pub fn truncate(&mut self, len: usize) {
        let old_len = self.len;
        if len >= old_len {
            return;
        }

        // shorten first, so a panicking destructor leaks instead of
        // exposing destroyed elements
        self.len = len;
        unsafe { P::destroy(self.buf.ptr().add(len), old_len - len) };
    }

    /// Destroys all elements and releases the buffer, leaving the vector
    /// with neither length nor capacity.
    ///
    /// # Examples
    /// ```
    /// let mut vec = growvec::Vec::<String>::from_elem(3, "x".into());
    /// vec.clear();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.capacity(), 0);
    /// ```
    pub fn clear(&mut self) {
        self.truncate(0);
        self.buf.release();
    }

    /// Resizes the vector in place so that its length equals `new_len`.
    ///
    /// If `new_len` is smaller than the current length, the excess elements
    /// are destroyed and the capacity is left as it is. If it is larger, the
    /// buffer is grown to exactly `new_len` slots if necessary, and the gap
    /// is filled with copies of `value`.
    ///
    /// Fails without modifying the vector if `new_len` exceeds
    /// [`MAX_CAPACITY`](Vec::MAX_CAPACITY) or the buffer cannot grow.
    ///
    /// # Examples
    /// ```
    /// let mut vec = growvec::Vec::<i32>::from_slice(&[1, 2, 3, 4, 5]);
    /// vec.resize(2, 0).unwrap();
    /// assert_eq!(vec, [1, 2]);
    /// assert_eq!(vec.capacity(), 5);
    ///
    /// vec.resize(4, 9).unwrap();
    /// assert_eq!(vec, [1, 2, 9, 9]);
    /// assert_eq!(vec.capacity(), 5);
    /// ```
    pub fn resize(&mut self, new_len: usize, value: T) -> Result<(), ReserveError> {
        let len = self.len;
        if new_len == len {
            return Ok(());
        }

        if new_len > Self::MAX_CAPACITY {
            return Err(ReserveError::ExceedsMax {
                requested: new_len,
                max: Self::MAX_CAPACITY,
            });
        }

        if new_len < len {
            self.truncate(new_len);
            return Ok(());
        }

        if new_len > self.capacity() {
            self.reserve(new_len)?;
        }

        unsafe { P::fill(self.buf.ptr(), &mut self.len, new_len - len, &value) };
        Ok(())
    }

    /// Copies and appends all elements of `other`.
    ///
    /// Grows the buffer at least as far as the growth policy would for a
    /// single push. Fails without modifying the vector if the combined length
    /// exceeds [`MAX_CAPACITY`](Vec::MAX_CAPACITY) or the buffer cannot
    /// grow.
    ///
    /// # Examples
    /// ```
    /// let mut vec = growvec::Vec::<u8>::new();
    /// vec.extend_from_slice(b"abc").unwrap();
    /// vec.extend_from_slice(b"de").unwrap();
    /// assert_eq!(vec, *b"abcde");
    /// ```
    pub fn extend_from_slice(&mut self, other: &[T]) -> Result<(), ReserveError> {
        let max = Self::MAX_CAPACITY;
        let needed = match self.len.checked_add(other.len()) {
            Some(needed) if needed <= max => needed,
            _ => {
                return Err(ReserveError::ExceedsMax {
                    requested: self.len.saturating_add(other.len()),
                    max,
                })
            }
        };

        if needed > self.capacity() {
            let amortized = growth::next_capacity::<G>(self.capacity(), max).unwrap_or(needed);
            self.relocate(amortized.max(needed))?;
        }

        unsafe { P::copy_from(self.buf.ptr(), &mut self.len, other) };
        Ok(())
    }

    /// Removes the element at `pos`, shifting all elements after it one
    /// slot to the left.
    ///
    /// Returns the position of the element that followed the removed one,
    /// which is `pos` itself (or [`end`](Vec::end) if the last element was
    /// removed). If `pos` does not refer to an element, nothing is removed
    /// and `end()` is returned.
    ///
    /// A [`Position`] carries no reference to the vector it came from, so a
    /// position obtained from another vector is simply read as an index
    /// into this one.
    ///
    /// # Examples
    /// ```
    /// let mut vec = growvec::Vec::<i32>::from_slice(&[1, 2, 3, 4, 5]);
    /// let next = vec.erase(vec.position_at(2));
    /// assert_eq!(vec, [1, 2, 4, 5]);
    /// assert_eq!(vec[next.index()], 4);
    /// ```
    pub fn erase(&mut self, pos: Position) -> Position {
        if pos.index() >= self.len {
            return self.end();
        }

        self.erase_range(pos, pos + 1)
    }

    /// Removes the elements from `first` up to (excluding) `last`, shifting
    /// the tail to the left to close the gap, and returns `first`.
    ///
    /// `last` is clamped to [`end`](Vec::end). Nothing is removed if the
    /// range is empty or reversed. As with [`erase`](Vec::erase), positions
    /// are plain indices and are not checked against the vector that
    /// produced them.
    ///
    /// # Examples
    /// ```
    /// let mut vec = growvec::Vec::<char>::from_slice(&['a', 'b', 'c', 'd', 'e']);
    /// let first = vec.position_at(1);
    /// let ret = vec.erase_range(first, first + 3);
    /// assert_eq!(ret, first);
    /// assert_eq!(vec, ['a', 'e']);
    /// ```
    pub fn erase_range(&mut self, first: Position, last: Position) -> Position {
        let len = self.len;
        let start = first.index().min(len);
        let end = last.index().min(len);
        if Position::distance(first, last) <= 0 || start >= end {
            return Position::new(start);
        }

        let count = end - start;
        unsafe {
            let base = self.buf.ptr();
            self.len = start;
            P::destroy(base.add(start), count);
            ptr::copy(base.add(end), base.add(start), len - end);
        }
        self.len = len - count;

        first
    }

    /// Exchanges the contents of two vectors in constant time.
    ///
    /// No element is constructed, copied or destroyed.
    ///
    /// # Examples
    /// ```
    /// let mut a = growvec::Vec::<i32>::from_slice(&[1, 2, 3]);
    /// let mut b = growvec::Vec::<i32>::with_capacity(10);
    /// a.swap_with(&mut b);
    /// assert!(a.is_empty());
    /// assert_eq!(a.capacity(), 10);
    /// assert_eq!(b, [1, 2, 3]);
    /// ```
    #[inline]
    pub fn swap_with(&mut self, other: &mut Self) {
        mem::swap(&mut self.buf, &mut other.buf);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Returns a reference to the first element, or [`None`] if empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns a mutable reference to the first element, or [`None`] if empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// Returns a reference to the last element, or [`None`] if empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns a mutable reference to the last element, or [`None`] if empty.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// Returns a reference to the element at `index`, or [`None`] if it is
    /// out of bounds.
    #[inline]
    pub fn at(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Returns a mutable reference to the element at `index`, or [`None`] if
    /// it is out of bounds.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Returns a reference to the element at `index`, or `fallback` if it is
    /// out of bounds.
    ///
    /// The fallback is owned by the caller, who decides whether it is shared
    /// between vectors.
    ///
    /// # Examples
    /// ```
    /// static MISSING: i32 = 0;
    ///
    /// let a = growvec::Vec::<i32>::from_slice(&[5, 6]);
    /// let b = growvec::Vec::<i32>::new();
    /// assert_eq!(*a.at_or(1, &MISSING), 6);
    /// assert!(core::ptr::eq(a.at_or(2, &MISSING), b.at_or(0, &MISSING)));
    /// ```
    #[inline]
    pub fn at_or<'a>(&'a self, index: usize, fallback: &'a T) -> &'a T {
        self.at(index).unwrap_or(fallback)
    }

    /// Returns the position of the first element.
    #[inline]
    pub fn begin(&self) -> Position {
        Position::new(0)
    }

    /// Returns the position one past the last element.
    #[inline]
    pub fn end(&self) -> Position {
        Position::new(self.len)
    }

    /// Returns the position of the element at `index`, clamped to
    /// [`end`](Vec::end).
    #[inline]
    pub fn position_at(&self, index: usize) -> Position {
        Position::new(index.min(self.len))
    }

    /// Returns a read-only cursor starting at `pos`, clamped to the end.
    #[inline]
    pub fn cursor(&self, pos: Position) -> Cursor<'_, T> {
        Cursor::new(self.as_slice(), pos.index())
    }

    /// Returns a read-only cursor positioned past the last element.
    #[inline]
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(self.as_slice(), self.len)
    }

    /// Changes the allocation failure injection behaviour of this vector.
    ///
    /// The behaviour travels with the buffer, including through
    /// [`swap_with`](Vec::swap_with).
    #[cfg(any(test, feature = "test-utils"))]
    #[cfg_attr(docs_rs, doc(cfg(feature = "test-utils")))]
    pub fn change_behaviour(&mut self, behaviour: crate::AllocBehaviour) {
        self.buf.change_behaviour(behaviour);
    }
}

impl<T, P: Policy<T>, G: Growth> Drop for Vec<T, P, G> {
    fn drop(&mut self) {
        self.truncate(0);
    }
}

impl<T, P: Policy<T>, G: Growth> Default for Vec<T, P, G> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: Policy<T>, G: Growth> Clone for Vec<T, P, G> {
    /// Returns a deep copy whose capacity equals its length.
    fn clone(&self) -> Self {
        Self::from_slice(self)
    }
}

impl<T, P: Policy<T>, G: Growth> core::ops::Deref for Vec<T, P, G> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, P: Policy<T>, G: Growth> core::ops::DerefMut for Vec<T, P, G> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, P: Policy<T>, G: Growth, I: SliceIndex<[T]>> Index<I> for Vec<T, P, G> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        self.as_slice().index(index)
    }
}

impl<T, P: Policy<T>, G: Growth, I: SliceIndex<[T]>> IndexMut<I> for Vec<T, P, G> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        self.as_mut_slice().index_mut(index)
    }
}

impl<T, P: Policy<T>, G: Growth> AsRef<[T]> for Vec<T, P, G> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T, P: Policy<T>, G: Growth> AsMut<[T]> for Vec<T, P, G> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T: fmt::Debug, P: Policy<T>, G: Growth> fmt::Debug for Vec<T, P, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_slice().fmt(f)
    }
}

impl<T: Hash, P: Policy<T>, G: Growth> Hash for Vec<T, P, G> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        Hash::hash(self.as_slice(), state)
    }
}

impl<T, U, P, Q, G, H> PartialEq<Vec<U, Q, H>> for Vec<T, P, G>
where
    T: PartialEq<U>,
    P: Policy<T>,
    Q: Policy<U>,
    G: Growth,
    H: Growth,
{
    #[inline]
    fn eq(&self, other: &Vec<U, Q, H>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, P: Policy<T>, G: Growth> Eq for Vec<T, P, G> {}

impl<T, U, P, G> PartialEq<[U]> for Vec<T, P, G>
where
    T: PartialEq<U>,
    P: Policy<T>,
    G: Growth,
{
    #[inline]
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U, P, G> PartialEq<&[U]> for Vec<T, P, G>
where
    T: PartialEq<U>,
    P: Policy<T>,
    G: Growth,
{
    #[inline]
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T, U, P, G, const N: usize> PartialEq<[U; N]> for Vec<T, P, G>
where
    T: PartialEq<U>,
    P: Policy<T>,
    G: Growth,
{
    #[inline]
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == &other[..]
    }
}

impl<T: PartialOrd, P: Policy<T>, G: Growth> PartialOrd for Vec<T, P, G> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord, P: Policy<T>, G: Growth> Ord for Vec<T, P, G> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T, P: Policy<T>, G: Growth> core::iter::FromIterator<T> for Vec<T, P, G> {
    /// Collects a single-pass iterator by appending one element at a time.
    ///
    /// Use [`from_exact`](Vec::from_exact) to allocate once for iterators of
    /// known length.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_source(SinglePass::new(iter))
    }
}

impl<T, P: Policy<T>, G: Growth> core::iter::Extend<T> for Vec<T, P, G> {
    /// Appends every element of `iter` until the vector can no longer grow;
    /// any remaining elements are discarded.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            if self.push(element).is_err() {
                break;
            }
        }
    }
}

impl<'a, T: Clone + 'a, P: Policy<T>, G: Growth> core::iter::Extend<&'a T> for Vec<T, P, G> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned())
    }
}

/// An iterator that moves out of a vector.
///
/// This `struct` is created by the `into_iter` method on [`Vec`] (provided by
/// the [`IntoIterator`](core::iter::IntoIterator) trait).
///
/// # Example
/// ```
/// let vec = growvec::Vec::<String>::from_elem(2, "hi".into());
/// let mut iter: growvec::vec::IntoIter<_> = vec.into_iter();
/// assert_eq!(iter.next().as_deref(), Some("hi"));
/// assert_eq!(iter.len(), 1);
/// ```
pub struct IntoIter<T, P: Policy<T> = Cloned> {
    buf: RawBuf<T>,
    start: usize,
    end: usize,
    policy: PhantomData<fn() -> P>,
}

impl<T, P: Policy<T>> IntoIter<T, P> {
    /// Returns the remaining elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.buf.ptr().add(self.start), self.end - self.start) }
    }
}

impl<T, P: Policy<T>> Iterator for IntoIter<T, P> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.start >= self.end {
            return None;
        }

        let ret = unsafe { self.buf.ptr().add(self.start).read() };
        self.start += 1;
        Some(ret)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.end - self.start;
        (size, Some(size))
    }
}

impl<T, P: Policy<T>> DoubleEndedIterator for IntoIter<T, P> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.start >= self.end {
            return None;
        }

        self.end -= 1;
        unsafe { Some(self.buf.ptr().add(self.end).read()) }
    }
}

impl<T, P: Policy<T>> ExactSizeIterator for IntoIter<T, P> {}

impl<T, P: Policy<T>> FusedIterator for IntoIter<T, P> {}

impl<T: fmt::Debug, P: Policy<T>> fmt::Debug for IntoIter<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T, P: Policy<T>> Drop for IntoIter<T, P> {
    fn drop(&mut self) {
        let remaining = self.end - self.start;
        self.end = self.start;
        unsafe { P::destroy(self.buf.ptr().add(self.start), remaining) };
    }
}

impl<T, P: Policy<T>, G: Growth> IntoIterator for Vec<T, P, G> {
    type Item = T;
    type IntoIter = IntoIter<T, P>;

    fn into_iter(mut self) -> Self::IntoIter {
        let end = mem::replace(&mut self.len, 0);
        let buf = mem::replace(&mut self.buf, RawBuf::new());

        IntoIter {
            buf,
            start: 0,
            end,
            policy: PhantomData,
        }
    }
}

impl<'a, T, P: Policy<T>, G: Growth> IntoIterator for &'a Vec<T, P, G> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T, P: Policy<T>, G: Growth> IntoIterator for &'a mut Vec<T, P, G> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
