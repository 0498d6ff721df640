//! Element construction strategies.
//!
//! Every [`Vec`](crate::Vec) is parameterized by a [`Policy`] that decides,
//! at compile time, how elements are constructed, destroyed and relocated:
//!
//! * [`Bitwise`] is for plain-old-data (`T: Copy`). Filling and copying are
//!   bulk memory operations, destruction does nothing, and growing the
//!   buffer uses the allocator's `realloc`, which can often extend the
//!   block in place.
//! * [`Cloned`] is for everything else (`T: Clone`). Each element is
//!   constructed with [`Clone::clone`] and destroyed with its destructor,
//!   and growing allocates a fresh block before the old one is released.

use core::mem;
use core::ptr;

/// A construction/destruction strategy for elements of type `T`.
///
/// # Safety
/// Implementors must initialize exactly the slots they report as
/// initialized, and may only set [`TRIVIAL`](Policy::TRIVIAL) for types
/// without drop glue.
pub unsafe trait Policy<T> {
    /// `true` if elements are trivially copyable and need no destructor.
    ///
    /// Trivial buffers are grown with the allocator's `realloc`; all
    /// others are moved to a freshly allocated block.
    const TRIVIAL: bool;

    /// Writes `count` copies of `value` starting at `base.add(*len)`,
    /// incrementing `*len` after each one.
    ///
    /// # Safety
    /// `base` must point to a buffer with at least `*len + count` slots, the
    /// slots at `*len..*len + count` must be uninitialized.
    unsafe fn fill(base: *mut T, len: &mut usize, count: usize, value: &T);

    /// Writes copies of every element of `src` starting at `base.add(*len)`,
    /// incrementing `*len` after each one.
    ///
    /// # Safety
    /// `base` must point to a buffer with at least `*len + src.len()` slots,
    /// which must not overlap `src`; the target slots must be uninitialized.
    unsafe fn copy_from(base: *mut T, len: &mut usize, src: &[T]);

    /// Destroys `count` initialized elements starting at `first`.
    ///
    /// # Safety
    /// All `count` slots must be initialized; they are uninitialized after.
    unsafe fn destroy(first: *mut T, count: usize);
}

/// The construction policy for trivially copyable element types.
///
/// # Examples
/// ```
/// let mut vec = growvec::PodVec::<u8>::from_elem(3, 0xAA);
/// vec.push(0xBB).unwrap();
/// assert_eq!(vec, [0xAA, 0xAA, 0xAA, 0xBB]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bitwise;

unsafe impl<T: Copy> Policy<T> for Bitwise {
    const TRIVIAL: bool = true;

    #[inline]
    unsafe fn fill(base: *mut T, len: &mut usize, count: usize, value: &T) {
        let dst = base.add(*len);
        for i in 0..count {
            dst.add(i).write(*value);
        }
        *len += count;
    }

    #[inline]
    unsafe fn copy_from(base: *mut T, len: &mut usize, src: &[T]) {
        ptr::copy_nonoverlapping(src.as_ptr(), base.add(*len), src.len());
        *len += src.len();
    }

    #[inline(always)]
    unsafe fn destroy(_first: *mut T, _count: usize) {}
}

/// The construction policy for element types with non-trivial copy or
/// destruction semantics. This is the default.
///
/// # Examples
/// ```
/// use std::rc::Rc;
///
/// let shared = Rc::new(5);
/// let vec = growvec::Vec::<Rc<i32>>::from_elem(3, shared.clone());
/// assert_eq!(vec.len(), 3);
/// assert_eq!(Rc::strong_count(&shared), 4);
/// drop(vec);
/// assert_eq!(Rc::strong_count(&shared), 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cloned;

unsafe impl<T: Clone> Policy<T> for Cloned {
    const TRIVIAL: bool = false;

    unsafe fn fill(base: *mut T, len: &mut usize, count: usize, value: &T) {
        for _ in 0..count {
            base.add(*len).write(value.clone());
            *len += 1;
        }
    }

    unsafe fn copy_from(base: *mut T, len: &mut usize, src: &[T]) {
        for item in src {
            base.add(*len).write(item.clone());
            *len += 1;
        }
    }

    #[inline]
    unsafe fn destroy(first: *mut T, count: usize) {
        if mem::needs_drop::<T>() {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(first, count));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::RawBuf;
    use crate::test_utils::*;

    #[test]
    fn cloned_fill_constructs_each_element() {
        let counter = DropCounter::new();
        let mut buf = RawBuf::<Droppable<u32>>::new();
        let mut len = 0;
        unsafe {
            buf.reallocate(4).unwrap();
            let proto = counter.make(9);
            Cloned::fill(buf.ptr(), &mut len, 4, &proto);
            assert_eq!(len, 4);
            assert_eq!(counter.clones(), 4);
            assert_eq!((*buf.ptr().add(3)).value, 9);

            Cloned::destroy(buf.ptr(), len);
            assert_eq!(counter.drops(), 4);
            drop(proto);
            assert_eq!(counter.drops(), 5);
        }
    }

    #[test]
    fn cloned_copy_appends_after_existing_elements() {
        let counter = DropCounter::new();
        let mut buf = RawBuf::<Droppable<usize>>::new();
        let mut len = 0;
        unsafe {
            buf.reallocate(5).unwrap();
            let items = [counter.make(1), counter.make(2), counter.make(3)];
            Cloned::copy_from(buf.ptr(), &mut len, &items[..1]);
            Cloned::copy_from(buf.ptr(), &mut len, &items[1..]);
            assert_eq!(len, 3);
            assert_eq!(counter.clones(), 3);

            let values: std::vec::Vec<_> = (0..len).map(|i| (*buf.ptr().add(i)).value).collect();
            assert_eq!(values, [1, 2, 3]);

            Cloned::destroy(buf.ptr().add(1), 2);
            assert_eq!(counter.drops(), 2);
            Cloned::destroy(buf.ptr(), 1);
        }
    }

    #[test]
    fn bitwise_copy_and_fill() {
        let mut buf = RawBuf::<u64>::new();
        let mut len = 0;
        unsafe {
            buf.reallocate(5).unwrap();
            Bitwise::copy_from(buf.ptr(), &mut len, &[4, 5]);
            Bitwise::fill(buf.ptr(), &mut len, 3, &6);
            assert_eq!(len, 5);
            let slice = core::slice::from_raw_parts(buf.ptr(), len);
            assert_eq!(slice, [4, 5, 6, 6, 6]);
        }
        assert!(<Bitwise as Policy<u64>>::TRIVIAL);
        assert!(!<Cloned as Policy<u64>>::TRIVIAL);
    }
}
