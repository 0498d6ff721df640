//! Raw, owned backing memory for [`Vec`](crate::Vec).
//!
//! [`RawBuf`] tracks a pointer and a capacity and nothing else; it never
//! reads, constructs or drops elements. All fallible operations report
//! failure instead of aborting, and leave the buffer untouched when they do.

use crate::policy::Policy;

use alloc::alloc::{self as heap, Layout};
use core::marker::PhantomData;
use core::mem;
use core::ptr::{self, NonNull};

/// The allocator refused a request of `bytes` bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AllocFailure {
    pub(crate) bytes: usize,
}

/// Allocation failure injection for exercising error paths.
///
/// Only available in this crate's tests or with the `test-utils` feature.
/// The behaviour is sticky: once set on a vector, it stays active until it
/// is changed again.
///
/// # Examples
/// ```
/// # #[cfg(feature = "test-utils")] {
/// use growvec::{AllocBehaviour, Vec};
///
/// let mut vec = Vec::<u32>::new();
/// vec.change_behaviour(AllocBehaviour::FailAlways);
/// assert_eq!(vec.push(1), Err(1));
/// assert_eq!(vec.capacity(), 0);
///
/// vec.change_behaviour(AllocBehaviour::None);
/// assert_eq!(vec.push(1), Ok(()));
/// # }
/// ```
#[cfg(any(test, feature = "test-utils"))]
#[cfg_attr(docs_rs, doc(cfg(feature = "test-utils")))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AllocBehaviour {
    /// Normal behaviour - no injected failures.
    #[default]
    None,
    /// Every allocation or reallocation fails.
    FailAlways,
    /// The given number of requests succeed, every later one fails.
    FailAfter(usize),
}

#[cfg(any(test, feature = "test-utils"))]
impl AllocBehaviour {
    fn admit(&mut self) -> bool {
        match self {
            AllocBehaviour::None => true,
            AllocBehaviour::FailAlways => false,
            AllocBehaviour::FailAfter(0) => false,
            AllocBehaviour::FailAfter(n) => {
                *n -= 1;
                true
            }
        }
    }
}

/// An owned, possibly unallocated block of `cap` uninitialized `T` slots.
///
/// The pointer is dangling exactly when no memory is held, i.e. when
/// `cap == 0` or `T` is zero-sized.
pub(crate) struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
    #[cfg(any(test, feature = "test-utils"))]
    behaviour: AllocBehaviour,
    marker: PhantomData<T>,
}

unsafe impl<T: Send> Send for RawBuf<T> {}
unsafe impl<T: Sync> Sync for RawBuf<T> {}

impl<T> RawBuf<T> {
    pub(crate) const fn new() -> Self {
        RawBuf {
            ptr: NonNull::dangling(),
            cap: 0,
            #[cfg(any(test, feature = "test-utils"))]
            behaviour: AllocBehaviour::None,
            marker: PhantomData,
        }
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    #[inline]
    pub(crate) fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    #[inline]
    fn holds_memory(&self) -> bool {
        self.cap != 0 && mem::size_of::<T>() != 0
    }

    #[inline]
    fn layout(cap: usize) -> Result<Layout, AllocFailure> {
        Layout::array::<T>(cap).map_err(|_| AllocFailure { bytes: usize::MAX })
    }

    #[cfg(any(test, feature = "test-utils"))]
    pub(crate) fn change_behaviour(&mut self, behaviour: AllocBehaviour) {
        self.behaviour = behaviour;
    }

    #[cfg(any(test, feature = "test-utils"))]
    #[inline]
    fn admit(&mut self, bytes: usize) -> Result<(), AllocFailure> {
        if self.behaviour.admit() {
            Ok(())
        } else {
            Err(AllocFailure { bytes })
        }
    }

    #[cfg(not(any(test, feature = "test-utils")))]
    #[inline(always)]
    fn admit(&mut self, _bytes: usize) -> Result<(), AllocFailure> {
        Ok(())
    }

    /// Allocates a fresh block of exactly `cap` slots.
    ///
    /// The returned buffer inherits this buffer's failure injection
    /// behaviour, so a replacement block keeps failing the same way.
    pub(crate) fn allocate_like(&mut self, cap: usize) -> Result<RawBuf<T>, AllocFailure> {
        #[allow(unused_mut)]
        let mut fresh = RawBuf::new();
        #[cfg(any(test, feature = "test-utils"))]
        {
            fresh.behaviour = self.behaviour;
        }

        if cap == 0 {
            return Ok(fresh);
        }

        let layout = Self::layout(cap)?;
        if layout.size() == 0 {
            fresh.cap = cap;
            return Ok(fresh);
        }

        self.admit(layout.size())?;
        #[cfg(any(test, feature = "test-utils"))]
        {
            // carry the countdown over after this request was counted
            fresh.behaviour = self.behaviour;
        }

        let raw = unsafe { heap::alloc(layout) };
        let ptr = NonNull::new(raw.cast::<T>()).ok_or(AllocFailure {
            bytes: layout.size(),
        })?;

        fresh.ptr = ptr;
        fresh.cap = cap;
        Ok(fresh)
    }

    /// Resizes the block to exactly `cap` slots, moving its bytes if the
    /// allocator cannot resize in place.
    ///
    /// On failure the existing block and its contents are left as they were.
    /// `cap == 0` releases the memory.
    ///
    /// # Safety
    /// The bytes of slots at or beyond `cap` are discarded, so callers must
    /// have already destroyed or moved any value stored there.
    pub(crate) unsafe fn reallocate(&mut self, cap: usize) -> Result<(), AllocFailure> {
        if cap == self.cap {
            return Ok(());
        }

        if cap == 0 {
            self.release();
            return Ok(());
        }

        if !self.holds_memory() {
            *self = self.allocate_like(cap)?;
            return Ok(());
        }

        let new_layout = Self::layout(cap)?;
        let old_layout = Self::layout(self.cap)?;
        self.admit(new_layout.size())?;

        let raw = heap::realloc(self.ptr.as_ptr().cast::<u8>(), old_layout, new_layout.size());
        let ptr = NonNull::new(raw.cast::<T>()).ok_or(AllocFailure {
            bytes: new_layout.size(),
        })?;

        self.ptr = ptr;
        self.cap = cap;
        Ok(())
    }

    /// Moves the first `len` elements to a block of exactly `cap` slots,
    /// using the strategy selected by `P`.
    ///
    /// Trivial element types go through [`reallocate`](RawBuf::reallocate).
    /// Everything else is copied into a freshly allocated block, and the old
    /// block is freed only once the new one exists. Either way the buffer is
    /// unchanged if this returns an error.
    ///
    /// # Safety
    /// `len` must not exceed `cap` or the current capacity; slots beyond
    /// `len` must not hold live values.
    pub(crate) unsafe fn relocate<P: Policy<T>>(
        &mut self,
        len: usize,
        cap: usize,
    ) -> Result<(), AllocFailure> {
        debug_assert!(len <= cap && len <= self.cap);
        if P::TRIVIAL {
            self.reallocate(cap)
        } else {
            self.transfer(len, cap)
        }
    }

    unsafe fn transfer(&mut self, len: usize, cap: usize) -> Result<(), AllocFailure> {
        if cap == self.cap {
            return Ok(());
        }

        let mut fresh = self.allocate_like(cap)?;
        ptr::copy_nonoverlapping(self.ptr(), fresh.ptr(), len);

        // the values now live in the new block; the old one is freed
        // without running any destructor
        mem::swap(self, &mut fresh);
        Ok(())
    }

    /// Frees the memory, if any, leaving an unallocated buffer behind.
    ///
    /// Stored values are not dropped.
    pub(crate) fn release(&mut self) {
        if self.holds_memory() {
            if let Ok(layout) = Self::layout(self.cap) {
                unsafe { heap::dealloc(self.ptr.as_ptr().cast::<u8>(), layout) };
            }
        }

        self.ptr = NonNull::dangling();
        self.cap = 0;
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        self.release();
    }
}
