//! Capacity growth policies.
//!
//! A [`Vec`](crate::Vec) that runs out of room asks its [`Growth`] policy
//! for the next capacity. Growth is exponential while the buffer is small
//! and turns linear once it passes [`Growth::THRESHOLD`], which bounds the
//! amount of unused memory held by very large vectors.

/// Compile-time parameters of the growth strategy.
///
/// # Examples
/// ```
/// use growvec::growth::Growth;
///
/// struct Small;
/// impl Growth for Small {
///     const INITIAL: usize = 4;
///     const THRESHOLD: usize = 16;
///     const INCREMENT: usize = 8;
///     const LIMIT: usize = 40;
/// }
///
/// let mut vec = growvec::Vec::<u8, growvec::Cloned, Small>::new();
/// let mut seen = std::vec::Vec::new();
/// for i in 0..40 {
///     vec.push(i).unwrap();
///     if seen.last() != Some(&vec.capacity()) {
///         seen.push(vec.capacity());
///     }
/// }
/// assert_eq!(seen, [4, 8, 16, 32, 40]);
/// assert!(vec.push(40).is_err());
/// ```
pub trait Growth {
    /// The capacity allocated by the first growth event of an empty vector.
    const INITIAL: usize = 2;
    /// Capacities up to and including this value are doubled on growth.
    const THRESHOLD: usize = 1 << 16;
    /// The fixed step added to capacities above [`THRESHOLD`](Growth::THRESHOLD).
    const INCREMENT: usize = 1 << 16;
    /// An upper bound on the element count, applied on top of the
    /// platform limit derived from the element size.
    const LIMIT: usize = usize::MAX;
}

/// The growth policy used when none is specified.
///
/// Starts at 2 slots and doubles up to 65 536, then grows by 65 536 slots
/// at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultGrowth;

impl Growth for DefaultGrowth {}

/// Returns the largest number of `T`s a vector governed by `G` may hold.
///
/// For sized types this is `isize::MAX` bytes divided by the element size,
/// further limited by [`Growth::LIMIT`]. Zero-sized types never allocate,
/// so only the policy limit applies.
#[inline]
pub const fn max_capacity<T, G: Growth>() -> usize {
    let size = core::mem::size_of::<T>();
    let platform = if size == 0 {
        usize::MAX
    } else {
        isize::MAX as usize / size
    };

    if G::LIMIT < platform {
        G::LIMIT
    } else {
        platform
    }
}

/// Computes the capacity following `current` under the policy `G`,
/// clamped to `max`.
///
/// Returns [`None`] when `current` already is `max` or the computation
/// overflows; this is the signal that the vector is as large as it can get.
///
/// # Examples
/// ```
/// use growvec::growth::{next_capacity, DefaultGrowth};
///
/// let mut cap = 0;
/// let mut steps = std::vec::Vec::new();
/// while cap < 16 {
///     cap = next_capacity::<DefaultGrowth>(cap, usize::MAX).unwrap();
///     steps.push(cap);
/// }
/// assert_eq!(steps, [2, 4, 8, 16]);
///
/// assert_eq!(next_capacity::<DefaultGrowth>(10, 10), None);
/// assert_eq!(next_capacity::<DefaultGrowth>(8, 10), Some(10));
/// ```
pub fn next_capacity<G: Growth>(current: usize, max: usize) -> Option<usize> {
    if current >= max {
        return None;
    }

    let candidate = if current == 0 {
        Some(G::INITIAL)
    } else if current <= G::THRESHOLD {
        current.checked_mul(2)
    } else {
        current.checked_add(G::INCREMENT)
    }?;

    // a policy with INITIAL == 0 or INCREMENT == 0 would otherwise stall
    if candidate <= current {
        return None;
    }

    Some(candidate.min(max))
}
