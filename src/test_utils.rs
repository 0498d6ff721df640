use core::cell::Cell;
use core::fmt;
use std::rc::Rc;

pub(crate) const RNG_SEED: [u8; 32] = [
    0x6a, 0x2f, 0x91, 0x3c, 0xd4, 0x07, 0xbe, 0x58, 0x13, 0xe9, 0x42, 0x7d, 0xa0, 0x65, 0xfb, 0x1e,
    0x88, 0x34, 0xc7, 0x5a, 0x0d, 0x96, 0x2b, 0xf1, 0x4e, 0xb3, 0x70, 0x19, 0xdc, 0x85, 0x27, 0x6c,
];

#[derive(Default)]
struct Counts {
    clones: Cell<usize>,
    drops: Cell<usize>,
}

/// Tallies clones and drops of every [`Droppable`] it made.
pub(crate) struct DropCounter {
    counts: Rc<Counts>,
}

impl DropCounter {
    pub(crate) fn new() -> Self {
        DropCounter {
            counts: Rc::new(Counts::default()),
        }
    }

    pub(crate) fn make<T>(&self, value: T) -> Droppable<T> {
        Droppable {
            value,
            counts: Rc::clone(&self.counts),
        }
    }

    pub(crate) fn clones(&self) -> usize {
        self.counts.clones.get()
    }

    pub(crate) fn drops(&self) -> usize {
        self.counts.drops.get()
    }
}

pub(crate) struct Droppable<T> {
    pub(crate) value: T,
    counts: Rc<Counts>,
}

impl<T: Clone> Clone for Droppable<T> {
    fn clone(&self) -> Self {
        self.counts.clones.set(self.counts.clones.get() + 1);
        Droppable {
            value: self.value.clone(),
            counts: Rc::clone(&self.counts),
        }
    }
}

impl<T> Drop for Droppable<T> {
    fn drop(&mut self) {
        self.counts.drops.set(self.counts.drops.get() + 1);
    }
}

impl<T: PartialEq> PartialEq for Droppable<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: fmt::Debug> fmt::Debug for Droppable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Droppable").field(&self.value).finish()
    }
}
