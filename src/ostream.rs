//! Chainable output formatting with sticky fill and precision.
//!
//! [`OStream`] wraps any [`fmt::Write`] sink and accepts values and
//! formatting manipulators through the `<<` operator:
//!
//! ```
//! use growvec::ostream::{setfill, setprecision, setw, OStream};
//!
//! let out = OStream::new(String::new())
//!     << setfill('0') << setw(4) << &7i32
//!     << " | " << setprecision(2) << &3.14159f64
//!     << " | " << setw(6) << &2.5f64 << " | " << &42u8;
//! assert_eq!(out.into_inner().unwrap(), "0007 | 3.14 | 002.50 | 42");
//! ```
//!
//! A [`SetWidth`] applies to the next inserted value only; fill and
//! precision stay in effect until replaced. Values are right-aligned
//! within the width. The precision only affects floating-point values,
//! which print exactly that many fractional digits; strings, characters,
//! booleans and integers are written unchanged.
//!
//! Any other [`Display`](fmt::Display) type is inserted through the
//! [`display`] wrapper, which never applies the precision.

use core::fmt;
use core::mem;
use core::ops::Shl;

/// Sets the minimum width of the next inserted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetWidth(pub usize);

/// Sets the padding character used to reach the width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetFill(pub char);

/// Sets the number of fractional digits of every subsequently inserted
/// floating-point value. Other values ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetPrecision(pub usize);

/// Returns a manipulator setting the width of the next value to `width`.
#[inline]
pub fn setw(width: usize) -> SetWidth {
    SetWidth(width)
}

/// Returns a manipulator setting the padding character to `fill`.
#[inline]
pub fn setfill(fill: char) -> SetFill {
    SetFill(fill)
}

/// Returns a manipulator setting the precision to `precision`.
#[inline]
pub fn setprecision(precision: usize) -> SetPrecision {
    SetPrecision(precision)
}

/// A formatting output stream over a [`fmt::Write`] sink.
///
/// Once a write fails, the error is latched: further insertions are
/// ignored and [`into_inner`](OStream::into_inner) reports the failure.
#[derive(Debug)]
pub struct OStream<W: fmt::Write> {
    out: W,
    width: usize,
    fill: char,
    precision: Option<usize>,
    state: fmt::Result,
}

impl<W: fmt::Write> OStream<W> {
    /// Wraps `out`, with no width, a space as fill and no precision.
    pub fn new(out: W) -> Self {
        OStream {
            out,
            width: 0,
            fill: ' ',
            precision: None,
            state: Ok(()),
        }
    }

    /// Returns the width that will apply to the next inserted value.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the current padding character.
    #[inline]
    pub fn fill(&self) -> char {
        self.fill
    }

    /// Returns the current precision, if one was set.
    #[inline]
    pub fn precision(&self) -> Option<usize> {
        self.precision
    }

    /// Returns `true` if no write has failed so far.
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.state.is_ok()
    }

    /// Returns a reference to the underlying sink.
    #[inline]
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Unwraps the stream, returning the sink, or the latched error if any
    /// write failed.
    pub fn into_inner(self) -> Result<W, fmt::Error> {
        self.state.map(|()| self.out)
    }

    fn insert<T: Insert + ?Sized>(&mut self, value: &T) {
        let width = mem::take(&mut self.width);
        if self.state.is_err() {
            return;
        }

        self.state = self.emit(value, width);
        if self.state.is_err() {
            log::debug!("output stream failed; discarding further insertions");
        }
    }

    fn emit<T: Insert + ?Sized>(&mut self, value: &T, width: usize) -> fmt::Result {
        if width > 0 {
            let mut counter = CharCount(0);
            value.write_to(&mut counter, self.precision)?;
            for _ in counter.0..width {
                self.out.write_char(self.fill)?;
            }
        }

        value.write_to(&mut self.out, self.precision)
    }
}

/// A value that can be written to an [`OStream`].
///
/// Implemented for strings, characters, booleans and the primitive number
/// types. Only `f32` and `f64` make use of the precision.
pub trait Insert {
    /// Writes `self` to `out`, honouring `precision` where it applies.
    fn write_to<O: fmt::Write>(&self, out: &mut O, precision: Option<usize>) -> fmt::Result;
}

macro_rules! insert_verbatim {
    ($($t:ty),*) => {$(
        impl Insert for $t {
            #[inline]
            fn write_to<O: fmt::Write>(&self, out: &mut O, _: Option<usize>) -> fmt::Result {
                write!(out, "{}", self)
            }
        }
    )*};
}

insert_verbatim!(str, alloc::string::String, char, bool);
insert_verbatim!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! insert_float {
    ($($t:ty),*) => {$(
        impl Insert for $t {
            #[inline]
            fn write_to<O: fmt::Write>(&self, out: &mut O, precision: Option<usize>) -> fmt::Result {
                match precision {
                    Some(precision) => write!(out, "{:.*}", precision, self),
                    None => write!(out, "{}", self),
                }
            }
        }
    )*};
}

insert_float!(f32, f64);

impl<T: Insert + ?Sized> Insert for &T {
    #[inline]
    fn write_to<O: fmt::Write>(&self, out: &mut O, precision: Option<usize>) -> fmt::Result {
        (**self).write_to(out, precision)
    }
}

/// Inserts any [`Display`](fmt::Display) value verbatim, ignoring the
/// stream's precision.
///
/// This `struct` is created by [`display`].
#[derive(Debug, Clone, Copy)]
pub struct Displayed<T>(pub T);

/// Wraps `value` so it can be inserted into an [`OStream`].
///
/// # Examples
/// ```
/// use core::fmt;
/// use growvec::ostream::{display, setprecision, OStream};
///
/// struct Celsius(f64);
///
/// impl fmt::Display for Celsius {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "{}°C", self.0)
///     }
/// }
///
/// let out = OStream::new(String::new())
///     << setprecision(1) << &display(Celsius(21.26)) << " / " << &21.26f64;
/// assert_eq!(out.into_inner().unwrap(), "21.26°C / 21.3");
/// ```
#[inline]
pub fn display<T: fmt::Display>(value: T) -> Displayed<T> {
    Displayed(value)
}

impl<T: fmt::Display> Insert for Displayed<T> {
    #[inline]
    fn write_to<O: fmt::Write>(&self, out: &mut O, _: Option<usize>) -> fmt::Result {
        write!(out, "{}", self.0)
    }
}

struct CharCount(usize);

impl fmt::Write for CharCount {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0 += s.chars().count();
        Ok(())
    }
}

impl<W: fmt::Write> Shl<SetWidth> for OStream<W> {
    type Output = Self;

    fn shl(mut self, SetWidth(width): SetWidth) -> Self {
        self.width = width;
        self
    }
}

impl<W: fmt::Write> Shl<SetFill> for OStream<W> {
    type Output = Self;

    fn shl(mut self, SetFill(fill): SetFill) -> Self {
        self.fill = fill;
        self
    }
}

impl<W: fmt::Write> Shl<SetPrecision> for OStream<W> {
    type Output = Self;

    fn shl(mut self, SetPrecision(precision): SetPrecision) -> Self {
        self.precision = Some(precision);
        self
    }
}

impl<'a, W: fmt::Write, T: Insert + ?Sized> Shl<&'a T> for OStream<W> {
    type Output = Self;

    fn shl(mut self, value: &'a T) -> Self {
        self.insert(value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::String;

    struct Limited {
        buf: String,
        room: usize,
    }

    impl fmt::Write for Limited {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            if s.len() > self.room {
                return Err(fmt::Error);
            }
            self.room -= s.len();
            self.buf.push_str(s);
            Ok(())
        }
    }

    #[test]
    fn width_applies_once() {
        let out = OStream::new(String::new()) << setw(5) << &42 << &42;
        assert_eq!(out.width(), 0);
        assert_eq!(out.get_ref(), "   4242");
    }

    #[test]
    fn fill_and_precision_persist() {
        let out = OStream::new(String::new())
            << setfill('*')
            << setprecision(1)
            << setw(6)
            << &1.26f64
            << ","
            << setw(4)
            << &0.5f32;
        assert_eq!(out.fill(), '*');
        assert_eq!(out.precision(), Some(1));
        assert_eq!(out.into_inner().unwrap(), "***1.3,*0.5");
    }

    #[test]
    fn precision_leaves_non_floats_alone() {
        let out = OStream::new(String::new())
            << setprecision(2)
            << &3.14159f64
            << " | "
            << &7i32
            << " | "
            << "abcdef"
            << &'x'
            << &true;
        assert_eq!(out.into_inner().unwrap(), "3.14 | 7 | abcdefxtrue");
    }

    #[test]
    fn displayed_values_ignore_precision() {
        struct Ratio(u32, u32);

        impl fmt::Display for Ratio {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}/{}", self.0, self.1)
            }
        }

        let out = OStream::new(String::new())
            << setprecision(0)
            << setfill('_')
            << setw(6)
            << &display(Ratio(3, 40))
            << &String::from(" ok");
        assert_eq!(out.into_inner().unwrap(), "__3/40 ok");
    }

    #[test]
    fn narrow_width_never_truncates() {
        let out = OStream::new(String::new()) << setw(2) << "hello";
        assert_eq!(out.into_inner().unwrap(), "hello");
    }

    #[test]
    fn padding_counts_characters_not_bytes() {
        let out = OStream::new(String::new()) << setfill('.') << setw(4) << "äö";
        assert_eq!(out.into_inner().unwrap(), "..äö");
    }

    #[test]
    fn write_errors_latch() {
        let sink = Limited {
            buf: String::new(),
            room: 4,
        };
        let out = OStream::new(sink) << "abc" << "defg" << "h";
        assert!(!out.is_ok());
        assert_eq!(out.get_ref().buf, "abc");
        assert!(out.into_inner().is_err());
    }

    #[test]
    fn formats_vector_contents() {
        let vec = crate::Vec::<u8>::from_slice(&[1, 22, 3]);
        let mut out = OStream::new(String::new());
        for x in &vec {
            out = out << setw(3) << x;
        }
        assert_eq!(out.into_inner().unwrap(), "  1 22  3");
    }
}
