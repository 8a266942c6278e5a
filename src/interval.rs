use num_traits::Num;
use std::fmt;
use std::ops::{Range, RangeInclusive};

/// A coordinate on the ordered scale intervals live on.
///
/// Implemented for every primitive integer and float. The pivot of each tree
/// level is computed with the type's own arithmetic, so integer coordinates
/// truncate.
pub trait Coordinate: Copy + PartialOrd + fmt::Debug + Num {
    /// Returns `start + (end - start) / 2` for `start <= end`.
    fn halfway(start: Self, end: Self) -> Self;
}

// floor((start + end) / 2) without forming the sum: `start + end` is twice the
// shared bits plus the differing ones. Equal to `start + (end - start) / 2`
// whenever `start <= end`, and never leaves `start..=end`.
macro_rules! integer_coordinate {
    ($($ty:ty)*) => {$(
        impl Coordinate for $ty {
            fn halfway(start: $ty, end: $ty) -> $ty {
                (start & end) + ((start ^ end) >> 1)
            }
        }
    )*};
}

integer_coordinate!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);

macro_rules! float_coordinate {
    ($($ty:ty)*) => {$(
        impl Coordinate for $ty {
            fn halfway(start: $ty, end: $ty) -> $ty {
                start + (end - start) / 2.0
            }
        }
    )*};
}

float_coordinate!(f32 f64);

/// Anything with a start and an end coordinate.
///
/// Both accessors must be pure: the tree calls them repeatedly while building
/// and querying, and expects the same answer every time. Implementors are
/// expected to uphold `start() <= end()`; it is not checked.
pub trait Interval {
    /// The scale both ends are measured on.
    type Coord: Coordinate;

    /// The lower end.
    fn start(&self) -> Self::Coord;
    /// The upper end, at or after `start`.
    fn end(&self) -> Self::Coord;
}

impl<I: Interval + ?Sized> Interval for &I {
    type Coord = I::Coord;

    fn start(&self) -> Self::Coord {
        (**self).start()
    }

    fn end(&self) -> Self::Coord {
        (**self).end()
    }
}

impl<R: Coordinate> Interval for (R, R) {
    type Coord = R;

    fn start(&self) -> R {
        self.0
    }

    fn end(&self) -> R {
        self.1
    }
}

impl<R: Coordinate> Interval for [R; 2] {
    type Coord = R;

    fn start(&self) -> R {
        self[0]
    }

    fn end(&self) -> R {
        self[1]
    }
}

// A half-open `Range` is indexed by its two bounds as-is; the boundary
// semantics are a property of the tree, not of the stored value.
impl<R: Coordinate> Interval for Range<R> {
    type Coord = R;

    fn start(&self) -> R {
        self.start
    }

    fn end(&self) -> R {
        self.end
    }
}

impl<R: Coordinate> Interval for RangeInclusive<R> {
    type Coord = R;

    fn start(&self) -> R {
        *RangeInclusive::start(self)
    }

    fn end(&self) -> R {
        *RangeInclusive::end(self)
    }
}

/// An interval carrying an arbitrary payload.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Entry<R, V> {
    /// Lower end.
    pub start: R,
    /// Upper end.
    pub end: R,
    /// Payload handed back by queries along with the bounds.
    pub value: V,
}

impl<R, V> Entry<R, V> {
    /// Wraps `value` with the interval `start..=end`.
    pub fn new(start: R, end: R, value: V) -> Self {
        Entry { start, end, value }
    }
}

impl<R: Coordinate, V> Interval for Entry<R, V> {
    type Coord = R;

    fn start(&self) -> R {
        self.start
    }

    fn end(&self) -> R {
        self.end
    }
}

impl<R, V> fmt::Display for Entry<R, V>
where
    R: fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{},{}]: {}", self.start, self.end, self.value)
    }
}
