//! Implementation of a static, centered interval tree ([`IntervalTree`]). The
//! tree is built once from a fixed set of intervals, splitting them around the
//! midpoint of a median interval: intervals overlapping that pivot stay at the
//! current level, the rest go to a left or right subtree. It provides "stabbing
//! queries" (which stored intervals contain point `p`?) as well as range
//! queries (which stored intervals overlap `[start, end]`?), with either closed
//! or open-ended boundary semantics.
//!
//! Anything implementing [`Interval`] can be stored: tuples, two-element
//! arrays, `std` ranges, or an [`Entry`] carrying a payload. Coordinates may be
//! any primitive integer or float (see [`Coordinate`]).
//!
//! ```
//! use centered_interval_tree::{Entry, IntervalTree};
//!
//! let tree = IntervalTree::new(vec![
//!     Entry::new(10, 20, "a"),
//!     Entry::new(15, 30, "b"),
//!     Entry::new(40, 50, "c"),
//! ])
//! .unwrap();
//!
//! let mut hits: Vec<_> = tree.intersecting_point(18).iter().map(|e| e.value).collect();
//! hits.sort();
//! assert_eq!(hits, vec!["a", "b"]);
//! assert_eq!(tree.intersecting_interval(31, 39).len(), 0);
//! assert_eq!(tree.size(), 3);
//! ```

mod error;
mod interval;
/// An interval tree implemented as a centered, ternary split of intervals.
pub mod interval_tree;
mod node;

pub use error::{IntervalTreeError, Result};
pub use interval::{Coordinate, Entry, Interval};
pub use interval_tree::IntervalTree;
