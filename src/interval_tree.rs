use crate::error::{IntervalTreeError, Result};
use crate::interval::{Coordinate, Interval};
use crate::node::{compare, Node};
use log::{debug, error, trace};
use std::fmt;

/// A static interval tree.
///
/// Each level keeps the intervals overlapping its pivot; intervals ending
/// before the pivot live in the left subtree, and intervals starting after it
/// in the right one. The tree is built once and never modified, so it can be
/// shared freely between readers.
///
/// Whether touching boundaries count as an intersection is decided once, at
/// construction, by the `open_ended` flag. Closed trees treat `(5, 10)` as
/// containing both `5` and `10`; open-ended trees contain neither.
#[derive(Clone, Debug, PartialEq)]
pub struct IntervalTree<T: Interval> {
    node: Node<T>,
    left: Option<Box<IntervalTree<T>>>,
    right: Option<Box<IntervalTree<T>>>,
    open_ended: bool,
}

// `lo` comes before `hi` on the scale, strictly so for open-ended trees.
fn reaches<R: PartialOrd>(open_ended: bool, lo: R, hi: R) -> bool {
    if open_ended {
        lo < hi
    } else {
        lo <= hi
    }
}

impl<T: Interval> IntervalTree<T> {
    /// Builds a tree with closed boundaries: an interval touching a query
    /// point or range at one of its ends intersects it.
    ///
    /// # Examples
    /// ```
    /// use centered_interval_tree::IntervalTree;
    ///
    /// let tree = IntervalTree::new(vec![(10, 20), (40, 75), (78, 85)]).unwrap();
    /// assert_eq!(tree.intersecting_point(75), vec![&(40, 75)]);
    /// assert!(tree.intersecting_point(21).is_empty());
    /// ```
    pub fn new<I>(intervals: I) -> Result<IntervalTree<T>>
    where
        I: IntoIterator<Item = T>,
    {
        IntervalTree::with_open_ended(intervals, false)
    }

    /// Builds a tree, choosing between closed (`false`) and open-ended
    /// (`true`) boundary semantics.
    ///
    /// Fails with [`IntervalTreeError::EmptyInput`] when `intervals` is empty.
    ///
    /// # Examples
    /// ```
    /// use centered_interval_tree::{IntervalTree, IntervalTreeError};
    ///
    /// let tree = IntervalTree::with_open_ended(vec![(5, 10)], true).unwrap();
    /// assert!(tree.intersecting_point(5).is_empty());
    /// assert_eq!(tree.intersecting_point(6), vec![&(5, 10)]);
    ///
    /// let empty: Vec<(u32, u32)> = Vec::new();
    /// assert_eq!(
    ///     IntervalTree::with_open_ended(empty, true).unwrap_err(),
    ///     IntervalTreeError::EmptyInput,
    /// );
    /// ```
    pub fn with_open_ended<I>(intervals: I, open_ended: bool) -> Result<IntervalTree<T>>
    where
        I: IntoIterator<Item = T>,
    {
        let intervals: Vec<T> = intervals.into_iter().collect();
        let count = intervals.len();
        let tree = IntervalTree::build(intervals, open_ended)?;
        debug!(
            "built interval tree over {} intervals, height {}, open_ended: {}",
            count,
            tree.height(),
            open_ended
        );
        Ok(tree)
    }

    fn build(mut intervals: Vec<T>, open_ended: bool) -> Result<IntervalTree<T>> {
        if intervals.is_empty() {
            return Err(IntervalTreeError::EmptyInput);
        }

        // Only used to pick a reasonably central interval to split around.
        intervals.sort_by(|a, b| compare(&a.start(), &b.start()));
        let mid = &intervals[intervals.len() / 2];
        let pivot = <T::Coord as Coordinate>::halfway(mid.start(), mid.end());

        let mut here = Vec::new();
        let mut lefts = Vec::new();
        let mut rights = Vec::new();
        for t in intervals {
            if t.end() < pivot {
                lefts.push(t);
            } else if t.start() > pivot {
                rights.push(t);
            } else {
                here.push(t);
            }
        }

        if here.is_empty() {
            error!("picked pivot {:?} but it failed to intersect anything", pivot);
            return Err(IntervalTreeError::FatalPivot {
                pivot: format!("{:?}", pivot),
            });
        }
        trace!(
            "pivot {:?}: {} here, {} left, {} right",
            pivot,
            here.len(),
            lefts.len(),
            rights.len()
        );

        let left = if lefts.is_empty() {
            None
        } else {
            Some(Box::new(IntervalTree::build(lefts, open_ended)?))
        };
        let right = if rights.is_empty() {
            None
        } else {
            Some(Box::new(IntervalTree::build(rights, open_ended)?))
        };

        Ok(IntervalTree {
            node: Node::new(here, pivot),
            left,
            right,
            open_ended,
        })
    }

    /// Whether boundary-touching is excluded from intersections.
    pub fn is_open_ended(&self) -> bool {
        self.open_ended
    }

    /// The coordinate the root level was split around.
    pub fn pivot(&self) -> T::Coord {
        self.node.pivot
    }

    /// Returns every interval containing `point`.
    ///
    /// The result is in no particular order.
    pub fn intersecting_point(&self, point: T::Coord) -> Vec<&T> {
        let mut found = Vec::new();
        self.intersecting_point_into(point, &mut found);
        found
    }

    /// Like [`IntervalTree::intersecting_point`], appending into `found`.
    pub fn intersecting_point_into<'a>(&'a self, point: T::Coord, found: &mut Vec<&'a T>) {
        let open_ended = self.open_ended;
        let mut tree = self;
        loop {
            let node = &tree.node;
            // Everything stored at a level overlaps its pivot, so on either
            // side of it only one end of each interval needs checking, and the
            // matching ordering lets the scan stop at the first miss.
            let next = if point > node.pivot {
                found.extend(node.ends_while(move |t| reaches(open_ended, point, t.end())));
                &tree.right
            } else if point < node.pivot {
                found.extend(node.starts_while(move |t| reaches(open_ended, t.start(), point)));
                &tree.left
            } else {
                // Neither subtree can hold the pivot itself.
                if point == node.pivot {
                    found.extend(node.iter_by_end().filter(|t| {
                        reaches(open_ended, t.start(), point) && reaches(open_ended, point, t.end())
                    }));
                }
                return;
            };
            match next.as_deref() {
                Some(child) => tree = child,
                None => return,
            }
        }
    }

    /// Returns every interval overlapping the range `start..=end`.
    ///
    /// `start <= end` is expected and not checked. The result is in no
    /// particular order.
    ///
    /// # Examples
    /// ```
    /// use centered_interval_tree::IntervalTree;
    ///
    /// let closed = IntervalTree::new(vec![(1, 3), (3, 6), (8, 9)]).unwrap();
    /// let mut hits = closed.intersecting_interval(6, 8);
    /// hits.sort();
    /// assert_eq!(hits, vec![&(3, 6), &(8, 9)]);
    ///
    /// let open = IntervalTree::with_open_ended(vec![(1, 3), (3, 6), (8, 9)], true).unwrap();
    /// assert!(open.intersecting_interval(6, 8).is_empty());
    /// ```
    pub fn intersecting_interval(&self, start: T::Coord, end: T::Coord) -> Vec<&T> {
        let mut found = Vec::new();
        self.intersecting_interval_into(start, end, &mut found);
        found
    }

    /// Like [`IntervalTree::intersecting_interval`], appending into `found`.
    pub fn intersecting_interval_into<'a>(
        &'a self,
        start: T::Coord,
        end: T::Coord,
        found: &mut Vec<&'a T>,
    ) {
        let open_ended = self.open_ended;
        // Overlap with an arbitrary range is monotonic in neither ordering, so
        // the whole level is scanned.
        found.extend(self.node.iter_by_start().filter(|t| {
            reaches(open_ended, t.start(), end) && reaches(open_ended, start, t.end())
        }));

        if start <= self.node.pivot {
            if let Some(left) = &self.left {
                left.intersecting_interval_into(start, end, found);
            }
        }
        if end >= self.node.pivot {
            if let Some(right) = &self.right {
                right.intersecting_interval_into(start, end, found);
            }
        }
    }

    /// Returns every interval in the tree: this level's in start order,
    /// followed by the left subtree's, then the right subtree's.
    pub fn squash(&self) -> Vec<&T> {
        let mut all = Vec::new();
        self.squash_into(&mut all);
        all
    }

    fn squash_into<'a>(&'a self, all: &mut Vec<&'a T>) {
        all.extend(self.node.iter_by_start());
        if let Some(left) = &self.left {
            left.squash_into(all);
        }
        if let Some(right) = &self.right {
            right.squash_into(all);
        }
    }

    /// Number of intervals stored. This walks the whole tree.
    pub fn size(&self) -> usize {
        self.node.len()
            + self.left.as_ref().map_or(0, |left| left.size())
            + self.right.as_ref().map_or(0, |right| right.size())
    }

    /// Number of levels on the longest path from the root down. A tree whose
    /// intervals all overlap one pivot has height 1.
    pub fn height(&self) -> usize {
        let left = self.left.as_ref().map_or(0, |left| left.height());
        let right = self.right.as_ref().map_or(0, |right| right.height());
        1 + left.max(right)
    }
}

impl<T> fmt::Display for IntervalTree<T>
where
    T: Interval,
    T::Coord: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.node)?;
        write!(f, "\n** left ** ")?;
        match &self.left {
            Some(left) => write!(f, "{}", left)?,
            None => write!(f, "<EMPTY>")?,
        }
        write!(f, "\n** right ** ")?;
        match &self.right {
            Some(right) => write!(f, "{}", right),
            None => write!(f, "<EMPTY>"),
        }
    }
}
