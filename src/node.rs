use crate::interval::Interval;
use std::cmp::Ordering;
use std::fmt;

/// The intervals of one tree level: every one of them overlaps `pivot`.
///
/// Values are stored once, sorted by start. The end ordering is a permutation
/// of indices into `by_start`.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Node<T: Interval> {
    pub pivot: T::Coord,
    pub by_start: Vec<T>,
    pub by_end: Vec<usize>,
}

// Coordinates are only `PartialOrd`; incomparable pairs sort as equal.
pub(crate) fn compare<R: PartialOrd>(a: &R, b: &R) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

impl<T: Interval> Node<T> {
    pub fn new(mut intervals: Vec<T>, pivot: T::Coord) -> Node<T> {
        intervals.sort_by(|a, b| compare(&a.start(), &b.start()));

        let mut by_end: Vec<usize> = (0..intervals.len()).collect();
        by_end.sort_by(|&a, &b| compare(&intervals[a].end(), &intervals[b].end()));

        Node {
            pivot,
            by_start: intervals,
            by_end,
        }
    }

    pub fn len(&self) -> usize {
        self.by_start.len()
    }

    pub fn iter_by_start(&self) -> std::slice::Iter<'_, T> {
        self.by_start.iter()
    }

    pub fn iter_by_end(&self) -> impl DoubleEndedIterator<Item = &T> + '_ {
        self.by_end.iter().map(move |&i| &self.by_start[i])
    }

    /// Leading intervals in start order, up to the first one failing `keep`.
    pub fn starts_while<'a, F>(&'a self, keep: F) -> impl Iterator<Item = &'a T> + 'a
    where
        F: Fn(&T) -> bool + 'a,
    {
        self.iter_by_start().take_while(move |t| keep(*t))
    }

    /// Trailing intervals in end order, walked from the largest end down to
    /// the first one failing `keep`.
    pub fn ends_while<'a, F>(&'a self, keep: F) -> impl Iterator<Item = &'a T> + 'a
    where
        F: Fn(&T) -> bool + 'a,
    {
        self.iter_by_end().rev().take_while(move |t| keep(*t))
    }
}

impl<T> fmt::Display for Node<T>
where
    T: Interval,
    T::Coord: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "pivot: {}", self.pivot)?;
        writeln!(f, "intervals sorted by start:")?;
        for t in self.iter_by_start() {
            writeln!(f, "({} - {})", t.start(), t.end())?;
        }
        writeln!(f, "intervals sorted by end:")?;
        for t in self.iter_by_end() {
            writeln!(f, "({} - {})", t.start(), t.end())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Entry;

    fn sample() -> Node<(u32, u32)> {
        Node::new(vec![(4, 9), (1, 6), (5, 5), (2, 12), (3, 7)], 5)
    }

    #[test]
    fn sorts_both_views() {
        let node = sample();
        let starts: Vec<_> = node.iter_by_start().map(|t| t.0).collect();
        let ends: Vec<_> = node.iter_by_end().map(|t| t.1).collect();
        assert_eq!(starts, vec![1, 2, 3, 4, 5]);
        assert_eq!(ends, vec![5, 6, 7, 9, 12]);
        assert_eq!(node.len(), 5);
    }

    #[test]
    fn prefix_scan_stops_at_first_failure() {
        let node = sample();
        let hits: Vec<_> = node.starts_while(|t| t.0 <= 3).copied().collect();
        assert_eq!(hits, vec![(1, 6), (2, 12), (3, 7)]);
        assert_eq!(node.starts_while(|t| t.0 < 1).count(), 0);
    }

    #[test]
    fn suffix_scan_walks_from_largest_end() {
        let node = sample();
        let hits: Vec<_> = node.ends_while(|t| t.1 >= 7).copied().collect();
        assert_eq!(hits, vec![(2, 12), (4, 9), (3, 7)]);
        assert_eq!(node.ends_while(|t| t.1 > 12).count(), 0);
    }

    #[test]
    fn ties_keep_input_order() {
        let tied = vec![
            Entry::new(3u8, 3, 'a'),
            Entry::new(3, 3, 'b'),
            Entry::new(3, 3, 'c'),
        ];
        let node = Node::new(tied, 3);
        let tags: Vec<_> = node.iter_by_end().map(|t| t.value).collect();
        assert_eq!(tags, vec!['a', 'b', 'c']);
    }

    #[test]
    fn display_lists_both_orders() {
        let node = Node::new(vec![(2u32, 8u32), (1, 9)], 5);
        assert_eq!(
            node.to_string(),
            "pivot: 5\n\
             intervals sorted by start:\n\
             (1 - 9)\n\
             (2 - 8)\n\
             intervals sorted by end:\n\
             (2 - 8)\n\
             (1 - 9)\n"
        );
    }
}
