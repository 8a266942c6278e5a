use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntervalTreeError {
    /// The tree was asked to index zero intervals.
    #[error("interval tree constructor got empty set of intervals")]
    EmptyInput,
    /// The pivot picked for a level overlapped none of its intervals. Every
    /// pivot is the midpoint of one of the intervals being split, so this only
    /// happens when that midpoint cannot be represented, e.g. a float interval
    /// wider than the type's maximum value.
    #[error("fatal error: picked pivot at {pivot} but it failed to intersect anything")]
    FatalPivot { pivot: String },
}

pub type Result<T> = std::result::Result<T, IntervalTreeError>;
