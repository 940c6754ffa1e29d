use crate::element::Element;
use crate::ranges::Range;

/// Errors produced by range construction and the partial operations.
///
/// Each variant carries the values involved, so callers can recover them
/// instead of parsing a message.  The operator forms (`|`, `-`) panic with
/// the same messages for call sites that treat these as programmer errors.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RangeError<T: Element> {
    /// The lower bound of a range was greater than its upper bound.
    #[error("range lower bound {lower} must be less than or equal to range upper bound {upper}")]
    BoundOrder { lower: T, upper: T },

    /// A union of two ranges would leave a gap between them.
    #[error("result of range union would not be contiguous: {first} and {second}")]
    NotContiguous { first: Range<T>, second: Range<T> },

    /// A difference would split the first range in two.  The fragments
    /// that would remain are carried in the error.
    #[error("result of range difference would not be contiguous: {lower} and {upper}")]
    DisjointRanges { lower: Range<T>, upper: Range<T> },

    /// The operation is not defined for this range.
    #[error("cannot {operation}: {reason}")]
    Unsupported {
        operation: &'static str,
        reason: &'static str,
    },
}
