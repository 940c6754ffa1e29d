use std::fmt;
use std::ops;

use itertools::{iproduct, Itertools};
use smallvec::SmallVec;

use crate::element::Element;
use crate::ranges::Range;

/// A sorted sequence of disjoint, non-adjacent, non-empty ranges.
///
/// A multirange is the normal form of an arbitrary set of ranges: the
/// constructor sorts its input, drops empty ranges and fuses every pair of
/// overlapping or adjacent neighbours, so two multiranges describe the
/// same set of values exactly when they compare equal.
///
/// ```
/// use pg_ranges::{Multirange, Range};
///
/// let m = Multirange::new([
///     Range::new_closed_open(1, 10)?,
///     Range::new_closed_open(5, 15)?,
///     Range::new_closed_open(20, 30)?,
/// ]);
/// assert_eq!(format!("{}", m), "{[1,15),[20,30)}");
/// # Ok::<(), pg_ranges::RangeError<i32>>(())
/// ```
///
/// The predicates that accept a plain [`Range`] or a bare element on the
/// *right* side have dedicated `_range` methods; for the other direction,
/// lift the value first (`Multirange::from(range)`, which also accepts a
/// bare element via [`Range::new_single`]).
#[derive(Clone)]
pub struct Multirange<T> {
    // One inline range: the common multirange is a single span.
    ranges: SmallVec<[Range<T>; 1]>,
}

impl<T: Element> Multirange<T> {
    /// Normalize an arbitrary collection of ranges into a multirange.
    pub fn new(ranges: impl IntoIterator<Item = Range<T>>) -> Self {
        let mut sorted: SmallVec<[Range<T>; 1]> = ranges
            .into_iter()
            .filter(|range| !range.is_empty())
            .collect();
        sorted.sort();

        let mut normalized: SmallVec<[Range<T>; 1]> = SmallVec::new();
        for range in sorted {
            match normalized.last_mut() {
                // Contiguous with the accumulated tail: fuse.  merge is
                // the union here, since the two ranges leave no gap.
                Some(last)
                    if last.overlaps(&range) || last.adjacent_to(&range) =>
                {
                    *last = last.merge(&range);
                }
                _ => normalized.push(range),
            }
        }
        Multirange { ranges: normalized }
    }

    /// The multirange with no ranges.
    pub fn empty() -> Self {
        Multirange {
            ranges: SmallVec::new(),
        }
    }

    /// The normalized ranges, in increasing order.
    pub fn ranges(&self) -> &[Range<T>] {
        &self.ranges
    }

    /// Number of ranges after normalization.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// True if the multirange contains no value.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Whether the value is contained in one of the ranges.
    pub fn contains(&self, value: &T) -> bool {
        self.ranges.iter().any(|range| range.contains(value))
    }

    /// Whether every value of `other` is contained in `self`.  An empty
    /// range is contained in any multirange.
    pub fn contains_range(&self, other: &Range<T>) -> bool {
        other.is_empty()
            || self.ranges.iter().any(|range| range.contains_range(other))
    }

    /// Whether every value of `other` is contained in `self`.  Since both
    /// sides are normalized, each of `other`'s ranges must fit inside a
    /// single range of `self`.
    pub fn contains_multirange(&self, other: &Self) -> bool {
        other.ranges.iter().all(|range| self.contains_range(range))
    }

    /// Whether the two multiranges have at least one value in common.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.ranges.iter().any(|range| other.overlaps_range(range))
    }

    /// Whether the multirange and the range have at least one value in
    /// common.
    pub fn overlaps_range(&self, other: &Range<T>) -> bool {
        self.ranges.iter().any(|range| range.overlaps(other))
    }

    /// Whether every value in `self` is strictly less than every value in
    /// `other`.  False when either side is empty.
    pub fn strictly_left_of(&self, other: &Self) -> bool {
        match (self.ranges.last(), other.ranges.first()) {
            (Some(last), Some(first)) => last.strictly_left_of(first),
            _ => false,
        }
    }

    /// Whether every value in `self` is strictly less than every value in
    /// `other`.  False when either side is empty.
    pub fn strictly_left_of_range(&self, other: &Range<T>) -> bool {
        match self.ranges.last() {
            Some(last) => last.strictly_left_of(other),
            None => false,
        }
    }

    /// Whether every value in `self` is strictly greater than every value
    /// in `other`.
    pub fn strictly_right_of(&self, other: &Self) -> bool {
        other.strictly_left_of(self)
    }

    /// Whether every value in `self` is strictly greater than every value
    /// in `other`.
    pub fn strictly_right_of_range(&self, other: &Range<T>) -> bool {
        match self.ranges.first() {
            Some(first) => first.strictly_right_of(other),
            None => false,
        }
    }

    /// Whether `self` extends no further right than `other`.
    pub fn does_not_extend_right_of(&self, other: &Self) -> bool {
        match (self.ranges.last(), other.ranges.last()) {
            (Some(a), Some(b)) => a.does_not_extend_right_of(b),
            _ => false,
        }
    }

    /// Whether `self` extends no further right than `other`.
    pub fn does_not_extend_right_of_range(&self, other: &Range<T>) -> bool {
        match self.ranges.last() {
            Some(last) => last.does_not_extend_right_of(other),
            None => false,
        }
    }

    /// Whether `self` extends no further left than `other`.
    pub fn does_not_extend_left_of(&self, other: &Self) -> bool {
        match (self.ranges.first(), other.ranges.first()) {
            (Some(a), Some(b)) => a.does_not_extend_left_of(b),
            _ => false,
        }
    }

    /// Whether `self` extends no further left than `other`.
    pub fn does_not_extend_left_of_range(&self, other: &Range<T>) -> bool {
        match self.ranges.first() {
            Some(first) => first.does_not_extend_left_of(other),
            None => false,
        }
    }

    /// Whether the multiranges touch at their outer ends without
    /// overlapping: the last range of one is adjacent to the first range
    /// of the other.  Interior adjacency cannot exist between normalized
    /// multiranges.
    pub fn adjacent_to(&self, other: &Self) -> bool {
        Self::outer_ends_adjacent(self, other)
            || Self::outer_ends_adjacent(other, self)
    }

    /// Whether the range sits immediately before or immediately after the
    /// whole multirange.
    pub fn adjacent_to_range(&self, other: &Range<T>) -> bool {
        let (other_lower, other_upper) = match other.span_bounds() {
            Some(bounds) => bounds,
            None => return false,
        };
        let after = match self.ranges.last().and_then(Range::span_bounds) {
            Some((_, last_upper)) => last_upper.adjacent_to(other_lower),
            None => false,
        };
        let before = match self.ranges.first().and_then(Range::span_bounds) {
            Some((first_lower, _)) => other_upper.adjacent_to(first_lower),
            None => false,
        };
        after || before
    }

    fn outer_ends_adjacent(left: &Self, right: &Self) -> bool {
        match (
            left.ranges.last().and_then(Range::span_bounds),
            right.ranges.first().and_then(Range::span_bounds),
        ) {
            (Some((_, upper)), Some((lower, _))) => upper.adjacent_to(lower),
            _ => false,
        }
    }

    /// The union of the two multiranges; normalization fuses whatever
    /// overlaps or touches.
    pub fn union(&self, other: &Self) -> Self {
        Self::new(self.ranges.iter().chain(&other.ranges).cloned())
    }

    /// The values contained in both multiranges.
    pub fn intersection(&self, other: &Self) -> Self {
        Self::new(
            iproduct!(&self.ranges, &other.ranges)
                .map(|(a, b)| a.intersection(b)),
        )
    }

    /// The values of `self` that are not in `other`.  When removing a
    /// range splits one of ours in two, both fragments are kept.
    pub fn difference(&self, other: &Self) -> Self {
        let mut current: Vec<Range<T>> = self.ranges.to_vec();
        for subtrahend in &other.ranges {
            let mut remaining = Vec::with_capacity(current.len() + 1);
            for range in current {
                let (rest, split) = range.subtract(subtrahend);
                if !rest.is_empty() {
                    remaining.push(rest);
                }
                if let Some(fragment) = split {
                    remaining.push(fragment);
                }
            }
            current = remaining;
        }
        Self::new(current)
    }

    /// The smallest single range covering the whole multirange; the empty
    /// range for an empty multirange.
    pub fn merge(&self) -> Range<T> {
        match (self.ranges.first(), self.ranges.last()) {
            (Some(first), Some(last)) => first.merge(last),
            _ => Range::empty(),
        }
    }
}

impl<T: Element> Default for Multirange<T> {
    /// Returns the empty multirange.
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Element> From<Range<T>> for Multirange<T> {
    /// A one-range multirange; the empty range lifts to the empty
    /// multirange.
    fn from(range: Range<T>) -> Self {
        Self::new([range])
    }
}

impl<T: Element> From<T> for Multirange<T> {
    /// Lift a bare element through its singleton range.
    fn from(value: T) -> Self {
        Self::from(Range::new_single(value))
    }
}

impl<T: Element> FromIterator<Range<T>> for Multirange<T> {
    fn from_iter<I: IntoIterator<Item = Range<T>>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<T: Element> PartialEq for Multirange<T> {
    /// True if the two multiranges contain the same values; normalization
    /// makes this a pairwise comparison.
    fn eq(&self, other: &Self) -> bool {
        self.ranges.len() == other.ranges.len()
            && self
                .ranges
                .iter()
                .zip(&other.ranges)
                .all(|(a, b)| a == b)
    }
}

impl<T: Element> Eq for Multirange<T> {}

impl<T: Element> fmt::Display for Multirange<T> {
    /// PostgreSQL text form: `{[1,10),[20,30)}`, `{}` when empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.ranges.iter().format(","))
    }
}

impl<T: Element> fmt::Debug for Multirange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

///  &Multirange | &Multirange
impl<T: Element> ops::BitOr<&Multirange<T>> for &Multirange<T> {
    type Output = Multirange<T>;

    /// Same as [`Multirange::union`].
    fn bitor(self, rhs: &Multirange<T>) -> Multirange<T> {
        self.union(rhs)
    }
}

///  &Multirange | Multirange
impl<T: Element> ops::BitOr<Multirange<T>> for &Multirange<T> {
    type Output = Multirange<T>;

    fn bitor(self, rhs: Multirange<T>) -> Multirange<T> {
        self.union(&rhs)
    }
}

///  Multirange | &Multirange
impl<T: Element> ops::BitOr<&Multirange<T>> for Multirange<T> {
    type Output = Multirange<T>;

    fn bitor(self, rhs: &Multirange<T>) -> Multirange<T> {
        self.union(rhs)
    }
}

///  Multirange | Multirange
impl<T: Element> ops::BitOr<Multirange<T>> for Multirange<T> {
    type Output = Multirange<T>;

    fn bitor(self, rhs: Multirange<T>) -> Multirange<T> {
        self.union(&rhs)
    }
}

///  &Multirange & &Multirange
impl<T: Element> ops::BitAnd<&Multirange<T>> for &Multirange<T> {
    type Output = Multirange<T>;

    /// Same as [`Multirange::intersection`].
    fn bitand(self, rhs: &Multirange<T>) -> Multirange<T> {
        self.intersection(rhs)
    }
}

///  &Multirange & Multirange
impl<T: Element> ops::BitAnd<Multirange<T>> for &Multirange<T> {
    type Output = Multirange<T>;

    fn bitand(self, rhs: Multirange<T>) -> Multirange<T> {
        self.intersection(&rhs)
    }
}

///  Multirange & &Multirange
impl<T: Element> ops::BitAnd<&Multirange<T>> for Multirange<T> {
    type Output = Multirange<T>;

    fn bitand(self, rhs: &Multirange<T>) -> Multirange<T> {
        self.intersection(rhs)
    }
}

///  Multirange & Multirange
impl<T: Element> ops::BitAnd<Multirange<T>> for Multirange<T> {
    type Output = Multirange<T>;

    fn bitand(self, rhs: Multirange<T>) -> Multirange<T> {
        self.intersection(&rhs)
    }
}

///  &Multirange - &Multirange
impl<T: Element> ops::Sub<&Multirange<T>> for &Multirange<T> {
    type Output = Multirange<T>;

    /// Same as [`Multirange::difference`].
    fn sub(self, rhs: &Multirange<T>) -> Multirange<T> {
        self.difference(rhs)
    }
}

///  &Multirange - Multirange
impl<T: Element> ops::Sub<Multirange<T>> for &Multirange<T> {
    type Output = Multirange<T>;

    fn sub(self, rhs: Multirange<T>) -> Multirange<T> {
        self.difference(&rhs)
    }
}

///  Multirange - &Multirange
impl<T: Element> ops::Sub<&Multirange<T>> for Multirange<T> {
    type Output = Multirange<T>;

    fn sub(self, rhs: &Multirange<T>) -> Multirange<T> {
        self.difference(rhs)
    }
}

///  Multirange - Multirange
impl<T: Element> ops::Sub<Multirange<T>> for Multirange<T> {
    type Output = Multirange<T>;

    fn sub(self, rhs: Multirange<T>) -> Multirange<T> {
        self.difference(&rhs)
    }
}
