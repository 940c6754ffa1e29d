use std::cmp::Ordering;
use std::fmt;
use std::ops;
use std::ops::Bound;

use crate::bounds::RangeBound;
use crate::element::Element;
use crate::errors::RangeError;

/// A possibly-empty range of values over an ordered element type.
///
/// A range is either the canonical empty range, or a span delimited by a
/// lower and an upper bound, each of which is a value (inclusive or
/// exclusive) or unbound:
///
///  |Range   |Constructor                    |Description
///  |--------|-------------------------------|--------------
///  | `[A,B)`|[`Range::new_closed_open`]     |left-closed, right-open
///  | `[A,B]`|[`Range::new_closed_closed`]   |left-closed, right-closed
///  | `(A,B)`|[`Range::new_open_open`]       |left-open, right-open
///  | `(A,B]`|[`Range::new_open_closed`]     |left-open, right-closed
///  | `(,B]` |[`Range::new_unbounded_closed`]|left-unbounded, right-closed
///  | `(,B)` |[`Range::new_unbounded_open`]  |left-unbounded, right-open
///  | `[A,)` |[`Range::new_closed_unbounded`]|left-closed, right-unbounded
///  | `(A,)` |[`Range::new_open_unbounded`]  |left-open, right-unbounded
///  | `(,)`  |[`Range::doubly_unbounded`]    |doubly unbounded
///  | `[A,A]`|[`Range::new_single`]          |a single value
///  | `empty`|[`Range::empty`]               |no values
///
/// On a discrete element domain every range is rewritten into the
/// canonical closed-open form, exactly as PostgreSQL does for its
/// discrete range types: `(1, 9]` over integers is stored as `[2, 10)`,
/// and inputs that contain no value, like `[3, 3)` or `(3, 4)`, all
/// collapse to the one empty range.
///
/// ```
/// use pg_ranges::Range;
///
/// let r = Range::new_closed_open(1, 10)?;
/// assert!(r.contains(&1));
/// assert!(!r.contains(&10));
/// assert_eq!(Range::new_open_closed(0, 9)?, r);
/// # Ok::<(), pg_ranges::RangeError<i32>>(())
/// ```
#[derive(Clone)]
pub struct Range<T> {
    inner: Inner<T>,
}

#[derive(Clone)]
enum Inner<T> {
    Empty,
    Span {
        lower: RangeBound<T>,
        upper: RangeBound<T>,
    },
}

impl<T: Element> Range<T> {
    /// Construct a range from a pair of [`std::ops::Bound`]s.
    ///
    /// Fails with [`RangeError::BoundOrder`] when the lower bound value is
    /// greater than the upper bound value.  A pair of equal values that
    /// admits no element (not both ends inclusive) produces the empty
    /// range.
    ///
    /// ```
    /// use std::ops::Bound::{Excluded, Included, Unbounded};
    /// use pg_ranges::Range;
    ///
    /// let r = Range::new(Included(1), Excluded(10))?;
    /// assert_eq!(r.lower(), Some(&1));
    /// assert!(Range::new(Included(10), Included(1)).is_err());
    /// assert!(Range::<i32>::new(Unbounded, Excluded(0))?.contains(&-5));
    /// # Ok::<(), pg_ranges::RangeError<i32>>(())
    /// ```
    pub fn new(lower: Bound<T>, upper: Bound<T>) -> Result<Self, RangeError<T>> {
        Self::from_bounds(
            RangeBound::from_lower(lower),
            RangeBound::from_upper(upper),
        )
    }

    fn from_bounds(
        lower: RangeBound<T>,
        upper: RangeBound<T>,
    ) -> Result<Self, RangeError<T>> {
        if let (Some(lv), Some(uv)) = (&lower.value, &upper.value) {
            match lv.compare(uv) {
                Ordering::Greater => {
                    return Err(RangeError::BoundOrder {
                        lower: lv.clone(),
                        upper: uv.clone(),
                    })
                }
                Ordering::Equal if !(lower.inclusive && upper.inclusive) => {
                    return Ok(Self::empty())
                }
                _ => {}
            }
        }
        Ok(Self::span(lower, upper))
    }

    /// Canonicalize both bounds and collapse spans that contain no value.
    /// The bound order must already have been checked.
    fn span(lower: RangeBound<T>, upper: RangeBound<T>) -> Self {
        let lower = lower.canonicalize();
        let upper = upper.canonicalize();
        if let (Some(lv), Some(uv)) = (&lower.value, &upper.value) {
            // (n, n+1) on a discrete domain arrives here as [n+1, n+1).
            if lv.compare(uv) == Ordering::Equal
                && !(lower.inclusive && upper.inclusive)
            {
                return Self::empty();
            }
        }
        Range {
            inner: Inner::Span { lower, upper },
        }
    }

    /// Construct a left-closed, right-open range (`[A,B)`).
    pub fn new_closed_open(lower: T, upper: T) -> Result<Self, RangeError<T>> {
        Self::new(Bound::Included(lower), Bound::Excluded(upper))
    }

    /// Construct a left-closed, right-closed range (`[A,B]`).
    pub fn new_closed_closed(lower: T, upper: T) -> Result<Self, RangeError<T>> {
        Self::new(Bound::Included(lower), Bound::Included(upper))
    }

    /// Construct a left-open, right-open range (`(A,B)`).
    pub fn new_open_open(lower: T, upper: T) -> Result<Self, RangeError<T>> {
        Self::new(Bound::Excluded(lower), Bound::Excluded(upper))
    }

    /// Construct a left-open, right-closed range (`(A,B]`).
    pub fn new_open_closed(lower: T, upper: T) -> Result<Self, RangeError<T>> {
        Self::new(Bound::Excluded(lower), Bound::Included(upper))
    }

    /// Construct a left-unbounded, right-closed range (`(,B]`).
    pub fn new_unbounded_closed(upper: T) -> Self {
        Self::span(
            RangeBound::lower(None, true),
            RangeBound::upper(Some(upper), true),
        )
    }

    /// Construct a left-unbounded, right-open range (`(,B)`).
    pub fn new_unbounded_open(upper: T) -> Self {
        Self::span(
            RangeBound::lower(None, true),
            RangeBound::upper(Some(upper), false),
        )
    }

    /// Construct a left-closed, right-unbounded range (`[A,)`).
    pub fn new_closed_unbounded(lower: T) -> Self {
        Self::span(
            RangeBound::lower(Some(lower), true),
            RangeBound::upper(None, false),
        )
    }

    /// Construct a left-open, right-unbounded range (`(A,)`).
    pub fn new_open_unbounded(lower: T) -> Self {
        Self::span(
            RangeBound::lower(Some(lower), false),
            RangeBound::upper(None, false),
        )
    }

    /// The range that contains every value of the domain (`(,)`).
    pub fn doubly_unbounded() -> Self {
        Self::span(RangeBound::lower(None, true), RangeBound::upper(None, false))
    }

    /// The range that contains exactly one value (`[A,A]`).
    pub fn new_single(value: T) -> Self {
        Self::span(
            RangeBound::lower(Some(value.clone()), true),
            RangeBound::upper(Some(value), true),
        )
    }

    /// The canonical empty range.
    pub fn empty() -> Self {
        Range { inner: Inner::Empty }
    }

    pub(crate) fn span_bounds(
        &self,
    ) -> Option<(&RangeBound<T>, &RangeBound<T>)> {
        match &self.inner {
            Inner::Empty => None,
            Inner::Span { lower, upper } => Some((lower, upper)),
        }
    }

    /// True if the range contains no value.
    pub fn is_empty(&self) -> bool {
        matches!(self.inner, Inner::Empty)
    }

    /// True if the range contains exactly one value.
    pub fn is_single(&self) -> bool {
        match &self.inner {
            Inner::Empty => false,
            Inner::Span { lower, upper } => {
                match (&lower.value, &upper.value) {
                    (Some(lv), Some(uv)) => {
                        (lower.inclusive
                            && upper.inclusive
                            && lv.compare(uv) == Ordering::Equal)
                            || (lower.inclusive
                                && !upper.inclusive
                                && lv.consecutive(uv))
                    }
                    _ => false,
                }
            }
        }
    }

    /// The lower bound value.  `None` when the range is empty or the lower
    /// side is unbound.
    pub fn lower(&self) -> Option<&T> {
        self.span_bounds().and_then(|(lower, _)| lower.value.as_ref())
    }

    /// The upper bound value.  `None` when the range is empty or the upper
    /// side is unbound.
    pub fn upper(&self) -> Option<&T> {
        self.span_bounds().and_then(|(_, upper)| upper.value.as_ref())
    }

    /// Whether the lower bound value is part of the range.  False for an
    /// empty range or an unbound lower side.
    pub fn lower_inclusive(&self) -> bool {
        match self.span_bounds() {
            Some((lower, _)) => lower.value.is_some() && lower.inclusive,
            None => false,
        }
    }

    /// Whether the upper bound value is part of the range.  False for an
    /// empty range or an unbound upper side.
    pub fn upper_inclusive(&self) -> bool {
        match self.span_bounds() {
            Some((_, upper)) => upper.value.is_some() && upper.inclusive,
            None => false,
        }
    }

    /// True if the lower side is unbound.  False for an empty range.
    pub fn lower_unbounded(&self) -> bool {
        match self.span_bounds() {
            Some((lower, _)) => lower.value.is_none(),
            None => false,
        }
    }

    /// True if the upper side is unbound.  False for an empty range.
    pub fn upper_unbounded(&self) -> bool {
        match self.span_bounds() {
            Some((_, upper)) => upper.value.is_none(),
            None => false,
        }
    }

    /// Whether the value is contained in the range.
    pub fn contains(&self, value: &T) -> bool {
        match &self.inner {
            Inner::Empty => false,
            Inner::Span { lower, upper } => {
                lower.admits(value) && upper.admits(value)
            }
        }
    }

    /// Whether the range contains every value of `other` (and possibly
    /// more).  The empty range is contained in everything, including
    /// itself, and contains nothing else.
    pub fn contains_range(&self, other: &Self) -> bool {
        let (sl, su) = match other.span_bounds() {
            None => return true,
            Some(bounds) => bounds,
        };
        let (fl, fu) = match self.span_bounds() {
            None => return false,
            Some(bounds) => bounds,
        };
        fl.compare(sl) != Ordering::Greater
            && fu.compare(su) != Ordering::Less
    }

    /// Whether the two ranges have at least one value in common.  False
    /// when either is empty.
    pub fn overlaps(&self, other: &Self) -> bool {
        match (self.span_bounds(), other.span_bounds()) {
            (Some((fl, fu)), Some((sl, su))) => {
                fl.compare(su) != Ordering::Greater
                    && sl.compare(fu) != Ordering::Greater
            }
            _ => false,
        }
    }

    /// Whether every value in `self` is strictly less than every value in
    /// `other`.  False when either is empty.
    /// ```txt
    ///    [--self--)
    ///                [--other--)
    /// ```
    pub fn strictly_left_of(&self, other: &Self) -> bool {
        match (self.span_bounds(), other.span_bounds()) {
            (Some((_, fu)), Some((sl, _))) => {
                fu.compare(sl) == Ordering::Less
            }
            _ => false,
        }
    }

    /// Whether every value in `self` is strictly greater than every value
    /// in `other`.  False when either is empty.
    pub fn strictly_right_of(&self, other: &Self) -> bool {
        other.strictly_left_of(self)
    }

    /// Whether `self` extends no further right than `other`, i.e. its
    /// upper bound is at or below the other's upper bound.  False when
    /// either is empty.
    pub fn does_not_extend_right_of(&self, other: &Self) -> bool {
        match (self.span_bounds(), other.span_bounds()) {
            (Some((_, fu)), Some((_, su))) => {
                fu.compare(su) != Ordering::Greater
            }
            _ => false,
        }
    }

    /// Whether `self` extends no further left than `other`, i.e. its lower
    /// bound is at or above the other's lower bound.  False when either is
    /// empty.
    pub fn does_not_extend_left_of(&self, other: &Self) -> bool {
        match (self.span_bounds(), other.span_bounds()) {
            (Some((fl, _)), Some((sl, _))) => {
                fl.compare(sl) != Ordering::Less
            }
            _ => false,
        }
    }

    /// Whether the two ranges touch without overlapping: one range's upper
    /// bound and the other's lower bound sit at the same value, with
    /// exactly one of the two including it.
    /// ```txt
    ///    [--self--)[--other--)
    /// ```
    pub fn adjacent_to(&self, other: &Self) -> bool {
        match (self.span_bounds(), other.span_bounds()) {
            (Some((fl, fu)), Some((sl, su))) => {
                fu.adjacent_to(sl) || su.adjacent_to(fl)
            }
            _ => false,
        }
    }

    /// The union of two contiguous ranges.  Fails with
    /// [`RangeError::NotContiguous`] when the ranges neither overlap nor
    /// are adjacent, since the result could not be a single range.
    ///
    /// ```
    /// use pg_ranges::Range;
    ///
    /// let a = Range::new_closed_open(0, 10)?;
    /// let b = Range::new_closed_open(10, 20)?;
    /// assert_eq!(a.union(&b)?, Range::new_closed_open(0, 20)?);
    /// assert!(a.union(&Range::new_closed_open(12, 20)?).is_err());
    /// # Ok::<(), pg_ranges::RangeError<i32>>(())
    /// ```
    pub fn union(&self, other: &Self) -> Result<Self, RangeError<T>> {
        if self.is_empty() {
            return Ok(other.clone());
        }
        if other.is_empty() {
            return Ok(self.clone());
        }
        if !(self.overlaps(other) || self.adjacent_to(other)) {
            return Err(RangeError::NotContiguous {
                first: self.clone(),
                second: other.clone(),
            });
        }
        Ok(self.merge(other))
    }

    /// The intersection of two ranges: empty when they do not overlap,
    /// otherwise the innermost pair of bounds.
    pub fn intersection(&self, other: &Self) -> Self {
        match (self.span_bounds(), other.span_bounds()) {
            (Some((fl, fu)), Some((sl, su))) if self.overlaps(other) => {
                Range {
                    inner: Inner::Span {
                        lower: fl.max(sl).clone(),
                        upper: fu.min(su).clone(),
                    },
                }
            }
            _ => Self::empty(),
        }
    }

    /// Remove the values of `other` from `self`, when a single range can
    /// express the result.  Fails with [`RangeError::DisjointRanges`],
    /// carrying both remaining fragments, when `other` is strictly
    /// interior to `self`.
    ///
    /// ```
    /// use pg_ranges::{Range, RangeError};
    ///
    /// let a = Range::new_closed_open(1, 10)?;
    /// assert_eq!(
    ///     a.difference(&Range::new_closed_open(5, 15)?)?,
    ///     Range::new_closed_open(1, 5)?,
    /// );
    /// assert_eq!(
    ///     a.difference(&Range::new_closed_open(2, 8)?),
    ///     Err(RangeError::DisjointRanges {
    ///         lower: Range::new_closed_open(1, 2)?,
    ///         upper: Range::new_closed_open(8, 10)?,
    ///     }),
    /// );
    /// # Ok::<(), pg_ranges::RangeError<i32>>(())
    /// ```
    pub fn difference(&self, other: &Self) -> Result<Self, RangeError<T>> {
        match self.subtract(other) {
            (lower, Some(upper)) => {
                Err(RangeError::DisjointRanges { lower, upper })
            }
            (rest, None) => Ok(rest),
        }
    }

    /// Total form of the difference: the second fragment is returned
    /// alongside the first when the subtrahend splits the range in two.
    pub(crate) fn subtract(&self, other: &Self) -> (Self, Option<Self>) {
        let ((fl, fu), (sl, su)) =
            match (self.span_bounds(), other.span_bounds()) {
                (None, _) => return (Self::empty(), None),
                (_, None) => return (self.clone(), None),
                (Some(f), Some(s)) => (f, s),
            };
        let c_ll = fl.compare(sl);
        let c_lu = fl.compare(su);
        let c_ul = fu.compare(sl);
        let c_uu = fu.compare(su);

        // other is strictly interior: two fragments remain.
        if c_ll == Ordering::Less && c_uu == Ordering::Greater {
            return (
                Range {
                    inner: Inner::Span {
                        lower: fl.clone(),
                        upper: sl.complement(),
                    },
                },
                Some(Range {
                    inner: Inner::Span {
                        lower: su.complement(),
                        upper: fu.clone(),
                    },
                }),
            );
        }
        // Disjoint: nothing to remove.
        if c_lu == Ordering::Greater || c_ul == Ordering::Less {
            return (self.clone(), None);
        }
        // other covers self entirely.
        if c_ll != Ordering::Less && c_uu != Ordering::Greater {
            return (Self::empty(), None);
        }
        // other clips the right end of self.
        if c_ll != Ordering::Greater
            && c_ul != Ordering::Less
            && c_uu != Ordering::Greater
        {
            return (
                Range {
                    inner: Inner::Span {
                        lower: fl.clone(),
                        upper: sl.complement(),
                    },
                },
                None,
            );
        }
        // other clips the left end of self.
        (
            Range {
                inner: Inner::Span {
                    lower: su.complement(),
                    upper: fu.clone(),
                },
            },
            None,
        )
    }

    /// The smallest range covering both ranges, even when they are
    /// disjoint.  This never fails, unlike [`Range::union`].
    /// ```txt
    ///    [--self--)      [--other--)
    ///    [---------merge-----------)
    /// ```
    pub fn merge(&self, other: &Self) -> Self {
        match (self.span_bounds(), other.span_bounds()) {
            (None, _) => other.clone(),
            (_, None) => self.clone(),
            (Some((fl, fu)), Some((sl, su))) => Range {
                inner: Inner::Span {
                    lower: fl.min(sl).clone(),
                    upper: fu.max(su).clone(),
                },
            },
        }
    }

    /// Total order on ranges: lower bounds first, then upper bounds.  The
    /// empty range sorts after every specified range.  This is the order
    /// [`Ord`] exposes and the one multiranges are normalized by.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self.span_bounds(), other.span_bounds()) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some((fl, fu)), Some((sl, su))) => {
                fl.compare(sl).then_with(|| fu.compare(su))
            }
        }
    }

    /// Iterate over the elements of a discrete range, from the lower bound
    /// upward.  The iterator is endless when the upper side is unbound.
    ///
    /// Fails with [`RangeError::Unsupported`] for an indiscrete element
    /// type (there is no next value after a float) and for a range with an
    /// unbound lower side (there is no first value to start from).
    ///
    /// ```
    /// use pg_ranges::Range;
    ///
    /// let r = Range::new_closed_closed(1, 3)?;
    /// assert_eq!(r.iter()?.collect::<Vec<_>>(), vec![1, 2, 3]);
    /// assert!(Range::new_closed_closed(1.0, 3.0).unwrap().iter().is_err());
    /// # Ok::<(), pg_ranges::RangeError<i32>>(())
    /// ```
    pub fn iter(&self) -> Result<Iter<'_, T>, RangeError<T>> {
        if !T::DISCRETE {
            return Err(RangeError::Unsupported {
                operation: "iterate over the range",
                reason: "the element type has no successor",
            });
        }
        let next = match &self.inner {
            Inner::Empty => None,
            Inner::Span { lower, .. } => match &lower.value {
                None => {
                    return Err(RangeError::Unsupported {
                        operation: "iterate over the range",
                        reason: "the lower bound is unbounded",
                    })
                }
                Some(value) => {
                    Some(value.clone()).filter(|v| self.contains(v))
                }
            },
        };
        Ok(Iter { range: self, next })
    }
}

impl<T: Element> Default for Range<T> {
    /// Returns the empty range.
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Element> PartialEq for Range<T> {
    /// True if the two ranges contain the same values.  Canonicalization
    /// makes this structural: `(1, 9]` and `[2, 10)` over integers are the
    /// same range.
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl<T: Element> Eq for Range<T> {}

impl<T: Element> PartialOrd for Range<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl<T: Element> Ord for Range<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

/// Iterator over the elements of a discrete range; see [`Range::iter`].
pub struct Iter<'a, T> {
    range: &'a Range<T>,
    next: Option<T>,
}

impl<T: Element> Iterator for Iter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let current = self.next.take()?;
        self.next = current
            .successor()
            .filter(|next| self.range.contains(next));
        Some(current)
    }
}

impl<T: Element> fmt::Display for Range<T> {
    /// PostgreSQL text form: `[1,10)`, `(,5]`, `(,)`, `empty`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Inner::Empty => write!(f, "empty"),
            Inner::Span { lower, upper } => {
                match (&lower.value, lower.inclusive) {
                    (None, _) => write!(f, "(")?,
                    (Some(value), true) => write!(f, "[{}", value)?,
                    (Some(value), false) => write!(f, "({}", value)?,
                }
                write!(f, ",")?;
                match (&upper.value, upper.inclusive) {
                    (None, _) => write!(f, ")"),
                    (Some(value), true) => write!(f, "{}]", value),
                    (Some(value), false) => write!(f, "{})", value),
                }
            }
        }
    }
}

impl<T: Element> fmt::Debug for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

///  &Range & &Range
impl<T: Element> ops::BitAnd<&Range<T>> for &Range<T> {
    type Output = Range<T>;

    /// Same as [`Range::intersection`].
    fn bitand(self, rhs: &Range<T>) -> Range<T> {
        self.intersection(rhs)
    }
}

///  &Range & Range
impl<T: Element> ops::BitAnd<Range<T>> for &Range<T> {
    type Output = Range<T>;

    fn bitand(self, rhs: Range<T>) -> Range<T> {
        self.intersection(&rhs)
    }
}

///  Range & &Range
impl<T: Element> ops::BitAnd<&Range<T>> for Range<T> {
    type Output = Range<T>;

    fn bitand(self, rhs: &Range<T>) -> Range<T> {
        self.intersection(rhs)
    }
}

///  Range & Range
impl<T: Element> ops::BitAnd<Range<T>> for Range<T> {
    type Output = Range<T>;

    fn bitand(self, rhs: Range<T>) -> Range<T> {
        self.intersection(&rhs)
    }
}

///  &Range | &Range
impl<T: Element> ops::BitOr<&Range<T>> for &Range<T> {
    type Output = Range<T>;

    /// Same as [`Range::union`], but panics when the ranges are not
    /// contiguous.
    fn bitor(self, rhs: &Range<T>) -> Range<T> {
        match self.union(rhs) {
            Ok(range) => range,
            Err(error) => panic!("{}", error),
        }
    }
}

///  &Range | Range
impl<T: Element> ops::BitOr<Range<T>> for &Range<T> {
    type Output = Range<T>;

    fn bitor(self, rhs: Range<T>) -> Range<T> {
        self | &rhs
    }
}

///  Range | &Range
impl<T: Element> ops::BitOr<&Range<T>> for Range<T> {
    type Output = Range<T>;

    fn bitor(self, rhs: &Range<T>) -> Range<T> {
        &self | rhs
    }
}

///  Range | Range
impl<T: Element> ops::BitOr<Range<T>> for Range<T> {
    type Output = Range<T>;

    fn bitor(self, rhs: Range<T>) -> Range<T> {
        &self | &rhs
    }
}

///  &Range - &Range
impl<T: Element> ops::Sub<&Range<T>> for &Range<T> {
    type Output = Range<T>;

    /// Same as [`Range::difference`], but panics when the result would be
    /// two disjoint ranges.
    fn sub(self, rhs: &Range<T>) -> Range<T> {
        match self.difference(rhs) {
            Ok(range) => range,
            Err(error) => panic!("{}", error),
        }
    }
}

///  &Range - Range
impl<T: Element> ops::Sub<Range<T>> for &Range<T> {
    type Output = Range<T>;

    fn sub(self, rhs: Range<T>) -> Range<T> {
        self - &rhs
    }
}

///  Range - &Range
impl<T: Element> ops::Sub<&Range<T>> for Range<T> {
    type Output = Range<T>;

    fn sub(self, rhs: &Range<T>) -> Range<T> {
        &self - rhs
    }
}

///  Range - Range
impl<T: Element> ops::Sub<Range<T>> for Range<T> {
    type Output = Range<T>;

    fn sub(self, rhs: Range<T>) -> Range<T> {
        &self - &rhs
    }
}
