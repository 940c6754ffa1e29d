use std::cmp::Ordering;
use std::ops::Bound;

use crate::element::Element;

/// Which side of a range a bound belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Lower,
    Upper,
}

/// One side of a specified range: a value (or unbound), an inclusivity
/// flag, and the side it sits on.  Every comparison a range operation
/// performs goes through [`RangeBound::compare`], which is the single
/// place where the geometry of bounds at equal values is decided.
#[derive(Clone, Debug)]
pub(crate) struct RangeBound<T> {
    pub(crate) value: Option<T>,
    pub(crate) inclusive: bool,
    pub(crate) side: Side,
}

impl<T: Element> RangeBound<T> {
    pub(crate) fn lower(value: Option<T>, inclusive: bool) -> Self {
        RangeBound {
            value,
            inclusive,
            side: Side::Lower,
        }
    }

    pub(crate) fn upper(value: Option<T>, inclusive: bool) -> Self {
        RangeBound {
            value,
            inclusive,
            side: Side::Upper,
        }
    }

    pub(crate) fn from_lower(bound: Bound<T>) -> Self {
        match bound {
            Bound::Included(value) => RangeBound::lower(Some(value), true),
            Bound::Excluded(value) => RangeBound::lower(Some(value), false),
            Bound::Unbounded => RangeBound::lower(None, true),
        }
    }

    pub(crate) fn from_upper(bound: Bound<T>) -> Self {
        match bound {
            Bound::Included(value) => RangeBound::upper(Some(value), true),
            Bound::Excluded(value) => RangeBound::upper(Some(value), false),
            Bound::Unbounded => RangeBound::upper(None, false),
        }
    }

    /// Where the bound sits relative to its own value: an exclusive upper
    /// excludes its point from below, an exclusive lower from above, and
    /// an inclusive bound of either side sits exactly at it.
    fn offset(&self) -> i8 {
        match (self.inclusive, self.side) {
            (true, _) => 0,
            (false, Side::Lower) => 1,
            (false, Side::Upper) => -1,
        }
    }

    /// Total order over bounds of either side.
    ///
    /// An unbound lower is less than everything and an unbound upper
    /// greater than everything; two unbounds on the same side are equal.
    /// Otherwise the values decide, and at equal values the inclusivity
    /// offsets break the tie.
    pub(crate) fn compare(&self, other: &Self) -> Ordering {
        match (&self.value, &other.value) {
            (None, None) => match (self.side, other.side) {
                (Side::Lower, Side::Upper) => Ordering::Less,
                (Side::Upper, Side::Lower) => Ordering::Greater,
                _ => Ordering::Equal,
            },
            (None, Some(_)) => match self.side {
                Side::Lower => Ordering::Less,
                Side::Upper => Ordering::Greater,
            },
            (Some(_), None) => match other.side {
                Side::Lower => Ordering::Greater,
                Side::Upper => Ordering::Less,
            },
            (Some(a), Some(b)) => a
                .compare(b)
                .then_with(|| self.offset().cmp(&other.offset())),
        }
    }

    pub(crate) fn min<'a>(&'a self, other: &'a Self) -> &'a Self {
        if self.compare(other) == Ordering::Greater {
            other
        } else {
            self
        }
    }

    pub(crate) fn max<'a>(&'a self, other: &'a Self) -> &'a Self {
        if self.compare(other) == Ordering::Less {
            other
        } else {
            self
        }
    }

    /// Canonical form: on a discrete domain an exclusive lower and an
    /// inclusive upper are rewritten through the successor, so that every
    /// stored range is closed-open.  Unbound sides get the conventional
    /// flag for their side.  When the successor does not exist (domain
    /// maximum) the bound is kept as provided.
    pub(crate) fn canonicalize(self) -> Self {
        match (&self.value, self.side, self.inclusive) {
            (None, Side::Lower, _) => RangeBound::lower(None, true),
            (None, Side::Upper, _) => RangeBound::upper(None, false),
            (Some(value), Side::Lower, false) => match value.successor() {
                Some(next) => RangeBound::lower(Some(next), true),
                None => self,
            },
            (Some(value), Side::Upper, true) => match value.successor() {
                Some(next) => RangeBound::upper(Some(next), false),
                None => self,
            },
            _ => self,
        }
    }

    /// Whether a value satisfies the constraint this bound imposes.
    pub(crate) fn admits(&self, value: &T) -> bool {
        match &self.value {
            None => true,
            Some(bound) => {
                let cmp = match self.side {
                    Side::Lower => bound.compare(value),
                    Side::Upper => value.compare(bound),
                };
                cmp == Ordering::Less
                    || (self.inclusive && cmp == Ordering::Equal)
            }
        }
    }

    /// The same point seen from the other side, with inclusivity flipped:
    /// the lower bound of `S` becomes the upper bound of everything before
    /// `S`, and symmetrically.
    pub(crate) fn complement(&self) -> Self {
        let side = match self.side {
            Side::Lower => Side::Upper,
            Side::Upper => Side::Lower,
        };
        RangeBound {
            value: self.value.clone(),
            inclusive: !self.inclusive,
            side,
        }
    }

    /// Adjacency of an upper bound (`self`) with a lower bound: both sit
    /// at the same value and exactly one of the two includes it.  Unbound
    /// bounds are never adjacent.
    pub(crate) fn adjacent_to(&self, lower: &Self) -> bool {
        match (&self.value, &lower.value) {
            (Some(a), Some(b)) => {
                a.compare(b) == Ordering::Equal
                    && self.inclusive != lower.inclusive
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn lo(value: i32, inclusive: bool) -> RangeBound<i32> {
        RangeBound::lower(Some(value), inclusive)
    }

    fn up(value: i32, inclusive: bool) -> RangeBound<i32> {
        RangeBound::upper(Some(value), inclusive)
    }

    #[test]
    fn test_compare_same_side() {
        // Lower bounds.
        assert_eq!(lo(1, true).compare(&lo(2, false)), Ordering::Less);
        assert_eq!(lo(1, false).compare(&lo(2, true)), Ordering::Less);
        assert_eq!(lo(2, true).compare(&lo(1, true)), Ordering::Greater);
        assert_eq!(lo(1, true).compare(&lo(1, true)), Ordering::Equal);
        assert_eq!(lo(1, false).compare(&lo(1, false)), Ordering::Equal);
        // An inclusive lower extends further left than an exclusive one.
        assert_eq!(lo(1, true).compare(&lo(1, false)), Ordering::Less);
        assert_eq!(lo(1, false).compare(&lo(1, true)), Ordering::Greater);

        // Upper bounds: an inclusive upper extends further right.
        assert_eq!(up(1, false).compare(&up(1, true)), Ordering::Less);
        assert_eq!(up(1, true).compare(&up(1, false)), Ordering::Greater);
        assert_eq!(up(1, true).compare(&up(1, true)), Ordering::Equal);
        assert_eq!(up(1, false).compare(&up(1, false)), Ordering::Equal);
        assert_eq!(up(1, true).compare(&up(2, false)), Ordering::Less);
    }

    #[test]
    fn test_compare_cross_side() {
        // Both inclusive at the same value: they meet at the point.
        assert_eq!(lo(5, true).compare(&up(5, true)), Ordering::Equal);
        assert_eq!(up(5, true).compare(&lo(5, true)), Ordering::Equal);
        // Both exclusive: each excludes the point from inside its own
        // interval, so the lower side lands above the upper side.
        assert_eq!(lo(5, false).compare(&up(5, false)), Ordering::Greater);
        assert_eq!(up(5, false).compare(&lo(5, false)), Ordering::Less);
        // Mixed inclusivity.
        assert_eq!(up(5, false).compare(&lo(5, true)), Ordering::Less);
        assert_eq!(lo(5, true).compare(&up(5, false)), Ordering::Greater);
        assert_eq!(lo(5, false).compare(&up(5, true)), Ordering::Greater);
    }

    #[test]
    fn test_compare_unbounded() {
        let neg = RangeBound::<i32>::lower(None, true);
        let pos = RangeBound::<i32>::upper(None, false);
        assert_eq!(neg.compare(&neg), Ordering::Equal);
        assert_eq!(pos.compare(&pos), Ordering::Equal);
        assert_eq!(neg.compare(&pos), Ordering::Less);
        assert_eq!(pos.compare(&neg), Ordering::Greater);
        assert_eq!(neg.compare(&lo(i32::MIN, true)), Ordering::Less);
        assert_eq!(pos.compare(&up(i32::MAX, true)), Ordering::Greater);
        assert_eq!(lo(0, true).compare(&neg), Ordering::Greater);
        assert_eq!(up(0, true).compare(&pos), Ordering::Less);
    }

    #[test]
    fn test_canonicalize() {
        let b = lo(1, false).canonicalize();
        assert_eq!(b.value, Some(2));
        assert!(b.inclusive);

        let b = up(9, true).canonicalize();
        assert_eq!(b.value, Some(10));
        assert!(!b.inclusive);

        let b = lo(1, true).canonicalize();
        assert_eq!(b.value, Some(1));
        assert!(b.inclusive);

        // No successor at the maximum: the bound is kept.
        let b = up(i32::MAX, true).canonicalize();
        assert_eq!(b.value, Some(i32::MAX));
        assert!(b.inclusive);

        // Indiscrete domains are left alone.
        let b = RangeBound::upper(Some(1.5_f64), true).canonicalize();
        assert_eq!(b.value, Some(1.5));
        assert!(b.inclusive);
    }

    #[test]
    fn test_admits() {
        assert!(lo(1, true).admits(&1));
        assert!(!lo(1, false).admits(&1));
        assert!(lo(1, false).admits(&2));
        assert!(!lo(1, true).admits(&0));
        assert!(up(10, true).admits(&10));
        assert!(!up(10, false).admits(&10));
        assert!(up(10, false).admits(&9));
        assert!(RangeBound::<i32>::lower(None, true).admits(&i32::MIN));
        assert!(RangeBound::<i32>::upper(None, false).admits(&i32::MAX));
    }

    #[test]
    fn test_adjacent() {
        assert!(up(10, false).adjacent_to(&lo(10, true)));
        assert!(up(10, true).adjacent_to(&lo(10, false)));
        assert!(!up(10, true).adjacent_to(&lo(10, true)));
        assert!(!up(10, false).adjacent_to(&lo(10, false)));
        assert!(!up(10, false).adjacent_to(&lo(11, true)));
        let pos = RangeBound::<i32>::upper(None, false);
        assert!(!pos.adjacent_to(&lo(10, true)));
    }
}
