use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use rust_decimal::Decimal;

/// An ordered element domain over which ranges can be built.
///
/// The trait supplies the two facts a range needs to know about its
/// elements: how they order, and whether the domain is discrete.  A
/// discrete domain exposes a successor; ranges over it are rewritten into
/// the canonical closed-open form (`(1, 3]` becomes `[2, 4)` for integers).
/// An indiscrete domain has no successor and ranges over it keep their
/// bounds as given.
pub trait Element: Clone + fmt::Debug + fmt::Display {
    /// Whether the domain has a successor operation at all.
    const DISCRETE: bool;

    /// Total order on the domain.
    fn compare(&self, other: &Self) -> Ordering;

    /// The smallest value strictly greater than `self`.  Returns `None`
    /// on indiscrete domains, and at the maximum of a discrete domain.
    fn successor(&self) -> Option<Self>;

    /// True iff `other` is exactly the successor of `self`.  Always false
    /// on indiscrete domains.
    fn consecutive(&self, other: &Self) -> bool {
        match self.successor() {
            Some(next) => next.compare(other) == Ordering::Equal,
            None => false,
        }
    }
}

impl Element for i32 {
    const DISCRETE: bool = true;

    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    fn successor(&self) -> Option<Self> {
        self.checked_add(1)
    }
}

impl Element for i64 {
    const DISCRETE: bool = true;

    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    fn successor(&self) -> Option<Self> {
        self.checked_add(1)
    }
}

impl Element for NaiveDate {
    const DISCRETE: bool = true;

    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    fn successor(&self) -> Option<Self> {
        self.succ_opt()
    }
}

impl Element for f32 {
    const DISCRETE: bool = false;

    // In the world of reals there is always something in-between, even
    // when the machine cannot represent it, so floats are indiscrete.
    // total_cmp gives NaN a defined position instead of poisoning the
    // order.
    fn compare(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }

    fn successor(&self) -> Option<Self> {
        None
    }
}

impl Element for f64 {
    const DISCRETE: bool = false;

    fn compare(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }

    fn successor(&self) -> Option<Self> {
        None
    }
}

impl Element for Decimal {
    const DISCRETE: bool = false;

    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    fn successor(&self) -> Option<Self> {
        None
    }
}

impl Element for NaiveDateTime {
    const DISCRETE: bool = false;

    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    fn successor(&self) -> Option<Self> {
        None
    }
}

impl Element for NaiveTime {
    const DISCRETE: bool = false;

    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    fn successor(&self) -> Option<Self> {
        None
    }
}

impl<Tz: TimeZone> Element for DateTime<Tz>
where
    Tz::Offset: fmt::Display,
{
    const DISCRETE: bool = false;

    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    fn successor(&self) -> Option<Self> {
        None
    }
}
