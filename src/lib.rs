//! This crate provides ranges and multiranges over totally-ordered
//! element types, with the same algebra and the same semantics as
//! PostgreSQL's range and multirange types.
//!
//! A [`Range`] is a possibly-empty interval whose sides are a value
//! (inclusive or exclusive) or unbound.  Over a discrete element domain
//! (integers, dates) every range is rewritten into the canonical
//! closed-open form, so `(1, 9]` and `[2, 10)` are the same value.  A
//! [`Multirange`] is the normal form of a set of ranges: sorted, disjoint,
//! non-adjacent and free of empties.
//!
//! Given two ranges, we can compute the following:
//!
//! ```text
//!        [------ A ------)
//!               [------ B ------)
//!
//!        [----------------------)     merge (also A | B here)
//!               [--------)            intersection (A & B)
//!        [------)                     difference (A - B)
//! ```
//!
//! When the two ranges do not touch, the union and the single-range
//! difference no longer exist, and the errors say which values got in the
//! way:
//!
//! ```text
//!      [---A---)      [---B---)
//!
//!      [----------------------)    merge
//!                                  A | B panics, A.union(&B) is
//!                                  NotContiguous
//!      [---A---)      [---B---)    Multirange::new([A, B]) keeps both
//! ```
//!
//! Element support is provided through the [`Element`] trait: integers
//! and [`chrono::NaiveDate`] are discrete (they expose a successor);
//! floats, [`rust_decimal::Decimal`] and the remaining chrono types are
//! indiscrete and keep their bounds exactly as given.
//!
//! The [`wire`] module is the boundary towards a database driver: a wire
//! representation of ranges plus `cast`/`dump`/`load` conversions.  The
//! [`sql`] module builds PostgreSQL range expressions as plain SQL text.

mod bounds;
mod element;
mod errors;
mod multiranges;
mod ranges;
pub mod sql;
pub mod wire;

pub use crate::element::Element;
pub use crate::errors::RangeError;
pub use crate::multiranges::Multirange;
pub use crate::ranges::{Iter, Range};
