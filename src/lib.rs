//! This crate provides [`Interval`], a generic mathematical interval over
//! any [`Ord`] type, along with a canonical string notation it can be both
//! rendered to and parsed from.
//!
//! ## Example
//!
//! ```rust
//! use infinitive::Interval;
//!
//! let interval = Interval::closed_open(5, 50).unwrap();
//!
//! assert_eq!(interval.contains(&5), true);
//! assert_eq!(interval.contains(&50), false);
//! assert_eq!(interval.to_string(), "[5, 50)");
//!
//! let parsed: Interval<i32> = "[5, 50)".parse().unwrap();
//! assert_eq!(parsed, interval);
//! ```
//!
//! ## Key Understandings and Philosophies:
//!
//! ### Bounds
//!
//! Each end of an [`Interval`] is a [`Bound`], either a finite point or one
//! of two infinities. Infinities are their own variants rather than a
//! chosen sentinel value so every value of the underlying type, `i32::MIN`
//! and `i32::MAX` included, remains usable as a finite point.
//!
//! ### Inclusivity
//!
//! Whether each bound is itself contained is decided by the interval's
//! [`Inclusivity`], giving the four classic kinds of interval:
//!
//! | constructor                  | notation | contains `a` | contains `b` |
//! | ---------------------------- | -------- | ------------ | ------------ |
//! | [`Interval::closed()`]       | `[a, b]` | YES          | YES          |
//! | [`Interval::open()`]         | `(a, b)` | NO           | NO           |
//! | [`Interval::closed_open()`]  | `[a, b)` | YES          | NO           |
//! | [`Interval::open_closed()`]  | `(a, b]` | NO           | YES          |
//!
//! plus the one-sided [`Interval::less_than()`], [`Interval::greater_than()`],
//! [`Interval::at_least()`], [`Interval::at_most()`] and the everything
//! interval [`Interval::all()`].
//!
//! ### Invalid Intervals
//!
//! An interval whose lower bound is greater than its upper bound cannot be
//! constructed, the constructors return an [`InvalidBoundsError`] instead.
//! Intervals with equal bounds such as `[4, 4]` or `(4, 4)` are allowed,
//! the first contains a single point and the second contains nothing.
//!
//! ### Notation
//!
//! Intervals render as `<open><lower>, <upper><close>` where either bound
//! may be the literal `Infinitive`, for example `[1, 10]`,
//! `(5, Infinitive)` or `[2016-09-11, 2017-06-30]`. The same notation is
//! accepted by [`Interval::parse_with()`] and [`str::parse()`].
//!
//! ### Features
//!
//! - `serde`: implements `Serialize` and `Deserialize` for [`Interval`]
//!   using its notation, and for the [`query`] types.
//!
//! ### Further Reading
//!
//! See Wikipedia's article on mathematical Intervals:
//! <https://en.wikipedia.org/wiki/Interval_(mathematics)>

#![cfg_attr(not(test), no_std)]
#![allow(clippy::tabs_in_doc_comments)]
#![allow(clippy::bool_assert_comparison)]

extern crate alloc;

pub mod bound;
pub mod inclusivity;
pub mod interval;
pub mod parse;
pub mod query;

#[cfg(feature = "serde")]
mod serde;

#[cfg(test)]
pub(crate) mod test_intervals;

pub use crate::bound::{Bound, INFINITIVE};
pub use crate::inclusivity::Inclusivity;
pub use crate::interval::{Interval, InvalidBoundsError};
pub use crate::parse::{MalformedRangeError, ParseIntervalError};
