//! A module containing [`Interval`] and it's various constructor functions.

use core::fmt;
use core::ops::{
	Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive,
};

use thiserror::Error;

use crate::{Bound, Inclusivity};

/// The error returned when constructing an [`Interval`] whose lower bound
/// orders after its upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Lowerbound cannot be greater than upperbound")]
pub struct InvalidBoundsError;

/// An interval over any [`Ord`] type with a lower [`Bound`], an upper
/// [`Bound`] and an [`Inclusivity`] which decides if those bounds are
/// themselves contained.
///
/// An `Interval` can only be created through its constructor functions, or
/// by parsing, all of which guarantee that the lower bound is never greater
/// than the upper bound. Equal bounds are allowed in every mode, but only a
/// closed interval then contains anything.
///
/// # Examples
/// ```
/// use infinitive::Interval;
///
/// let interval = Interval::closed_open(5, 50).unwrap();
///
/// assert_eq!(interval.contains(&5), true);
/// assert_eq!(interval.contains(&50), false);
/// assert_eq!(interval.to_string(), "[5, 50)");
///
/// assert_eq!(Interval::less_than(50).to_string(), "(Infinitive, 50)");
/// assert!(Interval::closed(500, 1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval<T> {
	lower: Bound<T>,
	upper: Bound<T>,
	mode: Inclusivity,
}

impl<T> Interval<T>
where
	T: Ord,
{
	/// Makes a new interval from two arbitrary bounds.
	///
	/// # Errors
	///
	/// Returns [`InvalidBoundsError`] if `lower` is greater than `upper`.
	///
	/// # Examples
	/// ```
	/// use infinitive::{Bound, Inclusivity, Interval};
	///
	/// let interval =
	/// 	Interval::new(Bound::Finite(1), Bound::PositiveInfinity, Inclusivity::Start)
	/// 		.unwrap();
	/// assert_eq!(interval, Interval::at_least(1));
	///
	/// assert!(Interval::new(
	/// 	Bound::PositiveInfinity,
	/// 	Bound::Finite(1),
	/// 	Inclusivity::Both
	/// )
	/// .is_err());
	/// ```
	pub fn new(
		lower: Bound<T>,
		upper: Bound<T>,
		mode: Inclusivity,
	) -> Result<Self, InvalidBoundsError> {
		if lower > upper {
			return Err(InvalidBoundsError);
		}

		Ok(Interval { lower, upper, mode })
	}

	/// A closed interval, the same as [`Interval::closed()`].
	pub fn of(lower: T, upper: T) -> Result<Self, InvalidBoundsError> {
		Interval::closed(lower, upper)
	}

	/// A closed interval `[lower, upper]` which contains both bounds.
	pub fn closed(lower: T, upper: T) -> Result<Self, InvalidBoundsError> {
		Interval::new(Bound::Finite(lower), Bound::Finite(upper), Inclusivity::Both)
	}

	/// An open interval `(lower, upper)` which contains neither bound.
	pub fn open(lower: T, upper: T) -> Result<Self, InvalidBoundsError> {
		Interval::new(
			Bound::Finite(lower),
			Bound::Finite(upper),
			Inclusivity::Neither,
		)
	}

	/// A closed-open interval `[lower, upper)` which contains only the lower
	/// bound.
	pub fn closed_open(
		lower: T,
		upper: T,
	) -> Result<Self, InvalidBoundsError> {
		Interval::new(
			Bound::Finite(lower),
			Bound::Finite(upper),
			Inclusivity::Start,
		)
	}

	/// An open-closed interval `(lower, upper]` which contains only the upper
	/// bound.
	pub fn open_closed(
		lower: T,
		upper: T,
	) -> Result<Self, InvalidBoundsError> {
		Interval::new(Bound::Finite(lower), Bound::Finite(upper), Inclusivity::End)
	}

	/// Contains every point less than `upper`.
	pub fn less_than(upper: T) -> Self {
		Interval {
			lower: Bound::NegativeInfinity,
			upper: Bound::Finite(upper),
			mode: Inclusivity::Neither,
		}
	}

	/// Contains every point greater than `lower`.
	pub fn greater_than(lower: T) -> Self {
		Interval {
			lower: Bound::Finite(lower),
			upper: Bound::PositiveInfinity,
			mode: Inclusivity::Neither,
		}
	}

	/// Contains every point greater than or equal to `lower`.
	pub fn at_least(lower: T) -> Self {
		Interval {
			lower: Bound::Finite(lower),
			upper: Bound::PositiveInfinity,
			mode: Inclusivity::Start,
		}
	}

	/// Contains every point less than or equal to `upper`.
	pub fn at_most(upper: T) -> Self {
		Interval {
			lower: Bound::NegativeInfinity,
			upper: Bound::Finite(upper),
			mode: Inclusivity::End,
		}
	}

	/// Contains every point.
	pub fn all() -> Self {
		Interval {
			lower: Bound::NegativeInfinity,
			upper: Bound::PositiveInfinity,
			mode: Inclusivity::Both,
		}
	}

	/// Returns `true` if the given point is contained in the interval.
	///
	/// # Examples
	/// ```
	/// use infinitive::Interval;
	///
	/// let interval = Interval::open_closed(5, 50).unwrap();
	///
	/// assert_eq!(interval.contains(&5), false);
	/// assert_eq!(interval.contains(&42), true);
	/// assert_eq!(interval.contains(&50), true);
	///
	/// assert_eq!(Interval::all().contains(&i32::MIN), true);
	/// ```
	pub fn contains(&self, value: &T) -> bool {
		let value = Bound::Finite(value);
		let lower = self.lower.as_ref();
		let upper = self.upper.as_ref();

		match self.mode {
			Inclusivity::Neither => value > lower && value < upper,
			Inclusivity::Both => value >= lower && value <= upper,
			Inclusivity::End => value > lower && value <= upper,
			Inclusivity::Start => value >= lower && value < upper,
		}
	}
}

impl<T> Interval<T> {
	/// The lower bound.
	pub fn lower(&self) -> &Bound<T> {
		&self.lower
	}

	/// The upper bound.
	pub fn upper(&self) -> &Bound<T> {
		&self.upper
	}

	/// Which of the bounds are contained in the interval.
	pub fn mode(&self) -> Inclusivity {
		self.mode
	}

	/// Consumes the interval returning its lower bound, upper bound and
	/// mode.
	pub fn into_parts(self) -> (Bound<T>, Bound<T>, Inclusivity) {
		(self.lower, self.upper, self.mode)
	}
}

impl<T> fmt::Display for Interval<T>
where
	T: fmt::Display,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let (open, close) = self.mode.delimiters();
		write!(f, "{open}{}, {}{close}", self.lower, self.upper)
	}
}

impl<T> TryFrom<RangeInclusive<T>> for Interval<T>
where
	T: Ord,
{
	type Error = InvalidBoundsError;

	fn try_from(range: RangeInclusive<T>) -> Result<Self, Self::Error> {
		let (start, end) = range.into_inner();
		Interval::closed(start, end)
	}
}

impl<T> TryFrom<Range<T>> for Interval<T>
where
	T: Ord,
{
	type Error = InvalidBoundsError;

	fn try_from(range: Range<T>) -> Result<Self, Self::Error> {
		Interval::closed_open(range.start, range.end)
	}
}

impl<T> From<RangeFrom<T>> for Interval<T>
where
	T: Ord,
{
	fn from(range: RangeFrom<T>) -> Self {
		Interval::at_least(range.start)
	}
}

impl<T> From<RangeTo<T>> for Interval<T>
where
	T: Ord,
{
	fn from(range: RangeTo<T>) -> Self {
		Interval::less_than(range.end)
	}
}

impl<T> From<RangeToInclusive<T>> for Interval<T>
where
	T: Ord,
{
	fn from(range: RangeToInclusive<T>) -> Self {
		Interval::at_most(range.end)
	}
}

impl<T> From<RangeFull> for Interval<T>
where
	T: Ord,
{
	fn from(_: RangeFull) -> Self {
		Interval::all()
	}
}
