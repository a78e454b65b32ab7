//! A module containing [`Bound`], one edge of an [`Interval`].
//!
//! [`Interval`]: crate::Interval

use core::cmp::Ordering;
use core::fmt;

/// The literal token used to render, and parse, an infinite [`Bound`].
///
/// Note the spelling: it is `Infinitive`, not `Infinity`.
pub const INFINITIVE: &str = "Infinitive";

/// One edge of an [`Interval`], either a finite point or one of the two
/// infinities.
///
/// The ordering is total: [`Bound::NegativeInfinity`] is less than every
/// finite point which is less than [`Bound::PositiveInfinity`], and two
/// infinities of the same sign are equal.
///
/// # Examples
/// ```
/// use infinitive::Bound;
///
/// assert!(Bound::NegativeInfinity < Bound::Finite(i32::MIN));
/// assert!(Bound::Finite(4) < Bound::Finite(5));
/// assert!(Bound::Finite(i32::MAX) < Bound::PositiveInfinity);
///
/// assert_eq!(Bound::<i32>::PositiveInfinity.to_string(), "Infinitive");
/// assert_eq!(Bound::Finite(42).to_string(), "42");
/// ```
///
/// [`Interval`]: crate::Interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bound<T> {
	/// Below every finite point.
	NegativeInfinity,
	/// A finite point.
	Finite(T),
	/// Above every finite point.
	PositiveInfinity,
}

impl<T> Bound<T> {
	/// Makes a finite bound, equivalent to [`Bound::Finite`].
	pub fn finite(value: T) -> Self {
		Bound::Finite(value)
	}

	/// Returns the point of a finite bound, or `None` for either infinity.
	pub fn finite_value(&self) -> Option<&T> {
		match self {
			Bound::Finite(value) => Some(value),
			Bound::NegativeInfinity | Bound::PositiveInfinity => None,
		}
	}

	/// Consumes the bound returning its point, or `None` for either
	/// infinity.
	pub fn into_finite(self) -> Option<T> {
		match self {
			Bound::Finite(value) => Some(value),
			Bound::NegativeInfinity | Bound::PositiveInfinity => None,
		}
	}

	/// Returns `true` if the bound is a finite point.
	pub fn is_finite(&self) -> bool {
		matches!(self, Bound::Finite(_))
	}

	/// Returns `true` if the bound is either infinity.
	pub fn is_infinite(&self) -> bool {
		!self.is_finite()
	}

	/// Converts from `&Bound<T>` to `Bound<&T>`.
	pub fn as_ref(&self) -> Bound<&T> {
		match self {
			Bound::NegativeInfinity => Bound::NegativeInfinity,
			Bound::Finite(value) => Bound::Finite(value),
			Bound::PositiveInfinity => Bound::PositiveInfinity,
		}
	}
}

impl<T> Ord for Bound<T>
where
	T: Ord,
{
	#[rustfmt::skip]
	fn cmp(&self, other: &Self) -> Ordering {
		match (self, other) {
			(Bound::PositiveInfinity, Bound::PositiveInfinity) => Ordering::Equal,
			(Bound::PositiveInfinity, _) => Ordering::Greater,

			(Bound::NegativeInfinity, Bound::NegativeInfinity) => Ordering::Equal,
			(Bound::NegativeInfinity, _) => Ordering::Less,

			(Bound::Finite(_), Bound::PositiveInfinity) => Ordering::Less,
			(Bound::Finite(_), Bound::NegativeInfinity) => Ordering::Greater,

			(Bound::Finite(value1), Bound::Finite(value2)) => value1.cmp(value2),
		}
	}
}

impl<T> PartialOrd for Bound<T>
where
	T: Ord,
{
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl<T> fmt::Display for Bound<T>
where
	T: fmt::Display,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Bound::Finite(value) => value.fmt(f),
			Bound::NegativeInfinity | Bound::PositiveInfinity => {
				f.write_str(INFINITIVE)
			}
		}
	}
}

impl<T> From<T> for Bound<T> {
	fn from(value: T) -> Self {
		Bound::Finite(value)
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use quickcheck_macros::quickcheck;

	use super::*;

	#[test]
	fn mass_bound_partial_ord_test() {
		//PositiveInfinity
		assert!(Bound::<u8>::PositiveInfinity == Bound::PositiveInfinity);
		assert!(Bound::<u8>::PositiveInfinity <= Bound::PositiveInfinity);
		assert!(Bound::<u8>::PositiveInfinity >= Bound::PositiveInfinity);
		assert!(Bound::PositiveInfinity > Bound::Finite(u8::MAX));
		assert!(Bound::<u8>::PositiveInfinity > Bound::NegativeInfinity);

		//NegativeInfinity
		assert!(Bound::<u8>::NegativeInfinity == Bound::NegativeInfinity);
		assert!(Bound::<u8>::NegativeInfinity <= Bound::NegativeInfinity);
		assert!(Bound::<u8>::NegativeInfinity >= Bound::NegativeInfinity);
		assert!(Bound::NegativeInfinity < Bound::Finite(u8::MIN));
		assert!(Bound::<u8>::NegativeInfinity < Bound::PositiveInfinity);

		//Finite
		assert!(Bound::Finite(2) == Bound::Finite(2));
		assert!(Bound::Finite(2) <= Bound::Finite(2));
		assert!(Bound::Finite(2) >= Bound::Finite(2));
		assert!(Bound::Finite(0) < Bound::Finite(2));
		assert!(Bound::Finite(2) > Bound::Finite(0));
		assert!(Bound::Finite(i8::MIN) > Bound::NegativeInfinity);
		assert!(Bound::Finite(i8::MAX) < Bound::PositiveInfinity);
	}

	#[test]
	fn display_tests() {
		assert_eq!(Bound::Finite(-5).to_string(), "-5");
		assert_eq!(Bound::Finite("abc").to_string(), "abc");
		assert_eq!(Bound::<i8>::NegativeInfinity.to_string(), "Infinitive");
		assert_eq!(Bound::<i8>::PositiveInfinity.to_string(), "Infinitive");
	}

	#[test]
	fn accessor_tests() {
		assert_eq!(Bound::finite(7).finite_value(), Some(&7));
		assert_eq!(Bound::<i8>::PositiveInfinity.finite_value(), None);
		assert_eq!(Bound::finite(7).into_finite(), Some(7));
		assert_eq!(Bound::<i8>::NegativeInfinity.into_finite(), None);

		assert!(Bound::finite(7).is_finite());
		assert!(Bound::<i8>::NegativeInfinity.is_infinite());
		assert!(Bound::<i8>::PositiveInfinity.is_infinite());

		assert_eq!(Bound::finite(7).as_ref(), Bound::Finite(&7));
		assert_eq!(Bound::from(7), Bound::Finite(7));
	}

	#[quickcheck]
	fn finite_order_matches_value_order(a: i64, b: i64) -> bool {
		Bound::Finite(a).cmp(&Bound::Finite(b)) == a.cmp(&b)
	}

	#[quickcheck]
	fn infinities_enclose_every_finite(a: i64) -> bool {
		Bound::NegativeInfinity < Bound::Finite(a)
			&& Bound::Finite(a) < Bound::PositiveInfinity
	}
}
