//! A module for parsing an [`Interval`] back from its canonical notation,
//! `<open><lower>, <upper><close>`.

use alloc::string::{String, ToString};
use core::str::FromStr;

use itertools::Itertools;
use thiserror::Error;

use crate::bound::INFINITIVE;
use crate::{Bound, Inclusivity, Interval, InvalidBoundsError};

/// The ways in which the notation surrounding the two values of an interval
/// string can be malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MalformedRangeError {
	/// The first and last characters are not one of `()`, `[]`, `[)` or
	/// `(]`.
	#[error("Invalid range string")]
	Delimiters,
	/// Splitting between the delimiters on `,` did not give two non-empty
	/// values.
	#[error("Range string must contain exactly two values")]
	ValueCount,
}

/// The error returned when parsing an [`Interval`] fails.
///
/// `E` is the error type of the converter used for the finite values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseIntervalError<E> {
	/// The string is not in the canonical notation.
	#[error(transparent)]
	Malformed(#[from] MalformedRangeError),
	/// The converter rejected one of the two values.
	#[error("Invalid value {text:?}")]
	InvalidValue {
		/// The trimmed text that was rejected.
		text: String,
		/// The converter's error.
		#[source]
		source: E,
	},
	/// The parsed lower bound is greater than the parsed upper bound.
	#[error(transparent)]
	Bounds(#[from] InvalidBoundsError),
}

impl<T> Interval<T>
where
	T: Ord,
{
	/// Parses an interval from its canonical notation using `converter` for
	/// any value that is not `Infinitive`.
	///
	/// Whitespace around each value is ignored, so `[1,10]` and `[1, 10]`
	/// parse to the same interval. `Infinitive` is negative infinity as the
	/// first value and positive infinity as the second.
	///
	/// # Errors
	///
	/// - [`MalformedRangeError::Delimiters`] if the first and last
	///   characters are not one of the four delimiter pairs.
	/// - [`MalformedRangeError::ValueCount`] if there are not exactly two
	///   comma separated values, an empty value counts as missing.
	/// - [`ParseIntervalError::InvalidValue`] if `converter` fails.
	/// - [`ParseIntervalError::Bounds`] if the lower bound is greater than
	///   the upper bound.
	///
	/// # Examples
	/// ```
	/// use infinitive::{Interval, MalformedRangeError, ParseIntervalError};
	///
	/// let interval = Interval::parse_with("(Infinitive, 50]", str::parse::<i32>).unwrap();
	/// assert_eq!(interval, Interval::at_most(50));
	///
	/// assert_eq!(
	/// 	Interval::parse_with("[1,10", str::parse::<i32>),
	/// 	Err(ParseIntervalError::Malformed(MalformedRangeError::Delimiters))
	/// );
	/// ```
	pub fn parse_with<F, E>(
		text: &str,
		mut converter: F,
	) -> Result<Self, ParseIntervalError<E>>
	where
		F: FnMut(&str) -> Result<T, E>,
	{
		let mut chars = text.chars();
		let mode = match (chars.next(), chars.next_back()) {
			(Some(open), Some(close)) => Inclusivity::from_delimiters(open, close),
			_ => None,
		}
		.ok_or_else(|| {
			log::trace!("rejected delimiters of interval string {text:?}");
			MalformedRangeError::Delimiters
		})?;

		let (lower, upper) = chars
			.as_str()
			.split(',')
			.map(str::trim)
			.collect_tuple()
			.filter(|(lower, upper)| !lower.is_empty() && !upper.is_empty())
			.ok_or_else(|| {
				log::trace!("rejected value count of interval string {text:?}");
				MalformedRangeError::ValueCount
			})?;

		let lower = match lower {
			INFINITIVE => Bound::NegativeInfinity,
			lower => Bound::Finite(convert(lower, &mut converter)?),
		};
		let upper = match upper {
			INFINITIVE => Bound::PositiveInfinity,
			upper => Bound::Finite(convert(upper, &mut converter)?),
		};

		Ok(Interval::new(lower, upper, mode)?)
	}
}

fn convert<T, F, E>(
	text: &str,
	converter: &mut F,
) -> Result<T, ParseIntervalError<E>>
where
	F: FnMut(&str) -> Result<T, E>,
{
	converter(text).map_err(|source| {
		log::trace!("rejected interval value {text:?}");
		ParseIntervalError::InvalidValue {
			text: text.to_string(),
			source,
		}
	})
}

impl<T> FromStr for Interval<T>
where
	T: Ord + FromStr,
{
	type Err = ParseIntervalError<T::Err>;

	fn from_str(text: &str) -> Result<Self, Self::Err> {
		Interval::parse_with(text, T::from_str)
	}
}
