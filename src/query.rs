//! A module containing [`check_range()`], the transport-independent core of
//! a "does this range contain this value" endpoint.
//!
//! A request carries the range in its canonical notation and the value as
//! text, both over `i32`. The response either holds the answer or a message
//! describing why the request was rejected, alongside a [`Status`] which maps
//! directly onto an HTTP status code.
//!
//! # Examples
//! ```
//! use infinitive::query::{check_range, RangeQuery, RangeResponse, Status};
//!
//! let (status, response) = check_range(&RangeQuery::new("5", "[1,10]"));
//! assert_eq!(status, Status::Ok);
//! assert_eq!(response, RangeResponse::answer(true));
//!
//! let (status, response) = check_range(&RangeQuery::new("T", "[1,10]"));
//! assert_eq!(status.code(), 400);
//! assert_eq!(response.message.as_deref(), Some("Invalid value"));
//! ```

use alloc::string::{String, ToString};
use core::num::ParseIntError;

use crate::{Interval, ParseIntervalError};

/// The message given for any value, bound or tested point, that is not an
/// integer.
pub const INVALID_VALUE: &str = "Invalid value";

/// A request to test whether `range` contains `value`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RangeQuery {
	/// The point to test, as text.
	pub value: String,
	/// The interval in its canonical notation, for example `[1, 10)`.
	pub range: String,
}

impl RangeQuery {
	/// Makes a new query.
	pub fn new(value: impl Into<String>, range: impl Into<String>) -> Self {
		RangeQuery {
			value: value.into(),
			range: range.into(),
		}
	}
}

/// The answer to a [`RangeQuery`], exactly one of the two fields is
/// present.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeResponse {
	/// Whether the range contains the value.
	pub result: Option<bool>,
	/// Why the query was rejected.
	pub message: Option<String>,
}

impl RangeResponse {
	/// A successful response.
	pub fn answer(result: bool) -> Self {
		RangeResponse {
			result: Some(result),
			message: None,
		}
	}

	/// A rejection with the given message.
	pub fn rejection(message: impl Into<String>) -> Self {
		RangeResponse {
			result: None,
			message: Some(message.into()),
		}
	}
}

/// The outcome class of a [`RangeQuery`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
	/// The query was answered.
	Ok,
	/// The query was rejected.
	BadRequest,
}

impl Status {
	/// The matching HTTP status code.
	pub fn code(self) -> u16 {
		match self {
			Status::Ok => 200,
			Status::BadRequest => 400,
		}
	}
}

/// Parses `query.range` and `query.value` as `i32`s and tests for
/// containment. Surrounding whitespace is not accepted in `query.value`.
///
/// Any value that is not an integer is reported as [`INVALID_VALUE`], every
/// other failure with the [`Display`] text of its error.
///
/// [`Display`]: core::fmt::Display
pub fn check_range(query: &RangeQuery) -> (Status, RangeResponse) {
	match evaluate(query) {
		Ok(result) => (Status::Ok, RangeResponse::answer(result)),
		Err(rejection) => {
			let message = match rejection {
				Rejection::Range(ParseIntervalError::InvalidValue { .. })
				| Rejection::Value(_) => INVALID_VALUE.to_string(),
				Rejection::Range(error) => error.to_string(),
			};
			log::debug!("rejected range query {query:?}: {message}");
			(Status::BadRequest, RangeResponse::rejection(message))
		}
	}
}

enum Rejection {
	Range(ParseIntervalError<ParseIntError>),
	Value(ParseIntError),
}

fn evaluate(query: &RangeQuery) -> Result<bool, Rejection> {
	let interval: Interval<i32> =
		query.range.parse().map_err(Rejection::Range)?;
	let value: i32 = query.value.parse().map_err(Rejection::Value)?;

	Ok(interval.contains(&value))
}
