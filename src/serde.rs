//! [`Interval`]s are serialized as their canonical notation and deserialized
//! by parsing it, so a deserialized interval upholds the same invariants as
//! a constructed one.

use core::fmt;
use core::marker::PhantomData;
use core::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Interval;

impl<T> Serialize for Interval<T>
where
	T: fmt::Display,
{
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.collect_str(self)
	}
}

impl<'de, T> Deserialize<'de> for Interval<T>
where
	T: Ord + FromStr,
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_str(IntervalVisitor { t: PhantomData })
	}
}

struct IntervalVisitor<T> {
	t: PhantomData<T>,
}

impl<'de, T> Visitor<'de> for IntervalVisitor<T>
where
	T: Ord + FromStr,
{
	type Value = Interval<T>;

	fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
		formatter.write_str("an Interval string such as \"[1, 10)\"")
	}

	fn visit_str<E>(self, text: &str) -> Result<Self::Value, E>
	where
		E: de::Error,
	{
		text.parse().map_err(E::custom)
	}
}
