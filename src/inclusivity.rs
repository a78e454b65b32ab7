//! A module containing [`Inclusivity`].

/// Which of the two bounds of an [`Interval`] are contained in it.
///
/// | mode      | notation | lower    | upper    |
/// | --------- | -------- | -------- | -------- |
/// | `Neither` | `(a, b)` | excluded | excluded |
/// | `Both`    | `[a, b]` | included | included |
/// | `Start`   | `[a, b)` | included | excluded |
/// | `End`     | `(a, b]` | excluded | included |
///
/// [`Interval`]: crate::Interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Inclusivity {
	/// Open, both bounds are excluded.
	Neither,
	/// Closed, both bounds are included.
	Both,
	/// The lower bound is included and the upper bound excluded.
	Start,
	/// The lower bound is excluded and the upper bound included.
	End,
}

impl Inclusivity {
	/// Returns `true` if the lower bound is contained.
	pub fn includes_lower(self) -> bool {
		match self {
			Inclusivity::Both | Inclusivity::Start => true,
			Inclusivity::Neither | Inclusivity::End => false,
		}
	}

	/// Returns `true` if the upper bound is contained.
	pub fn includes_upper(self) -> bool {
		match self {
			Inclusivity::Both | Inclusivity::End => true,
			Inclusivity::Neither | Inclusivity::Start => false,
		}
	}

	/// The opening and closing delimiters used in the canonical notation.
	///
	/// # Examples
	/// ```
	/// use infinitive::Inclusivity;
	///
	/// assert_eq!(Inclusivity::Start.delimiters(), ('[', ')'));
	/// ```
	pub fn delimiters(self) -> (char, char) {
		match self {
			Inclusivity::Neither => ('(', ')'),
			Inclusivity::Both => ('[', ']'),
			Inclusivity::Start => ('[', ')'),
			Inclusivity::End => ('(', ']'),
		}
	}

	/// The inverse of [`Inclusivity::delimiters()`], returns `None` for
	/// anything but the four recognized delimiter pairs.
	///
	/// # Examples
	/// ```
	/// use infinitive::Inclusivity;
	///
	/// assert_eq!(Inclusivity::from_delimiters('(', ']'), Some(Inclusivity::End));
	/// assert_eq!(Inclusivity::from_delimiters('{', ']'), None);
	/// ```
	pub fn from_delimiters(open: char, close: char) -> Option<Self> {
		match (open, close) {
			('(', ')') => Some(Inclusivity::Neither),
			('[', ']') => Some(Inclusivity::Both),
			('[', ')') => Some(Inclusivity::Start),
			('(', ']') => Some(Inclusivity::End),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	const ALL: [Inclusivity; 4] = [
		Inclusivity::Neither,
		Inclusivity::Both,
		Inclusivity::Start,
		Inclusivity::End,
	];

	#[test]
	fn delimiters_are_invertible() {
		for mode in ALL {
			let (open, close) = mode.delimiters();
			assert_eq!(Inclusivity::from_delimiters(open, close), Some(mode));
		}
	}

	#[test]
	fn delimiters_agree_with_inclusion() {
		for mode in ALL {
			let (open, close) = mode.delimiters();
			assert_eq!(open == '[', mode.includes_lower());
			assert_eq!(close == ']', mode.includes_upper());
		}
	}

	#[test]
	fn unrecognized_delimiters() {
		assert_eq!(Inclusivity::from_delimiters('[', '['), None);
		assert_eq!(Inclusivity::from_delimiters(')', '('), None);
		assert_eq!(Inclusivity::from_delimiters('1', ']'), None);
		assert_eq!(Inclusivity::from_delimiters('(', '0'), None);
	}
}
