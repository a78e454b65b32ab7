//! Shorthand [`Interval`] constructors over `i8` for use in tests, named
//! after their lower and upper bound kinds: `i` included, `e` excluded and
//! `u` unbounded.

use crate::Interval;

/// An unbounded-unbounded interval
pub fn uu() -> Interval<i8> {
	Interval::all()
}
/// An unbounded-included interval
pub fn ui(x: i8) -> Interval<i8> {
	Interval::at_most(x)
}
/// An unbounded-excluded interval
pub fn ue(x: i8) -> Interval<i8> {
	Interval::less_than(x)
}
/// An included-unbounded interval
pub fn iu(x: i8) -> Interval<i8> {
	Interval::at_least(x)
}
/// An excluded-unbounded interval
pub fn eu(x: i8) -> Interval<i8> {
	Interval::greater_than(x)
}
/// An included-included interval
pub fn ii(x1: i8, x2: i8) -> Interval<i8> {
	Interval::closed(x1, x2).unwrap()
}
/// An included-excluded interval
pub fn ie(x1: i8, x2: i8) -> Interval<i8> {
	Interval::closed_open(x1, x2).unwrap()
}
/// An excluded-included interval
pub fn ei(x1: i8, x2: i8) -> Interval<i8> {
	Interval::open_closed(x1, x2).unwrap()
}
/// An excluded-excluded interval
pub fn ee(x1: i8, x2: i8) -> Interval<i8> {
	Interval::open(x1, x2).unwrap()
}

/// Every interval over the bounds `2, 4, 6, 8, 10` in every mode, including
/// the one-sided and unbounded ones.
pub fn all_valid_test_intervals() -> alloc::vec::Vec<Interval<i8>> {
	const NUMBERS: &[i8] = &[2, 4, 6, 8, 10];

	let mut output = alloc::vec![uu()];
	for &x in NUMBERS {
		output.extend([ui(x), ue(x), iu(x), eu(x)]);
		for &y in NUMBERS.iter().filter(|&&y| y >= x) {
			output.extend([ii(x, y), ie(x, y), ei(x, y), ee(x, y)]);
		}
	}
	output
}
