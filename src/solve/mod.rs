pub mod brute;

use std::fmt;

use crate::cube::rotation::Turn;

/// A sequence of turns to apply on a scrambled cube,
/// in insertion order.
///
/// achieved: whether the sequence leads to an assembled cube
/// count: the facelet count of the cube the sequence leads to
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Solution {
	pub turns: Vec<Turn>,
	pub achieved: bool,
	pub count: usize,
}

impl Solution {
	/// Render the sequence in turn notation, e.g. "U' L R' F' D".
	pub fn notation(&self) -> String {
		self.turns
			.iter()
			.map(|t| t.to_string())
			.collect::<Vec<_>>()
			.join(" ")
	}

	/// Whether the candidate is worth exploring as the next turn,
	/// given the turns taken so far.
	///
	/// The rules reject sequences which are provably reducible to a
	/// shorter equivalent one, e.g. a turn directly followed by its
	/// inverse, or cancellations hidden behind turns of the opposite
	/// side (which commute with the candidate). Heuristic rules, not
	/// proven to preserve completeness.
	pub fn admits(&self, d0: Turn) -> bool {
		if self.achieved {
			return false;
		}

		let h = &self.turns;
		let n = h.len();

		if n >= 1 {
			let d1 = h[n - 1];

			// Exclude patterns like "F' F"
			if d0.undoes(d1) {
				return false;
			}

			if n >= 2 {
				let d2 = h[n - 2];

				// Exclude patterns like "F F F" and "F' B F"
				if d0 == d1 && d0 == d2 {
					return false;
				}
				if d0.on_opposite_face(d1) && d0.undoes(d2) {
					return false;
				}

				if n >= 3 {
					let d3 = h[n - 3];

					// Exclude patterns like "F F B F", "F B F F"
					if d0 == d2 && d0 == d3 && d0.on_opposite_face(d1) {
						return false;
					}
					if d0 == d1 && d0 == d3 && d0.on_opposite_face(d2) {
						return false;
					}

					// Exclude patterns like "F' B B F"
					if d0.undoes(d3) && d0.on_opposite_face(d1) && d0.on_opposite_face(d2) {
						return false;
					}

					if n >= 4 {
						let d4 = h[n - 4];

						// Exclude patterns like "F F B B F", "F F B B F'"
						if d0 == d3 && d0 == d4 && d0.on_opposite_face(d1) && d0.on_opposite_face(d2)
						{
							return false;
						}
					}
				}
			}
		}

		true
	}
}

impl fmt::Display for Solution {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}", self.notation())
	}
}

/// The ways invoking the solver can go wrong.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SolveError {
	#[error("the cube is already assembled")]
	AlreadyAssembled,
}

// ===== Tests =====
