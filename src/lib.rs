//! Face-level model of the 3x3x3 Rubik's cube with a budget-bounded
//! brute-force solver.
//!
//! ```
//! use brutecube::prelude::*;
//!
//! let mut cube = Cube::new();
//! cube.apply_turns(parse_turns("D' F R L' U").unwrap());
//!
//! let mut solver = BruteForce::new(SearchLimits::default());
//! match solver.solve(&cube).unwrap() {
//! 	Outcome::Achieved(solution) => {
//! 		let mut check = cube.clone();
//! 		check.apply_turns(solution.turns.clone());
//! 		assert!(check.is_assembled());
//! 	}
//! 	other => panic!("no solution within budget: {:?}", other),
//! }
//! ```
//!
//! The solver explores sequences up to a configured depth and reports
//! the best partial result when the budgets run out before an
//! assembled state is found.

pub mod cube;
pub mod solve;

pub mod prelude {
	pub use crate::cube::{face::*, rotation::*, *};
	pub use crate::solve::{brute::*, *};
}
