use strum::IntoEnumIterator;

use crate::cube::rotation::{Turn, TurnWise, NUM_TURNS};
use crate::cube::{Cube, Side};
use crate::solve::{Solution, SolveError};

/// Default bound on the number of turns in a solution
pub const DEFAULT_MAX_DEPTH: usize = 5;

/// The budgets of a search run, derived from the maximum depth.
///
/// The caps bound the worst-case work to a fixed ceiling. Once a cap
/// is reached the search returns without a result, whether or not a
/// solution exists.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SearchLimits {
	/// Maximum number of turns in an explored sequence
	pub max_depth: usize,
	/// Maximum number of recursive search invocations,
	/// 12^0 + 12^1 + ... + 12^max_depth
	pub max_calls: u64,
	/// Maximum number of turn applications, 12^max_depth
	pub max_rotations: u64,
}

impl SearchLimits {
	/// Derive the call and rotation caps from the given depth.
	pub fn from_depth(max_depth: usize) -> Self {
		let branching = NUM_TURNS as u64;
		let max_calls = (0..=max_depth as u32).map(|d| branching.pow(d)).sum();
		let max_rotations = branching.pow(max_depth as u32);

		Self {
			max_depth,
			max_calls,
			max_rotations,
		}
	}
}

impl Default for SearchLimits {
	fn default() -> Self {
		Self::from_depth(DEFAULT_MAX_DEPTH)
	}
}

/// Counters accumulated over one search run.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct SearchStats {
	/// Number of recursive search invocations
	pub calls: u64,
	/// Number of turn applications
	pub rotations: u64,
	/// Deepest ply entered (1-based)
	pub depth_reached: usize,
}

/// How a search run ended.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Outcome {
	/// An assembled state was reached; the first one found wins.
	Achieved(Solution),
	/// Every branch was pruned or explored without success.
	Exhausted,
	/// A budget cap cut the exploration short.
	BudgetStop,
}

/// Depth-first brute-force solver.
///
/// Explores turn sequences in a fixed enumeration order
/// (F F' B B' L L' R R' U U' D D', deepening before advancing) and
/// stops at the first assembled state. The result is deterministic,
/// but neither guaranteed minimal nor guaranteed to exist within the
/// budgets; the best partial result is tracked for reporting.
pub struct BruteForce {
	limits: SearchLimits,
	pruning: bool,
	stats: SearchStats,
	best: Solution,
	longest: Solution,
}

impl BruteForce {
	pub fn new(limits: SearchLimits) -> Self {
		Self {
			limits,
			pruning: true,
			stats: SearchStats::default(),
			best: Solution::default(),
			longest: Solution::default(),
		}
	}

	/// Disable the search-space pruning rules, for verification runs.
	pub fn without_pruning(mut self) -> Self {
		self.pruning = false;
		self
	}

	pub fn limits(&self) -> SearchLimits {
		self.limits
	}

	pub fn stats(&self) -> &SearchStats {
		&self.stats
	}

	/// The solution with the highest facelet count observed so far.
	pub fn best(&self) -> &Solution {
		&self.best
	}

	/// The longest sequence explored so far, for diagnostics.
	pub fn longest(&self) -> &Solution {
		&self.longest
	}

	/// Search for a sequence of turns which assembles the given cube.
	///
	/// The cube must be scrambled; solving an assembled cube is a
	/// precondition violation. Budget exhaustion is not an error but
	/// a regular [Outcome]: the caller reports [BruteForce::best]
	/// instead.
	pub fn solve(&mut self, cube: &Cube) -> Result<Outcome, SolveError> {
		if cube.is_assembled() {
			return Err(SolveError::AlreadyAssembled);
		}

		self.stats = SearchStats::default();
		self.best = Solution::default();
		self.longest = Solution::default();

		Ok(self.search(cube, &Solution::default(), 1))
	}

	fn search(&mut self, cube: &Cube, solution: &Solution, depth: usize) -> Outcome {
		if cube.is_assembled() {
			let mut done = solution.clone();
			done.achieved = true;
			done.count = cube.count();
			if done.count > self.best.count {
				self.best = done.clone();
			}
			return Outcome::Achieved(done);
		}

		self.stats.depth_reached = self.stats.depth_reached.max(depth);

		if self.stats.calls >= self.limits.max_calls {
			return Outcome::BudgetStop;
		}
		self.stats.calls += 1;

		for side in Side::iter() {
			for wise in TurnWise::iter() {
				let turn = Turn { side, wise };

				if self.stats.rotations >= self.limits.max_rotations {
					continue;
				}
				if self.pruning && !solution.admits(turn) {
					continue;
				}

				self.stats.rotations += 1;
				let next = cube.rotated(turn);

				let mut turns = solution.turns.clone();
				turns.push(turn);
				let mut child = Solution {
					turns,
					achieved: false,
					count: next.count(),
				};

				if child.count > self.best.count {
					self.best = child.clone();
				}
				if child.turns.len() > self.longest.turns.len() {
					self.longest = child.clone();
				}

				if next.is_assembled() {
					child.achieved = true;
					self.best = child.clone();
					return Outcome::Achieved(child);
				}

				if depth + 1 > self.limits.max_depth {
					// Continue with the next turn on the same level
					continue;
				}
				if let Outcome::Achieved(sol) = self.search(&next, &child, depth + 1) {
					return Outcome::Achieved(sol);
				}
			}
		}

		Outcome::Exhausted
	}
}

// ===== Tests =====

#[cfg(test)]
mod tests {
	use super::*;
	use crate::cube::rotation::parse_turns;

	fn scrambled(notation: &str) -> Cube {
		let mut cube = Cube::new();
		cube.apply_turns(parse_turns(notation).unwrap());
		assert!(!cube.is_assembled());
		cube
	}

	#[test]
	fn limits_from_depth() {
		let limits = SearchLimits::from_depth(5);
		assert_eq!(limits.max_rotations, 248_832);
		assert_eq!(limits.max_calls, 271_453);

		let limits = SearchLimits::from_depth(0);
		assert_eq!(limits.max_rotations, 1);
		assert_eq!(limits.max_calls, 1);
	}

	#[test]
	/// A five-turn scramble must be solved again within five turns;
	/// the scramble's own inverse sequence is always in the tree.
	fn solves_five_turn_scramble() {
		let cube = scrambled("D' F R L' U");

		let mut solver = BruteForce::new(SearchLimits::default());
		let outcome = solver.solve(&cube).unwrap();

		let solution = match outcome {
			Outcome::Achieved(solution) => solution,
			other => panic!("expected a solution, got {:?}", other),
		};

		assert!(solution.achieved);
		assert!(solution.turns.len() <= 5);

		let mut check = cube;
		check.apply_turns(solution.turns.clone());
		assert!(check.is_assembled());

		assert_eq!(solver.best(), &solution);
	}

	#[test]
	fn solves_short_scramble_without_pruning() {
		let cube = scrambled("F U");

		let mut solver = BruteForce::new(SearchLimits::from_depth(2)).without_pruning();
		match solver.solve(&cube).unwrap() {
			Outcome::Achieved(solution) => {
				let mut check = cube;
				check.apply_turns(solution.turns);
				assert!(check.is_assembled());
			}
			other => panic!("expected a solution, got {:?}", other),
		}
	}

	#[test]
	/// Identical budgets and rules give bit-identical runs.
	fn search_is_deterministic() {
		let cube = scrambled("D' F R L' U");

		let mut first = BruteForce::new(SearchLimits::default());
		let mut second = BruteForce::new(SearchLimits::default());

		assert_eq!(first.solve(&cube).unwrap(), second.solve(&cube).unwrap());
		assert_eq!(first.stats(), second.stats());
		assert_eq!(first.best(), second.best());
		assert_eq!(first.longest(), second.longest());
	}

	#[test]
	fn budgets_are_respected() {
		let cube = scrambled("D' F R L' U");

		let limits = SearchLimits::default();
		let mut solver = BruteForce::new(limits);
		solver.solve(&cube).unwrap();

		assert!(solver.stats().calls <= limits.max_calls);
		assert!(solver.stats().rotations <= limits.max_rotations);
		assert!(solver.stats().depth_reached <= limits.max_depth);
	}

	#[test]
	/// With tiny budgets the search returns without a result but
	/// still reports its best partial attempt.
	fn tiny_budget_reports_partial_result() {
		let cube = scrambled("D' F R L' U");

		let limits = SearchLimits {
			max_depth: 5,
			max_calls: 10,
			max_rotations: 10,
		};
		let mut solver = BruteForce::new(limits);
		let outcome = solver.solve(&cube).unwrap();

		assert!(!matches!(outcome, Outcome::Achieved(_)));
		assert!(solver.stats().calls <= limits.max_calls);
		assert!(solver.stats().rotations <= limits.max_rotations);

		assert!(!solver.best().achieved);
		assert!(solver.best().count > 0);
		assert!(!solver.longest().turns.is_empty());
	}

	#[test]
	fn depth_cap_bounds_sequences() {
		let cube = scrambled("D' F R L' U B");

		let mut solver = BruteForce::new(SearchLimits::from_depth(2));
		solver.solve(&cube).unwrap();

		assert!(solver.longest().turns.len() <= 2);
		assert!(solver.stats().depth_reached <= 2);
	}

	#[test]
	fn rejects_assembled_cube() {
		let cube = Cube::new();
		let mut solver = BruteForce::new(SearchLimits::default());

		assert_eq!(solver.solve(&cube), Err(SolveError::AlreadyAssembled));
	}
}
