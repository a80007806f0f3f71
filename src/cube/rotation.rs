use std::str::FromStr;

use rand::Rng;
use strum::EnumCount;

use crate::cube::{Color, Cube, Side, CUBE_DIM, NUM_SIDES};

/// Total number of ways to turn a side
pub const NUM_TURNWISES: usize = TurnWise::COUNT;

/// Total number of distinct turns
pub const NUM_TURNS: usize = NUM_SIDES * NUM_TURNWISES;

/// A side can be turned in clockwise and counterclockwise direction.
/// This is the enum for that.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, strum::EnumIter, strum::EnumCount)]
pub enum TurnWise {
	Clockwise,
	CounterClockwise,
}

impl std::fmt::Display for TurnWise {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			TurnWise::Clockwise => write!(f, ""),
			TurnWise::CounterClockwise => write!(f, "'"),
		}
	}
}

/// An entire turn: a quarter rotation of one side of the cube.
///
/// side: The side to turn
/// wise: See the definition of TurnWise
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Turn {
	pub side: Side,
	pub wise: TurnWise,
}

impl Turn {
	/// Turn itself to the turn which negates itself.
	pub fn invert(&mut self) {
		self.wise = match self.wise {
			TurnWise::Clockwise => TurnWise::CounterClockwise,
			TurnWise::CounterClockwise => TurnWise::Clockwise,
		};
	}

	/// Whether this turn exactly cancels the given one ("F" after "F'").
	pub fn undoes(&self, other: Turn) -> bool {
		self.side == other.side && self.wise != other.wise
	}

	/// Whether this turn targets the side opposite to the given one.
	pub fn on_opposite_face(&self, other: Turn) -> bool {
		self.side.opposite() == other.side
	}
}

impl std::fmt::Display for Turn {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		let letter = match self.side {
			Side::Front => 'F',
			Side::Back => 'B',
			Side::Left => 'L',
			Side::Right => 'R',
			Side::Up => 'U',
			Side::Down => 'D',
		};
		write!(f, "{}", letter)?;
		self.wise.fmt(f)
	}
}

/// The errors a turn-notation string can fail with.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum NotationError {
	#[error("invalid rotation symbol '{0}'")]
	InvalidSymbol(char),
	#[error("rotation modifier ' must follow a face letter")]
	DanglingModifier,
}

impl FromStr for Turn {
	type Err = NotationError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let mut turns = parse_turns(s)?;
		match (turns.len(), turns.pop()) {
			(1, Some(turn)) => Ok(turn),
			_ => Err(NotationError::DanglingModifier),
		}
	}
}

/// Parse a turn sequence like "U' L' U L U F U' F'".
///
/// A face letter optionally followed by an apostrophe denotes one turn;
/// whitespace is ignored, so "FF'BB'" is valid as well. Unknown symbols
/// fail fast with the offending character.
pub fn parse_turns<T>(string: T) -> Result<Vec<Turn>, NotationError>
where
	T: AsRef<str>,
{
	let mut out: Vec<Turn> = Vec::new();

	for c in string.as_ref().chars() {
		if c.is_whitespace() {
			continue;
		}

		if c == '\'' {
			match out.last_mut() {
				Some(turn) if turn.wise == TurnWise::Clockwise => turn.invert(),
				_ => return Err(NotationError::DanglingModifier),
			}
			continue;
		}

		match Side::from_symbol(c) {
			Some(side) => out.push(Turn {
				side,
				wise: TurnWise::Clockwise,
			}),
			None => return Err(NotationError::InvalidSymbol(c)),
		}
	}

	Ok(out)
}

/// Generate a sequence of n random turns.
pub fn random_sequence(n: usize) -> Vec<Turn> {
	let mut rng = rand::thread_rng();

	(0..n)
		.map(|_| {
			let side = Side::from_repr(rng.gen_range(0..NUM_SIDES)).unwrap();
			let wise = if rng.gen::<bool>() {
				TurnWise::Clockwise
			} else {
				TurnWise::CounterClockwise
			};
			Turn { side, wise }
		})
		.collect()
}

// ===== Border cycles =====

/// Selects a row or a column of a face.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Strip {
	Row(usize),
	Col(usize),
}

/*
 * The four border strips touched when a side is turned, one cycle per
 * side. A clockwise turn shifts each strip's contents forward along
 * the cycle (strip i receives the old contents of strip i-1, wrapping),
 * a counterclockwise turn shifts backward.
 *
 * The lists are carefully constructed; together with the face rotation
 * they are the whole permutation engine.
 */
const BORDER_CYCLES: [[(Side, Strip); 4]; NUM_SIDES] = [
	// front
	[
		(Side::Left, Strip::Col(2)),
		(Side::Up, Strip::Row(2)),
		(Side::Right, Strip::Col(0)),
		(Side::Down, Strip::Row(0)),
	],
	// back
	[
		(Side::Right, Strip::Col(2)),
		(Side::Up, Strip::Row(0)),
		(Side::Left, Strip::Col(0)),
		(Side::Down, Strip::Row(2)),
	],
	// left
	[
		(Side::Back, Strip::Col(0)),
		(Side::Up, Strip::Col(0)),
		(Side::Front, Strip::Col(0)),
		(Side::Down, Strip::Col(0)),
	],
	// right
	[
		(Side::Front, Strip::Col(2)),
		(Side::Up, Strip::Col(2)),
		(Side::Back, Strip::Col(0)),
		(Side::Down, Strip::Col(2)),
	],
	// up
	[
		(Side::Back, Strip::Row(0)),
		(Side::Right, Strip::Row(0)),
		(Side::Front, Strip::Row(0)),
		(Side::Left, Strip::Row(0)),
	],
	// down
	[
		(Side::Back, Strip::Row(2)),
		(Side::Left, Strip::Row(2)),
		(Side::Front, Strip::Row(2)),
		(Side::Right, Strip::Row(2)),
	],
];

impl Cube {
	fn get_strip(&self, side: Side, strip: Strip) -> [Color; CUBE_DIM] {
		match strip {
			Strip::Row(row) => self.face(side).get_row(row),
			Strip::Col(col) => self.face(side).get_col(col),
		}
	}

	fn set_strip(&mut self, side: Side, strip: Strip, colors: [Color; CUBE_DIM]) {
		match strip {
			Strip::Row(row) => self.face_mut(side).set_row(row, colors),
			Strip::Col(col) => self.face_mut(side).set_col(col, colors),
		}
	}

	/// Apply a single turn in place.
	pub fn apply_turn(&mut self, turn: Turn) {
		// Rotate the turned face's own grid
		match turn.wise {
			TurnWise::Clockwise => self.face_mut(turn.side).rotate_cw(),
			TurnWise::CounterClockwise => self.face_mut(turn.side).rotate_cc(),
		}

		// Cycle the border strips of the four neighboring faces
		let cycle = BORDER_CYCLES[turn.side as usize];
		let grabbed: [[Color; CUBE_DIM]; 4] =
			std::array::from_fn(|i| self.get_strip(cycle[i].0, cycle[i].1));

		for (i, (side, strip)) in cycle.iter().enumerate() {
			let from = match turn.wise {
				TurnWise::Clockwise => (i + 3) % 4,
				TurnWise::CounterClockwise => (i + 1) % 4,
			};
			self.set_strip(*side, *strip, grabbed[from]);
		}
	}

	/// Apply a turn to a copy of the cube and return the new state.
	/// The input cube is never touched.
	pub fn rotated(&self, turn: Turn) -> Cube {
		let mut out = self.clone();
		out.apply_turn(turn);
		out
	}
}

// ===== Tests =====
