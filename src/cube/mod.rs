pub mod face;
pub mod rotation;

use std::fmt;

use face::Face;
use rotation::Turn;
use strum::{EnumCount, IntoEnumIterator};

/// The dimension of the cube
pub const CUBE_DIM: usize = 3;

/// The number of facelets per side
pub const CUBE_AREA: usize = CUBE_DIM * CUBE_DIM;

/// The number of sides of a cube
pub const NUM_SIDES: usize = 6;

/// The six facelet colors, designated by one letter.
#[derive(Eq, PartialEq, Copy, Clone, Hash, Debug, strum::EnumIter, strum::EnumCount)]
pub enum Color {
	Red,
	Orange,
	Blue,
	Green,
	Yellow,
	White,
}

impl Color {
	/// The single-character display symbol of the color.
	pub fn symbol(self) -> char {
		match self {
			Color::Red => 'R',
			Color::Orange => 'O',
			Color::Blue => 'B',
			Color::Green => 'G',
			Color::Yellow => 'Y',
			Color::White => 'W',
		}
	}
}

/// Returns the ANSI-colorcode for the given color.
pub fn get_ansi_color(color: Color) -> &'static str {
	match color {
		Color::Red => "\x1b[31m",
		Color::Orange => "\x1b[33m",
		Color::Blue => "\x1b[34m",
		Color::Green => "\x1b[32m",
		Color::Yellow => "\x1b[93m",
		Color::White => "\x1b[00m",
	}
}

/// The six fixed positions a face occupies on the cube.
///
/// The declaration order fixes both the face-array layout and the
/// enumeration order of the turns.
#[derive(
	Eq, PartialEq, Copy, Clone, Hash, Debug, strum::EnumIter, strum::EnumCount, strum::FromRepr,
)]
#[repr(usize)]
pub enum Side {
	Front,
	Back,
	Left,
	Right,
	Up,
	Down,
}

impl Side {
	/// The side on the opposite end of the cube.
	/// Turns of opposite sides commute.
	pub fn opposite(self) -> Side {
		match self {
			Side::Front => Side::Back,
			Side::Back => Side::Front,
			Side::Left => Side::Right,
			Side::Right => Side::Left,
			Side::Up => Side::Down,
			Side::Down => Side::Up,
		}
	}

	/// Parse the side from its face letter.
	pub fn from_symbol(c: char) -> Option<Side> {
		let side = match c {
			'F' => Side::Front,
			'B' => Side::Back,
			'L' => Side::Left,
			'R' => Side::Right,
			'U' => Side::Up,
			'D' => Side::Down,
			_ => return None,
		};

		Some(side)
	}
}

const _: () = assert!(Side::COUNT == NUM_SIDES);

/// The cube, modeled as six faces indexed by [Side].
///
/// Construction yields the fully assembled cube. All mutation goes
/// through turn application, which only ever permutes the 54 facelets.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Cube {
	faces: [Face; NUM_SIDES],
}

impl Default for Cube {
	/// Creates an *assembled* cube!
	fn default() -> Self {
		let faces = [
			Face::new(Color::Red),    // front
			Face::new(Color::Orange), // back
			Face::new(Color::Blue),   // left
			Face::new(Color::Green),  // right
			Face::new(Color::Yellow), // up
			Face::new(Color::White),  // down
		];

		Self { faces }
	}
}

impl Cube {
	pub fn new() -> Self {
		Self::default()
	}

	/// The face currently at the given side.
	pub fn face(&self, side: Side) -> &Face {
		&self.faces[side as usize]
	}

	pub(crate) fn face_mut(&mut self, side: Side) -> &mut Face {
		&mut self.faces[side as usize]
	}

	/// Number of facelets across all faces showing their origin color.
	/// Always within 0..=54; a rough proxy for how close the cube is
	/// to its originally assembled state.
	pub fn count(&self) -> usize {
		self.faces.iter().map(|f| f.count()).sum()
	}

	/// Whether every face is monochrome.
	pub fn is_assembled(&self) -> bool {
		self.faces.iter().all(|f| f.is_assembled())
	}

	/// Apply the given sequence of turns.
	pub fn apply_turns(&mut self, turns: Vec<Turn>) {
		for turn in turns {
			self.apply_turn(turn);
		}
	}

	/// Print the cube in the *standard output* with ANSI-colors,
	/// as an unfolded net.
	pub fn print(&self) {
		// Generate a space depending on the size of CUBE_DIM
		let space: String = " ".repeat(2 * CUBE_DIM + 1);

		// Print Up-side
		for row in 0..CUBE_DIM {
			print!("{}", space);
			for color in self.face(Side::Up).get_row(row) {
				print!("{}▀ ", get_ansi_color(color));
			}
			println!();
		}

		// Print Left, Front, Right, Back
		const BAND: [Side; 4] = [Side::Left, Side::Front, Side::Right, Side::Back];
		for row in 0..CUBE_DIM {
			for side in BAND {
				for color in self.face(side).get_row(row) {
					print!("{}▄ ", get_ansi_color(color));
				}
				print!(" ");
			}
			println!();
		}
		println!();

		// Print Down-side
		for row in 0..CUBE_DIM {
			print!("{}", space);
			for color in self.face(Side::Down).get_row(row) {
				print!("{}▀ ", get_ansi_color(color));
			}
			println!();
		}
		// Reset ansi color
		println!("\x1b[00m");
	}
}

impl fmt::Display for Cube {
	/// Plain-letter dump, six faces side by side, 3 rows each.
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		writeln!(f, "FRONT    BACK     LEFT     RIGHT    UP       DOWN")?;
		for row in 0..CUBE_DIM {
			for side in Side::iter() {
				let cells = self.face(side).get_row(row);
				let s = format!(
					"{} {} {}",
					cells[0].symbol(),
					cells[1].symbol(),
					cells[2].symbol()
				);
				write!(f, "{:<9}", s)?;
			}
			writeln!(f)?;
		}

		Ok(())
	}
}

// ===== Tests =====

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn fresh_cube_is_assembled() {
		let cube = Cube::new();
		assert!(cube.is_assembled());
		assert_eq!(cube.count(), NUM_SIDES * CUBE_AREA);
	}

	#[test]
	fn origin_colors() {
		let cube = Cube::new();
		assert_eq!(cube.face(Side::Front).origin_color(), Color::Red);
		assert_eq!(cube.face(Side::Back).origin_color(), Color::Orange);
		assert_eq!(cube.face(Side::Left).origin_color(), Color::Blue);
		assert_eq!(cube.face(Side::Right).origin_color(), Color::Green);
		assert_eq!(cube.face(Side::Up).origin_color(), Color::Yellow);
		assert_eq!(cube.face(Side::Down).origin_color(), Color::White);
	}

	#[test]
	/// A cube can be assembled without every facelet matching its
	/// origin color, so full count and assembly must stay independent.
	fn assembled_does_not_imply_full_count() {
		let mut cube = Cube::new();

		// Repaint front and back in each other's color
		for row in 0..CUBE_DIM {
			cube.faces[Side::Front as usize].set_row(row, [Color::Orange; 3]);
			cube.faces[Side::Back as usize].set_row(row, [Color::Red; 3]);
		}

		assert!(cube.is_assembled());
		assert_eq!(cube.count(), 4 * CUBE_AREA);
	}

	#[test]
	fn opposite_sides() {
		for side in Side::iter() {
			assert_ne!(side, side.opposite());
			assert_eq!(side, side.opposite().opposite());
		}
	}

	#[test]
	fn plain_dump_lists_all_faces() {
		let dump = Cube::new().to_string();
		assert!(dump.starts_with("FRONT"));
		// 3 cell rows below the header
		assert_eq!(dump.lines().count(), 1 + CUBE_DIM);
		assert!(dump.contains("R R R"));
		assert!(dump.contains("W W W"));
	}
}
