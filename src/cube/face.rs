use const_for::const_for;

use crate::cube::{Color, CUBE_AREA, CUBE_DIM};

/*
 * The rotation-"matrix".
 * Let r be the rotation, s the old cells and n the new cells:
 * n[i] = s[ r[i] ] holds true
 */

// Quarter turn of the 3x3 grid in clockwise direction
const ROTATE_CW: [usize; CUBE_AREA] = [6, 3, 0, 7, 4, 1, 8, 5, 2];

/// Invert a permutation of the face cells.
const fn invert(map: [usize; CUBE_AREA]) -> [usize; CUBE_AREA] {
	let mut out = [0; CUBE_AREA];

	const_for!(i in 0..CUBE_AREA => {
		out[map[i]] = i;
	});

	out
}

// The counterclockwise quarter is the inverse permutation of the clockwise one
const ROTATE_CC: [usize; CUBE_AREA] = invert(ROTATE_CW);

/// One side of the cube, a 3x3 grid of colors.
///
/// Cells are laid out row-major:
/// ```text
/// 0 1 2
/// 3 4 5
/// 6 7 8
/// ```
///
/// The origin color is the color the face had at full assembly and
/// never changes afterwards.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Face {
	cells: [Color; CUBE_AREA],
	origin: Color,
}

impl Face {
	/// Create a face with all cells filled with the given color.
	pub fn new(color: Color) -> Self {
		Self {
			cells: [color; CUBE_AREA],
			origin: color,
		}
	}

	/// The color this face had at full assembly.
	pub fn origin_color(&self) -> Color {
		self.origin
	}

	fn permute(&mut self, map: &[usize; CUBE_AREA]) {
		let bef = self.cells;
		for i in 0..CUBE_AREA {
			self.cells[i] = bef[map[i]];
		}
	}

	/// Rotate the grid a quarter turn clockwise.
	pub fn rotate_cw(&mut self) {
		self.permute(&ROTATE_CW);
	}

	/// Rotate the grid a quarter turn counterclockwise.
	pub fn rotate_cc(&mut self) {
		self.permute(&ROTATE_CC);
	}

	/// Get the colors of the given row.
	pub fn get_row(&self, row: usize) -> [Color; CUBE_DIM] {
		std::array::from_fn(|col| self.cells[row * CUBE_DIM + col])
	}

	/// Get the colors of the given column.
	pub fn get_col(&self, col: usize) -> [Color; CUBE_DIM] {
		std::array::from_fn(|row| self.cells[row * CUBE_DIM + col])
	}

	/// Overwrite the given row with the given colors, positionally.
	pub fn set_row(&mut self, row: usize, colors: [Color; CUBE_DIM]) {
		for (col, color) in colors.into_iter().enumerate() {
			self.cells[row * CUBE_DIM + col] = color;
		}
	}

	/// Overwrite the given column with the given colors, positionally.
	pub fn set_col(&mut self, col: usize, colors: [Color; CUBE_DIM]) {
		for (row, color) in colors.into_iter().enumerate() {
			self.cells[row * CUBE_DIM + col] = color;
		}
	}

	/// Number of cells showing the origin color.
	pub fn count(&self) -> usize {
		self.cells.iter().filter(|c| **c == self.origin).count()
	}

	/// Whether all cells share one color (not necessarily the origin one).
	pub fn is_assembled(&self) -> bool {
		self.cells.iter().all(|c| *c == self.cells[0])
	}
}

// ===== Tests =====

#[cfg(test)]
mod tests {
	use super::*;
	use crate::cube::Color;

	/// A face with an uneven color pattern, origin color Red.
	fn mixed_face() -> Face {
		let mut face = Face::new(Color::Red);
		face.set_row(0, [Color::Red, Color::Orange, Color::Blue]);
		face.set_row(1, [Color::Green, Color::Yellow, Color::White]);
		face.set_row(2, [Color::Orange, Color::Blue, Color::Green]);
		face
	}

	#[test]
	fn rotation_pair_restores() {
		let bef = mixed_face();

		let mut face = bef.clone();
		face.rotate_cw();
		assert_ne!(face, bef);
		face.rotate_cc();
		assert_eq!(face, bef);

		face.rotate_cc();
		face.rotate_cw();
		assert_eq!(face, bef);
	}

	#[test]
	fn four_quarters_are_identity() {
		let bef = mixed_face();

		let mut face = bef.clone();
		for _ in 0..4 {
			face.rotate_cw();
		}
		assert_eq!(face, bef);
	}

	#[test]
	fn clockwise_moves_columns_to_rows() {
		let mut face = mixed_face();
		// The far left column ends up as the top row after a clockwise turn
		let col = face.get_col(0);
		face.rotate_cw();
		assert_eq!(face.get_row(0), [col[2], col[1], col[0]]);
	}

	#[test]
	fn rows_and_cols() {
		let face = mixed_face();
		assert_eq!(face.get_row(1), [Color::Green, Color::Yellow, Color::White]);
		assert_eq!(face.get_col(1), [Color::Orange, Color::Yellow, Color::Blue]);

		let mut face = face;
		face.set_col(2, [Color::White; 3]);
		assert_eq!(face.get_row(0)[2], Color::White);
		assert_eq!(face.get_row(1)[2], Color::White);
		assert_eq!(face.get_row(2)[2], Color::White);
	}

	#[test]
	fn count_tracks_origin_color() {
		let mut face = Face::new(Color::Red);
		assert_eq!(face.count(), 9);

		face.set_row(0, [Color::Blue; 3]);
		assert_eq!(face.count(), 6);

		// Rotating permutes but never recolors
		face.rotate_cw();
		assert_eq!(face.count(), 6);
	}

	#[test]
	fn assembled_in_a_foreign_color() {
		let mut face = Face::new(Color::Red);
		for row in 0..3 {
			face.set_row(row, [Color::Blue; 3]);
		}

		assert!(face.is_assembled());
		assert_eq!(face.count(), 0);
		assert_eq!(face.origin_color(), Color::Red);
	}
}
