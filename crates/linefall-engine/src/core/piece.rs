use arrayvec::ArrayVec;
use rand::{Rng, distr::StandardUniform, prelude::Distribution};

/// Enum identifying one of the seven catalog entries.
///
/// Each kind pairs a fixed template matrix ([`Self::shape`]) with a fixed
/// color ([`Self::color`]); there is no index-based lookup between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PieceKind {
    /// I-piece.
    I = 0,
    /// O-piece.
    O = 1,
    /// T-piece.
    T = 2,
    /// L-piece.
    L = 3,
    /// J-piece.
    J = 4,
    /// S-piece.
    S = 5,
    /// Z-piece.
    Z = 6,
}

impl Distribution<PieceKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceKind {
        match rng.random_range(0..=6) {
            0 => PieceKind::I,
            1 => PieceKind::O,
            2 => PieceKind::T,
            3 => PieceKind::L,
            4 => PieceKind::J,
            5 => PieceKind::S,
            _ => PieceKind::Z,
        }
    }
}

impl PieceKind {
    /// Number of piece kinds (7).
    pub const LEN: usize = 7;

    /// All catalog entries, in catalog order.
    pub const ALL: [Self; Self::LEN] = [
        Self::I,
        Self::O,
        Self::T,
        Self::L,
        Self::J,
        Self::S,
        Self::Z,
    ];

    /// Returns a working copy of this kind's template matrix.
    #[must_use]
    pub fn shape(self) -> Shape {
        Shape::from_template(SHAPE_TEMPLATES[self as usize])
    }

    /// Returns this kind's fixed catalog color.
    #[must_use]
    pub const fn color(self) -> PieceColor {
        match self {
            PieceKind::I => PieceColor::Cyan,
            PieceKind::O => PieceColor::Yellow,
            PieceKind::T => PieceColor::Magenta,
            PieceKind::L => PieceColor::Orange,
            PieceKind::J => PieceColor::Blue,
            PieceKind::S => PieceColor::Green,
            PieceKind::Z => PieceColor::Red,
        }
    }
}

/// Opaque color token carried by locked cells and falling pieces.
///
/// The engine never interprets colors; the renderer maps them to terminal
/// styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceColor {
    Cyan,
    Yellow,
    Magenta,
    Orange,
    Blue,
    Green,
    Red,
}

/// Upper bound on shape cells; every catalog matrix and each of its
/// rotations fits a 4×4 box.
const MAX_SHAPE_CELLS: usize = 16;

/// A 2D boolean occupancy matrix with a tight bounding box.
///
/// Shapes are row-major and immutable; [`Self::rotated_cw`] returns a new
/// matrix instead of mutating in place. Dimensions are not square: the
/// I-piece is 1×4 at spawn and 4×1 after one rotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    cols: usize,
    cells: ArrayVec<bool, MAX_SHAPE_CELLS>,
}

impl Shape {
    fn from_template(template: &[&[bool]]) -> Self {
        let cols = template[0].len();
        let mut cells = ArrayVec::new();
        for row in template {
            debug_assert_eq!(row.len(), cols);
            cells.extend(row.iter().copied());
        }
        Self { cols, cells }
    }

    /// Number of rows in the matrix.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.cells.len() / self.cols
    }

    /// Number of columns in the matrix.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the matrix cell at (row, col) is occupied.
    #[must_use]
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.cols + col]
    }

    /// Iterates over occupied cells as (row, col) pairs, row-major.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(idx, &occupied)| occupied.then_some((idx / self.cols, idx % self.cols)))
    }

    /// Returns the matrix rotated 90° clockwise.
    ///
    /// `new[i][j] = old[rows - 1 - j][i]`, with rows and columns swapped.
    /// Four applications return the original matrix.
    #[must_use]
    pub fn rotated_cw(&self) -> Self {
        let rows = self.rows();
        let cols = self.cols;
        let mut cells = ArrayVec::new();
        for i in 0..cols {
            for j in 0..rows {
                cells.push(self.cells[(rows - 1 - j) * cols + i]);
            }
        }
        Self { cols: rows, cells }
    }
}

/// The currently falling, player-controllable piece.
///
/// Position is the board-space offset of the matrix origin; coordinates are
/// signed so candidate placements outside the board can be tested. The color
/// is fixed for the piece's lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    shape: Shape,
    x: i32,
    y: i32,
    color: PieceColor,
}

impl Piece {
    /// Creates a piece of the given kind centered at the top of a board
    /// `board_width` columns wide: `x = board_width / 2 - cols / 2`, `y = 0`.
    #[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    #[must_use]
    pub fn spawn(kind: PieceKind, board_width: usize) -> Self {
        let shape = kind.shape();
        let x = (board_width / 2) as i32 - (shape.cols() / 2) as i32;
        Self {
            shape,
            x,
            y: 0,
            color: kind.color(),
        }
    }

    #[must_use]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    #[must_use]
    pub fn x(&self) -> i32 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> i32 {
        self.y
    }

    #[must_use]
    pub fn color(&self) -> PieceColor {
        self.color
    }

    /// Returns a copy translated by (dx, dy).
    #[must_use]
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            shape: self.shape.clone(),
            x: self.x + dx,
            y: self.y + dy,
            color: self.color,
        }
    }

    /// Replaces the shape matrix, keeping position and color.
    pub(crate) fn set_shape(&mut self, shape: Shape) {
        self.shape = shape;
    }

    /// Iterates over occupied cells in board coordinates as (x, y) pairs.
    #[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn occupied_positions(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .occupied_cells()
            .map(|(i, j)| (self.x + j as i32, self.y + i as i32))
    }
}

const C: bool = true;
const E: bool = false;

/// Template matrices, indexed by `PieceKind` discriminant.
const SHAPE_TEMPLATES: [&[&[bool]]; PieceKind::LEN] = [
    // I-piece
    &[&[C, C, C, C]],
    // O-piece
    &[&[C, C], &[C, C]],
    // T-piece
    &[&[C, C, C], &[E, C, E]],
    // L-piece
    &[&[C, C, C], &[C, E, E]],
    // J-piece
    &[&[C, C, C], &[E, E, C]],
    // S-piece
    &[&[C, C, E], &[E, C, C]],
    // Z-piece
    &[&[E, C, C], &[C, C, E]],
];

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(shape: &Shape) -> Vec<Vec<bool>> {
        (0..shape.rows())
            .map(|i| (0..shape.cols()).map(|j| shape.is_occupied(i, j)).collect())
            .collect()
    }

    #[test]
    fn test_templates_are_tight() {
        // Every template row and column contains at least one occupied cell.
        for kind in PieceKind::ALL {
            let shape = kind.shape();
            for i in 0..shape.rows() {
                assert!(
                    (0..shape.cols()).any(|j| shape.is_occupied(i, j)),
                    "{kind:?} row {i} is empty"
                );
            }
            for j in 0..shape.cols() {
                assert!(
                    (0..shape.rows()).any(|i| shape.is_occupied(i, j)),
                    "{kind:?} col {j} is empty"
                );
            }
        }
    }

    #[test]
    fn test_every_template_has_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(kind.shape().occupied_cells().count(), 4, "{kind:?}");
        }
    }

    #[test]
    fn test_rotate_swaps_dimensions() {
        let shape = PieceKind::I.shape();
        assert_eq!((shape.rows(), shape.cols()), (1, 4));

        let rotated = shape.rotated_cw();
        assert_eq!((rotated.rows(), rotated.cols()), (4, 1));
    }

    #[test]
    fn test_rotate_t_piece() {
        let rotated = PieceKind::T.shape().rotated_cw();
        // T pointing left after one clockwise turn.
        assert_eq!(
            matrix(&rotated),
            vec![vec![E, C], vec![C, C], vec![E, C]],
        );
    }

    #[test]
    fn test_rotate_four_times_is_identity() {
        for kind in PieceKind::ALL {
            let shape = kind.shape();
            let mut rotated = shape.clone();
            for _ in 0..4 {
                rotated = rotated.rotated_cw();
            }
            assert_eq!(rotated, shape, "{kind:?}");
        }
    }

    #[test]
    fn test_rotate_o_piece_is_identity() {
        let shape = PieceKind::O.shape();
        assert_eq!(shape.rotated_cw(), shape);
    }

    #[test]
    fn test_spawn_centers_horizontally() {
        // Width 10: O (2 wide) spawns at x = 5 - 1 = 4, I (4 wide) at 5 - 2 = 3.
        let o = Piece::spawn(PieceKind::O, 10);
        assert_eq!((o.x(), o.y()), (4, 0));

        let i = Piece::spawn(PieceKind::I, 10);
        assert_eq!((i.x(), i.y()), (3, 0));
    }

    #[test]
    fn test_spawn_uses_catalog_color() {
        for kind in PieceKind::ALL {
            assert_eq!(Piece::spawn(kind, 10).color(), kind.color());
        }
    }

    #[test]
    fn test_translated_leaves_original_unchanged() {
        let piece = Piece::spawn(PieceKind::T, 10);
        let moved = piece.translated(-1, 2);
        assert_eq!((moved.x(), moved.y()), (piece.x() - 1, piece.y() + 2));
        assert_eq!((piece.x(), piece.y()), (3, 0));
        assert_eq!(moved.shape(), piece.shape());
    }

    #[test]
    fn test_occupied_positions_offset_by_piece_position() {
        let piece = Piece::spawn(PieceKind::O, 10).translated(0, 3);
        let positions: Vec<_> = piece.occupied_positions().collect();
        assert_eq!(positions, vec![(4, 3), (5, 3), (4, 4), (5, 4)]);
    }

    #[test]
    fn test_uniform_draws_cover_all_kinds() {
        use rand::SeedableRng as _;

        let mut rng = rand_pcg::Pcg32::seed_from_u64(7);
        let mut seen = [false; PieceKind::LEN];
        for _ in 0..1000 {
            let kind: PieceKind = rng.random();
            seen[kind as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "all 7 kinds drawn: {seen:?}");
    }
}
