use once_cell::sync::Lazy;

use super::error::SquareError;
use super::{Color, Piece, Square, BOARD_SIZE};

/// A board cell: empty, or a piece with its owner.
pub type Cell = Option<(Color, Piece)>;

static STANDARD_SETUP: Lazy<Board> = Lazy::new(|| {
    let mut board = Board::empty();
    for (file, piece) in Piece::BACK_RANK.iter().enumerate() {
        board.set_piece(Square(Color::White.back_rank(), file), Color::White, *piece);
        board.set_piece(Square(Color::Black.back_rank(), file), Color::Black, *piece);
        board.set_piece(Square(Color::White.pawn_start_rank(), file), Color::White, Piece::Pawn);
        board.set_piece(Square(Color::Black.pawn_start_rank(), file), Color::Black, Piece::Pawn);
    }
    board
});

/// 8×8 grid of pieces, indexed by (rank, file).
///
/// The board is the only owner of its pieces. It is mutated through
/// [`Board::place`] / [`Board::clear`] during setup and through
/// [`Board::apply_turn`] afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) squares: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        STANDARD_SETUP.clone()
    }

    /// Alias for [`Board::new`].
    #[must_use]
    pub fn standard() -> Self {
        Self::new()
    }

    /// A board with no pieces.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Put a piece on a square, replacing whatever was there.
    ///
    /// Setup only: no movement rule is checked.
    pub fn place(&mut self, square: Square, color: Color, piece: Piece) -> Result<(), SquareError> {
        let square = square.validate()?;
        self.set_piece(square, color, piece);
        Ok(())
    }

    /// Empty a square, returning its previous occupant.
    pub fn clear(&mut self, square: Square) -> Result<Cell, SquareError> {
        let square = square.validate()?;
        Ok(self.take_piece(square))
    }

    /// The occupant of a square, or `None` if it is empty.
    pub fn piece_at(&self, square: Square) -> Result<Cell, SquareError> {
        let square = square.validate()?;
        Ok(self.cell(square))
    }

    /// Get just the piece kind on a square (without color)
    #[must_use]
    pub fn piece_on(&self, square: Square) -> Option<Piece> {
        self.piece_at(square).ok().flatten().map(|(_, piece)| piece)
    }

    /// Get just the color of the piece on a square
    #[must_use]
    pub fn color_on(&self, square: Square) -> Option<Color> {
        self.piece_at(square).ok().flatten().map(|(color, _)| color)
    }

    /// Iterate over occupied squares in scan order (a1, b1, ..., h8).
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.cell(sq).map(|(color, piece)| (sq, color, piece)))
    }

    /// Number of occupied squares.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    /// Square of `color`'s king.
    ///
    /// Boards with two kings of one color are not supported; the last one in
    /// scan order is returned.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces()
            .filter(|&(_, c, piece)| c == color && piece == Piece::King)
            .map(|(sq, _, _)| sq)
            .last()
    }

    #[inline]
    pub(crate) fn cell(&self, sq: Square) -> Cell {
        self.squares[sq.0][sq.1]
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.0][sq.1] = Some((color, piece));
    }

    #[inline]
    pub(crate) fn take_piece(&mut self, sq: Square) -> Cell {
        self.squares[sq.0][sq.1].take()
    }
}
