//! Piece-placement strings (the board field of FEN).

use super::error::FenError;
use super::{Board, Color, Piece, Square, BOARD_SIZE};

impl Board {
    /// Parse the piece-placement field of a FEN string, e.g.
    /// `"rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"`.
    ///
    /// Anything after the first whitespace (side to move, castling, ...) is
    /// ignored. Ranks are listed from 8 down to 1.
    pub fn from_placement(placement: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let field = placement.split_whitespace().next().unwrap_or("");
        let rows: Vec<&str> = field.split('/').collect();

        if rows.len() != BOARD_SIZE {
            return Err(FenError::WrongRankCount { found: rows.len() });
        }

        for (rank_idx, rank_str) in rows.iter().enumerate() {
            let rank = BOARD_SIZE - 1 - rank_idx;
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                } else {
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    let color = if c.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    if file >= BOARD_SIZE {
                        return Err(FenError::WrongFileCount {
                            rank: rank_idx,
                            files: file + 1,
                        });
                    }
                    board.set_piece(Square(rank, file), color, piece);
                    file += 1;
                }
            }
            if file != BOARD_SIZE {
                return Err(FenError::WrongFileCount {
                    rank: rank_idx,
                    files: file,
                });
            }
        }

        Ok(board)
    }

    /// Render the board as a FEN piece-placement field.
    #[must_use]
    pub fn to_placement(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(BOARD_SIZE);
        for rank in (0..BOARD_SIZE).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..BOARD_SIZE {
                if let Some((color, piece)) = self.cell(Square(rank, file)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_letter(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }
        rows.join("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    #[test]
    fn test_standard_placement() {
        assert_eq!(Board::new().to_placement(), START);
        assert_eq!(Board::from_placement(START), Ok(Board::new()));
    }

    #[test]
    fn test_trailing_fields_ignored() {
        let board = Board::from_placement("7k/8/8/8/8/8/8/K7 w - - 0 1").unwrap();
        assert_eq!(board.piece_count(), 2);
        assert_eq!(board.king_square(Color::White), Some(Square(0, 0)));
        assert_eq!(board.king_square(Color::Black), Some(Square(7, 7)));
    }

    #[test]
    fn test_bad_placements() {
        assert_eq!(
            Board::from_placement("8/8/8"),
            Err(FenError::WrongRankCount { found: 3 })
        );
        assert_eq!(
            Board::from_placement("8/8/8/8/8/8/8/7x"),
            Err(FenError::InvalidPiece { char: 'x' })
        );
        assert!(matches!(
            Board::from_placement("8/8/8/8/8/8/8/KKKKKKKKK"),
            Err(FenError::WrongFileCount { rank: 7, .. })
        ));
        assert!(matches!(
            Board::from_placement("8/8/8/8/8/8/8/7"),
            Err(FenError::WrongFileCount { rank: 7, files: 7 })
        ));
    }
}
