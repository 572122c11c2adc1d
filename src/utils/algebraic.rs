//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and the internal
//! row/column grid where row 0 is Black's back rank, reused by the FEN and
//! notation components.

use crate::game_state::chess_types::Square;

#[inline]
pub fn file_char(col: usize) -> char {
    char::from(b'a' + col as u8)
}

#[inline]
pub fn rank_char(row: usize) -> char {
    char::from(b'8' - row as u8)
}

/// Convert a square to algebraic coordinates (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    format!("{}{}", file_char(square.col), rank_char(square.row))
}

/// Convert algebraic coordinates (for example: "e4") to a square.
pub fn algebraic_to_square(text: &str) -> Result<Square, String> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(format!("Invalid algebraic square: {text}"));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(format!("Invalid algebraic file: {}", file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(format!("Invalid algebraic rank: {}", rank as char));
    }

    Ok(Square::new((b'8' - rank) as usize, (file - b'a') as usize))
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, square_to_algebraic};
    use crate::game_state::chess_types::Square;

    #[test]
    fn round_trip_corner_squares() {
        assert_eq!(
            algebraic_to_square("a1").expect("a1 should parse"),
            Square::new(7, 0)
        );
        assert_eq!(
            algebraic_to_square("h8").expect("h8 should parse"),
            Square::new(0, 7)
        );
        assert_eq!(square_to_algebraic(Square::new(7, 0)), "a1");
        assert_eq!(square_to_algebraic(Square::new(0, 7)), "h8");
        assert_eq!(square_to_algebraic(Square::new(4, 4)), "e4");
    }

    #[test]
    fn malformed_squares_are_rejected() {
        assert!(algebraic_to_square("e9").is_err());
        assert!(algebraic_to_square("i4").is_err());
        assert!(algebraic_to_square("e44").is_err());
    }
}
