//! Drawn-position detection.
//!
//! Two families of checks, both run every time legal moves are recomputed:
//! insufficient mating material on the current board, and a coarse
//! repeated-move heuristic over the notated move history. The repetition
//! check compares fixed ply offsets (each side repeating its own last move
//! three times), not full position repetition.

use crate::game_state::chess_types::{Board, Color, PieceKind};

/// Whether the current board and notated history amount to a draw.
pub fn is_drawn_position(board: &Board, notation_log: &[String]) -> bool {
    insufficient_material(board) || repeated_move_pattern(notation_log)
}

fn insufficient_material(board: &Board) -> bool {
    let white = side_pieces(board, Color::White);
    let black = side_pieces(board, Color::Black);

    if king_only(&white) && king_only(&black) {
        return true;
    }
    if king_only(&white) && (king_and_minor(&black, PieceKind::Knight) || king_and_minor(&black, PieceKind::Bishop)) {
        return true;
    }
    if king_only(&black) && (king_and_minor(&white, PieceKind::Knight) || king_and_minor(&white, PieceKind::Bishop)) {
        return true;
    }

    false
}

fn side_pieces(board: &Board, color: Color) -> Vec<PieceKind> {
    let mut pieces = Vec::new();
    for row in board {
        for square in row {
            if let Some(piece) = square {
                if piece.color == color {
                    pieces.push(piece.kind);
                }
            }
        }
    }
    pieces
}

fn king_only(pieces: &[PieceKind]) -> bool {
    pieces.len() == 1 && pieces.contains(&PieceKind::King)
}

fn king_and_minor(pieces: &[PieceKind], minor: PieceKind) -> bool {
    pieces.len() == 2 && pieces.contains(&PieceKind::King) && pieces.contains(&minor)
}

/// Each side has played the same notated move on its last three turns:
/// the 1st/5th/9th-from-last strings match and the 2nd/6th/10th-from-last
/// strings match.
fn repeated_move_pattern(notation_log: &[String]) -> bool {
    let n = notation_log.len();
    if n < 10 {
        return false;
    }

    let last = |k: usize| &notation_log[n - k];
    last(1) == last(5) && last(5) == last(9) && last(2) == last(6) && last(6) == last(10)
}

#[cfg(test)]
mod tests {
    use super::is_drawn_position;
    use crate::game_state::game_state::GameState;

    fn board_of(fen: &str) -> crate::game_state::chess_types::Board {
        GameState::from_fen(fen).expect("FEN should parse").board
    }

    #[test]
    fn bare_kings_draw() {
        assert!(is_drawn_position(&board_of("4k3/8/8/8/8/8/8/4K3 w - - 0 1"), &[]));
    }

    #[test]
    fn lone_minor_piece_still_draws() {
        assert!(is_drawn_position(&board_of("4k3/8/8/8/8/8/8/3NK3 w - - 0 1"), &[]));
        assert!(is_drawn_position(&board_of("3bk3/8/8/8/8/8/8/4K3 w - - 0 1"), &[]));
    }

    #[test]
    fn two_minor_pieces_do_not_draw() {
        assert!(!is_drawn_position(&board_of("4k3/8/8/8/8/8/8/2NNK3 w - - 0 1"), &[]));
        assert!(!is_drawn_position(&board_of("3bk3/8/8/8/8/8/8/3NK3 w - - 0 1"), &[]));
    }

    #[test]
    fn rook_endings_are_not_material_draws() {
        assert!(!is_drawn_position(&board_of("4k3/8/8/8/8/8/8/3RK3 w - - 0 1"), &[]));
    }

    #[test]
    fn shuffling_both_sides_triggers_the_repetition_heuristic() {
        let log: Vec<String> = ["Nf3", "Nf6", "Ng1", "Ng8", "Nf3", "Nf6", "Ng1", "Ng8", "Nf3", "Nf6"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        // Last three white moves alternate Nf3/Ng1 and so do black's; the
        // fixed offsets 1/5/9 and 2/6/10 all agree.
        assert!(is_drawn_position(
            &board_of("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            &log
        ));
    }

    #[test]
    fn short_or_varied_histories_do_not_trigger_repetition() {
        let short: Vec<String> = vec!["Nf3".into(), "Nf6".into()];
        let varied: Vec<String> = ["e4", "e5", "Nf3", "Nc6", "Bb5", "Nf6", "0-0", "Be7", "d4", "d6"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let start = board_of("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert!(!is_drawn_position(&start, &short));
        assert!(!is_drawn_position(&start, &varied));
    }
}
