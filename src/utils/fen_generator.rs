//! GameState-to-FEN generator.
//!
//! Serializes the board, side to move, castling rights, and en-passant
//! target. The clock fields are emitted as the constant `0 1` since this
//! model keeps no move clocks.

use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::square_to_algebraic;

pub fn generate_fen(game_state: &GameState) -> String {
    let mut fen = String::new();

    for (row_index, row) in game_state.board.iter().enumerate() {
        let mut empty_run = 0u32;
        for square in row {
            match square {
                None => empty_run += 1,
                Some(piece) => {
                    if empty_run > 0 {
                        fen.push_str(&empty_run.to_string());
                        empty_run = 0;
                    }
                    fen.push(piece.fen_char());
                }
            }
        }
        if empty_run > 0 {
            fen.push_str(&empty_run.to_string());
        }
        if row_index < 7 {
            fen.push('/');
        }
    }

    fen.push(' ');
    fen.push(match game_state.side_to_move {
        Color::White => 'w',
        Color::Black => 'b',
    });

    fen.push(' ');
    let rights = &game_state.castling_rights;
    if rights.white_kingside || rights.white_queenside || rights.black_kingside || rights.black_queenside {
        if rights.white_kingside {
            fen.push('K');
        }
        if rights.white_queenside {
            fen.push('Q');
        }
        if rights.black_kingside {
            fen.push('k');
        }
        if rights.black_queenside {
            fen.push('q');
        }
    } else {
        fen.push('-');
    }

    fen.push(' ');
    match game_state.en_passant_target {
        Some(square) => fen.push_str(&square_to_algebraic(square)),
        None => fen.push('-'),
    }

    fen.push_str(" 0 1");
    fen
}

#[cfg(test)]
mod tests {
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::Square;
    use crate::game_state::game_state::GameState;
    use crate::moves::move_descriptions::Move;

    #[test]
    fn starting_position_round_trips() {
        let state = GameState::new_game();
        assert_eq!(state.get_fen(), STARTING_POSITION_FEN);
    }

    #[test]
    fn double_push_exposes_the_en_passant_square() {
        let mut state = GameState::new_game();
        state.make_move(Move::new(Square::new(6, 4), Square::new(4, 4), &state.board));
        assert_eq!(
            state.get_fen(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
        );
    }

    #[test]
    fn arbitrary_positions_round_trip_through_parse() {
        let fens = [
            "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1",
            "6k1/5ppp/8/8/8/8/8/4R1K1 w - - 0 1",
            "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1",
        ];
        for fen in fens {
            let state = GameState::from_fen(fen).expect("FEN should parse");
            assert_eq!(state.get_fen(), fen);
        }
    }
}
