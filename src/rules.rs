// =============================================================================
// Mobility Scan
//
// Answers "does this side have any move at all" for stalemate detection,
// straight from a board and the active en-passant record.
// =============================================================================

use crate::board::Board;
use crate::coord::Coord;
use crate::en_passant::EnPassant;
use crate::piece::Color;

/// Whether any pawn of `color` has a move: an empty square straight ahead,
/// an opponent pawn diagonally ahead, or the en-passant target one rank
/// ahead and one file aside.
pub fn can_move(board: &Board, color: Color, en_passant: Option<EnPassant>) -> bool {
    board
        .pawns(color)
        .any(|at| pawn_can_move(board, color, at, en_passant))
}

pub fn pawn_can_move(board: &Board, color: Color, at: Coord, en_passant: Option<EnPassant>) -> bool {
    let dir = color.direction();

    if at.offset(0, dir).is_some_and(|ahead| board.is_empty(ahead)) {
        return true;
    }

    let opponent = color.opposite();
    let can_capture = [-1, 1].into_iter().any(|df| {
        at.offset(df, dir)
            .is_some_and(|diag| board.pawn_of_color_at(opponent, diag).is_some())
    });
    if can_capture {
        return true;
    }

    // Geometry only: the target's occupancy is not re-checked here.
    en_passant.is_some_and(|ep| {
        dir * at.rank_distance(ep.target) == 1 && at.file_distance(ep.target).abs() == 1
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Pawn;

    fn sq(s: &str) -> Coord {
        s.parse().unwrap()
    }

    fn board_with(white: &[&str], black: &[&str]) -> Board {
        let mut board = Board::empty();
        for s in white {
            board.place(sq(s), Pawn::new(Color::White));
        }
        for s in black {
            board.place(sq(s), Pawn::new(Color::Black));
        }
        board
    }

    #[test]
    fn starting_position_is_mobile() {
        let board = Board::new();
        assert!(can_move(&board, Color::White, None));
        assert!(can_move(&board, Color::Black, None));
    }

    #[test]
    fn head_to_head_pawns_are_stuck() {
        let board = board_with(&["d4"], &["d5"]);
        assert!(!can_move(&board, Color::White, None));
        assert!(!can_move(&board, Color::Black, None));
    }

    #[test]
    fn blocked_pawn_with_capture_on_either_side() {
        let left = board_with(&["d4"], &["d5", "c5"]);
        assert!(can_move(&left, Color::White, None));

        let right = board_with(&["d4"], &["d5", "e5"]);
        assert!(can_move(&right, Color::White, None));
        assert!(can_move(&right, Color::Black, None));
    }

    #[test]
    fn own_pawns_diagonally_ahead_do_not_count() {
        let board = board_with(&["d4", "c5", "e5"], &["d5", "c6", "e6"]);
        assert!(!pawn_can_move(&board, Color::White, sq("d4"), None));
    }

    #[test]
    fn blocked_edge_pawn() {
        let board = board_with(&["a4"], &["a5"]);
        assert!(!can_move(&board, Color::White, None));
        let board = board_with(&["h4"], &["h5", "g5"]);
        assert!(can_move(&board, Color::White, None));
    }

    #[test]
    fn en_passant_counts_as_a_move() {
        // Black just played b7b5; White's c5 pawn is otherwise stuck.
        let board = board_with(&["c5"], &["c6", "b5"]);
        let ep = EnPassant {
            turn: 0,
            target: sq("b6"),
            victim: sq("b5"),
        };
        assert!(!can_move(&board, Color::White, None));
        assert!(can_move(&board, Color::White, Some(ep)));
    }

    #[test]
    fn en_passant_geometry_ignores_distance_two() {
        let board = board_with(&["d5"], &["d6"]);
        let ep = EnPassant {
            turn: 0,
            target: sq("b6"),
            victim: sq("b5"),
        };
        assert!(!can_move(&board, Color::White, Some(ep)));
    }
}
