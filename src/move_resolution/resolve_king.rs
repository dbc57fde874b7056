//! King origin resolution.
//!
//! The king must stand on one of the eight neighbors of the target.
//! Board legality is assumed, so the first king of the moving color
//! found in neighbor order is taken without further checks.

use crate::errors::InterpretError;
use crate::game_state::board_snapshot::BoardSnapshot;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::move_resolution::resolve_shared::{no_origin, offset_square, ResolvedMove};
use crate::notation::syntax_node::PieceMove;

/// Neighbor enumeration order around the target square.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

pub fn resolve_king_move(
    board: &BoardSnapshot,
    side: Color,
    half_move: &PieceMove,
) -> Result<ResolvedMove, InterpretError> {
    for (file_delta, rank_delta) in KING_OFFSETS {
        let Some(candidate) = offset_square(half_move.target, file_delta, rank_delta) else {
            continue;
        };
        if board.holds(candidate, side, PieceKind::King) {
            return Ok(ResolvedMove::plain(candidate, half_move.target));
        }
    }

    Err(no_origin(side, half_move))
}
