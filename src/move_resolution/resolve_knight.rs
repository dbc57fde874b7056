//! Knight origin resolution.
//!
//! A knight that can reach the target must stand on one of the eight
//! knight offsets from it, so candidates are enumerated directly.

use crate::errors::InterpretError;
use crate::game_state::board_snapshot::BoardSnapshot;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::move_resolution::resolve_shared::{
    matches_hints, no_origin, offset_square, ResolvedMove,
};
use crate::notation::syntax_node::PieceMove;

/// Knight offset enumeration order; the first surviving candidate wins
/// when disambiguation leaves more than one.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
];

pub fn resolve_knight_move(
    board: &BoardSnapshot,
    side: Color,
    half_move: &PieceMove,
) -> Result<ResolvedMove, InterpretError> {
    for (file_delta, rank_delta) in KNIGHT_OFFSETS {
        let Some(candidate) = offset_square(half_move.target, file_delta, rank_delta) else {
            continue;
        };
        if board.holds(candidate, side, PieceKind::Knight)
            && matches_hints(candidate, half_move.origin_file, half_move.origin_rank)
        {
            return Ok(ResolvedMove::plain(candidate, half_move.target));
        }
    }

    Err(no_origin(side, half_move))
}
