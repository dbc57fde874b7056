//! Rook origin resolution.
//!
//! Scans the target's rank, then its file, walking outward until a piece
//! is met; intervening pieces block a line. The queen resolver reuses
//! the same straight-line scan.

use crate::errors::InterpretError;
use crate::game_state::board_snapshot::BoardSnapshot;
use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::move_resolution::resolve_shared::{no_origin, scan_lines, ResolvedMove};
use crate::notation::syntax_node::PieceMove;

/// Straight-line scan order: along the rank (west, east), then along the
/// file (south, north). Rank scans running first is the tie-break.
pub const STRAIGHT_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// First straight-line candidate of the given kind with a clear path to
/// the target. Shared with queen resolution.
pub fn straight_line_origin(
    board: &BoardSnapshot,
    side: Color,
    kind: PieceKind,
    half_move: &PieceMove,
) -> Option<Square> {
    scan_lines(board, side, kind, half_move, &STRAIGHT_DIRECTIONS)
}

pub fn resolve_rook_move(
    board: &BoardSnapshot,
    side: Color,
    half_move: &PieceMove,
) -> Result<ResolvedMove, InterpretError> {
    straight_line_origin(board, side, PieceKind::Rook, half_move)
        .map(|from| ResolvedMove::plain(from, half_move.target))
        .ok_or_else(|| no_origin(side, half_move))
}
