//! Queen origin resolution.
//!
//! A queen moves like a rook or a bishop, so resolution tries the
//! straight-line scan first and falls back to the diagonal scan.

use crate::errors::InterpretError;
use crate::game_state::board_snapshot::BoardSnapshot;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::move_resolution::resolve_bishop::diagonal_origin;
use crate::move_resolution::resolve_rook::straight_line_origin;
use crate::move_resolution::resolve_shared::{no_origin, ResolvedMove};
use crate::notation::syntax_node::PieceMove;

pub fn resolve_queen_move(
    board: &BoardSnapshot,
    side: Color,
    half_move: &PieceMove,
) -> Result<ResolvedMove, InterpretError> {
    straight_line_origin(board, side, PieceKind::Queen, half_move)
        .or_else(|| diagonal_origin(board, side, PieceKind::Queen, half_move))
        .map(|from| ResolvedMove::plain(from, half_move.target))
        .ok_or_else(|| no_origin(side, half_move))
}
