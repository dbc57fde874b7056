//! Pawn origin resolution.
//!
//! Forward moves come from one square behind the target, or two from the
//! home rank through an empty intermediate square. A notated origin file
//! differing from the target file means a capture; a capture onto an
//! empty square is an en passant, and the passed pawn's square travels
//! on the resolved move for the apply step to clear.

use crate::errors::InterpretError;
use crate::game_state::board_snapshot::BoardSnapshot;
use crate::game_state::chess_rules::{pawn_direction, pawn_home_rank};
use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::move_resolution::resolve_shared::{no_origin, offset_square, ResolvedMove};
use crate::notation::syntax_node::PieceMove;
use crate::utils::algebraic::{rank_of, square_at};

pub fn resolve_pawn_move(
    board: &BoardSnapshot,
    side: Color,
    half_move: &PieceMove,
) -> Result<ResolvedMove, InterpretError> {
    if half_move.names_other_file() {
        resolve_capture(board, side, half_move)
    } else {
        resolve_forward(board, side, half_move)
    }
}

fn resolve_forward(
    board: &BoardSnapshot,
    side: Color,
    half_move: &PieceMove,
) -> Result<ResolvedMove, InterpretError> {
    let direction = pawn_direction(side);

    let one_back = offset_square(half_move.target, 0, -direction)
        .ok_or_else(|| no_origin(side, half_move))?;
    if board.holds(one_back, side, PieceKind::Pawn) {
        return Ok(finish(one_back, half_move));
    }

    // Double step: only from the home rank, through an empty square.
    if board.piece_at(one_back).is_none() {
        if let Some(two_back) = offset_square(half_move.target, 0, -2 * direction) {
            if rank_of(two_back) == pawn_home_rank(side)
                && board.holds(two_back, side, PieceKind::Pawn)
            {
                return Ok(finish(two_back, half_move));
            }
        }
    }

    Err(no_origin(side, half_move))
}

fn resolve_capture(
    board: &BoardSnapshot,
    side: Color,
    half_move: &PieceMove,
) -> Result<ResolvedMove, InterpretError> {
    let direction = pawn_direction(side);
    let origin_file = half_move
        .origin_file
        .expect("capture resolution requires a notated origin file");

    let origin_rank = half_move.target_rank() as i8 - direction;
    if !(0..8).contains(&origin_rank) {
        return Err(no_origin(side, half_move));
    }
    let origin = square_at(origin_file, origin_rank as u8);

    if !board.holds(origin, side, PieceKind::Pawn) {
        return Err(no_origin(side, half_move));
    }

    let mut resolved = finish(origin, half_move);
    // A capture onto an empty square is an en passant; the passed pawn
    // sits on the destination file at the origin rank.
    if board.piece_at(half_move.target).is_none() {
        resolved.en_passant_capture = Some(square_at(half_move.target_file(), rank_of(origin)));
    }

    Ok(resolved)
}

fn finish(from: Square, half_move: &PieceMove) -> ResolvedMove {
    let mut resolved = ResolvedMove::plain(from, half_move.target);
    resolved.promotion = half_move.promotion;
    resolved
}
