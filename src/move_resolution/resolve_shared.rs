//! Shared plumbing for the per-piece origin resolvers.
//!
//! `ResolvedMove` is the explicit hand-off between resolution and the
//! apply step: everything a half-move changes on the board, including an
//! en-passant victim square or a castle's rook relocation, travels in
//! this value rather than in shared mutable state.

use crate::errors::InterpretError;
use crate::game_state::board_snapshot::BoardSnapshot;
use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::notation::syntax_node::PieceMove;
use crate::utils::algebraic::{file_of, rank_of, square_at, square_name};

/// A fully resolved half-move, ready to be applied to a working snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedMove {
    pub from: Square,
    pub to: Square,
    /// Piece written to the destination instead of the mover.
    pub promotion: Option<PieceKind>,
    /// Square of a pawn captured en passant, cleared on apply.
    pub en_passant_capture: Option<Square>,
    /// Rook relocation accompanying a castle.
    pub rook_shift: Option<(Square, Square)>,
}

impl ResolvedMove {
    /// A plain relocation with no side effects.
    #[inline]
    pub const fn plain(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
            en_passant_capture: None,
            rook_shift: None,
        }
    }
}

/// True when a candidate origin square satisfies the notation's
/// disambiguators.
#[inline]
pub fn matches_hints(square: Square, origin_file: Option<u8>, origin_rank: Option<u8>) -> bool {
    if let Some(file) = origin_file {
        if file_of(square) != file {
            return false;
        }
    }
    if let Some(rank) = origin_rank {
        if rank_of(square) != rank {
            return false;
        }
    }
    true
}

/// Step from a square by file/rank deltas, staying on the board.
#[inline]
pub fn offset_square(square: Square, file_delta: i8, rank_delta: i8) -> Option<Square> {
    let file = file_of(square) as i8 + file_delta;
    let rank = rank_of(square) as i8 + rank_delta;
    if (0..8).contains(&file) && (0..8).contains(&rank) {
        Some(square_at(file as u8, rank as u8))
    } else {
        None
    }
}

/// Walk outward from the target along each direction in order. The first
/// occupied square on a line either is the candidate (right color and
/// kind, disambiguators match) or blocks that line; a candidate failing
/// only disambiguation is skipped, never a conflict. The direction order
/// is the tie-break when the notation underdetermines the origin.
pub fn scan_lines(
    board: &BoardSnapshot,
    side: Color,
    kind: PieceKind,
    half_move: &PieceMove,
    directions: &[(i8, i8)],
) -> Option<Square> {
    for &(file_delta, rank_delta) in directions {
        let mut square = half_move.target;
        while let Some(next) = offset_square(square, file_delta, rank_delta) {
            square = next;
            let Some(piece) = board.piece_at(square) else {
                continue;
            };
            if piece.color == side
                && piece.kind == kind
                && matches_hints(square, half_move.origin_file, half_move.origin_rank)
            {
                return Some(square);
            }
            break;
        }
    }
    None
}

/// The failure for a half-move with no origin candidate.
pub fn no_origin(side: Color, half_move: &PieceMove) -> InterpretError {
    InterpretError::NoOrigin {
        side,
        piece: half_move.piece,
        target: square_name(half_move.target),
        notated: half_move.notated(),
    }
}
