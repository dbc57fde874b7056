//! Canonical chess-rule constants.
//!
//! This module stores static rule-related literals such as the standard
//! back-rank piece order and per-color home ranks used to build the starting
//! position and to resolve pawn double steps.

use crate::game_state::chess_types::{Color, PieceKind};

/// Standard back-rank piece order from file a to file h.
pub const BACK_RANK_ORDER: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Rank index (`0..=7`) of a color's back rank.
#[inline]
pub const fn back_rank(color: Color) -> u8 {
    match color {
        Color::Light => 0,
        Color::Dark => 7,
    }
}

/// Rank index (`0..=7`) of a color's pawn home rank.
#[inline]
pub const fn pawn_home_rank(color: Color) -> u8 {
    match color {
        Color::Light => 1,
        Color::Dark => 6,
    }
}

/// Forward rank direction for a color's pawns (`+1` up the board for light).
#[inline]
pub const fn pawn_direction(color: Color) -> i8 {
    match color {
        Color::Light => 1,
        Color::Dark => -1,
    }
}
