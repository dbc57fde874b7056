//! Castle relocations.
//!
//! Castling is a fixed king/rook relocation per side and color. Whether
//! the side may still castle is the interpreter's bookkeeping; this
//! module only knows the squares.

use crate::game_state::chess_types::Color;
use crate::move_resolution::resolve_shared::ResolvedMove;

/// The king move and accompanying rook shift for a castle.
pub fn castle_relocation(side: Color, kingside: bool) -> ResolvedMove {
    let (king_from, king_to, rook_from, rook_to) = match (side, kingside) {
        (Color::Light, true) => (4, 6, 7, 5),
        (Color::Light, false) => (4, 2, 0, 3),
        (Color::Dark, true) => (60, 62, 63, 61),
        (Color::Dark, false) => (60, 58, 56, 59),
    };

    let mut resolved = ResolvedMove::plain(king_from, king_to);
    resolved.rook_shift = Some((rook_from, rook_to));
    resolved
}
