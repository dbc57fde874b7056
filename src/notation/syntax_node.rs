//! Parsed syntax units produced by the parser.
//!
//! The node and half-move types are closed unions so the interpretation
//! step can match them exhaustively; no node kind can be silently
//! ignored.

use crate::game_state::chess_types::{PieceKind, Square};
use crate::game_state::game_record::GameResult;
use crate::utils::algebraic::{file_of, rank_of, square_name};

/// A notated move of a single piece (everything except castling).
///
/// The origin-rank disambiguator and the promotion piece are two distinct
/// optional fields; pawn promotions never occupy the rank slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceMove {
    pub piece: PieceKind,
    pub target: Square,
    /// Origin file (`0..=7`) named by the notation, if any.
    pub origin_file: Option<u8>,
    /// Origin rank (`0..=7`) named by the notation, if any.
    pub origin_rank: Option<u8>,
    /// Promotion piece for pawn moves reaching the last rank.
    pub promotion: Option<PieceKind>,
}

impl PieceMove {
    pub fn to_square(piece: PieceKind, target: Square) -> Self {
        Self {
            piece,
            target,
            origin_file: None,
            origin_rank: None,
            promotion: None,
        }
    }

    /// Reconstruct the short algebraic text, used in error messages.
    pub fn notated(&self) -> String {
        let mut out = String::new();
        match self.piece {
            PieceKind::Pawn => {}
            PieceKind::Knight => out.push('N'),
            PieceKind::Bishop => out.push('B'),
            PieceKind::Rook => out.push('R'),
            PieceKind::Queen => out.push('Q'),
            PieceKind::King => out.push('K'),
        }
        if let Some(file) = self.origin_file {
            out.push(char::from(b'a' + file));
        }
        if let Some(rank) = self.origin_rank {
            out.push(char::from(b'1' + rank));
        }
        out.push_str(&square_name(self.target));
        if let Some(promotion) = self.promotion {
            out.push('=');
            out.push(match promotion {
                PieceKind::Knight => 'N',
                PieceKind::Bishop => 'B',
                PieceKind::Rook => 'R',
                PieceKind::Queen => 'Q',
                PieceKind::King => 'K',
                PieceKind::Pawn => 'P',
            });
        }
        out
    }

    /// True when a named origin file differs from the target file, which
    /// in pawn notation means a capture.
    #[inline]
    pub fn names_other_file(&self) -> bool {
        match self.origin_file {
            Some(file) => file != file_of(self.target),
            None => false,
        }
    }

    #[inline]
    pub fn target_file(&self) -> u8 {
        file_of(self.target)
    }

    #[inline]
    pub fn target_rank(&self) -> u8 {
        rank_of(self.target)
    }
}

/// One side's half-move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HalfMove {
    Standard(PieceMove),
    CastleKingside,
    CastleQueenside,
}

impl HalfMove {
    /// Short algebraic text for error messages.
    pub fn notated(&self) -> String {
        match self {
            HalfMove::Standard(piece_move) => piece_move.notated(),
            HalfMove::CastleKingside => "O-O".to_owned(),
            HalfMove::CastleQueenside => "O-O-O".to_owned(),
        }
    }
}

/// One grammatical unit of a game transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxNode {
    /// A header detail with its quote-stripped value.
    Detail { key: String, value: String },
    /// A full move: white half plus optional black half.
    MovePair {
        white: HalfMove,
        black: Option<HalfMove>,
    },
    /// An outcome marker terminating the movetext.
    Result(GameResult),
}
