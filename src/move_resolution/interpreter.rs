//! Node-sequence interpretation: moves in, snapshots out.
//!
//! The interpreter walks the parsed nodes with an exhaustive match,
//! resolving each half-move against the latest snapshot and appending
//! the result to the game record's history. It owns the only transient
//! engine state: the per-color king-moved flags, scoped to one record.

use crate::errors::InterpretError;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::game_state::game_record::GameRecord;
use crate::move_resolution::move_apply::apply_resolved;
use crate::move_resolution::resolve_bishop::resolve_bishop_move;
use crate::move_resolution::resolve_castle::castle_relocation;
use crate::move_resolution::resolve_king::resolve_king_move;
use crate::move_resolution::resolve_knight::resolve_knight_move;
use crate::move_resolution::resolve_pawn::resolve_pawn_move;
use crate::move_resolution::resolve_queen::resolve_queen_move;
use crate::move_resolution::resolve_rook::resolve_rook_move;
use crate::move_resolution::resolve_shared::ResolvedMove;
use crate::notation::syntax_node::{HalfMove, PieceMove, SyntaxNode};

/// Replays one node sequence into a game record.
pub struct Interpreter {
    record: GameRecord,
    king_moved: [bool; 2],
}

impl Interpreter {
    pub fn new() -> Self {
        Self {
            record: GameRecord::new(),
            king_moved: [false, false],
        }
    }

    /// Walk the whole node sequence and yield the finished record.
    ///
    /// Any failure aborts the replay; no partial record is returned.
    pub fn run(mut self, nodes: &[SyntaxNode]) -> Result<GameRecord, InterpretError> {
        for node in nodes {
            match node {
                SyntaxNode::Detail { key, value } => {
                    self.record.header.insert(key.to_lowercase(), value.clone());
                }
                SyntaxNode::MovePair { white, black } => {
                    self.apply_half_move(Color::Light, white)?;
                    if let Some(black) = black {
                        self.apply_half_move(Color::Dark, black)?;
                    }
                }
                SyntaxNode::Result(result) => {
                    self.record.result = *result;
                }
            }
        }

        Ok(self.record)
    }

    fn apply_half_move(&mut self, side: Color, half_move: &HalfMove) -> Result<(), InterpretError> {
        let resolved = match half_move {
            HalfMove::CastleKingside => self.resolve_castle(side, true)?,
            HalfMove::CastleQueenside => self.resolve_castle(side, false)?,
            HalfMove::Standard(piece_move) => self.resolve_standard(side, piece_move)?,
        };

        let mut working = self.record.fresh();
        apply_resolved(&mut working, &resolved);
        self.record.append(working);

        log::trace!(
            "applied {} for {side}, history length {}",
            half_move.notated(),
            self.record.history.len()
        );
        Ok(())
    }

    /// Castling only checks the king-moved flag; rook history and square
    /// attacks are outside the notation contract.
    fn resolve_castle(
        &mut self,
        side: Color,
        kingside: bool,
    ) -> Result<ResolvedMove, InterpretError> {
        if self.king_moved[side.index()] {
            return Err(InterpretError::KingAlreadyMoved { side });
        }
        self.king_moved[side.index()] = true;
        Ok(castle_relocation(side, kingside))
    }

    fn resolve_standard(
        &mut self,
        side: Color,
        piece_move: &PieceMove,
    ) -> Result<ResolvedMove, InterpretError> {
        let board = self.record.latest();
        match piece_move.piece {
            PieceKind::Pawn => resolve_pawn_move(board, side, piece_move),
            PieceKind::Knight => resolve_knight_move(board, side, piece_move),
            PieceKind::Bishop => resolve_bishop_move(board, side, piece_move),
            PieceKind::Rook => resolve_rook_move(board, side, piece_move),
            PieceKind::Queen => resolve_queen_move(board, side, piece_move),
            PieceKind::King => {
                let resolved = resolve_king_move(board, side, piece_move);
                if resolved.is_ok() {
                    self.king_moved[side.index()] = true;
                }
                resolved
            }
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::Interpreter;
    use crate::errors::InterpretError;
    use crate::game_state::chess_types::{Color, PieceKind};
    use crate::game_state::game_record::GameResult;
    use crate::notation::lexer::tokenize;
    use crate::notation::parser::parse;
    use crate::notation::syntax_node::SyntaxNode;
    use crate::utils::algebraic::parse_square;

    fn nodes(text: &str) -> Vec<SyntaxNode> {
        parse(tokenize(text).expect("text should tokenize")).expect("text should parse")
    }

    #[test]
    fn each_half_move_appends_one_snapshot() {
        let record = Interpreter::new()
            .run(&nodes("1. e4 e5 2. Nf3"))
            .expect("movetext should interpret");

        assert_eq!(record.history.len(), 4);
        assert_eq!(record.half_move_count(), 3);
    }

    #[test]
    fn header_keys_are_lowercased() {
        let record = Interpreter::new()
            .run(&nodes("[White \"Player 1\"]\n[Black \"Player 2\"]"))
            .expect("headers should interpret");

        assert_eq!(record.header.get("white").map(String::as_str), Some("Player 1"));
        assert_eq!(record.header.get("black").map(String::as_str), Some("Player 2"));
    }

    #[test]
    fn result_node_sets_the_record_result() {
        let record = Interpreter::new()
            .run(&nodes("1. e4 e5 1/2-1/2"))
            .expect("movetext should interpret");
        assert_eq!(record.result, GameResult::Draw);
    }

    #[test]
    fn second_castle_for_the_same_side_is_rejected() {
        // Kingside knights and bishops are cleared out of the way first.
        let text = "1. Nf3 Nf6 2. e4 e6 3. Be2 Be7 4. O-O O-O 5. O-O";
        let err = Interpreter::new()
            .run(&nodes(text))
            .expect_err("second castle should fail");

        assert_eq!(err, InterpretError::KingAlreadyMoved { side: Color::Light });
    }

    #[test]
    fn a_king_move_also_blocks_a_later_castle() {
        let text = "1. e4 e5 2. Ke2 Nf6 3. Ke1 Ng8 4. Nf3 Nf6 5. Be2 Be7 6. O-O";
        let err = Interpreter::new()
            .run(&nodes(text))
            .expect_err("castle after a king move should fail");
        assert_eq!(err, InterpretError::KingAlreadyMoved { side: Color::Light });
    }

    #[test]
    fn unresolvable_moves_name_the_half_move() {
        let err = Interpreter::new()
            .run(&nodes("1. Nc4"))
            .expect_err("unreachable knight target should fail");

        match err {
            InterpretError::NoOrigin { side, piece, target, notated } => {
                assert_eq!(side, Color::Light);
                assert_eq!(piece, PieceKind::Knight);
                assert_eq!(target, "c4");
                assert_eq!(notated, "Nc4");
            }
            other => panic!("expected NoOrigin, got {other:?}"),
        }
    }

    #[test]
    fn castle_updates_both_king_and_rook_cells() {
        let record = Interpreter::new()
            .run(&nodes("1. Nf3 Nf6 2. e3 e6 3. Be2 Be7 4. O-O"))
            .expect("castle should interpret");

        let board = record.latest();
        let g1 = parse_square("g1").expect("g1 should parse");
        let f1 = parse_square("f1").expect("f1 should parse");
        assert!(board.holds(g1, Color::Light, PieceKind::King));
        assert!(board.holds(f1, Color::Light, PieceKind::Rook));
    }
}
