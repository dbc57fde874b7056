//! Movetext grammar: tokens to syntax nodes.
//!
//! Consumes the lexer's token stream into an ordered node sequence.
//! Black-move markers and annotation spans are filtered out up front;
//! they only exist to help the lexer and carry no grammar meaning.

use crate::errors::SyntaxError;
use crate::game_state::chess_types::{PieceKind, Square};
use crate::notation::syntax_node::{HalfMove, PieceMove, SyntaxNode};
use crate::notation::token::{Token, TokenKind};
use crate::utils::algebraic::{file_from_letter, rank_from_digit, square_at};

/// Parse a token stream into the node sequence of one game transcript.
pub fn parse(tokens: Vec<Token>) -> Result<Vec<SyntaxNode>, SyntaxError> {
    let tokens: Vec<Token> = tokens
        .into_iter()
        .filter(|token| {
            !matches!(
                token.kind,
                TokenKind::BlackMoveMarker | TokenKind::Comment(_) | TokenKind::Variation(_)
            )
        })
        .collect();

    Parser { tokens, pos: 0 }.run()
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn run(mut self) -> Result<Vec<SyntaxNode>, SyntaxError> {
        let mut nodes = Vec::new();

        while let Some(token) = self.peek().cloned() {
            match token.kind {
                TokenKind::HeaderDetail { .. } => {
                    self.bump();
                    nodes.push(parse_detail(&token)?);
                }
                TokenKind::MoveNumber(_) => {
                    self.bump();
                    nodes.push(self.parse_move_pair()?);
                }
                TokenKind::Result(result) => {
                    // A result marker closes the movetext.
                    self.bump();
                    nodes.push(SyntaxNode::Result(result));
                    break;
                }
                _ => return Err(unexpected(&token)),
            }
        }

        Ok(nodes)
    }

    /// White half-move plus optional black half-move, terminated by the
    /// next move number, a result, or the end of input.
    fn parse_move_pair(&mut self) -> Result<SyntaxNode, SyntaxError> {
        let white = self.parse_half_move()?;

        let black = if self.at_move_pair_boundary() {
            None
        } else {
            Some(self.parse_half_move()?)
        };

        Ok(SyntaxNode::MovePair { white, black })
    }

    fn at_move_pair_boundary(&self) -> bool {
        match self.peek() {
            None => true,
            Some(token) => matches!(
                token.kind,
                TokenKind::MoveNumber(_) | TokenKind::Result(_)
            ),
        }
    }

    fn parse_half_move(&mut self) -> Result<HalfMove, SyntaxError> {
        let token = self.next_token()?;
        match token.kind {
            TokenKind::CastleKingside => Ok(HalfMove::CastleKingside),
            TokenKind::CastleQueenside => Ok(HalfMove::CastleQueenside),
            TokenKind::Letter(letter) => {
                if let Some(piece) = PieceKind::from_notation_letter(letter) {
                    self.parse_piece_half(piece)
                } else {
                    self.parse_pawn_half(letter, &token)
                }
            }
            _ => Err(unexpected(&token)),
        }
    }

    /// Piece half-move: up to two disambiguating letter/number tokens
    /// before the mandatory target square. The first letter is the
    /// tentative target file; a later letter displaces it into the
    /// origin-file slot. A digit before any letter is the origin rank; a
    /// digit after the target file terminates the half-move.
    fn parse_piece_half(&mut self, piece: PieceKind) -> Result<HalfMove, SyntaxError> {
        let mut origin_file: Option<u8> = None;
        let mut origin_rank: Option<u8> = None;
        let mut target_file: Option<u8> = None;

        loop {
            let token = self.next_token()?;
            match token.kind {
                TokenKind::Letter(letter) => {
                    let file = require_file(letter, &token)?;
                    if let Some(previous) = target_file {
                        origin_file = Some(previous);
                    }
                    target_file = Some(file);
                }
                TokenKind::Number(ref digits) => {
                    let rank = require_rank(digits, &token)?;
                    match target_file {
                        None => origin_rank = Some(rank),
                        Some(file) => {
                            return Ok(HalfMove::Standard(PieceMove {
                                piece,
                                target: square_at(file, rank),
                                origin_file,
                                origin_rank,
                                promotion: None,
                            }));
                        }
                    }
                }
                _ => {
                    return Err(SyntaxError::MissingTargetSquare {
                        line: token.line,
                        column: token.column,
                    });
                }
            }
        }
    }

    /// Pawn half-move: a second file letter means a capture with the
    /// first letter as the origin file; `=` plus a piece letter means a
    /// promotion.
    fn parse_pawn_half(&mut self, first: char, start: &Token) -> Result<HalfMove, SyntaxError> {
        let first_file = require_file(first, start)?;

        let (origin_file, target_file) = match self.peek().cloned() {
            Some(token) => match token.kind {
                TokenKind::Letter(second) => {
                    self.bump();
                    (Some(first_file), require_file(second, &token)?)
                }
                _ => (None, first_file),
            },
            None => return Err(SyntaxError::UnexpectedEnd),
        };

        let rank_token = self.next_token()?;
        let target: Square = match rank_token.kind {
            TokenKind::Number(ref digits) => {
                square_at(target_file, require_rank(digits, &rank_token)?)
            }
            _ => {
                return Err(SyntaxError::MissingTargetSquare {
                    line: rank_token.line,
                    column: rank_token.column,
                });
            }
        };

        let mut promotion = None;
        if matches!(self.peek().map(|token| &token.kind), Some(TokenKind::Equals)) {
            let equals = self.next_token()?;
            let piece_token = self.next_token().map_err(|_| SyntaxError::DanglingPromotion {
                line: equals.line,
                column: equals.column,
            })?;
            promotion = match piece_token.kind {
                TokenKind::Letter(letter) => {
                    Some(PieceKind::from_notation_letter(letter).ok_or(
                        SyntaxError::DanglingPromotion {
                            line: piece_token.line,
                            column: piece_token.column,
                        },
                    )?)
                }
                _ => {
                    return Err(SyntaxError::DanglingPromotion {
                        line: piece_token.line,
                        column: piece_token.column,
                    });
                }
            };
        }

        Ok(HalfMove::Standard(PieceMove {
            piece: PieceKind::Pawn,
            target,
            origin_file,
            origin_rank: None,
            promotion,
        }))
    }

    #[inline]
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    #[inline]
    fn bump(&mut self) {
        self.pos += 1;
    }

    fn next_token(&mut self) -> Result<Token, SyntaxError> {
        let token = self.tokens.get(self.pos).cloned().ok_or(SyntaxError::UnexpectedEnd)?;
        self.pos += 1;
        Ok(token)
    }
}

/// Header details must carry a double-quoted value; the quotes are
/// stripped before the node is stored.
fn parse_detail(token: &Token) -> Result<SyntaxNode, SyntaxError> {
    let TokenKind::HeaderDetail { key, value } = &token.kind else {
        return Err(unexpected(token));
    };

    let trimmed = value.trim();
    if trimmed.len() < 2 || !trimmed.starts_with('"') || !trimmed.ends_with('"') {
        return Err(SyntaxError::UnquotedHeaderValue {
            key: key.clone(),
            line: token.line,
            column: token.column,
        });
    }

    Ok(SyntaxNode::Detail {
        key: key.clone(),
        value: trimmed[1..trimmed.len() - 1].to_owned(),
    })
}

fn require_file(letter: char, token: &Token) -> Result<u8, SyntaxError> {
    file_from_letter(letter).ok_or_else(|| unexpected(token))
}

fn require_rank(digits: &str, token: &Token) -> Result<u8, SyntaxError> {
    let mut chars = digits.chars();
    match (chars.next(), chars.next()) {
        (Some(digit), None) => rank_from_digit(digit).ok_or_else(|| unexpected(token)),
        _ => Err(unexpected(token)),
    }
}

fn unexpected(token: &Token) -> SyntaxError {
    SyntaxError::UnexpectedToken {
        found: token.describe(),
        line: token.line,
        column: token.column,
    }
}

#[cfg(test)]
mod tests {
    use super::parse;
    use crate::errors::SyntaxError;
    use crate::game_state::chess_types::PieceKind;
    use crate::game_state::game_record::GameResult;
    use crate::notation::lexer::tokenize;
    use crate::notation::syntax_node::{HalfMove, PieceMove, SyntaxNode};
    use crate::utils::algebraic::parse_square;

    fn nodes(text: &str) -> Vec<SyntaxNode> {
        parse(tokenize(text).expect("text should tokenize")).expect("text should parse")
    }

    fn standard(node: &HalfMove) -> &PieceMove {
        match node {
            HalfMove::Standard(piece_move) => piece_move,
            other => panic!("expected a standard half-move, got {other:?}"),
        }
    }

    #[test]
    fn header_detail_strips_quotes() {
        assert_eq!(
            nodes("[White \"Player 1\"]"),
            vec![SyntaxNode::Detail {
                key: "White".to_owned(),
                value: "Player 1".to_owned(),
            }]
        );
    }

    #[test]
    fn header_value_without_quotes_is_rejected() {
        let tokens = tokenize("[White Player]").expect("header should tokenize");
        assert!(matches!(
            parse(tokens),
            Err(SyntaxError::UnquotedHeaderValue { .. })
        ));
    }

    #[test]
    fn parses_a_full_move_pair() {
        let parsed = nodes("1. e4 e5");
        assert_eq!(parsed.len(), 1);

        let SyntaxNode::MovePair { white, black } = &parsed[0] else {
            panic!("expected a move pair");
        };
        assert_eq!(
            standard(white).target,
            parse_square("e4").expect("e4 should parse")
        );
        let black = black.as_ref().expect("black half should be present");
        assert_eq!(
            standard(black).target,
            parse_square("e5").expect("e5 should parse")
        );
    }

    #[test]
    fn white_half_alone_leaves_black_absent() {
        let parsed = nodes("1. Nf3");
        let SyntaxNode::MovePair { white, black } = &parsed[0] else {
            panic!("expected a move pair");
        };
        assert_eq!(standard(white).piece, PieceKind::Knight);
        assert!(black.is_none());
    }

    #[test]
    fn black_move_marker_is_grammar_invisible() {
        assert_eq!(nodes("1. e4 1... e5"), nodes("1. e4 e5"));
    }

    #[test]
    fn file_disambiguator_is_displaced_by_the_target_file() {
        let parsed = nodes("1. Nbd2");
        let SyntaxNode::MovePair { white, .. } = &parsed[0] else {
            panic!("expected a move pair");
        };
        let mv = standard(white);
        assert_eq!(mv.piece, PieceKind::Knight);
        assert_eq!(mv.target, parse_square("d2").expect("d2 should parse"));
        assert_eq!(mv.origin_file, Some(1));
        assert_eq!(mv.origin_rank, None);
    }

    #[test]
    fn leading_digit_is_a_rank_disambiguator() {
        let parsed = nodes("1. R1e1");
        let SyntaxNode::MovePair { white, .. } = &parsed[0] else {
            panic!("expected a move pair");
        };
        let mv = standard(white);
        assert_eq!(mv.piece, PieceKind::Rook);
        assert_eq!(mv.target, parse_square("e1").expect("e1 should parse"));
        assert_eq!(mv.origin_rank, Some(0));
        assert_eq!(mv.origin_file, None);
    }

    #[test]
    fn pawn_capture_records_the_origin_file() {
        let parsed = nodes("1. exd5");
        let SyntaxNode::MovePair { white, .. } = &parsed[0] else {
            panic!("expected a move pair");
        };
        let mv = standard(white);
        assert_eq!(mv.piece, PieceKind::Pawn);
        assert_eq!(mv.target, parse_square("d5").expect("d5 should parse"));
        assert_eq!(mv.origin_file, Some(4));
        assert!(mv.names_other_file());
    }

    #[test]
    fn pawn_promotion_fills_its_own_field() {
        let parsed = nodes("1. e8=Q");
        let SyntaxNode::MovePair { white, .. } = &parsed[0] else {
            panic!("expected a move pair");
        };
        let mv = standard(white);
        assert_eq!(mv.promotion, Some(PieceKind::Queen));
        assert_eq!(mv.origin_rank, None);
    }

    #[test]
    fn dangling_promotion_marker_is_rejected() {
        let tokens = tokenize("1. e8=").expect("movetext should tokenize");
        assert!(matches!(
            parse(tokens),
            Err(SyntaxError::DanglingPromotion { .. })
        ));

        let tokens = tokenize("1. e8=3").expect("movetext should tokenize");
        assert!(matches!(
            parse(tokens),
            Err(SyntaxError::DanglingPromotion { .. })
        ));
    }

    #[test]
    fn missing_rank_digit_is_rejected() {
        let tokens = tokenize("1. e").expect("movetext should tokenize");
        assert!(matches!(parse(tokens), Err(SyntaxError::UnexpectedEnd)));

        let tokens = tokenize("1. Ne Nf6").expect("movetext should tokenize");
        assert!(parse(tokens).is_err());
    }

    #[test]
    fn castles_parse_as_half_moves() {
        let parsed = nodes("4. O-O O-O-O");
        let SyntaxNode::MovePair { white, black } = &parsed[0] else {
            panic!("expected a move pair");
        };
        assert_eq!(*white, HalfMove::CastleKingside);
        assert_eq!(*black, Some(HalfMove::CastleQueenside));
    }

    #[test]
    fn result_closes_the_movetext() {
        let parsed = nodes("1. e4 e5 1-0");
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1], SyntaxNode::Result(GameResult::LightWins));
    }

    #[test]
    fn movetext_outside_a_move_number_is_rejected() {
        let tokens = tokenize("e4").expect("movetext should tokenize");
        assert!(matches!(
            parse(tokens),
            Err(SyntaxError::UnexpectedToken { .. })
        ));
    }
}
