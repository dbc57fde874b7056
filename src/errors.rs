//! Error types for the notation replay pipeline.
//!
//! The three stages fail with three non-overlapping kinds: character-level
//! `LexicalError`, grammar-level `SyntaxError`, and board-level
//! `InterpretError`. Any of them aborts the whole pipeline; `PgnError`
//! is the driver-level sum of the three.

use thiserror::Error;

use crate::game_state::chess_types::{Color, PieceKind};

/// Malformed character-level input, with the source position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexicalError {
    #[error("unknown token '{found}' at line {line}, column {column}")]
    UnknownToken { found: char, line: usize, column: usize },

    #[error("unterminated header detail at line {line}, column {column}")]
    UnterminatedHeader { line: usize, column: usize },

    #[error("unterminated comment at line {line}, column {column}")]
    UnterminatedComment { line: usize, column: usize },

    #[error("unterminated variation at line {line}, column {column}")]
    UnterminatedVariation { line: usize, column: usize },

    #[error("malformed castle token at line {line}, column {column}")]
    MalformedCastle { line: usize, column: usize },
}

/// Token sequence does not match the header or movetext grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("header value for '{key}' is not a double-quoted string (line {line}, column {column})")]
    UnquotedHeaderValue { key: String, line: usize, column: usize },

    #[error("half-move is missing its target square at line {line}, column {column}")]
    MissingTargetSquare { line: usize, column: usize },

    #[error("promotion marker without a piece letter at line {line}, column {column}")]
    DanglingPromotion { line: usize, column: usize },

    #[error("unexpected {found} at line {line}, column {column}")]
    UnexpectedToken { found: String, line: usize, column: usize },

    #[error("movetext ended in the middle of a half-move")]
    UnexpectedEnd,
}

/// Grammatically valid half-move that cannot be resolved against the
/// current position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterpretError {
    #[error("no {side} {piece} can reach {target} ({notated})")]
    NoOrigin {
        side: Color,
        piece: PieceKind,
        target: String,
        notated: String,
    },

    #[error("cannot castle: the {side} king has already moved")]
    KingAlreadyMoved { side: Color },
}

/// Driver-level failure: any stage aborting the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PgnError {
    #[error(transparent)]
    Lexical(#[from] LexicalError),

    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Interpret(#[from] InterpretError),
}
