//! PGN replay driver.
//!
//! Wires the three pipeline stages together: raw text is tokenized,
//! parsed into nodes, and interpreted into a game record holding the
//! position after every half-move. The computation is synchronous and
//! atomic: it yields one finished record or one typed error.

use crate::errors::PgnError;
use crate::game_state::game_record::GameRecord;
use crate::move_resolution::interpreter::Interpreter;
use crate::notation::lexer::tokenize;
use crate::notation::parser::parse;

/// Replay a complete game transcript into its snapshot history.
pub fn read_pgn(text: &str) -> Result<GameRecord, PgnError> {
    let tokens = tokenize(text)?;
    log::debug!("lexed {} tokens", tokens.len());

    let nodes = parse(tokens)?;
    log::debug!("parsed {} nodes", nodes.len());

    let record = Interpreter::new().run(&nodes)?;
    log::debug!(
        "replayed {} half-moves, result {}",
        record.half_move_count(),
        record.result
    );

    Ok(record)
}
