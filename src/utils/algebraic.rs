//! Square and coordinate conversions for algebraic notation.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and internal
//! square indices, and provides the file/rank arithmetic reused by move
//! resolution, rendering, and error reporting.

use crate::game_state::chess_types::Square;

/// Build a square index from file (`0 == a`) and rank (`0 == rank 1`).
#[inline]
pub const fn square_at(file: u8, rank: u8) -> Square {
    rank * 8 + file
}

/// File component (`0..=7`) of a square index.
#[inline]
pub const fn file_of(square: Square) -> u8 {
    square % 8
}

/// Rank component (`0..=7`) of a square index.
#[inline]
pub const fn rank_of(square: Square) -> u8 {
    square / 8
}

/// Convert a notation file letter (`a..=h`) to a file index.
#[inline]
pub const fn file_from_letter(letter: char) -> Option<u8> {
    match letter {
        'a'..='h' => Some(letter as u8 - b'a'),
        _ => None,
    }
}

/// Convert a notation rank digit (`1..=8`) to a rank index.
#[inline]
pub const fn rank_from_digit(digit: char) -> Option<u8> {
    match digit {
        '1'..='8' => Some(digit as u8 - b'1'),
        _ => None,
    }
}

/// Convert algebraic notation (for example: "e4") to a square index.
pub fn parse_square(text: &str) -> Result<Square, String> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(format!("Invalid algebraic square: {text}"));
    }

    let file = file_from_letter(bytes[0] as char)
        .ok_or_else(|| format!("Invalid algebraic file: {}", bytes[0] as char))?;
    let rank = rank_from_digit(bytes[1] as char)
        .ok_or_else(|| format!("Invalid algebraic rank: {}", bytes[1] as char))?;

    Ok(square_at(file, rank))
}

/// Convert a square index (`0..=63`) to algebraic notation (for example: "e4").
pub fn square_name(square: Square) -> String {
    debug_assert!(square < 64, "square index out of bounds: {square}");

    let file_char = char::from(b'a' + file_of(square));
    let rank_char = char::from(b'1' + rank_of(square));
    format!("{file_char}{rank_char}")
}
