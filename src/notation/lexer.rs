//! PGN movetext and header lexer.
//!
//! Walks the raw text one character at a time, tracking line and column
//! for error reporting, and emits the token stream consumed by the
//! parser. Lookahead-dependent cases (result literals, black-move
//! markers) use an explicit cursor checkpoint that is committed on a
//! full match and rewound otherwise.

use crate::errors::LexicalError;
use crate::game_state::game_record::GameResult;
use crate::notation::token::{Token, TokenKind};

/// Saved cursor state for bounded backtracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    pos: usize,
    line: usize,
    column: usize,
}

/// Character cursor over the notation text.
pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    column: usize,
    preserve_annotations: bool,
}

/// Tokenize notation text with the default lexer (annotation spans are
/// consumed and discarded).
pub fn tokenize(text: &str) -> Result<Vec<Token>, LexicalError> {
    Lexer::new(text).run()
}

impl Lexer {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
            preserve_annotations: false,
        }
    }

    /// Emit `Comment`/`Variation` tokens instead of discarding the spans.
    /// The parser ignores them either way.
    pub fn preserving_annotations(mut self) -> Self {
        self.preserve_annotations = true;
        self
    }

    /// Consume the whole input and return the token stream.
    pub fn run(mut self) -> Result<Vec<Token>, LexicalError> {
        let mut tokens = Vec::new();

        while let Some(ch) = self.peek() {
            let line = self.line;
            let column = self.column;

            match ch {
                ' ' | '\t' | '\r' | '\n' => {
                    self.advance();
                }
                // Annotation noise carries no grammar meaning.
                '+' | '#' | '!' | '?' | 'x' => {
                    self.advance();
                }
                '[' => {
                    self.advance();
                    let (key, value) = self.read_header_detail(line, column)?;
                    tokens.push(Token::new(TokenKind::HeaderDetail { key, value }, line, column));
                }
                '{' => {
                    self.advance();
                    let text = self.read_comment_span(line, column)?;
                    if self.preserve_annotations {
                        tokens.push(Token::new(TokenKind::Comment(text), line, column));
                    }
                }
                '(' => {
                    self.advance();
                    let text = self.read_variation_span(line, column)?;
                    if self.preserve_annotations {
                        tokens.push(Token::new(TokenKind::Variation(text), line, column));
                    }
                }
                'O' | 'o' => {
                    let kind = self.read_castle(line, column)?;
                    tokens.push(Token::new(kind, line, column));
                }
                '0'..='9' => {
                    let kind = self.read_numeric();
                    tokens.push(Token::new(kind, line, column));
                }
                '.' => {
                    self.advance();
                    tokens.push(Token::new(TokenKind::Dot, line, column));
                }
                '/' => {
                    self.advance();
                    tokens.push(Token::new(TokenKind::Slash, line, column));
                }
                '=' => {
                    self.advance();
                    tokens.push(Token::new(TokenKind::Equals, line, column));
                }
                letter if letter.is_ascii_alphabetic() => {
                    self.advance();
                    tokens.push(Token::new(TokenKind::Letter(letter), line, column));
                }
                other => {
                    return Err(LexicalError::UnknownToken {
                        found: other,
                        line,
                        column,
                    });
                }
            }
        }

        Ok(tokens)
    }

    /// Save the cursor so a speculative scan can be rewound.
    #[inline]
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            pos: self.pos,
            line: self.line,
            column: self.column,
        }
    }

    /// Rewind the cursor to a previously saved checkpoint.
    #[inline]
    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.pos = checkpoint.pos;
        self.line = checkpoint.line;
        self.column = checkpoint.column;
    }

    #[inline]
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    #[inline]
    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += 1;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    /// Greedy digit run, then the dot / result lookahead.
    fn read_numeric(&mut self) -> TokenKind {
        let mut digits = String::new();
        while let Some(ch) = self.peek() {
            if !ch.is_ascii_digit() {
                break;
            }
            digits.push(ch);
            self.advance();
        }

        if self.peek() == Some('.') {
            self.advance();
            // Three dots in a row mark a black half-move; the numeral is
            // only a visual aid and is dropped.
            if self.peek() == Some('.') && self.peek_at(1) == Some('.') {
                self.advance();
                self.advance();
                return TokenKind::BlackMoveMarker;
            }
            return TokenKind::MoveNumber(digits);
        }

        if digits == "0" || digits == "1" {
            if let Some(result) = self.try_result_literal(&digits) {
                return TokenKind::Result(result);
            }
        }

        TokenKind::Number(digits)
    }

    /// Speculative result-literal scan starting after a lone `0` or `1`.
    ///
    /// The cursor is checkpointed first; it only moves past the literal
    /// when the full pattern matches, otherwise it is restored and the
    /// numeral falls through as a plain number token.
    fn try_result_literal(&mut self, first: &str) -> Option<GameResult> {
        let checkpoint = self.checkpoint();
        let result = self.scan_result_tail(first);
        if result.is_none() {
            self.restore(checkpoint);
        }
        result
    }

    fn scan_result_tail(&mut self, first: &str) -> Option<GameResult> {
        match first {
            "1" => {
                self.skip_interior_spaces();
                match self.peek()? {
                    '-' => {
                        self.advance();
                        self.skip_interior_spaces();
                        self.expect_literal_char('0')?;
                        Some(GameResult::LightWins)
                    }
                    '/' => {
                        for expected in ['/', '2', '-', '1', '/', '2'] {
                            self.skip_interior_spaces();
                            self.expect_literal_char(expected)?;
                        }
                        Some(GameResult::Draw)
                    }
                    _ => None,
                }
            }
            "0" => {
                self.skip_interior_spaces();
                self.expect_literal_char('-')?;
                self.skip_interior_spaces();
                self.expect_literal_char('1')?;
                Some(GameResult::DarkWins)
            }
            _ => None,
        }
    }

    fn expect_literal_char(&mut self, expected: char) -> Option<()> {
        if self.peek()? == expected {
            self.advance();
            Some(())
        } else {
            None
        }
    }

    /// Result literals tolerate interior spaces (`1 - 0`).
    fn skip_interior_spaces(&mut self) {
        while self.peek() == Some(' ') {
            self.advance();
        }
    }

    /// Header section: unquoted key up to the first space, then the raw
    /// remainder up to the matching `]`. A newline before the close is a
    /// fatal unterminated-header error.
    fn read_header_detail(
        &mut self,
        line: usize,
        column: usize,
    ) -> Result<(String, String), LexicalError> {
        let mut key = String::new();
        loop {
            match self.peek() {
                None | Some('\n') => {
                    return Err(LexicalError::UnterminatedHeader { line, column });
                }
                Some(']') => {
                    self.advance();
                    return Ok((key, String::new()));
                }
                Some(' ') => {
                    self.advance();
                    break;
                }
                Some(ch) => {
                    key.push(ch);
                    self.advance();
                }
            }
        }

        let mut value = String::new();
        loop {
            match self.peek() {
                None | Some('\n') => {
                    return Err(LexicalError::UnterminatedHeader { line, column });
                }
                Some(']') => {
                    self.advance();
                    return Ok((key, value));
                }
                Some(ch) => {
                    value.push(ch);
                    self.advance();
                }
            }
        }
    }

    /// Case-insensitive `O-O` / `O-O-O`; any deviation from the exact
    /// dash-delimited pattern is fatal.
    fn read_castle(&mut self, line: usize, column: usize) -> Result<TokenKind, LexicalError> {
        self.advance();
        self.expect_castle_dash(line, column)?;
        self.expect_castle_o(line, column)?;

        if self.peek() == Some('-') {
            self.advance();
            self.expect_castle_o(line, column)?;
            return Ok(TokenKind::CastleQueenside);
        }

        Ok(TokenKind::CastleKingside)
    }

    fn expect_castle_dash(&mut self, line: usize, column: usize) -> Result<(), LexicalError> {
        if self.peek() == Some('-') {
            self.advance();
            Ok(())
        } else {
            Err(LexicalError::MalformedCastle { line, column })
        }
    }

    fn expect_castle_o(&mut self, line: usize, column: usize) -> Result<(), LexicalError> {
        match self.peek() {
            Some('O') | Some('o') => {
                self.advance();
                Ok(())
            }
            _ => Err(LexicalError::MalformedCastle { line, column }),
        }
    }

    /// `{...}` span. Comments are single-line: a newline before the close
    /// is fatal, as is running out of input.
    fn read_comment_span(&mut self, line: usize, column: usize) -> Result<String, LexicalError> {
        let mut text = String::new();
        loop {
            match self.peek() {
                None | Some('\n') => {
                    return Err(LexicalError::UnterminatedComment { line, column });
                }
                Some('}') => {
                    self.advance();
                    return Ok(text);
                }
                Some(ch) => {
                    text.push(ch);
                    self.advance();
                }
            }
        }
    }

    /// `(...)` span, honoring nested parentheses. Only running out of
    /// input is fatal; variations may span lines.
    fn read_variation_span(&mut self, line: usize, column: usize) -> Result<String, LexicalError> {
        let mut text = String::new();
        let mut depth = 1usize;
        loop {
            match self.peek() {
                None => {
                    return Err(LexicalError::UnterminatedVariation { line, column });
                }
                Some('(') => {
                    depth += 1;
                    text.push('(');
                    self.advance();
                }
                Some(')') => {
                    depth -= 1;
                    self.advance();
                    if depth == 0 {
                        return Ok(text);
                    }
                    text.push(')');
                }
                Some(ch) => {
                    text.push(ch);
                    self.advance();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{tokenize, Lexer};
    use crate::errors::LexicalError;
    use crate::game_state::game_record::GameResult;
    use crate::notation::token::TokenKind;

    fn kinds(text: &str) -> Vec<TokenKind> {
        tokenize(text)
            .expect("text should tokenize")
            .into_iter()
            .map(|token| token.kind)
            .collect()
    }

    #[test]
    fn tokenizes_a_simple_move_pair() {
        assert_eq!(
            kinds("1. e4 e5"),
            vec![
                TokenKind::MoveNumber("1".to_owned()),
                TokenKind::Letter('e'),
                TokenKind::Number("4".to_owned()),
                TokenKind::Letter('e'),
                TokenKind::Number("5".to_owned()),
            ]
        );
    }

    #[test]
    fn three_dots_become_a_black_move_marker() {
        assert_eq!(
            kinds("12... e5"),
            vec![
                TokenKind::BlackMoveMarker,
                TokenKind::Letter('e'),
                TokenKind::Number("5".to_owned()),
            ]
        );
    }

    #[test]
    fn numeral_with_two_dots_stays_a_move_number() {
        assert_eq!(
            kinds("1.."),
            vec![TokenKind::MoveNumber("1".to_owned()), TokenKind::Dot]
        );
    }

    #[test]
    fn result_literals_are_recognized() {
        assert_eq!(kinds("1-0"), vec![TokenKind::Result(GameResult::LightWins)]);
        assert_eq!(kinds("0-1"), vec![TokenKind::Result(GameResult::DarkWins)]);
        assert_eq!(kinds("1/2-1/2"), vec![TokenKind::Result(GameResult::Draw)]);
    }

    #[test]
    fn result_scan_tolerates_interior_spaces() {
        assert_eq!(kinds("1 - 0"), vec![TokenKind::Result(GameResult::LightWins)]);
        assert_eq!(kinds("1 / 2 - 1 / 2"), vec![TokenKind::Result(GameResult::Draw)]);
    }

    #[test]
    fn failed_result_scan_rewinds_to_a_plain_number() {
        // "1" followed by a letter is rank-disambiguator territory, so the
        // speculative scan must leave the cursor exactly after the numeral.
        assert_eq!(
            kinds("R1e1"),
            vec![
                TokenKind::Letter('R'),
                TokenKind::Number("1".to_owned()),
                TokenKind::Letter('e'),
                TokenKind::Number("1".to_owned()),
            ]
        );
        assert_eq!(kinds("10"), vec![TokenKind::Number("10".to_owned())]);
    }

    #[test]
    fn checkpoint_restore_round_trips_the_cursor() {
        let mut lexer = Lexer::new("abc\ndef");
        let saved = lexer.checkpoint();

        for _ in 0..5 {
            lexer.advance();
        }
        assert_eq!(lexer.line, 2);

        lexer.restore(saved);
        assert_eq!(lexer.pos, 0);
        assert_eq!(lexer.line, 1);
        assert_eq!(lexer.column, 1);
    }

    #[test]
    fn header_detail_keeps_the_raw_value() {
        assert_eq!(
            kinds("[White \"Player 1\"]"),
            vec![TokenKind::HeaderDetail {
                key: "White".to_owned(),
                value: "\"Player 1\"".to_owned(),
            }]
        );
    }

    #[test]
    fn newline_inside_a_header_is_fatal() {
        let err = tokenize("[White \"Player\n\"]").expect_err("header should fail");
        assert_eq!(err, LexicalError::UnterminatedHeader { line: 1, column: 1 });
    }

    #[test]
    fn castle_tokens_are_case_insensitive() {
        assert_eq!(kinds("O-O"), vec![TokenKind::CastleKingside]);
        assert_eq!(kinds("o-o-o"), vec![TokenKind::CastleQueenside]);
        assert_eq!(kinds("O-O-O"), vec![TokenKind::CastleQueenside]);
    }

    #[test]
    fn malformed_castles_are_fatal() {
        assert!(matches!(
            tokenize("O-"),
            Err(LexicalError::MalformedCastle { .. })
        ));
        assert!(matches!(
            tokenize("OO"),
            Err(LexicalError::MalformedCastle { .. })
        ));
        assert!(matches!(
            tokenize("O-x"),
            Err(LexicalError::MalformedCastle { .. })
        ));
    }

    #[test]
    fn annotation_noise_is_discarded() {
        assert_eq!(
            kinds("exd5+!?"),
            vec![
                TokenKind::Letter('e'),
                TokenKind::Letter('d'),
                TokenKind::Number("5".to_owned()),
            ]
        );
    }

    #[test]
    fn comment_and_variation_spans_are_invisible_by_default() {
        assert_eq!(
            kinds("e4 {best by test} (1. c4 (1. d4))"),
            vec![TokenKind::Letter('e'), TokenKind::Number("4".to_owned())]
        );
    }

    #[test]
    fn annotation_spans_can_be_preserved() {
        let tokens = Lexer::new("{note} (line)")
            .preserving_annotations()
            .run()
            .expect("text should tokenize");
        let kinds: Vec<TokenKind> = tokens.into_iter().map(|token| token.kind).collect();

        assert_eq!(
            kinds,
            vec![
                TokenKind::Comment("note".to_owned()),
                TokenKind::Variation("line".to_owned()),
            ]
        );
    }

    #[test]
    fn unterminated_spans_are_fatal() {
        assert!(matches!(
            tokenize("{no close\n}"),
            Err(LexicalError::UnterminatedComment { .. })
        ));
        assert!(matches!(
            tokenize("(never closed"),
            Err(LexicalError::UnterminatedVariation { .. })
        ));
        assert!(matches!(
            tokenize("(outer (inner)"),
            Err(LexicalError::UnterminatedVariation { .. })
        ));
    }

    #[test]
    fn unknown_characters_report_their_position() {
        let err = tokenize("1. e4\n$2").expect_err("unknown character should fail");
        assert_eq!(
            err,
            LexicalError::UnknownToken {
                found: '$',
                line: 2,
                column: 1,
            }
        );
    }
}
