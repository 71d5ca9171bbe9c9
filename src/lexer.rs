use crate::diagnostic::Span;
use crate::interpreter::ParserError;
use crate::token::{SpannedToken, Token};

/// A pull-based tokenizer. The parser requests one token at a time; tokens
/// are never materialized into a list up front.
pub struct Lexer<'a> {
    text: &'a str,
    pos: usize,
    current_char: Option<char>,
}

impl<'a> Lexer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            current_char: text.chars().next(),
        }
    }

    /// Byte offset of the next unscanned character.
    pub fn pos(&self) -> usize {
        self.pos
    }

    fn advance(&mut self) {
        if let Some(c) = self.current_char {
            self.pos += c.len_utf8();
            self.current_char = self.text[self.pos..].chars().next();
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.current_char, Some(c) if c.is_whitespace()) {
            self.advance();
        }
    }

    /// Consumes the maximal run of digits starting at the cursor.
    fn integer(&mut self) -> Result<i64, ParserError> {
        let start = self.pos;
        while matches!(self.current_char, Some(c) if c.is_ascii_digit()) {
            self.advance();
        }
        let digits = &self.text[start..self.pos];
        digits.parse().map_err(|_| {
            let character = digits.chars().next().unwrap_or('0');
            ParserError::invalid_token(character, start)
        })
    }

    /// Tokenize the next token in the input string.
    ///
    /// Past the end of input this returns `Eof` and does not advance further.
    pub fn next_token(&mut self) -> Result<SpannedToken, ParserError> {
        self.skip_whitespace();

        let start = self.pos;
        let current = match self.current_char {
            Some(c) => c,
            None => return Ok(SpannedToken::new(Token::Eof, Span::new(start, start))),
        };

        if current.is_ascii_digit() {
            let value = self.integer()?;
            return Ok(SpannedToken::new(
                Token::Integer(value),
                Span::new(start, self.pos),
            ));
        }

        match current {
            '+' => {
                self.advance();
                Ok(SpannedToken::new(Token::Plus, Span::new(start, self.pos)))
            }
            '-' => {
                self.advance();
                Ok(SpannedToken::new(Token::Minus, Span::new(start, self.pos)))
            }
            _ => Err(ParserError::invalid_token(current, start)),
        }
    }
}
