use super::error::ParserError;
use crate::diagnostic::{Diagnostic, Span};
use crate::lexer::Lexer;
use crate::token::{SpannedToken, Token, TokenKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BinaryOp {
    Add,
    Sub,
}

/// An interpreter for a simple calculator.
///
/// Recognition and evaluation are fused: the grammar is enforced token by
/// token and the result is folded as operands are matched, with no
/// intermediate syntax tree. One instance handles exactly one input string
/// for exactly one `parse` call.
pub struct Interpreter<'a> {
    lexer: Lexer<'a>,
    current_token: Option<SpannedToken>,
}

impl<'a> Interpreter<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lexer: Lexer::new(text),
            current_token: None,
        }
    }

    fn current_kind(&self) -> TokenKind {
        self.current_token
            .as_ref()
            .map(SpannedToken::kind)
            .unwrap_or(TokenKind::Eof)
    }

    /// Consume the current token if its kind matches `expected`, advancing
    /// the lookahead to the next token from the lexer. On a mismatch the
    /// current token is left in place.
    fn consume(&mut self, expected: TokenKind) -> Result<SpannedToken, ParserError> {
        match self.current_token.take() {
            Some(token) if token.kind() == expected => {
                self.current_token = Some(self.lexer.next_token()?);
                Ok(token)
            }
            Some(token) => {
                let err = ParserError::unexpected_token(expected, token.kind(), token.span);
                self.current_token = Some(token);
                Err(err)
            }
            None => {
                let pos = self.lexer.pos();
                Err(ParserError::unexpected_token(
                    expected,
                    TokenKind::Eof,
                    Span::new(pos, pos),
                ))
            }
        }
    }

    fn integer(&mut self) -> Result<i64, ParserError> {
        let token = self.consume(TokenKind::Integer)?;
        match token.token {
            Token::Integer(value) => Ok(value),
            // consume only returns a token of the expected kind
            other => Err(ParserError::unexpected_token(
                TokenKind::Integer,
                other.kind(),
                token.span,
            )),
        }
    }

    fn operator(&mut self) -> Result<BinaryOp, ParserError> {
        match self.current_kind() {
            TokenKind::Minus => {
                self.consume(TokenKind::Minus)?;
                Ok(BinaryOp::Sub)
            }
            // Anything other than an operator is reported against the PLUS
            // expectation.
            _ => {
                self.consume(TokenKind::Plus)?;
                Ok(BinaryOp::Add)
            }
        }
    }

    /// Parse and evaluate one arithmetic expression.
    ///
    /// The grammar at this revision is `INTEGER (PLUS | MINUS) INTEGER`.
    /// Trailing input past the right operand is not inspected.
    pub fn parse(&mut self) -> Result<i64, ParserError> {
        self.current_token = Some(self.lexer.next_token()?);

        let left = self.integer()?;
        let operator = self.operator()?;
        let right = self.integer()?;

        match operator {
            BinaryOp::Add => Ok(left + right),
            BinaryOp::Sub => Ok(left - right),
        }
    }
}

pub fn parse(source: &str) -> Result<i64, ParserError> {
    let mut interpreter = Interpreter::new(source);
    interpreter.parse()
}

pub fn parse_with_diagnostics(source: &str) -> Result<i64, Vec<Diagnostic>> {
    parse(source).map_err(|e| vec![e.to_diagnostic()])
}
