use crate::diagnostic::{Diagnostic, Label, Span};
use crate::token::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParserError {
    InvalidToken {
        character: char,
        position: usize,
    },
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
        span: Span,
    },
}

impl ParserError {
    pub fn invalid_token(character: char, position: usize) -> Self {
        Self::InvalidToken {
            character,
            position,
        }
    }

    pub fn unexpected_token(expected: TokenKind, found: TokenKind, span: Span) -> Self {
        Self::UnexpectedToken {
            expected,
            found,
            span,
        }
    }

    /// Get the span associated with this error
    pub fn span(&self) -> Span {
        match self {
            Self::InvalidToken {
                character,
                position,
            } => Span::new(*position, position + character.len_utf8()),
            Self::UnexpectedToken { span, .. } => *span,
        }
    }

    /// Convert to a diagnostic for pretty printing
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Self::InvalidToken { character, .. } => {
                Diagnostic::error(format!("invalid token `{}`", character))
                    .with_code("E0001")
                    .with_label(Label::primary(self.span(), "unrecognized character"))
            }
            Self::UnexpectedToken {
                expected, found, ..
            } => Diagnostic::error(format!("expected {}, found {}", expected, found))
                .with_code("E0101")
                .with_label(Label::primary(self.span(), format!("expected {} here", expected))),
        }
    }
}

impl std::fmt::Display for ParserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParserError::InvalidToken { position, .. } => {
                write!(f, "Invalid token at position {}", position)
            }
            ParserError::UnexpectedToken {
                expected,
                found,
                span,
            } => {
                write!(
                    f,
                    "Expected {} at position {}, found {}",
                    expected, span.start, found
                )
            }
        }
    }
}

impl std::error::Error for ParserError {}
