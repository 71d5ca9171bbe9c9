//! Error handling and edge case tests

mod common;

use calc::diagnostic::Span;
use calc::interpreter::ParserError;
use calc::TokenKind;
use common::eval_err;

// =============================================================================
// INVALID TOKEN TESTS
// =============================================================================

#[test]
fn test_invalid_character() {
    let err = eval_err("a");
    assert_eq!(err, ParserError::invalid_token('a', 0));
}

#[test]
fn test_invalid_character_after_operand() {
    let err = eval_err("4 + a");
    assert_eq!(err, ParserError::invalid_token('a', 4));
}

#[test]
fn test_unsupported_operator() {
    let err = eval_err("4 * 3");
    assert_eq!(err, ParserError::invalid_token('*', 2));
}

#[test]
fn test_invalid_token_message() {
    let err = eval_err("4 + %");
    assert_eq!(err.to_string(), "Invalid token at position 4");
}

// =============================================================================
// UNEXPECTED TOKEN TESTS
// =============================================================================

#[test]
fn test_missing_left_operand() {
    let err = eval_err("+ 3");
    assert_eq!(
        err,
        ParserError::unexpected_token(TokenKind::Integer, TokenKind::Plus, Span::new(0, 1))
    );
}

#[test]
fn test_missing_operator() {
    let err = eval_err("4");
    assert_eq!(
        err,
        ParserError::unexpected_token(TokenKind::Plus, TokenKind::Eof, Span::new(1, 1))
    );
}

#[test]
fn test_missing_right_operand() {
    let err = eval_err("4 -");
    assert_eq!(
        err,
        ParserError::unexpected_token(TokenKind::Integer, TokenKind::Eof, Span::new(3, 3))
    );
}

#[test]
fn test_two_operators() {
    let err = eval_err("4 + - 3");
    assert_eq!(
        err,
        ParserError::unexpected_token(TokenKind::Integer, TokenKind::Minus, Span::new(4, 5))
    );
}

#[test]
fn test_unexpected_token_message() {
    let err = eval_err("4 + +");
    assert_eq!(err.to_string(), "Expected INTEGER at position 4, found PLUS");
}

#[test]
fn test_empty_input_message() {
    let err = eval_err("");
    assert_eq!(err.to_string(), "Expected INTEGER at position 0, found EOF");
}

// =============================================================================
// DIAGNOSTIC CONVERSION TESTS
// =============================================================================

#[test]
fn test_invalid_token_diagnostic() {
    let diagnostic = eval_err("4 + a").to_diagnostic();
    assert_eq!(diagnostic.code.as_deref(), Some("E0001"));
    assert!(diagnostic.message.contains('a'));
}

#[test]
fn test_unexpected_token_diagnostic() {
    let diagnostic = eval_err("4 5").to_diagnostic();
    assert_eq!(diagnostic.code.as_deref(), Some("E0101"));
    assert!(diagnostic.message.contains("INTEGER"));
    assert!(diagnostic.message.contains("PLUS"));
}

#[test]
fn test_diagnostic_rendering_points_at_error() {
    use calc::diagnostic::render_diagnostics;

    let source = "4 + a";
    let diagnostics = vec![eval_err(source).to_diagnostic()];
    let rendered = render_diagnostics(source, "input", &diagnostics, false);

    assert!(rendered.contains("error[E0001]"));
    assert!(rendered.contains("input:1:5"));
    assert!(rendered.contains("4 + a"));
}
