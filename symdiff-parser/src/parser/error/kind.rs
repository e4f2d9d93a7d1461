use ariadne::Fmt;
use symdiff_attrs::ErrorKind;
use symdiff_error::{ErrorKind, EXPR};
use crate::tokenizer::TokenKind;

/// The end of the source code was reached unexpectedly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of file",
    labels = [format!("you might need to add another {} here", "expression".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// The end of the source code was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of file",
    labels = [format!("I could not understand the remaining {} here", "expression".fg(EXPR))],
    help = "only one expression can be differentiated at a time",
)]
pub struct ExpectedEof;

/// An unexpected token was encountered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected token",
    labels = [format!("expected one of: {}", expected.iter().map(|t| format!("{:?}", t)).collect::<Vec<_>>().join(", "))],
    help = format!("found {:?}", found),
)]
pub struct UnexpectedToken {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],

    /// The token that was found.
    pub found: TokenKind,
}

/// The token after an opening parenthesis is not a known operator.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown operator: `{}`", name),
    labels = ["this is not an operator"],
    help = format!(
        "the known operators are: {}",
        "+ - * / ^ sin cos tan exp ln".fg(EXPR),
    ),
)]
pub struct UnknownOperator {
    /// The lexeme found in operator position.
    pub name: String,
}

/// An operand is neither the variable `x` nor an integer.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid literal: `{}`", lexeme),
    labels = ["expected the variable `x` or an integer here"],
    help = format!("write nested expressions in prefix notation, such as {}", "(* 2 x)".fg(EXPR)),
)]
pub struct InvalidLiteral {
    /// The lexeme found in operand position.
    pub lexeme: String,
}

/// An operator was closed before it received all of its operands.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing operand",
    labels = [format!("expected an {} before this parenthesis", "operand".fg(EXPR))],
    help = "binary operators take two operands; functions take one",
)]
pub struct MissingOperand;

/// A parenthesis was not closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = ["this parenthesis is not closed"],
    help = "add a closing parenthesis `)` at the end of the expression",
)]
pub struct UnclosedParenthesis;

/// Applications are nested deeper than the parser allows.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expression is nested too deeply",
    labels = [format!("this parenthesis opens application number {}", max + 1)],
    help = format!("at most {} applications can be nested inside each other", max.fg(EXPR)),
)]
pub struct NestingTooDeep {
    /// The maximum nesting depth.
    pub max: usize,
}
