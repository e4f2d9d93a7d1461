use crate::{
    parser::{
        ast::{binary::Binary, literal::Literal, unary::Unary},
        error::Error,
        token::{op::Op, OpenParen},
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents any kind of prefix expression.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A literal value, either `x` or an integer.
    Literal(Literal),

    /// A function applied to one operand, such as `(sin x)`.
    Unary(Unary),

    /// A binary operation, such as `(+ x 1)`.
    Binary(Binary),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Expr::Literal(literal) => literal.span(),
            Expr::Unary(unary) => unary.span(),
            Expr::Binary(binary) => binary.span(),
        }
    }

    /// Parses an application `(op operand...)`. The number of operands parsed depends on the arity
    /// of the operator.
    fn parse_application(input: &mut Parser<'_>) -> Result<Self, Error> {
        let open = input.try_parse::<OpenParen>()?;
        input.enter_application(open.span.clone())?;
        let expr = match input.try_parse::<Op>()? {
            Op::Unary(op) => Self::Unary(Unary::parse_operands(input, open.span, op)?),
            Op::Binary(op) => Self::Binary(Binary::parse_operands(input, open.span, op)?),
        };
        input.exit_application();
        Ok(expr)
    }
}

impl Parse for Expr {
    fn parse(input: &mut Parser<'_>) -> Result<Self, Error> {
        let is_application = input.peek_token()
            .is_some_and(|token| token.kind == TokenKind::OpenParen);

        if is_application {
            Self::parse_application(input)
        } else {
            input.try_parse::<Literal>().map(Self::Literal)
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Literal(literal) => literal.fmt(f),
            Expr::Unary(unary) => unary.fmt(f),
            Expr::Binary(binary) => binary.fmt(f),
        }
    }
}
