use crate::{
    parser::{
        error::{kind, Error},
        Parse,
        Parser,
        VARIABLE,
    },
    tokenizer::TokenKind,
};
use rug::Integer;
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An integer literal, such as `2` or `-17`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LitInt {
    /// The value of the integer literal.
    pub value: Integer,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl fmt::Display for LitInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// The variable `x`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LitVar {
    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl fmt::Display for LitVar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", VARIABLE)
    }
}

/// Represents a literal value in prefix notation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Literal {
    /// An integer literal, such as `2` or `-17`.
    Int(LitInt),

    /// The variable `x`.
    Var(LitVar),
}

impl Literal {
    /// Returns the span of the literal.
    pub fn span(&self) -> Range<usize> {
        match self {
            Literal::Int(int) => int.span.clone(),
            Literal::Var(var) => var.span.clone(),
        }
    }
}

impl Parse for Literal {
    fn parse(input: &mut Parser<'_>) -> Result<Self, Error> {
        let token = input.next_token()?;
        let invalid = || Error::new(vec![token.span.clone()], kind::InvalidLiteral {
            lexeme: token.lexeme.to_owned(),
        });

        match token.kind {
            TokenKind::Int => Integer::from_str_radix(token.lexeme, 10)
                .map(|value| Literal::Int(LitInt { value, span: token.span.clone() }))
                .map_err(|_| invalid()),
            TokenKind::Name if token.lexeme == VARIABLE => {
                Ok(Literal::Var(LitVar { span: token.span.clone() }))
            },
            TokenKind::CloseParen => Err(Error::new(vec![token.span.clone()], kind::MissingOperand)),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Literal::Int(int) => int.fmt(f),
            Literal::Var(var) => var.fmt(f),
        }
    }
}
