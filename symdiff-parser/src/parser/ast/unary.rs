use crate::parser::{
    ast::expr::Expr,
    error::Error,
    token::{op::UnaryOp, CloseParen},
    Parser,
    Parse,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A function applied to a single operand, such as `(sin x)`. The operand can be a nested
/// expression.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Unary {
    /// The operand of the function.
    pub operand: Box<Expr>,

    /// The function being applied.
    pub op: UnaryOp,

    /// The region of the source code that this unary expression was parsed from, including the
    /// surrounding parentheses.
    pub span: Range<usize>,
}

impl Unary {
    /// Returns the span of the unary expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Parses the operand and closing parenthesis of an application whose opening parenthesis and
    /// operator have already been parsed.
    pub(crate) fn parse_operands(
        input: &mut Parser<'_>,
        open: Range<usize>,
        op: UnaryOp,
    ) -> Result<Self, Error> {
        let operand = Expr::parse(input)?;
        let close = CloseParen::parse_closing(input, open.clone())?;

        Ok(Self {
            operand: Box::new(operand),
            op,
            span: open.start..close.span.end,
        })
    }
}

impl fmt::Display for Unary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({} {})", self.op.kind.name(), self.operand)
    }
}
