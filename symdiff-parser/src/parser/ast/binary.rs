use crate::parser::{
    ast::expr::Expr,
    error::Error,
    token::{op::BinOp, CloseParen},
    Parser,
    Parse,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A binary expression, such as `(+ 1 2)`. Binary expressions can include nested expressions.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Binary {
    /// The left-hand side of the binary expression.
    pub lhs: Box<Expr>,

    /// The operator of the binary expression.
    pub op: BinOp,

    /// The right-hand side of the binary expression.
    pub rhs: Box<Expr>,

    /// The region of the source code that this binary expression was parsed from, including the
    /// surrounding parentheses.
    pub span: Range<usize>,
}

impl Binary {
    /// Returns the span of the binary expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Parses both operands and the closing parenthesis of an application whose opening
    /// parenthesis and operator have already been parsed.
    ///
    /// The left operand is parsed first; the right operand is parsed from whatever tokens the
    /// left operand left behind, however deeply it was nested.
    pub(crate) fn parse_operands(
        input: &mut Parser<'_>,
        open: Range<usize>,
        op: BinOp,
    ) -> Result<Self, Error> {
        let lhs = Expr::parse(input)?;
        let rhs = Expr::parse(input)?;
        let close = CloseParen::parse_closing(input, open.clone())?;

        Ok(Self {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
            span: open.start..close.span.end,
        })
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({} {} {})", self.op.kind.symbol(), self.lhs, self.rhs)
    }
}
