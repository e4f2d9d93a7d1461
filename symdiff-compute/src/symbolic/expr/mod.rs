//! The expression tree that differentiation and simplification operate on.

mod fmt;
mod iter;

pub use iter::ExprIter;
use crate::primitive::int;
use rug::Integer;
use std::ops::{Add, Div, Mul, Neg, Sub};
use symdiff_parser::parser::{
    ast::{Binary, Expr as AstExpr, Literal, Unary},
    token::op::{BinOpKind, UnaryOpKind},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use fmt::{serialize, InfixFormatter};

/// A node in an expression tree.
///
/// Each node exclusively owns its children, so expressions are plain values: cloning one produces
/// an independent copy, and two expressions are equal if they have the same shape and constants.
///
/// The arithmetic operators `+`, `-`, `*`, `/` and unary `-` are implemented for [`Expr`], and
/// build the corresponding node without simplifying it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// The variable `x`.
    Var,

    /// An integer constant.
    Const(Integer),

    /// Addition, `lhs + rhs`.
    Add(Box<Expr>, Box<Expr>),

    /// Subtraction, `lhs - rhs`.
    Sub(Box<Expr>, Box<Expr>),

    /// Multiplication, `lhs * rhs`.
    Mul(Box<Expr>, Box<Expr>),

    /// Division, `lhs / rhs`.
    Div(Box<Expr>, Box<Expr>),

    /// Exponentiation, `lhs ^ rhs`.
    Pow(Box<Expr>, Box<Expr>),

    /// Negation, `-expr`. This node is only produced by differentiation.
    Neg(Box<Expr>),

    /// The sine function.
    Sin(Box<Expr>),

    /// The cosine function.
    Cos(Box<Expr>),

    /// The tangent function.
    Tan(Box<Expr>),

    /// The exponential function, `e ^ expr`.
    Exp(Box<Expr>),

    /// The natural logarithm.
    Ln(Box<Expr>),
}

impl Expr {
    /// Creates an integer constant.
    pub fn int<T>(n: T) -> Self
    where
        Integer: From<T>,
    {
        Self::Const(int(n))
    }

    /// Creates the binary node for the given operator.
    pub fn binary(kind: BinOpKind, lhs: Expr, rhs: Expr) -> Self {
        let (lhs, rhs) = (Box::new(lhs), Box::new(rhs));
        match kind {
            BinOpKind::Add => Self::Add(lhs, rhs),
            BinOpKind::Sub => Self::Sub(lhs, rhs),
            BinOpKind::Mul => Self::Mul(lhs, rhs),
            BinOpKind::Div => Self::Div(lhs, rhs),
            BinOpKind::Exp => Self::Pow(lhs, rhs),
        }
    }

    /// Creates the node applying the given function to `operand`.
    pub fn function(kind: UnaryOpKind, operand: Expr) -> Self {
        let operand = Box::new(operand);
        match kind {
            UnaryOpKind::Sin => Self::Sin(operand),
            UnaryOpKind::Cos => Self::Cos(operand),
            UnaryOpKind::Tan => Self::Tan(operand),
            UnaryOpKind::Exp => Self::Exp(operand),
            UnaryOpKind::Ln => Self::Ln(operand),
        }
    }

    /// Creates the node `self ^ exp`.
    pub fn pow(self, exp: Expr) -> Self {
        Self::binary(BinOpKind::Exp, self, exp)
    }

    pub fn sin(self) -> Self {
        Self::function(UnaryOpKind::Sin, self)
    }

    pub fn cos(self) -> Self {
        Self::function(UnaryOpKind::Cos, self)
    }

    pub fn tan(self) -> Self {
        Self::function(UnaryOpKind::Tan, self)
    }

    pub fn exp(self) -> Self {
        Self::function(UnaryOpKind::Exp, self)
    }

    pub fn ln(self) -> Self {
        Self::function(UnaryOpKind::Ln, self)
    }

    /// Returns true if the expression is the integer constant `n`.
    pub fn is_int(&self, n: i32) -> bool {
        matches!(self, Self::Const(value) if *value == n)
    }

    /// Returns the value of the expression if it is an integer constant.
    pub fn as_integer(&self) -> Option<&Integer> {
        match self {
            Self::Const(value) => Some(value),
            _ => None,
        }
    }

    /// If the expression is a binary operation, returns the operator and its operands.
    pub fn as_binary(&self) -> Option<(BinOpKind, &Expr, &Expr)> {
        let (kind, lhs, rhs) = match self {
            Self::Add(lhs, rhs) => (BinOpKind::Add, lhs, rhs),
            Self::Sub(lhs, rhs) => (BinOpKind::Sub, lhs, rhs),
            Self::Mul(lhs, rhs) => (BinOpKind::Mul, lhs, rhs),
            Self::Div(lhs, rhs) => (BinOpKind::Div, lhs, rhs),
            Self::Pow(lhs, rhs) => (BinOpKind::Exp, lhs, rhs),
            _ => return None,
        };
        Some((kind, lhs, rhs))
    }

    /// If the expression is a function application, returns the function and its operand.
    pub fn as_function(&self) -> Option<(UnaryOpKind, &Expr)> {
        let (kind, operand) = match self {
            Self::Sin(operand) => (UnaryOpKind::Sin, operand),
            Self::Cos(operand) => (UnaryOpKind::Cos, operand),
            Self::Tan(operand) => (UnaryOpKind::Tan, operand),
            Self::Exp(operand) => (UnaryOpKind::Exp, operand),
            Self::Ln(operand) => (UnaryOpKind::Ln, operand),
            _ => return None,
        };
        Some((kind, operand))
    }

    /// Returns an iterator over the direct children of this node, from left to right.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = &Expr> {
        let (first, second) = match self {
            Self::Var | Self::Const(_) => (None, None),
            Self::Neg(operand) => (Some(&**operand), None),
            _ => match (self.as_binary(), self.as_function()) {
                (Some((_, lhs, rhs)), _) => (Some(lhs), Some(rhs)),
                (_, Some((_, operand))) => (Some(operand), None),
                (None, None) => (None, None),
            },
        };
        first.into_iter().chain(second)
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter {
        ExprIter::new(self)
    }

    /// Returns the number of nodes in the expression tree.
    pub fn node_count(&self) -> usize {
        self.post_order_iter().count()
    }
}

impl From<AstExpr> for Expr {
    fn from(expr: AstExpr) -> Self {
        match expr {
            AstExpr::Literal(Literal::Int(int)) => Self::Const(int.value),
            AstExpr::Literal(Literal::Var(_)) => Self::Var,
            AstExpr::Unary(Unary { operand, op, .. }) => {
                Self::function(op.kind, (*operand).into())
            },
            AstExpr::Binary(Binary { lhs, op, rhs, .. }) => {
                Self::binary(op.kind, (*lhs).into(), (*rhs).into())
            },
        }
    }
}

impl Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::binary(BinOpKind::Add, self, rhs)
    }
}

impl Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::binary(BinOpKind::Sub, self, rhs)
    }
}

impl Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::binary(BinOpKind::Mul, self, rhs)
    }
}

impl Div for Expr {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self::binary(BinOpKind::Div, self, rhs)
    }
}

impl Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self {
        Self::Neg(Box::new(self))
    }
}
