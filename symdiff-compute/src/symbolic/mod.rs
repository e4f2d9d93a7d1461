//! Symbolic manipulation of expressions.
//!
//! # Expression representation
//!
//! Expressions in this module are represented as a tree of [`Expr`] nodes. It's similar to the
//! [`symdiff_parser::parser::ast::Expr`] nodes produced by [`symdiff_parser`], except that
//! [`Expr`] nodes do not store span information, and can represent negation, which cannot be
//! written in the input language.
//!
//! If you have a [`symdiff_parser::parser::ast::Expr`], you can convert it to an [`Expr`] using
//! the [`From`] trait.
//!
//! ```
//! use symdiff_compute::symbolic::Expr;
//! use symdiff_parser::parser::{ast::Expr as AstExpr, Parser};
//!
//! let mut parser = Parser::new("(+ x (* 2 x))");
//! let ast_expr = parser.try_parse_full::<AstExpr>().unwrap();
//!
//! let expr: Expr = ast_expr.into();
//! assert_eq!(expr, Expr::Var + Expr::int(2) * Expr::Var);
//! ```
//!
//! # Differentiation
//!
//! The [`derivative()`] function differentiates an expression with respect to `x` by applying
//! the rules of differentiation recursively. The result is correct but often redundant, for
//! example, the derivative of `(* 2 x)` is `(+ (* 2 1) (* 0 x))`.
//!
//! # Simplification
//!
//! The [`simplify()`] function removes the most obvious redundancy. It performs a single
//! bottom-up pass over the expression, removing additive and multiplicative identities and
//! folding arithmetic on integer constants.
//!
//! ```
//! use symdiff_compute::symbolic::{derivative, simplify, Expr};
//!
//! let expr = Expr::int(2) * Expr::Var;
//! assert_eq!(simplify(&derivative(&expr)), Expr::int(2));
//! ```
//!
//! The pass is not guaranteed to reach a fixed point; simplifying an already simplified
//! expression may simplify it further.
//!
//! For more information, see the [`mod@simplify`] module.

pub mod derivative;
pub mod expr;
pub mod simplify;
pub mod step_collector;

pub use derivative::derivative;
pub use expr::Expr;
pub use simplify::{simplify, simplify_with, simplify_with_steps};
