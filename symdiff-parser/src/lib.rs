//! Tokenizer and parser for single-variable expressions written in prefix notation.
//!
//! Expressions are written as parenthesized applications of an operator to its operands, such as
//! `(* 2 x)` for `2x`, or `(sin (^ x 2))` for `sin(x^2)`. The only variable is `x`, and the only
//! literals are integers.
//!
//! ```
//! use symdiff_parser::parser::{ast::Expr, Parser};
//!
//! let mut parser = Parser::new("(+ x 3)");
//! let expr = parser.try_parse_full::<Expr>().unwrap();
//! assert_eq!(expr.span(), 0..7);
//! ```

pub mod parser;
pub mod tokenizer;
