//! Abstract syntax tree of a prefix expression. Every node remembers the region of the source code
//! it was parsed from.

pub mod binary;
pub mod expr;
pub mod literal;
pub mod unary;

pub use binary::Binary;
pub use expr::Expr;
pub use literal::{LitInt, LitVar, Literal};
pub use unary::Unary;
