//! Symbolic differentiation of single-variable expressions.
//!
//! The [`diff`] function is the main entry point: it parses an expression written in prefix
//! notation, differentiates it with respect to `x`, simplifies the result, and serializes it back
//! to prefix notation.
//!
//! ```
//! use symdiff_compute::diff;
//!
//! assert_eq!(diff("(* 2 x)").unwrap(), "2");
//! assert_eq!(diff("(sin x)").unwrap(), "(cos x)");
//! ```
//!
//! Each stage is also available on its own, see the [`symbolic`] module.

pub mod pipeline;
pub mod primitive;
pub mod symbolic;

pub use pipeline::{diff, differentiate, parse, Derivation};
