use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rewrite performed by the simplifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Step {
    /// `a + 0 = a` or `0 + a = a`
    AddZero,

    /// `a - 0 = a`
    SubtractZero,

    /// `0 - a = -a`
    SubtractFromZero,

    /// `a * 0 = 0` or `0 * a = 0`
    MultiplyZero,

    /// `a * 1 = a` or `1 * a = a`
    MultiplyOne,

    /// `a * (1 / b) = a / b`
    MultiplyReciprocal,

    /// `a / 1 = a`
    DivideOne,

    /// `a / -1 = -a`
    DivideNegativeOne,

    /// `a ^ 0 = 1`
    PowerZero,

    /// `a ^ 1 = a`
    PowerOne,

    /// `--a = a`
    DoubleNegation,

    /// Arithmetic on two integer constants was evaluated, e.g. `2 * 3 = 6`.
    FoldConstants,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let description = match self {
            Self::AddZero => "a + 0 = a",
            Self::SubtractZero => "a - 0 = a",
            Self::SubtractFromZero => "0 - a = -a",
            Self::MultiplyZero => "a * 0 = 0",
            Self::MultiplyOne => "a * 1 = a",
            Self::MultiplyReciprocal => "a * (1 / b) = a / b",
            Self::DivideOne => "a / 1 = a",
            Self::DivideNegativeOne => "a / -1 = -a",
            Self::PowerZero => "a ^ 0 = 1",
            Self::PowerOne => "a ^ 1 = a",
            Self::DoubleNegation => "--a = a",
            Self::FoldConstants => "evaluate constant arithmetic",
        };
        f.write_str(description)
    }
}
