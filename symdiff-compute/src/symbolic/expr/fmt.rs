//! Text forms of an [`Expr`].
//!
//! The [`Display`] implementation produces the canonical prefix form, the same notation the
//! parser accepts. [`InfixFormatter`] produces a looser infix form meant for debugging.

use super::Expr;
use std::fmt::{self, Display, Formatter};

/// Serializes the expression to its canonical prefix form.
///
/// ```
/// use symdiff_compute::symbolic::{expr::serialize, Expr};
///
/// let expr = Expr::int(3) * Expr::Var.pow(Expr::int(2));
/// assert_eq!(serialize(&expr), "(* 3 (^ x 2))");
/// ```
pub fn serialize(expr: &Expr) -> String {
    expr.to_string()
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Var => write!(f, "x"),
            Self::Const(value) => write!(f, "{}", value),
            Self::Neg(operand) => write!(f, "-{}", operand),
            _ => {
                if let Some((kind, lhs, rhs)) = self.as_binary() {
                    write!(f, "({} {} {})", kind.symbol(), lhs, rhs)
                } else if let Some((kind, operand)) = self.as_function() {
                    write!(f, "({} {})", kind.name(), operand)
                } else {
                    unreachable!("every other node is a binary operation or a function")
                }
            },
        }
    }
}

/// A wrapper that formats an [`Expr`] in infix notation.
///
/// Binary operations are written between their operands with no grouping parentheses, so the
/// output can be ambiguous, e.g. both `(* (+ x 1) 2)` and `(+ x (* 1 2))` are written
/// `x + 1 * 2`. Exponents are parenthesized.
///
/// This is created by [`Expr::as_infix`].
pub struct InfixFormatter<'a>(&'a Expr);

impl Display for InfixFormatter<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self.0 {
            Expr::Var => write!(f, "x"),
            Expr::Const(value) => write!(f, "{}", value),
            Expr::Neg(operand) => write!(f, "-{}", operand.as_infix()),
            Expr::Pow(lhs, rhs) => write!(f, "{} ^ ({})", lhs.as_infix(), rhs.as_infix()),
            expr => {
                if let Some((kind, lhs, rhs)) = expr.as_binary() {
                    write!(f, "{} {} {}", lhs.as_infix(), kind.symbol(), rhs.as_infix())
                } else if let Some((kind, operand)) = expr.as_function() {
                    write!(f, "{}({})", kind.name(), operand.as_infix())
                } else {
                    unreachable!("every other node is a binary operation or a function")
                }
            },
        }
    }
}

impl Expr {
    /// Wraps the expression in a formatter that writes it in infix notation.
    pub fn as_infix(&self) -> InfixFormatter<'_> {
        InfixFormatter(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_leaves() {
        assert_eq!(serialize(&Expr::Var), "x");
        assert_eq!(serialize(&Expr::int(42)), "42");
        assert_eq!(serialize(&Expr::int(-7)), "-7");
    }

    #[test]
    fn prefix_binary() {
        let expr = Expr::Var.pow(Expr::int(2)) / (Expr::Var - Expr::int(1));
        assert_eq!(serialize(&expr), "(/ (^ x 2) (- x 1))");
    }

    #[test]
    fn prefix_functions() {
        assert_eq!(serialize(&Expr::Var.sin()), "(sin x)");
        assert_eq!(serialize(&Expr::Var.exp().ln()), "(ln (exp x))");
        assert_eq!(serialize(&(Expr::int(2) * Expr::Var).tan()), "(tan (* 2 x))");
    }

    #[test]
    fn prefix_negation() {
        assert_eq!(serialize(&-Expr::Var.cos()), "-(cos x)");
        assert_eq!(serialize(&-(Expr::Var + Expr::int(1))), "-(+ x 1)");
        assert_eq!(serialize(&-Expr::Var), "-x");
    }

    #[test]
    fn infix() {
        let expr = Expr::int(3) * Expr::Var.pow(Expr::int(2)) + Expr::Var.sin();
        assert_eq!(expr.as_infix().to_string(), "3 * x ^ (2) + sin(x)");

        let expr = -(Expr::int(1) / Expr::Var.ln());
        assert_eq!(expr.as_infix().to_string(), "-1 / ln(x)");

        let expr = Expr::Var.exp() - Expr::Var.cos().tan();
        assert_eq!(expr.as_infix().to_string(), "exp(x) - tan(cos(x))");
    }
}
