//! Symbolic differentiation with respect to `x`.

use super::expr::Expr;

/// Computes the derivative of the given expression with respect to `x`.
///
/// The rules are applied recursively and the result is not simplified, so it usually contains
/// trivial terms like `(* 0 x)`; pass it to [`simplify`](super::simplify()) to remove them.
///
/// Powers are differentiated as if the exponent `b` were constant, using the rule
/// `d/dx a^b = b * (a' * a)^(b - 1)`.
///
/// ```
/// use symdiff_compute::symbolic::{derivative, Expr};
///
/// let expr = Expr::Var.sin();
/// assert_eq!(derivative(&expr), Expr::int(1) * Expr::Var.cos());
/// ```
pub fn derivative(expr: &Expr) -> Expr {
    match expr {
        Expr::Var => Expr::int(1),
        Expr::Const(_) => Expr::int(0),
        Expr::Add(a, b) => derivative(a) + derivative(b),
        Expr::Sub(a, b) => derivative(a) - derivative(b),
        Expr::Mul(a, b) => {
            let (a, b) = (&**a, &**b);
            a.clone() * derivative(b) + derivative(a) * b.clone()
        },
        Expr::Div(a, b) => {
            let (a, b) = (&**a, &**b);
            (derivative(a) * b.clone() - a.clone() * derivative(b))
                / b.clone().pow(Expr::int(2))
        },
        Expr::Pow(a, b) => {
            let (a, b) = (&**a, &**b);
            b.clone() * (derivative(a) * a.clone()).pow(b.clone() - Expr::int(1))
        },
        Expr::Neg(u) => -derivative(u),
        Expr::Sin(u) => derivative(u) * (**u).clone().cos(),
        Expr::Cos(u) => derivative(u) * (Expr::int(-1) * (**u).clone().sin()),
        Expr::Tan(u) => derivative(u) / (**u).clone().cos().pow(Expr::int(2)),
        Expr::Exp(u) => derivative(u) * (**u).clone().exp(),
        Expr::Ln(u) => derivative(u) * (Expr::int(1) / (**u).clone()),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> Expr {
        Expr::Var
    }

    fn int(n: i32) -> Expr {
        Expr::int(n)
    }

    #[test]
    fn leaves() {
        assert_eq!(derivative(&x()), int(1));
        for n in [-5, 0, 1, 17] {
            assert_eq!(derivative(&int(n)), int(0));
        }
    }

    #[test]
    fn sum_and_difference() {
        let (a, b) = (x().sin(), int(3));
        assert_eq!(
            derivative(&(a.clone() + b.clone())),
            derivative(&a) + derivative(&b),
        );
        assert_eq!(derivative(&(x() - int(3))), int(1) - int(0));
    }

    #[test]
    fn product() {
        assert_eq!(
            derivative(&(int(2) * x())),
            int(2) * int(1) + int(0) * x(),
        );
    }

    #[test]
    fn quotient() {
        assert_eq!(
            derivative(&(x() / int(2))),
            (int(1) * int(2) - x() * int(0)) / int(2).pow(int(2)),
        );
    }

    #[test]
    fn power() {
        assert_eq!(
            derivative(&x().pow(int(3))),
            int(3) * (int(1) * x()).pow(int(3) - int(1)),
        );
    }

    #[test]
    fn power_multiplies_base_by_its_derivative() {
        let base = int(2) * x();
        assert_eq!(
            derivative(&base.clone().pow(int(2))),
            int(2) * (derivative(&base) * base).pow(int(2) - int(1)),
        );
    }

    #[test]
    fn negation() {
        assert_eq!(derivative(&-x()), -int(1));
    }

    #[test]
    fn trigonometric() {
        assert_eq!(derivative(&x().sin()), int(1) * x().cos());
        assert_eq!(derivative(&x().cos()), int(1) * (int(-1) * x().sin()));
        assert_eq!(derivative(&x().tan()), int(1) / x().cos().pow(int(2)));
    }

    #[test]
    fn exp_and_ln() {
        assert_eq!(derivative(&x().exp()), int(1) * x().exp());
        assert_eq!(derivative(&x().ln()), int(1) * (int(1) / x()));
    }

    #[test]
    fn chain_rule() {
        let inner = x().pow(int(2));
        assert_eq!(
            derivative(&inner.clone().sin()),
            derivative(&inner) * inner.cos(),
        );
    }

    #[test]
    fn does_not_modify_input() {
        let expr = x().ln() * x().exp();
        let copy = expr.clone();
        derivative(&expr);
        assert_eq!(expr, copy);
    }
}
