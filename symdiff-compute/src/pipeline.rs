//! The full differentiation pipeline: parse, differentiate, simplify and serialize.

use crate::symbolic::{
    derivative,
    expr::{serialize, Expr},
    simplify::step::Step,
    simplify_with_steps,
};
use symdiff_error::Error;
use symdiff_parser::parser::{ast::Expr as AstExpr, Parser};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Every stage of differentiating an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Derivation {
    /// The parsed input.
    pub expr: Expr,

    /// The derivative of the input, before simplification.
    pub derivative: Expr,

    /// The simplified derivative.
    pub simplified: Expr,

    /// The simplification rules applied to the derivative, in the order they were applied.
    pub steps: Vec<Step>,
}

/// Parses an expression written in prefix notation.
///
/// The whole input must be a single expression, surrounding whitespace aside.
pub fn parse(input: &str) -> Result<Expr, Error> {
    let ast = Parser::new(input).try_parse_full::<AstExpr>()?;
    let expr = Expr::from(ast);
    debug!(%expr, nodes = expr.node_count(), "parsed expression");
    Ok(expr)
}

/// Parses the given expression, then differentiates and simplifies it, returning every
/// intermediate result.
pub fn differentiate(input: &str) -> Result<Derivation, Error> {
    let expr = parse(input)?;

    let derivative = derivative(&expr);
    debug!(%derivative, nodes = derivative.node_count(), "differentiated");

    let (simplified, steps) = simplify_with_steps(&derivative);
    debug!(
        %simplified,
        nodes = simplified.node_count(),
        steps = steps.len(),
        "simplified"
    );

    Ok(Derivation { expr, derivative, simplified, steps })
}

/// Differentiates the given expression with respect to `x`, returning the simplified derivative
/// in prefix notation.
///
/// Applications can be nested at most [`MAX_NESTING`] deep; deeper input is rejected with a
/// [`NestingTooDeep`] error rather than risking a stack overflow in the recursive stages.
///
/// [`MAX_NESTING`]: symdiff_parser::parser::MAX_NESTING
/// [`NestingTooDeep`]: symdiff_parser::parser::error::kind::NestingTooDeep
///
/// ```
/// use symdiff_compute::diff;
///
/// assert_eq!(diff("(+ x 3)").unwrap(), "1");
/// assert_eq!(diff("(^ x 3)").unwrap(), "(* 3 (^ x 2))");
/// ```
pub fn diff(input: &str) -> Result<String, Error> {
    differentiate(input).map(|derivation| serialize(&derivation.simplified))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use symdiff_parser::parser::{error::kind, MAX_NESTING};
    use super::*;

    #[test]
    fn variable() {
        assert_eq!(parse("x").unwrap(), Expr::Var);
        assert_eq!(diff("x").unwrap(), "1");
    }

    #[test]
    fn sum_with_constant() {
        assert_eq!(diff("(+ x 3)").unwrap(), "1");
    }

    #[test]
    fn constant_times_x() {
        assert_eq!(diff("(* 2 x)").unwrap(), "2");
    }

    #[test]
    fn sine() {
        assert_eq!(diff("(sin x)").unwrap(), "(cos x)");
    }

    #[test]
    fn unknown_operator() {
        let err = diff("(@ x 1)").unwrap_err();
        assert_eq!(
            err.downcast_kind::<kind::UnknownOperator>(),
            Some(&kind::UnknownOperator { name: "@".to_string() }),
        );
        assert_eq!(err.spans, vec![1..2]);
    }

    #[test]
    fn invalid_literal() {
        let err = diff("(+ x y)").unwrap_err();
        assert!(err.is::<kind::InvalidLiteral>());
    }

    #[test]
    fn missing_operand() {
        let err = diff("(+ x").unwrap_err();
        assert!(err.is::<kind::UnexpectedEof>());

        let err = diff("(* 2)").unwrap_err();
        assert!(err.is::<kind::MissingOperand>());
    }

    #[test]
    fn glued_literals_are_invalid() {
        for (input, lexeme) in [
            ("(+ 2x)", "2x"),
            ("(- x-1)", "x-1"),
            ("(+ x 1.5)", "1.5"),
            ("(+ x 2x)", "2x"),
        ] {
            let err = diff(input).unwrap_err();
            assert_eq!(
                err.downcast_kind::<kind::InvalidLiteral>(),
                Some(&kind::InvalidLiteral { lexeme: lexeme.to_string() }),
            );
        }
    }

    #[test]
    fn nesting_limit() {
        let nested = |depth: usize| format!("{}x{}", "(- ".repeat(depth), " 1)".repeat(depth));

        assert_eq!(diff(&nested(MAX_NESTING)).unwrap(), "1");

        let err = diff(&nested(MAX_NESTING + 1)).unwrap_err();
        assert!(err.is::<kind::NestingTooDeep>());
    }

    #[test]
    fn constants() {
        assert_eq!(diff("5").unwrap(), "0");
        assert_eq!(diff("-12").unwrap(), "0");
    }

    #[test]
    fn differences() {
        assert_eq!(diff("(- x 3)").unwrap(), "1");
        assert_eq!(diff("(- 3 x)").unwrap(), "-1");
    }

    #[test]
    fn powers() {
        assert_eq!(diff("(^ x 2)").unwrap(), "(* 2 x)");
        assert_eq!(diff("(^ x 3)").unwrap(), "(* 3 (^ x 2))");
        assert_eq!(diff("(^ (* 2 x) 2)").unwrap(), "(* 2 (* 2 (* 2 x)))");
        // zero bases only reduce once the power simplifies its operands again
        assert_eq!(diff("(^ (* (+ 0 0) x) 2)").unwrap(), "0");
        assert_eq!(diff("(^ (* (+ 0 0) x) 3)").unwrap(), "0");
    }

    #[test]
    fn products_and_quotients() {
        assert_eq!(diff("(* x x)").unwrap(), "(+ x x)");
        // the constant quotient `2 / 4` truncates to zero
        assert_eq!(diff("(/ x 2)").unwrap(), "0");
    }

    #[test]
    fn functions() {
        assert_eq!(diff("(cos x)").unwrap(), "(* -1 (sin x))");
        assert_eq!(diff("(tan x)").unwrap(), "(/ 1 (^ (cos x) 2))");
        assert_eq!(diff("(exp x)").unwrap(), "(exp x)");
        assert_eq!(diff("(ln x)").unwrap(), "(/ 1 x)");
        assert_eq!(diff("(ln (* 2 x))").unwrap(), "(/ 2 (* 2 x))");
    }

    #[test]
    fn whitespace_is_flexible() {
        assert_eq!(diff("  ( sin   x )\n").unwrap(), "(cos x)");
        assert_eq!(diff("(+ (* 2 x) (sin x))").unwrap(), "(+ 2 (cos x))");
    }

    #[test]
    fn derivation_stages() {
        let derivation = differentiate("(* 2 x)").unwrap();
        assert_eq!(derivation.expr, Expr::int(2) * Expr::Var);
        assert_eq!(
            derivation.derivative,
            Expr::int(2) * Expr::int(1) + Expr::int(0) * Expr::Var,
        );
        assert_eq!(derivation.simplified, Expr::int(2));
        assert_eq!(
            derivation.steps,
            vec![Step::MultiplyOne, Step::MultiplyZero, Step::AddZero],
        );
    }

    #[test]
    fn concurrent_calls() {
        let inputs = ["x", "(+ x 3)", "(* 2 x)", "(sin x)", "(^ x 3)", "(ln x)"];
        let expected = inputs.map(|input| diff(input).unwrap());

        std::thread::scope(|scope| {
            let handles = inputs
                .iter()
                .map(|input| scope.spawn(move || diff(input).unwrap()))
                .collect::<Vec<_>>();

            for (handle, expected) in handles.into_iter().zip(&expected) {
                assert_eq!(&handle.join().unwrap(), expected);
            }
        });
    }
}
