//! Simplification of expressions.
//!
//! [`simplify`] rewrites an expression in a single bottom-up pass: the operands of a node are
//! simplified first, then the rules in [`rules`] are tried on the node in a fixed order, and the
//! first that applies replaces it. The pass is not repeated until nothing changes.
//!
//! | Node | Rules, in order |
//! |------|-----------------|
//! | `(+ a b)` | [`add_zero`](rules::add_zero), [`fold_constants`](rules::fold_constants) |
//! | `(- a b)` | [`subtract_zero`](rules::subtract_zero), [`subtract_from_zero`](rules::subtract_from_zero), [`fold_constants`](rules::fold_constants) |
//! | `(* a b)` | [`multiply_zero`](rules::multiply_zero) (before simplifying `a` and `b`), [`multiply_one`](rules::multiply_one), [`multiply_reciprocal`](rules::multiply_reciprocal), [`fold_constants`](rules::fold_constants) |
//! | `(/ a b)` | [`divide_one`](rules::divide_one), [`divide_negative_one`](rules::divide_negative_one), [`fold_constants`](rules::fold_constants) |
//! | `(^ a b)` | [`power_zero`](rules::power_zero), [`power_one`](rules::power_one), [`fold_constants`](rules::fold_constants) (after simplifying `a` and `b` a second time) |
//! | `-a` | [`double_negation`](rules::double_negation); `a` is not simplified |
//! | `(sin a)`, `(cos a)` | none, `a` is simplified |
//! | `(tan a)`, `(exp a)`, `(ln a)`, `x`, constants | none, returned as is |

pub mod rules;
pub mod step;

use super::{expr::Expr, step_collector::StepCollector};
use step::Step;
use symdiff_parser::parser::token::op::BinOpKind;

/// Type of a rule applied to the operands of a binary node.
type BinaryRule = fn(&Expr, &Expr, &mut dyn StepCollector<Step>) -> Option<Expr>;

/// Simplifies the operands of a binary node, then applies the first of the given rules that
/// matches. If none matches, constants are folded if possible, otherwise the node is rebuilt from
/// the simplified operands.
fn simplify_binary(
    kind: BinOpKind,
    lhs: &Expr,
    rhs: &Expr,
    rules: &[BinaryRule],
    step_collector: &mut dyn StepCollector<Step>,
) -> Expr {
    let lhs = simplify_with(lhs, step_collector);
    let rhs = simplify_with(rhs, step_collector);

    for rule in rules {
        if let Some(expr) = rule(&lhs, &rhs, step_collector) {
            return expr;
        }
    }

    rules::fold_constants(kind, &lhs, &rhs, step_collector)
        .unwrap_or_else(|| Expr::binary(kind, lhs, rhs))
}

/// Simplifies the operands of a power, then applies [`rules::power_zero`] or
/// [`rules::power_one`]. If neither matches, both operands are simplified once more before folding
/// constants, which catches zeros and ones that only appear after the first pass.
fn simplify_power(
    lhs: &Expr,
    rhs: &Expr,
    step_collector: &mut dyn StepCollector<Step>,
) -> Expr {
    let lhs = simplify_with(lhs, step_collector);
    let rhs = simplify_with(rhs, step_collector);

    if let Some(expr) = rules::power_zero(&lhs, &rhs, step_collector)
        .or_else(|| rules::power_one(&lhs, &rhs, step_collector))
    {
        return expr;
    }

    let lhs = simplify_with(&lhs, step_collector);
    let rhs = simplify_with(&rhs, step_collector);
    rules::fold_constants(BinOpKind::Exp, &lhs, &rhs, step_collector)
        .unwrap_or_else(|| lhs.pow(rhs))
}

/// Simplifies the given expression.
pub fn simplify(expr: &Expr) -> Expr {
    simplify_with(expr, &mut ())
}

/// Simplifies the given expression, returning the list of steps taken to simplify it.
pub fn simplify_with_steps(expr: &Expr) -> (Expr, Vec<Step>) {
    let mut steps = Vec::new();
    let expr = simplify_with(expr, &mut steps);
    (expr, steps)
}

/// Simplifies the given expression, reporting each rule applied to the given step collector.
pub fn simplify_with(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    use rules::*;

    match expr {
        Expr::Var | Expr::Const(_) => expr.clone(),
        Expr::Add(lhs, rhs) => simplify_binary(
            BinOpKind::Add,
            lhs,
            rhs,
            &[add_zero],
            step_collector,
        ),
        Expr::Sub(lhs, rhs) => simplify_binary(
            BinOpKind::Sub,
            lhs,
            rhs,
            &[subtract_zero, subtract_from_zero],
            step_collector,
        ),
        Expr::Mul(lhs, rhs) => multiply_zero(lhs, rhs, step_collector)
            .unwrap_or_else(|| simplify_binary(
                BinOpKind::Mul,
                lhs,
                rhs,
                &[multiply_one, multiply_reciprocal],
                step_collector,
            )),
        Expr::Div(lhs, rhs) => simplify_binary(
            BinOpKind::Div,
            lhs,
            rhs,
            &[divide_one, divide_negative_one],
            step_collector,
        ),
        Expr::Pow(lhs, rhs) => simplify_power(lhs, rhs, step_collector),
        Expr::Neg(operand) => double_negation(operand, step_collector)
            .unwrap_or_else(|| expr.clone()),
        Expr::Sin(operand) => simplify_with(operand, step_collector).sin(),
        Expr::Cos(operand) => simplify_with(operand, step_collector).cos(),
        Expr::Tan(_) | Expr::Exp(_) | Expr::Ln(_) => expr.clone(),
    }
}
