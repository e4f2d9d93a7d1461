//! The simplification rules.
//!
//! Each rule takes the already simplified operands of a node, and returns `Some(expr)` with the
//! rewritten node if the rule applies, or `None` if it does not. Every rule that applies records
//! its [`Step`] in the step collector.

use crate::primitive::{checked_div, checked_pow};
use crate::symbolic::{expr::Expr, step_collector::StepCollector};
use rug::Integer;
use super::{simplify_with, step::Step};
use symdiff_parser::parser::token::op::BinOpKind;
use tracing::trace;

/// Records that `step` rewrote `expr`.
fn record(step: Step, expr: &Expr, step_collector: &mut dyn StepCollector<Step>) {
    trace!(%step, %expr, "applied simplification rule");
    step_collector.push(step);
}

/// `0+a = a`
/// `a+0 = a`
pub fn add_zero(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let result = if lhs.is_int(0) {
        rhs
    } else if rhs.is_int(0) {
        lhs
    } else {
        return None;
    };

    record(Step::AddZero, result, step_collector);
    Some(result.clone())
}

/// `a-0 = a`
pub fn subtract_zero(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if !rhs.is_int(0) {
        return None;
    }

    record(Step::SubtractZero, lhs, step_collector);
    Some(lhs.clone())
}

/// `0-a = -a`
pub fn subtract_from_zero(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if !lhs.is_int(0) {
        return None;
    }

    let result = -rhs.clone();
    record(Step::SubtractFromZero, &result, step_collector);
    Some(result)
}

/// `0*a = 0`
/// `a*0 = 0`
///
/// Unlike the other rules, this one is checked before the operands are simplified.
pub fn multiply_zero(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if !lhs.is_int(0) && !rhs.is_int(0) {
        return None;
    }

    let result = Expr::int(0);
    record(Step::MultiplyZero, &result, step_collector);
    Some(result)
}

/// `1*a = a`
/// `a*1 = a`
pub fn multiply_one(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let result = if lhs.is_int(1) {
        rhs
    } else if rhs.is_int(1) {
        lhs
    } else {
        return None;
    };

    record(Step::MultiplyOne, result, step_collector);
    Some(result.clone())
}

/// `a*(1/b) = a/b`
///
/// The quotient is simplified again after the rewrite.
pub fn multiply_reciprocal(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let Expr::Div(numerator, denominator) = rhs else {
        return None;
    };
    if !numerator.is_int(1) {
        return None;
    }

    let quotient = lhs.clone() / (**denominator).clone();
    record(Step::MultiplyReciprocal, &quotient, step_collector);
    Some(simplify_with(&quotient, step_collector))
}

/// `a/1 = a`
pub fn divide_one(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if !rhs.is_int(1) {
        return None;
    }

    record(Step::DivideOne, lhs, step_collector);
    Some(lhs.clone())
}

/// `a/(-1) = -a`
pub fn divide_negative_one(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if !rhs.is_int(-1) {
        return None;
    }

    let result = -lhs.clone();
    record(Step::DivideNegativeOne, &result, step_collector);
    Some(result)
}

/// `a^0 = 1`
pub fn power_zero(_: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if !rhs.is_int(0) {
        return None;
    }

    let result = Expr::int(1);
    record(Step::PowerZero, &result, step_collector);
    Some(result)
}

/// `a^1 = a`
///
/// The base is simplified again after the rewrite.
pub fn power_one(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if !rhs.is_int(1) {
        return None;
    }

    record(Step::PowerOne, lhs, step_collector);
    Some(simplify_with(lhs, step_collector))
}

/// `--a = a`
///
/// `a` itself is left as is.
pub fn double_negation(operand: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let Expr::Neg(inner) = operand else {
        return None;
    };

    record(Step::DoubleNegation, inner, step_collector);
    Some((**inner).clone())
}

/// Evaluates the arithmetic operation on two integer constants, e.g. `2*3 = 6`.
///
/// Division truncates toward zero. Division by zero, negative exponents, and exponents too large
/// to evaluate are left unevaluated.
pub fn fold_constants(
    kind: BinOpKind,
    lhs: &Expr,
    rhs: &Expr,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Expr> {
    let (lhs, rhs) = (lhs.as_integer()?, rhs.as_integer()?);
    let value = match kind {
        BinOpKind::Add => Integer::from(lhs + rhs),
        BinOpKind::Sub => Integer::from(lhs - rhs),
        BinOpKind::Mul => Integer::from(lhs * rhs),
        BinOpKind::Div => checked_div(lhs, rhs)?,
        BinOpKind::Exp => checked_pow(lhs, rhs)?,
    };

    let result = Expr::Const(value);
    record(Step::FoldConstants, &result, step_collector);
    Some(result)
}
