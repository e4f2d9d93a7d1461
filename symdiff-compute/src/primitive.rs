//! Functions to construct and combine the [`Integer`]s carried by constant expressions.

use rug::{ops::Pow, Integer};

/// The largest exponent [`checked_pow`] will evaluate.
pub const MAX_EXPONENT: u32 = 1 << 16;

/// Creates an [`Integer`] with the given value.
pub fn int<T>(n: T) -> Integer
where
    Integer: From<T>,
{
    Integer::from(n)
}

/// Divides `lhs` by `rhs`, truncating towards zero. Returns [`None`] if `rhs` is zero.
pub fn checked_div(lhs: &Integer, rhs: &Integer) -> Option<Integer> {
    if rhs.is_zero() {
        None
    } else {
        Some(Integer::from(lhs / rhs))
    }
}

/// Raises `base` to the power `exp`. Returns [`None`] if the exponent is negative or larger than
/// [`MAX_EXPONENT`], since the result would not be an integer or would be impractically large.
pub fn checked_pow(base: &Integer, exp: &Integer) -> Option<Integer> {
    let exp = exp.to_u32().filter(|&exp| exp <= MAX_EXPONENT)?;
    Some(Integer::from(base.pow(exp)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn div_truncates_toward_zero() {
        assert_eq!(checked_div(&int(7), &int(2)), Some(int(3)));
        assert_eq!(checked_div(&int(-7), &int(2)), Some(int(-3)));
        assert_eq!(checked_div(&int(2), &int(4)), Some(int(0)));
    }

    #[test]
    fn div_by_zero() {
        assert_eq!(checked_div(&int(1), &int(0)), None);
    }

    #[test]
    fn pow() {
        assert_eq!(checked_pow(&int(2), &int(10)), Some(int(1024)));
        assert_eq!(checked_pow(&int(-3), &int(3)), Some(int(-27)));
        assert_eq!(checked_pow(&int(0), &int(0)), Some(int(1)));
        assert_eq!(checked_pow(&int(2), &int(-1)), None);
        assert_eq!(checked_pow(&int(2), &(int(MAX_EXPONENT) + 1)), None);
    }
}
