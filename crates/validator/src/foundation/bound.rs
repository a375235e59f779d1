//! Conversion of builder arguments into length bounds.
//!
//! Bounds are counts, so they must be non-negative integers. Integer
//! arguments are checked for sign; floating-point arguments are also
//! checked for a fractional part. Either way the check happens when the
//! rule is configured, not when it runs.

use crate::foundation::{BuildError, RuleKind};

/// An argument accepted by `max_len`, `min_len`, `len` and `decimal`.
pub trait IntoBound {
    /// Converts `self` into a bound for `rule`.
    fn into_bound(self, rule: RuleKind) -> Result<usize, BuildError>;
}

macro_rules! impl_unsigned_bound {
    ($($ty:ty),*) => {
        $(
            impl IntoBound for $ty {
                fn into_bound(self, _rule: RuleKind) -> Result<usize, BuildError> {
                    Ok(usize::try_from(self).unwrap_or(usize::MAX))
                }
            }
        )*
    };
}

macro_rules! impl_signed_bound {
    ($($ty:ty),*) => {
        $(
            impl IntoBound for $ty {
                fn into_bound(self, rule: RuleKind) -> Result<usize, BuildError> {
                    usize::try_from(self).map_err(|_| BuildError::NegativeBound {
                        rule,
                        value: self as f64,
                    })
                }
            }
        )*
    };
}

impl_unsigned_bound!(u8, u16, u32, u64, usize);
impl_signed_bound!(i8, i16, i32, i64, isize);

impl IntoBound for f64 {
    fn into_bound(self, rule: RuleKind) -> Result<usize, BuildError> {
        if !self.is_finite() || self.fract() != 0.0 {
            return Err(BuildError::NonIntegerBound { rule, value: self });
        }
        if self < 0.0 {
            return Err(BuildError::NegativeBound { rule, value: self });
        }
        Ok(self as usize)
    }
}

impl IntoBound for f32 {
    fn into_bound(self, rule: RuleKind) -> Result<usize, BuildError> {
        f64::from(self).into_bound(rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_bounds() {
        assert_eq!(10_usize.into_bound(RuleKind::MaxLength), Ok(10));
        assert_eq!(4_i32.into_bound(RuleKind::MinLength), Ok(4));
        assert_eq!(0_u8.into_bound(RuleKind::Length), Ok(0));
    }

    #[test]
    fn test_negative_bound_rejected() {
        assert_eq!(
            (-1_i64).into_bound(RuleKind::Length),
            Err(BuildError::NegativeBound {
                rule: RuleKind::Length,
                value: -1.0,
            })
        );
        assert!(matches!(
            (-3.0_f64).into_bound(RuleKind::Decimal),
            Err(BuildError::NegativeBound { .. })
        ));
    }

    #[test]
    fn test_float_bounds() {
        assert_eq!(2.0_f64.into_bound(RuleKind::Length), Ok(2));
        assert_eq!(
            2.5_f64.into_bound(RuleKind::MaxLength),
            Err(BuildError::NonIntegerBound {
                rule: RuleKind::MaxLength,
                value: 2.5,
            })
        );
        assert!(f64::NAN.into_bound(RuleKind::MinLength).is_err());
        assert!(f32::INFINITY.into_bound(RuleKind::MinLength).is_err());
    }
}
