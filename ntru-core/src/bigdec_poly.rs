use bigdecimal::{BigDecimal, RoundingMode};
use num_bigint::BigInt;
use num_traits::Zero;

use crate::bigint_poly::BigIntPoly;

/// A polynomial with high-precision decimal coefficients, used for the
/// inverse-resultant step of basis reduction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BigDecPoly {
    pub coeffs: Vec<BigDecimal>,
}

impl BigDecPoly {
    pub fn new(coeffs: Vec<BigDecimal>) -> Self {
        BigDecPoly { coeffs }
    }

    pub fn zero(n: usize) -> Self {
        BigDecPoly {
            coeffs: vec![BigDecimal::zero(); n],
        }
    }

    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    pub fn add(&mut self, other: &BigDecPoly) {
        assert_eq!(self.coeffs.len(), other.coeffs.len());
        for i in 0..self.coeffs.len() {
            self.coeffs[i] = &self.coeffs[i] + &other.coeffs[i];
        }
    }

    /// Product with an integer polynomial, folded mod X^N - 1. Decimal
    /// multiplication is exact, so no precision is lost here.
    pub fn mult(&self, other: &BigIntPoly) -> BigDecPoly {
        assert_eq!(
            self.coeffs.len(),
            other.coeffs.len(),
            "polynomials must have the same number of coefficients"
        );
        let n = self.coeffs.len();
        let mut result = vec![BigDecimal::zero(); n];
        for i in 0..n {
            if self.coeffs[i].is_zero() {
                continue;
            }
            for j in 0..n {
                let mut k = i + j;
                if k >= n {
                    k -= n;
                }
                result[k] += &self.coeffs[i] * BigDecimal::from(other.coeffs[j].clone());
            }
        }
        BigDecPoly::new(result)
    }

    /// Divides every coefficient by two (exactly)
    pub fn halve(&mut self) {
        let half = BigDecimal::new(BigInt::from(5), 1);
        for c in &mut self.coeffs {
            *c = &*c * &half;
        }
    }

    /// Rounds every coefficient to the nearest integer, ties to even
    pub fn round(&self) -> BigIntPoly {
        let coeffs = self
            .coeffs
            .iter()
            .map(|c| {
                c.with_scale_round(0, RoundingMode::HalfEven)
                    .as_bigint_and_exponent()
                    .0
            })
            .collect();
        BigIntPoly::new(coeffs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(digits: i64, scale: i64) -> BigDecimal {
        BigDecimal::new(BigInt::from(digits), scale)
    }

    #[test]
    fn test_round_ties_to_even() {
        let p = BigDecPoly::new(vec![
            dec(25, 1),  // 2.5 -> 2
            dec(35, 1),  // 3.5 -> 4
            dec(-25, 1), // -2.5 -> -2
            dec(17, 1),  // 1.7 -> 2
            dec(-17, 1), // -1.7 -> -2
        ]);
        let rounded = p.round();
        assert_eq!(
            rounded.coeffs,
            vec![
                BigInt::from(2),
                BigInt::from(4),
                BigInt::from(-2),
                BigInt::from(2),
                BigInt::from(-2)
            ]
        );
    }

    #[test]
    fn test_halve() {
        let mut p = BigDecPoly::new(vec![dec(3, 0), dec(-7, 0)]);
        p.halve();
        assert_eq!(p.coeffs, vec![dec(15, 1), dec(-35, 1)]);
    }

    #[test]
    fn test_mult_folds_circularly() {
        let a = BigDecPoly::new(vec![dec(1, 0), dec(2, 0), dec(3, 0)]);
        let b = BigIntPoly::new(vec![BigInt::from(0), BigInt::from(1), BigInt::from(0)]);
        // (1 + 2X + 3X^2) * X = 3 + X + 2X^2 mod X^3 - 1
        let c = a.mult(&b);
        assert_eq!(c.coeffs, vec![dec(3, 0), dec(1, 0), dec(2, 0)]);
    }
}
