use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{Signed, Zero};

use crate::bigdec_poly::BigDecPoly;
use crate::integer_poly::IntPoly;

/// Degree below which Karatsuba recursion falls back to the schoolbook
/// product.
const KARATSUBA_THRESHOLD: usize = 32;

/// A polynomial with arbitrary-precision integer coefficients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BigIntPoly {
    pub coeffs: Vec<BigInt>,
}

impl BigIntPoly {
    pub fn new(coeffs: Vec<BigInt>) -> Self {
        BigIntPoly { coeffs }
    }

    pub fn zero(n: usize) -> Self {
        BigIntPoly {
            coeffs: vec![BigInt::zero(); n],
        }
    }

    pub fn from_int_poly(poly: &IntPoly) -> Self {
        BigIntPoly {
            coeffs: poly.coeffs.iter().map(|&c| BigInt::from(c)).collect(),
        }
    }

    /// Converts back to machine integers; `None` when a coefficient does
    /// not fit an i64.
    pub fn to_int_poly(&self) -> Option<IntPoly> {
        let mut coeffs = Vec::with_capacity(self.coeffs.len());
        for c in &self.coeffs {
            coeffs.push(i64::try_from(c).ok()?);
        }
        Some(IntPoly::new(coeffs))
    }

    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    pub fn add(&mut self, other: &BigIntPoly) {
        assert_eq!(self.coeffs.len(), other.coeffs.len());
        for i in 0..self.coeffs.len() {
            self.coeffs[i] += &other.coeffs[i];
        }
    }

    pub fn sub(&mut self, other: &BigIntPoly) {
        assert_eq!(self.coeffs.len(), other.coeffs.len());
        for i in 0..self.coeffs.len() {
            self.coeffs[i] -= &other.coeffs[i];
        }
    }

    /// Multiplies every coefficient by a constant factor
    pub fn mult_fac(&mut self, factor: &BigInt) {
        for c in &mut self.coeffs {
            *c *= factor;
        }
    }

    /// Product in the ring Z[X]/(X^N - 1): the open product folded back
    /// to length N.
    pub fn mult(&self, other: &BigIntPoly) -> BigIntPoly {
        assert_eq!(
            self.coeffs.len(),
            other.coeffs.len(),
            "polynomials must have the same number of coefficients"
        );
        let n = self.coeffs.len();
        let plain = Self::mult_plain_karatsuba(&self.coeffs, &other.coeffs);
        let mut folded = vec![BigInt::zero(); n];
        for (k, c) in plain.into_iter().enumerate() {
            if k < n {
                folded[k] += c;
            } else {
                folded[k - n] += c;
            }
        }
        BigIntPoly::new(folded)
    }

    /// Open schoolbook product of two coefficient slices, length
    /// a.len() + b.len() - 1.
    pub fn mult_plain_schoolbook(a: &[BigInt], b: &[BigInt]) -> Vec<BigInt> {
        let mut out = vec![BigInt::zero(); a.len() + b.len() - 1];
        for (i, ai) in a.iter().enumerate() {
            if ai.is_zero() {
                continue;
            }
            for (j, bj) in b.iter().enumerate() {
                out[i + j] += ai * bj;
            }
        }
        out
    }

    /// Open Karatsuba product of two equal-length coefficient slices:
    /// split at n/2, recurse on the low halves, the high halves and the
    /// half-sums, and recombine with the three-product identity.
    pub fn mult_plain_karatsuba(a: &[BigInt], b: &[BigInt]) -> Vec<BigInt> {
        assert_eq!(a.len(), b.len());
        let n = a.len();
        if n < KARATSUBA_THRESHOLD {
            return Self::mult_plain_schoolbook(a, b);
        }
        let n1 = n / 2;
        let (a1, a2) = a.split_at(n1);
        let (b1, b2) = b.split_at(n1);

        let c1 = Self::mult_plain_karatsuba(a1, b1);
        let c3 = Self::mult_plain_karatsuba(a2, b2);

        // half-sums padded to the length of the high halves
        let mut sa = a2.to_vec();
        for (i, ai) in a1.iter().enumerate() {
            sa[i] += ai;
        }
        let mut sb = b2.to_vec();
        for (i, bi) in b1.iter().enumerate() {
            sb[i] += bi;
        }
        let mut c2 = Self::mult_plain_karatsuba(&sa, &sb);
        for (i, c) in c1.iter().enumerate() {
            c2[i] -= c;
        }
        for (i, c) in c3.iter().enumerate() {
            c2[i] -= c;
        }

        let mut out = vec![BigInt::zero(); 2 * n - 1];
        for (i, c) in c1.into_iter().enumerate() {
            out[i] += c;
        }
        for (i, c) in c2.into_iter().enumerate() {
            out[i + n1] += c;
        }
        for (i, c) in c3.into_iter().enumerate() {
            out[i + 2 * n1] += c;
        }
        out
    }

    /// Reduces every coefficient into [0, m)
    pub fn mod_positive(&mut self, m: &BigInt) {
        for c in &mut self.coeffs {
            *c = mod_floor(c, m);
        }
    }

    /// Shifts every coefficient into (-m/2, m/2]
    pub fn center(&mut self, m: &BigInt) {
        for c in &mut self.coeffs {
            *c = mod_floor(c, m);
            if &*c * 2 > *m {
                *c -= m;
            }
        }
    }

    /// Bit length of the largest coefficient magnitude
    pub fn max_coeff_bits(&self) -> u64 {
        self.coeffs.iter().map(|c| c.bits()).max().unwrap_or(0)
    }

    /// Divides every coefficient by `divisor`, keeping `decimal_places`
    /// digits after the decimal point.
    pub fn div_round(&self, divisor: &BigInt, decimal_places: u64) -> BigDecPoly {
        let scale = BigInt::from(10).pow(decimal_places as u32);
        let coeffs = self
            .coeffs
            .iter()
            .map(|c| BigDecimal::new((c * &scale) / divisor, decimal_places as i64))
            .collect();
        BigDecPoly::new(coeffs)
    }
}

pub(crate) fn mod_floor(x: &BigInt, m: &BigInt) -> BigInt {
    let r = x % m;
    if r.is_negative() {
        r + m
    } else {
        r
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    fn random_coeffs(n: usize, rng: &mut ChaCha20Rng) -> Vec<BigInt> {
        (0..n).map(|_| BigInt::from(rng.gen_range(-10_000i64..10_000))).collect()
    }

    #[test]
    fn test_karatsuba_agrees_with_schoolbook() {
        let mut rng = ChaCha20Rng::from_seed([20u8; 32]);
        for n in [1, 2, 31, 32, 33, 64, 100] {
            let a = random_coeffs(n, &mut rng);
            let b = random_coeffs(n, &mut rng);
            assert_eq!(
                BigIntPoly::mult_plain_karatsuba(&a, &b),
                BigIntPoly::mult_plain_schoolbook(&a, &b),
                "degree {}",
                n
            );
        }
    }

    #[test]
    fn test_circular_mult_matches_int_poly() {
        let a = IntPoly::new(vec![4, -1, 9, 2, 1, -5, 12, -7, 0, -9, 5]);
        let b = IntPoly::new(vec![-6, 0, 0, 13, 3, -2, -4, 10, 11, 2, -1]);
        let expected = a.mult(&b);

        let big = BigIntPoly::from_int_poly(&a).mult(&BigIntPoly::from_int_poly(&b));
        assert_eq!(big.to_int_poly().unwrap(), expected);
    }

    #[test]
    fn test_mod_and_center() {
        let m = BigInt::from(8);
        let mut p = BigIntPoly::new(vec![
            BigInt::from(-5),
            BigInt::from(12),
            BigInt::from(7),
        ]);
        p.mod_positive(&m);
        assert_eq!(
            p.coeffs,
            vec![BigInt::from(3), BigInt::from(4), BigInt::from(7)]
        );
        p.center(&m);
        assert_eq!(
            p.coeffs,
            vec![BigInt::from(3), BigInt::from(4), BigInt::from(-1)]
        );
    }

    #[test]
    fn test_div_round() {
        let p = BigIntPoly::new(vec![BigInt::from(10), BigInt::from(-7)]);
        let dec = p.div_round(&BigInt::from(4), 3);
        assert_eq!(dec.coeffs[0], BigDecimal::new(BigInt::from(2500), 3));
        assert_eq!(dec.coeffs[1], BigDecimal::new(BigInt::from(-1750), 3));
    }
}
