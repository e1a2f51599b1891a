use num_bigint::BigInt;
use num_traits::{One, Zero};

use crate::bigint_poly::{mod_floor, BigIntPoly};
use crate::euclid;
use crate::integer_poly::IntPoly;

/// Resultant of a polynomial f with X^N - 1 over the integers, together
/// with a polynomial rho satisfying f * rho = res (mod X^N - 1).
#[derive(Debug, Clone)]
pub struct Resultant {
    pub rho: BigIntPoly,
    pub res: BigInt,
}

/// A resultant known modulo `modulus`, the unit of CRT combination.
#[derive(Debug, Clone)]
pub struct ModularResultant {
    pub rho: BigIntPoly,
    pub res: BigInt,
    pub modulus: BigInt,
}

impl ModularResultant {
    /// Combines two modular resultants over coprime moduli into one over
    /// the product modulus.
    pub fn combine(r1: &ModularResultant, r2: &ModularResultant) -> ModularResultant {
        let (_, x, y) = euclid::extended_euclidean_big(&r1.modulus, &r2.modulus);
        // x*m1 + y*m2 = 1, so y*m2 = 1 (mod m1) and x*m1 = 1 (mod m2)
        let m = &r1.modulus * &r2.modulus;
        let c1 = mod_floor(&(&y * &r2.modulus), &m);
        let c2 = mod_floor(&(&x * &r1.modulus), &m);

        let res = mod_floor(&(&r1.res * &c1 + &r2.res * &c2), &m);
        let n = r1.rho.len();
        let mut rho = BigIntPoly::zero(n);
        for i in 0..n {
            rho.coeffs[i] = mod_floor(
                &(&r1.rho.coeffs[i] * &c1 + &r2.rho.coeffs[i] * &c2),
                &m,
            );
        }
        ModularResultant {
            rho,
            res,
            modulus: m,
        }
    }
}

impl IntPoly {
    /// Resultant of this polynomial with X^N - 1 modulo the prime `p`,
    /// via the Euclidean algorithm in GF(p)[X]. Alongside the resultant
    /// recurrence, the cofactor u with r = u*f (mod X^N - 1) is tracked;
    /// scaling it by res/c, where c is the final constant remainder,
    /// yields rho. Returns `None` when f shares a factor with X^N - 1
    /// mod p (the resultant vanishes there), so the caller can skip the
    /// prime.
    pub fn resultant_mod(&self, p: i64) -> Option<ModularResultant> {
        let n = self.coeffs.len();
        // a = X^N - 1, b = f, and their cofactors with respect to f
        let mut a = vec![0i64; n + 1];
        a[0] = p - 1;
        a[n] = 1;
        let mut b: Vec<i64> = self.coeffs.iter().map(|&x| x.rem_euclid(p)).collect();
        b.push(0);
        let mut ua = vec![0i64; n + 1];
        let mut ub = vec![0i64; n + 1];
        ub[0] = 1;

        let mut res = 1i64;
        let mut deg_a = n;
        loop {
            let deg_b = match nonzero_degree(&b) {
                Some(d) => d,
                None => return None,
            };
            if deg_b == 0 {
                let c = b[0];
                res = res * pow_mod(c, deg_a as u64, p) % p;
                // rho = ub * c^{-1} * res
                let scale = euclid::invert_mod(c, p)? * res % p;
                let mut rho = BigIntPoly::zero(n);
                for i in 0..n {
                    rho.coeffs[i] = BigInt::from(ub[i] * scale % p);
                }
                return Some(ModularResultant {
                    rho,
                    res: BigInt::from(res),
                    modulus: BigInt::from(p),
                });
            }

            // a mod b, applying each quotient step to the cofactor too
            let lead_inv = euclid::invert_mod(b[deg_b], p)?;
            loop {
                let deg_r = match nonzero_degree(&a) {
                    Some(d) if d >= deg_b => d,
                    _ => break,
                };
                let coef = a[deg_r] * lead_inv % p;
                let shift = deg_r - deg_b;
                for i in 0..=deg_b {
                    a[shift + i] = (a[shift + i] - coef * b[i]).rem_euclid(p);
                }
                for i in 0..=n - shift {
                    ua[shift + i] = (ua[shift + i] - coef * ub[i]).rem_euclid(p);
                }
            }

            let deg_r = match nonzero_degree(&a) {
                Some(d) => d,
                // b divides a, so the gcd is not constant
                None => return None,
            };
            // Res(a, b) = (-1)^(deg_a * deg_b) * lc(b)^(deg_a - deg_r) * Res(b, r)
            res = res * pow_mod(b[deg_b], (deg_a - deg_r) as u64, p) % p;
            if (deg_a * deg_b) % 2 == 1 {
                res = (p - res) % p;
            }
            std::mem::swap(&mut a, &mut b);
            std::mem::swap(&mut ua, &mut ub);
            deg_a = deg_b;
        }
    }

    /// Resultant of this polynomial with X^N - 1 over the integers,
    /// combined by CRT from modular resultants until the running modulus
    /// clears a Hadamard-style bound on |res|, then center-lifted.
    pub fn resultant(&self) -> Resultant {
        let n = self.coeffs.len();
        if self.is_zero() {
            return Resultant {
                rho: BigIntPoly::zero(n),
                res: BigInt::zero(),
            };
        }

        // |res| <= ||f||^deg(g) * ||g||^deg(f) with g = X^N - 1
        let half = (n as u32 + 1) / 2;
        let square_sum: BigInt = self.coeffs.iter().map(|&c| BigInt::from(c * c)).sum();
        let bound = square_sum.pow(half) * BigInt::from(2).pow(half);
        let stop = &bound * 2;

        let mut prime = 10_000i64;
        let mut p_prod = BigInt::one();
        let mut combined: Option<ModularResultant> = None;
        let mut skipped = 0;
        while p_prod < stop {
            prime = next_prime(prime);
            if prime % n as i64 == 0 || n as i64 % prime == 0 {
                continue;
            }
            match self.resultant_mod(prime) {
                None => {
                    // f degenerates mod this prime; a long run of those
                    // means the resultant itself is zero
                    skipped += 1;
                    if skipped > 100 {
                        return Resultant {
                            rho: BigIntPoly::zero(n),
                            res: BigInt::zero(),
                        };
                    }
                }
                Some(partial) => {
                    skipped = 0;
                    p_prod *= &partial.modulus;
                    combined = Some(match combined {
                        None => partial,
                        Some(acc) => ModularResultant::combine(&acc, &partial),
                    });
                }
            }
        }

        let Some(overall) = combined else {
            return Resultant {
                rho: BigIntPoly::zero(n),
                res: BigInt::zero(),
            };
        };
        let mut rho = overall.rho;
        rho.center(&p_prod);
        let mut res = mod_floor(&overall.res, &p_prod);
        if &res * 2 > p_prod {
            res -= &p_prod;
        }
        Resultant { rho, res }
    }
}

fn nonzero_degree(v: &[i64]) -> Option<usize> {
    v.iter().rposition(|&x| x != 0)
}

fn pow_mod(base: i64, mut exp: u64, m: i64) -> i64 {
    let mut base = base.rem_euclid(m);
    let mut result = 1i64;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % m;
        }
        base = base * base % m;
        exp >>= 1;
    }
    result
}

fn is_prime(x: i64) -> bool {
    if x < 2 {
        return false;
    }
    if x % 2 == 0 {
        return x == 2;
    }
    let mut d = 3;
    while d * d <= x {
        if x % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

/// Smallest prime strictly greater than `after`
fn next_prime(after: i64) -> i64 {
    let mut candidate = if after % 2 == 0 { after + 1 } else { after + 2 };
    while !is_prime(candidate) {
        candidate += 2;
    }
    candidate
}
