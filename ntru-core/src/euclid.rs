use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

/// Extended Euclidean algorithm over the integers.
///
/// Returns `(gcd, x, y)` such that `a*x + b*y = gcd(a, b)`.
pub fn extended_euclidean(a: i64, b: i64) -> (i64, i64, i64) {
    let (mut old_r, mut r) = (a, b);
    let (mut old_s, mut s) = (1i64, 0i64);
    let (mut old_t, mut t) = (0i64, 1i64);

    while r != 0 {
        let quotient = old_r / r;

        let tmp = r;
        r = old_r - quotient * r;
        old_r = tmp;

        let tmp = s;
        s = old_s - quotient * s;
        old_s = tmp;

        let tmp = t;
        t = old_t - quotient * t;
        old_t = tmp;
    }

    (old_r, old_s, old_t)
}

/// Extended Euclidean algorithm for arbitrary-precision integers.
///
/// Returns `(gcd, x, y)` such that `a*x + b*y = gcd(a, b)`.
pub fn extended_euclidean_big(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    let (mut old_t, mut t) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let quotient = &old_r / &r;

        let tmp = r.clone();
        r = old_r - &quotient * &r;
        old_r = tmp;

        let tmp = s.clone();
        s = old_s - &quotient * &s;
        old_s = tmp;

        let tmp = t.clone();
        t = old_t - &quotient * &t;
        old_t = tmp;
    }

    if old_r.is_negative() {
        (-old_r, -old_s, -old_t)
    } else {
        (old_r, old_s, old_t)
    }
}

/// Multiplicative inverse of `a` modulo `m`, or `None` when gcd(a, m) != 1.
pub fn invert_mod(a: i64, m: i64) -> Option<i64> {
    let (gcd, x, _) = extended_euclidean(a.rem_euclid(m), m);
    if gcd == 1 {
        Some(x.rem_euclid(m))
    } else {
        None
    }
}
