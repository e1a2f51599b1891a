use std::fmt;

use zeroize::Zeroize;

use crate::encode::{bit_width, BitReader, BitWriter, EncodeError};

/// Trit pair produced by each 3-bit group of the SVES message codec.
const SVES_COEFF1: [i64; 8] = [0, 0, 0, 1, 1, 1, -1, -1];
const SVES_COEFF2: [i64; 8] = [0, 1, -1, 0, 1, -1, 0, 1];

/// A polynomial with integer coefficients in the ring Z[X]/(X^N - 1).
///
/// All index arithmetic is circular; the coefficient vector has fixed
/// length N for the lifetime of the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntPoly {
    /// Coefficients, ordered from degree 0 to degree N-1
    pub coeffs: Vec<i64>,
}

impl IntPoly {
    pub fn new(coeffs: Vec<i64>) -> Self {
        IntPoly { coeffs }
    }

    /// Creates a new zero polynomial of length `n`
    pub fn zero(n: usize) -> Self {
        IntPoly { coeffs: vec![0; n] }
    }

    /// Creates a constant polynomial of length `n`
    pub fn constant(n: usize, value: i64) -> Self {
        let mut poly = Self::zero(n);
        poly.coeffs[0] = value;
        poly
    }

    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Multiplies two polynomials using the schoolbook algorithm, with
    /// degrees folded mod X^N - 1. Coefficients are exact (not reduced).
    pub fn mult(&self, other: &IntPoly) -> IntPoly {
        assert_eq!(
            self.coeffs.len(),
            other.coeffs.len(),
            "polynomials must have the same number of coefficients"
        );
        let n = self.coeffs.len();
        let mut result = vec![0i64; n];
        for i in 0..n {
            let a = self.coeffs[i];
            if a == 0 {
                continue;
            }
            for j in 0..n {
                let mut k = i + j;
                if k >= n {
                    k -= n;
                }
                result[k] += a * other.coeffs[j];
            }
        }
        IntPoly::new(result)
    }

    /// Multiplies two polynomials and reduces the result into [0, modulus)
    pub fn mult_mod(&self, other: &IntPoly, modulus: i64) -> IntPoly {
        let mut result = self.mult(other);
        result.mod_positive(modulus);
        result
    }

    /// Adds another polynomial in place
    pub fn add(&mut self, other: &IntPoly) {
        assert_eq!(self.coeffs.len(), other.coeffs.len());
        for i in 0..self.coeffs.len() {
            self.coeffs[i] += other.coeffs[i];
        }
    }

    /// Adds another polynomial and reduces into [0, modulus)
    pub fn add_mod(&mut self, other: &IntPoly, modulus: i64) {
        self.add(other);
        self.mod_positive(modulus);
    }

    /// Subtracts another polynomial in place
    pub fn sub(&mut self, other: &IntPoly) {
        assert_eq!(self.coeffs.len(), other.coeffs.len());
        for i in 0..self.coeffs.len() {
            self.coeffs[i] -= other.coeffs[i];
        }
    }

    /// Subtracts another polynomial and reduces into [0, modulus)
    pub fn sub_mod(&mut self, other: &IntPoly, modulus: i64) {
        self.sub(other);
        self.mod_positive(modulus);
    }

    /// Multiplies every coefficient by a constant factor
    pub fn mult_fac(&mut self, factor: i64) {
        for c in &mut self.coeffs {
            *c *= factor;
        }
    }

    /// Multiplies by 3 and reduces into [0, q); the `h = p*g*fq` step
    pub fn mult3(&mut self, q: i64) {
        for c in &mut self.coeffs {
            *c = (*c * 3).rem_euclid(q);
        }
    }

    /// Reduces every coefficient into [0, modulus)
    pub fn mod_positive(&mut self, modulus: i64) {
        for c in &mut self.coeffs {
            *c = c.rem_euclid(modulus);
        }
    }

    /// Adds `modulus` to negative coefficients until they are nonnegative
    pub fn ensure_positive(&mut self, modulus: i64) {
        for c in &mut self.coeffs {
            while *c < 0 {
                *c += modulus;
            }
        }
    }

    /// Shifts every coefficient into the interval (-modulus/2, modulus/2]
    pub fn center0(&mut self, modulus: i64) {
        for c in &mut self.coeffs {
            while 2 * *c <= -modulus {
                *c += modulus;
            }
            while 2 * *c > modulus {
                *c -= modulus;
            }
        }
    }

    /// Full reduction followed by the centered representative
    pub fn mod_center(&mut self, modulus: i64) {
        for c in &mut self.coeffs {
            *c = c.rem_euclid(modulus);
            if 2 * *c > modulus {
                *c -= modulus;
            }
        }
    }

    /// Reduces every coefficient mod 3 to a trit in {-1, 0, 1}
    pub fn mod3(&mut self) {
        for c in &mut self.coeffs {
            *c = c.rem_euclid(3);
            if *c == 2 {
                *c = -1;
            }
        }
    }

    /// Number of coefficients equal to `value`
    pub fn count(&self, value: i64) -> usize {
        self.coeffs.iter().filter(|&&c| c == value).count()
    }

    /// Degree of the highest nonzero coefficient (0 for the zero polynomial)
    pub fn degree(&self) -> usize {
        self.coeffs.iter().rposition(|&c| c != 0).unwrap_or(0)
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|&c| c == 0)
    }

    /// Whether the polynomial is the constant 1
    pub fn eq_one(&self) -> bool {
        self.coeffs[0] == 1 && self.coeffs[1..].iter().all(|&c| c == 0)
    }

    /// Overwrites every coefficient with zero
    pub fn clear(&mut self) {
        self.coeffs.as_mut_slice().zeroize();
    }

    /// Inverse of this polynomial mod 2, computed with the almost inverse
    /// algorithm over GF(2)[X]/(X^N - 1). Returns `None` when the
    /// polynomial is not invertible. The source polynomial is unchanged.
    pub fn invert_f2(&self) -> Option<IntPoly> {
        let n = self.coeffs.len();
        let mut k = 0usize;
        let mut b = vec![0i64; n + 1];
        b[0] = 1;
        let mut c = vec![0i64; n + 1];
        let mut f: Vec<i64> = self.coeffs.iter().map(|&x| x.rem_euclid(2)).collect();
        f.push(0);
        // g(X) = X^N - 1, which is X^N + 1 over GF(2)
        let mut g = vec![0i64; n + 1];
        g[0] = 1;
        g[n] = 1;

        loop {
            while f[0] == 0 {
                // f(X) = f(X) / X, c(X) = c(X) * X
                for i in 1..=n {
                    f[i - 1] = f[i];
                }
                f[n] = 0;
                for i in (1..=n).rev() {
                    c[i] = c[i - 1];
                }
                c[0] = 0;
                k += 1;
                if f.iter().all(|&x| x == 0) {
                    return None;
                }
            }
            if slice_degree(&f) == 0 {
                break;
            }
            if slice_degree(&f) < slice_degree(&g) {
                std::mem::swap(&mut f, &mut g);
                std::mem::swap(&mut b, &mut c);
            }
            for i in 0..=n {
                f[i] = (f[i] + g[i]) & 1;
                b[i] = (b[i] + c[i]) & 1;
            }
        }

        if b[n] != 0 {
            return None;
        }
        // inverse = b(X) * X^(N-k)
        Some(rotate_result(&b, k, n))
    }

    /// Inverse of this polynomial mod `q` for q a power of two: the mod-2
    /// inverse lifted with b <- 2b - a*b^2 until the working modulus
    /// reaches q. Returns `None` when the mod-2 inverse does not exist.
    pub fn invert_fq(&self, q: i64) -> Option<IntPoly> {
        let mut fq = self.invert_f2()?;
        let mut v = 2i64;
        while v < q {
            v *= v;
            let mut a = self.clone();
            a.mod_positive(v);
            let mut temp = fq.clone();
            temp.mult_fac(2);
            let prod = a.mult_mod(&fq, v).mult_mod(&fq, v);
            temp.sub(&prod);
            temp.mod_positive(v);
            fq = temp;
        }
        fq.mod_positive(q);
        Some(fq)
    }

    /// Inverse of this polynomial mod 3, computed with the almost inverse
    /// algorithm over GF(3)[X]/(X^N - 1). Coefficients of the result are
    /// in {0, 1, 2}. Returns `None` when the polynomial is not invertible.
    pub fn invert_f3(&self) -> Option<IntPoly> {
        let n = self.coeffs.len();
        let mut k = 0usize;
        let mut b = vec![0i64; n + 1];
        b[0] = 1;
        let mut c = vec![0i64; n + 1];
        let mut f: Vec<i64> = self.coeffs.iter().map(|&x| x.rem_euclid(3)).collect();
        f.push(0);
        // g(X) = X^N - 1
        let mut g = vec![0i64; n + 1];
        g[0] = 2;
        g[n] = 1;

        loop {
            while f[0] == 0 {
                for i in 1..=n {
                    f[i - 1] = f[i];
                }
                f[n] = 0;
                for i in (1..=n).rev() {
                    c[i] = c[i - 1];
                }
                c[0] = 0;
                k += 1;
                if f.iter().all(|&x| x == 0) {
                    return None;
                }
            }
            if slice_degree(&f) == 0 {
                break;
            }
            if slice_degree(&f) < slice_degree(&g) {
                std::mem::swap(&mut f, &mut g);
                std::mem::swap(&mut b, &mut c);
            }
            if f[0] == g[0] {
                for i in 0..=n {
                    f[i] = (f[i] - g[i]).rem_euclid(3);
                    b[i] = (b[i] - c[i]).rem_euclid(3);
                }
            } else {
                for i in 0..=n {
                    f[i] = (f[i] + g[i]) % 3;
                    b[i] = (b[i] + c[i]) % 3;
                }
            }
        }

        if b[n] != 0 {
            return None;
        }
        // inverse = f0 * b(X) * X^(N-k), f0 is the unit the loop ended on
        let f0 = f[0];
        let mut inv = rotate_result(&b, k, n);
        for c in &mut inv.coeffs {
            *c = (*c * f0) % 3;
        }
        Some(inv)
    }

    /// Packs each coefficient as ceil(log2 q) bits, MSB-first,
    /// coefficients in order 0..N-1
    pub fn to_binary(&self, q: i64) -> Vec<u8> {
        let bits = bit_width(q as u64);
        let mut writer = BitWriter::with_capacity(self.coeffs.len() * bits);
        for &c in &self.coeffs {
            writer.write(c.rem_euclid(q) as u64, bits);
        }
        writer.into_bytes()
    }

    /// Reverse of `to_binary`; coefficients land in [0, q)
    pub fn from_binary(data: &[u8], n: usize, q: i64) -> Result<IntPoly, EncodeError> {
        let bits = bit_width(q as u64);
        let mut reader = BitReader::new(data);
        let mut coeffs = Vec::with_capacity(n);
        for _ in 0..n {
            coeffs.push(reader.read(bits)? as i64);
        }
        Ok(IntPoly::new(coeffs))
    }

    /// Packs 5 trits per byte: byte = t0 + 3*t1 + 9*t2 + 27*t3 + 81*t4
    /// with the trit mapping 0->0, 1->1, -1->2. A final group of fewer
    /// than 5 trits packs identically with the high trits zero.
    pub fn to_binary3_tight(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity((self.coeffs.len() + 4) / 5);
        for chunk in self.coeffs.chunks(5) {
            let mut byte = 0i64;
            let mut base = 1i64;
            for &c in chunk {
                byte += c.rem_euclid(3) * base;
                base *= 3;
            }
            out.push(byte as u8);
        }
        out
    }

    /// Reverse of `to_binary3_tight`
    pub fn from_binary3_tight(data: &[u8], n: usize) -> Result<IntPoly, EncodeError> {
        let needed = (n + 4) / 5;
        if data.len() < needed {
            return Err(EncodeError::ShortInput);
        }
        let mut coeffs = vec![0i64; n];
        let mut idx = 0;
        for &byte in &data[..needed] {
            if byte > 242 {
                return Err(EncodeError::InvalidEncoding);
            }
            let mut v = byte as i64;
            for _ in 0..5 {
                if idx == n {
                    break;
                }
                let trit = v % 3;
                coeffs[idx] = if trit == 2 { -1 } else { trit };
                idx += 1;
                v /= 3;
            }
            // trits past the last coefficient must be zero
            if v != 0 {
                return Err(EncodeError::InvalidEncoding);
            }
        }
        Ok(IntPoly::new(coeffs))
    }

    /// Packs 2 bits per trit, MSB-first within each byte:
    /// 00 -> 0, 01 -> 1, 10 -> -1. The pattern 11 is reserved.
    pub fn to_binary3_arith(&self) -> Vec<u8> {
        let mut writer = BitWriter::with_capacity(self.coeffs.len() * 2);
        for &c in &self.coeffs {
            let pair = match c.rem_euclid(3) {
                0 => 0u64,
                1 => 1,
                _ => 2,
            };
            writer.write(pair, 2);
        }
        writer.into_bytes()
    }

    /// Reverse of `to_binary3_arith`; the reserved pattern 11 is rejected
    pub fn from_binary3_arith(data: &[u8], n: usize) -> Result<IntPoly, EncodeError> {
        let mut reader = BitReader::new(data);
        let mut coeffs = Vec::with_capacity(n);
        for _ in 0..n {
            let trit = match reader.read(2)? {
                0 => 0,
                1 => 1,
                2 => -1,
                _ => return Err(EncodeError::InvalidEncoding),
            };
            coeffs.push(trit);
        }
        Ok(IntPoly::new(coeffs))
    }

    /// SVES message codec: each 3-bit group maps to two trits through an
    /// 8-entry table, filling at most N-1 coefficients. Invertible for
    /// every byte string, which makes it the byte <-> polynomial codec of
    /// the encryption scheme.
    pub fn from_binary3_sves(data: &[u8], n: usize) -> IntPoly {
        let mut coeffs = vec![0i64; n];
        let mut reader = BitReader::new(data);
        let mut i = 0;
        while i + 1 < n {
            let group = match reader.read(3) {
                Ok(g) => g as usize,
                Err(_) => break,
            };
            coeffs[i] = SVES_COEFF1[group];
            coeffs[i + 1] = SVES_COEFF2[group];
            i += 2;
        }
        IntPoly::new(coeffs)
    }

    /// Reverse of `from_binary3_sves`. Fails on the one trit pair the
    /// group table cannot produce, which only arises from a malformed
    /// message representative.
    pub fn to_binary3_sves(&self) -> Result<Vec<u8>, EncodeError> {
        let n = self.coeffs.len();
        let pairs = (n - 1) / 2;
        let mut writer = BitWriter::with_capacity(pairs * 3);
        for p in 0..pairs {
            let group = sves_group(self.coeffs[2 * p], self.coeffs[2 * p + 1])?;
            writer.write(group, 3);
        }
        Ok(writer.into_bytes())
    }
}

fn sves_group(t1: i64, t2: i64) -> Result<u64, EncodeError> {
    let high = match t1 {
        0 => 0u64,
        1 => 3,
        -1 => 6,
        _ => return Err(EncodeError::InvalidEncoding),
    };
    let low = match t2 {
        0 => 0u64,
        1 => 1,
        -1 => 2,
        _ => return Err(EncodeError::InvalidEncoding),
    };
    if high + low > 7 {
        // the pair (-1, -1) has no group
        return Err(EncodeError::InvalidEncoding);
    }
    Ok(high + low)
}

fn slice_degree(v: &[i64]) -> usize {
    v.iter().rposition(|&x| x != 0).unwrap_or(0)
}

/// Multiplies `b` by X^(N-k) mod X^N - 1, dropping the scratch coefficient
fn rotate_result(b: &[i64], k: usize, n: usize) -> IntPoly {
    let mut out = vec![0i64; n];
    let k = k % n;
    for i in (0..n).rev() {
        let j = if i < k { i + n - k } else { i - k };
        out[j] = b[i];
    }
    IntPoly::new(out)
}

impl fmt::Display for IntPoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, c) in self.coeffs.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn random_tern(n: usize, ones: usize, neg_ones: usize, rng: &mut ChaCha20Rng) -> IntPoly {
        let mut positions: Vec<usize> = (0..n).collect();
        for i in 0..(ones + neg_ones) {
            let j = i + rng.gen_range(0..n - i);
            positions.swap(i, j);
        }
        let mut coeffs = vec![0i64; n];
        for &p in &positions[..ones] {
            coeffs[p] = 1;
        }
        for &p in &positions[ones..ones + neg_ones] {
            coeffs[p] = -1;
        }
        IntPoly::new(coeffs)
    }

    #[test]
    fn test_mult_known_vector() {
        let a = IntPoly::new(vec![4, -1, 9, 2, 1, -5, 12, -7, 0, -9, 5]);
        let b = IntPoly::new(vec![-6, 0, 0, 13, 3, -2, -4, 10, 11, 2, -1]);
        let expected = vec![2, -189, 77, 124, -29, 0, -75, 124, -49, 267, 34];

        assert_eq!(a.mult(&b).coeffs, expected);
        assert_eq!(b.mult(&a).coeffs, expected);
    }

    #[test]
    fn test_mult_commutative_associative() {
        let mut rng = ChaCha20Rng::from_seed([7u8; 32]);
        for _ in 0..5 {
            let n = 23;
            let a = IntPoly::new((0..n).map(|_| rng.gen_range(-50..50)).collect());
            let b = IntPoly::new((0..n).map(|_| rng.gen_range(-50..50)).collect());
            let c = IntPoly::new((0..n).map(|_| rng.gen_range(-50..50)).collect());

            assert_eq!(a.mult(&b), b.mult(&a));
            assert_eq!(a.mult(&b).mult(&c), a.mult(&b.mult(&c)));
        }
    }

    #[test]
    fn test_reductions() {
        let mut p = IntPoly::new(vec![-5, 0, 7, 12, -12]);
        p.mod_positive(8);
        assert_eq!(p.coeffs, vec![3, 0, 7, 4, 4]);

        let mut p = IntPoly::new(vec![-5, 0, 7, 12, -12]);
        p.mod_center(8);
        assert_eq!(p.coeffs, vec![3, 0, -1, 4, 4]);

        let mut p = IntPoly::new(vec![5, -4, 2, -2]);
        p.center0(8);
        assert_eq!(p.coeffs, vec![-3, 4, 2, -2]);

        let mut p = IntPoly::new(vec![-1, 4, 2, -7]);
        p.ensure_positive(8);
        assert_eq!(p.coeffs, vec![7, 4, 2, 1]);

        let mut p = IntPoly::new(vec![-4, 5, 2, 3, 0]);
        p.mod3();
        assert_eq!(p.coeffs, vec![-1, -1, -1, 0, 0]);
    }

    #[test]
    fn test_mult3() {
        let mut p = IntPoly::new(vec![5, -1, 0, 700]);
        p.mult3(2048);
        assert_eq!(p.coeffs, vec![15, 2045, 0, 52]);
    }

    #[test]
    fn test_count() {
        let p = IntPoly::new(vec![1, -1, 0, 1, 0, 0]);
        assert_eq!(p.count(0), 3);
        assert_eq!(p.count(1), 2);
        assert_eq!(p.count(-1), 1);
    }

    #[test]
    fn test_invert_f2() {
        let mut rng = ChaCha20Rng::from_seed([1u8; 32]);
        let mut inverted = 0;
        while inverted < 3 {
            let f = random_tern(31, 6, 5, &mut rng);
            if let Some(inv) = f.invert_f2() {
                let mut prod = f.mult(&inv);
                prod.mod_positive(2);
                assert!(prod.eq_one());
                inverted += 1;
            }
        }
    }

    #[test]
    fn test_invert_f3() {
        let mut rng = ChaCha20Rng::from_seed([2u8; 32]);
        let mut inverted = 0;
        while inverted < 3 {
            let f = random_tern(31, 6, 5, &mut rng);
            if let Some(inv) = f.invert_f3() {
                let prod = f.mult_mod(&inv, 3);
                assert!(prod.eq_one());
                inverted += 1;
            }
        }
    }

    #[test]
    fn test_invert_fq() {
        let mut rng = ChaCha20Rng::from_seed([3u8; 32]);
        let mut inverted = 0;
        while inverted < 3 {
            let f = random_tern(31, 6, 5, &mut rng);
            if let Some(inv) = f.invert_fq(2048) {
                let prod = f.mult_mod(&inv, 2048);
                assert!(prod.eq_one());
                inverted += 1;
            }
        }
    }

    #[test]
    fn test_invert_fq_large_degree() {
        let mut rng = ChaCha20Rng::from_seed([4u8; 32]);
        loop {
            let f = random_tern(439, 146, 145, &mut rng);
            if let Some(inv) = f.invert_fq(2048) {
                let prod = f.mult_mod(&inv, 2048);
                assert!(prod.eq_one());
                break;
            }
        }
    }

    #[test]
    fn test_not_invertible() {
        // an equal number of ones and negative ones gives f(1) = 0, so
        // X - 1 divides f and no inverse exists mod 2 or mod 3
        let f = IntPoly::new(vec![1, -1, 0, 1, -1, 0, 0, 1, -1, 0, 0]);
        assert!(f.invert_f2().is_none());
        assert!(f.invert_fq(32).is_none());
        assert!(f.invert_f3().is_none());

        assert!(IntPoly::zero(11).invert_f2().is_none());
        assert!(IntPoly::zero(11).invert_f3().is_none());
    }

    #[test]
    fn test_to_binary_round_trip() {
        let mut rng = ChaCha20Rng::from_seed([5u8; 32]);
        let q = 2048;
        let p = IntPoly::new((0..439).map(|_| rng.gen_range(0..q)).collect());
        let bin = p.to_binary(q);
        assert_eq!(bin.len(), (439 * 11 + 7) / 8);
        let back = IntPoly::from_binary(&bin, 439, q).unwrap();
        assert_eq!(p, back);
    }

    #[test]
    fn test_to_binary_short_input() {
        let data = vec![0u8; 10];
        assert_eq!(
            IntPoly::from_binary(&data, 439, 2048),
            Err(EncodeError::ShortInput)
        );
    }

    #[test]
    fn test_tight3_round_trip() {
        let mut rng = ChaCha20Rng::from_seed([6u8; 32]);
        let p = random_tern(439, 146, 145, &mut rng);
        let bin = p.to_binary3_tight();
        assert_eq!(bin.len(), (439 + 4) / 5);
        let back = IntPoly::from_binary3_tight(&bin, 439).unwrap();
        assert_eq!(p, back);
    }

    #[test]
    fn test_tight3_rejects_out_of_range_byte() {
        assert_eq!(
            IntPoly::from_binary3_tight(&[243, 0, 0], 15),
            Err(EncodeError::InvalidEncoding)
        );
    }

    #[test]
    fn test_tight3_rejects_trailing_trits() {
        // six coefficients use a single trit of the second byte; the
        // unused high trits there must be zero
        assert!(IntPoly::from_binary3_tight(&[0, 2], 6).is_ok());
        assert_eq!(
            IntPoly::from_binary3_tight(&[0, 3], 6),
            Err(EncodeError::InvalidEncoding)
        );
    }

    #[test]
    fn test_arith3_round_trip() {
        let mut rng = ChaCha20Rng::from_seed([8u8; 32]);
        let p = random_tern(101, 30, 30, &mut rng);
        let bin = p.to_binary3_arith();
        let back = IntPoly::from_binary3_arith(&bin, 101).unwrap();
        assert_eq!(p, back);
    }

    #[test]
    fn test_arith3_rejects_reserved_pattern() {
        assert_eq!(
            IntPoly::from_binary3_arith(&[0b1100_0000], 4),
            Err(EncodeError::InvalidEncoding)
        );
    }

    #[test]
    fn test_sves_round_trip() {
        // 11 coefficients hold 5 groups = 15 bits; the last bit of the
        // second byte must stay zero for the round trip to be exact
        let data = vec![0xA5, 0x3C];
        let poly = IntPoly::from_binary3_sves(&data, 11);
        let back = poly.to_binary3_sves().unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn test_sves_rejects_impossible_pair() {
        let poly = IntPoly::new(vec![-1, -1, 0, 0, 0]);
        assert!(poly.to_binary3_sves().is_err());
    }

    #[test]
    fn test_clear() {
        let mut p = IntPoly::new(vec![1, -1, 5]);
        p.clear();
        assert_eq!(p.coeffs, vec![0, 0, 0]);
    }
}
