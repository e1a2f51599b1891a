use rand::{CryptoRng, Rng, RngCore};
use zeroize::Zeroize;

use crate::encode::{bit_width, BitReader, BitWriter, EncodeError};
use crate::integer_poly::IntPoly;

/// Picks `count` distinct positions in [0, n) by a partial Fisher-Yates
/// shuffle, so every subset is equally likely.
fn random_positions<R: RngCore + CryptoRng>(n: usize, count: usize, rng: &mut R) -> Vec<usize> {
    let mut positions: Vec<usize> = (0..n).collect();
    for i in 0..count {
        let j = i + rng.gen_range(0..n - i);
        positions.swap(i, j);
    }
    positions.truncate(count);
    positions
}

/// A ternary polynomial stored as a full coefficient vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseTernPoly {
    poly: IntPoly,
}

impl DenseTernPoly {
    /// Wraps an integer polynomial, checking that every coefficient is a
    /// trit.
    pub fn from_int_poly(poly: IntPoly) -> Option<Self> {
        if poly.coeffs.iter().all(|&c| (-1..=1).contains(&c)) {
            Some(DenseTernPoly { poly })
        } else {
            None
        }
    }

    /// Random ternary polynomial with the given numbers of ones and
    /// negative ones.
    pub fn generate_random<R: RngCore + CryptoRng>(
        n: usize,
        ones: usize,
        neg_ones: usize,
        rng: &mut R,
    ) -> Self {
        let positions = random_positions(n, ones + neg_ones, rng);
        let mut coeffs = vec![0i64; n];
        for &p in &positions[..ones] {
            coeffs[p] = 1;
        }
        for &p in &positions[ones..] {
            coeffs[p] = -1;
        }
        DenseTernPoly {
            poly: IntPoly::new(coeffs),
        }
    }

    pub fn coeffs(&self) -> &[i64] {
        &self.poly.coeffs
    }

    pub fn to_int_poly(&self) -> IntPoly {
        self.poly.clone()
    }

    pub fn mult(&self, b: &IntPoly) -> IntPoly {
        self.poly.mult(b)
    }

    pub fn mult_mod(&self, b: &IntPoly, modulus: i64) -> IntPoly {
        self.poly.mult_mod(b, modulus)
    }

    pub fn clear(&mut self) {
        self.poly.clear();
    }
}

/// A ternary polynomial stored as the index lists of its +1 and -1
/// coefficients. Both lists are sorted and disjoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseTernPoly {
    n: usize,
    ones: Vec<usize>,
    neg_ones: Vec<usize>,
}

impl SparseTernPoly {
    pub fn new(n: usize, mut ones: Vec<usize>, mut neg_ones: Vec<usize>) -> Self {
        ones.sort_unstable();
        neg_ones.sort_unstable();
        SparseTernPoly { n, ones, neg_ones }
    }

    pub fn generate_random<R: RngCore + CryptoRng>(
        n: usize,
        num_ones: usize,
        num_neg_ones: usize,
        rng: &mut R,
    ) -> Self {
        let positions = random_positions(n, num_ones + num_neg_ones, rng);
        SparseTernPoly::new(
            n,
            positions[..num_ones].to_vec(),
            positions[num_ones..].to_vec(),
        )
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn ones(&self) -> &[usize] {
        &self.ones
    }

    pub fn neg_ones(&self) -> &[usize] {
        &self.neg_ones
    }

    /// Multiplies by a dense polynomial in O(N * d) where d is the number
    /// of nonzero coefficients: c[k] = sum b[(k-i) mod N] over the one
    /// positions i, minus the same sum over the negative-one positions.
    pub fn mult(&self, b: &IntPoly) -> IntPoly {
        assert_eq!(
            b.coeffs.len(),
            self.n,
            "polynomials must have the same number of coefficients"
        );
        let n = self.n;
        let mut result = vec![0i64; n];
        for &i in &self.ones {
            for k in 0..n - i {
                result[i + k] += b.coeffs[k];
            }
            for k in n - i..n {
                result[i + k - n] += b.coeffs[k];
            }
        }
        for &i in &self.neg_ones {
            for k in 0..n - i {
                result[i + k] -= b.coeffs[k];
            }
            for k in n - i..n {
                result[i + k - n] -= b.coeffs[k];
            }
        }
        IntPoly::new(result)
    }

    pub fn mult_mod(&self, b: &IntPoly, modulus: i64) -> IntPoly {
        let mut result = self.mult(b);
        result.mod_positive(modulus);
        result
    }

    pub fn to_int_poly(&self) -> IntPoly {
        let mut coeffs = vec![0i64; self.n];
        for &i in &self.ones {
            coeffs[i] = 1;
        }
        for &i in &self.neg_ones {
            coeffs[i] = -1;
        }
        IntPoly::new(coeffs)
    }

    pub fn to_dense(&self) -> DenseTernPoly {
        DenseTernPoly {
            poly: self.to_int_poly(),
        }
    }

    /// Extracts the sparse form of a dense ternary polynomial.
    pub fn from_int_poly(poly: &IntPoly) -> Option<Self> {
        let mut ones = Vec::new();
        let mut neg_ones = Vec::new();
        for (i, &c) in poly.coeffs.iter().enumerate() {
            match c {
                0 => {}
                1 => ones.push(i),
                -1 => neg_ones.push(i),
                _ => return None,
            }
        }
        Some(SparseTernPoly {
            n: poly.coeffs.len(),
            ones,
            neg_ones,
        })
    }

    /// Packs each index as ceil(log2 N) bits, the ones list followed by
    /// the negative-ones list.
    pub fn to_binary(&self) -> Vec<u8> {
        let bits = bit_width(self.n as u64);
        let mut writer =
            BitWriter::with_capacity((self.ones.len() + self.neg_ones.len()) * bits);
        for &i in &self.ones {
            writer.write(i as u64, bits);
        }
        for &i in &self.neg_ones {
            writer.write(i as u64, bits);
        }
        writer.into_bytes()
    }

    /// Reverse of `to_binary`; the list lengths are fixed by the caller's
    /// parameter set.
    pub fn from_binary(
        data: &[u8],
        n: usize,
        num_ones: usize,
        num_neg_ones: usize,
    ) -> Result<Self, EncodeError> {
        let bits = bit_width(n as u64);
        let mut reader = BitReader::new(data);
        let mut read_list = |count: usize| -> Result<Vec<usize>, EncodeError> {
            let mut list = Vec::with_capacity(count);
            for _ in 0..count {
                let idx = reader.read(bits)? as usize;
                if idx >= n {
                    return Err(EncodeError::InvalidEncoding);
                }
                list.push(idx);
            }
            Ok(list)
        };
        let ones = read_list(num_ones)?;
        let neg_ones = read_list(num_neg_ones)?;
        Ok(SparseTernPoly::new(n, ones, neg_ones))
    }

    /// Overwrites both index lists with zeros.
    pub fn clear(&mut self) {
        self.ones.as_mut_slice().zeroize();
        self.neg_ones.as_mut_slice().zeroize();
    }
}

/// A polynomial of the form f1*f2 + f3 where f1, f2, f3 are very sparse
/// ternary polynomials. The product f1*f2 is never materialized as a
/// ternary polynomial; multiplication always composes through
/// ((b*f1)*f2) + b*f3.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProdPoly {
    pub f1: SparseTernPoly,
    pub f2: SparseTernPoly,
    pub f3: SparseTernPoly,
}

impl ProdPoly {
    pub fn new(f1: SparseTernPoly, f2: SparseTernPoly, f3: SparseTernPoly) -> Self {
        ProdPoly { f1, f2, f3 }
    }

    pub fn generate_random<R: RngCore + CryptoRng>(
        n: usize,
        df1: usize,
        df2: usize,
        df3_ones: usize,
        df3_neg_ones: usize,
        rng: &mut R,
    ) -> Self {
        ProdPoly {
            f1: SparseTernPoly::generate_random(n, df1, df1, rng),
            f2: SparseTernPoly::generate_random(n, df2, df2, rng),
            f3: SparseTernPoly::generate_random(n, df3_ones, df3_neg_ones, rng),
        }
    }

    pub fn n(&self) -> usize {
        self.f1.n()
    }

    /// Computes (f1*f2 + f3) * b without reducing the intermediate
    /// products.
    pub fn mult(&self, b: &IntPoly) -> IntPoly {
        let y = self.f1.mult(b);
        let mut z = self.f2.mult(&y);
        let w = self.f3.mult(b);
        z.add(&w);
        z
    }

    pub fn mult_mod(&self, b: &IntPoly, modulus: i64) -> IntPoly {
        let mut result = self.mult(b);
        result.mod_positive(modulus);
        result
    }

    pub fn to_int_poly(&self) -> IntPoly {
        let mut result = self.f2.mult(&self.f1.to_int_poly());
        result.add(&self.f3.to_int_poly());
        result
    }

    /// Concatenation of the three sparse encodings in the order f1, f2, f3.
    pub fn to_binary(&self) -> Vec<u8> {
        let mut out = self.f1.to_binary();
        out.extend_from_slice(&self.f2.to_binary());
        out.extend_from_slice(&self.f3.to_binary());
        out
    }

    /// Reverse of `to_binary`, with the component weights fixed by the
    /// caller's parameter set.
    pub fn from_binary(
        data: &[u8],
        n: usize,
        df1: usize,
        df2: usize,
        df3_ones: usize,
        df3_neg_ones: usize,
    ) -> Result<Self, EncodeError> {
        let bits = bit_width(n as u64);
        let len1 = (2 * df1 * bits + 7) / 8;
        let len2 = (2 * df2 * bits + 7) / 8;
        let len3 = ((df3_ones + df3_neg_ones) * bits + 7) / 8;
        if data.len() < len1 + len2 + len3 {
            return Err(EncodeError::ShortInput);
        }
        let f1 = SparseTernPoly::from_binary(&data[..len1], n, df1, df1)?;
        let f2 = SparseTernPoly::from_binary(&data[len1..len1 + len2], n, df2, df2)?;
        let f3 = SparseTernPoly::from_binary(
            &data[len1 + len2..len1 + len2 + len3],
            n,
            df3_ones,
            df3_neg_ones,
        )?;
        Ok(ProdPoly { f1, f2, f3 })
    }

    pub fn clear(&mut self) {
        self.f1.clear();
        self.f2.clear();
        self.f3.clear();
    }
}

/// The closed set of ternary polynomial representations a private or
/// blinding polynomial can take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TernaryPoly {
    Dense(DenseTernPoly),
    Sparse(SparseTernPoly),
    Product(ProdPoly),
}

impl TernaryPoly {
    pub fn mult(&self, b: &IntPoly) -> IntPoly {
        match self {
            TernaryPoly::Dense(p) => p.mult(b),
            TernaryPoly::Sparse(p) => p.mult(b),
            TernaryPoly::Product(p) => p.mult(b),
        }
    }

    pub fn mult_mod(&self, b: &IntPoly, modulus: i64) -> IntPoly {
        match self {
            TernaryPoly::Dense(p) => p.mult_mod(b, modulus),
            TernaryPoly::Sparse(p) => p.mult_mod(b, modulus),
            TernaryPoly::Product(p) => p.mult_mod(b, modulus),
        }
    }

    pub fn to_int_poly(&self) -> IntPoly {
        match self {
            TernaryPoly::Dense(p) => p.to_int_poly(),
            TernaryPoly::Sparse(p) => p.to_int_poly(),
            TernaryPoly::Product(p) => p.to_int_poly(),
        }
    }

    pub fn clear(&mut self) {
        match self {
            TernaryPoly::Dense(p) => p.clear(),
            TernaryPoly::Sparse(p) => p.clear(),
            TernaryPoly::Product(p) => p.clear(),
        }
    }
}
