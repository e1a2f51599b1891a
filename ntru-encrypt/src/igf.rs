use sha2::{Digest, Sha512};

use crate::params::EncParams;

/// Deterministic generator of indices uniform on [0, N), in the style of
/// the IEEE 1363.1 index generation function.
///
/// The seed is expanded with SHA-512 over `seed || counter` for a
/// big-endian 32-bit counter starting at zero; at least `min_calls_r`
/// hash calls are made up front and further calls extend the bit buffer
/// on demand. Indices are read `c` bits at a time, big-endian, and
/// rejection-sampled against the largest multiple of N below 2^c.
pub struct IndexGenerator {
    seed: Vec<u8>,
    counter: u32,
    buf: Vec<u8>,
    bit_pos: usize,
    c: usize,
    n: usize,
    limit: u32,
}

impl IndexGenerator {
    pub fn new(seed: &[u8], params: &EncParams) -> Self {
        let span = 1u32 << params.c;
        let mut gen = IndexGenerator {
            seed: seed.to_vec(),
            counter: 0,
            buf: Vec::with_capacity(params.min_calls_r * 64),
            bit_pos: 0,
            c: params.c,
            n: params.n,
            limit: span - span % params.n as u32,
        };
        while (gen.counter as usize) < params.min_calls_r {
            gen.append_hash();
        }
        gen
    }

    fn append_hash(&mut self) {
        let mut hash = Sha512::new();
        hash.update(&self.seed);
        hash.update(self.counter.to_be_bytes());
        self.buf.extend_from_slice(&hash.finalize());
        self.counter += 1;
    }

    fn take_bits(&mut self, width: usize) -> u32 {
        while self.buf.len() * 8 - self.bit_pos < width {
            self.append_hash();
        }
        let mut value = 0u32;
        for _ in 0..width {
            let byte = self.buf[self.bit_pos / 8];
            let bit = (byte >> (7 - self.bit_pos % 8)) & 1;
            value = (value << 1) | bit as u32;
            self.bit_pos += 1;
        }
        value
    }

    /// The next index in [0, N)
    pub fn next_index(&mut self) -> usize {
        loop {
            let i = self.take_bits(self.c);
            if i < self.limit {
                return (i % self.n as u32) as usize;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::APR2011_439;

    #[test]
    fn test_deterministic() {
        let mut a = IndexGenerator::new(b"seed value", &APR2011_439);
        let mut b = IndexGenerator::new(b"seed value", &APR2011_439);
        for _ in 0..1000 {
            assert_eq!(a.next_index(), b.next_index());
        }

        let mut c = IndexGenerator::new(b"other seed", &APR2011_439);
        let first: Vec<usize> = (0..32).map(|_| a.next_index()).collect();
        let other: Vec<usize> = (0..32).map(|_| c.next_index()).collect();
        assert_ne!(first, other);
    }

    #[test]
    fn test_indices_in_range() {
        let mut gen = IndexGenerator::new(b"range", &APR2011_439);
        for _ in 0..10_000 {
            assert!(gen.next_index() < APR2011_439.n);
        }
    }

    #[test]
    fn test_uniformity_chi_square() {
        let n = APR2011_439.n;
        let draws = 100_000usize;
        let mut counts = vec![0usize; n];
        let mut gen = IndexGenerator::new(b"chi square seed", &APR2011_439);
        for _ in 0..draws {
            counts[gen.next_index()] += 1;
        }
        let expected = draws as f64 / n as f64;
        let chi2: f64 = counts
            .iter()
            .map(|&c| {
                let d = c as f64 - expected;
                d * d / expected
            })
            .sum();
        // 438 degrees of freedom; the 0.99 quantile is just under 510
        assert!(chi2 < 510.0, "chi-square statistic too large: {}", chi2);
    }
}
