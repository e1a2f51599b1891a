use ntru_core::encode::bit_width;

/// How the second basis vector is stored in a private key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BasisType {
    /// f' is the completion vector F
    Standard,
    /// f' is the companion polynomial g
    Transpose,
}

/// A parameter set for NTRUSign lattice bases. Signing parameters such
/// as the norm bound are out of scope; these fields cover basis
/// construction and encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignParams {
    /// Name of the parameter set
    pub name: &'static str,
    /// Number of polynomial coefficients; a prime
    pub n: usize,
    /// The large modulus; a power of two
    pub q: i64,
    /// f and g carry d+1 ones and d negative ones
    pub d: usize,
    /// Number of bases in a private key
    pub basis_count: usize,
    pub basis_type: BasisType,
}

impl SignParams {
    /// Encoded length of one basis in bytes
    pub fn basis_len(&self, include_h: bool) -> usize {
        let tight_len = (self.n + 4) / 5;
        let q_len = (self.n * bit_width(self.q as u64) + 7) / 8;
        tight_len + q_len + if include_h { q_len } else { 0 }
    }

    /// Encoded length of the full private key in bytes
    pub fn private_len(&self) -> usize {
        self.basis_len(false) + (self.basis_count - 1) * self.basis_len(true)
    }
}

/// A small parameter set for tests and experimentation.
pub const T157: SignParams = SignParams {
    name: "T157",
    n: 157,
    q: 256,
    d: 29,
    basis_count: 1,
    basis_type: BasisType::Transpose,
};

/// A mid-size transpose-basis parameter set.
pub const T349: SignParams = SignParams {
    name: "T349",
    n: 349,
    q: 512,
    d: 75,
    basis_count: 1,
    basis_type: BasisType::Transpose,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basis_len() {
        // 157 trits tightly packed plus 157 8-bit coefficients
        assert_eq!(T157.basis_len(false), 32 + 157);
        assert_eq!(T157.basis_len(true), 32 + 2 * 157);
        assert_eq!(T157.private_len(), 189);
    }
}
