use ntru_core::encode::bit_width;

use crate::error::Error;

/// The small modulus; fixed for all parameter sets.
pub const P: i64 = 3;

/// Length in bytes of the message-length octet in the SVES buffer.
pub const LLEN: usize = 1;

/// A set of parameters for NTRUEncrypt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncParams {
    /// Name of the parameter set
    pub name: &'static str,
    /// Number of polynomial coefficients; a prime
    pub n: usize,
    /// The large modulus; a power of two
    pub q: i64,
    /// Number of ones in the private polynomial f (simple form), and one
    /// more than the number of negative ones
    pub df: usize,
    /// Number of ones and negative ones in f1; product form only
    pub df1: usize,
    /// Number of ones and negative ones in f2; product form only
    pub df2: usize,
    /// Number of ones and negative ones in f3; product form only
    pub df3: usize,
    /// Number of ones and negative ones in the key-generation mask g
    pub dg: usize,
    /// Number of ones and negative ones in the blinding polynomial r
    pub dr: usize,
    /// Number of random bits prepended to the message
    pub db: usize,
    /// Minimum acceptable count of each of -1, 0 and 1 in the message
    /// representative
    pub dm0: usize,
    /// Bit width of index extraction in the index generation function
    pub c: usize,
    /// Minimum number of hash calls the IGF seeds itself with
    pub min_calls_r: usize,
    /// Minimum number of hash calls for the masking polynomial
    pub min_calls_mask: usize,
    /// Three bytes identifying the parameter set
    pub oid: [u8; 3],
    /// Whether ternary polynomials should use the sparse representation
    pub sparse: bool,
    /// If true the private key is f = 1 + 3F, so f^-1 mod 3 is the
    /// constant 1
    pub fast_fp: bool,
    /// Whether the private polynomial is in product form f1*f2 + f3
    pub product_form: bool,
}

impl EncParams {
    /// Longest encryptable message in bytes
    pub fn max_msg_len_bytes(&self) -> usize {
        self.n * 3 / 2 / 8 - LLEN - self.db / 8
    }

    /// Capacity of the SVES message buffer, rounded up to a whole byte
    pub fn buffer_len_bits(&self) -> usize {
        ((self.n * 3 + 1) / 2 + 7) / 8 * 8
    }

    pub fn buffer_len_bytes(&self) -> usize {
        self.buffer_len_bits() / 8
    }

    /// Number of trits the message buffer converts into
    pub fn buffer_len_trits(&self) -> usize {
        self.n - 1
    }

    /// Bits of the public key mixed into the blinding seed
    pub fn pk_len(&self) -> usize {
        self.db / 2
    }

    /// Ciphertext length in bytes
    pub fn enc_len(&self) -> usize {
        (self.n * bit_width(self.q as u64) + 7) / 8
    }

    /// Encoded public key length in bytes
    pub fn public_len(&self) -> usize {
        self.enc_len()
    }

    /// Encoded private key length in bytes
    pub fn private_len(&self) -> usize {
        if self.product_form {
            let bits = bit_width(self.n as u64);
            let len1 = (2 * self.df1 * bits + 7) / 8;
            let len2 = (2 * self.df2 * bits + 7) / 8;
            let len3 = (2 * self.df3 * bits + 7) / 8;
            len1 + len2 + len3
        } else {
            (self.n + 4) / 5
        }
    }

    /// Serializes the simple-ternary profile of the parameter set:
    /// eight big-endian 32-bit integers, the oid, the sparse flag and 16
    /// reserved bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(52);
        for v in [
            self.n as u32,
            self.q as u32,
            self.df as u32,
            self.db as u32,
            self.dm0 as u32,
            self.c as u32,
            self.min_calls_r as u32,
            self.min_calls_mask as u32,
        ] {
            out.extend_from_slice(&v.to_be_bytes());
        }
        out.extend_from_slice(&self.oid);
        out.push(self.sparse as u8);
        out.extend_from_slice(&[0u8; 16]);
        out
    }

    /// Reverse of `to_bytes`. The fields outside the serialized profile
    /// take their conventional derived values.
    pub fn from_bytes(data: &[u8]) -> Result<EncParams, Error> {
        if data.len() < 52 {
            return Err(Error::ShortInput);
        }
        let mut words = [0u32; 8];
        for (i, w) in words.iter_mut().enumerate() {
            let mut be = [0u8; 4];
            be.copy_from_slice(&data[4 * i..4 * i + 4]);
            *w = u32::from_be_bytes(be);
        }
        let [n, q, df, db, dm0, c, min_calls_r, min_calls_mask] = words;
        if q == 0 || q & (q - 1) != 0 {
            return Err(Error::InvalidArgument("q must be a power of two"));
        }
        if db % 8 != 0 {
            return Err(Error::InvalidArgument("db must be a multiple of eight"));
        }
        let mut oid = [0u8; 3];
        oid.copy_from_slice(&data[32..35]);
        Ok(EncParams {
            name: "custom",
            n: n as usize,
            q: q as i64,
            df: df as usize,
            df1: 0,
            df2: 0,
            df3: 0,
            dg: n as usize / 3,
            dr: df as usize,
            db: db as usize,
            dm0: dm0 as usize,
            c: c as usize,
            min_calls_r: min_calls_r as usize,
            min_calls_mask: min_calls_mask as usize,
            oid,
            sparse: data[35] != 0,
            fast_fp: false,
            product_form: false,
        })
    }
}

/// A conservative parameter set from the 2011 Whyte-Hoffstein parameter
/// generation paper, 128-bit security.
pub const APR2011_439: EncParams = EncParams {
    name: "APR2011-439",
    n: 439,
    q: 2048,
    df: 146,
    df1: 0,
    df2: 0,
    df3: 0,
    dg: 146,
    dr: 146,
    db: 128,
    dm0: 112,
    c: 9,
    min_calls_r: 15,
    min_calls_mask: 6,
    oid: [0, 7, 101],
    sparse: true,
    fast_fp: false,
    product_form: false,
};

/// Like APR2011_439 but with a product-form private key and f = 1 + 3F,
/// trading key structure for much faster decryption.
pub const APR2011_439_FAST: EncParams = EncParams {
    name: "APR2011-439-FAST",
    n: 439,
    q: 2048,
    df: 146,
    df1: 9,
    df2: 8,
    df3: 5,
    dg: 146,
    dr: 146,
    db: 128,
    dm0: 112,
    c: 9,
    min_calls_r: 15,
    min_calls_mask: 6,
    oid: [0, 7, 102],
    sparse: true,
    fast_fp: true,
    product_form: true,
};

/// 256-bit security variant of the APR2011 family.
pub const APR2011_743: EncParams = EncParams {
    name: "APR2011-743",
    n: 743,
    q: 2048,
    df: 248,
    df1: 0,
    df2: 0,
    df3: 0,
    dg: 247,
    dr: 248,
    db: 256,
    dm0: 204,
    c: 13,
    min_calls_r: 12,
    min_calls_mask: 7,
    oid: [0, 7, 105],
    sparse: true,
    fast_fp: false,
    product_form: false,
};

/// Product-form, fast-Fp variant of APR2011_743.
pub const APR2011_743_FAST: EncParams = EncParams {
    name: "APR2011-743-FAST",
    n: 743,
    q: 2048,
    df: 248,
    df1: 11,
    df2: 11,
    df3: 15,
    dg: 247,
    dr: 248,
    db: 256,
    dm0: 204,
    c: 13,
    min_calls_r: 12,
    min_calls_mask: 7,
    oid: [0, 7, 106],
    sparse: true,
    fast_fp: true,
    product_form: true,
};

/// An IEEE 1363.1 parameter set giving 256 bits of security, optimized
/// for key size.
pub const EES1087EP2: EncParams = EncParams {
    name: "EES1087EP2",
    n: 1087,
    q: 2048,
    df: 120,
    df1: 0,
    df2: 0,
    df3: 0,
    dg: 362,
    dr: 120,
    db: 256,
    dm0: 120,
    c: 13,
    min_calls_r: 25,
    min_calls_mask: 14,
    oid: [0, 6, 3],
    sparse: true,
    fast_fp: false,
    product_form: false,
};

/// An IEEE 1363.1 parameter set giving 256 bits of security, balancing
/// key size and speed.
pub const EES1171EP1: EncParams = EncParams {
    name: "EES1171EP1",
    n: 1171,
    q: 2048,
    df: 106,
    df1: 0,
    df2: 0,
    df3: 0,
    dg: 390,
    dr: 106,
    db: 256,
    dm0: 106,
    c: 12,
    min_calls_r: 20,
    min_calls_mask: 15,
    oid: [0, 6, 4],
    sparse: true,
    fast_fp: false,
    product_form: false,
};

/// An IEEE 1363.1 parameter set giving 256 bits of security, optimized
/// for speed.
pub const EES1499EP1: EncParams = EncParams {
    name: "EES1499EP1",
    n: 1499,
    q: 2048,
    df: 79,
    df1: 0,
    df2: 0,
    df3: 0,
    dg: 499,
    dr: 79,
    db: 256,
    dm0: 79,
    c: 13,
    min_calls_r: 17,
    min_calls_mask: 19,
    oid: [0, 6, 5],
    sparse: true,
    fast_fp: false,
    product_form: false,
};

/// All predefined parameter sets.
pub const ALL_PARAM_SETS: [EncParams; 7] = [
    APR2011_439,
    APR2011_439_FAST,
    APR2011_743,
    APR2011_743_FAST,
    EES1087EP2,
    EES1171EP1,
    EES1499EP1,
];
