use ntru_core::bigint_poly::BigIntPoly;
use ntru_core::encode::EncodeError;
use ntru_core::euclid;
use ntru_core::integer_poly::IntPoly;
use ntru_core::ternary::DenseTernPoly;
use num_bigint::BigInt;
use num_traits::One;
use rand::{CryptoRng, RngCore};

use crate::error::SignError;
use crate::params::{BasisType, SignParams};

/// Cap on the basis-generation retry loop.
const MAX_RETRIES: usize = 100;

/// One basis of an NTRUSign lattice: the short vector f, the stored
/// companion f' (F for standard bases, g for transpose bases, centered
/// mod q), and the public polynomial h = g/f mod q.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Basis {
    pub f: DenseTernPoly,
    pub f_prime: IntPoly,
    pub h: IntPoly,
}

/// The full construction output: the short pair (f, g) and the
/// completion pair (F, G) with f*G - g*F = q in the ring.
pub(crate) struct RawBasis {
    pub f: DenseTernPoly,
    pub g: DenseTernPoly,
    pub big_f: BigIntPoly,
    pub big_g: BigIntPoly,
    pub h: IntPoly,
}

/// NTRUSign private key: `basis_count` bases, the first of which shares
/// its h with the public key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignPrivateKey {
    pub bases: Vec<Basis>,
}

/// NTRUSign public key: the h polynomial of the first basis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignPublicKey {
    pub h: IntPoly,
}

/// Generates an NTRUSign key pair of `basis_count` independent bases.
pub fn generate_sign_key_pair<R: RngCore + CryptoRng>(
    params: &SignParams,
    rng: &mut R,
) -> Result<(SignPublicKey, SignPrivateKey), SignError> {
    let mut bases = Vec::with_capacity(params.basis_count);
    for _ in 0..params.basis_count {
        bases.push(generate_basis(params, rng)?);
    }
    let public = SignPublicKey {
        h: bases[0].h.clone(),
    };
    Ok((public, SignPrivateKey { bases }))
}

/// Generates a single basis.
pub fn generate_basis<R: RngCore + CryptoRng>(
    params: &SignParams,
    rng: &mut R,
) -> Result<Basis, SignError> {
    let raw = create_basis(params, rng)?;
    let q = params.q;

    let f_prime = match params.basis_type {
        BasisType::Standard => {
            let Some(mut fp) = raw.big_f.to_int_poly() else {
                return Err(SignError::KeygenFailure);
            };
            center_half_open(&mut fp, q);
            fp
        }
        BasisType::Transpose => {
            let mut fp = raw.g.to_int_poly();
            fp.mod_positive(q);
            fp
        }
    };

    Ok(Basis {
        f: raw.f,
        f_prime,
        h: raw.h,
    })
}

/// Samples (f, g), completes them to a full basis with the resultant
/// pipeline, and reduces the completion vectors with one rounded
/// division step.
pub(crate) fn create_basis<R: RngCore + CryptoRng>(
    params: &SignParams,
    rng: &mut R,
) -> Result<RawBasis, SignError> {
    let n = params.n;
    let q = params.q;

    for _ in 0..MAX_RETRIES {
        // d+1 ones keep f(1) and g(1) nonzero, so the resultants have a
        // chance of being odd and coprime
        let f = DenseTernPoly::generate_random(n, params.d + 1, params.d, rng);
        let f_int = f.to_int_poly();
        let Some(mut fq) = f_int.invert_fq(q) else {
            continue;
        };
        let g = DenseTernPoly::generate_random(n, params.d + 1, params.d, rng);
        let g_int = g.to_int_poly();

        let rf = f_int.resultant();
        let rg = g_int.resultant();
        let (gcd, x, y) = euclid::extended_euclidean_big(&rf.res, &rg.res);
        if !gcd.is_one() {
            continue;
        }

        // G0 = q*x*rho_f and F0 = -q*y*rho_g satisfy f*G0 - g*F0 = q
        let mut big_g0 = rf.rho.clone();
        big_g0.mult_fac(&(BigInt::from(q) * &x));
        let mut big_f0 = rg.rho.clone();
        big_f0.mult_fac(&(BigInt::from(-q) * &y));

        // C = round((F0/f + G0/g) / 2); the quotients are formed from
        // rho/res with enough decimal places that the rounding error of
        // a coefficient stays below a half
        let bits = big_f0.max_coeff_bits().max(big_g0.max_coeff_bits());
        let digits = bits * 30103 / 100000 + 2 + log10_ceil(n) as u64;
        let f_inv = rf.rho.div_round(&rf.res, digits);
        let g_inv = rg.rho.div_round(&rg.res, digits);
        let mut c_dec = f_inv.mult(&big_f0);
        c_dec.add(&g_inv.mult(&big_g0));
        c_dec.halve();
        let c = c_dec.round();

        let f_big = BigIntPoly::from_int_poly(&f_int);
        let g_big = BigIntPoly::from_int_poly(&g_int);
        let mut big_f = big_f0;
        big_f.sub(&f_big.mult(&c));
        let mut big_g = big_g0;
        big_g.sub(&g_big.mult(&c));

        let mut h = g.mult_mod(&fq, q);
        h.ensure_positive(q);
        fq.clear();

        return Ok(RawBasis {
            f,
            g,
            big_f,
            big_g,
            h,
        });
    }
    Err(SignError::KeygenFailure)
}

impl Basis {
    /// encode(f) || encode(f') [|| h]; f' is shifted by +q/2 before
    /// base-q packing for standard bases.
    pub fn to_bytes(&self, params: &SignParams, include_h: bool) -> Vec<u8> {
        let q = params.q;
        let mut out = self.f.to_int_poly().to_binary3_tight();
        let mut f_prime = self.f_prime.clone();
        if params.basis_type == BasisType::Standard {
            for c in &mut f_prime.coeffs {
                *c += q / 2;
            }
        }
        out.extend_from_slice(&f_prime.to_binary(q));
        if include_h {
            out.extend_from_slice(&self.h.to_binary(q));
        }
        out
    }

    /// Reverse of `to_bytes`. When h was not serialized it must be
    /// supplied from the public key.
    pub fn from_bytes(
        data: &[u8],
        params: &SignParams,
        h: Option<IntPoly>,
    ) -> Result<Basis, SignError> {
        let n = params.n;
        let q = params.q;
        let tight_len = (n + 4) / 5;
        let q_len = params.basis_len(false) - tight_len;
        if data.len() < params.basis_len(h.is_none()) {
            return Err(SignError::Encode(EncodeError::ShortInput));
        }

        let f_dense = IntPoly::from_binary3_tight(&data[..tight_len], n)?;
        let f = DenseTernPoly::from_int_poly(f_dense)
            .ok_or(SignError::Encode(EncodeError::InvalidEncoding))?;

        let mut f_prime = IntPoly::from_binary(&data[tight_len..tight_len + q_len], n, q)?;
        if params.basis_type == BasisType::Standard {
            for c in &mut f_prime.coeffs {
                *c -= q / 2;
            }
        }

        let h = match h {
            Some(h) => h,
            None => IntPoly::from_binary(&data[tight_len + q_len..], n, q)?,
        };

        Ok(Basis { f, f_prime, h })
    }
}

impl SignPublicKey {
    pub fn to_bytes(&self, params: &SignParams) -> Vec<u8> {
        self.h.to_binary(params.q)
    }

    pub fn from_bytes(data: &[u8], params: &SignParams) -> Result<SignPublicKey, SignError> {
        let h = IntPoly::from_binary(data, params.n, params.q)?;
        Ok(SignPublicKey { h })
    }
}

impl SignPrivateKey {
    /// Concatenates all bases; the first basis omits h, which lives in
    /// the public key.
    pub fn to_bytes(&self, params: &SignParams) -> Vec<u8> {
        let mut out = Vec::with_capacity(params.private_len());
        for (i, basis) in self.bases.iter().enumerate() {
            out.extend_from_slice(&basis.to_bytes(params, i > 0));
        }
        out
    }

    pub fn from_bytes(
        data: &[u8],
        params: &SignParams,
        public: &SignPublicKey,
    ) -> Result<SignPrivateKey, SignError> {
        let mut bases = Vec::with_capacity(params.basis_count);
        let mut offset = 0;
        for i in 0..params.basis_count {
            let include_h = i > 0;
            let len = params.basis_len(include_h);
            if data.len() < offset + len {
                return Err(SignError::Encode(EncodeError::ShortInput));
            }
            let h = if include_h {
                None
            } else {
                Some(public.h.clone())
            };
            bases.push(Basis::from_bytes(&data[offset..offset + len], params, h)?);
            offset += len;
        }
        Ok(SignPrivateKey { bases })
    }
}

/// Centers coefficients into [-q/2, q/2), so the +q/2 encoding shift
/// lands exactly in [0, q).
fn center_half_open(poly: &mut IntPoly, q: i64) {
    poly.mod_positive(q);
    for c in &mut poly.coeffs {
        if *c >= q / 2 {
            *c -= q;
        }
    }
}

fn log10_ceil(mut n: usize) -> usize {
    let mut log = 0;
    while n > 1 {
        n = (n + 9) / 10;
        log += 1;
    }
    log
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{BasisType, SignParams, T157};
    use num_traits::Zero;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_basis_completion_identity() {
        let mut rng = ChaCha20Rng::from_seed([50u8; 32]);
        let raw = create_basis(&T157, &mut rng).unwrap();

        // f*G - g*F must be the constant q in the ring
        let f_big = BigIntPoly::from_int_poly(&raw.f.to_int_poly());
        let g_big = BigIntPoly::from_int_poly(&raw.g.to_int_poly());
        let mut lhs = f_big.mult(&raw.big_g);
        lhs.sub(&g_big.mult(&raw.big_f));
        assert_eq!(lhs.coeffs[0], BigInt::from(T157.q));
        for c in &lhs.coeffs[1..] {
            assert!(c.is_zero(), "f*G - g*F must be constant");
        }
    }

    #[test]
    fn test_h_matches_f_and_g() {
        let mut rng = ChaCha20Rng::from_seed([51u8; 32]);
        let raw = create_basis(&T157, &mut rng).unwrap();

        // h = g/f mod q, so f*h = g mod q
        let mut lhs = raw.f.to_int_poly().mult_mod(&raw.h, T157.q);
        let mut rhs = raw.g.to_int_poly();
        rhs.mod_positive(T157.q);
        lhs.mod_positive(T157.q);
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn test_key_encoding_round_trip() {
        let mut rng = ChaCha20Rng::from_seed([52u8; 32]);
        let (public, private) = generate_sign_key_pair(&T157, &mut rng).unwrap();

        let pub_bytes = public.to_bytes(&T157);
        let pub_back = SignPublicKey::from_bytes(&pub_bytes, &T157).unwrap();
        assert_eq!(pub_back, public);

        let priv_bytes = private.to_bytes(&T157);
        assert_eq!(priv_bytes.len(), T157.private_len());
        let priv_back = SignPrivateKey::from_bytes(&priv_bytes, &T157, &public).unwrap();
        assert_eq!(priv_back, private);
    }

    #[test]
    fn test_standard_basis_round_trip() {
        let params = SignParams {
            name: "T157-standard",
            basis_type: BasisType::Standard,
            ..T157
        };
        let mut rng = ChaCha20Rng::from_seed([53u8; 32]);
        let basis = generate_basis(&params, &mut rng).unwrap();
        let bytes = basis.to_bytes(&params, true);
        let back = Basis::from_bytes(&bytes, &params, None).unwrap();
        assert_eq!(back, basis);
    }
}
