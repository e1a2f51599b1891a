use ntru_core::integer_poly::IntPoly;
use ntru_core::ternary::{DenseTernPoly, ProdPoly, SparseTernPoly, TernaryPoly};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::error::Error;
use crate::igf::IndexGenerator;
use crate::mgf::mgf_tp1;
use crate::params::{EncParams, LLEN, P};

/// Cap on the key-generation and encryption retry loops.
const MAX_RETRIES: usize = 100;

/// NTRUEncrypt public key: h = 3*g*fq mod q.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    pub h: IntPoly,
}

/// NTRUEncrypt private key: the sampled polynomial the private f is
/// rebuilt from, plus the precomputed inverse of f mod 3.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateKey {
    pub t: TernaryPoly,
    pub fp: IntPoly,
}

/// An NTRUEncrypt key pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    pub private: PrivateKey,
    pub public: PublicKey,
}

impl PublicKey {
    pub fn to_bytes(&self, params: &EncParams) -> Vec<u8> {
        self.h.to_binary(params.q)
    }

    pub fn from_bytes(data: &[u8], params: &EncParams) -> Result<PublicKey, Error> {
        let h = IntPoly::from_binary(data, params.n, params.q)?;
        Ok(PublicKey { h })
    }
}

impl PrivateKey {
    /// Encodes the sampled polynomial: the three sparse index lists for
    /// product form, tight base-3 packing otherwise.
    pub fn to_bytes(&self, _params: &EncParams) -> Vec<u8> {
        match &self.t {
            TernaryPoly::Product(p) => p.to_binary(),
            TernaryPoly::Sparse(s) => s.to_int_poly().to_binary3_tight(),
            TernaryPoly::Dense(d) => d.to_int_poly().to_binary3_tight(),
        }
    }

    /// Reverse of `to_bytes`; recomputes fp from the decoded polynomial.
    pub fn from_bytes(data: &[u8], params: &EncParams) -> Result<PrivateKey, Error> {
        let t = if params.product_form {
            TernaryPoly::Product(ProdPoly::from_binary(
                data,
                params.n,
                params.df1,
                params.df2,
                params.df3,
                params.df3,
            )?)
        } else {
            let dense = IntPoly::from_binary3_tight(data, params.n)?;
            if params.sparse {
                let sparse = SparseTernPoly::from_int_poly(&dense)
                    .ok_or(Error::InvalidArgument("private polynomial is not ternary"))?;
                TernaryPoly::Sparse(sparse)
            } else {
                let dense = DenseTernPoly::from_int_poly(dense)
                    .ok_or(Error::InvalidArgument("private polynomial is not ternary"))?;
                TernaryPoly::Dense(dense)
            }
        };
        let fp = if params.fast_fp {
            IntPoly::constant(params.n, 1)
        } else {
            t.to_int_poly()
                .invert_f3()
                .ok_or(Error::InvalidArgument("private polynomial is not invertible mod 3"))?
        };
        Ok(PrivateKey { t, fp })
    }
}

/// Generates an NTRUEncrypt key pair.
///
/// Candidate private polynomials are drawn until both inverses exist;
/// the mask polynomial g and the inverse fq are overwritten with zeros
/// once h is computed.
pub fn generate_key_pair<R: RngCore + CryptoRng>(
    params: &EncParams,
    rng: &mut R,
) -> Result<KeyPair, Error> {
    let n = params.n;
    let q = params.q;

    let mut found = None;
    for _ in 0..MAX_RETRIES {
        let t = sample_private_poly(params, rng);
        let f = private_to_f(&t, params);
        let fp = if params.fast_fp {
            IntPoly::constant(n, 1)
        } else {
            match f.invert_f3() {
                Some(fp) => fp,
                None => continue,
            }
        };
        let fq = match f.invert_fq(q) {
            Some(fq) => fq,
            None => continue,
        };
        found = Some((t, fp, fq));
        break;
    }
    let Some((t, fp, mut fq)) = found else {
        return Err(Error::KeygenFailure);
    };

    let mut g = DenseTernPoly::generate_random(n, params.dg, params.dg, rng);
    let mut h = g.mult_mod(&fq, q);
    h.mult3(q);
    h.ensure_positive(q);

    g.clear();
    fq.clear();

    Ok(KeyPair {
        private: PrivateKey { t, fp },
        public: PublicKey { h },
    })
}

/// Encrypts a message with the SVES padding scheme. See IEEE P1363.1
/// section 9.2.2 for the outline this follows.
pub fn encrypt<R: RngCore + CryptoRng>(
    msg: &[u8],
    public: &PublicKey,
    params: &EncParams,
    rng: &mut R,
) -> Result<Vec<u8>, Error> {
    let n = params.n;
    let q = params.q;
    let max_len = params.max_msg_len_bytes();
    if max_len > 255 {
        return Err(Error::InvalidArgument(
            "maximum message length must fit one length octet",
        ));
    }
    if msg.len() > max_len {
        return Err(Error::InvalidArgument("message too long"));
    }

    let db_bytes = params.db / 8;
    let h_bin = public.h.to_binary(q);
    let h_trunc = &h_bin[..params.pk_len() / 8];

    for _ in 0..MAX_RETRIES {
        let mut b = Zeroizing::new(vec![0u8; db_bytes]);
        rng.fill_bytes(&mut b);

        // M = b || len(msg) || msg || zero padding
        let mut m_buf = Zeroizing::new(Vec::with_capacity(params.buffer_len_bytes()));
        m_buf.extend_from_slice(&b);
        m_buf.push(msg.len() as u8);
        m_buf.extend_from_slice(msg);
        m_buf.resize(params.buffer_len_bytes(), 0);

        let m_trin = IntPoly::from_binary3_sves(&m_buf, n);

        let s_data = blinding_seed(params, msg, &b, h_trunc);
        let mut r = generate_blinding_poly(&s_data, params);
        let big_r = r.mult_mod(&public.h, q);
        r.clear();

        let mask = mgf_tp1(&r4_bytes(&big_r), n, params.min_calls_mask);
        let mut m_prime = m_trin;
        m_prime.add(&mask);
        m_prime.mod3();

        if m_prime.count(-1) < params.dm0
            || m_prime.count(0) < params.dm0
            || m_prime.count(1) < params.dm0
        {
            continue;
        }

        let mut e = big_r;
        e.add(&m_prime);
        e.mod_positive(q);
        return Ok(e.to_binary(q));
    }
    Err(Error::EncryptFailure)
}

/// Decrypts an SVES ciphertext. See IEEE P1363.1 section 9.2.3.
pub fn decrypt(data: &[u8], kp: &KeyPair, params: &EncParams) -> Result<Vec<u8>, Error> {
    let n = params.n;
    let q = params.q;
    if data.len() != params.enc_len() {
        return Err(Error::InvalidCiphertext("unexpected ciphertext length"));
    }
    let e = IntPoly::from_binary(data, n, q)
        .map_err(|_| Error::InvalidCiphertext("unexpected ciphertext length"))?;

    let ci = decrypt_poly(&e, &kp.private, params);
    if ci.count(-1) < params.dm0
        || ci.count(0) < params.dm0
        || ci.count(1) < params.dm0
    {
        return Err(Error::InvalidCiphertext(
            "message representative is not well balanced",
        ));
    }

    let mut c_r = e.clone();
    c_r.sub(&ci);
    c_r.mod_positive(q);
    let mask = mgf_tp1(&r4_bytes(&c_r), n, params.min_calls_mask);

    let mut c_m_trin = ci.clone();
    c_m_trin.sub(&mask);
    c_m_trin.mod3();
    let c_m = Zeroizing::new(
        c_m_trin
            .to_binary3_sves()
            .map_err(|_| Error::InvalidCiphertext("invalid message encoding"))?,
    );

    // parse b || len || msg || zero padding
    let db_bytes = params.db / 8;
    if c_m.len() < db_bytes + LLEN {
        return Err(Error::InvalidCiphertext("invalid message encoding"));
    }
    let b = &c_m[..db_bytes];
    let msg_len = c_m[db_bytes] as usize;
    if msg_len > params.max_msg_len_bytes() || db_bytes + LLEN + msg_len > c_m.len() {
        return Err(Error::InvalidCiphertext("message length out of range"));
    }
    let msg = &c_m[db_bytes + LLEN..db_bytes + LLEN + msg_len];
    if c_m[db_bytes + LLEN + msg_len..].iter().any(|&x| x != 0) {
        return Err(Error::InvalidCiphertext("nonzero padding after message"));
    }

    // rebuild the blinding polynomial from the recovered message and
    // verify it explains the ciphertext; e was formed from the masked
    // representative, so ci is what gets added back
    let h_bin = kp.public.h.to_binary(q);
    let h_trunc = &h_bin[..params.pk_len() / 8];
    let s_data = blinding_seed(params, msg, b, h_trunc);
    let mut r = generate_blinding_poly(&s_data, params);
    let mut e_check = r.mult_mod(&kp.public.h, q);
    r.clear();
    e_check.add(&ci);
    e_check.mod_positive(q);
    if e_check != e {
        return Err(Error::InvalidCiphertext("blinding polynomial check failed"));
    }

    Ok(msg.to_vec())
}

/// The core decryption map e -> message representative.
fn decrypt_poly(e: &IntPoly, private: &PrivateKey, params: &EncParams) -> IntPoly {
    let q = params.q;
    let mut a = private.t.mult_mod(e, q);
    if params.fast_fp {
        // f = 1 + 3t, so f*e = e + 3*(t*e)
        a.mult3(q);
        a.add(e);
        a.mod_positive(q);
    }
    a.center0(q);
    a.mod3();
    if params.fast_fp {
        a
    } else {
        let mut ci = a.mult_mod(&private.fp, P);
        ci.center0(P);
        ci
    }
}

/// Derives the deterministic blinding polynomial of weight (dr, dr) from
/// the seed: the index generator places the +1 positions first, then the
/// -1 positions, skipping indices that are already occupied.
pub fn generate_blinding_poly(seed: &[u8], params: &EncParams) -> TernaryPoly {
    fn place(igf: &mut IndexGenerator, occupied: &mut [bool], count: usize) -> Vec<usize> {
        let mut list = Vec::with_capacity(count);
        while list.len() < count {
            let i = igf.next_index();
            if !occupied[i] {
                occupied[i] = true;
                list.push(i);
            }
        }
        list
    }

    let n = params.n;
    let mut igf = IndexGenerator::new(seed, params);
    let mut occupied = vec![false; n];
    let ones = place(&mut igf, &mut occupied, params.dr);
    let neg_ones = place(&mut igf, &mut occupied, params.dr);

    let sparse = SparseTernPoly::new(n, ones, neg_ones);
    if params.sparse {
        TernaryPoly::Sparse(sparse)
    } else {
        TernaryPoly::Dense(sparse.to_dense())
    }
}

fn sample_private_poly<R: RngCore + CryptoRng>(
    params: &EncParams,
    rng: &mut R,
) -> TernaryPoly {
    let n = params.n;
    if params.product_form {
        TernaryPoly::Product(ProdPoly::generate_random(
            n,
            params.df1,
            params.df2,
            params.df3,
            params.df3,
            rng,
        ))
    } else if params.fast_fp {
        // F may be balanced because f = 1 + 3F keeps f(1) odd
        if params.sparse {
            TernaryPoly::Sparse(SparseTernPoly::generate_random(n, params.df, params.df, rng))
        } else {
            TernaryPoly::Dense(DenseTernPoly::generate_random(n, params.df, params.df, rng))
        }
    } else {
        // one fewer negative one, so f(1) != 0 and f has a chance of
        // being invertible
        if params.sparse {
            TernaryPoly::Sparse(SparseTernPoly::generate_random(
                n,
                params.df,
                params.df - 1,
                rng,
            ))
        } else {
            TernaryPoly::Dense(DenseTernPoly::generate_random(
                n,
                params.df,
                params.df - 1,
                rng,
            ))
        }
    }
}

/// The integer polynomial f the private key stands for.
fn private_to_f(t: &TernaryPoly, params: &EncParams) -> IntPoly {
    let mut f = t.to_int_poly();
    if params.fast_fp {
        f.mult_fac(3);
        f.coeffs[0] += 1;
    }
    f
}

/// seed for the blinding polynomial: oid || msg || b || truncated h
fn blinding_seed(params: &EncParams, msg: &[u8], b: &[u8], h_trunc: &[u8]) -> Vec<u8> {
    let mut seed = Vec::with_capacity(3 + msg.len() + b.len() + h_trunc.len());
    seed.extend_from_slice(&params.oid);
    seed.extend_from_slice(msg);
    seed.extend_from_slice(b);
    seed.extend_from_slice(h_trunc);
    seed
}

/// The low two bits of every coefficient, packed for the mask seed.
fn r4_bytes(r: &IntPoly) -> Vec<u8> {
    let mut r4 = r.clone();
    r4.mod_positive(4);
    r4.to_binary(4)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{
        ALL_PARAM_SETS, APR2011_439, APR2011_439_FAST, APR2011_743, APR2011_743_FAST,
    };
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_hello_world_round_trip() {
        let mut rng = ChaCha20Rng::from_seed([40u8; 32]);
        let params = APR2011_439_FAST;
        let kp = generate_key_pair(&params, &mut rng).unwrap();

        let msg = "hello world".as_bytes();
        let enc = encrypt(msg, &kp.public, &params, &mut rng).unwrap();
        assert_eq!(enc.len(), params.enc_len());
        let dec = decrypt(&enc, &kp, &params).unwrap();
        assert_eq!(dec, msg);
    }

    #[test]
    fn test_empty_message_round_trip() {
        let mut rng = ChaCha20Rng::from_seed([41u8; 32]);
        let params = APR2011_743;
        let kp = generate_key_pair(&params, &mut rng).unwrap();

        let enc = encrypt(&[], &kp.public, &params, &mut rng).unwrap();
        let dec = decrypt(&enc, &kp, &params).unwrap();
        assert!(dec.is_empty());
    }

    #[test]
    fn test_round_trip_all_lengths() {
        let mut rng = ChaCha20Rng::from_seed([42u8; 32]);
        for params in [APR2011_439, APR2011_439_FAST, APR2011_743_FAST] {
            let kp = generate_key_pair(&params, &mut rng).unwrap();
            for len in [0, 1, 17, params.max_msg_len_bytes()] {
                let msg: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
                let enc = encrypt(&msg, &kp.public, &params, &mut rng).unwrap();
                let dec = decrypt(&enc, &kp, &params).unwrap();
                assert_eq!(dec, msg, "{} with {} byte message", params.name, len);
            }
        }
    }

    #[test]
    fn test_message_too_long() {
        let mut rng = ChaCha20Rng::from_seed([43u8; 32]);
        let params = APR2011_439_FAST;
        let kp = generate_key_pair(&params, &mut rng).unwrap();
        let msg = vec![0u8; params.max_msg_len_bytes() + 1];
        assert_eq!(
            encrypt(&msg, &kp.public, &params, &mut rng),
            Err(Error::InvalidArgument("message too long"))
        );
    }

    #[test]
    fn test_tampered_ciphertext_rejected() {
        let mut rng = ChaCha20Rng::from_seed([44u8; 32]);
        let params = APR2011_439_FAST;
        let kp = generate_key_pair(&params, &mut rng).unwrap();
        let msg = b"tamper detection";
        let enc = encrypt(msg, &kp.public, &params, &mut rng).unwrap();

        for _ in 0..20 {
            let mut bad = enc.clone();
            // the final byte carries unused padding bits, so flips there
            // may not change the decoded polynomial
            let idx = rng.gen_range(0..bad.len() - 1);
            let flip: u8 = rng.gen_range(1..=255);
            bad[idx] ^= flip;
            assert!(matches!(
                decrypt(&bad, &kp, &params),
                Err(Error::InvalidCiphertext(_))
            ));
        }

        let mut truncated = enc.clone();
        truncated.pop();
        assert!(decrypt(&truncated, &kp, &params).is_err());
    }

    #[test]
    fn test_key_encoding_round_trip() {
        let mut rng = ChaCha20Rng::from_seed([45u8; 32]);
        for params in [APR2011_439, APR2011_439_FAST] {
            let kp = generate_key_pair(&params, &mut rng).unwrap();

            let pub_bytes = kp.public.to_bytes(&params);
            assert_eq!(pub_bytes.len(), params.public_len());
            let pub_back = PublicKey::from_bytes(&pub_bytes, &params).unwrap();
            assert_eq!(pub_back, kp.public);

            let priv_bytes = kp.private.to_bytes(&params);
            assert_eq!(priv_bytes.len(), params.private_len());
            let priv_back = PrivateKey::from_bytes(&priv_bytes, &params).unwrap();
            assert_eq!(priv_back, kp.private);

            // the rebuilt pair still decrypts
            let kp2 = KeyPair {
                private: priv_back,
                public: pub_back,
            };
            let enc = encrypt(b"after re-import", &kp2.public, &params, &mut rng).unwrap();
            assert_eq!(decrypt(&enc, &kp2, &params).unwrap(), b"after re-import");
        }
    }

    #[test]
    fn test_blinding_poly_deterministic() {
        let params = APR2011_439;
        let a = generate_blinding_poly(b"seed", &params);
        let b = generate_blinding_poly(b"seed", &params);
        assert_eq!(a, b);
        let c = generate_blinding_poly(b"different", &params);
        assert_ne!(a, c);

        let dense = a.to_int_poly();
        assert_eq!(dense.count(1), params.dr);
        assert_eq!(dense.count(-1), params.dr);
    }

    #[test]
    fn test_keygen_survives_bad_candidates() {
        // small weights make non-invertible candidates common; the retry
        // loop must still land on a valid pair
        let params = EncParams {
            name: "tiny",
            n: 439,
            q: 2048,
            df: 5,
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
            oid: [0, 7, 99],
            sparse: true,
            fast_fp: false,
            product_form: false,
        };
        let mut rng = ChaCha20Rng::from_seed([46u8; 32]);
        for _ in 0..3 {
            let kp = generate_key_pair(&params, &mut rng).unwrap();
            let f = kp.private.t.to_int_poly();
            let prod = f.mult_mod(&kp.private.fp, P);
            assert!(prod.eq_one());
        }
    }

    #[test]
    fn test_all_param_sets_have_valid_weights() {
        for params in &ALL_PARAM_SETS {
            // every weight must leave room in the coefficient vector
            assert!(params.dg * 2 <= params.n);
            assert!(params.dr * 2 <= params.n);
            if params.product_form {
                assert!(2 * (params.df1 + params.df2 + params.df3) <= params.n);
            } else {
                assert!(2 * params.df <= params.n);
            }
        }
    }
}
