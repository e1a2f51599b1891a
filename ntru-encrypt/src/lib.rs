//! NTRUEncrypt public-key encryption over the ring Z[X]/(X^N - 1),
//! following the IEEE 1363.1 SVES outline: message padding with a random
//! prefix and a length octet, a hash-derived blinding polynomial, and a
//! ternary mask from MGF-TP-1.
//!
//! Keys must be generated with [`generate_key_pair`] and must not be
//! shared with other schemes built on the same ring:
//!
//! ```
//! use rand::rngs::OsRng;
//! use ntru_encrypt::params::APR2011_439_FAST;
//!
//! let kp = ntru_encrypt::generate_key_pair(&APR2011_439_FAST, &mut OsRng).unwrap();
//!
//! let msg = b"Hello from Rust!";
//! let encrypted = ntru_encrypt::encrypt(msg, &kp.public, &APR2011_439_FAST, &mut OsRng).unwrap();
//! let decrypted = ntru_encrypt::decrypt(&encrypted, &kp, &APR2011_439_FAST).unwrap();
//!
//! assert_eq!(&msg[..], &decrypted[..]);
//! ```

pub mod encrypt;
pub mod error;
pub mod igf;
pub mod mgf;
pub mod params;

pub use encrypt::{decrypt, encrypt, generate_key_pair, KeyPair, PrivateKey, PublicKey};
pub use error::Error;
