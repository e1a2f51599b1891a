//! The NTRUSign lattice basis data model and its construction pipeline:
//! sampling a short pair (f, g), completing it to a full basis with
//! resultants combined by CRT, and reducing the completion with a
//! high-precision rounded division. Signing and verification are
//! deliberately not provided; the published NTRUSign scheme is broken
//! and only the basis machinery carries over.

pub mod basis;
pub mod error;
pub mod params;

pub use basis::{generate_basis, generate_sign_key_pair, Basis, SignPrivateKey, SignPublicKey};
pub use error::SignError;
pub use params::{BasisType, SignParams};
