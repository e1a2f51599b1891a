use ntru_core::integer_poly::IntPoly;
use sha2::{Digest, Sha512};

/// MGF-TP-1: expands a seed into a ternary polynomial of length `n`.
///
/// SHA-512 outputs over `seed || counter` are concatenated and truncated
/// to ceil((3N+2)/2) bytes, then decoded two bits at a time: 00 -> 0,
/// 01 -> 1, 10 -> -1, with the reserved group 11 skipped so the trits
/// stay uniform.
pub fn mgf_tp1(seed: &[u8], n: usize, min_calls: usize) -> IntPoly {
    let num_bytes = (3 * n + 3) / 2;
    let num_calls = ((num_bytes + 63) / 64).max(min_calls);

    let mut buf = Vec::with_capacity(num_calls * 64);
    for counter in 0..num_calls as u32 {
        let mut hash = Sha512::new();
        hash.update(seed);
        hash.update(counter.to_be_bytes());
        buf.extend_from_slice(&hash.finalize());
    }
    buf.truncate(num_bytes);

    let mut coeffs = vec![0i64; n];
    let mut idx = 0;
    'outer: for &byte in &buf {
        for shift in [6u8, 4, 2, 0] {
            let pair = (byte >> shift) & 3;
            if pair == 3 {
                continue;
            }
            coeffs[idx] = match pair {
                0 => 0,
                1 => 1,
                _ => -1,
            };
            idx += 1;
            if idx == n {
                break 'outer;
            }
        }
    }
    IntPoly::new(coeffs)
}
