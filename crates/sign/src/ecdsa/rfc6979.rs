//! Deterministic nonce derivation per RFC 6979
//!
//! HMAC-SHA256-based candidate generator over the private scalar and the
//! message hash. No extra entropy is mixed in: repeated signatures over the
//! same (key, message) pair are byte-identical.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

fn hmac_sha256(key: &[u8; 32], parts: &[&[u8]]) -> [u8; 32] {
    let mut mac =
        HmacSha256::new_from_slice(key).expect("HMAC-SHA256 accepts keys of any length");
    for part in parts {
        mac.update(part);
    }
    mac.finalize().into_bytes().into()
}

/// Candidate nonce generator (RFC 6979 section 3.2)
pub(crate) struct NonceGenerator {
    k: [u8; 32],
    v: [u8; 32],
    first: bool,
}

impl NonceGenerator {
    /// Seed the generator from the private scalar `d` and message hash `z`,
    /// both as 32 big-endian bytes.
    pub(crate) fn new(d: &[u8; 32], z: &[u8; 32]) -> Self {
        let mut v = [0x01u8; 32];
        let mut k = [0x00u8; 32];

        // K = HMAC_K(V || 0x00 || int2octets(d) || bits2octets(z))
        k = hmac_sha256(&k, &[&v, &[0x00], d, z]);
        // V = HMAC_K(V)
        v = hmac_sha256(&k, &[&v]);
        // K = HMAC_K(V || 0x01 || int2octets(d) || bits2octets(z))
        k = hmac_sha256(&k, &[&v, &[0x01], d, z]);
        // V = HMAC_K(V)
        v = hmac_sha256(&k, &[&v]);

        NonceGenerator { k, v, first: true }
    }

    /// Produce the next 32-byte candidate.
    ///
    /// The caller rejects candidates that are zero or not below the group
    /// order and asks again; asking again runs the retry update of step H.
    pub(crate) fn next_candidate(&mut self) -> [u8; 32] {
        if !self.first {
            self.k = hmac_sha256(&self.k, &[&self.v, &[0x00]]);
            self.v = hmac_sha256(&self.k, &[&self.v]);
        }
        self.first = false;
        self.v = hmac_sha256(&self.k, &[&self.v]);
        self.v
    }
}
