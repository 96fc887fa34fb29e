//! HMAC engine for OTP generation
//!
//! Implements HMAC following RFC 2104, generic over the hash algorithms
//! accepted by the identity provider's OTP profiles (SHA-1, SHA-256,
//! SHA-512, MD5).
//!
//! Reference: https://www.ietf.org/rfc/rfc2104.txt
//! Block size: 64 bytes for SHA-1/SHA-256/MD5, 128 bytes for SHA-512
//! Inner pad (ipad): 0x36
//! Outer pad (opad): 0x5C

use crate::error::OtpError;
use md5::Md5;
use sha1::{Digest, Sha1};
use sha2::{Sha256, Sha512};
use std::fmt;
use std::str::FromStr;

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5C;

/// Hash algorithm selecting the HMAC digest function
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HmacAlgorithm {
    Sha1,
    Sha256,
    Sha512,
    Md5,
}

impl HmacAlgorithm {
    /// Parse a case-insensitive algorithm name, as transported by the
    /// enrollment endpoint ("sha1", "sha256", "sha512", "md5")
    pub fn parse(name: &str) -> Result<Self, OtpError> {
        match name.to_lowercase().as_str() {
            "sha1" => Ok(Self::Sha1),
            "sha256" => Ok(Self::Sha256),
            "sha512" => Ok(Self::Sha512),
            "md5" => Ok(Self::Md5),
            _ => Err(OtpError::UnsupportedAlgorithm {
                algorithm: name.to_string(),
            }),
        }
    }

    /// Canonical lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
            Self::Md5 => "md5",
        }
    }

    /// Digest output length in bytes
    pub fn output_len(&self) -> usize {
        match self {
            Self::Sha1 => 20,
            Self::Sha256 => 32,
            Self::Sha512 => 64,
            Self::Md5 => 16,
        }
    }

    /// RFC 2104 block size in bytes
    fn block_size(&self) -> usize {
        match self {
            Self::Sha512 => 128,
            _ => 64,
        }
    }
}

impl Default for HmacAlgorithm {
    fn default() -> Self {
        Self::Sha1
    }
}

impl FromStr for HmacAlgorithm {
    type Err = OtpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for HmacAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Compute HMAC over a message with the selected hash algorithm
///
/// Follows RFC 2104:
/// 1. Hash key if longer than block size
/// 2. Pad key to block size
/// 3. XOR key with ipad and opad
/// 4. Compute inner and outer hashes
pub fn compute(algorithm: HmacAlgorithm, key: &[u8], message: &[u8]) -> Vec<u8> {
    let block_size = algorithm.block_size();
    match algorithm {
        HmacAlgorithm::Sha1 => hmac_digest::<Sha1>(key, message, block_size),
        HmacAlgorithm::Sha256 => hmac_digest::<Sha256>(key, message, block_size),
        HmacAlgorithm::Sha512 => hmac_digest::<Sha512>(key, message, block_size),
        HmacAlgorithm::Md5 => hmac_digest::<Md5>(key, message, block_size),
    }
}

fn hmac_digest<D: Digest>(key: &[u8], message: &[u8], block_size: usize) -> Vec<u8> {
    // Step 1: Process key, hashing it first if longer than the block size
    let mut key_block = vec![0u8; block_size];
    if key.len() > block_size {
        let hashed = D::digest(key);
        key_block[..hashed.len()].copy_from_slice(&hashed);
    } else {
        key_block[..key.len()].copy_from_slice(key);
    }
    // Remaining bytes are already 0x00 (padding)

    // Step 2: Create ipad and opad keys
    let mut ipad_key = vec![0u8; block_size];
    let mut opad_key = vec![0u8; block_size];
    for i in 0..block_size {
        ipad_key[i] = key_block[i] ^ IPAD;
        opad_key[i] = key_block[i] ^ OPAD;
    }

    // Step 3: Compute inner hash
    let mut inner = D::new();
    inner.update(&ipad_key);
    inner.update(message);
    let inner_hash = inner.finalize();

    // Step 4: Compute outer hash
    let mut outer = D::new();
    outer.update(&opad_key);
    outer.update(&inner_hash);
    outer.finalize().to_vec()
}
