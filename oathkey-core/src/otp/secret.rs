//! Secret-string decoding
//!
//! Enrollment secrets arrive as text: hex strings from the OTP enrollment
//! endpoint, or Base32 when keyed in from an authenticator app. Both
//! decoders are whitespace-tolerant and case-insensitive:
//! 1. Remove all whitespace characters
//! 2. (Base32 only) Apply padding to 8-character boundaries
//! 3. Decode with casefold

use crate::error::OtpError;
use data_encoding::{BASE32, HEXLOWER_PERMISSIVE};
use std::fmt;
use std::str::FromStr;

/// Text encoding of a secret supplied by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretEncoding {
    Hex,
    Base32,
}

impl SecretEncoding {
    /// Decode a secret string in this encoding to raw key bytes
    pub fn decode(&self, input: &str) -> Result<Vec<u8>, OtpError> {
        match self {
            Self::Hex => decode_hex(input),
            Self::Base32 => decode_base32(input),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Base32 => "base32",
        }
    }
}

impl FromStr for SecretEncoding {
    type Err = OtpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hex" => Ok(Self::Hex),
            "base32" => Ok(Self::Base32),
            _ => Err(OtpError::UnknownEncoding {
                encoding: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for SecretEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Clean whitespace from input string
fn clean(input: &str) -> String {
    input.split_whitespace().collect()
}

/// Pad input string to 8-character boundaries
///
/// Formula: padding_length = (8 - (len % 8)) % 8
fn pad(input: &str) -> String {
    let padding_len = (8 - (input.len() % 8)) % 8;
    format!("{}{}", input, "=".repeat(padding_len))
}

/// Decode a hex-encoded secret string to bytes
///
/// Accepts upper, lower, and mixed case; whitespace is stripped first.
pub fn decode_hex(input: &str) -> Result<Vec<u8>, OtpError> {
    let cleaned = clean(input);
    HEXLOWER_PERMISSIVE
        .decode(cleaned.as_bytes())
        .map_err(|_| OtpError::InvalidHex)
}

/// Encode raw key bytes as the canonical lowercase hex form
///
/// Keyring entries always hold this form, whatever encoding the secret
/// originally arrived in.
pub fn encode_hex(bytes: &[u8]) -> String {
    HEXLOWER_PERMISSIVE.encode(bytes)
}

/// Decode a Base32-encoded secret string to bytes
///
/// 1. Remove whitespace with `clean()`
/// 2. Add padding with `pad()`
/// 3. Decode with casefold (case-insensitive)
pub fn decode_base32(input: &str) -> Result<Vec<u8>, OtpError> {
    let cleaned = clean(input);
    let padded = pad(&cleaned);
    BASE32
        .decode(padded.to_uppercase().as_bytes())
        .map_err(|_| OtpError::InvalidBase32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_removes_spaces() {
        assert_eq!(clean("JBSW Y3DP EHPK 3PXP"), "JBSWY3DPEHPK3PXP");
    }

    #[test]
    fn test_clean_no_spaces() {
        assert_eq!(clean("JBSWY3DPEHPK3PXP"), "JBSWY3DPEHPK3PXP");
    }

    #[test]
    fn test_pad_no_padding_needed() {
        // Length 16, already multiple of 8
        assert_eq!(pad("JBSWY3DPEHPK3PXP"), "JBSWY3DPEHPK3PXP");
    }

    #[test]
    fn test_pad_needs_padding() {
        // Length 14, needs 2 padding chars to reach 16
        assert_eq!(pad("JBSWY3DPEHPK3P"), "JBSWY3DPEHPK3P==");
    }

    #[test]
    fn test_pad_formula() {
        // Padding formula: (8 - (len % 8)) % 8
        assert_eq!(pad("A").len(), 8);
        assert_eq!(pad("ABC").len(), 8);
        assert_eq!(pad("ABCDEFG").len(), 8);
        assert_eq!(pad("ABCDEFGH").len(), 8);
    }

    #[test]
    fn test_decode_base32_valid() {
        let bytes = decode_base32("JBSWY3DPEHPK3PXP").unwrap();
        assert_eq!(bytes.len(), 10);
    }

    #[test]
    fn test_decode_base32_with_spaces() {
        let with_spaces = decode_base32("JBSW Y3DP EHPK 3PXP").unwrap();
        let without_spaces = decode_base32("JBSWY3DPEHPK3PXP").unwrap();
        assert_eq!(with_spaces, without_spaces);
    }

    #[test]
    fn test_decode_base32_lowercase() {
        // Casefold: lowercase and mixed case decode identically
        let upper = decode_base32("JBSWY3DPEHPK3PXP").unwrap();
        let lower = decode_base32("jbswy3dpehpk3pxp").unwrap();
        let mixed = decode_base32("JbSwY3DpEhPk3PxP").unwrap();

        assert_eq!(upper, lower);
        assert_eq!(upper, mixed);
    }

    #[test]
    fn test_decode_base32_invalid() {
        assert_eq!(decode_base32("INVALID!").unwrap_err(), OtpError::InvalidBase32);
        assert_eq!(decode_base32("1NVAL1D0").unwrap_err(), OtpError::InvalidBase32);
    }

    #[test]
    fn test_decode_hex_valid() {
        let bytes = decode_hex("3132333435363738393031323334353637383930").unwrap();
        assert_eq!(bytes, b"12345678901234567890");
    }

    #[test]
    fn test_decode_hex_mixed_case_and_spaces() {
        let upper = decode_hex("DEADBEEF").unwrap();
        let lower = decode_hex("deadbeef").unwrap();
        let spaced = decode_hex("de ad be ef").unwrap();
        assert_eq!(upper, vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(upper, lower);
        assert_eq!(upper, spaced);
    }

    #[test]
    fn test_decode_hex_invalid() {
        assert_eq!(decode_hex("abc").unwrap_err(), OtpError::InvalidHex);
        assert_eq!(decode_hex("zzzz").unwrap_err(), OtpError::InvalidHex);
    }

    #[test]
    fn test_encode_hex_is_lowercase() {
        let encoded = encode_hex(&[0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(encoded, "deadbeef");
        assert_eq!(decode_hex(&encoded).unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn test_encoding_from_str() {
        assert_eq!("hex".parse::<SecretEncoding>().unwrap(), SecretEncoding::Hex);
        assert_eq!("Base32".parse::<SecretEncoding>().unwrap(), SecretEncoding::Base32);
        assert!("base64".parse::<SecretEncoding>().is_err());
    }
}
