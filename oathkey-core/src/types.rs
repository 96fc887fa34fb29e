//! Type definitions and wrappers for secure data handling
//!
//! This module provides type-safe wrappers for sensitive data using the
//! secrecy crate to prevent accidental exposure in logs or debug output.

use secrecy::{ExposeSecret, Secret};
use std::fmt;

/// Wrapper for raw OTP secret key bytes
///
/// Holds the decoded shared secret fed to the HMAC engine. The wrapper
/// ensures the secret is never accidentally logged or exposed in debug
/// output, maintaining security throughout the application.
pub struct OtpSecret(Secret<Vec<u8>>);

// Secret<Vec<u8>> itself is neither Clone nor Debug, so both are spelled
// out here: a re-wrapping clone and a redacting Debug.
impl Clone for OtpSecret {
    fn clone(&self) -> Self {
        Self::new(self.0.expose_secret().clone())
    }
}

impl fmt::Debug for OtpSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OtpSecret([REDACTED])")
    }
}

impl OtpSecret {
    /// Create a new OtpSecret from raw key bytes
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(Secret::new(bytes))
    }

    /// Expose the secret bytes (use with caution!)
    ///
    /// This should only be called when absolutely necessary,
    /// such as when passing to the HMAC engine.
    pub fn expose(&self) -> &[u8] {
        self.0.expose_secret()
    }

    /// Number of key bytes
    pub fn len(&self) -> usize {
        self.0.expose_secret().len()
    }

    /// Whether the secret holds no bytes at all
    pub fn is_empty(&self) -> bool {
        self.0.expose_secret().is_empty()
    }
}

impl From<Vec<u8>> for OtpSecret {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<&[u8]> for OtpSecret {
    fn from(bytes: &[u8]) -> Self {
        Self::new(bytes.to_vec())
    }
}

/// Wrapper for generated OTP codes
///
/// Generated codes should also be treated as sensitive data and never
/// logged, even though they have a short lifetime.
#[derive(Clone, Debug)]
pub struct OtpCode(Secret<String>);

impl OtpCode {
    /// Create a new OtpCode from a generated code string
    pub fn new(code: String) -> Self {
        Self(Secret::new(code))
    }

    /// Expose the code value (use with caution!)
    ///
    /// This should only be called when sending the code to stdout
    /// or passing to external systems.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl From<String> for OtpCode {
    fn from(code: String) -> Self {
        Self::new(code)
    }
}

/// Service name under which OTP secrets are stored in the keyring
pub const KEYRING_SERVICE_OTP: &str = "oathkey-otp";
