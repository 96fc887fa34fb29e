//! Configuration module
//!
//! Handles loading and saving OTP profiles from TOML files.

use crate::otp::hmac::HmacAlgorithm;
use serde::{Deserialize, Serialize};

pub mod toml_config;

/// OTP profile structure
///
/// Contains all non-sensitive OTP parameters for one enrollment.
/// The secret key itself is stored separately in the keyring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpProfile {
    /// Profile name, also the keyring account the secret is stored under
    pub name: String,

    /// Issuer advertised by the identity provider
    pub issuer: Option<String>,

    /// Account/user name the enrollment belongs to
    pub account: Option<String>,

    /// HMAC hash algorithm name (sha1, sha256, sha512, md5)
    pub algorithm: String,

    /// Number of code digits (1..=8)
    pub digits: u32,

    /// Time step in seconds
    pub period: u64,
}

impl OtpProfile {
    /// Create a new profile with the given OTP parameters
    pub fn new(name: String, algorithm: String, digits: u32, period: u64) -> Self {
        Self {
            name,
            issuer: None,
            account: None,
            algorithm,
            digits,
            period,
        }
    }

    /// Validate the profile
    ///
    /// Re-checks everything the generator would reject so that a
    /// hand-edited config file fails at load time, not at code time.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("Profile name cannot be empty".to_string());
        }

        if HmacAlgorithm::parse(&self.algorithm).is_err() {
            return Err(format!("Unsupported algorithm: {}", self.algorithm));
        }

        if self.digits < 1 || self.digits > 8 {
            return Err(format!(
                "Digits must be between 1 and 8 (was: {})",
                self.digits
            ));
        }

        if self.period == 0 {
            return Err("Period cannot be zero".to_string());
        }

        Ok(())
    }
}

impl Default for OtpProfile {
    fn default() -> Self {
        Self {
            name: String::new(),
            issuer: None,
            account: None,
            algorithm: HmacAlgorithm::default().name().to_string(),
            digits: 6,
            period: 30,
        }
    }
}
