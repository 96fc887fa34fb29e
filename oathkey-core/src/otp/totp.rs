//! TOTP (Time-based One-Time Password) generation
//!
//! Implements RFC 6238 on top of the RFC 4226 dynamic truncation, matching
//! the identity provider's server-side implementation byte for byte
//! (including its md5 profile variant, which no shelf TOTP crate covers).

use crate::error::OtpError;
use crate::otp::hmac::{self, HmacAlgorithm};
use crate::types::{OtpCode, OtpSecret};
use std::time::{SystemTime, UNIX_EPOCH};

// Index n holds 10^n; codes are taken modulo this table
const DIGITS_POWER: [u32; 9] = [
    1, 10, 100, 1_000, 10_000, 100_000, 1_000_000, 10_000_000, 100_000_000,
];

/// Generates time-based OTP codes for a fixed (algorithm, secret, digits,
/// period) profile
///
/// A generator is constructed once per enrollment and invoked repeatedly
/// with different timestamps. All parameter validation happens eagerly at
/// construction; `generate_at` is a pure function of the timestamp and
/// holds no mutable state, so a generator is safe to share across threads.
#[derive(Clone, Debug)]
pub struct TotpGenerator {
    algorithm: HmacAlgorithm,
    secret: OtpSecret,
    digits: u32,
    period: u64,
}

impl TotpGenerator {
    /// Create a generator, validating all parameters up front
    ///
    /// # Errors
    ///
    /// - `OtpError::UnsupportedDigits` if `digits` is outside `1..=8`
    /// - `OtpError::UnsupportedAlgorithm` for an unknown algorithm name
    ///   (names are matched case-insensitively)
    /// - `OtpError::MissingSecret` if the secret is empty
    /// - `OtpError::InvalidPeriod` if `period` is zero
    pub fn new(
        algorithm: &str,
        secret: OtpSecret,
        digits: u32,
        period: u64,
    ) -> Result<Self, OtpError> {
        let algorithm = HmacAlgorithm::parse(algorithm)?;
        Self::with_algorithm(algorithm, secret, digits, period)
    }

    /// Create a generator from an already-parsed algorithm
    pub fn with_algorithm(
        algorithm: HmacAlgorithm,
        secret: OtpSecret,
        digits: u32,
        period: u64,
    ) -> Result<Self, OtpError> {
        if digits < 1 || digits as usize >= DIGITS_POWER.len() {
            return Err(OtpError::UnsupportedDigits { digits });
        }
        if secret.is_empty() {
            return Err(OtpError::MissingSecret);
        }
        if period == 0 {
            return Err(OtpError::InvalidPeriod { period });
        }

        Ok(Self {
            algorithm,
            secret,
            digits,
            period,
        })
    }

    /// Generate the code for the current wall-clock time
    ///
    /// # Errors
    ///
    /// Returns `OtpError::TimeError` if the system clock reads before the
    /// Unix epoch.
    pub fn generate_now(&self) -> Result<OtpCode, OtpError> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| OtpError::TimeError)?
            .as_secs();
        Ok(self.generate_at(now))
    }

    /// Generate the code for the given Unix timestamp (seconds)
    ///
    /// Deterministic: equal timestamps always produce equal codes. The
    /// output is exactly `digits` ASCII decimal characters.
    pub fn generate_at(&self, timestamp_secs: u64) -> OtpCode {
        self.generate_counter(timestamp_secs / self.period)
    }

    /// Generate the code for an event counter (RFC 4226 moving factor)
    fn generate_counter(&self, counter: u64) -> OtpCode {
        // 8-byte big-endian moving factor
        let counter_bytes = counter.to_be_bytes();
        let mac = hmac::compute(self.algorithm, self.secret.expose(), &counter_bytes);

        // Dynamic truncation: the low nibble of the final byte selects a
        // 4-byte window. md5 yields only 16 bytes, so the offset is clamped
        // to keep the window inside the digest.
        let offset = usize::from(mac[mac.len() - 1] & 0x0f).min(mac.len() - 4);
        let binary = (u32::from(mac[offset] & 0x7f) << 24)
            | (u32::from(mac[offset + 1]) << 16)
            | (u32::from(mac[offset + 2]) << 8)
            | u32::from(mac[offset + 3]);

        let code = binary % DIGITS_POWER[self.digits as usize];

        // Zero-pad to the full code length
        OtpCode::new(format!("{:0width$}", code, width = self.digits as usize))
    }

    /// Seconds until the code for the given timestamp rolls over
    pub fn seconds_remaining(&self, timestamp_secs: u64) -> u64 {
        self.period - timestamp_secs % self.period
    }

    pub fn algorithm(&self) -> HmacAlgorithm {
        self.algorithm
    }

    pub fn digits(&self) -> u32 {
        self.digits
    }

    pub fn period(&self) -> u64 {
        self.period
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator(algorithm: &str, digits: u32) -> TotpGenerator {
        let secret = OtpSecret::new(b"12345678901234567890".to_vec());
        TotpGenerator::new(algorithm, secret, digits, 30).unwrap()
    }

    #[test]
    fn test_deterministic() {
        let totp = generator("sha1", 6);
        for t in [0, 29, 30, 59, 1_609_459_200] {
            assert_eq!(totp.generate_at(t).expose(), totp.generate_at(t).expose());
        }
    }

    #[test]
    fn test_same_time_step_same_code() {
        let totp = generator("sha256", 6);
        // 0..29 all fall in time step 0
        assert_eq!(totp.generate_at(0).expose(), totp.generate_at(29).expose());
        // 30 starts the next step
        assert_ne!(totp.generate_at(0).expose(), totp.generate_at(30).expose());
    }

    #[test]
    fn test_length_and_digit_set() {
        for algorithm in ["sha1", "sha256", "sha512", "md5"] {
            for digits in 1..=8 {
                let totp = generator(algorithm, digits);
                for t in [0u64, 59, 1_111_111_109, 20_000_000_000] {
                    let code = totp.generate_at(t);
                    assert_eq!(code.expose().len(), digits as usize);
                    assert!(code.expose().chars().all(|c| c.is_ascii_digit()));
                }
            }
        }
    }

    #[test]
    fn test_seconds_remaining() {
        let totp = generator("sha1", 6);
        assert_eq!(totp.seconds_remaining(0), 30);
        assert_eq!(totp.seconds_remaining(1), 29);
        assert_eq!(totp.seconds_remaining(29), 1);
        assert_eq!(totp.seconds_remaining(30), 30);
    }

    #[test]
    fn test_generate_now_is_current_code() {
        let totp = generator("sha1", 6);
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();
        // The clock may cross a 30s boundary between the two reads, so the
        // current or the next window's code are both acceptable
        let code = totp.generate_now().unwrap();
        assert!(
            code.expose() == totp.generate_at(now).expose()
                || code.expose() == totp.generate_at(now + 30).expose()
        );
    }

    #[test]
    fn test_custom_period() {
        let secret = OtpSecret::new(b"12345678901234567890".to_vec());
        let totp = TotpGenerator::new("sha1", secret, 6, 60).unwrap();
        assert_eq!(totp.generate_at(0).expose(), totp.generate_at(59).expose());
        assert_eq!(totp.seconds_remaining(30), 30);
    }
}
