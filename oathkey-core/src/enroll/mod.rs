//! OTP enrollment payloads
//!
//! Models the identity provider's OTP-enrollment response and turns it into
//! a working [`TotpGenerator`]. The provider transports the HMAC algorithm
//! as a numeric code and the secret key as a plain string whose UTF-8 bytes
//! are the raw HMAC key.

use crate::error::{ConfigError, OathkeyError, OtpError};
use crate::otp::hmac::HmacAlgorithm;
use crate::otp::totp::TotpGenerator;
use crate::types::OtpSecret;
use serde::Deserialize;

/// Top-level enrollment response envelope
#[derive(Debug, Clone, Deserialize)]
pub struct EnrollmentResponse {
    pub success: bool,

    #[serde(rename = "Result")]
    pub result: Option<EnrollmentResult>,

    #[serde(rename = "Message", default)]
    pub message: Option<String>,

    #[serde(rename = "ErrorCode", default)]
    pub error_code: Option<String>,

    #[serde(rename = "ErrorID", default)]
    pub error_id: Option<String>,
}

impl EnrollmentResponse {
    /// Unwrap a successful enrollment, surfacing the server message on failure
    pub fn into_result(self) -> Result<EnrollmentResult, OathkeyError> {
        if !self.success {
            return Err(OathkeyError::Config(ConfigError::EnrollmentRejected {
                message: self
                    .message
                    .unwrap_or_else(|| "no message in response".to_string()),
            }));
        }
        self.result
            .ok_or_else(|| {
                OathkeyError::Config(ConfigError::MissingField {
                    field: "Result".to_string(),
                })
            })
    }
}

/// OTP enrollment result, field names as on the wire
#[derive(Debug, Clone, Deserialize)]
pub struct EnrollmentResult {
    #[serde(rename = "Status", default)]
    pub status: i32,

    #[serde(rename = "OathProfileUuid", default)]
    pub oath_profile_uuid: Option<String>,

    #[serde(rename = "AccountName", default)]
    pub account_name: Option<String>,

    #[serde(rename = "Issuer", default)]
    pub issuer: Option<String>,

    #[serde(rename = "SecretKey")]
    pub secret_key: String,

    #[serde(rename = "SecretVersion", default)]
    pub secret_version: i32,

    #[serde(rename = "Period")]
    pub period: u64,

    #[serde(rename = "Digits")]
    pub digits: u32,

    #[serde(rename = "Counter", default)]
    pub counter: u64,

    #[serde(rename = "HmacAlgorithm")]
    pub hmac_algorithm: u32,
}

impl EnrollmentResult {
    /// Raw HMAC key bytes: the UTF-8 bytes of the secret key string
    pub fn secret(&self) -> OtpSecret {
        OtpSecret::new(self.secret_key.as_bytes().to_vec())
    }

    /// The enrolled HMAC algorithm
    pub fn algorithm(&self) -> Result<HmacAlgorithm, OtpError> {
        algorithm_from_code(self.hmac_algorithm)
    }

    /// Build a generator for this enrollment
    ///
    /// Validation is the generator's: digit range, non-empty secret, and a
    /// positive period are all checked here, so a malformed enrollment fails
    /// before anything is persisted.
    pub fn generator(&self) -> Result<TotpGenerator, OtpError> {
        TotpGenerator::with_algorithm(self.algorithm()?, self.secret(), self.digits, self.period)
    }
}

/// Map the provider's numeric algorithm code to a hash algorithm
///
/// Wire values: 0 = sha1, 1 = sha256, 2 = sha512, 3 = md5
pub fn algorithm_from_code(code: u32) -> Result<HmacAlgorithm, OtpError> {
    match code {
        0 => Ok(HmacAlgorithm::Sha1),
        1 => Ok(HmacAlgorithm::Sha256),
        2 => Ok(HmacAlgorithm::Sha512),
        3 => Ok(HmacAlgorithm::Md5),
        _ => Err(OtpError::UnknownAlgorithmCode { code }),
    }
}

/// Parse an enrollment response from its JSON body
pub fn parse_response(json: &str) -> Result<EnrollmentResponse, OathkeyError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_code_mapping() {
        assert_eq!(algorithm_from_code(0).unwrap(), HmacAlgorithm::Sha1);
        assert_eq!(algorithm_from_code(1).unwrap(), HmacAlgorithm::Sha256);
        assert_eq!(algorithm_from_code(2).unwrap(), HmacAlgorithm::Sha512);
        assert_eq!(algorithm_from_code(3).unwrap(), HmacAlgorithm::Md5);
        assert_eq!(
            algorithm_from_code(4).unwrap_err(),
            OtpError::UnknownAlgorithmCode { code: 4 }
        );
    }

    #[test]
    fn test_secret_is_raw_utf8_bytes() {
        let result = EnrollmentResult {
            status: 0,
            oath_profile_uuid: None,
            account_name: None,
            issuer: None,
            secret_key: "Secret Key".to_string(),
            secret_version: 1,
            period: 30,
            digits: 6,
            counter: 0,
            hmac_algorithm: 0,
        };
        assert_eq!(result.secret().expose(), b"Secret Key");
    }
}
