//! Error types for the oathkey CLI tool
//!
//! This module defines all error types used throughout the application,
//! providing consistent error handling and user-friendly error messages.

use thiserror::Error;

/// Main error type for the oathkey application
#[derive(Error, Debug)]
pub enum OathkeyError {
    /// Errors related to profile configuration loading/parsing
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Errors related to keyring operations
    #[error("Keyring error: {0}")]
    Keyring(#[from] KeyringError),

    /// Errors related to OTP/TOTP operations
    #[error("OTP error: {0}")]
    Otp(#[from] OtpError),

    /// Generic I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing errors
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization errors
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// JSON parsing errors (enrollment payloads)
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Profile configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration file: {path}")]
    LoadFailed { path: String },

    #[error("Failed to save configuration file: {path}")]
    SaveFailed { path: String },

    #[error("No profile named: {name}")]
    ProfileNotFound { name: String },

    #[error("Missing required configuration field: {field}")]
    MissingField { field: String },

    #[error("Configuration validation error: {message}")]
    ValidationError { message: String },

    #[error("Enrollment rejected by server: {message}")]
    EnrollmentRejected { message: String },

    #[error("I/O error: {message}")]
    IoError { message: String },
}

/// System keyring operation errors
#[derive(Error, Debug)]
pub enum KeyringError {
    #[error("Keyring service unavailable")]
    ServiceUnavailable,

    #[error("Failed to store secret in keyring")]
    StoreFailed,

    #[error("Failed to retrieve secret from keyring")]
    RetrieveFailed,

    #[error("Failed to delete secret from keyring")]
    DeleteFailed,

    #[error("OTP secret not found in keyring")]
    SecretNotFound,
}

/// OTP/TOTP operation errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum OtpError {
    #[error("Unsupported digits. It should not exceed 8 and must be at least 1 (was: {digits})")]
    UnsupportedDigits { digits: u32 },

    #[error("Unsupported algorithm: {algorithm}")]
    UnsupportedAlgorithm { algorithm: String },

    #[error("Missing argument: secret must not be empty")]
    MissingSecret,

    #[error("Invalid period. It must be greater than zero (was: {period})")]
    InvalidPeriod { period: u64 },

    #[error("Invalid hex secret")]
    InvalidHex,

    #[error("Invalid Base32 secret")]
    InvalidBase32,

    #[error("Unknown secret encoding: {encoding}")]
    UnknownEncoding { encoding: String },

    #[error("Unknown HMAC algorithm code: {code}")]
    UnknownAlgorithmCode { code: u32 },

    #[error("System time error")]
    TimeError,
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, OathkeyError>;
