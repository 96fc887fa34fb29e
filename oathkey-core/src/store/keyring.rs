//! Keyring operations for secure secret storage
//!
//! Uses the system keyring (Secret Service on Linux) to store and retrieve
//! enrollment secrets. Secrets are stored as hex strings under one service
//! name, with the profile name as the account.

use crate::error::{KeyringError, OathkeyError};
use crate::types::KEYRING_SERVICE_OTP;
use keyring::Entry;

/// Store an enrollment secret (hex-encoded) for a profile
pub fn store_secret(profile: &str, secret_hex: &str) -> Result<(), OathkeyError> {
    let entry = Entry::new(KEYRING_SERVICE_OTP, profile)
        .map_err(|_| OathkeyError::Keyring(KeyringError::ServiceUnavailable))?;

    entry
        .set_password(secret_hex)
        .map_err(|_| OathkeyError::Keyring(KeyringError::StoreFailed))?;

    Ok(())
}

/// Retrieve the enrollment secret (hex-encoded) for a profile
pub fn retrieve_secret(profile: &str) -> Result<String, OathkeyError> {
    let entry = Entry::new(KEYRING_SERVICE_OTP, profile)
        .map_err(|_| OathkeyError::Keyring(KeyringError::ServiceUnavailable))?;

    entry.get_password().map_err(|e| match e {
        keyring::Error::NoEntry => OathkeyError::Keyring(KeyringError::SecretNotFound),
        _ => OathkeyError::Keyring(KeyringError::RetrieveFailed),
    })
}

/// Check if a secret exists for the given profile
pub fn has_secret(profile: &str) -> Result<bool, OathkeyError> {
    let entry = Entry::new(KEYRING_SERVICE_OTP, profile)
        .map_err(|_| OathkeyError::Keyring(KeyringError::ServiceUnavailable))?;

    match entry.get_password() {
        Ok(_) => Ok(true),
        Err(_) => Ok(false),
    }
}

/// Delete the secret for the given profile
pub fn delete_secret(profile: &str) -> Result<(), OathkeyError> {
    let entry = Entry::new(KEYRING_SERVICE_OTP, profile)
        .map_err(|_| OathkeyError::Keyring(KeyringError::ServiceUnavailable))?;

    match entry.delete_credential() {
        Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
        Err(_) => Err(OathkeyError::Keyring(KeyringError::DeleteFailed)),
    }
}
