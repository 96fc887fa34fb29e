//! Mock keyring implementation for testing
//!
//! Provides an in-memory keyring implementation that doesn't require
//! system keyring access. Used in CI environments and for testing.

use crate::error::{KeyringError, OathkeyError};
use crate::types::KEYRING_SERVICE_OTP;
use std::collections::HashMap;
use std::sync::Mutex;

lazy_static::lazy_static! {
    static ref MOCK_KEYRING: Mutex<HashMap<String, String>> = Mutex::new(HashMap::new());
}

/// Generate a key for the mock keyring
fn make_key(profile: &str) -> String {
    format!("{}:{}", KEYRING_SERVICE_OTP, profile)
}

/// Store an enrollment secret (hex-encoded) for a profile
pub fn store_secret(profile: &str, secret_hex: &str) -> Result<(), OathkeyError> {
    let mut keyring = MOCK_KEYRING
        .lock()
        .map_err(|_| OathkeyError::Keyring(KeyringError::StoreFailed))?;
    keyring.insert(make_key(profile), secret_hex.to_string());
    Ok(())
}

/// Retrieve the enrollment secret (hex-encoded) for a profile
pub fn retrieve_secret(profile: &str) -> Result<String, OathkeyError> {
    let keyring = MOCK_KEYRING
        .lock()
        .map_err(|_| OathkeyError::Keyring(KeyringError::RetrieveFailed))?;
    keyring
        .get(&make_key(profile))
        .cloned()
        .ok_or(OathkeyError::Keyring(KeyringError::SecretNotFound))
}

/// Check if a secret exists for the given profile
pub fn has_secret(profile: &str) -> Result<bool, OathkeyError> {
    let keyring = MOCK_KEYRING
        .lock()
        .map_err(|_| OathkeyError::Keyring(KeyringError::ServiceUnavailable))?;
    Ok(keyring.contains_key(&make_key(profile)))
}

/// Delete the secret for the given profile
pub fn delete_secret(profile: &str) -> Result<(), OathkeyError> {
    let mut keyring = MOCK_KEYRING
        .lock()
        .map_err(|_| OathkeyError::Keyring(KeyringError::DeleteFailed))?;
    keyring.remove(&make_key(profile));
    Ok(())
}
