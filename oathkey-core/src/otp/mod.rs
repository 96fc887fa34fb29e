//! OTP engine
//!
//! RFC 6238/4226 time-based one-time-password generation: secret decoding,
//! HMAC computation, and dynamic truncation.

pub mod hmac;
pub mod secret;
pub mod totp;
