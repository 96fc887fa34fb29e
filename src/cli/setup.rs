//! Setup command implementation
//!
//! Registers an OTP profile from explicit parameters: the profile metadata
//! goes to the TOML config, the secret to the system keyring.

use clap::Args;
use oathkey_core::{
    config::{toml_config, OtpProfile},
    error::OathkeyError,
    otp::secret::{self, SecretEncoding},
    otp::totp::TotpGenerator,
    store::keyring,
    types::OtpSecret,
};
use tracing::info;

#[derive(Args)]
pub struct SetupArgs {
    /// Profile name
    #[arg(long)]
    pub name: String,

    /// Shared secret string
    #[arg(long)]
    pub secret: String,

    /// Secret encoding: hex or base32
    #[arg(long, default_value = "base32")]
    pub encoding: String,

    /// HMAC hash algorithm: sha1, sha256, sha512 or md5
    #[arg(long, default_value = "sha1")]
    pub algorithm: String,

    /// Number of code digits (1-8)
    #[arg(long, default_value_t = 6)]
    pub digits: u32,

    /// Time step in seconds
    #[arg(long, default_value_t = 30)]
    pub period: u64,

    /// Issuer shown in listings
    #[arg(long)]
    pub issuer: Option<String>,

    /// Account/user name the enrollment belongs to
    #[arg(long)]
    pub account: Option<String>,
}

/// Run the setup command
pub fn run_setup(args: SetupArgs) -> Result<(), OathkeyError> {
    // Decode the secret string to raw key bytes
    let encoding: SecretEncoding = args.encoding.parse().map_err(OathkeyError::Otp)?;
    let key_bytes = encoding.decode(&args.secret).map_err(OathkeyError::Otp)?;

    // Construct a generator once so every parameter is validated up front
    TotpGenerator::new(
        &args.algorithm,
        OtpSecret::new(key_bytes.clone()),
        args.digits,
        args.period,
    )
    .map_err(OathkeyError::Otp)?;

    let profile = OtpProfile {
        name: args.name.clone(),
        issuer: args.issuer,
        account: args.account,
        algorithm: args.algorithm.to_lowercase(),
        digits: args.digits,
        period: args.period,
    };

    persist_profile(profile, &key_bytes)?;

    println!("Profile '{}' registered.", args.name);
    println!("Generate a code with: oathkey code --profile {}", args.name);

    Ok(())
}

/// Save profile metadata to the config file and the secret to the keyring
pub fn persist_profile(profile: OtpProfile, key_bytes: &[u8]) -> Result<(), OathkeyError> {
    let mut store = toml_config::load_store()?;
    let name = profile.name.clone();

    store.upsert(profile);
    toml_config::save_store(&store)?;

    keyring::store_secret(&name, &secret::encode_hex(key_bytes))?;

    info!("Registered OTP profile '{}'", name);
    Ok(())
}
