//! Enroll command implementation
//!
//! Registers an OTP profile from the JSON body returned by the identity
//! provider's OTP-enrollment endpoint.

use crate::cli::setup::persist_profile;
use clap::Args;
use oathkey_core::{
    config::OtpProfile,
    enroll,
    error::{ConfigError, OathkeyError},
    types::OtpCode,
};

#[derive(Args)]
pub struct EnrollArgs {
    /// Path to the enrollment response JSON file
    #[arg(long)]
    pub input: std::path::PathBuf,

    /// Profile name (defaults to the enrolled account name)
    #[arg(long)]
    pub name: Option<String>,
}

/// Run the enroll command
pub fn run_enroll(args: EnrollArgs) -> Result<(), OathkeyError> {
    let body = std::fs::read_to_string(&args.input)?;
    let result = enroll::parse_response(&body)?.into_result()?;

    // Validates algorithm code, digits, period and secret in one step
    let generator = result.generator().map_err(OathkeyError::Otp)?;

    let name = args
        .name
        .or_else(|| result.account_name.clone())
        .or_else(|| result.oath_profile_uuid.clone())
        .ok_or_else(|| {
            OathkeyError::Config(ConfigError::MissingField {
                field: "AccountName (pass --name)".to_string(),
            })
        })?;

    let profile = OtpProfile {
        name: name.clone(),
        issuer: result.issuer.clone(),
        account: result.account_name.clone(),
        algorithm: generator.algorithm().name().to_string(),
        digits: result.digits,
        period: result.period,
    };

    // Exercise the generator once before anything is persisted
    let _: OtpCode = generator.generate_now().map_err(OathkeyError::Otp)?;

    persist_profile(profile, result.secret().expose())?;

    println!("Profile '{}' enrolled.", name);
    println!("Generate a code with: oathkey code --profile {}", name);

    Ok(())
}
