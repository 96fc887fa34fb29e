//! Code command implementation
//!
//! Generates and prints the one-time passcode for a registered profile.
//! In quiet mode only the code reaches stdout, for machine-parsable usage;
//! errors go to stderr.

use clap::Args;
use colored::Colorize;
use oathkey_core::{
    config::{toml_config, OtpProfile},
    error::{ConfigError, OathkeyError, OtpError},
    otp::secret,
    otp::totp::TotpGenerator,
    store::keyring,
    types::OtpSecret,
};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Args)]
pub struct CodeArgs {
    /// Profile name (may be omitted when only one profile exists)
    #[arg(long)]
    pub profile: Option<String>,

    /// Generate for this Unix timestamp instead of the current time
    #[arg(long)]
    pub at: Option<u64>,

    /// Print only the code, without expiry information
    #[arg(long)]
    pub quiet: bool,
}

/// Run the code command
pub fn run_code(args: CodeArgs) -> Result<(), OathkeyError> {
    let store = toml_config::load_store()?;
    let profile = select_profile(&store, args.profile.as_deref())?;

    // The keyring holds the secret in canonical hex form
    let secret_hex = keyring::retrieve_secret(&profile.name)?;
    let key_bytes = secret::decode_hex(&secret_hex).map_err(OathkeyError::Otp)?;

    let generator = TotpGenerator::new(
        &profile.algorithm,
        OtpSecret::new(key_bytes),
        profile.digits,
        profile.period,
    )
    .map_err(OathkeyError::Otp)?;

    let timestamp = match args.at {
        Some(at) => at,
        None => SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| OathkeyError::Otp(OtpError::TimeError))?
            .as_secs(),
    };

    let code = generator.generate_at(timestamp);

    if args.quiet {
        // Output only the code to stdout (machine-parsable)
        println!("{}", code.expose());
    } else {
        let remaining = generator.seconds_remaining(timestamp);
        println!(
            "{}  (expires in {})",
            code.expose().bold(),
            format!("{}s", remaining).dimmed()
        );
    }

    Ok(())
}

/// Resolve which profile to use
fn select_profile<'a>(
    store: &'a toml_config::ProfileStore,
    name: Option<&str>,
) -> Result<&'a OtpProfile, OathkeyError> {
    match name {
        Some(name) => store.find(name).ok_or_else(|| {
            OathkeyError::Config(ConfigError::ProfileNotFound {
                name: name.to_string(),
            })
        }),
        None => match store.profiles.as_slice() {
            [single] => Ok(single),
            [] => Err(OathkeyError::Config(ConfigError::MissingField {
                field: "profile (run `oathkey setup` first)".to_string(),
            })),
            _ => Err(OathkeyError::Config(ConfigError::ValidationError {
                message: "Multiple profiles registered, pass --profile".to_string(),
            })),
        },
    }
}
