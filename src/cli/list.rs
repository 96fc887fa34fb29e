//! List command implementation

use colored::Colorize;
use oathkey_core::{config::toml_config, error::OathkeyError, store::keyring};

/// Run the list command
pub fn run_list() -> Result<(), OathkeyError> {
    let store = toml_config::load_store()?;

    if store.profiles.is_empty() {
        println!("No profiles registered. Run `oathkey setup` or `oathkey enroll`.");
        return Ok(());
    }

    for profile in &store.profiles {
        let secret_state = if keyring::has_secret(&profile.name)? {
            "secret in keyring".green()
        } else {
            "secret missing".red()
        };

        let issuer = profile.issuer.as_deref().unwrap_or("-");
        println!(
            "{}  issuer={}  {}  digits={}  period={}s  [{}]",
            profile.name.bold(),
            issuer,
            profile.algorithm,
            profile.digits,
            profile.period,
            secret_state
        );
    }

    Ok(())
}
