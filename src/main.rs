//! oathkey - OATH TOTP code generator CLI
//!
//! A command-line tool for registering MFA enrollment profiles and
//! generating RFC 6238 one-time passcodes, with secrets stored in the
//! system keyring.

use clap::{Parser, Subcommand};
use oathkey_core::{error::OathkeyError, init_logging};

mod cli;

#[derive(Parser)]
#[command(name = "oathkey")]
#[command(about = "OATH TOTP code generator with secure secret storage")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register an OTP profile from explicit parameters
    Setup(cli::setup::SetupArgs),
    /// Register an OTP profile from an enrollment response file
    Enroll(cli::enroll::EnrollArgs),
    /// Generate the current code for a profile
    Code(cli::code::CodeArgs),
    /// List registered profiles
    List,
}

fn main() {
    // Initialize logging
    if let Err(e) = init_logging() {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(2);
    }

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Setup(args) => cli::setup::run_setup(args),
        Commands::Enroll(args) => cli::enroll::run_enroll(args),
        Commands::Code(args) => cli::code::run_code(args),
        Commands::List => cli::list::run_list(),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            let exit_code = match e {
                // Configuration errors (exit code 2)
                OathkeyError::Config(_)
                | OathkeyError::Toml(_)
                | OathkeyError::TomlSerialize(_)
                | OathkeyError::Json(_) => 2,
                // Keyring errors (exit code 2 for configuration/setup issues)
                OathkeyError::Keyring(_) => 2,
                // OTP errors (exit code 2 - configuration/setup)
                OathkeyError::Otp(_) => 2,
                // IO errors (exit code 1 - runtime)
                OathkeyError::Io(_) => 1,
            };

            eprintln!("{}", e);
            std::process::exit(exit_code);
        }
    }
}
