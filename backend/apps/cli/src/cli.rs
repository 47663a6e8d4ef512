//! Command line definitions

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "paystream")]
#[command(about = "Client-side security toolkit for the PayStream forms", long_about = None)]
pub struct Cli {
    /// Skip the simulated network latency in form flows
    #[arg(long, global = true)]
    pub instant: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Escape markup-significant characters
    Sanitize { input: String },
    /// Generate a hex-encoded random token
    Token {
        /// Number of random bytes (defaults to PAYSTREAM_TOKEN_BYTES or 32)
        #[arg(short, long)]
        bytes: Option<usize>,
    },
    /// Generate a CSP nonce
    Nonce,
    /// Detailed strength report (score 0-4 with feedback)
    Strength { password: String },
    /// Visual meter score (0-5 with tier)
    Meter { password: String },
    /// Check a password against the register form policy
    ValidatePassword { password: String },
    /// Scan input for injection or traversal patterns
    Threat { input: String },
    /// Check whether a URL uses HTTPS
    Secure { url: String },
    /// Print the privacy disclosure
    Privacy,
    /// Print security headers for a fresh nonce
    Headers {
        /// Render as <meta http-equiv> tags instead of JSON
        #[arg(long)]
        meta: bool,
    },
    /// Simulate a login form submission
    SignIn(SignInArgs),
    /// Simulate a register form submission
    SignUp(SignUpArgs),
    /// Simulate a contact form submission
    Contact(ContactArgs),
}

#[derive(Args)]
pub struct SignInArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
    #[arg(long)]
    pub remember_me: bool,
    /// Submit the same form this many times against one limiter
    #[arg(long, default_value_t = 1)]
    pub attempts: u32,
}

#[derive(Args)]
pub struct SignUpArgs {
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub last_name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
    /// Defaults to --password
    #[arg(long)]
    pub confirm_password: Option<String>,
    #[arg(long)]
    pub accept_terms: bool,
}

#[derive(Args)]
pub struct ContactArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long, default_value = "")]
    pub phone: String,
    #[arg(long)]
    pub subject: String,
    #[arg(long)]
    pub message: String,
}
