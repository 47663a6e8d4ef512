//! PayStream CLI Entry Point
//!
//! Exposes the security helpers and simulated form flows as subcommands
//! that print JSON. Uses `anyhow` for startup errors; flow failures are
//! reported as `kernel::error::AppError` bodies.

mod cli;
mod config;

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use forms::{AppError, ContactForm, FormService, LoginForm, RegisterForm};
use security::headers::{security_headers, security_meta_tags};
use security::password::{
    StrengthTier, check_password_strength, meter_percent, meter_score, validate_password,
};
use security::privacy::privacy_info;
use security::rate_limit::SlidingWindowLimiter;
use security::session::{MemorySessionStorage, SessionVault};
use security::threat::scan;
use security::{generate_nonce, generate_secure_token, is_secure_connection, sanitize};
use serde::Serialize;
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Command, ContactArgs, SignInArgs, SignUpArgs};
use crate::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing; stdout is reserved for JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "paystream=info,forms=info,security=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut config = AppConfig::from_env()?;
    if cli.instant {
        config.flow.simulated_latency = Duration::ZERO;
    }

    match cli.command {
        Command::Sanitize { input } => print(&json!({ "sanitized": sanitize(&input) }))?,
        Command::Token { bytes } => {
            let bytes = bytes.unwrap_or(config.security.token_bytes);
            print(&json!({ "bytes": bytes, "token": generate_secure_token(bytes) }))?
        }
        Command::Nonce => print(&json!({ "nonce": generate_nonce() }))?,
        Command::Strength { password } => {
            let report = check_password_strength(&password);
            print(&json!({
                "score": report.score,
                "issues": report.issues,
                "feedback": report.feedback(),
            }))?
        }
        Command::Meter { password } => {
            let score = meter_score(&password);
            let tier = StrengthTier::from_score(score);
            print(&json!({
                "score": score,
                "percent": meter_percent(score),
                "tier": tier,
                "label": tier.label(),
                "color": tier.color(),
            }))?
        }
        Command::ValidatePassword { password } => print(&validate_password(&password))?,
        Command::Threat { input } => {
            let kinds = scan(&input);
            print(&json!({ "detected": !kinds.is_empty(), "rules": kinds }))?
        }
        Command::Secure { url } => {
            print(&json!({ "secure": is_secure_connection(&url), "url": url }))?
        }
        Command::Privacy => print(privacy_info())?,
        Command::Headers { meta: true } => {
            let (nonce, tags) = security_meta_tags();
            print(&json!({ "nonce": nonce, "meta": tags }))?
        }
        Command::Headers { meta: false } => {
            let nonce = generate_nonce();
            print(&json!({ "nonce": nonce, "headers": security_headers(&nonce) }))?
        }
        Command::SignIn(args) => return sign_in(args, &config).await,
        Command::SignUp(args) => return sign_up(args, &config).await,
        Command::Contact(args) => return contact(args, &config).await,
    }

    Ok(ExitCode::SUCCESS)
}

type Service = FormService<SlidingWindowLimiter, MemorySessionStorage>;

/// One limiter and session store for the lifetime of the command
fn service(config: &AppConfig) -> Service {
    FormService::new(
        Arc::new(config.security.build_limiter()),
        Arc::new(SessionVault::new(MemorySessionStorage::new())),
        Arc::new(config.flow.clone()),
    )
}

async fn sign_in(args: SignInArgs, config: &AppConfig) -> anyhow::Result<ExitCode> {
    let service = service(config);
    let form = LoginForm {
        email: args.email,
        password: args.password,
        remember_me: args.remember_me,
    };

    let mut last = ExitCode::SUCCESS;
    for attempt in 1..=args.attempts.max(1) {
        tracing::debug!(attempt, "Submitting login form");
        last = report(service.sign_in(form.clone()).await)?;
    }
    if let Some(session) = service.current_session() {
        tracing::debug!(remember_me = session.remember_me, "Session stored");
    }
    Ok(last)
}

async fn sign_up(args: SignUpArgs, config: &AppConfig) -> anyhow::Result<ExitCode> {
    let form = RegisterForm {
        confirm_password: args.confirm_password.unwrap_or_else(|| args.password.clone()),
        first_name: args.first_name,
        last_name: args.last_name,
        email: args.email,
        password: args.password,
        terms: args.accept_terms,
    };
    report(service(config).sign_up(form).await)
}

async fn contact(args: ContactArgs, config: &AppConfig) -> anyhow::Result<ExitCode> {
    let form = ContactForm {
        name: args.name,
        email: args.email,
        phone: args.phone,
        subject: args.subject,
        message: args.message,
    };
    report(service(config).submit_contact(form).await)
}

/// Print the success value, or the error body, as JSON
fn report<T: Serialize>(result: forms::FormResult<T>) -> anyhow::Result<ExitCode> {
    match result {
        Ok(value) => {
            print(&value)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            let app: AppError = err.into();
            print(&app.body())?;
            Ok(ExitCode::FAILURE)
        }
    }
}

fn print<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
