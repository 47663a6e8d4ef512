//! Password Strength
//!
//! Two scorers live here and they are deliberately kept apart:
//!
//! - [`check_password_strength`] produces a 0–4 score with actionable
//!   feedback. It rewards length ≥ 12, penalizes deny-listed passwords,
//!   ascending runs, and repeated characters.
//! - [`meter_score`] counts five criteria (0–5) and drives the colored
//!   meter shown under the register form via [`StrengthTier`].
//!
//! They disagree on purpose-built inputs (e.g. `"password"` scores 0 in the
//! first and 2 in the second). Which one is authoritative is an open
//! product question; do not merge them.
//!
//! [`validate_password`] is the register form's acceptance policy. It is a
//! pass/fail check, not a score.

use serde::Serialize;

/// Highest score [`check_password_strength`] reports
pub const MAX_STRENGTH_SCORE: u8 = 4;

/// Highest score [`meter_score`] reports
pub const MAX_METER_SCORE: u8 = 5;

/// Minimum length accepted by the register form
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Length that earns the extra strength point
const STRONG_LENGTH: usize = 12;

/// Compared case-insensitively against the whole password
const COMMON_PASSWORDS: &[&str] = &["password", "123456", "qwerty", "admin", "welcome"];

const STRONG_FEEDBACK: &str = "Password is strong";

// ============================================================================
// Detailed strength report
// ============================================================================

/// Result of [`check_password_strength`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordStrength {
    /// 0 (weakest) to [`MAX_STRENGTH_SCORE`]
    pub score: u8,
    /// Issues found, in the order they were detected
    pub issues: Vec<String>,
}

impl PasswordStrength {
    /// Issues joined with a space, or `"Password is strong"` when none
    ///
    /// A password can lose points without producing an issue (8–11
    /// characters earns no length point but is not reported), so this text
    /// does not always mean the score is at its maximum.
    pub fn feedback(&self) -> String {
        if self.issues.is_empty() {
            STRONG_FEEDBACK.to_string()
        } else {
            self.issues.join(" ")
        }
    }
}

/// Score a password from 0 to 4 and explain what weakens it
pub fn check_password_strength(password: &str) -> PasswordStrength {
    let mut score: u8 = 0;
    let mut issues = Vec::new();
    let classes = CharClasses::of(password);
    let length = password.chars().count();

    if length < MIN_PASSWORD_LENGTH {
        issues.push("Password should be at least 8 characters long.".to_string());
    } else if length >= STRONG_LENGTH {
        score += 1;
    }

    for (present, missing) in [
        (classes.upper, "Add uppercase letters."),
        (classes.lower, "Add lowercase letters."),
        (classes.digit, "Add numbers."),
        (classes.special, "Add special characters."),
    ] {
        if present {
            score += 1;
        } else {
            issues.push(missing.to_string());
        }
    }

    if is_common_password(password) {
        score = 0;
        issues.push("This is a commonly used password.".to_string());
    }

    if has_sequential_run(password) {
        score = score.saturating_sub(1);
        issues.push("Avoid sequential characters (like abc or 123).".to_string());
    }

    if has_repeated_run(password) {
        score = score.saturating_sub(1);
        issues.push("Avoid repeated characters (like aaa).".to_string());
    }

    PasswordStrength {
        score: score.min(MAX_STRENGTH_SCORE),
        issues,
    }
}

// ============================================================================
// Visual meter
// ============================================================================

/// Count of satisfied criteria: length ≥ 8, uppercase, lowercase, digit,
/// special character
pub fn meter_score(password: &str) -> u8 {
    let classes = CharClasses::of(password);
    [
        password.chars().count() >= MIN_PASSWORD_LENGTH,
        classes.upper,
        classes.lower,
        classes.digit,
        classes.special,
    ]
    .into_iter()
    .filter(|&met| met)
    .count() as u8
}

/// Three-step bucket shown by the strength meter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthTier {
    Weak,
    Moderate,
    Strong,
}

impl StrengthTier {
    /// `Weak` up to 2, `Moderate` up to 4, `Strong` at 5
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => StrengthTier::Weak,
            3..=4 => StrengthTier::Moderate,
            _ => StrengthTier::Strong,
        }
    }

    pub fn of(password: &str) -> Self {
        Self::from_score(meter_score(password))
    }

    pub fn label(&self) -> &'static str {
        match self {
            StrengthTier::Weak => "Weak",
            StrengthTier::Moderate => "Moderate",
            StrengthTier::Strong => "Strong",
        }
    }

    /// Meter bar color
    pub fn color(&self) -> &'static str {
        match self {
            StrengthTier::Weak => "red",
            StrengthTier::Moderate => "yellow",
            StrengthTier::Strong => "green",
        }
    }
}

/// Meter fill width in percent (20 per satisfied criterion)
pub fn meter_percent(score: u8) -> u8 {
    score.min(MAX_METER_SCORE) * 20
}

// ============================================================================
// Register form policy
// ============================================================================

/// Result of [`validate_password`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordValidation {
    pub valid: bool,
    pub errors: Vec<String>,
}

/// Check a password against the register form's rules
pub fn validate_password(password: &str) -> PasswordValidation {
    let classes = CharClasses::of(password);
    let mut errors = Vec::new();

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.push("Password must be at least 8 characters long".to_string());
    }
    if !classes.upper {
        errors.push("Password must contain at least one uppercase letter".to_string());
    }
    if !classes.lower {
        errors.push("Password must contain at least one lowercase letter".to_string());
    }
    if !classes.digit {
        errors.push("Password must contain at least one number".to_string());
    }
    if !classes.special {
        errors.push("Password must contain at least one special character".to_string());
    }

    PasswordValidation {
        valid: errors.is_empty(),
        errors,
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// ASCII character classes present in a password
///
/// Anything outside `[A-Za-z0-9]` (including spaces and non-ASCII letters)
/// counts as special.
#[derive(Debug, Default, Clone, Copy)]
struct CharClasses {
    upper: bool,
    lower: bool,
    digit: bool,
    special: bool,
}

impl CharClasses {
    fn of(password: &str) -> Self {
        let mut classes = Self::default();
        for ch in password.chars() {
            match ch {
                'A'..='Z' => classes.upper = true,
                'a'..='z' => classes.lower = true,
                '0'..='9' => classes.digit = true,
                _ => classes.special = true,
            }
        }
        classes
    }
}

fn is_common_password(password: &str) -> bool {
    COMMON_PASSWORDS
        .iter()
        .any(|common| common.eq_ignore_ascii_case(password))
}

/// Three ascending letters (`abc`, case-insensitive) or digits (`345`)
fn has_sequential_run(password: &str) -> bool {
    let chars: Vec<char> = password.chars().map(|c| c.to_ascii_lowercase()).collect();
    chars.windows(3).any(|w| {
        let same_class =
            w.iter().all(char::is_ascii_lowercase) || w.iter().all(char::is_ascii_digit);
        same_class && w[1] as u32 == w[0] as u32 + 1 && w[2] as u32 == w[1] as u32 + 1
    })
}

/// Any character three or more times in a row
fn has_repeated_run(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2])
}

// ============================================================================
// Tests
// ============================================================================
