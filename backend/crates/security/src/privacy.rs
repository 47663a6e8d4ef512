//! Privacy disclosure
//!
//! Static description of what the client keeps about a user and how. Shown
//! on the documentation page and returned verbatim by the CLI.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrivacyInfo {
    /// Categories of data held on the client
    pub data_collected: &'static [&'static str],
    pub storage_location: &'static str,
    pub retention: &'static str,
    /// How session values are protected at rest
    pub session_protection: &'static str,
    pub third_party_sharing: bool,
    pub tracking_cookies: bool,
    pub user_rights: &'static [&'static str],
    pub contact: &'static str,
}

static PRIVACY_INFO: PrivacyInfo = PrivacyInfo {
    data_collected: &[
        "Session token issued at sign-in",
        "Form input while it is being typed",
    ],
    storage_location: "Browser session storage for this tab only",
    retention: "Cleared on sign-out or when the tab is closed",
    session_protection: "Values are base64-encoded, not encrypted",
    third_party_sharing: false,
    tracking_cookies: false,
    user_rights: &[
        "Sign out at any time to remove stored session data",
        "Close the tab to discard everything held by this page",
    ],
    contact: "privacy@paystream.example",
};

/// The static disclosure
pub fn privacy_info() -> &'static PrivacyInfo {
    &PRIVACY_INFO
}
