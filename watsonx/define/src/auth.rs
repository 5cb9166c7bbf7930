//! Authentication kinds for REST APIs.
//!
//! The strategy names the *kind* of credential an API expects. Credentials
//! themselves are never part of a definition; the runtime resolves them from
//! explicit configuration or from `<SERVICE_NAME>_*` properties and selects an
//! authenticator implementation based on this enum.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Authentication strategy for an API.
///
/// Parsing is case-insensitive so that configuration values such as
/// `IAM`, `iam` or `bearertoken` all resolve.
///
/// ## Examples
///
/// ```
/// use std::str::FromStr;
/// use watsonx_define::AuthStrategy;
///
/// assert_eq!(AuthStrategy::from_str("IAM").unwrap(), AuthStrategy::Iam);
/// assert_eq!(AuthStrategy::from_str("bearertoken").unwrap(), AuthStrategy::BearerToken);
/// assert_eq!(AuthStrategy::NoAuth.to_string(), "noAuth");
/// assert!(AuthStrategy::from_str("someOtherAuth").is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum AuthStrategy {
    /// No authentication required.
    #[strum(serialize = "noAuth")]
    NoAuth,

    /// IBM Cloud IAM: an API key exchanged for a short-lived bearer token.
    #[default]
    #[strum(serialize = "iam")]
    Iam,

    /// Basic authentication (username:password).
    ///
    /// Generates: `Authorization: Basic <base64(username:password)>`
    #[strum(serialize = "basic")]
    Basic,

    /// A caller-managed bearer token.
    ///
    /// Generates: `Authorization: Bearer <token>`
    #[strum(serialize = "bearerToken")]
    BearerToken,
}
