//! External configuration.
//!
//! Properties for a service are read from the first of these sources that
//! has any property for it:
//!
//! 1. a credentials file, named by `IBM_CREDENTIALS_FILE` or else
//!    `ibm-credentials.env` in the working directory
//! 2. the process environment
//!
//! Keys are prefixed by the upper-cased service name, so service
//! `watsonx_data` reads `WATSONX_DATA_URL`, `WATSONX_DATA_APIKEY` and so on.
//!
//! ```text
//! WATSONX_DATA_URL=https://eu-de.lakehouse.cloud.ibm.com/lakehouse/api/v2
//! WATSONX_DATA_AUTH_TYPE=iam
//! WATSONX_DATA_APIKEY=...
//! WATSONX_DATA_AUTH_INSTANCE_ID=crn:v1:bluemix:public:lakehouse:...
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use tracing::debug;
use watsonx_define::AuthStrategy;

use crate::error::ConfigError;

/// Environment variable naming the credentials file.
pub const CREDENTIALS_FILE_ENV: &str = "IBM_CREDENTIALS_FILE";

/// Credentials file read from the working directory by default.
pub const DEFAULT_CREDENTIALS_FILE: &str = "ibm-credentials.env";

/// Properties configured for one service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceProperties {
    service_name: String,
    prefix: String,
    values: HashMap<String, String>,
}

impl ServiceProperties {
    /// Loads properties for `service_name` from the credentials file or the
    /// environment.
    ///
    /// ## Errors
    ///
    /// Returns an error if a credentials file exists but cannot be parsed.
    pub fn load(service_name: &str) -> Result<Self, ConfigError> {
        if let Some(path) = credentials_file() {
            let from_file = Self::from_pairs(service_name, read_credentials_file(&path)?);
            if !from_file.is_empty() {
                debug!(path = %path.display(), service = service_name, "using credentials file");
                return Ok(from_file);
            }
        }

        Ok(Self::from_pairs(service_name, std::env::vars()))
    }

    /// Collects the properties for `service_name` from full `KEY=value` pairs.
    ///
    /// Pairs belonging to other services are ignored.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// use watsonx_data::config::ServiceProperties;
    ///
    /// let props = ServiceProperties::from_pairs(
    ///     "watsonx_data",
    ///     [
    ///         ("WATSONX_DATA_URL".to_string(), "https://example.com".to_string()),
    ///         ("OTHER_SERVICE_URL".to_string(), "https://other.com".to_string()),
    ///     ],
    /// );
    /// assert_eq!(props.get("URL"), Some("https://example.com"));
    /// assert_eq!(props.len(), 1);
    /// ```
    pub fn from_pairs<I>(service_name: &str, pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let prefix = property_prefix(service_name);
        let values = pairs
            .into_iter()
            .filter_map(|(key, value)| {
                key.strip_prefix(&prefix)
                    .filter(|short| !short.is_empty())
                    .map(|short| (short.to_string(), value))
            })
            .collect();
        Self {
            service_name: service_name.to_string(),
            prefix,
            values,
        }
    }

    /// The service these properties belong to.
    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Number of properties found.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no property was found.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns a property by its short key (e.g. `URL`); empty values count as absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Returns a property or a missing-property error naming the full key.
    pub fn require(&self, key: &str) -> Result<String, ConfigError> {
        self.get(key)
            .map(str::to_string)
            .ok_or_else(|| ConfigError::missing_property(&self.service_name, self.full_key(key)))
    }

    /// The configured service URL.
    pub fn url(&self) -> Option<&str> {
        self.get("URL")
    }

    /// The configured authentication kind, IAM when unset.
    pub fn auth_type(&self) -> Result<AuthStrategy, ConfigError> {
        match self.get("AUTH_TYPE") {
            None => Ok(AuthStrategy::default()),
            Some(raw) => AuthStrategy::from_str(raw)
                .map_err(|_| ConfigError::UnsupportedAuthType(raw.to_string())),
        }
    }

    /// Reads a boolean property; absent means `false`.
    pub fn flag(&self, key: &str) -> Result<bool, ConfigError> {
        match self.get(key) {
            None => Ok(false),
            Some(raw) => raw
                .trim()
                .parse::<bool>()
                .map_err(|_| ConfigError::invalid_property(self.full_key(key), raw)),
        }
    }

    /// Reads an unsigned integer property.
    pub fn number(&self, key: &str) -> Result<Option<u32>, ConfigError> {
        self.get(key)
            .map(|raw| {
                raw.trim()
                    .parse::<u32>()
                    .map_err(|_| ConfigError::invalid_property(self.full_key(key), raw))
            })
            .transpose()
    }

    /// Reads a duration given in whole seconds.
    pub fn seconds(&self, key: &str) -> Result<Option<Duration>, ConfigError> {
        Ok(self.number(key)?.map(|s| Duration::from_secs(u64::from(s))))
    }

    fn full_key(&self, key: &str) -> String {
        format!("{}{key}", self.prefix)
    }
}

/// `watsonx-data` → `WATSONX_DATA_`.
fn property_prefix(service_name: &str) -> String {
    let mut prefix: String = service_name
        .chars()
        .map(|c| match c {
            '-' | '.' => '_',
            c => c.to_ascii_uppercase(),
        })
        .collect();
    prefix.push('_');
    prefix
}

fn credentials_file() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CREDENTIALS_FILE_ENV) {
        let path = PathBuf::from(path);
        return path.is_file().then_some(path);
    }
    let local = PathBuf::from(DEFAULT_CREDENTIALS_FILE);
    local.is_file().then_some(local)
}

fn read_credentials_file(path: &Path) -> Result<Vec<(String, String)>, ConfigError> {
    let to_error = |e: dotenvy::Error| ConfigError::CredentialsFile {
        path: path.to_path_buf(),
        message: e.to_string(),
    };
    dotenvy::from_path_iter(path)
        .map_err(to_error)?
        .map(|item| item.map_err(to_error))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn props(pairs: &[(&str, &str)]) -> ServiceProperties {
        ServiceProperties::from_pairs(
            "watsonx_data",
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())),
        )
    }

    #[test]
    fn prefix_normalizes_service_name() {
        assert_eq!(property_prefix("watsonx_data"), "WATSONX_DATA_");
        assert_eq!(property_prefix("watsonx-data.v2"), "WATSONX_DATA_V2_");
    }

    #[test]
    fn auth_type_defaults_to_iam() {
        assert_eq!(props(&[]).auth_type().unwrap(), AuthStrategy::Iam);
    }

    #[test]
    fn auth_type_parses_known_kinds() {
        let p = props(&[("WATSONX_DATA_AUTH_TYPE", "bearerToken")]);
        assert_eq!(p.auth_type().unwrap(), AuthStrategy::BearerToken);
        let p = props(&[("WATSONX_DATA_AUTH_TYPE", "Basic")]);
        assert_eq!(p.auth_type().unwrap(), AuthStrategy::Basic);
    }

    #[test]
    fn unsupported_auth_type_is_an_error() {
        let p = props(&[("WATSONX_DATA_AUTH_TYPE", "someOtherAuth")]);
        assert!(matches!(
            p.auth_type(),
            Err(ConfigError::UnsupportedAuthType(_))
        ));
    }

    #[test]
    fn require_reports_full_key() {
        let err = props(&[]).require("APIKEY").unwrap_err();
        assert!(err.to_string().contains("WATSONX_DATA_APIKEY"));
    }

    #[test]
    fn empty_values_are_absent() {
        let p = props(&[("WATSONX_DATA_URL", "")]);
        assert_eq!(p.url(), None);
        assert!(!p.is_empty());
    }

    #[test]
    fn typed_readers() {
        let p = props(&[
            ("WATSONX_DATA_ENABLE_RETRIES", "true"),
            ("WATSONX_DATA_MAX_RETRIES", "3"),
            ("WATSONX_DATA_RETRY_INTERVAL", "20"),
            ("WATSONX_DATA_DISABLE_SSL", "maybe"),
        ]);
        assert!(p.flag("ENABLE_RETRIES").unwrap());
        assert_eq!(p.number("MAX_RETRIES").unwrap(), Some(3));
        assert_eq!(
            p.seconds("RETRY_INTERVAL").unwrap(),
            Some(Duration::from_secs(20))
        );
        assert!(p.flag("DISABLE_SSL").is_err());
        assert!(!p.flag("MISSING").unwrap());
    }

    #[test]
    fn reads_credentials_file() {
        let path = std::env::temp_dir().join(format!(
            "watsonx-credentials-{}.env",
            std::process::id()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "# watsonx.data").unwrap();
        writeln!(file, "WATSONX_DATA_AUTH_TYPE=noauth").unwrap();
        writeln!(file, "WATSONX_DATA_URL=https://file.example.com/api/v2").unwrap();
        drop(file);

        let pairs = read_credentials_file(&path).unwrap();
        let p = ServiceProperties::from_pairs("watsonx_data", pairs);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(p.url(), Some("https://file.example.com/api/v2"));
        assert_eq!(p.auth_type().unwrap(), AuthStrategy::NoAuth);
    }
}
