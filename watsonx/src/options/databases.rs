//! Database registration options.

use bytes::Bytes;
use watsonx_definitions::watsonx_data::{
    CreateDatabaseRegistrationBody, DatabaseRegistrationCollection, DatabaseRegistrationResult,
};

use crate::error::ValidationError;
use crate::operation::{require, CallOptions, Operation};
use crate::request::{FormPart, RequestBody};

options! {
    /// Options for `list_database_registrations`.
    ListDatabaseRegistrationsOptions = "ListDatabaseRegistrations" -> DatabaseRegistrationCollection {
        path: [],
        query: [],
    }
}

options! {
    /// Options for `create_database_registration`.
    CreateDatabaseRegistrationOptions = "CreateDatabaseRegistration" -> DatabaseRegistrationResult {
        path: [],
        query: [],
        json: CreateDatabaseRegistrationBody,
    }
}

options! {
    /// Options for `get_database`.
    GetDatabaseOptions = "GetDatabase" -> DatabaseRegistrationResult {
        path: [database_id],
        query: [],
    }
}

options! {
    /// Options for `delete_database_catalog`.
    DeleteDatabaseCatalogOptions = "DeleteDatabaseCatalog" -> () {
        path: [database_id],
        query: [],
    }
}

options! {
    /// Options for `update_database`.
    UpdateDatabaseOptions = "UpdateDatabase" -> DatabaseRegistrationResult {
        path: [database_id],
        query: [],
        patch,
    }
}

/// Options for `create_driver_database_catalog`.
///
/// Registers a database together with the JDBC driver used to reach it. The
/// request is sent as a multipart form; the driver (and certificate, if
/// given) travel as file parts.
///
/// ```rust
/// use watsonx_data::options::CreateDriverDatabaseCatalogOptions;
/// use watsonx_data::Operation;
///
/// let options = CreateDriverDatabaseCatalogOptions::new(
///     b"PK\x03\x04".to_vec(),
///     "db2jcc4.jar",
///     "sales-db",
///     "db2",
///     "sales_catalog",
///     "db2.example.com",
///     "50000",
///     "admin",
///     "s3cret",
///     "SALES",
/// )
/// .with_ssl(true);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateDriverDatabaseCatalogOptions {
    pub driver: Bytes,
    /// MIME type of the driver part; `application/octet-stream` when unset.
    pub driver_content_type: Option<String>,
    pub driver_file_name: String,
    pub database_display_name: String,
    pub database_type: String,
    pub catalog_name: String,
    pub hostname: String,
    pub port: String,
    pub username: String,
    pub password: String,
    pub database_name: String,
    pub certificate: Option<Bytes>,
    pub certificate_extension: Option<String>,
    pub ssl: Option<bool>,
    pub description: Option<String>,
    pub created_on: Option<String>,
    /// Per-call settings.
    pub call: CallOptions,
}

impl CreateDriverDatabaseCatalogOptions {
    /// Creates the options from their mandatory fields.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        driver: impl Into<Bytes>,
        driver_file_name: impl Into<String>,
        database_display_name: impl Into<String>,
        database_type: impl Into<String>,
        catalog_name: impl Into<String>,
        hostname: impl Into<String>,
        port: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        database_name: impl Into<String>,
    ) -> Self {
        Self {
            driver: driver.into(),
            driver_file_name: driver_file_name.into(),
            database_display_name: database_display_name.into(),
            database_type: database_type.into(),
            catalog_name: catalog_name.into(),
            hostname: hostname.into(),
            port: port.into(),
            username: username.into(),
            password: password.into(),
            database_name: database_name.into(),
            ..Default::default()
        }
    }

    /// Sets the MIME type of the driver part.
    pub fn with_driver_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.driver_content_type = Some(content_type.into());
        self
    }

    /// Attaches a TLS certificate and its file extension.
    pub fn with_certificate(
        mut self,
        certificate: impl Into<Bytes>,
        extension: impl Into<String>,
    ) -> Self {
        self.certificate = Some(certificate.into());
        self.certificate_extension = Some(extension.into());
        self
    }

    /// Enables or disables TLS towards the database.
    pub fn with_ssl(mut self, ssl: bool) -> Self {
        self.ssl = Some(ssl);
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the creation timestamp reported to the service.
    pub fn with_created_on(mut self, created_on: impl Into<String>) -> Self {
        self.created_on = Some(created_on.into());
        self
    }

    fn text_fields(&self) -> [(&'static str, &str); 9] {
        [
            ("driver_file_name", self.driver_file_name.as_str()),
            ("database_display_name", self.database_display_name.as_str()),
            ("database_type", self.database_type.as_str()),
            ("catalog_name", self.catalog_name.as_str()),
            ("hostname", self.hostname.as_str()),
            ("port", self.port.as_str()),
            ("username", self.username.as_str()),
            ("password", self.password.as_str()),
            ("database_name", self.database_name.as_str()),
        ]
    }
}

call_setters!(CreateDriverDatabaseCatalogOptions);

impl Operation for CreateDriverDatabaseCatalogOptions {
    const ENDPOINT_ID: &'static str = "CreateDriverDatabaseCatalog";
    type Output = DatabaseRegistrationResult;

    fn validate(&self) -> Result<(), ValidationError> {
        if self.driver.is_empty() {
            return Err(ValidationError::missing(Self::ENDPOINT_ID, "driver"));
        }
        for (field, value) in self.text_fields() {
            require(Self::ENDPOINT_ID, field, value)?;
        }
        Ok(())
    }

    fn body(&self) -> Result<RequestBody, ValidationError> {
        let mut parts = vec![FormPart::file(
            "driver",
            self.driver.clone(),
            self.driver_file_name.clone(),
            Some(
                self.driver_content_type
                    .clone()
                    .unwrap_or_else(|| "application/octet-stream".to_string()),
            ),
        )];
        parts.extend(
            self.text_fields()
                .into_iter()
                .map(|(name, value)| FormPart::text(name, value)),
        );

        if let Some(certificate) = &self.certificate {
            let extension = self.certificate_extension.as_deref().unwrap_or("pem");
            parts.push(FormPart::file(
                "certificate",
                certificate.clone(),
                format!("certificate.{extension}"),
                Some("application/octet-stream".to_string()),
            ));
        }
        if let Some(extension) = &self.certificate_extension {
            parts.push(FormPart::text("certificate_extension", extension.clone()));
        }
        if let Some(ssl) = self.ssl {
            parts.push(FormPart::text("ssl", ssl.to_string()));
        }
        if let Some(description) = &self.description {
            parts.push(FormPart::text("description", description.clone()));
        }
        if let Some(created_on) = &self.created_on {
            parts.push(FormPart::text("created_on", created_on.clone()));
        }
        Ok(RequestBody::Multipart(parts))
    }

    fn call_options(&self) -> &CallOptions {
        &self.call
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::FormValue;

    fn driver_options() -> CreateDriverDatabaseCatalogOptions {
        CreateDriverDatabaseCatalogOptions::new(
            b"driver-bytes".to_vec(),
            "db2jcc4.jar",
            "sales-db",
            "db2",
            "sales_catalog",
            "db2.example.com",
            "50000",
            "admin",
            "s3cret",
            "SALES",
        )
    }

    #[test]
    fn update_database_without_id_fails() {
        let options = UpdateDatabaseOptions {
            body: Some(vec![]),
            ..Default::default()
        };
        assert!(matches!(
            options.validate(),
            Err(ValidationError::MissingField {
                operation: "UpdateDatabase",
                field: "database_id"
            })
        ));
    }

    #[test]
    fn driver_options_require_driver_bytes() {
        let mut options = driver_options();
        options.driver = Bytes::new();
        assert!(matches!(
            options.validate(),
            Err(ValidationError::MissingField { field: "driver", .. })
        ));
        assert!(CreateDriverDatabaseCatalogOptions::default().validate().is_err());
    }

    #[test]
    fn driver_body_carries_bytes_and_text_fields() {
        let RequestBody::Multipart(parts) = driver_options().with_ssl(false).body().unwrap() else {
            panic!("expected multipart body");
        };

        let driver = parts.iter().find(|p| p.name == "driver").unwrap();
        assert!(matches!(
            &driver.value,
            FormValue::File { bytes, file_name, .. }
                if bytes.as_ref() == b"driver-bytes" && file_name == "db2jcc4.jar"
        ));
        let port = parts.iter().find(|p| p.name == "port").unwrap();
        assert_eq!(port.value, FormValue::Text("50000".into()));
        assert!(parts.iter().any(|p| p.name == "ssl"));
        assert!(!parts.iter().any(|p| p.name == "certificate"));
    }

    #[test]
    fn certificate_is_optional_file_part() {
        let options = driver_options().with_certificate(b"-----BEGIN".to_vec(), "crt");
        let RequestBody::Multipart(parts) = options.body().unwrap() else {
            panic!("expected multipart body");
        };
        let certificate = parts.iter().find(|p| p.name == "certificate").unwrap();
        assert!(matches!(
            &certificate.value,
            FormValue::File { file_name, .. } if file_name == "certificate.crt"
        ));
    }
}
