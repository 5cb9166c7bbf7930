//! Request assembly.
//!
//! Turns an Options value into a [`PreparedRequest`] by consulting the
//! endpoint descriptor it names. Nothing is sent here; a prepared request can
//! be turned into a `reqwest` request any number of times, once per attempt.

use bytes::Bytes;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use url::Url;
use watsonx_define::{ApiRequest, Endpoint, RestApi, RestMethod};

use crate::error::{ClientError, ConfigError, ValidationError, WatsonxResult};
use crate::operation::Operation;

/// Name of the header carrying the watsonx.data instance.
pub const AUTH_INSTANCE_ID_HEADER: &str = "AuthInstanceId";

/// Characters left unescaped in a path segment.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// The body an operation sends.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestBody {
    /// No body.
    #[default]
    None,
    /// An encoded JSON document (plain JSON or a JSON patch).
    Json(Bytes),
    /// A multipart form.
    Multipart(Vec<FormPart>),
}

impl RequestBody {
    /// Encodes `value` as a JSON body.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self, ValidationError> {
        Ok(Self::Json(Bytes::from(serde_json::to_vec(value)?)))
    }
}

/// One part of a multipart form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormPart {
    /// Field name.
    pub name: String,
    /// Field content.
    pub value: FormValue,
}

/// Content of a multipart form part.
#[derive(Debug, Clone, PartialEq)]
pub enum FormValue {
    /// A plain text field.
    Text(String),
    /// A file upload.
    File {
        /// File content.
        bytes: Bytes,
        /// File name sent in `Content-Disposition`.
        file_name: String,
        /// MIME type of the part, if known.
        content_type: Option<String>,
    },
}

impl FormPart {
    /// Creates a text part.
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: FormValue::Text(value.into()),
        }
    }

    /// Creates a file part.
    pub fn file(
        name: impl Into<String>,
        bytes: Bytes,
        file_name: impl Into<String>,
        content_type: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value: FormValue::File {
                bytes,
                file_name: file_name.into(),
                content_type,
            },
        }
    }
}

/// Handle-level values applied to every request.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RequestDefaults<'a> {
    pub service_url: &'a str,
    pub headers: &'a HeaderMap,
    pub auth_instance_id: Option<&'a str>,
}

/// A fully assembled request, ready to be sent.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    /// Endpoint identifier.
    pub operation: &'static str,
    /// HTTP method.
    pub method: RestMethod,
    /// Full URL including the query string.
    pub url: Url,
    /// Headers other than credentials.
    pub headers: HeaderMap,
    /// Request body.
    pub body: RequestBody,
}

impl PreparedRequest {
    /// Builds a `reqwest` request for one attempt.
    pub(crate) fn to_reqwest(
        &self,
        client: &reqwest::Client,
    ) -> Result<reqwest::RequestBuilder, ClientError> {
        let builder = client
            .request(to_reqwest_method(self.method), self.url.clone())
            .headers(self.headers.clone());

        Ok(match &self.body {
            RequestBody::None => builder,
            RequestBody::Json(bytes) => builder.body(bytes.clone()),
            RequestBody::Multipart(parts) => builder.multipart(build_form(parts)?),
        })
    }
}

fn to_reqwest_method(method: RestMethod) -> reqwest::Method {
    match method {
        RestMethod::Get => reqwest::Method::GET,
        RestMethod::Post => reqwest::Method::POST,
        RestMethod::Put => reqwest::Method::PUT,
        RestMethod::Patch => reqwest::Method::PATCH,
        RestMethod::Delete => reqwest::Method::DELETE,
        RestMethod::Head => reqwest::Method::HEAD,
        RestMethod::Options => reqwest::Method::OPTIONS,
    }
}

fn build_form(parts: &[FormPart]) -> Result<Form, ClientError> {
    let mut form = Form::new();
    for part in parts {
        let encoded = match &part.value {
            FormValue::Text(text) => Part::text(text.clone()),
            FormValue::File {
                bytes,
                file_name,
                content_type,
            } => {
                let file = Part::bytes(bytes.to_vec()).file_name(file_name.clone());
                match content_type {
                    Some(mime) => file.mime_str(mime)?,
                    None => file,
                }
            }
        };
        form = form.part(part.name.clone(), encoded);
    }
    Ok(form)
}

/// Assembles the request for `options` without sending anything.
///
/// Validation runs first, so an invalid Options value fails before the
/// service URL is even looked at.
pub(crate) fn prepare<O: Operation>(
    api: &RestApi,
    defaults: RequestDefaults<'_>,
    options: &O,
) -> WatsonxResult<PreparedRequest> {
    options.validate()?;

    if defaults.service_url.is_empty() {
        return Err(ClientError::ServiceUrlMissing.into());
    }

    let endpoint = api
        .endpoint(O::ENDPOINT_ID)
        .ok_or(ValidationError::UnknownEndpoint(O::ENDPOINT_ID))?;

    let path = endpoint.render_path(|name| {
        options
            .path_param(name)
            .map(|value| utf8_percent_encode(value, PATH_SEGMENT).to_string())
    })
    .map_err(ValidationError::from)?;

    let mut url = Url::parse(&format!(
        "{}{path}",
        defaults.service_url.trim_end_matches('/')
    ))
    .map_err(ConfigError::InvalidUrl)?;

    let query = options.query();
    if !query.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (name, value) in &query {
            if !endpoint.accepts_query(name) {
                return Err(ValidationError::UndeclaredQuery {
                    operation: O::ENDPOINT_ID,
                    name: *name,
                }
                .into());
            }
            pairs.append_pair(name, value);
        }
    }

    let body = options.body()?;
    check_form_fields::<O>(endpoint, &body)?;

    let headers = assemble_headers(api, endpoint, defaults, options, &body)?;

    Ok(PreparedRequest {
        operation: O::ENDPOINT_ID,
        method: endpoint.method,
        url,
        headers,
        body,
    })
}

fn check_form_fields<O: Operation>(
    endpoint: &Endpoint,
    body: &RequestBody,
) -> Result<(), ValidationError> {
    let Some(request @ ApiRequest::FormData { .. }) = &endpoint.request else {
        return Ok(());
    };
    let parts: &[FormPart] = match body {
        RequestBody::Multipart(parts) => parts,
        _ => &[],
    };
    if let Some(missing) = request
        .required_fields()
        .find(|field| !parts.iter().any(|p| p.name == field.name))
    {
        return Err(ValidationError::MissingFormField {
            operation: O::ENDPOINT_ID,
            field: missing.name.clone(),
        });
    }
    Ok(())
}

fn assemble_headers<O: Operation>(
    api: &RestApi,
    endpoint: &Endpoint,
    defaults: RequestDefaults<'_>,
    options: &O,
    body: &RequestBody,
) -> Result<HeaderMap, ClientError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    for (name, value) in api.headers.iter().chain(&endpoint.headers) {
        insert_header(&mut headers, name, value)?;
    }
    for (name, value) in defaults.headers {
        headers.insert(name.clone(), value.clone());
    }

    if let (RequestBody::Json(_), Some(content_type)) = (
        body,
        endpoint.request.as_ref().and_then(ApiRequest::content_type),
    ) {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    }

    let call = options.call_options();
    if let Some(instance) = call.auth_instance_id.as_deref().or(defaults.auth_instance_id) {
        insert_header(&mut headers, AUTH_INSTANCE_ID_HEADER, instance)?;
    }

    for (name, value) in &call.headers {
        insert_header(&mut headers, name, value)?;
    }

    Ok(headers)
}

fn insert_header(headers: &mut HeaderMap, name: &str, value: &str) -> Result<(), ClientError> {
    let header_name =
        HeaderName::try_from(name).map_err(|e| ClientError::invalid_header(name, e))?;
    let header_value =
        HeaderValue::try_from(value).map_err(|e| ClientError::invalid_header(name, e))?;
    headers.insert(header_name, header_value);
    Ok(())
}
