//! Integration tests for the watsonx.data service handle.
//!
//! These tests use wiremock to stand in for the service and check what
//! actually goes over the wire and how responses are surfaced.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use watsonx_data::auth::{BearerTokenAuthenticator, NoAuthAuthenticator};
use watsonx_data::error::{ClientError, ResponseError, WatsonxError};
use watsonx_data::options::*;
use watsonx_data::patch::as_patch;
use watsonx_data::{CallContext, ServiceOptions, WatsonxData};
use watsonx_definitions::watsonx_data::{CreateBucketRegistrationBody, JsonPatchOperation};
use wiremock::matchers::{any, body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn service(server: &MockServer) -> WatsonxData {
    WatsonxData::new(
        ServiceOptions::with_authenticator(Arc::new(NoAuthAuthenticator)).url(server.uri()),
    )
    .unwrap()
}

/// Fails the test if the server sees any request.
async fn forbid_requests(server: &MockServer) {
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(server)
        .await;
}

#[tokio::test]
async fn create_bucket_registration_returns_bucket() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bucket_registrations"))
        .and(header("Content-Type", "application/json"))
        .and(header("Accept", "application/json"))
        .and(body_partial_json(json!({
            "bucket_type": "ibm_cos",
            "catalog_name": "sampleCatalog",
            "description": "COS bucket for customer data",
            "managed_by": "ibm",
            "table_type": "iceberg"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "bucket_registration": {
                "bucket_display_name": "sample-bucket-display-name",
                "bucket_id": "samplebucket123",
                "bucket_name": "sample-bucket",
                "bucket_type": "ibm_cos",
                "managed_by": "ibm",
                "state": "active"
            },
            "response": {"message": "Successful message", "message_code": "successCode"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let options = CreateBucketRegistrationOptions::new(CreateBucketRegistrationBody::new(
        "ibm_cos",
        "sampleCatalog",
        "COS bucket for customer data",
        "ibm",
        "iceberg",
    ));
    let response = service(&server)
        .create_bucket_registration(&options)
        .await
        .unwrap();

    assert_eq!(response.status_code, 201);
    let result = response.result.unwrap();
    let bucket = result.bucket_registration.unwrap();
    assert_eq!(bucket.bucket_name.as_deref(), Some("sample-bucket"));
    assert_eq!(
        result.response.unwrap().message_code.as_deref(),
        Some("successCode")
    );
}

#[tokio::test]
async fn update_database_without_id_sends_nothing() {
    let server = MockServer::start().await;
    forbid_requests(&server).await;

    let options = UpdateDatabaseOptions {
        body: Some(vec![JsonPatchOperation::replace("/description", "new")]),
        ..Default::default()
    };
    let err = service(&server).update_database(&options).await.unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().contains("database_id"));
}

#[tokio::test]
async fn default_options_fail_validation() {
    let server = MockServer::start().await;
    forbid_requests(&server).await;
    let service = service(&server);

    assert!(service
        .get_table(&GetTableOptions::default())
        .await
        .unwrap_err()
        .is_validation());
    assert!(service
        .create_schema(&CreateSchemaOptions::default())
        .await
        .unwrap_err()
        .is_validation());
    assert!(service
        .create_driver_database_catalog(&CreateDriverDatabaseCatalogOptions::default())
        .await
        .unwrap_err()
        .is_validation());
}

#[tokio::test]
async fn update_sends_json_patch() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/database_registrations/db-42"))
        .and(header("Content-Type", "application/json-patch+json"))
        .and(wiremock::matchers::body_json(json!([
            {"op": "add", "path": "/description", "value": "warehouse"}
        ])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "database_registration": {"database_id": "db-42", "description": "warehouse"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let patch = as_patch(&json!({"description": "warehouse"})).unwrap();
    let response = service(&server)
        .update_database(&UpdateDatabaseOptions::new("db-42", patch))
        .await
        .unwrap();
    let database = response.result.unwrap().database_registration.unwrap();
    assert_eq!(database.description.as_deref(), Some("warehouse"));
}

#[tokio::test]
async fn catalog_tree_sends_engine_id_and_escapes_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/catalogs/iceberg%20data/schemas/sales/tables/orders"))
        .and(query_param("engine_id", "presto-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "table_name": "orders",
            "columns": [{"column_name": "id", "type": "bigint"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let options = GetTableOptions::new("iceberg data", "sales", "orders", "presto-01");
    let table = service(&server)
        .get_table(&options)
        .await
        .unwrap()
        .into_result()
        .unwrap();
    assert_eq!(table.table_name.as_deref(), Some("orders"));
    assert_eq!(
        table.columns.unwrap()[0].data_type.as_deref(),
        Some("bigint")
    );
}

#[tokio::test]
async fn non_json_success_is_processing_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/presto_engines/presto-01"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "text/plain")
                .set_body_string("engine is fine"),
        )
        .mount(&server)
        .await;

    let err = service(&server)
        .get_presto_engine(&GetPrestoEngineOptions::new("presto-01"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        WatsonxError::Response(ResponseError::Processing { .. })
    ));
    assert!(err
        .to_string()
        .contains("An error occurred while processing the HTTP response"));
    assert_eq!(err.response().unwrap().text(), "engine is fine");
}

#[tokio::test]
async fn success_body_must_be_an_object() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/bucket_registrations/bucket-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([1, 2, 3])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/catalogs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!("just a string")))
        .mount(&server)
        .await;
    let service = service(&server);

    let err = service
        .get_bucket_registration(&GetBucketRegistrationOptions::new("bucket-1"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        WatsonxError::Response(ResponseError::Processing { .. })
    ));

    let err = service
        .list_catalogs(&ListCatalogsOptions::new())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        WatsonxError::Response(ResponseError::Processing { .. })
    ));
    assert_eq!(err.response().unwrap().text(), r#""just a string""#);
}

#[tokio::test]
async fn empty_success_body_has_no_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/bucket_registrations/bucket-1"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let response = service(&server)
        .get_bucket_registration(&GetBucketRegistrationOptions::new("bucket-1"))
        .await
        .unwrap();
    assert_eq!(response.status_code, 200);
    assert!(response.result.is_none());
}

#[tokio::test]
async fn delete_returns_status_only() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/presto_engines/presto-01/catalogs"))
        .and(query_param("catalog_names", "iceberg_data,hive_data"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let response = service(&server)
        .delete_presto_engine_catalogs(&DeletePrestoEngineCatalogsOptions::new(
            "presto-01",
            "iceberg_data,hive_data",
        ))
        .await
        .unwrap();
    assert_eq!(response.status_code, 204);
}

#[tokio::test]
async fn service_errors_carry_status_and_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/spark_engines/spark-01/applications/app-1"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "errors": [{"code": "not_found", "message": "application app-1 not found"}],
            "trace": "4ffe3a2c"
        })))
        .mount(&server)
        .await;

    let err = service(&server)
        .get_spark_engine_application_status(&GetSparkEngineApplicationStatusOptions::new(
            "spark-01", "app-1",
        ))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), Some(404));
    assert_eq!(err.to_string(), "HTTP 404: application app-1 not found");
}

#[tokio::test]
async fn empty_service_url_fails_at_dispatch() {
    let mut service = WatsonxData::new(ServiceOptions::with_authenticator(Arc::new(
        NoAuthAuthenticator,
    )))
    .unwrap();
    service.set_service_url("").unwrap();

    let err = service
        .list_catalogs(&ListCatalogsOptions::new())
        .await
        .unwrap_err();
    assert!(matches!(err, WatsonxError::Client(ClientError::ServiceUrlMissing)));
    assert!(err.to_string().contains("service URL is missing"));
}

#[tokio::test]
async fn clone_keeps_its_own_url() {
    let first = MockServer::start().await;
    let second = MockServer::start().await;
    for server in [&first, &second] {
        Mock::given(method("GET"))
            .and(path("/ready"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(server)
            .await;
    }

    let original = service(&first);
    let mut clone = original.clone();
    clone.set_service_url(second.uri()).unwrap();

    original.get_ready(&GetReadyOptions::new()).await.unwrap();
    clone.get_ready(&GetReadyOptions::new()).await.unwrap();
    assert_eq!(original.service_url(), first.uri());
}

#[tokio::test]
async fn headers_reach_the_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/catalogs"))
        .and(header("AuthInstanceId", "crn:v1:instance"))
        .and(header("X-Request-Origin", "nightly"))
        .and(header("X-Team", "lakehouse"))
        .and(header("Authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"catalogs": []})))
        .expect(1)
        .mount(&server)
        .await;

    let auth = Arc::new(BearerTokenAuthenticator::new("secret-token").unwrap());
    let mut service =
        WatsonxData::new(ServiceOptions::with_authenticator(auth).url(server.uri())).unwrap();
    let mut defaults = reqwest::header::HeaderMap::new();
    defaults.insert("X-Team", "lakehouse".parse().unwrap());
    service.set_default_headers(defaults);

    let options = ListCatalogsOptions::new()
        .with_auth_instance_id("crn:v1:instance")
        .with_header("X-Request-Origin", "nightly");
    let catalogs = service.list_catalogs(&options).await.unwrap();
    assert_eq!(catalogs.result.unwrap().catalogs, Some(vec![]));
}

#[tokio::test]
async fn handle_instance_id_is_the_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ready"))
        .and(header("AuthInstanceId", "crn:v1:default"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mut service = service(&server);
    service.set_auth_instance_id("crn:v1:default");
    service.get_ready(&GetReadyOptions::new()).await.unwrap();
}

#[tokio::test]
async fn driver_upload_is_multipart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/database_driver_registrations"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "database_registration": {"database_id": "db-7", "database_type": "db2"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let options = CreateDriverDatabaseCatalogOptions::new(
        b"JAR-CONTENT-0123".to_vec(),
        "db2jcc4.jar",
        "sales-db",
        "db2",
        "sales_catalog",
        "db2.example.com",
        "50000",
        "admin",
        "s3cret",
        "SALES",
    );
    let response = service(&server)
        .create_driver_database_catalog(&options)
        .await
        .unwrap();
    assert_eq!(
        response.result.unwrap().database_registration.unwrap().database_id.as_deref(),
        Some("db-7")
    );

    let requests = server.received_requests().await.unwrap();
    let request = &requests[0];
    let content_type = request.headers.get("content-type").unwrap().to_str().unwrap();
    assert!(content_type.starts_with("multipart/form-data"));
    assert!(request.headers.get("content-encoding").is_none());

    let body = String::from_utf8_lossy(&request.body);
    assert!(body.contains("JAR-CONTENT-0123"));
    assert!(body.contains(r#"filename="db2jcc4.jar""#));
    assert!(body.contains(r#"name="database_name""#));
}

#[tokio::test]
async fn deadline_applies_without_retries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ready"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let err = service(&server)
        .get_ready_with_context(
            &GetReadyOptions::new(),
            CallContext::with_timeout(Duration::from_millis(100)),
        )
        .await
        .unwrap_err();
    assert!(err.is_deadline_exceeded());
    assert!(err.to_string().contains("deadline exceeded"));
}

#[tokio::test]
async fn deadline_applies_with_retries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ready"))
        .respond_with(ResponseTemplate::new(500).set_delay(Duration::from_millis(50)))
        .mount(&server)
        .await;

    let mut service = service(&server);
    service.enable_retries(5, Duration::from_secs(1));
    let err = service
        .get_ready_with_context(
            &GetReadyOptions::new(),
            CallContext::with_timeout(Duration::from_millis(300)),
        )
        .await
        .unwrap_err();
    assert!(err.is_deadline_exceeded());
}

#[tokio::test]
async fn retries_recover_from_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/presto_engines"))
        .respond_with(ResponseTemplate::new(503).insert_header("Retry-After", "0"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/presto_engines"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "presto_engines": [{"engine_id": "presto-01", "type": "presto"}]
        })))
        .mount(&server)
        .await;

    let mut service = service(&server);
    service.enable_retries(2, Duration::from_millis(20));
    let engines = service
        .list_presto_engines(&ListPrestoEnginesOptions::new())
        .await
        .unwrap()
        .into_result()
        .unwrap()
        .presto_engines
        .unwrap();
    assert_eq!(engines[0].engine_type.as_deref(), Some("presto"));
}

/// Nothing listens on port 1, so every connection attempt is refused.
const CLOSED_PORT_URL: &str = "http://127.0.0.1:1";

fn unreachable_service() -> WatsonxData {
    WatsonxData::new(
        ServiceOptions::with_authenticator(Arc::new(NoAuthAuthenticator)).url(CLOSED_PORT_URL),
    )
    .unwrap()
}

#[tokio::test]
async fn connection_failure_is_a_transport_error() {
    let err = unreachable_service()
        .get_ready(&GetReadyOptions::new())
        .await
        .unwrap_err();

    match &err {
        WatsonxError::Client(ClientError::Request(e)) => assert!(e.is_connect()),
        other => panic!("expected a transport error, got {other:?}"),
    }
    assert!(err.response().is_none());
    assert_eq!(err.status_code(), None);
}

#[tokio::test]
async fn connection_failure_survives_retries() {
    let mut service = unreachable_service();
    service.enable_retries(2, Duration::from_millis(10));

    let err = service
        .get_ready(&GetReadyOptions::new())
        .await
        .unwrap_err();
    assert!(matches!(err, WatsonxError::Client(ClientError::Request(_))));
    assert!(err.response().is_none());
}

#[test]
fn unknown_region_is_an_error() {
    let err = WatsonxData::get_service_url_for_region("INVALID_REGION").unwrap_err();
    assert!(err.to_string().contains("region not found"));
}
