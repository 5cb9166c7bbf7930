//! IBM watsonx.data REST API definitions.
//!
//! watsonx.data is the lakehouse service on IBM Cloud. Its REST API manages the
//! storage a lakehouse reads from (object-storage buckets and external
//! databases), the query engines that run against it (Presto, Spark, and
//! externally managed Db2, Netezza and other engines) and the catalog tree
//! those engines see (catalogs, schemas, tables, columns and snapshots).
//!
//! The API is served per region at
//! `https://{region}.lakehouse.cloud.ibm.com/lakehouse/api/v2` and expects an
//! IAM bearer token plus an `AuthInstanceId` header naming the watsonx.data
//! instance.
//!
//! ```bash
//! curl -H "Authorization: Bearer $TOKEN" \
//!   -H "AuthInstanceId: $INSTANCE_CRN" \
//!   https://us-south.lakehouse.cloud.ibm.com/lakehouse/api/v2/bucket_registrations
//! ```
//!
//! ## Endpoint Categories
//!
//! | Category | Key Endpoints |
//! |----------|--------------|
//! | **Buckets** | `/bucket_registrations`, `/bucket_registrations/{bucket_id}` |
//! | **Databases** | `/database_registrations`, `/database_driver_registrations` |
//! | **Db2 / Netezza / Other** | `/db2_engines`, `/netezza_engines`, `/other_engines` |
//! | **Presto** | `/presto_engines`, `/presto_engines/{engine_id}/catalogs` |
//! | **Spark** | `/spark_engines`, `/spark_engines/{engine_id}/applications` |
//! | **Catalogs** | `/catalogs`, `/catalogs/{catalog_id}/schemas/.../columns` |
//! | **Health** | `/ready` |
//!
//! ## Resources
//!
//! - [Product Docs](https://cloud.ibm.com/docs/watsonxdata)
//! - [API Reference](https://cloud.ibm.com/apidocs/watsonxdata)

mod types;

pub use types::*;

use watsonx_define::{
    ApiRequest, ApiResponse, AuthStrategy, Endpoint, FormField, RestApi, RestMethod,
};

/// Service name used to look up external configuration (`WATSONX_DATA_*`).
pub const DEFAULT_SERVICE_NAME: &str = "watsonx_data";

/// Base URL used when none is configured (the `us-south` region).
pub const DEFAULT_SERVICE_URL: &str = "https://us-south.lakehouse.cloud.ibm.com/lakehouse/api/v2";

const REGIONS: &[(&str, &str)] = &[
    ("us-south", "https://us-south.lakehouse.cloud.ibm.com/lakehouse/api/v2"),
    ("eu-de", "https://eu-de.lakehouse.cloud.ibm.com/lakehouse/api/v2"),
    ("eu-gb", "https://eu-gb.lakehouse.cloud.ibm.com/lakehouse/api/v2"),
    ("jp-tok", "https://jp-tok.lakehouse.cloud.ibm.com/lakehouse/api/v2"),
    ("us-east", "https://us-east.lakehouse.cloud.ibm.com/lakehouse/api/v2"),
    ("au-syd", "https://au-syd.lakehouse.cloud.ibm.com/lakehouse/api/v2"),
    ("ca-tor", "https://ca-tor.lakehouse.cloud.ibm.com/lakehouse/api/v2"),
];

const TABLE_PATH: &str = "/catalogs/{catalog_id}/schemas/{schema_id}/tables/{table_id}";

fn endpoint(
    id: &str,
    method: RestMethod,
    path: impl Into<String>,
    description: &str,
    request: Option<ApiRequest>,
    response: ApiResponse,
) -> Endpoint {
    Endpoint {
        id: id.to_string(),
        method,
        path: path.into(),
        description: description.to_string(),
        query: vec![],
        request,
        response,
        headers: vec![],
    }
}

fn with_query(mut endpoint: Endpoint, names: &[&str]) -> Endpoint {
    endpoint.query = names.iter().map(|n| n.to_string()).collect();
    endpoint
}

/// Multipart fields of `CreateDriverDatabaseCatalog`.
fn driver_registration_fields() -> Vec<FormField> {
    vec![
        FormField::file("driver").with_description("JDBC driver archive"),
        FormField::text("driver_file_name"),
        FormField::text("database_display_name"),
        FormField::text("database_type"),
        FormField::text("catalog_name"),
        FormField::text("hostname"),
        FormField::text("port"),
        FormField::text("username"),
        FormField::text("password"),
        FormField::text("database_name"),
        FormField::file("certificate").optional(),
        FormField::text("certificate_extension").optional(),
        FormField::text("ssl").optional(),
        FormField::text("description").optional(),
        FormField::text("created_on").optional(),
    ]
}

/// Creates the watsonx.data REST API definition.
///
/// ## Endpoints
///
/// | ID | Method | Path |
/// |----|--------|------|
/// | ListBucketRegistrations | GET | /bucket_registrations |
/// | CreateBucketRegistration | POST | /bucket_registrations |
/// | GetBucketRegistration | GET | /bucket_registrations/{bucket_id} |
/// | DeleteBucketRegistration | DELETE | /bucket_registrations/{bucket_id} |
/// | UpdateBucketRegistration | PATCH | /bucket_registrations/{bucket_id} |
/// | CreateActivateBucket | POST | /bucket_registrations/{bucket_id}/activate |
/// | DeleteDeactivateBucket | DELETE | /bucket_registrations/{bucket_id}/deactivate |
/// | ListBucketObjects | GET | /bucket_registrations/{bucket_id}/objects |
/// | ListDatabaseRegistrations | GET | /database_registrations |
/// | CreateDatabaseRegistration | POST | /database_registrations |
/// | GetDatabase | GET | /database_registrations/{database_id} |
/// | DeleteDatabaseCatalog | DELETE | /database_registrations/{database_id} |
/// | UpdateDatabase | PATCH | /database_registrations/{database_id} |
/// | CreateDriverDatabaseCatalog | POST | /database_driver_registrations |
/// | ListDb2Engines | GET | /db2_engines |
/// | CreateDb2Engine | POST | /db2_engines |
/// | DeleteDb2Engine | DELETE | /db2_engines/{engine_id} |
/// | UpdateDb2Engine | PATCH | /db2_engines/{engine_id} |
/// | ListNetezzaEngines | GET | /netezza_engines |
/// | CreateNetezzaEngine | POST | /netezza_engines |
/// | DeleteNetezzaEngine | DELETE | /netezza_engines/{engine_id} |
/// | UpdateNetezzaEngine | PATCH | /netezza_engines/{engine_id} |
/// | ListOtherEngines | GET | /other_engines |
/// | CreateOtherEngine | POST | /other_engines |
/// | DeleteOtherEngine | DELETE | /other_engines/{engine_id} |
/// | ListPrestoEngines | GET | /presto_engines |
/// | CreatePrestoEngine | POST | /presto_engines |
/// | GetPrestoEngine | GET | /presto_engines/{engine_id} |
/// | DeletePrestoEngine | DELETE | /presto_engines/{engine_id} |
/// | UpdatePrestoEngine | PATCH | /presto_engines/{engine_id} |
/// | ListPrestoEngineCatalogs | GET | /presto_engines/{engine_id}/catalogs |
/// | ReplacePrestoEngineCatalogs | PUT | /presto_engines/{engine_id}/catalogs |
/// | DeletePrestoEngineCatalogs | DELETE | /presto_engines/{engine_id}/catalogs |
/// | GetPrestoEngineCatalog | GET | /presto_engines/{engine_id}/catalogs/{catalog_id} |
/// | CreateEnginePause | POST | /presto_engines/{engine_id}/pause |
/// | CreateEngineResume | POST | /presto_engines/{engine_id}/resume |
/// | CreateEngineRestart | POST | /presto_engines/{engine_id}/restart |
/// | CreateEngineScale | POST | /presto_engines/{engine_id}/scale |
/// | RunExplainStatement | POST | /presto_engines/{engine_id}/query_explain |
/// | RunExplainAnalyzeStatement | POST | /presto_engines/{engine_id}/explain_analyze |
/// | ListSparkEngines | GET | /spark_engines |
/// | CreateSparkEngine | POST | /spark_engines |
/// | DeleteSparkEngine | DELETE | /spark_engines/{engine_id} |
/// | UpdateSparkEngine | PATCH | /spark_engines/{engine_id} |
/// | ListSparkEngineApplications | GET | /spark_engines/{engine_id}/applications |
/// | CreateSparkEngineApplication | POST | /spark_engines/{engine_id}/applications |
/// | DeleteSparkEngineApplications | DELETE | /spark_engines/{engine_id}/applications |
/// | GetSparkEngineApplicationStatus | GET | /spark_engines/{engine_id}/applications/{application_id} |
/// | ListCatalogs | GET | /catalogs |
/// | GetCatalog | GET | /catalogs/{catalog_id} |
/// | UpdateSyncCatalog | PATCH | /catalogs/{catalog_id}/sync_jobs |
/// | ListSchemas | GET | /catalogs/{catalog_id}/schemas |
/// | CreateSchema | POST | /catalogs/{catalog_id}/schemas |
/// | DeleteSchema | DELETE | /catalogs/{catalog_id}/schemas/{schema_id} |
/// | ListTables | GET | /catalogs/{catalog_id}/schemas/{schema_id}/tables |
/// | GetTable | GET | .../tables/{table_id} |
/// | DeleteTable | DELETE | .../tables/{table_id} |
/// | UpdateTable | PATCH | .../tables/{table_id} |
/// | ListTableSnapshots | GET | .../tables/{table_id}/snapshots |
/// | ReplaceSnapshot | PUT | .../tables/{table_id}/snapshots/{snapshot_id} |
/// | ListColumns | GET | .../tables/{table_id}/columns |
/// | CreateColumns | POST | .../tables/{table_id}/columns |
/// | DeleteColumn | DELETE | .../tables/{table_id}/columns/{column_id} |
/// | UpdateColumn | PATCH | .../tables/{table_id}/columns/{column_id} |
/// | GetReady | GET | /ready |
///
/// Every endpoint under `/catalogs/{catalog_id}/schemas` takes a required
/// `engine_id` query parameter.
///
/// ## Examples
///
/// ```rust
/// use watsonx_definitions::watsonx_data::define_watsonx_data_api;
///
/// let api = define_watsonx_data_api();
/// assert_eq!(api.service_name, "watsonx_data");
/// assert!(api.endpoints.len() >= 60);
/// assert!(api.region_url("eu-de").unwrap().starts_with("https://eu-de."));
/// ```
pub fn define_watsonx_data_api() -> RestApi {
    use RestMethod::{Delete, Get, Patch, Post, Put};

    let patch = || Some(ApiRequest::json_patch());
    let json = |type_name: &str| Some(ApiRequest::json_type(type_name));
    let env = |type_name: &str, payload: &str| ApiResponse::enveloped(type_name, payload);
    let success = || ApiResponse::json_type("SuccessResponseBody");

    let mut endpoints = vec![
        // Buckets
        endpoint(
            "ListBucketRegistrations",
            Get,
            "/bucket_registrations",
            "List all registered buckets",
            None,
            env("BucketRegistrationCollection", "bucket_registrations"),
        ),
        endpoint(
            "CreateBucketRegistration",
            Post,
            "/bucket_registrations",
            "Register a new bucket",
            json("CreateBucketRegistrationBody"),
            env("BucketRegistrationResult", "bucket_registration"),
        ),
        endpoint(
            "GetBucketRegistration",
            Get,
            "/bucket_registrations/{bucket_id}",
            "Get a registered bucket",
            None,
            env("BucketRegistrationResult", "bucket_registration"),
        ),
        endpoint(
            "DeleteBucketRegistration",
            Delete,
            "/bucket_registrations/{bucket_id}",
            "Unregister a bucket",
            None,
            ApiResponse::Empty,
        ),
        endpoint(
            "UpdateBucketRegistration",
            Patch,
            "/bucket_registrations/{bucket_id}",
            "Update a bucket registration",
            patch(),
            env("BucketRegistrationResult", "bucket_registration"),
        ),
        endpoint(
            "CreateActivateBucket",
            Post,
            "/bucket_registrations/{bucket_id}/activate",
            "Activate a bucket",
            None,
            success(),
        ),
        endpoint(
            "DeleteDeactivateBucket",
            Delete,
            "/bucket_registrations/{bucket_id}/deactivate",
            "Deactivate a bucket",
            None,
            ApiResponse::Empty,
        ),
        endpoint(
            "ListBucketObjects",
            Get,
            "/bucket_registrations/{bucket_id}/objects",
            "List objects in a bucket",
            None,
            env("BucketObjectCollection", "objects"),
        ),
        // Databases
        endpoint(
            "ListDatabaseRegistrations",
            Get,
            "/database_registrations",
            "List all registered databases",
            None,
            env("DatabaseRegistrationCollection", "database_registrations"),
        ),
        endpoint(
            "CreateDatabaseRegistration",
            Post,
            "/database_registrations",
            "Register a new database",
            json("CreateDatabaseRegistrationBody"),
            env("DatabaseRegistrationResult", "database_registration"),
        ),
        endpoint(
            "GetDatabase",
            Get,
            "/database_registrations/{database_id}",
            "Get a registered database",
            None,
            env("DatabaseRegistrationResult", "database_registration"),
        ),
        endpoint(
            "DeleteDatabaseCatalog",
            Delete,
            "/database_registrations/{database_id}",
            "Unregister a database and drop its catalog",
            None,
            ApiResponse::Empty,
        ),
        endpoint(
            "UpdateDatabase",
            Patch,
            "/database_registrations/{database_id}",
            "Update a database registration",
            patch(),
            env("DatabaseRegistrationResult", "database_registration"),
        ),
        endpoint(
            "CreateDriverDatabaseCatalog",
            Post,
            "/database_driver_registrations",
            "Register a database with an uploaded JDBC driver",
            Some(ApiRequest::form_data(driver_registration_fields())),
            env("DatabaseRegistrationResult", "database_registration"),
        ),
    ];

    // Db2, Netezza and other external engines share one shape.
    for (prefix, path, collection, result, list_key, body) in [
        (
            "Db2Engine",
            "/db2_engines",
            "Db2EngineCollection",
            "Db2EngineResult",
            "db2_engines",
            "CreateExternalEngineBody",
        ),
        (
            "NetezzaEngine",
            "/netezza_engines",
            "NetezzaEngineCollection",
            "NetezzaEngineResult",
            "netezza_engines",
            "CreateExternalEngineBody",
        ),
        (
            "OtherEngine",
            "/other_engines",
            "OtherEngineCollection",
            "OtherEngineResult",
            "engines",
            "CreateOtherEngineBody",
        ),
    ] {
        let item = format!("{path}/{{engine_id}}");
        endpoints.push(endpoint(
            &format!("List{prefix}s"),
            Get,
            path,
            "List registered engines",
            None,
            env(collection, list_key),
        ));
        endpoints.push(endpoint(
            &format!("Create{prefix}"),
            Post,
            path,
            "Register an engine",
            json(body),
            env(result, "engine"),
        ));
        endpoints.push(endpoint(
            &format!("Delete{prefix}"),
            Delete,
            item.clone(),
            "Unregister an engine",
            None,
            ApiResponse::Empty,
        ));
        // Other engines cannot be patched.
        if prefix != "OtherEngine" {
            endpoints.push(endpoint(
                &format!("Update{prefix}"),
                Patch,
                item,
                "Update an engine",
                patch(),
                env(result, "engine"),
            ));
        }
    }

    endpoints.extend([
        // Presto
        endpoint(
            "ListPrestoEngines",
            Get,
            "/presto_engines",
            "List Presto engines",
            None,
            env("PrestoEngineCollection", "presto_engines"),
        ),
        endpoint(
            "CreatePrestoEngine",
            Post,
            "/presto_engines",
            "Create a Presto engine",
            json("CreatePrestoEngineBody"),
            env("PrestoEngineResult", "engine"),
        ),
        endpoint(
            "GetPrestoEngine",
            Get,
            "/presto_engines/{engine_id}",
            "Get a Presto engine",
            None,
            env("PrestoEngineResult", "engine"),
        ),
        endpoint(
            "DeletePrestoEngine",
            Delete,
            "/presto_engines/{engine_id}",
            "Delete a Presto engine",
            None,
            ApiResponse::Empty,
        ),
        endpoint(
            "UpdatePrestoEngine",
            Patch,
            "/presto_engines/{engine_id}",
            "Update a Presto engine",
            patch(),
            env("PrestoEngineResult", "engine"),
        ),
        endpoint(
            "ListPrestoEngineCatalogs",
            Get,
            "/presto_engines/{engine_id}/catalogs",
            "List catalogs attached to a Presto engine",
            None,
            env("CatalogCollection", "catalogs"),
        ),
        with_query(
            endpoint(
                "ReplacePrestoEngineCatalogs",
                Put,
                "/presto_engines/{engine_id}/catalogs",
                "Replace the catalogs attached to a Presto engine",
                None,
                env("CatalogCollection", "catalogs"),
            ),
            &["catalog_names"],
        ),
        with_query(
            endpoint(
                "DeletePrestoEngineCatalogs",
                Delete,
                "/presto_engines/{engine_id}/catalogs",
                "Detach catalogs from a Presto engine",
                None,
                ApiResponse::Empty,
            ),
            &["catalog_names"],
        ),
        endpoint(
            "GetPrestoEngineCatalog",
            Get,
            "/presto_engines/{engine_id}/catalogs/{catalog_id}",
            "Get a catalog attached to a Presto engine",
            None,
            env("CatalogResult", "catalog"),
        ),
        endpoint(
            "CreateEnginePause",
            Post,
            "/presto_engines/{engine_id}/pause",
            "Pause a Presto engine",
            None,
            success(),
        ),
        endpoint(
            "CreateEngineResume",
            Post,
            "/presto_engines/{engine_id}/resume",
            "Resume a paused Presto engine",
            None,
            success(),
        ),
        endpoint(
            "CreateEngineRestart",
            Post,
            "/presto_engines/{engine_id}/restart",
            "Restart a Presto engine",
            None,
            success(),
        ),
        endpoint(
            "CreateEngineScale",
            Post,
            "/presto_engines/{engine_id}/scale",
            "Scale a Presto engine",
            json("ScaleEngineBody"),
            success(),
        ),
        endpoint(
            "RunExplainStatement",
            Post,
            "/presto_engines/{engine_id}/query_explain",
            "Explain a query",
            json("ExplainStatementBody"),
            env("ExplainResult", "result"),
        ),
        endpoint(
            "RunExplainAnalyzeStatement",
            Post,
            "/presto_engines/{engine_id}/explain_analyze",
            "Explain and analyze a query",
            json("ExplainAnalyzeStatementBody"),
            env("ExplainResult", "result"),
        ),
        // Spark
        endpoint(
            "ListSparkEngines",
            Get,
            "/spark_engines",
            "List Spark engines",
            None,
            env("SparkEngineCollection", "spark_engines"),
        ),
        endpoint(
            "CreateSparkEngine",
            Post,
            "/spark_engines",
            "Create a Spark engine",
            json("CreateSparkEngineBody"),
            env("SparkEngineResult", "engine"),
        ),
        endpoint(
            "DeleteSparkEngine",
            Delete,
            "/spark_engines/{engine_id}",
            "Delete a Spark engine",
            None,
            ApiResponse::Empty,
        ),
        endpoint(
            "UpdateSparkEngine",
            Patch,
            "/spark_engines/{engine_id}",
            "Update a Spark engine",
            patch(),
            env("SparkEngineResult", "engine"),
        ),
        with_query(
            endpoint(
                "ListSparkEngineApplications",
                Get,
                "/spark_engines/{engine_id}/applications",
                "List applications submitted to a Spark engine",
                None,
                env("SparkEngineApplicationCollection", "applications"),
            ),
            &["state"],
        ),
        endpoint(
            "CreateSparkEngineApplication",
            Post,
            "/spark_engines/{engine_id}/applications",
            "Submit a Spark application",
            json("CreateSparkEngineApplicationBody"),
            ApiResponse::json_type("SparkEngineApplicationStatus"),
        ),
        with_query(
            endpoint(
                "DeleteSparkEngineApplications",
                Delete,
                "/spark_engines/{engine_id}/applications",
                "Stop a Spark application",
                None,
                ApiResponse::Empty,
            ),
            &["application_id"],
        ),
        endpoint(
            "GetSparkEngineApplicationStatus",
            Get,
            "/spark_engines/{engine_id}/applications/{application_id}",
            "Get the status of a Spark application",
            None,
            ApiResponse::json_type("SparkEngineApplicationStatus"),
        ),
        // Catalogs
        endpoint(
            "ListCatalogs",
            Get,
            "/catalogs",
            "List catalogs",
            None,
            env("CatalogCollection", "catalogs"),
        ),
        endpoint(
            "GetCatalog",
            Get,
            "/catalogs/{catalog_id}",
            "Get a catalog",
            None,
            env("CatalogResult", "catalog"),
        ),
        endpoint(
            "UpdateSyncCatalog",
            Patch,
            "/catalogs/{catalog_id}/sync_jobs",
            "Start a metadata sync for a catalog",
            patch(),
            success(),
        ),
    ]);

    // The catalog tree is addressed through an engine.
    let tree = [
        endpoint(
            "ListSchemas",
            Get,
            "/catalogs/{catalog_id}/schemas",
            "List schemas in a catalog",
            None,
            env("SchemaCollection", "schemas"),
        ),
        endpoint(
            "CreateSchema",
            Post,
            "/catalogs/{catalog_id}/schemas",
            "Create a schema",
            json("CreateSchemaBody"),
            success(),
        ),
        endpoint(
            "DeleteSchema",
            Delete,
            "/catalogs/{catalog_id}/schemas/{schema_id}",
            "Delete a schema",
            None,
            ApiResponse::Empty,
        ),
        endpoint(
            "ListTables",
            Get,
            "/catalogs/{catalog_id}/schemas/{schema_id}/tables",
            "List tables in a schema",
            None,
            env("TableCollection", "tables"),
        ),
        endpoint(
            "GetTable",
            Get,
            TABLE_PATH,
            "Get a table and its columns",
            None,
            ApiResponse::json_type("Table"),
        ),
        endpoint(
            "DeleteTable",
            Delete,
            TABLE_PATH,
            "Delete a table",
            None,
            ApiResponse::Empty,
        ),
        endpoint(
            "UpdateTable",
            Patch,
            TABLE_PATH,
            "Rename or alter a table",
            patch(),
            ApiResponse::json_type("Table"),
        ),
        endpoint(
            "ListTableSnapshots",
            Get,
            format!("{TABLE_PATH}/snapshots"),
            "List the snapshots of a table",
            None,
            env("SnapshotCollection", "snapshots"),
        ),
        endpoint(
            "ReplaceSnapshot",
            Put,
            format!("{TABLE_PATH}/snapshots/{{snapshot_id}}"),
            "Roll a table back to a snapshot",
            None,
            success(),
        ),
        endpoint(
            "ListColumns",
            Get,
            format!("{TABLE_PATH}/columns"),
            "List the columns of a table",
            None,
            env("ColumnCollection", "columns"),
        ),
        endpoint(
            "CreateColumns",
            Post,
            format!("{TABLE_PATH}/columns"),
            "Add columns to a table",
            json("CreateColumnsBody"),
            env("ColumnCollection", "columns"),
        ),
        endpoint(
            "DeleteColumn",
            Delete,
            format!("{TABLE_PATH}/columns/{{column_id}}"),
            "Drop a column",
            None,
            ApiResponse::Empty,
        ),
        endpoint(
            "UpdateColumn",
            Patch,
            format!("{TABLE_PATH}/columns/{{column_id}}"),
            "Rename a column",
            patch(),
            ApiResponse::json_type("Column"),
        ),
    ];
    endpoints.extend(tree.into_iter().map(|ep| with_query(ep, &["engine_id"])));

    endpoints.push(endpoint(
        "GetReady",
        Get,
        "/ready",
        "Service readiness probe",
        None,
        ApiResponse::Empty,
    ));

    RestApi {
        name: "WatsonxData".to_string(),
        description: "IBM watsonx.data lakehouse management API".to_string(),
        service_name: DEFAULT_SERVICE_NAME.to_string(),
        base_url: DEFAULT_SERVICE_URL.to_string(),
        docs_url: Some("https://cloud.ibm.com/apidocs/watsonxdata".to_string()),
        auth: AuthStrategy::Iam,
        regions: REGIONS
            .iter()
            .map(|(code, url)| (code.to_string(), url.to_string()))
            .collect(),
        headers: vec![("Accept".to_string(), "application/json".to_string())],
        endpoints,
    }
}
