//! One named method per watsonx.data operation.
//!
//! Each operation `name` comes as a pair: `name(&options)` and
//! `name_with_context(&options, ctx)`, the latter bounded by a
//! [`CallContext`] deadline. Both go through [`WatsonxData::call_with_context`].

use crate::context::CallContext;
use crate::error::WatsonxResult;
use crate::operation::Operation;
use crate::options::*;
use crate::response::DetailedResponse;
use crate::service::WatsonxData;

macro_rules! operations {
    ($(
        $(#[$meta:meta])*
        $method:ident / $with_context:ident => $options:ty;
    )*) => {
        impl WatsonxData {
            $(
                $(#[$meta])*
                pub async fn $method(
                    &self,
                    options: &$options,
                ) -> WatsonxResult<DetailedResponse<<$options as Operation>::Output>> {
                    self.call_with_context(options, CallContext::new()).await
                }

                #[doc = concat!("[`", stringify!($method), "`](Self::", stringify!($method), ") bounded by `ctx`.")]
                pub async fn $with_context(
                    &self,
                    options: &$options,
                    ctx: CallContext,
                ) -> WatsonxResult<DetailedResponse<<$options as Operation>::Output>> {
                    self.call_with_context(options, ctx).await
                }
            )*
        }

        #[cfg(test)]
        fn for_each_operation(mut visit: impl FnMut(&'static str, descriptor_checks::Check)) {
            $(visit(stringify!($method), descriptor_checks::check::<$options>);)*
        }
    };
}

operations! {
    /// Lists registered buckets.
    list_bucket_registrations / list_bucket_registrations_with_context => ListBucketRegistrationsOptions;
    /// Registers a bucket.
    create_bucket_registration / create_bucket_registration_with_context => CreateBucketRegistrationOptions;
    /// Gets a registered bucket.
    get_bucket_registration / get_bucket_registration_with_context => GetBucketRegistrationOptions;
    /// Unregisters a bucket.
    delete_bucket_registration / delete_bucket_registration_with_context => DeleteBucketRegistrationOptions;
    /// Updates a bucket registration with a JSON patch.
    update_bucket_registration / update_bucket_registration_with_context => UpdateBucketRegistrationOptions;
    /// Activates a bucket.
    create_activate_bucket / create_activate_bucket_with_context => CreateActivateBucketOptions;
    /// Deactivates a bucket.
    delete_deactivate_bucket / delete_deactivate_bucket_with_context => DeleteDeactivateBucketOptions;
    /// Lists the objects in a bucket.
    list_bucket_objects / list_bucket_objects_with_context => ListBucketObjectsOptions;

    /// Lists registered databases.
    list_database_registrations / list_database_registrations_with_context => ListDatabaseRegistrationsOptions;
    /// Registers a database.
    create_database_registration / create_database_registration_with_context => CreateDatabaseRegistrationOptions;
    /// Gets a registered database.
    get_database / get_database_with_context => GetDatabaseOptions;
    /// Unregisters a database and drops its catalog.
    delete_database_catalog / delete_database_catalog_with_context => DeleteDatabaseCatalogOptions;
    /// Updates a database registration with a JSON patch.
    update_database / update_database_with_context => UpdateDatabaseOptions;
    /// Registers a database with an uploaded JDBC driver.
    create_driver_database_catalog / create_driver_database_catalog_with_context => CreateDriverDatabaseCatalogOptions;

    /// Lists Db2 engines.
    list_db2_engines / list_db2_engines_with_context => ListDb2EnginesOptions;
    /// Registers a Db2 engine.
    create_db2_engine / create_db2_engine_with_context => CreateDb2EngineOptions;
    /// Unregisters a Db2 engine.
    delete_db2_engine / delete_db2_engine_with_context => DeleteDb2EngineOptions;
    /// Updates a Db2 engine with a JSON patch.
    update_db2_engine / update_db2_engine_with_context => UpdateDb2EngineOptions;
    /// Lists Netezza engines.
    list_netezza_engines / list_netezza_engines_with_context => ListNetezzaEnginesOptions;
    /// Registers a Netezza engine.
    create_netezza_engine / create_netezza_engine_with_context => CreateNetezzaEngineOptions;
    /// Unregisters a Netezza engine.
    delete_netezza_engine / delete_netezza_engine_with_context => DeleteNetezzaEngineOptions;
    /// Updates a Netezza engine with a JSON patch.
    update_netezza_engine / update_netezza_engine_with_context => UpdateNetezzaEngineOptions;
    /// Lists other external engines.
    list_other_engines / list_other_engines_with_context => ListOtherEnginesOptions;
    /// Registers another external engine.
    create_other_engine / create_other_engine_with_context => CreateOtherEngineOptions;
    /// Unregisters another external engine.
    delete_other_engine / delete_other_engine_with_context => DeleteOtherEngineOptions;

    /// Lists Presto engines.
    list_presto_engines / list_presto_engines_with_context => ListPrestoEnginesOptions;
    /// Creates a Presto engine.
    create_presto_engine / create_presto_engine_with_context => CreatePrestoEngineOptions;
    /// Gets a Presto engine.
    get_presto_engine / get_presto_engine_with_context => GetPrestoEngineOptions;
    /// Deletes a Presto engine.
    delete_presto_engine / delete_presto_engine_with_context => DeletePrestoEngineOptions;
    /// Updates a Presto engine with a JSON patch.
    update_presto_engine / update_presto_engine_with_context => UpdatePrestoEngineOptions;
    /// Lists the catalogs attached to a Presto engine.
    list_presto_engine_catalogs / list_presto_engine_catalogs_with_context => ListPrestoEngineCatalogsOptions;
    /// Replaces the catalogs attached to a Presto engine.
    replace_presto_engine_catalogs / replace_presto_engine_catalogs_with_context => ReplacePrestoEngineCatalogsOptions;
    /// Detaches catalogs from a Presto engine.
    delete_presto_engine_catalogs / delete_presto_engine_catalogs_with_context => DeletePrestoEngineCatalogsOptions;
    /// Gets one catalog attached to a Presto engine.
    get_presto_engine_catalog / get_presto_engine_catalog_with_context => GetPrestoEngineCatalogOptions;
    /// Pauses a Presto engine.
    create_engine_pause / create_engine_pause_with_context => CreateEnginePauseOptions;
    /// Resumes a paused Presto engine.
    create_engine_resume / create_engine_resume_with_context => CreateEngineResumeOptions;
    /// Restarts a Presto engine.
    create_engine_restart / create_engine_restart_with_context => CreateEngineRestartOptions;
    /// Scales a Presto engine.
    create_engine_scale / create_engine_scale_with_context => CreateEngineScaleOptions;
    /// Explains a statement.
    run_explain_statement / run_explain_statement_with_context => RunExplainStatementOptions;
    /// Explains and analyzes a statement.
    run_explain_analyze_statement / run_explain_analyze_statement_with_context => RunExplainAnalyzeStatementOptions;

    /// Lists Spark engines.
    list_spark_engines / list_spark_engines_with_context => ListSparkEnginesOptions;
    /// Creates a Spark engine.
    create_spark_engine / create_spark_engine_with_context => CreateSparkEngineOptions;
    /// Deletes a Spark engine.
    delete_spark_engine / delete_spark_engine_with_context => DeleteSparkEngineOptions;
    /// Updates a Spark engine with a JSON patch.
    update_spark_engine / update_spark_engine_with_context => UpdateSparkEngineOptions;
    /// Lists the applications submitted to a Spark engine.
    list_spark_engine_applications / list_spark_engine_applications_with_context => ListSparkEngineApplicationsOptions;
    /// Submits a Spark application.
    create_spark_engine_application / create_spark_engine_application_with_context => CreateSparkEngineApplicationOptions;
    /// Stops a Spark application.
    delete_spark_engine_applications / delete_spark_engine_applications_with_context => DeleteSparkEngineApplicationsOptions;
    /// Gets the status of a Spark application.
    get_spark_engine_application_status / get_spark_engine_application_status_with_context => GetSparkEngineApplicationStatusOptions;

    /// Lists catalogs.
    list_catalogs / list_catalogs_with_context => ListCatalogsOptions;
    /// Gets a catalog.
    get_catalog / get_catalog_with_context => GetCatalogOptions;
    /// Starts a metadata sync for a catalog.
    update_sync_catalog / update_sync_catalog_with_context => UpdateSyncCatalogOptions;
    /// Lists the schemas in a catalog.
    list_schemas / list_schemas_with_context => ListSchemasOptions;
    /// Creates a schema.
    create_schema / create_schema_with_context => CreateSchemaOptions;
    /// Deletes a schema.
    delete_schema / delete_schema_with_context => DeleteSchemaOptions;
    /// Lists the tables in a schema.
    list_tables / list_tables_with_context => ListTablesOptions;
    /// Gets a table and its columns.
    get_table / get_table_with_context => GetTableOptions;
    /// Deletes a table.
    delete_table / delete_table_with_context => DeleteTableOptions;
    /// Renames or alters a table with a JSON patch.
    update_table / update_table_with_context => UpdateTableOptions;
    /// Lists the snapshots of a table.
    list_table_snapshots / list_table_snapshots_with_context => ListTableSnapshotsOptions;
    /// Rolls a table back to a snapshot.
    replace_snapshot / replace_snapshot_with_context => ReplaceSnapshotOptions;
    /// Lists the columns of a table.
    list_columns / list_columns_with_context => ListColumnsOptions;
    /// Adds columns to a table.
    create_columns / create_columns_with_context => CreateColumnsOptions;
    /// Drops a column.
    delete_column / delete_column_with_context => DeleteColumnOptions;
    /// Renames a column with a JSON patch.
    update_column / update_column_with_context => UpdateColumnOptions;

    /// Checks that the service is ready.
    get_ready / get_ready_with_context => GetReadyOptions;
}

#[cfg(test)]
mod descriptor_checks {
    use std::any::type_name;

    use watsonx_define::ApiResponse;

    use super::*;

    pub type Check = fn() -> Result<&'static str, String>;

    /// Cross-checks an Options type against the endpoint it names.
    pub fn check<O: Operation + Default>() -> Result<&'static str, String> {
        let id = O::ENDPOINT_ID;
        let endpoint = WatsonxData::api()
            .endpoint(id)
            .ok_or_else(|| format!("{id}: no such endpoint"))?;
        let options = O::default();

        for name in endpoint.path_params() {
            if options.path_param(name).is_none() {
                return Err(format!("{id}: no field for path parameter `{name}`"));
            }
        }
        for (name, _) in options.query() {
            if !endpoint.accepts_query(name) {
                return Err(format!("{id}: sends undeclared query `{name}`"));
            }
        }

        let output = type_name::<O::Output>();
        let expected = match &endpoint.response {
            ApiResponse::Json(schema) | ApiResponse::Enveloped { schema, .. } => {
                schema.type_name.as_str()
            }
            ApiResponse::Empty => "()",
        };
        if !output.ends_with(expected) {
            return Err(format!("{id}: output {output} does not match {expected}"));
        }
        Ok(id)
    }
}
