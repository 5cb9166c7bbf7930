//! Catalog, schema, table, snapshot and column options.
//!
//! Everything below a catalog is addressed through the engine that serves
//! it, so those options carry a mandatory `engine_id` query parameter.

use watsonx_definitions::watsonx_data::{
    CatalogCollection, CatalogResult, Column, ColumnCollection, CreateColumnsBody,
    CreateSchemaBody, SchemaCollection, SnapshotCollection, SuccessResponseBody, Table,
    TableCollection,
};

options! {
    /// Options for `list_catalogs`.
    ListCatalogsOptions = "ListCatalogs" -> CatalogCollection {
        path: [],
        query: [],
    }
}

options! {
    /// Options for `get_catalog`.
    GetCatalogOptions = "GetCatalog" -> CatalogResult {
        path: [catalog_id],
        query: [],
    }
}

options! {
    /// Options for `update_sync_catalog`.
    UpdateSyncCatalogOptions = "UpdateSyncCatalog" -> SuccessResponseBody {
        path: [catalog_id],
        query: [],
        patch,
    }
}

options! {
    /// Options for `list_schemas`.
    ListSchemasOptions = "ListSchemas" -> SchemaCollection {
        path: [catalog_id],
        query: [engine_id],
    }
}

options! {
    /// Options for `create_schema`.
    CreateSchemaOptions = "CreateSchema" -> SuccessResponseBody {
        path: [catalog_id],
        query: [engine_id],
        json: CreateSchemaBody,
    }
}

options! {
    /// Options for `delete_schema`.
    DeleteSchemaOptions = "DeleteSchema" -> () {
        path: [catalog_id, schema_id],
        query: [engine_id],
    }
}

options! {
    /// Options for `list_tables`.
    ListTablesOptions = "ListTables" -> TableCollection {
        path: [catalog_id, schema_id],
        query: [engine_id],
    }
}

options! {
    /// Options for `get_table`.
    GetTableOptions = "GetTable" -> Table {
        path: [catalog_id, schema_id, table_id],
        query: [engine_id],
    }
}

options! {
    /// Options for `delete_table`.
    DeleteTableOptions = "DeleteTable" -> () {
        path: [catalog_id, schema_id, table_id],
        query: [engine_id],
    }
}

options! {
    /// Options for `update_table`.
    UpdateTableOptions = "UpdateTable" -> Table {
        path: [catalog_id, schema_id, table_id],
        query: [engine_id],
        patch,
    }
}

options! {
    /// Options for `list_table_snapshots`.
    ListTableSnapshotsOptions = "ListTableSnapshots" -> SnapshotCollection {
        path: [catalog_id, schema_id, table_id],
        query: [engine_id],
    }
}

options! {
    /// Options for `replace_snapshot`.
    ReplaceSnapshotOptions = "ReplaceSnapshot" -> SuccessResponseBody {
        path: [catalog_id, schema_id, table_id, snapshot_id],
        query: [engine_id],
    }
}

options! {
    /// Options for `list_columns`.
    ListColumnsOptions = "ListColumns" -> ColumnCollection {
        path: [catalog_id, schema_id, table_id],
        query: [engine_id],
    }
}

options! {
    /// Options for `create_columns`.
    CreateColumnsOptions = "CreateColumns" -> ColumnCollection {
        path: [catalog_id, schema_id, table_id],
        query: [engine_id],
        json: CreateColumnsBody,
    }
}

options! {
    /// Options for `delete_column`.
    DeleteColumnOptions = "DeleteColumn" -> () {
        path: [catalog_id, schema_id, table_id, column_id],
        query: [engine_id],
    }
}

options! {
    /// Options for `update_column`.
    UpdateColumnOptions = "UpdateColumn" -> Column {
        path: [catalog_id, schema_id, table_id, column_id],
        query: [engine_id],
        patch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::operation::Operation;

    #[test]
    fn engine_id_is_required() {
        let options = ListTablesOptions::new("iceberg_data", "sales", "");
        assert!(matches!(
            options.validate(),
            Err(ValidationError::MissingField { field: "engine_id", .. })
        ));
    }

    #[test]
    fn path_fields_are_checked_in_order() {
        let options = GetTableOptions {
            engine_id: "presto-01".into(),
            ..Default::default()
        };
        assert!(matches!(
            options.validate(),
            Err(ValidationError::MissingField { field: "catalog_id", .. })
        ));
    }

    #[test]
    fn snapshot_rollback_names_every_segment() {
        let options = ReplaceSnapshotOptions::new(
            "iceberg_data",
            "sales",
            "orders",
            "2732461085",
            "presto-01",
        );
        for (name, value) in [
            ("catalog_id", "iceberg_data"),
            ("schema_id", "sales"),
            ("table_id", "orders"),
            ("snapshot_id", "2732461085"),
        ] {
            assert_eq!(options.path_param(name), Some(value));
        }
        assert_eq!(options.query(), vec![("engine_id", "presto-01".to_string())]);
    }

    #[test]
    fn create_schema_checks_body() {
        let options = CreateSchemaOptions::new(
            "iceberg_data",
            "presto-01",
            CreateSchemaBody::new("s3a://bucket/path", ""),
        );
        assert!(matches!(
            options.validate(),
            Err(ValidationError::MissingField { field: "schema_name", .. })
        ));
    }
}
