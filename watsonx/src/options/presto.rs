//! Presto engine options.

use watsonx_definitions::watsonx_data::{
    CatalogCollection, CatalogResult, CreatePrestoEngineBody, ExplainAnalyzeStatementBody,
    ExplainResult, ExplainStatementBody, PrestoEngineCollection, PrestoEngineResult,
    ScaleEngineBody, SuccessResponseBody,
};

options! {
    /// Options for `list_presto_engines`.
    ListPrestoEnginesOptions = "ListPrestoEngines" -> PrestoEngineCollection {
        path: [],
        query: [],
    }
}

options! {
    /// Options for `create_presto_engine`.
    CreatePrestoEngineOptions = "CreatePrestoEngine" -> PrestoEngineResult {
        path: [],
        query: [],
        json: CreatePrestoEngineBody,
    }
}

options! {
    /// Options for `get_presto_engine`.
    GetPrestoEngineOptions = "GetPrestoEngine" -> PrestoEngineResult {
        path: [engine_id],
        query: [],
    }
}

options! {
    /// Options for `delete_presto_engine`.
    DeletePrestoEngineOptions = "DeletePrestoEngine" -> () {
        path: [engine_id],
        query: [],
    }
}

options! {
    /// Options for `update_presto_engine`.
    UpdatePrestoEngineOptions = "UpdatePrestoEngine" -> PrestoEngineResult {
        path: [engine_id],
        query: [],
        patch,
    }
}

options! {
    /// Options for `list_presto_engine_catalogs`.
    ListPrestoEngineCatalogsOptions = "ListPrestoEngineCatalogs" -> CatalogCollection {
        path: [engine_id],
        query: [],
    }
}

options! {
    /// Options for `replace_presto_engine_catalogs`.
    ///
    /// `catalog_names` is a comma-separated list.
    ReplacePrestoEngineCatalogsOptions = "ReplacePrestoEngineCatalogs" -> CatalogCollection {
        path: [engine_id],
        query: [catalog_names],
    }
}

options! {
    /// Options for `delete_presto_engine_catalogs`.
    ///
    /// `catalog_names` is a comma-separated list.
    DeletePrestoEngineCatalogsOptions = "DeletePrestoEngineCatalogs" -> () {
        path: [engine_id],
        query: [catalog_names],
    }
}

options! {
    /// Options for `get_presto_engine_catalog`.
    GetPrestoEngineCatalogOptions = "GetPrestoEngineCatalog" -> CatalogResult {
        path: [engine_id, catalog_id],
        query: [],
    }
}

options! {
    /// Options for `create_engine_pause`.
    CreateEnginePauseOptions = "CreateEnginePause" -> SuccessResponseBody {
        path: [engine_id],
        query: [],
    }
}

options! {
    /// Options for `create_engine_resume`.
    CreateEngineResumeOptions = "CreateEngineResume" -> SuccessResponseBody {
        path: [engine_id],
        query: [],
    }
}

options! {
    /// Options for `create_engine_restart`.
    CreateEngineRestartOptions = "CreateEngineRestart" -> SuccessResponseBody {
        path: [engine_id],
        query: [],
    }
}

options! {
    /// Options for `create_engine_scale`.
    CreateEngineScaleOptions = "CreateEngineScale" -> SuccessResponseBody {
        path: [engine_id],
        query: [],
        json: ScaleEngineBody,
    }
}

options! {
    /// Options for `run_explain_statement`.
    RunExplainStatementOptions = "RunExplainStatement" -> ExplainResult {
        path: [engine_id],
        query: [],
        json: ExplainStatementBody,
    }
}

options! {
    /// Options for `run_explain_analyze_statement`.
    RunExplainAnalyzeStatementOptions = "RunExplainAnalyzeStatement" -> ExplainResult {
        path: [engine_id],
        query: [],
        json: ExplainAnalyzeStatementBody,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::Operation;

    #[test]
    fn catalog_names_travel_as_query() {
        let options =
            ReplacePrestoEngineCatalogsOptions::new("presto-01", "iceberg_data,hive_data");
        assert_eq!(options.path_param("engine_id"), Some("presto-01"));
        assert_eq!(
            options.query(),
            vec![("catalog_names", "iceberg_data,hive_data".to_string())]
        );

        let missing = ReplacePrestoEngineCatalogsOptions::new("presto-01", "");
        assert!(missing.validate().is_err());
    }

    #[test]
    fn scale_body_may_be_empty() {
        let options = CreateEngineScaleOptions::new("presto-01", ScaleEngineBody::default());
        assert!(options.validate().is_ok());
    }

    #[test]
    fn explain_needs_statement() {
        let options = RunExplainStatementOptions::new("presto-01", ExplainStatementBody::new(""));
        assert!(options.validate().is_err());
        let options = options.with_body(ExplainStatementBody::new("SELECT 1"));
        assert!(options.validate().is_ok());
    }
}
