//! Options for externally managed engines: Db2, Netezza and other engines.

use watsonx_definitions::watsonx_data::{
    CreateExternalEngineBody, CreateOtherEngineBody, Db2EngineCollection, Db2EngineResult,
    NetezzaEngineCollection, NetezzaEngineResult, OtherEngineCollection, OtherEngineResult,
};

options! {
    /// Options for `list_db2_engines`.
    ListDb2EnginesOptions = "ListDb2Engines" -> Db2EngineCollection {
        path: [],
        query: [],
    }
}

options! {
    /// Options for `create_db2_engine`.
    CreateDb2EngineOptions = "CreateDb2Engine" -> Db2EngineResult {
        path: [],
        query: [],
        json: CreateExternalEngineBody,
    }
}

options! {
    /// Options for `delete_db2_engine`.
    DeleteDb2EngineOptions = "DeleteDb2Engine" -> () {
        path: [engine_id],
        query: [],
    }
}

options! {
    /// Options for `update_db2_engine`.
    UpdateDb2EngineOptions = "UpdateDb2Engine" -> Db2EngineResult {
        path: [engine_id],
        query: [],
        patch,
    }
}

options! {
    /// Options for `list_netezza_engines`.
    ListNetezzaEnginesOptions = "ListNetezzaEngines" -> NetezzaEngineCollection {
        path: [],
        query: [],
    }
}

options! {
    /// Options for `create_netezza_engine`.
    CreateNetezzaEngineOptions = "CreateNetezzaEngine" -> NetezzaEngineResult {
        path: [],
        query: [],
        json: CreateExternalEngineBody,
    }
}

options! {
    /// Options for `delete_netezza_engine`.
    DeleteNetezzaEngineOptions = "DeleteNetezzaEngine" -> () {
        path: [engine_id],
        query: [],
    }
}

options! {
    /// Options for `update_netezza_engine`.
    UpdateNetezzaEngineOptions = "UpdateNetezzaEngine" -> NetezzaEngineResult {
        path: [engine_id],
        query: [],
        patch,
    }
}

options! {
    /// Options for `list_other_engines`.
    ListOtherEnginesOptions = "ListOtherEngines" -> OtherEngineCollection {
        path: [],
        query: [],
    }
}

options! {
    /// Options for `create_other_engine`.
    CreateOtherEngineOptions = "CreateOtherEngine" -> OtherEngineResult {
        path: [],
        query: [],
        json: CreateOtherEngineBody,
    }
}

options! {
    /// Options for `delete_other_engine`.
    DeleteOtherEngineOptions = "DeleteOtherEngine" -> () {
        path: [engine_id],
        query: [],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::Operation;
    use crate::request::RequestBody;

    #[test]
    fn external_engine_body_needs_origin() {
        let options = CreateDb2EngineOptions::new(CreateExternalEngineBody::new(""));
        assert!(options.validate().is_err());

        let options = CreateNetezzaEngineOptions::new(CreateExternalEngineBody {
            engine_display_name: Some("nz-prod".into()),
            ..CreateExternalEngineBody::new("external")
        });
        assert!(options.validate().is_ok());
        let RequestBody::Json(encoded) = options.body().unwrap() else {
            panic!("expected a JSON body");
        };
        let value: serde_json::Value = serde_json::from_slice(&encoded).unwrap();
        assert_eq!(value["origin"], "external");
        assert_eq!(value["engine_display_name"], "nz-prod");
    }
}
