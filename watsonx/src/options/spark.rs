//! Spark engine and application options.

use watsonx_definitions::watsonx_data::{
    CreateSparkEngineApplicationBody, CreateSparkEngineBody, SparkEngineApplicationCollection,
    SparkEngineApplicationStatus, SparkEngineCollection, SparkEngineResult,
};

use crate::error::ValidationError;
use crate::operation::{require, CallOptions, Operation};

options! {
    /// Options for `list_spark_engines`.
    ListSparkEnginesOptions = "ListSparkEngines" -> SparkEngineCollection {
        path: [],
        query: [],
    }
}

options! {
    /// Options for `create_spark_engine`.
    CreateSparkEngineOptions = "CreateSparkEngine" -> SparkEngineResult {
        path: [],
        query: [],
        json: CreateSparkEngineBody,
    }
}

options! {
    /// Options for `delete_spark_engine`.
    DeleteSparkEngineOptions = "DeleteSparkEngine" -> () {
        path: [engine_id],
        query: [],
    }
}

options! {
    /// Options for `update_spark_engine`.
    UpdateSparkEngineOptions = "UpdateSparkEngine" -> SparkEngineResult {
        path: [engine_id],
        query: [],
        patch,
    }
}

/// Options for `list_spark_engine_applications`.
///
/// ```rust
/// use watsonx_data::options::ListSparkEngineApplicationsOptions;
/// use watsonx_data::Operation;
///
/// let running =
///     ListSparkEngineApplicationsOptions::new("spark-01").with_state(["RUNNING", "ACCEPTED"]);
/// assert_eq!(running.query(), vec![("state", "RUNNING,ACCEPTED".to_string())]);
/// assert!(ListSparkEngineApplicationsOptions::new("spark-01").query().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListSparkEngineApplicationsOptions {
    pub engine_id: String,
    /// Only list applications in one of these states.
    pub state: Option<Vec<String>>,
    /// Per-call settings.
    pub call: CallOptions,
}

impl ListSparkEngineApplicationsOptions {
    /// Creates the options for `engine_id`.
    pub fn new(engine_id: impl Into<String>) -> Self {
        Self {
            engine_id: engine_id.into(),
            ..Default::default()
        }
    }

    /// Filters by application state.
    pub fn with_state<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.state = Some(states.into_iter().map(Into::into).collect());
        self
    }
}

call_setters!(ListSparkEngineApplicationsOptions);

impl Operation for ListSparkEngineApplicationsOptions {
    const ENDPOINT_ID: &'static str = "ListSparkEngineApplications";
    type Output = SparkEngineApplicationCollection;

    fn validate(&self) -> Result<(), ValidationError> {
        require(Self::ENDPOINT_ID, "engine_id", &self.engine_id)
    }

    fn path_param(&self, name: &str) -> Option<&str> {
        (name == "engine_id").then_some(self.engine_id.as_str())
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        self.state
            .iter()
            .filter(|states| !states.is_empty())
            .map(|states| ("state", states.join(",")))
            .collect()
    }

    fn call_options(&self) -> &CallOptions {
        &self.call
    }
}

options! {
    /// Options for `create_spark_engine_application`.
    CreateSparkEngineApplicationOptions = "CreateSparkEngineApplication" -> SparkEngineApplicationStatus {
        path: [engine_id],
        query: [],
        json: CreateSparkEngineApplicationBody,
    }
}

options! {
    /// Options for `delete_spark_engine_applications`.
    DeleteSparkEngineApplicationsOptions = "DeleteSparkEngineApplications" -> () {
        path: [engine_id],
        query: [application_id],
    }
}

options! {
    /// Options for `get_spark_engine_application_status`.
    GetSparkEngineApplicationStatusOptions = "GetSparkEngineApplicationStatus" -> SparkEngineApplicationStatus {
        path: [engine_id, application_id],
        query: [],
    }
}
