// Gateway Operations
// Typed wrappers over the dispatcher for the gateway's REST surface:
// task submit/get/search/cancel plus executor and judicator listings.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use crate::application::dispatch::Dispatcher;
use crate::domain::task::{Task, TaskBrief};
use crate::error::{DispatchError, Result};
use crate::port::transport::{Method, RequestSpec};

const TASK_ENDPOINT: &str = "api/task";
const TASK_LIST_ENDPOINT: &str = "api/task/list";
const EXECUTORS_ENDPOINT: &str = "api/executors";
const JUDICATORS_ENDPOINT: &str = "api/judicators";

/// Number of tasks on one search page
pub const PAGE_LIMIT: i64 = 10;

/// Task submission form.
///
/// Sent form-encoded as a raw body, matching what the gateway expects
/// from its upload form. Optional sections are omitted entirely.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TaskSubmission {
    pub user: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compile_source_str: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compile_source_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compile_command: Option<String>,
    pub compile_timeout: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execute_input: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execute_data_str: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execute_data_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execute_command: Option<String>,
    pub execute_timeout: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execute_standard: Option<String>,
}

impl TaskSubmission {
    /// Encode as `application/x-www-form-urlencoded` bytes
    pub fn to_form_bytes(&self) -> Result<Vec<u8>> {
        let encoded = serde_urlencoded::to_string(self).map_err(|e| DispatchError::Transport {
            status: 0,
            detail: format!("form encoding failed: {}", e),
        })?;
        Ok(encoded.into_bytes())
    }
}

/// Search filter; unset fields are left out of the query string
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub id: Option<String>,
    pub user: Option<i64>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub old_to_new: bool,
    pub limit: i64,
    pub page: i64,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            id: None,
            user: None,
            start_time: None,
            end_time: None,
            old_to_new: false,
            limit: PAGE_LIMIT,
            page: 0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubmitOutcome {
    pub id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchOutcome {
    pub pages: i64,
    pub tasks: Vec<TaskBrief>,
}

#[derive(Debug, Clone, Deserialize)]
struct GetOutcome {
    task: Task,
}

/// One registered executor, as reported by the gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutorInfo {
    pub id: String,
    pub hostname: String,
    pub report_time: String,
}

#[derive(Debug, Clone, Deserialize)]
struct ExecutorsOutcome {
    executors: Vec<ExecutorInfo>,
}

/// One registered judicator, as reported by the gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudicatorInfo {
    pub name: String,
    pub address: String,
}

#[derive(Debug, Clone, Deserialize)]
struct JudicatorsOutcome {
    judicators: Vec<JudicatorInfo>,
}

/// Typed client for the gateway REST API.
///
/// Every operation resolves to `Result<T, DispatchError>`; the caller
/// (usually a `UiSession`) decides how errors reach the user.
pub struct GatewayClient {
    dispatcher: Dispatcher,
}

impl GatewayClient {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Submit a new task; returns the id assigned by the backend
    pub async fn submit_task(&self, submission: &TaskSubmission) -> Result<SubmitOutcome> {
        let spec = RequestSpec::new(Method::Post, TASK_ENDPOINT).with_raw(
            submission.to_form_bytes()?,
            Some("application/x-www-form-urlencoded".to_string()),
        );
        decode(self.dispatcher.dispatch(spec).await?)
    }

    /// Fetch full detail for one task
    pub async fn get_task(&self, id: &str) -> Result<Task> {
        let spec = RequestSpec::new(Method::Get, TASK_ENDPOINT).with_query("id", id);
        let outcome: GetOutcome = decode(self.dispatcher.dispatch(spec).await?)?;
        Ok(outcome.task)
    }

    /// Search tasks page by page
    pub async fn search_tasks(&self, query: &SearchQuery) -> Result<SearchOutcome> {
        let mut spec = RequestSpec::new(Method::Get, TASK_LIST_ENDPOINT);
        if let Some(id) = &query.id {
            spec = spec.with_query("id", id);
        }
        if let Some(user) = query.user {
            spec = spec.with_query("user", user.to_string());
        }
        if let Some(start) = &query.start_time {
            spec = spec.with_query("start_time", start);
        }
        if let Some(end) = &query.end_time {
            spec = spec.with_query("end_time", end);
        }
        if query.old_to_new {
            spec = spec.with_query("old_to_new", "1");
        }
        spec = spec
            .with_query("limit", query.limit.to_string())
            .with_query("page", query.page.to_string());

        decode(self.dispatcher.dispatch(spec).await?)
    }

    /// Ask the backend to cancel a task. This is a new DELETE request,
    /// not an abort of any in-flight call.
    pub async fn cancel_task(&self, id: &str) -> Result<()> {
        let spec = RequestSpec::new(Method::Delete, TASK_ENDPOINT).with_query("id", id);
        self.dispatcher.dispatch(spec).await?;
        Ok(())
    }

    /// List currently registered executors
    pub async fn list_executors(&self) -> Result<Vec<ExecutorInfo>> {
        let spec = RequestSpec::new(Method::Get, EXECUTORS_ENDPOINT);
        let outcome: ExecutorsOutcome = decode(self.dispatcher.dispatch(spec).await?)?;
        Ok(outcome.executors)
    }

    /// List currently registered judicators
    pub async fn list_judicators(&self) -> Result<Vec<JudicatorInfo>> {
        let spec = RequestSpec::new(Method::Get, JUDICATORS_ENDPOINT);
        let outcome: JudicatorsOutcome = decode(self.dispatcher.dispatch(spec).await?)?;
        Ok(outcome.judicators)
    }
}

// A successful envelope whose payload does not match the advertised shape
// is a protocol violation on the server side, reported like any other
// malformed reply.
fn decode<T: DeserializeOwned>(payload: Value) -> Result<T> {
    serde_json::from_value(payload).map_err(|e| DispatchError::Transport {
        status: 0,
        detail: format!("payload decode failed: {}", e),
    })
}
