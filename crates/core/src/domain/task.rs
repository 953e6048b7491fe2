// Task Models
// Shapes of tasks as the gateway reports them. Read-only on this side.

use serde::{Deserialize, Serialize};

use crate::domain::status::TaskStatus;

/// Compact task form returned by search listings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskBrief {
    pub id: String,
    pub user: i64,
    pub done: bool,
    pub status: TaskStatus,
    pub executor: Option<String>,
    pub report_time: Option<String>,
}

/// Compile section of a full task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompileSection {
    pub source: Option<String>,
    pub command: Option<String>,
    pub timeout: i64,
}

/// Execute section of a full task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecuteSection {
    pub source: Option<String>,
    pub command: Option<String>,
    pub timeout: i64,
    pub standard: Option<String>,
}

/// Outputs collected after compile/execute ran
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultSection {
    pub compile: Option<String>,
    pub execute: Option<String>,
}

/// Full task detail as returned by a task get
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub user: i64,
    pub done: bool,
    pub status: TaskStatus,
    pub executor: Option<String>,
    pub report_time: Option<String>,
    pub compile: Option<CompileSection>,
    pub execute: Option<ExecuteSection>,
    pub result: Option<ResultSection>,
}
