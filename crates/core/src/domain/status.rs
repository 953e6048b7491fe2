// Task Status Definitions
// Lifecycle states of a task on the backend. Display-only on this side:
// the client decodes them from responses and never mutates them.

use serde::{Deserialize, Serialize};

/// Task lifecycle status as reported by the gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum TaskStatus {
    Pending,
    Compiling,
    CompileFailed,
    Running,
    RunFailed,
    Success,
    Retrying,
    Cancelled,
    UnknownError,
}

impl TaskStatus {
    /// Decode a numeric status; out-of-range codes decode to `UnknownError`
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => TaskStatus::Pending,
            1 => TaskStatus::Compiling,
            2 => TaskStatus::CompileFailed,
            3 => TaskStatus::Running,
            4 => TaskStatus::RunFailed,
            5 => TaskStatus::Success,
            6 => TaskStatus::Retrying,
            7 => TaskStatus::Cancelled,
            _ => TaskStatus::UnknownError,
        }
    }

    pub const fn code(self) -> i64 {
        match self {
            TaskStatus::Pending => 0,
            TaskStatus::Compiling => 1,
            TaskStatus::CompileFailed => 2,
            TaskStatus::Running => 3,
            TaskStatus::RunFailed => 4,
            TaskStatus::Success => 5,
            TaskStatus::Retrying => 6,
            TaskStatus::Cancelled => 7,
            TaskStatus::UnknownError => 8,
        }
    }

    /// Human-readable label shown in UIs
    pub const fn label(self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Compiling => "compiling",
            TaskStatus::CompileFailed => "compile failed",
            TaskStatus::Running => "running",
            TaskStatus::RunFailed => "run failed",
            TaskStatus::Success => "success",
            TaskStatus::Retrying => "retrying",
            TaskStatus::Cancelled => "cancelled",
            TaskStatus::UnknownError => "unknown error",
        }
    }

    /// Whether the backend considers this a terminal state
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            TaskStatus::CompileFailed
                | TaskStatus::RunFailed
                | TaskStatus::Success
                | TaskStatus::Cancelled
                | TaskStatus::UnknownError
        )
    }
}

impl From<i64> for TaskStatus {
    fn from(code: i64) -> Self {
        TaskStatus::from_code(code)
    }
}

impl From<TaskStatus> for i64 {
    fn from(status: TaskStatus) -> Self {
        status.code()
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
