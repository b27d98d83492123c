use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkflowId(pub String);

/// Instance ids carry a run suffix (e.g. `d39c4615-..._0_4`), so they are
/// opaque strings rather than UUIDs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssignmentId(pub String);

macro_rules! impl_id_display {
    ($($id:ident),+) => {
        $(
            impl std::fmt::Display for $id {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "{}", self.0)
                }
            }

            impl From<&str> for $id {
                fn from(s: &str) -> Self {
                    Self(s.to_string())
                }
            }
        )+
    };
}

impl_id_display!(WorkflowId, InstanceId, TaskId, AssignmentId);

#[derive(Debug, Error)]
#[error("unrecognized {kind} status: {value}")]
pub struct StatusParseError {
    kind: &'static str,
    value: String,
}

/// State of a workflow instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum WorkflowStatus {
    Running,
    Completed,
    Failed,
    Terminated,
}

impl WorkflowStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Terminated => "terminated",
        }
    }
}

impl std::str::FromStr for WorkflowStatus {
    type Err = StatusParseError;

    // The API is not consistent about casing, so match case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "running" => Ok(Self::Running),
            "completed" => Ok(Self::Completed),
            "failed" => Ok(Self::Failed),
            "terminated" => Ok(Self::Terminated),
            _ => Err(StatusParseError { kind: "workflow", value: s.to_string() }),
        }
    }
}

impl TryFrom<String> for WorkflowStatus {
    type Error = StatusParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<WorkflowStatus> for String {
    fn from(status: WorkflowStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for WorkflowStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// State of a task assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TaskStatus {
    Active,
    Escalated,
    Expired,
    Complete,
    Overridden,
    Terminated,
    Paused,
    All,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Escalated => "active-escalated",
            Self::Expired => "expired",
            Self::Complete => "complete",
            Self::Overridden => "overridden",
            Self::Terminated => "terminated",
            Self::Paused => "paused",
            Self::All => "all",
        }
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "active-escalated" => Ok(Self::Escalated),
            "expired" => Ok(Self::Expired),
            "complete" => Ok(Self::Complete),
            "overridden" => Ok(Self::Overridden),
            "terminated" => Ok(Self::Terminated),
            "paused" => Ok(Self::Paused),
            "all" => Ok(Self::All),
            _ => Err(StatusParseError { kind: "task", value: s.to_string() }),
        }
    }
}

impl TryFrom<String> for TaskStatus {
    type Error = StatusParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<TaskStatus> for String {
    fn from(status: TaskStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How to resolve a paused instance: retry the failed action, or fail the
/// whole instance. The API takes these as numeric strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum ResolveType {
    Retry,
    Fail,
}

impl ResolveType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Retry => "1",
            Self::Fail => "2",
        }
    }
}

impl From<ResolveType> for String {
    fn from(resolve: ResolveType) -> Self {
        resolve.as_str().to_string()
    }
}
