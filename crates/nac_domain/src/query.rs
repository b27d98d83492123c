use crate::types::{InstanceId, TaskStatus, WorkflowStatus};
use chrono::{DateTime, Utc};

/// Timestamp layout the API expects in query strings.
const QUERY_TIMESTAMP: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

pub(crate) fn format_query_timestamp(dt: &DateTime<Utc>) -> String {
    dt.format(QUERY_TIMESTAMP).to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Filters for the instance listing endpoint.
///
/// When no date range is given the API returns only the last 30 days; pass an
/// explicitly wide range to sweep everything.
#[derive(Debug, Clone, Default)]
pub struct InstanceQuery {
    pub workflow_name: Option<String>,
    pub status: Option<WorkflowStatus>,
    pub order: Option<SortOrder>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub page_size: Option<u32>,
}

impl InstanceQuery {
    pub fn new() -> Self {
        Self { page_size: Some(100), ..Self::default() }
    }

    /// Query-string pairs, unset filters omitted.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(ref name) = self.workflow_name {
            params.push(("workflowName".to_string(), name.clone()));
        }
        if let Some(status) = self.status {
            params.push(("status".to_string(), status.as_str().to_string()));
        }
        if let Some(order) = self.order {
            params.push(("order".to_string(), order.as_str().to_string()));
        }
        if let Some(ref from) = self.from {
            params.push(("from".to_string(), format_query_timestamp(from)));
        }
        if let Some(ref to) = self.to {
            params.push(("to".to_string(), format_query_timestamp(to)));
        }
        if let Some(page_size) = self.page_size {
            params.push(("pageSize".to_string(), page_size.to_string()));
        }
        params
    }
}

/// Filters for the task search endpoint. Same 30-day default window as
/// instance listing.
#[derive(Debug, Clone, Default)]
pub struct TaskQuery {
    pub workflow_name: Option<String>,
    pub instance_id: Option<InstanceId>,
    pub status: Option<TaskStatus>,
    pub assignee: Option<String>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

impl TaskQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(ref name) = self.workflow_name {
            params.push(("workflowName".to_string(), name.clone()));
        }
        if let Some(ref id) = self.instance_id {
            params.push(("workflowInstanceId".to_string(), id.0.clone()));
        }
        if let Some(ref assignee) = self.assignee {
            params.push(("assignee".to_string(), assignee.clone()));
        }
        if let Some(ref from) = self.from {
            params.push(("from".to_string(), format_query_timestamp(from)));
        }
        if let Some(ref to) = self.to {
            params.push(("to".to_string(), format_query_timestamp(to)));
        }
        if let Some(status) = self.status {
            params.push(("status".to_string(), status.as_str().to_string()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timestamp_format_microseconds() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 15).unwrap();
        assert_eq!(format_query_timestamp(&dt), "2024-03-01T08:30:15.000000Z");
    }

    #[test]
    fn test_instance_query_defaults() {
        let query = InstanceQuery::new();
        assert_eq!(query.to_params(), vec![("pageSize".to_string(), "100".to_string())]);
    }

    #[test]
    fn test_instance_query_full() {
        let query = InstanceQuery {
            workflow_name: Some("Purchase Approval".into()),
            status: Some(WorkflowStatus::Running),
            order: Some(SortOrder::Desc),
            from: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
            to: Some(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()),
            page_size: Some(50),
        };
        let params = query.to_params();
        assert!(params.contains(&("workflowName".to_string(), "Purchase Approval".to_string())));
        assert!(params.contains(&("status".to_string(), "running".to_string())));
        assert!(params.contains(&("order".to_string(), "DESC".to_string())));
        assert!(params.contains(&("from".to_string(), "2024-01-01T00:00:00.000000Z".to_string())));
        assert!(params.contains(&("pageSize".to_string(), "50".to_string())));
    }

    #[test]
    fn test_task_query_omits_unset() {
        let query = TaskQuery {
            assignee: Some("clambert@example.com".into()),
            status: Some(TaskStatus::Active),
            ..TaskQuery::new()
        };
        let params = query.to_params();
        assert_eq!(params.len(), 2);
        assert!(params.contains(&("assignee".to_string(), "clambert@example.com".to_string())));
        assert!(params.contains(&("status".to_string(), "active".to_string())));
    }
}
