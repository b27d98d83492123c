use crate::types::WorkflowId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One published workflow design from the design listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowSummary {
    pub id: WorkflowId,
    pub name: String,
    pub last_modified: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workflow_summary_deserialize() {
        let summary: WorkflowSummary = serde_json::from_value(serde_json::json!({
            "id": "wf-42",
            "name": "Expense Report",
            "lastModified": "2024-05-20T09:15:00Z"
        }))
        .unwrap();
        assert_eq!(summary.id.0, "wf-42");
        assert_eq!(summary.name, "Expense Report");
    }
}
