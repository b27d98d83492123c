use crate::types::{InstanceId, WorkflowId, WorkflowStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The workflow a response object points back at. Detail responses also
/// carry the start event type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowRef {
    pub id: WorkflowId,
    pub name: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartEvent {
    pub event_type: String,
}

/// One entry from the instance list endpoint: the core of a workflow run,
/// when it started, and where it stands.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instance {
    pub instance_id: InstanceId,
    #[serde(default)]
    pub instance_name: Option<String>,
    pub workflow: WorkflowRef,
    pub start_date_time: DateTime<Utc>,
    #[serde(default)]
    pub end_date_time: Option<DateTime<Utc>>,
    pub status: WorkflowStatus,
    pub start_event: StartEvent,
}

/// Full "Get a Workflow Instance" response, action history included.
///
/// Status is left as a free-form string here: paused instances report states
/// outside the list-endpoint vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceDetail {
    pub instance_id: InstanceId,
    #[serde(default)]
    pub name: Option<String>,
    pub start_date_time: DateTime<Utc>,
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    pub workflow: WorkflowRef,
    #[serde(default)]
    pub actions: Vec<ActionRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRecord {
    pub id: String,
    pub action_instance_id: String,
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub action_type: String,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub start_date_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub log_message: Option<String>,
}

impl ActionRecord {
    /// Time since the action started; zero for actions that never started.
    pub fn age(&self) -> chrono::Duration {
        match self.start_date_time {
            Some(start) => Utc::now() - start,
            None => chrono::Duration::zero(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_instance_json() -> serde_json::Value {
        serde_json::json!({
            "instanceId": "d39c4615-863d-47ff-a800-c4b82cdc1e1f_0_4",
            "instanceName": "Purchase Approval #42",
            "workflow": {
                "id": "wf-123",
                "name": "Purchase Approval",
                "version": "7"
            },
            "startDateTime": "2024-03-01T08:30:00Z",
            "endDateTime": null,
            "status": "Running",
            "startEvent": { "eventType": "form" }
        })
    }

    #[test]
    fn test_instance_deserializes_camel_case() {
        let instance: Instance = serde_json::from_value(sample_instance_json()).unwrap();
        assert_eq!(instance.instance_id.0, "d39c4615-863d-47ff-a800-c4b82cdc1e1f_0_4");
        assert_eq!(instance.workflow.name, "Purchase Approval");
        assert_eq!(instance.status, WorkflowStatus::Running);
        assert!(instance.end_date_time.is_none());
        assert_eq!(instance.start_event.event_type, "form");
    }

    #[test]
    fn test_detail_accepts_nonstandard_status() {
        let detail: InstanceDetail = serde_json::from_value(serde_json::json!({
            "instanceId": "abc_0_1",
            "startDateTime": "2024-03-01T08:30:00Z",
            "status": "Paused",
            "workflow": {
                "id": "wf-1",
                "name": "Invoice",
                "version": "2",
                "eventType": "scheduled"
            },
            "actions": []
        }))
        .unwrap();
        assert_eq!(detail.status, "Paused");
        assert_eq!(detail.workflow.event_type.as_deref(), Some("scheduled"));
        assert!(detail.actions.is_empty());
    }

    #[test]
    fn test_action_age_without_start_is_zero() {
        let action: ActionRecord = serde_json::from_value(serde_json::json!({
            "id": "a1",
            "actionInstanceId": "ai1",
            "name": "Send email",
            "label": "Send email",
            "type": "email"
        }))
        .unwrap();
        assert_eq!(action.age(), chrono::Duration::zero());
    }

    #[test]
    fn test_action_age_counts_from_start() {
        let action = ActionRecord {
            id: "a1".into(),
            action_instance_id: "ai1".into(),
            name: "Approve".into(),
            label: "Approve".into(),
            action_type: "task".into(),
            parent_id: None,
            start_date_time: Some(Utc::now() - chrono::Duration::hours(3)),
            end_date_time: None,
            error_message: None,
            log_message: None,
        };
        assert!(action.age() >= chrono::Duration::hours(3));
    }
}
