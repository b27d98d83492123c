use crate::types::{AssignmentId, InstanceId, TaskId, TaskStatus, WorkflowId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskUrls {
    pub form_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskAssignment {
    pub id: AssignmentId,
    pub status: String,
    pub assignee: String,
    pub created_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
    #[serde(default)]
    pub completed_by: Option<String>,
    #[serde(default)]
    pub completed_by_id: Option<String>,
    #[serde(default)]
    pub completed_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub outcome: Option<String>,
    #[serde(default)]
    pub escalated_to: Option<String>,
    #[serde(default)]
    pub urls: Option<TaskUrls>,
}

/// A task raised by a workflow, with its per-user assignments.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    pub subject: String,
    pub message: String,
    pub description: String,
    pub status: TaskStatus,
    pub assignment_behavior: String,
    pub completion_criteria: String,
    pub initiator: String,
    pub is_authenticated: bool,
    pub created_date: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub outcomes: Option<Vec<String>>,
    pub task_assignments: Vec<TaskAssignment>,
    pub workflow_id: WorkflowId,
    pub workflow_instance_id: InstanceId,
    pub workflow_name: String,
}

impl Task {
    /// Time since the task was created.
    pub fn age(&self) -> chrono::Duration {
        Utc::now() - self.created_date
    }

    /// True when the task came from the "assign a task to multiple users"
    /// action; only those assignments carry form URLs.
    pub fn supports_multiple_users(&self) -> bool {
        self.task_assignments
            .first()
            .is_some_and(|assignment| assignment.urls.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_task(urls: Option<TaskUrls>) -> Task {
        let assignment = TaskAssignment {
            id: AssignmentId::from("assign-1"),
            status: "active".into(),
            assignee: "clambert@example.com".into(),
            created_date: Utc::now() - chrono::Duration::days(2),
            updated_date: Utc::now(),
            completed_by: None,
            completed_by_id: None,
            completed_date: None,
            outcome: None,
            escalated_to: None,
            urls,
        };
        Task {
            id: TaskId::from("task-1"),
            name: "Approve purchase".into(),
            subject: "Purchase Approval".into(),
            message: "Please review".into(),
            description: "Review the attached order".into(),
            status: TaskStatus::Active,
            assignment_behavior: "independent".into(),
            completion_criteria: "any".into(),
            initiator: "jmaynor@example.com".into(),
            is_authenticated: true,
            created_date: Utc::now() - chrono::Duration::days(2),
            modified: Utc::now(),
            due_date: None,
            completed_date: None,
            outcomes: Some(vec!["Approve".into(), "Reject".into()]),
            task_assignments: vec![assignment],
            workflow_id: WorkflowId::from("wf-1"),
            workflow_instance_id: InstanceId::from("inst-1_0_0"),
            workflow_name: "Purchase Approval".into(),
        }
    }

    #[test]
    fn test_supports_multiple_users() {
        let plain = sample_task(None);
        assert!(!plain.supports_multiple_users());

        let multi = sample_task(Some(TaskUrls { form_url: "https://forms.example/t/1".into() }));
        assert!(multi.supports_multiple_users());
    }

    #[test]
    fn test_supports_multiple_users_empty_assignments() {
        let mut task = sample_task(None);
        task.task_assignments.clear();
        assert!(!task.supports_multiple_users());
    }

    #[test]
    fn test_task_age() {
        let task = sample_task(None);
        assert!(task.age() >= chrono::Duration::days(2));
    }

    #[test]
    fn test_task_wire_roundtrip() {
        let json = serde_json::json!({
            "id": "t-9",
            "name": "Sign off",
            "subject": "Sign off",
            "message": "msg",
            "description": "desc",
            "status": "active-escalated",
            "assignmentBehavior": "independent",
            "completionCriteria": "all",
            "initiator": "someone@example.com",
            "isAuthenticated": false,
            "createdDate": "2024-04-02T12:00:00Z",
            "modified": "2024-04-03T12:00:00Z",
            "taskAssignments": [{
                "id": "a-1",
                "status": "active",
                "assignee": "user@example.com",
                "createdDate": "2024-04-02T12:00:00Z",
                "updatedDate": "2024-04-02T12:00:00Z",
                "urls": { "formUrl": "https://forms.example/f" }
            }],
            "workflowId": "wf-2",
            "workflowInstanceId": "inst-2_0_1",
            "workflowName": "Sign-off"
        });
        let task: Task = serde_json::from_value(json).unwrap();
        assert_eq!(task.status, TaskStatus::Escalated);
        assert!(task.supports_multiple_users());
        assert!(task.due_date.is_none());
        assert!(task.outcomes.is_none());
    }
}
