use crate::client::NacClient;
use crate::error::NacApiError;
use crate::paging;
use nac_domain::{AssignmentId, Task, TaskId, TaskQuery};
use reqwest::Method;
use serde_json::{Value, json};
use tracing::info;

impl NacClient {
    /// All tasks matching the query, raw JSON per task. Same 30-day default
    /// window as instance listing.
    pub async fn tasks_raw(&self, query: &TaskQuery) -> Result<Vec<Value>, NacApiError> {
        let url = self.endpoint("/workflows/v2/tasks")?;
        paging::collect_items(self, url, &query.to_params(), "tasks").await
    }

    /// Typed variant of [`tasks_raw`](Self::tasks_raw).
    pub async fn tasks(&self, query: &TaskQuery) -> Result<Vec<Task>, NacApiError> {
        let items = self.tasks_raw(query).await?;
        Ok(serde_json::from_value(Value::Array(items))?)
    }

    /// Detail for one task.
    pub async fn task(&self, task_id: &TaskId) -> Result<Task, NacApiError> {
        let url = self.endpoint(&format!("/workflows/v2/tasks/{task_id}"))?;
        Ok(serde_json::from_value(self.get_json(url, None).await?)?)
    }

    /// Complete a task assignment. The outcome must be one the task
    /// definition declares; the server rejects anything else.
    pub async fn complete_task(
        &self,
        task_id: &TaskId,
        assignment_id: &AssignmentId,
        outcome: &str,
    ) -> Result<Value, NacApiError> {
        let url = self.endpoint(&format!("/workflows/v2/tasks/{task_id}/assignments/{assignment_id}"))?;
        let body = json!({ "outcome": outcome });

        let response = self.request(Method::PATCH, url, None, Some(&body)).await?;
        info!(%task_id, %assignment_id, outcome, "task completed");
        Ok(response.json().await?)
    }

    /// Delegate a task assignment to other users.
    pub async fn delegate_task(
        &self,
        task_id: &TaskId,
        assignment_id: &AssignmentId,
        assignees: &[String],
        message: &str,
    ) -> Result<(), NacApiError> {
        let url = self.endpoint(&format!(
            "/workflows/v2/tasks/{task_id}/assignments/{assignment_id}/delegate"
        ))?;
        let body = json!({ "assignees": assignees, "message": message });

        self.request(Method::PUT, url, None, Some(&body)).await?;
        info!(%task_id, %assignment_id, delegates = assignees.len(), "task delegated");
        Ok(())
    }
}
