use crate::client::NacClient;
use crate::error::NacApiError;
use crate::paging;
use nac_domain::WorkflowSummary;
use serde_json::Value;

pub const DEFAULT_WORKFLOW_LIMIT: u32 = 1000;

impl NacClient {
    /// Published workflow designs, raw JSON per design.
    pub async fn workflows_raw(&self, limit: u32) -> Result<Vec<Value>, NacApiError> {
        let url = self.endpoint("/workflows/v1/designs/published")?;
        let params = [("limit".to_string(), limit.to_string())];
        paging::collect_items(self, url, &params, "workflows").await
    }

    /// Typed variant of [`workflows_raw`](Self::workflows_raw).
    pub async fn workflows(&self, limit: u32) -> Result<Vec<WorkflowSummary>, NacApiError> {
        let items = self.workflows_raw(limit).await?;
        Ok(serde_json::from_value(Value::Array(items))?)
    }
}
