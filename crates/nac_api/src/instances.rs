use crate::client::NacClient;
use crate::error::NacApiError;
use crate::paging;
use nac_domain::{Instance, InstanceDetail, InstanceId, InstanceQuery, ResolveType, WorkflowId};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::info;

impl NacClient {
    /// Launch an instance of a published workflow. The API acknowledges with
    /// 202 and a body naming the created instance.
    pub async fn create_instance(
        &self,
        workflow_id: &WorkflowId,
        start_data: Option<Value>,
    ) -> Result<Value, NacApiError> {
        let url = self.endpoint(&format!("/workflows/v1/designs/{workflow_id}/instances"))?;
        let body = json!({ "startData": start_data.unwrap_or_else(|| json!({})) });

        let response = self.request(Method::POST, url, None, Some(&body)).await?;
        if response.status() != StatusCode::ACCEPTED {
            return Err(NacApiError::UnexpectedStatus {
                expected: StatusCode::ACCEPTED.as_u16(),
                got: response.status().as_u16(),
            });
        }

        info!(%workflow_id, "instance created");
        Ok(response.json().await?)
    }

    /// Full detail for one instance, action history included, as raw JSON.
    /// Pages behind `nextLink` are merged.
    pub async fn instance_raw(&self, instance_id: &InstanceId) -> Result<Value, NacApiError> {
        let url = self.endpoint(&format!("/workflows/v2/instances/{instance_id}"))?;
        paging::merge_pages(self, url, &[]).await
    }

    /// Typed variant of [`instance_raw`](Self::instance_raw).
    pub async fn instance(&self, instance_id: &InstanceId) -> Result<InstanceDetail, NacApiError> {
        Ok(serde_json::from_value(self.instance_raw(instance_id).await?)?)
    }

    /// All instances matching the query, raw JSON per instance.
    ///
    /// Without an explicit date range the API only reports the last 30 days.
    pub async fn instances_raw(&self, query: &InstanceQuery) -> Result<Vec<Value>, NacApiError> {
        let url = self.endpoint("/workflows/v2/instances")?;
        paging::collect_items(self, url, &query.to_params(), "instances").await
    }

    /// Typed variant of [`instances_raw`](Self::instances_raw).
    pub async fn instances(&self, query: &InstanceQuery) -> Result<Vec<Instance>, NacApiError> {
        let items = self.instances_raw(query).await?;
        Ok(serde_json::from_value(Value::Array(items))?)
    }

    /// Resolve a paused instance by retrying the failed action or failing
    /// the instance outright. The API acknowledges with 204.
    pub async fn resolve_instance(
        &self,
        instance_id: &InstanceId,
        resolve_type: ResolveType,
        message: &str,
    ) -> Result<(), NacApiError> {
        let url = self.endpoint(&format!("/workflows/v1/instances/{instance_id}/resolve"))?;
        let body = json!({ "resolveType": resolve_type, "message": message });

        let response = self.request(Method::POST, url, None, Some(&body)).await?;
        if response.status() != StatusCode::NO_CONTENT {
            return Err(NacApiError::UnexpectedStatus {
                expected: StatusCode::NO_CONTENT.as_u16(),
                got: response.status().as_u16(),
            });
        }

        info!(%instance_id, resolve_type = resolve_type.as_str(), "instance resolved");
        Ok(())
    }

    /// Start data an instance was launched with, as raw JSON.
    pub async fn instance_start_data(&self, instance_id: &InstanceId) -> Result<Value, NacApiError> {
        let url = self.endpoint(&format!("/workflows/v2/instances/{instance_id}/startdata"))?;
        self.get_json(url, None).await
    }

    /// Start data deserialized into a caller-supplied shape; start data
    /// varies workflow to workflow, so the target type does too.
    pub async fn instance_start_data_as<T: DeserializeOwned>(
        &self,
        instance_id: &InstanceId,
    ) -> Result<T, NacApiError> {
        Ok(serde_json::from_value(self.instance_start_data(instance_id).await?)?)
    }
}
