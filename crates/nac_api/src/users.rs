use crate::client::NacClient;
use crate::error::NacApiError;
use crate::paging;
use nac_domain::User;
use serde_json::Value;

impl NacClient {
    /// Every user in the tenant, raw JSON per user.
    pub async fn users_raw(&self) -> Result<Vec<Value>, NacApiError> {
        let url = self.endpoint("/tenants/v1/users")?;
        paging::collect_items(self, url, &[], "users").await
    }

    /// Typed variant of [`users_raw`](Self::users_raw).
    pub async fn users(&self) -> Result<Vec<User>, NacApiError> {
        let items = self.users_raw().await?;
        Ok(serde_json::from_value(Value::Array(items))?)
    }
}
