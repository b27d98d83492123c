use crate::client::NacClient;
use crate::error::NacApiError;
use serde_json::Value;
use tracing::debug;
use url::Url;

/// Collect every item from a list endpoint that pages via `nextLink`.
///
/// Filter params ride only on the first request; the nextLink URL already
/// encodes the continuation, filters included.
pub async fn collect_items(
    client: &NacClient,
    first: Url,
    params: &[(String, String)],
    items_key: &str,
) -> Result<Vec<Value>, NacApiError> {
    let mut items = Vec::new();
    let mut url = first;
    let mut first_request = true;

    loop {
        let page = if first_request {
            first_request = false;
            client.get_json(url, Some(params)).await?
        } else {
            client.get_json(url, None).await?
        };

        if let Some(page_items) = page[items_key].as_array() {
            items.extend(page_items.iter().cloned());
        }

        match page["nextLink"].as_str() {
            Some(next) => {
                debug!(items = items.len(), "following nextLink");
                url = Url::parse(next)?;
            }
            None => break,
        }
    }

    Ok(items)
}

/// Merge an object-shaped paged response (the instance detail endpoint)
/// into a single object, following `nextLink` until exhausted.
///
/// Later pages win for scalar keys; array values are concatenated so a paged
/// action history survives intact.
pub async fn merge_pages(
    client: &NacClient,
    first: Url,
    params: &[(String, String)],
) -> Result<Value, NacApiError> {
    let mut merged = Value::Object(serde_json::Map::new());
    let mut url = first;
    let mut first_request = true;

    loop {
        let page = if first_request {
            first_request = false;
            client.get_json(url, Some(params)).await?
        } else {
            client.get_json(url, None).await?
        };

        let next = page["nextLink"].as_str().map(Url::parse).transpose()?;
        merge_into(&mut merged, page);

        match next {
            Some(next) => url = next,
            None => break,
        }
    }

    if let Some(map) = merged.as_object_mut() {
        map.remove("nextLink");
    }
    Ok(merged)
}

fn merge_into(acc: &mut Value, page: Value) {
    let (Some(acc_map), Value::Object(page_map)) = (acc.as_object_mut(), page) else {
        return;
    };

    for (key, value) in page_map {
        match acc_map.entry(key) {
            serde_json::map::Entry::Occupied(mut slot) => match (slot.get_mut(), value) {
                (Value::Array(existing), Value::Array(incoming)) => existing.extend(incoming),
                (slot_value, value) => *slot_value = value,
            },
            serde_json::map::Entry::Vacant(slot) => {
                slot.insert(value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merge_concatenates_arrays() {
        let mut acc = Value::Object(serde_json::Map::new());
        merge_into(&mut acc, json!({ "instanceId": "a", "actions": [{"id": "1"}] }));
        merge_into(&mut acc, json!({ "instanceId": "a", "actions": [{"id": "2"}, {"id": "3"}] }));

        assert_eq!(acc["instanceId"], "a");
        assert_eq!(acc["actions"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_merge_scalar_last_page_wins() {
        let mut acc = Value::Object(serde_json::Map::new());
        merge_into(&mut acc, json!({ "status": "Running" }));
        merge_into(&mut acc, json!({ "status": "Completed" }));
        assert_eq!(acc["status"], "Completed");
    }

    #[test]
    fn test_merge_ignores_non_object_page() {
        let mut acc = json!({ "kept": true });
        merge_into(&mut acc, json!([1, 2, 3]));
        assert_eq!(acc, json!({ "kept": true }));
    }
}
