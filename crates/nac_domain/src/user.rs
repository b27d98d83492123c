use serde::{Deserialize, Serialize};

/// A tenant user, as returned by the user listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_guest: bool,
    pub organization_id: String,
    pub role: String,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": "u-1",
            "email": "clambert@example.com",
            "firstName": "Chris",
            "lastName": "Lambert",
            "isGuest": false,
            "organizationId": "org-1",
            "role": "participant"
        }))
        .unwrap();
        assert_eq!(user.full_name(), "Chris Lambert");
    }
}
