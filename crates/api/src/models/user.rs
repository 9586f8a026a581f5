//! User account model.

use serde::Serialize;

use minimart_core::UserId;

/// A user account, as returned to the client.
///
/// Never carries password material; the hash stays inside the repository
/// layer.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: UserId,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
    pub role_id: i32,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_camel_case_without_password() {
        let user = User {
            user_id: UserId::new(1),
            full_name: "Alice Example".to_string(),
            email: "alice@example.com".to_string(),
            phone: None,
            avatar_url: None,
            role_id: 2,
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["userId"], 1);
        assert_eq!(json["fullName"], "Alice Example");
        assert!(json.get("passwordHash").is_none());
    }
}
