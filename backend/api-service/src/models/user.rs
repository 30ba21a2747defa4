use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

/// Entry of the mock user directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: i64,
    pub name: &'static str,
    pub email: &'static str,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_serializes_role_in_lowercase() {
        let user = User {
            id: 7,
            name: "Dana",
            email: "dana@example.com",
            role: Role::Admin,
        };
        assert_eq!(
            serde_json::to_value(&user).unwrap(),
            serde_json::json!({
                "id": 7,
                "name": "Dana",
                "email": "dana@example.com",
                "role": "admin"
            })
        );
    }
}
