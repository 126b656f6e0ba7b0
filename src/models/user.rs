use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Profile of the logged-in user as returned by `/auth/me` and `/auth/login`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, alias = "fullName")]
    pub full_name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl AuthUser {
    /// Best human-readable name available.
    pub fn display_name(&self) -> String {
        self.full_name
            .clone()
            .or_else(|| self.username.clone())
            .or_else(|| self.email.clone())
            .unwrap_or_else(|| "unknown user".to_string())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub user: Option<AuthUser>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn login_response_tolerates_missing_extras() {
        let r: LoginResponse = serde_json::from_value(json!({ "access_token": "t" })).unwrap();
        assert_eq!(r.access_token, "t");
        assert!(r.refresh_token.is_none());
        assert!(r.user.is_none());
    }

    #[test]
    fn display_name_prefers_full_name() {
        let u: AuthUser = serde_json::from_value(json!({
            "id": "u1", "username": "mrossi", "full_name": "Mario Rossi"
        }))
        .unwrap();
        assert_eq!(u.display_name(), "Mario Rossi");

        let u: AuthUser = serde_json::from_value(json!({ "email": "m@x.io" })).unwrap();
        assert_eq!(u.display_name(), "m@x.io");
    }
}
