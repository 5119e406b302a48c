use anyhow::Context;
use async_trait::async_trait;

use super::IdentityProvider;
use crate::models::AuthState;

pub struct SupabaseIdentity {
    url: String,
    anon_key: String,
    client: reqwest::Client,
}

impl SupabaseIdentity {
    pub fn new(url: String, anon_key: String) -> Self {
        Self {
            url,
            anon_key,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl IdentityProvider for SupabaseIdentity {
    async fn current_guest(&self, access_token: &str) -> anyhow::Result<AuthState> {
        let resp = self
            .client
            .get(format!("{}/auth/v1/user", self.url))
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await
            .context("failed to call Supabase auth endpoint")?;

        if resp.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Ok(AuthState::anonymous());
        }

        let data: serde_json::Value = resp
            .error_for_status()
            .context("Supabase auth returned error")?
            .json()
            .await
            .context("failed to parse Supabase user")?;

        Ok(parse_user(&data))
    }
}

fn parse_user(data: &serde_json::Value) -> AuthState {
    if data["id"].as_str().is_none() {
        return AuthState::anonymous();
    }
    let first_name = data["user_metadata"]["first_name"]
        .as_str()
        .map(|s| s.trim().to_string());
    AuthState::guest(first_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_with_first_name() {
        let data = serde_json::json!({
            "id": "8c1d",
            "email": "amina@example.com",
            "user_metadata": {"first_name": "Amina", "last_name": "Rahman"}
        });
        let auth = parse_user(&data);
        assert!(auth.is_authenticated);
        assert_eq!(auth.display_name(), Some("Amina"));
    }

    #[test]
    fn test_parse_user_without_metadata() {
        let auth = parse_user(&serde_json::json!({"id": "8c1d"}));
        assert!(auth.is_authenticated);
        assert_eq!(auth.first_name, None);
    }

    #[test]
    fn test_parse_user_missing_id() {
        let auth = parse_user(&serde_json::json!({"msg": "invalid JWT"}));
        assert!(!auth.is_authenticated);
    }
}
