pub mod supabase;

use async_trait::async_trait;

use crate::models::AuthState;

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn current_guest(&self, access_token: &str) -> anyhow::Result<AuthState>;
}

pub struct AnonymousIdentity;

#[async_trait]
impl IdentityProvider for AnonymousIdentity {
    async fn current_guest(&self, _access_token: &str) -> anyhow::Result<AuthState> {
        Ok(AuthState::anonymous())
    }
}

pub async fn resolve_guest(
    identity: &dyn IdentityProvider,
    access_token: Option<&str>,
) -> AuthState {
    let Some(token) = access_token.filter(|t| !t.is_empty()) else {
        return AuthState::anonymous();
    };

    match identity.current_guest(token).await {
        Ok(auth) => auth,
        // A failed lookup is treated as signed out.
        Err(e) => {
            tracing::warn!(error = %e, "identity lookup failed, continuing as guest");
            AuthState::anonymous()
        }
    }
}
