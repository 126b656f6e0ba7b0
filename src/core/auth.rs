use crate::api::AuthApi;
use crate::config::{CredentialStore, Credentials};
use crate::errors::{AppError, AppResult};
use crate::models::user::AuthUser;

pub struct AuthLogic;

impl AuthLogic {
    /// Exchange username/password for tokens and persist them.
    pub fn login<A: AuthApi>(
        api: &A,
        store: &CredentialStore,
        username: &str,
        password: &str,
    ) -> AppResult<AuthUser> {
        if username.trim().is_empty() {
            return Err(AppError::Config("username must not be empty".into()));
        }

        let resp = api.login(username.trim(), password)?;
        let user = resp.user.clone().unwrap_or_else(|| AuthUser {
            username: Some(username.trim().to_string()),
            ..AuthUser::default()
        });

        store.save(Credentials {
            access_token: resp.access_token,
            refresh_token: resp.refresh_token,
            user: Some(user.clone()),
        })?;

        Ok(user)
    }

    /// Tell the server (best effort) and forget local credentials.
    pub fn logout<A: AuthApi>(api: &A, store: &CredentialStore) -> AppResult<()> {
        if store.is_logged_in()
            && let Err(e) = api.logout()
        {
            tracing::warn!(error = %e, "server-side logout failed");
        }
        store.clear()
    }

    /// Current user as seen by the server; refreshes the cached profile.
    pub fn whoami<A: AuthApi>(api: &A, store: &CredentialStore) -> AppResult<AuthUser> {
        let mut creds = store.get().ok_or(AppError::NotLoggedIn)?;
        let user = api.me()?;
        creds.user = Some(user.clone());
        store.save(creds)?;
        Ok(user)
    }
}
