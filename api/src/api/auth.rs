//! Signup, login and logout.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{info, warn};

use crate::{ApiClient, ApiError, Tokens};

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username_or_email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub user: Option<Value>,
    pub tokens: Option<Tokens>,
}

/// Registers a new account. The backend answers with its own
/// `{success, message}` envelope, returned as is.
pub async fn signup(client: &ApiClient, request: &SignupRequest) -> Result<Value, ApiError> {
    client.post("/signup/", request).await
}

/// Logs in and stores the returned tokens and user profile.
pub async fn login(client: &ApiClient, username_or_email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest {
        username_or_email: username_or_email.to_string(),
        password: password.to_string(),
    };
    let response: LoginResponse = client.post("/login/", &request).await?;
    if response.success {
        if let Some(tokens) = &response.tokens {
            client.tokens().set_tokens(tokens);
            if let Some(user) = &response.user {
                client.tokens().set_user_data(&user.to_string());
            }
            info!("logged in as {username_or_email}");
        }
    }
    Ok(response)
}

/// Revokes the refresh token on the backend (best effort) and forgets both tokens.
pub async fn logout(client: &ApiClient) {
    if let Some(refresh) = client.tokens().refresh_token() {
        if let Err(e) = client.post::<Value, _>("/logout/", &json!({ "refresh": refresh })).await {
            warn!("Logout error: {e}");
        }
    }
    client.tokens().clear();
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use httpmock::prelude::*;

    use super::*;
    use crate::{ApiConfig, MemoryTokenStore, TokenStore};

    fn client_for(server: &MockServer) -> (ApiClient, Arc<MemoryTokenStore>) {
        let tokens = Arc::new(MemoryTokenStore::new());
        (ApiClient::new(ApiConfig::new(server.base_url()), tokens.clone()), tokens)
    }

    #[test]
    fn login_response_with_tokens() {
        let response: LoginResponse = serde_json::from_str(
            r#"{"success":true,"message":"ok","user":{"id":1},"tokens":{"access":"a","refresh":"r"}}"#,
        )
        .unwrap();
        assert_eq!(
            response.tokens,
            Some(Tokens {
                access: "a".to_string(),
                refresh: "r".to_string()
            })
        );
    }

    #[test]
    fn login_response_failure_without_tokens() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"success":false,"message":"bad credentials"}"#).unwrap();
        assert!(!response.success);
        assert_eq!(response.tokens, None);
    }

    #[tokio::test]
    async fn login_stores_tokens_and_user_data() {
        let server = MockServer::start();
        let login_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/login/")
                .json_body(json!({"username_or_email": "sara", "password": "secret"}));
            then.status(200).json_body(json!({
                "success": true,
                "message": "ok",
                "user": {"id": 4, "username": "sara"},
                "tokens": {"access": "a1", "refresh": "r1"}
            }));
        });

        let (client, tokens) = client_for(&server);
        let response = login(&client, "sara", "secret").await.unwrap();

        login_mock.assert();
        assert!(response.success);
        assert_eq!(tokens.access_token().as_deref(), Some("a1"));
        assert_eq!(tokens.refresh_token().as_deref(), Some("r1"));
        let user: Value = serde_json::from_str(&tokens.user_data().unwrap()).unwrap();
        assert_eq!(user["username"], "sara");
    }

    #[tokio::test]
    async fn failed_login_stores_nothing() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/login/");
            then.status(200)
                .json_body(json!({"success": false, "message": "bad credentials"}));
        });

        let (client, tokens) = client_for(&server);
        let response = login(&client, "sara", "wrong").await.unwrap();

        assert!(!response.success);
        assert_eq!(tokens.access_token(), None);
        assert_eq!(tokens.user_data(), None);
    }

    #[tokio::test]
    async fn signup_posts_the_new_account() {
        let server = MockServer::start();
        let signup_mock = server.mock(|when, then| {
            when.method(POST).path("/signup/").json_body(json!({
                "username": "sara",
                "email": "sara@example.com",
                "password": "secret"
            }));
            then.status(201)
                .json_body(json!({"success": true, "message": "verification email sent"}));
        });

        let (client, _) = client_for(&server);
        let request = SignupRequest {
            username: "sara".to_string(),
            email: "sara@example.com".to_string(),
            password: "secret".to_string(),
        };
        let response = signup(&client, &request).await.unwrap();

        signup_mock.assert();
        assert_eq!(response["success"], true);
    }

    #[tokio::test]
    async fn logout_revokes_refresh_token_and_clears_session() {
        let server = MockServer::start();
        let logout_mock = server.mock(|when, then| {
            when.method(POST).path("/logout/").json_body(json!({"refresh": "r1"}));
            then.status(500);
        });

        let (client, tokens) = client_for(&server);
        tokens.set_tokens(&Tokens {
            access: "a1".to_string(),
            refresh: "r1".to_string(),
        });
        tokens.set_user_data("{}");
        logout(&client).await;

        logout_mock.assert();
        assert_eq!(tokens.refresh_token(), None);
        assert_eq!(tokens.user_data(), None);
    }
}
