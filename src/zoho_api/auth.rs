use serde_json::Value;
use tracing::error;

use crate::error::ApiError;
use crate::types::TokenPair;

use super::ZohoClient;

impl ZohoClient {
    // One form-encoded POST against the OAuth token endpoint; both grants go
    // through here.
    async fn request_token(&self, form: &[(&str, &str)]) -> Result<Value, ApiError> {
        let token_url = format!("{}/oauth/v2/token", self.accounts_base);
        let response = self.client.post(&token_url).form(form).send().await?;

        let status = response.status();
        let body: Value = response.json().await?;
        if !status.is_success() {
            return Err(ApiError::Upstream {
                status: Some(status.as_u16()),
                payload: Some(body),
            });
        }
        Ok(body)
    }

    pub(crate) async fn do_exchange_code(&self, code: &str) -> Result<TokenPair, ApiError> {
        let body = self
            .request_token(&[
                ("code", code),
                ("grant_type", "authorization_code"),
                ("client_id", self.credentials.client_id.as_str()),
                ("client_secret", self.credentials.client_secret.as_str()),
                ("redirect_uri", self.credentials.redirect_uri.as_str()),
            ])
            .await?;

        Ok(TokenPair {
            access_token: token_field(&body, "access_token"),
            refresh_token: token_field(&body, "refresh_token"),
        })
    }

    pub(crate) async fn do_refresh_access_token(&self, refresh_token: &str) -> String {
        let result = self
            .request_token(&[
                ("refresh_token", refresh_token),
                ("grant_type", "refresh_token"),
                ("client_id", self.credentials.client_id.as_str()),
                ("client_secret", self.credentials.client_secret.as_str()),
            ])
            .await;

        match result {
            Ok(body) => token_field(&body, "access_token"),
            Err(err) => {
                error!("error refreshing access token: {}", err);
                String::new()
            }
        }
    }
}

fn token_field(body: &Value, field: &str) -> String {
    body.get(field)
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_token_field_reads_string() {
        let body = json!({ "access_token": "a-1", "expires_in": 3600 });
        assert_eq!(token_field(&body, "access_token"), "a-1");
    }

    #[test]
    fn test_token_field_missing_or_non_string_is_empty() {
        let body = json!({ "expires_in": 3600 });
        assert_eq!(token_field(&body, "access_token"), "");
        assert_eq!(token_field(&body, "expires_in"), "");
    }
}
