use reqwest::header;
use serde_json::Value;

use crate::error::ApiError;
use crate::types::{MessageContentResponse, OutgoingMessage};

use super::ZohoClient;

impl ZohoClient {
    pub(crate) async fn do_send_message(
        &self,
        access_token: &str,
        account_id: &str,
        message: OutgoingMessage,
    ) -> Result<Value, ApiError> {
        let send_url = format!("{}/api/accounts/{}/messages", self.mail_base, account_id);
        let response = self
            .client
            .post(&send_url)
            .header(header::ACCEPT, "application/json")
            .header(header::AUTHORIZATION, Self::auth_header(access_token))
            .json(&message)
            .send()
            .await?;

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

    // Message-view listing; first page only, fixed page size.
    pub(crate) async fn do_list_messages(
        &self,
        access_token: &str,
        account_id: &str,
        status: &str,
        limit: u32,
    ) -> Result<Value, ApiError> {
        let view_url = format!(
            "{}/api/accounts/{}/messages/view?status={}&limit={}",
            self.mail_base, account_id, status, limit
        );
        let response = self
            .client
            .get(&view_url)
            .header(header::ACCEPT, "application/json")
            .header(header::AUTHORIZATION, Self::auth_header(access_token))
            .send()
            .await?;

        let http_status = response.status();
        let body: Value = response.json().await?;
        if !http_status.is_success() {
            return Err(ApiError::Upstream {
                status: Some(http_status.as_u16()),
                payload: Some(body),
            });
        }
        Ok(body)
    }

    pub(crate) async fn do_fetch_message_content(
        &self,
        access_token: &str,
        account_id: &str,
        folder_id: &str,
        message_id: &str,
    ) -> Result<String, ApiError> {
        let content_url = format!(
            "{}/api/accounts/{}/folders/{}/messages/{}/content",
            self.mail_base, account_id, folder_id, message_id
        );
        let response = self
            .client
            .get(&content_url)
            .header(header::ACCEPT, "application/json")
            .header(header::AUTHORIZATION, Self::auth_header(access_token))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let payload = response.json::<Value>().await.ok();
            return Err(ApiError::Upstream {
                status: Some(status.as_u16()),
                payload,
            });
        }

        let content: MessageContentResponse = response.json().await?;
        Ok(content
            .data
            .and_then(|d| d.content)
            .unwrap_or_default())
    }
}
