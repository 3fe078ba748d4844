use reqwest::header;
use serde_json::Value;
use tracing::debug;

use crate::error::ApiError;
use crate::types::{Account, AccountsResponse};

use super::ZohoClient;

impl ZohoClient {
    // Resolve the caller's mail account: list accounts, take the first entry.
    // Re-resolved on every operation; the account id is never cached.
    pub(crate) async fn do_first_account(
        &self,
        access_token: &str,
    ) -> Result<Option<Account>, ApiError> {
        let accounts_url = format!("{}/api/accounts", self.mail_base);
        let response = self
            .client
            .get(&accounts_url)
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

        let accounts: AccountsResponse = response.json().await?;
        let account = accounts.data.unwrap_or_default().into_iter().next();
        if let Some(account) = &account {
            debug!("resolved account id {:?}", account.account_id);
        }
        Ok(account)
    }
}
