//! Zoho API module split into logical submodules
//!
//! - auth: OAuth code exchange and access-token refresh
//! - accounts: mail account resolution
//! - messages: message listing, content fetch, and send

pub mod accounts;
pub mod auth;
pub mod messages;

use async_trait::async_trait;
use serde_json::Value;

use crate::config::ZohoCredentials;
use crate::error::ApiError;
use crate::types::{Account, OutgoingMessage, TokenPair};

pub const ZOHO_ACCOUNTS_BASE: &str = "https://accounts.zoho.com";
pub const ZOHO_MAIL_BASE: &str = "https://mail.zoho.com";

// Every upstream call the relay makes, behind one seam so handlers can be
// tested without the network.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ZohoApi: Send + Sync {
    /// Exchange an authorization code for an access/refresh token pair.
    async fn exchange_code(&self, code: &str) -> Result<TokenPair, ApiError>;

    /// Exchange a refresh token for a fresh access token. Degrades to an
    /// empty string on failure; callers proceed and let the next upstream
    /// call surface the authorization error.
    async fn refresh_access_token(&self, refresh_token: &str) -> String;

    /// First account of the caller's account list, if any. Not cached.
    async fn first_account(&self, access_token: &str) -> Result<Option<Account>, ApiError>;

    /// Post a message to the account's send endpoint, returning the upstream
    /// response body verbatim.
    async fn send_message(
        &self,
        access_token: &str,
        account_id: &str,
        message: OutgoingMessage,
    ) -> Result<Value, ApiError>;

    /// Raw message-view listing filtered by status with a page-size limit.
    async fn list_messages(
        &self,
        access_token: &str,
        account_id: &str,
        status: &str,
        limit: u32,
    ) -> Result<Value, ApiError>;

    /// HTML body of one message, keyed by folder id and message id.
    async fn fetch_message_content(
        &self,
        access_token: &str,
        account_id: &str,
        folder_id: &str,
        message_id: &str,
    ) -> Result<String, ApiError>;
}

pub struct ZohoClient {
    client: reqwest::Client,
    credentials: ZohoCredentials,
    accounts_base: String,
    mail_base: String,
}

impl ZohoClient {
    pub fn new(credentials: ZohoCredentials) -> Self {
        Self::with_base_urls(credentials, ZOHO_ACCOUNTS_BASE, ZOHO_MAIL_BASE)
    }

    // Base URLs are injectable so tests can point the client at a local mock
    // server.
    pub fn with_base_urls(
        credentials: ZohoCredentials,
        accounts_base: &str,
        mail_base: &str,
    ) -> Self {
        ZohoClient {
            client: reqwest::Client::new(),
            credentials,
            accounts_base: accounts_base.to_string(),
            mail_base: mail_base.to_string(),
        }
    }

    // Zoho's bearer scheme; every mail API call carries it.
    pub(crate) fn auth_header(access_token: &str) -> String {
        format!("Zoho-oauthtoken {}", access_token)
    }
}

#[async_trait]
impl ZohoApi for ZohoClient {
    async fn exchange_code(&self, code: &str) -> Result<TokenPair, ApiError> {
        self.do_exchange_code(code).await
    }

    async fn refresh_access_token(&self, refresh_token: &str) -> String {
        self.do_refresh_access_token(refresh_token).await
    }

    async fn first_account(&self, access_token: &str) -> Result<Option<Account>, ApiError> {
        self.do_first_account(access_token).await
    }

    async fn send_message(
        &self,
        access_token: &str,
        account_id: &str,
        message: OutgoingMessage,
    ) -> Result<Value, ApiError> {
        self.do_send_message(access_token, account_id, message).await
    }

    async fn list_messages(
        &self,
        access_token: &str,
        account_id: &str,
        status: &str,
        limit: u32,
    ) -> Result<Value, ApiError> {
        self.do_list_messages(access_token, account_id, status, limit)
            .await
    }

    async fn fetch_message_content(
        &self,
        access_token: &str,
        account_id: &str,
        folder_id: &str,
        message_id: &str,
    ) -> Result<String, ApiError> {
        self.do_fetch_message_content(access_token, account_id, folder_id, message_id)
            .await
    }
}
