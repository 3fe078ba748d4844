use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use futures::future::join_all;
use serde_json::{json, Value};
use tracing::error;

use crate::email_content::html_to_text;
use crate::error::ApiError;
use crate::types::{
    EmailDetail, EmailSummary, ListEmailsRequest, MessageEntry, MessageListResponse,
    OauthCallbackQuery, OutgoingMessage, SendEmailRequest, UnreadEmailsRequest,
};
use crate::zoho_api::ZohoApi;

pub const LIST_LIMIT: u32 = 20;
pub const CONTENT_FETCH_LIMIT: u32 = 5;
pub const CONTENT_FETCH_ERROR: &str = "Error fetching email content";
pub const EMPTY_LIST_MESSAGE: &str = "No unread emails found";

#[derive(Clone)]
pub struct AppState {
    pub zoho: Arc<dyn ZohoApi>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/zoho/oauth/callback", get(oauth_callback))
        .route("/zoho/send-email", post(send_email))
        .route("/zoho/unread-emails", post(unread_emails))
        .route("/zoho/list-emails", post(list_emails))
        .route("/zoho/get-mail-content", post(get_mail_content))
        .with_state(state)
}

async fn oauth_callback(
    State(state): State<AppState>,
    Query(query): Query<OauthCallbackQuery>,
) -> Result<Json<Value>, ApiError> {
    let code = query
        .code
        .filter(|code| !code.is_empty())
        .ok_or_else(|| ApiError::ClientInput("Authorization code not provided".to_string()))?;

    // The callback always reports upstream failures as 500, with the
    // upstream payload when one came back.
    let tokens = match state.zoho.exchange_code(&code).await {
        Ok(tokens) => tokens,
        Err(ApiError::Upstream { payload, .. }) => {
            return Err(ApiError::Upstream {
                status: Some(500),
                payload: Some(payload.unwrap_or_else(|| Value::String("OAuth Error".to_string()))),
            });
        }
        Err(err) => return Err(err),
    };

    Ok(Json(json!({
        "message": "OAuth successful",
        "accessToken": tokens.access_token,
        "refreshToken": tokens.refresh_token,
    })))
}

async fn send_email(
    State(state): State<AppState>,
    Json(body): Json<SendEmailRequest>,
) -> Result<Json<Value>, ApiError> {
    let refresh_token = require_refresh_token(body.refresh_token.as_deref())?;
    let access_token = state.zoho.refresh_access_token(refresh_token).await;
    let account_id = required_account_id(state.zoho.as_ref(), &access_token).await?;

    let message = OutgoingMessage {
        from_address: body.from_address,
        to_address: body.to_address,
        subject: body.subject,
        content: body.content,
    };
    let result = state
        .zoho
        .send_message(&access_token, &account_id, message)
        .await?;
    Ok(Json(result))
}

// Legacy listing route: status hardcoded to unread, raw upstream body under
// `data`.
async fn unread_emails(
    State(state): State<AppState>,
    Json(body): Json<UnreadEmailsRequest>,
) -> Result<Json<Value>, ApiError> {
    let refresh_token = require_refresh_token(body.refresh_token.as_deref())?;
    let access_token = state.zoho.refresh_access_token(refresh_token).await;
    let account_id = required_account_id(state.zoho.as_ref(), &access_token).await?;

    let listing = state
        .zoho
        .list_messages(&access_token, &account_id, "unread", LIST_LIMIT)
        .await?;
    Ok(Json(json!({ "data": listing })))
}

async fn list_emails(
    State(state): State<AppState>,
    Json(body): Json<ListEmailsRequest>,
) -> Result<Json<Value>, ApiError> {
    let refresh_token = require_refresh_token(body.refresh_token.as_deref())?;
    let status = body.status.unwrap_or_else(|| "unread".to_string());
    let access_token = state.zoho.refresh_access_token(refresh_token).await;
    let account_id = required_account_id(state.zoho.as_ref(), &access_token).await?;

    let listing = state
        .zoho
        .list_messages(&access_token, &account_id, &status, LIST_LIMIT)
        .await?;
    let summaries: Vec<EmailSummary> = parse_entries(&listing)
        .into_iter()
        .map(EmailSummary::from)
        .collect();
    Ok(Json(json!({ "data": summaries })))
}

async fn get_mail_content(
    State(state): State<AppState>,
    Json(body): Json<ListEmailsRequest>,
) -> Result<Response, ApiError> {
    let refresh_token = require_refresh_token(body.refresh_token.as_deref())?;
    let status = body.status.unwrap_or_else(|| "unread".to_string());
    let access_token = state.zoho.refresh_access_token(refresh_token).await;

    let account = state.zoho.first_account(&access_token).await?;
    let account_id = account
        .and_then(|account| account.account_id)
        .ok_or_else(|| ApiError::ClientInput("No email account found".to_string()))?;

    let listing = state
        .zoho
        .list_messages(&access_token, &account_id, &status, CONTENT_FETCH_LIMIT)
        .await?;
    let entries = parse_entries(&listing);
    if entries.is_empty() {
        return Ok(Json(json!({ "message": EMPTY_LIST_MESSAGE, "data": [] })).into_response());
    }

    // Fan out the per-message content fetches. Each one degrades its own
    // failure to a placeholder body, so every listed message stays in the
    // response.
    let fetches = entries.into_iter().map(|entry| {
        let zoho = Arc::clone(&state.zoho);
        let access_token = access_token.clone();
        let account_id = account_id.clone();
        async move {
            let folder_id = entry.folder_id.clone().unwrap_or_default();
            let message_id = entry.message_id.clone().unwrap_or_default();
            let mail_content = match zoho
                .fetch_message_content(&access_token, &account_id, &folder_id, &message_id)
                .await
            {
                Ok(html) => html_to_text(&html),
                Err(err) => {
                    error!("error fetching content for message {}: {}", message_id, err);
                    CONTENT_FETCH_ERROR.to_string()
                }
            };
            EmailDetail {
                mail_content,
                sender: entry.sender,
                from_address: entry.from_address,
                subject: entry.subject,
            }
        }
    });
    let details: Vec<EmailDetail> = join_all(fetches).await;

    Ok(Json(json!({ "data": details })).into_response())
}

fn require_refresh_token(refresh_token: Option<&str>) -> Result<&str, ApiError> {
    match refresh_token {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(ApiError::ClientInput(
            "Access token not provided".to_string(),
        )),
    }
}

// Send and list surface a missing account as the generic 500; only the
// content fetch reports it as a client error.
async fn required_account_id(zoho: &dyn ZohoApi, access_token: &str) -> Result<String, ApiError> {
    let account = zoho.first_account(access_token).await?;
    account
        .and_then(|account| account.account_id)
        .ok_or(ApiError::Upstream {
            status: None,
            payload: None,
        })
}

fn parse_entries(listing: &Value) -> Vec<MessageEntry> {
    serde_json::from_value::<MessageListResponse>(listing.clone())
        .ok()
        .and_then(|response| response.data)
        .unwrap_or_default()
}
