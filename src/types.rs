use serde::{Deserialize, Serialize};

// Caller-facing request bodies.

#[derive(Debug, Deserialize)]
pub struct OauthCallbackQuery {
    pub code: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SendEmailRequest {
    #[serde(rename = "refreshToken")]
    pub refresh_token: Option<String>,
    #[serde(rename = "fromAddress")]
    pub from_address: Option<String>,
    #[serde(rename = "toAddress")]
    pub to_address: Option<String>,
    pub subject: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UnreadEmailsRequest {
    #[serde(rename = "refreshToken")]
    pub refresh_token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListEmailsRequest {
    #[serde(rename = "refreshToken")]
    pub refresh_token: Option<String>,
    pub status: Option<String>,
}

// Transient values produced by the OAuth exchange. Never persisted; the
// caller stores the refresh token and resends it on every request.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

// The message fields forwarded verbatim to the Zoho send endpoint. Fields the
// caller omitted stay absent from the upstream payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutgoingMessage {
    #[serde(rename = "fromAddress", skip_serializing_if = "Option::is_none")]
    pub from_address: Option<String>,
    #[serde(rename = "toAddress", skip_serializing_if = "Option::is_none")]
    pub to_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

// Upstream response shapes. Everything is optional; Zoho omits fields freely.

#[derive(Debug, Deserialize)]
pub struct AccountsResponse {
    pub data: Option<Vec<Account>>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Account {
    #[serde(rename = "accountId")]
    pub account_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MessageListResponse {
    pub data: Option<Vec<MessageEntry>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MessageEntry {
    pub sender: Option<String>,
    #[serde(rename = "fromAddress")]
    pub from_address: Option<String>,
    pub subject: Option<String>,
    pub summary: Option<String>,
    #[serde(rename = "folderId")]
    pub folder_id: Option<String>,
    #[serde(rename = "messageId")]
    pub message_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MessageContentResponse {
    pub data: Option<MessageContent>,
}

#[derive(Debug, Deserialize)]
pub struct MessageContent {
    pub content: Option<String>,
}

// Caller-facing projections.

#[derive(Debug, Serialize, PartialEq)]
pub struct EmailSummary {
    pub sender: Option<String>,
    #[serde(rename = "fromAddress")]
    pub from_address: Option<String>,
    pub subject: Option<String>,
    pub summary: Option<String>,
}

impl From<MessageEntry> for EmailSummary {
    fn from(entry: MessageEntry) -> Self {
        EmailSummary {
            sender: entry.sender,
            from_address: entry.from_address,
            subject: entry.subject,
            summary: entry.summary,
        }
    }
}

#[derive(Debug, Serialize, PartialEq)]
pub struct EmailDetail {
    #[serde(rename = "mailContent")]
    pub mail_content: String,
    pub sender: Option<String>,
    #[serde(rename = "fromAddress")]
    pub from_address: Option<String>,
    pub subject: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_summary_drops_extra_fields() {
        let entry = MessageEntry {
            sender: Some("Ada Lovelace".to_string()),
            from_address: Some("ada@example.com".to_string()),
            subject: Some("Engines".to_string()),
            summary: Some("Notes on the analytical engine".to_string()),
            folder_id: Some("2000000000000008014".to_string()),
            message_id: Some("1700000000000010001".to_string()),
        };

        let value = serde_json::to_value(EmailSummary::from(entry)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "sender": "Ada Lovelace",
                "fromAddress": "ada@example.com",
                "subject": "Engines",
                "summary": "Notes on the analytical engine",
            })
        );
    }

    #[test]
    fn test_outgoing_message_omits_missing_fields() {
        let message = OutgoingMessage {
            from_address: Some("me@example.com".to_string()),
            to_address: Some("you@example.com".to_string()),
            subject: None,
            content: None,
        };

        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "fromAddress": "me@example.com",
                "toAddress": "you@example.com",
            })
        );
    }
}
