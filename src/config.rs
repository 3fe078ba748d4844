use std::env;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct ZohoCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}

impl ZohoCredentials {
    // Read the client credentials once at startup. Missing variables abort
    // startup instead of sending empty values upstream.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        Ok(ZohoCredentials {
            client_id: require_var("ZOHO_MAIL_CLIENT_ID")?,
            client_secret: require_var("ZOHO_MAIL_CLIENT_SECRET")?,
            redirect_uri: require_var("ZOHO_MAIL_REDIRECT_URI")?,
        })
    }
}

fn require_var(name: &str) -> Result<String, Box<dyn std::error::Error>> {
    env::var(name).map_err(|_| format!("missing required environment variable {}", name).into())
}
