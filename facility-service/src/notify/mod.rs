use async_trait::async_trait;

use crate::config::TwilioConfig;

const DEFAULT_API_BASE: &str = "https://api.twilio.com";

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("sms transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("sms gateway rejected the message: status {0}")]
    Rejected(reqwest::StatusCode),
}

/// Outbound SMS channel. Implementations return the gateway's delivery
/// identifier on success.
#[async_trait]
pub trait SmsNotifier: Send + Sync {
    async fn send(&self, to: &str, body: &str) -> Result<String, NotifyError>;
}

/// Twilio REST messaging client.
pub struct TwilioNotifier {
    http: reqwest::Client,
    account_sid: String,
    auth_token: String,
    from_number: String,
    api_base: String,
}

impl TwilioNotifier {
    pub fn from_config(cfg: &TwilioConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            account_sid: cfg.account_sid.clone(),
            auth_token: cfg.auth_token.clone(),
            from_number: cfg.from_number.clone(),
            api_base: cfg
                .api_base
                .clone()
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
        }
    }
}

#[derive(serde::Deserialize)]
struct MessageResponse {
    sid: String,
}

#[async_trait]
impl SmsNotifier for TwilioNotifier {
    async fn send(&self, to: &str, body: &str) -> Result<String, NotifyError> {
        let url = format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.api_base, self.account_sid
        );
        let params = [
            ("To", to),
            ("From", self.from_number.as_str()),
            ("Body", body),
        ];

        let response = self
            .http
            .post(&url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(NotifyError::Rejected(response.status()));
        }

        let message: MessageResponse = response.json().await?;
        Ok(message.sid)
    }
}
