pub mod oauth;

use crate::config::Credentials;
use crate::error::PublishError;
use async_trait::async_trait;
use log::debug;
use oauth::RequestNonce;
use serde::Serialize;

/// Sends a finished text update somewhere people will read it.
#[async_trait]
pub trait Publisher: Send + Sync {
    async fn publish(&self, text: &str) -> Result<(), PublishError>;
}

#[derive(Debug, Serialize)]
struct NewTweet<'a> {
    text: &'a str,
}

/// Posts tweets with user-context OAuth 1.0a credentials.
pub struct TwitterPublisher {
    credentials: Credentials,
    post_url: String,
    client: reqwest::Client,
}

impl TwitterPublisher {
    pub fn new(credentials: Credentials, post_url: String, client: reqwest::Client) -> Self {
        Self {
            credentials,
            post_url,
            client,
        }
    }
}

#[async_trait]
impl Publisher for TwitterPublisher {
    async fn publish(&self, text: &str) -> Result<(), PublishError> {
        let authorization = oauth::authorization_header(
            &self.credentials,
            "POST",
            &self.post_url,
            &[],
            &RequestNonce::generate(),
        );

        let response = self
            .client
            .post(&self.post_url)
            .header(reqwest::header::AUTHORIZATION, authorization)
            .json(&NewTweet { text })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PublishError::Rejected { status, body });
        }

        debug!("Posting API accepted update with status {}", status);
        Ok(())
    }
}
