use crate::error::PollError;
use async_trait::async_trait;

/// Somewhere the raw results payload can be pulled from.
#[async_trait]
pub trait ResultsSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<u8>, PollError>;
}

/// Plain unauthenticated GET against the results endpoint.
pub struct HttpResultsSource {
    url: String,
    client: reqwest::Client,
}

impl HttpResultsSource {
    pub fn new(url: String, client: reqwest::Client) -> Self {
        Self { url, client }
    }
}

#[async_trait]
impl ResultsSource for HttpResultsSource {
    async fn fetch(&self) -> Result<Vec<u8>, PollError> {
        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(PollError::FetchStatus(response.status()));
        }

        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}
