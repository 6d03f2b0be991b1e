use crate::config::POLL_INTERVAL;
use crate::detector::ChangeDetector;
use crate::error::PollError;
use crate::publisher::Publisher;
use crate::results::{self, ParsedResults};
use crate::source::ResultsSource;
use chrono::{DateTime, Utc};
use log::{debug, error, info};
use tokio::time::{interval, MissedTickBehavior};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// Same bytes as last time; nothing was posted.
    Unchanged,
    /// A new payload was posted with this text.
    Posted(String),
}

pub struct ResultsPoller<S, P> {
    source: S,
    detector: ChangeDetector,
    publisher: P,
}

impl<S: ResultsSource, P: Publisher> ResultsPoller<S, P> {
    pub fn new(source: S, detector: ChangeDetector, publisher: P) -> Self {
        Self {
            source,
            detector,
            publisher,
        }
    }

    /// One fetch/compare/parse/post pass.
    ///
    /// The payload is recorded as seen before it is parsed or posted, so a
    /// payload whose post fails is not retried on later polls. Duplicate
    /// posts are avoided at the cost of at-most-once delivery.
    pub async fn poll_once(&self) -> Result<PollOutcome, PollError> {
        let payload = self.source.fetch().await?;
        if self.detector.is_unchanged(&payload) {
            return Ok(PollOutcome::Unchanged);
        }
        self.detector.record(&payload);

        let ParsedResults {
            snapshot,
            real_timestamp,
        } = results::parse(&payload)?;
        let text = results::render(&snapshot);

        match DateTime::<Utc>::from_timestamp(real_timestamp, 0) {
            Some(at) => info!("New results as of {}:\n{}", at.to_rfc3339(), text),
            None => info!("New results (timestamp {}):\n{}", real_timestamp, text),
        }

        self.publisher.publish(&text).await?;
        info!("Results update tweet posted");
        Ok(PollOutcome::Posted(text))
    }

    /// Polls forever. A poll always finishes before the next one starts.
    pub async fn run(self) {
        info!(
            "Starting results poller, checking every {} seconds...",
            POLL_INTERVAL.as_secs()
        );
        let mut interval = interval(POLL_INTERVAL);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            interval.tick().await;
            match self.poll_once().await {
                Ok(PollOutcome::Unchanged) => debug!("Results unchanged since last poll"),
                Ok(PollOutcome::Posted(text)) => {
                    debug!("Posted update of {} characters", text.chars().count())
                }
                Err(e) => error!("{}", e),
            }
        }
    }
}
