mod config;
mod detector;
mod error;
mod models;
mod publisher;
mod results;
mod source;
mod tasks;
#[cfg(test)]
mod test_utils;

use config::Config;
use detector::ChangeDetector;
use log::{error, info};
use publisher::TwitterPublisher;
use source::HttpResultsSource;
use tasks::results_poller::ResultsPoller;

#[tokio::main]
async fn main() {
    // Initialize logging
    dotenvy::dotenv().ok();
    env_logger::init();

    // Credentials are required before anything touches the network
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let detector = ChangeDetector::new(config.last_fetch_file);
    info!(
        "Watching {} (last fetch stored in {})",
        config.results_url,
        detector.path().display()
    );

    let client = reqwest::Client::new();
    let source = HttpResultsSource::new(config.results_url, client.clone());
    let publisher = TwitterPublisher::new(config.credentials, config.twitter_post_url, client);

    ResultsPoller::new(source, detector, publisher).run().await;
}
