#![cfg(test)]
//! Smoke test against a live analytics service. Ignored by default; run with
//! `REVIEW_DASHBOARD_BASE_URL` pointing at a running service.

use review_dashboard::client::ReviewMetricsSource;
use review_dashboard::client::http::HttpReviewMetricsClient;
use review_dashboard::config::BASE_URL_ENV;

#[tokio::test]
#[ignore]
async fn fetches_the_review_total_from_a_live_service() {
    if std::env::var(BASE_URL_ENV).is_err() {
        println!("Skipping live smoke test: {BASE_URL_ENV} not set.");
        return;
    }

    let client = HttpReviewMetricsClient::from_env().expect("failed to create client");

    let result = client.total_reviews().await;
    assert!(
        result.is_ok(),
        "total_reviews returned an error: {:?}",
        result.err()
    );
}
