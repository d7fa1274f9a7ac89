use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::DashboardConfig;
use crate::models::granularity::Granularity;
use crate::models::panel::PanelKind;
use crate::models::records::{
    CombinedSentimentAverage, HourlyFrequency, MonthlyReviews, PeriodAverageScore, ScoreBucket,
    SentimentRatio, SentimentThumbsAverage, SentimentTrendPoint, ThumbsUpBucket, TotalReviews,
    VersionBreakdown,
};

use super::ReviewMetricsSource;
use super::errors::{ClientInitError, FetchError, FetchErrorKind};

/// HTTP implementation of [`ReviewMetricsSource`] against the analytics
/// service.
///
/// One shared connection pool serves all panels; each call issues a single
/// GET against the service's base URL plus the panel's resource path.
pub struct HttpReviewMetricsClient {
    client: Client,
    base_url: String,
}

impl HttpReviewMetricsClient {
    /// Creates a client for the service at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientInitError> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Creates a client from a resolved [`DashboardConfig`].
    pub fn from_config(config: &DashboardConfig) -> Result<Self, ClientInitError> {
        Self::new(config.base_url.clone())
    }

    /// Creates a client from the environment (see
    /// [`DashboardConfig::from_env`]).
    pub fn from_env() -> Result<Self, ClientInitError> {
        let config = DashboardConfig::from_env()?;
        Self::from_config(&config)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: PanelKind,
        query: &[(&str, &str)],
    ) -> Result<T, FetchError> {
        let url = format!("{}/{}", self.base_url, endpoint.path());
        debug!(%endpoint, "fetching panel records");

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| FetchError::new(endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown service error".to_string());
            return Err(FetchError::new(
                endpoint,
                FetchErrorKind::Api(format!("{status}: {body}")),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::new(endpoint, e))?;
        serde_json::from_str(&body).map_err(|e| FetchError::new(endpoint, e))
    }
}

#[async_trait]
impl ReviewMetricsSource for HttpReviewMetricsClient {
    async fn total_reviews(&self) -> Result<TotalReviews, FetchError> {
        self.get_json(PanelKind::TotalReviews, &[]).await
    }

    async fn score_distribution(&self) -> Result<Vec<ScoreBucket>, FetchError> {
        self.get_json(PanelKind::ScoreDistribution, &[]).await
    }

    async fn sentiment_ratio(&self) -> Result<SentimentRatio, FetchError> {
        self.get_json(PanelKind::SentimentRatio, &[]).await
    }

    async fn average_score_over_time(
        &self,
        freq: Granularity,
    ) -> Result<Vec<PeriodAverageScore>, FetchError> {
        self.get_json(PanelKind::AverageScoreOverTime, &[("freq", freq.code())])
            .await
    }

    async fn reviews_by_version(&self) -> Result<Vec<VersionBreakdown>, FetchError> {
        self.get_json(PanelKind::ReviewsByVersion, &[]).await
    }

    async fn thumbs_up_distribution(&self) -> Result<Vec<ThumbsUpBucket>, FetchError> {
        self.get_json(PanelKind::ThumbsUpDistribution, &[]).await
    }

    async fn combined_sentiment_average(&self) -> Result<CombinedSentimentAverage, FetchError> {
        self.get_json(PanelKind::CombinedSentimentAverage, &[]).await
    }

    async fn review_frequency_by_hour(&self) -> Result<Vec<HourlyFrequency>, FetchError> {
        self.get_json(PanelKind::ReviewFrequencyByHour, &[]).await
    }

    async fn sentiment_trends_by_version(
        &self,
        freq: Granularity,
    ) -> Result<Vec<SentimentTrendPoint>, FetchError> {
        self.get_json(
            PanelKind::SentimentTrendsByVersion,
            &[("freq", freq.code())],
        )
        .await
    }

    async fn average_thumbs_up_per_sentiment(
        &self,
    ) -> Result<Vec<SentimentThumbsAverage>, FetchError> {
        self.get_json(PanelKind::AverageThumbsUpPerSentiment, &[])
            .await
    }

    async fn monthly_reviews(&self) -> Result<MonthlyReviews, FetchError> {
        self.get_json(PanelKind::MonthlyReviews, &[]).await
    }
}
