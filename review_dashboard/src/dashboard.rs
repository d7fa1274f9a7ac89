//! Render-cycle orchestration: one concurrent fetch, transform, render
//! pipeline per panel.
//!
//! The entry point is [`render_dashboard`]. It is free of any host-lifecycle
//! coupling: the embedding environment calls it whenever it wants a render
//! cycle, hands in a [`ReviewMetricsSource`] and a [`PanelRenderer`], and
//! gets back a per-panel outcome report. Pipelines are fully independent;
//! a failed panel is reported and left unrendered while the others complete.

use async_trait::async_trait;
use futures::future::join_all;
use thiserror::Error;
use tracing::{debug, error};

use crate::client::ReviewMetricsSource;
use crate::client::errors::FetchError;
use crate::models::granularity::Granularity;
use crate::models::panel::{PanelKind, PanelSpec};
use crate::panels;

/// An error surfaced by a rendering surface.
#[derive(Debug, Error)]
#[error("render failed: {0}")]
pub struct RenderError(pub String);

impl RenderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Rendering boundary for dashboard panels.
///
/// Each panel owns a distinct display region; implementations receive every
/// panel's finished [`PanelSpec`] and route it to that panel's own target, so
/// no two pipelines contend for the same output.
#[async_trait]
pub trait PanelRenderer {
    /// Hands one chart-ready panel bundle to the display surface.
    async fn render(&self, spec: PanelSpec) -> Result<(), RenderError>;
}

/// Why a panel pipeline produced no rendered output.
#[derive(Debug, Error)]
pub enum PanelFailure {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Result of one panel's pipeline within a render cycle.
#[derive(Debug)]
pub struct PanelOutcome {
    pub kind: PanelKind,
    pub result: Result<(), PanelFailure>,
}

/// Per-panel outcomes of a full render cycle.
#[derive(Debug)]
pub struct DashboardReport {
    pub outcomes: Vec<PanelOutcome>,
}

impl DashboardReport {
    /// Number of panels that rendered.
    pub fn rendered(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    /// The panels that failed, with their causes.
    pub fn failures(&self) -> impl Iterator<Item = (PanelKind, &PanelFailure)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.kind, e)))
    }
}

/// Runs every panel pipeline concurrently and reports per-panel outcomes.
///
/// All pipelines are launched together on the calling task; suspension
/// happens only at the network boundary, and the transformers themselves are
/// synchronous. There is no ordering guarantee between panels: each is handed
/// to the renderer as soon as its own fetch completes. There is no
/// cancellation or timeout; a pipeline runs to completion or failure, and no
/// failure is fatal to the cycle.
pub async fn render_dashboard<S, R>(source: &S, renderer: &R, freq: Granularity) -> DashboardReport
where
    S: ReviewMetricsSource + Sync + ?Sized,
    R: PanelRenderer + Sync + ?Sized,
{
    let pipelines = PanelKind::ALL
        .iter()
        .map(|kind| run_panel(source, renderer, *kind, freq));
    DashboardReport {
        outcomes: join_all(pipelines).await,
    }
}

async fn run_panel<S, R>(
    source: &S,
    renderer: &R,
    kind: PanelKind,
    freq: Granularity,
) -> PanelOutcome
where
    S: ReviewMetricsSource + Sync + ?Sized,
    R: PanelRenderer + Sync + ?Sized,
{
    let result = match fetch_and_transform(source, kind, freq).await {
        Ok(spec) => renderer.render(spec).await.map_err(PanelFailure::from),
        Err(e) => Err(PanelFailure::from(e)),
    };

    match &result {
        Ok(()) => debug!(panel = %kind, "panel rendered"),
        Err(e) => error!(panel = %kind, error = %e, "panel pipeline aborted"),
    }

    PanelOutcome { kind, result }
}

/// Fetches one panel's records and shapes them into its [`PanelSpec`].
///
/// This is the declarative dispatch from panel kind to resource and
/// transformer; embedding environments that drive their own rendering can
/// call it directly instead of [`render_dashboard`].
pub async fn fetch_and_transform<S>(
    source: &S,
    kind: PanelKind,
    freq: Granularity,
) -> Result<PanelSpec, FetchError>
where
    S: ReviewMetricsSource + Sync + ?Sized,
{
    let spec = match kind {
        PanelKind::TotalReviews => panels::total_reviews(&source.total_reviews().await?),
        PanelKind::ScoreDistribution => {
            panels::score_distribution(&source.score_distribution().await?)
        }
        PanelKind::SentimentRatio => panels::sentiment_ratio(&source.sentiment_ratio().await?),
        PanelKind::AverageScoreOverTime => {
            panels::average_score_over_time(&source.average_score_over_time(freq).await?)
        }
        PanelKind::ReviewsByVersion => {
            panels::reviews_by_version(&source.reviews_by_version().await?)
        }
        PanelKind::ThumbsUpDistribution => {
            panels::thumbs_up_distribution(&source.thumbs_up_distribution().await?)
        }
        PanelKind::CombinedSentimentAverage => {
            panels::combined_sentiment_average(&source.combined_sentiment_average().await?)
        }
        PanelKind::ReviewFrequencyByHour => {
            panels::review_frequency_by_hour(&source.review_frequency_by_hour().await?)
        }
        PanelKind::SentimentTrendsByVersion => {
            panels::sentiment_trends_by_version(&source.sentiment_trends_by_version(freq).await?)
        }
        PanelKind::AverageThumbsUpPerSentiment => {
            panels::average_thumbs_up_per_sentiment(&source.average_thumbs_up_per_sentiment().await?)
        }
        PanelKind::MonthlyReviews => panels::monthly_reviews(&source.monthly_reviews().await?),
    };
    Ok(spec)
}
