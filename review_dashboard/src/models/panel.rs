//! Chart-ready panel structures handed to the rendering surface.
//!
//! A [`PanelSpec`] is the full bundle for one dashboard panel: which panel it
//! is plus either a scalar for direct display or a [`ChartData`] of category
//! labels and aligned numeric series. Everything here is `Serialize` so an
//! embedding surface can consume the bundles as JSON.

use std::fmt;

use serde::Serialize;

/// Identifies one dashboard panel and the service resource that feeds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelKind {
    TotalReviews,
    ScoreDistribution,
    SentimentRatio,
    AverageScoreOverTime,
    ReviewsByVersion,
    ThumbsUpDistribution,
    CombinedSentimentAverage,
    ReviewFrequencyByHour,
    SentimentTrendsByVersion,
    AverageThumbsUpPerSentiment,
    MonthlyReviews,
}

impl PanelKind {
    /// Every panel, in the order a render cycle launches them.
    pub const ALL: [PanelKind; 11] = [
        PanelKind::TotalReviews,
        PanelKind::ScoreDistribution,
        PanelKind::SentimentRatio,
        PanelKind::AverageScoreOverTime,
        PanelKind::ReviewsByVersion,
        PanelKind::ThumbsUpDistribution,
        PanelKind::CombinedSentimentAverage,
        PanelKind::ReviewFrequencyByHour,
        PanelKind::SentimentTrendsByVersion,
        PanelKind::AverageThumbsUpPerSentiment,
        PanelKind::MonthlyReviews,
    ];

    /// Resource path on the analytics service.
    pub fn path(&self) -> &'static str {
        match self {
            PanelKind::TotalReviews => "total_reviews",
            PanelKind::ScoreDistribution => "score_distribution",
            PanelKind::SentimentRatio => "sentiment_ratio",
            PanelKind::AverageScoreOverTime => "average_score_over_time",
            PanelKind::ReviewsByVersion => "reviews_by_version",
            PanelKind::ThumbsUpDistribution => "thumbs_up_distribution",
            PanelKind::CombinedSentimentAverage => "combined_sentiment_average",
            PanelKind::ReviewFrequencyByHour => "review_frequency_by_hour",
            PanelKind::SentimentTrendsByVersion => "sentiment_trends_by_version",
            PanelKind::AverageThumbsUpPerSentiment => "average_thumbs_up_per_sentiment",
            PanelKind::MonthlyReviews => "monthly_reviews",
        }
    }

    /// Whether the resource accepts the `freq` granularity parameter.
    pub fn takes_granularity(&self) -> bool {
        matches!(
            self,
            PanelKind::AverageScoreOverTime | PanelKind::SentimentTrendsByVersion
        )
    }

    /// Human-readable panel title.
    pub fn title(&self) -> &'static str {
        match self {
            PanelKind::TotalReviews => "Total Reviews",
            PanelKind::ScoreDistribution => "Score Distribution",
            PanelKind::SentimentRatio => "Sentiment Ratio",
            PanelKind::AverageScoreOverTime => "Average Score Over Time",
            PanelKind::ReviewsByVersion => "Reviews by Version",
            PanelKind::ThumbsUpDistribution => "Thumbs-Up Distribution",
            PanelKind::CombinedSentimentAverage => "Combined Sentiment Average",
            PanelKind::ReviewFrequencyByHour => "Review Frequency by Hour",
            PanelKind::SentimentTrendsByVersion => "Sentiment Trends by Version",
            PanelKind::AverageThumbsUpPerSentiment => "Average Thumbs-Up per Sentiment",
            PanelKind::MonthlyReviews => "Monthly Reviews",
        }
    }
}

impl fmt::Display for PanelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Axis a series is plotted against.
///
/// Secondary is only meaningful for dual-axis panels (counts as bars on the
/// primary axis, averages as a line on the secondary).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    #[default]
    Primary,
    Secondary,
}

/// One plotted series, index-aligned with its panel's labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericSeries {
    /// Display name shown in the chart legend.
    pub name: String,
    pub values: Vec<f64>,
    pub axis: Axis,
}

impl NumericSeries {
    /// A series on the primary axis.
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
            axis: Axis::Primary,
        }
    }

    /// A series assigned to the secondary axis.
    pub fn secondary(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
            axis: Axis::Secondary,
        }
    }
}

/// Category labels plus aligned numeric series for one chart.
///
/// Invariant: `values.len() == labels.len()` for every series. Label order is
/// whatever the upstream response carried (or first-seen order for the
/// version pivot); it is never re-sorted here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub series: Vec<NumericSeries>,
    /// Whether the series stack on one axis instead of sitting side by side.
    pub stacked: bool,
}

/// Payload of one panel: a scalar for direct display, or chart data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelData {
    Scalar(u64),
    Chart(ChartData),
}

/// The full chart-ready bundle for one panel, immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelSpec {
    pub kind: PanelKind,
    pub data: PanelData,
}

impl PanelSpec {
    /// Chart data of this spec, if it is chart-bound.
    pub fn chart(&self) -> Option<&ChartData> {
        match &self.data {
            PanelData::Chart(chart) => Some(chart),
            PanelData::Scalar(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_distinct() {
        let mut paths: Vec<&str> = PanelKind::ALL.iter().map(|k| k.path()).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), PanelKind::ALL.len());
    }

    #[test]
    fn only_time_bucketed_panels_take_granularity() {
        let with_freq: Vec<PanelKind> = PanelKind::ALL
            .into_iter()
            .filter(PanelKind::takes_granularity)
            .collect();
        assert_eq!(
            with_freq,
            [
                PanelKind::AverageScoreOverTime,
                PanelKind::SentimentTrendsByVersion
            ]
        );
    }

    #[test]
    fn serializes_as_chart_surface_json() {
        let spec = PanelSpec {
            kind: PanelKind::ScoreDistribution,
            data: PanelData::Chart(ChartData {
                labels: vec!["Star 5".into()],
                series: vec![NumericSeries::new("Review Count", vec![120.0])],
                stacked: false,
            }),
        };
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["kind"], "score_distribution");
        assert_eq!(json["data"]["chart"]["labels"][0], "Star 5");
        assert_eq!(json["data"]["chart"]["series"][0]["axis"], "primary");
    }
}
