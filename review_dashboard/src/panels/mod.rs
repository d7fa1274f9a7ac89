//! Panel transformers: one pure function per dashboard panel.
//!
//! Each transformer maps decoded service records to the chart-ready
//! [`PanelSpec`] for its panel. They never mutate their input, never perform
//! I/O, and are total over well-formed input: an empty record collection
//! produces an empty label/series pair, not an error. Upstream ordering is
//! preserved throughout; nothing here re-sorts.

pub mod assemble;

use tracing::warn;

use crate::models::panel::{ChartData, NumericSeries, PanelData, PanelKind, PanelSpec};
use crate::models::records::{
    CombinedSentimentAverage, HourlyFrequency, MonthlyReviews, PeriodAverageScore, ScoreBucket,
    SentimentRatio, SentimentThumbsAverage, SentimentTrendPoint, ThumbsUpBucket, TotalReviews,
    VersionBreakdown,
};
use assemble::{hour_label, month_label, pivot_sentiment_by_version, round2, star_label};

const REVIEW_COUNT: &str = "Review Count";
const AVERAGE_SCORE: &str = "Average Score";

fn chart(kind: PanelKind, labels: Vec<String>, series: Vec<NumericSeries>) -> PanelSpec {
    PanelSpec {
        kind,
        data: PanelData::Chart(ChartData {
            labels,
            series,
            stacked: false,
        }),
    }
}

/// Scalar review total, passed through unchanged for direct display.
pub fn total_reviews(record: &TotalReviews) -> PanelSpec {
    PanelSpec {
        kind: PanelKind::TotalReviews,
        data: PanelData::Scalar(record.total_reviews),
    }
}

/// Review count per star-score bucket, in upstream order.
pub fn score_distribution(records: &[ScoreBucket]) -> PanelSpec {
    let labels = records.iter().map(|r| star_label(r.score)).collect();
    let values = records.iter().map(|r| r.count as f64).collect();
    chart(
        PanelKind::ScoreDistribution,
        labels,
        vec![NumericSeries::new(REVIEW_COUNT, values)],
    )
}

/// Review count per sentiment name, keys in upstream iteration order.
///
/// The counts are used as proportions by the rendering surface; they are not
/// normalized here.
pub fn sentiment_ratio(ratio: &SentimentRatio) -> PanelSpec {
    let labels = ratio.keys().cloned().collect();
    let values = ratio.values().map(|&count| count as f64).collect();
    chart(
        PanelKind::SentimentRatio,
        labels,
        vec![NumericSeries::new(REVIEW_COUNT, values)],
    )
}

/// Average score per period, labeled at year-month precision and rounded to
/// two decimals. Missing periods stay missing; there is no gap-filling.
pub fn average_score_over_time(records: &[PeriodAverageScore]) -> PanelSpec {
    let labels = records.iter().map(|r| month_label(&r.at)).collect();
    let values = records.iter().map(|r| round2(r.average_score)).collect();
    chart(
        PanelKind::AverageScoreOverTime,
        labels,
        vec![NumericSeries::new(AVERAGE_SCORE, values)],
    )
}

/// Review counts and rounded average scores per application version, as two
/// series over one label axis: counts on the primary axis, averages on the
/// secondary.
pub fn reviews_by_version(records: &[VersionBreakdown]) -> PanelSpec {
    let labels = records.iter().map(|r| r.version.clone()).collect();
    let counts = records.iter().map(|r| r.review_count as f64).collect();
    let averages = records.iter().map(|r| round2(r.average_score)).collect();
    chart(
        PanelKind::ReviewsByVersion,
        labels,
        vec![
            NumericSeries::new(REVIEW_COUNT, counts),
            NumericSeries::secondary(AVERAGE_SCORE, averages),
        ],
    )
}

/// Frequency of each thumbs-up count, the engagement level itself serving as
/// the category label. No client-side binning.
pub fn thumbs_up_distribution(records: &[ThumbsUpBucket]) -> PanelSpec {
    let labels = records.iter().map(|r| r.thumbs_up.to_string()).collect();
    let values = records.iter().map(|r| r.count as f64).collect();
    chart(
        PanelKind::ThumbsUpDistribution,
        labels,
        vec![NumericSeries::new(REVIEW_COUNT, values)],
    )
}

/// Combined sentiment average split into a positive/negative proportion pair:
/// the scalar itself and its distance from the top of the 0-5 scale.
///
/// A score outside [0, 5] passes through unmodified; the complement then goes
/// negative, which is surfaced as a diagnostic rather than clamped away.
pub fn combined_sentiment_average(record: &CombinedSentimentAverage) -> PanelSpec {
    let score = record.average_combined_score;
    if !(0.0..=5.0).contains(&score) {
        warn!(score, "combined sentiment average outside the 0-5 scale");
    }
    chart(
        PanelKind::CombinedSentimentAverage,
        vec!["Positive".to_string(), "Négative".to_string()],
        vec![NumericSeries::new(
            "Combined Sentiment",
            vec![score, 5.0 - score],
        )],
    )
}

/// Review count per hour-of-day bucket. Hours absent upstream are absent
/// here too; there is no 0-23 gap-filling.
pub fn review_frequency_by_hour(records: &[HourlyFrequency]) -> PanelSpec {
    let labels = records.iter().map(|r| hour_label(r.hour)).collect();
    let values = records.iter().map(|r| r.review_count as f64).collect();
    chart(
        PanelKind::ReviewFrequencyByHour,
        labels,
        vec![NumericSeries::new(REVIEW_COUNT, values)],
    )
}

/// Sentiment mix per application version: the flat trend records pivoted
/// into three stacked series over one version axis.
pub fn sentiment_trends_by_version(records: &[SentimentTrendPoint]) -> PanelSpec {
    let pivot = pivot_sentiment_by_version(records);
    let counts_to_values = |counts: Vec<u64>| counts.into_iter().map(|c| c as f64).collect();
    PanelSpec {
        kind: PanelKind::SentimentTrendsByVersion,
        data: PanelData::Chart(ChartData {
            labels: pivot.versions,
            series: vec![
                NumericSeries::new("Positive", counts_to_values(pivot.positive)),
                NumericSeries::new("Negative", counts_to_values(pivot.negative)),
                NumericSeries::new("Neutral", counts_to_values(pivot.neutral)),
            ],
            stacked: true,
        }),
    }
}

/// Mean thumbs-up count per sentiment class, rounded to two decimals.
pub fn average_thumbs_up_per_sentiment(records: &[SentimentThumbsAverage]) -> PanelSpec {
    let labels = records.iter().map(|r| r.sentiment.to_string()).collect();
    let values = records.iter().map(|r| round2(r.average_thumbs_up)).collect();
    chart(
        PanelKind::AverageThumbsUpPerSentiment,
        labels,
        vec![NumericSeries::new("Average Thumbs Up", values)],
    )
}

/// Review count per month. The service ships the months and counts as
/// parallel arrays; a ragged pair is truncated to the shorter length so the
/// series stays aligned with its labels.
pub fn monthly_reviews(record: &MonthlyReviews) -> PanelSpec {
    let len = record.months.len().min(record.review_counts.len());
    let labels = record.months[..len].to_vec();
    let values = record.review_counts[..len]
        .iter()
        .map(|&count| count as f64)
        .collect();
    chart(
        PanelKind::MonthlyReviews,
        labels,
        vec![NumericSeries::new(REVIEW_COUNT, values)],
    )
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use super::*;
    use crate::models::panel::Axis;
    use crate::models::records::Sentiment;

    fn assert_aligned(spec: &PanelSpec) {
        let chart = spec.chart().expect("chart-bound panel");
        for series in &chart.series {
            assert_eq!(
                series.values.len(),
                chart.labels.len(),
                "series `{}` out of alignment for {}",
                series.name,
                spec.kind
            );
        }
    }

    #[test]
    fn total_reviews_passes_the_scalar_through() {
        let spec = total_reviews(&TotalReviews {
            total_reviews: 70_132,
        });
        assert_eq!(spec.kind, PanelKind::TotalReviews);
        assert_eq!(spec.data, PanelData::Scalar(70_132));
    }

    #[test]
    fn score_distribution_preserves_upstream_order() {
        let records = vec![
            ScoreBucket {
                score: 5,
                count: 120,
            },
            ScoreBucket { score: 1, count: 4 },
        ];

        let spec = score_distribution(&records);

        let chart = spec.chart().unwrap();
        assert_eq!(chart.labels, ["Star 5", "Star 1"]);
        assert_eq!(chart.series[0].values, [120.0, 4.0]);
        assert_aligned(&spec);
    }

    #[test]
    fn score_distribution_of_nothing_is_empty_not_an_error() {
        let spec = score_distribution(&[]);
        let chart = spec.chart().unwrap();
        assert!(chart.labels.is_empty());
        assert!(chart.series[0].values.is_empty());
    }

    #[test]
    fn sentiment_ratio_uses_key_iteration_order() {
        let mut ratio: SentimentRatio = IndexMap::new();
        ratio.insert("neutral".to_string(), 7);
        ratio.insert("positive".to_string(), 91);
        ratio.insert("negative".to_string(), 2);

        let spec = sentiment_ratio(&ratio);

        let chart = spec.chart().unwrap();
        assert_eq!(chart.labels, ["neutral", "positive", "negative"]);
        assert_eq!(chart.series[0].values, [7.0, 91.0, 2.0]);
    }

    #[test]
    fn average_score_truncates_periods_to_year_month_and_rounds() {
        let records = vec![
            PeriodAverageScore {
                at: "2021-01-31T00:00:00".parse().unwrap(),
                average_score: 4.1267,
            },
            PeriodAverageScore {
                at: "2021-02-28T00:00:00".parse().unwrap(),
                average_score: 3.875,
            },
        ];

        let spec = average_score_over_time(&records);

        let chart = spec.chart().unwrap();
        assert_eq!(chart.labels, ["2021-01", "2021-02"]);
        assert_eq!(chart.series[0].values, [4.13, 3.88]);
        assert_aligned(&spec);
    }

    #[test]
    fn reviews_by_version_pairs_counts_with_secondary_axis_averages() {
        let records = vec![
            VersionBreakdown {
                version: "4.1.0".to_string(),
                review_count: 250,
                average_score: 4.333,
            },
            VersionBreakdown {
                version: "4.2.0".to_string(),
                review_count: 80,
                average_score: 2.918,
            },
        ];

        let spec = reviews_by_version(&records);

        let chart = spec.chart().unwrap();
        assert_eq!(chart.labels, ["4.1.0", "4.2.0"]);
        assert_eq!(chart.series.len(), 2);
        assert_eq!(chart.series[0].name, REVIEW_COUNT);
        assert_eq!(chart.series[0].axis, Axis::Primary);
        assert_eq!(chart.series[0].values, [250.0, 80.0]);
        assert_eq!(chart.series[1].name, AVERAGE_SCORE);
        assert_eq!(chart.series[1].axis, Axis::Secondary);
        assert_eq!(chart.series[1].values, [4.33, 2.92]);
        assert_aligned(&spec);
    }

    #[test]
    fn thumbs_up_distribution_uses_counts_as_categories() {
        let records = vec![
            ThumbsUpBucket {
                thumbs_up: 0,
                count: 900,
            },
            ThumbsUpBucket {
                thumbs_up: 17,
                count: 3,
            },
        ];

        let spec = thumbs_up_distribution(&records);

        let chart = spec.chart().unwrap();
        assert_eq!(chart.labels, ["0", "17"]);
        assert_eq!(chart.series[0].values, [900.0, 3.0]);
    }

    #[test]
    fn combined_sentiment_average_splits_against_the_scale_top() {
        let spec = combined_sentiment_average(&CombinedSentimentAverage {
            average_combined_score: 3.75,
        });

        let chart = spec.chart().unwrap();
        assert_eq!(chart.labels, ["Positive", "Négative"]);
        assert_eq!(chart.series[0].values, [3.75, 1.25]);
    }

    #[test]
    fn combined_sentiment_average_passes_out_of_range_scores_through() {
        // No clamping: a complement below zero reaches the renderer as-is.
        let spec = combined_sentiment_average(&CombinedSentimentAverage {
            average_combined_score: 6.5,
        });

        let chart = spec.chart().unwrap();
        assert_eq!(chart.series[0].values, [6.5, -1.5]);
    }

    #[test]
    fn hour_frequency_does_not_gap_fill() {
        let records = vec![
            HourlyFrequency {
                hour: 0,
                review_count: 12,
            },
            HourlyFrequency {
                hour: 22,
                review_count: 41,
            },
        ];

        let spec = review_frequency_by_hour(&records);

        let chart = spec.chart().unwrap();
        assert_eq!(chart.labels, ["0:00", "22:00"]);
        assert_eq!(chart.series[0].values, [12.0, 41.0]);
    }

    #[test]
    fn sentiment_trends_pivot_into_three_stacked_series() {
        let records = vec![
            SentimentTrendPoint {
                version: "1.0".to_string(),
                sentiment: Sentiment::Positive,
                count: 3,
                at: None,
            },
            SentimentTrendPoint {
                version: "1.0".to_string(),
                sentiment: Sentiment::Negative,
                count: 1,
                at: None,
            },
            SentimentTrendPoint {
                version: "2.0".to_string(),
                sentiment: Sentiment::Positive,
                count: 5,
                at: None,
            },
        ];

        let spec = sentiment_trends_by_version(&records);

        let chart = spec.chart().unwrap();
        assert!(chart.stacked);
        assert_eq!(chart.labels, ["1.0", "2.0"]);
        assert_eq!(chart.series[0].name, "Positive");
        assert_eq!(chart.series[0].values, [3.0, 5.0]);
        assert_eq!(chart.series[1].name, "Negative");
        assert_eq!(chart.series[1].values, [1.0, 0.0]);
        assert_eq!(chart.series[2].name, "Neutral");
        assert_eq!(chart.series[2].values, [0.0, 0.0]);
        assert_aligned(&spec);
    }

    #[test]
    fn sentiment_trends_of_nothing_yield_three_empty_series() {
        let spec = sentiment_trends_by_version(&[]);
        let chart = spec.chart().unwrap();
        assert!(chart.labels.is_empty());
        assert_eq!(chart.series.len(), 3);
        assert_aligned(&spec);
    }

    #[test]
    fn average_thumbs_up_per_sentiment_labels_by_class() {
        let records = vec![
            SentimentThumbsAverage {
                sentiment: Sentiment::Negative,
                average_thumbs_up: 5.338,
            },
            SentimentThumbsAverage {
                sentiment: Sentiment::Positive,
                average_thumbs_up: 1.052,
            },
        ];

        let spec = average_thumbs_up_per_sentiment(&records);

        let chart = spec.chart().unwrap();
        assert_eq!(chart.labels, ["Negative", "Positive"]);
        assert_eq!(chart.series[0].values, [5.34, 1.05]);
    }

    #[test]
    fn monthly_reviews_truncates_ragged_parallel_arrays() {
        let record = MonthlyReviews {
            months: vec!["2021-01".to_string(), "2021-02".to_string()],
            review_counts: vec![10, 20, 30],
        };

        let spec = monthly_reviews(&record);

        let chart = spec.chart().unwrap();
        assert_eq!(chart.labels, ["2021-01", "2021-02"]);
        assert_eq!(chart.series[0].values, [10.0, 20.0]);
        assert_aligned(&spec);
    }
}
