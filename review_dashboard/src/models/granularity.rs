use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The supplied granularity code is not one the analytics service accepts.
#[derive(Debug, Error)]
#[error("invalid granularity `{0}`: expected one of D, W, M")]
pub struct ParseGranularityError(pub String);

/// Period granularity accepted by the time-bucketed resources.
///
/// The service groups periods with pandas-style frequency codes; only the
/// codes below are meaningful to it, so the set is closed here rather than
/// validated per request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    Daily,
    Weekly,
    #[default]
    Monthly,
}

impl Granularity {
    /// Wire code sent as the `freq` query parameter.
    pub fn code(&self) -> &'static str {
        match self {
            Granularity::Daily => "D",
            Granularity::Weekly => "W",
            Granularity::Monthly => "M",
        }
    }
}

impl FromStr for Granularity {
    type Err = ParseGranularityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "D" | "d" | "daily" => Ok(Granularity::Daily),
            "W" | "w" | "weekly" => Ok(Granularity::Weekly),
            "M" | "m" | "monthly" => Ok(Granularity::Monthly),
            other => Err(ParseGranularityError(other.to_string())),
        }
    }
}
