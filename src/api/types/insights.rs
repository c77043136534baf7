//! Insights (page analytics) types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Defines an enum with snake-case wire names, `as_str`, `Display` and `FromStr`.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $label:literal {
            $($variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    other => Err(format!("unknown {}: {}", $label, other)),
                }
            }
        }
    };
}

wire_enum! {
    /// Relative date range of an insights query.
    DatePreset, "date preset" {
        Today => "today",
        Yesterday => "yesterday",
        ThisMonth => "this_month",
        LastMonth => "last_month",
        ThisQuarter => "this_quarter",
        Maximum => "maximum",
        DataMaximum => "data_maximum",
        Last3d => "last_3d",
        Last7d => "last_7d",
        Last14d => "last_14d",
        Last28d => "last_28d",
        Last30d => "last_30d",
        Last90d => "last_90d",
        LastWeekMonSun => "last_week_mon_sun",
        LastWeekSunSat => "last_week_sun_sat",
        LastQuarter => "last_quarter",
        LastYear => "last_year",
        ThisWeekMonToday => "this_week_mon_today",
        ThisWeekSunToday => "this_week_sun_today",
        ThisYear => "this_year",
    }
}

wire_enum! {
    /// Aggregation period of an insights series.
    InsightsPeriod, "insights period" {
        Day => "day",
        Week => "week",
        Days28 => "days_28",
        Month => "month",
        Lifetime => "lifetime",
        TotalOverRange => "total_over_range",
    }
}

/// Optional parameters for metric-list insights queries.
///
/// `None` fields fall back to the operation's defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InsightsParams {
    pub date_preset: Option<DatePreset>,
    pub period: Option<InsightsPeriod>,
    /// Comma-separated metric names, passed through unchanged
    pub metric: Option<String>,
}

impl InsightsParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_date_preset(mut self, date_preset: DatePreset) -> Self {
        self.date_preset = Some(date_preset);
        self
    }

    pub fn with_period(mut self, period: InsightsPeriod) -> Self {
        self.period = Some(period);
        self
    }

    pub fn with_metric(mut self, metric: impl Into<String>) -> Self {
        self.metric = Some(metric.into());
        self
    }
}

/// One metric series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightMetric {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    /// Kept as text; the API may report periods this crate does not model
    pub period: String,
    pub values: Vec<InsightValue>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightValue {
    /// A number for most metrics, an object for breakdown metrics
    pub value: Value,
    #[serde(default)]
    pub end_time: Option<String>,
}
