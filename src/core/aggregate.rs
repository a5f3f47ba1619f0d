use crate::core::models::entry::WaterLogEntry;
use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Total intake for one calendar day. History rows serialize as
/// `{"_id": "YYYY-MM-DD", "total": n}`.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct DailyTotal {
    #[serde(rename = "_id")]
    pub day: String,
    #[serde(rename = "total")]
    pub total_ml: i64,
}

/// UTC bounds of the calendar day containing `now` in the given offset,
/// as the half-open interval [local midnight, local midnight + 1 day).
pub fn today_window(now: DateTime<Utc>, offset: FixedOffset) -> (DateTime<Utc>, DateTime<Utc>) {
    let local_day = now.with_timezone(&offset).date_naive();
    let local_midnight = local_day.and_time(NaiveTime::MIN);
    let start_naive = local_midnight - Duration::seconds(offset.local_minus_utc() as i64);
    let start = DateTime::<Utc>::from_naive_utc_and_offset(start_naive, Utc);
    (start, start + Duration::days(1))
}

/// Order-independent sum of entry amounts. Empty input sums to 0.
pub fn sum_amounts(entries: &[WaterLogEntry]) -> i64 {
    entries.iter().map(|e| e.amount_ml).sum()
}

/// Groups entries by the calendar day (in the given offset) of their
/// timestamp, summing amounts per day. Result is sorted by day
/// descending, most recent first. Day labels derive from the same offset
/// as [`today_window`], so the two agree at midnight boundaries.
pub fn group_by_day(entries: &[WaterLogEntry], offset: FixedOffset) -> Vec<DailyTotal> {
    let mut totals: BTreeMap<NaiveDate, i64> = BTreeMap::new();
    for entry in entries {
        let day = entry.logged_at.with_timezone(&offset).date_naive();
        *totals.entry(day).or_insert(0) += entry.amount_ml;
    }
    totals
        .into_iter()
        .rev()
        .map(|(day, total_ml)| DailyTotal {
            day: day.format("%Y-%m-%d").to_string(),
            total_ml,
        })
        .collect()
}
